//! Expression nodes consumed by assignment.
//!
//! Only the node kinds assignment needs are modelled: literals, variable
//! references, index expressions `x[i; j]` and assignments `lhs = rhs`.
//! `Display` renders the program text used in diagnostics.

use std::fmt;

use crate::assign::{axis_position, indexes_of, perform_assignment};
use crate::context::Context;
use crate::error::{EvalError, EvalResult};
use crate::value::{element_count, Matrix, Value};

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Constant value
    Literal(Value),
    /// Reference to a binding
    Variable(String),
    /// `left[i; j; ...]`
    Index(IndexExpr),
    /// `left = right`
    Assign { left: Box<Expr>, right: Box<Expr> },
}

/// An indexed expression: a left operand and an ordered index list.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexExpr {
    pub left: Box<Expr>,
    pub indexes: Vec<Expr>,
}

impl IndexExpr {
    pub fn new(left: Expr, indexes: Vec<Expr>) -> Self {
        Self {
            left: Box::new(left),
            indexes,
        }
    }
}

impl Expr {
    pub fn int(v: i64) -> Self {
        Expr::Literal(Value::int(v))
    }

    pub fn literal(value: impl Into<Value>) -> Self {
        Expr::Literal(value.into())
    }

    pub fn var(name: &str) -> Self {
        Expr::Variable(name.to_string())
    }

    pub fn index(left: Expr, indexes: Vec<Expr>) -> Self {
        Expr::Index(IndexExpr::new(left, indexes))
    }

    pub fn assign(left: Expr, right: Expr) -> Self {
        Expr::Assign {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Evaluate against `context`. Assignments inside the expression update
    /// the context as they are reached.
    pub fn eval(&self, context: &mut Context) -> EvalResult<Value> {
        match self {
            Expr::Literal(v) => Ok(v.clone()),
            Expr::Variable(name) => context.get(name).cloned(),
            Expr::Index(ix) => eval_index(ix, context),
            Expr::Assign { left, right } => perform_assignment(left, right, context),
        }
    }
}

/// Read the element or trailing sub-block addressed by `ix`.
fn eval_index(ix: &IndexExpr, context: &mut Context) -> EvalResult<Value> {
    let base = ix.left.eval(context)?.into_inner();
    let indexes = indexes_of(context, ix)?;
    let origin = context.config().origin();

    let Some((data, shape)) = base.decompose(true) else {
        return Err(EvalError::scalar_not_indexable(ix.left.to_string()));
    };
    if indexes.len() > shape.len() {
        return Err(EvalError::IndexRankMismatch {
            target: ix.to_string(),
            rank: shape.len(),
            got: indexes.len(),
        });
    }

    let mut offset = 0;
    for (axis, &index) in indexes.iter().enumerate() {
        let pos = axis_position(index, origin, shape[axis]).ok_or_else(|| {
            EvalError::IndexOutOfRange {
                target: ix.left.to_string(),
                axis,
                index,
                size: shape[axis],
                origin,
            }
        })?;
        offset += pos * element_count(&shape[axis + 1..]);
    }

    let rest = &shape[indexes.len()..];
    let block = &data[offset..offset + element_count(rest)];
    match rest.len() {
        0 => Ok(block[0].clone()),
        1 => Ok(Value::Vector(block.to_vec())),
        _ => Ok(Value::Matrix(Matrix::new(rest.to_vec(), block.to_vec())?)),
    }
}

fn needs_parens(expr: &Expr) -> bool {
    match expr {
        Expr::Literal(v) => v.rank() > 0,
        Expr::Assign { .. } => true,
        Expr::Variable(_) | Expr::Index(_) => false,
    }
}

impl fmt::Display for IndexExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if needs_parens(&self.left) {
            write!(f, "({})[", self.left)?;
        } else {
            write!(f, "{}[", self.left)?;
        }
        for (i, index) in self.indexes.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", index)?;
        }
        write!(f, "]")
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(v) => write!(f, "{}", v),
            Expr::Variable(name) => write!(f, "{}", name),
            Expr::Index(ix) => write!(f, "{}", ix),
            Expr::Assign { left, right } => write!(f, "{} = {}", left, right),
        }
    }
}
