//! L-value resolution for indexed assignment.

use crate::context::Context;
use crate::error::{EvalError, EvalResult};
use crate::expr::{Expr, IndexExpr};

/// Walk to the variable that roots the index expression `top`.
///
/// `item` is `top.left`. The variable must be bound to a non-scalar. Returns
/// the variable's name; the caller borrows the binding itself once the
/// index list has been evaluated.
pub fn lvalue_of<'a>(context: &Context, item: &'a Expr, top: &IndexExpr) -> EvalResult<&'a str> {
    match item {
        Expr::Variable(name) => {
            let lvalue = context.get(name)?;
            if lvalue.rank() == 0 {
                return Err(EvalError::scalar_not_indexable(item.to_string()));
            }
            Ok(name.as_str())
        }
        Expr::Index(_) => {
            // Old x[i][j]. Show the combined form.
            let fixed = flatten_index_chain(top);
            Err(EvalError::LegacyChainedIndex {
                target: top.to_string(),
                suggestion: fixed.to_string(),
            })
        }
        Expr::Literal(_) | Expr::Assign { .. } => {
            Err(EvalError::not_indexable(item.to_string()))
        }
    }
}

/// Rewrite `x[a][b; c]` as `x[a; b; c]`.
///
/// Index lists are concatenated from the root outwards. The result is only
/// used in diagnostics.
pub fn flatten_index_chain(top: &IndexExpr) -> IndexExpr {
    let mut levels = vec![&top.indexes];
    let mut current = top;
    let root = loop {
        match current.left.as_ref() {
            Expr::Index(inner) => {
                levels.push(&inner.indexes);
                current = inner;
            }
            root => break root,
        }
    };
    let indexes = levels
        .into_iter()
        .rev()
        .flat_map(|level| level.iter().cloned())
        .collect();
    IndexExpr::new(root.clone(), indexes)
}
