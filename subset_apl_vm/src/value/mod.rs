//! Values of the array language.
//!
//! A value is a scalar, a vector, a rank-N matrix, or the wrapper returned by
//! an assignment. The wrapper lets the shell suppress printing of assignment
//! results; every consumer unwraps it with [`Value::inner`] first.

mod matrix;
mod number;
pub mod shape;

use std::fmt;

use serde::Serialize;

pub use matrix::Matrix;
pub use number::Number;
pub use shape::{checked_element_count, element_count, same_shape, SCALAR_SHAPE};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Value {
    /// Single number, rank 0
    Scalar(Number),
    /// Ordered elements, rank 1
    Vector(Vec<Value>),
    /// Flat row-major data with a shape vector
    Matrix(Matrix),
    /// Result of an assignment, carrying the assigned value unchanged
    Assignment(Box<Value>),
}

impl Value {
    pub fn int(v: i64) -> Self {
        Value::Scalar(Number::Int(v))
    }

    pub fn int_vector(values: &[i64]) -> Self {
        Value::Vector(values.iter().map(|&v| Value::int(v)).collect())
    }

    /// Wrap a value as an assignment result.
    pub fn assignment(value: Value) -> Self {
        Value::Assignment(Box::new(value))
    }

    /// The underlying value, with any assignment wrapper removed.
    pub fn inner(&self) -> &Value {
        match self {
            Value::Assignment(v) => v.inner(),
            other => other,
        }
    }

    /// Owned form of [`Value::inner`].
    pub fn into_inner(self) -> Value {
        match self {
            Value::Assignment(v) => v.into_inner(),
            other => other,
        }
    }

    pub fn is_assignment(&self) -> bool {
        matches!(self, Value::Assignment(_))
    }

    /// Number of dimensions: 0 for scalars, 1 for vectors.
    pub fn rank(&self) -> usize {
        match self {
            Value::Scalar(_) => 0,
            Value::Vector(_) => 1,
            Value::Matrix(m) => m.rank(),
            Value::Assignment(v) => v.rank(),
        }
    }

    /// Machine integer held by a scalar, looking through the wrapper.
    pub fn as_int(&self) -> Option<i64> {
        match self.inner() {
            Value::Scalar(n) => n.as_int(),
            _ => None,
        }
    }

    /// Shape vector; empty for scalars.
    pub fn shape(&self) -> Vec<usize> {
        match self {
            Value::Scalar(_) => Vec::new(),
            Value::Vector(elems) => vec![elems.len()],
            Value::Matrix(m) => m.shape().to_vec(),
            Value::Assignment(v) => v.shape(),
        }
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Scalar(n)
    }
}

impl From<Matrix> for Value {
    fn from(m: Matrix) -> Self {
        Value::Matrix(m)
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Scalar(n) => write!(f, "{}", n),
            Value::Vector(elems) => write_joined(f, elems),
            Value::Matrix(m) => {
                // One row (last axis) per line.
                let row_len = m.shape().last().copied().unwrap_or(1).max(1);
                for (i, row) in m.data().chunks(row_len).enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write_joined(f, row)?;
                }
                Ok(())
            }
            Value::Assignment(v) => write!(f, "{}", v),
        }
    }
}
