//! Rank-N matrices stored as flat row-major data plus a shape vector.

use serde::Serialize;

use super::shape::checked_element_count;
use super::Value;
use crate::error::{EvalError, EvalResult};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Matrix {
    shape: Vec<usize>,
    data: Vec<Value>,
}

impl Matrix {
    /// Create a matrix, checking that `data.len()` equals the shape product.
    ///
    /// A shape whose product overflows `usize` is malformed. A zero-length
    /// axis makes the product zero whatever the other extents are.
    pub fn new(shape: Vec<usize>, data: Vec<Value>) -> EvalResult<Self> {
        if checked_element_count(&shape) != Some(data.len()) {
            return Err(EvalError::MalformedMatrix {
                shape,
                got: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    /// Integer matrix from a shape and row-major integers.
    pub fn from_ints(shape: Vec<usize>, data: &[i64]) -> EvalResult<Self> {
        Self::new(shape, data.iter().map(|&v| Value::int(v)).collect())
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn data(&self) -> &[Value] {
        &self.data
    }

    /// Flat data for in-place writes. The length never changes.
    pub fn data_mut(&mut self) -> &mut [Value] {
        &mut self.data
    }

    pub fn rank(&self) -> usize {
        self.shape.len()
    }
}
