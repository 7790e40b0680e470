//! Shape vectors and value decomposition.
//!
//! For comparison purposes an empty shape is the scalar shape `[1]`: an
//! exhausted index walk addresses a single element, which a one-element
//! right-hand side may fill.

use super::Value;

/// The assignment shape of a scalar.
pub const SCALAR_SHAPE: [usize; 1] = [1];

/// Number of elements described by `shape`; the empty shape holds one.
///
/// Any zero-length axis makes the count zero, however large the other axes.
/// A product too large for `usize` saturates; matrices with such shapes are
/// rejected by [`checked_element_count`] when they are built.
pub fn element_count(shape: &[usize]) -> usize {
    if shape.contains(&0) {
        return 0;
    }
    shape.iter().fold(1, |acc: usize, &dim| acc.saturating_mul(dim))
}

/// Number of elements described by `shape`, or `None` if the product does
/// not fit in `usize`.
pub fn checked_element_count(shape: &[usize]) -> Option<usize> {
    if shape.contains(&0) {
        return Some(0);
    }
    shape.iter().try_fold(1, |acc: usize, &dim| acc.checked_mul(dim))
}

/// Report whether two assignment shapes are equivalent.
pub fn same_shape(a: &[usize], b: &[usize]) -> bool {
    let a = if a.is_empty() { &SCALAR_SHAPE[..] } else { a };
    let b = if b.is_empty() { &SCALAR_SHAPE[..] } else { b };
    a == b
}

impl Value {
    /// Flat data and shape of this value.
    ///
    /// Vectors and matrices decompose into their elements. A scalar yields
    /// `None` when `must_be_target` is set (it cannot be written into), and a
    /// one-element view of itself with shape `[1]` otherwise.
    pub fn decompose(&self, must_be_target: bool) -> Option<(&[Value], Vec<usize>)> {
        match self {
            Value::Vector(elems) => Some((elems.as_slice(), vec![elems.len()])),
            Value::Matrix(m) => Some((m.data(), m.shape().to_vec())),
            Value::Assignment(inner) => inner.decompose(must_be_target),
            Value::Scalar(_) => {
                if must_be_target {
                    None
                } else {
                    Some((std::slice::from_ref(self), SCALAR_SHAPE.to_vec()))
                }
            }
        }
    }

    /// Mutable flat data and shape of an assignment target.
    ///
    /// Scalars are never targets, so they yield `None`.
    pub fn decompose_target_mut(&mut self) -> Option<(&mut [Value], Vec<usize>)> {
        match self {
            Value::Vector(elems) => {
                let shape = vec![elems.len()];
                Some((elems.as_mut_slice(), shape))
            }
            Value::Matrix(m) => {
                let shape = m.shape().to_vec();
                Some((m.data_mut(), shape))
            }
            Value::Assignment(inner) => inner.decompose_target_mut(),
            Value::Scalar(_) => None,
        }
    }
}
