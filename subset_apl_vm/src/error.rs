//! Evaluation error types
//!
//! Every rejected assignment surfaces as one `EvalError` variant carrying the
//! program text of the offending expression. Errors abort the enclosing
//! statement; the interpreter shell reports them and resumes at the next one.

use thiserror::Error;

/// Evaluation error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    // ========== Assignment errors ==========
    /// Left-hand side is neither a variable nor an index expression
    #[error("cannot assign {lhs} to {rhs}")]
    InvalidAssignmentTarget {
        /// Program text of the left operand
        lhs: String,
        /// Program text of the right operand
        rhs: String,
    },

    /// Index chain root is neither a variable nor an index expression
    #[error("cannot index {0} in assignment")]
    NotIndexable(String),

    /// Resolved root is a scalar
    #[error("cannot index {0} (rank 0) in assignment")]
    ScalarNotIndexable(String),

    /// Nested `x[i][j]` used as a target; `suggestion` is the combined form
    #[error("cannot assign to {target}; use {suggestion}")]
    LegacyChainedIndex {
        /// Program text of the offending target
        target: String,
        /// Program text of the single combined index expression
        suggestion: String,
    },

    /// Index sub-expression did not evaluate to an integer
    #[error("cannot index by {0} in assignment")]
    NonIntegerIndex(String),

    /// No index supplied for a non-scalar target
    #[error("rank error assigning {rhs} to {target}")]
    RankError {
        /// Display form of the right-hand-side value
        rhs: String,
        /// Program text of the target
        target: String,
    },

    /// Index outside `origin ..< size + origin` for one axis
    #[error("index {index} out of range for axis {axis} of {target} (size {size}, origin {origin})")]
    IndexOutOfRange {
        /// Program text of the indexed expression
        target: String,
        /// Zero-based axis number
        axis: usize,
        /// Supplied index, before origin adjustment
        index: i64,
        /// Dimension size of the axis
        size: usize,
        /// Index origin in effect
        origin: i64,
    },

    /// Right-hand side shape differs from the addressed region
    #[error("data size/shape mismatch assigning {rhs} to {target}")]
    ShapeMismatch {
        /// Display form of the right-hand-side value
        rhs: String,
        /// Program text of the target
        target: String,
    },

    /// More indices than the target's rank
    #[error("cannot assign to element of {0}")]
    CannotAssignToElement(String),

    // ========== General evaluation errors ==========
    /// Variable reference with no binding
    #[error("undefined variable {0}")]
    UndefinedVariable(String),

    /// Indexed read with more indices than the value's rank
    #[error("rank error indexing {target}: {got} indices for rank {rank}")]
    IndexRankMismatch {
        /// Program text of the indexed expression
        target: String,
        /// Rank of the indexed value
        rank: usize,
        /// Number of indices supplied
        got: usize,
    },

    /// Matrix data length does not equal the product of its shape, or the
    /// product overflows
    #[error("malformed matrix: shape {shape:?} does not hold {got} elements")]
    MalformedMatrix {
        /// Requested shape
        shape: Vec<usize>,
        /// Supplied data length
        got: usize,
    },

    /// Configuration could not be parsed or holds an unsupported value
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl EvalError {
    /// Create a not-indexable error
    pub fn not_indexable<S: Into<String>>(expr: S) -> Self {
        EvalError::NotIndexable(expr.into())
    }

    /// Create a scalar-not-indexable error
    pub fn scalar_not_indexable<S: Into<String>>(expr: S) -> Self {
        EvalError::ScalarNotIndexable(expr.into())
    }

    /// Create a non-integer-index error
    pub fn non_integer_index<S: Into<String>>(expr: S) -> Self {
        EvalError::NonIntegerIndex(expr.into())
    }

    /// Create a cannot-assign-to-element error
    pub fn cannot_assign_to_element<S: Into<String>>(expr: S) -> Self {
        EvalError::CannotAssignToElement(expr.into())
    }

    /// Create an undefined-variable error
    pub fn undefined_variable<S: Into<String>>(name: S) -> Self {
        EvalError::UndefinedVariable(name.into())
    }

    /// Create an invalid-configuration error
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        EvalError::InvalidConfig(msg.into())
    }

    /// True for the errors produced while validating an assignment target.
    pub fn is_assignment_error(&self) -> bool {
        matches!(
            self,
            EvalError::InvalidAssignmentTarget { .. }
                | EvalError::NotIndexable(_)
                | EvalError::ScalarNotIndexable(_)
                | EvalError::LegacyChainedIndex { .. }
                | EvalError::NonIntegerIndex(_)
                | EvalError::RankError { .. }
                | EvalError::IndexOutOfRange { .. }
                | EvalError::ShapeMismatch { .. }
                | EvalError::CannotAssignToElement(_)
        )
    }
}

/// Result type alias for evaluation and assignment
pub type EvalResult<T> = Result<T, EvalError>;
