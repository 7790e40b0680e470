//! SubsetAplVM assignment subsystem
//!
//! This crate implements assignment for an APL-style array language:
//! rebinding a variable, and writing into an indexed region of a vector or
//! matrix bound to a variable. It includes:
//!
//! - `Value` / `Number` / `Matrix` value model with shape decomposition
//! - `Expr` expression nodes (literal, variable, index, assignment)
//! - `Context` holding bindings and the session `Config` (index origin)
//! - The indexed-assignment engine and its L-value resolver
//! - `EvalError` diagnostics for every rejected assignment
//!
//! Set `SAPL_ASSIGN_DEBUG=1` to trace assignments on stderr (debug builds).

// Prevent accidental debug output in library code; tracing goes through `debug`.
#![deny(clippy::print_stderr)]

pub mod assign;
pub mod config;
pub mod context;
pub mod debug;
pub mod error;
pub mod expr;
pub mod value;

/// Prelude module for convenient imports
///
/// # Example
/// ```
/// use subset_apl_vm::prelude::*;
/// ```
pub mod prelude {
    pub use super::assign::perform_assignment;
    pub use super::config::Config;
    pub use super::context::Context;
    pub use super::error::{EvalError, EvalResult};
    pub use super::expr::{Expr, IndexExpr};
    pub use super::value::{Matrix, Number, Value};
}

pub use prelude::*;
