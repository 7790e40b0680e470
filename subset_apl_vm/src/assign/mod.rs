//! Assignment.
//!
//! Assignment is a little intricate as there are many cases and many validity
//! checks. The left-hand side is never evaluated: it is an l-value, either a
//! variable (rebound wholesale) or a variable indexed by one index list
//! (written in place).
//!
//! - `lvalue`: finds the variable rooting an index expression
//! - `indexes`: evaluates the index list to integers
//! - `indexed`: walks the target's shape and writes the addressed region

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod indexed;
mod indexes;
mod lvalue;

pub use indexed::indexed_assignment;
pub use indexes::indexes_of;
pub use lvalue::{flatten_index_chain, lvalue_of};

pub(crate) use indexed::axis_position;

use crate::assign_trace;
use crate::context::Context;
use crate::error::{EvalError, EvalResult};
use crate::expr::Expr;
use crate::value::Value;

/// Evaluate `left = right`.
///
/// The right-hand side is evaluated first and unwrapped; the result is the
/// assigned value wrapped as [`Value::Assignment`].
pub fn perform_assignment(left: &Expr, right: &Expr, context: &mut Context) -> EvalResult<Value> {
    let rhs = right.eval(context)?.into_inner();
    assignment(context, left, right, rhs)
}

/// Assign an already evaluated right-hand side to `left`.
///
/// `right` is used for diagnostics only.
pub fn assignment(
    context: &mut Context,
    left: &Expr,
    right: &Expr,
    rhs: Value,
) -> EvalResult<Value> {
    match left {
        Expr::Variable(name) => {
            assign_trace!("rebind {} (rank {})", name, rhs.rank());
            context.assign(name, rhs.clone());
            Ok(Value::assignment(rhs))
        }
        Expr::Index(lhs) => indexed_assignment(context, lhs, right, rhs),
        Expr::Literal(_) | Expr::Assign { .. } => Err(EvalError::InvalidAssignmentTarget {
            lhs: left.to_string(),
            rhs: right.to_string(),
        }),
    }
}
