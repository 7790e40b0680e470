//! Indexed assignment: `x[i; j; ...] = rhs`.
//!
//! The target's shape is walked one axis per supplied index, accumulating a
//! row-major offset. Fewer indices than the target's rank address a whole
//! trailing block (a row of a matrix, a plane of a rank-3 array); as many
//! indices as the rank address one element. The right-hand side must have
//! the shape of the addressed region, except that any one-element value may
//! fill a one-element region.

use crate::assign_trace;
use crate::context::Context;
use crate::error::{EvalError, EvalResult};
use crate::expr::{Expr, IndexExpr};
use crate::value::{element_count, same_shape, Value};

use super::indexes::indexes_of;
use super::lvalue::lvalue_of;

/// Zero-based position of `index` on an axis of `size` elements, or `None`
/// if it lies outside `origin ..< size + origin`.
pub(crate) fn axis_position(index: i64, origin: i64, size: usize) -> Option<usize> {
    let pos = usize::try_from(index.checked_sub(origin)?).ok()?;
    (pos < size).then_some(pos)
}

/// Assign `rhs` to the region of a variable addressed by `lhs`.
///
/// `rhs_expr` is for diagnostics only. Nothing is written unless every
/// index and the right-hand side's shape have been validated.
pub fn indexed_assignment(
    context: &mut Context,
    lhs: &IndexExpr,
    rhs_expr: &Expr,
    rhs: Value,
) -> EvalResult<Value> {
    let name = lvalue_of(context, &lhs.left, lhs)?;
    let indexes = indexes_of(context, lhs)?;
    let origin = context.config().origin();

    // Index expressions may have rebound the variable; borrow it only now.
    let target = context
        .lookup_mut(name)
        .ok_or_else(|| EvalError::undefined_variable(name))?;
    let (slice, shape) = target
        .decompose_target_mut()
        .ok_or_else(|| EvalError::not_indexable(lhs.left.to_string()))?;

    assign_trace!(
        "{} = {} (target shape {:?}, indexes {:?}, origin {})",
        lhs,
        rhs_expr,
        shape,
        indexes,
        origin
    );

    let mut offset = 0;
    for (i, &size_i) in shape.iter().enumerate() {
        let Some(&index) = indexes.get(i) else {
            return Err(EvalError::RankError {
                rhs: rhs.to_string(),
                target: lhs.to_string(),
            });
        };
        let pos = axis_position(index, origin, size_i).ok_or_else(|| {
            EvalError::IndexOutOfRange {
                target: lhs.left.to_string(),
                axis: i,
                index,
                size: size_i,
                origin,
            }
        })?;
        let size = element_count(&shape[i + 1..]);
        offset += pos * size;
        // Either skip into this block, or this was the last index and the
        // block gets assigned.
        if i < indexes.len() - 1 {
            continue;
        }

        let Some((rhs_data, rhs_shape)) = rhs.decompose(false) else {
            return Err(EvalError::not_indexable(rhs_expr.to_string()));
        };
        if !same_shape(&shape[i + 1..], &rhs_shape) {
            return Err(EvalError::ShapeMismatch {
                rhs: rhs.to_string(),
                target: lhs.to_string(),
            });
        }
        if element_count(&rhs_shape) == 1 {
            assign_trace!("write element at offset {}", offset);
            slice[offset] = rhs_data[0].clone();
        } else {
            assign_trace!("write block {}..{}", offset, offset + size);
            slice[offset..offset + size].clone_from_slice(rhs_data);
        }
        return Ok(Value::assignment(rhs));
    }

    Err(EvalError::cannot_assign_to_element(lhs.left.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::value::Matrix;
    use pretty_assertions::assert_eq;

    fn ctx_with(origin: i64, name: &str, value: Value) -> Context {
        let mut ctx = Context::new(Config::with_origin(origin).unwrap());
        ctx.assign(name, value);
        ctx
    }

    fn index(name: &str, idx: &[i64]) -> IndexExpr {
        IndexExpr::new(Expr::var(name), idx.iter().map(|&i| Expr::int(i)).collect())
    }

    fn run(ctx: &mut Context, lhs: &IndexExpr, rhs: Value) -> EvalResult<Value> {
        let rhs_expr = Expr::literal(rhs.clone());
        indexed_assignment(ctx, lhs, &rhs_expr, rhs)
    }

    // ── axis_position ─────────────────────────────────────────────────────────

    #[test]
    fn test_axis_position_origin_one() {
        assert_eq!(axis_position(1, 1, 3), Some(0));
        assert_eq!(axis_position(3, 1, 3), Some(2));
        assert_eq!(axis_position(0, 1, 3), None);
        assert_eq!(axis_position(4, 1, 3), None);
        assert_eq!(axis_position(i64::MIN, 1, 3), None);
    }

    #[test]
    fn test_axis_position_origin_zero() {
        assert_eq!(axis_position(0, 0, 3), Some(0));
        assert_eq!(axis_position(2, 0, 3), Some(2));
        assert_eq!(axis_position(-1, 0, 3), None);
        assert_eq!(axis_position(3, 0, 3), None);
        assert_eq!(axis_position(0, 0, 0), None);
    }

    // ── writes ────────────────────────────────────────────────────────────────

    #[test]
    fn test_vector_element_write() {
        let mut ctx = ctx_with(1, "v", Value::int_vector(&[1, 2, 3]));
        let result = run(&mut ctx, &index("v", &[2]), Value::int(9)).unwrap();
        assert_eq!(result, Value::assignment(Value::int(9)));
        assert_eq!(ctx.get("v").unwrap(), &Value::int_vector(&[1, 9, 3]));
    }

    #[test]
    fn test_rank3_plane_write() {
        let t = Matrix::from_ints(vec![2, 2, 2], &[0; 8]).unwrap();
        let mut ctx = ctx_with(0, "t", Value::Matrix(t));
        let plane = Matrix::from_ints(vec![2, 2], &[1, 2, 3, 4]).unwrap();
        run(&mut ctx, &index("t", &[1]), Value::Matrix(plane)).unwrap();
        let expected = Matrix::from_ints(vec![2, 2, 2], &[0, 0, 0, 0, 1, 2, 3, 4]).unwrap();
        assert_eq!(ctx.get("t").unwrap(), &Value::Matrix(expected));
    }

    #[test]
    fn test_one_element_vector_fills_element() {
        let mut ctx = ctx_with(1, "v", Value::int_vector(&[1, 2, 3]));
        run(&mut ctx, &index("v", &[3]), Value::int_vector(&[7])).unwrap();
        assert_eq!(ctx.get("v").unwrap(), &Value::int_vector(&[1, 2, 7]));
    }

    // ── failures ──────────────────────────────────────────────────────────────

    #[test]
    fn test_zero_indexes_is_rank_error() {
        let mut ctx = ctx_with(1, "v", Value::int_vector(&[1, 2, 3]));
        let err = run(&mut ctx, &index("v", &[]), Value::int(1)).unwrap_err();
        assert_eq!(
            err,
            EvalError::RankError {
                rhs: "1".to_string(),
                target: "v[]".to_string()
            }
        );
    }

    #[test]
    fn test_out_of_range_names_axis() {
        let m = Matrix::from_ints(vec![2, 3], &[0; 6]).unwrap();
        let mut ctx = ctx_with(1, "m", Value::Matrix(m));
        let err = run(&mut ctx, &index("m", &[1, 4]), Value::int(1)).unwrap_err();
        assert_eq!(
            err,
            EvalError::IndexOutOfRange {
                target: "m".to_string(),
                axis: 1,
                index: 4,
                size: 3,
                origin: 1
            }
        );
    }

    #[test]
    fn test_failure_leaves_target_untouched() {
        let m = Matrix::from_ints(vec![2, 3], &[1, 2, 3, 4, 5, 6]).unwrap();
        let mut ctx = ctx_with(1, "m", Value::Matrix(m.clone()));
        assert!(run(&mut ctx, &index("m", &[1]), Value::int_vector(&[7, 8])).is_err());
        assert!(run(&mut ctx, &index("m", &[1]), Value::int(7)).is_err());
        assert!(run(&mut ctx, &index("m", &[3, 1]), Value::int(7)).is_err());
        assert_eq!(ctx.get("m").unwrap(), &Value::Matrix(m));
    }

    #[test]
    fn test_huge_zero_extent_targets_fail_cleanly() {
        let big = 1usize << 32;
        let m = Matrix::new(vec![0, big, big], Vec::new()).unwrap();
        let mut ctx = ctx_with(1, "m", Value::Matrix(m));
        assert!(matches!(
            run(&mut ctx, &index("m", &[1]), Value::int(0)),
            Err(EvalError::IndexOutOfRange { axis: 0, size: 0, .. })
        ));

        let t = Matrix::new(vec![big, big, 0], Vec::new()).unwrap();
        let mut ctx = ctx_with(1, "t", Value::Matrix(t));
        assert!(matches!(
            run(&mut ctx, &index("t", &[1]), Value::int(0)),
            Err(EvalError::ShapeMismatch { .. })
        ));
        assert!(matches!(
            run(&mut ctx, &index("t", &[1, 1]), Value::int(0)),
            Err(EvalError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_zero_length_axis_rejects_every_index() {
        let mut ctx = ctx_with(1, "e", Value::Vector(Vec::new()));
        assert!(matches!(
            run(&mut ctx, &index("e", &[1]), Value::int(1)),
            Err(EvalError::IndexOutOfRange { size: 0, .. })
        ));
    }
}
