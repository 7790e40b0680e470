//! Index list evaluation.

use crate::context::Context;
use crate::error::{EvalError, EvalResult};
use crate::expr::IndexExpr;

/// Evaluate the index list of `item`, left to right.
///
/// Every index must be an integer scalar. Range checks happen later, against
/// the target's shape.
pub fn indexes_of(context: &mut Context, item: &IndexExpr) -> EvalResult<Vec<i64>> {
    item.indexes
        .iter()
        .map(|x| {
            x.eval(context)?
                .as_int()
                .ok_or_else(|| EvalError::non_integer_index(x.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::Expr;
    use crate::value::{Number, Value};

    #[test]
    fn test_integers_pass_through_unchecked() {
        let mut ctx = Context::default();
        let ix = IndexExpr::new(
            Expr::var("x"),
            vec![Expr::int(-4), Expr::int(2), Expr::int(2), Expr::int(1000)],
        );
        assert_eq!(indexes_of(&mut ctx, &ix).unwrap(), vec![-4, 2, 2, 1000]);
    }

    #[test]
    fn test_first_non_integer_is_reported() {
        let mut ctx = Context::default();
        let half = Number::rational(1, 2).unwrap();
        let ix = IndexExpr::new(
            Expr::var("x"),
            vec![
                Expr::int(1),
                Expr::literal(half),
                Expr::literal(Value::int_vector(&[1, 2])),
            ],
        );
        assert_eq!(
            indexes_of(&mut ctx, &ix).unwrap_err(),
            EvalError::NonIntegerIndex("1/2".to_string())
        );
    }

    #[test]
    fn test_indexes_evaluated_in_context() {
        let mut ctx = Context::default();
        ctx.assign("i", Value::int(3));
        let ix = IndexExpr::new(
            Expr::var("x"),
            vec![Expr::var("i"), Expr::assign(Expr::var("j"), Expr::int(2))],
        );
        assert_eq!(indexes_of(&mut ctx, &ix).unwrap(), vec![3, 2]);
        assert_eq!(ctx.get("j").unwrap(), &Value::int(2));
    }

    #[test]
    fn test_float_index_rejected() {
        let mut ctx = Context::default();
        let ix = IndexExpr::new(Expr::var("x"), vec![Expr::literal(Number::Float(1.0))]);
        assert!(matches!(
            indexes_of(&mut ctx, &ix),
            Err(EvalError::NonIntegerIndex(_))
        ));
    }
}
