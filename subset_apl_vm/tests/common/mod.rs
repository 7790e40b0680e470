//! Shared helpers for integration tests
// Each test target uses a different subset of these helpers.
#![allow(dead_code)]

use subset_apl_vm::*;

/// Context with the given origin and no bindings.
pub fn context(origin: i64) -> Context {
    Context::new(Config::with_origin(origin).expect("valid origin"))
}

/// Context with origin 1 and `m` bound to the 2x3 matrix 1..6.
pub fn matrix_context() -> Context {
    let mut ctx = context(1);
    ctx.assign("m", int_matrix(&[2, 3], &[1, 2, 3, 4, 5, 6]));
    ctx
}

pub fn int_matrix(shape: &[usize], data: &[i64]) -> Value {
    Value::Matrix(Matrix::from_ints(shape.to_vec(), data).expect("well-formed matrix"))
}

/// `name[i; j; ...]` with integer literal indexes.
pub fn indexed(name: &str, indexes: &[i64]) -> Expr {
    Expr::index(
        Expr::var(name),
        indexes.iter().map(|&i| Expr::int(i)).collect(),
    )
}

/// Evaluate `lhs = rhs` where `rhs` is a literal value.
pub fn assign(ctx: &mut Context, lhs: Expr, rhs: Value) -> Result<Value, EvalError> {
    Expr::assign(lhs, Expr::literal(rhs)).eval(ctx)
}

pub fn binding(ctx: &Context, name: &str) -> Value {
    ctx.get(name).expect("variable is bound").clone()
}
