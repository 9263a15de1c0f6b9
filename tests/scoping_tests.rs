//! Shared (in-place) scoping against copy-on-bind scoping.

use lamb::config::{Options, Scoping};
use lamb::core::Expression;
use lamb::env::{TypeEnv, ValueEnv};
use lamb::interpreter::{Interpreter, Value};
use lamb::types::{Infer, Type};

fn int_to_int() -> Type {
    Type::arrow(Type::Int, Type::Int)
}

/// \a: Int. \b: Int. a
fn constant() -> Expression {
    Expression::abs(
        "a",
        Type::Int,
        Expression::abs("b", Type::Int, Expression::var("a")),
    )
}

/// (\k1: Int -> Int. (\k2: Int -> Int. k1 0) (constant 2)) (constant 1)
///
/// `k1` is built first and should remember `a = 1`. Building `k2`
/// afterwards binds `a = 2`.
fn two_partial_applications() -> Expression {
    let body = Expression::app(
        Expression::abs(
            "k2",
            int_to_int(),
            Expression::app(Expression::var("k1"), Expression::int(0)),
        ),
        Expression::app(constant(), Expression::int(2)),
    );
    Expression::app(
        Expression::abs("k1", int_to_int(), body),
        Expression::app(constant(), Expression::int(1)),
    )
}

fn run(scoping: Scoping, env: &ValueEnv, expr: &Expression) -> Value {
    Interpreter::new(Options::default().with_scoping(scoping))
        .eval(env, expr)
        .unwrap()
}

#[test]
fn sample_is_well_typed_under_both_disciplines() {
    let expr = two_partial_applications();
    for scoping in [Scoping::Shared, Scoping::CopyOnBind] {
        let checker = Infer::new(Options::default().with_scoping(scoping));
        assert_eq!(checker.infer_expr(&TypeEnv::empty(), &expr), Ok(Type::Int));
    }
}

#[test]
fn shared_scoping_overwrites_captured_binding() {
    // Every closure shares the root environment, so the second partial
    // application clobbers the `a` the first one captured.
    let env = ValueEnv::empty();
    let result = run(Scoping::Shared, &env, &two_partial_applications());
    assert_eq!(result.as_int(), Some(2));
    assert_eq!(env.lookup("a").and_then(|v| v.as_int()), Some(2));
    assert_eq!(env.names(), vec!["a", "b", "k1", "k2"]);
}

#[test]
fn copy_on_bind_scoping_is_lexical() {
    let env = ValueEnv::empty();
    let result = run(Scoping::CopyOnBind, &env, &two_partial_applications());
    assert_eq!(result.as_int(), Some(1));
    assert!(env.is_empty());
}

#[test]
fn shared_closure_sees_bindings_made_after_capture() {
    let env = ValueEnv::empty();
    let closure = run(
        Scoping::Shared,
        &env,
        &Expression::abs("u", Type::Int, Expression::var("later")),
    );
    env.bind("later", Value::Int(99));

    let interpreter = Interpreter::default();
    let result = interpreter.apply(closure, Value::Int(0)).unwrap();
    assert_eq!(result.as_int(), Some(99));
}

#[test]
fn repeated_calls_share_one_parameter_slot() {
    let env = ValueEnv::empty();
    let interpreter = Interpreter::default();
    let identity = interpreter
        .eval(&env, &Expression::abs("a", Type::Int, Expression::var("a")))
        .unwrap();

    let first = interpreter.apply(identity.clone(), Value::Int(1)).unwrap();
    assert_eq!(first.as_int(), Some(1));
    assert_eq!(env.lookup("a").and_then(|v| v.as_int()), Some(1));

    let second = interpreter.apply(identity, Value::Int(2)).unwrap();
    assert_eq!(second.as_int(), Some(2));
    assert_eq!(env.lookup("a").and_then(|v| v.as_int()), Some(2));
}

#[test]
fn lexical_preset_combines_copy_on_bind_and_strict_lookup() {
    let interpreter = Interpreter::new(Options::lexical());
    let env = ValueEnv::empty();

    let expr = Expression::app(
        Expression::abs("a", Type::Int, Expression::var("a")),
        Expression::int(4),
    );
    assert_eq!(interpreter.eval(&env, &expr).unwrap().as_int(), Some(4));
    assert!(interpreter.eval(&env, &Expression::var("a")).is_err());
}
