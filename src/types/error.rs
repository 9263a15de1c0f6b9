//! # Type Error
//!
//! The one error kind of the language. It signals that an expression is
//! not well-typed under its context or, during interpretation, that
//! evaluation reached an ill-typed configuration.
//!
//! The error is deliberately opaque. Callers learn *that* checking or
//! evaluation failed, not which rule rejected it: there are no public
//! variants to match on. The `Display` output does name the cause so the
//! error is still useful in logs.
//!
//! ```text
//! type error: unbound variable x
//! type error: expected Int, found Int -> Int
//! type error: cannot apply a value of type Int
//! type error: body of \b is ill-typed
//! ```

use thiserror::Error;

use super::ty::Type;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("type error: {reason}")]
pub struct TypeError {
    reason: Reason,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum Reason {
    #[error("unbound variable {0}")]
    UnboundVariable(String),
    #[error("expected {expected}, found {found}")]
    ArgumentMismatch { expected: Type, found: Type },
    #[error("cannot apply a value of type {0}")]
    NotAFunction(Type),
    #[error("body of \\{0} is ill-typed")]
    IllTypedBody(String),
    #[error("cannot apply {0}")]
    NotCallable(String),
}

impl TypeError {
    pub(crate) fn unbound_variable(name: impl Into<String>) -> Self {
        TypeError {
            reason: Reason::UnboundVariable(name.into()),
        }
    }

    pub(crate) fn argument_mismatch(expected: Type, found: Type) -> Self {
        TypeError {
            reason: Reason::ArgumentMismatch { expected, found },
        }
    }

    pub(crate) fn not_a_function(found: Type) -> Self {
        TypeError {
            reason: Reason::NotAFunction(found),
        }
    }

    pub(crate) fn ill_typed_body(parameter: impl Into<String>) -> Self {
        TypeError {
            reason: Reason::IllTypedBody(parameter.into()),
        }
    }

    /// A runtime value in function position that is neither a closure nor a
    /// native function. `value` is its printed form.
    pub(crate) fn not_callable(value: impl Into<String>) -> Self {
        TypeError {
            reason: Reason::NotCallable(value.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbound_variable_display() {
        let err = TypeError::unbound_variable("x");
        assert_eq!(err.to_string(), "type error: unbound variable x");
    }

    #[test]
    fn test_argument_mismatch_display() {
        let err = TypeError::argument_mismatch(Type::arrow(Type::Int, Type::Int), Type::Int);
        assert_eq!(err.to_string(), "type error: expected Int -> Int, found Int");
    }

    #[test]
    fn test_ill_typed_body_display() {
        let err = TypeError::ill_typed_body("b");
        assert_eq!(err.to_string(), r"type error: body of \b is ill-typed");
    }

    #[test]
    fn test_is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&TypeError::not_a_function(Type::Int));
    }
}
