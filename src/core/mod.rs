//! # Core AST
//!
//! The abstract syntax shared by the type checker and the interpreter.
//! There is no concrete syntax: hosts build expressions directly, usually
//! through the small constructor helpers on [`Expression`].
//!
//! ```text
//! pub enum Expression {
//!     Int(i64),                                   // 42
//!     Variable(String),                           // x
//!     Abstraction { parameter, parameter_type,    // \x: Int. body
//!                   body },
//!     Application { function, argument },        // (f x)
//! }
//! ```
//!
//! Every lambda takes exactly one parameter and carries a declared
//! parameter type; every application passes exactly one argument.
//! Expressions are owned trees, so they cannot contain cycles.
//!
//! Both consumers match on this enum exhaustively. Adding a variant here
//! is a compile error in [`crate::types::infer`] and
//! [`crate::interpreter`] until they handle it.

use crate::types::Type;

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Integer literal.
    Int(i64),
    /// Reference to a bound name.
    Variable(String),
    /// Single-parameter function literal with a declared parameter type.
    Abstraction {
        parameter: String,
        parameter_type: Type,
        body: Box<Expression>,
    },
    /// Single-argument call.
    Application {
        function: Box<Expression>,
        argument: Box<Expression>,
    },
}

impl Expression {
    pub fn int(value: i64) -> Self {
        Expression::Int(value)
    }

    pub fn var(name: impl Into<String>) -> Self {
        Expression::Variable(name.into())
    }

    pub fn abs(parameter: impl Into<String>, parameter_type: Type, body: Expression) -> Self {
        Expression::Abstraction {
            parameter: parameter.into(),
            parameter_type,
            body: Box::new(body),
        }
    }

    pub fn app(function: Expression, argument: Expression) -> Self {
        Expression::Application {
            function: Box::new(function),
            argument: Box::new(argument),
        }
    }
}
