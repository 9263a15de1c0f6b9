//! Display implementations for the core AST and runtime values
//!
//! Expressions print in a lambda-calculus notation:
//!
//! ```text
//! \a: Int. \b: Int -> Int. b
//! ((\a: Int. a) 10)
//! ```

use std::fmt::{self, Display};

use crate::core::Expression;
use crate::interpreter::Value;

impl Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Int(value) => write!(f, "{}", value),
            Expression::Variable(name) => write!(f, "{}", name),
            Expression::Abstraction {
                parameter,
                parameter_type,
                body,
            } => write!(f, "\\{}: {}. {}", parameter, parameter_type, body),
            Expression::Application { function, argument } => match **function {
                Expression::Abstraction { .. } => write!(f, "(({}) {})", function, argument),
                _ => write!(f, "({} {})", function, argument),
            },
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(value) => write!(f, "{}", value),
            Value::Closure { parameter, .. } => write!(f, "<closure \\{}>", parameter),
            Value::Native(native) => write!(f, "<native {}>", native.name()),
            Value::Missing(name) => write!(f, "<missing {}>", name),
        }
    }
}
