use std::fmt;
use std::rc::Rc;

use crate::core::Expression;
use crate::env::ValueEnv;

/// A host-provided function, callable from the language like a closure.
///
/// No expression evaluates to one; hosts put them into the environment
/// before interpreting.
#[derive(Clone)]
pub struct NativeFunction {
    name: String,
    function: Rc<dyn Fn(Value) -> Value>,
}

impl NativeFunction {
    pub fn new(name: impl Into<String>, function: impl Fn(Value) -> Value + 'static) -> Self {
        NativeFunction {
            name: name.into(),
            function: Rc::new(function),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn call(&self, argument: Value) -> Value {
        (self.function)(argument)
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NativeFunction").field(&self.name).finish()
    }
}

/// Runtime value representation
#[derive(Debug, Clone)]
pub enum Value {
    Int(i64),
    /// An abstraction together with the environment handle that was
    /// active when it was evaluated. The handle is shared, not copied.
    Closure {
        environment: ValueEnv,
        parameter: String,
        body: Expression,
    },
    Native(NativeFunction),
    /// Result of looking up a name with no binding, when the interpreter
    /// is configured to tolerate that.
    Missing(String),
}

impl Value {
    pub fn native(name: impl Into<String>, function: impl Fn(Value) -> Value + 'static) -> Self {
        Value::Native(NativeFunction::new(name, function))
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing(_))
    }
}
