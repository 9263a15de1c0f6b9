//! Environment-based evaluator for the core AST.
//!
//! Call-by-value: the argument of an application is reduced before the
//! function. Parameters are bound into the closure's captured environment
//! instead of being substituted into the body.

use tracing::{debug, trace};

use super::value::Value;
use crate::config::{Options, Scoping, Unbound};
use crate::core::Expression;
use crate::env::ValueEnv;
use crate::types::TypeError;

#[derive(Debug, Clone, Default)]
pub struct Interpreter {
    options: Options,
}

impl Interpreter {
    pub fn new(options: Options) -> Self {
        Interpreter { options }
    }

    pub fn options(&self) -> Options {
        self.options
    }

    pub fn eval(&self, env: &ValueEnv, expr: &Expression) -> Result<Value, TypeError> {
        match expr {
            Expression::Int(value) => Ok(Value::Int(*value)),

            Expression::Variable(name) => match env.lookup(name) {
                Some(value) => Ok(value),
                None => match self.options.unbound {
                    Unbound::Missing => {
                        trace!(name = %name, "no value bound");
                        Ok(Value::Missing(name.clone()))
                    }
                    Unbound::Error => {
                        debug!(name = %name, "unbound variable");
                        Err(TypeError::unbound_variable(name.clone()))
                    }
                },
            },

            Expression::Abstraction {
                parameter, body, ..
            } => Ok(Value::Closure {
                environment: env.clone(),
                parameter: parameter.clone(),
                body: (**body).clone(),
            }),

            Expression::Application { function, argument } => {
                // Argument first: with shared environments the order of
                // evaluation is observable.
                let argument = self.eval(env, argument)?;
                let function = self.eval(env, function)?;
                self.apply(function, argument)
            }
        }
    }

    /// Apply an evaluated function to an evaluated argument.
    pub fn apply(&self, function: Value, argument: Value) -> Result<Value, TypeError> {
        match function {
            Value::Closure {
                environment,
                parameter,
                body,
            } => {
                trace!(parameter = %parameter, "binding argument");
                let call_env = match self.options.scoping {
                    Scoping::Shared => {
                        environment.bind(&parameter, argument);
                        environment
                    }
                    Scoping::CopyOnBind => environment.extend(&parameter, argument),
                };
                self.eval(&call_env, &body)
            }
            Value::Native(native) => {
                trace!(name = native.name(), "calling native function");
                Ok(native.call(argument))
            }
            other @ (Value::Int(_) | Value::Missing(_)) => {
                debug!(value = %other, "application of a non-function");
                Err(TypeError::not_callable(other.to_string()))
            }
        }
    }
}

/// Evaluate `expr` under `environment` with the default options.
///
/// Applying a closure binds its parameter into the environment the closure
/// captured, in place.
pub fn interpret(environment: &ValueEnv, expr: &Expression) -> Result<Value, TypeError> {
    Interpreter::default().eval(environment, expr)
}
