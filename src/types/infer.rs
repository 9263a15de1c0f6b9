use tracing::{debug, trace};

use super::error::TypeError;
use super::ty::{Type, types_equal};
use crate::config::{Options, Scoping};
use crate::core::Expression;
use crate::env::TypeEnv;

/// Bottom-up checker for the simply-typed core.
///
/// Nothing is inferred in the Hindley-Milner sense: every abstraction
/// declares its parameter type, so the type of an expression follows
/// directly from the types of its parts.
#[derive(Debug, Clone, Default)]
pub struct Infer {
    options: Options,
}

impl Infer {
    pub fn new(options: Options) -> Self {
        Infer { options }
    }

    pub fn options(&self) -> Options {
        self.options
    }

    pub fn infer_expr(&self, context: &TypeEnv, expr: &Expression) -> Result<Type, TypeError> {
        match expr {
            Expression::Int(_) => Ok(Type::Int),

            Expression::Variable(name) => match context.lookup(name) {
                Some(ty) => Ok(ty),
                None => {
                    debug!(name = %name, "unbound variable");
                    Err(TypeError::unbound_variable(name.clone()))
                }
            },

            Expression::Abstraction {
                parameter,
                parameter_type,
                body,
            } => self.infer_abstraction(context, parameter, parameter_type, body),

            Expression::Application { function, argument } => {
                self.infer_application(context, function, argument)
            }
        }
    }

    fn infer_abstraction(
        &self,
        context: &TypeEnv,
        parameter: &str,
        parameter_type: &Type,
        body: &Expression,
    ) -> Result<Type, TypeError> {
        trace!(parameter, ty = %parameter_type, "binding parameter");

        let body_context = match self.options.scoping {
            Scoping::Shared => {
                context.bind(parameter, parameter_type.clone());
                context.clone()
            }
            Scoping::CopyOnBind => context.extend(parameter, parameter_type.clone()),
        };

        // The cause of a body failure is not propagated; only the
        // abstraction that contains it is reported.
        let body_type = self.infer_expr(&body_context, body).map_err(|err| {
            debug!(parameter, cause = %err, "ill-typed abstraction body");
            TypeError::ill_typed_body(parameter)
        })?;

        Ok(Type::arrow(parameter_type.clone(), body_type))
    }

    fn infer_application(
        &self,
        context: &TypeEnv,
        function: &Expression,
        argument: &Expression,
    ) -> Result<Type, TypeError> {
        let function_type = self.infer_expr(context, function)?;
        let argument_type = self.infer_expr(context, argument)?;

        let Some((parameter_type, result_type)) = function_type.as_arrow() else {
            debug!(ty = %function_type, "application of a non-function");
            return Err(TypeError::not_a_function(function_type.clone()));
        };

        if !types_equal(parameter_type, &argument_type) {
            debug!(expected = %parameter_type, found = %argument_type, "argument type mismatch");
            return Err(TypeError::argument_mismatch(
                parameter_type.clone(),
                argument_type,
            ));
        }

        Ok(result_type.clone())
    }
}

/// Check `expr` against `context` with the default options.
///
/// Abstractions bind their parameter into `context` in place, so the
/// caller's context holds those bindings afterwards.
pub fn infer(context: &TypeEnv, expr: &Expression) -> Result<Type, TypeError> {
    Infer::default().infer_expr(context, expr)
}
