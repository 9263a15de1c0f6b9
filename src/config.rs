//! Options shared by the type checker and the interpreter.
//!
//! The defaults reproduce the reference semantics exactly: parameter
//! bindings mutate the environment in place, and the interpreter answers
//! an unbound variable with [`crate::interpreter::Value::Missing`] rather
//! than an error. [`Options::lexical`] switches both to conventional
//! lexical scoping.

/// How a parameter binding is introduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scoping {
    /// Bind into the current environment in place. Every handle sharing it,
    /// including closures that captured it, observes the binding, and
    /// repeated calls of one closure overwrite the same slot.
    #[default]
    Shared,
    /// Bind into a fresh environment layered over the current bindings.
    /// The parent is never modified.
    CopyOnBind,
}

/// What the interpreter does with a variable that has no binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Unbound {
    /// Produce `Value::Missing(name)` and carry on.
    #[default]
    Missing,
    /// Fail with a `TypeError`, like the type checker does.
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    pub scoping: Scoping,
    pub unbound: Unbound,
}

impl Options {
    /// Copy-on-bind scoping with unbound variables as hard errors.
    pub fn lexical() -> Self {
        Options {
            scoping: Scoping::CopyOnBind,
            unbound: Unbound::Error,
        }
    }

    pub fn with_scoping(mut self, scoping: Scoping) -> Self {
        self.scoping = scoping;
        self
    }

    pub fn with_unbound(mut self, unbound: Unbound) -> Self {
        self.unbound = unbound;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_reference_behavior() {
        let options = Options::default();
        assert_eq!(options.scoping, Scoping::Shared);
        assert_eq!(options.unbound, Unbound::Missing);
    }

    #[test]
    fn test_builders() {
        let options = Options::default().with_scoping(Scoping::CopyOnBind);
        assert_eq!(options.scoping, Scoping::CopyOnBind);
        assert_eq!(options.unbound, Unbound::Missing);

        let options = options.with_unbound(Unbound::Error);
        assert_eq!(options, Options::lexical());
    }
}
