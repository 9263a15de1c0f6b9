//! # Environments
//!
//! One environment type serves both phases: [`TypeEnv`] maps names to
//! types while checking, [`ValueEnv`] maps names to values while
//! evaluating.
//!
//! An [`Environment`] is a *handle*. Cloning it does not copy the
//! bindings: every clone observes, and can mutate, the same map. This is
//! what lets a closure capture "the environment active at the point the
//! abstraction was evaluated" and see later bindings made through any
//! other handle.
//!
//! Two ways to introduce a binding exist:
//!
//! - [`Environment::bind`] mutates the shared map in place.
//! - [`Environment::extend`] returns a fresh handle holding the old
//!   bindings plus the new one, leaving the original untouched.
//!
//! Which one the checker and interpreter use is decided by
//! [`crate::config::Scoping`].

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use im::HashMap;

use crate::interpreter::Value;
use crate::types::Type;

pub type TypeEnv = Environment<Type>;
pub type ValueEnv = Environment<Value>;

pub struct Environment<T> {
    bindings: Rc<RefCell<HashMap<String, T>>>,
}

impl<T> Environment<T>
where
    T: Clone,
{
    pub fn empty() -> Self {
        Environment {
            bindings: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    pub fn with_bindings<S>(bindings: Vec<(S, T)>) -> Self
    where
        S: Into<String>,
    {
        bindings.into_iter().collect()
    }

    pub fn lookup(&self, name: &str) -> Option<T> {
        self.bindings.borrow().get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.borrow().contains_key(name)
    }

    /// Insert or overwrite `name` in place. Every handle sharing this
    /// environment sees the new binding.
    pub fn bind(&self, name: impl Into<String>, value: T) {
        self.bindings.borrow_mut().insert(name.into(), value);
    }

    /// A new environment with `name` bound on top of the current bindings.
    /// `self` is unchanged.
    pub fn extend(&self, name: impl Into<String>, value: T) -> Self {
        let bindings = self.bindings.borrow().update(name.into(), value);
        Environment {
            bindings: Rc::new(RefCell::new(bindings)),
        }
    }

    /// A detached copy of the current bindings.
    pub fn snapshot(&self) -> Self {
        let bindings = self.bindings.borrow().clone();
        Environment {
            bindings: Rc::new(RefCell::new(bindings)),
        }
    }

    pub fn len(&self) -> usize {
        self.bindings.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.borrow().is_empty()
    }

    /// Bound names in sorted order.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.bindings.borrow().keys().cloned().collect();
        names.sort();
        names
    }
}

impl<T> Environment<T> {
    /// Whether both handles point at the same underlying bindings.
    pub fn shares_bindings_with(&self, other: &Environment<T>) -> bool {
        Rc::ptr_eq(&self.bindings, &other.bindings)
    }
}

impl<T> Clone for Environment<T> {
    fn clone(&self) -> Self {
        Environment {
            bindings: Rc::clone(&self.bindings),
        }
    }
}

impl<T> Default for Environment<T>
where
    T: Clone,
{
    fn default() -> Self {
        Self::empty()
    }
}

impl<S, T> FromIterator<(S, T)> for Environment<T>
where
    S: Into<String>,
    T: Clone,
{
    fn from_iter<I: IntoIterator<Item = (S, T)>>(iter: I) -> Self {
        let bindings = iter
            .into_iter()
            .map(|(name, value)| (name.into(), value))
            .collect::<HashMap<_, _>>();
        Environment {
            bindings: Rc::new(RefCell::new(bindings)),
        }
    }
}

// Values can hold closures that capture the very environment they are
// bound in, so only the names are printed.
impl<T> fmt::Debug for Environment<T>
where
    T: Clone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}
