//! # Lamb - A Simply-Typed Lambda Calculus Core
//!
//! Lamb is the smallest useful statically-typed functional language: integers,
//! single-argument functions with declared parameter types, variables and
//! application. It has a checker and an evaluator over one shared AST and no
//! concrete syntax. Hosts build [`core::Expression`] trees directly.
//!
//! ## Architecture Overview
//!
//! ```text
//! Expression (built by the host)
//!     ├── [Type Checker] types::infer    → Type        | TypeError
//!     └── [Interpreter]  interpreter::interpret → Value | TypeError
//! ```
//!
//! The two phases are independent; either can run without the other.
//!
//! ## Key Design Decisions
//!
//! ### Shared, mutable environments
//! An [`env::Environment`] is a handle to shared bindings. By default a
//! parameter is bound *in place*: checking `\a: Int. a` leaves `a` bound in
//! the caller's context, and applying a closure overwrites the parameter
//! slot in the environment it captured. Closures therefore see later
//! bindings made through any handle, and two calls of one closure share the
//! same slot. [`config::Scoping::CopyOnBind`] switches to ordinary lexical
//! scoping.
//!
//! ### Evaluation order
//! Application evaluates the argument before the function. With shared
//! environments this is observable and is part of the contract.
//!
//! ### One opaque error
//! Every failure is a [`types::TypeError`]. The interpreter is more lenient
//! than the checker about unbound names: it yields
//! [`interpreter::Value::Missing`] unless configured with
//! [`config::Unbound::Error`].
//!
//! ## Module Structure
//!
//! - [`core`] - Expression AST
//! - [`types`] - Types, type equality, errors and the checker
//! - [`interpreter`] - Runtime values and the evaluator
//! - [`env`] - Environments shared by both phases
//! - [`config`] - Scoping and unbound-variable options
//! - [`fmt`] - Pretty-printing
//!
//! ## Example
//!
//! ```
//! use lamb::core::Expression;
//! use lamb::env::{TypeEnv, ValueEnv};
//! use lamb::interpreter::interpret;
//! use lamb::types::{Type, infer};
//!
//! let identity = Expression::abs("a", Type::Int, Expression::var("a"));
//! let expr = Expression::app(identity, Expression::int(3));
//!
//! assert_eq!(infer(&TypeEnv::empty(), &expr), Ok(Type::Int));
//! assert_eq!(interpret(&ValueEnv::empty(), &expr).unwrap().as_int(), Some(3));
//! ```

pub mod config;
pub mod core;
pub mod env;
pub mod fmt;
pub mod interpreter;
pub mod types;
