//! Pretty-printing for expressions and runtime values.

pub mod core;
