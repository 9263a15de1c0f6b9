//! # Type Checking
//!
//! Types, structural type equality, the [`TypeError`] kind and the
//! [`Infer`] checker.

pub mod error;
pub mod infer;
pub mod ty;

pub use error::TypeError;
pub use infer::{Infer, infer};
pub use ty::{Type, types_equal};
