mod eval;
mod value;

pub use eval::{Interpreter, interpret};
pub use value::{NativeFunction, Value};
