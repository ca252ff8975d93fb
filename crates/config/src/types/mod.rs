//! Core types shared by the loader and its callers.

mod format;
mod value;
mod variable;

pub use format::FileFormat;
pub use value::{Mapping, Value};
pub use variable::VariablePath;
