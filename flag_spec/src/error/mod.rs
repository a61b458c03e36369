//! Error types produced while declaring flags and validating their values.

mod aggregate;
mod declaration;
mod types;

pub use aggregate::ValidationErrors;
pub use declaration::DeclarationError;
pub use types::{ErrorKind, PathKind, Subject, ValidationError};
