//! Declarative command-line flag definitions with typed value validation.
//!
//! A [`FlagSpec`] pairs a flag's name, alias and help text with a
//! [`ConstraintSet`]: one [`ValueType`] plus presence, modifier and
//! multiplicity options. Dispatchers resolve the raw value given with
//! `--name` and with `-alias`, then call [`FlagSpec::validate`], which
//! reports the first violated rule as a [`ValidationError`].
//!
//! ```
//! use flag_spec::{ConstraintSet, FlagSpec, ValueType};
//!
//! # fn main() -> Result<(), flag_spec::DeclarationError> {
//! let tags = ConstraintSet::builder(ValueType::Alphanumeric)
//!     .allow_hyphen()
//!     .allow_many()
//!     .build()?;
//! let spec: FlagSpec = FlagSpec::new("tags", "t", "TAGS", "Release tags", tags)?;
//!
//! assert!(spec.validate(false, "", "stable,rc-1").is_ok());
//! assert!(spec.validate(false, "rc_1", "").is_err());
//! # Ok(())
//! # }
//! ```
//!
//! Callers speaking the integer protocol can use the constants in [`bits`]
//! with [`FlagSpec::from_bits`]; declarations can also be loaded from TOML or
//! JSON files through [`declaration`].

pub mod constraint;
pub mod declaration;
mod error;
mod flag;
pub mod pattern;

pub use constraint::{
    CharClass, Constraint, ConstraintSet, ConstraintSetBuilder, Separator, ValueType, bits,
};
pub use declaration::{FlagDeclaration, load_declarations};
pub use error::{
    DeclarationError, ErrorKind, PathKind, Subject, ValidationError, ValidationErrors,
};
pub use flag::{FlagSpec, OnMatch};
