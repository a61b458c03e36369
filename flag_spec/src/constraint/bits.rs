//! Integer bit protocol for callers that OR constraint values together.
//!
//! The values are fixed; existing callers combine them as, for example,
//! `REQUIRED | PATH_FILE | MUST_EXIST` or `INT | ALLOW_MANY |
//! MANY_SEPARATOR_COLON`. Decoding goes through the same checks as the typed
//! builder, so a mask naming two value types is rejected.

use super::{Constraint, ConstraintSet};
use crate::DeclarationError;

/// The value must be supplied.
pub const REQUIRED: i32 = 1;
/// Any text.
pub const STRING: i32 = 8;
/// Path to an existing entry of any kind.
pub const PATH_FILE: i32 = 16;
/// Boolean switch.
pub const BOOL: i32 = 32;
/// Unsigned decimal integer.
pub const INT: i32 = 64;
/// Decimal number with a fractional part.
pub const FLOAT: i32 = 128;
/// Letters and digits.
pub const ALPHANUMERIC: i32 = 256;
/// The path must exist; only with [`PATH_FILE`].
pub const MUST_EXIST: i32 = 512;
/// Comma separated list; only with [`INT`], [`FLOAT`] and [`ALPHANUMERIC`].
pub const ALLOW_MANY: i32 = 1024;
/// Use `:` between list items instead of `,`.
pub const MANY_SEPARATOR_COLON: i32 = 2048;
/// Use `;` between list items instead of `,`.
pub const MANY_SEPARATOR_SEMI_COLON: i32 = 4096;
/// Accept `.`; only with [`ALPHANUMERIC`].
pub const ALLOW_DOTS: i32 = 8192;
/// Accept `_`; only with [`ALPHANUMERIC`].
pub const ALLOW_UNDERSCORE: i32 = 16384;
/// Accept `-`; only with [`ALPHANUMERIC`].
pub const ALLOW_HYPHEN: i32 = 32768;
/// Email address.
pub const EMAIL: i32 = 65536;
/// Fully qualified domain name.
pub const FQDN: i32 = 131_072;
/// Path to an existing directory.
pub const PATH_DIR: i32 = 262_144;
/// Path to an existing regular file.
pub const PATH_REGULAR_FILE: i32 = 524_288;
/// Regular file contents must parse as JSON; only with [`PATH_REGULAR_FILE`].
pub const VALID_JSON: i32 = 1_048_576;

impl Constraint {
    /// The bit assigned to this constraint.
    #[must_use]
    pub const fn bit(self) -> i32 {
        match self {
            Self::Required => REQUIRED,
            Self::String => STRING,
            Self::PathFile => PATH_FILE,
            Self::Bool => BOOL,
            Self::Int => INT,
            Self::Float => FLOAT,
            Self::Alphanumeric => ALPHANUMERIC,
            Self::MustExist => MUST_EXIST,
            Self::AllowMany => ALLOW_MANY,
            Self::ManySeparatorColon => MANY_SEPARATOR_COLON,
            Self::ManySeparatorSemiColon => MANY_SEPARATOR_SEMI_COLON,
            Self::AllowDots => ALLOW_DOTS,
            Self::AllowUnderscore => ALLOW_UNDERSCORE,
            Self::AllowHyphen => ALLOW_HYPHEN,
            Self::Email => EMAIL,
            Self::Fqdn => FQDN,
            Self::PathDir => PATH_DIR,
            Self::PathRegularFile => PATH_REGULAR_FILE,
            Self::ValidJson => VALID_JSON,
        }
    }
}

/// Union of every assigned bit. Values 2 and 4 are unassigned.
pub const KNOWN: i32 = 0x001F_FFF9;

impl ConstraintSet {
    /// Decode an OR-combined mask of the constants in this module.
    ///
    /// # Errors
    ///
    /// Returns [`DeclarationError::UnknownBits`] for unassigned bits and
    /// otherwise the same errors as [`ConstraintSet::from_constraints`].
    ///
    /// # Examples
    ///
    /// ```
    /// use flag_spec::{ConstraintSet, Separator, ValueType, bits};
    ///
    /// # fn main() -> Result<(), flag_spec::DeclarationError> {
    /// let set = ConstraintSet::from_bits(bits::INT | bits::ALLOW_MANY | bits::MANY_SEPARATOR_COLON)?;
    /// assert_eq!(set.value_type(), ValueType::Int);
    /// assert_eq!(set.many(), Some(Separator::Colon));
    /// assert!(ConstraintSet::from_bits(bits::INT | bits::FLOAT).is_err());
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_bits(mask: i32) -> Result<Self, DeclarationError> {
        let unknown = mask & !KNOWN;
        if unknown != 0 {
            return Err(DeclarationError::UnknownBits { bits: unknown });
        }
        Self::from_constraints(
            Constraint::ALL
                .into_iter()
                .filter(|constraint| mask & constraint.bit() != 0),
        )
    }

    /// Encode the set as an OR-combined mask.
    #[must_use]
    pub fn bits(&self) -> i32 {
        self.constraints()
            .into_iter()
            .fold(0, |mask, constraint| mask | constraint.bit())
    }
}
