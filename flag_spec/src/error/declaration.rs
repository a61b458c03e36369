//! Errors raised while building flag declarations.

use camino::Utf8PathBuf;
use thiserror::Error;

use crate::constraint::{Constraint, Separator, ValueType};

/// Reasons a flag declaration is rejected at construction time.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DeclarationError {
    /// The long name of a flag was empty.
    #[error("flag name must not be empty")]
    EmptyName,

    /// No value type constraint was declared.
    #[error("no value type declared")]
    MissingType,

    /// More than one value type constraint was declared.
    #[error("conflicting value types '{first}' and '{second}'")]
    ConflictingTypes {
        /// First value type encountered.
        first: ValueType,
        /// Second value type encountered.
        second: ValueType,
    },

    /// A modifier was combined with a value type it does not apply to.
    #[error("'{modifier}' requires value type '{required}', found '{found}'")]
    ModifierRequiresType {
        /// The misplaced modifier.
        modifier: Constraint,
        /// Value type the modifier applies to.
        required: ValueType,
        /// Value type actually declared.
        found: ValueType,
    },

    /// `allow-many` was declared for a value type without list support.
    #[error("'allow-many' is not supported for value type '{value_type}'")]
    ManyNotSupported {
        /// Value type actually declared.
        value_type: ValueType,
    },

    /// A list separator was declared without `allow-many`.
    #[error("list separator '{separator}' requires 'allow-many'")]
    SeparatorWithoutMany {
        /// The chosen separator.
        separator: Separator,
    },

    /// Both the colon and the semicolon separators were declared.
    #[error("'many-separator-colon' and 'many-separator-semi-colon' are mutually exclusive")]
    ConflictingSeparators,

    /// The legacy bitmask carried bits with no assigned meaning.
    #[error("unknown constraint bits {bits:#x}")]
    UnknownBits {
        /// The unrecognised bits.
        bits: i32,
    },

    /// A declaration set both `constraints` and `bits`.
    #[error("declaration for '{name}' sets both 'constraints' and 'bits'")]
    AmbiguousConstraints {
        /// Flag name from the declaration.
        name: String,
    },

    /// A single declaration within a file was invalid.
    #[error("invalid declaration for flag '{name}': {source}")]
    Flag {
        /// Flag name from the declaration.
        name: String,
        /// Reason the declaration was rejected.
        #[source]
        source: Box<DeclarationError>,
    },

    /// A declaration file could not be read.
    #[error("failed to read declarations from '{path}': {source}")]
    Io {
        /// Declaration file path.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A declaration file could not be parsed.
    #[error("failed to parse declarations in '{path}': {source}")]
    Parse {
        /// Declaration file path.
        path: Utf8PathBuf,
        /// Underlying parser failure.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The declaration file format is not enabled in this build.
    #[error("{format} declarations in '{path}' require the '{format}' feature")]
    UnsupportedFormat {
        /// Declaration file path.
        path: Utf8PathBuf,
        /// Format name, matching the cargo feature.
        format: &'static str,
    },
}

impl DeclarationError {
    /// Attach the flag name to an error raised while building that flag.
    #[must_use]
    pub fn for_flag(self, name: impl Into<String>) -> Self {
        Self::Flag {
            name: name.into(),
            source: Box::new(self),
        }
    }
}
