//! Typed constraint model for flag declarations.
//!
//! A [`ConstraintSet`] combines exactly one [`ValueType`] with the presence,
//! modifier and multiplicity options that apply to it. Illegal combinations
//! are rejected when the set is built, so validation never has to guess what
//! a declaration meant.

pub mod bits;
mod builder;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use builder::ConstraintSetBuilder;

use crate::DeclarationError;

/// The kind of value a flag accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValueType {
    /// Any text, accepted as-is.
    String,
    /// Path to an existing filesystem entry of any kind.
    PathFile,
    /// Boolean switch; carries no value.
    Bool,
    /// Unsigned decimal integer.
    Int,
    /// Decimal number with a mandatory fractional part.
    Float,
    /// ASCII letters and digits, optionally extended by a [`CharClass`].
    Alphanumeric,
    /// Email address. Accepted without format checking.
    Email,
    /// Fully qualified domain name. Accepted without format checking.
    Fqdn,
    /// Path to an existing directory.
    PathDir,
    /// Path to an existing regular file.
    PathRegularFile,
}

impl ValueType {
    /// Every value type, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::String,
        Self::PathFile,
        Self::Bool,
        Self::Int,
        Self::Float,
        Self::Alphanumeric,
        Self::Email,
        Self::Fqdn,
        Self::PathDir,
        Self::PathRegularFile,
    ];

    /// Whether the flag needs an accompanying value when present.
    ///
    /// Only [`ValueType::Bool`], [`ValueType::Email`] and [`ValueType::Fqdn`]
    /// report `false`.
    #[must_use]
    pub const fn requires_value(self) -> bool {
        matches!(
            self,
            Self::String
                | Self::PathFile
                | Self::PathRegularFile
                | Self::PathDir
                | Self::Int
                | Self::Float
                | Self::Alphanumeric
        )
    }

    /// Whether the type can carry a delimited list of values.
    #[must_use]
    pub const fn supports_many(self) -> bool {
        matches!(self, Self::Int | Self::Float | Self::Alphanumeric)
    }

    /// Kebab-case name used in declarations and diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        Constraint::from_value_type(self).name()
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Delimiter between the items of a multi-value flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Separator {
    /// `,`
    #[default]
    Comma,
    /// `:`
    Colon,
    /// `;`
    SemiColon,
}

impl Separator {
    /// The delimiter character.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Comma => ',',
            Self::Colon => ':',
            Self::SemiColon => ';',
        }
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Extra characters accepted by [`ValueType::Alphanumeric`] values.
///
/// The extensions are additive; any subset may be enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CharClass {
    /// Accept `.`.
    pub dots: bool,
    /// Accept `_`.
    pub underscore: bool,
    /// Accept `-`.
    pub hyphen: bool,
}

impl CharClass {
    /// Whether any extension is enabled.
    #[must_use]
    pub const fn is_extended(self) -> bool {
        self.dots || self.underscore || self.hyphen
    }
}

/// A single named constraint, as written in declarations.
///
/// Value types and modifiers share one namespace so a declaration can list
/// them together, e.g. `["required", "int", "allow-many"]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Constraint {
    /// The value must be supplied.
    Required,
    /// See [`ValueType::String`].
    String,
    /// See [`ValueType::PathFile`].
    PathFile,
    /// See [`ValueType::Bool`].
    Bool,
    /// See [`ValueType::Int`].
    Int,
    /// See [`ValueType::Float`].
    Float,
    /// See [`ValueType::Alphanumeric`].
    Alphanumeric,
    /// The file must exist. Applies to [`ValueType::PathFile`], whose values
    /// are always existence-checked.
    MustExist,
    /// The value is a delimited list.
    AllowMany,
    /// Use `:` between list items.
    ManySeparatorColon,
    /// Use `;` between list items.
    #[serde(alias = "many-separator-semicolon")]
    ManySeparatorSemiColon,
    /// Alphanumeric values may contain `.`.
    AllowDots,
    /// Alphanumeric values may contain `_`.
    AllowUnderscore,
    /// Alphanumeric values may contain `-`.
    AllowHyphen,
    /// See [`ValueType::Email`].
    Email,
    /// See [`ValueType::Fqdn`].
    Fqdn,
    /// See [`ValueType::PathDir`].
    PathDir,
    /// See [`ValueType::PathRegularFile`].
    PathRegularFile,
    /// Regular file contents must parse as JSON.
    ValidJson,
}

impl Constraint {
    /// Every constraint, in legacy bit order.
    pub const ALL: [Self; 19] = [
        Self::Required,
        Self::String,
        Self::PathFile,
        Self::Bool,
        Self::Int,
        Self::Float,
        Self::Alphanumeric,
        Self::MustExist,
        Self::AllowMany,
        Self::ManySeparatorColon,
        Self::ManySeparatorSemiColon,
        Self::AllowDots,
        Self::AllowUnderscore,
        Self::AllowHyphen,
        Self::Email,
        Self::Fqdn,
        Self::PathDir,
        Self::PathRegularFile,
        Self::ValidJson,
    ];

    /// The value type named by this constraint, if it names one.
    #[must_use]
    pub const fn value_type(self) -> Option<ValueType> {
        Some(match self {
            Self::String => ValueType::String,
            Self::PathFile => ValueType::PathFile,
            Self::Bool => ValueType::Bool,
            Self::Int => ValueType::Int,
            Self::Float => ValueType::Float,
            Self::Alphanumeric => ValueType::Alphanumeric,
            Self::Email => ValueType::Email,
            Self::Fqdn => ValueType::Fqdn,
            Self::PathDir => ValueType::PathDir,
            Self::PathRegularFile => ValueType::PathRegularFile,
            Self::Required
            | Self::MustExist
            | Self::AllowMany
            | Self::ManySeparatorColon
            | Self::ManySeparatorSemiColon
            | Self::AllowDots
            | Self::AllowUnderscore
            | Self::AllowHyphen
            | Self::ValidJson => return None,
        })
    }

    /// The constraint naming `value_type`.
    #[must_use]
    pub const fn from_value_type(value_type: ValueType) -> Self {
        match value_type {
            ValueType::String => Self::String,
            ValueType::PathFile => Self::PathFile,
            ValueType::Bool => Self::Bool,
            ValueType::Int => Self::Int,
            ValueType::Float => Self::Float,
            ValueType::Alphanumeric => Self::Alphanumeric,
            ValueType::Email => Self::Email,
            ValueType::Fqdn => Self::Fqdn,
            ValueType::PathDir => Self::PathDir,
            ValueType::PathRegularFile => Self::PathRegularFile,
        }
    }

    /// Kebab-case name used in declarations and diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::String => "string",
            Self::PathFile => "path-file",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::Alphanumeric => "alphanumeric",
            Self::MustExist => "must-exist",
            Self::AllowMany => "allow-many",
            Self::ManySeparatorColon => "many-separator-colon",
            Self::ManySeparatorSemiColon => "many-separator-semi-colon",
            Self::AllowDots => "allow-dots",
            Self::AllowUnderscore => "allow-underscore",
            Self::AllowHyphen => "allow-hyphen",
            Self::Email => "email",
            Self::Fqdn => "fqdn",
            Self::PathDir => "path-dir",
            Self::PathRegularFile => "path-regular-file",
            Self::ValidJson => "valid-json",
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A validated combination of constraints for one flag.
///
/// Built with [`ConstraintSet::builder`], [`ConstraintSet::from_constraints`]
/// or [`ConstraintSet::from_bits`]; never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConstraintSet {
    value_type: ValueType,
    required: bool,
    must_exist: bool,
    valid_json: bool,
    char_class: CharClass,
    many: Option<Separator>,
}

impl ConstraintSet {
    /// Start building a set for `value_type`.
    #[must_use]
    pub const fn builder(value_type: ValueType) -> ConstraintSetBuilder {
        ConstraintSetBuilder::new(value_type)
    }

    /// Build a set from a list of named constraints.
    ///
    /// Duplicates are ignored. Exactly one value type must be present.
    ///
    /// # Errors
    ///
    /// Returns a [`DeclarationError`] when no or several value types are
    /// named, when both separators are named, or when the builder rejects
    /// the combination.
    pub fn from_constraints<I>(constraints: I) -> Result<Self, DeclarationError>
    where
        I: IntoIterator<Item = Constraint>,
    {
        let mut value_type = None;
        let mut modifiers = Vec::new();
        for constraint in constraints {
            match (constraint.value_type(), value_type) {
                (Some(found), None) => value_type = Some(found),
                (Some(found), Some(first)) if found != first => {
                    return Err(DeclarationError::ConflictingTypes {
                        first,
                        second: found,
                    });
                }
                (Some(_), Some(_)) => {}
                (None, _) => modifiers.push(constraint),
            }
        }
        let value_type = value_type.ok_or(DeclarationError::MissingType)?;
        if modifiers.contains(&Constraint::ManySeparatorColon)
            && modifiers.contains(&Constraint::ManySeparatorSemiColon)
        {
            return Err(DeclarationError::ConflictingSeparators);
        }
        modifiers
            .into_iter()
            .fold(Self::builder(value_type), ConstraintSetBuilder::with)
            .build()
    }

    /// The declared value type.
    #[must_use]
    pub const fn value_type(&self) -> ValueType {
        self.value_type
    }

    /// Whether the value must be supplied.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Whether `must-exist` was declared.
    #[must_use]
    pub const fn must_exist(&self) -> bool {
        self.must_exist
    }

    /// Whether regular file contents must parse as JSON.
    #[must_use]
    pub const fn valid_json(&self) -> bool {
        self.valid_json
    }

    /// Extra characters accepted by alphanumeric values.
    #[must_use]
    pub const fn char_class(&self) -> CharClass {
        self.char_class
    }

    /// The list separator when the value is a delimited list.
    #[must_use]
    pub const fn many(&self) -> Option<Separator> {
        self.many
    }

    /// Whether the flag needs an accompanying value when present.
    #[must_use]
    pub const fn requires_value(&self) -> bool {
        self.value_type.requires_value()
    }

    /// The named constraints making up this set.
    ///
    /// Feeding the result back into [`ConstraintSet::from_constraints`]
    /// yields an equal set.
    #[must_use]
    pub fn constraints(&self) -> Vec<Constraint> {
        let flags = [
            (self.required, Constraint::Required),
            (true, Constraint::from_value_type(self.value_type)),
            (self.must_exist, Constraint::MustExist),
            (self.valid_json, Constraint::ValidJson),
            (self.char_class.dots, Constraint::AllowDots),
            (self.char_class.underscore, Constraint::AllowUnderscore),
            (self.char_class.hyphen, Constraint::AllowHyphen),
            (self.many.is_some(), Constraint::AllowMany),
            (
                self.many == Some(Separator::Colon),
                Constraint::ManySeparatorColon,
            ),
            (
                self.many == Some(Separator::SemiColon),
                Constraint::ManySeparatorSemiColon,
            ),
        ];
        flags
            .into_iter()
            .filter_map(|(set, constraint)| set.then_some(constraint))
            .collect()
    }
}

impl TryFrom<Vec<Constraint>> for ConstraintSet {
    type Error = DeclarationError;

    fn try_from(constraints: Vec<Constraint>) -> Result<Self, Self::Error> {
        Self::from_constraints(constraints)
    }
}
