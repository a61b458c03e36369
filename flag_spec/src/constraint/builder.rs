//! Step-by-step construction of a [`ConstraintSet`].

use super::{CharClass, Constraint, ConstraintSet, Separator, ValueType};
use crate::DeclarationError;

/// Builder collecting options before they are checked against the value
/// type.
///
/// # Examples
///
/// ```
/// use flag_spec::{ConstraintSet, Separator, ValueType};
///
/// # fn main() -> Result<(), flag_spec::DeclarationError> {
/// let ports = ConstraintSet::builder(ValueType::Int)
///     .required()
///     .allow_many()
///     .separator(Separator::Colon)
///     .build()?;
/// assert_eq!(ports.many(), Some(Separator::Colon));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
#[must_use = "call `build` to obtain a constraint set"]
pub struct ConstraintSetBuilder {
    value_type: ValueType,
    required: bool,
    must_exist: bool,
    valid_json: bool,
    char_class: CharClass,
    allow_many: bool,
    separator: Option<Separator>,
}

impl ConstraintSetBuilder {
    pub(super) const fn new(value_type: ValueType) -> Self {
        Self {
            value_type,
            required: false,
            must_exist: false,
            valid_json: false,
            char_class: CharClass {
                dots: false,
                underscore: false,
                hyphen: false,
            },
            allow_many: false,
            separator: None,
        }
    }

    /// Require the value to be supplied.
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Declare that the path must exist.
    pub const fn must_exist(mut self) -> Self {
        self.must_exist = true;
        self
    }

    /// Require regular file contents to parse as JSON.
    pub const fn valid_json(mut self) -> Self {
        self.valid_json = true;
        self
    }

    /// Accept `.` in alphanumeric values.
    pub const fn allow_dots(mut self) -> Self {
        self.char_class.dots = true;
        self
    }

    /// Accept `_` in alphanumeric values.
    pub const fn allow_underscore(mut self) -> Self {
        self.char_class.underscore = true;
        self
    }

    /// Accept `-` in alphanumeric values.
    pub const fn allow_hyphen(mut self) -> Self {
        self.char_class.hyphen = true;
        self
    }

    /// Accept a delimited list of values.
    pub const fn allow_many(mut self) -> Self {
        self.allow_many = true;
        self
    }

    /// Select the list delimiter, replacing any earlier choice.
    pub const fn separator(mut self, separator: Separator) -> Self {
        self.separator = Some(separator);
        self
    }

    /// Apply a named modifier. Value type constraints are ignored; the type
    /// is fixed when the builder is created.
    pub const fn with(self, constraint: Constraint) -> Self {
        match constraint {
            Constraint::Required => self.required(),
            Constraint::MustExist => self.must_exist(),
            Constraint::ValidJson => self.valid_json(),
            Constraint::AllowDots => self.allow_dots(),
            Constraint::AllowUnderscore => self.allow_underscore(),
            Constraint::AllowHyphen => self.allow_hyphen(),
            Constraint::AllowMany => self.allow_many(),
            Constraint::ManySeparatorColon => self.separator(Separator::Colon),
            Constraint::ManySeparatorSemiColon => self.separator(Separator::SemiColon),
            Constraint::String
            | Constraint::PathFile
            | Constraint::Bool
            | Constraint::Int
            | Constraint::Float
            | Constraint::Alphanumeric
            | Constraint::Email
            | Constraint::Fqdn
            | Constraint::PathDir
            | Constraint::PathRegularFile => self,
        }
    }

    /// Check the collected options against the value type.
    ///
    /// # Errors
    ///
    /// Returns a [`DeclarationError`] when a modifier does not apply to the
    /// value type, when `allow-many` is used with a type that has no list
    /// form, or when a separator is chosen without `allow-many`.
    pub fn build(self) -> Result<ConstraintSet, DeclarationError> {
        self.require_type(self.must_exist, Constraint::MustExist, ValueType::PathFile)?;
        self.require_type(
            self.valid_json,
            Constraint::ValidJson,
            ValueType::PathRegularFile,
        )?;
        let extensions = [
            (self.char_class.dots, Constraint::AllowDots),
            (self.char_class.underscore, Constraint::AllowUnderscore),
            (self.char_class.hyphen, Constraint::AllowHyphen),
        ];
        for (enabled, modifier) in extensions {
            self.require_type(enabled, modifier, ValueType::Alphanumeric)?;
        }
        if self.allow_many && !self.value_type.supports_many() {
            return Err(DeclarationError::ManyNotSupported {
                value_type: self.value_type,
            });
        }
        if let (false, Some(separator)) = (self.allow_many, self.separator) {
            return Err(DeclarationError::SeparatorWithoutMany { separator });
        }
        Ok(ConstraintSet {
            value_type: self.value_type,
            required: self.required,
            must_exist: self.must_exist,
            valid_json: self.valid_json,
            char_class: self.char_class,
            many: self
                .allow_many
                .then(|| self.separator.unwrap_or_default()),
        })
    }

    fn require_type(
        &self,
        enabled: bool,
        modifier: Constraint,
        required: ValueType,
    ) -> Result<(), DeclarationError> {
        if enabled && self.value_type != required {
            return Err(DeclarationError::ModifierRequiresType {
                modifier,
                required,
                found: self.value_type,
            });
        }
        Ok(())
    }
}
