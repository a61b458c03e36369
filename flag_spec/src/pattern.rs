//! Pattern construction for numeric and alphanumeric values.
//!
//! [`ValuePattern`] describes one instance of a value (an integer, a float or
//! an alphanumeric token) and an optional list separator. Compiling it yields
//! a [`ValueMatcher`] anchored at both ends, so a value matches only in full.

use regex::Regex;
use thiserror::Error;
use tracing::trace;

use crate::constraint::{CharClass, ConstraintSet, Separator, ValueType};

/// Upper bound on digits either side of the decimal point.
const FLOAT_DIGITS: &str = "{1,16}";

/// Failure to compile a constructed pattern.
#[derive(Debug, Error)]
#[error("invalid value pattern '{pattern}': {source}")]
pub struct PatternError {
    pattern: String,
    #[source]
    source: regex::Error,
}

impl PatternError {
    /// The pattern text that failed to compile.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

/// Shape of a single value within a (possibly multi-value) flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instance {
    /// One or more digits.
    Int,
    /// 1-16 digits, a decimal point, 1-16 digits.
    Float,
    /// One or more ASCII letters or digits plus the enabled extensions.
    Alphanumeric(CharClass),
}

impl Instance {
    /// Regex fragment matching exactly one instance, unanchored.
    #[must_use]
    pub fn fragment(self) -> String {
        match self {
            Self::Int => "[0-9]+".to_owned(),
            Self::Float => format!("[0-9]{FLOAT_DIGITS}\\.[0-9]{FLOAT_DIGITS}"),
            Self::Alphanumeric(class) => {
                let mut fragment = String::from("[0-9a-zA-Z");
                if class.underscore {
                    fragment.push('_');
                }
                if class.dots {
                    fragment.push_str(r"\.");
                }
                if class.hyphen {
                    fragment.push_str(r"\-");
                }
                fragment.push_str("]+");
                fragment
            }
        }
    }
}

/// A single- or multi-value pattern ready to be compiled.
///
/// # Examples
///
/// ```
/// use flag_spec::pattern::{Instance, ValuePattern};
/// use flag_spec::Separator;
///
/// # fn main() -> Result<(), flag_spec::pattern::PatternError> {
/// let matcher = ValuePattern::new(Instance::Int, Some(Separator::Comma)).compile()?;
/// assert!(matcher.is_match("42,7,100"));
/// assert!(!matcher.is_match("42,"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValuePattern {
    instance: Instance,
    separator: Option<Separator>,
}

impl ValuePattern {
    /// Pattern for `instance`, repeated with `separator` when one is given.
    #[must_use]
    pub const fn new(instance: Instance, separator: Option<Separator>) -> Self {
        Self {
            instance,
            separator,
        }
    }

    /// Pattern implied by a constraint set, if its value type has one.
    ///
    /// Only [`ValueType::Int`], [`ValueType::Float`] and
    /// [`ValueType::Alphanumeric`] are pattern-checked.
    #[must_use]
    pub const fn for_constraints(constraints: &ConstraintSet) -> Option<Self> {
        let instance = match constraints.value_type() {
            ValueType::Int => Instance::Int,
            ValueType::Float => Instance::Float,
            ValueType::Alphanumeric => Instance::Alphanumeric(constraints.char_class()),
            ValueType::String
            | ValueType::PathFile
            | ValueType::Bool
            | ValueType::Email
            | ValueType::Fqdn
            | ValueType::PathDir
            | ValueType::PathRegularFile => return None,
        };
        Some(Self::new(instance, constraints.many()))
    }

    /// The anchored regex source for this pattern.
    #[must_use]
    pub fn source(&self) -> String {
        let one = self.instance.fragment();
        match self.separator {
            Some(separator) => {
                let delimiter = regex::escape(separator.as_char().encode_utf8(&mut [0; 4]));
                format!("^{one}(?:{delimiter}{one})*$")
            }
            None => format!("^{one}$"),
        }
    }

    /// Compile the pattern.
    ///
    /// # Errors
    ///
    /// Returns a [`PatternError`] if the constructed source is rejected by
    /// the regex engine.
    pub fn compile(&self) -> Result<ValueMatcher, PatternError> {
        let pattern = self.source();
        trace!(%pattern, "compiling value pattern");
        Regex::new(&pattern)
            .map(|regex| ValueMatcher { regex })
            .map_err(|source| PatternError { pattern, source })
    }
}

/// A compiled, fully anchored value pattern.
#[derive(Debug, Clone)]
pub struct ValueMatcher {
    regex: Regex,
}

impl ValueMatcher {
    /// Whether `value` matches the pattern in full.
    #[must_use]
    pub fn is_match(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }

    /// The compiled regex source.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}
