//! Aggregation container for validation errors collected across flags.

use std::{error::Error, fmt};

use super::ValidationError;

/// Collection of [`ValidationError`]s gathered by a caller that validates
/// several flags before reporting.
///
/// Each [`FlagSpec`](crate::FlagSpec) stops at its first violated rule;
/// accumulating across flags is the caller's choice and this type is the
/// container for it.
///
/// # Examples
///
/// ```
/// use flag_spec::{ConstraintSet, FlagSpec, ValidationErrors, ValueType};
///
/// # fn main() -> Result<(), flag_spec::DeclarationError> {
/// let required = ConstraintSet::builder(ValueType::Int).required().build()?;
/// let port: FlagSpec = FlagSpec::new("port", "p", "PORT", "Listen port", required)?;
/// let workers: FlagSpec = FlagSpec::new("workers", "w", "N", "Worker count", required)?;
///
/// let outcome = ValidationErrors::from_results([
///     port.validate(false, "", ""),
///     workers.validate(false, "x", ""),
/// ]);
/// let Err(errors) = outcome else { panic!("both flags are invalid") };
/// assert_eq!(errors.len(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    /// Create a new aggregation from a vector of errors.
    #[must_use]
    pub const fn new(errors: Vec<ValidationError>) -> Self {
        Self(errors)
    }

    /// Collect the failures from a sequence of validation outcomes.
    ///
    /// # Errors
    ///
    /// Returns the aggregation when at least one outcome is an error.
    pub fn from_results<I>(results: I) -> Result<(), Self>
    where
        I: IntoIterator<Item = Result<(), ValidationError>>,
    {
        let errors: Vec<_> = results.into_iter().filter_map(Result::err).collect();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(Self(errors))
        }
    }

    /// Append another error.
    pub fn push(&mut self, error: ValidationError) {
        self.0.push(error);
    }

    /// Iterate over the contained errors.
    #[must_use = "iterators should be consumed to inspect errors"]
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }

    /// Number of errors in the aggregation.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no errors have been collected.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {e}", i + 1)?;
        }
        Ok(())
    }
}

impl Error for ValidationErrors {}

impl Extend<ValidationError> for ValidationErrors {
    fn extend<T: IntoIterator<Item = ValidationError>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
