//! Value validation for a single flag.

use camino::Utf8Path;
use tracing::debug;

use super::{FlagSpec, probe};
use crate::constraint::ValueType;
use crate::error::{Subject, ValidationError};
use crate::pattern::ValuePattern;

impl<C> FlagSpec<C> {
    /// Validate the raw values supplied for this flag.
    ///
    /// `long` is the value given with `--name`, `short` the value given with
    /// `-alias`; an empty string means that form was not used. `is_arg`
    /// selects positional-argument wording in error messages.
    ///
    /// Rules are checked in a fixed order and the first violation is
    /// returned:
    ///
    /// 1. both forms supplied;
    /// 2. a required, value-bearing flag with neither form supplied;
    /// 3. string values are accepted as-is;
    /// 4. an absent optional value is accepted;
    /// 5. type checks: path existence and kind, JSON contents, or the
    ///    numeric/alphanumeric pattern.
    ///
    /// Email, FQDN and boolean values are accepted without format checking.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] for the first violated rule.
    pub fn validate(&self, is_arg: bool, long: &str, short: &str) -> Result<(), ValidationError> {
        let outcome = self.check(Subject::from_is_arg(is_arg), long, short);
        if let Err(err) = &outcome {
            debug!(flag = %self.name, kind = ?err.kind(), "rejected flag value");
        }
        outcome
    }

    fn check(&self, subject: Subject, long: &str, short: &str) -> Result<(), ValidationError> {
        if !long.is_empty() && !short.is_empty() {
            return Err(ValidationError::ConflictingForms {
                alias: self.alias.clone(),
                name: self.name.clone(),
            });
        }

        let label = self.label(subject);
        let required = self.constraints.is_required();
        if required && long.is_empty() && short.is_empty() && self.requires_value() {
            return Err(ValidationError::MissingRequired {
                subject,
                label: label.to_owned(),
            });
        }

        let value_type = self.constraints.value_type();
        if value_type == ValueType::String {
            return Ok(());
        }

        let value = if long.is_empty() { short } else { long };
        if !required && value.is_empty() {
            return Ok(());
        }

        let path = Utf8Path::new(value);
        match value_type {
            ValueType::PathFile => probe::ensure_exists(path, label),
            ValueType::PathRegularFile => {
                probe::ensure_regular_file(path, label)?;
                if self.constraints.valid_json() {
                    probe::ensure_json(path, label)?;
                }
                Ok(())
            }
            ValueType::PathDir => probe::ensure_directory(path, label),
            ValueType::Int | ValueType::Float | ValueType::Alphanumeric => {
                self.check_pattern(subject, label, value)
            }
            ValueType::String | ValueType::Bool | ValueType::Email | ValueType::Fqdn => Ok(()),
        }
    }

    fn check_pattern(&self, subject: Subject, label: &str, value: &str) -> Result<(), ValidationError> {
        let Some(pattern) = ValuePattern::for_constraints(&self.constraints) else {
            return Ok(());
        };
        let matcher = pattern
            .compile()
            .map_err(|source| ValidationError::InvalidPattern {
                subject,
                label: label.to_owned(),
                source,
            })?;
        if matcher.is_match(value) {
            Ok(())
        } else {
            Err(ValidationError::InvalidValue {
                subject,
                label: label.to_owned(),
            })
        }
    }
}
