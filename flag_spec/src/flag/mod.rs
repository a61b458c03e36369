//! The flag declaration entity.

mod probe;
mod validate;

use std::fmt;
use std::sync::Arc;

use crate::constraint::ConstraintSet;
use crate::error::{DeclarationError, Subject};

/// Callback a dispatcher runs when the flag is present.
///
/// `C` is the dispatcher's own context type. Validation never invokes it.
pub type OnMatch<C> = Arc<dyn Fn(&mut C) + Send + Sync>;

/// Immutable declaration of a flag or positional argument.
///
/// # Examples
///
/// ```
/// use flag_spec::{ConstraintSet, FlagSpec, ValueType};
///
/// # fn main() -> Result<(), flag_spec::DeclarationError> {
/// let constraints = ConstraintSet::builder(ValueType::Float).required().build()?;
/// let ratio: FlagSpec = FlagSpec::new("ratio", "r", "RATIO", "Scale factor", constraints)?;
///
/// assert!(ratio.validate(false, "3.14", "").is_ok());
/// assert_eq!(
///     ratio.validate(false, "", "").map_err(|e| e.to_string()),
///     Err("Flag ratio is missing".to_owned())
/// );
/// # Ok(())
/// # }
/// ```
pub struct FlagSpec<C = ()> {
    name: String,
    alias: String,
    help_value: String,
    description: String,
    constraints: ConstraintSet,
    on_match: Option<OnMatch<C>>,
}

impl<C> FlagSpec<C> {
    /// Declare a flag.
    ///
    /// `alias` may be empty when the flag has no short form.
    ///
    /// # Errors
    ///
    /// Returns [`DeclarationError::EmptyName`] when `name` is empty.
    pub fn new(
        name: impl Into<String>,
        alias: impl Into<String>,
        help_value: impl Into<String>,
        description: impl Into<String>,
        constraints: ConstraintSet,
    ) -> Result<Self, DeclarationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DeclarationError::EmptyName);
        }
        Ok(Self {
            name,
            alias: alias.into(),
            help_value: help_value.into(),
            description: description.into(),
            constraints,
            on_match: None,
        })
    }

    /// Declare a flag from an OR-combined mask of [`crate::bits`] values.
    ///
    /// # Errors
    ///
    /// Returns a [`DeclarationError`] when the mask is not a legal
    /// combination or `name` is empty.
    pub fn from_bits(
        name: impl Into<String>,
        alias: impl Into<String>,
        help_value: impl Into<String>,
        description: impl Into<String>,
        mask: i32,
    ) -> Result<Self, DeclarationError> {
        let constraints = ConstraintSet::from_bits(mask)?;
        Self::new(name, alias, help_value, description, constraints)
    }

    /// Attach the callback a dispatcher runs when the flag is present.
    #[must_use]
    pub fn with_on_match<F>(mut self, on_match: F) -> Self
    where
        F: Fn(&mut C) + Send + Sync + 'static,
    {
        self.on_match = Some(Arc::new(on_match));
        self
    }

    /// Canonical long-form name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Short-form alias; empty when the flag has none.
    #[must_use]
    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// Placeholder shown in help output.
    #[must_use]
    pub fn help_value(&self) -> &str {
        &self.help_value
    }

    /// Human-readable description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The declared constraints.
    #[must_use]
    pub const fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    /// The dispatcher callback, if one was attached.
    #[must_use]
    pub const fn on_match(&self) -> Option<&OnMatch<C>> {
        self.on_match.as_ref()
    }

    /// Whether the flag needs an accompanying value when present.
    ///
    /// Bool, Email and Fqdn flags are value-optional, matching the legacy
    /// integer protocol.
    #[must_use]
    pub const fn requires_value(&self) -> bool {
        self.constraints.requires_value()
    }

    /// Identifier used in error messages: the name for flags, the help
    /// placeholder for positional arguments.
    #[must_use]
    pub fn label(&self, subject: Subject) -> &str {
        match subject {
            Subject::Flag => &self.name,
            Subject::Argument => &self.help_value,
        }
    }

    /// Render the flag as one line of a tab-aligned help listing.
    ///
    /// ```
    /// use flag_spec::{ConstraintSet, FlagSpec, ValueType};
    ///
    /// # fn main() -> Result<(), flag_spec::DeclarationError> {
    /// let set = ConstraintSet::builder(ValueType::PathDir).build()?;
    /// let out: FlagSpec = FlagSpec::new("out", "o", "DIR", "Output directory", set)?;
    /// assert_eq!(out.describe(), "  -o,\t --out DIR \tOutput directory\n");
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn describe(&self) -> String {
        let alias = if self.alias.is_empty() {
            " \t".to_owned()
        } else {
            format!(" -{},\t", self.alias)
        };
        format!(
            " {alias} --{} {} \t{}\n",
            self.name, self.help_value, self.description
        )
    }
}

impl<C> Clone for FlagSpec<C> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            alias: self.alias.clone(),
            help_value: self.help_value.clone(),
            description: self.description.clone(),
            constraints: self.constraints,
            on_match: self.on_match.clone(),
        }
    }
}

impl<C> fmt::Debug for FlagSpec<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlagSpec")
            .field("name", &self.name)
            .field("alias", &self.alias)
            .field("help_value", &self.help_value)
            .field("description", &self.description)
            .field("constraints", &self.constraints)
            .field("on_match", &self.on_match.as_ref().map(|_| ".."))
            .finish()
    }
}

#[cfg(test)]
mod tests;
