//! Serialisable flag declarations.
//!
//! A [`FlagDeclaration`] is the data form of a [`FlagSpec`]: it can be
//! written in TOML or JSON and converted into a validated spec. Constraints
//! are given either as kebab-case names or as a legacy bitmask.
//!
//! ```toml
//! [[flag]]
//! name = "ports"
//! alias = "p"
//! help_value = "PORTS"
//! description = "Ports to listen on"
//! constraints = ["required", "int", "allow-many", "many-separator-colon"]
//! ```

mod loader;

use serde::{Deserialize, Serialize};

pub use loader::{DeclarationFormat, load_declarations, parse_declarations};

use crate::constraint::{Constraint, ConstraintSet};
use crate::{DeclarationError, FlagSpec};

/// Data form of a flag declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FlagDeclaration {
    /// Canonical long-form name.
    pub name: String,
    /// Short-form alias; empty when absent.
    #[serde(default)]
    pub alias: String,
    /// Placeholder shown in help output.
    #[serde(default)]
    pub help_value: String,
    /// Human-readable description.
    #[serde(default)]
    pub description: String,
    /// Named constraints.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constraints: Vec<Constraint>,
    /// Legacy bitmask, an alternative to `constraints`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bits: Option<i32>,
}

impl FlagDeclaration {
    /// Resolve the declared constraints into a checked set.
    ///
    /// # Errors
    ///
    /// Returns [`DeclarationError::AmbiguousConstraints`] when both
    /// `constraints` and `bits` are given, otherwise any error raised while
    /// building the set.
    pub fn constraint_set(&self) -> Result<ConstraintSet, DeclarationError> {
        match (self.constraints.is_empty(), self.bits) {
            (false, Some(_)) => Err(DeclarationError::AmbiguousConstraints {
                name: self.name.clone(),
            }),
            (true, Some(mask)) => ConstraintSet::from_bits(mask),
            (_, None) => ConstraintSet::from_constraints(self.constraints.iter().copied()),
        }
    }
}

impl<C> From<&FlagSpec<C>> for FlagDeclaration {
    fn from(spec: &FlagSpec<C>) -> Self {
        Self {
            name: spec.name().to_owned(),
            alias: spec.alias().to_owned(),
            help_value: spec.help_value().to_owned(),
            description: spec.description().to_owned(),
            constraints: spec.constraints().constraints(),
            bits: None,
        }
    }
}

impl<C> TryFrom<FlagDeclaration> for FlagSpec<C> {
    type Error = DeclarationError;

    fn try_from(declaration: FlagDeclaration) -> Result<Self, Self::Error> {
        let constraints = declaration.constraint_set()?;
        Self::new(
            declaration.name,
            declaration.alias,
            declaration.help_value,
            declaration.description,
            constraints,
        )
    }
}
