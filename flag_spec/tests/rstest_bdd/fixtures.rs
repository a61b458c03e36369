//! Shared fixtures for the behavioural scenarios.

use flag_spec::{ErrorKind, FlagSpec};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;

/// Outcome of a validation step: the error kind and message on failure.
pub type Outcome = Option<(ErrorKind, String)>;

/// Scenario state shared between declaration, validation and assertion
/// steps.
#[derive(Debug, Default, ScenarioState)]
pub struct FlagContext {
    pub spec: Slot<FlagSpec>,
    pub declaration_error: Slot<String>,
    pub outcome: Slot<Outcome>,
}

/// Creates an empty context for each scenario.
#[fixture]
pub fn flag_context() -> FlagContext {
    FlagContext::default()
}
