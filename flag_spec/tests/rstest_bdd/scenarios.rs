//! Binds the feature files to the step registry.

use crate::fixtures::{FlagContext, flag_context};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/flag_validation.feature",
    fixtures = [flag_context: FlagContext]
);
