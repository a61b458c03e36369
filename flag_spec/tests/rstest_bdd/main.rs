//! `rstest-bdd` behavioural suite for `flag_spec`.
//!
//! Step implementations live in [`steps`]; [`scenarios`] binds the feature
//! files to the shared fixtures.

mod fixtures;
mod scenarios;
mod steps;
