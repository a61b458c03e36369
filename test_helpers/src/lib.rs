//! Test helpers shared across crates.
//!
//! [`sandbox`] provides temporary filesystem trees and [`text`] normalises
//! placeholders captured by behavioural step definitions.

pub mod sandbox;
pub mod text;
