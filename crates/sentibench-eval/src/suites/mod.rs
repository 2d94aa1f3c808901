//! Suite definitions and loading
//!
//! A suite is pure configuration: a label vocabulary, an optional instruction
//! header, and an ordered list of sentences with their expected labels.

mod loader;
mod suite;

pub use loader::{SuiteLoader, load_suite_from_json, load_suite_from_yaml};
pub use suite::{SuiteCase, SuiteDescriptor};
