//! Evaluation runner components
//!
//! [`SuiteRunner`] runs one suite end to end; [`EvalExecutor`] selects suites
//! and runs them in sequence (or concurrently) against one oracle.

mod config;
mod executor;
mod suite_runner;

pub use config::EvalConfig;
pub use executor::{EvalEvent, EvalExecutor, EventCallback};
pub use suite_runner::SuiteRunner;
