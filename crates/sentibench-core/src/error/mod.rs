//! Error types for SentiBench
//!
//! Every fallible operation in the core crate returns [`BenchResult`]. Oracle
//! failures are converted to a sentinel reply at the call boundary (see
//! [`crate::oracle::invoke_or_sentinel`]) so they never abort a suite run; the
//! variants here cover configuration, suite definition and transport problems.

mod constructors;
mod conversions;
mod types;

pub use types::{BenchError, BenchResult};
