//! Stylegate - a concurrent style-check quality gate
//!
//! Stylegate decides whether a set of source files passes a formatting
//! check by invoking an external checker tool, either once over the whole
//! set or once per changed file, and reduces the per-invocation outcomes
//! into a single verdict with ordered diagnostics.

pub mod config;
pub mod context;
pub mod error;
pub mod invocation;
pub mod report;
pub mod runner;
pub mod task;

pub use error::{GateError, Result};
