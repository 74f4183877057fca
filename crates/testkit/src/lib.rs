#![warn(missing_docs)]
//! Shared fixtures for headless tests.

mod fixtures;

pub use fixtures::*;
