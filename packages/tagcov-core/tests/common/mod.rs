//! Common test utilities for tagcov-core
//!
//! Fixture trees on disk plus in-memory fakes for the engine's ports.

#![allow(dead_code)]

mod fakes;
mod fixtures;

pub use fakes::*;
pub use fixtures::*;
