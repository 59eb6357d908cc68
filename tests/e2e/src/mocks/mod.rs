//! Test Mocks and Fixtures
//!
//! Data factories and failure-injection substrates.

mod fixtures;

pub use fixtures::{BundleShape, FailingSlots, TestDataFactory};
