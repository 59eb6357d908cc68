//! Test Harness
//!
//! Store lifecycle management for isolated end-to-end tests.

mod store_manager;

pub use store_manager::TestStoreManager;
