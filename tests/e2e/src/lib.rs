//! End-to-End Test Support
//!
//! Shared infrastructure for haven-core journey tests: isolated store
//! instances backed by temp directories, and factories for realistic
//! history, preference and backup-bundle data.

pub mod harness;
pub mod mocks;
