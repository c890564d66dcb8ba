//! Integration tests module
//!
//! End-to-end tests for the schedule core, including:
//! - Editing workflows (bulk transforms and day edits) followed by validation
//! - Wire documents with rule violations and the message each one surfaces
//! - Whole-document persistence through the file store

pub mod error_scenarios;
pub mod fixtures;
pub mod store_test;
pub mod workflow_test;
