//! Integration Tests Module
//!
//! End-to-end tests that exercise several modules together.

pub mod http_helpers;
pub mod indicator_files;
