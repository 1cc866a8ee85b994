//! Unit Tests Module
//!
//! Property-style tests against the public API.

pub mod classification;
