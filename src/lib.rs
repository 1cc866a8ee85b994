//! OSINT indicator toolkit
//!

pub mod apikeys;
pub mod classify;
pub mod cli;
pub mod config;
pub mod console;
pub mod crypto;
pub mod errors;
pub mod fsutil;
pub mod http;
pub mod utils;
