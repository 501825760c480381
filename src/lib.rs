// ABOUTME: Library root for crilist - container listing and filtering.
// ABOUTME: The CLI harness lives in main.rs.

pub mod config;
pub mod cri;
pub mod error;
pub mod output;
pub mod server;
pub mod store;
pub mod types;
