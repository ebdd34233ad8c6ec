//! Infrastructure implementations.
//!
//! Contains configuration and the storage adapters behind the port traits.

pub mod config;
pub mod json_file_store;
pub mod memory_store;
pub mod ports;
