//! Adapter implementations for authentication ports.

pub mod file;
pub mod http;
pub mod memory;
