//! Port contracts for the project board.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.

pub mod remote;

pub use remote::{BoardRemote, BoardRemoteError, BoardRemoteResult};
