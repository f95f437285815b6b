//! Port contracts for authentication.
//!
//! Ports define infrastructure-agnostic interfaces used by the session
//! service.

pub mod api;
pub mod token_store;

pub use api::{AuthApi, AuthApiError, AuthApiResult};
pub use token_store::{TokenStore, TokenStoreError, TokenStoreResult};
