//! In-memory adapters for authentication.

mod api;
mod token_store;

pub use api::InMemoryAuthApi;
pub use token_store::InMemoryTokenStore;
