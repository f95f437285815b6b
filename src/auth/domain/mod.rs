//! Domain model for authentication.
//!
//! Credentials and tokens are plain values; the session is an explicit
//! context object rather than ambient storage.

mod credentials;
mod error;
mod session;
mod tokens;

pub use credentials::{Credentials, Registration};
pub use error::AuthDomainError;
pub use session::{Session, SessionUser};
pub use tokens::{AccessToken, RefreshToken, TokenPair};
