//! Authentication and session lifecycle.
//!
//! A session starts by restoring stored tokens with a single refresh
//! attempt, is established by logging in, and ends by logging out, which
//! clears both stored tokens. The resulting [`domain::Session`] is passed
//! explicitly to services that call the API on the user's behalf.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
