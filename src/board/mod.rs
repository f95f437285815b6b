//! Project board management.
//!
//! This module covers the dashboard's project and task handling: loading the
//! board from the remote API, creating projects and tasks, and cycling task
//! status through `pending`, `in_progress`, and `done`. Status changes are
//! optimistic: the board is updated immediately, finished tasks sink below
//! unfinished ones, and the change is persisted in the background without
//! rollback on failure. The module follows hexagonal architecture:
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
