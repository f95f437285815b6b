//! `TaskTrackr`: client core for a project and task dashboard.
//!
//! This crate provides the logic a dashboard UI drives against a remote
//! task-tracking REST API: restoring and establishing an authenticated
//! session, loading projects, creating projects and tasks, and cycling task
//! status with optimistic local updates and background reconciliation.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (HTTP, files, memory)
//!
//! # Modules
//!
//! - [`auth`]: Credentials, tokens, and the session lifecycle
//! - [`board`]: Projects, tasks, the status cycle, and the dashboard service
//! - [`notify`]: User-visible notifications raised by services
//! - [`config`]: Client configuration
//! - [`logging`]: Tracing subscriber installation
//! - [`transport`]: Shared HTTP client for the remote API

pub mod auth;
pub mod board;
pub mod config;
pub mod logging;
pub mod notify;
pub mod transport;
