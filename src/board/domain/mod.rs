//! Domain model for the project board.
//!
//! The board domain models projects, their ordered tasks, the status cycle,
//! and the optimistic status reconciler while keeping transport and
//! presentation concerns outside of the domain boundary.

mod board;
mod draft;
mod error;
mod ids;
mod project;
mod status;
mod task;

pub use board::{ProjectBoard, StatusUpdate};
pub use draft::{ProjectDraft, TaskDraft};
pub use error::{BoardDomainError, ParseTaskStatusError};
pub use ids::{ProjectId, TaskId};
pub use project::Project;
pub use status::{STATUS_CYCLE, TaskStatus};
pub use task::Task;
