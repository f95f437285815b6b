//! Error types for board validation and parsing.

use super::ProjectId;
use thiserror::Error;

/// Errors returned while constructing or mutating board values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The project name is empty after trimming.
    #[error("Project name is required")]
    EmptyProjectName,

    /// The task title is empty after trimming.
    #[error("Task title is required")]
    EmptyTaskTitle,

    /// The referenced project is not on the board.
    #[error("project {0} is not on the board")]
    UnknownProject(ProjectId),
}

/// Error returned while parsing task statuses from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
