//! Application services for the project dashboard.

mod dashboard;
mod sync;

pub use dashboard::{
    AddTaskRequest, CreateProjectRequest, DashboardError, DashboardResult, DashboardService,
    FETCH_FAILED_MESSAGE, LOGIN_REQUIRED_MESSAGE, PROJECT_CREATE_FAILED_MESSAGE,
    PROJECT_CREATED_MESSAGE, TASK_ADD_FAILED_MESSAGE, TASK_ADDED_MESSAGE,
};
pub use sync::{PendingSync, SYNC_FAILED_MESSAGE, SyncOutcome, persist_status};
