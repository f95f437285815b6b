//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use mockable::{Clock, DefaultClock};
use rstest::fixture;
use tasktrackr::{
    auth::domain::{AccessToken, Session, SessionUser},
    board::{
        adapters::memory::InMemoryBoardRemote,
        domain::{Project, ProjectId, Task, TaskId, TaskStatus},
        services::DashboardService,
    },
    notify::RecordingNotifier,
};

/// Dashboard wired to in-memory adapters.
pub type TestDashboard = DashboardService<InMemoryBoardRemote, RecordingNotifier, DefaultClock>;

/// Bearer token accepted by [`seeded_remote`].
pub const TOKEN: &str = "mock_token";

/// Project seeded by [`seeded_remote`].
pub const ALPHA: ProjectId = ProjectId::new(1);

/// Second project seeded by [`seeded_remote`].
pub const BETA: ProjectId = ProjectId::new(2);

/// Provides a fresh notifier for each test.
#[fixture]
pub fn notifier() -> RecordingNotifier {
    RecordingNotifier::new()
}

/// Provides a remote holding two projects with mixed task statuses.
#[fixture]
pub fn seeded_remote() -> InMemoryBoardRemote {
    InMemoryBoardRemote::with_projects([
        Project::new(ALPHA, "Project Alpha", "Testing project").with_tasks([
            Task::new(TaskId::new(10), "Task A", TaskStatus::Pending, ALPHA),
            Task::new(TaskId::new(11), "Task B", TaskStatus::InProgress, ALPHA),
            Task::new(TaskId::new(12), "Task C", TaskStatus::Done, ALPHA),
        ]),
        Project::new(BETA, "Project Beta", "").with_tasks([Task::new(
            TaskId::new(20),
            "Task D",
            TaskStatus::Pending,
            BETA,
        )]),
    ])
    .requiring_token(AccessToken::new(TOKEN))
}

/// Returns a session holding the token the seeded remote accepts.
#[must_use]
pub fn session() -> Session {
    Session::Authenticated {
        user: SessionUser::Named("ozkan".to_owned()),
        access: AccessToken::new(TOKEN),
        since: DefaultClock.utc(),
    }
}

/// Builds a dashboard over the given adapters.
#[must_use]
pub fn dashboard(remote: &InMemoryBoardRemote, notifier: &RecordingNotifier) -> TestDashboard {
    DashboardService::new(
        Arc::new(remote.clone()),
        Arc::new(notifier.clone()),
        Arc::new(DefaultClock),
        &session(),
    )
}

/// Returns `(task id, status)` pairs for a project in display order.
#[must_use]
pub fn task_order(dashboard: &TestDashboard, project_id: ProjectId) -> Vec<(u64, TaskStatus)> {
    dashboard
        .board()
        .project(project_id)
        .map(|project| {
            project
                .tasks()
                .iter()
                .map(|task| (task.id().value(), task.status()))
                .collect()
        })
        .unwrap_or_default()
}
