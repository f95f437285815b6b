//! Shared world state for task status cycle BDD scenarios.

use std::collections::BTreeMap;
use std::sync::Arc;

use mockable::{Clock, DefaultClock};
use rstest::fixture;
use tasktrackr::{
    auth::domain::{AccessToken, Session, SessionUser},
    board::{
        adapters::memory::InMemoryBoardRemote,
        domain::{Project, ProjectId, Task},
        services::{DashboardService, SyncOutcome},
    },
    notify::RecordingNotifier,
};

/// Dashboard type used by the BDD world.
pub type TestDashboard = DashboardService<InMemoryBoardRemote, RecordingNotifier, DefaultClock>;

/// Scenario world for task status cycle behaviour tests.
pub struct StatusCycleWorld {
    pub seeded_tasks: BTreeMap<u64, Vec<Task>>,
    pub remote: InMemoryBoardRemote,
    pub notifier: RecordingNotifier,
    pub dashboard: Option<TestDashboard>,
    pub last_outcome: Option<SyncOutcome>,
}

impl StatusCycleWorld {
    /// Creates a world with no seeded projects.
    #[must_use]
    pub fn new() -> Self {
        Self {
            seeded_tasks: BTreeMap::new(),
            remote: InMemoryBoardRemote::new(),
            notifier: RecordingNotifier::new(),
            dashboard: None,
            last_outcome: None,
        }
    }

    /// Replaces the remote with one holding the seeded projects and builds a
    /// dashboard over it.
    pub fn open_dashboard(&mut self) -> &mut TestDashboard {
        let projects = self.seeded_tasks.iter().map(|(id, tasks)| {
            Project::new(ProjectId::new(*id), format!("Project {id}"), "")
                .with_tasks(tasks.iter().cloned())
        });
        self.remote = InMemoryBoardRemote::with_projects(projects);
        let session = Session::Authenticated {
            user: SessionUser::Named("ozkan".to_owned()),
            access: AccessToken::new("mock_token"),
            since: DefaultClock.utc(),
        };
        self.dashboard.insert(DashboardService::new(
            Arc::new(self.remote.clone()),
            Arc::new(self.notifier.clone()),
            Arc::new(DefaultClock),
            &session,
        ))
    }
}

impl Default for StatusCycleWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> StatusCycleWorld {
    StatusCycleWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
