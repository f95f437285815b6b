//! Then steps for task status cycle BDD scenarios.

use super::world::StatusCycleWorld;
use rstest_bdd_macros::then;
use tasktrackr::{board::domain::ProjectId, notify::NotificationLevel};

#[then(r#"the tasks of project {project:u64} are "{expected}""#)]
fn tasks_of_project_are(
    world: &StatusCycleWorld,
    project: u64,
    expected: String,
) -> Result<(), eyre::Report> {
    let dashboard = world
        .dashboard
        .as_ref()
        .ok_or_else(|| eyre::eyre!("dashboard not loaded in scenario world"))?;
    let found = dashboard
        .board()
        .project(ProjectId::new(project))
        .ok_or_else(|| eyre::eyre!("project {project} missing from board"))?;

    let actual = found
        .tasks()
        .iter()
        .map(|task| format!("{}:{}", task.id(), task.status().as_str()))
        .collect::<Vec<_>>()
        .join(", ");
    eyre::ensure!(actual == expected, "expected tasks {expected}, found {actual}");
    Ok(())
}

#[then("the server received {count:usize} status update")]
fn server_received_one_update(world: &StatusCycleWorld, count: usize) -> Result<(), eyre::Report> {
    server_received_updates(world, count)
}

#[then("the server received {count:usize} status updates")]
fn server_received_updates(world: &StatusCycleWorld, count: usize) -> Result<(), eyre::Report> {
    let received = world.remote.received_status_updates().len();
    eyre::ensure!(
        received == count,
        "expected {count} status updates, server received {received}"
    );
    Ok(())
}

#[then("no error notification is raised")]
fn no_error_notification(world: &StatusCycleWorld) -> Result<(), eyre::Report> {
    let errors = world.notifier.messages(NotificationLevel::Error);
    eyre::ensure!(errors.is_empty(), "unexpected error notifications: {errors:?}");
    Ok(())
}

#[then(r#"exactly one "{message}" error notification is raised"#)]
fn exactly_one_error_notification(
    world: &StatusCycleWorld,
    message: String,
) -> Result<(), eyre::Report> {
    let errors = world.notifier.messages(NotificationLevel::Error);
    eyre::ensure!(
        errors == vec![message.clone()],
        "expected a single '{message}' notification, found {errors:?}"
    );
    if let Some(outcome) = &world.last_outcome {
        eyre::ensure!(!outcome.is_synced(), "status sync unexpectedly succeeded");
    }
    Ok(())
}
