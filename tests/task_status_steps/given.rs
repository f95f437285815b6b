//! Given steps for task status cycle BDD scenarios.

use super::world::{StatusCycleWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use tasktrackr::board::domain::{ProjectId, Task, TaskId, TaskStatus};

#[given(r#"project {project:u64} has task {task:u64} with status "{status}""#)]
fn project_has_task(
    world: &mut StatusCycleWorld,
    project: u64,
    task: u64,
    status: String,
) -> Result<(), eyre::Report> {
    let parsed = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;
    world.seeded_tasks.entry(project).or_default().push(Task::new(
        TaskId::new(task),
        format!("Task {task}"),
        parsed,
        ProjectId::new(project),
    ));
    Ok(())
}

#[given("the dashboard is loaded")]
fn dashboard_is_loaded(world: &mut StatusCycleWorld) -> Result<(), eyre::Report> {
    let dashboard = world.open_dashboard();
    run_async(dashboard.load()).wrap_err("load dashboard for scenario")?;
    Ok(())
}

#[given("the server rejects status updates")]
fn server_rejects_status_updates(world: &mut StatusCycleWorld) {
    world.remote.fail_status_updates(true);
}
