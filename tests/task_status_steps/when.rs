//! When steps for task status cycle BDD scenarios.

use super::world::{StatusCycleWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use tasktrackr::board::domain::{ProjectId, TaskId};

#[when("task {task:u64} in project {project:u64} is advanced")]
fn task_is_advanced(
    world: &mut StatusCycleWorld,
    task: u64,
    project: u64,
) -> Result<(), eyre::Report> {
    let dashboard = world
        .dashboard
        .as_mut()
        .ok_or_else(|| eyre::eyre!("dashboard not loaded in scenario world"))?;

    world.last_outcome = None;
    if let Some(sync) = dashboard.advance_status(ProjectId::new(project), TaskId::new(task)) {
        let outcome = run_async(sync.outcome()).wrap_err("join background status sync")?;
        world.last_outcome = Some(outcome);
    }
    Ok(())
}
