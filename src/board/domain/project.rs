//! Project entity and its ordered task list.

use super::{ProjectId, Task, TaskId};
use serde::{Deserialize, Serialize};

/// A named collection of tasks in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    name: String,
    description: String,
    tasks: Vec<Task>,
}

impl Project {
    /// Creates a project with no tasks.
    #[must_use]
    pub fn new(id: ProjectId, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            tasks: Vec::new(),
        }
    }

    /// Replaces the task list, keeping the given order.
    #[must_use]
    pub fn with_tasks(mut self, tasks: impl IntoIterator<Item = Task>) -> Self {
        self.tasks = tasks.into_iter().collect();
        self
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the project name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the project description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the tasks in display order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Finds a task by identifier.
    #[must_use]
    pub fn task(&self, task_id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == task_id)
    }

    /// Returns a copy with the task appended at the end of the list.
    pub(super) fn with_appended_task(&self, task: Task) -> Self {
        let mut updated = self.clone();
        updated.tasks.push(task);
        updated
    }

    /// Returns a copy with the task's status advanced and finished tasks
    /// moved after unfinished ones, or `None` when the task is absent.
    pub(super) fn with_advanced_task(&self, task_id: TaskId) -> Option<Self> {
        self.task(task_id)?;

        let advanced = self.tasks.iter().map(|task| {
            if task.id() == task_id {
                task.advanced()
            } else {
                task.clone()
            }
        });

        Some(Self {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            tasks: done_last(advanced),
        })
    }
}

/// Stable partition: unfinished tasks first, finished tasks last, each group
/// in its original relative order.
fn done_last(tasks: impl Iterator<Item = Task>) -> Vec<Task> {
    let (mut open, done): (Vec<Task>, Vec<Task>) = tasks.partition(|task| !task.status().is_done());
    open.extend(done);
    open
}
