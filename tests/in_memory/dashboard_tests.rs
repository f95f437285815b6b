//! In-memory integration tests for the dashboard workflow.

use super::helpers::{ALPHA, BETA, TestDashboard, dashboard, notifier, seeded_remote, task_order};
use tasktrackr::{
    board::{
        adapters::memory::InMemoryBoardRemote,
        domain::{StatusUpdate, TaskId, TaskStatus},
        services::{
            AddTaskRequest, CreateProjectRequest, PROJECT_CREATED_MESSAGE, SYNC_FAILED_MESSAGE,
            TASK_ADDED_MESSAGE,
        },
    },
    notify::{NotificationLevel, RecordingNotifier},
};
use rstest::rstest;

async fn loaded(remote: &InMemoryBoardRemote, notifier: &RecordingNotifier) -> TestDashboard {
    let mut service = dashboard(remote, notifier);
    service.load().await.expect("load should succeed");
    service
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn full_cycle_returns_task_to_pending(
    seeded_remote: InMemoryBoardRemote,
    notifier: RecordingNotifier,
) {
    let mut service = loaded(&seeded_remote, &notifier).await;
    let task = TaskId::new(10);

    for _ in 0..3 {
        let pending = service
            .advance_status(ALPHA, task)
            .expect("sync should be dispatched");
        let outcome = pending.outcome().await.expect("sync task should finish");
        assert!(outcome.is_synced());
    }

    let status = service.board().task(ALPHA, task).map(|found| found.status());
    assert_eq!(status, Some(TaskStatus::Pending));
    assert_eq!(
        seeded_remote.received_status_updates(),
        vec![
            StatusUpdate::new(task, TaskStatus::InProgress),
            StatusUpdate::new(task, TaskStatus::Done),
            StatusUpdate::new(task, TaskStatus::Pending),
        ]
    );
    assert!(notifier.notifications().is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completed_task_moves_behind_open_tasks(
    seeded_remote: InMemoryBoardRemote,
    notifier: RecordingNotifier,
) {
    let mut service = loaded(&seeded_remote, &notifier).await;

    let pending = service
        .advance_status(ALPHA, TaskId::new(11))
        .expect("sync should be dispatched");
    pending.outcome().await.expect("sync task should finish");

    assert_eq!(
        task_order(&service, ALPHA),
        vec![
            (10, TaskStatus::Pending),
            (12, TaskStatus::Done),
            (11, TaskStatus::Done),
        ]
    );
    assert_eq!(task_order(&service, BETA), vec![(20, TaskStatus::Pending)]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn remote_outage_keeps_local_change_and_warns_once(
    seeded_remote: InMemoryBoardRemote,
    notifier: RecordingNotifier,
) {
    let mut service = loaded(&seeded_remote, &notifier).await;
    seeded_remote.fail_status_updates(true);

    let pending = service
        .advance_status(ALPHA, TaskId::new(10))
        .expect("sync should be dispatched");
    let outcome = pending.outcome().await.expect("sync task should finish");

    assert!(!outcome.is_synced());
    assert_eq!(
        task_order(&service, ALPHA).first(),
        Some(&(10, TaskStatus::InProgress))
    );
    assert_eq!(seeded_remote.received_status_updates().len(), 1);
    assert_eq!(
        notifier.messages(NotificationLevel::Error),
        vec![SYNC_FAILED_MESSAGE.to_owned()]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_project_and_task_appear_on_board(
    seeded_remote: InMemoryBoardRemote,
    notifier: RecordingNotifier,
) {
    let mut service = loaded(&seeded_remote, &notifier).await;

    let project = service
        .create_project(CreateProjectRequest::new("Project Gamma").with_description("New"))
        .await
        .expect("project creation should succeed");
    let task = service
        .add_task(project.id(), AddTaskRequest::new("First task"))
        .await
        .expect("task creation should succeed");

    assert_eq!(service.board().len(), 3);
    assert_eq!(
        task_order(&service, project.id()),
        vec![(task.id().value(), TaskStatus::Pending)]
    );
    assert_eq!(seeded_remote.stored_projects().len(), 3);
    assert_eq!(
        notifier.messages(NotificationLevel::Success),
        vec![
            PROJECT_CREATED_MESSAGE.to_owned(),
            TASK_ADDED_MESSAGE.to_owned()
        ]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reload_reflects_persisted_statuses(
    seeded_remote: InMemoryBoardRemote,
    notifier: RecordingNotifier,
) {
    let mut service = loaded(&seeded_remote, &notifier).await;
    let pending = service
        .advance_status(BETA, TaskId::new(20))
        .expect("sync should be dispatched");
    pending.outcome().await.expect("sync task should finish");

    let reloaded = loaded(&seeded_remote, &notifier).await;

    assert_eq!(
        task_order(&reloaded, BETA),
        vec![(20, TaskStatus::InProgress)]
    );
}
