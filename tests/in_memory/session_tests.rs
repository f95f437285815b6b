//! Integration tests for the session lifecycle with persisted tokens.

use std::sync::Arc;

use super::helpers::notifier;
use camino::Utf8PathBuf;
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use tasktrackr::{
    auth::{
        adapters::{file::FileTokenStore, memory::InMemoryAuthApi},
        domain::{Session, SessionUser},
        ports::TokenStore,
        services::{LoginRequest, RegisterRequest, SessionService},
    },
    board::{adapters::memory::InMemoryBoardRemote, services::DashboardService},
    notify::RecordingNotifier,
};
use tempfile::TempDir;

type FileSessions =
    SessionService<InMemoryAuthApi, FileTokenStore, RecordingNotifier, DefaultClock>;

struct TokenDir {
    _temp: TempDir,
    path: Utf8PathBuf,
}

#[fixture]
fn token_dir() -> TokenDir {
    let temp = TempDir::new().expect("temp dir should be created");
    let path = Utf8PathBuf::from_path_buf(temp.path().join("tasktrackr"))
        .expect("temp path should be UTF-8");
    TokenDir { _temp: temp, path }
}

fn sessions(api: &InMemoryAuthApi, dir: &TokenDir, notifier: &RecordingNotifier) -> FileSessions {
    let store = FileTokenStore::open(&dir.path).expect("token store should open");
    SessionService::new(
        Arc::new(api.clone()),
        Arc::new(store),
        Arc::new(notifier.clone()),
        Arc::new(DefaultClock),
    )
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn session_survives_a_restart(token_dir: TokenDir, notifier: RecordingNotifier) {
    let api = InMemoryAuthApi::new().with_account("ozkan", "secret");
    sessions(&api, &token_dir, &notifier)
        .login(LoginRequest::new("ozkan", "secret"))
        .await
        .expect("login should succeed");

    let restored = sessions(&api, &token_dir, &notifier)
        .restore()
        .await
        .expect("restore should succeed");

    assert!(restored.is_authenticated());
    assert_eq!(restored.user(), Some(&SessionUser::Restored));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn logout_survives_a_restart(token_dir: TokenDir, notifier: RecordingNotifier) {
    let api = InMemoryAuthApi::new().with_account("ozkan", "secret");
    let service = sessions(&api, &token_dir, &notifier);
    service
        .login(LoginRequest::new("ozkan", "secret"))
        .await
        .expect("login should succeed");
    service.logout().expect("logout should succeed");

    let reopened = FileTokenStore::open(&token_dir.path).expect("token store should reopen");
    let restored = sessions(&api, &token_dir, &notifier)
        .restore()
        .await
        .expect("restore should succeed");

    assert!(reopened.refresh_token().expect("store readable").is_none());
    assert_eq!(restored, Session::Anonymous);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn registered_user_can_log_in_and_load_projects(
    token_dir: TokenDir,
    notifier: RecordingNotifier,
) {
    let api = InMemoryAuthApi::new();
    let service = sessions(&api, &token_dir, &notifier);
    service
        .register(RegisterRequest::new("newbie", "newbie@example.com", "pw", "pw"))
        .await
        .expect("registration should succeed");
    let session = service
        .login(LoginRequest::new("newbie", "pw"))
        .await
        .expect("login should succeed");

    let mut dashboard = DashboardService::new(
        Arc::new(InMemoryBoardRemote::new()),
        Arc::new(notifier.clone()),
        Arc::new(DefaultClock),
        &session,
    );
    let board = dashboard.load().await.expect("load should succeed");

    assert!(board.is_empty());
}
