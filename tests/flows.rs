//! End-to-end flows through the shell and the simulated service

use async_trait::async_trait;
use std::time::Duration;

use sure_circle::model::Vote;
use sure_circle::router::{tabs, Page};
use sure_circle::service::{
    CircleService, Clock, InstantClock, MockCircleService, AUTH_DELAY, SUBMIT_CLAIM_DELAY,
};
use sure_circle::session::AuthMode;
use sure_circle::shell::{Modal, Shell};
use sure_circle::staging::{StagedFile, MAX_FILES, MAX_FILE_SIZE};
use sure_circle::storage::{MemoryStore, Persistence};
use sure_circle::validation::Form;

/// Clock on tokio's timer, so paused-time tests can observe the delays
struct TokioClock;

#[async_trait(?Send)]
impl Clock for TokioClock {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

fn login_form(password: &str) -> Form {
    Form::new()
        .required("email", "arjun.patel@email.com")
        .required("password", password)
}

/// Same order the UI follows: validate, call the service, then finish
async fn submit_auth<S: CircleService>(
    shell: &mut Shell,
    service: &S,
    store: &Persistence<MemoryStore>,
    mode: AuthMode,
    form: &Form,
) -> bool {
    if shell.begin_auth(form).is_err() {
        return false;
    }
    match service.authenticate(mode, form).await {
        Ok(user) => {
            store.cache_user(&user).unwrap();
            shell.complete_auth(mode, user);
            true
        }
        Err(_) => false,
    }
}

#[tokio::test]
async fn login_routes_to_dashboard_after_delay() {
    let service = MockCircleService::new(InstantClock::new());
    let store = Persistence::new(MemoryStore::new());
    let mut shell = Shell::new();

    assert!(!shell.navigate(Page::Dashboard));
    assert_eq!(shell.modal(), Some(Modal::Login));

    let ok = submit_auth(&mut shell, &service, &store, AuthMode::Login, &login_form("secret")).await;

    assert!(ok);
    assert!(shell.is_authenticated());
    assert_eq!(shell.page(), Some(Page::Dashboard));
    assert_eq!(shell.modal(), None);
    assert_eq!(service.clock().slept(), vec![AUTH_DELAY]);
    assert_eq!(store.cached_user().unwrap().name, "Arjun Patel");
}

#[tokio::test]
async fn blank_login_field_never_calls_service() {
    let service = MockCircleService::new(InstantClock::new());
    let store = Persistence::new(MemoryStore::new());
    let mut shell = Shell::new();
    shell.open_modal(Modal::Login);

    let ok = submit_auth(&mut shell, &service, &store, AuthMode::Login, &login_form("  ")).await;

    assert!(!ok);
    assert!(!shell.is_authenticated());
    assert_eq!(shell.page(), Some(Page::Home));
    assert!(service.clock().slept().is_empty());
    assert!(store.store().is_empty());
    assert_eq!(shell.notification().unwrap().title, "Validation Error");
}

#[tokio::test(start_paused = true)]
async fn signup_waits_full_delay() {
    let service = MockCircleService::new(TokioClock);
    let start = tokio::time::Instant::now();

    let user = service
        .authenticate(AuthMode::Signup, &Form::new())
        .await
        .unwrap();

    assert_eq!(user.name, "New User");
    assert!(start.elapsed() >= AUTH_DELAY);
}

#[tokio::test(start_paused = true)]
async fn claim_submission_takes_three_seconds() {
    let service = MockCircleService::new(TokioClock);
    let mut shell = Shell::restore(Some(sure_circle::AppData::seeded().users[0].clone()));
    shell.navigate_with_action(Page::Claims, "file");
    assert_eq!(shell.claim_tabs().active(), Some(tabs::FILE_CLAIM));

    let form = Form::new()
        .required("pool", "1")
        .required("amount", "12000")
        .required("reason", "Phone screen damage");
    shell.stage_files(vec![StagedFile::new("receipt.jpg", "image/jpeg", 2048)]);
    assert!(shell.begin_claim(&form).is_ok());

    let start = tokio::time::Instant::now();
    service
        .submit_claim(&form, &shell.staged_files())
        .await
        .unwrap();
    assert!(start.elapsed() >= SUBMIT_CLAIM_DELAY);

    shell.claim_submitted();
    assert!(shell.staging().is_empty());
    assert_eq!(shell.claim_tabs().active(), Some(tabs::MY_CLAIMS));
}

#[test]
fn staging_keeps_processing_after_rejections() {
    let mut shell = Shell::new();
    let mut batch = vec![
        StagedFile::new("huge.pdf", "application/pdf", MAX_FILE_SIZE + 1),
        StagedFile::new("script.js", "text/javascript", 10),
    ];
    batch.extend((0..MAX_FILES + 2).map(|i| StagedFile::new(format!("p{}.png", i), "image/png", 10)));

    let outcome = shell.stage_files(batch);

    assert_eq!(shell.staging().len(), MAX_FILES);
    assert_eq!(outcome.accepted.len(), MAX_FILES);
    assert_eq!(outcome.rejected.len(), 4);
    let titles: Vec<&str> = shell.notifications().map(|n| n.title.as_str()).collect();
    assert_eq!(
        titles,
        ["File Too Large", "Invalid File Type", "File Limit", "File Limit"]
    );
    assert!(!shell.staging().names().iter().any(|n| n == "huge.pdf"));
}

#[tokio::test]
async fn repeated_votes_report_same_tally() {
    let service = MockCircleService::new(InstantClock::new());
    let mut shell = Shell::new();

    for vote in [Vote::Approve, Vote::Approve, Vote::Reject] {
        let tally = service.cast_vote(1, vote).await.unwrap();
        shell.vote_recorded(vote);
        assert_eq!(tally.votes_for, 9);
        assert_eq!(tally.progress_percent, 90);
    }
    assert_eq!(shell.notifications().count(), 3);
    assert!(shell.latest_notification().unwrap().message.contains("rejected"));
}

#[tokio::test]
async fn submitted_claim_does_not_come_back_as_draft() {
    let service = MockCircleService::new(InstantClock::new());
    let store = Persistence::new(MemoryStore::new());
    let mut shell = Shell::restore(Some(sure_circle::AppData::seeded().users[0].clone()));
    shell.navigate_with_action(Page::Claims, "file");

    let form = Form::new()
        .required("pool", "1")
        .required("amount", "4500")
        .required("reason", "Laptop charger");
    store.save_claim_draft(&form).unwrap();
    shell.stage_files(vec![StagedFile::new("bill.pdf", "application/pdf", 1024)]);
    assert!(shell.begin_claim(&form).is_ok());

    service.submit_claim(&form, &shell.staged_files()).await.unwrap();
    store.clear_claim_draft().unwrap();
    shell.claim_submitted();

    assert!(store.claim_draft().unwrap().is_none());
    assert!(shell.staging().is_empty());
}

#[test]
fn logout_clears_session_from_every_page() {
    let store = Persistence::new(MemoryStore::new());
    let member = sure_circle::AppData::seeded().users[0].clone();

    for page in Page::ALL {
        store.cache_user(&member).unwrap();
        let mut shell = Shell::restore(store.cached_user());
        assert!(shell.navigate(page));

        shell.logout();
        store.forget_user().unwrap();

        assert!(!shell.is_authenticated());
        assert_eq!(shell.page(), Some(Page::Home));
        assert!(store.cached_user().is_none());
    }
}
