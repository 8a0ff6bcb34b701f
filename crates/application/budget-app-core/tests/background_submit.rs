mod support;

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use budget_app_core::{
    AccountBackend, ChannelNavigator, DraftStore, FieldName, Route, SignUpController,
    SubmitOutcome, SubmitProgress, UserProfile, ValidationError,
};
use budget_core::{AccountHandle, BackendError};
use support::RecordingBackend;

struct PanickingBackend;

#[async_trait]
impl AccountBackend for PanickingBackend {
    async fn create_account(
        &self,
        _email: &str,
        _password: &str,
    ) -> Result<AccountHandle, BackendError> {
        panic!("identity client blew up");
    }

    async fn persist_user_profile(&self, _profile: &UserProfile) -> Result<(), BackendError> {
        Ok(())
    }
}

#[test]
fn on_submit_runs_without_an_ambient_runtime_and_reports_through_the_navigator() {
    let (navigator, routes) = ChannelNavigator::channel();
    let ctrl = SignUpController::new(
        DraftStore::default(),
        Arc::new(RecordingBackend::ok()),
        Arc::new(navigator),
    );
    ctrl.on_field_change(FieldName::DisplayName, "Alice");
    ctrl.on_field_change(FieldName::Email, "alice@example.com");
    ctrl.on_field_change(FieldName::PasswordOne, "abc123");
    ctrl.on_field_change(FieldName::PasswordTwo, "abc123");

    assert_eq!(ctrl.on_submit(), SubmitProgress::Spawned);

    let route = routes
        .recv_timeout(Duration::from_secs(3))
        .expect("navigation after sign-up");
    assert_eq!(route, Route::Home);
    assert!(ctrl.draft().display_name.is_empty());
}

#[test]
fn on_submit_reports_validation_failures_immediately() {
    let (navigator, routes) = ChannelNavigator::channel();
    let ctrl = SignUpController::new(
        DraftStore::default(),
        Arc::new(RecordingBackend::ok()),
        Arc::new(navigator),
    );

    assert_eq!(
        ctrl.on_submit(),
        SubmitProgress::Finished(SubmitOutcome::Invalid(
            ValidationError::DisplayNameTooShort
        ))
    );
    assert!(routes.try_recv().is_err());
}

#[test]
fn panicking_backend_releases_the_submission_slot() {
    let (navigator, routes) = ChannelNavigator::channel();
    let ctrl = SignUpController::new(
        DraftStore::default(),
        Arc::new(PanickingBackend),
        Arc::new(navigator),
    );
    ctrl.on_field_change(FieldName::DisplayName, "Alice");
    ctrl.on_field_change(FieldName::Email, "alice@example.com");
    ctrl.on_field_change(FieldName::PasswordOne, "abc123");
    ctrl.on_field_change(FieldName::PasswordTwo, "abc123");

    assert_eq!(ctrl.on_submit(), SubmitProgress::Spawned);

    let deadline = Instant::now() + Duration::from_secs(3);
    while ctrl.draft().submitting {
        assert!(Instant::now() < deadline, "submission never settled");
        std::thread::sleep(Duration::from_millis(10));
    }

    let draft = ctrl.draft();
    let message = draft.error.map(|e| e.message).unwrap_or_default();
    assert!(message.contains("sign-up task failed"), "{message}");
    assert_eq!(draft.display_name, "Alice");
    assert!(routes.try_recv().is_err());

    // The form is usable again.
    assert_ne!(
        ctrl.on_submit(),
        SubmitProgress::Finished(SubmitOutcome::AlreadySubmitting)
    );
}
