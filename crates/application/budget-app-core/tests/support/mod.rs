#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use budget_app_core::{
    AccountBackend, DraftStore, FieldName, Navigator, Route, SignUpController, UserProfile,
};
use budget_core::{AccountHandle, BackendError};
use tokio::sync::Notify;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    CreateAccount { email: String, password: String },
    PersistProfile(UserProfile),
}

pub struct RecordingBackend {
    pub calls: Mutex<Vec<Call>>,
    pub create_result: Result<AccountHandle, BackendError>,
    pub persist_result: Result<(), BackendError>,
    /// When set, `create_account` signals `entered` and waits for `release`.
    pub gate: Option<(Notify, Notify)>,
}

impl RecordingBackend {
    pub fn ok() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            create_result: Ok(AccountHandle::new("uid-1")),
            persist_result: Ok(()),
            gate: None,
        }
    }

    pub fn failing_create(message: &str) -> Self {
        Self {
            create_result: Err(BackendError::rejected(message)),
            ..Self::ok()
        }
    }

    pub fn failing_persist(message: &str) -> Self {
        Self {
            persist_result: Err(BackendError::rejected(message)),
            ..Self::ok()
        }
    }

    pub fn gated() -> Self {
        Self {
            gate: Some((Notify::new(), Notify::new())),
            ..Self::ok()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn create_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::CreateAccount { .. }))
            .count()
    }
}

#[async_trait]
impl AccountBackend for RecordingBackend {
    async fn create_account(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AccountHandle, BackendError> {
        self.calls.lock().unwrap().push(Call::CreateAccount {
            email: email.to_string(),
            password: password.to_string(),
        });
        if let Some((entered, release)) = &self.gate {
            entered.notify_one();
            release.notified().await;
        }
        self.create_result.clone()
    }

    async fn persist_user_profile(&self, profile: &UserProfile) -> Result<(), BackendError> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::PersistProfile(profile.clone()));
        self.persist_result.clone()
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    pub routes: Mutex<Vec<Route>>,
    pub count: AtomicUsize,
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl Navigator for RecordingNavigator {
    fn navigate_to(&self, route: Route) {
        self.count.fetch_add(1, Ordering::SeqCst);
        self.routes.lock().unwrap().push(route);
    }
}

pub type TestController = SignUpController<RecordingBackend, RecordingNavigator>;

pub fn controller(
    backend: RecordingBackend,
) -> (TestController, Arc<RecordingBackend>, Arc<RecordingNavigator>) {
    let backend = Arc::new(backend);
    let navigator = Arc::new(RecordingNavigator::default());
    let ctrl = SignUpController::new(DraftStore::default(), backend.clone(), navigator.clone());
    (ctrl, backend, navigator)
}

pub fn fill(ctrl: &TestController, display_name: &str, one: &str, two: &str) {
    ctrl.on_field_change(FieldName::DisplayName, display_name);
    ctrl.on_field_change(FieldName::Email, "alice@example.com");
    ctrl.on_field_change(FieldName::PasswordOne, one);
    ctrl.on_field_change(FieldName::PasswordTwo, two);
}
