use std::sync::Arc;

use budget_core::{
    validate_draft, AccountHandle, BackendError, Draft, ErrorInfo, FieldName, Route, SignUpError,
    UserProfile, ValidationError,
};

use crate::app_core::{DraftStore, FormCommand, FormEvent};
use crate::ports::{AccountBackend, Navigator};

/// How a sign-up submission ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Account and profile exist; the draft was reset and the user sent home.
    Completed { account: AccountHandle },
    /// Rejected by the validation gate; nothing was sent to the backend.
    Invalid(ValidationError),
    /// The identity backend refused to create the account.
    AccountRejected(BackendError),
    /// The account was created but its profile was not written. Not reconciled.
    ProfileNotPersisted {
        account: AccountHandle,
        error: BackendError,
    },
    /// Another submission is still in flight.
    AlreadySubmitting,
}

impl SubmitOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, SubmitOutcome::Completed { .. })
    }

    /// The user-visible failure, if the submission failed.
    pub fn error(&self) -> Option<SignUpError> {
        match self {
            SubmitOutcome::Invalid(e) => Some(SignUpError::Validation(*e)),
            SubmitOutcome::AccountRejected(e)
            | SubmitOutcome::ProfileNotPersisted { error: e, .. } => {
                Some(SignUpError::Backend(e.clone()))
            }
            SubmitOutcome::Completed { .. } | SubmitOutcome::AlreadySubmitting => None,
        }
    }
}

/// Result of a fire-and-forget submission from the UI thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitProgress {
    /// Backend calls are running in the background.
    Spawned,
    /// The submission ended before reaching the backend.
    Finished(SubmitOutcome),
}

/// Owns the sign-up draft and drives account creation.
pub struct SignUpController<B: ?Sized, N: ?Sized> {
    pub store: DraftStore,
    backend: Arc<B>,
    navigator: Arc<N>,
}

impl<B: ?Sized, N: ?Sized> Clone for SignUpController<B, N> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            backend: Arc::clone(&self.backend),
            navigator: Arc::clone(&self.navigator),
        }
    }
}

impl<B, N> SignUpController<B, N>
where
    B: AccountBackend + ?Sized,
    N: Navigator + ?Sized,
{
    pub fn new(store: DraftStore, backend: Arc<B>, navigator: Arc<N>) -> Self {
        Self {
            store,
            backend,
            navigator,
        }
    }

    pub fn draft(&self) -> Draft {
        self.store.draft()
    }

    pub fn dispatch(&self, cmd: FormCommand) -> Option<SubmitProgress> {
        match cmd {
            FormCommand::ChangeField { field, value } => {
                self.on_field_change(field, value);
                None
            }
            FormCommand::Submit => Some(self.on_submit()),
        }
    }

    pub fn on_field_change(&self, field: FieldName, value: impl Into<String>) {
        self.store.apply(FormEvent::FieldChanged {
            field,
            value: value.into(),
        });
    }

    /// Runs the whole submission and waits for it.
    pub async fn submit(&self) -> SubmitOutcome {
        let draft = match self.begin() {
            Ok(d) => d,
            Err(outcome) => return outcome,
        };
        let outcome = create_then_persist(self.backend.as_ref(), &draft).await;
        self.finish(outcome)
    }

    /// Starts a submission without blocking the caller.
    ///
    /// The gate and validation run synchronously; the backend calls run on the
    /// tokio runtime and report back through the store and the navigator.
    pub fn on_submit(&self) -> SubmitProgress {
        let draft = match self.begin() {
            Ok(d) => d,
            Err(outcome) => return SubmitProgress::Finished(outcome),
        };

        let this = self.clone();
        let spawned = crate::async_runtime::spawn(async move {
            let backend = Arc::clone(&this.backend);
            let calls =
                tokio::spawn(async move { create_then_persist(backend.as_ref(), &draft).await });
            // A panicking backend must still release the submission slot.
            let outcome = match calls.await {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::error!("sign-up task failed: {e}");
                    SubmitOutcome::AccountRejected(BackendError::Transport(format!(
                        "sign-up task failed: {e}"
                    )))
                }
            };
            this.finish(outcome);
        });

        match spawned {
            Ok(()) => SubmitProgress::Spawned,
            Err(e) => {
                let error = BackendError::Transport(format!("failed to start async runtime: {e}"));
                tracing::error!("{error}");
                SubmitProgress::Finished(self.finish(SubmitOutcome::AccountRejected(error)))
            }
        }
    }

    /// Re-entrancy gate and validation gate, then claims the submission slot.
    fn begin(&self) -> Result<Draft, SubmitOutcome> {
        self.store.apply_with(|draft| {
            if draft.submitting {
                tracing::debug!("submission ignored: another one is in flight");
                return (None, Err(SubmitOutcome::AlreadySubmitting));
            }

            if let Err(e) = validate_draft(draft) {
                tracing::debug!("sign-up form rejected locally: {e}");
                let ev = FormEvent::ValidationFailed(ErrorInfo::new(e.to_string()));
                return (Some(ev), Err(SubmitOutcome::Invalid(e)));
            }

            (Some(FormEvent::SubmissionStarted), Ok(draft.clone()))
        })
    }

    fn finish(&self, outcome: SubmitOutcome) -> SubmitOutcome {
        match &outcome {
            SubmitOutcome::Completed { account } => {
                tracing::info!(account_id = %account.id, "account created");
                self.store.apply(FormEvent::SubmissionSucceeded);
                self.navigator.navigate_to(Route::Home);
            }
            SubmitOutcome::AccountRejected(error) => {
                tracing::debug!("account creation rejected: {error}");
                self.store
                    .apply(FormEvent::SubmissionFailed(ErrorInfo::new(error.to_string())));
            }
            SubmitOutcome::ProfileNotPersisted { account, error } => {
                tracing::warn!(
                    account_id = %account.id,
                    "account created but profile was not persisted: {error}"
                );
                self.store
                    .apply(FormEvent::SubmissionFailed(ErrorInfo::new(error.to_string())));
            }
            SubmitOutcome::Invalid(_) | SubmitOutcome::AlreadySubmitting => {}
        }
        outcome
    }
}

/// The two backend calls, strictly in order.
async fn create_then_persist<B>(backend: &B, draft: &Draft) -> SubmitOutcome
where
    B: AccountBackend + ?Sized,
{
    let account = match backend
        .create_account(&draft.email, &draft.password_one)
        .await
    {
        Ok(a) => a,
        Err(e) => return SubmitOutcome::AccountRejected(e),
    };

    let profile = UserProfile::new(&account, draft.display_name.clone());
    match backend.persist_user_profile(&profile).await {
        Ok(()) => SubmitOutcome::Completed { account },
        Err(error) => SubmitOutcome::ProfileNotPersisted { account, error },
    }
}
