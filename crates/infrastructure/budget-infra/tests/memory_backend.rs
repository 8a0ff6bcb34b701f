use budget_core::{BackendError, BudgetPeriod, UserProfile};
use budget_infra::firebase::identity;
use budget_infra::InMemoryBackend;
use serde_json::json;

#[tokio::test]
async fn create_account_enforces_hosted_policies() {
    let backend = InMemoryBackend::new();

    let weak = backend.create_account("alice@example.com", "abc").await;
    assert_eq!(weak.unwrap_err().code(), Some(identity::WEAK_PASSWORD));

    let bad_email = backend.create_account("alice", "abc123").await;
    assert_eq!(
        bad_email.unwrap_err().to_string(),
        "The email address is badly formatted."
    );

    backend
        .create_account("alice@example.com", "abc123")
        .await
        .unwrap();
    let dup = backend
        .create_account("ALICE@example.com", "abc123")
        .await
        .unwrap_err();
    assert_eq!(dup.code(), Some(identity::EMAIL_EXISTS));
    assert_eq!(backend.account_count(), 1);
}

#[tokio::test]
async fn new_account_becomes_the_current_session() {
    let backend = InMemoryBackend::new();
    let handle = backend
        .create_account("alice@example.com", "abc123")
        .await
        .unwrap();
    assert_eq!(backend.current_account(), Some(handle.id));
}

#[tokio::test]
async fn profile_write_replaces_the_user_record() {
    let backend = InMemoryBackend::new();
    let handle = backend
        .create_account("alice@example.com", "abc123")
        .await
        .unwrap();
    backend.set_budget_year(&handle.id, "2026").await.unwrap();

    backend
        .persist_user_profile(&UserProfile::new(&handle, "Alice"))
        .await
        .unwrap();

    let data = backend.get_user_data(&handle.id).await.unwrap().unwrap();
    assert_eq!(data.display_name, "Alice");
    assert_eq!(data.budget_year, None);
}

#[tokio::test]
async fn profile_write_drops_budgets_stored_under_the_user() {
    let backend = InMemoryBackend::new();
    let handle = backend
        .create_account("alice@example.com", "abc123")
        .await
        .unwrap();
    let oct = BudgetPeriod::new("2026", "10").unwrap();
    backend
        .init_budget(&handle.id, &oct, &json!({"income": []}))
        .await
        .unwrap();
    backend
        .init_budget("uid-other", &oct, &json!({"income": []}))
        .await
        .unwrap();

    backend
        .persist_user_profile(&UserProfile::new(&handle, "Alice"))
        .await
        .unwrap();

    assert_eq!(backend.get_budget(&handle.id, &oct).await.unwrap(), None);
    assert!(backend.get_budget("uid-other", &oct).await.unwrap().is_some());
}

#[tokio::test]
async fn email_is_checked_exactly_as_typed() {
    let backend = InMemoryBackend::new();

    let padded = backend
        .create_account(" alice@example.com ", "abc123")
        .await
        .unwrap_err();
    assert_eq!(padded.code(), Some(identity::INVALID_EMAIL));

    let blank = backend.create_account("", "abc123").await.unwrap_err();
    assert_eq!(blank.code(), Some(identity::MISSING_EMAIL));
    assert_eq!(backend.account_count(), 0);
}

#[tokio::test]
async fn injected_profile_failure_is_reported_verbatim() {
    let backend = InMemoryBackend::new();
    let handle = backend
        .create_account("alice@example.com", "abc123")
        .await
        .unwrap();
    backend.fail_profile_writes(Some("storage unavailable"));

    let err = backend
        .persist_user_profile(&UserProfile::new(&handle, "Alice"))
        .await
        .unwrap_err();

    assert_eq!(err, BackendError::rejected("storage unavailable"));
    assert_eq!(backend.get_user_data(&handle.id).await.unwrap(), None);
}

#[tokio::test]
async fn budgets_are_keyed_per_account_and_period() {
    let backend = InMemoryBackend::new();
    let oct = BudgetPeriod::new("2026", "10").unwrap();
    let nov = BudgetPeriod::new("2026", "11").unwrap();

    backend
        .init_budget("uid-1", &oct, &json!({"income": [100]}))
        .await
        .unwrap();

    assert_eq!(
        backend.get_budget("uid-1", &oct).await.unwrap(),
        Some(json!({"income": [100]}))
    );
    assert_eq!(backend.get_budget("uid-1", &nov).await.unwrap(), None);
    assert_eq!(backend.get_budget("uid-2", &oct).await.unwrap(), None);
}
