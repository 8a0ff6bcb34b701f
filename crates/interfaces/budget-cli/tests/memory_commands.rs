use std::sync::Arc;

use budget_app_core::session::empty_budget;
use budget_app_core::{HostedBackend, UserDataStore};
use budget_cli::commands::{self, SignUpInput};
use budget_infra::InMemoryBackend;

fn input(display_name: &str, password: &str, confirm: &str) -> SignUpInput {
    SignUpInput {
        display_name: display_name.to_string(),
        email: "alice@example.com".to_string(),
        password: password.to_string(),
        confirm_password: confirm.to_string(),
    }
}

#[tokio::test]
async fn signup_then_open_budget() {
    let backend: Arc<dyn HostedBackend> = Arc::new(InMemoryBackend::new());

    let account = commands::cmd_signup(backend.clone(), input("Alice", "hunter22", "hunter22"))
        .await
        .unwrap();
    assert_eq!(backend.current_account(), Some(account.id.clone()));

    commands::cmd_user_show(backend.clone(), &account.id)
        .await
        .unwrap();

    let budget = commands::cmd_budget_open(backend, &account.id, "2024", "03")
        .await
        .unwrap();
    assert_eq!(budget, empty_budget());
}

#[tokio::test]
async fn validation_errors_become_command_errors() {
    let backend = Arc::new(InMemoryBackend::new());

    let err = commands::cmd_signup(backend.clone(), input("Al", "hunter22", "hunter22"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "The display name is too short.");

    let err = commands::cmd_signup(backend.clone(), input("Alice", "hunter22", "hunter23"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "The passwords don't match.");
    assert_eq!(backend.account_count(), 0);
}

#[tokio::test]
async fn profile_failure_names_the_orphaned_account() {
    let backend = Arc::new(InMemoryBackend::new());
    backend.fail_profile_writes(Some("storage unavailable"));

    let err = commands::cmd_signup(backend.clone(), input("Alice", "hunter22", "hunter22"))
        .await
        .unwrap_err()
        .to_string();
    assert!(err.contains("was created but its profile was not saved"), "{err}");
    assert!(err.ends_with("storage unavailable"), "{err}");
    assert_eq!(backend.account_count(), 1);
}

#[tokio::test]
async fn invalid_budget_month_is_refused() {
    let backend = Arc::new(InMemoryBackend::new());
    let err = commands::cmd_budget_open(backend, "uid-1", "2024", "13")
        .await
        .unwrap_err();
    assert!(err.to_string().contains("budget month"), "{err}");
}

#[tokio::test]
async fn omitted_confirmation_reuses_the_password() {
    let backend = Arc::new(InMemoryBackend::new());
    let input = SignUpInput::new(
        "Alice".to_string(),
        "alice@example.com".to_string(),
        "hunter22".to_string(),
        None,
    );
    assert_eq!(input.confirm_password, "hunter22");

    let account: budget_core::AccountHandle = commands::cmd_signup(backend.clone(), input)
        .await
        .unwrap();
    assert_eq!(backend.current_account(), Some(account.id));
}
