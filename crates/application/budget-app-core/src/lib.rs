pub mod app_core;
mod async_runtime;
pub mod backends;
pub mod controller;
pub mod ports;
pub mod session;
pub mod settings;
pub mod viewmodel;

pub use app_core::*;
pub use budget_core::{
    AccountHandle, BackendError, BudgetDocument, BudgetPeriod, Draft, ErrorInfo, FieldName,
    Route, UserData, UserProfile, ValidationError,
};
pub use backends::{BackendKind, HostedBackend};
pub use controller::{SignUpController, SubmitOutcome, SubmitProgress};
pub use ports::*;
pub use session::{BudgetSession, HomeController, HomeState, Overview};
pub use settings::BackendSettings;
pub use viewmodel::*;
