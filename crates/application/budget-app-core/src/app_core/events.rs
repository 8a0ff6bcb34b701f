use budget_core::{ErrorInfo, FieldName};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    // Editing
    FieldChanged { field: FieldName, value: String },

    // Submission lifecycle
    SubmissionStarted,
    SubmissionFailed(ErrorInfo),
    SubmissionSucceeded,

    // Validation failures happen before a submission starts.
    ValidationFailed(ErrorInfo),
}
