use budget_core::Draft;

use super::events::FormEvent;

pub fn reduce(mut draft: Draft, ev: FormEvent) -> Draft {
    match ev {
        FormEvent::FieldChanged { field, value } => draft.set_field(field, value),

        FormEvent::SubmissionStarted => draft.submitting = true,

        FormEvent::SubmissionFailed(err) => {
            // Field values stay as submitted so the user can correct and retry.
            draft.submitting = false;
            draft.error = Some(err);
        }

        FormEvent::ValidationFailed(err) => draft.error = Some(err),

        FormEvent::SubmissionSucceeded => draft = Draft::default(),
    }
    draft
}

#[cfg(test)]
mod tests {
    use super::*;
    use budget_core::{ErrorInfo, FieldName};

    fn filled() -> Draft {
        Draft {
            display_name: "Alice".into(),
            email: "alice@example.com".into(),
            password_one: "abc123".into(),
            password_two: "abc123".into(),
            error: None,
            submitting: false,
        }
    }

    #[test]
    fn failed_submission_keeps_fields_and_releases_the_gate() {
        let started = reduce(filled(), FormEvent::SubmissionStarted);
        assert!(started.submitting);

        let failed = reduce(
            started,
            FormEvent::SubmissionFailed(ErrorInfo::new("storage unavailable")),
        );
        assert!(!failed.submitting);
        assert_eq!(failed.error, Some(ErrorInfo::new("storage unavailable")));
        assert_eq!(failed.display_name, "Alice");
        assert_eq!(failed.password_two, "abc123");
    }

    #[test]
    fn success_resets_everything() {
        let mut d = reduce(filled(), FormEvent::SubmissionStarted);
        d.error = Some(ErrorInfo::new("old"));
        assert_eq!(reduce(d, FormEvent::SubmissionSucceeded), Draft::default());
    }

    #[test]
    fn field_change_does_not_clear_an_error() {
        let d = reduce(
            Draft::default(),
            FormEvent::ValidationFailed(ErrorInfo::new("The passwords don't match.")),
        );
        let d = reduce(
            d,
            FormEvent::FieldChanged {
                field: FieldName::PasswordTwo,
                value: "x".into(),
            },
        );
        assert_eq!(d.error, Some(ErrorInfo::new("The passwords don't match.")));
    }
}
