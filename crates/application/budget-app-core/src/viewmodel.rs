use budget_core::{BudgetPeriod, Draft, FieldName};

use crate::session::HomeState;

pub const SIGN_UP_TITLE: &str = "Sign Up";
pub const SIGN_UP_DESCRIPTION: &str = "Your account is free!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Password,
}

/// Static description of one sign-up input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: FieldName,
    pub kind: InputKind,
    pub label: &'static str,
    pub placeholder: &'static str,
}

pub const SIGN_UP_FIELDS: [FieldSpec; 4] = [
    FieldSpec {
        name: FieldName::DisplayName,
        kind: InputKind::Text,
        label: "Display Name",
        placeholder: "How do you want us to identify you?",
    },
    FieldSpec {
        name: FieldName::Email,
        kind: InputKind::Text,
        label: "Email",
        placeholder: "This will be your sign in.",
    },
    FieldSpec {
        name: FieldName::PasswordOne,
        kind: InputKind::Password,
        label: "Password",
        placeholder: "What do you want your password to be?",
    },
    FieldSpec {
        name: FieldName::PasswordTwo,
        kind: InputKind::Password,
        label: "Confirm Password",
        placeholder: "Confirm your password.",
    },
];

#[derive(Debug, Clone)]
pub struct FieldVm {
    pub spec: FieldSpec,
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct SignUpFormVm {
    pub title: &'static str,
    pub description: &'static str,
    pub fields: Vec<FieldVm>,
    pub error_line: Option<String>,
    pub is_submitting: bool,
    pub can_submit: bool,
}

pub fn sign_up_form_vm(draft: &Draft) -> SignUpFormVm {
    SignUpFormVm {
        title: SIGN_UP_TITLE,
        description: SIGN_UP_DESCRIPTION,
        fields: SIGN_UP_FIELDS
            .iter()
            .map(|spec| FieldVm {
                spec: *spec,
                value: draft.field(spec.name).to_string(),
            })
            .collect(),
        error_line: draft.error.as_ref().map(|e| format!("Error: {}", e.message)),
        is_submitting: draft.submitting,
        can_submit: !draft.submitting,
    }
}

#[derive(Debug, Clone)]
pub struct HomeVm {
    pub greeting: String,
    pub period_label: Option<String>,
    pub budget_pretty: Option<String>,
    pub error: Option<String>,
    pub is_busy: bool,
}

fn period_label(period: &BudgetPeriod) -> String {
    format!("{}-{}", period.year(), period.month())
}

pub fn home_vm(state: &HomeState) -> HomeVm {
    let greeting = match &state.overview {
        Some(o) if !o.display_name.is_empty() => format!("Welcome, {}", o.display_name),
        Some(_) => "Welcome".to_string(),
        None if state.loading => "Loading…".to_string(),
        None => "Not signed in".to_string(),
    };

    HomeVm {
        greeting,
        period_label: state
            .overview
            .as_ref()
            .and_then(|o| o.period.as_ref())
            .map(period_label),
        budget_pretty: state
            .budget
            .as_ref()
            .and_then(|b| serde_json::to_string_pretty(b).ok()),
        error: state.error.clone(),
        is_busy: state.loading,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use budget_core::ErrorInfo;

    #[test]
    fn form_vm_lists_fields_in_form_order_with_values() {
        let draft = Draft {
            display_name: "Alice".into(),
            password_one: "secret".into(),
            ..Default::default()
        };
        let vm = sign_up_form_vm(&draft);
        let names: Vec<_> = vm.fields.iter().map(|f| f.spec.name).collect();
        assert_eq!(names, FieldName::ALL.to_vec());
        assert_eq!(vm.fields[0].value, "Alice");
        assert_eq!(vm.fields[2].spec.kind, InputKind::Password);
        assert_eq!(vm.fields[2].value, "secret");
        assert!(vm.error_line.is_none());
        assert!(vm.can_submit);
    }

    #[test]
    fn form_vm_prefixes_errors_and_disables_submit_while_in_flight() {
        let draft = Draft {
            error: Some(ErrorInfo::new("storage unavailable")),
            submitting: true,
            ..Default::default()
        };
        let vm = sign_up_form_vm(&draft);
        assert_eq!(vm.error_line.as_deref(), Some("Error: storage unavailable"));
        assert!(!vm.can_submit);
    }
}
