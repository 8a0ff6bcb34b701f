use std::fmt;
use std::str::FromStr;

/// One of the four text inputs of the sign-up form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    DisplayName,
    Email,
    PasswordOne,
    PasswordTwo,
}

impl FieldName {
    pub const ALL: [FieldName; 4] = [
        FieldName::DisplayName,
        FieldName::Email,
        FieldName::PasswordOne,
        FieldName::PasswordTwo,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldName::DisplayName => "displayName",
            FieldName::Email => "email",
            FieldName::PasswordOne => "passwordOne",
            FieldName::PasswordTwo => "passwordTwo",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown form field: {0}")]
pub struct ParseFieldNameError(pub String);

impl FromStr for FieldName {
    type Err = ParseFieldNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| ParseFieldNameError(s.to_string()))
    }
}

/// User-visible error line of the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    pub message: String,
}

impl ErrorInfo {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// In-progress sign-up form state.
///
/// The text fields are plain `String`s so they are always defined; `Default`
/// is the empty form shown on first render and after a successful sign-up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub display_name: String,
    pub email: String,
    pub password_one: String,
    pub password_two: String,
    pub error: Option<ErrorInfo>,
    /// Set while the backend calls of a submission are in flight.
    pub submitting: bool,
}

impl Draft {
    pub fn field(&self, name: FieldName) -> &str {
        match name {
            FieldName::DisplayName => &self.display_name,
            FieldName::Email => &self.email,
            FieldName::PasswordOne => &self.password_one,
            FieldName::PasswordTwo => &self.password_two,
        }
    }

    pub fn field_mut(&mut self, name: FieldName) -> &mut String {
        match name {
            FieldName::DisplayName => &mut self.display_name,
            FieldName::Email => &mut self.email,
            FieldName::PasswordOne => &mut self.password_one,
            FieldName::PasswordTwo => &mut self.password_two,
        }
    }

    /// Replaces one field and leaves everything else untouched.
    pub fn set_field(&mut self, name: FieldName, value: impl Into<String>) {
        *self.field_mut(name) = value.into();
    }

    pub fn is_empty(&self) -> bool {
        FieldName::ALL.iter().all(|f| self.field(*f).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_round_trip_through_their_keys() {
        for f in FieldName::ALL {
            assert_eq!(f.as_str().parse::<FieldName>(), Ok(f));
        }
        assert!("password".parse::<FieldName>().is_err());
    }

    #[test]
    fn set_field_touches_only_the_named_field() {
        let mut d = Draft {
            error: Some(ErrorInfo::new("boom")),
            ..Default::default()
        };
        d.set_field(FieldName::Email, "a@b.c");
        assert_eq!(d.email, "a@b.c");
        assert_eq!(d.display_name, "");
        assert_eq!(d.password_one, "");
        assert_eq!(d.password_two, "");
        assert_eq!(d.error, Some(ErrorInfo::new("boom")));
    }
}
