use serde::{Deserialize, Serialize};

/// Budget contents are owned by the budgeting screens; storage treats them as opaque JSON.
pub type BudgetDocument = serde_json::Value;

/// Record stored under `users/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    #[serde(default)]
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_month: Option<String>,
}

impl UserData {
    /// The period last selected by the user, if both halves were stored.
    pub fn selected_period(&self) -> Option<BudgetPeriod> {
        let year = self.budget_year.as_deref()?;
        let month = self.budget_month.as_deref()?;
        BudgetPeriod::new(year, month).ok()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PeriodError {
    #[error("budget year must be four digits, got '{0}'")]
    Year(String),
    #[error("budget month must be 01 to 12, got '{0}'")]
    Month(String),
}

/// A budget month, keyed in storage as `{year}{month}` (e.g. `202610`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BudgetPeriod {
    year: String,
    month: String,
}

impl BudgetPeriod {
    pub fn new(year: &str, month: &str) -> Result<Self, PeriodError> {
        let year = year.trim();
        let month = month.trim();

        if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PeriodError::Year(year.to_string()));
        }

        let month_ok = month.len() == 2
            && month.bytes().all(|b| b.is_ascii_digit())
            && matches!(month.parse::<u8>(), Ok(1..=12));
        if !month_ok {
            return Err(PeriodError::Month(month.to_string()));
        }

        Ok(Self {
            year: year.to_string(),
            month: month.to_string(),
        })
    }

    pub fn year(&self) -> &str {
        &self.year
    }

    pub fn month(&self) -> &str {
        &self.month
    }

    pub fn key(&self) -> String {
        format!("{}{}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_key_concatenates_year_and_month() {
        let p = BudgetPeriod::new("2026", "03").unwrap();
        assert_eq!(p.key(), "202603");
    }

    #[test]
    fn period_rejects_out_of_range_month() {
        assert_eq!(
            BudgetPeriod::new("2026", "13"),
            Err(PeriodError::Month("13".into()))
        );
        assert!(BudgetPeriod::new("2026", "3").is_err());
        assert!(BudgetPeriod::new("26", "03").is_err());
    }

    #[test]
    fn user_data_tolerates_missing_period_fields() {
        let data: UserData = serde_json::from_str(r#"{"displayName":"Alice"}"#).unwrap();
        assert_eq!(data.display_name, "Alice");
        assert_eq!(data.selected_period(), None);
    }
}
