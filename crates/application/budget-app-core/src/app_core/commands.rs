use budget_core::FieldName;

#[derive(Debug, Clone)]
pub enum FormCommand {
    // Editing
    ChangeField { field: FieldName, value: String },

    // Submission
    Submit,
}
