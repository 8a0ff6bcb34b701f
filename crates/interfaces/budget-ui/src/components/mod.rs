pub mod forms;
pub mod header;
