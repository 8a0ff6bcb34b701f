pub mod commands;
pub mod events;
pub mod reducer;
pub mod store;

pub use commands::FormCommand;
pub use events::FormEvent;
pub use reducer::reduce;
pub use store::DraftStore;
