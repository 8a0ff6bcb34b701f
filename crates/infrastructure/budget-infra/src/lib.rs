pub mod firebase;
pub mod memory;
pub mod net;

// Re-exports for convenience
pub use firebase::{FirebaseBackend, FirebaseConfig, Session};
pub use memory::InMemoryBackend;
pub use net::default_http_client;
