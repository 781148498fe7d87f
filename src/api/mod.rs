//! API Lambda handler and request processing

pub mod handler;
pub mod helpers;
pub mod request;
pub mod state;
pub mod summarize;
pub mod transcribe_start;
pub mod transcribe_status;

// Re-export the main entry points for convenience
pub use handler::{Route, handler, route};
pub use request::{ApiRequest, RequestBody};
pub use state::AppState;
