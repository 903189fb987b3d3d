//! Request handler module
//!
//! Responsible for request routing dispatch and the endpoint handlers.

pub mod endpoints;
pub mod router;

// Re-export main entry points
pub use router::{handle_request, RequestDispatcher, Route};
