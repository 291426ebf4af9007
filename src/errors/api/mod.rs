// API-facing error types
pub mod resource;

pub use resource::{ApiError, ErrorResponse};
