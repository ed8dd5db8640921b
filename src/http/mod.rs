//! HTTP response layer
//!
//! Writes HTML, JSON, PNG, JPEG and empty 404 responses through a
//! `ResponseWriter`, leaving routing and transport to the caller.

pub mod mime;
pub mod payload;
pub mod respond;
pub mod writer;

// Re-export commonly used types
pub use payload::{new_error, ErrorPayload};
pub use respond::{html, jpg, json, not_found, png};
pub use writer::{ResponseRecorder, ResponseWriter};
