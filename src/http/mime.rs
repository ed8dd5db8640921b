//! Content types used by the response helpers
//!
//! Each helper writes exactly one of these values into `Content-Type`
//! unless the header has already been set by the caller.

/// `Content-Type` for HTML bodies
pub const HTML: &str = "text/html; charset=utf-8";

/// `Content-Type` for JSON bodies
pub const JSON: &str = "application/json; charset=utf-8";

/// `Content-Type` for PNG images
pub const PNG: &str = "image/png";

/// `Content-Type` for JPEG images
pub const JPEG: &str = "image/jpeg";
