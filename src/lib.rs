//! Small helpers for writing HTTP responses with the right status,
//! `Content-Type` and body.
//!
//! ```
//! use respond::{html, ResponseRecorder};
//! use hyper::StatusCode;
//!
//! let mut rec = ResponseRecorder::new();
//! html(&mut rec, StatusCode::OK, "<p>hi</p>").unwrap();
//! assert_eq!(rec.body(), b"<p>hi</p>");
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod logger;

pub use error::{Error, Result};
pub use http::{
    html, jpg, json, new_error, not_found, png, ErrorPayload, ResponseRecorder, ResponseWriter,
};
