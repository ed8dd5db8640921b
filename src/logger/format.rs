//! Response log format module
//!
//! Supports two formats:
//! - `common` (`[time] status content-type bytes`)
//! - `json` (JSON structured logging)

use chrono::{DateTime, Local};
use hyper::header::CONTENT_TYPE;
use serde::Serialize;

use crate::http::ResponseRecorder;

/// Summary of a written response
#[derive(Debug, Clone, Serialize)]
pub struct ResponseLogEntry {
    pub time: DateTime<Local>,
    pub status: u16,
    pub content_type: Option<String>,
    pub body_bytes: usize,
}

impl ResponseLogEntry {
    /// Create a new entry with current timestamp
    pub fn new(status: u16, content_type: Option<String>, body_bytes: usize) -> Self {
        Self {
            time: Local::now(),
            status,
            content_type,
            body_bytes,
        }
    }

    /// Summarize what a recorder has captured so far
    pub fn from_recorder(recorder: &ResponseRecorder) -> Self {
        let content_type = recorder
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string);

        Self::new(recorder.status().as_u16(), content_type, recorder.body().len())
    }

    /// Format the entry; unknown formats fall back to `common`
    pub fn format(&self, format: &str) -> String {
        match format {
            "json" => self.format_json(),
            _ => self.format_common(),
        }
    }

    fn format_common(&self) -> String {
        format!(
            "[{}] {} {} {}",
            self.time.format("%d/%b/%Y:%H:%M:%S %z"),
            self.status,
            self.content_type.as_deref().unwrap_or("-"),
            self.body_bytes,
        )
    }

    fn format_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.format_common())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{json, new_error, not_found};
    use hyper::StatusCode;

    #[test]
    fn test_from_recorder() {
        let mut rec = ResponseRecorder::new();
        json(&mut rec, StatusCode::BAD_REQUEST, &new_error("bad", 400)).unwrap();

        let entry = ResponseLogEntry::from_recorder(&rec);
        assert_eq!(entry.status, 400);
        assert_eq!(
            entry.content_type.as_deref(),
            Some("application/json; charset=utf-8")
        );
        assert_eq!(entry.body_bytes, rec.body().len());
    }

    #[test]
    fn test_format_common() {
        let mut rec = ResponseRecorder::new();
        not_found(&mut rec).unwrap();

        let log = ResponseLogEntry::from_recorder(&rec).format("common");
        assert!(log.ends_with("] 404 - 0"), "got: {log}");
    }

    #[test]
    fn test_format_json() {
        let entry = ResponseLogEntry::new(200, Some("image/png".to_string()), 1234);
        let log = entry.format("json");
        assert!(log.contains(r#""status":200"#));
        assert!(log.contains(r#""content_type":"image/png""#));
        assert!(log.contains(r#""body_bytes":1234"#));
    }

    #[test]
    fn test_unknown_format_is_common() {
        let entry = ResponseLogEntry::new(204, None, 0);
        assert_eq!(entry.format("fancy"), entry.format("common"));
    }
}
