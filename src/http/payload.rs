// Error payload returned to API clients

use serde::{Deserialize, Serialize};

/// Generic error body, serialized as `{"error": ..., "code": ...}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub error: String,
    pub code: i64,
}

impl ErrorPayload {
    pub fn new(message: impl Into<String>, code: i64) -> Self {
        Self {
            error: message.into(),
            code,
        }
    }
}

/// Build an `ErrorPayload` from a message and a code
pub fn new_error(message: impl Into<String>, code: i64) -> ErrorPayload {
    ErrorPayload::new(message, code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_error_fields() {
        let payload = new_error("bad", 400);
        assert_eq!(payload.error, "bad");
        assert_eq!(payload.code, 400);
        assert_eq!(payload, ErrorPayload::new(String::from("bad"), 400));
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_string(&new_error("not allowed", 403)).unwrap();
        assert_eq!(json, r#"{"error":"not allowed","code":403}"#);
    }

    #[test]
    fn test_deserialize() {
        let payload: ErrorPayload =
            serde_json::from_str(r#"{"code":-1,"error":"boom"}"#).unwrap();
        assert_eq!(payload, new_error("boom", -1));
    }
}
