use std::io;

use thiserror::Error;

/// Failure while writing a response
#[derive(Error, Debug)]
pub enum Error {
    #[error("Error writing response: {0}")]
    Io(#[from] io::Error),

    #[error("Error encoding JSON response: {0}")]
    Json(serde_json::Error),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        // The encoder reports transport failures through its own error type
        if err.is_io() {
            Self::Io(err.into())
        } else {
            Self::Json(err)
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
