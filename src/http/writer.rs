//! Response writer capability
//!
//! `ResponseWriter` is the narrow surface the helpers need from whatever is
//! emitting the response: a header map, a status line and a byte sink.
//! `ResponseRecorder` keeps everything in memory and turns it into a hyper
//! response when the handler is done.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::HeaderMap;
use hyper::{Response, StatusCode};
use std::io::{self, Write};

/// Sink for a single HTTP response.
///
/// Headers must be set before `write_status`, and the status must be written
/// before the first body byte. Body bytes go through `std::io::Write`.
pub trait ResponseWriter: Write {
    /// Headers that will be sent with the response
    fn headers_mut(&mut self) -> &mut HeaderMap;

    /// Commit the status line (and with it, the headers)
    fn write_status(&mut self, status: StatusCode);
}

/// In-memory `ResponseWriter`
///
/// Header changes made after the status is committed are not part of the
/// recorded response, mirroring what a real connection would send.
#[derive(Debug, Default)]
pub struct ResponseRecorder {
    headers: HeaderMap,
    committed: Option<(StatusCode, HeaderMap)>,
    body: Vec<u8>,
}

impl ResponseRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded status, `200 OK` if none was written
    pub fn status(&self) -> StatusCode {
        self.committed
            .as_ref()
            .map_or(StatusCode::OK, |(status, _)| *status)
    }

    /// Headers as sent, or the pending headers if nothing was committed yet
    pub fn headers(&self) -> &HeaderMap {
        self.committed
            .as_ref()
            .map_or(&self.headers, |(_, headers)| headers)
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub const fn is_written(&self) -> bool {
        self.committed.is_some()
    }

    /// Convert the recorded response into a hyper response
    pub fn into_response(self) -> Response<Full<Bytes>> {
        let (status, headers) = self
            .committed
            .unwrap_or((StatusCode::OK, self.headers));

        let mut response = Response::new(Full::new(Bytes::from(self.body)));
        *response.status_mut() = status;
        *response.headers_mut() = headers;
        response
    }
}

impl ResponseWriter for ResponseRecorder {
    fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    fn write_status(&mut self, status: StatusCode) {
        // Only the first status counts
        if self.committed.is_none() {
            self.committed = Some((status, self.headers.clone()));
        }
    }
}

impl Write for ResponseRecorder {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.committed.is_none() {
            self.write_status(StatusCode::OK);
        }
        self.body.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
