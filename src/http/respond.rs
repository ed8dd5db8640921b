//! Response writing helpers
//!
//! Each helper sets `Content-Type` (unless the caller already did), writes
//! the status and then the body. Errors from the writer or the JSON encoder
//! are returned untouched; nothing here logs.

use hyper::header::{HeaderValue, CONTENT_TYPE};
use hyper::StatusCode;
use serde::Serialize;

use super::mime;
use super::writer::ResponseWriter;
use crate::error::Result;

/// Set `Content-Type` only if no value is present yet
fn write_content_type<W: ResponseWriter + ?Sized>(w: &mut W, value: &'static str) {
    let headers = w.headers_mut();
    if !headers.contains_key(CONTENT_TYPE) {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(value));
    }
}

/// Write a string with the HTML content type
pub fn html<W>(w: &mut W, status: StatusCode, body: &str) -> Result<()>
where
    W: ResponseWriter + ?Sized,
{
    write_content_type(w, mime::HTML);
    w.write_status(status);
    w.write_all(body.as_bytes())?;
    Ok(())
}

/// Encode `value` straight into the writer with the JSON content type
///
/// The body ends with a newline.
pub fn json<W, T>(w: &mut W, status: StatusCode, value: &T) -> Result<()>
where
    W: ResponseWriter + ?Sized,
    T: Serialize + ?Sized,
{
    write_content_type(w, mime::JSON);
    w.write_status(status);
    serde_json::to_writer(&mut *w, value)?;
    w.write_all(b"\n")?;
    Ok(())
}

/// Write raw bytes with the PNG content type
pub fn png<W>(w: &mut W, status: StatusCode, buf: &[u8]) -> Result<()>
where
    W: ResponseWriter + ?Sized,
{
    write_content_type(w, mime::PNG);
    w.write_status(status);
    w.write_all(buf)?;
    Ok(())
}

/// Write raw bytes with the JPEG content type
pub fn jpg<W>(w: &mut W, status: StatusCode, buf: &[u8]) -> Result<()>
where
    W: ResponseWriter + ?Sized,
{
    write_content_type(w, mime::JPEG);
    w.write_status(status);
    w.write_all(buf)?;
    Ok(())
}

/// Write an empty 404 response
///
/// Always succeeds: the status write has no failure channel to report.
#[allow(clippy::unnecessary_wraps)]
pub fn not_found<W: ResponseWriter + ?Sized>(w: &mut W) -> Result<()> {
    w.write_status(StatusCode::NOT_FOUND);
    Ok(())
}
