//! Response writing
//!
//! Renderers write through [`ResponseWriter`], which follows the usual HTTP
//! server ordering: headers are set first, then the status line is committed,
//! then body bytes are streamed. [`Response`] buffers everything in memory.

use bytes::{Bytes, BytesMut};
use hyper::{HeaderMap, StatusCode};
use std::io;

use crate::Result;

/// A response stream renderers serialize into
///
/// Body bytes are written through the [`io::Write`] supertrait, so any
/// `serde` writer-based encoder can target a `&mut dyn ResponseWriter`.
pub trait ResponseWriter: io::Write {
	/// Mutable access to the response headers
	///
	/// Changes made after the status has been committed are not guaranteed to
	/// reach the client.
	fn headers_mut(&mut self) -> &mut HeaderMap;

	/// Commit the status line
	///
	/// Only the first call takes effect.
	fn write_status(&mut self, status: StatusCode);
}

/// In-memory response
///
/// # Examples
///
/// ```
/// use conneg_http::{Response, ResponseWriter};
/// use hyper::StatusCode;
/// use std::io::Write;
///
/// let mut response = Response::new();
/// assert!(!response.is_committed());
///
/// response.write_all(b"hello").unwrap();
/// assert!(response.is_committed());
/// assert_eq!(response.status(), StatusCode::OK);
/// ```
#[derive(Debug, Default)]
pub struct Response {
	status: Option<StatusCode>,
	headers: HeaderMap,
	body: BytesMut,
}

impl Response {
	pub fn new() -> Self {
		Self::default()
	}

	/// The committed status, or 200 if none has been written yet
	pub fn status(&self) -> StatusCode {
		self.status.unwrap_or(StatusCode::OK)
	}

	/// Whether the status line has been committed
	pub fn is_committed(&self) -> bool {
		self.status.is_some()
	}

	pub fn headers(&self) -> &HeaderMap {
		&self.headers
	}

	/// Header value as a string, if present and visible ASCII
	///
	/// # Examples
	///
	/// ```
	/// use conneg_http::{Response, ResponseWriter};
	/// use hyper::header::{CONTENT_TYPE, HeaderValue};
	///
	/// let mut response = Response::new();
	/// response
	///     .headers_mut()
	///     .insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
	/// assert_eq!(response.header("content-type"), Some("text/plain"));
	/// assert_eq!(response.header("date"), None);
	/// ```
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers.get(name).and_then(|value| value.to_str().ok())
	}

	pub fn body(&self) -> &[u8] {
		&self.body
	}

	/// The body as UTF-8 text, if it is valid UTF-8
	pub fn body_str(&self) -> Option<&str> {
		std::str::from_utf8(&self.body).ok()
	}

	/// Convert into a `hyper::Response` ready to be sent by the server
	///
	/// # Examples
	///
	/// ```
	/// use conneg_http::{Response, ResponseWriter};
	/// use hyper::StatusCode;
	/// use std::io::Write;
	///
	/// let mut response = Response::new();
	/// response.write_status(StatusCode::ACCEPTED);
	/// response.write_all(b"queued").unwrap();
	///
	/// let hyper_response = response.into_hyper().unwrap();
	/// assert_eq!(hyper_response.status(), StatusCode::ACCEPTED);
	/// assert_eq!(hyper_response.body().as_ref(), b"queued");
	/// ```
	pub fn into_hyper(self) -> Result<hyper::Response<Bytes>> {
		let mut builder = hyper::Response::builder().status(self.status());
		if let Some(headers) = builder.headers_mut() {
			*headers = self.headers;
		}
		Ok(builder.body(self.body.freeze())?)
	}
}

impl ResponseWriter for Response {
	fn headers_mut(&mut self) -> &mut HeaderMap {
		&mut self.headers
	}

	fn write_status(&mut self, status: StatusCode) {
		match self.status {
			Some(committed) => {
				tracing::warn!(
					committed = %committed,
					ignored = %status,
					"superfluous write_status call"
				);
			}
			None => self.status = Some(status),
		}
	}
}

impl io::Write for Response {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		if self.status.is_none() {
			self.status = Some(StatusCode::OK);
		}
		self.body.extend_from_slice(buf);
		Ok(buf.len())
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}
