//! Incoming request view used during negotiation

use hyper::header::{ACCEPT, HeaderName, HeaderValue};
use hyper::{HeaderMap, Method, Uri};
use std::borrow::Cow;

/// The parts of an HTTP request a renderer may inspect
///
/// Only headers matter for negotiation, but method and URI are kept so that
/// custom renderers can vary their output per endpoint.
#[derive(Debug, Clone)]
pub struct Request {
	pub method: Method,
	pub uri: Uri,
	pub headers: HeaderMap,
}

impl Request {
	/// Create a request with the given method and URI and no headers
	///
	/// # Examples
	///
	/// ```
	/// use conneg_http::Request;
	/// use hyper::{Method, Uri};
	///
	/// let request = Request::new(Method::POST, Uri::from_static("/items"));
	/// assert_eq!(request.method, Method::POST);
	/// assert!(request.headers.is_empty());
	/// ```
	pub fn new(method: Method, uri: Uri) -> Self {
		Self {
			method,
			uri,
			headers: HeaderMap::new(),
		}
	}

	/// Create a GET request for `uri`
	///
	/// An unparseable URI falls back to `/`.
	///
	/// # Examples
	///
	/// ```
	/// use conneg_http::Request;
	/// use hyper::Method;
	///
	/// let request = Request::get("/health");
	/// assert_eq!(request.method, Method::GET);
	/// assert_eq!(request.uri.path(), "/health");
	/// ```
	pub fn get(uri: &str) -> Self {
		let uri = uri.parse().unwrap_or_else(|_| Uri::from_static("/"));
		Self::new(Method::GET, uri)
	}

	/// Add a header to the request
	///
	/// Invalid header names or values are silently skipped.
	///
	/// # Examples
	///
	/// ```
	/// use conneg_http::Request;
	///
	/// let request = Request::get("/").with_header("Accept", "text/csv");
	/// assert_eq!(request.headers.get("accept").unwrap(), "text/csv");
	/// ```
	pub fn with_header(mut self, name: &str, value: &str) -> Self {
		if let Ok(header_name) = HeaderName::from_bytes(name.as_bytes())
			&& let Ok(header_value) = HeaderValue::from_str(value)
		{
			self.headers.append(header_name, header_value);
		}
		self
	}

	/// The raw value of the first `Accept` header
	///
	/// Returns an empty string when the header is missing, which negotiation
	/// then treats as a single empty candidate. Bytes outside visible ASCII are
	/// replaced with U+FFFD rather than discarding the whole value.
	///
	/// # Examples
	///
	/// ```
	/// use conneg_http::Request;
	///
	/// assert_eq!(Request::get("/").accept(), "");
	///
	/// let request = Request::get("/").with_header("accept", "application/json;q=0.9");
	/// assert_eq!(request.accept(), "application/json;q=0.9");
	/// ```
	pub fn accept(&self) -> Cow<'_, str> {
		self.headers
			.get(ACCEPT)
			.map(|value| String::from_utf8_lossy(value.as_bytes()))
			.unwrap_or(Cow::Borrowed(""))
	}
}

impl<B> From<&hyper::Request<B>> for Request {
	fn from(request: &hyper::Request<B>) -> Self {
		Self {
			method: request.method().clone(),
			uri: request.uri().clone(),
			headers: request.headers().clone(),
		}
	}
}
