//! Renderer trait and the JSON renderer

use chrono::Local;
use conneg_http::{Request, ResponseWriter};
use hyper::StatusCode;
use hyper::header::{CONTENT_TYPE, DATE, HeaderValue};
use serde_json::Value;
use std::sync::Arc;

use crate::{RenderError, RenderResult};

/// Content type written by [`JsonRenderer`]
pub const JSON_CONTENT_TYPE: &str = "application/json;charset=utf-8";

/// RFC 1123 with a numeric zone, e.g. `Mon, 02 Jan 2006 15:04:05 -0700`
pub const RFC1123_NUMERIC_ZONE: &str = "%a, %d %b %Y %H:%M:%S %z";

/// Serializes a status code and payload into a response
///
/// Implementations are registered once and then shared across requests, so
/// they must be `Send + Sync`.
pub trait Renderer: Send + Sync {
	fn render(
		&self,
		writer: &mut dyn ResponseWriter,
		request: &Request,
		status: StatusCode,
		payload: &Value,
	) -> RenderResult<()>;

	/// Name used in diagnostics, such as the duplicate registration warning
	fn name(&self) -> &'static str {
		std::any::type_name::<Self>()
	}
}

impl<R: Renderer + ?Sized> Renderer for Arc<R> {
	fn render(
		&self,
		writer: &mut dyn ResponseWriter,
		request: &Request,
		status: StatusCode,
		payload: &Value,
	) -> RenderResult<()> {
		(**self).render(writer, request, status, payload)
	}

	fn name(&self) -> &'static str {
		(**self).name()
	}
}

/// JSON renderer
///
/// Sets `Content-Type` and `Date`, commits the status, then streams the
/// compact JSON encoding of the payload.
///
/// # Examples
///
/// ```
/// use conneg_http::{Request, Response};
/// use conneg_render::{JsonRenderer, Renderer};
/// use hyper::StatusCode;
/// use serde_json::json;
///
/// let mut response = Response::new();
/// JsonRenderer
///     .render(&mut response, &Request::get("/"), StatusCode::CREATED, &json!({"id": 7}))
///     .unwrap();
///
/// assert_eq!(response.status(), StatusCode::CREATED);
/// assert_eq!(response.header("content-type"), Some("application/json;charset=utf-8"));
/// assert_eq!(response.body_str(), Some(r#"{"id":7}"#));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
	fn render(
		&self,
		writer: &mut dyn ResponseWriter,
		_request: &Request,
		status: StatusCode,
		payload: &Value,
	) -> RenderResult<()> {
		let headers = writer.headers_mut();
		headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
		let date = Local::now().format(RFC1123_NUMERIC_ZONE).to_string();
		if let Ok(value) = HeaderValue::from_str(&date) {
			headers.insert(DATE, value);
		}

		writer.write_status(status);

		serde_json::to_writer(&mut *writer, payload).map_err(RenderError::from_encode)
	}
}
