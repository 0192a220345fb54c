//! Status-code convenience wrapper around a renderer
//!
//! Success helpers serialize the payload as-is. Error helpers take a list of
//! displayable values, join them into a single message using the configured
//! [`MessageFormat`], and send an [`ErrorMessage`] body.

use conneg_http::{Request, ResponseWriter};
use hyper::StatusCode;
use serde::Serialize;
use serde_json::Value;
use std::fmt::Display;

use crate::message::{ErrorMessage, MessageFormat};
use crate::negotiation::Negotiator;
use crate::renderer::Renderer;
use crate::RenderResult;

/// Wraps a single renderer and exposes one method per common status code
///
/// # Examples
///
/// ```
/// use conneg_http::{Request, Response};
/// use conneg_render::{JsonRenderer, StatusRenderer};
/// use hyper::StatusCode;
///
/// let helper = StatusRenderer::new(JsonRenderer);
/// let mut response = Response::new();
/// helper
///     .bad_request(&mut response, &Request::get("/"), &[&"missing", &"field", &"x"])
///     .unwrap();
///
/// assert_eq!(response.status(), StatusCode::BAD_REQUEST);
/// assert_eq!(response.body_str(), Some(r#"{"message":"[missing field x]"}"#));
/// ```
#[derive(Debug, Clone)]
pub struct StatusRenderer<R = Negotiator> {
	renderer: R,
	message_format: MessageFormat,
}

impl<R: Renderer> StatusRenderer<R> {
	pub fn new(renderer: R) -> Self {
		Self {
			renderer,
			message_format: MessageFormat::default(),
		}
	}

	/// Use `format` when joining error helper arguments
	pub fn with_message_format(mut self, format: MessageFormat) -> Self {
		self.message_format = format;
		self
	}

	pub fn message_format(&self) -> MessageFormat {
		self.message_format
	}

	/// The wrapped renderer
	pub fn inner(&self) -> &R {
		&self.renderer
	}

	/// Serialize `payload` and render it with `status`
	///
	/// A payload that cannot be represented as JSON is reported before
	/// anything is written.
	pub fn respond<T: Serialize + ?Sized>(
		&self,
		writer: &mut dyn ResponseWriter,
		request: &Request,
		status: StatusCode,
		payload: &T,
	) -> RenderResult<()> {
		let value = serde_json::to_value(payload)?;
		self.renderer.render(writer, request, status, &value)
	}

	/// Render an [`ErrorMessage`] built from `args` with an arbitrary status
	pub fn error(
		&self,
		writer: &mut dyn ResponseWriter,
		request: &Request,
		status: StatusCode,
		args: &[&dyn Display],
	) -> RenderResult<()> {
		let message = ErrorMessage::new(self.message_format.format(args));
		self.respond(writer, request, status, &message)
	}

	// 2xx

	pub fn ok<T: Serialize + ?Sized>(
		&self,
		writer: &mut dyn ResponseWriter,
		request: &Request,
		payload: &T,
	) -> RenderResult<()> {
		self.respond(writer, request, StatusCode::OK, payload)
	}

	pub fn created<T: Serialize + ?Sized>(
		&self,
		writer: &mut dyn ResponseWriter,
		request: &Request,
		payload: &T,
	) -> RenderResult<()> {
		self.respond(writer, request, StatusCode::CREATED, payload)
	}

	pub fn accepted<T: Serialize + ?Sized>(
		&self,
		writer: &mut dyn ResponseWriter,
		request: &Request,
		payload: &T,
	) -> RenderResult<()> {
		self.respond(writer, request, StatusCode::ACCEPTED, payload)
	}

	// 4xx

	pub fn bad_request(
		&self,
		writer: &mut dyn ResponseWriter,
		request: &Request,
		args: &[&dyn Display],
	) -> RenderResult<()> {
		self.error(writer, request, StatusCode::BAD_REQUEST, args)
	}

	pub fn unauthorized(
		&self,
		writer: &mut dyn ResponseWriter,
		request: &Request,
		args: &[&dyn Display],
	) -> RenderResult<()> {
		self.error(writer, request, StatusCode::UNAUTHORIZED, args)
	}

	pub fn forbidden(
		&self,
		writer: &mut dyn ResponseWriter,
		request: &Request,
		args: &[&dyn Display],
	) -> RenderResult<()> {
		self.error(writer, request, StatusCode::FORBIDDEN, args)
	}

	pub fn not_found(
		&self,
		writer: &mut dyn ResponseWriter,
		request: &Request,
		args: &[&dyn Display],
	) -> RenderResult<()> {
		self.error(writer, request, StatusCode::NOT_FOUND, args)
	}

	pub fn method_not_allowed(
		&self,
		writer: &mut dyn ResponseWriter,
		request: &Request,
		args: &[&dyn Display],
	) -> RenderResult<()> {
		self.error(writer, request, StatusCode::METHOD_NOT_ALLOWED, args)
	}

	// 5xx

	pub fn internal_server_error(
		&self,
		writer: &mut dyn ResponseWriter,
		request: &Request,
		args: &[&dyn Display],
	) -> RenderResult<()> {
		self.error(writer, request, StatusCode::INTERNAL_SERVER_ERROR, args)
	}

	pub fn service_unavailable(
		&self,
		writer: &mut dyn ResponseWriter,
		request: &Request,
		args: &[&dyn Display],
	) -> RenderResult<()> {
		self.error(writer, request, StatusCode::SERVICE_UNAVAILABLE, args)
	}
}

impl<R: Renderer> Renderer for StatusRenderer<R> {
	fn render(
		&self,
		writer: &mut dyn ResponseWriter,
		request: &Request,
		status: StatusCode,
		payload: &Value,
	) -> RenderResult<()> {
		self.renderer.render(writer, request, status, payload)
	}

	fn name(&self) -> &'static str {
		self.renderer.name()
	}
}
