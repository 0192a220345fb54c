//! Process-wide default registry and status helper
//!
//! Applications that prefer not to thread a registry through their handlers
//! can use these free functions. They share one lazily created registry that
//! starts with the JSON renderer bound to `application/json` and `*/*`.
//! Register additional renderers before serving traffic.
//!
//! ```
//! use conneg_http::{Request, Response};
//! use conneg_render::shortcuts;
//! use hyper::StatusCode;
//! use serde_json::json;
//!
//! let request = Request::get("/").with_header("accept", "application/json");
//! let mut response = Response::new();
//! shortcuts::created(&mut response, &request, &json!({"id": 7})).unwrap();
//!
//! assert_eq!(response.status(), StatusCode::CREATED);
//! assert_eq!(response.body_str(), Some(r#"{"id":7}"#));
//! ```

use conneg_http::{Request, ResponseWriter};
use hyper::StatusCode;
use once_cell::sync::Lazy;
use serde::Serialize;
use std::fmt::Display;
use std::sync::Arc;

use crate::RenderResult;
use crate::negotiation::Negotiator;
use crate::registry::RendererRegistry;
use crate::renderer::Renderer;
use crate::status::StatusRenderer;

static DEFAULT_REGISTRY: Lazy<Arc<RendererRegistry>> =
	Lazy::new(|| Arc::new(RendererRegistry::with_defaults()));

static DEFAULT_STATUS_RENDERER: Lazy<StatusRenderer<Negotiator>> =
	Lazy::new(|| StatusRenderer::new(Negotiator::new(Arc::clone(&DEFAULT_REGISTRY))));

/// The registry behind every function in this module
pub fn default_registry() -> &'static Arc<RendererRegistry> {
	&DEFAULT_REGISTRY
}

/// The negotiating status helper behind every function in this module
pub fn default_status_renderer() -> &'static StatusRenderer<Negotiator> {
	&DEFAULT_STATUS_RENDERER
}

/// Bind `renderer` to `content_type` in the default registry
pub fn register(content_type: impl Into<String>, renderer: Arc<dyn Renderer>) {
	DEFAULT_REGISTRY.register(content_type, renderer);
}

/// Negotiate against the default registry and render `payload` with `status`
pub fn render<T: Serialize + ?Sized>(
	writer: &mut dyn ResponseWriter,
	request: &Request,
	status: StatusCode,
	payload: &T,
) -> RenderResult<()> {
	DEFAULT_STATUS_RENDERER.respond(writer, request, status, payload)
}

// 200
pub fn ok<T: Serialize + ?Sized>(
	writer: &mut dyn ResponseWriter,
	request: &Request,
	payload: &T,
) -> RenderResult<()> {
	DEFAULT_STATUS_RENDERER.ok(writer, request, payload)
}

// 201
pub fn created<T: Serialize + ?Sized>(
	writer: &mut dyn ResponseWriter,
	request: &Request,
	payload: &T,
) -> RenderResult<()> {
	DEFAULT_STATUS_RENDERER.created(writer, request, payload)
}

// 202
pub fn accepted<T: Serialize + ?Sized>(
	writer: &mut dyn ResponseWriter,
	request: &Request,
	payload: &T,
) -> RenderResult<()> {
	DEFAULT_STATUS_RENDERER.accepted(writer, request, payload)
}

// 400
pub fn bad_request(
	writer: &mut dyn ResponseWriter,
	request: &Request,
	args: &[&dyn Display],
) -> RenderResult<()> {
	DEFAULT_STATUS_RENDERER.bad_request(writer, request, args)
}

// 401
pub fn unauthorized(
	writer: &mut dyn ResponseWriter,
	request: &Request,
	args: &[&dyn Display],
) -> RenderResult<()> {
	DEFAULT_STATUS_RENDERER.unauthorized(writer, request, args)
}

// 403
pub fn forbidden(
	writer: &mut dyn ResponseWriter,
	request: &Request,
	args: &[&dyn Display],
) -> RenderResult<()> {
	DEFAULT_STATUS_RENDERER.forbidden(writer, request, args)
}

// 404
pub fn not_found(
	writer: &mut dyn ResponseWriter,
	request: &Request,
	args: &[&dyn Display],
) -> RenderResult<()> {
	DEFAULT_STATUS_RENDERER.not_found(writer, request, args)
}

// 405
pub fn method_not_allowed(
	writer: &mut dyn ResponseWriter,
	request: &Request,
	args: &[&dyn Display],
) -> RenderResult<()> {
	DEFAULT_STATUS_RENDERER.method_not_allowed(writer, request, args)
}

// 500
pub fn internal_server_error(
	writer: &mut dyn ResponseWriter,
	request: &Request,
	args: &[&dyn Display],
) -> RenderResult<()> {
	DEFAULT_STATUS_RENDERER.internal_server_error(writer, request, args)
}

// 503
pub fn service_unavailable(
	writer: &mut dyn ResponseWriter,
	request: &Request,
	args: &[&dyn Display],
) -> RenderResult<()> {
	DEFAULT_STATUS_RENDERER.service_unavailable(writer, request, args)
}
