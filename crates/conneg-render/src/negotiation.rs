//! Accept header negotiation
//!
//! Candidates are taken from the `Accept` header in the order the client
//! listed them and the first one with a registered renderer wins. Media-type
//! parameters, including `q`, are dropped before lookup and never compared.
//! Candidates are not trimmed, so `"text/html, application/json"` offers
//! `" application/json"` as its second candidate.

use conneg_http::{Request, ResponseWriter};
use hyper::StatusCode;
use serde_json::Value;
use std::sync::Arc;

use crate::message::ErrorMessage;
use crate::registry::RendererRegistry;
use crate::renderer::{JsonRenderer, Renderer};
use crate::{RenderError, RenderResult};

/// Message prefix of the 406 response body
pub const NOT_ACCEPTABLE_PREFIX: &str = "Accept header must be set to one of ";

/// Split an `Accept` header value into candidate content types
///
/// # Examples
///
/// ```
/// use conneg_render::negotiation::accept_candidates;
///
/// let candidates: Vec<_> = accept_candidates("text/csv;q=0.5,application/json").collect();
/// assert_eq!(candidates, vec!["text/csv", "application/json"]);
///
/// // An empty header still yields one (empty) candidate
/// assert_eq!(accept_candidates("").collect::<Vec<_>>(), vec![""]);
/// ```
pub fn accept_candidates(accept: &str) -> impl Iterator<Item = &str> {
	accept
		.split(',')
		.map(|candidate| candidate.split_once(';').map_or(candidate, |(ty, _)| ty))
}

/// Chooses a renderer for an `Accept` header
///
/// Extension point for richer negotiation; [`HeaderOrder`] is the default.
pub trait MatchStrategy: Send + Sync {
	fn select(&self, accept: &str, registry: &RendererRegistry) -> Option<Arc<dyn Renderer>>;
}

/// First registered candidate in header order wins
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderOrder;

impl MatchStrategy for HeaderOrder {
	fn select(&self, accept: &str, registry: &RendererRegistry) -> Option<Arc<dyn Renderer>> {
		accept_candidates(accept).find_map(|candidate| registry.get(candidate))
	}
}

/// Renderer that dispatches to a registered renderer chosen by the request's
/// `Accept` header
///
/// When nothing matches, responds `406 Not Acceptable` through
/// [`JsonRenderer`] with an [`ErrorMessage`] listing every registered content
/// type. That response is a normal render outcome, not an error.
///
/// # Examples
///
/// ```
/// use conneg_http::{Request, Response};
/// use conneg_render::{Negotiator, Renderer, RendererRegistry};
/// use hyper::StatusCode;
/// use serde_json::json;
/// use std::sync::Arc;
///
/// let negotiator = Negotiator::new(Arc::new(RendererRegistry::with_defaults()));
///
/// let request = Request::get("/").with_header("accept", "text/unknown-xyz");
/// let mut response = Response::new();
/// negotiator
///     .render(&mut response, &request, StatusCode::OK, &json!({"ignored": true}))
///     .unwrap();
///
/// assert_eq!(response.status(), StatusCode::NOT_ACCEPTABLE);
/// assert_eq!(
///     response.body_str(),
///     Some(r#"{"message":"Accept header must be set to one of application/json,*/*"}"#)
/// );
/// ```
pub struct Negotiator {
	registry: Arc<RendererRegistry>,
	strategy: Box<dyn MatchStrategy>,
	fallback: JsonRenderer,
}

impl Negotiator {
	pub fn new(registry: Arc<RendererRegistry>) -> Self {
		Self {
			registry,
			strategy: Box::new(HeaderOrder),
			fallback: JsonRenderer,
		}
	}

	/// Replace the matching strategy
	pub fn with_strategy(mut self, strategy: impl MatchStrategy + 'static) -> Self {
		self.strategy = Box::new(strategy);
		self
	}

	pub fn registry(&self) -> &Arc<RendererRegistry> {
		&self.registry
	}

	/// Renderer the strategy picks for `accept`, if any
	pub fn select(&self, accept: &str) -> Option<Arc<dyn Renderer>> {
		self.strategy.select(accept, &self.registry)
	}

	fn not_acceptable(
		&self,
		writer: &mut dyn ResponseWriter,
		request: &Request,
	) -> RenderResult<()> {
		let message = ErrorMessage::new(format!(
			"{}{}",
			NOT_ACCEPTABLE_PREFIX,
			self.registry.acceptable_types()
		));
		let payload = serde_json::to_value(&message).map_err(RenderError::Serialization)?;
		self.fallback
			.render(writer, request, StatusCode::NOT_ACCEPTABLE, &payload)
	}
}

impl Renderer for Negotiator {
	fn render(
		&self,
		writer: &mut dyn ResponseWriter,
		request: &Request,
		status: StatusCode,
		payload: &Value,
	) -> RenderResult<()> {
		let accept = request.accept();
		match self.select(&accept) {
			Some(renderer) => {
				tracing::debug!(accept = %accept, renderer = renderer.name(), "negotiated renderer");
				renderer.render(writer, request, status, payload)
			}
			None => {
				tracing::debug!(accept = %accept, "no acceptable renderer, responding 406");
				self.not_acceptable(writer, request)
			}
		}
	}
}

impl std::fmt::Debug for Negotiator {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Negotiator")
			.field("registry", &self.registry)
			.finish_non_exhaustive()
	}
}
