//! # Conneg
//!
//! `Accept` header content negotiation and status-code rendering for HTTP
//! servers.
//!
//! Register one or more renderers per content type, let the [`Negotiator`]
//! pick one per request, and answer with the [`StatusRenderer`] helpers.
//!
//! ## Crates
//!
//! - [`http`] (`conneg-http`) - request view and buffered response writer
//! - `conneg-render` - registry, negotiation, JSON renderer and status helpers,
//!   re-exported at the crate root
//!
//! ## Quick Start
//!
//! ```
//! use conneg::http::{Request, Response};
//! use conneg::{Negotiator, RendererRegistry, StatusRenderer};
//! use std::sync::Arc;
//!
//! // Composition root: build the registry once, share it by `Arc`
//! let registry = Arc::new(RendererRegistry::with_defaults());
//! let helper = StatusRenderer::new(Negotiator::new(Arc::clone(&registry)));
//!
//! // Per request
//! let request = Request::get("/users/42").with_header("accept", "*/*");
//! let mut response = Response::new();
//! helper.not_found(&mut response, &request, &[&"user", &42]).unwrap();
//!
//! assert_eq!(response.status().as_u16(), 404);
//! assert_eq!(response.body_str(), Some(r#"{"message":"[user 42]"}"#));
//! ```

pub use conneg_http as http;

pub use conneg_render::{
	ANY_MEDIA_TYPE, APPLICATION_JSON, ErrorMessage, HeaderOrder, JSON_CONTENT_TYPE, JsonRenderer,
	MatchStrategy, MessageFormat, NOT_ACCEPTABLE_PREFIX, Negotiator, RenderError, RenderResult,
	Renderer, RendererRegistry, StatusRenderer, negotiation, shortcuts,
};
