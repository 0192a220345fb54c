//! # Conneg Render
//!
//! Renderer registry, `Accept` header negotiation and status-code helpers.
//!
//! ## Overview
//!
//! - [`RendererRegistry`] maps content types to [`Renderer`]s
//! - [`Negotiator`] picks a renderer from the request's `Accept` header and
//!   falls back to a JSON `406 Not Acceptable` response
//! - [`StatusRenderer`] wraps any renderer with `ok`, `created`,
//!   `bad_request`, `not_found` and friends
//! - [`shortcuts`] exposes the same helpers over a process-wide default
//!   registry
//!
//! ## Example
//!
//! ```
//! use conneg_http::{Request, Response};
//! use conneg_render::{Negotiator, RendererRegistry, StatusRenderer};
//! use hyper::StatusCode;
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! let registry = Arc::new(RendererRegistry::with_defaults());
//! let helper = StatusRenderer::new(Negotiator::new(registry));
//!
//! let request = Request::get("/items").with_header("accept", "application/json;q=0.9");
//! let mut response = Response::new();
//! helper.ok(&mut response, &request, &json!({"items": []})).unwrap();
//!
//! assert_eq!(response.status(), StatusCode::OK);
//! assert_eq!(response.body_str(), Some(r#"{"items":[]}"#));
//! ```

pub mod error;
pub mod message;
pub mod negotiation;
pub mod registry;
pub mod renderer;
pub mod shortcuts;
pub mod status;

pub use error::{RenderError, RenderResult};
pub use message::{ErrorMessage, MessageFormat};
pub use negotiation::{HeaderOrder, MatchStrategy, NOT_ACCEPTABLE_PREFIX, Negotiator};
pub use registry::{ANY_MEDIA_TYPE, APPLICATION_JSON, RendererRegistry};
pub use renderer::{JSON_CONTENT_TYPE, JsonRenderer, Renderer};
pub use status::StatusRenderer;
