//! Renderer registry
//!
//! Maps content-type strings to renderers and remembers the order in which
//! content types were registered. The order log is append-only and keeps
//! duplicates; it only feeds the "acceptable types" message of the 406
//! response.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::renderer::{JsonRenderer, Renderer};

/// Content type bound to [`JsonRenderer`] by [`RendererRegistry::with_defaults`]
pub const APPLICATION_JSON: &str = "application/json";

/// Wildcard media range bound to [`JsonRenderer`] by [`RendererRegistry::with_defaults`]
pub const ANY_MEDIA_TYPE: &str = "*/*";

#[derive(Default)]
struct RegistryInner {
	renderers: HashMap<String, Arc<dyn Renderer>>,
	content_types: Vec<String>,
}

/// A registry of renderers keyed by content type
///
/// Registration goes through `&self` so that a registry shared behind an
/// `Arc` can still be extended during application setup.
///
/// # Examples
///
/// ```
/// use conneg_render::{JsonRenderer, RendererRegistry};
/// use std::sync::Arc;
///
/// let registry = RendererRegistry::with_defaults();
/// registry.register("application/vnd.api+json", Arc::new(JsonRenderer));
///
/// assert!(registry.contains("application/vnd.api+json"));
/// assert_eq!(
///     registry.content_types(),
///     vec!["application/json", "*/*", "application/vnd.api+json"]
/// );
/// ```
#[derive(Default)]
pub struct RendererRegistry {
	inner: RwLock<RegistryInner>,
}

impl RendererRegistry {
	/// Create a registry with no bindings at all
	pub fn new() -> Self {
		Self::default()
	}

	/// Create a registry with [`JsonRenderer`] bound to `application/json`
	/// and `*/*`, in that order
	pub fn with_defaults() -> Self {
		let registry = Self::new();
		let json: Arc<dyn Renderer> = Arc::new(JsonRenderer);
		registry.register(APPLICATION_JSON, Arc::clone(&json));
		registry.register(ANY_MEDIA_TYPE, json);
		registry
	}

	/// Bind `renderer` to `content_type`
	///
	/// An existing binding is replaced and a warning is logged. The content
	/// type is appended to the registration order even when it is a
	/// duplicate.
	pub fn register(&self, content_type: impl Into<String>, renderer: Arc<dyn Renderer>) {
		let content_type = content_type.into();
		let mut inner = self.inner.write();

		if let Some(previous) = inner.renderers.get(&content_type) {
			tracing::warn!(
				content_type = %content_type,
				previous = previous.name(),
				"content handler already registered, overwriting"
			);
		}

		inner.content_types.push(content_type.clone());
		inner.renderers.insert(content_type, renderer);
	}

	/// Renderer bound to exactly `content_type`
	pub fn get(&self, content_type: &str) -> Option<Arc<dyn Renderer>> {
		self.inner.read().renderers.get(content_type).cloned()
	}

	pub fn contains(&self, content_type: &str) -> bool {
		self.inner.read().renderers.contains_key(content_type)
	}

	/// Registered content types in registration order, duplicates included
	pub fn content_types(&self) -> Vec<String> {
		self.inner.read().content_types.clone()
	}

	/// Number of distinct bound content types
	pub fn len(&self) -> usize {
		self.inner.read().renderers.len()
	}

	pub fn is_empty(&self) -> bool {
		self.inner.read().renderers.is_empty()
	}

	/// Comma-joined registration log, as listed in the 406 response
	///
	/// # Examples
	///
	/// ```
	/// use conneg_render::RendererRegistry;
	///
	/// let registry = RendererRegistry::with_defaults();
	/// assert_eq!(registry.acceptable_types(), "application/json,*/*");
	/// ```
	pub fn acceptable_types(&self) -> String {
		self.inner.read().content_types.join(",")
	}
}

impl std::fmt::Debug for RendererRegistry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let inner = self.inner.read();
		f.debug_struct("RendererRegistry")
			.field("content_types", &inner.content_types)
			.finish()
	}
}
