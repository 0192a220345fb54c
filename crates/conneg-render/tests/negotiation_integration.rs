//! Negotiation integration tests
//!
//! Exercises registry, negotiator and status helper together the way an
//! application wires them at startup.

use conneg_http::{Request, Response, ResponseWriter};
use conneg_render::{
	ErrorMessage, JsonRenderer, Negotiator, RenderResult, Renderer, RendererRegistry,
	StatusRenderer,
};
use hyper::StatusCode;
use hyper::header::{CONTENT_TYPE, DATE, HeaderValue};
use proptest::prelude::*;
use rstest::*;
use serde_json::{Value, json};
use std::io::Write;
use std::sync::Arc;

/// Renders the payload's `Display` form tagged with a fixed label
struct LabelRenderer(&'static str);

impl Renderer for LabelRenderer {
	fn render(
		&self,
		writer: &mut dyn ResponseWriter,
		_request: &Request,
		status: StatusCode,
		payload: &Value,
	) -> RenderResult<()> {
		writer
			.headers_mut()
			.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
		writer.write_status(status);
		write!(writer, "{}:{}", self.0, payload)?;
		Ok(())
	}
}

#[fixture]
fn registry() -> Arc<RendererRegistry> {
	let registry = RendererRegistry::with_defaults();
	registry.register("text/plain", Arc::new(LabelRenderer("plain")));
	registry.register("application/xml", Arc::new(LabelRenderer("xml")));
	Arc::new(registry)
}

#[fixture]
fn helper(registry: Arc<RendererRegistry>) -> StatusRenderer<Negotiator> {
	StatusRenderer::new(Negotiator::new(registry))
}

fn request(accept: &str) -> Request {
	Request::get("/resource").with_header("accept", accept)
}

/// Serialized response with the `Date` header removed
fn snapshot(response: &Response) -> (StatusCode, Vec<(String, String)>, Vec<u8>) {
	let mut headers: Vec<(String, String)> = response
		.headers()
		.iter()
		.filter(|(name, _)| **name != DATE)
		.map(|(name, value)| {
			(
				name.to_string(),
				value.to_str().unwrap_or_default().to_string(),
			)
		})
		.collect();
	headers.sort();
	(response.status(), headers, response.body().to_vec())
}

#[rstest]
fn test_created_with_json_accept(helper: StatusRenderer<Negotiator>) {
	// Arrange
	let mut response = Response::new();

	// Act
	helper
		.created(&mut response, &request("application/json"), &json!({"id": 7}))
		.unwrap();

	// Assert
	assert_eq!(response.status(), StatusCode::CREATED);
	assert_eq!(
		response.header("content-type"),
		Some("application/json;charset=utf-8")
	);
	assert!(response.header("date").is_some());
	assert_eq!(response.body_str(), Some(r#"{"id":7}"#));
}

#[rstest]
fn test_typed_payload_keeps_declaration_order(helper: StatusRenderer<Negotiator>) {
	// Arrange
	#[derive(serde::Serialize)]
	struct Article {
		title: &'static str,
		author: &'static str,
		id: u64,
	}
	let article = Article {
		title: "z",
		author: "m",
		id: 1,
	};
	let mut response = Response::new();

	// Act
	helper
		.ok(&mut response, &request("application/json"), &article)
		.unwrap();

	// Assert
	assert_eq!(
		response.body_str(),
		Some(r#"{"title":"z","author":"m","id":1}"#)
	);
}

#[rstest]
fn test_unknown_accept_lists_registered_types(helper: StatusRenderer<Negotiator>) {
	// Arrange
	let mut response = Response::new();

	// Act
	helper
		.ok(&mut response, &request("text/unknown-xyz"), &json!({"id": 7}))
		.unwrap();

	// Assert
	assert_eq!(response.status(), StatusCode::NOT_ACCEPTABLE);
	let body: ErrorMessage = serde_json::from_slice(response.body()).unwrap();
	assert_eq!(
		body.message,
		"Accept header must be set to one of application/json,*/*,text/plain,application/xml"
	);
}

#[rstest]
fn test_quality_parameter_is_ignored(helper: StatusRenderer<Negotiator>) {
	// Arrange
	let mut response = Response::new();

	// Act
	helper
		.ok(&mut response, &request("application/json;q=0.9"), &json!([1, 2]))
		.unwrap();

	// Assert
	assert_eq!(response.status(), StatusCode::OK);
	assert_eq!(response.body_str(), Some("[1,2]"));
}

#[rstest]
fn test_header_order_beats_quality(helper: StatusRenderer<Negotiator>) {
	// Arrange
	let mut response = Response::new();

	// Act
	helper
		.ok(
			&mut response,
			&request("application/xml;q=0.1,text/plain;q=1.0"),
			&json!("x"),
		)
		.unwrap();

	// Assert
	assert_eq!(response.body_str(), Some(r#"xml:"x""#));
}

#[rstest]
fn test_bad_request_joins_arguments(helper: StatusRenderer<Negotiator>) {
	// Arrange
	let mut response = Response::new();

	// Act
	helper
		.bad_request(
			&mut response,
			&request("application/json"),
			&[&"missing", &"field", &"x"],
		)
		.unwrap();

	// Assert
	assert_eq!(response.status(), StatusCode::BAD_REQUEST);
	assert_eq!(
		serde_json::from_slice::<Value>(response.body()).unwrap(),
		json!({"message": "[missing field x]"})
	);
}

#[rstest]
fn test_error_helper_uses_negotiated_renderer(helper: StatusRenderer<Negotiator>) {
	// Arrange
	let mut response = Response::new();

	// Act
	helper
		.unauthorized(&mut response, &request("text/plain"), &[&"token", &"expired"])
		.unwrap();

	// Assert
	assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
	assert_eq!(
		response.body_str(),
		Some(r#"plain:{"message":"[token expired]"}"#)
	);
}

#[rstest]
fn test_reregistration_is_last_write_wins(registry: Arc<RendererRegistry>) {
	// Arrange
	let helper = StatusRenderer::new(Negotiator::new(Arc::clone(&registry)));
	registry.register("text/plain", Arc::new(LabelRenderer("replacement")));
	let mut response = Response::new();

	// Act
	helper
		.accepted(&mut response, &request("text/plain"), &json!(null))
		.unwrap();

	// Assert
	assert_eq!(response.status(), StatusCode::ACCEPTED);
	assert_eq!(response.body_str(), Some("replacement:null"));
	assert_eq!(
		registry
			.content_types()
			.iter()
			.filter(|ct| *ct == "text/plain")
			.count(),
		2
	);
	assert!(registry.acceptable_types().ends_with("text/plain,application/xml,text/plain"));
}

#[rstest]
fn test_status_helper_over_plain_renderer_skips_negotiation() {
	// Arrange
	let helper = StatusRenderer::new(JsonRenderer);
	let mut response = Response::new();

	// Act
	helper
		.internal_server_error(&mut response, &request("text/unknown-xyz"), &[&"db", &"down"])
		.unwrap();

	// Assert
	assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
	assert_eq!(response.body_str(), Some(r#"{"message":"[db down]"}"#));
}

#[rstest]
fn test_repeated_calls_are_identical_apart_from_date(helper: StatusRenderer<Negotiator>) {
	// Arrange
	let req = request("application/json");
	let mut first = Response::new();
	let mut second = Response::new();

	// Act
	helper.forbidden(&mut first, &req, &[&"nope", &1]).unwrap();
	helper.forbidden(&mut second, &req, &[&"nope", &1]).unwrap();

	// Assert
	assert_eq!(snapshot(&first), snapshot(&second));
}

proptest! {
	#[test]
	fn prop_registered_type_dispatches_to_its_renderer(
		subtype in "[a-z]{1,12}",
		params in proptest::option::of("[a-z]{1,5}=[0-9]"),
		id in any::<u32>()
	) {
		let content_type = format!("application/x-{}", subtype);
		let registry = RendererRegistry::with_defaults();
		registry.register(content_type.clone(), Arc::new(LabelRenderer("custom")));
		let helper = StatusRenderer::new(Negotiator::new(Arc::new(registry)));

		let accept = match params {
			Some(params) => format!("{};{}", content_type, params),
			None => content_type,
		};
		let mut response = Response::new();
		helper.ok(&mut response, &request(&accept), &json!({"id": id})).unwrap();

		prop_assert_eq!(response.status(), StatusCode::OK);
		prop_assert_eq!(
			response.body_str().unwrap(),
			format!("custom:{{\"id\":{}}}", id)
		);
	}

	#[test]
	fn prop_error_helpers_are_idempotent(words in proptest::collection::vec("[a-zA-Z0-9]{0,8}", 0..6)) {
		let helper = StatusRenderer::new(Negotiator::new(Arc::new(RendererRegistry::with_defaults())));
		let args: Vec<&dyn std::fmt::Display> =
			words.iter().map(|w| w as &dyn std::fmt::Display).collect();
		let req = request("*/*");

		let mut first = Response::new();
		let mut second = Response::new();
		helper.not_found(&mut first, &req, &args).unwrap();
		helper.not_found(&mut second, &req, &args).unwrap();

		prop_assert_eq!(snapshot(&first), snapshot(&second));
		let body: ErrorMessage = serde_json::from_slice(first.body()).unwrap();
		prop_assert_eq!(body.message, format!("[{}]", words.join(" ")));
	}
}
