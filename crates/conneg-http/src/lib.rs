//! # Conneg HTTP
//!
//! Minimal HTTP primitives shared by the conneg renderers.
//!
//! A renderer needs two things from the hosting server: the incoming request
//! (for the `Accept` header) and somewhere to write the response. [`Request`]
//! carries the former and the [`ResponseWriter`] trait abstracts the latter.
//! [`Response`] is a buffered writer that can be converted into a
//! `hyper::Response` once rendering is done.
//!
//! ## Examples
//!
//! ```
//! use conneg_http::{Request, Response, ResponseWriter};
//! use hyper::StatusCode;
//! use std::io::Write;
//!
//! let request = Request::get("/users").with_header("accept", "application/json");
//! assert_eq!(request.accept(), "application/json");
//!
//! let mut response = Response::new();
//! response.write_status(StatusCode::CREATED);
//! response.write_all(b"{}").unwrap();
//! assert_eq!(response.status(), StatusCode::CREATED);
//! assert_eq!(response.body_str(), Some("{}"));
//! ```

pub mod error;
pub mod request;
pub mod response;

pub use error::{Error, Result};
pub use request::Request;
pub use response::{Response, ResponseWriter};
