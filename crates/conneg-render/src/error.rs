use std::io;
use thiserror::Error;

/// Errors returned by a [`Renderer`](crate::Renderer)
///
/// By the time either variant is produced the status line and headers may
/// already be committed, so the response cannot be corrected.
#[derive(Debug, Error)]
pub enum RenderError {
	#[error("Serialization error: {0}")]
	Serialization(#[from] serde_json::Error),
	#[error("I/O error while writing response: {0}")]
	Io(#[from] io::Error),
}

pub type RenderResult<T> = Result<T, RenderError>;

impl RenderError {
	/// Split a `serde_json` error into an I/O failure or an encoding failure
	pub(crate) fn from_encode(error: serde_json::Error) -> Self {
		if error.is_io() {
			Self::Io(error.into())
		} else {
			Self::Serialization(error)
		}
	}
}
