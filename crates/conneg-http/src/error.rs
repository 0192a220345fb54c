use thiserror::Error;

/// Errors raised while handing a buffered response to the hosting server
#[derive(Debug, Error)]
pub enum Error {
	#[error("Failed to build HTTP response: {0}")]
	Http(#[from] http::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
