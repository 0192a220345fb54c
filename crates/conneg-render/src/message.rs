//! Error message payload and argument formatting

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Write};

/// Body of every 4xx/5xx convenience response
///
/// # Examples
///
/// ```
/// use conneg_render::ErrorMessage;
///
/// let error = ErrorMessage::new("not found");
/// assert_eq!(serde_json::to_string(&error).unwrap(), r#"{"message":"not found"}"#);
/// assert_eq!(error.to_string(), "not found");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
	pub message: String,
}

impl ErrorMessage {
	pub fn new(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
		}
	}
}

impl Display for ErrorMessage {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.message)
	}
}

impl std::error::Error for ErrorMessage {}

/// How error helper arguments are joined into a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageFormat {
	/// Space-joined inside square brackets: `[missing field x]`
	///
	/// Matches the output existing clients of the JSON error body expect.
	#[default]
	Bracketed,
	/// Space-joined without decoration: `missing field x`
	Spaced,
}

impl MessageFormat {
	/// Join the display forms of `args` according to this policy
	///
	/// # Examples
	///
	/// ```
	/// use conneg_render::MessageFormat;
	///
	/// let args: [&dyn std::fmt::Display; 3] = [&"missing", &"field", &42];
	/// assert_eq!(MessageFormat::Bracketed.format(&args), "[missing field 42]");
	/// assert_eq!(MessageFormat::Spaced.format(&args), "missing field 42");
	/// assert_eq!(MessageFormat::Bracketed.format(&[]), "[]");
	/// ```
	pub fn format(self, args: &[&dyn Display]) -> String {
		let mut joined = String::new();
		for (i, arg) in args.iter().enumerate() {
			if i > 0 {
				joined.push(' ');
			}
			// Writing into a String cannot fail
			let _ = write!(joined, "{}", arg);
		}

		match self {
			Self::Bracketed => format!("[{}]", joined),
			Self::Spaced => joined,
		}
	}
}
