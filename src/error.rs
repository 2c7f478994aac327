//! [`Error`] type.

use std::fmt::{self, Display, Formatter};

use reqwest::StatusCode;
use serde::{de, Deserialize, Deserializer, Serialize};

/// Convenience alias for results of this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// An error from the API, the HTTP client, or the client configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// The client has no usable API key.
	///
	/// Raised before any request is made.
	#[error("No API key was given.")]
	InvalidConfiguration,
	/// The API rejected the request.
	#[error("{message}")]
	RemoteValidation {
		/// The server-reported error code.
		code: String,
		/// The server-reported error message.
		message: String,
		/// The HTTP status the server replied with.
		status: StatusCode,
	},
	/// HTTP error.
	#[error("http error: {0}")]
	Http(#[from] reqwest::Error),
}

impl Error {
	/// The fault category of a [remote validation error](Error::RemoteValidation).
	pub fn category(&self) -> Option<ErrorCategory> {
		match self {
			Self::RemoteValidation { .. } => Some(ErrorCategory::BadRequest),
			_ => None,
		}
	}

	/// The server-reported error code, if the API rejected the request.
	pub fn code(&self) -> Option<&str> {
		match self {
			Self::RemoteValidation { code, .. } => Some(code),
			_ => None,
		}
	}
}

/// Fault category of an API rejection.
#[derive(Debug, Hash, Clone, Copy, PartialEq, PartialOrd, Eq, Ord)]
pub enum ErrorCategory {
	/// The request was rejected as invalid.
	BadRequest,
}

impl Display for ErrorCategory {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		match self {
			Self::BadRequest => f.write_str("BadRequest"),
		}
	}
}

/// Error payload of a non-success response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
	/// The error code.
	#[serde(rename = "Code", alias = "code", deserialize_with = "code_from_string_or_number")]
	pub code: String,
	/// The error message.
	#[serde(rename = "Message", alias = "message")]
	pub message: String,
}

fn code_from_string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
	match serde_json::Value::deserialize(deserializer)? {
		serde_json::Value::String(code) => Ok(code),
		serde_json::Value::Number(code) => Ok(code.to_string()),
		_ => Err(de::Error::custom("expected a string or numeric error code")),
	}
}

impl ApiError {
	/// Turns the payload into an [`Error`] for the given response status.
	pub fn into_error(self, status: StatusCode) -> Error {
		Error::RemoteValidation { code: self.code, message: self.message, status }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn invalid_configuration_message() {
		assert_eq!(Error::InvalidConfiguration.to_string(), "No API key was given.");
		assert_eq!(Error::InvalidConfiguration.category(), None);
		assert_eq!(Error::InvalidConfiguration.code(), None);
	}

	#[test]
	fn api_error_wire_names() {
		let error: ApiError = serde_json::from_str(r#"{"Code":"E1","Message":"bad currency"}"#).unwrap();
		assert_eq!(error, ApiError { code: "E1".into(), message: "bad currency".into() });

		let error = error.into_error(StatusCode::BAD_REQUEST);
		assert_eq!(error.to_string(), "bad currency");
		assert_eq!(error.code(), Some("E1"));
		assert_eq!(error.category(), Some(ErrorCategory::BadRequest));
		assert_eq!(ErrorCategory::BadRequest.to_string(), "BadRequest");
	}

	#[test]
	fn api_error_lenient_shapes() {
		let error: ApiError = serde_json::from_str(r#"{"code":"E1","message":"bad currency"}"#).unwrap();
		assert_eq!(error, ApiError { code: "E1".into(), message: "bad currency".into() });

		let error: ApiError = serde_json::from_str(r#"{"Code":401,"Message":"invalid key"}"#).unwrap();
		assert_eq!(error, ApiError { code: "401".into(), message: "invalid key".into() });

		assert!(serde_json::from_str::<ApiError>(r#"{"Code":[1],"Message":"x"}"#).is_err());
	}
}
