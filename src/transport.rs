//! HTTP transport and response parsing.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, error, instrument, warn};

use crate::{error::{ApiError, Result}, url::Endpoint};

/// HTTP transport for API requests.
///
/// Wraps a [`reqwest::Client`] negotiating gzip and deflate compression.
/// Cloning is cheap and clones share the connection pool, so build one and
/// hand it to every [`Client`](crate::Client) that needs it.
#[derive(Debug, Clone)]
pub struct Transport {
	client: reqwest::Client,
}

impl Transport {
	/// Creates a new [`Transport`] with automatic gzip and deflate decompression.
	pub fn new() -> Result<Self> {
		let client = reqwest::Client::builder()
			.gzip(true)
			.deflate(true)
			.build()?;
		Ok(Self { client })
	}

	/// Creates a new [`Transport`] over an existing HTTP client.
	///
	/// Decompression is whatever the given client was configured with.
	pub fn with_client(client: reqwest::Client) -> Self {
		Self { client }
	}

	/// Sends a GET request and parses the response.
	///
	/// See [`parse`] for the outcomes.
	#[instrument(name = "get", skip_all, fields(endpoint = endpoint.path()))]
	pub async fn get<T: DeserializeOwned>(&self, endpoint: Endpoint, url: &str) -> Result<Option<T>> {
		let response = self.client.get(url).send().await?;
		let status = response.status();
		let body = response.text().await?;
		debug!(%status, length = body.len(), "response received");
		parse(status, &body)
	}
}

/// Parses a response body.
///
/// - A non-success `status` fails with [`Error::RemoteValidation`](crate::Error::RemoteValidation), carrying the
///   code and message of the [`ApiError`] body. When the body is not an
///   [`ApiError`], the code is the numeric status and the message is the body.
/// - A success body that isn't a `T` (or is `null`) yields `Ok(None)`.
pub fn parse<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<Option<T>> {
	if !status.is_success() {
		let error = serde_json::from_str::<ApiError>(body).unwrap_or_else(|_| ApiError {
			code: status.as_u16().to_string(),
			message: body.to_owned(),
		});
		error!(%status, code = %error.code, message = %error.message, "request rejected");
		return Err(error.into_error(status));
	}

	match serde_json::from_str::<Option<T>>(body) {
		Ok(value) => Ok(value),
		Err(e) => {
			warn!(error = %e, "response body is not of the expected shape");
			Ok(None)
		}
	}
}
