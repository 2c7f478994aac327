//! [`Config`]

use std::env;

use crate::url::DEFAULT_BASE_URL;

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "RATESEXCHANGE_API_KEY";
/// Environment variable overriding the API origin.
pub const BASE_URL_VAR: &str = "RATESEXCHANGE_BASE_URL";

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
	/// The API key. Keyed endpoints fail with
	/// [`InvalidConfiguration`](crate::Error::InvalidConfiguration) without one.
	pub api_key: Option<String>,
	/// The API origin, e.g. `https://api.ratesexchange.eu`.
	pub base_url: String,
}

impl Default for Config {
	fn default() -> Self {
		Self { api_key: None, base_url: DEFAULT_BASE_URL.to_owned() }
	}
}

impl Config {
	/// Creates a configuration for the production API with the given key.
	pub fn with_key(api_key: impl Into<String>) -> Self {
		Self { api_key: Some(api_key.into()), ..Self::default() }
	}

	/// Loads the configuration from the environment, reading a `.env` file first if present.
	///
	/// A missing key is not an error here; it surfaces when calling a keyed endpoint.
	pub fn from_env() -> Self {
		dotenvy::dotenv().ok();
		Self::from_lookup(|name| env::var(name).ok())
	}

	fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
		Self {
			api_key: lookup(API_KEY_VAR),
			base_url: lookup(BASE_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
		}
	}
}
