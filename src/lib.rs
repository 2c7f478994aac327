//! [ratesexchange.eu](https://ratesexchange.eu/) API library.
//!
//! # Examples
//! ```no_run
//! # async fn run() -> ratesexchange::Result<()> {
//! let client = ratesexchange::Client::new("…")?;
//! if let Some(rates) = client.latest_rates("EUR", ["USD", "JPY"]).await? {
//! 	for (currency, rate) in rates.iter() { println!("{currency} {rate}"); }
//! }
//! # Ok(()) }
//! ```

#![deny(missing_docs)]

use std::fmt::{self, Debug, Display, Formatter};

pub mod client;
pub mod config;
pub mod currency;
pub mod error;
pub mod rates;
pub mod status;
pub mod transport;
pub mod url;

pub use client::Client;
pub use config::Config;
pub use currency::CurrenciesResponse;
pub use error::{ApiError, Error, ErrorCategory, Result};
pub use rates::{HistoryRate, Rate, RatesDetailsResponse, RatesHistoryResponse, RatesResponse};
pub use rust_decimal::Decimal;
pub use status::BoolResponse;
pub use transport::Transport;

/// API key token.
///
/// Its [`Debug`] output is redacted so it doesn't leak into logs.
#[repr(transparent)]
#[derive(Hash, Default, Clone, PartialEq, PartialOrd, Eq, Ord)]
pub struct ApiKey {
	key: String,
}

impl ApiKey {
	/// Gets whether the key is empty, i.e. unusable for keyed endpoints.
	#[inline] pub fn is_empty(&self) -> bool { self.key.is_empty() }
}

impl From<String> for ApiKey {
	fn from(key: String) -> Self { Self { key } }
}

impl<'a> From<&'a str> for ApiKey {
	fn from(key: &'a str) -> Self { Self { key: key.to_owned() } }
}

impl AsRef<str> for ApiKey {
	fn as_ref(&self) -> &str {
		self.key.as_ref()
	}
}

impl Display for ApiKey {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		Display::fmt(&self.key, f)
	}
}

impl Debug for ApiKey {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		f.write_str("ApiKey(***)")
	}
}
