//! [`CurrenciesResponse`]

use serde::{Deserialize, Serialize};

/// A supported currency, as listed by the `currencies` endpoint.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrenciesResponse {
	/// The [currency code](https://en.wikipedia.org/wiki/ISO_4217).
	pub symbol: String,
	/// The currency name.
	pub description: String,
}
