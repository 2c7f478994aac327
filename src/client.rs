//! The API [`Client`].

use rust_decimal::Decimal;
use tracing::instrument;

use crate::{
	config::Config,
	currency::CurrenciesResponse,
	error::{Error, Result},
	rates::{RatesDetailsResponse, RatesHistoryResponse, RatesResponse},
	status::BoolResponse,
	transport::Transport,
	url::{self, endpoint, Builder, Endpoint},
	ApiKey,
};

/// A currencies argument requesting all currencies.
///
/// The request still carries an empty `currencies=` parameter.
pub const ALL_CURRENCIES: [&str; 0] = [];

/// ratesexchange.eu API client.
///
/// Every endpoint resolves to `Ok(None)` when the server replies with success
/// but the body is not of the expected shape.
///
/// # Examples
/// ```no_run
/// # use ratesexchange::{Client, client::ALL_CURRENCIES};
/// # async fn run() -> ratesexchange::Result<()> {
/// let client = Client::new("…")?;
/// let converted = client.convert_currency("USD", "100".parse().unwrap(), "2018-06-25", ["CHF", "GBP"]).await?;
/// let currencies = client.currencies().await?;
/// let latest = client.latest_rates("EUR", ALL_CURRENCIES).await?;
/// # Ok(()) }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
	api_key: Option<ApiKey>,
	base_url: String,
	transport: Transport,
}

impl Client {
	/// Creates a new [`Client`] for the production API with its own [`Transport`].
	pub fn new(api_key: impl Into<ApiKey>) -> Result<Self> {
		Ok(Self::with_transport(Some(api_key.into()), Transport::new()?))
	}

	/// Creates a new [`Client`] over a shared [`Transport`].
	///
	/// Without a key only [`check_api_online`](Self::check_api_online) can succeed.
	pub fn with_transport(api_key: Option<ApiKey>, transport: Transport) -> Self {
		Self { api_key, base_url: url::DEFAULT_BASE_URL.to_owned(), transport }
	}

	/// Creates a new [`Client`] from a [`Config`].
	pub fn from_config(config: &Config) -> Result<Self> {
		let api_key = config.api_key.clone().map(ApiKey::from);
		Ok(Self::with_transport(api_key, Transport::new()?).base_url(config.base_url.clone()))
	}

	/// Sets the API origin.
	pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = base_url.into();
		self
	}

	/// Gets the API key if it is usable.
	fn api_key(&self) -> Result<&str> {
		match &self.api_key {
			Some(key) if !key.is_empty() => Ok(key.as_ref()),
			_ => Err(Error::InvalidConfiguration),
		}
	}

	/// Starts a keyed endpoint URL, failing without a usable key.
	fn keyed(&self, endpoint: Endpoint) -> Result<Builder> {
		Ok(Builder::new(&self.base_url, endpoint, self.api_key()?))
	}

	/// Checks whether the API is online.
	///
	/// Doesn't require an API key.
	#[instrument(skip(self))]
	pub async fn check_api_online(&self) -> Result<Option<BoolResponse>> {
		let url = Builder::new(&self.base_url, endpoint::CHECK_API, "").build();
		self.transport.get(endpoint::CHECK_API, &url).await
	}

	/// Gets the latest rates against `base_currency`.
	#[instrument(skip(self, currencies))]
	pub async fn latest_rates<C: AsRef<str>>(
		&self,
		base_currency: &str,
		currencies: impl IntoIterator<Item = C>,
	) -> Result<Option<RatesResponse>> {
		let url = self.keyed(endpoint::LATEST)?
			.part(url::BaseCurrency(base_currency))
			.part(url::Currencies(currencies))
			.build();
		self.transport.get(endpoint::LATEST, &url).await
	}

	/// Gets the latest rates against `base_currency`, with currency names.
	#[instrument(skip(self, currencies))]
	pub async fn latest_details_rates<C: AsRef<str>>(
		&self,
		base_currency: &str,
		currencies: impl IntoIterator<Item = C>,
	) -> Result<Option<RatesDetailsResponse>> {
		let url = self.keyed(endpoint::LATEST_DETAILS)?
			.part(url::BaseCurrency(base_currency))
			.part(url::Currencies(currencies))
			.build();
		self.transport.get(endpoint::LATEST_DETAILS, &url).await
	}

	/// Gets the rates against `base_currency` at `date` (`YYYY-MM-DD`).
	#[instrument(skip(self, currencies))]
	pub async fn history_rates<C: AsRef<str>>(
		&self,
		base_currency: &str,
		date: &str,
		currencies: impl IntoIterator<Item = C>,
	) -> Result<Option<RatesResponse>> {
		let url = self.keyed(endpoint::HISTORY)?
			.part(url::BaseCurrency(base_currency))
			.part(url::Date(date))
			.part(url::Currencies(currencies))
			.build();
		self.transport.get(endpoint::HISTORY, &url).await
	}

	/// Gets the rates against `base_currency` at `date` (`YYYY-MM-DD`), with currency names.
	#[instrument(skip(self, currencies))]
	pub async fn history_details_rates<C: AsRef<str>>(
		&self,
		base_currency: &str,
		date: &str,
		currencies: impl IntoIterator<Item = C>,
	) -> Result<Option<RatesDetailsResponse>> {
		let url = self.keyed(endpoint::HISTORY_DETAILS)?
			.part(url::BaseCurrency(base_currency))
			.part(url::Date(date))
			.part(url::Currencies(currencies))
			.build();
		self.transport.get(endpoint::HISTORY_DETAILS, &url).await
	}

	/// Gets the rates of `currency` since `from_date` (`YYYY-MM-DD`).
	#[instrument(skip(self))]
	pub async fn history_rates_for_currency(
		&self,
		currency: &str,
		from_date: &str,
	) -> Result<Option<RatesHistoryResponse>> {
		let url = self.keyed(endpoint::HISTORY_DATES)?
			.part(url::Currency(currency))
			.part(url::FromDate(from_date))
			.build();
		self.transport.get(endpoint::HISTORY_DATES, &url).await
	}

	/// Converts `amount` of `from_currency` at `date` (`YYYY-MM-DD`).
	///
	/// The conversion is computed by the server; the response rates hold the converted amounts.
	#[instrument(skip(self, currencies))]
	pub async fn convert_currency<C: AsRef<str>>(
		&self,
		from_currency: &str,
		amount: Decimal,
		date: &str,
		currencies: impl IntoIterator<Item = C>,
	) -> Result<Option<RatesResponse>> {
		let url = self.keyed(endpoint::CONVERT)?
			.part(url::FromCurrency(from_currency))
			.part(url::Amount(amount))
			.part(url::Date(date))
			.part(url::Currencies(currencies))
			.build();
		self.transport.get(endpoint::CONVERT, &url).await
	}

	/// Converts `amount` of `from_currency` at `date` (`YYYY-MM-DD`), with currency names.
	#[instrument(skip(self, currencies))]
	pub async fn convert_currency_details<C: AsRef<str>>(
		&self,
		from_currency: &str,
		amount: Decimal,
		date: &str,
		currencies: impl IntoIterator<Item = C>,
	) -> Result<Option<RatesDetailsResponse>> {
		let url = self.keyed(endpoint::CONVERT_DETAILS)?
			.part(url::FromCurrency(from_currency))
			.part(url::Amount(amount))
			.part(url::Date(date))
			.part(url::Currencies(currencies))
			.build();
		self.transport.get(endpoint::CONVERT_DETAILS, &url).await
	}

	/// Lists the supported currencies.
	#[instrument(skip(self))]
	pub async fn currencies(&self) -> Result<Option<Vec<CurrenciesResponse>>> {
		let url = self.keyed(endpoint::CURRENCIES)?.build();
		self.transport.get(endpoint::CURRENCIES, &url).await
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn client(api_key: Option<&str>) -> Client {
		Client::with_transport(api_key.map(ApiKey::from), Transport::with_client(reqwest::Client::new()))
	}

	#[test]
	fn missing_or_empty_key_is_invalid() {
		assert!(matches!(client(None).api_key(), Err(Error::InvalidConfiguration)));
		assert!(matches!(client(Some("")).api_key(), Err(Error::InvalidConfiguration)));
		assert_eq!(client(Some("key")).api_key().unwrap(), "key");
	}

	#[test]
	fn keyed_url_uses_base_url() {
		let url = client(Some("key"))
			.base_url("http://localhost:1234/")
			.keyed(endpoint::CURRENCIES)
			.unwrap()
			.build();
		assert_eq!(url, "http://localhost:1234/client/currencies?apiKey=key");
	}

	#[test]
	fn from_config() {
		let config = Config { api_key: None, base_url: "http://localhost:1234".into() };
		let client = Client::from_config(&config).unwrap();
		assert!(client.api_key.is_none());
		assert_eq!(client.base_url, "http://localhost:1234");
	}
}
