//! URL building
//!
//! Values are substituted into the query literally, without percent-encoding,
//! so a currency list stays readable as `currencies=USD,JPY`.

/// The production API origin.
pub const DEFAULT_BASE_URL: &str = "https://api.ratesexchange.eu";

/// A part of the URL query.
pub trait UrlPart: Sized {
	/// Writes the part into the URL.
	///
	/// Returns whether there was something to write.
	/// If there is something to write, writes `prefix` first.
	#[inline] fn write_url_part(self, _url: &mut String, _prefix: &str) -> bool { false }
}

impl<Inner: UrlPart> UrlPart for Option<Inner> {
	#[inline] fn write_url_part(self, url: &mut String, prefix: &str) -> bool {
		if let Some(inner) = self {
			inner.write_url_part(url, prefix)
		} else { false }
	}
}

pub mod endpoint {
	//! API [`Endpoint`]s.

	/// An API endpoint path.
	#[derive(Debug, Hash, Clone, Copy, PartialEq, Eq)]
	pub struct Endpoint {
		path: &'static str,
		key: Option<&'static str>,
	}

	impl Endpoint {
		/// The path relative to the API origin.
		#[inline] pub const fn path(&self) -> &'static str { self.path }
		/// The query parameter name the endpoint takes the API key under, if it takes one.
		#[inline] pub const fn key_param(&self) -> Option<&'static str> { self.key }
	}

	macro_rules! defendpoint {
		(@key) => { None };
		(@key $key:literal) => { Some($key) };
		($prefix:literal, $($id:ident <- $path:literal $(with $key:literal)?),* $(,)?) => {
			$(
				#[doc = concat!("[`Endpoint`] to `", $prefix, $path, "`.")]
				pub const $id: Endpoint = Endpoint {
					path: concat!($prefix, $path),
					key: defendpoint!(@key $($key)?),
				};
			)*
		};
	}

	// The key parameter casing differs per endpoint on the server side.
	defendpoint!("/client/",
		CHECK_API       <- "checkapi",
		LATEST          <- "latest"         with "apikey",
		LATEST_DETAILS  <- "latestdetails"  with "apikey",
		HISTORY         <- "history"        with "apiKey",
		HISTORY_DETAILS <- "historydetails" with "apiKey",
		HISTORY_DATES   <- "historydates"   with "apiKey",
		CONVERT         <- "convert"        with "apiKey",
		CONVERT_DETAILS <- "convertdetails" with "apiKey",
		CURRENCIES      <- "currencies"     with "apiKey",
	);
}
pub use endpoint::Endpoint;

mod params {
	use std::fmt::{Display, Write};

	use super::UrlPart;

	macro_rules! defparam {
		($($id:ident <- $name:literal),* $(,)?) => {
			$(
				#[doc = concat!("The `", $name, "` query parameter.")]
				pub struct $id<T>(pub T);

				impl<T: Display> UrlPart for $id<T> {
					fn write_url_part(self, url: &mut String, prefix: &str) -> bool {
						url.push_str(prefix);
						url.push_str(concat!($name, "="));
						// writing into a String cannot fail
						let _ = write!(url, "{}", self.0);
						true
					}
				}
			)*
		};
	}

	defparam!(
		BaseCurrency <- "base_currency",
		Currency     <- "currency",
		FromCurrency <- "from",
		Amount       <- "amount",
		Date         <- "date",
		FromDate     <- "from_date",
	);

	/// The `currencies` query parameter, comma-separated.
	///
	/// Unlike the other parameters, it is written even when there are no
	/// currencies, leaving an empty `currencies=` in the query.
	pub struct Currencies<T>(pub T);

	impl<C: AsRef<str>, T: IntoIterator<Item = C>> UrlPart for Currencies<T> {
		fn write_url_part(self, url: &mut String, prefix: &str) -> bool {
			url.push_str(prefix);
			url.push_str("currencies=");
			let mut iter = self.0.into_iter();
			if let Some(head) = iter.next() {
				url.push_str(head.as_ref());
				for currency in iter {
					url.push(',');
					url.push_str(currency.as_ref());
				}
			}
			true
		}
	}
}
pub use params::*;

/// Request URL builder.
///
/// # Examples
/// ```
/// # use ratesexchange::url::{self, Builder, BaseCurrency, Currencies};
/// let url = Builder::new(url::DEFAULT_BASE_URL, url::endpoint::LATEST, "KEY")
/// 	.part(BaseCurrency("EUR"))
/// 	.part(Currencies(["USD", "JPY"]))
/// 	.build();
/// assert_eq!(url, "https://api.ratesexchange.eu/client/latest?apikey=KEY&base_currency=EUR&currencies=USD,JPY");
/// ```
#[derive(Debug, Clone)]
pub struct Builder {
	url: String,
	has_query: bool,
}

impl Builder {
	/// Starts a URL to the given endpoint, with the API key if the endpoint takes one.
	pub fn new(base_url: &str, endpoint: Endpoint, api_key: &str) -> Self {
		let base_url = base_url.trim_end_matches('/');
		let mut url = String::with_capacity(base_url.len() + endpoint.path().len() + 64);
		url.push_str(base_url);
		url.push_str(endpoint.path());
		let mut builder = Self { url, has_query: false };
		if let Some(name) = endpoint.key_param() {
			builder.url.push('?');
			builder.url.push_str(name);
			builder.url.push('=');
			builder.url.push_str(api_key);
			builder.has_query = true;
		}
		builder
	}

	/// Appends a query part.
	pub fn part(mut self, part: impl UrlPart) -> Self {
		let prefix = if self.has_query { "&" } else { "?" };
		if part.write_url_part(&mut self.url, prefix) {
			self.has_query = true;
		}
		self
	}

	/// Builds the URL.
	#[inline] pub fn build(self) -> String { self.url }
}
