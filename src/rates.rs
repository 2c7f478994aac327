//! Currency rates responses.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Rate table, keyed by currency code.
///
/// Returned by the `latest`, `history` and `convert` endpoints. For `convert`
/// the values are the converted amounts.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatesResponse {
	/// The base currency code.
	pub base: String,
	/// The rates date, `YYYY-MM-DD`.
	pub date: String,
	/// The rates by currency code.
	pub rates: BTreeMap<String, Decimal>,
}

impl RatesResponse {
	/// Gets the rate for the given currency, if exists.
	pub fn get(&self, currency: &str) -> Option<&Decimal> {
		self.rates.get(currency)
	}

	/// Iterates over currency rates.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Decimal)> {
		self.rates.iter().map(|(currency, rate)| (currency.as_str(), rate))
	}
}

/// Rate table with currency names.
///
/// Returned by the `latestdetails`, `historydetails` and `convertdetails` endpoints.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatesDetailsResponse {
	/// The base currency code.
	pub base: String,
	/// The rates date, `YYYY-MM-DD`.
	pub date: String,
	/// The rates, in server order.
	pub rates: Vec<Rate>,
}

impl RatesDetailsResponse {
	/// Gets the rate for the given currency, if exists.
	pub fn get(&self, symbol: &str) -> Option<&Rate> {
		self.rates.iter().find(|rate| rate.symbol == symbol)
	}
}

/// A [`RatesDetailsResponse`] entry.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rate {
	/// The currency code.
	pub symbol: String,
	/// The currency name.
	pub currency: String,
	/// The rate.
	pub value: Decimal,
}

/// Time series of one currency's rates.
///
/// Returned by the `historydates` endpoint.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatesHistoryResponse {
	/// The currency code.
	pub symbol: String,
	/// The currency name.
	pub description: String,
	/// The rates, in server order.
	pub rates: Vec<HistoryRate>,
}

impl RatesHistoryResponse {
	/// Gets the rate at the given date, if exists.
	pub fn get(&self, date: &str) -> Option<&Decimal> {
		self.rates.iter().find(|rate| rate.date == date).map(|rate| &rate.value)
	}
}

/// A [`RatesHistoryResponse`] entry.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRate {
	/// The rate date, `YYYY-MM-DD`.
	pub date: String,
	/// The rate.
	pub value: Decimal,
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn rates_exact_decimals() {
		let response: RatesResponse = serde_json::from_str(
			r#"{"base":"EUR","date":"2018-06-25","rates":{"USD":1.16,"JPY":127.66000000000000001}}"#,
		).unwrap();
		assert_eq!(response.base, "EUR");
		assert_eq!(response.date, "2018-06-25");
		assert_eq!(response.get("USD"), Some(&Decimal::new(116, 2)));
		assert_eq!(response.get("JPY"), Some(&"127.66000000000000001".parse::<Decimal>().unwrap()));
		assert_eq!(response.get("GBP"), None);
		assert_eq!(response.iter().map(|(c, _)| c).collect::<Vec<_>>(), ["JPY", "USD"]);
	}

	#[test]
	fn rates_round_trip() {
		let response = RatesResponse {
			base: "EUR".into(),
			date: "2018-06-25".into(),
			rates: BTreeMap::from([("USD".into(), Decimal::new(116, 2)), ("CHF".into(), Decimal::new(11512, 4))]),
		};
		let json = serde_json::to_string(&response).unwrap();
		assert_eq!(serde_json::from_str::<RatesResponse>(&json).unwrap(), response);
	}

	#[test]
	fn rates_serialize_as_numbers() {
		let response = RatesResponse {
			base: "EUR".into(),
			date: "2018-06-25".into(),
			rates: BTreeMap::from([("USD".into(), Decimal::new(116, 2)), ("X".into(), Decimal::new(1, 5))]),
		};
		assert_eq!(
			serde_json::to_string(&response).unwrap(),
			r#"{"base":"EUR","date":"2018-06-25","rates":{"USD":1.16,"X":0.00001}}"#,
		);
	}

	#[test]
	fn details_round_trip() {
		let response = RatesDetailsResponse {
			base: "USD".into(),
			date: "2018-06-01".into(),
			rates: vec![
				Rate { symbol: "EUR".into(), currency: "Euro".into(), value: Decimal::new(8571, 4) },
				Rate { symbol: "GBP".into(), currency: "Pound sterling".into(), value: Decimal::new(7502, 4) },
			],
		};
		let json = serde_json::to_string(&response).unwrap();
		let parsed: RatesDetailsResponse = serde_json::from_str(&json).unwrap();
		assert_eq!(parsed, response);
		assert_eq!(parsed.get("GBP").map(|rate| rate.currency.as_str()), Some("Pound sterling"));
	}

	#[test]
	fn history_round_trip() {
		let response = RatesHistoryResponse {
			symbol: "USD".into(),
			description: "US dollar".into(),
			rates: vec![
				HistoryRate { date: "2018-06-01".into(), value: Decimal::new(11677, 4) },
				HistoryRate { date: "2018-06-04".into(), value: Decimal::new(11707, 4) },
			],
		};
		let json = serde_json::to_string(&response).unwrap();
		let parsed: RatesHistoryResponse = serde_json::from_str(&json).unwrap();
		assert_eq!(parsed, response);
		assert_eq!(parsed.get("2018-06-04"), Some(&Decimal::new(11707, 4)));
		assert_eq!(parsed.get("2018-06-02"), None);
	}
}
