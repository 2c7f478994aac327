use ratesexchange::{Client, Config, Decimal};

const CURRENCIES: [&str; 5] = ["USD", "CHF", "GBP", "AUD", "JPY"];

#[tokio::main]
async fn main() {
	let config = match std::env::args().nth(1) {
		Some(token) => Config::with_key(token),
		None => Config::from_env(),
	};
	let client = Client::from_config(&config).unwrap();

	println!("-- Check if API is online");
	match client.check_api_online().await {
		Ok(response) => println!("{response:?}"),
		Err(e) => println!("{e}"),
	}

	println!("-- Get latest rates from ECB");
	match client.latest_rates("EUR", CURRENCIES).await {
		Ok(Some(response)) => for (currency, value) in response.iter() {
			println!("{currency}, {value}");
		},
		Ok(None) => println!("no rates"),
		Err(e) => println!("{e}"),
	}

	println!("-- Convert 100 USD to {}", CURRENCIES.join(","));
	match client.convert_currency("USD", Decimal::ONE_HUNDRED, "2018-06-25", CURRENCIES).await {
		Ok(Some(response)) => for (currency, value) in response.iter() {
			println!("{currency}, {value}");
		},
		Ok(None) => println!("no rates"),
		Err(e) => println!("{e}"),
	}
}
