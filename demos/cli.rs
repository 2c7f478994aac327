use clap::{Parser, Subcommand};
use ratesexchange::{Client, Config, Decimal};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
pub struct Cli {
	/// API key, falls back to the configuration environment.
	#[clap(long, env = "RATESEXCHANGE_API_KEY")]
	token: Option<String>,
	#[clap(subcommand)]
	command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
	Check,
	Latest {
		base: String,
		currencies: Vec<String>,
		#[clap(long)]
		details: bool,
	},
	History {
		base: String,
		date: String,
		currencies: Vec<String>,
		#[clap(long)]
		details: bool,
	},
	HistoryDates {
		currency: String,
		from_date: String,
	},
	Convert {
		from: String,
		amount: Decimal,
		date: String,
		currencies: Vec<String>,
		#[clap(long)]
		details: bool,
	},
	Currencies,
}

fn print(value: &Option<impl Serialize>) -> Result<(), serde_json::Error> {
	match value {
		Some(value) => println!("{}", serde_json::to_string_pretty(value)?),
		None => println!("(no data)"),
	}
	Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
		.init();

	let cli = Cli::parse();
	let mut config = Config::from_env();
	if cli.token.is_some() { config.api_key = cli.token; }
	let client = Client::from_config(&config)?;

	match cli.command {
		CliCommand::Check => print(&client.check_api_online().await?)?,
		CliCommand::Latest { base, currencies, details: false } =>
			print(&client.latest_rates(&base, currencies).await?)?,
		CliCommand::Latest { base, currencies, details: true } =>
			print(&client.latest_details_rates(&base, currencies).await?)?,
		CliCommand::History { base, date, currencies, details: false } =>
			print(&client.history_rates(&base, &date, currencies).await?)?,
		CliCommand::History { base, date, currencies, details: true } =>
			print(&client.history_details_rates(&base, &date, currencies).await?)?,
		CliCommand::HistoryDates { currency, from_date } =>
			print(&client.history_rates_for_currency(&currency, &from_date).await?)?,
		CliCommand::Convert { from, amount, date, currencies, details: false } =>
			print(&client.convert_currency(&from, amount, &date, currencies).await?)?,
		CliCommand::Convert { from, amount, date, currencies, details: true } =>
			print(&client.convert_currency_details(&from, amount, &date, currencies).await?)?,
		CliCommand::Currencies => print(&client.currencies().await?)?,
	}
	Ok(())
}
