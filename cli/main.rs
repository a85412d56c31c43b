//! This module contains the main entrypoint to the ahrc cli.

use clap::Parser;
use colored::Colorize;
use url::Url;

mod app;

#[derive(Parser)]
#[clap(
	about = "Serve the forms that front the irrigation, toxicity and medical imaging services.",
	setting = clap::AppSettings::DisableHelpSubcommand,
)]
enum Options {
	#[clap(name = "app")]
	App(Box<AppOptions>),
}

#[derive(Parser, Debug)]
#[clap(about = "run the app")]
#[clap(long_about = "run the web app and forward its forms to the configured services")]
struct AppOptions {
	#[clap(long, default_value = "0.0.0.0")]
	host: std::net::IpAddr,
	#[clap(long, env = "PORT", default_value = "8080")]
	port: u16,
	#[clap(
		long,
		env = "IRRIGATION_API_URL",
		default_value = "http://backend:8000",
		help = "the rainfed irrigation service, which also serves the logs"
	)]
	irrigation_api_url: Url,
	#[clap(long, env = "TUBE_WELL_API_URL", default_value = "http://127.0.0.1:8000")]
	tube_well_api_url: Url,
	#[clap(long, env = "TOXICITY_API_URL", default_value = "http://backend:8002")]
	toxicity_api_url: Url,
	#[clap(long, env = "OCT_API_URL", default_value = "http://localhost:8004")]
	oct_api_url: Url,
	#[clap(long, env = "CERVICAL_API_URL", default_value = "http://backend:8001")]
	cervical_api_url: Url,
}

fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
		)
		.init();
	let options = Options::parse();
	let result = match options {
		Options::App(options) => self::app::app(*options),
	};
	if let Err(error) = result {
		eprintln!("{}: {}", "error".red().bold(), error);
		std::process::exit(1);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_app_options() {
		let options = Options::try_parse_from(&[
			"ahrc",
			"app",
			"--host",
			"127.0.0.1",
			"--port",
			"9000",
			"--irrigation-api-url",
			"http://localhost:9001",
			"--tube-well-api-url",
			"http://localhost:9002",
			"--toxicity-api-url",
			"http://localhost:9003",
			"--oct-api-url",
			"http://localhost:9004",
			"--cervical-api-url",
			"http://localhost:9005",
		])
		.unwrap();
		let Options::App(options) = options;
		assert_eq!(options.host, std::net::IpAddr::from([127, 0, 0, 1]));
		assert_eq!(options.port, 9000);
		assert_eq!(options.irrigation_api_url.as_str(), "http://localhost:9001/");
		assert_eq!(options.tube_well_api_url.as_str(), "http://localhost:9002/");
		assert_eq!(options.toxicity_api_url.as_str(), "http://localhost:9003/");
		assert_eq!(options.oct_api_url.as_str(), "http://localhost:9004/");
		assert_eq!(options.cervical_api_url.as_str(), "http://localhost:9005/");
	}

	#[test]
	fn test_invalid_url_is_rejected() {
		let result = Options::try_parse_from(&["ahrc", "app", "--oct-api-url", "not a url"]);
		assert!(result.is_err());
	}
}
