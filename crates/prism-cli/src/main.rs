// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

mod args;
mod report;

use anyhow::{Context, Result};
use clap::Parser;
use prism_config::{hex_checksum, load_options_with_cli, Config};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use args::{Args, Command};
use report::{PathReport, Report, UrlReport};

fn init_tracing(debug: bool, json: bool) {
	let level = if debug { "debug" } else { "info" };
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(format!("prism={level},prism_config={level}")));

	if json {
		tracing_subscriber::registry()
			.with(filter)
			.with(fmt::layer().json().with_writer(std::io::stderr))
			.init();
	} else {
		tracing_subscriber::registry()
			.with(filter)
			.with(fmt::layer().compact().with_writer(std::io::stderr))
			.init();
	}
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
	let json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
	println!("{json}");
	Ok(())
}

fn load(args: &Args) -> Result<Config> {
	let options = load_options_with_cli(args.overrides()).context("failed to load options")?;
	let config = Config::new(options);
	info!(
		name = %config.name(),
		version = %config.version(),
		site_url = %config.site_url(),
		"configuration resolved"
	);
	Ok(config)
}

fn main() -> Result<()> {
	let mut args = Args::parse();
	init_tracing(args.debug, args.json_logs);

	let command = args.command.take().unwrap_or(Command::Show { raw: false });
	debug!(?command, "running command");

	match command {
		Command::Checksum { value } => {
			println!("{}", hex_checksum(value));
			Ok(())
		}
		Command::Show { raw: true } => print_json(&load(&args)?.options()),
		Command::Show { raw: false } => print_json(&Report::from(&load(&args)?)),
		Command::Paths => print_json(&PathReport::from(&load(&args)?)),
		Command::Urls => print_json(&UrlReport::from(&load(&args)?)),
	}
}
