// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use prism_config::CliOverrides;

/// Prism - inspect resolved configuration
#[derive(Parser, Debug)]
#[command(name = "prism", version, about, long_about = None)]
pub struct Args {
	/// Path to the settings file (defaults to /etc/prism/options.toml)
	#[arg(short, long, env = "PRISM_CONFIG_FILE")]
	pub config_file: Option<PathBuf>,

	/// Storage root for cache, config and sidecar files
	#[arg(long)]
	pub storage_path: Option<String>,

	/// Originals library path
	#[arg(long)]
	pub originals_path: Option<String>,

	/// Import folder path
	#[arg(long)]
	pub import_path: Option<String>,

	/// Cache root (defaults to <storage>/cache)
	#[arg(long)]
	pub cache_path: Option<String>,

	/// Static assets path
	#[arg(long)]
	pub assets_path: Option<String>,

	/// Public site URL
	#[arg(long)]
	pub site_url: Option<String>,

	/// CDN origin for static assets and content
	#[arg(long)]
	pub cdn_url: Option<String>,

	/// Stream videos over the CDN
	#[arg(long)]
	pub cdn_video: bool,

	/// Authentication mode (public or password)
	#[arg(long)]
	pub auth_mode: Option<String>,

	/// Disable authentication
	#[arg(long)]
	pub public: bool,

	/// Enable demo mode
	#[arg(long)]
	pub demo: bool,

	/// Enable debug logging
	#[arg(short, long)]
	pub debug: bool,

	/// Do not modify the originals folder
	#[arg(long)]
	pub read_only: bool,

	/// Maximum size of an original in MB (-1 for unlimited)
	#[arg(long, allow_negative_numbers = true)]
	pub originals_limit: Option<i64>,

	/// Maximum resolution in megapixels (-1 for unlimited)
	#[arg(long, allow_negative_numbers = true)]
	pub resolution_limit: Option<i64>,

	/// Output logs as JSON
	#[arg(long)]
	pub json_logs: bool,

	#[command(subcommand)]
	pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
	/// Print all resolved values as JSON
	Show {
		/// Print the merged raw options instead
		#[arg(long)]
		raw: bool,
	},
	/// Print resolved filesystem paths
	Paths,
	/// Print resolved public URLs
	Urls,
	/// Print the CRC-32C checksum of a value
	Checksum { value: String },
}

impl Args {
	/// Flags that were given on the command line. Switches only override
	/// when set.
	pub fn overrides(&self) -> CliOverrides {
		CliOverrides {
			config_file: self.config_file.clone(),
			storage_path: self.storage_path.clone(),
			originals_path: self.originals_path.clone(),
			import_path: self.import_path.clone(),
			cache_path: self.cache_path.clone(),
			assets_path: self.assets_path.clone(),
			site_url: self.site_url.clone(),
			cdn_url: self.cdn_url.clone(),
			cdn_video: self.cdn_video.then_some(true),
			auth_mode: self.auth_mode.clone(),
			public: self.public.then_some(true),
			demo: self.demo.then_some(true),
			debug: self.debug.then_some(true),
			read_only: self.read_only.then_some(true),
			originals_limit: self.originals_limit,
			resolution_limit: self.resolution_limit,
		}
	}
}
