// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration resolution for Prism.
//!
//! This crate provides:
//! - Layered loading of raw [`Options`] from defaults, a TOML settings file,
//!   `PRISM_*` environment variables and CLI overrides
//! - [`Config`], which derives effective paths, public URLs, limits and access
//!   policy from an optional options snapshot
//! - [`SharedConfig`] for publishing new snapshots while readers are active
//!
//! Getters never fail. Without options every getter returns its zero value;
//! with options, unset fields fall back to compiled defaults.
//!
//! # Usage
//!
//! ```ignore
//! use prism_config::{load_options, Config};
//!
//! let config = Config::new(load_options()?);
//! println!("serving {} from {}", config.site_url(), config.originals_path().display());
//! ```

pub mod access;
pub mod checksum;
pub mod config;
pub mod error;
pub mod layer;
pub mod limits;
pub mod options;
pub mod paths;
pub mod registry;
pub mod secret;
pub mod sections;
pub mod shared;
pub mod sources;
pub mod urls;
pub mod validation;

use std::path::PathBuf;

pub use checksum::{hex_checksum, ieee_checksum};
pub use config::Config;
pub use error::ConfigError;
pub use layer::OptionsLayer;
pub use options::Options;
pub use paths::shard_path;
pub use registry::ConfigRegistry;
pub use secret::SecretString;
pub use sections::*;
pub use shared::SharedConfig;
pub use sources::{
	CliOverrides, CliSource, ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource,
};
pub use urls::{API_URI, STATIC_URI};

/// Load options from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables (`PRISM_*`)
/// 2. Settings file (`/etc/prism/options.toml`)
/// 3. Built-in defaults
pub fn load_options() -> Result<Options, ConfigError> {
	registry(TomlSource::system(), None).load()
}

/// Load options with a custom settings file path.
pub fn load_options_with_file(path: impl Into<PathBuf>) -> Result<Options, ConfigError> {
	registry(TomlSource::new(path), None).load()
}

/// Load options with command-line overrides on top of everything else.
///
/// `cli.config_file` replaces the system settings file when set.
pub fn load_options_with_cli(cli: CliOverrides) -> Result<Options, ConfigError> {
	let toml = match &cli.config_file {
		Some(path) => TomlSource::new(path.clone()),
		None => TomlSource::system(),
	};
	registry(toml, Some(cli)).load()
}

fn registry(toml: TomlSource, cli: Option<CliOverrides>) -> ConfigRegistry {
	let mut registry = ConfigRegistry::new();
	registry.register(Box::new(DefaultsSource));
	registry.register(Box::new(toml));
	registry.register(Box::new(EnvSource));
	if let Some(cli) = cli {
		registry.register(Box::new(CliSource::new(cli)));
	}
	registry
}
