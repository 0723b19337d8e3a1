// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: defaults, TOML settings file, environment and CLI.

use std::path::PathBuf;

use tracing::{debug, trace};

use crate::error::ConfigError;
use crate::layer::OptionsLayer;
use crate::secret::SecretString;
use crate::sections::{
	AppOptionsLayer, AuthOptionsLayer, CorsOptionsLayer, FeaturesOptionsLayer, IndexOptionsLayer,
	LimitsOptionsLayer, PathsOptionsLayer, SiteOptionsLayer,
};

/// System-wide settings file.
pub const SYSTEM_OPTIONS_FILE: &str = "/etc/prism/options.toml";

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	ConfigFile = 20,
	Environment = 50,
	Cli = 100,
}

/// Trait for configuration sources.
pub trait ConfigSource: Send + Sync {
	fn name(&self) -> &'static str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<OptionsLayer, ConfigError>;
}

/// Built-in defaults source.
///
/// Defaults are applied by [`OptionsLayer::finalize`], so this contributes an
/// empty layer and only anchors the precedence chain.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<OptionsLayer, ConfigError> {
		debug!("loading defaults");
		Ok(OptionsLayer::default())
	}
}

/// TOML settings file source.
pub struct TomlSource {
	path: PathBuf,
}

impl TomlSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn system() -> Self {
		Self::new(SYSTEM_OPTIONS_FILE)
	}
}

impl ConfigSource for TomlSource {
	fn name(&self) -> &'static str {
		"toml-config"
	}

	fn precedence(&self) -> Precedence {
		Precedence::ConfigFile
	}

	fn load(&self) -> Result<OptionsLayer, ConfigError> {
		if !self.path.exists() {
			debug!(path = %self.path.display(), "options file not found, skipping");
			return Ok(OptionsLayer::default());
		}

		debug!(path = %self.path.display(), "loading options file");
		let content = std::fs::read_to_string(&self.path).map_err(|e| ConfigError::FileRead {
			path: self.path.clone(),
			source: e,
		})?;

		let layer: OptionsLayer = toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
			path: self.path.clone(),
			source: e,
		})?;

		trace!("parsed options layer from TOML");
		Ok(layer)
	}
}

/// Environment variable source.
///
/// Convention: PRISM_<FIELD>, e.g. `PRISM_SITE_URL`, `PRISM_ORIGINALS_LIMIT`.
pub struct EnvSource;

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<OptionsLayer, ConfigError> {
		debug!("loading environment variables");
		Ok(OptionsLayer {
			app: Some(load_app_from_env()),
			paths: Some(load_paths_from_env()),
			site: Some(load_site_from_env()),
			auth: Some(load_auth_from_env()),
			cors: Some(load_cors_from_env()),
			limits: Some(load_limits_from_env()?),
			index: Some(load_index_from_env()?),
			features: Some(load_features_from_env()),
		})
	}
}

fn env_var(name: &str) -> Option<String> {
	std::env::var(name).ok().filter(|s| !s.is_empty())
}

fn env_bool(name: &str) -> Option<bool> {
	env_var(name).map(|v| v.eq_ignore_ascii_case("true") || v == "1")
}

fn env_i64(name: &str) -> Result<Option<i64>, ConfigError> {
	match env_var(name) {
		Some(v) => v
			.trim()
			.parse()
			.map(Some)
			.map_err(|_| ConfigError::invalid_value(name, format!("invalid i64 value '{v}'"))),
		None => Ok(None),
	}
}

fn env_usize(name: &str) -> Result<Option<usize>, ConfigError> {
	match env_var(name) {
		Some(v) => v
			.trim()
			.parse()
			.map(Some)
			.map_err(|_| ConfigError::invalid_value(name, format!("invalid usize value '{v}'"))),
		None => Ok(None),
	}
}

fn load_app_from_env() -> AppOptionsLayer {
	AppOptionsLayer {
		name: env_var("PRISM_NAME"),
		about: env_var("PRISM_ABOUT"),
		edition: env_var("PRISM_EDITION"),
		version: env_var("PRISM_VERSION"),
		copyright: env_var("PRISM_COPYRIGHT"),
		prod: env_bool("PRISM_PROD"),
		debug: env_bool("PRISM_DEBUG"),
		trace: env_bool("PRISM_TRACE"),
		read_only: env_bool("PRISM_READONLY"),
		demo: env_bool("PRISM_DEMO"),
		sponsor: env_bool("PRISM_SPONSOR"),
		detach_server: env_bool("PRISM_DETACH_SERVER"),
	}
}

fn load_paths_from_env() -> PathsOptionsLayer {
	PathsOptionsLayer {
		config_path: env_var("PRISM_CONFIG_PATH"),
		storage_path: env_var("PRISM_STORAGE_PATH"),
		originals_path: env_var("PRISM_ORIGINALS_PATH"),
		import_path: env_var("PRISM_IMPORT_PATH"),
		cache_path: env_var("PRISM_CACHE_PATH"),
		assets_path: env_var("PRISM_ASSETS_PATH"),
		custom_assets_path: env_var("PRISM_CUSTOM_ASSETS_PATH"),
		pid_filename: env_var("PRISM_PID_FILENAME"),
		log_filename: env_var("PRISM_LOG_FILENAME"),
	}
}

fn load_site_from_env() -> SiteOptionsLayer {
	SiteOptionsLayer {
		url: env_var("PRISM_SITE_URL"),
		title: env_var("PRISM_SITE_TITLE"),
		preview: env_var("PRISM_SITE_PREVIEW"),
		cdn_url: env_var("PRISM_CDN_URL"),
		cdn_video: env_bool("PRISM_CDN_VIDEO"),
	}
}

fn load_auth_from_env() -> AuthOptionsLayer {
	AuthOptionsLayer {
		public: env_bool("PRISM_PUBLIC"),
		auth_mode: env_var("PRISM_AUTH_MODE"),
		admin_user: env_var("PRISM_ADMIN_USER"),
		admin_password: env_var("PRISM_ADMIN_PASSWORD").map(SecretString::from),
	}
}

fn load_cors_from_env() -> CorsOptionsLayer {
	CorsOptionsLayer {
		origin: env_var("PRISM_CORS_ORIGIN"),
		headers: env_var("PRISM_CORS_HEADERS"),
		methods: env_var("PRISM_CORS_METHODS"),
	}
}

fn load_limits_from_env() -> Result<LimitsOptionsLayer, ConfigError> {
	Ok(LimitsOptionsLayer {
		originals_limit: env_i64("PRISM_ORIGINALS_LIMIT")?,
		resolution_limit: env_i64("PRISM_RESOLUTION_LIMIT")?,
		wakeup_interval: env_i64("PRISM_WAKEUP_INTERVAL")?,
	})
}

fn load_index_from_env() -> Result<IndexOptionsLayer, ConfigError> {
	Ok(IndexOptionsLayer {
		workers: env_usize("PRISM_INDEX_WORKERS")?,
		schedule: env_var("PRISM_INDEX_SCHEDULE"),
		auto_index: env_i64("PRISM_AUTO_INDEX")?,
		auto_import: env_i64("PRISM_AUTO_IMPORT")?,
	})
}

fn load_features_from_env() -> FeaturesOptionsLayer {
	FeaturesOptionsLayer {
		detect_nsfw: env_bool("PRISM_DETECT_NSFW"),
		disable_places: env_bool("PRISM_DISABLE_PLACES"),
		disable_tensorflow: env_bool("PRISM_DISABLE_TENSORFLOW"),
	}
}

/// Command-line overrides, filled in by the CLI front-end.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
	pub config_file: Option<PathBuf>,
	pub storage_path: Option<String>,
	pub originals_path: Option<String>,
	pub import_path: Option<String>,
	pub cache_path: Option<String>,
	pub assets_path: Option<String>,
	pub site_url: Option<String>,
	pub cdn_url: Option<String>,
	pub cdn_video: Option<bool>,
	pub auth_mode: Option<String>,
	pub public: Option<bool>,
	pub demo: Option<bool>,
	pub debug: Option<bool>,
	pub read_only: Option<bool>,
	pub originals_limit: Option<i64>,
	pub resolution_limit: Option<i64>,
}

/// CLI override source.
pub struct CliSource {
	overrides: CliOverrides,
}

impl CliSource {
	pub fn new(overrides: CliOverrides) -> Self {
		Self { overrides }
	}
}

impl ConfigSource for CliSource {
	fn name(&self) -> &'static str {
		"cli"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Cli
	}

	fn load(&self) -> Result<OptionsLayer, ConfigError> {
		debug!("loading CLI overrides");
		let o = self.overrides.clone();

		let app = AppOptionsLayer {
			demo: o.demo,
			debug: o.debug,
			read_only: o.read_only,
			..Default::default()
		};
		let paths = PathsOptionsLayer {
			storage_path: o.storage_path,
			originals_path: o.originals_path,
			import_path: o.import_path,
			cache_path: o.cache_path,
			assets_path: o.assets_path,
			..Default::default()
		};
		let site = SiteOptionsLayer {
			url: o.site_url,
			cdn_url: o.cdn_url,
			cdn_video: o.cdn_video,
			..Default::default()
		};
		let auth = AuthOptionsLayer {
			public: o.public,
			auth_mode: o.auth_mode,
			..Default::default()
		};
		let limits = LimitsOptionsLayer {
			originals_limit: o.originals_limit,
			resolution_limit: o.resolution_limit,
			..Default::default()
		};

		Ok(OptionsLayer {
			app: Some(app),
			paths: Some(paths),
			site: Some(site),
			auth: Some(auth),
			limits: Some(limits),
			..Default::default()
		})
	}
}
