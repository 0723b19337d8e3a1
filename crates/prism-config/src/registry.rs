// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration registry - manages sources and merges layers.

use tracing::{debug, info};

use crate::error::ConfigError;
use crate::layer::OptionsLayer;
use crate::options::Options;
use crate::sources::ConfigSource;
use crate::validation::validate_options;

/// Registry that manages configuration sources and merges them.
pub struct ConfigRegistry {
	sources: Vec<Box<dyn ConfigSource>>,
}

impl ConfigRegistry {
	pub fn new() -> Self {
		Self {
			sources: Vec::new(),
		}
	}

	pub fn register(&mut self, source: Box<dyn ConfigSource>) {
		debug!(source = source.name(), precedence = ?source.precedence(), "registering config source");
		self.sources.push(source);
	}

	/// Load options from all sources, merge, finalize and validate.
	///
	/// Sources are merged lowest precedence first, so higher precedence
	/// sources override lower ones. Any source error aborts the load.
	pub fn load(&self) -> Result<Options, ConfigError> {
		let mut sorted_sources: Vec<_> = self.sources.iter().collect();
		sorted_sources.sort_by_key(|s| s.precedence());

		let mut merged = OptionsLayer::default();
		for source in &sorted_sources {
			debug!(source = source.name(), "loading configuration source");
			merged.merge(source.load()?);
		}

		let options = merged.finalize();
		validate_options(&options)?;

		info!(
			source_count = sorted_sources.len(),
			storage_path = %options.paths.storage_path,
			site_url = %options.site.url,
			cdn_configured = !options.site.cdn_url.is_empty(),
			auth_mode = %options.auth.auth_mode,
			public = options.auth.public,
			demo = options.app.demo,
			"options loaded"
		);

		Ok(options)
	}

	pub fn source_count(&self) -> usize {
		self.sources.len()
	}
}

impl Default for ConfigRegistry {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::sections::SiteOptionsLayer;
	use crate::sources::{CliOverrides, CliSource, DefaultsSource, Precedence};

	struct StaticSource {
		precedence: Precedence,
		layer: OptionsLayer,
	}

	impl ConfigSource for StaticSource {
		fn name(&self) -> &'static str {
			"static"
		}

		fn precedence(&self) -> Precedence {
			self.precedence
		}

		fn load(&self) -> Result<OptionsLayer, ConfigError> {
			Ok(self.layer.clone())
		}
	}

	fn site_layer(url: &str) -> OptionsLayer {
		OptionsLayer {
			site: Some(SiteOptionsLayer {
				url: Some(url.to_string()),
				..Default::default()
			}),
			..Default::default()
		}
	}

	#[test]
	fn test_registry_registers_sources() {
		let mut registry = ConfigRegistry::new();
		assert_eq!(registry.source_count(), 0);
		registry.register(Box::new(DefaultsSource));
		assert_eq!(registry.source_count(), 1);
	}

	#[test]
	fn test_registry_loads_with_defaults() {
		let mut registry = ConfigRegistry::new();
		registry.register(Box::new(DefaultsSource));
		let options = registry.load().unwrap();
		assert_eq!(options.paths.storage_path, "./storage");
		assert_eq!(options.limits.originals_limit, -1);
	}

	#[test]
	fn test_higher_precedence_wins_regardless_of_order() {
		let mut registry = ConfigRegistry::new();
		registry.register(Box::new(CliSource::new(CliOverrides {
			site_url: Some("https://cli.example.com/".to_string()),
			..Default::default()
		})));
		registry.register(Box::new(StaticSource {
			precedence: Precedence::ConfigFile,
			layer: site_layer("https://file.example.com/"),
		}));

		let options = registry.load().unwrap();
		assert_eq!(options.site.url, "https://cli.example.com/");
	}

	#[test]
	fn test_validation_failure_aborts_load() {
		let mut registry = ConfigRegistry::new();
		registry.register(Box::new(StaticSource {
			precedence: Precedence::ConfigFile,
			layer: site_layer("photos.example.com"),
		}));
		assert!(matches!(
			registry.load(),
			Err(ConfigError::Validation(_))
		));
	}
}
