// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Filesystem roots section.

use serde::{Deserialize, Serialize};

pub const DEFAULT_STORAGE_PATH: &str = "./storage";
pub const DEFAULT_ASSETS_PATH: &str = "./assets";

/// Filesystem roots (raw). Empty strings mean "derive from storage".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PathsOptions {
	pub config_path: String,
	pub storage_path: String,
	pub originals_path: String,
	pub import_path: String,
	pub cache_path: String,
	pub assets_path: String,
	pub custom_assets_path: String,
	pub pid_filename: String,
	pub log_filename: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PathsOptionsLayer {
	pub config_path: Option<String>,
	pub storage_path: Option<String>,
	pub originals_path: Option<String>,
	pub import_path: Option<String>,
	pub cache_path: Option<String>,
	pub assets_path: Option<String>,
	pub custom_assets_path: Option<String>,
	pub pid_filename: Option<String>,
	pub log_filename: Option<String>,
}

impl PathsOptionsLayer {
	pub fn merge(&mut self, other: Self) {
		if other.config_path.is_some() {
			self.config_path = other.config_path;
		}
		if other.storage_path.is_some() {
			self.storage_path = other.storage_path;
		}
		if other.originals_path.is_some() {
			self.originals_path = other.originals_path;
		}
		if other.import_path.is_some() {
			self.import_path = other.import_path;
		}
		if other.cache_path.is_some() {
			self.cache_path = other.cache_path;
		}
		if other.assets_path.is_some() {
			self.assets_path = other.assets_path;
		}
		if other.custom_assets_path.is_some() {
			self.custom_assets_path = other.custom_assets_path;
		}
		if other.pid_filename.is_some() {
			self.pid_filename = other.pid_filename;
		}
		if other.log_filename.is_some() {
			self.log_filename = other.log_filename;
		}
	}

	/// Derived roots (originals, import, cache, config) stay empty here and are
	/// resolved against the storage root at access time.
	pub fn finalize(self) -> PathsOptions {
		PathsOptions {
			config_path: self.config_path.unwrap_or_default(),
			storage_path: self
				.storage_path
				.unwrap_or_else(|| DEFAULT_STORAGE_PATH.to_string()),
			originals_path: self.originals_path.unwrap_or_default(),
			import_path: self.import_path.unwrap_or_default(),
			cache_path: self.cache_path.unwrap_or_default(),
			assets_path: self
				.assets_path
				.unwrap_or_else(|| DEFAULT_ASSETS_PATH.to_string()),
			custom_assets_path: self.custom_assets_path.unwrap_or_default(),
			pid_filename: self.pid_filename.unwrap_or_default(),
			log_filename: self.log_filename.unwrap_or_default(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_layer_finalize_defaults() {
		let paths = PathsOptionsLayer::default().finalize();
		assert_eq!(paths.storage_path, "./storage");
		assert_eq!(paths.assets_path, "./assets");
		assert!(paths.originals_path.is_empty());
		assert!(paths.cache_path.is_empty());
	}

	#[test]
	fn test_merge_overwrites() {
		let mut base = PathsOptionsLayer {
			storage_path: Some("/old/storage".to_string()),
			cache_path: Some("/old/cache".to_string()),
			..Default::default()
		};
		let overlay = PathsOptionsLayer {
			storage_path: Some("/srv/prism".to_string()),
			..Default::default()
		};
		base.merge(overlay);
		assert_eq!(base.storage_path, Some("/srv/prism".to_string()));
		assert_eq!(base.cache_path, Some("/old/cache".to_string()));
	}

	#[test]
	fn test_deserialize_layer_partial() {
		let toml_str = r#"
originals_path = "/photos"
"#;
		let layer: PathsOptionsLayer = toml::from_str(toml_str).unwrap();
		assert_eq!(layer.originals_path, Some("/photos".to_string()));
		assert!(layer.storage_path.is_none());
		let paths = layer.finalize();
		assert_eq!(paths.originals_path, "/photos");
		assert_eq!(paths.storage_path, "./storage");
	}
}
