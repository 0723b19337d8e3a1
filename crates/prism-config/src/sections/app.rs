// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Application identity and run-mode section.

use serde::{Deserialize, Serialize};

pub const DEFAULT_NAME: &str = "PhotoPrism";
pub const DEFAULT_ABOUT: &str = "PhotoPrism®";
pub const DEFAULT_EDITION: &str = "ce";

/// Version reported when none is configured.
pub const DEFAULT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application identity and run modes (raw).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppOptions {
	pub name: String,
	pub about: String,
	pub edition: String,
	pub version: String,
	pub copyright: String,
	pub prod: bool,
	pub debug: bool,
	pub trace: bool,
	pub read_only: bool,
	pub demo: bool,
	pub sponsor: bool,
	pub detach_server: bool,
}

/// Application configuration layer (partial, for merging).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppOptionsLayer {
	pub name: Option<String>,
	pub about: Option<String>,
	pub edition: Option<String>,
	pub version: Option<String>,
	pub copyright: Option<String>,
	pub prod: Option<bool>,
	pub debug: Option<bool>,
	pub trace: Option<bool>,
	pub read_only: Option<bool>,
	pub demo: Option<bool>,
	pub sponsor: Option<bool>,
	pub detach_server: Option<bool>,
}

impl AppOptionsLayer {
	pub fn merge(&mut self, other: Self) {
		if other.name.is_some() {
			self.name = other.name;
		}
		if other.about.is_some() {
			self.about = other.about;
		}
		if other.edition.is_some() {
			self.edition = other.edition;
		}
		if other.version.is_some() {
			self.version = other.version;
		}
		if other.copyright.is_some() {
			self.copyright = other.copyright;
		}
		if other.prod.is_some() {
			self.prod = other.prod;
		}
		if other.debug.is_some() {
			self.debug = other.debug;
		}
		if other.trace.is_some() {
			self.trace = other.trace;
		}
		if other.read_only.is_some() {
			self.read_only = other.read_only;
		}
		if other.demo.is_some() {
			self.demo = other.demo;
		}
		if other.sponsor.is_some() {
			self.sponsor = other.sponsor;
		}
		if other.detach_server.is_some() {
			self.detach_server = other.detach_server;
		}
	}

	pub fn finalize(self) -> AppOptions {
		AppOptions {
			name: self.name.unwrap_or_else(|| DEFAULT_NAME.to_string()),
			about: self.about.unwrap_or_else(|| DEFAULT_ABOUT.to_string()),
			edition: self.edition.unwrap_or_else(|| DEFAULT_EDITION.to_string()),
			version: self.version.unwrap_or_else(|| DEFAULT_VERSION.to_string()),
			copyright: self.copyright.unwrap_or_default(),
			prod: self.prod.unwrap_or(false),
			debug: self.debug.unwrap_or(false),
			trace: self.trace.unwrap_or(false),
			read_only: self.read_only.unwrap_or(false),
			demo: self.demo.unwrap_or(false),
			sponsor: self.sponsor.unwrap_or(false),
			detach_server: self.detach_server.unwrap_or(false),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_layer_finalize_defaults() {
		let app = AppOptionsLayer::default().finalize();
		assert_eq!(app.name, "PhotoPrism");
		assert_eq!(app.about, "PhotoPrism®");
		assert_eq!(app.edition, "ce");
		assert_eq!(app.version, DEFAULT_VERSION);
		assert!(app.copyright.is_empty());
		assert!(!app.prod);
		assert!(!app.demo);
	}

	#[test]
	fn test_merge_overwrites() {
		let mut base = AppOptionsLayer {
			name: Some("Prism".to_string()),
			debug: Some(true),
			..Default::default()
		};
		let overlay = AppOptionsLayer {
			debug: Some(false),
			prod: Some(true),
			..Default::default()
		};
		base.merge(overlay);
		assert_eq!(base.name, Some("Prism".to_string()));
		assert_eq!(base.debug, Some(false));
		assert_eq!(base.prod, Some(true));
	}

	#[test]
	fn test_deserialize_layer_partial() {
		let layer: AppOptionsLayer = toml::from_str("demo = true\n").unwrap();
		assert_eq!(layer.demo, Some(true));
		assert!(layer.name.is_none());
	}
}
