// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration layer for merging from multiple sources.

use serde::{Deserialize, Serialize};

use crate::options::Options;
use crate::sections::{
	AppOptionsLayer, AuthOptionsLayer, CorsOptionsLayer, FeaturesOptionsLayer, IndexOptionsLayer,
	LimitsOptionsLayer, PathsOptionsLayer, SiteOptionsLayer,
};

/// Options layer - all fields are Option for merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OptionsLayer {
	#[serde(default)]
	pub app: Option<AppOptionsLayer>,
	#[serde(default)]
	pub paths: Option<PathsOptionsLayer>,
	#[serde(default)]
	pub site: Option<SiteOptionsLayer>,
	#[serde(default)]
	pub auth: Option<AuthOptionsLayer>,
	#[serde(default)]
	pub cors: Option<CorsOptionsLayer>,
	#[serde(default)]
	pub limits: Option<LimitsOptionsLayer>,
	#[serde(default)]
	pub index: Option<IndexOptionsLayer>,
	#[serde(default)]
	pub features: Option<FeaturesOptionsLayer>,
}

impl OptionsLayer {
	/// Merge another layer into this one. Other layer takes precedence.
	pub fn merge(&mut self, other: OptionsLayer) {
		merge_option(&mut self.app, other.app, AppOptionsLayer::merge);
		merge_option(&mut self.paths, other.paths, PathsOptionsLayer::merge);
		merge_option(&mut self.site, other.site, SiteOptionsLayer::merge);
		merge_option(&mut self.auth, other.auth, AuthOptionsLayer::merge);
		merge_option(&mut self.cors, other.cors, CorsOptionsLayer::merge);
		merge_option(&mut self.limits, other.limits, LimitsOptionsLayer::merge);
		merge_option(&mut self.index, other.index, IndexOptionsLayer::merge);
		merge_option(
			&mut self.features,
			other.features,
			FeaturesOptionsLayer::merge,
		);
	}

	/// Apply compiled defaults to every unset field.
	pub fn finalize(self) -> Options {
		Options {
			app: self.app.unwrap_or_default().finalize(),
			paths: self.paths.unwrap_or_default().finalize(),
			site: self.site.unwrap_or_default().finalize(),
			auth: self.auth.unwrap_or_default().finalize(),
			cors: self.cors.unwrap_or_default().finalize(),
			limits: self.limits.unwrap_or_default().finalize(),
			index: self.index.unwrap_or_default().finalize(),
			features: self.features.unwrap_or_default().finalize(),
		}
	}
}

fn merge_option<T, F>(target: &mut Option<T>, source: Option<T>, merge_fn: F)
where
	F: FnOnce(&mut T, T),
{
	match (target.as_mut(), source) {
		(Some(t), Some(s)) => merge_fn(t, s),
		(None, Some(s)) => *target = Some(s),
		_ => {}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_merge_empty_layers() {
		let mut base = OptionsLayer::default();
		base.merge(OptionsLayer::default());
		assert!(base.site.is_none());
		assert!(base.limits.is_none());
	}

	#[test]
	fn test_merge_other_overwrites() {
		let mut base = OptionsLayer {
			site: Some(SiteOptionsLayer {
				url: Some("http://superhost:2342/".to_string()),
				cdn_url: Some("http://foo:2342/foo/".to_string()),
				..Default::default()
			}),
			..Default::default()
		};
		let other = OptionsLayer {
			site: Some(SiteOptionsLayer {
				url: Some("https://photos.example.com/".to_string()),
				..Default::default()
			}),
			..Default::default()
		};
		base.merge(other);
		let site = base.site.as_ref().unwrap();
		assert_eq!(site.url, Some("https://photos.example.com/".to_string()));
		assert_eq!(site.cdn_url, Some("http://foo:2342/foo/".to_string()));
	}

	#[test]
	fn test_merge_adds_missing_sections() {
		let mut base = OptionsLayer {
			auth: Some(AuthOptionsLayer {
				public: Some(true),
				..Default::default()
			}),
			..Default::default()
		};
		let other = OptionsLayer {
			limits: Some(LimitsOptionsLayer {
				originals_limit: Some(800),
				..Default::default()
			}),
			..Default::default()
		};
		base.merge(other);
		assert_eq!(base.auth.as_ref().unwrap().public, Some(true));
		assert_eq!(base.limits.as_ref().unwrap().originals_limit, Some(800));
	}

	#[test]
	fn test_finalize_applies_section_defaults() {
		let options = OptionsLayer::default().finalize();
		assert_eq!(options.app.name, "PhotoPrism");
		assert_eq!(options.paths.storage_path, "./storage");
		assert_eq!(options.auth.auth_mode, "password");
		assert_eq!(options.limits.resolution_limit, 150);
		assert!(options.features.detect_nsfw);
	}

	#[test]
	fn test_deserialize_from_toml() {
		let toml_str = r#"
[app]
demo = true

[index]
auto_import = 7200
"#;
		let layer: OptionsLayer = toml::from_str(toml_str).unwrap();
		assert_eq!(layer.app.as_ref().unwrap().demo, Some(true));
		assert_eq!(layer.index.as_ref().unwrap().auto_import, Some(7200));
		assert!(layer.site.is_none());
	}
}
