// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Public site and CDN section.

use serde::{Deserialize, Serialize};

/// Public origin used when no site URL is configured.
pub const DEFAULT_SITE_URL: &str = "http://localhost:2342/";

/// Public site and CDN origins (raw).
///
/// The site URL, title and preview are left empty when unset; the resolver
/// derives them from [`DEFAULT_SITE_URL`] and the application name.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteOptions {
	pub url: String,
	pub title: String,
	pub preview: String,
	pub cdn_url: String,
	pub cdn_video: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SiteOptionsLayer {
	pub url: Option<String>,
	pub title: Option<String>,
	pub preview: Option<String>,
	pub cdn_url: Option<String>,
	pub cdn_video: Option<bool>,
}

impl SiteOptionsLayer {
	pub fn merge(&mut self, other: Self) {
		if other.url.is_some() {
			self.url = other.url;
		}
		if other.title.is_some() {
			self.title = other.title;
		}
		if other.preview.is_some() {
			self.preview = other.preview;
		}
		if other.cdn_url.is_some() {
			self.cdn_url = other.cdn_url;
		}
		if other.cdn_video.is_some() {
			self.cdn_video = other.cdn_video;
		}
	}

	pub fn finalize(self) -> SiteOptions {
		SiteOptions {
			url: self.url.unwrap_or_default(),
			title: self.title.unwrap_or_default(),
			preview: self.preview.unwrap_or_default(),
			cdn_url: self.cdn_url.unwrap_or_default(),
			cdn_video: self.cdn_video.unwrap_or(false),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_layer_finalize_defaults() {
		let site = SiteOptionsLayer::default().finalize();
		assert!(site.url.is_empty());
		assert!(site.cdn_url.is_empty());
		assert!(!site.cdn_video);
	}

	#[test]
	fn test_merge_preserves_base_when_none() {
		let mut base = SiteOptionsLayer {
			url: Some("https://photos.example.com/".to_string()),
			cdn_url: Some("https://cdn.example.com/".to_string()),
			..Default::default()
		};
		let overlay = SiteOptionsLayer {
			cdn_video: Some(true),
			..Default::default()
		};
		base.merge(overlay);
		assert_eq!(base.url, Some("https://photos.example.com/".to_string()));
		assert_eq!(base.cdn_url, Some("https://cdn.example.com/".to_string()));
		assert_eq!(base.cdn_video, Some(true));
	}

	#[test]
	fn test_deserialize_layer_empty() {
		let layer: SiteOptionsLayer = toml::from_str("").unwrap();
		assert!(layer.url.is_none());
		assert!(layer.cdn_video.is_none());
	}
}
