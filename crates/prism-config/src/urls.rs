// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Public URI derivation from the site and CDN origins.
//!
//! The CDN only takes effect when it is set and differs from the site URL
//! (trailing slashes ignored). Static, content and video URIs are CDN-aware;
//! the API URI never is.

use url::Url;

use crate::config::{app_name, Config};
use crate::options::Options;
use crate::sections::DEFAULT_SITE_URL;

pub const STATIC_URI: &str = "/static";
pub const API_URI: &str = "/api/v1";
pub const DEFAULT_SITE_DOMAIN: &str = "localhost";
pub const GEO_API_PLACES: &str = "places";

const PREVIEW_TEMPLATE: &str =
	"https://i.photoprism.app/prism?cover=64&style=centered%20dark&caption=none&title=";

/// Parse an absolute URL with an authority component (`scheme://host...`).
///
/// `http:/host` is accepted by WHATWG parsers; it is rejected here.
fn parse_origin(raw: &str) -> Option<Url> {
	if !raw.contains("://") {
		return None;
	}
	let url = Url::parse(raw).ok()?;
	match url.host_str() {
		Some(host) if !host.is_empty() => Some(url),
		_ => None,
	}
}

/// Host without IPv6 brackets.
fn hostname(url: &Url) -> String {
	url.host_str()
		.unwrap_or_default()
		.trim_start_matches('[')
		.trim_end_matches(']')
		.to_string()
}

pub(crate) fn site_url(o: &Options) -> String {
	let raw = o.site.url.trim();
	if raw.is_empty() {
		return DEFAULT_SITE_URL.to_string();
	}
	format!("{}/", raw.trim_end_matches('/'))
}

fn base_uri(o: &Options, suffix: &str) -> String {
	match parse_origin(&site_url(o)) {
		Some(url) => format!("{}{}", url.path().trim_end_matches('/'), suffix),
		None => suffix.to_string(),
	}
}

/// The CDN origin without trailing slashes, if it is set and distinct.
fn distinct_cdn(o: &Options) -> Option<&str> {
	let cdn = o.site.cdn_url.trim().trim_end_matches('/');
	if cdn.is_empty() {
		return None;
	}
	let site = site_url(o);
	if cdn == site.trim_end_matches('/') {
		return None;
	}
	Some(cdn)
}

fn cdn_url(o: &Options, suffix: &str) -> String {
	match distinct_cdn(o) {
		Some(cdn) => format!("{cdn}{suffix}"),
		None => suffix.to_string(),
	}
}

fn cdn_video(o: &Options) -> bool {
	o.site.cdn_video && distinct_cdn(o).is_some()
}

fn api_uri(o: &Options) -> String {
	base_uri(o, API_URI)
}

fn content_uri(o: &Options) -> String {
	cdn_url(o, &api_uri(o))
}

impl Config {
	/// Public site URL with exactly one trailing slash.
	pub fn site_url(&self) -> String {
		self.resolve(site_url)
	}

	pub fn site_domain(&self) -> String {
		self.resolve(|o| {
			parse_origin(&site_url(o))
				.map(|url| hostname(&url))
				.filter(|host| !host.is_empty())
				.unwrap_or_else(|| DEFAULT_SITE_DOMAIN.to_string())
		})
	}

	/// Escaped site path (without trailing slash) followed by `suffix`.
	///
	/// A site served from `http://host/foo bar/` yields `/foo%20bar` + suffix.
	pub fn base_uri(&self, suffix: &str) -> String {
		self.resolve(|o| base_uri(o, suffix))
	}

	/// `suffix` prefixed with the CDN origin, or `suffix` alone without a
	/// distinct CDN.
	pub fn cdn_url(&self, suffix: &str) -> String {
		self.resolve(|o| cdn_url(o, suffix))
	}

	/// True when no distinct CDN is configured; equivalent to `cdn_url("")`
	/// being empty.
	pub fn no_cdn(&self) -> bool {
		self.resolve(|o| distinct_cdn(o).is_none())
	}

	pub fn use_cdn(&self) -> bool {
		self.resolve(|o| distinct_cdn(o).is_some())
	}

	pub fn cdn_domain(&self) -> String {
		self.resolve(|o| {
			distinct_cdn(o)
				.and_then(parse_origin)
				.map(|url| hostname(&url))
				.unwrap_or_default()
		})
	}

	/// Serve videos from the CDN; needs both the flag and a distinct CDN.
	pub fn cdn_video(&self) -> bool {
		self.resolve(cdn_video)
	}

	pub fn static_uri(&self) -> String {
		self.resolve(|o| cdn_url(o, &base_uri(o, STATIC_URI)))
	}

	pub fn api_uri(&self) -> String {
		self.resolve(api_uri)
	}

	pub fn content_uri(&self) -> String {
		self.resolve(content_uri)
	}

	pub fn video_uri(&self) -> String {
		self.resolve(|o| if cdn_video(o) { content_uri(o) } else { api_uri(o) })
	}

	/// Preview image for link unfurling.
	pub fn site_preview(&self) -> String {
		self.resolve(|o| {
			let raw = o.site.preview.trim();
			if raw.is_empty() {
				let title: String =
					url::form_urlencoded::byte_serialize(app_name(o).as_bytes()).collect();
				format!("{PREVIEW_TEMPLATE}{title}")
			} else if raw.starts_with("http") {
				raw.to_string()
			} else {
				format!("{}{}", site_url(o), raw.trim_start_matches('/'))
			}
		})
	}

	pub fn site_title(&self) -> String {
		self.resolve(|o| {
			let title = o.site.title.trim();
			if title.is_empty() {
				app_name(o).to_string()
			} else {
				title.to_string()
			}
		})
	}

	/// Places geocoding provider, empty when disabled.
	pub fn geo_api(&self) -> String {
		self.resolve(|o| {
			if o.features.disable_places {
				String::new()
			} else {
				GEO_API_PLACES.to_string()
			}
		})
	}
}
