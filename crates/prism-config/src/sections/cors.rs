// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! CORS response header section.

use serde::{Deserialize, Serialize};

pub const DEFAULT_ALLOW_HEADERS: &str = "Accept, Accept-Ranges, Content-Disposition, Content-Encoding, Content-Range, Origin";
pub const DEFAULT_ALLOW_METHODS: &str = "GET, HEAD, OPTIONS";

/// CORS headers (raw). Empty values disable the corresponding header.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CorsOptions {
	pub origin: String,
	pub headers: String,
	pub methods: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CorsOptionsLayer {
	pub origin: Option<String>,
	pub headers: Option<String>,
	pub methods: Option<String>,
}

impl CorsOptionsLayer {
	pub fn merge(&mut self, other: Self) {
		if other.origin.is_some() {
			self.origin = other.origin;
		}
		if other.headers.is_some() {
			self.headers = other.headers;
		}
		if other.methods.is_some() {
			self.methods = other.methods;
		}
	}

	/// Headers and methods only get defaults once an origin is allowed.
	pub fn finalize(self) -> CorsOptions {
		let origin = self.origin.unwrap_or_default();
		let enabled = !origin.is_empty();
		CorsOptions {
			headers: self.headers.unwrap_or_else(|| {
				if enabled {
					DEFAULT_ALLOW_HEADERS.to_string()
				} else {
					String::new()
				}
			}),
			methods: self.methods.unwrap_or_else(|| {
				if enabled {
					DEFAULT_ALLOW_METHODS.to_string()
				} else {
					String::new()
				}
			}),
			origin,
		}
	}
}
