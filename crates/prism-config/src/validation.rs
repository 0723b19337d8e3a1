// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Cross-field validation of merged options.

use tracing::warn;

use crate::error::ConfigError;
use crate::options::Options;
use crate::sections::{AUTH_MODE_PASSWORD, AUTH_MODE_PUBLIC};
use crate::urls::site_url;

/// Returns true when the CDN origin is set but matches the effective site URL,
/// in which case the resolver ignores it.
fn cdn_shadowed_by_site(options: &Options) -> bool {
	let cdn = options.site.cdn_url.trim().trim_end_matches('/');
	!cdn.is_empty() && cdn == site_url(options).trim_end_matches('/')
}

/// Validate merged options before they are handed to the resolver.
pub fn validate_options(options: &Options) -> Result<(), ConfigError> {
	let mode = options.auth.auth_mode.as_str();
	if !mode.is_empty() && mode != AUTH_MODE_PUBLIC && mode != AUTH_MODE_PASSWORD {
		return Err(ConfigError::Validation(format!(
			"auth mode must be '{AUTH_MODE_PUBLIC}' or '{AUTH_MODE_PASSWORD}', got '{mode}'"
		)));
	}

	validate_origin("site url", &options.site.url)?;
	validate_origin("cdn url", &options.site.cdn_url)?;

	if cdn_shadowed_by_site(options) {
		warn!(cdn_url = %options.site.cdn_url, "cdn url equals site url and will be ignored");
	}

	Ok(())
}

fn validate_origin(field: &str, value: &str) -> Result<(), ConfigError> {
	if value.is_empty() || value.starts_with("http://") || value.starts_with("https://") {
		return Ok(());
	}

	Err(ConfigError::Validation(format!(
		"{field} must start with http:// or https://, got '{value}'"
	)))
}
