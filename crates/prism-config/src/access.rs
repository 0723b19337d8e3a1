// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Access policy: public mode, admin credentials and CORS.

use crate::config::{non_empty_or, Config};
use crate::options::Options;
use crate::sections::auth::DEFAULT_ADMIN_USER;
use crate::sections::{AUTH_MODE_PASSWORD, AUTH_MODE_PUBLIC};

/// Public when any of demo mode, the public flag or `auth_mode = "public"`
/// is set.
fn is_public(o: &Options) -> bool {
	o.app.demo || o.auth.public || o.auth.auth_mode.trim() == AUTH_MODE_PUBLIC
}

impl Config {
	pub fn public(&self) -> bool {
		self.resolve(is_public)
	}

	/// Whether clients must authenticate.
	pub fn auth(&self) -> bool {
		self.resolve(|o| !is_public(o))
	}

	/// Effective auth mode after applying demo and public flags.
	pub fn auth_mode(&self) -> String {
		self.resolve(|o| {
			if is_public(o) {
				AUTH_MODE_PUBLIC.to_string()
			} else {
				AUTH_MODE_PASSWORD.to_string()
			}
		})
	}

	/// Trimmed, lower-cased admin login.
	pub fn admin_user(&self) -> String {
		self.resolve(|o| non_empty_or(&o.auth.admin_user, DEFAULT_ADMIN_USER).to_lowercase())
	}

	pub fn admin_password(&self) -> String {
		self.resolve(|o| o.auth.admin_password.expose().to_string())
	}

	pub fn cors_origin(&self) -> String {
		self.resolve(|o| o.cors.origin.clone())
	}

	pub fn cors_headers(&self) -> String {
		self.resolve(|o| o.cors.headers.clone())
	}

	pub fn cors_methods(&self) -> String {
		self.resolve(|o| o.cors.methods.clone())
	}
}
