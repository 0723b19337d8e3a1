// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Authentication section.

use serde::{Deserialize, Serialize};

use crate::secret::SecretString;

pub const AUTH_MODE_PUBLIC: &str = "public";
pub const AUTH_MODE_PASSWORD: &str = "password";
pub const DEFAULT_ADMIN_USER: &str = "admin";

/// Authentication settings (raw).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AuthOptions {
	pub public: bool,
	pub auth_mode: String,
	pub admin_user: String,
	pub admin_password: SecretString,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AuthOptionsLayer {
	pub public: Option<bool>,
	pub auth_mode: Option<String>,
	pub admin_user: Option<String>,
	pub admin_password: Option<SecretString>,
}

impl AuthOptionsLayer {
	pub fn merge(&mut self, other: Self) {
		if other.public.is_some() {
			self.public = other.public;
		}
		if other.auth_mode.is_some() {
			self.auth_mode = other.auth_mode;
		}
		if other.admin_user.is_some() {
			self.admin_user = other.admin_user;
		}
		if other.admin_password.is_some() {
			self.admin_password = other.admin_password;
		}
	}

	pub fn finalize(self) -> AuthOptions {
		AuthOptions {
			public: self.public.unwrap_or(false),
			auth_mode: self
				.auth_mode
				.unwrap_or_else(|| AUTH_MODE_PASSWORD.to_string()),
			admin_user: self
				.admin_user
				.unwrap_or_else(|| DEFAULT_ADMIN_USER.to_string()),
			admin_password: self.admin_password.unwrap_or_default(),
		}
	}
}
