// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Redacted string wrapper for credentials carried in [`Options`](crate::Options).
//!
//! The admin password travels through every configuration source (file,
//! environment, flags) and ends up inside a record that is routinely logged
//! and dumped. [`SecretString`] keeps the value out of that output:
//!
//! - `Debug` and `Display` print [`REDACTED`]
//! - `Serialize` writes [`REDACTED`], so config dumps never leak it
//! - memory is zeroized on drop
//! - the value is only reachable through [`SecretString::expose`]

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::Zeroize;

/// The redaction placeholder used in all output.
pub const REDACTED: &str = "[REDACTED]";

#[derive(Default, Zeroize)]
#[zeroize(drop)]
pub struct SecretString {
	inner: String,
}

impl SecretString {
	pub fn new(inner: impl Into<String>) -> Self {
		Self {
			inner: inner.into(),
		}
	}

	/// Explicitly access the inner value.
	pub fn expose(&self) -> &str {
		&self.inner
	}

	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}
}

impl Clone for SecretString {
	fn clone(&self) -> Self {
		Self {
			inner: self.inner.clone(),
		}
	}
}

impl fmt::Debug for SecretString {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("SecretString").field(&REDACTED).finish()
	}
}

impl fmt::Display for SecretString {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(REDACTED)
	}
}

impl PartialEq for SecretString {
	fn eq(&self, other: &Self) -> bool {
		self.inner == other.inner
	}
}

impl Eq for SecretString {}

impl From<String> for SecretString {
	fn from(inner: String) -> Self {
		Self { inner }
	}
}

impl From<&str> for SecretString {
	fn from(inner: &str) -> Self {
		Self::new(inner)
	}
}

impl Serialize for SecretString {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str(REDACTED)
	}
}

impl<'de> Deserialize<'de> for SecretString {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		String::deserialize(deserializer).map(SecretString::from)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn debug_is_redacted() {
		let secret = SecretString::new("photoprism");
		let output = format!("{secret:?}");
		assert!(!output.contains("photoprism"));
		assert_eq!(output, "SecretString(\"[REDACTED]\")");
	}

	#[test]
	fn display_is_redacted() {
		let secret = SecretString::new("photoprism");
		assert_eq!(secret.to_string(), REDACTED);
	}

	#[test]
	fn expose_returns_inner_value() {
		let secret = SecretString::new("photoprism");
		assert_eq!(secret.expose(), "photoprism");
	}

	#[test]
	fn serialize_is_redacted() {
		let secret = SecretString::new("photoprism");
		let json = serde_json::to_string(&secret).unwrap();
		assert_eq!(json, "\"[REDACTED]\"");
	}

	#[test]
	fn deserialize_keeps_value() {
		let secret: SecretString = serde_json::from_str("\"insecure\"").unwrap();
		assert_eq!(secret.expose(), "insecure");
	}

	#[test]
	fn default_is_empty() {
		assert!(SecretString::default().is_empty());
	}

	proptest! {
		#[test]
		fn debug_never_leaks(inner in "[a-zA-Z0-9]{12,32}") {
			let secret = SecretString::new(inner.clone());
			let debug = format!("{:?}", secret);
			let display = secret.to_string();
			prop_assert_eq!(debug.as_str(), "SecretString(\"[REDACTED]\")");
			prop_assert_eq!(display.as_str(), REDACTED);
			prop_assert_eq!(secret.expose(), inner.as_str());
		}
	}
}
