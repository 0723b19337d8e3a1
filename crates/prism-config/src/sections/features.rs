// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Feature toggles section.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FeaturesOptions {
	pub detect_nsfw: bool,
	pub disable_places: bool,
	pub disable_tensorflow: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FeaturesOptionsLayer {
	pub detect_nsfw: Option<bool>,
	pub disable_places: Option<bool>,
	pub disable_tensorflow: Option<bool>,
}

impl FeaturesOptionsLayer {
	pub fn merge(&mut self, other: Self) {
		if other.detect_nsfw.is_some() {
			self.detect_nsfw = other.detect_nsfw;
		}
		if other.disable_places.is_some() {
			self.disable_places = other.disable_places;
		}
		if other.disable_tensorflow.is_some() {
			self.disable_tensorflow = other.disable_tensorflow;
		}
	}

	pub fn finalize(self) -> FeaturesOptions {
		FeaturesOptions {
			detect_nsfw: self.detect_nsfw.unwrap_or(true),
			disable_places: self.disable_places.unwrap_or(false),
			disable_tensorflow: self.disable_tensorflow.unwrap_or(false),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_layer_finalize_defaults() {
		let features = FeaturesOptionsLayer::default().finalize();
		assert!(features.detect_nsfw);
		assert!(!features.disable_places);
		assert!(!features.disable_tensorflow);
	}
}
