// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Numeric limits section.

use serde::{Deserialize, Serialize};

/// Sentinel meaning "no limit".
pub const UNLIMITED: i64 = -1;

/// Resolution limit in megapixels applied when none is configured.
pub const DEFAULT_RESOLUTION_LIMIT: i64 = 150;

/// Upper bound for the resolution limit in megapixels.
pub const MAX_RESOLUTION_LIMIT: i64 = 900;

pub const DEFAULT_WAKEUP_INTERVAL_SECS: i64 = 15 * 60;
pub const MIN_WAKEUP_INTERVAL_SECS: i64 = 60;

/// Numeric limits (raw).
///
/// `originals_limit` is in megabytes, `resolution_limit` in megapixels and
/// `wakeup_interval` in seconds.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LimitsOptions {
	pub originals_limit: i64,
	pub resolution_limit: i64,
	pub wakeup_interval: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LimitsOptionsLayer {
	pub originals_limit: Option<i64>,
	pub resolution_limit: Option<i64>,
	pub wakeup_interval: Option<i64>,
}

impl LimitsOptionsLayer {
	pub fn merge(&mut self, other: Self) {
		if other.originals_limit.is_some() {
			self.originals_limit = other.originals_limit;
		}
		if other.resolution_limit.is_some() {
			self.resolution_limit = other.resolution_limit;
		}
		if other.wakeup_interval.is_some() {
			self.wakeup_interval = other.wakeup_interval;
		}
	}

	pub fn finalize(self) -> LimitsOptions {
		LimitsOptions {
			originals_limit: self.originals_limit.unwrap_or(UNLIMITED),
			resolution_limit: self.resolution_limit.unwrap_or(DEFAULT_RESOLUTION_LIMIT),
			wakeup_interval: self
				.wakeup_interval
				.unwrap_or(DEFAULT_WAKEUP_INTERVAL_SECS),
		}
	}
}
