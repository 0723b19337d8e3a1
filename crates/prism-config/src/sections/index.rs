// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Indexing schedule section.

use serde::{Deserialize, Serialize};

/// Cron schedule for background indexing; empty disables it.
pub const DEFAULT_INDEX_SCHEDULE: &str = "";

pub const DEFAULT_AUTO_INDEX_SECS: i64 = 300;
pub const DEFAULT_AUTO_IMPORT_SECS: i64 = 180;

/// Longest accepted auto-index/auto-import delay (one week).
pub const MAX_AUTO_DELAY_SECS: i64 = 7 * 24 * 60 * 60;

/// Indexing settings (raw). Delays are in seconds, negative disables.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct IndexOptions {
	pub workers: usize,
	pub schedule: String,
	pub auto_index: i64,
	pub auto_import: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct IndexOptionsLayer {
	pub workers: Option<usize>,
	pub schedule: Option<String>,
	pub auto_index: Option<i64>,
	pub auto_import: Option<i64>,
}

impl IndexOptionsLayer {
	pub fn merge(&mut self, other: Self) {
		if other.workers.is_some() {
			self.workers = other.workers;
		}
		if other.schedule.is_some() {
			self.schedule = other.schedule;
		}
		if other.auto_index.is_some() {
			self.auto_index = other.auto_index;
		}
		if other.auto_import.is_some() {
			self.auto_import = other.auto_import;
		}
	}

	pub fn finalize(self) -> IndexOptions {
		IndexOptions {
			workers: self.workers.unwrap_or(0),
			schedule: self
				.schedule
				.unwrap_or_else(|| DEFAULT_INDEX_SCHEDULE.to_string()),
			auto_index: self.auto_index.unwrap_or(DEFAULT_AUTO_INDEX_SECS),
			auto_import: self.auto_import.unwrap_or(DEFAULT_AUTO_IMPORT_SECS),
		}
	}
}
