// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Numeric limit normalization.

use std::time::Duration;

use crate::config::Config;
use crate::options::Options;
use crate::sections::index::{
	DEFAULT_AUTO_IMPORT_SECS, DEFAULT_AUTO_INDEX_SECS, DEFAULT_INDEX_SCHEDULE, MAX_AUTO_DELAY_SECS,
};
use crate::sections::limits::{
	DEFAULT_RESOLUTION_LIMIT, DEFAULT_WAKEUP_INTERVAL_SECS, MAX_RESOLUTION_LIMIT,
	MIN_WAKEUP_INTERVAL_SECS,
};
use crate::sections::UNLIMITED;

/// Bytes per megabyte for the originals size limit.
pub const MEGABYTE: i64 = 1 << 20;

fn normalize_resolution(raw: i64) -> i64 {
	match raw {
		r if r < 0 => r,
		0 => DEFAULT_RESOLUTION_LIMIT,
		r => r.min(MAX_RESOLUTION_LIMIT),
	}
}

fn normalize_originals(raw: i64) -> i64 {
	if raw < 0 {
		UNLIMITED
	} else {
		raw
	}
}

fn originals_bytes(count: i64) -> i64 {
	if count > 0 {
		count.saturating_mul(MEGABYTE)
	} else {
		UNLIMITED
	}
}

fn normalize_wakeup(raw: i64) -> Duration {
	let secs = match raw {
		r if r <= 0 => DEFAULT_WAKEUP_INTERVAL_SECS,
		r if r < MIN_WAKEUP_INTERVAL_SECS => MIN_WAKEUP_INTERVAL_SECS,
		r => r,
	};
	Duration::from_secs(secs.unsigned_abs())
}

fn normalize_delay(raw: i64, default: i64) -> Option<Duration> {
	let secs = match raw {
		r if r < 0 => return None,
		0 => default,
		r if r > MAX_AUTO_DELAY_SECS => default,
		r => r,
	};
	Some(Duration::from_secs(secs.unsigned_abs()))
}

fn available_cpus() -> usize {
	std::thread::available_parallelism()
		.map(|n| n.get())
		.unwrap_or(1)
}

fn index_workers(o: &Options, cpus: usize) -> usize {
	match o.index.workers {
		0 => (cpus / 2).max(1),
		n => n.min(cpus.max(1)),
	}
}

impl Config {
	/// Thumbnail resolution limit in megapixels; negative means unlimited.
	pub fn resolution_limit(&self) -> i64 {
		self.resolve(|o| normalize_resolution(o.limits.resolution_limit))
	}

	/// Maximum size of a single original in megabytes, or -1.
	pub fn originals_limit(&self) -> i64 {
		self.resolve(|o| normalize_originals(o.limits.originals_limit))
	}

	/// [`Config::originals_limit`] in bytes, or -1 when unlimited.
	pub fn originals_byte_limit(&self) -> i64 {
		self.resolve(|o| originals_bytes(normalize_originals(o.limits.originals_limit)))
	}

	/// Background worker wakeup interval, never below one minute.
	pub fn wakeup_interval(&self) -> Duration {
		self.resolve(|o| normalize_wakeup(o.limits.wakeup_interval))
	}

	/// Delay before indexing after an upload; `None` when disabled.
	pub fn auto_index(&self) -> Option<Duration> {
		self.resolve(|o| normalize_delay(o.index.auto_index, DEFAULT_AUTO_INDEX_SECS))
	}

	/// Delay before importing after an upload; `None` when disabled.
	pub fn auto_import(&self) -> Option<Duration> {
		self.resolve(|o| normalize_delay(o.index.auto_import, DEFAULT_AUTO_IMPORT_SECS))
	}

	pub fn index_workers(&self) -> usize {
		self.resolve(|o| index_workers(o, available_cpus()))
	}

	/// Cron expression for scheduled indexing, empty when disabled.
	pub fn index_schedule(&self) -> String {
		self.resolve(|o| {
			let schedule = o.index.schedule.trim();
			if schedule.is_empty() {
				DEFAULT_INDEX_SCHEDULE.to_string()
			} else {
				schedule.to_string()
			}
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::sections::{IndexOptions, LimitsOptions};
	use proptest::prelude::*;

	fn limits(limits: LimitsOptions) -> Config {
		Config::new(Options {
			limits,
			..Default::default()
		})
	}

	fn index(index: IndexOptions) -> Config {
		Config::new(Options {
			index,
			..Default::default()
		})
	}

	#[test]
	fn test_resolution_limit() {
		let at = |raw| {
			limits(LimitsOptions {
				resolution_limit: raw,
				..Default::default()
			})
			.resolution_limit()
		};
		assert_eq!(at(0), 150);
		assert_eq!(at(-1), -1);
		assert_eq!(at(900), 900);
		assert_eq!(at(901), 900);
		assert_eq!(at(50), 50);
	}

	#[test]
	fn test_resolution_cap_ignores_sponsor() {
		let c = Config::new(Options {
			app: crate::sections::AppOptions {
				sponsor: true,
				..Default::default()
			},
			limits: LimitsOptions {
				resolution_limit: 2000,
				..Default::default()
			},
			..Default::default()
		});
		assert_eq!(c.resolution_limit(), 900);
	}

	#[test]
	fn test_originals_limits() {
		let c = limits(LimitsOptions {
			originals_limit: 800,
			..Default::default()
		});
		assert_eq!(c.originals_limit(), 800);
		assert_eq!(c.originals_byte_limit(), 838_860_800);

		let c = limits(LimitsOptions {
			originals_limit: -5,
			..Default::default()
		});
		assert_eq!(c.originals_limit(), -1);
		assert_eq!(c.originals_byte_limit(), -1);

		let c = limits(LimitsOptions::default());
		assert_eq!(c.originals_limit(), 0);
		assert_eq!(c.originals_byte_limit(), -1);
	}

	#[test]
	fn test_wakeup_interval() {
		let at = |raw| {
			limits(LimitsOptions {
				wakeup_interval: raw,
				..Default::default()
			})
			.wakeup_interval()
		};
		assert_eq!(at(0), Duration::from_secs(15 * 60));
		assert_eq!(at(45), Duration::from_secs(60));
		assert_eq!(at(150), Duration::from_secs(150));
		assert_eq!(at(-10), Duration::from_secs(15 * 60));
		assert_eq!(at(86_400 * 30), Duration::from_secs(86_400 * 30));
	}

	#[test]
	fn test_auto_index_and_import() {
		let c = index(IndexOptions::default());
		assert_eq!(c.auto_index(), Some(Duration::from_secs(300)));
		assert_eq!(c.auto_import(), Some(Duration::from_secs(180)));

		let c = index(IndexOptions {
			auto_index: -1,
			auto_import: 60,
			..Default::default()
		});
		assert_eq!(c.auto_index(), None);
		assert_eq!(c.auto_import(), Some(Duration::from_secs(60)));

		let c = index(IndexOptions {
			auto_index: MAX_AUTO_DELAY_SECS + 1,
			..Default::default()
		});
		assert_eq!(c.auto_index(), Some(Duration::from_secs(300)));
	}

	#[test]
	fn test_index_workers() {
		let with = |workers| Options {
			index: IndexOptions {
				workers,
				..Default::default()
			},
			..Default::default()
		};
		assert_eq!(index_workers(&with(0), 8), 4);
		assert_eq!(index_workers(&with(0), 1), 1);
		assert_eq!(index_workers(&with(3), 8), 3);
		assert_eq!(index_workers(&with(32), 8), 8);
		assert!(index(IndexOptions::default()).index_workers() >= 1);
	}

	#[test]
	fn test_index_schedule() {
		assert_eq!(index(IndexOptions::default()).index_schedule(), "");
		let c = index(IndexOptions {
			schedule: "0 */3 * * *".to_string(),
			..Default::default()
		});
		assert_eq!(c.index_schedule(), "0 */3 * * *");
	}

	#[test]
	fn test_limits_zero_without_options() {
		let c = Config::empty();
		assert_eq!(c.resolution_limit(), 0);
		assert_eq!(c.originals_limit(), 0);
		assert_eq!(c.originals_byte_limit(), 0);
		assert_eq!(c.wakeup_interval(), Duration::ZERO);
		assert_eq!(c.auto_index(), None);
		assert_eq!(c.index_workers(), 0);
	}

	proptest! {
		#[test]
		fn resolution_within_cap_is_unchanged(raw in 1i64..=MAX_RESOLUTION_LIMIT) {
			prop_assert_eq!(normalize_resolution(raw), raw);
		}

		#[test]
		fn resolution_above_cap_is_clamped(raw in (MAX_RESOLUTION_LIMIT + 1)..i64::MAX) {
			prop_assert_eq!(normalize_resolution(raw), MAX_RESOLUTION_LIMIT);
		}

		#[test]
		fn negative_resolution_is_preserved(raw in i64::MIN..0) {
			prop_assert_eq!(normalize_resolution(raw), raw);
		}

		#[test]
		fn byte_limit_scales_positive_counts(count in 1i64..1_000_000) {
			prop_assert_eq!(originals_bytes(count), count * 1_048_576);
		}

		#[test]
		fn byte_limit_unlimited_for_non_positive(count in i64::MIN..=0) {
			prop_assert_eq!(originals_bytes(count), -1);
		}

		#[test]
		fn short_wakeup_clamps_to_minute(raw in 1i64..60) {
			prop_assert_eq!(normalize_wakeup(raw), Duration::from_secs(60));
		}

		#[test]
		fn long_wakeup_is_kept(raw in 60i64..10_000_000) {
			prop_assert_eq!(normalize_wakeup(raw), Duration::from_secs(raw as u64));
		}
	}
}
