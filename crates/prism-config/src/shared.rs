// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Hot-reloadable resolver handle.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::info;

use crate::config::Config;
use crate::options::Options;

/// A thread-safe handle to the current [`Config`] snapshot.
///
/// Readers take an `Arc` to a complete snapshot and resolve against it for as
/// long as they like. Writers publish whole new [`Options`]; a snapshot is
/// never modified after it has been handed out.
#[derive(Clone)]
pub struct SharedConfig {
	inner: Arc<SharedConfigInner>,
}

struct SharedConfigInner {
	current: RwLock<Arc<Config>>,
}

impl SharedConfig {
	pub fn new(config: Config) -> Self {
		Self {
			inner: Arc::new(SharedConfigInner {
				current: RwLock::new(Arc::new(config)),
			}),
		}
	}

	pub fn from_options(options: Options) -> Self {
		Self::new(Config::new(options))
	}

	/// The current snapshot.
	pub fn load(&self) -> Arc<Config> {
		self.inner.current.read().clone()
	}

	/// Replace the options. The installation serial is carried over.
	pub fn publish(&self, options: Options) {
		let serial = self.swap(Some(Arc::new(options)));
		info!(serial = %serial, "published new options snapshot");
	}

	/// Drop the options; subsequent snapshots resolve to zero values.
	pub fn clear(&self) {
		let serial = self.swap(None);
		info!(serial = %serial, "cleared options snapshot");
	}

	/// Install a new snapshot and return its serial. The write lock is held
	/// only for the swap itself.
	fn swap(&self, options: Option<Arc<Options>>) -> String {
		let mut current = self.inner.current.write();
		let serial = current.serial().to_string();
		*current = Arc::new(Config::with_serial(options, serial.clone()));
		serial
	}
}

impl Default for SharedConfig {
	fn default() -> Self {
		Self::new(Config::empty())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::sections::{AuthOptions, SiteOptions};
	use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
	use std::thread;

	fn site(url: &str) -> Options {
		Options {
			site: SiteOptions {
				url: url.to_string(),
				..Default::default()
			},
			..Default::default()
		}
	}

	#[test]
	fn test_publish_swaps_snapshot() {
		let shared = SharedConfig::from_options(site("https://a.example.com"));
		let before = shared.load();

		shared.publish(site("https://b.example.com"));
		let after = shared.load();

		assert_eq!(before.site_url(), "https://a.example.com/");
		assert_eq!(after.site_url(), "https://b.example.com/");
	}

	#[test]
	fn test_serial_survives_publish_and_clear() {
		let shared = SharedConfig::from_options(Options::default());
		let serial = shared.load().serial().to_string();

		shared.publish(site("https://b.example.com"));
		assert_eq!(shared.load().serial(), serial);

		shared.clear();
		let cleared = shared.load();
		assert_eq!(cleared.serial(), serial);
		assert!(!cleared.has_options());
		assert_eq!(cleared.site_url(), "");
	}

	/// Records whether the snapshot lock was free for reading whenever an
	/// event was emitted.
	struct LockWatcher {
		shared: SharedConfig,
		events: AtomicUsize,
		blocked: AtomicBool,
	}

	impl tracing::Subscriber for LockWatcher {
		fn enabled(&self, _: &tracing::Metadata<'_>) -> bool {
			true
		}

		fn new_span(&self, _: &tracing::span::Attributes<'_>) -> tracing::span::Id {
			tracing::span::Id::from_u64(1)
		}

		fn record(&self, _: &tracing::span::Id, _: &tracing::span::Record<'_>) {}

		fn record_follows_from(&self, _: &tracing::span::Id, _: &tracing::span::Id) {}

		fn event(&self, _: &tracing::Event<'_>) {
			self.events.fetch_add(1, Ordering::SeqCst);
			if self.shared.inner.current.try_read().is_none() {
				self.blocked.store(true, Ordering::SeqCst);
			}
		}

		fn enter(&self, _: &tracing::span::Id) {}

		fn exit(&self, _: &tracing::span::Id) {}
	}

	#[test]
	fn test_publish_and_clear_log_outside_the_lock() {
		let shared = SharedConfig::from_options(Options::default());
		let watcher = Arc::new(LockWatcher {
			shared: shared.clone(),
			events: AtomicUsize::new(0),
			blocked: AtomicBool::new(false),
		});

		tracing::subscriber::with_default(watcher.clone(), || {
			shared.publish(site("https://b.example.com"));
			shared.clear();
		});

		assert_eq!(watcher.events.load(Ordering::SeqCst), 2);
		assert!(!watcher.blocked.load(Ordering::SeqCst));
	}

	#[test]
	fn test_readers_see_complete_snapshots() {
		let public = Options {
			auth: AuthOptions {
				public: true,
				..Default::default()
			},
			..site("https://public.example.com")
		};
		let private = site("https://private.example.com");
		let shared = SharedConfig::from_options(private.clone());

		let writer = {
			let shared = shared.clone();
			thread::spawn(move || {
				for i in 0..500 {
					if i % 2 == 0 {
						shared.publish(public.clone());
					} else {
						shared.publish(private.clone());
					}
				}
			})
		};

		let readers: Vec<_> = (0..4)
			.map(|_| {
				let shared = shared.clone();
				thread::spawn(move || {
					for _ in 0..500 {
						let snapshot = shared.load();
						let expected = if snapshot.public() {
							"https://public.example.com/"
						} else {
							"https://private.example.com/"
						};
						assert_eq!(snapshot.site_url(), expected);
					}
				})
			})
			.collect();

		writer.join().unwrap();
		for reader in readers {
			reader.join().unwrap();
		}
	}
}
