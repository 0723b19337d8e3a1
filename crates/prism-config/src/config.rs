// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The resolver: derived, read-only views over an [`Options`] snapshot.
//!
//! Every getter follows one of two fallback paths:
//!
//! - options absent: the type's zero value (`""`, `0`, `false`, empty path,
//!   `None`), never a compiled default;
//! - options present, field unset (zero): the compiled default for that field.
//!
//! The first path lives in [`Config::resolve`]; the second is handled by each
//! getter.

use std::sync::Arc;

use rand::Rng;

use crate::checksum::{hex_checksum, ieee_checksum};
use crate::options::Options;
use crate::sections::app::{DEFAULT_ABOUT, DEFAULT_EDITION, DEFAULT_NAME, DEFAULT_VERSION};

const SERIAL_PREFIX: char = 'z';
const SERIAL_LEN: usize = 16;
const SERIAL_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Resolved configuration over an optional options snapshot.
///
/// Cheap to clone; the options are shared behind an [`Arc`] and never mutated.
/// Use [`SharedConfig`](crate::SharedConfig) to publish new options at runtime.
#[derive(Debug, Clone)]
pub struct Config {
	options: Option<Arc<Options>>,
	serial: String,
}

impl Config {
	pub fn new(options: Options) -> Self {
		Self::with_serial(Some(Arc::new(options)), generate_serial())
	}

	/// A resolver without options; every derived getter returns its zero value.
	pub fn empty() -> Self {
		Self::with_serial(None, generate_serial())
	}

	pub fn with_serial(options: Option<Arc<Options>>, serial: impl Into<String>) -> Self {
		Self {
			options,
			serial: serial.into(),
		}
	}

	/// Evaluate `f` against the options, or return the zero value of `T`.
	pub(crate) fn resolve<T, F>(&self, f: F) -> T
	where
		T: Default,
		F: FnOnce(&Options) -> T,
	{
		self.options.as_deref().map(f).unwrap_or_default()
	}

	pub fn has_options(&self) -> bool {
		self.options.is_some()
	}

	/// The underlying snapshot, if any.
	pub fn shared_options(&self) -> Option<Arc<Options>> {
		self.options.clone()
	}

	/// A copy of the raw options, or the all-zero record when absent.
	pub fn options(&self) -> Options {
		self.resolve(Options::clone)
	}

	pub fn name(&self) -> String {
		self.resolve(|o| app_name(o).to_string())
	}

	pub fn about(&self) -> String {
		self.resolve(|o| non_empty_or(&o.app.about, DEFAULT_ABOUT).to_string())
	}

	pub fn edition(&self) -> String {
		self.resolve(|o| non_empty_or(&o.app.edition, DEFAULT_EDITION).to_string())
	}

	pub fn version(&self) -> String {
		self.resolve(|o| app_version(o).to_string())
	}

	/// CRC-32 (IEEE) of [`Config::version`], stable per released version.
	pub fn version_checksum(&self) -> u32 {
		self.resolve(|o| ieee_checksum(app_version(o)))
	}

	pub fn copyright(&self) -> String {
		self.resolve(|o| o.app.copyright.clone())
	}

	/// Installation serial, generated once per resolver and kept across
	/// option swaps.
	pub fn serial(&self) -> &str {
		&self.serial
	}

	pub fn serial_checksum(&self) -> String {
		hex_checksum(&self.serial)
	}

	pub fn prod(&self) -> bool {
		self.resolve(|o| o.app.prod)
	}

	/// Debug logging; production mode always wins.
	pub fn debug(&self) -> bool {
		self.resolve(|o| o.app.debug && !o.app.prod)
	}

	pub fn trace(&self) -> bool {
		self.resolve(|o| o.app.trace && !o.app.prod)
	}

	pub fn read_only(&self) -> bool {
		self.resolve(|o| o.app.read_only)
	}

	pub fn demo(&self) -> bool {
		self.resolve(|o| o.app.demo)
	}

	pub fn sponsor(&self) -> bool {
		self.resolve(|o| o.app.sponsor)
	}

	pub fn detach_server(&self) -> bool {
		self.resolve(|o| o.app.detach_server)
	}

	pub fn detect_nsfw(&self) -> bool {
		self.resolve(|o| o.features.detect_nsfw)
	}

	pub fn disable_tensorflow(&self) -> bool {
		self.resolve(|o| o.features.disable_tensorflow)
	}
}

impl Default for Config {
	fn default() -> Self {
		Self::empty()
	}
}

pub(crate) fn non_empty_or<'a>(value: &'a str, default: &'a str) -> &'a str {
	let trimmed = value.trim();
	if trimmed.is_empty() {
		default
	} else {
		trimmed
	}
}

pub(crate) fn app_name(o: &Options) -> &str {
	non_empty_or(&o.app.name, DEFAULT_NAME)
}

fn app_version(o: &Options) -> &str {
	non_empty_or(&o.app.version, DEFAULT_VERSION)
}

fn generate_serial() -> String {
	let mut rng = rand::thread_rng();
	let mut serial = String::with_capacity(SERIAL_LEN);
	serial.push(SERIAL_PREFIX);
	for _ in 1..SERIAL_LEN {
		let idx = rng.gen_range(0..SERIAL_CHARSET.len());
		serial.push(SERIAL_CHARSET[idx] as char);
	}
	serial
}
