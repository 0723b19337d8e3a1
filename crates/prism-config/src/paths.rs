// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Filesystem path derivation.
//!
//! A handful of roots (storage, originals, import, cache, assets) are made
//! absolute at access time; everything else hangs off them at fixed sub-paths.

use std::path::{Component, Path, PathBuf};

use crate::config::{app_name, Config};
use crate::options::Options;
use crate::sections::paths::{DEFAULT_ASSETS_PATH, DEFAULT_STORAGE_PATH};

pub const ORIGINALS_DIR: &str = "originals";
pub const IMPORT_DIR: &str = "import";
pub const CACHE_DIR: &str = "cache";
pub const CONFIG_DIR: &str = "config";
pub const MEDIA_CACHE_DIR: &str = "media";
pub const THUMB_CACHE_DIR: &str = "thumbnails";
pub const OPTIONS_FILE: &str = "options.toml";

/// Number of single-character directory levels used for cache sharding.
pub const SHARD_DEPTH: usize = 3;

/// Nest `id` below `root` using up to its first [`SHARD_DEPTH`] characters,
/// one directory level per character.
///
/// `shard_path("/cache", "0b57b50f")` is `/cache/0/b/5`. An empty id returns
/// `root` unchanged. Separators and dots produce no level, so the result
/// always stays below `root`.
pub fn shard_path(root: &Path, id: &str) -> PathBuf {
	let mut path = root.to_path_buf();
	let mut buf = [0u8; 4];
	for c in id.chars().take(SHARD_DEPTH) {
		if is_shard_level(c) {
			path.push(c.encode_utf8(&mut buf));
		}
	}
	path
}

fn is_shard_level(c: char) -> bool {
	!(std::path::is_separator(c) || c == '/' || c == '\\' || c == '.')
}

/// Make `path` absolute against the working directory and drop `.`/`..`
/// components lexically. A leading `~/` expands to the home directory.
pub(crate) fn absolute(path: &str) -> PathBuf {
	let path = path.trim();
	if path.is_empty() {
		return PathBuf::new();
	}

	let expanded = match (path.strip_prefix("~/"), dirs::home_dir()) {
		(Some(rest), Some(home)) => home.join(rest),
		_ => PathBuf::from(path),
	};

	let joined = if expanded.is_absolute() {
		expanded
	} else {
		match std::env::current_dir() {
			Ok(cwd) => cwd.join(expanded),
			Err(_) => expanded,
		}
	};

	normalize(&joined)
}

fn normalize(path: &Path) -> PathBuf {
	let mut out = PathBuf::new();
	for component in path.components() {
		match component {
			Component::CurDir => {}
			Component::ParentDir => {
				out.pop();
			}
			other => out.push(other.as_os_str()),
		}
	}
	out
}

fn root_or(raw: &str, fallback: impl FnOnce() -> PathBuf) -> PathBuf {
	if raw.trim().is_empty() {
		fallback()
	} else {
		absolute(raw)
	}
}

fn storage_root(o: &Options) -> PathBuf {
	root_or(&o.paths.storage_path, || absolute(DEFAULT_STORAGE_PATH))
}

fn cache_root(o: &Options) -> PathBuf {
	root_or(&o.paths.cache_path, || storage_root(o).join(CACHE_DIR))
}

fn config_root(o: &Options) -> PathBuf {
	root_or(&o.paths.config_path, || storage_root(o).join(CONFIG_DIR))
}

fn assets_root(o: &Options) -> PathBuf {
	root_or(&o.paths.assets_path, || absolute(DEFAULT_ASSETS_PATH))
}

fn custom_assets_root(o: &Options) -> Option<PathBuf> {
	let raw = o.paths.custom_assets_path.trim();
	(!raw.is_empty()).then(|| absolute(raw))
}

fn static_root(o: &Options) -> PathBuf {
	assets_root(o).join("static")
}

/// File stem for the PID and log files, e.g. `photoprism`.
fn file_stem(o: &Options) -> String {
	app_name(o)
		.chars()
		.filter(|c| c.is_ascii_alphanumeric())
		.collect::<String>()
		.to_ascii_lowercase()
}

impl Config {
	pub fn storage_path(&self) -> PathBuf {
		self.resolve(storage_root)
	}

	pub fn originals_path(&self) -> PathBuf {
		self.resolve(|o| root_or(&o.paths.originals_path, || storage_root(o).join(ORIGINALS_DIR)))
	}

	pub fn import_path(&self) -> PathBuf {
		self.resolve(|o| root_or(&o.paths.import_path, || storage_root(o).join(IMPORT_DIR)))
	}

	pub fn cache_path(&self) -> PathBuf {
		self.resolve(cache_root)
	}

	pub fn media_cache_path(&self) -> PathBuf {
		self.resolve(|o| cache_root(o).join(MEDIA_CACHE_DIR))
	}

	/// Sharded cache directory for a media file hash.
	pub fn media_file_cache_path(&self, hash: &str) -> PathBuf {
		self.resolve(|o| shard_path(&cache_root(o).join(MEDIA_CACHE_DIR), hash))
	}

	pub fn thumb_cache_path(&self) -> PathBuf {
		self.resolve(|o| cache_root(o).join(THUMB_CACHE_DIR))
	}

	pub fn config_path(&self) -> PathBuf {
		self.resolve(config_root)
	}

	/// Settings file inside the config directory.
	pub fn options_file(&self) -> PathBuf {
		self.resolve(|o| config_root(o).join(OPTIONS_FILE))
	}

	pub fn pid_filename(&self) -> PathBuf {
		self.resolve(|o| {
			root_or(&o.paths.pid_filename, || {
				storage_root(o).join(format!("{}.pid", file_stem(o)))
			})
		})
	}

	pub fn log_filename(&self) -> PathBuf {
		self.resolve(|o| {
			root_or(&o.paths.log_filename, || {
				storage_root(o).join(format!("{}.log", file_stem(o)))
			})
		})
	}

	pub fn assets_path(&self) -> PathBuf {
		self.resolve(assets_root)
	}

	pub fn custom_assets_path(&self) -> Option<PathBuf> {
		self.resolve(custom_assets_root)
	}

	pub fn nsfw_model_path(&self) -> PathBuf {
		self.resolve(|o| assets_root(o).join("nsfw"))
	}

	pub fn facenet_model_path(&self) -> PathBuf {
		self.resolve(|o| assets_root(o).join("facenet"))
	}

	pub fn tensorflow_model_path(&self) -> PathBuf {
		self.resolve(|o| assets_root(o).join("nasnet"))
	}

	pub fn examples_path(&self) -> PathBuf {
		self.resolve(|o| assets_root(o).join("examples"))
	}

	pub fn templates_path(&self) -> PathBuf {
		self.resolve(|o| assets_root(o).join("templates"))
	}

	/// Templates directory below the custom assets, if those are configured.
	pub fn custom_templates_path(&self) -> Option<PathBuf> {
		self.resolve(|o| custom_assets_root(o).map(|p| p.join("templates")))
	}

	pub fn static_path(&self) -> PathBuf {
		self.resolve(static_root)
	}

	pub fn static_file(&self, name: &str) -> PathBuf {
		self.resolve(|o| static_root(o).join(name.trim_start_matches('/')))
	}

	pub fn build_path(&self) -> PathBuf {
		self.resolve(|o| static_root(o).join("build"))
	}

	pub fn img_path(&self) -> PathBuf {
		self.resolve(|o| static_root(o).join("img"))
	}
}
