// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Serializable views over a resolved [`Config`].

use std::path::PathBuf;

use prism_config::Config;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PathReport {
	pub storage: PathBuf,
	pub originals: PathBuf,
	pub import: PathBuf,
	pub cache: PathBuf,
	pub media_cache: PathBuf,
	pub thumb_cache: PathBuf,
	pub config: PathBuf,
	pub options_file: PathBuf,
	pub pid_filename: PathBuf,
	pub log_filename: PathBuf,
	pub assets: PathBuf,
	pub custom_assets: Option<PathBuf>,
	pub templates: PathBuf,
	pub custom_templates: Option<PathBuf>,
	pub static_files: PathBuf,
	pub build: PathBuf,
	pub img: PathBuf,
	pub nsfw_model: PathBuf,
	pub facenet_model: PathBuf,
	pub tensorflow_model: PathBuf,
	pub examples: PathBuf,
}

impl From<&Config> for PathReport {
	fn from(c: &Config) -> Self {
		Self {
			storage: c.storage_path(),
			originals: c.originals_path(),
			import: c.import_path(),
			cache: c.cache_path(),
			media_cache: c.media_cache_path(),
			thumb_cache: c.thumb_cache_path(),
			config: c.config_path(),
			options_file: c.options_file(),
			pid_filename: c.pid_filename(),
			log_filename: c.log_filename(),
			assets: c.assets_path(),
			custom_assets: c.custom_assets_path(),
			templates: c.templates_path(),
			custom_templates: c.custom_templates_path(),
			static_files: c.static_path(),
			build: c.build_path(),
			img: c.img_path(),
			nsfw_model: c.nsfw_model_path(),
			facenet_model: c.facenet_model_path(),
			tensorflow_model: c.tensorflow_model_path(),
			examples: c.examples_path(),
		}
	}
}

#[derive(Debug, Serialize)]
pub struct UrlReport {
	pub site_url: String,
	pub site_domain: String,
	pub site_title: String,
	pub site_preview: String,
	pub cdn_url: String,
	pub cdn_domain: String,
	pub cdn_video: bool,
	pub use_cdn: bool,
	pub static_uri: String,
	pub api_uri: String,
	pub content_uri: String,
	pub video_uri: String,
}

impl From<&Config> for UrlReport {
	fn from(c: &Config) -> Self {
		Self {
			site_url: c.site_url(),
			site_domain: c.site_domain(),
			site_title: c.site_title(),
			site_preview: c.site_preview(),
			cdn_url: c.cdn_url("/"),
			cdn_domain: c.cdn_domain(),
			cdn_video: c.cdn_video(),
			use_cdn: c.use_cdn(),
			static_uri: c.static_uri(),
			api_uri: c.api_uri(),
			content_uri: c.content_uri(),
			video_uri: c.video_uri(),
		}
	}
}

#[derive(Debug, Serialize)]
pub struct LimitReport {
	pub originals_limit: i64,
	pub originals_byte_limit: i64,
	pub resolution_limit: i64,
	pub wakeup_interval_secs: u64,
	pub auto_index_secs: Option<u64>,
	pub auto_import_secs: Option<u64>,
	pub index_workers: usize,
	pub index_schedule: String,
}

impl From<&Config> for LimitReport {
	fn from(c: &Config) -> Self {
		Self {
			originals_limit: c.originals_limit(),
			originals_byte_limit: c.originals_byte_limit(),
			resolution_limit: c.resolution_limit(),
			wakeup_interval_secs: c.wakeup_interval().as_secs(),
			auto_index_secs: c.auto_index().map(|d| d.as_secs()),
			auto_import_secs: c.auto_import().map(|d| d.as_secs()),
			index_workers: c.index_workers(),
			index_schedule: c.index_schedule(),
		}
	}
}

#[derive(Debug, Serialize)]
pub struct AccessReport {
	pub public: bool,
	pub auth: bool,
	pub auth_mode: String,
	pub admin_user: String,
	pub demo: bool,
	pub read_only: bool,
	pub cors_origin: String,
	pub cors_headers: String,
	pub cors_methods: String,
	pub geo_api: String,
}

impl From<&Config> for AccessReport {
	fn from(c: &Config) -> Self {
		Self {
			public: c.public(),
			auth: c.auth(),
			auth_mode: c.auth_mode(),
			admin_user: c.admin_user(),
			demo: c.demo(),
			read_only: c.read_only(),
			cors_origin: c.cors_origin(),
			cors_headers: c.cors_headers(),
			cors_methods: c.cors_methods(),
			geo_api: c.geo_api(),
		}
	}
}

/// Everything `prism show` prints. The admin password is left out.
#[derive(Debug, Serialize)]
pub struct Report {
	pub name: String,
	pub edition: String,
	pub version: String,
	pub version_checksum: String,
	pub serial: String,
	pub serial_checksum: String,
	pub prod: bool,
	pub debug: bool,
	pub paths: PathReport,
	pub urls: UrlReport,
	pub limits: LimitReport,
	pub access: AccessReport,
}

impl From<&Config> for Report {
	fn from(c: &Config) -> Self {
		Self {
			name: c.name(),
			edition: c.edition(),
			version: c.version(),
			version_checksum: format!("{:08x}", c.version_checksum()),
			serial: c.serial().to_string(),
			serial_checksum: c.serial_checksum(),
			prod: c.prod(),
			debug: c.debug(),
			paths: c.into(),
			urls: c.into(),
			limits: c.into(),
			access: c.into(),
		}
	}
}
