// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The raw options record consumed by [`Config`](crate::Config).

use serde::{Deserialize, Serialize};

use crate::sections::{
	AppOptions, AuthOptions, CorsOptions, FeaturesOptions, IndexOptions, LimitsOptions,
	PathsOptions, SiteOptions,
};

/// Raw settings as produced by merging all configuration sources.
///
/// `Options::default()` is the all-zero record: every string empty, every
/// number zero, every flag false. The resolver treats those zero values as
/// "unset" and applies its compiled defaults. Use
/// [`OptionsLayer::finalize`](crate::OptionsLayer::finalize) to get a record
/// with the defaults already filled in.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Options {
	pub app: AppOptions,
	pub paths: PathsOptions,
	pub site: SiteOptions,
	pub auth: AuthOptions,
	pub cors: CorsOptions,
	pub limits: LimitsOptions,
	pub index: IndexOptions,
	pub features: FeaturesOptions,
}
