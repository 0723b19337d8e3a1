// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Option sections, each with a raw record and a mergeable layer.

pub mod app;
pub mod auth;
pub mod cors;
pub mod features;
pub mod index;
pub mod limits;
pub mod paths;
pub mod site;

pub use app::{AppOptions, AppOptionsLayer};
pub use auth::{AuthOptions, AuthOptionsLayer, AUTH_MODE_PASSWORD, AUTH_MODE_PUBLIC};
pub use cors::{CorsOptions, CorsOptionsLayer};
pub use features::{FeaturesOptions, FeaturesOptionsLayer};
pub use index::{IndexOptions, IndexOptionsLayer};
pub use limits::{LimitsOptions, LimitsOptionsLayer, UNLIMITED};
pub use paths::{PathsOptions, PathsOptionsLayer};
pub use site::{SiteOptions, SiteOptionsLayer, DEFAULT_SITE_URL};
