// Copyright (c) 2025 Swift Navigation Inc.
// Contact: Swift Navigation <dev@swiftnav.com>
//
// This source is subject to the license found in the file 'LICENSE' which must
// be be distributed together with this source. All other rights reserved.
//
// THIS CODE AND INFORMATION IS PROVIDED "AS IS" WITHOUT WARRANTY OF ANY KIND,
// EITHER EXPRESSED OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE IMPLIED
// WARRANTIES OF MERCHANTABILITY AND/OR FITNESS FOR A PARTICULAR PURPOSE.
//! TOML-backed configuration
//!
//! [`NavConfig`] is parsed once, from a file path or an in-memory string, and
//! then passed around by shared reference. There is no mutable global
//! configuration instance: every solver or station type that needs
//! configuration takes a `&NavConfig` (or one of its sub-sections) at
//! construction time.

use std::path::Path;

use serde::Deserialize;

use crate::filter::{FilterMask, ParseFilterError};

/// The `[meta]` section: project bookkeeping, not consumed by the solvers
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MetaConfig {
    pub task: Option<String>,
    pub project: Option<String>,
    pub time: Option<String>,
    pub executor: Option<String>,
}

/// The `[io]` section: input/output paths and reference position styles
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IoConfig {
    pub rover_nav_path: Option<String>,
    pub base_nav_path: Option<String>,
    pub rover_obs_path: Option<String>,
    pub base_obs_path: Option<String>,
    pub out_path: Option<String>,
    pub ref_path: Option<String>,
    /// 0 = XYZ, 1 = BLH, 2 = ENU
    pub rover_ref_pos_style: Option<u8>,
    pub rover_ref_pos: Option<[f64; 3]>,
    /// 0 = XYZ, 1 = BLH, 2 = ENU
    pub base_ref_pos_style: Option<u8>,
    pub base_ref_pos: Option<[f64; 3]>,
}

/// Troposphere model selection
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TropModel {
    #[default]
    None,
    Saastamoinen,
}

/// Ionosphere model selection
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IonoModel {
    #[default]
    None,
    Klobuchar,
    Stec,
}

/// Positioning mode selection
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolutionMode {
    #[default]
    Spp,
    Rtk,
}

/// The `[model]` section: which correction models and solution mode to use
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelConfig {
    #[serde(default)]
    pub enabled_code: std::collections::HashMap<String, Vec<String>>,
    #[serde(default)]
    pub trop: TropModel,
    #[serde(default)]
    pub iono: IonoModel,
    #[serde(default)]
    pub solution_mode: SolutionMode,
}

/// Errors raised while loading or parsing a [`NavConfig`]
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("configuration file not found: {0}")]
    ConfigMissing(String),
    #[error("failed to parse configuration: {0}")]
    ConfigInvalid(#[from] toml::de::Error),
    #[error("failed to parse [filter] mask: {0}")]
    FilterInvalid(#[from] ParseFilterError),
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RawConfig {
    #[serde(default)]
    meta: MetaConfig,
    #[serde(default)]
    io: IoConfig,
    #[serde(default)]
    model: ModelConfig,
    #[serde(default)]
    filter: Vec<String>,
}

/// A fully parsed, immutable configuration
#[derive(Debug, Clone, Default)]
pub struct NavConfig {
    pub meta: MetaConfig,
    pub io: IoConfig,
    pub model: ModelConfig,
    pub filter: FilterMask,
}

impl NavConfig {
    /// Reads and parses a configuration file in one call
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<NavConfig, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::ConfigMissing(path.display().to_string()))?;
        Self::from_str(&contents)
    }

    /// Parses a configuration from an in-memory TOML string
    pub fn from_str(s: &str) -> Result<NavConfig, ConfigError> {
        let raw: RawConfig = toml::from_str(s)?;
        let filter = FilterMask::parse(&raw.filter)?;
        Ok(NavConfig {
            meta: raw.meta,
            io: raw.io,
            model: raw.model,
            filter,
        })
    }
}
