// Copyright (c) 2025 Swift Navigation Inc.
// Contact: Swift Navigation <dev@swiftnav.com>
//
// This source is subject to the license found in the file 'LICENSE' which must
// be be distributed together with this source. All other rights reserved.
//
// THIS CODE AND INFORMATION IS PROVIDED "AS IS" WITHOUT WARRANTY OF ANY KIND,
// EITHER EXPRESSED OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE IMPLIED
// WARRANTIES OF MERCHANTABILITY AND/OR FITNESS FOR A PARTICULAR PURPOSE.
//! Crate-wide error aggregation
//!
//! Each module defines its own narrow error type so a caller that only
//! touches, say, [`crate::filter`] never has to match on ephemeris or
//! configuration failure modes. [`NavError`] exists for callers, like a
//! top-level CLI or station runner, that want one type to propagate with `?`
//! across module boundaries.

use crate::{
    atmosphere::IonoDecodeFailure,
    config::ConfigError,
    ephsolver::EphSolverError,
    filter::ParseFilterError,
    lambda::LambdaError,
    rtk::RtkError,
    signal::{InvalidCodeInt, InvalidConstellationChar, InvalidConstellationInt, InvalidGnssSignal, InvalidSatellite, ParseSvError},
    spp::SppError,
    time::InvalidGpsTime,
};
#[cfg(feature = "chrono")]
use crate::time::ParseEpochError;

/// Umbrella error type for code that crosses several of this crate's modules
#[derive(thiserror::Error, Debug)]
pub enum NavError {
    #[error(transparent)]
    InvalidGpsTime(#[from] InvalidGpsTime),
    #[cfg(feature = "chrono")]
    #[error(transparent)]
    ParseEpoch(#[from] ParseEpochError),
    #[error(transparent)]
    InvalidConstellationInt(#[from] InvalidConstellationInt),
    #[error(transparent)]
    InvalidConstellationChar(#[from] InvalidConstellationChar),
    #[error(transparent)]
    InvalidCodeInt(#[from] InvalidCodeInt),
    #[error(transparent)]
    InvalidSatellite(#[from] InvalidSatellite),
    #[error(transparent)]
    InvalidGnssSignal(#[from] InvalidGnssSignal),
    #[error(transparent)]
    ParseSv(#[from] ParseSvError),
    #[error(transparent)]
    EphSolver(#[from] EphSolverError),
    #[error(transparent)]
    IonoDecode(#[from] IonoDecodeFailure),
    #[error(transparent)]
    ParseFilter(#[from] ParseFilterError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Spp(#[from] SppError),
    #[error(transparent)]
    Rtk(#[from] RtkError),
    #[error(transparent)]
    Lambda(#[from] LambdaError),
}
