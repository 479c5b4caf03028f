// Copyright (c) 2020-2021 Swift Navigation Inc.
// Contact: Swift Navigation <dev@swiftnav.com>
//
// This source is subject to the license found in the file 'LICENSE' which must
// be be distributed together with this source. All other rights reserved.
//
// THIS CODE AND INFORMATION IS PROVIDED "AS IS" WITHOUT WARRANTY OF ANY KIND,
// EITHER EXPRESSED OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE IMPLIED
// WARRANTIES OF MERCHANTABILITY AND/OR FITNESS FOR A PARTICULAR PURPOSE.
//! `gnss_engine` turns raw GNSS observation and ephemeris data into position
//! fixes. The data typically comes from a GNSS receiver chip as raw
//! observation and ephemeris records; this crate provides the positioning
//! algorithms (single point and real-time kinematic) that turn those records
//! into a trajectory, along with the supporting signal, time, and coordinate
//! types that GNSS processing is built on.
//!
//! `gnss_engine` does not talk to any particular receiver. It consumes
//! observation and ephemeris data already decoded from whatever wire format
//! the receiver speaks (e.g. RTCM, UBX, RINEX).
//!
//! ## [Signal](`signal`)
//! Types for identifying GNSS signals. Each satellite can send out multiple
//! signals, and each constellation of satellites support their own set of signals
//! and keeping track which is which is important.
//!
//! ## [Time](`time`)
//! Time is a very important aspect of GNSS. `gnss_engine` defaults to representing
//! all times as GPS times. It provides the ability to manipulate GPS time stamps,
//! as well as means to convert a GPS time stamp into various other time bases
//! (GLONASS time, UTC, MJD).
//!
//! ## [Coordinates](`coords`)
//! Several different coordinate types have representations and the ability to
//! convert between them. Earth centered earth fixed (ECEF), Latitude longitude and
//! height (both in radians and degrees), and Azimuth and elevation coordinates are
//! available.
//!
//! ## [Observations](`obs`)
//! Per-epoch, per-satellite, per-signal observation data: pseudorange, carrier
//! phase, Doppler, and signal strength, along with validity tracking.
//!
//! ## [Ephemeris solving](`ephsolver`)
//! Turns broadcast ephemeris parameters into a satellite position, velocity,
//! and clock correction at a given time of transmission.
//!
//! ## [Atmosphere](`atmosphere`)
//! Tropospheric (Saastamoinen/NMF) and ionospheric (Klobuchar) delay models.
//!
//! ## [Random/weighting model](`random_model`)
//! Assigns observation variances from signal strength and elevation for use
//! in the positioning engines' weighted least squares solves.
//!
//! ## [Single point positioning](`spp`)
//! Iterative weighted least-squares position, velocity, and clock fix from a
//! single receiver's observations.
//!
//! ## [Real-time kinematic](`rtk`)
//! Double-differenced carrier and code positioning relative to a base station
//! with known position, producing a float baseline and ambiguity set.
//!
//! ## [Ambiguity resolution](`lambda`)
//! The LAMBDA method for resolving real-valued carrier ambiguities to
//! integers, and validating the fix with the ratio test.
//!
//! ## [Observation filtering](`filter`)
//! A small expression language for masking observations by elevation, SNR,
//! constellation, or signal code before they reach a positioning engine.
//!
//! ## [Configuration](`config`)
//! Loading engine and filter configuration from TOML.
//!
//! ## [Errors](`error`)
//! [`error::NavError`] aggregates the narrower error types the other modules
//! define, for callers that want a single type to propagate with `?`.
//!
//! ## [Geodetic Reference Frames](`reference_frame`)
//! Maps and GNSS tend to use their own reference frames (a.k.a datums), so it's
//! important to keep track which reference frame a position is in and be able to
//! transform positions in one reference frame into another so you can properly
//! compare positions.

pub mod atmosphere;
pub mod config;
pub mod coords;
pub mod ephemeris;
pub mod ephsolver;
pub mod error;
pub mod filter;
pub mod lambda;
mod math;
pub mod obs;
pub mod random_model;
pub mod reference_frame;
pub mod rtk;
pub mod signal;
pub mod spp;
pub mod time;
