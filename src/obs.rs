// Copyright (c) 2025 Swift Navigation Inc.
// Contact: Swift Navigation <dev@swiftnav.com>
//
// This source is subject to the license found in the file 'LICENSE' which must
// be be distributed together with this source. All other rights reserved.
//
// THIS CODE AND INFORMATION IS PROVIDED "AS IS" WITHOUT WARRANTY OF ANY KIND,
// EITHER EXPRESSED OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE IMPLIED
// WARRANTIES OF MERCHANTABILITY AND/OR FITNESS FOR A PARTICULAR PURPOSE.
//! Raw observations
//!
//! A single epoch of raw data is a [`GObs`]: one satellite, the receiver
//! timestamp it was recorded at, and a [`Sig`] for every broadcast signal
//! (code) the receiver locked onto. [`ObsMap`] holds a sliding window of these,
//! keyed first by epoch and then by satellite, mirroring how a RINEX
//! observation file or an SBP observation stream is laid out.

use std::collections::{BTreeMap, HashMap, VecDeque};

use crate::{
    signal::{Code, Sv},
    time::GpsTime,
};

/// Validity state of a single signal observation
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Validity {
    /// The observation is usable
    #[default]
    Valid,
    /// A cycle slip was detected (or is suspected) between this and the
    /// previous epoch's carrier phase for this signal
    CycleSlip,
    /// The receiver did not produce a usable measurement for this signal
    Invalid,
}

/// A single broadcast signal's measurements at one epoch, for one satellite
#[derive(Debug, Copy, Clone)]
pub struct Sig {
    code: Code,
    validity: Validity,
    /// Carrier to noise ratio, in dB-Hz
    pub snr: f64,
    /// Doppler shift, in Hz (positive: satellite approaching)
    pub doppler: f64,
    /// Carrier phase, in cycles
    pub carrier_phase: f64,
    /// Pseudorange, in meters
    pub pseudorange: f64,
    /// Variance of the pseudorange measurement, in m^2. Filled in by a
    /// [`crate::random_model::RandomModel`]
    pub pseudorange_variance: f64,
    /// Variance of the carrier phase measurement, in cycles^2. Filled in by a
    /// [`crate::random_model::RandomModel`]
    pub carrier_variance: f64,
}

impl Sig {
    /// Create a new signal observation, defaulting to [`Validity::Valid`] and zero variances
    #[must_use]
    pub fn new(code: Code, pseudorange: f64, carrier_phase: f64, doppler: f64, snr: f64) -> Sig {
        Sig {
            code,
            validity: Validity::Valid,
            snr,
            doppler,
            carrier_phase,
            pseudorange,
            pseudorange_variance: 0.0,
            carrier_variance: 0.0,
        }
    }

    /// The broadcast code this observation belongs to
    #[must_use]
    pub fn code(&self) -> Code {
        self.code
    }

    /// The validity flag for this observation
    #[must_use]
    pub fn validity(&self) -> Validity {
        self.validity
    }

    /// Mark this observation with an explicit validity state
    pub fn set_validity(&mut self, validity: Validity) {
        self.validity = validity;
    }

    /// Wavelength of the carrier, in meters
    #[must_use]
    pub fn wavelength(&self) -> f64 {
        crate::signal::consts::SPEED_OF_LIGHT / self.code.get_carrier_frequency()
    }

    /// Whether this observation is usable: valid, with non-zero pseudorange and carrier
    #[must_use]
    pub fn is_usable(&self) -> bool {
        self.validity == Validity::Valid && self.pseudorange != 0.0 && self.carrier_phase != 0.0
    }
}

/// All observations from a single satellite at a single epoch
#[derive(Debug, Clone, Default)]
pub struct GObs {
    sigs: BTreeMap<Code, Sig>,
}

impl GObs {
    /// Create an empty set of observations for a satellite at an epoch
    #[must_use]
    pub fn new() -> GObs {
        GObs::default()
    }

    /// Insert or replace the observation for a given code
    pub fn insert(&mut self, sig: Sig) {
        self.sigs.insert(sig.code(), sig);
    }

    /// Get the observation for a given code, if present
    #[must_use]
    pub fn get(&self, code: Code) -> Option<&Sig> {
        self.sigs.get(&code)
    }

    /// Get a mutable reference to the observation for a given code, if present
    pub fn get_mut(&mut self, code: Code) -> Option<&mut Sig> {
        self.sigs.get_mut(&code)
    }

    /// Iterate over all signals observed for this satellite at this epoch
    pub fn iter(&self) -> impl Iterator<Item = &Sig> {
        self.sigs.values()
    }

    /// Number of signals observed
    #[must_use]
    pub fn len(&self) -> usize {
        self.sigs.len()
    }

    /// Whether any signal was observed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sigs.is_empty()
    }
}

/// One epoch's worth of observations, keyed by satellite
pub type EpochObs = HashMap<Sv, GObs>;

/// A time-ordered, capacity-bounded window of observation epochs
///
/// When the window is full, inserting a new epoch evicts the oldest one.
#[derive(Debug, Clone)]
pub struct ObsMap {
    capacity: usize,
    epochs: VecDeque<(GpsTime, EpochObs)>,
}

impl ObsMap {
    /// Create an [`ObsMap`] that retains at most `capacity` epochs
    #[must_use]
    pub fn new(capacity: usize) -> ObsMap {
        ObsMap {
            capacity: capacity.max(1),
            epochs: VecDeque::new(),
        }
    }

    /// Insert a new epoch of observations, evicting the oldest epoch if the
    /// window is at capacity
    pub fn insert(&mut self, epoch: GpsTime, obs: EpochObs) {
        if self.epochs.len() >= self.capacity {
            self.epochs.pop_front();
        }
        self.epochs.push_back((epoch, obs));
    }

    /// Get the observations for a specific epoch, if still in the window
    #[must_use]
    pub fn get(&self, epoch: &GpsTime) -> Option<&EpochObs> {
        self.epochs
            .iter()
            .find(|(t, _)| t.diff(epoch).abs() < 1e-6)
            .map(|(_, obs)| obs)
    }

    /// The most recently inserted epoch, if any
    #[must_use]
    pub fn latest(&self) -> Option<&(GpsTime, EpochObs)> {
        self.epochs.back()
    }

    /// Iterate over all retained epochs, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &(GpsTime, EpochObs)> {
        self.epochs.iter()
    }

    /// Number of epochs currently retained
    #[must_use]
    pub fn len(&self) -> usize {
        self.epochs.len()
    }

    /// Whether the window holds no epochs
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.epochs.is_empty()
    }
}
