// Copyright (c) 2025 Swift Navigation Inc.
// Contact: Swift Navigation <dev@swiftnav.com>
//
// This source is subject to the license found in the file 'LICENSE' which must
// be be distributed together with this source. All other rights reserved.
//
// THIS CODE AND INFORMATION IS PROVIDED "AS IS" WITHOUT WARRANTY OF ANY KIND,
// EITHER EXPRESSED OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE IMPLIED
// WARRANTIES OF MERCHANTABILITY AND/OR FITNESS FOR A PARTICULAR PURPOSE.
//! Broadcast and precise ephemerides
//!
//! An [`Ephemeris`] describes a satellite's orbit and clock over a window of
//! validity centered on a time of ephemeris (toe). [`EphemerisStore`] keeps the
//! most recently received ephemeris of each kind for every satellite and picks
//! the best one to use for a given time, following each constellation's own
//! message type priority.

use std::collections::HashMap;

use crate::{signal::Sv, time::GpsTime};

/// Broadcast Keplerian elements shared by GPS, Galileo, BeiDou and QZSS
#[derive(Debug, Copy, Clone, Default)]
pub struct Kepler {
    /// Time of ephemeris, seconds of week
    pub toe: GpsTime,
    /// Square root of the semi-major axis, sqrt(m)
    pub sqrta: f64,
    /// Eccentricity
    pub ecc: f64,
    /// Inclination at reference time, radians
    pub inc: f64,
    /// Rate of inclination angle, rad/s
    pub inc_dot: f64,
    /// Argument of perigee, radians
    pub argp: f64,
    /// Longitude of ascending node of orbit plane, radians
    pub omega0: f64,
    /// Rate of right ascension, rad/s
    pub omegadot: f64,
    /// Mean anomaly at reference time, radians
    pub m0: f64,
    /// Mean motion difference from computed value, rad/s
    pub dn: f64,
    /// Amplitude of cosine harmonic correction to argument of latitude
    pub cuc: f64,
    /// Amplitude of sine harmonic correction to argument of latitude
    pub cus: f64,
    /// Amplitude of cosine harmonic correction to orbit radius
    pub crc: f64,
    /// Amplitude of sine harmonic correction to orbit radius
    pub crs: f64,
    /// Amplitude of cosine harmonic correction to angle of inclination
    pub cic: f64,
    /// Amplitude of sine harmonic correction to angle of inclination
    pub cis: f64,
    /// Clock bias, s
    pub af0: f64,
    /// Clock drift, s/s
    pub af1: f64,
    /// Clock drift rate, s/s^2
    pub af2: f64,
    /// Time of clock, seconds of week
    pub toc: GpsTime,
    /// Group delay(s), seconds. GPS: TGD. Galileo: BGD E1/E5a, E1/E5b.
    /// BeiDou: TGD1, TGD2.
    pub tgd: [f64; 2],
    /// User range accuracy / signal-in-space accuracy index
    pub ura: f64,
    /// Whether the satellite is a BeiDou GEO (special +5 deg rotation applies)
    pub is_geo: bool,
}

/// Broadcast message type, used to break ties when more than one kind of
/// ephemeris message is available for the same satellite and time
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BdsMsgType {
    D1,
    D2,
    D1D2,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum GalMsgType {
    Inav,
    Fnav,
    Ifnv,
}

/// GLONASS broadcast elements, propagated by numerical (RK4) integration
/// rather than a closed-form Kepler solution
#[derive(Debug, Copy, Clone, Default)]
pub struct Geph {
    pub toe: GpsTime,
    /// ECEF position at `toe`, meters
    pub pos: [f64; 3],
    /// ECEF velocity at `toe`, m/s
    pub vel: [f64; 3],
    /// Luni-solar acceleration at `toe`, m/s^2
    pub acc: [f64; 3],
    /// Clock bias (-tau_n), s
    pub clock_bias: f64,
    /// Relative frequency bias (+gamma_n)
    pub clock_drift: f64,
    /// Frequency slot, -7..=6
    pub fcn: i16,
}

/// SBAS broadcast elements: position/velocity/acceleration polynomial plus clock
#[derive(Debug, Copy, Clone, Default)]
pub struct Seph {
    pub toe: GpsTime,
    pub pos: [f64; 3],
    pub vel: [f64; 3],
    pub acc: [f64; 3],
    pub clock_bias: f64,
    pub clock_drift: f64,
    pub ura: f64,
}

/// A single precise-ephemeris sample, as found in an SP3-style precise orbit
#[derive(Debug, Copy, Clone)]
pub struct PephSample {
    pub t: GpsTime,
    pub pos: [f64; 3],
    pub clock_bias: f64,
}

/// A window of precise ephemeris samples for one satellite, interpolated with
/// a Lagrange polynomial for position/velocity and linearly for clock
#[derive(Debug, Clone, Default)]
pub struct Peph {
    pub samples: Vec<PephSample>,
    /// Lagrange interpolation order (number of points used is `order + 1`)
    pub order: usize,
}

/// The kind of broadcast ephemeris carried by an [`Eph`]
#[derive(Debug, Copy, Clone)]
pub enum EphKind {
    Kepler(Kepler),
    BdsKepler(Kepler, BdsMsgType),
    GalKepler(Kepler, GalMsgType),
    Glo(Geph),
    Sbas(Seph),
    Precise(Peph),
}

/// A single ephemeris record: which satellite, which kind of orbit model, and
/// the window of time it's valid for
#[derive(Debug, Clone)]
pub struct Eph {
    pub sv: Sv,
    pub kind: EphKind,
    /// Fit interval / validity window in seconds, centered on toe
    pub max_toe: f64,
    /// Issue of data, used to detect updates from the same toe
    pub iod: u16,
}

impl Eph {
    /// Time of ephemeris (toe) for any kind of ephemeris
    #[must_use]
    pub fn toe(&self) -> GpsTime {
        match &self.kind {
            EphKind::Kepler(k) | EphKind::BdsKepler(k, _) | EphKind::GalKepler(k, _) => k.toe,
            EphKind::Glo(g) => g.toe,
            EphKind::Sbas(s) => s.toe,
            EphKind::Precise(p) => p.samples.first().map_or_else(GpsTime::default, |s| s.t),
        }
    }

    /// Whether `t` falls within this ephemeris's validity window
    #[must_use]
    pub fn is_valid_at(&self, t: &GpsTime) -> bool {
        match &self.kind {
            EphKind::Precise(p) => p
                .samples
                .first()
                .zip(p.samples.last())
                .is_some_and(|(first, last)| t.diff(&first.t) >= 0.0 && last.t.diff(t) >= 0.0),
            _ => self.toe().diff(t).abs() <= self.max_toe,
        }
    }

    /// Message-type priority used to pick among several ephemerides that share
    /// a `toe`: lower is preferred. BeiDou favors D1D2 > D1 > D2, Galileo
    /// favors INAV > FNAV > IFNV. Every other kind has a single priority class.
    #[must_use]
    fn priority(&self) -> u8 {
        match &self.kind {
            EphKind::BdsKepler(_, BdsMsgType::D1D2) => 0,
            EphKind::BdsKepler(_, BdsMsgType::D1) => 1,
            EphKind::BdsKepler(_, BdsMsgType::D2) => 2,
            EphKind::GalKepler(_, GalMsgType::Inav) => 0,
            EphKind::GalKepler(_, GalMsgType::Fnav) => 1,
            EphKind::GalKepler(_, GalMsgType::Ifnv) => 2,
            _ => 0,
        }
    }
}

/// Default validity half-window (seconds) for each constellation, per
/// `max_toe` in the data model: GPS/GLO 7200s, GAL 9600s, BDS/QZS 3600s, SBAS 360s
#[must_use]
pub fn default_max_toe(sv: Sv) -> f64 {
    use crate::signal::Constellation;
    match sv.constellation() {
        Constellation::Gps | Constellation::Glo | Constellation::Irn => 7200.0,
        Constellation::Gal => 9600.0,
        Constellation::Bds | Constellation::Qzs => 3600.0,
        Constellation::Sbas => 360.0,
    }
}

/// Holds the most recently received ephemerides for every satellite, and
/// picks the best one to use for a given time
#[derive(Debug, Clone, Default)]
pub struct EphemerisStore {
    by_sv: HashMap<Sv, Vec<Eph>>,
}

impl EphemerisStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> EphemerisStore {
        EphemerisStore::default()
    }

    /// Add or replace an ephemeris. If one with the same `sv`, `toe`, and
    /// `iod` is already stored it's replaced; otherwise the new one is
    /// appended.
    pub fn insert(&mut self, eph: Eph) {
        let entries = self.by_sv.entry(eph.sv).or_default();
        if let Some(existing) = entries
            .iter_mut()
            .find(|e| e.toe().diff(&eph.toe()).abs() < 1e-6 && e.iod == eph.iod)
        {
            *existing = eph;
        } else {
            entries.push(eph);
        }
    }

    /// Find the best ephemeris for `sv` valid at time `t`: scans message-type
    /// priority tiers in order (see [`Eph::priority`]) and, within the first
    /// tier that has a valid candidate, returns the one with the smallest
    /// `|t - toe|`. A higher-priority message type is always preferred over a
    /// lower-priority one, even if the lower-priority candidate's `toe` is
    /// closer to `t`.
    #[must_use]
    pub fn find_latest(&self, sv: Sv, t: &GpsTime) -> Option<&Eph> {
        let candidates: Vec<&Eph> = self.by_sv.get(&sv)?.iter().filter(|e| e.is_valid_at(t)).collect();
        let best_priority = candidates.iter().map(|e| e.priority()).min()?;
        candidates
            .into_iter()
            .filter(|e| e.priority() == best_priority)
            .min_by(|a, b| {
                let da = a.toe().diff(t).abs();
                let db = b.toe().diff(t).abs();
                da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
            })
    }

    /// Number of ephemerides stored across all satellites
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_sv.values().map(Vec::len).sum()
    }

    /// Whether the store holds no ephemerides
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_sv.is_empty()
    }
}
