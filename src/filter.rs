// Copyright (c) 2025 Swift Navigation Inc.
// Contact: Swift Navigation <dev@swiftnav.com>
//
// This source is subject to the license found in the file 'LICENSE' which must
// be be distributed together with this source. All other rights reserved.
//
// THIS CODE AND INFORMATION IS PROVIDED "AS IS" WITHOUT WARRANTY OF ANY KIND,
// EITHER EXPRESSED OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE IMPLIED
// WARRANTIES OF MERCHANTABILITY AND/OR FITNESS FOR A PARTICULAR PURPOSE.
//! Observation filter masks
//!
//! A mask is a list of predicates, each an operator paired with an operand:
//! an epoch literal, a constellation or satellite identifier, a carrier
//! name, or a float tagged with a unit suffix for SNR/elevation/azimuth.
//! A candidate observation passes the mask iff every predicate whose operand
//! kind matches one of the candidate's fields evaluates true; predicates
//! whose operand kind the candidate doesn't carry are vacuously satisfied.

use std::str::FromStr;

use crate::{
    signal::{Code, Constellation, ParseSvError, Sv},
    time::{GpsTime, UtcTime},
};

/// Comparison operator used by a single predicate
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Op {
    Gt,
    Lt,
    Ge,
    Le,
    Eq,
    Ne,
}

impl Op {
    fn apply<T: PartialOrd>(self, lhs: T, rhs: T) -> bool {
        match self {
            Op::Gt => lhs > rhs,
            Op::Lt => lhs < rhs,
            Op::Ge => lhs >= rhs,
            Op::Le => lhs <= rhs,
            Op::Eq => lhs == rhs,
            Op::Ne => lhs != rhs,
        }
    }

    fn parse(s: &str) -> Option<(Op, &str)> {
        for (prefix, op) in [
            (">=", Op::Ge),
            ("<=", Op::Le),
            ("!=", Op::Ne),
            (">", Op::Gt),
            ("<", Op::Lt),
            ("=", Op::Eq),
        ] {
            if let Some(rest) = s.strip_prefix(prefix) {
                return Some((op, rest));
            }
        }
        None
    }
}

/// The operand of a single predicate
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Epoch(GpsTime),
    Constellation(Constellation),
    Satellite(Sv),
    /// A carrier band name, e.g. `"L1"`, matched against the substring of a
    /// candidate's [`Code`] name
    Carrier(String),
    /// Signal to noise ratio, dB-Hz
    Snr(f64),
    /// Elevation, radians
    Elevation(f64),
    /// Azimuth, radians
    Azimuth(f64),
}

/// A single `<op><operand>` predicate
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    op: Op,
    operand: Operand,
}

/// Error parsing a filter mask string
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ParseFilterError {
    #[error("missing comparison operator in mask item {0:?}")]
    MissingOperator(String),
    #[error("unrecognized mask item {0:?}")]
    UnrecognizedItem(String),
    #[error("invalid satellite/constellation identifier: {0}")]
    Sv(#[from] ParseSvError),
}

fn parse_operand(rest: &str) -> Result<Operand, ParseFilterError> {
    let rest = rest.trim();

    if let Some(unit) = rest.chars().last().filter(|c| matches!(c, 's' | 'e' | 'a')) {
        let number = &rest[..rest.len() - 1];
        if let Ok(value) = number.parse::<f64>() {
            return Ok(match unit {
                's' => Operand::Snr(value),
                'e' => Operand::Elevation(value.to_radians()),
                'a' => Operand::Azimuth(value.to_radians()),
                _ => unreachable!(),
            });
        }
    }

    if let Ok(utc) = parse_epoch_literal(rest) {
        return Ok(Operand::Epoch(utc.to_gps_hardcoded()));
    }

    if rest.len() <= 3 && rest.chars().next().is_some_and(|c| matches!(c, 'L' | 'E' | 'B')) {
        return Ok(Operand::Carrier(rest.to_string()));
    }

    if let Ok(sv) = Sv::from_str(rest) {
        return if sv.is_whole_system() {
            Ok(Operand::Constellation(sv.constellation()))
        } else {
            Ok(Operand::Satellite(sv))
        };
    }

    Err(ParseFilterError::UnrecognizedItem(rest.to_string()))
}

fn parse_epoch_literal(s: &str) -> Result<UtcTime, ()> {
    // "YYYY-MM-DD HH:MM:SS"
    let (date, time) = s.split_once(' ').ok_or(())?;
    let mut date_parts = date.split('-');
    let year: u16 = date_parts.next().ok_or(())?.parse().map_err(|_| ())?;
    let month: u8 = date_parts.next().ok_or(())?.parse().map_err(|_| ())?;
    let day: u8 = date_parts.next().ok_or(())?.parse().map_err(|_| ())?;

    let mut time_parts = time.split(':');
    let hour: u8 = time_parts.next().ok_or(())?.parse().map_err(|_| ())?;
    let minute: u8 = time_parts.next().ok_or(())?.parse().map_err(|_| ())?;
    let second: f64 = time_parts.next().ok_or(())?.parse().map_err(|_| ())?;

    Ok(UtcTime::from_parts(year, month, day, hour, minute, second))
}

impl FromStr for Predicate {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Predicate, ParseFilterError> {
        let s = s.trim();
        let (op, rest) = Op::parse(s).ok_or_else(|| ParseFilterError::MissingOperator(s.to_string()))?;
        let operand = parse_operand(rest)?;
        Ok(Predicate { op, operand })
    }
}

/// A candidate observation to test against a [`FilterMask`]
#[derive(Debug, Copy, Clone)]
pub struct Candidate {
    pub epoch: GpsTime,
    pub sv: Sv,
    pub code: Option<Code>,
    pub elevation: Option<f64>,
    pub azimuth: Option<f64>,
    pub snr: Option<f64>,
}

/// A parsed list of predicates, evaluated as a logical AND
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterMask {
    predicates: Vec<Predicate>,
}

impl FilterMask {
    /// Parse a mask from a list of `<op><item>` strings, e.g. the TOML
    /// `[filter]` list
    pub fn parse(items: &[String]) -> Result<FilterMask, ParseFilterError> {
        let predicates = items
            .iter()
            .map(|s| Predicate::from_str(s))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(FilterMask { predicates })
    }

    /// An empty mask that accepts everything
    #[must_use]
    pub fn accept_all() -> FilterMask {
        FilterMask::default()
    }

    /// Whether `candidate` passes every applicable predicate in this mask
    #[must_use]
    pub fn matches(&self, candidate: &Candidate) -> bool {
        self.predicates.iter().all(|p| match &p.operand {
            Operand::Epoch(e) => p.op.apply(candidate.epoch.diff(e), 0.0),
            Operand::Constellation(c) => p.op.apply(candidate.sv.constellation() == *c, true),
            Operand::Satellite(sv) => p.op.apply(candidate.sv == *sv, true),
            Operand::Carrier(name) => candidate
                .code
                .is_none_or(|c| p.op.apply(c.to_string().contains(name.as_str()), true)),
            Operand::Snr(v) => candidate.snr.is_none_or(|s| p.op.apply(s, *v)),
            Operand::Elevation(v) => candidate.elevation.is_none_or(|e| p.op.apply(e, *v)),
            Operand::Azimuth(v) => candidate.azimuth.is_none_or(|a| p.op.apply(a, *v)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(sv: Sv, elevation_deg: f64, snr: f64, epoch: GpsTime) -> Candidate {
        Candidate {
            epoch,
            sv,
            code: None,
            elevation: Some(elevation_deg.to_radians()),
            azimuth: None,
            snr: Some(snr),
        }
    }

    #[test]
    fn elevation_and_snr_floor() {
        let mask = FilterMask::parse(&[">15e".to_string(), ">35s".to_string()]).unwrap();
        let sv = Sv::new(Constellation::Gps, 1);
        let epoch = GpsTime::new(2000, 0.0).unwrap();

        assert!(mask.matches(&candidate(sv, 20.0, 40.0, epoch)));
        assert!(!mask.matches(&candidate(sv, 10.0, 40.0, epoch)));
        assert!(!mask.matches(&candidate(sv, 20.0, 30.0, epoch)));
    }

    #[test]
    fn constellation_whitelist() {
        let mask = FilterMask::parse(&["=G".to_string()]).unwrap();
        let gps = Sv::new(Constellation::Gps, 1);
        let bds = Sv::new(Constellation::Bds, 1);
        let epoch = GpsTime::new(2000, 0.0).unwrap();

        assert!(mask.matches(&candidate(gps, 45.0, 45.0, epoch)));
        assert!(!mask.matches(&candidate(bds, 45.0, 45.0, epoch)));
    }

    #[test]
    fn epoch_floor_rejects_before_date() {
        let mask = FilterMask::parse(&[">=2024-01-01 00:00:00".to_string()]).unwrap();
        let sv = Sv::new(Constellation::Gps, 1);
        let before = UtcTime::from_parts(2023, 6, 1, 0, 0, 0.0).to_gps_hardcoded();
        let after = UtcTime::from_parts(2024, 6, 1, 0, 0, 0.0).to_gps_hardcoded();

        assert!(!mask.matches(&candidate(sv, 45.0, 45.0, before)));
        assert!(mask.matches(&candidate(sv, 45.0, 45.0, after)));
    }

    #[test]
    fn combined_mask_matches_reference_scenario() {
        let mask = FilterMask::parse(
            &[">=2024-01-01 00:00:00", "=G", ">15e", ">35s"]
                .map(str::to_string)
                .to_vec(),
        )
        .unwrap();

        let gps = Sv::new(Constellation::Gps, 1);
        let after = UtcTime::from_parts(2024, 6, 1, 0, 0, 0.0).to_gps_hardcoded();
        assert!(mask.matches(&candidate(gps, 20.0, 40.0, after)));

        let bds = Sv::new(Constellation::Bds, 1);
        assert!(!mask.matches(&candidate(bds, 20.0, 40.0, after)));
    }
}
