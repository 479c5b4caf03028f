// Copyright (c) 2025 Swift Navigation Inc.
// Contact: Swift Navigation <dev@swiftnav.com>
//
// This source is subject to the license found in the file 'LICENSE' which must
// be be distributed together with this source. All other rights reserved.
//
// THIS CODE AND INFORMATION IS PROVIDED "AS IS" WITHOUT WARRANTY OF ANY KIND,
// EITHER EXPRESSED OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE IMPLIED
// WARRANTIES OF MERCHANTABILITY AND/OR FITNESS FOR A PARTICULAR PURPOSE.
//! Real-time kinematic (RTK) double-difference engine
//!
//! Given a shared epoch of rover and base observations and the corresponding
//! satellite states, [`RtkEngine`] forms the common-view satellite set,
//! builds double-difference pseudorange and carrier phase observations, and
//! solves a Gauss-Newton least squares for the rover-base baseline plus one
//! float ambiguity per usable code/satellite pair. The resulting
//! [`RtkFloatSolution`] is the input to [`crate::lambda`]'s integer
//! ambiguity search.

use std::collections::{BTreeMap, HashMap};

use nalgebra::{DMatrix, DVector, Vector3};

use crate::{
    coords::ECEF,
    ephsolver::EphemerisResult,
    filter::{Candidate, FilterMask},
    obs::EpochObs,
    signal::{Code, Constellation, Sv},
    time::GpsTime,
};

const MAX_ITER: usize = 20;
const BASELINE_CONVERGED: f64 = 1e-6;

/// Errors raised while forming or solving an RTK epoch
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq)]
pub enum RtkError {
    #[error("no common-view satellites for constellation {0}")]
    NoCommonView(Constellation),
    #[error("no usable code found across the common-view satellite set")]
    NoUsableCode,
    #[error("failed to converge within {MAX_ITER} iterations")]
    DidNotConverge,
    #[error("normal matrix is singular or near-singular")]
    Singular,
}

/// A single float ambiguity parameter, keyed by constellation, code, and
/// non-reference satellite
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AmbiguityKey {
    pub constellation: Constellation,
    pub code: Code,
    pub sv: Sv,
}

/// The common-view satellite set for one constellation, reference first
#[derive(Debug, Clone)]
struct CommonView {
    constellation: Constellation,
    reference: Sv,
    others: Vec<Sv>,
    usable_codes: Vec<Code>,
}

/// Float baseline and per-satellite ambiguity solution from one RTK epoch
#[derive(Debug, Clone)]
pub struct RtkFloatSolution {
    /// Baseline vector from base to rover, ECEF meters
    pub baseline: Vector3<f64>,
    pub ambiguities: BTreeMap<AmbiguityKey, f64>,
    /// Full state covariance, ordered baseline(3) then ambiguities in the
    /// same order as iteration over `ambiguities`
    pub covariance: DMatrix<f64>,
    pub num_dd_observations: usize,
}

/// RTK double-difference engine for a single epoch
#[derive(Debug, Default)]
pub struct RtkEngine {
    mask: FilterMask,
}

impl RtkEngine {
    #[must_use]
    pub fn new(mask: FilterMask) -> RtkEngine {
        RtkEngine { mask }
    }

    fn elevation(rover_pos: &ECEF, sat_pos: &ECEF) -> f64 {
        rover_pos.azel_of(sat_pos).el()
    }

    fn select_common_view(
        &self,
        constellation: Constellation,
        epoch: GpsTime,
        rover_obs: &EpochObs,
        base_obs: &EpochObs,
        sat_states: &HashMap<Sv, EphemerisResult>,
        rover_pos: &ECEF,
    ) -> Result<CommonView, RtkError> {
        let mut candidates: Vec<Sv> = rover_obs
            .keys()
            .filter(|sv| sv.constellation() == constellation && base_obs.contains_key(sv))
            .copied()
            .collect();

        candidates.retain(|sv| {
            let Some(state) = sat_states.get(sv) else {
                return false;
            };
            let elevation = Self::elevation(rover_pos, &state.pos);
            let candidate = Candidate {
                epoch,
                sv: *sv,
                code: None,
                elevation: Some(elevation),
                azimuth: None,
                snr: None,
            };
            self.mask.matches(&candidate)
        });

        if candidates.is_empty() {
            return Err(RtkError::NoCommonView(constellation));
        }

        let reference = *candidates
            .iter()
            .max_by(|a, b| {
                let ea = Self::elevation(rover_pos, &sat_states[a].pos);
                let eb = Self::elevation(rover_pos, &sat_states[b].pos);
                ea.partial_cmp(&eb).unwrap_or(std::cmp::Ordering::Equal)
            })
            .expect("candidates is non-empty");

        let mut others: Vec<Sv> = candidates.into_iter().filter(|sv| *sv != reference).collect();
        others.sort_by_key(Sv::prn);

        let usable_codes = Self::usable_codes(reference, &others, rover_obs, base_obs, &self.mask, epoch);
        if usable_codes.is_empty() {
            return Err(RtkError::NoUsableCode);
        }

        Ok(CommonView {
            constellation,
            reference,
            others,
            usable_codes,
        })
    }

    fn usable_codes(
        reference: Sv,
        others: &[Sv],
        rover_obs: &EpochObs,
        base_obs: &EpochObs,
        mask: &FilterMask,
        epoch: GpsTime,
    ) -> Vec<Code> {
        let mut all_sats = vec![reference];
        all_sats.extend_from_slice(others);

        let mut codes: Option<Vec<Code>> = None;
        for sv in all_sats {
            let Some(rover_gobs) = rover_obs.get(&sv) else {
                return Vec::new();
            };
            let Some(base_gobs) = base_obs.get(&sv) else {
                return Vec::new();
            };

            let mut usable_here: Vec<Code> = Vec::new();
            for rover_sig in rover_gobs.iter() {
                let code = rover_sig.code();
                let Some(base_sig) = base_gobs.get(code) else {
                    continue;
                };
                let rover_ok = rover_sig.is_usable()
                    && mask.matches(&Candidate {
                        epoch,
                        sv,
                        code: Some(code),
                        elevation: None,
                        azimuth: None,
                        snr: Some(rover_sig.snr),
                    });
                let base_ok = base_sig.is_usable()
                    && mask.matches(&Candidate {
                        epoch,
                        sv,
                        code: Some(code),
                        elevation: None,
                        azimuth: None,
                        snr: Some(base_sig.snr),
                    });
                if rover_ok && base_ok {
                    usable_here.push(code);
                }
            }

            codes = Some(match codes {
                None => usable_here,
                Some(prev) => prev.into_iter().filter(|c| usable_here.contains(c)).collect(),
            });
        }

        codes.unwrap_or_default()
    }

    /// Builds and solves the double-difference system for one epoch
    pub fn solve(
        &self,
        epoch: GpsTime,
        rover_obs: &EpochObs,
        base_obs: &EpochObs,
        sat_states: &HashMap<Sv, EphemerisResult>,
        rover_pos_seed: ECEF,
        base_pos: ECEF,
    ) -> Result<RtkFloatSolution, RtkError> {
        let constellations: Vec<Constellation> = {
            let mut v: Vec<Constellation> = rover_obs.keys().map(Sv::constellation).collect();
            v.sort_by_key(|c| *c as u8);
            v.dedup();
            v
        };

        let mut views = Vec::new();
        for c in constellations {
            if let Ok(view) =
                self.select_common_view(c, epoch, rover_obs, base_obs, sat_states, &rover_pos_seed)
            {
                views.push(view);
            }
        }
        if views.is_empty() {
            return Err(RtkError::NoCommonView(Constellation::Gps));
        }

        let mut ambiguity_keys: Vec<AmbiguityKey> = Vec::new();
        for view in &views {
            for code in &view.usable_codes {
                for sv in &view.others {
                    ambiguity_keys.push(AmbiguityKey {
                        constellation: view.constellation,
                        code: *code,
                        sv: *sv,
                    });
                }
            }
        }
        let amb_index: HashMap<AmbiguityKey, usize> = ambiguity_keys
            .iter()
            .enumerate()
            .map(|(i, k)| (*k, i))
            .collect();
        let n_params = 3 + ambiguity_keys.len();

        let mut x = DVector::<f64>::zeros(n_params);
        let mut rover_pos = rover_pos_seed;

        for _ in 0..MAX_ITER {
            // (jac position contribution, ambiguity col (usize::MAX if none), lambda coeff,
            //  residual, own-measurement variance (excludes the shared reference term),
            //  reference-measurement variance, correlation group)
            //
            // Every double difference built from the same reference satellite, code, and
            // measurement type (pseudorange or carrier) shares that reference's noise, so
            // rows in the same group are correlated through `var_ref`; rows in different
            // groups are independent.
            let mut rows: Vec<(Vector3<f64>, usize, f64, f64, f64, f64, (Sv, Code, bool))> = Vec::new();

            for view in &views {
                let ref_state = &sat_states[&view.reference];
                let ref_view_vec = {
                    let diff = Vector3::new(
                        rover_pos.x() - ref_state.pos.x(),
                        rover_pos.y() - ref_state.pos.y(),
                        rover_pos.z() - ref_state.pos.z(),
                    );
                    diff / diff.norm()
                };
                let range_rover_ref = {
                    let d = Vector3::new(
                        rover_pos.x() - ref_state.pos.x(),
                        rover_pos.y() - ref_state.pos.y(),
                        rover_pos.z() - ref_state.pos.z(),
                    );
                    d.norm()
                };
                let range_base_ref = {
                    let d = Vector3::new(
                        base_pos.x() - ref_state.pos.x(),
                        base_pos.y() - ref_state.pos.y(),
                        base_pos.z() - ref_state.pos.z(),
                    );
                    d.norm()
                };

                let ref_rover_sig = &rover_obs[&view.reference];
                let ref_base_sig = &base_obs[&view.reference];

                for code in &view.usable_codes {
                    let lambda = code.get_carrier_frequency().recip() * crate::signal::consts::SPEED_OF_LIGHT;
                    let ref_pr_rover = ref_rover_sig.get(*code).map(|s| s.pseudorange).unwrap_or(0.0);
                    let ref_pr_base = ref_base_sig.get(*code).map(|s| s.pseudorange).unwrap_or(0.0);
                    let ref_cp_rover = ref_rover_sig.get(*code).map(|s| s.carrier_phase).unwrap_or(0.0);
                    let ref_cp_base = ref_base_sig.get(*code).map(|s| s.carrier_phase).unwrap_or(0.0);
                    let var_ref_rover = ref_rover_sig.get(*code).map(|s| s.pseudorange_variance).unwrap_or(1.0);
                    let var_ref_base = ref_base_sig.get(*code).map(|s| s.pseudorange_variance).unwrap_or(1.0);
                    let var_ref = var_ref_rover + var_ref_base;

                    for sv in &view.others {
                        let state = &sat_states[sv];
                        let diff = Vector3::new(
                            rover_pos.x() - state.pos.x(),
                            rover_pos.y() - state.pos.y(),
                            rover_pos.z() - state.pos.z(),
                        );
                        let range_rover_m = diff.norm();
                        let view_vec_m = diff / range_rover_m;
                        let range_base_m = {
                            let d = Vector3::new(
                                base_pos.x() - state.pos.x(),
                                base_pos.y() - state.pos.y(),
                                base_pos.z() - state.pos.z(),
                            );
                            d.norm()
                        };

                        let jac_pos = view_vec_m - ref_view_vec;

                        let rho_dd = (range_rover_m - range_rover_ref) - (range_base_m - range_base_ref);

                        let rover_sig = &rover_obs[sv];
                        let base_sig = &base_obs[sv];
                        let pr_rover = rover_sig.get(*code).map(|s| s.pseudorange).unwrap_or(0.0);
                        let pr_base = base_sig.get(*code).map(|s| s.pseudorange).unwrap_or(0.0);
                        let cp_rover = rover_sig.get(*code).map(|s| s.carrier_phase).unwrap_or(0.0);
                        let cp_base = base_sig.get(*code).map(|s| s.carrier_phase).unwrap_or(0.0);
                        let var_m = rover_sig
                            .get(*code)
                            .map(|s| s.pseudorange_variance)
                            .unwrap_or(1.0)
                            + base_sig.get(*code).map(|s| s.pseudorange_variance).unwrap_or(1.0);
                        let var_m_carrier = rover_sig
                            .get(*code)
                            .map(|s| s.carrier_variance)
                            .unwrap_or(1.0)
                            + base_sig.get(*code).map(|s| s.carrier_variance).unwrap_or(1.0);

                        let sd_pr = (pr_rover - pr_base) - (ref_pr_rover - ref_pr_base);
                        let y_pr = sd_pr - rho_dd;

                        let sd_cp = ((cp_rover - cp_base) - (ref_cp_rover - ref_cp_base)) * lambda;
                        let amb_col = amb_index[&AmbiguityKey {
                            constellation: view.constellation,
                            code: *code,
                            sv: *sv,
                        }];
                        let y_cp = sd_cp - rho_dd - lambda * x[3 + amb_col];

                        rows.push((jac_pos, usize::MAX, 0.0, y_pr, var_m, var_ref, (view.reference, *code, false)));
                        rows.push((jac_pos, amb_col, lambda, y_cp, var_m_carrier, var_ref, (view.reference, *code, true)));
                    }
                }
            }

            let m = rows.len();
            let mut jac = DMatrix::<f64>::zeros(m, n_params);
            let mut y = DVector::<f64>::zeros(m);
            let mut cov = DMatrix::<f64>::zeros(m, m);

            let mut group_rows: HashMap<(Sv, Code, bool), Vec<usize>> = HashMap::new();
            for (row, (jac_pos, amb_col, lambda, residual, var_own, var_ref, group)) in rows.iter().enumerate() {
                jac[(row, 0)] = jac_pos.x;
                jac[(row, 1)] = jac_pos.y;
                jac[(row, 2)] = jac_pos.z;
                if *amb_col != usize::MAX {
                    jac[(row, 3 + amb_col)] = *lambda;
                }
                y[row] = *residual;
                cov[(row, row)] = var_own + var_ref;
                group_rows.entry(*group).or_default().push(row);
            }
            for members in group_rows.values() {
                for &i in members {
                    for &j in members {
                        if i != j {
                            cov[(i, j)] = rows[i].5;
                        }
                    }
                }
            }

            let w_mat = cov.try_inverse().ok_or(RtkError::Singular)?;
            if !w_mat.iter().all(|v| v.is_finite()) {
                return Err(RtkError::Singular);
            }
            let jtw = jac.transpose() * &w_mat;
            let normal = &jtw * &jac;
            let rhs = &jtw * &y;

            let normal_inv = normal.clone().try_inverse().ok_or(RtkError::Singular)?;
            if !normal_inv.iter().all(|v| v.is_finite()) {
                return Err(RtkError::Singular);
            }
            let dx = &normal_inv * &rhs;

            x += &dx;
            rover_pos = ECEF::new(
                rover_pos_seed.x() + x[0],
                rover_pos_seed.y() + x[1],
                rover_pos_seed.z() + x[2],
            );

            let baseline_delta = (dx[0] * dx[0] + dx[1] * dx[1] + dx[2] * dx[2]).sqrt();

            if baseline_delta < BASELINE_CONVERGED {
                let mut ambiguities = BTreeMap::new();
                for (key, idx) in &amb_index {
                    ambiguities.insert(*key, x[3 + *idx]);
                }
                return Ok(RtkFloatSolution {
                    baseline: Vector3::new(x[0], x[1], x[2]),
                    ambiguities,
                    covariance: normal_inv,
                    num_dd_observations: m,
                });
            }
        }

        Err(RtkError::DidNotConverge)
    }
}
