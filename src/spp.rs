// Copyright (c) 2025 Swift Navigation Inc.
// Contact: Swift Navigation <dev@swiftnav.com>
//
// This source is subject to the license found in the file 'LICENSE' which must
// be be distributed together with this source. All other rights reserved.
//
// THIS CODE AND INFORMATION IS PROVIDED "AS IS" WITHOUT WARRANTY OF ANY KIND,
// EITHER EXPRESSED OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE IMPLIED
// WARRANTIES OF MERCHANTABILITY AND/OR FITNESS FOR A PARTICULAR PURPOSE.
//! Single point positioning (SPP)
//!
//! [`SppEngine`] turns one epoch's pseudorange and Doppler observations,
//! together with the corresponding satellite states, into a weighted
//! least-squares position, velocity, and per-constellation clock bias fix.

use std::collections::HashMap;

use nalgebra::{DMatrix, DVector, Vector3};

use crate::{
    atmosphere::{IonosphereModel, Troposphere},
    coords::ECEF,
    ephsolver::EphemerisResult,
    signal::{consts::SPEED_OF_LIGHT, Constellation, Sv},
};

const MAX_ITER: usize = 10;
const POSITION_CONVERGED: f64 = 1e-6;
const ATMOSPHERE_ENABLE_THRESHOLD: f64 = 1.0;

/// Errors raised while computing an SPP fix
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq)]
pub enum SppError {
    #[error("too few observations to solve for position and clock biases")]
    NotEnoughObservations,
    #[error("failed to converge within {MAX_ITER} iterations")]
    DidNotConverge,
    #[error("normal matrix is singular or near-singular")]
    Singular,
}

/// A single pseudorange observation ready to be fed to the solver: the
/// satellite's state, its measured pseudorange, and the variance assigned by
/// a [`crate::random_model::RandomModel`]
#[derive(Debug, Copy, Clone)]
pub struct SppObservation {
    pub sv: Sv,
    pub sat_state: EphemerisResult,
    pub pseudorange: f64,
    pub pseudorange_variance: f64,
    /// Doppler-derived range rate, m/s (positive: satellite receding)
    pub range_rate: Option<f64>,
}

/// Position, velocity, and clock solution for one epoch
#[derive(Debug, Clone)]
pub struct SppSolution {
    pub pos: ECEF,
    pub vel: Vector3<f64>,
    /// Receiver clock bias per constellation present in the solve, seconds
    pub clock_bias: HashMap<Constellation, f64>,
    /// Receiver clock drift, s/s
    pub clock_drift: f64,
    pub num_satellites: usize,
    /// Sigma of unit weight: `y^T W y / (m - n)`
    pub sigma0: f64,
}

/// Iterative weighted least-squares single point position solver
#[derive(Debug, Default)]
pub struct SppEngine {
    troposphere: Troposphere,
    ionosphere: IonosphereModel,
}

impl SppEngine {
    /// Create a solver with the given ionosphere model; troposphere
    /// correction (Saastamoinen/NMF) is always available
    #[must_use]
    pub fn new(ionosphere: IonosphereModel) -> SppEngine {
        SppEngine {
            troposphere: Troposphere,
            ionosphere,
        }
    }

    /// Solves for position and per-constellation clock bias from a set of
    /// pseudorange observations at a single epoch
    pub fn solve_position(
        &self,
        obs: &[SppObservation],
        t_gps: f64,
        day_of_year: f64,
    ) -> Result<SppSolution, SppError> {
        let systems: Vec<Constellation> = {
            let mut v: Vec<Constellation> = obs.iter().map(|o| o.sv.constellation()).collect();
            v.sort_by_key(|c| *c as u8);
            v.dedup();
            v
        };
        let n_params = 3 + systems.len();
        if obs.len() < n_params + 1 {
            return Err(SppError::NotEnoughObservations);
        }
        let sys_index: HashMap<Constellation, usize> =
            systems.iter().enumerate().map(|(i, c)| (*c, i)).collect();

        let mut x = DVector::<f64>::zeros(n_params);
        let mut converged_geometry = false;

        for _ in 0..MAX_ITER {
            let pos = ECEF::new(x[0], x[1], x[2]);
            let llh = pos.to_llh();

            let mut jac = DMatrix::<f64>::zeros(obs.len(), n_params);
            let mut y = DVector::<f64>::zeros(obs.len());
            let mut w = DVector::<f64>::zeros(obs.len());

            for (row, o) in obs.iter().enumerate() {
                let sat_pos = o.sat_state.pos;
                let diff = Vector3::new(pos.x() - sat_pos.x(), pos.y() - sat_pos.y(), pos.z() - sat_pos.z());
                let range = diff.norm();

                let sys_idx = sys_index[&o.sv.constellation()];
                let clock_term = x[3 + sys_idx];

                let (trop, iono) = if converged_geometry {
                    let azel = pos.azel_of(&sat_pos);
                    let trop = self.troposphere.delay(&llh, azel.el(), day_of_year).delay;
                    let iono = self
                        .ionosphere
                        .delay(t_gps, llh.latitude(), llh.longitude(), azel.az(), azel.el());
                    (trop, iono)
                } else {
                    (0.0, 0.0)
                };

                let predicted = range + clock_term - SPEED_OF_LIGHT * o.sat_state.clock_bias + trop + iono;
                y[row] = o.pseudorange - predicted;
                w[row] = 1.0 / o.pseudorange_variance;

                jac[(row, 0)] = diff.x / range;
                jac[(row, 1)] = diff.y / range;
                jac[(row, 2)] = diff.z / range;
                jac[(row, 3 + sys_idx)] = 1.0;
            }

            let w_mat = DMatrix::from_diagonal(&w);
            let jtw = jac.transpose() * &w_mat;
            let normal = &jtw * &jac;
            let rhs = &jtw * &y;

            let normal_inv = normal.clone().try_inverse().ok_or(SppError::Singular)?;
            if !normal_inv.iter().all(|v| v.is_finite()) {
                return Err(SppError::Singular);
            }
            let dx = &normal_inv * &rhs;

            x += &dx;

            let pos_delta = (dx[0] * dx[0] + dx[1] * dx[1] + dx[2] * dx[2]).sqrt();
            if pos_delta < ATMOSPHERE_ENABLE_THRESHOLD {
                converged_geometry = true;
            }
            if pos_delta < POSITION_CONVERGED {
                let residual = &y - &jac * &dx;
                let wrss: f64 = residual.iter().zip(w.iter()).map(|(r, wi)| r * r * wi).sum();
                let dof = (obs.len() - n_params).max(1) as f64;

                let mut clock_bias = HashMap::new();
                for (c, i) in &sys_index {
                    clock_bias.insert(*c, x[3 + *i]);
                }

                return Ok(SppSolution {
                    pos: ECEF::new(x[0], x[1], x[2]),
                    vel: Vector3::zeros(),
                    clock_bias,
                    clock_drift: 0.0,
                    num_satellites: obs.len(),
                    sigma0: (wrss / dof).sqrt(),
                });
            }
        }

        Err(SppError::DidNotConverge)
    }

    /// Solves for velocity and clock drift from Doppler observations, given
    /// an already-converged position
    pub fn solve_velocity(&self, obs: &[SppObservation], pos: &ECEF) -> Result<(Vector3<f64>, f64), SppError> {
        let with_doppler: Vec<&SppObservation> = obs.iter().filter(|o| o.range_rate.is_some()).collect();
        if with_doppler.len() < 4 {
            return Err(SppError::NotEnoughObservations);
        }

        let n = with_doppler.len();
        let mut jac = DMatrix::<f64>::zeros(n, 4);
        let mut y = DVector::<f64>::zeros(n);

        for (row, o) in with_doppler.iter().enumerate() {
            let sat_pos = o.sat_state.pos;
            let diff = Vector3::new(pos.x() - sat_pos.x(), pos.y() - sat_pos.y(), pos.z() - sat_pos.z());
            let range = diff.norm();
            let los = diff / range;

            let sat_vel = o.sat_state.vel;
            let range_rate_geometry = los.dot(&sat_vel) * -1.0;

            jac[(row, 0)] = los.x;
            jac[(row, 1)] = los.y;
            jac[(row, 2)] = los.z;
            jac[(row, 3)] = 1.0;

            y[row] = o.range_rate.unwrap() - range_rate_geometry - SPEED_OF_LIGHT * o.sat_state.clock_drift;
        }

        let jtj = jac.transpose() * &jac;
        let jty = jac.transpose() * &y;
        let inv = jtj.try_inverse().ok_or(SppError::Singular)?;
        let sol = inv * jty;

        Ok((Vector3::new(sol[0], sol[1], sol[2]), sol[3]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::ECEF as Ecef;

    fn make_obs(truth: Ecef, sat_positions: &[Ecef]) -> Vec<SppObservation> {
        sat_positions
            .iter()
            .enumerate()
            .map(|(i, sat_pos)| {
                let diff = Vector3::new(truth.x() - sat_pos.x(), truth.y() - sat_pos.y(), truth.z() - sat_pos.z());
                let range = diff.norm();
                SppObservation {
                    sv: Sv::new(Constellation::Gps, (i + 1) as u16),
                    sat_state: EphemerisResult {
                        pos: *sat_pos,
                        vel: Vector3::zeros(),
                        clock_bias: 0.0,
                        clock_drift: 0.0,
                        accuracy: 1.0,
                    },
                    pseudorange: range,
                    pseudorange_variance: 0.09,
                    range_rate: None,
                }
            })
            .collect()
    }

    #[test]
    fn converges_to_known_position() {
        let truth = Ecef::new(-2_267_796.0, 5_009_421.5, 3_220_952.1);
        let sat_positions = [
            Ecef::new(15_000_000.0, 10_000_000.0, 20_000_000.0),
            Ecef::new(-15_000_000.0, 12_000_000.0, 18_000_000.0),
            Ecef::new(5_000_000.0, -20_000_000.0, 16_000_000.0),
            Ecef::new(20_000_000.0, 5_000_000.0, -10_000_000.0),
            Ecef::new(-10_000_000.0, -15_000_000.0, 19_000_000.0),
        ];
        let obs = make_obs(truth, &sat_positions);

        let engine = SppEngine::new(IonosphereModel::None);
        let solution = engine.solve_position(&obs, 100_000.0, 150.0).unwrap();

        let err = ((solution.pos.x() - truth.x()).powi(2)
            + (solution.pos.y() - truth.y()).powi(2)
            + (solution.pos.z() - truth.z()).powi(2))
        .sqrt();
        assert!(err < 3.0, "position error {err} too large");
    }

    #[test]
    fn too_few_observations_rejected() {
        let truth = Ecef::new(-2_267_796.0, 5_009_421.5, 3_220_952.1);
        let sat_positions = [Ecef::new(15_000_000.0, 10_000_000.0, 20_000_000.0)];
        let obs = make_obs(truth, &sat_positions);
        let engine = SppEngine::new(IonosphereModel::None);
        assert_eq!(
            engine.solve_position(&obs, 0.0, 1.0).unwrap_err(),
            SppError::NotEnoughObservations
        );
    }
}
