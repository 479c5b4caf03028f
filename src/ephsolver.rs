// Copyright (c) 2025 Swift Navigation Inc.
// Contact: Swift Navigation <dev@swiftnav.com>
//
// This source is subject to the license found in the file 'LICENSE' which must
// be be distributed together with this source. All other rights reserved.
//
// THIS CODE AND INFORMATION IS PROVIDED "AS IS" WITHOUT WARRANTY OF ANY KIND,
// EITHER EXPRESSED OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE IMPLIED
// WARRANTIES OF MERCHANTABILITY AND/OR FITNESS FOR A PARTICULAR PURPOSE.
//! Satellite position, velocity and clock from broadcast or precise ephemerides
//!
//! [`EphemerisSolver`] turns an [`EphemerisStore`] lookup into a satellite
//! state at a requested time of transmission, correcting for the signal
//! travel time and Earth's rotation during that time, and reports the
//! corresponding clock bias and its rate.

use nalgebra::Vector3;

use crate::{
    coords::ECEF,
    ephemeris::{BdsMsgType, Eph, EphKind, EphemerisStore, GalMsgType, Geph, Kepler, Peph, Seph},
    signal::{consts::SPEED_OF_LIGHT, Sv},
    time::GpsTime,
};

/// WGS-84 Earth gravitational parameter for GPS/GAL/QZS/BDS MEO, m^3/s^2
const GM_WGS84: f64 = 3.986_005e14;
/// PZ-90 Earth gravitational parameter for BeiDou, m^3/s^2
const GM_BDS: f64 = 3.986_004_418e14;
/// Earth gravitational parameter used in RK4 GLONASS propagation, m^3/s^2
const MU_GLO: f64 = 3.986_004_4e14;
/// WGS-84 Earth rotation rate, rad/s
const OMEGAE_DOT_WGS84: f64 = 7.292_115_146_7e-5;
/// GLONASS Earth rotation rate (PZ-90), rad/s
const OMEGAE_DOT_GLO: f64 = 7.292_115e-5;
/// Second zonal harmonic of the geopotential, used by both GPS relativistic
/// correction context and the GLONASS RK4 integrator
const J2_GLO: f64 = 1.082_62e-3;
/// GLONASS reference ellipsoid equatorial radius, meters
const RE_GLO: f64 = 6_378_136.0;
/// Relativistic correction constant F = -2*sqrt(GM)/c^2
const REL_CORR_F: f64 = -4.442_807_633e-10;
/// BeiDou GEO special rotation angle, 5 degrees
const BDS_GEO_TILT_RAD: f64 = 5.0 * std::f64::consts::PI / 180.0;

/// Iteration cap for the Kepler equation solve
const KEPLER_MAX_ITER: usize = 30;
/// Convergence tolerance for the Kepler equation solve, radians
const KEPLER_TOL: f64 = 1e-10;
/// Fixed RK4 integration step for GLONASS propagation, seconds
const GLO_RK4_STEP: f64 = 60.0;
/// Iteration cap for signal transmission time
const TRANSIT_TIME_MAX_ITER: usize = 5;
/// Convergence tolerance for signal transmission time, seconds
const TRANSIT_TIME_TOL: f64 = 1e-9;

/// The result of evaluating an ephemeris at a particular time
#[derive(Debug, Copy, Clone)]
pub struct EphemerisResult {
    /// ECEF position, meters
    pub pos: ECEF,
    /// ECEF velocity, m/s
    pub vel: Vector3<f64>,
    /// Satellite clock bias relative to system time, seconds
    pub clock_bias: f64,
    /// Satellite clock drift, s/s
    pub clock_drift: f64,
    /// Standard deviation of the broadcast position accuracy estimate, meters
    pub accuracy: f64,
}

/// Errors raised while evaluating a satellite's position
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq)]
pub enum EphSolverError {
    #[error("no ephemeris available for the requested satellite and time")]
    NoEphemeris,
    #[error("satellite transmission time iteration failed to converge")]
    TransitTimeDidNotConverge,
    #[error("precise ephemeris has too few samples to interpolate")]
    NotEnoughPephSamples,
    #[error("kepler equation iteration overflowed the {KEPLER_MAX_ITER} iteration cap without converging")]
    KeplerIterationOverflow,
}

/// Solves Kepler's equation `M = E - e*sin(E)` for the eccentric anomaly `E`
fn solve_kepler(m0: f64, ecc: f64) -> Result<f64, EphSolverError> {
    let mut e = m0;
    for _ in 0..KEPLER_MAX_ITER {
        let delta = (e - ecc * e.sin() - m0) / (1.0 - ecc * e.cos());
        e -= delta;
        if delta.abs() < KEPLER_TOL {
            return Ok(e);
        }
    }
    log::warn!("kepler iteration overflow: failed to converge within {KEPLER_MAX_ITER} iterations");
    Err(EphSolverError::KeplerIterationOverflow)
}

fn eval_kepler(
    k: &Kepler,
    t: &GpsTime,
    gm: f64,
    omegae_dot: f64,
) -> Result<(Vector3<f64>, Vector3<f64>, f64), EphSolverError> {
    let a = k.sqrta * k.sqrta;
    let n0 = (gm / (a * a * a)).sqrt();
    let n = n0 + k.dn;
    let tk = t.diff(&k.toe);
    let mk = k.m0 + n * tk;

    let ek = solve_kepler(mk, k.ecc)?;
    let ek_dot = n / (1.0 - k.ecc * ek.cos());

    let (sin_ek, cos_ek) = ek.sin_cos();
    let sqrt_one_minus_e2 = (1.0 - k.ecc * k.ecc).sqrt();
    let vk = (sqrt_one_minus_e2 * sin_ek).atan2(cos_ek - k.ecc);
    let vk_dot = ek_dot * sqrt_one_minus_e2 / (1.0 - k.ecc * cos_ek);

    let phik = vk + k.argp;
    let (sin_2phi, cos_2phi) = (2.0 * phik).sin_cos();

    let duk = k.cus * sin_2phi + k.cuc * cos_2phi;
    let drk = k.crs * sin_2phi + k.crc * cos_2phi;
    let dik = k.cis * sin_2phi + k.cic * cos_2phi;

    let uk = phik + duk;
    let rk = a * (1.0 - k.ecc * ek.cos()) + drk;
    let ik = k.inc + k.inc_dot * tk + dik;

    let uk_dot = vk_dot + 2.0 * (k.cus * cos_2phi - k.cuc * sin_2phi) * vk_dot;
    let rk_dot = a * k.ecc * ek.sin() * ek_dot + 2.0 * (k.crs * cos_2phi - k.crc * sin_2phi) * vk_dot;
    let ik_dot = k.inc_dot + 2.0 * (k.cis * cos_2phi - k.cic * sin_2phi) * vk_dot;

    let (sin_uk, cos_uk) = uk.sin_cos();
    let xp = rk * cos_uk;
    let yp = rk * sin_uk;
    let xp_dot = rk_dot * cos_uk - rk * sin_uk * uk_dot;
    let yp_dot = rk_dot * sin_uk + rk * cos_uk * uk_dot;

    if k.is_geo {
        // BeiDou GEO satellites broadcast orbital elements in an inclined
        // plane tracking the equator; apply the fixed rotation about the
        // X-axis followed by a rotation about Z at the fixed BDS GEO rate.
        let omegak = k.omega0 + k.omegadot * tk - OMEGAE_DOT_WGS84 * k.toe.tow();
        let omegak_dot = k.omegadot;

        let (sin_ik, cos_ik) = ik.sin_cos();
        let (sin_ok, cos_ok) = omegak.sin_cos();

        let xgk = xp * cos_ok - yp * cos_ik * sin_ok;
        let ygk = xp * sin_ok + yp * cos_ik * cos_ok;
        let zgk = yp * sin_ik;

        let xgk_dot = xp_dot * cos_ok - yp_dot * cos_ik * sin_ok + yp * sin_ik * sin_ok * ik_dot
            - ygk * omegak_dot;
        let ygk_dot = xp_dot * sin_ok + yp_dot * cos_ik * cos_ok - yp * sin_ik * cos_ok * ik_dot
            + xgk * omegak_dot;
        let zgk_dot = yp_dot * sin_ik + yp * cos_ik * ik_dot;

        let (sin_tilt, cos_tilt) = BDS_GEO_TILT_RAD.sin_cos();
        let rz = omegae_dot * tk;
        let (sin_rz, cos_rz) = rz.sin_cos();

        // Rx(tilt) then Rz(omega_e * tk)
        let rot_x = |x: f64, y: f64, z: f64| (x, y * cos_tilt + z * sin_tilt, -y * sin_tilt + z * cos_tilt);
        let (tx, ty, tz) = rot_x(xgk, ygk, zgk);
        let pos = Vector3::new(
            tx * cos_rz + ty * sin_rz,
            -tx * sin_rz + ty * cos_rz,
            tz,
        );

        let (tvx, tvy, tvz) = rot_x(xgk_dot, ygk_dot, zgk_dot);
        let vel = Vector3::new(
            tvx * cos_rz + tvy * sin_rz,
            -tvx * sin_rz + tvy * cos_rz,
            tvz,
        );

        Ok((pos, vel, ek))
    } else {
        let omegak = k.omega0 + (k.omegadot - omegae_dot) * tk - omegae_dot * k.toe.tow();
        let omegak_dot = k.omegadot - omegae_dot;

        let (sin_ik, cos_ik) = ik.sin_cos();
        let (sin_ok, cos_ok) = omegak.sin_cos();

        let x = xp * cos_ok - yp * cos_ik * sin_ok;
        let y = xp * sin_ok + yp * cos_ik * cos_ok;
        let z = yp * sin_ik;

        let vx = xp_dot * cos_ok - yp_dot * cos_ik * sin_ok + yp * sin_ik * sin_ok * ik_dot - y * omegak_dot;
        let vy = xp_dot * sin_ok + yp_dot * cos_ik * cos_ok - yp * sin_ik * cos_ok * ik_dot + x * omegak_dot;
        let vz = yp_dot * sin_ik + yp * cos_ik * ik_dot;

        Ok((Vector3::new(x, y, z), Vector3::new(vx, vy, vz), ek))
    }
}

fn kepler_clock(k: &Kepler, t: &GpsTime, ek: f64) -> (f64, f64) {
    let dt = t.diff(&k.toc);
    let rel = REL_CORR_F * k.ecc * k.sqrta * ek.sin();
    let bias = k.af0 + k.af1 * dt + k.af2 * dt * dt + rel;
    let drift = k.af1 + 2.0 * k.af2 * dt;
    (bias, drift)
}

/// GLONASS equations of motion, for RK4 integration: returns the derivative
/// of the 6-vector (position, velocity) under Earth oblateness (J2) and the
/// supplied luni-solar perturbing acceleration.
fn glo_derivative(state: &[f64; 6], acc: [f64; 3]) -> [f64; 6] {
    let (x, y, z, vx, vy, vz) = (state[0], state[1], state[2], state[3], state[4], state[5]);
    let r2 = x * x + y * y + z * z;
    let r = r2.sqrt();
    let mu_r3 = MU_GLO / (r2 * r);

    let rho2 = (RE_GLO * RE_GLO) / r2;
    let common = 1.5 * J2_GLO * rho2;
    let zr2 = (z * z) / r2;

    let ax = -mu_r3 * x * (1.0 - common * (5.0 * zr2 - 1.0)) + OMEGAE_DOT_GLO * OMEGAE_DOT_GLO * x
        + 2.0 * OMEGAE_DOT_GLO * vy
        + acc[0];
    let ay = -mu_r3 * y * (1.0 - common * (5.0 * zr2 - 1.0)) + OMEGAE_DOT_GLO * OMEGAE_DOT_GLO * y
        - 2.0 * OMEGAE_DOT_GLO * vx
        + acc[1];
    let az = -mu_r3 * z * (1.0 - common * (5.0 * zr2 - 3.0)) + acc[2];

    [vx, vy, vz, ax, ay, az]
}

fn glo_rk4_step(state: [f64; 6], acc: [f64; 3], h: f64) -> [f64; 6] {
    let add = |a: [f64; 6], b: [f64; 6], scale: f64| {
        let mut out = [0.0; 6];
        for i in 0..6 {
            out[i] = a[i] + b[i] * scale;
        }
        out
    };

    let k1 = glo_derivative(&state, acc);
    let k2 = glo_derivative(&add(state, k1, h / 2.0), acc);
    let k3 = glo_derivative(&add(state, k2, h / 2.0), acc);
    let k4 = glo_derivative(&add(state, k3, h), acc);

    let mut out = [0.0; 6];
    for i in 0..6 {
        out[i] = state[i] + (h / 6.0) * (k1[i] + 2.0 * k2[i] + 2.0 * k3[i] + k4[i]);
    }
    out
}

fn eval_glo(g: &Geph, t: &GpsTime) -> (Vector3<f64>, Vector3<f64>) {
    let mut dt = t.diff(&g.toe);
    let mut state = [
        g.pos[0], g.pos[1], g.pos[2], g.vel[0], g.vel[1], g.vel[2],
    ];

    let step = if dt >= 0.0 { GLO_RK4_STEP } else { -GLO_RK4_STEP };
    while dt.abs() > 1e-9 {
        let h = if dt.abs() < step.abs() { dt } else { step };
        state = glo_rk4_step(state, g.acc, h);
        dt -= h;
    }

    (
        Vector3::new(state[0], state[1], state[2]),
        Vector3::new(state[3], state[4], state[5]),
    )
}

fn glo_clock(g: &Geph, t: &GpsTime) -> (f64, f64) {
    let dt = t.diff(&g.toe);
    (g.clock_bias + g.clock_drift * dt, g.clock_drift)
}

fn eval_sbas(s: &Seph, t: &GpsTime) -> (Vector3<f64>, Vector3<f64>, f64, f64) {
    let dt = t.diff(&s.toe);
    let pos = Vector3::new(
        s.pos[0] + s.vel[0] * dt + 0.5 * s.acc[0] * dt * dt,
        s.pos[1] + s.vel[1] * dt + 0.5 * s.acc[1] * dt * dt,
        s.pos[2] + s.vel[2] * dt + 0.5 * s.acc[2] * dt * dt,
    );
    let vel = Vector3::new(
        s.vel[0] + s.acc[0] * dt,
        s.vel[1] + s.acc[1] * dt,
        s.vel[2] + s.acc[2] * dt,
    );
    (pos, vel, s.clock_bias + s.clock_drift * dt, s.clock_drift)
}

/// Lagrange polynomial interpolation of a single scalar sequence at `x`
fn lagrange_interp(xs: &[f64], ys: &[f64], x: f64) -> f64 {
    let n = xs.len();
    let mut result = 0.0;
    for i in 0..n {
        let mut term = ys[i];
        for j in 0..n {
            if i != j {
                term *= (x - xs[j]) / (xs[i] - xs[j]);
            }
        }
        result += term;
    }
    result
}

fn eval_peph(p: &Peph, t: &GpsTime) -> Result<(Vector3<f64>, Vector3<f64>, f64), EphSolverError> {
    let window = p.order + 1;
    if p.samples.len() < 2 {
        return Err(EphSolverError::NotEnoughPephSamples);
    }
    let window = window.min(p.samples.len());

    // Find the sample closest to t, then center a window of `window` points on it.
    let center = p
        .samples
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| {
            a.t.diff(t)
                .abs()
                .partial_cmp(&b.t.diff(t).abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map_or(0, |(i, _)| i);

    let half = window / 2;
    let start = center.saturating_sub(half).min(p.samples.len() - window);
    let slice = &p.samples[start..start + window];

    let xs: Vec<f64> = slice.iter().map(|s| s.t.diff(t)).collect();
    let x = 0.0;

    let mut pos = Vector3::zeros();
    let mut vel = Vector3::zeros();
    for axis in 0..3 {
        let ys: Vec<f64> = slice.iter().map(|s| s.pos[axis]).collect();
        pos[axis] = lagrange_interp(&xs, &ys, x);
        // central difference on the interpolant for velocity
        let eps = 1e-3;
        let v_plus = lagrange_interp(&xs, &ys, x + eps);
        let v_minus = lagrange_interp(&xs, &ys, x - eps);
        vel[axis] = (v_plus - v_minus) / (2.0 * eps);
    }

    // clock is linearly interpolated between the two bracketing samples
    let clock_bias = if let Some(w) = slice.windows(2).find(|w| {
        let d0 = w[0].t.diff(t);
        let d1 = w[1].t.diff(t);
        d0 <= 0.0 && d1 >= 0.0
    }) {
        let d0 = w[0].t.diff(t);
        let d1 = w[1].t.diff(t);
        let frac = if (d1 - d0).abs() < 1e-12 { 0.0 } else { -d0 / (d1 - d0) };
        w[0].clock_bias + frac * (w[1].clock_bias - w[0].clock_bias)
    } else {
        slice[0].clock_bias
    };

    Ok((pos, vel, clock_bias))
}

/// Computes satellite state (position, velocity, clock) from an [`Eph`] at time `t`
pub fn evaluate(eph: &Eph, t: &GpsTime) -> Result<EphemerisResult, EphSolverError> {
    match &eph.kind {
        EphKind::Kepler(k) => {
            let (pos, vel, ek) = eval_kepler(k, t, GM_WGS84, OMEGAE_DOT_WGS84)?;
            let (clock_bias, clock_drift) = kepler_clock(k, t, ek);
            Ok(EphemerisResult {
                pos: ECEF::new(pos.x, pos.y, pos.z),
                vel,
                clock_bias,
                clock_drift,
                accuracy: k.ura,
            })
        }
        EphKind::BdsKepler(k, _) => {
            let (pos, vel, ek) = eval_kepler(k, t, GM_BDS, OMEGAE_DOT_WGS84)?;
            let (clock_bias, clock_drift) = kepler_clock(k, t, ek);
            Ok(EphemerisResult {
                pos: ECEF::new(pos.x, pos.y, pos.z),
                vel,
                clock_bias,
                clock_drift,
                accuracy: k.ura,
            })
        }
        EphKind::GalKepler(k, _) => {
            let (pos, vel, ek) = eval_kepler(k, t, GM_WGS84, OMEGAE_DOT_WGS84)?;
            let (clock_bias, clock_drift) = kepler_clock(k, t, ek);
            Ok(EphemerisResult {
                pos: ECEF::new(pos.x, pos.y, pos.z),
                vel,
                clock_bias,
                clock_drift,
                accuracy: k.ura,
            })
        }
        EphKind::Glo(g) => {
            let (pos, vel) = eval_glo(g, t);
            let (clock_bias, clock_drift) = glo_clock(g, t);
            Ok(EphemerisResult {
                pos: ECEF::new(pos.x, pos.y, pos.z),
                vel,
                clock_bias,
                clock_drift,
                accuracy: 10.0,
            })
        }
        EphKind::Sbas(s) => {
            let (pos, vel, clock_bias, clock_drift) = eval_sbas(s, t);
            Ok(EphemerisResult {
                pos: ECEF::new(pos.x, pos.y, pos.z),
                vel,
                clock_bias,
                clock_drift,
                accuracy: s.ura,
            })
        }
        EphKind::Precise(p) => {
            let (pos, vel, clock_bias) = eval_peph(p, t)?;
            Ok(EphemerisResult {
                pos: ECEF::new(pos.x, pos.y, pos.z),
                vel,
                clock_bias,
                clock_drift: 0.0,
                accuracy: 0.01,
            })
        }
    }
}

/// Looks up ephemerides and evaluates satellite state, accounting for signal
/// transmission time and the resulting Earth rotation between transmission
/// and reception.
pub struct EphemerisSolver<'a> {
    store: &'a EphemerisStore,
}

impl<'a> EphemerisSolver<'a> {
    /// Create a solver backed by the given ephemeris store
    #[must_use]
    pub fn new(store: &'a EphemerisStore) -> EphemerisSolver<'a> {
        EphemerisSolver { store }
    }

    /// Look up and evaluate the given satellite at the exact (already-known)
    /// transmission time `t_tx`
    pub fn query(&self, sv: Sv, t_tx: &GpsTime) -> Result<EphemerisResult, EphSolverError> {
        let eph = self
            .store
            .find_latest(sv, t_tx)
            .ok_or(EphSolverError::NoEphemeris)?;
        evaluate(eph, t_tx)
    }

    /// Given a pseudorange measured at receiver time `t_rx`, iterates to find
    /// the transmission time and returns the satellite state, with the
    /// satellite's position rotated to account for Earth's rotation during
    /// the signal's time of flight.
    pub fn solve_sv_status(
        &self,
        sv: Sv,
        t_rx: &GpsTime,
        pseudorange: f64,
    ) -> Result<EphemerisResult, EphSolverError> {
        let mut transit_time = pseudorange / SPEED_OF_LIGHT;
        let mut t_tx = *t_rx - std::time::Duration::from_secs_f64(transit_time.max(0.0));
        let mut result = self.query(sv, &t_tx)?;

        for _ in 0..TRANSIT_TIME_MAX_ITER {
            let new_transit_time = transit_time - result.clock_bias;
            if (new_transit_time - transit_time).abs() < TRANSIT_TIME_TOL {
                transit_time = new_transit_time;
                break;
            }
            transit_time = new_transit_time;
            t_tx = *t_rx - std::time::Duration::from_secs_f64(transit_time.max(0.0));
            result = self.query(sv, &t_tx)?;
        }

        Ok(rotate_for_earth_rotation(result, transit_time))
    }
}

/// Rotates a satellite's ECEF position/velocity by the Earth rotation that
/// occurred during the signal's time of flight, aligning it with the
/// receiver's ECEF frame at the reception epoch.
fn rotate_for_earth_rotation(mut result: EphemerisResult, transit_time: f64) -> EphemerisResult {
    let theta = OMEGAE_DOT_WGS84 * transit_time;
    let (sin_t, cos_t) = theta.sin_cos();
    let (x, y, z) = (result.pos.x(), result.pos.y(), result.pos.z());
    result.pos = ECEF::new(cos_t * x + sin_t * y, -sin_t * x + cos_t * y, z);
    let (vx, vy, vz) = (result.vel.x, result.vel.y, result.vel.z);
    result.vel = Vector3::new(cos_t * vx + sin_t * vy, -sin_t * vx + cos_t * vy, vz);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ephemeris::default_max_toe, signal::Constellation};
    use float_eq::assert_float_eq;

    fn gps_test_kepler() -> Kepler {
        // Representative GPS broadcast ephemeris in the ballpark of a real
        // MEO orbit (a ~= 26560 km, near-circular, ~55 deg inclination)
        Kepler {
            toe: GpsTime::new(2000, 302_400.0).unwrap(),
            toc: GpsTime::new(2000, 302_400.0).unwrap(),
            sqrta: 5153.6,
            ecc: 0.01,
            inc: 0.9599,
            inc_dot: 0.0,
            argp: 1.0,
            omega0: 1.0,
            omegadot: -8.0e-9,
            m0: 0.5,
            dn: 4.0e-9,
            cuc: 0.0,
            cus: 0.0,
            crc: 0.0,
            crs: 0.0,
            cic: 0.0,
            cis: 0.0,
            af0: 1e-5,
            af1: 1e-12,
            af2: 0.0,
            tgd: [0.0, 0.0],
            ura: 2.0,
            is_geo: false,
        }
    }

    #[test]
    fn gps_kepler_orbit_radius_sane() {
        let k = gps_test_kepler();
        let sv = Sv::new(Constellation::Gps, 1);
        let eph = Eph {
            sv,
            kind: EphKind::Kepler(k),
            max_toe: default_max_toe(sv),
            iod: 1,
        };
        let result = evaluate(&eph, &k.toe).unwrap();
        let r = (result.pos.x().powi(2) + result.pos.y().powi(2) + result.pos.z().powi(2)).sqrt();
        // GPS MEO orbital radius is roughly 26,560 km
        assert!((20_000_000.0..30_000_000.0).contains(&r), "radius {r} out of range");
    }

    #[test]
    fn bds_geo_rotation_changes_position() {
        let mut k = gps_test_kepler();
        k.is_geo = false;
        let sv = Sv::new(Constellation::Bds, 1);
        let eph_normal = Eph {
            sv,
            kind: EphKind::BdsKepler(k, BdsMsgType::D1D2),
            max_toe: default_max_toe(sv),
            iod: 1,
        };
        k.is_geo = true;
        let eph_geo = Eph {
            sv,
            kind: EphKind::BdsKepler(k, BdsMsgType::D1D2),
            max_toe: default_max_toe(sv),
            iod: 1,
        };
        let r1 = evaluate(&eph_normal, &k.toe).unwrap();
        let r2 = evaluate(&eph_geo, &k.toe).unwrap();
        assert!(r1.pos.x() != r2.pos.x() || r1.pos.z() != r2.pos.z());
    }

    #[test]
    fn glo_rk4_short_propagation_is_smooth() {
        let toe = GpsTime::new(2000, 0.0).unwrap();
        let g = Geph {
            toe,
            pos: [7_000_000.0, 12_000_000.0, 20_000_000.0],
            vel: [-2000.0, 1000.0, -500.0],
            acc: [1e-6, -1e-6, 2e-6],
            clock_bias: 1e-6,
            clock_drift: 1e-13,
            fcn: 3,
        };
        let sv = Sv::new(Constellation::Glo, 1);
        let eph = Eph {
            sv,
            kind: EphKind::Glo(g),
            max_toe: default_max_toe(sv),
            iod: 1,
        };
        let t = GpsTime::new(2000, 120.0).unwrap();
        let result = evaluate(&eph, &t).unwrap();
        let moved = (result.pos.x() - g.pos[0]).abs() > 1.0;
        assert!(moved);
    }

    #[test]
    fn peph_interpolates_between_samples() {
        let t0 = GpsTime::new(2000, 0.0).unwrap();
        let samples: Vec<_> = (0..5)
            .map(|i| crate::ephemeris::PephSample {
                t: GpsTime::new(2000, i as f64 * 900.0).unwrap(),
                pos: [1.0e7 + i as f64 * 1000.0, 2.0e7, 3.0e7],
                clock_bias: 1e-6,
            })
            .collect();
        let p = Peph { samples, order: 3 };
        let sv = Sv::new(Constellation::Gps, 1);
        let eph = Eph {
            sv,
            kind: EphKind::Precise(p),
            max_toe: default_max_toe(sv),
            iod: 1,
        };
        let mid = GpsTime::new(2000, 450.0).unwrap();
        let result = evaluate(&eph, &mid).unwrap();
        assert_float_eq!(result.pos.x(), 1.0e7 + 500.0, abs <= 50.0);
        let _ = t0;
    }

    #[test]
    fn kepler_overflows_on_non_physical_eccentricity() {
        // A physical orbit has ecc in [0, 1); a value this far outside that
        // range makes the Newton iteration diverge instead of converge.
        let err = solve_kepler(0.5, 5.0).unwrap_err();
        assert_eq!(err, EphSolverError::KeplerIterationOverflow);
    }
}
