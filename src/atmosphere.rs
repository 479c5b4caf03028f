// Copyright (c) 2025 Swift Navigation Inc.
// Contact: Swift Navigation <dev@swiftnav.com>
//
// This source is subject to the license found in the file 'LICENSE' which must
// be be distributed together with this source. All other rights reserved.
//
// THIS CODE AND INFORMATION IS PROVIDED "AS IS" WITHOUT WARRANTY OF ANY KIND,
// EITHER EXPRESSED OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE IMPLIED
// WARRANTIES OF MERCHANTABILITY AND/OR FITNESS FOR A PARTICULAR PURPOSE.
//! Tropospheric and ionospheric delay models
//!
//! Two independent corrections are needed to turn a raw pseudorange into a
//! geometric range: a tropospheric delay (from the neutral atmosphere, the
//! same for every frequency) and an ionospheric delay (from the charged
//! upper atmosphere, frequency dependent). [`Troposphere`] implements the
//! Saastamoinen model mapped with the Niell Mapping Function; [`Ionosphere`]
//! implements the Klobuchar model broadcast by GPS.

use crate::coords::LLHRadians;

const ZEROC: f64 = 273.15;

/// Saastamoinen zenith delay, mapped to the line of sight elevation with the
/// Niell Mapping Function (NMF)
#[derive(Debug, Copy, Clone, Default)]
pub struct TroposphereResult {
    /// Total slant delay (dry + wet), meters
    pub delay: f64,
    /// Variance of the delay estimate, m^2
    pub variance: f64,
}

/// NMF hydrostatic/wet coefficients, tabulated at 15/30/45/60/75 degrees
/// latitude and linearly interpolated between table rows
const NMF_COEF: [[f64; 5]; 9] = [
    [1.2769934e-3, 1.2683230e-3, 1.2465397e-3, 1.2196049e-3, 1.2045996e-3],
    [2.9153695e-3, 2.9152299e-3, 2.9288445e-3, 2.9022565e-3, 2.9024912e-3],
    [62.610505e-3, 62.837393e-3, 63.721774e-3, 63.824265e-3, 64.258455e-3],
    [0.0, 1.2709626e-5, 2.6523662e-5, 3.4000452e-5, 4.1202191e-5],
    [0.0, 2.1414979e-5, 3.0160779e-5, 7.2562722e-5, 11.723375e-5],
    [0.0, 9.0128400e-5, 4.3497037e-5, 84.795348e-5, 170.37206e-5],
    [5.8021897e-4, 5.6794847e-4, 5.8118019e-4, 5.9727542e-4, 6.1641693e-4],
    [1.4275268e-3, 1.5138625e-3, 1.4572752e-3, 1.5007428e-3, 1.7599082e-3],
    [4.3472961e-2, 4.6729510e-2, 4.3908931e-2, 4.4626982e-2, 5.4736038e-2],
];

fn map_herring(el: f64, a: f64, b: f64, c: f64) -> f64 {
    let sinel = el.sin();
    (1.0 + a / (1.0 + b / (1.0 + c))) / (sinel + a / (sinel + b / (sinel + c)))
}

fn interp_coef(coef: &[f64; 5], lat_deg: f64) -> f64 {
    let i = (lat_deg / 15.0) as i32;
    if i < 1 {
        coef[0]
    } else if i > 4 {
        coef[4]
    } else {
        let i = i as usize;
        coef[i - 1] * (1.0 - lat_deg / 15.0 + i as f64) + coef[i] * (lat_deg / 15.0 - i as f64)
    }
}

/// Saastamoinen tropospheric delay model with Niell Mapping Function
#[derive(Debug, Default, Copy, Clone)]
pub struct Troposphere;

impl Troposphere {
    /// Computes the slant tropospheric delay at `pos`, for a satellite at
    /// elevation `el` (radians), on day-of-year `doy` (1-366)
    #[must_use]
    pub fn delay(&self, pos: &LLHRadians, el: f64, doy: f64) -> TroposphereResult {
        let lat_deg = pos.latitude().to_degrees();
        let hgt = pos.height();

        if !(-100.0..=20_000.0).contains(&hgt) || el < 0.0 {
            return TroposphereResult::default();
        }

        let y = (doy - 28.0) / 365.25 + if lat_deg < 0.0 { 0.5 } else { 0.0 };
        let cosy = (2.0 * std::f64::consts::PI * y).cos();
        let lat_abs = lat_deg.abs();

        let mut ah = [0.0; 3];
        let mut aw = [0.0; 3];
        for i in 0..3 {
            ah[i] = interp_coef(&NMF_COEF[i], lat_abs) - interp_coef(&NMF_COEF[i + 3], lat_abs) * cosy;
            aw[i] = interp_coef(&NMF_COEF[i + 6], lat_abs);
        }

        let dm = (1.0 / el.sin() - map_herring(el, 2.53e-5, 5.49e-3, 1.14e-3)) * hgt / 1e3;
        let dry_map = map_herring(el, ah[0], ah[1], ah[2]) + dm;
        let wet_map = map_herring(el, aw[0], aw[1], aw[2]);

        let temp = 15.0 - 6.5e-3 * hgt + ZEROC;
        let pres = 1013.25 * (288.15 / temp).powf(-5.255877);
        let e = 6.108 * 0.7 * ((17.15 * temp - 4684.0) / (temp - 38.45)).exp();

        let dry_ztd = 0.0022768 * pres / (1.0 - 0.00266 * (2.0 * pos.latitude()).cos() - 0.00028 * hgt / 1e3);
        let wet_ztd = 0.002277 * (1255.0 / temp + 0.05) * e;

        const ERR_SAAS: f64 = 0.3;
        TroposphereResult {
            delay: dry_map * dry_ztd + wet_map * wet_ztd,
            variance: (ERR_SAAS / (el.sin() + 0.1)).powi(2),
        }
    }
}

/// Klobuchar ionospheric model parameters, as broadcast by GPS LNAV subframe
/// 4 page 18
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct KlobucharParams {
    pub a0: f64,
    pub a1: f64,
    pub a2: f64,
    pub a3: f64,
    pub b0: f64,
    pub b1: f64,
    pub b2: f64,
    pub b3: f64,
}

/// Error decoding Klobuchar parameters from a raw subframe
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
#[error("failed to decode ionosphere parameters from subframe")]
pub struct IonoDecodeFailure;

fn sign_extend(value: u32, bits: u32) -> i32 {
    let shift = 32 - bits;
    ((value << shift) as i32) >> shift
}

/// Decodes Klobuchar parameters from GPS LNAV subframe 4, page 18, words 3-5
/// (the words as received, MSB-aligned in the low 24 bits of each `u32`, data
/// ID and parity stripped).
///
/// # References
/// IS-GPS-200, Section 20.3.3.5.1.7 and Figure 20-10
pub fn decode_klobuchar_subframe(words: &[u32; 8]) -> Result<KlobucharParams, IonoDecodeFailure> {
    if words.iter().all(|w| *w == 0) {
        return Err(IonoDecodeFailure);
    }

    // word[2]: alpha0 (bits 1-8), alpha1 (bits 9-16), alpha2 (bits 17-24)
    let w2 = words[2];
    let alpha0_raw = sign_extend((w2 >> 16) & 0xff, 8);
    let alpha1_raw = sign_extend((w2 >> 8) & 0xff, 8);
    let alpha2_raw = sign_extend(w2 & 0xff, 8);

    // word[3]: alpha3 (bits 1-8), beta0 (bits 9-16), beta1 (bits 17-24)
    let w3 = words[3];
    let alpha3_raw = sign_extend((w3 >> 16) & 0xff, 8);
    let beta0_raw = sign_extend((w3 >> 8) & 0xff, 8);
    let beta1_raw = sign_extend(w3 & 0xff, 8);

    // word[4]: beta2 (bits 1-8), beta3 (bits 9-16)
    let w4 = words[4];
    let beta2_raw = sign_extend((w4 >> 16) & 0xff, 8);
    let beta3_raw = sign_extend((w4 >> 8) & 0xff, 8);

    Ok(KlobucharParams {
        a0: f64::from(alpha0_raw) * 2f64.powi(-30),
        a1: f64::from(alpha1_raw) * 2f64.powi(-27),
        a2: f64::from(alpha2_raw) * 2f64.powi(-24),
        a3: f64::from(alpha3_raw) * 2f64.powi(-24),
        b0: f64::from(beta0_raw) * 2f64.powi(11),
        b1: f64::from(beta1_raw) * 2f64.powi(14),
        b2: f64::from(beta2_raw) * 2f64.powi(16),
        b3: f64::from(beta3_raw) * 2f64.powi(16),
    })
}

/// The Klobuchar ionospheric delay model
#[derive(Debug, Copy, Clone, Default)]
pub struct Ionosphere {
    params: KlobucharParams,
}

impl Ionosphere {
    /// Construct an ionosphere model from already-decoded parameters
    #[must_use]
    pub fn new(params: KlobucharParams) -> Ionosphere {
        Ionosphere { params }
    }

    /// Calculates the L1 ionospheric delay using the Klobuchar model.
    ///
    /// `t_gps` is the GPS time of week in seconds, `lat_u`/`lon_u` the
    /// receiver's geodetic position in radians, `az`/`el` the satellite's
    /// azimuth and elevation in radians.
    ///
    /// Returns the delay distance in meters, for the GPS L1 frequency.
    #[must_use]
    pub fn calc_delay(&self, t_gps: f64, lat_u: f64, lon_u: f64, az: f64, el: f64) -> f64 {
        let p = &self.params;
        let pi = std::f64::consts::PI;

        let lat_s = lat_u / pi;
        let lon_s = lon_u / pi;
        let el_s = el / pi;

        let psi = 0.0137 / (el_s + 0.11) - 0.022;

        let mut phi_i = lat_s + psi * az.cos();
        phi_i = phi_i.clamp(-0.416, 0.416);

        let lambda_i = lon_s + psi * az.sin() / (phi_i * pi).cos();

        let phi_m = phi_i + 0.064 * ((lambda_i - 1.617) * pi).cos();

        let mut t = 4.32e4 * lambda_i + t_gps;
        t -= (t / 86400.0).floor() * 86400.0;

        let amp = (p.a0 + p.a1 * phi_m + p.a2 * phi_m.powi(2) + p.a3 * phi_m.powi(3)).max(0.0);
        let per = (p.b0 + p.b1 * phi_m + p.b2 * phi_m.powi(2) + p.b3 * phi_m.powi(3)).max(72_000.0);

        let x = 2.0 * pi * (t - 50_400.0) / per;
        let f = 1.0 + 16.0 * (0.53 - el_s).powi(3);

        const SPEED_OF_LIGHT: f64 = crate::signal::consts::SPEED_OF_LIGHT;
        if x.abs() < 1.57 {
            f * SPEED_OF_LIGHT * (5e-9 + amp * (1.0 - x.powi(2) / 2.0 + x.powi(4) / 24.0))
        } else {
            f * SPEED_OF_LIGHT * 5e-9
        }
    }
}

/// Ionosphere correction model selection: `None` applies no correction,
/// `Klobuchar` uses the broadcast single-frequency model, `Stec` selects
/// dual-frequency slant total electron content correction.
#[derive(Debug, Clone, Default)]
pub enum IonosphereModel {
    #[default]
    None,
    Klobuchar(Ionosphere),
    Stec,
}

impl IonosphereModel {
    /// L1 ionospheric delay in meters for the given receiver/satellite
    /// geometry. `Stec` is not yet implemented; it logs a warning and
    /// returns `0.0` rather than silently applying no correction.
    #[must_use]
    pub fn delay(&self, t_gps: f64, lat_u: f64, lon_u: f64, az: f64, el: f64) -> f64 {
        match self {
            IonosphereModel::None => 0.0,
            IonosphereModel::Klobuchar(iono) => iono.calc_delay(t_gps, lat_u, lon_u, az, el),
            IonosphereModel::Stec => {
                log::warn!("STEC ionosphere correction is not implemented; applying zero delay");
                0.0
            }
        }
    }
}
