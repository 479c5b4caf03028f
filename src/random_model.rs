// Copyright (c) 2025 Swift Navigation Inc.
// Contact: Swift Navigation <dev@swiftnav.com>
//
// This source is subject to the license found in the file 'LICENSE' which must
// be be distributed together with this source. All other rights reserved.
//
// THIS CODE AND INFORMATION IS PROVIDED "AS IS" WITHOUT WARRANTY OF ANY KIND,
// EITHER EXPRESSED OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE IMPLIED
// WARRANTIES OF MERCHANTABILITY AND/OR FITNESS FOR A PARTICULAR PURPOSE.
//! Measurement variance (random) models
//!
//! Before an observation's pseudorange and carrier phase can be weighted in
//! a least-squares solve, a variance has to be assigned to them. [`RandomModel`]
//! is the strategy used to do that: a fixed variance for every signal, one
//! that grows as a satellite nears the horizon, one driven by the reported
//! SNR, or an arbitrary caller-supplied function.

use std::sync::Arc;

/// Default pseudorange variance used by [`RandomModel::Standard`], m^2
pub const STANDARD_PSEUDORANGE_VAR: f64 = 1.0;
/// Default carrier phase variance used by [`RandomModel::Standard`], cycles^2
pub const STANDARD_CARRIER_VAR: f64 = 0.02;

/// A variance pair assigned to a single observation
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Variance {
    /// Pseudorange variance, m^2
    pub pseudorange: f64,
    /// Carrier phase variance, cycles^2
    pub carrier: f64,
}

/// Strategy for assigning measurement variances to raw observations
#[derive(Clone)]
pub enum RandomModel {
    /// Fixed variance for every observation, regardless of geometry or signal quality
    Standard {
        pseudorange_var: f64,
        carrier_var: f64,
    },
    /// `sigma^2(el) = a^2 + b^2 / sin^2(el)`, one `(a, b)` pair each for
    /// pseudorange and carrier
    ElevationDependent {
        pseudorange_a: f64,
        pseudorange_b: f64,
        carrier_a: f64,
        carrier_b: f64,
    },
    /// `sigma^2 = k * 10^(-SNR/10)`, one `k` each for pseudorange and carrier
    SnrDependent { pseudorange_k: f64, carrier_k: f64 },
    /// An arbitrary caller-supplied function from (elevation, SNR) to a variance pair
    Custom(Arc<dyn Fn(f64, f64) -> Variance + Send + Sync>),
}

impl std::fmt::Debug for RandomModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RandomModel::Standard { pseudorange_var, carrier_var } => f
                .debug_struct("Standard")
                .field("pseudorange_var", pseudorange_var)
                .field("carrier_var", carrier_var)
                .finish(),
            RandomModel::ElevationDependent {
                pseudorange_a,
                pseudorange_b,
                carrier_a,
                carrier_b,
            } => f
                .debug_struct("ElevationDependent")
                .field("pseudorange_a", pseudorange_a)
                .field("pseudorange_b", pseudorange_b)
                .field("carrier_a", carrier_a)
                .field("carrier_b", carrier_b)
                .finish(),
            RandomModel::SnrDependent { pseudorange_k, carrier_k } => f
                .debug_struct("SnrDependent")
                .field("pseudorange_k", pseudorange_k)
                .field("carrier_k", carrier_k)
                .finish(),
            RandomModel::Custom(_) => f.debug_tuple("Custom").field(&"<fn>").finish(),
        }
    }
}

impl Default for RandomModel {
    fn default() -> RandomModel {
        RandomModel::Standard {
            pseudorange_var: STANDARD_PSEUDORANGE_VAR,
            carrier_var: STANDARD_CARRIER_VAR,
        }
    }
}

impl RandomModel {
    /// Assigns a variance to an observation given its elevation (radians)
    /// and carrier-to-noise ratio (dB-Hz)
    #[must_use]
    pub fn variance(&self, elevation: f64, snr: f64) -> Variance {
        match self {
            RandomModel::Standard { pseudorange_var, carrier_var } => Variance {
                pseudorange: *pseudorange_var,
                carrier: *carrier_var,
            },
            RandomModel::ElevationDependent {
                pseudorange_a,
                pseudorange_b,
                carrier_a,
                carrier_b,
            } => {
                let sin_el = elevation.sin().max(1e-3);
                Variance {
                    pseudorange: pseudorange_a.powi(2) + pseudorange_b.powi(2) / sin_el.powi(2),
                    carrier: carrier_a.powi(2) + carrier_b.powi(2) / sin_el.powi(2),
                }
            }
            RandomModel::SnrDependent { pseudorange_k, carrier_k } => {
                let factor = 10f64.powf(-snr / 10.0);
                Variance {
                    pseudorange: pseudorange_k * factor,
                    carrier: carrier_k * factor,
                }
            }
            RandomModel::Custom(f) => f(elevation, snr),
        }
    }
}
