// Copyright (c) 2025 Swift Navigation Inc.
// Contact: Swift Navigation <dev@swiftnav.com>
//
// This source is subject to the license found in the file 'LICENSE' which must
// be be distributed together with this source. All other rights reserved.
//
// THIS CODE AND INFORMATION IS PROVIDED "AS IS" WITHOUT WARRANTY OF ANY KIND,
// EITHER EXPRESSED OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE IMPLIED
// WARRANTIES OF MERCHANTABILITY AND/OR FITNESS FOR A PARTICULAR PURPOSE.

use nalgebra::Matrix3;

use crate::coords::LLHRadians;

/// We define a `const` max function since [`std::cmp::max`] isn't `const`
pub(crate) const fn compile_time_max_u16(a: u16, b: u16) -> u16 {
    if b < a {
        a
    } else {
        b
    }
}

/// A `const` square root, computed by Newton's method, since ellipsoid
/// eccentricity needs to be derived at compile time from `A` and `IF`.
pub(crate) const fn compile_time_sqrt(x: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    let mut guess = x;
    let mut i = 0;
    while i < 64 {
        guess = 0.5 * (guess + x / guess);
        i += 1;
    }
    guess
}

/// Rotation matrix that takes an ECEF vector into the local North-East-Down
/// frame at the given geodetic position.
pub(crate) fn ecef2ned_matrix(llh: LLHRadians) -> Matrix3<f64> {
    let (sin_lat, cos_lat) = llh.latitude().sin_cos();
    let (sin_lon, cos_lon) = llh.longitude().sin_cos();
    Matrix3::new(
        -sin_lat * cos_lon,
        -sin_lat * sin_lon,
        cos_lat,
        -sin_lon,
        cos_lon,
        0.0,
        -cos_lat * cos_lon,
        -cos_lat * sin_lon,
        -sin_lat,
    )
}
