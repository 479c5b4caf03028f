use crate::math::{compile_time_sqrt, ecef2ned_matrix};

use super::{AzimuthElevation, LLHRadians, ECEF, NED};

/// Ellipsoid
///
/// An ellipsoid can be defined in terms of the semi-major axis and a second
/// parameter, here we choose to use the inverse flattening term. The other
/// parameters are derived from these two values.
pub trait Ellipsoid {
    /// Semi-major axis of the Earth in meters.
    const A: f64;
    /// Inverse flattening of the Earth.
    const IF: f64;

    /// The flattening of the Earth.
    const F: f64 = 1.0 / Self::IF;
    /// Semi-minor axis of the Earth in meters.
    const B: f64 = Self::A * (1.0 - Self::F);
    /// Eccentricity of the Earth,  where e^2 = 2f - f^2
    const E: f64 = compile_time_sqrt(2.0 * Self::F - Self::F * Self::F);

    /// Converts an [`ECEF`] position into geodetic coordinates by fixed-point
    /// iteration, repeating until the estimated height changes by less than
    /// `1e-4` m.
    fn ecef2llh(pos: &ECEF) -> LLHRadians {
        let (x, y, z) = (pos.x(), pos.y(), pos.z());
        let lon = y.atan2(x);
        let p = (x * x + y * y).sqrt();

        if p < 1e-12 {
            let lat = if z >= 0.0 {
                std::f64::consts::FRAC_PI_2
            } else {
                -std::f64::consts::FRAC_PI_2
            };
            return LLHRadians::new(lat, lon, z.abs() - Self::B);
        }

        let mut lat = z.atan2(p * (1.0 - Self::E * Self::E));
        let mut h = 0.0;
        for _ in 0..10 {
            let n = Self::A / (1.0 - Self::E * Self::E * lat.sin() * lat.sin()).sqrt();
            let new_h = p / lat.cos() - n;
            let new_lat = z.atan2(p * (1.0 - Self::E * Self::E * n / (n + new_h)));
            let converged = (new_h - h).abs() < 1e-4;
            lat = new_lat;
            h = new_h;
            if converged {
                break;
            }
        }

        LLHRadians::new(lat, lon, h)
    }

    /// Rotates a vector given in ECEF coordinates (e.g. a velocity, or a
    /// position difference) into the local North-East-Down frame at `point`.
    fn ecef2ned(vector: &ECEF, point: &ECEF) -> NED {
        let m = ecef2ned_matrix(Self::ecef2llh(point));
        (m * vector.as_vector_ref()).into()
    }

    /// Computes the azimuth and elevation of `point` as seen from `reference`.
    fn ecef2azel(point: &ECEF, reference: &ECEF) -> AzimuthElevation {
        let diff = *point - *reference;
        let ned = Self::ecef2ned(&diff, reference);
        let horizontal = (ned.n() * ned.n() + ned.e() * ned.e()).sqrt();
        let mut az = ned.e().atan2(ned.n());
        if az < 0.0 {
            az += 2.0 * std::f64::consts::PI;
        }
        let el = (-ned.d()).atan2(horizontal);
        AzimuthElevation::new(az, el)
    }
}

/// WGS84 Parameters
///
/// Parameters defining the WGS84 ellipsoid. See <https://earth-info.nga.mil/?dir=wgs84&action=wgs84>
pub struct WGS84;

impl Ellipsoid for WGS84 {
    const A: f64 = 6_378_137.0;
    const IF: f64 = 298.257_223_563;
}

/// GRS80 Parameters
///
/// Parameters defining the GRS80 ellipsoid. The ellipsoid is defined in terms
/// of the semi-major axis and 3 physical constants making the inverse flattening
/// a derived value. Here we use the calulated value of the inverse flattening as
/// if it were a defining value. See <https://geoweb.mit.edu/~tah/12.221_2005/grs80_corr.pdf>
pub struct GRS80;

impl Ellipsoid for GRS80 {
    const A: f64 = 6_378_137.0;
    const IF: f64 = 298.257_222_100_882_7;
}
