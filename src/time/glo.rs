// Copyright (c) 2025 Swift Navigation Inc.
// Contact: Swift Navigation <dev@swiftnav.com>
//
// This source is subject to the license found in the file 'LICENSE' which must
// be be distributed together with this source. All other rights reserved.
//
// THIS CODE AND INFORMATION IS PROVIDED "AS IS" WITHOUT WARRANTY OF ANY KIND,
// EITHER EXPRESSED OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE IMPLIED
// WARRANTIES OF MERCHANTABILITY AND/OR FITNESS FOR A PARTICULAR PURPOSE.
//! GLONASS System Time
//!
//! GLONASS broadcasts its own time scale, offset from UTC by a constant three
//! hours (the Moscow time zone) rather than by a week/second epoch offset
//! like [`GalTime`](super::GalTime) or [`BdsTime`](super::BdsTime). There is
//! no leap-second-free GLONASS epoch to count from, so [`GloTime`] is kept as
//! broken-down calendar fields (like [`UtcTime`]) rather than a week/tow pair,
//! and conversions to/from [`GpsTime`] are routed through UTC.

use std::time::Duration;

use crate::time::{GpsTime, UtcParams, UtcTime};

const GLO_UTC_OFFSET: Duration = Duration::from_secs(3 * 3600);

/// GLONASS System Time: UTC plus a constant three hour offset
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct GloTime(UtcTime);

impl GloTime {
    /// Construct a [`GloTime`] from its calendar fields, as broadcast/displayed
    /// by a GLONASS receiver
    #[must_use]
    pub fn from_parts(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: f64) -> GloTime {
        GloTime(UtcTime::from_parts(year, month, day, hour, minute, second))
    }

    /// Converts a [`GpsTime`] into [`GloTime`] using broadcast UTC parameters
    #[must_use]
    pub fn from_gps(gps: GpsTime, utc_params: &UtcParams) -> GloTime {
        GloTime((gps + GLO_UTC_OFFSET).to_utc(utc_params))
    }

    /// Converts a [`GpsTime`] into [`GloTime`] using the hardcoded leap second table
    #[must_use]
    pub fn from_gps_hardcoded(gps: GpsTime) -> GloTime {
        GloTime((gps + GLO_UTC_OFFSET).to_utc_hardcoded())
    }

    /// Converts this [`GloTime`] into [`GpsTime`] using broadcast UTC parameters
    #[must_use]
    pub fn to_gps(self, utc_params: &UtcParams) -> GpsTime {
        self.0.to_gps(utc_params) - GLO_UTC_OFFSET
    }

    /// Converts this [`GloTime`] into [`GpsTime`] using the hardcoded leap second table
    #[must_use]
    pub fn to_gps_hardcoded(self) -> GpsTime {
        self.0.to_gps_hardcoded() - GLO_UTC_OFFSET
    }

    /// The calendar year
    #[must_use]
    pub fn year(&self) -> u16 {
        self.0.year()
    }

    /// The calendar month (1-12)
    #[must_use]
    pub fn month(&self) -> u8 {
        self.0.month()
    }

    /// The day of the month (1-31)
    #[must_use]
    pub fn day_of_month(&self) -> u8 {
        self.0.day_of_month()
    }

    /// The hour of the day (0-23)
    #[must_use]
    pub fn hour(&self) -> u8 {
        self.0.hour()
    }

    /// The minute of the hour (0-59)
    #[must_use]
    pub fn minute(&self) -> u8 {
        self.0.minute()
    }

    /// The seconds of the minute, including the fractional part
    #[must_use]
    pub fn seconds(&self) -> f64 {
        self.0.seconds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn round_trip_hardcoded() {
        let gps = UtcTime::from_parts(2020, 6, 1, 12, 0, 0.0).to_gps_hardcoded();
        let glo = GloTime::from_gps_hardcoded(gps);
        assert_eq!(glo.hour(), 15);
        let round_trip = glo.to_gps_hardcoded();
        assert_float_eq!(gps.diff(&round_trip), 0.0, abs <= 1e-6);
    }

    #[test]
    fn midnight_rollover() {
        let gps = UtcTime::from_parts(2020, 6, 1, 22, 0, 0.0).to_gps_hardcoded();
        let glo = GloTime::from_gps_hardcoded(gps);
        assert_eq!(glo.day_of_month(), 2);
        assert_eq!(glo.hour(), 1);
    }
}
