#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;

use crate::{
    error::Error,
    fields::{parse_date_time, parse_float, parse_latitude, parse_longitude},
    frame::RawSentence,
    sentences::{Decode, require_status},
};

/// RMC - Recommended Minimum Navigation Information
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_rmc_recommended_minimum_navigation_information>
///
/// ```text
///         1         2 3       4 5        6 7   8   9      10  11
///         |         | |       | |        | |   |   |      |   |
///  $--RMC,hhmmss.ss,A,ddmm.mm,a,dddmm.mm,a,x.x,x.x,ddmmyy,x.x,a*hh
/// ```
///
/// The status in field 2 must be `A`. Date and time combine into one
/// timestamp, so a sentence without a valid date/time pair does not decode.
/// Magnetic variation is signed here: negative when the direction letter in
/// field 11 is `W`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct RMC {
    /// Fix date and time in UTC
    pub fix_datetime: PrimitiveDateTime,
    /// Latitude in degrees, negative south of the equator
    pub latitude: Option<f64>,
    /// Longitude in degrees, negative west of Greenwich
    pub longitude: Option<f64>,
    /// Speed over ground in knots
    pub speed_over_ground: Option<f32>,
    /// Course over ground in degrees true
    pub course_over_ground: Option<f32>,
    /// Magnetic variation in degrees, negative west
    pub magnetic_variation: Option<f32>,
}

impl Decode for RMC {
    fn decode(sentence: &RawSentence<'_>) -> Result<Self, Error> {
        require_status("RMC", sentence.field(2))?;

        let fix_datetime = parse_date_time(sentence.field(9), sentence.field(1))?;

        let mut magnetic_variation = parse_float(sentence.field(10));
        if sentence.field(11).eq_ignore_ascii_case("W") {
            magnetic_variation = magnetic_variation.map(|v| -v);
        }

        Ok(Self {
            fix_datetime,
            latitude: parse_latitude(sentence.field(3), sentence.field(4))?,
            longitude: parse_longitude(sentence.field(5), sentence.field(6))?,
            speed_over_ground: parse_float(sentence.field(7)),
            course_over_ground: parse_float(sentence.field(8)),
            magnetic_variation,
        })
    }
}
