#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use time::Time;

use crate::{
    error::Error,
    fields::{parse_float, parse_int, parse_latitude, parse_longitude, parse_time},
    frame::RawSentence,
    sentences::Decode,
};

/// GGA - Global Positioning System Fix Data
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gga_global_positioning_system_fix_data>
///
/// ```text
///         1         2       3 4        5 6 7  8   9  10
///         |         |       | |        | | |  |   |   |
///  $--GGA,hhmmss.ss,ddmm.mm,a,dddmm.mm,a,x,xx,x.x,x.x,M,...*hh
/// ```
///
/// The altitude unit in field 10 must be `M`; the geoidal-separation fields
/// past it are not decoded.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct GGA {
    /// Fix time in UTC
    pub fix_time: Option<Time>,
    /// Latitude in degrees, negative south of the equator
    pub latitude: Option<f64>,
    /// Longitude in degrees, negative west of Greenwich
    pub longitude: Option<f64>,
    /// GPS quality indicator (0 = no fix, 1 = GPS fix, 2 = differential fix)
    pub fix_quality: Option<u8>,
    /// Number of satellites in use
    pub satellite_count: Option<u8>,
    /// Horizontal dilution of precision
    pub hdop: Option<f32>,
    /// Antenna altitude above mean sea level in meters
    pub altitude: Option<f32>,
}

impl Decode for GGA {
    fn decode(sentence: &RawSentence<'_>) -> Result<Self, Error> {
        let fix_time = parse_time(sentence.field(1));
        let latitude = parse_latitude(sentence.field(2), sentence.field(3))?;
        let longitude = parse_longitude(sentence.field(4), sentence.field(5))?;
        let fix_quality = parse_int(sentence.field(6));
        let satellite_count = parse_int(sentence.field(7));
        let hdop = parse_float(sentence.field(8));
        let altitude = parse_float(sentence.field(9));

        let unit = sentence.field(10);
        if !unit.eq_ignore_ascii_case("M") {
            return Err(Error::FieldValidation {
                field: "altitude unit",
                value: unit.to_string(),
                expected: "'M'",
            });
        }

        Ok(Self {
            fix_time,
            latitude,
            longitude,
            fix_quality,
            satellite_count,
            hdop,
            altitude,
        })
    }
}
