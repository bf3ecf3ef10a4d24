#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use time::Time;

use crate::{
    error::Error,
    fields::{mode_char, parse_latitude, parse_longitude, parse_time},
    frame::RawSentence,
    sentences::{Decode, require_status},
};

/// GLL - Geographic Position - Latitude/Longitude
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gll_geographic_position_latitudelongitude>
///
/// ```text
///         1       2 3        4 5         6 7
///         |       | |        | |         | |
///  $--GLL,ddmm.mm,a,dddmm.mm,a,hhmmss.ss,a,m*hh
/// ```
///
/// The status in field 6 must be `A`; the FAA mode in field 7 is a later
/// addition and absent on older equipment.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct GLL {
    /// Latitude in degrees, negative south of the equator
    pub latitude: Option<f64>,
    /// Longitude in degrees, negative west of Greenwich
    pub longitude: Option<f64>,
    /// Fix time in UTC
    pub fix_time: Option<Time>,
    /// FAA mode indicator, when the talker sends one
    pub faa_mode: Option<char>,
}

impl Decode for GLL {
    fn decode(sentence: &RawSentence<'_>) -> Result<Self, Error> {
        require_status("GLL", sentence.field(6))?;

        Ok(Self {
            latitude: parse_latitude(sentence.field(1), sentence.field(2))?,
            longitude: parse_longitude(sentence.field(3), sentence.field(4))?,
            fix_time: parse_time(sentence.field(5)),
            faa_mode: mode_char(sentence.field(7)),
        })
    }
}
