#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{error::Error, fields::parse_float, frame::RawSentence, sentences::Decode};

/// VLW - Distance Traveled through Water
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_vlw_distance_traveled_through_water>
///
/// ```text
///         1   2 3   4 5   6 7   8
///         |   | |   | |   | |   |
///  $--VLW,x.x,N,x.x,N,x.x,N,x.x,N*hh
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct VLW {
    /// Total cumulative distance through water in nautical miles
    pub water_total_nm: Option<f32>,
    /// Distance through water since reset in nautical miles
    pub water_since_reset_nm: Option<f32>,
    /// Total cumulative distance over ground in nautical miles
    pub ground_total_nm: Option<f32>,
    /// Distance over ground since reset in nautical miles
    pub ground_since_reset_nm: Option<f32>,
}

impl Decode for VLW {
    fn decode(sentence: &RawSentence<'_>) -> Result<Self, Error> {
        Ok(Self {
            water_total_nm: parse_float(sentence.field(1)),
            water_since_reset_nm: parse_float(sentence.field(3)),
            ground_total_nm: parse_float(sentence.field(5)),
            ground_since_reset_nm: parse_float(sentence.field(7)),
        })
    }
}
