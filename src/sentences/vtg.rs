#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    error::Error,
    fields::{mode_char, parse_float},
    frame::RawSentence,
    sentences::Decode,
};

/// VTG - Track Made Good and Ground Speed
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_vtg_track_made_good_and_ground_speed>
///
/// ```text
///         1   2 3   4 5   6 7   8 9
///         |   | |   | |   | |   | |
///  $--VTG,x.x,T,x.x,M,x.x,N,x.x,K,m*hh
/// ```
///
/// Courses and speeds sit at fixed offsets; the FAA mode in field 9 is a
/// later addition and absent on older equipment.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct VTG {
    /// Course over ground in degrees true
    pub course_over_ground_true: Option<f32>,
    /// Course over ground in degrees magnetic
    pub course_over_ground_magnetic: Option<f32>,
    /// Speed over ground in knots
    pub speed_over_ground_knots: Option<f32>,
    /// Speed over ground in kilometers per hour
    pub speed_over_ground_kph: Option<f32>,
    /// FAA mode indicator, when the talker sends one
    pub faa_mode: Option<char>,
}

impl Decode for VTG {
    fn decode(sentence: &RawSentence<'_>) -> Result<Self, Error> {
        Ok(Self {
            course_over_ground_true: parse_float(sentence.field(1)),
            course_over_ground_magnetic: parse_float(sentence.field(3)),
            speed_over_ground_knots: parse_float(sentence.field(5)),
            speed_over_ground_kph: parse_float(sentence.field(7)),
            faa_mode: mode_char(sentence.field(9)),
        })
    }
}
