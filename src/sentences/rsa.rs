#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{error::Error, fields::parse_float, frame::RawSentence, sentences::Decode};

/// RSA - Rudder Sensor Angle
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_rsa_rudder_sensor_angle>
///
/// ```text
///         1   2 3   4
///         |   | |   |
///  $--RSA,x.x,A,x.x,A*hh
/// ```
///
/// Only the starboard (or single) sensor in fields 1-2 is decoded; the port
/// sensor of dual-rudder vessels is not. The angle is kept only while its
/// validity letter is `A`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct RSA {
    /// Rudder angle in degrees, negative to port
    pub rudder_angle: Option<f32>,
}

impl Decode for RSA {
    fn decode(sentence: &RawSentence<'_>) -> Result<Self, Error> {
        let rudder_angle = if sentence.field(2).eq_ignore_ascii_case("A") {
            parse_float(sentence.field(1))
        } else {
            None
        };

        Ok(Self { rudder_angle })
    }
}
