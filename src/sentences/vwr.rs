#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{error::Error, fields::parse_float, frame::RawSentence, sentences::Decode};

/// VWR - Relative Wind Speed and Angle
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_vwr_relative_wind_speed_and_angle>
///
/// ```text
///         1   2 3   4 5   6 7   8
///         |   | |   | |   | |   |
///  $--VWR,x.x,a,x.x,N,x.x,M,x.x,K*hh
/// ```
///
/// The angle is measured off the bow and signed here: negative when the side
/// letter in field 2 is `L` (wind from port).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct VWR {
    /// Apparent wind angle in degrees, negative to port
    pub wind_angle: Option<f32>,
    /// Apparent wind speed in knots
    pub wind_speed_knots: Option<f32>,
    /// Apparent wind speed in meters per second
    pub wind_speed_mps: Option<f32>,
    /// Apparent wind speed in kilometers per hour
    pub wind_speed_kph: Option<f32>,
}

impl Decode for VWR {
    fn decode(sentence: &RawSentence<'_>) -> Result<Self, Error> {
        let mut wind_angle = parse_float(sentence.field(1));
        if sentence.field(2).eq_ignore_ascii_case("L") {
            wind_angle = wind_angle.map(|v| -v);
        }

        Ok(Self {
            wind_angle,
            wind_speed_knots: parse_float(sentence.field(3)),
            wind_speed_mps: parse_float(sentence.field(5)),
            wind_speed_kph: parse_float(sentence.field(7)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::tokenize;

    fn decode(line: &str) -> VWR {
        VWR::decode(&tokenize(line).unwrap()).unwrap()
    }

    #[test]
    fn test_vwr_decoding() {
        let vwr = decode("$WIVWR,24.2,R,6.1,N,3.1,M,11.3,K");

        assert_eq!(vwr.wind_angle, Some(24.2));
        assert_eq!(vwr.wind_speed_knots, Some(6.1));
        assert_eq!(vwr.wind_speed_mps, Some(3.1));
        assert_eq!(vwr.wind_speed_kph, Some(11.3));
    }

    #[test]
    fn test_vwr_port_wind_negated() {
        let vwr = decode("$WIVWR,24.2,L,6.1,N,3.1,M,11.3,K");
        assert_eq!(vwr.wind_angle, Some(-24.2));
    }

    #[test]
    fn test_vwr_missing_angle() {
        let vwr = decode("$WIVWR,,L,6.1,N,3.1,M,11.3,K");
        assert_eq!(vwr.wind_angle, None);
        assert_eq!(vwr.wind_speed_knots, Some(6.1));
    }
}
