#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    error::Error,
    fields::parse_float,
    frame::RawSentence,
    sentences::{Decode, require_status},
};

/// Knots per meter-per-second.
const KNOTS_PER_MPS: f32 = 1.94384;
/// Knots per kilometer-per-hour.
const KNOTS_PER_KPH: f32 = 0.539957;

/// A wind reading, either relative to true north or to the vessel's bow.
///
/// The two references produce differently named measurements; keeping them as
/// separate variants means a consumer cannot mistake an apparent angle for a
/// true one.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub enum WindObservation {
    /// True wind, reference letter `T`
    True {
        /// True wind angle in degrees
        angle: Option<f32>,
        /// True wind speed in knots
        speed_knots: Option<f32>,
    },
    /// Apparent (relative) wind, reference letter `R` or absent
    Apparent {
        /// Apparent wind angle in degrees
        angle: Option<f32>,
        /// Apparent wind speed in knots
        speed_knots: Option<f32>,
    },
}

/// MWV - Wind Speed and Angle
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_mwv_wind_speed_and_angle>
///
/// ```text
///         1   2 3   4 5
///         |   | |   | |
///  $--MWV,x.x,a,x.x,a,A*hh
/// ```
///
/// Speed is normalized to knots regardless of the unit the talker used
/// (field 4: `N` knots, `M` meters per second, `K` kilometers per hour).
/// The status in field 5 must be `A` before anything else is looked at.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct MWV {
    /// The wind reading, keyed by its reference
    pub wind: WindObservation,
}

impl Decode for MWV {
    fn decode(sentence: &RawSentence<'_>) -> Result<Self, Error> {
        require_status("MWV", sentence.field(5))?;

        let reference = sentence.field(2);
        let true_wind = if reference.eq_ignore_ascii_case("T") {
            true
        } else if reference.is_empty() || reference.eq_ignore_ascii_case("R") {
            // Assume apparent (relative) wind when the reference is missing.
            false
        } else {
            return Err(Error::FieldValidation {
                field: "wind reference",
                value: reference.to_string(),
                expected: "'T' or 'R'",
            });
        };

        let speed = parse_float(sentence.field(3));
        let unit = sentence.field(4);
        let speed_knots = if unit.eq_ignore_ascii_case("N") {
            speed
        } else if unit.eq_ignore_ascii_case("M") {
            speed.map(|mps| mps * KNOTS_PER_MPS)
        } else if unit.eq_ignore_ascii_case("K") {
            speed.map(|kph| kph * KNOTS_PER_KPH)
        } else {
            return Err(Error::FieldValidation {
                field: "wind speed unit",
                value: unit.to_string(),
                expected: "'N', 'M', or 'K'",
            });
        };

        let angle = parse_float(sentence.field(1));
        let wind = if true_wind {
            WindObservation::True { angle, speed_knots }
        } else {
            WindObservation::Apparent { angle, speed_knots }
        };

        Ok(Self { wind })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::tokenize;

    fn decode(line: &str) -> Result<MWV, Error> {
        MWV::decode(&tokenize(line).unwrap())
    }

    fn speed_of(mwv: &MWV) -> Option<f32> {
        match mwv.wind {
            WindObservation::True { speed_knots, .. }
            | WindObservation::Apparent { speed_knots, .. } => speed_knots,
        }
    }

    #[test]
    fn test_mwv_knots_passed_through() {
        let mwv = decode("$WIMWV,214.8,R,10.0,N,A").unwrap();
        assert_eq!(
            mwv.wind,
            WindObservation::Apparent {
                angle: Some(214.8),
                speed_knots: Some(10.0),
            }
        );
    }

    #[test]
    fn test_mwv_mps_converted() {
        let mwv = decode("$WIMWV,214.8,R,10.0,M,A").unwrap();
        assert!((speed_of(&mwv).unwrap() - 19.4384).abs() < 1e-3);
    }

    #[test]
    fn test_mwv_kph_converted() {
        let mwv = decode("$WIMWV,214.8,R,10.0,K,A").unwrap();
        assert!((speed_of(&mwv).unwrap() - 5.39957).abs() < 1e-3);
    }

    #[test]
    fn test_mwv_true_reference() {
        let mwv = decode("$WIMWV,054.0,T,12.5,N,A").unwrap();
        assert_eq!(
            mwv.wind,
            WindObservation::True {
                angle: Some(54.0),
                speed_knots: Some(12.5),
            }
        );
    }

    #[test]
    fn test_mwv_empty_reference_is_apparent() {
        let mwv = decode("$WIMWV,214.8,,10.0,N,A").unwrap();
        assert!(matches!(mwv.wind, WindObservation::Apparent { .. }));
    }

    #[test]
    fn test_mwv_rejects_bad_status_first() {
        // Status wins even when every other field is valid.
        let result = decode("$WIMWV,214.8,R,10.0,N,V");
        assert_eq!(
            result,
            Err(Error::BadStatus {
                sentence_type: "MWV",
                status: "V".to_string(),
            })
        );
    }

    #[test]
    fn test_mwv_rejects_bad_reference() {
        let result = decode("$WIMWV,214.8,X,10.0,N,A");
        assert_eq!(
            result,
            Err(Error::FieldValidation {
                field: "wind reference",
                value: "X".to_string(),
                expected: "'T' or 'R'",
            })
        );
    }

    #[test]
    fn test_mwv_rejects_bad_unit() {
        let result = decode("$WIMWV,214.8,R,10.0,X,A");
        assert_eq!(
            result,
            Err(Error::FieldValidation {
                field: "wind speed unit",
                value: "X".to_string(),
                expected: "'N', 'M', or 'K'",
            })
        );
    }

    #[test]
    fn test_mwv_missing_speed_is_no_value() {
        let mwv = decode("$WIMWV,214.8,R,,M,A").unwrap();
        assert_eq!(speed_of(&mwv), None);
    }
}
