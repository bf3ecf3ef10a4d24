#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{error::Error, fields::parse_float, frame::RawSentence, sentences::Decode};

/// ROT - Rate of Turn
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_rot_rate_of_turn>
///
/// ```text
///         1   2
///         |   |
///  $--ROT,x.x,A*hh
/// ```
///
/// The reading is kept only while the instrument reports it valid (`A`); an
/// invalid reading is "no value", not a failure.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct ROT {
    /// Rate of turn in degrees per minute, negative to port
    pub rate_of_turn: Option<f32>,
}

impl Decode for ROT {
    fn decode(sentence: &RawSentence<'_>) -> Result<Self, Error> {
        let rate_of_turn = if sentence.field(2).eq_ignore_ascii_case("A") {
            parse_float(sentence.field(1))
        } else {
            None
        };

        Ok(Self { rate_of_turn })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::tokenize;

    fn decode(line: &str) -> ROT {
        ROT::decode(&tokenize(line).unwrap()).unwrap()
    }

    #[test]
    fn test_rot_decoding() {
        assert_eq!(decode("$HEROT,-3.2,A").rate_of_turn, Some(-3.2));
    }

    #[test]
    fn test_rot_invalid_reading_is_no_value() {
        assert_eq!(decode("$HEROT,-3.2,V").rate_of_turn, None);
        assert_eq!(decode("$HEROT,-3.2,").rate_of_turn, None);
    }
}
