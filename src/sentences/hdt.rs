#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{error::Error, fields::parse_float, frame::RawSentence, sentences::Decode};

/// HDT - Heading - True
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_hdt_heading_true>
///
/// ```text
///         1   2
///         |   |
///  $--HDT,x.x,T*hh
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct HDT {
    /// Heading in degrees true
    pub heading_true: Option<f32>,
}

impl Decode for HDT {
    fn decode(sentence: &RawSentence<'_>) -> Result<Self, Error> {
        let reference = sentence.field(2);
        if !reference.eq_ignore_ascii_case("T") {
            return Err(Error::FieldValidation {
                field: "heading reference",
                value: reference.to_string(),
                expected: "'T'",
            });
        }

        Ok(Self {
            heading_true: parse_float(sentence.field(1)),
        })
    }
}
