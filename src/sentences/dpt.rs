#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{error::Error, fields::parse_float, frame::RawSentence, sentences::Decode};

/// DPT - Depth of Water
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_dpt_depth_of_water>
///
/// ```text
///         1   2
///         |   |
///  $--DPT,x.x,x.x*hh
/// ```
///
/// Total water depth is derived as the sum of the transducer reading and the
/// transducer offset; it is "no value" when either input is absent, never a
/// failure.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct DPT {
    /// Water depth below the transducer in meters
    pub depth_below_transducer: Option<f32>,
    /// Offset from transducer in meters,
    /// positive means distance from transducer to water line,
    /// negative means distance from transducer to keel
    pub offset_from_transducer: Option<f32>,
    /// Total water depth in meters, derived from the two readings
    pub water_depth: Option<f32>,
}

impl Decode for DPT {
    fn decode(sentence: &RawSentence<'_>) -> Result<Self, Error> {
        let depth_below_transducer = parse_float(sentence.field(1));
        let offset_from_transducer = parse_float(sentence.field(2));

        let water_depth = match (depth_below_transducer, offset_from_transducer) {
            (Some(depth), Some(offset)) => Some(depth + offset),
            _ => None,
        };

        Ok(Self {
            depth_below_transducer,
            offset_from_transducer,
            water_depth,
        })
    }
}
