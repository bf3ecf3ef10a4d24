#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    error::Error,
    fields::parse_int,
    frame::RawSentence,
    sentences::{Decode, Satellite},
};

/// GSV - Satellites in View
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gsv_satellites_in_view>
///
/// ```text
///         1 2 3 4 5 6 7     n
///         | | | | | | |     |
///  $--GSV,x,x,x,x,x,x,x,...,x*hh
/// ```
///
/// After the three header fields, satellites repeat in groups of four fields
/// (PRN, elevation, azimuth, SNR). Only complete groups are decoded; an
/// incomplete trailing group is dropped, not padded.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct GSV {
    /// Total number of GSV sentences in this group
    pub total_messages: Option<u8>,
    /// Sentence number within the current group
    pub message_number: Option<u8>,
    /// Total number of satellites in view
    pub satellites_in_view: Option<u8>,
    /// Per-satellite information, at most four per sentence
    pub satellites: heapless::Vec<Satellite, 4>,
}

impl Decode for GSV {
    fn decode(sentence: &RawSentence<'_>) -> Result<Self, Error> {
        let mut satellites = heapless::Vec::new();

        let mut index = 4;
        while index + 3 <= sentence.field_count() {
            let satellite = Satellite {
                prn: parse_int(sentence.field(index)),
                elevation: parse_int(sentence.field(index + 1)),
                azimuth: parse_int(sentence.field(index + 2)),
                snr: parse_int(sentence.field(index + 3)),
            };
            if satellites.push(satellite).is_err() {
                break;
            }
            index += 4;
        }

        Ok(Self {
            total_messages: parse_int(sentence.field(1)),
            message_number: parse_int(sentence.field(2)),
            satellites_in_view: parse_int(sentence.field(3)),
            satellites,
        })
    }
}
