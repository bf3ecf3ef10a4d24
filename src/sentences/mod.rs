//! # Sentence Decoders
//!
//! One decoder per supported sentence type, each encoding that sentence's
//! field layout, validation rules, and unit conversions. Decoders receive the
//! ordered data fields of a tokenized sentence and produce a typed record or
//! a typed failure.

mod dpt;
mod gga;
mod gll;
mod gsv;
mod hdt;
mod mda;
mod mwv;
mod rmc;
mod rot;
mod rsa;
mod vlw;
mod vtg;
mod vwr;

pub use dpt::DPT;
pub use gga::GGA;
pub use gll::GLL;
pub use gsv::GSV;
pub use hdt::HDT;
pub use mda::MDA;
pub use mwv::{MWV, WindObservation};
pub use rmc::RMC;
pub use rot::ROT;
pub use rsa::RSA;
pub use vlw::VLW;
pub use vtg::VTG;
pub use vwr::VWR;

use crate::{error::Error, frame::RawSentence};

/// A record type that can be decoded from the data fields of a tokenized
/// sentence.
///
/// Implementations read fields by their fixed 1-based positions and apply the
/// sentence's own validation rules. Lenient numeric fields decode to `None`
/// on noise; only structural discriminators (status, unit, and reference
/// letters) fail the decode.
pub trait Decode: Sized {
    /// Decodes the sentence's data fields into `Self`.
    fn decode(sentence: &RawSentence<'_>) -> Result<Self, Error>;
}

/// A decoded record, one variant per supported sentence type.
///
/// Field sets differ per sentence type; callers match on the variant to reach
/// the fields that type produces. Records are immutable once created.
///
/// ## Supported Sentence Types
///
/// | Variant      | Sentence Type                              |
/// |--------------|--------------------------------------------|
/// | DPT([`DPT`]) | Depth of Water                             |
/// | GGA([`GGA`]) | Global Positioning System Fix Data         |
/// | GLL([`GLL`]) | Geographic Position - Latitude/Longitude   |
/// | GSV([`GSV`]) | Satellites in View                         |
/// | HDT([`HDT`]) | Heading - True                             |
/// | MDA([`MDA`]) | Meteorological Composite                   |
/// | MWV([`MWV`]) | Wind Speed and Angle                       |
/// | RMC([`RMC`]) | Recommended Minimum Navigation Information |
/// | ROT([`ROT`]) | Rate of Turn                               |
/// | RSA([`RSA`]) | Rudder Sensor Angle                        |
/// | VLW([`VLW`]) | Distance Traveled through Water            |
/// | VTG([`VTG`]) | Track Made Good and Ground Speed           |
/// | VWR([`VWR`]) | Relative Wind Speed and Angle              |
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedSentence {
    /// Depth of Water
    DPT(DPT),
    /// Global Positioning System Fix Data
    GGA(GGA),
    /// Geographic Position - Latitude/Longitude
    GLL(GLL),
    /// Satellites in View
    GSV(GSV),
    /// Heading - True
    HDT(HDT),
    /// Meteorological Composite
    MDA(MDA),
    /// Wind Speed and Angle
    MWV(MWV),
    /// Recommended Minimum Navigation Information
    RMC(RMC),
    /// Rate of Turn
    ROT(ROT),
    /// Rudder Sensor Angle
    RSA(RSA),
    /// Distance Traveled through Water
    VLW(VLW),
    /// Track Made Good and Ground Speed
    VTG(VTG),
    /// Relative Wind Speed and Angle
    VWR(VWR),
}

impl DecodedSentence {
    /// Dispatches a tokenized sentence to the decoder registered for its
    /// type code.
    ///
    /// The table is fixed at compile time; supporting a new sentence type
    /// means adding a match arm and a variant, never runtime discovery. A
    /// code with no entry fails with [`Error::UnknownSentenceType`], carrying
    /// the code so the caller can tell a type it was configured for apart
    /// from one it never heard of.
    pub fn decode(sentence: &RawSentence<'_>) -> Result<Self, Error> {
        match sentence.sentence_type() {
            "DPT" => DPT::decode(sentence).map(Self::DPT),
            "GGA" => GGA::decode(sentence).map(Self::GGA),
            "GLL" => GLL::decode(sentence).map(Self::GLL),
            "GSV" => GSV::decode(sentence).map(Self::GSV),
            "HDT" => HDT::decode(sentence).map(Self::HDT),
            "MDA" => MDA::decode(sentence).map(Self::MDA),
            "MWV" => MWV::decode(sentence).map(Self::MWV),
            "RMC" => RMC::decode(sentence).map(Self::RMC),
            "ROT" => ROT::decode(sentence).map(Self::ROT),
            "RSA" => RSA::decode(sentence).map(Self::RSA),
            "VLW" => VLW::decode(sentence).map(Self::VLW),
            "VTG" => VTG::decode(sentence).map(Self::VTG),
            "VWR" => VWR::decode(sentence).map(Self::VWR),
            unknown => Err(Error::UnknownSentenceType(unknown.to_string())),
        }
    }

    /// The sentence-type code that produced this record.
    pub fn sentence_type(&self) -> &'static str {
        match self {
            Self::DPT(_) => "DPT",
            Self::GGA(_) => "GGA",
            Self::GLL(_) => "GLL",
            Self::GSV(_) => "GSV",
            Self::HDT(_) => "HDT",
            Self::MDA(_) => "MDA",
            Self::MWV(_) => "MWV",
            Self::RMC(_) => "RMC",
            Self::ROT(_) => "ROT",
            Self::RSA(_) => "RSA",
            Self::VLW(_) => "VLW",
            Self::VTG(_) => "VTG",
            Self::VWR(_) => "VWR",
        }
    }
}

/// Satellite information used in [`GSV`] sentences
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Satellite {
    pub prn: Option<u8>,
    pub elevation: Option<u8>,
    pub azimuth: Option<u16>,
    pub snr: Option<u8>,
}

/// Checks a sentence-specific validity letter against the accepted value `A`.
pub(crate) fn require_status(sentence_type: &'static str, status: &str) -> Result<(), Error> {
    if status.eq_ignore_ascii_case("A") {
        Ok(())
    } else {
        Err(Error::BadStatus {
            sentence_type,
            status: status.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::tokenize;

    #[test]
    fn test_unknown_sentence_type_carries_code() {
        let sentence = tokenize("$GPZZZ,1,2,3").unwrap();
        assert_eq!(
            DecodedSentence::decode(&sentence),
            Err(Error::UnknownSentenceType("ZZZ".to_string()))
        );
    }

    #[test]
    fn test_dispatch_case_insensitive() {
        // The tokenizer uppercases the type code before dispatch.
        let sentence = tokenize("$hehdt,274.07,T").unwrap();
        let decoded = DecodedSentence::decode(&sentence).unwrap();
        assert_eq!(decoded.sentence_type(), "HDT");
    }

    #[test]
    fn test_require_status() {
        assert!(require_status("GLL", "A").is_ok());
        assert!(require_status("GLL", "a").is_ok());
        assert_eq!(
            require_status("GLL", "V"),
            Err(Error::BadStatus {
                sentence_type: "GLL",
                status: "V".to_string(),
            })
        );
        assert!(require_status("GLL", "").is_err());
    }
}
