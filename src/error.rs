//! # Error Types
//!
//! This module defines the failure taxonomy for sentence decoding.
//!
//! Every failure is scoped to a single sentence: the caller logs it and moves
//! on to the next line. Nothing here is retried internally, and nothing should
//! propagate past the decode-one-sentence boundary.

use thiserror::Error;

/// Represents all possible errors that can occur while decoding a sentence.
///
/// Two of these carry more meaning than their message suggests:
///
/// - [`Error::UnknownSentenceType`] names the offending code so that a caller
///   can tell "a type we were asked to publish but cannot decode" apart from
///   "a type we never heard of".
/// - [`Error::BadStatus`] means the sentence decoded structurally but the
///   instrument itself flagged the data as invalid.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// The sentence is structurally unusable: missing `$` delimiter, an
    /// address field too short to hold a sentence-type code, or a mangled
    /// checksum suffix.
    #[error("invalid NMEA sentence '{0}'")]
    MalformedSentence(String),

    /// The checksum carried by the sentence does not match the one computed
    /// over its body.
    #[error("checksum mismatch for sentence '{sentence}' (expected {expected:02X}, found {found:02X})")]
    ChecksumMismatch {
        /// The full offending sentence
        sentence: String,
        /// The checksum computed from the sentence body
        expected: u8,
        /// The checksum found in the sentence
        found: u8,
    },

    /// No decoder is registered for this sentence-type code.
    #[error("unsupported NMEA sentence type '{0}'")]
    UnknownSentenceType(String),

    /// A sentence-specific validity letter is not the accepted value.
    #[error("bad status '{status}' for sentence type '{sentence_type}'")]
    BadStatus {
        sentence_type: &'static str,
        status: String,
    },

    /// A structural discriminator (unit letter, reference letter, or a
    /// mandatory date/time field) holds an unexpected value.
    #[error("unknown {field} '{value}' (expected {expected})")]
    FieldValidation {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    /// A coordinate field is non-empty but does not match the expected
    /// degrees/minutes grammar.
    #[error("geographic coordinate '{0}' is not valid DDDMM.MMMM")]
    CoordinateFormat(String),
}
