//! # Sentence Framing
//!
//! This module handles the outer structure of an NMEA 0183 sentence:
//! `$TTSSS,D1,D2,...,Dn*CC`
//!
//! It validates the `$` start delimiter and the optional `*CC` checksum
//! suffix, extracts the address field (2-character talker ID plus 3-character
//! sentence-type code), and leaves an ordered list of data fields for the
//! per-type decoders. Input lines are expected to arrive already stripped of
//! line terminators.

use nom::{Parser, bytes::complete::take_while_m_n, combinator::all_consuming};

use crate::error::Error;

/// A tokenized sentence: talker ID, sentence-type code, and data fields.
///
/// Fields keep their wire order and are never deduplicated; several decoders
/// address them by fixed offset. The struct borrows from the input line and is
/// meant to be consumed immediately by the matching decoder.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSentence<'a> {
    talker: &'a str,
    sentence_type: String,
    fields: Vec<&'a str>,
}

impl<'a> RawSentence<'a> {
    /// The 2-character talker ID identifying the originating instrument.
    pub fn talker(&self) -> &str {
        self.talker
    }

    /// The 3-character sentence-type code, uppercased for dispatch.
    pub fn sentence_type(&self) -> &str {
        &self.sentence_type
    }

    /// A data field by position, 1-indexed by NMEA convention (field 0 is the
    /// address field, already consumed).
    ///
    /// Absent and empty fields both read as `""`: decoders address fields
    /// past the end of short sentences and treat the two alike.
    pub fn field(&self, index: usize) -> &'a str {
        index
            .checked_sub(1)
            .and_then(|i| self.fields.get(i))
            .copied()
            .unwrap_or("")
    }

    /// Number of data fields actually present on the wire.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}

/// Calculates the NMEA 0183 checksum for the given sentence body.
///
/// The checksum is the running XOR of every byte between the `$` prefix and
/// the `*` delimiter, excluding both.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::frame::checksum;
///
/// assert_eq!(checksum("GPGGA,1,2,3"), 0x4A);
/// ```
pub fn checksum(input: &str) -> u8 {
    input.bytes().fold(0, |acc, byte| acc ^ byte)
}

/// Formats a checksum value as the two-digit uppercase hexadecimal string
/// used on the wire.
///
/// ```rust
/// use nmea0183_decoder::frame::format_checksum;
///
/// assert_eq!(format_checksum(0x4A), "4A");
/// assert_eq!(format_checksum(0x0A), "0A");
/// ```
pub fn format_checksum(checksum: u8) -> String {
    format!("{checksum:02X}")
}

/// Parses a checksum suffix: exactly two hexadecimal digits, nothing else.
fn checksum_suffix(i: &str) -> Option<u8> {
    let hex_pair = take_while_m_n(2, 2, |c: char| c.is_ascii_hexdigit());
    let result: nom::IResult<&str, &str> = all_consuming(hex_pair).parse(i);
    let (_, pair) = result.ok()?;
    u8::from_str_radix(pair, 16).ok()
}

/// Splits a raw line into a [`RawSentence`], verifying the checksum if one is
/// present.
///
/// A sentence without a `*CC` suffix is accepted as-is; checksum checking is
/// skipped, not reported as missing. With a suffix present, the computed and
/// carried values must match (case-insensitively on the hex digits).
///
/// # Errors
///
/// [`Error::MalformedSentence`] when the line does not start with `$`, the
/// checksum suffix is not a two-digit hex value, or the address field is too
/// short to contain a sentence-type code. [`Error::ChecksumMismatch`] when
/// the carried checksum disagrees with the computed one.
pub fn tokenize(line: &str) -> Result<RawSentence<'_>, Error> {
    let Some(body) = line.strip_prefix('$') else {
        return Err(Error::MalformedSentence(line.to_string()));
    };

    let body = match body.split_once('*') {
        Some((body, suffix)) => {
            let found = checksum_suffix(suffix)
                .ok_or_else(|| Error::MalformedSentence(line.to_string()))?;
            let expected = checksum(body);
            if expected != found {
                return Err(Error::ChecksumMismatch {
                    sentence: line.to_string(),
                    expected,
                    found,
                });
            }
            body
        }
        None => body,
    };

    let mut parts = body.split(',');
    let address = parts.next().unwrap_or_default();
    if address.len() < 5 || !address.is_ascii() {
        return Err(Error::MalformedSentence(line.to_string()));
    }

    Ok(RawSentence {
        talker: &address[..2],
        sentence_type: address[address.len() - 3..].to_ascii_uppercase(),
        fields: parts.collect(),
    })
}
