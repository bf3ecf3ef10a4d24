//! # NMEA 0183 Decoder
//!
//! This library decodes NMEA 0183 sentences of the format
//! `$TTSSS,D1,D2,...,Dn*CC` into typed records and rate-gates their
//! publication.
//!
//! Decoding runs in three stages:
//! - framing: checksum validation and tokenization into an address field plus
//!   ordered data fields ([`frame`])
//! - content: dispatch on the sentence-type code to a per-type decoder
//!   producing one variant of [`DecodedSentence`] ([`sentences`])
//! - gating: a per-type publish-rate gate that suppresses records arriving
//!   faster than a configured interval ([`gate`], [`pipeline`])
//!
//! ## Usage
//!
//! ```rust
//! use nmea0183_decoder::{DecodedSentence, decode};
//!
//! let sentence = decode("$SDDPT,15.2,0.3*62").unwrap();
//! match sentence {
//!     DecodedSentence::DPT(dpt) => {
//!         assert_eq!(dpt.depth_below_transducer, Some(15.2));
//!         assert_eq!(dpt.offset_from_transducer, Some(0.3));
//!     }
//!     _ => unreachable!(),
//! }
//! ```
//!
//! Driving a line source through the publish gate:
//!
//! ```rust
//! use nmea0183_decoder::{Pipeline, PublishPolicy, Record};
//!
//! let policy = PublishPolicy::new().with("DPT", 10_000);
//! let mut pipeline = Pipeline::new(policy);
//!
//! let mut records: Vec<Record> = Vec::new();
//! pipeline.run(["$SDDPT,15.2,0.3*62", "$SDDPT,15.3,0.4*64"], &mut records).unwrap();
//!
//! // The second reading arrived inside the 10-second interval.
//! assert_eq!(records.len(), 1);
//! ```

pub mod error;
pub mod fields;
pub mod frame;
pub mod gate;
pub mod pipeline;
pub mod sentences;

pub use error::Error;
pub use frame::RawSentence;
pub use gate::{PublishGate, PublishPolicy};
pub use pipeline::{Pipeline, Record, RecordSink, now_ms};
pub use sentences::{Decode, DecodedSentence};

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct README;

/// Decodes one raw line into a typed record.
///
/// The line is expected to arrive already stripped of line terminators. On
/// any failure a typed [`Error`] is returned so the caller can log it and
/// move on; nothing is retried and nothing terminates the surrounding
/// process.
pub fn decode(line: &str) -> Result<DecodedSentence, Error> {
    let sentence = frame::tokenize(line)?;
    DecodedSentence::decode(&sentence)
}
