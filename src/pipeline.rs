//! # Decode Pipeline
//!
//! Glue between a line source and a record sink: each line is tokenized,
//! decoded, and offered to the publish gate, one sentence to completion
//! before the next is considered. The transport that produces lines and the
//! sink that carries records away are the caller's business; this module only
//! ever sees an iterator of lines and a [`RecordSink`].

use log::{debug, warn};
use time::OffsetDateTime;

use crate::{
    error::Error,
    gate::{PublishGate, PublishPolicy},
    sentences::DecodedSentence,
};

/// A decoded sentence paired with its type code and decode timestamp.
///
/// This is what crosses the output boundary; the sink owns any further wire
/// encoding.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// The 3-character sentence-type code that produced the data
    pub sentence_type: &'static str,
    /// Milliseconds since the Unix epoch at decode time
    pub timestamp: i64,
    /// The decoded record itself
    pub data: DecodedSentence,
}

/// Receives records that pass the publish gate.
pub trait RecordSink {
    type Error;

    /// Hands one record to the sink.
    fn publish(&mut self, record: &Record) -> Result<(), Self::Error>;
}

/// Collecting sink, handy in tests.
impl RecordSink for Vec<Record> {
    type Error = std::convert::Infallible;

    fn publish(&mut self, record: &Record) -> Result<(), Self::Error> {
        self.push(record.clone());
        Ok(())
    }
}

/// Current wall-clock time in milliseconds since the Unix epoch.
pub fn now_ms() -> i64 {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
}

/// Decodes lines one at a time and rate-gates the results.
///
/// The pipeline owns the only mutable state in the core (the gate's
/// last-published map). It never retries and never terminates the process:
/// every decode failure is scoped to its line.
#[derive(Debug)]
pub struct Pipeline {
    gate: PublishGate,
}

impl Pipeline {
    pub fn new(policy: PublishPolicy) -> Self {
        Self {
            gate: PublishGate::new(policy),
        }
    }

    /// Decodes one line and consults the gate.
    ///
    /// `Ok(None)` means the sentence decoded cleanly but is not due for
    /// publication: either its type came up faster than the configured
    /// interval, or the policy does not list it at all.
    pub fn process(&mut self, line: &str, timestamp_ms: i64) -> Result<Option<Record>, Error> {
        let data = crate::decode(line)?;
        let sentence_type = data.sentence_type();

        if self.gate.admit(sentence_type, timestamp_ms) {
            Ok(Some(Record {
                sentence_type,
                timestamp: timestamp_ms,
                data,
            }))
        } else {
            Ok(None)
        }
    }

    /// Drives a line source to exhaustion, publishing due records to `sink`.
    ///
    /// Decode failures are logged and skipped. An unknown sentence type is
    /// only worth a warning when the publish policy actually asks for that
    /// code; anything else the talker emits is silently ignored. A sink
    /// failure ends the run.
    pub fn run<L, S>(&mut self, lines: L, sink: &mut S) -> Result<(), S::Error>
    where
        L: IntoIterator,
        L::Item: AsRef<str>,
        S: RecordSink,
    {
        for line in lines {
            match self.process(line.as_ref(), now_ms()) {
                Ok(Some(record)) => {
                    sink.publish(&record)?;
                    debug!("published {} at {}", record.sentence_type, record.timestamp);
                }
                Ok(None) => {}
                Err(Error::UnknownSentenceType(code)) => {
                    if self.gate.policy().contains(&code) {
                        warn!("no decoder for sentence type {code}");
                    }
                }
                Err(err) => warn!("NMEA error: {err}"),
            }
        }

        Ok(())
    }
}
