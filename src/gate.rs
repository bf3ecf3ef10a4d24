//! # Publish Gate
//!
//! Per-type rate limiting for decoded records.
//!
//! The gate keeps the only mutable state in the decoding core: the timestamp
//! of the last record of each type that was allowed through. The publish
//! policy it consults is supplied once at startup and read-only thereafter.

use std::collections::HashMap;

/// Minimum inter-publish interval per sentence-type code, in milliseconds.
///
/// A sentence type not listed here is never published; that is the normal way
/// to ignore types the surrounding system does not care about.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PublishPolicy {
    intervals: HashMap<String, i64>,
}

impl PublishPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a sentence type with its minimum publish interval.
    pub fn with(mut self, sentence_type: impl Into<String>, interval_ms: i64) -> Self {
        self.intervals.insert(sentence_type.into(), interval_ms);
        self
    }

    /// The configured interval for a sentence type, if any.
    pub fn interval(&self, sentence_type: &str) -> Option<i64> {
        self.intervals.get(sentence_type).copied()
    }

    /// Whether the policy lists this sentence type at all.
    pub fn contains(&self, sentence_type: &str) -> bool {
        self.intervals.contains_key(sentence_type)
    }
}

impl<S: Into<String>> FromIterator<(S, i64)> for PublishPolicy {
    fn from_iter<T: IntoIterator<Item = (S, i64)>>(iter: T) -> Self {
        Self {
            intervals: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Decides whether a freshly decoded record is due for publication.
///
/// The decision and the state update happen under a single `&mut` borrow, so
/// two decodes of the same type cannot both pass the gate. Callers that
/// decode from several threads must share the gate behind a `Mutex`; the
/// state is read and then written, which is not atomic across shared
/// references.
#[derive(Debug)]
pub struct PublishGate {
    policy: PublishPolicy,
    last_published: HashMap<String, i64>,
}

impl PublishGate {
    /// Creates a gate with nothing published yet.
    pub fn new(policy: PublishPolicy) -> Self {
        Self {
            policy,
            last_published: HashMap::new(),
        }
    }

    /// The policy this gate was built with.
    pub fn policy(&self) -> &PublishPolicy {
        &self.policy
    }

    /// Returns whether a record of `sentence_type` stamped `timestamp_ms` is
    /// due for publication, recording the acceptance if so.
    ///
    /// A type with no configured interval is never due (silently dropped). A
    /// type that has never been published is always due; afterwards a record
    /// is due once the configured interval has elapsed since the last
    /// acceptance.
    pub fn admit(&mut self, sentence_type: &str, timestamp_ms: i64) -> bool {
        let Some(interval) = self.policy.interval(sentence_type) else {
            return false;
        };
        if let Some(&last) = self.last_published.get(sentence_type)
            && timestamp_ms - last < interval
        {
            return false;
        }
        self.last_published.insert(sentence_type.to_string(), timestamp_ms);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_gating() {
        let mut gate = PublishGate::new(PublishPolicy::new().with("GGA", 10_000));

        assert!(gate.admit("GGA", 0));
        assert!(!gate.admit("GGA", 5_000));
        assert!(gate.admit("GGA", 10_000));
        assert!(!gate.admit("GGA", 19_999));
        assert!(gate.admit("GGA", 20_000));
    }

    #[test]
    fn test_unconfigured_type_never_due() {
        let mut gate = PublishGate::new(PublishPolicy::new().with("GGA", 10_000));

        assert!(!gate.admit("DPT", 0));
        assert!(!gate.admit("DPT", 1_000_000));
    }

    #[test]
    fn test_types_gated_independently() {
        let policy = PublishPolicy::from_iter([("GGA", 10_000), ("MWV", 1_000)]);
        let mut gate = PublishGate::new(policy);

        assert!(gate.admit("GGA", 0));
        assert!(gate.admit("MWV", 0));
        assert!(!gate.admit("GGA", 5_000));
        assert!(gate.admit("MWV", 5_000));
    }

    #[test]
    fn test_suppressed_record_does_not_reset_interval() {
        let mut gate = PublishGate::new(PublishPolicy::new().with("RMC", 10_000));

        assert!(gate.admit("RMC", 0));
        assert!(!gate.admit("RMC", 9_000));
        // Measured from the last acceptance, not the last attempt.
        assert!(gate.admit("RMC", 10_000));
    }
}
