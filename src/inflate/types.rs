//! Shared types for the gzip decode path: the error taxonomy, the per-step
//! engine report, and the decode options.
//!
//! The error enum mirrors the distinct fatal conditions an inflate engine can
//! report, plus the truncation condition detected by the orchestrator itself.
//! A "dictionary required" report is carried as its own variant but classified
//! as corruption: gzip framing never legitimately references an external
//! preset dictionary, so an engine asking for one has read garbage.

use core::fmt;

use flate2::DecompressError;

// ─────────────────────────────────────────────────────────────────────────────
// Error taxonomy
// ─────────────────────────────────────────────────────────────────────────────

/// Failure modes of a decode call.
///
/// Every variant except [`Incomplete`](DecodeError::Incomplete) originates
/// from the inflate engine and aborts the decode at the failing drain step.
/// `Incomplete` is raised by the orchestrator when the input runs out before
/// the engine has seen the logical end of the compressed stream.
///
/// Empty input is *not* an error: `decode(&[])` returns an empty buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Malformed gzip framing or invalid compressed payload.
    DataCorruption {
        /// Engine-supplied description of what was rejected.
        detail: String,
    },
    /// The engine requested an external preset dictionary.  Classified as
    /// corruption (see [`DecodeError::is_corruption`]); never recovered.
    DictionaryRequired,
    /// Allocation failure inside the engine.
    MemoryExhausted,
    /// The engine reported its own state object as inconsistent.
    InternalState,
    /// Input ended before the logical end of the compressed stream.
    Incomplete,
}

impl DecodeError {
    /// Whether this error denotes unusable input data (as opposed to an
    /// engine-resource failure).  `DictionaryRequired` counts as corruption
    /// because no valid gzip stream can trigger it.
    pub fn is_corruption(&self) -> bool {
        matches!(
            self,
            DecodeError::DataCorruption { .. } | DecodeError::DictionaryRequired
        )
    }

    /// Classify an engine error into the taxonomy.
    ///
    /// The engine folds most failures into one error type; the dictionary
    /// request is recoverable from it directly, while memory and state
    /// failures are recognised from the stable zlib message strings
    /// ("insufficient memory", "stream error").  Anything else is a data
    /// error and keeps the engine's message as `detail`.
    pub(crate) fn from_engine(err: DecompressError) -> Self {
        if err.needs_dictionary().is_some() {
            return DecodeError::DictionaryRequired;
        }
        let msg = err.to_string();
        if msg.contains("insufficient memory") {
            DecodeError::MemoryExhausted
        } else if msg.contains("stream error") {
            DecodeError::InternalState
        } else {
            DecodeError::DataCorruption { detail: msg }
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::DataCorruption { detail } => {
                write!(f, "corrupt gzip stream: {detail}")
            }
            DecodeError::DictionaryRequired => {
                f.write_str("corrupt gzip stream: preset dictionary requested")
            }
            DecodeError::MemoryExhausted => f.write_str("inflate engine out of memory"),
            DecodeError::InternalState => f.write_str("inflate engine state inconsistent"),
            DecodeError::Incomplete => f.write_str("truncated gzip stream"),
        }
    }
}

impl std::error::Error for DecodeError {}

// ─────────────────────────────────────────────────────────────────────────────
// Engine step report
// ─────────────────────────────────────────────────────────────────────────────

/// Whether the engine has consumed a complete compressed stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamState {
    /// More compressed data is expected.
    Working,
    /// The logical end of the stream (gzip trailer) has been verified.
    Finished,
}

/// Outcome of a single [`InflateSession::inflate`](crate::inflate::session::InflateSession::inflate)
/// step: how much input was consumed, how much output was produced, and
/// whether the stream completed during the step.
#[derive(Debug, Clone, Copy)]
pub struct Step {
    /// Bytes consumed from the input slice.
    pub consumed: usize,
    /// Bytes written to the output buffer.
    pub produced: usize,
    /// Stream progress after the step.
    pub state: StreamState,
}

// ─────────────────────────────────────────────────────────────────────────────
// Decode options
// ─────────────────────────────────────────────────────────────────────────────

/// Policy for input that continues past the first gzip member.
///
/// The gzip format allows several independently compressed members to be
/// concatenated into one file; `gzip -d` decodes them all.  A decoder may
/// alternatively stop at the first trailer and ignore whatever follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MemberPolicy {
    /// Stop at the first stream end; trailing bytes (further members or
    /// garbage) are ignored, not an error.
    #[default]
    FirstMemberOnly,
    /// Keep decoding members back-to-back until the input is exhausted;
    /// output is their concatenation.  Trailing bytes that do not start a
    /// valid member are a [`DecodeError::DataCorruption`].
    Concatenate,
}

/// Options accepted by [`decode_with`](crate::inflate::decode::decode_with).
#[derive(Debug, Clone, Copy, Default)]
pub struct DecodeOptions {
    /// Multi-member handling; defaults to [`MemberPolicy::FirstMemberOnly`].
    pub member_policy: MemberPolicy,
}

// ─────────────────────────────────────────────────────────────────────────────
// Unit tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    /// Corruption classification: data and dictionary errors are corruption,
    /// resource/state errors and truncation are not.
    #[test]
    fn corruption_classification() {
        let corrupt = DecodeError::DataCorruption {
            detail: "invalid block type".into(),
        };
        assert!(corrupt.is_corruption());
        assert!(DecodeError::DictionaryRequired.is_corruption());
        assert!(!DecodeError::MemoryExhausted.is_corruption());
        assert!(!DecodeError::InternalState.is_corruption());
        assert!(!DecodeError::Incomplete.is_corruption());
    }

    /// Display strings are stable and carry the engine detail.
    #[test]
    fn display_strings() {
        let corrupt = DecodeError::DataCorruption {
            detail: "incorrect header check".into(),
        };
        assert_eq!(
            corrupt.to_string(),
            "corrupt gzip stream: incorrect header check"
        );
        assert_eq!(DecodeError::Incomplete.to_string(), "truncated gzip stream");
        assert_eq!(
            DecodeError::DictionaryRequired.to_string(),
            "corrupt gzip stream: preset dictionary requested"
        );
    }

    /// Default options select the stop-at-first-member policy.
    #[test]
    fn default_member_policy() {
        assert_eq!(
            DecodeOptions::default().member_policy,
            MemberPolicy::FirstMemberOnly
        );
    }
}
