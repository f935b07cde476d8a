//! Error types for the TPC-C random generators.

use std::fmt;

/// Errors produced by the samplers.
///
/// Precondition violations (`min > max`, zero decimal places, mismatched
/// length slices) are asserts, not variants: those are caller bugs. The
/// variants here cover inputs that may legitimately arrive from outside the
/// crate and must be reportable instead of fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RandError {
    /// The `A` argument to NURand is not one of 255, 1023, or 8191.
    UnsupportedParameter(u64),
    /// More unique ids were requested than the range holds.
    RangeTooSmall { num_unique: u64, range_size: u64 },
    /// The rejection loop for the run-phase constant hit its draw cap.
    /// The valid region covers roughly 43% of the candidate space, so this
    /// only happens when the underlying stream is broken.
    DegenerateStream { attempts: u32 },
}

impl fmt::Display for RandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RandError::UnsupportedParameter(a) => {
                write!(
                    f,
                    "A = {} is not a supported NURand parameter (expected 255, 1023, or 8191)",
                    a
                )
            }
            RandError::RangeTooSmall {
                num_unique,
                range_size,
            } => {
                write!(
                    f,
                    "cannot select {} unique ids from a range of {} values",
                    num_unique, range_size
                )
            }
            RandError::DegenerateStream { attempts } => {
                write!(
                    f,
                    "no valid run constant after {} draws; the random stream looks degenerate",
                    attempts
                )
            }
        }
    }
}

impl std::error::Error for RandError {}
