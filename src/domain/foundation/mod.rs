//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types
//! that form the vocabulary of the audit domain.

mod errors;
mod ids;
mod score;
mod timestamp;

pub use errors::ValidationError;
pub use ids::SnapshotId;
pub use score::{Score, HIGH_SCORE_MIN, LOW_SCORE_MAX};
pub use timestamp::Timestamp;
