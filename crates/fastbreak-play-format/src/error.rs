//! Error types for play-document validation.

use serde::{Deserialize, Serialize};

/// First invariant violated while validating an untrusted play document.
///
/// Validation is fail-fast: exactly one of these is produced per rejected
/// document, in check order, and it is always returned as a value rather
/// than panicking.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum DocumentError {
    /// Document declares a schema version this library does not understand.
    #[error("unsupported schema version {found} (expected {expected})")]
    UnsupportedSchemaVersion { found: String, expected: u32 },

    /// Court template tag is missing or not one of the recognized values.
    #[error("unknown court template {found}")]
    UnknownCourtTemplate { found: String },

    /// A document must contain at least one phase.
    #[error("document has no phases")]
    EmptyPhases,

    /// Phase-level shape violation (missing id/name, non-object entry, ...).
    #[error("phase {index}: {reason}")]
    MalformedPhase { index: usize, reason: String },

    /// Object-level shape/enum/bounds violation.
    #[error("phase {phase}, object {index}: {reason}")]
    MalformedObject {
        phase: usize,
        index: usize,
        reason: String,
    },

    /// Action-level shape/enum/bounds violation, including the nested
    /// animation descriptor.
    #[error("phase {phase}, action {index}: {reason}")]
    MalformedAction {
        phase: usize,
        index: usize,
        reason: String,
    },

    /// Ball-owner override present but neither null nor a string.
    #[error("phase {phase}: ballOwnerObjectId must be a string or null")]
    InvalidBallOwner { phase: usize },

    /// Input was not a JSON object at the top level, or not JSON at all.
    #[error("malformed document: {reason}")]
    Json { reason: String },
}

impl DocumentError {
    /// Coarse grouping for logging and product metrics.
    pub fn category(&self) -> &'static str {
        match self {
            Self::UnsupportedSchemaVersion { .. }
            | Self::UnknownCourtTemplate { .. }
            | Self::EmptyPhases
            | Self::Json { .. } => "document",
            Self::MalformedPhase { .. } | Self::InvalidBallOwner { .. } => "phase",
            Self::MalformedObject { .. } => "object",
            Self::MalformedAction { .. } => "action",
        }
    }
}
