//! fastbreak-play-format: the play-diagram document model shared by the
//! editor, the renderer, and the animation compiler (core, renderer-agnostic).
//!
//! Documents are authored and persisted by the editor and handed to this
//! library as immutable JSON snapshots. `parse` turns untrusted JSON into a
//! typed [`PlayDocument`] or a structured first-error; nothing here mutates a
//! document once parsed.

pub mod document;
pub mod error;
pub mod geom;
pub mod parse;

pub use document::{
    ActionAnimation, ActionKind, CourtTemplate, ObjectKind, PlayAction, PlayDocument, PlayObject,
    PlayPhase, Trigger, PLAY_SCHEMA_VERSION,
};
pub use error::DocumentError;
pub use geom::{Point, COURT_MAX, COURT_MIN};
pub use parse::{parse_play_document, parse_play_document_str, validate_play_document};
