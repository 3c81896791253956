//! Fastbreak play animation (renderer-agnostic)
//!
//! Compiles authored play diagrams into deterministic, time-sampled
//! animation: per-phase action scheduling, movement interpolation,
//! possession tracking, and per-frame sampling, plus a stateful session
//! facade for UI hosts and fixed-rate baking for exporters.
//!
//! Everything below the session is a pure transform of its inputs; there is
//! no shared state, no I/O, and a whole playback is recomputed whenever the
//! document or speed changes.

pub mod baking;
pub mod config;
pub mod events;
pub mod frame;
pub mod position;
pub mod possession;
pub mod session;
pub mod timeline;
pub mod transition;

// Re-exports for consumers (renderers/hosts)
pub use baking::{bake_playback, export_baked_json, BakeConfig, BakedFrame, BakedPlayback};
pub use config::PlaybackConfig;
pub use events::{CompileWarning, PlaybackEvent};
pub use frame::{sample_transition_frame, TransitionFrame};
pub use position::{apply_movement_actions, lerp_point, phase_base_positions, PositionMap};
pub use possession::{
    collect_transfer_warnings, resolve_ball_owner, resolve_initial_ball_owner,
};
pub use session::{LoopMode, PlaySession, PlaybackState, SessionFrame};
pub use timeline::{compile_phase_timeline, normalize_speed, PhaseTimeline, ScheduledAction};
pub use transition::{compile_play_playback, CompiledPlayback, PhaseTransition};

pub use fastbreak_play_format::{
    parse_play_document, parse_play_document_str, validate_play_document, PlayDocument, PlayPhase,
    Point,
};
