//! Pacing configuration for timeline compilation.

use serde::{Deserialize, Serialize};

/// Pacing knobs applied when compiling phase timelines.
/// Defaults match the editor's authoring assumptions; keep this minimal and
/// expand as needed without breaking API.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct PlaybackConfig {
    /// Settle-segment length appended after each phase's actions, in ms
    /// (before speed adjustment).
    pub settle_duration_ms: f32,
    /// Duration assumed for actions with no authored durationMs.
    pub default_action_duration_ms: f32,
    /// Lower clamp for authored action durations.
    pub min_action_duration_ms: f32,
    /// Upper clamp for authored action durations.
    pub max_action_duration_ms: f32,
    /// Floor for the speed-adjusted settle segment.
    pub min_settle_duration_ms: f32,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            settle_duration_ms: 550.0,
            default_action_duration_ms: 900.0,
            min_action_duration_ms: 120.0,
            max_action_duration_ms: 12_000.0,
            min_settle_duration_ms: 120.0,
        }
    }
}
