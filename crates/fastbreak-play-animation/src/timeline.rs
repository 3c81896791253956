//! Per-phase action scheduling.
//!
//! Turns a phase's authored action list into absolute start/end times on the
//! phase clock. Scheduling is sequential by default; a `with_previous`
//! trigger joins the previous action's start so several actions render as
//! one simultaneous group. Only `after_previous` advances the sequential
//! cursor.

use serde::{Deserialize, Serialize};

use fastbreak_play_format::{PlayAction, PlayPhase, Trigger};

use crate::config::PlaybackConfig;

/// One action placed on the phase clock.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledAction {
    /// Index into the phase's authored action list.
    pub action_index: usize,
    pub start_ms: f32,
    pub end_ms: f32,
    pub duration_ms: f32,
    pub trigger: Trigger,
}

/// A phase's compiled schedule: the action window followed by a settle
/// window.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PhaseTimeline {
    pub actions: Vec<ScheduledAction>,
    /// Max end time across all scheduled actions; 0 when the phase has none.
    pub action_duration_ms: f32,
    pub settle_duration_ms: f32,
    pub total_duration_ms: f32,
}

/// Clamp a speed multiplier to a usable value. Non-finite or non-positive
/// speeds fall back to 1.
#[inline]
pub fn normalize_speed(speed: f32) -> f32 {
    if speed.is_finite() && speed > 0.0 {
        speed
    } else {
        1.0
    }
}

/// Effective duration of one action: authored value clamped into the
/// configured range, default when absent or non-finite.
fn action_duration_ms(action: &PlayAction, config: &PlaybackConfig) -> f32 {
    match action.animation.as_ref().and_then(|a| a.duration_ms) {
        Some(d) if d.is_finite() => {
            d.clamp(config.min_action_duration_ms, config.max_action_duration_ms)
        }
        _ => config.default_action_duration_ms,
    }
}

/// Schedule a phase's actions in authoring order.
pub fn compile_phase_timeline(
    phase: &PlayPhase,
    speed_multiplier: f32,
    config: &PlaybackConfig,
) -> PhaseTimeline {
    let speed = normalize_speed(speed_multiplier);

    let mut actions = Vec::with_capacity(phase.actions.len());
    let mut max_end_ms = 0.0_f32;
    let mut prev_start_ms = 0.0_f32;

    for (action_index, action) in phase.actions.iter().enumerate() {
        let duration_ms = action_duration_ms(action, config) / speed;
        let trigger = action.trigger();
        let start_ms = if action_index == 0 {
            0.0
        } else {
            match trigger {
                // Join the previous action's anchor, not its end.
                Trigger::WithPrevious => prev_start_ms,
                Trigger::AfterPrevious => max_end_ms,
            }
        };
        let end_ms = start_ms + duration_ms;
        max_end_ms = max_end_ms.max(end_ms);
        prev_start_ms = start_ms;
        actions.push(ScheduledAction {
            action_index,
            start_ms,
            end_ms,
            duration_ms,
            trigger,
        });
    }

    let settle_duration_ms =
        (config.settle_duration_ms / speed).max(config.min_settle_duration_ms);

    PhaseTimeline {
        actions,
        action_duration_ms: max_end_ms,
        settle_duration_ms,
        total_duration_ms: max_end_ms + settle_duration_ms,
    }
}
