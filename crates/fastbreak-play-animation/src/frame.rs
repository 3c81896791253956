//! Per-frame sampling. The only code that runs at animation-frame rate.

use serde::{Deserialize, Serialize};

use crate::position::{apply_movement_actions, lerp_point, PositionMap};
use crate::possession::resolve_ball_owner;
use crate::transition::PhaseTransition;

/// One renderable snapshot of a transition.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionFrame {
    pub positions: PositionMap,
    pub ball_owner_object_id: Option<String>,
    /// Progress through the action segment, 0..=1.
    pub action_progress: f32,
    /// Progress through the settle segment, 0..=1.
    pub settle_progress: f32,
    pub is_settle_segment: bool,
}

/// Sample a transition at `elapsed_ms`, clamped into the transition's
/// lifetime.
///
/// Pure and idempotent: same inputs, same frame. Safe to call per rendered
/// frame, to scrub in any order, or from multiple renderers at once.
pub fn sample_transition_frame(transition: &PhaseTransition, elapsed_ms: f32) -> TransitionFrame {
    let timeline = &transition.timeline;
    let elapsed = if elapsed_ms.is_finite() {
        elapsed_ms.clamp(0.0, timeline.total_duration_ms)
    } else {
        0.0
    };

    if elapsed <= timeline.action_duration_ms {
        let action_progress = if timeline.action_duration_ms > 0.0 {
            (elapsed / timeline.action_duration_ms).clamp(0.0, 1.0)
        } else {
            1.0
        };
        let positions = apply_movement_actions(
            &transition.base_positions,
            &transition.actions,
            &timeline.actions,
            elapsed,
        );
        let ball_owner_object_id = resolve_ball_owner(
            transition.start_owner_object_id.as_deref(),
            &transition.actions,
            &timeline.actions,
            elapsed,
        );
        return TransitionFrame {
            positions,
            ball_owner_object_id,
            action_progress,
            settle_progress: 0.0,
            is_settle_segment: false,
        };
    }

    let settle_elapsed = elapsed - timeline.action_duration_ms;
    let settle_progress = if timeline.settle_duration_ms > 0.0 {
        (settle_elapsed / timeline.settle_duration_ms).clamp(0.0, 1.0)
    } else {
        1.0
    };

    // Glide over the union of ids; an id present in only one map passes
    // through unchanged.
    let mut positions = PositionMap::with_capacity(
        transition
            .post_action_positions
            .len()
            .max(transition.target_positions.len()),
    );
    for (id, from) in &transition.post_action_positions {
        let position = match transition.target_positions.get(id) {
            Some(to) => lerp_point(*from, *to, settle_progress),
            None => *from,
        };
        positions.insert(id.clone(), position);
    }
    for (id, to) in &transition.target_positions {
        if !positions.contains_key(id) {
            positions.insert(id.clone(), *to);
        }
    }

    TransitionFrame {
        positions,
        ball_owner_object_id: transition.end_owner_object_id.clone(),
        action_progress: 1.0,
        settle_progress,
        is_settle_segment: true,
    }
}
