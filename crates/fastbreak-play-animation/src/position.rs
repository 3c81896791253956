//! Object positions at a point in phase time.
//!
//! Position maps are fresh values: every function allocates, populates, and
//! returns its own map and never mutates an input.

use hashbrown::HashMap;

use fastbreak_play_format::{PlayAction, PlayPhase, Point};

use crate::timeline::ScheduledAction;

/// Object id → court position.
pub type PositionMap = HashMap<String, Point>;

/// Snapshot a phase's authored layout.
pub fn phase_base_positions(phase: &PlayPhase) -> PositionMap {
    let mut positions = PositionMap::with_capacity(phase.objects.len());
    for object in &phase.objects {
        positions.insert(object.id.clone(), object.position);
    }
    positions
}

#[inline]
pub fn lerp_point(a: Point, b: Point, t: f32) -> Point {
    Point::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
}

/// Resolve positions at `elapsed_ms` by replaying movement actions over the
/// base layout.
///
/// Only dribble/cut actions with a `fromObjectId` known to the base map move
/// anything; the rest of the action vocabulary communicates state, not
/// geometry. Before its start an action has no effect, at/after its end the
/// object snaps to the action's `to` point, in between it tracks the
/// `from`→`to` line. Actions apply in list order, so a later action
/// overwrites an earlier one wherever their windows overlap.
pub fn apply_movement_actions(
    base: &PositionMap,
    actions: &[PlayAction],
    scheduled: &[ScheduledAction],
    elapsed_ms: f32,
) -> PositionMap {
    let mut positions = base.clone();
    for slot in scheduled {
        let action = match actions.get(slot.action_index) {
            Some(a) => a,
            None => continue,
        };
        if !action.kind.moves_actor() {
            continue;
        }
        let object_id = match action.from_object_id.as_deref() {
            Some(id) if positions.contains_key(id) => id,
            _ => continue,
        };
        if elapsed_ms < slot.start_ms {
            continue;
        }
        let position = if elapsed_ms >= slot.end_ms {
            action.to
        } else {
            let span = slot.end_ms - slot.start_ms;
            let progress = if span > 0.0 {
                ((elapsed_ms - slot.start_ms) / span).clamp(0.0, 1.0)
            } else {
                1.0
            };
            lerp_point(action.from, action.to, progress)
        };
        positions.insert(object_id.to_string(), position);
    }
    positions
}
