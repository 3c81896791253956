//! Ball-owner state machine.
//!
//! Possession is logical: the compiler tracks which player holds the ball
//! and leaves ball-marker geometry to the renderer. Initial owners come from
//! the phase (explicit override first, then legacy inference); within a
//! phase only completed pass/handoff actions move ownership.

use fastbreak_play_format::{ObjectKind, PlayAction, PlayObject, PlayPhase};
use log::warn;

use crate::events::CompileWarning;
use crate::timeline::ScheduledAction;

/// Resolve the owner a phase starts with.
///
/// Precedence: the explicit `ballOwnerObjectId` field (null means "no
/// owner", a stale id falls through to inference since the editor may have
/// deleted the object); else the player nearest an authored ball marker
/// (diagrams predating the explicit field); else the first offense player;
/// else none.
pub fn resolve_initial_ball_owner(phase: &PlayPhase) -> Option<String> {
    match &phase.ball_owner_object_id {
        Some(None) => return None,
        Some(Some(id)) => {
            let is_player = phase
                .find_object(id)
                .map(|o| o.kind.is_player())
                .unwrap_or(false);
            if is_player {
                return Some(id.clone());
            }
        }
        None => {}
    }

    if let Some(ball) = phase.objects.iter().find(|o| o.kind == ObjectKind::Ball) {
        let mut nearest: Option<(&PlayObject, f32)> = None;
        for object in phase.objects.iter().filter(|o| o.kind.is_player()) {
            let distance = object.position.distance_to(&ball.position);
            let closer = nearest.map(|(_, best)| distance < best).unwrap_or(true);
            if closer {
                nearest = Some((object, distance));
            }
        }
        if let Some((object, _)) = nearest {
            return Some(object.id.clone());
        }
    }

    phase
        .objects
        .iter()
        .find(|o| o.kind == ObjectKind::Offense)
        .map(|o| o.id.clone())
}

/// Resolve the owner at `elapsed_ms`, starting from the phase's start owner.
///
/// Only pass/handoff actions with a `toObjectId` change ownership, and only
/// once their end time has been reached. The last completed transfer in list
/// order wins. Untargeted transfers leave the owner untouched (the compiler
/// reports them as warnings).
pub fn resolve_ball_owner(
    start_owner: Option<&str>,
    actions: &[PlayAction],
    scheduled: &[ScheduledAction],
    elapsed_ms: f32,
) -> Option<String> {
    let mut owner = start_owner.map(str::to_string);
    for slot in scheduled {
        let action = match actions.get(slot.action_index) {
            Some(a) => a,
            None => continue,
        };
        if !action.kind.transfers_ball() {
            continue;
        }
        if elapsed_ms < slot.end_ms {
            continue;
        }
        if let Some(target) = &action.to_object_id {
            owner = Some(target.clone());
        }
    }
    owner
}

/// One warning per untargeted pass/handoff in the list.
pub fn collect_transfer_warnings(actions: &[PlayAction]) -> Vec<CompileWarning> {
    let mut warnings = Vec::new();
    for action in actions {
        if action.kind.transfers_ball() && action.to_object_id.is_none() {
            warn!(
                "{} action '{}' has no toObjectId; possession left unchanged",
                action.kind.name(),
                action.id
            );
            warnings.push(CompileWarning {
                action_id: action.id.clone(),
                message: format!(
                    "{} action has no toObjectId; possession left unchanged",
                    action.kind.name()
                ),
            });
        }
    }
    warnings
}
