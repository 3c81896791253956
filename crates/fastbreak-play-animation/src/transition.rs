//! Whole-play compilation: one transition per consecutive phase pair.
//!
//! A transition owns everything frame sampling needs, so renderers can hold
//! a [`CompiledPlayback`] and never touch the document again. Compilation is
//! the one "write" operation in this crate; speed changes recompute the
//! whole value.

use log::debug;
use serde::{Deserialize, Serialize};

use fastbreak_play_format::{PlayAction, PlayDocument};

use crate::config::PlaybackConfig;
use crate::events::CompileWarning;
use crate::position::{apply_movement_actions, phase_base_positions, PositionMap};
use crate::possession::{
    collect_transfer_warnings, resolve_ball_owner, resolve_initial_ball_owner,
};
use crate::timeline::{compile_phase_timeline, PhaseTimeline};

/// The compiled bridge from one phase to the next.
///
/// The action segment covers `[0, action_duration_ms]` of the timeline and
/// runs movement/possession logic; the settle segment covers the remainder
/// and glides every object from `post_action_positions` to the next phase's
/// authored layout, so phase boundaries always reconcile visually.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseTransition {
    pub from_phase: usize,
    pub to_phase: usize,
    pub timeline: PhaseTimeline,
    /// The from phase's authored actions, carried so frames can be sampled
    /// from the transition alone.
    pub actions: Vec<PlayAction>,
    /// The from phase's authored layout.
    pub base_positions: PositionMap,
    /// Positions at the end of the action segment.
    pub post_action_positions: PositionMap,
    /// The to phase's authored layout.
    pub target_positions: PositionMap,
    pub start_owner_object_id: Option<String>,
    pub end_owner_object_id: Option<String>,
    pub warnings: Vec<CompileWarning>,
}

/// A fully compiled play.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompiledPlayback {
    pub transitions: Vec<PhaseTransition>,
    /// One entry per phase; the final entry serves renderers after the last
    /// transition ends.
    pub phase_start_owners: Vec<Option<String>>,
    /// Sum of transition totals; 0 for a single-phase document.
    pub total_duration_ms: f32,
}

impl CompiledPlayback {
    /// Map a global clock position onto (transition index, local elapsed).
    /// Times at a boundary belong to the entered transition; times past the
    /// end stay in the final one. `None` when there are no transitions.
    pub fn locate(&self, global_ms: f32) -> Option<(usize, f32)> {
        let last = self.transitions.len().checked_sub(1)?;
        let mut offset = 0.0_f32;
        for (index, transition) in self.transitions.iter().enumerate() {
            let end = offset + transition.timeline.total_duration_ms;
            if global_ms < end || index == last {
                return Some((index, global_ms - offset));
            }
            offset = end;
        }
        None
    }

    /// Global start offset of a transition on the play clock.
    pub fn transition_offset_ms(&self, index: usize) -> f32 {
        self.transitions
            .iter()
            .take(index)
            .map(|t| t.timeline.total_duration_ms)
            .sum()
    }
}

/// Compile every consecutive phase pair of a document.
///
/// Possession carries across transitions: each phase starts with the
/// previous transition's end owner unless it declares its own
/// `ballOwnerObjectId` (an explicit null counts as a declaration), which
/// always wins so authors can correct an inferred chain.
pub fn compile_play_playback(
    document: &PlayDocument,
    speed_multiplier: f32,
    config: &PlaybackConfig,
) -> CompiledPlayback {
    let phase_count = document.phases.len();
    let mut transitions = Vec::with_capacity(phase_count.saturating_sub(1));
    let mut phase_start_owners = Vec::with_capacity(phase_count);
    let mut total_duration_ms = 0.0_f32;
    let mut carried_owner: Option<String> = None;

    for (index, phase) in document.phases.iter().enumerate() {
        let start_owner = if index == 0 || phase.ball_owner_object_id.is_some() {
            resolve_initial_ball_owner(phase)
        } else {
            carried_owner.clone()
        };
        phase_start_owners.push(start_owner.clone());

        if index + 1 == phase_count {
            break;
        }

        let timeline = compile_phase_timeline(phase, speed_multiplier, config);
        let base_positions = phase_base_positions(phase);
        let post_action_positions = apply_movement_actions(
            &base_positions,
            &phase.actions,
            &timeline.actions,
            timeline.action_duration_ms,
        );
        let end_owner = resolve_ball_owner(
            start_owner.as_deref(),
            &phase.actions,
            &timeline.actions,
            timeline.action_duration_ms,
        );
        let warnings = collect_transfer_warnings(&phase.actions);

        total_duration_ms += timeline.total_duration_ms;
        carried_owner = end_owner.clone();
        transitions.push(PhaseTransition {
            from_phase: index,
            to_phase: index + 1,
            timeline,
            actions: phase.actions.clone(),
            base_positions,
            post_action_positions,
            target_positions: phase_base_positions(&document.phases[index + 1]),
            start_owner_object_id: start_owner,
            end_owner_object_id: end_owner,
            warnings,
        });
    }

    debug!(
        "compiled {} transitions over {} phases ({}ms)",
        transitions.len(),
        phase_count,
        total_duration_ms
    );
    CompiledPlayback {
        transitions,
        phase_start_owners,
        total_duration_ms,
    }
}
