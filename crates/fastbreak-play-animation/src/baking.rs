//! Baking API: produce fixed-rate frames for export pipelines (video/GIF).

use serde::{Deserialize, Serialize};

use fastbreak_play_format::PlayDocument;

use crate::config::PlaybackConfig;
use crate::frame::sample_transition_frame;
use crate::position::{phase_base_positions, PositionMap};
use crate::transition::compile_play_playback;

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BakeConfig {
    /// Target frame rate (Hz) for baked samples.
    pub frame_rate: f32,
}

impl Default for BakeConfig {
    fn default() -> Self {
        Self { frame_rate: 60.0 }
    }
}

/// One baked sample on the global play clock.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BakedFrame {
    pub time_ms: f32,
    pub transition_index: Option<usize>,
    pub positions: PositionMap,
    pub ball_owner_object_id: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BakedPlayback {
    pub frame_rate: f32,
    pub total_duration_ms: f32,
    pub frame_count: usize,
    pub frames: Vec<BakedFrame>,
}

/// Bake a document at a fixed frame rate, from 0 through the total duration
/// inclusive. A single-phase document bakes exactly one frame (its authored
/// layout).
pub fn bake_playback(
    document: &PlayDocument,
    speed_multiplier: f32,
    config: &PlaybackConfig,
    bake: &BakeConfig,
) -> BakedPlayback {
    let rate = if bake.frame_rate.is_finite() && bake.frame_rate > 0.0 {
        bake.frame_rate
    } else {
        60.0
    };
    let rate = rate.max(1.0);
    let step_ms = 1000.0 / rate;

    let playback = compile_play_playback(document, speed_multiplier, config);
    let total = playback.total_duration_ms;
    let frame_count = (total / step_ms).ceil() as usize + 1; // inclusive of end

    let mut frames = Vec::with_capacity(frame_count);
    for index in 0..frame_count {
        let time_ms = (index as f32 * step_ms).min(total);
        match playback.locate(time_ms) {
            Some((transition_index, local_ms)) => {
                let frame =
                    sample_transition_frame(&playback.transitions[transition_index], local_ms);
                frames.push(BakedFrame {
                    time_ms,
                    transition_index: Some(transition_index),
                    positions: frame.positions,
                    ball_owner_object_id: frame.ball_owner_object_id,
                });
            }
            None => {
                frames.push(BakedFrame {
                    time_ms,
                    transition_index: None,
                    positions: document
                        .phases
                        .first()
                        .map(phase_base_positions)
                        .unwrap_or_default(),
                    ball_owner_object_id: playback
                        .phase_start_owners
                        .first()
                        .cloned()
                        .flatten(),
                });
            }
        }
    }

    BakedPlayback {
        frame_rate: rate,
        total_duration_ms: total,
        frame_count: frames.len(),
        frames,
    }
}

/// Export baked data as serde_json::Value (stable schema for exporters).
pub fn export_baked_json(baked: &BakedPlayback) -> serde_json::Value {
    serde_json::to_value(baked).unwrap_or(serde_json::Value::Null)
}
