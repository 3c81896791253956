//! Stateful playback session for UI hosts.
//!
//! Wraps the pure compiler/sampler with a clock, loop modes, and event
//! emission. Hosts call [`PlaySession::advance`] once per rendered frame
//! with wall-clock dt (compiled timelines are already speed-adjusted, so
//! raw milliseconds are correct); scrubbers use [`PlaySession::frame_at_ms`]
//! which never mutates.

use serde::{Deserialize, Serialize};

use fastbreak_play_format::PlayDocument;

use crate::config::PlaybackConfig;
use crate::events::PlaybackEvent;
use crate::frame::{sample_transition_frame, TransitionFrame};
use crate::position::phase_base_positions;
use crate::timeline::normalize_speed;
use crate::transition::{compile_play_playback, CompiledPlayback};

/// How the global clock wraps at the end of the play.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum LoopMode {
    Once,
    Loop,
    PingPong,
}

/// Playback state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaybackState {
    /// Session is stopped at the top of the play
    Stopped,
    /// Session is playing
    Playing,
    /// Session is paused
    Paused,
    /// Session has reached the end (Once mode)
    Ended,
}

impl PlaybackState {
    /// Get the name of this playback state
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Stopped => "stopped",
            Self::Playing => "playing",
            Self::Paused => "paused",
            Self::Ended => "ended",
        }
    }

    /// Check if the session is actively playing
    #[inline]
    pub fn is_playing(&self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Check if the session can be resumed
    #[inline]
    pub fn can_resume(&self) -> bool {
        matches!(self, Self::Paused | Self::Stopped | Self::Ended)
    }

    /// Check if the session can be paused
    #[inline]
    pub fn can_pause(&self) -> bool {
        matches!(self, Self::Playing)
    }
}

fn fmod(a: f32, b: f32) -> f32 {
    if b == 0.0 {
        return 0.0;
    }
    let m = a % b;
    if (m < 0.0 && b > 0.0) || (m > 0.0 && b < 0.0) {
        m + b
    } else {
        m
    }
}

/// Reflect t into [0, span] with ping-pong behavior, where period = 2 * span.
fn ping_pong(t: f32, span: f32) -> f32 {
    if span <= 0.0 {
        return 0.0;
    }
    let period = 2.0 * span;
    let m = fmod(t, period);
    if m < 0.0 {
        let mm = m + period;
        if mm <= span {
            mm
        } else {
            period - mm
        }
    } else if m <= span {
        m
    } else {
        period - m
    }
}

/// One sampled step of a session: the active transition (if any), its frame,
/// and the events this step produced.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionFrame {
    pub transition_index: Option<usize>,
    pub frame: TransitionFrame,
    pub events: Vec<PlaybackEvent>,
}

/// Owns a compiled playback plus a clock.
///
/// The session never mutates the document; speed changes recompile the
/// playback in full and rebase the clock at the same normalized position.
#[derive(Clone, Debug)]
pub struct PlaySession {
    document: PlayDocument,
    config: PlaybackConfig,
    playback: CompiledPlayback,
    speed: f32,
    /// Raw accumulated clock; loop modes wrap it at sampling time.
    time_ms: f32,
    state: PlaybackState,
    loop_mode: LoopMode,
    last_transition: Option<usize>,
    last_owner: Option<String>,
}

impl PlaySession {
    pub fn new(document: PlayDocument, config: PlaybackConfig) -> Self {
        let playback = compile_play_playback(&document, 1.0, &config);
        let last_owner = playback.phase_start_owners.first().cloned().flatten();
        Self {
            document,
            config,
            playback,
            speed: 1.0,
            time_ms: 0.0,
            state: PlaybackState::Stopped,
            loop_mode: LoopMode::Once,
            last_transition: None,
            last_owner,
        }
    }

    #[inline]
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    #[inline]
    pub fn loop_mode(&self) -> LoopMode {
        self.loop_mode
    }

    #[inline]
    pub fn total_duration_ms(&self) -> f32 {
        self.playback.total_duration_ms
    }

    /// Current position on the play clock, wrapped per the loop mode.
    pub fn position_ms(&self) -> f32 {
        self.clock_position()
    }

    #[inline]
    pub fn playback(&self) -> &CompiledPlayback {
        &self.playback
    }

    #[inline]
    pub fn document(&self) -> &PlayDocument {
        &self.document
    }

    pub fn play(&mut self) {
        if self.state == PlaybackState::Ended {
            // Replaying a finished play restarts from the top.
            self.time_ms = 0.0;
            self.last_transition = None;
        }
        self.state = PlaybackState::Playing;
    }

    pub fn pause(&mut self) {
        if self.state.can_pause() {
            self.state = PlaybackState::Paused;
        }
    }

    pub fn stop(&mut self) {
        self.time_ms = 0.0;
        self.state = PlaybackState::Stopped;
        self.last_transition = None;
        self.last_owner = self.playback.phase_start_owners.first().cloned().flatten();
    }

    pub fn seek_ms(&mut self, global_ms: f32) {
        self.time_ms = if global_ms.is_finite() {
            global_ms.clamp(0.0, self.playback.total_duration_ms)
        } else {
            0.0
        };
        if self.state == PlaybackState::Ended
            && self.time_ms < self.playback.total_duration_ms
        {
            self.state = PlaybackState::Paused;
        }
    }

    pub fn set_loop_mode(&mut self, mode: LoopMode) {
        self.loop_mode = mode;
    }

    /// Change the playback speed, recompiling the whole playback and keeping
    /// the clock at the same normalized position.
    pub fn set_speed(&mut self, speed: f32) {
        let speed = normalize_speed(speed);
        if speed == self.speed {
            return;
        }
        let old_total = self.playback.total_duration_ms;
        let normalized = if old_total > 0.0 {
            (self.clock_position() / old_total).clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.speed = speed;
        self.playback = compile_play_playback(&self.document, speed, &self.config);
        self.time_ms = normalized * self.playback.total_duration_ms;
    }

    /// Advance the clock by `dt_ms` of wall time and sample.
    ///
    /// Paused/stopped sessions return the current frame with no events.
    /// In `Once` mode the clock clamps at the end and `PlaybackEnded` fires
    /// exactly once.
    pub fn advance(&mut self, dt_ms: f32) -> SessionFrame {
        let advanced = self.state.is_playing() && dt_ms.is_finite() && dt_ms > 0.0;
        let mut ended = false;
        if advanced {
            self.time_ms += dt_ms;
            let total = self.playback.total_duration_ms;
            if matches!(self.loop_mode, LoopMode::Once) && self.time_ms >= total {
                self.time_ms = total;
                self.state = PlaybackState::Ended;
                ended = true;
            }
        }

        let mut frame = self.lookup(self.clock_position());
        if advanced {
            let mut events = Vec::new();
            if frame.transition_index != self.last_transition {
                if let Some(transition_index) = frame.transition_index {
                    events.push(PlaybackEvent::TransitionStarted { transition_index });
                }
                self.last_transition = frame.transition_index;
            }
            if frame.frame.ball_owner_object_id != self.last_owner {
                events.push(PlaybackEvent::PossessionChanged {
                    previous: self.last_owner.clone(),
                    current: frame.frame.ball_owner_object_id.clone(),
                });
                self.last_owner = frame.frame.ball_owner_object_id.clone();
            }
            if ended {
                events.push(PlaybackEvent::PlaybackEnded);
            }
            frame.events = events;
        }
        frame
    }

    /// Pure lookup at a global clock position, for scrubbers. No state
    /// change, no events.
    pub fn frame_at_ms(&self, global_ms: f32) -> SessionFrame {
        let clamped = if global_ms.is_finite() {
            global_ms.clamp(0.0, self.playback.total_duration_ms)
        } else {
            0.0
        };
        self.lookup(clamped)
    }

    fn lookup(&self, global_ms: f32) -> SessionFrame {
        match self.playback.locate(global_ms) {
            Some((index, local_ms)) => SessionFrame {
                transition_index: Some(index),
                frame: sample_transition_frame(&self.playback.transitions[index], local_ms),
                events: Vec::new(),
            },
            None => self.static_frame(),
        }
    }

    /// Single-phase documents have nothing to animate; hold the authored
    /// layout with both segments reported complete.
    fn static_frame(&self) -> SessionFrame {
        let positions = self
            .document
            .phases
            .first()
            .map(phase_base_positions)
            .unwrap_or_default();
        SessionFrame {
            transition_index: None,
            frame: TransitionFrame {
                positions,
                ball_owner_object_id: self.playback.phase_start_owners.first().cloned().flatten(),
                action_progress: 1.0,
                settle_progress: 1.0,
                is_settle_segment: false,
            },
            events: Vec::new(),
        }
    }

    fn clock_position(&self) -> f32 {
        let total = self.playback.total_duration_ms;
        if total <= 0.0 {
            return 0.0;
        }
        match self.loop_mode {
            LoopMode::Once => self.time_ms.clamp(0.0, total),
            LoopMode::Loop => {
                let m = fmod(self.time_ms, total);
                if m < 0.0 {
                    m + total
                } else {
                    m
                }
            }
            LoopMode::PingPong => ping_pong(self.time_ms, total),
        }
    }
}
