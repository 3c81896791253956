//! Warning and event payloads surfaced to hosts.
//!
//! Warnings come out of compilation (non-fatal authoring anomalies); events
//! come out of a running [`crate::session::PlaySession`]. Hosts transport
//! both as JSON.

use serde::{Deserialize, Serialize};

/// Non-fatal compile-time anomaly attached to the affected transition.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompileWarning {
    pub action_id: String,
    pub message: String,
}

/// Discrete semantic signals emitted while a session advances.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[non_exhaustive]
pub enum PlaybackEvent {
    TransitionStarted {
        transition_index: usize,
    },
    PossessionChanged {
        previous: Option<String>,
        current: Option<String>,
    },
    PlaybackEnded,
}
