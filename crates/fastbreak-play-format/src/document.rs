//! Canonical play-diagram document model.
//!
//! Field names mirror the editor's JSON schema (camelCase on the wire, with
//! `type` tags for object/action kinds). Authoring order of phases, objects,
//! and actions is semantically significant and is preserved verbatim: it
//! drives both action scheduling and possession resolution downstream.

use serde::{Deserialize, Deserializer, Serialize};

use crate::geom::Point;

/// The only schema version this library understands.
pub const PLAY_SCHEMA_VERSION: u32 = 1;

/// Court layout family a diagram is drawn against.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CourtTemplate {
    #[serde(rename = "half")]
    HalfCourt,
    #[serde(rename = "full-vertical")]
    FullCourtVertical,
    #[serde(rename = "full-horizontal")]
    FullCourtHorizontal,
}

/// Diagram object kinds. Players come in offense/defense flavors; everything
/// else is inert court furniture.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Offense,
    Defense,
    Ball,
    Cone,
    Text,
    Rectangle,
    Circle,
}

impl ObjectKind {
    /// Offense or defense player (the only kinds that can own the ball).
    #[inline]
    pub fn is_player(&self) -> bool {
        matches!(self, Self::Offense | Self::Defense)
    }
}

/// One object placed in a phase snapshot.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlayObject {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ObjectKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub position: Point,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Discrete event kinds an author can attach to a phase.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Dribble,
    Pass,
    Cut,
    Screen,
    Shot,
    Handoff,
}

impl ActionKind {
    /// Kinds that move their acting object during playback. Passes, screens,
    /// shots, and handoffs communicate state, not geometry.
    #[inline]
    pub fn moves_actor(&self) -> bool {
        matches!(self, Self::Dribble | Self::Cut)
    }

    /// Kinds that can hand the ball to another player.
    #[inline]
    pub fn transfers_ball(&self) -> bool {
        matches!(self, Self::Pass | Self::Handoff)
    }

    /// Wire tag, for messages.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Dribble => "dribble",
            Self::Pass => "pass",
            Self::Cut => "cut",
            Self::Screen => "screen",
            Self::Shot => "shot",
            Self::Handoff => "handoff",
        }
    }
}

/// Scheduling relationship of an action to its predecessor.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Trigger {
    AfterPrevious,
    WithPrevious,
}

impl Default for Trigger {
    fn default() -> Self {
        Trigger::AfterPrevious
    }
}

/// Optional per-action animation descriptor.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActionAnimation {
    #[serde(default)]
    pub trigger: Trigger,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<f32>,
}

/// One discrete event inside a phase.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlayAction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ActionKind,
    pub from: Point,
    pub to: Point,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_object_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_object_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<ActionAnimation>,
}

impl PlayAction {
    /// Effective trigger, defaulting to sequential when no descriptor exists.
    #[inline]
    pub fn trigger(&self) -> Trigger {
        self.animation
            .as_ref()
            .map(|a| a.trigger)
            .unwrap_or_default()
    }
}

/// One authored snapshot of object positions plus the actions that carry the
/// play from this snapshot toward the next.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlayPhase {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub objects: Vec<PlayObject>,
    #[serde(default)]
    pub actions: Vec<PlayAction>,
    /// Manual possession override, tri-state on the wire:
    /// key absent = infer, explicit `null` = nobody owns the ball,
    /// a string = that player object owns it.
    #[serde(
        default,
        deserialize_with = "deserialize_ball_owner",
        skip_serializing_if = "Option::is_none"
    )]
    pub ball_owner_object_id: Option<Option<String>>,
}

impl PlayPhase {
    /// Look up an object in this phase by id.
    pub fn find_object(&self, id: &str) -> Option<&PlayObject> {
        self.objects.iter().find(|o| o.id == id)
    }
}

/// An entire authored play: a court template plus an ordered, non-empty list
/// of phases. Immutable once handed to the compiler.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlayDocument {
    pub schema_version: u32,
    pub court_template: CourtTemplate,
    pub phases: Vec<PlayPhase>,
}

/// Keeps "key present with null" distinct from "key absent": serde collapses
/// both into `None` without this shim.
fn deserialize_ball_owner<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}
