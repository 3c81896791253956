//! Schema parsing for untrusted play-document JSON.
//!
//! The editor persists documents as JSON; anything can show up here (imports,
//! stale clients, hand-edited exports). `parse_play_document` walks the raw
//! value in check order and either yields a typed [`PlayDocument`] or the
//! first violated invariant as a [`DocumentError`]. There is no error
//! aggregation: callers get exactly one reason, matching the editor's
//! "fix the first problem" UX.
//!
//! Check order: schema version, court template, phases non-empty, then per
//! phase: id/name, each object, each action (including its animation
//! descriptor), ball-owner override shape.

use serde_json::Value as JsonValue;

use crate::document::{
    CourtTemplate, PlayAction, PlayDocument, PlayObject, PlayPhase, PLAY_SCHEMA_VERSION,
};
use crate::error::DocumentError;

/// Parse JSON text into a typed document. See [`parse_play_document`].
pub fn parse_play_document_str(json: &str) -> Result<PlayDocument, DocumentError> {
    let value: JsonValue = serde_json::from_str(json).map_err(|e| DocumentError::Json {
        reason: e.to_string(),
    })?;
    parse_play_document(&value)
}

/// Guard entry point: check a document without keeping the typed result.
pub fn validate_play_document(json: &JsonValue) -> Result<(), DocumentError> {
    parse_play_document(json).map(|_| ())
}

/// Parse an untrusted JSON value into a typed [`PlayDocument`], failing fast
/// on the first violated invariant.
pub fn parse_play_document(json: &JsonValue) -> Result<PlayDocument, DocumentError> {
    let root = json.as_object().ok_or_else(|| DocumentError::Json {
        reason: "document is not a JSON object".to_string(),
    })?;

    // 1. Schema version must equal the one supported version.
    let version = root.get("schemaVersion");
    let version_ok = version
        .and_then(JsonValue::as_u64)
        .map(|v| v == u64::from(PLAY_SCHEMA_VERSION))
        .unwrap_or(false);
    if !version_ok {
        return Err(DocumentError::UnsupportedSchemaVersion {
            found: render_found(version),
            expected: PLAY_SCHEMA_VERSION,
        });
    }

    // 2. Court template must be one of the recognized tags.
    let template = root.get("courtTemplate");
    let court_template: CourtTemplate = template
        .cloned()
        .and_then(|v| serde_json::from_value(v).ok())
        .ok_or_else(|| DocumentError::UnknownCourtTemplate {
            found: render_found(template),
        })?;

    // 3. Phases must be a non-empty array.
    let raw_phases = match root.get("phases").and_then(JsonValue::as_array) {
        Some(arr) if !arr.is_empty() => arr,
        _ => return Err(DocumentError::EmptyPhases),
    };

    let mut phases = Vec::with_capacity(raw_phases.len());
    for (index, raw) in raw_phases.iter().enumerate() {
        phases.push(parse_phase(index, raw)?);
    }

    Ok(PlayDocument {
        schema_version: PLAY_SCHEMA_VERSION,
        court_template,
        phases,
    })
}

fn parse_phase(index: usize, raw: &JsonValue) -> Result<PlayPhase, DocumentError> {
    let map = raw.as_object().ok_or_else(|| DocumentError::MalformedPhase {
        index,
        reason: "not a JSON object".to_string(),
    })?;

    let id = map
        .get("id")
        .and_then(JsonValue::as_str)
        .ok_or_else(|| DocumentError::MalformedPhase {
            index,
            reason: "missing string id".to_string(),
        })?
        .to_string();
    let name = map
        .get("name")
        .and_then(JsonValue::as_str)
        .ok_or_else(|| DocumentError::MalformedPhase {
            index,
            reason: "missing string name".to_string(),
        })?
        .to_string();

    let objects = parse_entries(map.get("objects"), index, "objects", parse_object)?;
    let actions = parse_entries(map.get("actions"), index, "actions", parse_action)?;

    // Tri-state override: absent, null, or a string. Anything else is a
    // shape violation; referential validity is the possession resolver's
    // problem, not the validator's.
    let ball_owner_object_id = match map.get("ballOwnerObjectId") {
        None => None,
        Some(JsonValue::Null) => Some(None),
        Some(JsonValue::String(s)) => Some(Some(s.clone())),
        Some(_) => return Err(DocumentError::InvalidBallOwner { phase: index }),
    };

    Ok(PlayPhase {
        id,
        name,
        objects,
        actions,
        ball_owner_object_id,
    })
}

/// Parse an optional array field, applying `parse_one` per element. A missing
/// key is an empty list; a present non-array is a phase-shape violation.
fn parse_entries<T>(
    field: Option<&JsonValue>,
    phase: usize,
    field_name: &str,
    parse_one: impl Fn(usize, usize, &JsonValue) -> Result<T, DocumentError>,
) -> Result<Vec<T>, DocumentError> {
    let raw = match field {
        None => return Ok(Vec::new()),
        Some(JsonValue::Array(arr)) => arr,
        Some(_) => {
            return Err(DocumentError::MalformedPhase {
                index: phase,
                reason: format!("{field_name} must be an array"),
            })
        }
    };
    let mut out = Vec::with_capacity(raw.len());
    for (index, value) in raw.iter().enumerate() {
        out.push(parse_one(phase, index, value)?);
    }
    Ok(out)
}

fn parse_object(phase: usize, index: usize, raw: &JsonValue) -> Result<PlayObject, DocumentError> {
    let object: PlayObject =
        serde_json::from_value(raw.clone()).map_err(|e| DocumentError::MalformedObject {
            phase,
            index,
            reason: e.to_string(),
        })?;
    if !object.position.in_bounds() {
        return Err(DocumentError::MalformedObject {
            phase,
            index,
            reason: "position out of court bounds".to_string(),
        });
    }
    Ok(object)
}

fn parse_action(phase: usize, index: usize, raw: &JsonValue) -> Result<PlayAction, DocumentError> {
    let action: PlayAction =
        serde_json::from_value(raw.clone()).map_err(|e| DocumentError::MalformedAction {
            phase,
            index,
            reason: e.to_string(),
        })?;
    if !action.from.in_bounds() {
        return Err(DocumentError::MalformedAction {
            phase,
            index,
            reason: "from point out of court bounds".to_string(),
        });
    }
    if !action.to.in_bounds() {
        return Err(DocumentError::MalformedAction {
            phase,
            index,
            reason: "to point out of court bounds".to_string(),
        });
    }
    // The nested animation descriptor (trigger tag, numeric durationMs) is
    // covered by the typed parse above; out-of-range durations are a timeline
    // concern and get clamped there rather than rejected here.
    Ok(action)
}

/// Render what was actually found for error messages ("missing" for absent
/// keys, compact JSON otherwise).
fn render_found(value: Option<&JsonValue>) -> String {
    match value {
        None => "missing".to_string(),
        Some(v) => v.to_string(),
    }
}
