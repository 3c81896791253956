use serde_json::json;

use fastbreak_play_format::{
    parse_play_document, parse_play_document_str, validate_play_document, ActionKind,
    CourtTemplate, DocumentError, ObjectKind, Trigger,
};

/// Minimal well-formed two-phase document used as the baseline fixture.
fn base_document() -> serde_json::Value {
    json!({
        "schemaVersion": 1,
        "courtTemplate": "half",
        "phases": [
            {
                "id": "phase-1",
                "name": "Setup",
                "objects": [
                    { "id": "p1", "type": "offense", "label": "1", "position": { "x": 100.0, "y": 100.0 } },
                    { "id": "p2", "type": "offense", "position": { "x": 300.0, "y": 100.0 } },
                    { "id": "d1", "type": "defense", "position": { "x": 200.0, "y": 200.0 } },
                    { "id": "ball", "type": "ball", "position": { "x": 110.0, "y": 110.0 } }
                ],
                "actions": [
                    {
                        "id": "a1",
                        "type": "pass",
                        "from": { "x": 100.0, "y": 100.0 },
                        "to": { "x": 300.0, "y": 100.0 },
                        "fromObjectId": "p1",
                        "toObjectId": "p2",
                        "animation": { "trigger": "after_previous", "durationMs": 800.0 }
                    }
                ]
            },
            {
                "id": "phase-2",
                "name": "Finish",
                "objects": [
                    { "id": "p1", "type": "offense", "position": { "x": 150.0, "y": 400.0 } },
                    { "id": "p2", "type": "offense", "position": { "x": 500.0, "y": 300.0 } }
                ],
                "actions": []
            }
        ]
    })
}

/// it should parse a well-formed document and preserve authoring order
#[test]
fn parses_valid_document() {
    let doc = parse_play_document(&base_document()).expect("valid document");
    assert_eq!(doc.schema_version, 1);
    assert_eq!(doc.court_template, CourtTemplate::HalfCourt);
    assert_eq!(doc.phases.len(), 2);

    let setup = &doc.phases[0];
    assert_eq!(setup.id, "phase-1");
    assert_eq!(setup.name, "Setup");
    let ids: Vec<_> = setup.objects.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, vec!["p1", "p2", "d1", "ball"]);
    assert_eq!(setup.objects[0].kind, ObjectKind::Offense);
    assert_eq!(setup.objects[3].kind, ObjectKind::Ball);

    let pass = &setup.actions[0];
    assert_eq!(pass.kind, ActionKind::Pass);
    assert_eq!(pass.from_object_id.as_deref(), Some("p1"));
    assert_eq!(pass.to_object_id.as_deref(), Some("p2"));
    let anim = pass.animation.as_ref().expect("animation descriptor");
    assert_eq!(anim.trigger, Trigger::AfterPrevious);
    assert_eq!(anim.duration_ms, Some(800.0));

    assert!(validate_play_document(&base_document()).is_ok());
}

/// it should reject schemaVersion != 1 and mention the unsupported version
#[test]
fn rejects_unsupported_schema_version() {
    let mut doc = base_document();
    doc["schemaVersion"] = json!(2);
    let err = parse_play_document(&doc).expect_err("version 2 rejected");
    assert!(matches!(
        err,
        DocumentError::UnsupportedSchemaVersion { .. }
    ));
    let msg = err.to_string();
    assert!(
        msg.contains("unsupported schema version") && msg.contains('2'),
        "got: {msg}"
    );

    doc.as_object_mut().unwrap().remove("schemaVersion");
    let err = parse_play_document(&doc).expect_err("missing version rejected");
    assert!(err.to_string().contains("missing"));
}

/// it should check the schema version before anything else in the document
#[test]
fn schema_version_checked_first() {
    // Both the version and the phases are broken; the version wins.
    let doc = json!({
        "schemaVersion": "two",
        "courtTemplate": "moon-court",
        "phases": "not an array"
    });
    let err = parse_play_document(&doc).expect_err("rejected");
    assert!(matches!(
        err,
        DocumentError::UnsupportedSchemaVersion { .. }
    ));
}

/// it should reject unrecognized court templates
#[test]
fn rejects_unknown_court_template() {
    let mut doc = base_document();
    doc["courtTemplate"] = json!("quarter");
    let err = parse_play_document(&doc).expect_err("rejected");
    assert!(matches!(err, DocumentError::UnknownCourtTemplate { .. }));
    assert!(err.to_string().contains("quarter"));

    for template in ["half", "full-vertical", "full-horizontal"] {
        let mut doc = base_document();
        doc["courtTemplate"] = json!(template);
        parse_play_document(&doc).expect("recognized template");
    }
}

/// it should reject documents with no phases
#[test]
fn rejects_empty_phases() {
    let mut doc = base_document();
    doc["phases"] = json!([]);
    assert_eq!(
        parse_play_document(&doc).expect_err("rejected"),
        DocumentError::EmptyPhases
    );

    doc.as_object_mut().unwrap().remove("phases");
    assert_eq!(
        parse_play_document(&doc).expect_err("rejected"),
        DocumentError::EmptyPhases
    );
}

/// it should reject phases missing a string id or name
#[test]
fn rejects_malformed_phase() {
    let mut doc = base_document();
    doc["phases"][1].as_object_mut().unwrap().remove("name");
    let err = parse_play_document(&doc).expect_err("rejected");
    match err {
        DocumentError::MalformedPhase { index, reason } => {
            assert_eq!(index, 1);
            assert!(reason.contains("name"));
        }
        other => panic!("expected MalformedPhase, got {other:?}"),
    }

    let mut doc = base_document();
    doc["phases"][0]["id"] = json!(42);
    assert!(matches!(
        parse_play_document(&doc).expect_err("rejected"),
        DocumentError::MalformedPhase { index: 0, .. }
    ));
}

/// it should reject objects with unknown kinds or out-of-bounds positions
#[test]
fn rejects_malformed_objects() {
    let mut doc = base_document();
    doc["phases"][0]["objects"][1]["type"] = json!("referee");
    let err = parse_play_document(&doc).expect_err("rejected");
    assert!(matches!(
        err,
        DocumentError::MalformedObject {
            phase: 0,
            index: 1,
            ..
        }
    ));

    let mut doc = base_document();
    doc["phases"][0]["objects"][0]["position"] = json!({ "x": 1200.0, "y": 100.0 });
    let err = parse_play_document(&doc).expect_err("rejected");
    match err {
        DocumentError::MalformedObject {
            phase,
            index,
            reason,
        } => {
            assert_eq!((phase, index), (0, 0));
            assert!(reason.contains("bounds"));
        }
        other => panic!("expected MalformedObject, got {other:?}"),
    }
}

/// it should reject actions with bad kinds, bad points, or bad descriptors
#[test]
fn rejects_malformed_actions() {
    let mut doc = base_document();
    doc["phases"][0]["actions"][0]["type"] = json!("alley-oop");
    assert!(matches!(
        parse_play_document(&doc).expect_err("rejected"),
        DocumentError::MalformedAction {
            phase: 0,
            index: 0,
            ..
        }
    ));

    let mut doc = base_document();
    doc["phases"][0]["actions"][0]["to"] = json!({ "x": 100.0, "y": -3.0 });
    let err = parse_play_document(&doc).expect_err("rejected");
    assert!(err.to_string().contains("bounds"));

    let mut doc = base_document();
    doc["phases"][0]["actions"][0]["animation"]["trigger"] = json!("whenever");
    assert!(matches!(
        parse_play_document(&doc).expect_err("rejected"),
        DocumentError::MalformedAction { .. }
    ));
}

/// it should accept string/null ball owners and reject other shapes
#[test]
fn ball_owner_shape_checks() {
    let mut doc = base_document();
    doc["phases"][0]["ballOwnerObjectId"] = json!("p1");
    let parsed = parse_play_document(&doc).expect("string owner ok");
    assert_eq!(
        parsed.phases[0].ball_owner_object_id,
        Some(Some("p1".to_string()))
    );

    let mut doc = base_document();
    doc["phases"][0]["ballOwnerObjectId"] = json!(null);
    let parsed = parse_play_document(&doc).expect("null owner ok");
    assert_eq!(parsed.phases[0].ball_owner_object_id, Some(None));

    let parsed = parse_play_document(&base_document()).expect("absent owner ok");
    assert_eq!(parsed.phases[0].ball_owner_object_id, None);

    let mut doc = base_document();
    doc["phases"][0]["ballOwnerObjectId"] = json!(7);
    assert_eq!(
        parse_play_document(&doc).expect_err("rejected"),
        DocumentError::InvalidBallOwner { phase: 0 }
    );
}

/// it should parse from text and report unreadable JSON as a document error
#[test]
fn parses_from_str_and_reports_bad_json() {
    let text = serde_json::to_string(&base_document()).expect("serialize fixture");
    let doc = parse_play_document_str(&text).expect("parse from text");
    assert_eq!(doc.phases.len(), 2);

    let err = parse_play_document_str("{ not json").expect_err("rejected");
    assert!(matches!(err, DocumentError::Json { .. }));

    let err = parse_play_document(&json!([1, 2, 3])).expect_err("rejected");
    assert!(matches!(err, DocumentError::Json { .. }));
}

/// it should treat missing objects/actions arrays as empty lists
#[test]
fn missing_object_and_action_arrays_are_empty() {
    let doc = json!({
        "schemaVersion": 1,
        "courtTemplate": "full-vertical",
        "phases": [ { "id": "p", "name": "Only" } ]
    });
    let parsed = parse_play_document(&doc).expect("parsed");
    assert!(parsed.phases[0].objects.is_empty());
    assert!(parsed.phases[0].actions.is_empty());

    let doc = json!({
        "schemaVersion": 1,
        "courtTemplate": "full-vertical",
        "phases": [ { "id": "p", "name": "Only", "objects": "nope" } ]
    });
    let err = parse_play_document(&doc).expect_err("rejected");
    assert!(matches!(err, DocumentError::MalformedPhase { index: 0, .. }));
}

/// it should round-trip a typed document back to equivalent JSON
#[test]
fn typed_document_roundtrips() {
    let doc = parse_play_document(&base_document()).expect("parse");
    let text = serde_json::to_string(&doc).expect("serialize");
    let back = parse_play_document_str(&text).expect("reparse");
    assert_eq!(doc, back);
}
