use fastbreak_play_animation::{
    bake_playback, parse_play_document, BakeConfig, PlaySession, PlaybackConfig,
};
use serde_json::{json, to_string_pretty};

fn main() -> anyhow::Result<()> {
    // A three-phase give-and-go: P1 feeds the wing, cuts to the block,
    // gets it back, finishes.
    let document = json!({
        "schemaVersion": 1,
        "courtTemplate": "half",
        "phases": [
            {
                "id": "entry",
                "name": "Wing entry",
                "objects": [
                    { "id": "p1", "type": "offense", "label": "1", "position": { "x": 500.0, "y": 850.0 } },
                    { "id": "p2", "type": "offense", "label": "2", "position": { "x": 820.0, "y": 620.0 } },
                    { "id": "d1", "type": "defense", "position": { "x": 520.0, "y": 760.0 } },
                    { "id": "ball", "type": "ball", "position": { "x": 510.0, "y": 840.0 } }
                ],
                "actions": [
                    {
                        "id": "entry-pass",
                        "type": "pass",
                        "from": { "x": 500.0, "y": 850.0 },
                        "to": { "x": 820.0, "y": 620.0 },
                        "fromObjectId": "p1",
                        "toObjectId": "p2",
                        "animation": { "trigger": "after_previous", "durationMs": 600.0 }
                    },
                    {
                        "id": "basket-cut",
                        "type": "cut",
                        "from": { "x": 500.0, "y": 850.0 },
                        "to": { "x": 560.0, "y": 300.0 },
                        "fromObjectId": "p1",
                        "animation": { "trigger": "after_previous", "durationMs": 900.0 }
                    }
                ]
            },
            {
                "id": "return",
                "name": "Return pass",
                "objects": [
                    { "id": "p1", "type": "offense", "label": "1", "position": { "x": 560.0, "y": 300.0 } },
                    { "id": "p2", "type": "offense", "label": "2", "position": { "x": 820.0, "y": 620.0 } },
                    { "id": "d1", "type": "defense", "position": { "x": 600.0, "y": 380.0 } }
                ],
                "actions": [
                    {
                        "id": "return-pass",
                        "type": "pass",
                        "from": { "x": 820.0, "y": 620.0 },
                        "to": { "x": 560.0, "y": 300.0 },
                        "fromObjectId": "p2",
                        "toObjectId": "p1",
                        "animation": { "trigger": "after_previous", "durationMs": 500.0 }
                    }
                ]
            },
            {
                "id": "finish",
                "name": "Finish",
                "objects": [
                    { "id": "p1", "type": "offense", "label": "1", "position": { "x": 540.0, "y": 220.0 } },
                    { "id": "p2", "type": "offense", "label": "2", "position": { "x": 820.0, "y": 620.0 } },
                    { "id": "d1", "type": "defense", "position": { "x": 580.0, "y": 300.0 } }
                ],
                "actions": []
            }
        ]
    });
    let document = parse_play_document(&document)?;

    let mut session = PlaySession::new(document.clone(), PlaybackConfig::default());
    println!(
        "compiled {} transitions, {}ms total",
        session.playback().transitions.len(),
        session.total_duration_ms()
    );

    // Drive the clock the way a render loop would.
    session.play();
    for tick in 0..6 {
        let step = session.advance(400.0);
        let p1 = step.frame.positions["p1"];
        println!(
            "tick {tick}: t={:>6.1}ms transition={:?} p1=({:.0},{:.0}) ball={:?} events={:?}",
            session.position_ms(),
            step.transition_index,
            p1.x,
            p1.y,
            step.frame.ball_owner_object_id,
            step.events
        );
    }

    // Scrub back to the moment the entry pass lands.
    let frame = session.frame_at_ms(600.0);
    println!(
        "at 600ms the ball belongs to {:?}",
        frame.frame.ball_owner_object_id
    );

    // Bake a coarse preview strip.
    let baked = bake_playback(
        session.document(),
        1.0,
        &PlaybackConfig::default(),
        &BakeConfig { frame_rate: 10.0 },
    );
    println!("baked {} frames at {}Hz", baked.frame_count, baked.frame_rate);
    println!("{}", to_string_pretty(baked.frames.last().unwrap())?);

    Ok(())
}
