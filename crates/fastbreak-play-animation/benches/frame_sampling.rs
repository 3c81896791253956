use criterion::{black_box, criterion_group, criterion_main, Criterion};

use fastbreak_play_animation::{
    bake_playback, compile_play_playback, sample_transition_frame, BakeConfig, PlaybackConfig,
};
use fastbreak_play_format::{
    ActionAnimation, ActionKind, CourtTemplate, ObjectKind, PlayAction, PlayDocument, PlayObject,
    PlayPhase, Point, Trigger,
};

fn grid_point(seed: usize) -> Point {
    let x = 60.0 + ((seed * 73) % 880) as f32;
    let y = 60.0 + ((seed * 131) % 880) as f32;
    Point::new(x, y)
}

fn build_play(phase_count: usize, player_count: usize) -> PlayDocument {
    let mut phases = Vec::with_capacity(phase_count);
    for phase_index in 0..phase_count {
        let mut objects = Vec::new();
        for p in 0..player_count {
            objects.push(PlayObject {
                id: format!("o{p}"),
                kind: ObjectKind::Offense,
                label: Some(format!("{}", p + 1)),
                position: grid_point(phase_index * 31 + p),
                size: None,
                width: None,
                height: None,
                rotation: None,
                color: None,
            });
            objects.push(PlayObject {
                id: format!("d{p}"),
                kind: ObjectKind::Defense,
                label: None,
                position: grid_point(phase_index * 31 + p + 500),
                size: None,
                width: None,
                height: None,
                rotation: None,
                color: None,
            });
        }

        let mut actions = Vec::new();
        for p in 0..player_count.min(3) {
            let actor = format!("o{p}");
            let from = grid_point(phase_index * 31 + p);
            actions.push(PlayAction {
                id: format!("cut-{phase_index}-{p}"),
                kind: ActionKind::Cut,
                from,
                to: grid_point((phase_index + 1) * 31 + p),
                from_object_id: Some(actor),
                to_object_id: None,
                animation: Some(ActionAnimation {
                    trigger: if p % 2 == 0 {
                        Trigger::AfterPrevious
                    } else {
                        Trigger::WithPrevious
                    },
                    duration_ms: Some(600.0 + ((p * 137) % 900) as f32),
                }),
            });
        }
        actions.push(PlayAction {
            id: format!("pass-{phase_index}"),
            kind: ActionKind::Pass,
            from: grid_point(phase_index * 31),
            to: grid_point(phase_index * 31 + 1),
            from_object_id: Some("o0".to_string()),
            to_object_id: Some("o1".to_string()),
            animation: Some(ActionAnimation {
                trigger: Trigger::AfterPrevious,
                duration_ms: Some(800.0),
            }),
        });

        phases.push(PlayPhase {
            id: format!("phase-{phase_index}"),
            name: format!("Phase {}", phase_index + 1),
            objects,
            actions,
            ball_owner_object_id: None,
        });
    }

    PlayDocument {
        schema_version: 1,
        court_template: CourtTemplate::HalfCourt,
        phases,
    }
}

fn bench_compile(c: &mut Criterion) {
    let doc = build_play(8, 5);
    let config = PlaybackConfig::default();
    c.bench_function("compile_playback_8_phases", |b| {
        b.iter(|| black_box(compile_play_playback(&doc, 1.0, &config)))
    });
}

fn bench_sample(c: &mut Criterion) {
    let doc = build_play(8, 5);
    let config = PlaybackConfig::default();
    let playback = compile_play_playback(&doc, 1.0, &config);
    let total = playback.total_duration_ms;

    c.bench_function("sample_240_frames", |b| {
        b.iter(|| {
            let mut checksum = 0.0_f32;
            for i in 0..240 {
                let t = total * (i as f32) / 239.0;
                if let Some((index, local_ms)) = playback.locate(t) {
                    let frame = sample_transition_frame(&playback.transitions[index], local_ms);
                    checksum += frame.action_progress;
                }
            }
            black_box(checksum)
        })
    });
}

fn bench_bake(c: &mut Criterion) {
    let doc = build_play(8, 5);
    let config = PlaybackConfig::default();
    c.bench_function("bake_8_phases_60hz", |b| {
        b.iter(|| black_box(bake_playback(&doc, 1.0, &config, &BakeConfig::default())))
    });
}

criterion_group!(benches, bench_compile, bench_sample, bench_bake);
criterion_main!(benches);
