//! Replays the shipped demo sessions end to end.

use std::path::{Path, PathBuf};

use camrig::{
    camera::{CameraMode, CameraRig, InteractionState, ZoomOutcome},
    session::Session,
    RigOptions,
};

fn demo(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("demos").join(name)
}

#[test]
fn tour_orbits_zooms_pans_and_resets() {
    let session = Session::load(&demo("tour.toml")).unwrap();
    let mut rig = CameraRig::new(&RigOptions::default()).unwrap();
    let samples = session.play(&mut rig);
    assert_eq!(samples.len(), session.tick_count());

    let zooms: Vec<_> = samples
        .iter()
        .map(|s| s.report.zoom)
        .filter(|z| *z != ZoomOutcome::Ignored)
        .collect();
    assert_eq!(
        zooms,
        vec![ZoomOutcome::Applied {
            distance_to_pivot: None
        }]
    );

    let orbited = samples
        .iter()
        .any(|s| s.report.state == InteractionState::Orbiting);
    let panned = samples
        .iter()
        .filter(|s| s.report.state == InteractionState::Panning)
        .count();
    assert!(orbited);
    assert_eq!(panned, 6);

    // After the pan settles the camera is inside the envelope.
    let envelope = RigOptions::default().limits.pan;
    let settled = samples
        .iter()
        .rev()
        .find(|s| s.step == 6)
        .unwrap();
    assert!(envelope.contains(settled.target.position));
    assert!(settled
        .rendered
        .position
        .abs_diff_eq(settled.target.position, 1e-3));

    // The final reset snaps both poses home.
    assert_eq!(*rig.rendered(), *rig.default_pose());
    assert_eq!(*rig.target(), *rig.default_pose());
    assert_eq!(rig.interaction(), InteractionState::Idle);
}

#[test]
fn constrained_preset_enforces_radius_bounds() {
    let options = RigOptions::load(&demo("constrained.toml")).unwrap();
    assert_eq!(options.mode, CameraMode::Constrained);

    let session = Session::load(&demo("pivot_zoom.toml")).unwrap();
    let mut rig = CameraRig::new(&options).unwrap();
    assert!(rig.last_diagnostic().is_none());

    let samples = session.play(&mut rig);
    let zoom_of = |step: usize| {
        samples
            .iter()
            .find(|s| s.step == step)
            .map(|s| s.report.zoom)
            .unwrap()
    };

    assert!(matches!(zoom_of(0), ZoomOutcome::Blocked { .. }));
    match zoom_of(1) {
        ZoomOutcome::Applied {
            distance_to_pivot: Some(d),
        } => assert!((d - 19.142).abs() < 1e-2),
        other => panic!("expected applied zoom, got {other:?}"),
    }
    assert!(matches!(
        zoom_of(2),
        ZoomOutcome::Blocked { attempted, .. } if attempted > 20.0
    ));

    // Orbit around the fixed pivot keeps the distance.
    let pivot = rig.pivot().unwrap();
    let distance = rig.target().position.distance(pivot);
    assert!((distance - 19.142).abs() < 1e-2);
    assert!(rig.target().position.y > 13.6);
}

#[test]
fn constrained_without_pivot_reports_a_diagnostic() {
    let mut options = RigOptions::default();
    options.mode = CameraMode::Constrained;
    let rig = CameraRig::new(&options).unwrap();
    assert!(rig.last_diagnostic().is_some());
}
