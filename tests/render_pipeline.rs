//! End-to-end checks of the painter's-algorithm pipeline on the demo course.

use glam::Vec3;
use lakitu::projection::{CameraPose, Projector};
use lakitu::render::{DrawKind, FrameBuilder, SurfaceCall};
use lakitu::solid::FaceSide;
use lakitu::{
    EngineConfig, InputScript, Level, RecordingSurface, RenderSettings, Session, NEAR_PLANE,
};
use rstest::{fixture, rstest};
use test_utils::cube;

#[fixture]
fn session() -> Session {
    let level = Level::castle_grounds().unwrap_or_else(|e| panic!("demo course invalid: {e}"));
    Session::new(level, &EngineConfig::default()).unwrap_or_else(|e| panic!("session: {e}"))
}

#[rstest]
#[case(InputScript::Idle, 1)]
#[case(InputScript::Walk, 90)]
#[case(InputScript::Jump, 150)]
fn frames_are_sorted_far_to_near(
    session: Session,
    #[case] script: InputScript,
    #[case] frames: u64,
) {
    let mut running = session;
    for frame in 0..frames {
        running.tick(&script.snapshot(frame));
    }
    let list = running.render();
    assert!(!list.commands.is_empty());
    assert!(list
        .commands
        .windows(2)
        .all(|pair| pair[0].depth >= pair[1].depth));
    assert!(list.commands.iter().all(|c| c.depth > NEAR_PLANE));
    assert_eq!(
        usize::try_from(list.stats.commands_emitted).ok(),
        Some(list.commands.len())
    );
}

#[rstest]
fn the_player_is_drawn(session: Session) {
    let list = session.render();
    let player_faces = list
        .commands
        .iter()
        .filter(|c| c.color == lakitu::Rgb::MARIO_RED.shaded(1.0))
        .count();
    assert!(player_faces >= 1);
}

#[rstest]
fn presenting_records_sky_then_every_command(session: Session) {
    let mut surface = RecordingSurface::new(800, 600);
    let stats = session.present(&mut surface);
    let fills = surface
        .calls
        .iter()
        .filter(|call| matches!(call, SurfaceCall::Fill { .. }))
        .count();
    assert_eq!(u32::try_from(fills).ok(), Some(stats.commands_emitted + 1));
}

#[test]
fn everything_behind_the_camera_is_dropped() {
    let projector = Projector::default();
    let settings = RenderSettings::default();
    let pose = CameraPose {
        position: Vec3::ZERO,
        yaw: std::f32::consts::PI,
    };
    let mut builder = FrameBuilder::new(&projector, pose, &settings, 0);
    builder.push_solid(&cube((0.0, 0.0, 500.0), 100.0));
    builder.push_solid(&cube((0.0, 0.0, -500.0), 100.0));
    let list = builder.finish();
    assert_eq!(list.commands.len(), 6);
    assert_eq!(list.stats.faces_culled, 6);
    assert!(list
        .commands
        .iter()
        .any(|c| c.kind == DrawKind::Face { side: FaceSide::Front }));
}
