//! Screen flow driving a live session.

use glam::Vec3;
use lakitu::flow::{GameFlow, MenuCommand, Screen};
use lakitu::{InputSnapshot, Session, STARTING_LIVES};
use rstest::{fixture, rstest};
use test_utils::{ground, session_on, GROUND_TOP};

const SPAWN: (f32, f32, f32) = (0.0, GROUND_TOP - 25.0, 0.0);

#[fixture]
fn playing() -> (GameFlow, Session) {
    let mut flow = GameFlow::new();
    flow.handle(MenuCommand::Confirm);
    flow.handle(MenuCommand::SelectFile(1));
    (flow, session_on(vec![ground()], SPAWN, None))
}

fn fall_off_the_edge(flow: &mut GameFlow, session: &mut Session) {
    session.teleport(Vec3::new(1500.0, SPAWN.1, 0.0));
    for _ in 0..400 {
        let report = flow
            .frame(session, &InputSnapshot::default())
            .unwrap_or_else(|| panic!("gameplay should tick"));
        if report.respawned() {
            return;
        }
    }
    panic!("actor never reached the void");
}

#[rstest]
fn menus_lead_into_gameplay(playing: (GameFlow, Session)) {
    let (flow, _) = playing;
    assert_eq!(flow.screen(), Screen::Gameplay);
    assert_eq!(flow.file(), Some(1));
}

#[rstest]
fn pausing_freezes_the_session(playing: (GameFlow, Session)) {
    let (mut flow, mut session) = playing;
    let pause = InputSnapshot {
        pause_pressed: true,
        ..Default::default()
    };
    assert!(flow.frame(&mut session, &pause).is_none());
    assert_eq!(flow.screen(), Screen::Paused);
    assert!(flow.frame(&mut session, &InputSnapshot::default()).is_none());
    assert_eq!(session.frame(), 0);

    assert!(flow.frame(&mut session, &pause).is_none());
    assert!(flow.frame(&mut session, &InputSnapshot::default()).is_some());
    assert_eq!(session.frame(), 1);
}

#[rstest]
fn losing_every_life_restarts_the_run(playing: (GameFlow, Session)) {
    let (mut flow, mut session) = playing;
    fall_off_the_edge(&mut flow, &mut session);
    assert_eq!(flow.progress().lives, STARTING_LIVES - 1);
    fall_off_the_edge(&mut flow, &mut session);
    fall_off_the_edge(&mut flow, &mut session);
    assert_eq!(flow.progress().lives, STARTING_LIVES);
    assert_eq!(flow.screen(), Screen::Gameplay);
    assert_eq!(session.actor().position(), Vec3::from(SPAWN));
}
