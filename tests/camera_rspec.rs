//! Behaviour-driven tests using rust-rspec.
//!
//! The lagged camera eases toward its ideal pose without overshooting, while
//! the direct camera snaps to it.

use glam::Vec3;
use lakitu::{Camera, CameraInput, CameraMode, CameraSettings};
use test_utils::{assert_non_increasing, assert_vec3_near};

const START: Vec3 = Vec3::new(0.0, -925.0, 0.0);
const MOVED: Vec3 = Vec3::new(300.0, -1025.0, 450.0);

#[derive(Clone, Debug)]
struct CameraRun {
    camera: Camera,
    samples: Vec<Vec3>,
}

impl CameraRun {
    fn with_mode(mode: CameraMode) -> Self {
        let settings = CameraSettings {
            mode,
            ..CameraSettings::default()
        };
        Self {
            camera: Camera::new(settings, START),
            samples: Vec::new(),
        }
    }

    fn follow(&mut self, frames: usize) {
        for _ in 0..frames {
            self.camera.update(MOVED, CameraInput::default());
            self.samples.push(self.camera.position());
        }
    }

    fn distances(&self) -> Vec<f32> {
        let ideal = self.camera.ideal_position(MOVED);
        self.samples.iter().map(|p| p.distance(ideal)).collect()
    }
}

#[test]
fn lagged_camera_converges_monotonically() {
    rspec::run(&rspec::given(
        "a lagged camera whose target jumped away",
        CameraRun::with_mode(CameraMode::Lagged),
        |ctx| {
            ctx.when("it follows for a second", |ctx| {
                ctx.before_each(|run| run.follow(60));
                ctx.then("the distance to the ideal pose shrinks every frame", |run| {
                    let distances = run.distances();
                    assert_non_increasing(&distances);
                    assert!(distances.windows(2).all(|pair| pair[1] < pair[0]));
                });
                ctx.then("no component overshoots the ideal pose", |run| {
                    let ideal = run.camera.ideal_position(MOVED);
                    for sample in &run.samples {
                        assert!(sample.x <= ideal.x + 1e-3);
                        assert!(sample.y >= ideal.y - 1e-3);
                        assert!(sample.z <= ideal.z + 1e-3);
                    }
                });
                ctx.then("it ends up close to the ideal pose", |run| {
                    assert_vec3_near(run.camera.position(), run.camera.ideal_position(MOVED), 5.0);
                });
            });
            ctx.when("it follows for one frame", |ctx| {
                ctx.before_each(|run| run.follow(1));
                ctx.then("it has not reached the ideal pose", |run| {
                    assert!(run.distances()[0] > 100.0);
                });
            });
        },
    ));
}

#[test]
fn direct_camera_snaps() {
    rspec::run(&rspec::given(
        "a direct camera whose target jumped away",
        CameraRun::with_mode(CameraMode::Direct),
        |ctx| {
            ctx.when("it updates once", |ctx| {
                ctx.before_each(|run| run.follow(1));
                ctx.then("it sits exactly on the ideal pose", |run| {
                    assert_eq!(run.camera.position(), run.camera.ideal_position(MOVED));
                });
                ctx.then("it looks straight at the target", |run| {
                    let pose = run.camera.pose(MOVED);
                    assert!(pose.yaw.abs() < 1e-5);
                });
            });
        },
    ));
}
