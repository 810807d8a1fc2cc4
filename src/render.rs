//! Painter's-algorithm renderer.
//!
//! Every box face and pickup billboard of a frame is projected into one flat
//! list of [`DrawCommand`]s, sorted far-to-near and handed to a [`Surface`].
//! There is no depth buffer: intersecting boxes can draw in the wrong order,
//! which the demos have always accepted.
//!
//! A face is kept only when all four of its corners project; one corner on or
//! behind the near plane drops the whole face. Billboards are projected as a
//! single centre point and sized by `focal_length / depth`.

use std::cmp::Reverse;
use std::f32::consts::{PI, TAU};

use glam::{Vec2, Vec3};
use log::debug;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::numeric::{dimension_to_f32, frame_to_f32};
use crate::pickup::{Pickup, PickupKind};
use crate::projection::{CameraPose, Projector, ScreenPoint};
use crate::solid::{FaceSide, Rgb, Solid, BOX_FACES};

const STAR_RADIUS: f32 = 30.0;
const STAR_INNER_RATIO: f32 = 0.5;
const STAR_TIPS: usize = 5;
const STAR_SPIN_PER_FRAME: f32 = 1.0 / 6.0;
const STAR_BOB_PER_FRAME: f32 = 1.0 / 12.0;
/// World units.
const STAR_BOB_HEIGHT: f32 = 10.0;
const STAR_OUTLINE: Rgb = Rgb(255, 200, 0);

const COIN_RADIUS: f32 = 20.0;
const COIN_SPIN_PER_FRAME: f32 = 1.0 / 3.0;
const COIN_SEGMENTS: usize = 16;
/// Coins seen edge-on thinner than this many pixels are skipped.
const COIN_MIN_HEIGHT: f32 = 5.0;
const COIN_OUTLINE: Rgb = Rgb(218, 165, 32);

/// Presentation options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Trace box faces with `outline_color`.
    pub outline: bool,
    /// Colour of face outlines.
    pub outline_color: Rgb,
    /// Backdrop filled before any face.
    pub sky_color: Rgb,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            outline: true,
            outline_color: Rgb::BLACK,
            sky_color: Rgb::SKY_BLUE,
        }
    }
}

/// What a draw command depicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DrawKind {
    /// One face of a solid box.
    Face {
        /// Which face.
        side: FaceSide,
    },
    /// A camera-facing star or coin.
    Billboard {
        /// Which pickup.
        pickup: PickupKind,
    },
}

/// One filled polygon in screen space.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawCommand {
    /// What the polygon depicts.
    pub kind: DrawKind,
    /// View-space depth used for ordering.
    pub depth: f32,
    /// Screen-space vertices in winding order.
    pub points: Vec<Vec2>,
    /// Fill colour after shading.
    pub color: Rgb,
    /// Outline colour, if outlined.
    pub outline: Option<Rgb>,
}

/// Counters gathered while building a frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RenderStats {
    /// Box faces considered.
    pub faces_tested: u32,
    /// Faces dropped because a corner failed to project.
    pub faces_culled: u32,
    /// Pickups skipped as off-screen or edge-on.
    pub billboards_culled: u32,
    /// Polygons in the finished list.
    pub commands_emitted: u32,
}

/// A finished, depth-sorted frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderList {
    /// Backdrop colour.
    pub sky: Rgb,
    /// Polygons, farthest first.
    pub commands: Vec<DrawCommand>,
    /// Counters for this frame.
    pub stats: RenderStats,
}

/// Sorts commands far-to-near. Equal depths keep submission order.
pub fn sort_back_to_front(commands: &mut [DrawCommand]) {
    commands.sort_by_key(|command| Reverse(OrderedFloat(command.depth)));
}

/// Accumulates the draw commands of one frame.
#[derive(Debug)]
pub struct FrameBuilder<'a> {
    projector: &'a Projector,
    pose: CameraPose,
    settings: &'a RenderSettings,
    frame: u64,
    commands: Vec<DrawCommand>,
    stats: RenderStats,
}

impl<'a> FrameBuilder<'a> {
    /// `frame` drives billboard animation.
    #[must_use]
    pub const fn new(
        projector: &'a Projector,
        pose: CameraPose,
        settings: &'a RenderSettings,
        frame: u64,
    ) -> Self {
        Self {
            projector,
            pose,
            settings,
            frame,
            commands: Vec::new(),
            stats: RenderStats {
                faces_tested: 0,
                faces_culled: 0,
                billboards_culled: 0,
                commands_emitted: 0,
            },
        }
    }

    /// Queues the visible faces of `solid`.
    pub fn push_solid(&mut self, solid: &Solid) {
        let projected = solid
            .corners()
            .map(|corner| self.projector.project(corner, &self.pose));
        let outline = self.settings.outline.then_some(self.settings.outline_color);

        for face in &BOX_FACES {
            self.stats.faces_tested += 1;
            let Some(quad) = face_points(&projected, face.corners) else {
                self.stats.faces_culled += 1;
                continue;
            };
            let depth = quad.iter().map(|p| p.depth).sum::<f32>() / 4.0;
            self.commands.push(DrawCommand {
                kind: DrawKind::Face { side: face.side },
                depth,
                points: quad.iter().map(ScreenPoint::xy).collect(),
                color: solid.color().shaded(face.shade),
                outline,
            });
        }
    }

    /// Queues an animated billboard for `pickup` unless it was collected.
    pub fn push_pickup(&mut self, pickup: &Pickup) {
        if pickup.is_collected() {
            return;
        }
        let solid = pickup.solid();
        let command = match pickup.kind() {
            PickupKind::Star => self.star(solid.center),
            PickupKind::Coin => self.coin(solid.center),
        };
        match command {
            Some(command) => self.commands.push(command),
            None => self.stats.billboards_culled += 1,
        }
    }

    fn star(&self, center: Vec3) -> Option<DrawCommand> {
        let t = frame_to_f32(self.frame);
        let bob = (t * STAR_BOB_PER_FRAME).sin().abs() * STAR_BOB_HEIGHT;
        let anchor = self
            .projector
            .project(center - Vec3::Y * bob, &self.pose)?;
        let outer = STAR_RADIUS * anchor.scale(self.projector.focal_length());
        let spin = t * STAR_SPIN_PER_FRAME;
        let step = PI / 5.0;
        let points = (0..STAR_TIPS * 2)
            .map(|i| {
                let radius = if i % 2 == 0 { outer } else { outer * STAR_INNER_RATIO };
                let angle = spin + step * index_to_f32(i);
                anchor.xy() + Vec2::from_angle(angle) * radius
            })
            .collect();
        Some(DrawCommand {
            kind: DrawKind::Billboard {
                pickup: PickupKind::Star,
            },
            depth: anchor.depth,
            points,
            color: Rgb::STAR_YELLOW,
            outline: Some(STAR_OUTLINE),
        })
    }

    fn coin(&self, center: Vec3) -> Option<DrawCommand> {
        let anchor = self.projector.project(center, &self.pose)?;
        let radius = COIN_RADIUS * anchor.scale(self.projector.focal_length());
        let spin = frame_to_f32(self.frame) * COIN_SPIN_PER_FRAME;
        let half = Vec2::new(radius, radius * spin.cos().abs() * 0.75);
        if half.y * 2.0 <= COIN_MIN_HEIGHT {
            return None;
        }
        let step = TAU / index_to_f32(COIN_SEGMENTS);
        let points = (0..COIN_SEGMENTS)
            .map(|i| anchor.xy() + Vec2::from_angle(step * index_to_f32(i)) * half)
            .collect();
        Some(DrawCommand {
            kind: DrawKind::Billboard {
                pickup: PickupKind::Coin,
            },
            depth: anchor.depth,
            points,
            color: Rgb::COIN_GOLD,
            outline: Some(COIN_OUTLINE),
        })
    }

    /// Sorts the queued commands and returns the frame.
    #[must_use]
    pub fn finish(self) -> RenderList {
        let Self {
            settings,
            mut commands,
            mut stats,
            ..
        } = self;
        sort_back_to_front(&mut commands);
        stats.commands_emitted = u32::try_from(commands.len()).unwrap_or(u32::MAX);
        debug!(
            "frame built: {} commands, {}/{} faces culled, {} billboards culled",
            stats.commands_emitted, stats.faces_culled, stats.faces_tested, stats.billboards_culled
        );
        RenderList {
            sky: settings.sky_color,
            commands,
            stats,
        }
    }
}

fn face_points(projected: &[Option<ScreenPoint>; 8], corners: [usize; 4]) -> Option<[ScreenPoint; 4]> {
    let [a, b, c, d] = corners.map(|i| projected.get(i).copied().flatten());
    Some([a?, b?, c?, d?])
}

#[expect(
    clippy::cast_precision_loss,
    reason = "Polygon vertex indices are tiny."
)]
fn index_to_f32(index: usize) -> f32 {
    index as f32
}

/// Something polygons can be drawn onto.
#[cfg_attr(test, mockall::automock)]
pub trait Surface {
    /// Width and height in pixels.
    fn size(&self) -> (u32, u32);
    /// Fills a closed polygon.
    fn fill_polygon(&mut self, points: &[Vec2], color: Rgb);
    /// One-pixel closed outline.
    fn outline_polygon(&mut self, points: &[Vec2], color: Rgb);
}

/// Clears `surface` to the sky colour, then paints `list` in order.
pub fn present<S: Surface + ?Sized>(list: &RenderList, surface: &mut S) {
    let (width, height) = surface.size();
    let (w, h) = (dimension_to_f32(width), dimension_to_f32(height));
    let backdrop = [Vec2::ZERO, Vec2::new(w, 0.0), Vec2::new(w, h), Vec2::new(0.0, h)];
    surface.fill_polygon(&backdrop, list.sky);

    for command in &list.commands {
        surface.fill_polygon(&command.points, command.color);
        if let Some(outline) = command.outline {
            surface.outline_polygon(&command.points, outline);
        }
    }
}

/// One call made against a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum SurfaceCall {
    /// [`Surface::fill_polygon`].
    Fill {
        /// Polygon vertices.
        points: Vec<Vec2>,
        /// Fill colour.
        color: Rgb,
    },
    /// [`Surface::outline_polygon`].
    Outline {
        /// Polygon vertices.
        points: Vec<Vec2>,
        /// Line colour.
        color: Rgb,
    },
}

/// In-memory surface that records every call, for headless runs and tests.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RecordingSurface {
    /// Reported width.
    pub width: u32,
    /// Reported height.
    pub height: u32,
    /// Calls since the last clear.
    pub calls: Vec<SurfaceCall>,
}

impl RecordingSurface {
    /// An empty surface of the given size.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            calls: Vec::new(),
        }
    }

    /// Forgets every recorded call.
    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Rgb) {
        self.calls.push(SurfaceCall::Fill {
            points: points.to_vec(),
            color,
        });
    }

    fn outline_polygon(&mut self, points: &[Vec2], color: Rgb) {
        self.calls.push(SurfaceCall::Outline {
            points: points.to_vec(),
            color,
        });
    }
}
