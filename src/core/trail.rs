//! Trail rendering strategies.
//!
//! A `TrailRenderer` turns the shared per-frame state (smoothed channels,
//! hover blend, motion) into a `CursorFrame`, a plain description of what to
//! draw. Two strategies exist: `DotTrail` (discrete fading dots) and
//! `PolylineTrail` (a stroke through recent raw samples). The surface that
//! draws the frame knows nothing about either.

use crate::core::constants::*;
use crate::core::history::TrailHistory;
use crate::core::palette::{BlendMode, Palette, Rgba};
use crate::core::reactor::HoverReactor;
use crate::core::spring::{MotionSmoother, SpringParams};
use crate::core::tracker::PointerSample;
use crate::core::velocity::Motion;
use glam::Vec2;
use smallvec::SmallVec;
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq)]
pub enum GlyphShape {
    /// Polygon path in a square view box, drawn `size` px wide with its
    /// view-box origin on the glyph position.
    Arrow {
        path: &'static str,
        view_box: f32,
        size: f32,
        fill: Rgba,
        outline: Rgba,
        outline_width: f32,
        glow_px: f32,
    },
    /// Rounded rectangle centered on the glyph position.
    Capsule {
        width: f32,
        height: f32,
        corner_radius: f32,
        fill: Rgba,
        outline: Rgba,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Glyph {
    pub position: Vec2,
    /// Per-axis scale in the glyph's rotated frame.
    pub scale: Vec2,
    pub rotation_deg: f32,
    pub shape: GlyphShape,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TrailDot {
    pub position: Vec2,
    pub size: f32,
    pub opacity: f32,
    pub color: &'static str,
    pub blur_px: f32,
    pub scale: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TrailStroke {
    /// Oldest point first.
    pub points: Vec<Vec2>,
    pub width: f32,
    pub opacity: f32,
    pub color: Rgba,
}

/// Everything to draw for one frame, trail layers back to front, glyph on top.
#[derive(Clone, Debug, PartialEq)]
pub struct CursorFrame {
    pub glyph: Glyph,
    pub dots: SmallVec<[TrailDot; 5]>,
    pub stroke: Option<TrailStroke>,
    pub blend: BlendMode,
}

impl CursorFrame {
    /// False if any coordinate, scale or angle is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        let g = &self.glyph;
        let shape_ok = match &g.shape {
            GlyphShape::Arrow { size, .. } => size.is_finite(),
            GlyphShape::Capsule {
                width,
                height,
                corner_radius,
                ..
            } => width.is_finite() && height.is_finite() && corner_radius.is_finite(),
        };
        shape_ok
            && g.position.is_finite()
            && g.scale.is_finite()
            && g.rotation_deg.is_finite()
            && self
                .dots
                .iter()
                .all(|d| d.position.is_finite() && d.scale.is_finite())
            && self
                .stroke
                .as_ref()
                .map_or(true, |s| s.points.iter().all(|p| p.is_finite()))
    }
}

/// Shared per-frame inputs handed to a renderer.
pub struct FrameView<'a> {
    pub now_ms: f64,
    pub smoother: &'a MotionSmoother,
    pub hovering: bool,
    pub reactor: &'a HoverReactor,
    pub motion: Motion,
    pub palette: Palette,
}

impl FrameView<'_> {
    fn channel(&self, index: usize) -> Vec2 {
        self.smoother.position(index).unwrap_or(OFFSCREEN_SENTINEL)
    }
}

pub trait TrailRenderer {
    fn name(&self) -> &'static str;

    /// Spring table for the shared smoother. Channel 0 always drives the
    /// glyph.
    fn springs(&self) -> Vec<SpringParams>;

    /// Called for every raw move event, outside the frame loop.
    fn record(&mut self, _sample: PointerSample) {}

    fn compose(&mut self, view: &FrameView<'_>) -> CursorFrame;
}

/// Variant A: one fading dot per trailing spring behind an arrow glyph.
#[derive(Clone, Debug, Default)]
pub struct DotTrail;

impl DotTrail {
    pub fn new() -> Self {
        Self
    }
}

impl TrailRenderer for DotTrail {
    fn name(&self) -> &'static str {
        "dots"
    }

    fn springs(&self) -> Vec<SpringParams> {
        std::iter::once(GLYPH_SPRING)
            .chain(TRAIL_SPRINGS)
            .map(SpringParams::from_pair)
            .collect()
    }

    fn compose(&mut self, view: &FrameView<'_>) -> CursorFrame {
        let scale = view.reactor.scale();
        let mut ranked: SmallVec<[(f32, TrailDot); 5]> = TRAIL_SPRINGS
            .iter()
            .zip(TRAIL_DOTS.iter())
            .enumerate()
            .map(|(i, (&(stiffness, _), &(size, opacity, color, blur_px)))| {
                let dot = TrailDot {
                    position: view.channel(i + 1),
                    size,
                    opacity,
                    color,
                    blur_px,
                    scale,
                };
                (stiffness, dot)
            })
            .collect();
        // back to front by decreasing stiffness
        ranked.sort_by(|a, b| b.0.total_cmp(&a.0));

        let palette = view.palette;
        CursorFrame {
            glyph: Glyph {
                position: view.channel(0),
                scale: Vec2::splat(scale),
                rotation_deg: view.reactor.rotation_deg(),
                shape: GlyphShape::Arrow {
                    path: ARROW_PATH,
                    view_box: ARROW_VIEWBOX,
                    size: ARROW_SIZE_PX,
                    fill: palette.glyph_fill(),
                    outline: palette.glyph_outline(),
                    outline_width: ARROW_STROKE_WIDTH,
                    glow_px: GLYPH_GLOW_PX,
                },
            },
            dots: ranked.into_iter().map(|(_, dot)| dot).collect(),
            stroke: None,
            blend: palette.dot_blend(),
        }
    }
}

/// Variant B: a stroke through the last few hundred milliseconds of raw
/// samples behind a capsule that streaks with speed.
#[derive(Clone, Debug)]
pub struct PolylineTrail {
    history: TrailHistory,
}

impl Default for PolylineTrail {
    fn default() -> Self {
        Self::new(TrailHistory::new(TRAIL_HISTORY_CAPACITY, TRAIL_MAX_AGE_MS))
    }
}

impl PolylineTrail {
    pub fn new(history: TrailHistory) -> Self {
        Self { history }
    }

    pub fn history(&self) -> &TrailHistory {
        &self.history
    }
}

impl TrailRenderer for PolylineTrail {
    fn name(&self) -> &'static str {
        "polyline"
    }

    fn springs(&self) -> Vec<SpringParams> {
        vec![SpringParams::from_pair(GLYPH_SPRING)]
    }

    fn record(&mut self, sample: PointerSample) {
        self.history.push(sample);
    }

    fn compose(&mut self, view: &FrameView<'_>) -> CursorFrame {
        self.history.evict(view.now_ms);
        let palette = view.palette;
        let stroke = (self.history.len() >= 2).then(|| TrailStroke {
            points: self.history.path(),
            width: TRAIL_STROKE_WIDTH,
            opacity: TRAIL_STROKE_OPACITY,
            color: palette.stroke_color(),
        });

        let width = view.reactor.mix(CAPSULE_REST.0, CAPSULE_HOVER.0).max(0.0);
        let height = view.reactor.mix(CAPSULE_REST.1, CAPSULE_HOVER.1).max(0.0);
        let (scale, rotation_deg) = if view.hovering {
            (Vec2::ONE, 0.0)
        } else {
            let s = view.motion.stretch;
            (Vec2::new(s.along, s.perpendicular), view.motion.heading_deg)
        };

        CursorFrame {
            glyph: Glyph {
                position: view.channel(0),
                scale,
                rotation_deg,
                shape: GlyphShape::Capsule {
                    width,
                    height,
                    corner_radius: width.min(height) / 2.0,
                    fill: palette.glyph_fill(),
                    outline: palette.glyph_outline(),
                },
            },
            dots: SmallVec::new(),
            stroke,
            blend: palette.stroke_blend(),
        }
    }
}

/// Which trail strategy a cursor is composed with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TrailVariant {
    #[default]
    Dots,
    Polyline,
}

impl TrailVariant {
    pub fn renderer(&self) -> Box<dyn TrailRenderer> {
        match self {
            TrailVariant::Dots => Box::new(DotTrail::new()),
            TrailVariant::Polyline => Box::new(PolylineTrail::default()),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown trail variant {0:?} (expected \"dots\" or \"polyline\")")]
pub struct ParseVariantError(pub String);

impl FromStr for TrailVariant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "dots" | "a" => Ok(TrailVariant::Dots),
            "polyline" | "line" | "b" => Ok(TrailVariant::Polyline),
            other => Err(ParseVariantError(other.to_string())),
        }
    }
}
