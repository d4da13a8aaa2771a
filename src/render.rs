//! Splash painting.
//! The painter is a pure function of a [`SplashSnapshot`]; it owns no state.

use web_sys::CanvasRenderingContext2d;

use crate::model::{
    END_RADIUS_FACTOR, Phase, Point, Rgba, START_BORDER_DIVISOR, Size, SplashConfig,
};

/// Values of one frame, handed from the controller to the painter.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SplashSnapshot {
    pub radius: f64,
    pub border_width: f64,
    pub phase: Phase,
    pub tap_position: Point,
    pub color: Rgba,
}

/// Drawing target for the painter.
pub trait Surface {
    fn stroke_circle(&mut self, center: Point, radius: f64, stroke_width: f64, color: Rgba);
}

impl Surface for CanvasRenderingContext2d {
    fn stroke_circle(&mut self, center: Point, radius: f64, stroke_width: f64, color: Rgba) {
        self.set_stroke_style_str(&color.to_css());
        self.set_line_width(stroke_width);
        self.begin_path();
        self.arc(
            center.x,
            center.y,
            radius.max(0.0),
            0.0,
            std::f64::consts::PI * 2.0,
        )
        .ok();
        self.stroke();
    }
}

/// Placement of the overlay canvas around the wrapped element.
///
/// The canvas overhangs the wrapper by `margin` CSS pixels on every side so
/// the largest ring fits even for small elements or taps near an edge. Its
/// backing store is `scale` (the device pixel ratio) times its CSS size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Overlay {
    pub margin: f64,
    pub scale: f64,
}

impl Overlay {
    pub fn new(config: &SplashConfig, scale: f64) -> Self {
        let widest_radius = config.max_radius() * END_RADIUS_FACTOR;
        let widest_stroke = widest_radius / START_BORDER_DIVISOR;
        let scale = if scale.is_finite() && scale > 0.0 { scale } else { 1.0 };
        Self {
            margin: (widest_radius + widest_stroke).ceil(),
            scale,
        }
    }

    /// CSS size of the canvas for a wrapper of `wrapper` size.
    pub fn css_size(&self, wrapper: Size) -> Size {
        Size::new(
            wrapper.width.max(0.0) + 2.0 * self.margin,
            wrapper.height.max(0.0) + 2.0 * self.margin,
        )
    }

    /// Backing store dimensions in device pixels.
    pub fn backing_size(&self, wrapper: Size) -> (u32, u32) {
        let css = self.css_size(wrapper);
        (
            (css.width * self.scale).ceil() as u32,
            (css.height * self.scale).ceil() as u32,
        )
    }

    /// Wrapper-local point in canvas CSS coordinates.
    pub fn to_canvas(&self, p: Point) -> Point {
        Point::new(p.x + self.margin, p.y + self.margin)
    }

    /// Inline style placing the canvas over the wrapper.
    pub fn css_style(&self) -> String {
        format!(
            "position:absolute; left:-{m}px; top:-{m}px; width:calc(100% + {d}px); height:calc(100% + {d}px); pointer-events:none;",
            m = self.margin,
            d = 2.0 * self.margin
        )
    }
}

pub struct SplashPainter;

impl SplashPainter {
    /// One stroked ring while a run is in flight, nothing otherwise.
    pub fn paint<S: Surface + ?Sized>(snapshot: &SplashSnapshot, surface: &mut S) {
        if snapshot.phase != Phase::Forward {
            return;
        }
        surface.stroke_circle(
            snapshot.tap_position,
            snapshot.radius,
            snapshot.border_width,
            snapshot.color,
        );
    }

    /// Only a radius change forces a repaint; border width alone does not.
    pub fn should_repaint(previous: &SplashSnapshot, next: &SplashSnapshot) -> bool {
        previous.radius != next.radius
    }
}
