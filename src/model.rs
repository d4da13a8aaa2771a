//! Core value types for the tap splash.
//! Geometry, colour and the validated splash configuration live here.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Smallest ring radius used when no radius is supplied.
pub const DEFAULT_MIN_RADIUS: f64 = 50.0;
/// Largest ring radius used when no radius is supplied.
pub const DEFAULT_MAX_RADIUS: f64 = 120.0;
/// Length of one splash run.
pub const SPLASH_DURATION: Duration = Duration::from_millis(350);

/// Share of the clamped radius the ring finally reaches.
pub const END_RADIUS_FACTOR: f64 = 0.6;
/// Stroke width at the start of a run, as a divisor of the end radius.
pub const START_BORDER_DIVISOR: f64 = 5.0;
/// Stroke width at the end of a run, as a factor of the end radius.
pub const END_BORDER_FACTOR: f64 = 0.01;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Longest side of the box.
    pub fn longest_side(&self) -> f64 {
        self.width.max(self.height)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Default for Rgba {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// CSS colour string usable as a canvas stroke style.
    pub fn to_css(&self) -> String {
        format!(
            "rgba({},{},{},{})",
            self.r,
            self.g,
            self.b,
            self.a as f64 / 255.0
        )
    }

    /// Parses `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    pub fn from_hex(raw: &str) -> Option<Self> {
        let hex = raw.trim().trim_start_matches('#');
        if !hex.is_ascii() || (hex.len() != 6 && hex.len() != 8) {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        let a = if hex.len() == 8 { byte(6)? } else { 255 };
        Some(Self::new(byte(0)?, byte(2)?, byte(4)?, a))
    }

    /// `#rrggbb` form, as produced by an `<input type="color">`. Alpha is dropped.
    pub fn to_hex_rgb(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Animation status of a splash run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Idle,
    Forward,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SplashError {
    #[error("min radius must be positive, got {0}")]
    NonPositiveMinRadius(f64),
    #[error("min radius ({min}) must be smaller than max radius ({max})")]
    InvertedRadii { min: f64, max: f64 },
}

/// Validated, immutable splash configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SplashConfig {
    min_radius: f64,
    max_radius: f64,
    color: Rgba,
    duration: Duration,
}

impl SplashConfig {
    /// Fails unless `0 < min_radius < max_radius`.
    pub fn new(min_radius: f64, max_radius: f64, color: Rgba) -> Result<Self, SplashError> {
        // Negated comparisons so NaN is rejected too.
        if !(min_radius > 0.0) {
            return Err(SplashError::NonPositiveMinRadius(min_radius));
        }
        if !(min_radius < max_radius) {
            return Err(SplashError::InvertedRadii {
                min: min_radius,
                max: max_radius,
            });
        }
        Ok(Self {
            min_radius,
            max_radius,
            color,
            duration: SPLASH_DURATION,
        })
    }

    pub fn min_radius(&self) -> f64 {
        self.min_radius
    }

    pub fn max_radius(&self) -> f64 {
        self.max_radius
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Longest side of `size` clamped into `[min_radius, max_radius]`.
    pub fn clamp_radius(&self, size: Size) -> f64 {
        let raw = size.longest_side();
        if raw.is_nan() {
            return self.min_radius;
        }
        raw.clamp(self.min_radius, self.max_radius)
    }
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            min_radius: DEFAULT_MIN_RADIUS,
            max_radius: DEFAULT_MAX_RADIUS,
            color: Rgba::BLACK,
            duration: SPLASH_DURATION,
        }
    }
}
