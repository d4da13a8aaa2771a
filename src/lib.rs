//! Tap-triggered expanding-ring splash for yew.
//!
//! [`components::Splash`] wraps any element; a tap (pointer down and up
//! without movement) plays a ring that grows from the tap point while its
//! stroke thins out. The animation state ([`state::SplashController`]),
//! gesture tracking ([`state::TapState`]) and painting
//! ([`render::SplashPainter`]) are plain Rust and do not touch the DOM.

pub mod components;
pub mod model;
pub mod render;
pub mod state;
pub mod util;

pub use components::{Splash, SplashProps};
pub use model::{Phase, Point, Rgba, Size, SplashConfig, SplashError};
