pub mod controller;
pub mod curves;
pub mod settings;
pub mod tap;

pub use controller::{AnimationRun, SplashController, Ticker};
pub use curves::{Curve, lerp};
pub use settings::SplashSettings;
pub use tap::{TapOutcome, TapState};
