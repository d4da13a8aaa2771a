use std::time::Duration;

use crate::model::{
    END_BORDER_FACTOR, END_RADIUS_FACTOR, Phase, Point, Rgba, START_BORDER_DIVISOR, Size,
    SplashConfig,
};
use crate::render::SplashSnapshot;
use crate::state::curves::{Curve, lerp};

/// Host frame clock driving a splash run.
///
/// `start` asks the host for frames until `stop`; each delivered frame is
/// forwarded to [`SplashController::tick`] by whoever owns the controller.
/// `dispose` releases the underlying resource for good.
pub trait Ticker {
    fn start(&mut self);
    fn stop(&mut self);
    fn dispose(&mut self);
    fn is_running(&self) -> bool;
}

/// Targets and progress of a single run. Recomputed on every trigger.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnimationRun {
    pub start_radius_target: f64,
    pub end_radius_target: f64,
    pub start_border_width: f64,
    pub end_border_width: f64,
    pub progress: f64,
    pub phase: Phase,
}

impl AnimationRun {
    fn for_radius(clamped_radius: f64) -> Self {
        let end_radius_target = clamped_radius * END_RADIUS_FACTOR;
        Self {
            start_radius_target: 0.0,
            end_radius_target,
            start_border_width: end_radius_target / START_BORDER_DIVISOR,
            end_border_width: end_radius_target * END_BORDER_FACTOR,
            progress: 0.0,
            phase: Phase::Forward,
        }
    }
}

pub struct SplashController<T: Ticker> {
    config: SplashConfig,
    run: AnimationRun,
    started_at_ms: Option<f64>,
    ticker: Option<T>,
}

impl<T: Ticker> SplashController<T> {
    /// Takes ownership of `ticker`; it is released by [`Self::dispose`] or on drop.
    pub fn new(config: SplashConfig, ticker: T) -> Self {
        Self {
            config,
            run: AnimationRun::default(),
            started_at_ms: None,
            ticker: Some(ticker),
        }
    }

    pub fn run(&self) -> &AnimationRun {
        &self.run
    }

    pub fn phase(&self) -> Phase {
        self.run.phase
    }

    pub fn progress(&self) -> f64 {
        self.run.progress
    }

    pub fn is_disposed(&self) -> bool {
        self.ticker.is_none()
    }

    /// Starts a fresh run sized after the wrapped element's layout box.
    /// An in-flight run is abandoned and restarted from zero.
    pub fn trigger(&mut self, bounding_size: Size) {
        let Some(ticker) = self.ticker.as_mut() else {
            log::warn!("splash trigger ignored: controller already disposed");
            return;
        };
        let clamped = self.config.clamp_radius(bounding_size);
        self.run = AnimationRun::for_radius(clamped);
        self.started_at_ms = None;
        ticker.start();
        log::debug!(
            "splash triggered: box {}x{} -> radius {} (border {} -> {})",
            bounding_size.width,
            bounding_size.height,
            self.run.end_radius_target,
            self.run.start_border_width,
            self.run.end_border_width
        );
    }

    /// Frame callback. Returns whether further frames are wanted.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        if self.run.phase != Phase::Forward || self.ticker.is_none() {
            return false;
        }
        let started = *self.started_at_ms.get_or_insert(now_ms);
        let duration_ms = duration_millis(self.config.duration());
        let elapsed = (now_ms - started).max(0.0);
        self.set_progress(elapsed / duration_ms);
        self.run.phase == Phase::Forward
    }

    /// Moves the current run to `t` (clamped to [0,1]); completes it at 1.
    pub fn set_progress(&mut self, t: f64) {
        if self.run.phase != Phase::Forward {
            return;
        }
        self.run.progress = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        if self.run.progress >= 1.0 {
            self.run.phase = Phase::Completed;
            if let Some(ticker) = self.ticker.as_mut() {
                ticker.stop();
            }
            log::debug!("splash run completed");
        }
    }

    /// Back to idle without drawing anything further.
    pub fn reset(&mut self) {
        self.run = AnimationRun::default();
        self.started_at_ms = None;
        if let Some(ticker) = self.ticker.as_mut() {
            ticker.stop();
        }
    }

    pub fn current_radius(&self) -> f64 {
        lerp(
            self.run.start_radius_target,
            self.run.end_radius_target,
            Curve::Ease.transform(self.run.progress),
        )
    }

    pub fn current_border_width(&self) -> f64 {
        lerp(
            self.run.start_border_width,
            self.run.end_border_width,
            Curve::FastOutSlowIn.transform(self.run.progress),
        )
    }

    /// Frame-local view of the run for the painter.
    pub fn snapshot(&self, tap_position: Point, color: Option<Rgba>) -> SplashSnapshot {
        SplashSnapshot {
            radius: self.current_radius(),
            border_width: self.current_border_width(),
            phase: self.run.phase,
            tap_position,
            color: color.unwrap_or(self.config.color()),
        }
    }

    /// Releases the clock. Later calls (and the drop) are no-ops.
    pub fn dispose(&mut self) {
        if let Some(mut ticker) = self.ticker.take() {
            ticker.stop();
            ticker.dispose();
            log::debug!("splash controller disposed in phase {:?}", self.run.phase);
        }
    }
}

impl<T: Ticker> Drop for SplashController<T> {
    fn drop(&mut self) {
        self.dispose();
    }
}

fn duration_millis(d: Duration) -> f64 {
    (d.as_micros() as f64 / 1000.0).max(f64::MIN_POSITIVE)
}
