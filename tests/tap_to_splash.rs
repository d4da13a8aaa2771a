use std::cell::Cell;
use std::rc::Rc;

use tap_splash::model::{Phase, Point, Rgba, Size, SplashConfig};
use tap_splash::render::{SplashPainter, SplashSnapshot, Surface};
use tap_splash::state::{SplashController, TapOutcome, TapState, Ticker};

#[derive(Clone, Default)]
struct CountingTicker {
    running: Rc<Cell<bool>>,
    disposed: Rc<Cell<u32>>,
}

impl Ticker for CountingTicker {
    fn start(&mut self) {
        self.running.set(true);
    }
    fn stop(&mut self) {
        self.running.set(false);
    }
    fn dispose(&mut self) {
        self.disposed.set(self.disposed.get() + 1);
    }
    fn is_running(&self) -> bool {
        self.running.get()
    }
}

#[derive(Default)]
struct Rings(Vec<(Point, f64, f64)>);

impl Surface for Rings {
    fn stroke_circle(&mut self, center: Point, radius: f64, stroke_width: f64, _color: Rgba) {
        self.0.push((center, radius, stroke_width));
    }
}

/// Wrapper glue as the component wires it: pointer events in, trigger count out.
struct Harness {
    tap: TapState,
    controller: SplashController<CountingTicker>,
    size: Size,
    triggers: u32,
}

impl Harness {
    fn new(size: Size) -> (Self, CountingTicker) {
        let ticker = CountingTicker::default();
        let controller = SplashController::new(SplashConfig::default(), ticker.clone());
        (
            Self {
                tap: TapState::default(),
                controller,
                size,
                triggers: 0,
            },
            ticker,
        )
    }

    fn down(&mut self, p: Point) {
        self.tap.pointer_down(p);
    }

    fn dragged(&mut self, p: Point) {
        self.tap.pointer_move(p, true);
    }

    fn hovered(&mut self, p: Point) {
        self.tap.pointer_move(p, false);
    }

    fn up(&mut self, p: Point) {
        if self.tap.pointer_up(p) == TapOutcome::Trigger {
            self.triggers += 1;
            self.controller.trigger(self.size);
        }
    }

    fn frame(&mut self) -> (SplashSnapshot, Rings) {
        let snap = self.controller.snapshot(self.tap.origin, None);
        let mut rings = Rings::default();
        SplashPainter::paint(&snap, &mut rings);
        (snap, rings)
    }
}

#[test]
fn tap_in_place_plays_one_ring_at_the_tap_point() {
    let (mut h, ticker) = Harness::new(Size::new(100.0, 80.0));
    let p = Point::new(30.0, 25.0);
    h.down(p);
    h.up(p);
    assert_eq!(h.triggers, 1);
    assert!(ticker.is_running());

    h.controller.tick(0.0);
    h.controller.tick(100.0);
    let (snap, rings) = h.frame();
    assert_eq!(snap.phase, Phase::Forward);
    assert_eq!(rings.0.len(), 1);
    assert_eq!(rings.0[0].0, p);
    assert!(rings.0[0].1 > 0.0 && rings.0[0].1 < 60.0);

    h.controller.tick(350.0);
    let (snap, rings) = h.frame();
    assert_eq!(snap.phase, Phase::Completed);
    assert_eq!(snap.radius, 60.0);
    assert!(rings.0.is_empty());
    assert!(!ticker.is_running());
}

#[test]
fn drag_before_release_plays_nothing() {
    let (mut h, ticker) = Harness::new(Size::new(100.0, 80.0));
    h.down(Point::new(30.0, 25.0));
    h.dragged(Point::new(34.0, 25.0));
    h.up(Point::new(34.0, 25.0));
    assert_eq!(h.triggers, 0);
    assert!(!ticker.is_running());
    let (snap, rings) = h.frame();
    assert_eq!(snap.phase, Phase::Idle);
    assert!(rings.0.is_empty());
}

#[test]
fn hover_between_press_and_release_still_taps() {
    let (mut h, _ticker) = Harness::new(Size::new(100.0, 80.0));
    h.down(Point::new(30.0, 25.0));
    h.hovered(Point::new(34.0, 25.0));
    h.up(Point::new(30.0, 25.0));
    assert_eq!(h.triggers, 1);
}

#[test]
fn second_tap_mid_run_restarts_with_new_size() {
    let (mut h, _ticker) = Harness::new(Size::new(40.0, 40.0));
    let p = Point::new(5.0, 5.0);
    h.down(p);
    h.up(p);
    h.controller.tick(0.0);
    h.controller.tick(200.0);
    assert!(h.controller.progress() > 0.0);

    h.size = Size::new(300.0, 300.0);
    h.down(p);
    h.up(p);
    assert_eq!(h.triggers, 2);
    assert_eq!(h.controller.progress(), 0.0);
    assert_eq!(h.controller.run().end_radius_target, 120.0 * 0.6);
    assert_eq!(h.controller.current_radius(), 0.0);
}

#[test]
fn release_without_fresh_press_retriggers() {
    // Arming survives a completed tap; a stray up replays the splash.
    let (mut h, _ticker) = Harness::new(Size::new(60.0, 60.0));
    let p = Point::new(1.0, 1.0);
    h.down(p);
    h.up(p);
    h.up(p);
    assert_eq!(h.triggers, 2);
}

#[test]
fn teardown_mid_run_releases_clock_once() {
    let (mut h, ticker) = Harness::new(Size::new(60.0, 60.0));
    let p = Point::new(1.0, 1.0);
    h.down(p);
    h.up(p);
    h.controller.tick(0.0);
    h.controller.dispose();
    assert!(!ticker.is_running());
    assert!(!h.controller.tick(50.0));
    drop(h);
    assert_eq!(ticker.disposed.get(), 1);
}
