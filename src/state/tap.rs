// Pointer gesture state for the splash wrapper (tap vs drag).
use crate::model::Point;

/// What the wrapper should do after feeding a pointer event in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TapOutcome {
    /// Nothing changed.
    Ignored,
    /// Tap state changed; re-render.
    Refresh,
    /// A tap completed; start a splash run.
    Trigger,
}

#[derive(Default, Debug, Clone, PartialEq)]
pub struct TapState {
    pub armed: bool,
    pub origin: Point,
}

impl TapState {
    /// Arms a candidate tap at `pos`. A second down while armed just moves the origin.
    pub fn pointer_down(&mut self, pos: Point) -> TapOutcome {
        self.origin = pos;
        self.armed = true;
        TapOutcome::Refresh
    }

    /// Pressed movement away from the recorded origin turns the gesture into a drag.
    /// Hover moves (no button or contact) never disarm.
    pub fn pointer_move(&mut self, pos: Point, pressed: bool) -> TapOutcome {
        if !self.armed || !pressed {
            return TapOutcome::Ignored;
        }
        if pos.x != self.origin.x || pos.y != self.origin.y {
            self.armed = false;
            return TapOutcome::Refresh;
        }
        TapOutcome::Ignored
    }

    /// Completes the tap if still armed. Arming is left in place after a trigger.
    pub fn pointer_up(&mut self, _pos: Point) -> TapOutcome {
        if self.armed {
            TapOutcome::Trigger
        } else {
            TapOutcome::Ignored
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const P: Point = Point::new(10.0, 20.0);
    const Q: Point = Point::new(10.0, 21.0);

    #[test]
    fn down_up_in_place_triggers() {
        let mut t = TapState::default();
        assert_eq!(t.pointer_down(P), TapOutcome::Refresh);
        assert!(t.armed);
        assert_eq!(t.origin, P);
        assert_eq!(t.pointer_up(P), TapOutcome::Trigger);
    }

    #[test]
    fn move_away_disarms() {
        let mut t = TapState::default();
        t.pointer_down(P);
        assert_eq!(t.pointer_move(Q, true), TapOutcome::Refresh);
        assert!(!t.armed);
        assert_eq!(t.pointer_up(Q), TapOutcome::Ignored);
    }

    #[test]
    fn move_on_either_axis_disarms() {
        let mut t = TapState::default();
        t.pointer_down(P);
        assert_eq!(t.pointer_move(Point::new(11.0, 20.0), true), TapOutcome::Refresh);
        t.pointer_down(P);
        assert_eq!(t.pointer_move(Point::new(10.0, 19.5), true), TapOutcome::Refresh);
    }

    #[test]
    fn move_to_origin_keeps_armed() {
        let mut t = TapState::default();
        t.pointer_down(P);
        assert_eq!(t.pointer_move(P, true), TapOutcome::Ignored);
        assert!(t.armed);
    }

    #[test]
    fn up_without_down_is_ignored() {
        let mut t = TapState::default();
        assert_eq!(t.pointer_up(P), TapOutcome::Ignored);
        assert_eq!(t.pointer_move(Q, true), TapOutcome::Ignored);
    }

    #[test]
    fn second_down_rerecords_origin() {
        let mut t = TapState::default();
        t.pointer_down(P);
        assert_eq!(t.pointer_down(Q), TapOutcome::Refresh);
        assert!(t.armed);
        assert_eq!(t.origin, Q);
        // Q is the new origin, so staying at Q is not a drag.
        assert_eq!(t.pointer_move(Q, true), TapOutcome::Ignored);
    }

    #[test]
    fn up_leaves_armed_so_a_stray_up_retriggers() {
        let mut t = TapState::default();
        t.pointer_down(P);
        assert_eq!(t.pointer_up(P), TapOutcome::Trigger);
        assert!(t.armed);
        assert_eq!(t.pointer_up(P), TapOutcome::Trigger);
        // Hovering away after release does not clear it either.
        assert_eq!(t.pointer_move(Q, false), TapOutcome::Ignored);
        assert_eq!(t.pointer_up(Q), TapOutcome::Trigger);
    }

    #[test]
    fn hover_move_keeps_armed() {
        let mut t = TapState::default();
        t.pointer_down(P);
        assert_eq!(t.pointer_move(Q, false), TapOutcome::Ignored);
        assert!(t.armed);
        assert_eq!(t.pointer_up(Q), TapOutcome::Trigger);
    }
}
