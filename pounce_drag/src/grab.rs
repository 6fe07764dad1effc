// Copyright 2026 the Pounce Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grab-offset drag state: derive element positions that keep the grab point
//! under the pointer.

use kurbo::{Point, Vec2};

/// Tracks an active drag via the pointer-to-element grab offset.
///
/// Unlike delta-based trackers that accumulate movement, `GrabDrag` anchors
/// the element to the pointer: the offset captured at [`start`](Self::start)
/// is immutable for the lifetime of the drag, so every candidate position is
/// computed from the current pointer alone and dropped intermediate moves
/// cannot make the element drift.
#[derive(Copy, Clone, Debug, Default)]
pub struct GrabDrag {
    /// Pointer minus element position, captured at drag start.
    grab_offset: Option<Vec2>,
}

impl GrabDrag {
    /// Begins a drag.
    ///
    /// `pointer` is the press location and `position` the element's current
    /// translation; their difference becomes the grab offset. Starting while
    /// a drag is already active rebases the offset, exactly as a fresh press
    /// would.
    pub fn start(&mut self, pointer: Point, position: Point) {
        self.grab_offset = Some(pointer - position);
    }

    /// Returns the candidate element position for a pointer location.
    ///
    /// `None` while no drag is active. Callers are expected to treat `None`
    /// as "ignore this move event".
    #[must_use]
    pub fn position_for(&self, pointer: Point) -> Option<Point> {
        self.grab_offset.map(|offset| pointer - offset)
    }

    /// Ends the drag. Idempotent.
    pub fn end(&mut self) {
        self.grab_offset = None;
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.grab_offset.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_tracker_is_not_dragging() {
        let drag = GrabDrag::default();
        assert!(!drag.is_dragging());
    }

    #[test]
    fn moves_are_ignored_without_a_start() {
        let drag = GrabDrag::default();
        assert_eq!(drag.position_for(Point::new(10.0, 10.0)), None);
    }

    #[test]
    fn start_captures_the_grab_offset() {
        let mut drag = GrabDrag::default();
        drag.start(Point::new(40.0, 60.0), Point::new(-300.0, -200.0));
        assert!(drag.is_dragging());

        // Pointer unmoved: position unchanged.
        assert_eq!(
            drag.position_for(Point::new(40.0, 60.0)),
            Some(Point::new(-300.0, -200.0))
        );
    }

    #[test]
    fn positions_follow_the_pointer() {
        let mut drag = GrabDrag::default();
        drag.start(Point::new(0.0, 0.0), Point::new(-100.0, -180.0));

        assert_eq!(
            drag.position_for(Point::new(25.0, -10.0)),
            Some(Point::new(-75.0, -190.0))
        );
        assert_eq!(
            drag.position_for(Point::new(-5.0, 40.0)),
            Some(Point::new(-105.0, -140.0))
        );
    }

    #[test]
    fn offset_is_stable_across_moves() {
        let mut drag = GrabDrag::default();
        drag.start(Point::new(10.0, 10.0), Point::new(0.0, 0.0));

        // Repeated queries with the same pointer agree: no accumulation.
        let a = drag.position_for(Point::new(50.0, 50.0));
        let b = drag.position_for(Point::new(50.0, 50.0));
        assert_eq!(a, b);
    }

    #[test]
    fn end_guards_later_moves() {
        let mut drag = GrabDrag::default();
        drag.start(Point::new(0.0, 0.0), Point::new(0.0, 0.0));
        drag.end();

        assert!(!drag.is_dragging());
        assert_eq!(drag.position_for(Point::new(99.0, 99.0)), None);
    }

    #[test]
    fn end_is_idempotent() {
        let mut drag = GrabDrag::default();
        drag.end();
        drag.end();
        assert!(!drag.is_dragging());
    }

    #[test]
    fn restart_rebases_the_offset() {
        let mut drag = GrabDrag::default();
        drag.start(Point::new(0.0, 0.0), Point::new(0.0, 0.0));
        drag.start(Point::new(100.0, 100.0), Point::new(20.0, 20.0));

        assert_eq!(
            drag.position_for(Point::new(100.0, 100.0)),
            Some(Point::new(20.0, 20.0))
        );
    }

    #[test]
    fn negative_coordinates_round_trip() {
        let mut drag = GrabDrag::default();
        drag.start(Point::new(-40.0, -60.0), Point::new(-300.0, -200.0));
        assert_eq!(
            drag.position_for(Point::new(-40.0, -60.0)),
            Some(Point::new(-300.0, -200.0))
        );
    }
}
