// Copyright 2026 the Pounce Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collision state: a boolean toggle with enter/leave transition reporting.

use kurbo::Rect;

use crate::overlap::overlaps;

/// Transition produced by [`CollisionState::update`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CollisionEvent {
    /// The rects started overlapping.
    Enter,
    /// The rects stopped overlapping.
    Leave,
}

/// Tracks whether a draggable rect currently overlaps a hit region.
///
/// `update` runs the overlap test and reports a [`CollisionEvent`] only when
/// the state flips, so callers can react to edges (swap a graphic, toggle
/// visibility) without comparing flags themselves.
#[derive(Copy, Clone, Debug, Default)]
pub struct CollisionState {
    colliding: bool,
}

impl CollisionState {
    /// Returns `true` while the last update observed an overlap.
    #[must_use]
    pub fn is_colliding(&self) -> bool {
        self.colliding
    }

    /// Re-evaluates the overlap and returns the transition, if any.
    ///
    /// `hit_region` is expected to be pre-padded (see
    /// [`pad_inward`](crate::pad_inward)).
    pub fn update(&mut self, draggable: Rect, hit_region: Rect) -> Option<CollisionEvent> {
        let colliding = overlaps(draggable, hit_region);
        if colliding == self.colliding {
            return None;
        }
        self.colliding = colliding;
        Some(if colliding {
            CollisionEvent::Enter
        } else {
            CollisionEvent::Leave
        })
    }

    /// Clears the colliding flag, returning `true` if it was set.
    pub fn reset(&mut self) -> bool {
        core::mem::take(&mut self.colliding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlap::{pad_inward, COLLISION_PADDING};

    const FIXED: Rect = Rect::new(300.0, 200.0, 450.0, 350.0);
    const INSIDE: Rect = Rect::new(360.0, 260.0, 390.0, 290.0);
    const OUTSIDE: Rect = Rect::new(0.0, 0.0, 50.0, 50.0);

    fn hit_region() -> Rect {
        pad_inward(FIXED, COLLISION_PADDING)
    }

    #[test]
    fn starts_clear() {
        assert!(!CollisionState::default().is_colliding());
    }

    #[test]
    fn enter_and_leave_fire_once_each() {
        let mut state = CollisionState::default();

        assert_eq!(state.update(INSIDE, hit_region()), Some(CollisionEvent::Enter));
        assert!(state.is_colliding());
        assert_eq!(state.update(INSIDE, hit_region()), None);

        assert_eq!(state.update(OUTSIDE, hit_region()), Some(CollisionEvent::Leave));
        assert!(!state.is_colliding());
        assert_eq!(state.update(OUTSIDE, hit_region()), None);
    }

    #[test]
    fn entering_the_unpadded_border_is_not_a_collision() {
        // Overlapping the fixed rect but not its padded interior.
        let grazing = Rect::new(290.0, 190.0, 340.0, 240.0);
        let mut state = CollisionState::default();
        assert_eq!(state.update(grazing, hit_region()), None);
        assert!(!state.is_colliding());
    }

    #[test]
    fn reset_clears_and_reports() {
        let mut state = CollisionState::default();
        state.update(INSIDE, hit_region());
        assert!(state.reset());
        assert!(!state.is_colliding());
        assert!(!state.reset());
    }
}
