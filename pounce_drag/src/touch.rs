// Copyright 2026 the Pounce Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch-to-pointer unification.

use kurbo::Point;

/// Returns the primary touch point: the first entry of the active-touch list.
///
/// Touch event streams carry every active contact; this interaction only ever
/// follows the first one. `None` when no touches remain (for example in a
/// touch-end notification), which callers treat the same as a guarded move.
///
/// ```rust
/// use kurbo::Point;
/// use pounce_drag::primary_touch;
///
/// let touches = [Point::new(12.0, 34.0), Point::new(200.0, 10.0)];
/// assert_eq!(primary_touch(&touches), Some(Point::new(12.0, 34.0)));
/// assert_eq!(primary_touch(&[]), None);
/// ```
#[must_use]
pub fn primary_touch(touches: &[Point]) -> Option<Point> {
    touches.first().copied()
}
