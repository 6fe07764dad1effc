// Copyright 2026 the Pounce Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rect padding and the open-interval AABB overlap test.

use kurbo::Rect;

/// Fixed inward margin applied to the target rect before overlap testing.
///
/// Shrinking the target means the draggable has to reach meaningfully into it
/// before a collision registers, rather than triggering on a one-pixel graze.
pub const COLLISION_PADDING: f64 = 50.0;

/// Shrinks `rect` inward by `padding` on all four edges.
///
/// If `padding` exceeds half of the rect's width or height the result is
/// inverted (`x0 > x1` and/or `y0 > y1`). Inverted rects are not normalized
/// here: fed to [`overlaps`], they simply can never be overlapped, which is
/// the intended reading of "the hit region collapsed to nothing".
#[must_use]
pub fn pad_inward(rect: Rect, padding: f64) -> Rect {
    Rect::new(
        rect.x0 + padding,
        rect.y0 + padding,
        rect.x1 - padding,
        rect.y1 - padding,
    )
}

/// Open-interval AABB overlap test.
///
/// Two rects overlap iff each one's leading edge lies strictly before the
/// other's trailing edge on both axes. Rects that merely share an edge do not
/// overlap.
///
/// The test is symmetric and invariant under translating both rects by the
/// same vector.
#[must_use]
pub fn overlaps(a: Rect, b: Rect) -> bool {
    a.x0 < b.x1 && a.x1 > b.x0 && a.y0 < b.y1 && a.y1 > b.y0
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Vec2;

    #[test]
    fn pad_inward_shrinks_all_edges() {
        let padded = pad_inward(Rect::new(300.0, 200.0, 450.0, 350.0), 50.0);
        assert_eq!(padded, Rect::new(350.0, 250.0, 400.0, 300.0));
    }

    #[test]
    fn pad_inward_can_invert() {
        // Padding over half the extent flips the edges; no normalization.
        let padded = pad_inward(Rect::new(0.0, 0.0, 60.0, 60.0), 50.0);
        assert!(padded.x0 > padded.x1);
        assert!(padded.y0 > padded.y1);
    }

    #[test]
    fn inverted_rect_never_overlaps() {
        let inverted = pad_inward(Rect::new(0.0, 0.0, 60.0, 60.0), 50.0);
        let everything = Rect::new(-1_000.0, -1_000.0, 1_000.0, 1_000.0);
        assert!(!overlaps(everything, inverted));
        assert!(!overlaps(inverted, everything));
    }

    #[test]
    fn overlapping_rects_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 15.0, 15.0);
        assert!(overlaps(a, b));
    }

    #[test]
    fn containment_counts_as_overlap() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 60.0, 60.0);
        assert!(overlaps(outer, inner));
        assert!(overlaps(inner, outer));
    }

    #[test]
    fn disjoint_rects_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 0.0, 30.0, 10.0);
        assert!(!overlaps(a, b));
    }

    #[test]
    fn shared_edge_is_not_an_overlap() {
        // Open intervals: touching along an edge is not a collision.
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 20.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 20.0);
        assert!(!overlaps(a, right));
        assert!(!overlaps(a, below));
    }

    #[test]
    fn overlap_is_symmetric() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(9.0, 9.0, 20.0, 20.0);
        assert_eq!(overlaps(a, b), overlaps(b, a));

        let c = Rect::new(50.0, 50.0, 60.0, 60.0);
        assert_eq!(overlaps(a, c), overlaps(c, a));
    }

    #[test]
    fn overlap_is_translation_invariant() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 15.0, 15.0);
        let t = Vec2::new(123.0, -456.0);
        assert_eq!(overlaps(a, b), overlaps(a + t, b + t));

        let c = Rect::new(30.0, 30.0, 40.0, 40.0);
        assert_eq!(overlaps(a, c), overlaps(a + t, c + t));
    }

    #[test]
    fn padded_overlap_matches_the_expanded_predicate() {
        let fixed = Rect::new(300.0, 200.0, 450.0, 350.0);
        let padded = pad_inward(fixed, COLLISION_PADDING);

        let cases = [
            Rect::new(360.0, 260.0, 390.0, 290.0), // inside
            Rect::new(0.0, 0.0, 100.0, 100.0),     // far away
            Rect::new(340.0, 240.0, 355.0, 255.0), // just reaching in
            Rect::new(398.0, 298.0, 500.0, 500.0), // clipping the far corner
        ];
        for d in cases {
            let expected = d.x0 < fixed.x1 - COLLISION_PADDING
                && d.x1 > fixed.x0 + COLLISION_PADDING
                && d.y0 < fixed.y1 - COLLISION_PADDING
                && d.y1 > fixed.y0 + COLLISION_PADDING;
            assert_eq!(overlaps(d, padded), expected, "case {d:?}");
        }
    }
}
