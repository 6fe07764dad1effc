// Copyright 2026 the Pounce Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-slot deferred-update cell for display-frame coalescing.

use kurbo::Point;

/// What the host should do with its frame-scheduling primitive after a move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FrameRequest {
    /// Arm the "run before the next repaint" callback.
    Schedule,
    /// A callback is already armed; the pending candidate was replaced.
    Coalesced,
    /// Nothing is pending (the move was guarded away).
    Idle,
}

/// Holds at most one pending position candidate.
///
/// Storing a new candidate replaces the previous uncommitted one, so no matter
/// how fast move events arrive, at most one host frame callback is ever
/// outstanding and at most one position commit happens per rendered frame.
#[derive(Copy, Clone, Debug, Default)]
pub struct FrameSlot {
    pending: Option<Point>,
}

impl FrameSlot {
    /// Stores a candidate, replacing any pending one.
    ///
    /// Returns [`FrameRequest::Schedule`] when the slot was empty (the host
    /// must arm its callback) and [`FrameRequest::Coalesced`] when an earlier
    /// candidate was superseded.
    pub fn put(&mut self, candidate: Point) -> FrameRequest {
        match self.pending.replace(candidate) {
            None => FrameRequest::Schedule,
            Some(_) => FrameRequest::Coalesced,
        }
    }

    /// Takes the pending candidate, leaving the slot empty.
    pub fn take(&mut self) -> Option<Point> {
        self.pending.take()
    }

    /// Drops any pending candidate.
    ///
    /// Returns `true` if one was pending, in which case the host should also
    /// disarm its scheduled callback (a late [`take`](Self::take) on an empty
    /// slot is still a safe no-op).
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Returns `true` while a candidate is waiting for the next frame.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
