// Copyright 2026 the Pounce Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interaction state snapshot and the change-notification mask.

bitflags::bitflags! {
    /// Which parts of the widget changed during an operation.
    ///
    /// Returned from every mutating widget method so the host can re-render
    /// exactly the affected pieces. An empty mask means the operation was a
    /// no-op from the view's perspective.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Changed: u8 {
        /// The draggable's position changed.
        const POSITION     = 0b0000_0001;
        /// The colliding flag flipped.
        const COLLISION    = 0b0000_0010;
        /// The draggable's visibility flipped.
        const VISIBILITY   = 0b0000_0100;
        /// The device class transitioned.
        const DEVICE_CLASS = 0b0000_1000;
    }
}

/// Snapshot of the widget's interaction flags.
///
/// `draggable_visible == !is_colliding` holds after every completed update
/// cycle: the draggable hides exactly while it collides, and the fixed element
/// shows its alternate graphic during that window.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InteractionState {
    /// A drag is active (between press and release).
    pub is_dragging: bool,
    /// The draggable currently overlaps the padded hit region.
    pub is_colliding: bool,
    /// The draggable should be rendered.
    pub draggable_visible: bool,
}
