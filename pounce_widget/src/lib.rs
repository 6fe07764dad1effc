// Copyright 2026 the Pounce Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pounce Widget: a headless drag-to-target interaction widget.
//!
//! [`DragCollisionWidget`] composes the focused Pounce state crates into one
//! widget: a draggable element is tracked across a panel until its bounding
//! box reaches into an inward-padded region of a fixed element, at which point
//! a "collided" state toggles, the draggable hides, and the host swaps the
//! fixed element's graphic.
//!
//! The widget owns interaction state only. Everything platform-shaped is a
//! boundary the host drives:
//!
//! - **Input**: the host forwards pointer and touch events into
//!   [`pointer_down`](DragCollisionWidget::pointer_down) /
//!   [`pointer_move`](DragCollisionWidget::pointer_move) /
//!   [`pointer_up`](DragCollisionWidget::pointer_up) and their touch
//!   counterparts. Move events while no drag is active are no-ops.
//! - **Viewport**: resize notifications go to
//!   [`viewport_resized`](DragCollisionWidget::viewport_resized); crossing the
//!   768-unit breakpoint flips the [`DeviceClass`] and re-homes the draggable.
//! - **Frames**: moves are not committed synchronously. The widget stores the
//!   candidate position in a single-slot cell and answers with a
//!   [`FrameRequest`]; the host arms its "run before the next repaint"
//!   primitive at most once and calls [`frame`](DragCollisionWidget::frame)
//!   when it fires. Rapid input coalesces to one committed update per frame,
//!   and releasing the pointer cancels a pending commit.
//! - **Geometry**: at commit time the widget reads both screen-space rects
//!   through the host's [`PanelBounds`] implementation, pads the fixed rect by
//!   [`COLLISION_PADDING`](pounce_hit::COLLISION_PADDING), and runs the
//!   overlap test.
//!
//! Every mutating operation returns a [`Changed`] mask so the host re-renders
//! exactly what moved; there is no ambient re-render hook.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use pounce_widget::{DragCollisionWidget, FrameRequest, PanelBounds};
//!
//! struct Panel;
//! impl PanelBounds for Panel {
//!     fn fixed_bounds(&self) -> Rect {
//!         Rect::new(300.0, 200.0, 450.0, 350.0)
//!     }
//!     fn draggable_bounds(&self) -> Rect {
//!         Rect::new(360.0, 260.0, 390.0, 290.0)
//!     }
//! }
//!
//! let mut widget = DragCollisionWidget::new(1024.0);
//! widget.pointer_down(Point::new(0.0, 0.0));
//!
//! // First move arms a frame callback; later moves coalesce into the slot.
//! assert_eq!(widget.pointer_move(Point::new(5.0, 5.0)), FrameRequest::Schedule);
//! assert_eq!(widget.pointer_move(Point::new(9.0, 9.0)), FrameRequest::Coalesced);
//!
//! // The frame commits the last candidate and evaluates the collision.
//! let changed = widget.frame(&Panel);
//! assert!(widget.is_colliding());
//! assert!(!widget.draggable_visible());
//! # let _ = changed;
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod frame;
mod state;
mod widget;

pub use frame::{FrameRequest, FrameSlot};
pub use state::{Changed, InteractionState};
pub use widget::{DragCollisionWidget, PanelBounds};

pub use pounce_device::{DeviceClass, DeviceTracker, LayoutProfile};
