// Copyright 2026 the Pounce Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pounce Drag: grab-offset drag tracking for pointer and touch input.
//!
//! [`GrabDrag`] is a small state machine for the "pick an element up and move
//! it" interaction. At drag start it captures the offset between the pointer
//! and the element's current position (the grab point); on every subsequent
//! pointer position it derives the candidate element position that keeps the
//! grab point under the pointer. Moves while no drag is active are guarded
//! no-ops, which absorbs stray move events after release and input from
//! unrelated pointers.
//!
//! The tracker is input-source agnostic: mouse and touch paths converge on the
//! same [`Point`]-based entry points. [`primary_touch`] maps a list of active
//! touch points onto the single point the tracker consumes.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use pounce_drag::GrabDrag;
//!
//! let mut drag = GrabDrag::default();
//!
//! // Element sits at (-300, -200); pointer goes down at (40, 60).
//! drag.start(Point::new(40.0, 60.0), Point::new(-300.0, -200.0));
//!
//! // Pointer moves to (50, 65): element follows, grab point preserved.
//! let pos = drag.position_for(Point::new(50.0, 65.0)).unwrap();
//! assert_eq!(pos, Point::new(-290.0, -195.0));
//!
//! // After release, moves no longer produce positions.
//! drag.end();
//! assert!(drag.position_for(Point::new(60.0, 70.0)).is_none());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod grab;
mod touch;

pub use grab::GrabDrag;
pub use touch::primary_touch;
