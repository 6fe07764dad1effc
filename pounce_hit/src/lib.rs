// Copyright 2026 the Pounce Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pounce Hit: inward-padded axis-aligned overlap testing.
//!
//! The collision model is deliberately small: shrink the fixed element's
//! screen-space rectangle inward by a constant margin ([`pad_inward`] with
//! [`COLLISION_PADDING`]), then run an open-interval AABB overlap test
//! ([`overlaps`]) against the draggable's rectangle. Padding the target
//! instead of tuning a distance threshold means the hit region follows the
//! target's on-screen size for free.
//!
//! [`CollisionState`] layers transition reporting on top of the pure test, in
//! the same enter/leave shape other Pounce state managers use: `update`
//! returns an event only when the colliding flag actually flips.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use pounce_hit::{overlaps, pad_inward, CollisionState, CollisionEvent, COLLISION_PADDING};
//!
//! let fixed = Rect::new(300.0, 200.0, 450.0, 350.0);
//! let hit_region = pad_inward(fixed, COLLISION_PADDING);
//!
//! // A draggable well inside the padded region overlaps.
//! let draggable = Rect::new(360.0, 260.0, 390.0, 290.0);
//! assert!(overlaps(draggable, hit_region));
//!
//! let mut state = CollisionState::default();
//! assert_eq!(state.update(draggable, hit_region), Some(CollisionEvent::Enter));
//! assert_eq!(state.update(draggable, hit_region), None); // still inside
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod overlap;
mod state;

pub use overlap::{overlaps, pad_inward, COLLISION_PADDING};
pub use state::{CollisionEvent, CollisionState};
