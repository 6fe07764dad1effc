// Copyright 2026 the Pounce Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pounce Device: viewport-width device classification and layout constants.
//!
//! This crate classifies a session as [`DeviceClass::Mobile`] or
//! [`DeviceClass::Desktop`] from the host viewport width and carries the
//! per-class [`LayoutProfile`] constants the widget layer derives its layout
//! from (draggable home position, element sizes, panel maximums).
//!
//! Classification is a pure function of width. [`DeviceTracker`] adds the one
//! piece of state callers usually want on top: it remembers the current class
//! and reports transitions, so hosts can reposition elements exactly when the
//! class actually changes rather than on every resize notification.
//!
//! ## Minimal example
//!
//! ```rust
//! use pounce_device::{DeviceClass, DeviceTracker};
//!
//! let mut tracker = DeviceTracker::new(1024.0);
//! assert_eq!(tracker.class(), DeviceClass::Desktop);
//!
//! // Shrinking past the breakpoint reports the transition once.
//! assert_eq!(tracker.update(600.0), Some(DeviceClass::Mobile));
//! assert_eq!(tracker.update(500.0), None);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod class;
mod profile;

pub use class::{DeviceClass, DeviceTracker};
pub use profile::LayoutProfile;
