// Copyright 2026 the Pounce Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::profile::LayoutProfile;

/// Mobile/Desktop classification derived from viewport width.
///
/// The split is a single fixed breakpoint: widths up to and including
/// [`DeviceClass::BREAKPOINT`] are [`Mobile`](Self::Mobile), anything wider is
/// [`Desktop`](Self::Desktop).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DeviceClass {
    /// Narrow viewport (width ≤ 768).
    Mobile,
    /// Wide viewport (width > 768).
    Desktop,
}

impl DeviceClass {
    /// Viewport width (in device units) at or below which a session counts as mobile.
    pub const BREAKPOINT: f64 = 768.0;

    /// Classifies a viewport width.
    ///
    /// ```rust
    /// use pounce_device::DeviceClass;
    ///
    /// assert_eq!(DeviceClass::from_viewport_width(768.0), DeviceClass::Mobile);
    /// assert_eq!(DeviceClass::from_viewport_width(769.0), DeviceClass::Desktop);
    /// ```
    #[must_use]
    pub fn from_viewport_width(width: f64) -> Self {
        if width <= Self::BREAKPOINT {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    /// Returns the layout constants for this class.
    #[must_use]
    pub const fn profile(self) -> LayoutProfile {
        match self {
            Self::Mobile => LayoutProfile::MOBILE,
            Self::Desktop => LayoutProfile::DESKTOP,
        }
    }
}

/// Remembers the current [`DeviceClass`] and reports transitions.
///
/// Hosts feed every viewport resize notification into [`DeviceTracker::update`];
/// the return value is `Some` only when the class actually changed, which is
/// the moment dependent state (such as a draggable's home position) should be
/// recomputed.
#[derive(Copy, Clone, Debug)]
pub struct DeviceTracker {
    class: DeviceClass,
}

impl DeviceTracker {
    /// Creates a tracker classified from the initial viewport width.
    #[must_use]
    pub fn new(width: f64) -> Self {
        Self {
            class: DeviceClass::from_viewport_width(width),
        }
    }

    /// Returns the current class.
    #[must_use]
    pub fn class(&self) -> DeviceClass {
        self.class
    }

    /// Reclassifies from a new viewport width.
    ///
    /// Returns `Some(new_class)` on a transition, `None` when the class is
    /// unchanged.
    pub fn update(&mut self, width: f64) -> Option<DeviceClass> {
        let class = DeviceClass::from_viewport_width(width);
        if class == self.class {
            None
        } else {
            self.class = class;
            Some(class)
        }
    }
}
