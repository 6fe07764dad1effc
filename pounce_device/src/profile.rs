// Copyright 2026 the Pounce Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size};

/// Per-class layout constants.
///
/// These are the fixed numbers the widget layer lays itself out from. They are
/// intentionally constants rather than configuration; see the crate docs of
/// `pounce_widget` for how they are consumed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutProfile {
    /// Home translation of the draggable element relative to its layout origin.
    ///
    /// The draggable is reset here on mount, on every device-class transition,
    /// and on an explicit reset action.
    pub home: Point,
    /// Size of the fixed target element.
    pub fixed_size: Size,
    /// Width of the draggable element (height follows the image aspect ratio,
    /// which the host owns).
    pub draggable_width: f64,
    /// Maximum panel dimensions.
    pub panel_max: Size,
}

impl LayoutProfile {
    /// Layout for narrow viewports.
    pub const MOBILE: Self = Self {
        home: Point::new(-100.0, -180.0),
        fixed_size: Size::new(120.0, 120.0),
        draggable_width: 170.0,
        panel_max: Size::new(500.0, 800.0),
    };

    /// Layout for wide viewports.
    pub const DESKTOP: Self = Self {
        home: Point::new(-300.0, -200.0),
        fixed_size: Size::new(150.0, 150.0),
        draggable_width: 250.0,
        panel_max: Size::new(800.0, 600.0),
    };
}
