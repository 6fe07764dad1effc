// Copyright 2026 the Pounce Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The composed drag-to-target widget.

use kurbo::{Point, Rect};

use pounce_device::{DeviceClass, DeviceTracker, LayoutProfile};
use pounce_drag::{primary_touch, GrabDrag};
use pounce_hit::{pad_inward, CollisionEvent, CollisionState, COLLISION_PADDING};

use crate::frame::{FrameRequest, FrameSlot};
use crate::state::{Changed, InteractionState};

/// Screen-space bounding rects of the two panel elements.
///
/// The widget never queries a windowing system itself; the host implements
/// this against whatever layout or DOM it owns. Both rects are read inside
/// [`DragCollisionWidget::frame`], once per committed update, so high-frequency
/// input never triggers repeated bounds reads.
pub trait PanelBounds {
    /// Bounding rect of the fixed target element.
    fn fixed_bounds(&self) -> Rect;
    /// Bounding rect of the draggable element.
    fn draggable_bounds(&self) -> Rect;
}

/// Drag-and-drop widget that swaps visuals when the draggable reaches the
/// fixed element's padded hit region.
///
/// See the crate docs for the host-integration contract. All state lives in
/// this struct; there are no ambient globals, and every mutating method
/// returns the [`Changed`] mask the view needs to apply.
#[derive(Clone, Debug)]
pub struct DragCollisionWidget {
    device: DeviceTracker,
    drag: GrabDrag,
    collision: CollisionState,
    slot: FrameSlot,
    position: Point,
    draggable_visible: bool,
}

impl DragCollisionWidget {
    /// Creates a widget for the given initial viewport width.
    ///
    /// The draggable starts at the device class's home position, visible and
    /// idle.
    #[must_use]
    pub fn new(viewport_width: f64) -> Self {
        let device = DeviceTracker::new(viewport_width);
        Self {
            device,
            drag: GrabDrag::default(),
            collision: CollisionState::default(),
            slot: FrameSlot::default(),
            position: device.class().profile().home,
            draggable_visible: true,
        }
    }

    /// Current device class.
    #[must_use]
    pub fn device_class(&self) -> DeviceClass {
        self.device.class()
    }

    /// Layout constants for the current device class.
    #[must_use]
    pub fn profile(&self) -> LayoutProfile {
        self.device.class().profile()
    }

    /// Current translation of the draggable element.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Returns `true` between press and release.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Returns `true` while the draggable overlaps the padded hit region.
    #[must_use]
    pub fn is_colliding(&self) -> bool {
        self.collision.is_colliding()
    }

    /// Returns `true` while the draggable should be rendered.
    #[must_use]
    pub fn draggable_visible(&self) -> bool {
        self.draggable_visible
    }

    /// Snapshot of the interaction flags.
    #[must_use]
    pub fn state(&self) -> InteractionState {
        InteractionState {
            is_dragging: self.drag.is_dragging(),
            is_colliding: self.collision.is_colliding(),
            draggable_visible: self.draggable_visible,
        }
    }

    /// Handles a viewport resize notification.
    ///
    /// Reclassifies the device; on a class transition the draggable is
    /// re-homed to the new class's default position.
    pub fn viewport_resized(&mut self, width: f64) -> Changed {
        match self.device.update(width) {
            Some(class) => {
                self.position = class.profile().home;
                Changed::DEVICE_CLASS | Changed::POSITION
            }
            None => Changed::empty(),
        }
    }

    /// Begins a drag from a primary-button press.
    pub fn pointer_down(&mut self, pointer: Point) {
        self.drag.start(pointer, self.position);
    }

    /// Begins a drag from a touch-start, using the first active touch point.
    ///
    /// Returns `false` (and does nothing) when the touch list is empty.
    pub fn touch_start(&mut self, touches: &[Point]) -> bool {
        match primary_touch(touches) {
            Some(pointer) => {
                self.pointer_down(pointer);
                true
            }
            None => false,
        }
    }

    /// Handles a pointer move.
    ///
    /// A no-op unless a drag is active. While dragging, the candidate position
    /// is stored for the next frame; the return value tells the host whether
    /// to arm its frame callback.
    pub fn pointer_move(&mut self, pointer: Point) -> FrameRequest {
        match self.drag.position_for(pointer) {
            Some(candidate) => self.slot.put(candidate),
            None => FrameRequest::Idle,
        }
    }

    /// Handles a touch move, using the first active touch point.
    pub fn touch_move(&mut self, touches: &[Point]) -> FrameRequest {
        match primary_touch(touches) {
            Some(pointer) => self.pointer_move(pointer),
            None => FrameRequest::Idle,
        }
    }

    /// Commits the pending move and re-evaluates the collision.
    ///
    /// Called by the host when its frame callback fires. Takes the pending
    /// candidate (a no-op when the slot is empty, which covers callbacks that
    /// fire after release or teardown), commits the position, then reads both
    /// rects from `bounds`, pads the fixed rect inward by
    /// [`COLLISION_PADDING`] and toggles the colliding/visibility pair on the
    /// overlap result.
    pub fn frame(&mut self, bounds: &impl PanelBounds) -> Changed {
        let Some(candidate) = self.slot.take() else {
            return Changed::empty();
        };

        let mut changed = Changed::empty();
        if candidate != self.position {
            self.position = candidate;
            changed |= Changed::POSITION;
        }

        let hit_region = pad_inward(bounds.fixed_bounds(), COLLISION_PADDING);
        if let Some(event) = self.collision.update(bounds.draggable_bounds(), hit_region) {
            self.draggable_visible = matches!(event, CollisionEvent::Leave);
            changed |= Changed::COLLISION | Changed::VISIBILITY;
        }
        changed
    }

    /// Ends a drag from a primary-button release.
    ///
    /// Returns `true` if a frame callback was armed; the host should disarm
    /// its scheduling primitive so no late position commit lands after the
    /// release.
    pub fn pointer_up(&mut self) -> bool {
        self.drag.end();
        self.slot.cancel()
    }

    /// Ends a drag from a touch-end. Same contract as
    /// [`pointer_up`](Self::pointer_up).
    pub fn touch_end(&mut self) -> bool {
        self.pointer_up()
    }

    /// Drops any pending frame work without touching drag state.
    ///
    /// Teardown hook: returns `true` if the host should also disarm its
    /// scheduled callback.
    pub fn cancel_frame(&mut self) -> bool {
        self.slot.cancel()
    }

    /// Resets the widget to its per-class initial configuration.
    ///
    /// Position returns to the class home, the colliding flag clears, the
    /// draggable becomes visible, and any active drag or pending frame is
    /// dropped. Idempotent: a second reset reports no changes.
    pub fn reset(&mut self) -> Changed {
        let mut changed = Changed::empty();

        let home = self.device.class().profile().home;
        if self.position != home {
            self.position = home;
            changed |= Changed::POSITION;
        }
        if self.collision.reset() {
            changed |= Changed::COLLISION;
        }
        if !self.draggable_visible {
            self.draggable_visible = true;
            changed |= Changed::VISIBILITY;
        }
        self.drag.end();
        self.slot.cancel();
        changed
    }
}
