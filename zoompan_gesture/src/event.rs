// Copyright 2025 the Zoompan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

use crate::drag::PointerId;

/// Input delivered by the host, already translated into container
/// coordinates.
///
/// Pinch events come from the host's scale detector; the controller does not
/// derive them from pointer events itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// A pointer went down.
    PointerDown {
        /// Pointer identifier.
        id: PointerId,
        /// Pointer position.
        position: Point,
    },
    /// A pointer moved.
    PointerMove {
        /// Pointer identifier.
        id: PointerId,
        /// Pointer position.
        position: Point,
    },
    /// A pointer went up.
    PointerUp {
        /// Pointer identifier.
        id: PointerId,
        /// Release velocity in pixels per second.
        velocity: Vec2,
    },
    /// The host cancelled the current pointer stream.
    PointerCancel,
    /// A pinch gesture started.
    PinchBegin,
    /// A pinch gesture reported a new scale step.
    PinchUpdate {
        /// Scale change since the previous update.
        factor: f64,
    },
    /// A pinch gesture ended.
    PinchEnd,
}

/// What the host should do with the event it just delivered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct EventResponse {
    /// The controller owns the pointer stream; the host should stop routing
    /// it to other handlers.
    pub intercept: bool,
}
