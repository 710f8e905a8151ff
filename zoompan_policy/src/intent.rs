// Copyright 2025 the Zoompan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

/// A proposed content movement produced by one pointer-move event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragIntent {
    /// Movement since the previous event, in container pixels.
    pub delta: Vec2,
}

impl DragIntent {
    /// Creates an intent for a movement of `delta`.
    #[must_use]
    pub fn new(delta: Vec2) -> Self {
        Self { delta }
    }

    /// Returns `true` if the motion points toward negative x.
    #[must_use]
    pub fn moving_left(&self) -> bool {
        self.delta.x < 0.0
    }

    /// Returns `true` if the motion points toward negative y.
    #[must_use]
    pub fn moving_up(&self) -> bool {
        self.delta.y < 0.0
    }
}

/// A multiplicative scale change produced by one pinch-update event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomIntent {
    /// Factor applied to the current scale.
    pub factor: f64,
}

impl ZoomIntent {
    /// Creates an intent that multiplies the scale by `factor`.
    #[must_use]
    pub fn new(factor: f64) -> Self {
        Self { factor }
    }
}
