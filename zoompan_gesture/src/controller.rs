// Copyright 2025 the Zoompan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use kurbo::{Insets, Point, Rect, Size, Vec2};
use zoompan_policy::{BoundedZoomPan, DragIntent, ViewportState, ZoomIntent};

use crate::config::GestureConfig;
use crate::drag::{DragTracker, PointerId};
use crate::event::{EventResponse, InputEvent};
use crate::settle::SettleAnimation;

/// What the controller is currently doing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    /// Waiting for input.
    Idle,
    /// A pinch gesture is in progress.
    Scaling,
    /// A pointer has captured the content and is moving it.
    Dragging,
    /// Released content is gliding to its resting position.
    Settling,
}

/// Scale and position to apply to the rendered content.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContentTransform {
    /// Uniform scale, pivoting around the center of the content's layout box.
    pub scale: f64,
    /// Position of the content's unscaled top-left corner in container
    /// coordinates.
    pub position: Point,
}

/// Drives a [`BoundedZoomPan`] policy from host input.
///
/// The host forwards layout notifications through
/// [`ZoomPanController::on_layout`], input through
/// [`ZoomPanController::handle`], and frame ticks through
/// [`ZoomPanController::tick`]; after each call it reads
/// [`ZoomPanController::transform`] and applies it to the content.
///
/// Input is ignored until the first layout has been seen.
#[derive(Clone, Debug)]
pub struct ZoomPanController {
    config: GestureConfig,
    policy: BoundedZoomPan,
    state: Option<ViewportState>,
    natural: Point,
    drag: DragTracker,
    settle: Option<SettleAnimation>,
}

impl ZoomPanController {
    /// Creates a controller using `config`.
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            policy: BoundedZoomPan::with_zoom_bounds(config.zoom_bounds()),
            config,
            state: None,
            natural: Point::ORIGIN,
            drag: DragTracker::default(),
            settle: None,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Returns the zoom/pan policy.
    #[must_use]
    pub fn policy(&self) -> &BoundedZoomPan {
        &self.policy
    }

    /// Returns the viewport state, once the first layout has been seen.
    #[must_use]
    pub fn state(&self) -> Option<&ViewportState> {
        self.state.as_ref()
    }

    /// Returns the position recorded at the first layout.
    #[must_use]
    pub fn natural_position(&self) -> Point {
        self.natural
    }

    /// Changes the zoom range and pulls the current scale into it.
    ///
    /// Invalid ranges are ignored.
    pub fn set_zoom_bounds(&mut self, min: f64, max: f64) {
        self.policy.set_zoom_bounds(min, max);
        if let Some(state) = self.state.as_mut() {
            let scale = state.scale();
            self.policy.set_scale(state, scale);
        }
    }

    /// Records the container and content geometry.
    ///
    /// The first call also records the content's natural position, which
    /// pinches recenter to. Later calls keep the current scale and position.
    pub fn on_layout(&mut self, container: Size, padding: Insets, content_layout: Rect) {
        match self.state.as_mut() {
            Some(state) => {
                state.set_container(container, padding);
                state.set_content_size(content_layout.size());
            }
            None => {
                let mut state = ViewportState::new(container, padding, content_layout);
                self.policy.set_scale(&mut state, 1.0);
                self.natural = content_layout.origin();
                log::debug!("attached at {:?} in {:?}", self.natural, container);
                self.state = Some(state);
            }
        }
    }

    /// Processes one input event.
    pub fn handle(&mut self, event: InputEvent) -> EventResponse {
        if self.state.is_some() {
            match event {
                InputEvent::PointerDown { id, position } => self.pointer_down(id, position),
                InputEvent::PointerMove { id, position } => self.pointer_move(id, position),
                InputEvent::PointerUp { id, velocity } => {
                    if self.drag.tracks(id) {
                        self.release(velocity);
                    }
                }
                InputEvent::PointerCancel => self.release(Vec2::ZERO),
                InputEvent::PinchBegin => self.pinch_begin(),
                InputEvent::PinchUpdate { factor } => self.pinch_update(factor),
                InputEvent::PinchEnd => self.pinch_end(),
            }
        }
        EventResponse {
            intercept: self.is_intercepting(),
        }
    }

    /// Advances a settle in progress by `elapsed`.
    ///
    /// Returns `true` while more frames are needed.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        let (Some(anim), Some(state)) = (self.settle.as_mut(), self.state.as_mut()) else {
            return false;
        };
        state.set_position(anim.advance(elapsed));
        if anim.is_finished() {
            log::debug!("settled at {:?}", state.position());
            self.settle = None;
            return false;
        }
        true
    }

    /// Returns the transform to apply to the content, once laid out.
    #[must_use]
    pub fn transform(&self) -> Option<ContentTransform> {
        self.state.as_ref().map(|state| ContentTransform {
            scale: state.scale(),
            position: state.position(),
        })
    }

    /// Returns what the controller is currently doing.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        if self.policy.is_scaling() {
            GesturePhase::Scaling
        } else if self.drag.is_captured() {
            GesturePhase::Dragging
        } else if self.settle.is_some() {
            GesturePhase::Settling
        } else {
            GesturePhase::Idle
        }
    }

    /// Returns `true` while the controller owns the pointer stream.
    #[must_use]
    pub fn is_intercepting(&self) -> bool {
        self.drag.is_captured() || self.policy.is_scaling()
    }

    fn hits_content(&self, position: Point) -> bool {
        self.state
            .as_ref()
            .is_some_and(|state| state.scaled_bounds().contains(position))
    }

    fn pointer_down(&mut self, id: PointerId, position: Point) {
        if self.drag.is_dragging() {
            return;
        }
        self.drag.start(id, position);
        // A press on content that is still settling catches it in place.
        if self.settle.is_some() && self.hits_content(position) {
            self.capture(position);
        }
    }

    /// Hands the content to the tracked pointer, ending any settle.
    fn capture(&mut self, position: Point) {
        self.drag.capture(position);
        if self.settle.take().is_some() {
            log::debug!("caught settling content at {position:?}");
        } else {
            log::debug!("captured content at {position:?}");
        }
    }

    fn pointer_move(&mut self, id: PointerId, position: Point) {
        if !self.drag.tracks(id) {
            return;
        }
        if !self.drag.is_captured() {
            let start = self.drag.start_pos.unwrap_or(position);
            if self.config.drag_range_px() > 0.0
                && self.drag.exceeds_slop(position, self.config.touch_slop_px())
                && self.hits_content(start)
            {
                self.capture(position);
            }
            return;
        }
        let Some(delta) = self.drag.update(position) else {
            return;
        };
        let Some(state) = self.state.as_mut() else {
            return;
        };
        let clamped = self.policy.clamp_drag(state, DragIntent::new(delta));
        state.set_position(clamped);
    }

    fn release(&mut self, velocity: Vec2) {
        let captured = self.drag.is_captured();
        self.drag.end();
        if !captured {
            return;
        }
        let Some(state) = self.state.as_mut() else {
            return;
        };
        let target = self.policy.settle_target(state);
        let anim = SettleAnimation::new(
            state.position(),
            target,
            velocity,
            state.container(),
            self.config.drag_range_px(),
        );
        log::debug!(
            "released at {:?}, settling to {target:?} over {:?}",
            state.position(),
            anim.duration()
        );
        if anim.is_finished() {
            state.set_position(target);
        } else {
            self.settle = Some(anim);
        }
    }

    fn pinch_begin(&mut self) {
        self.policy.begin_pinch();
        self.settle = None;
        if let Some(state) = self.state.as_mut() {
            self.policy.center_content(state, self.natural);
        }
        log::debug!("pinch began");
    }

    fn pinch_update(&mut self, factor: f64) {
        if !self.policy.is_scaling() {
            return;
        }
        if let Some(state) = self.state.as_mut() {
            self.policy.zoom_by(state, ZoomIntent::new(factor));
        }
    }

    fn pinch_end(&mut self) {
        if !self.policy.is_scaling() {
            return;
        }
        self.policy.end_pinch();
        if let Some(state) = self.state.as_mut() {
            let scale = state.scale();
            let scale = self.policy.set_scale(state, scale);
            log::debug!("pinch ended at scale {scale}");
        }
    }
}

impl Default for ZoomPanController {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}
