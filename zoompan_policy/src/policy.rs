// Copyright 2025 the Zoompan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

use crate::bounds::{ZoomBounds, ZoomBoundsError};
use crate::intent::{DragIntent, ZoomIntent};
use crate::viewport::{EDGE_EPSILON, ViewportState, VisibleFrame};

/// Zoom and pan policy for content hosted in a container.
///
/// `BoundedZoomPan` owns the zoom range and the "pinch in progress" flag.
/// Everything else it needs is read from a [`ViewportState`] passed in by
/// the caller. It never renders anything: it returns scales and positions
/// that the caller applies (and, if it wants, animates).
///
/// Dragging along an axis needs two things:
/// - the scaled content must overflow the container on that axis, and no
///   pinch may be in progress ([`BoundedZoomPan::can_drag_horizontally`]);
/// - the motion must not pull the content further away from a container edge
///   it has already come loose from ([`BoundedZoomPan::should_allow_horizontal_drag`]).
#[derive(Clone, Debug, Default)]
pub struct BoundedZoomPan {
    bounds: ZoomBounds,
    is_scaling: bool,
}

impl BoundedZoomPan {
    /// Creates a policy with the default `[0.5, 4.0]` zoom range.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a policy that uses an already validated zoom range.
    #[must_use]
    pub fn with_zoom_bounds(bounds: ZoomBounds) -> Self {
        Self {
            bounds,
            is_scaling: false,
        }
    }

    /// Returns the current zoom range.
    #[must_use]
    pub fn zoom_bounds(&self) -> ZoomBounds {
        self.bounds
    }

    /// Sets the zoom range, keeping the current one if the pair is invalid.
    ///
    /// A pair is valid when `0.5 < min < max`.
    pub fn set_zoom_bounds(&mut self, min: f64, max: f64) {
        self.bounds.set(min, max);
    }

    /// Sets the zoom range, or reports why the pair was refused.
    pub fn try_set_zoom_bounds(&mut self, min: f64, max: f64) -> Result<(), ZoomBoundsError> {
        self.bounds.try_set(min, max)
    }

    /// Sets the lower zoom limit, keeping the current one if it is invalid.
    pub fn set_min_zoom(&mut self, min: f64) {
        self.bounds.set_min(min);
    }

    /// Sets the upper zoom limit, keeping the current one if it is invalid.
    pub fn set_max_zoom(&mut self, max: f64) {
        self.bounds.set_max(max);
    }

    /// Returns `current * multiplier`, clamped into the zoom range.
    ///
    /// A non-finite or non-positive multiplier is ignored.
    #[must_use]
    pub fn apply_zoom(&self, current: f64, multiplier: f64) -> f64 {
        if !multiplier.is_finite() || multiplier <= 0.0 {
            return self.bounds.clamp(current);
        }
        self.bounds.clamp(current * multiplier)
    }

    /// Applies a pinch update to `state` and returns the new scale.
    pub fn zoom_by(&self, state: &mut ViewportState, intent: ZoomIntent) -> f64 {
        let scale = self.apply_zoom(state.scale(), intent.factor);
        state.set_scale_unchecked(scale);
        scale
    }

    /// Sets the scale of `state`, clamped into the zoom range, and returns it.
    pub fn set_scale(&self, state: &mut ViewportState, scale: f64) -> f64 {
        let scale = self.bounds.clamp(scale);
        state.set_scale_unchecked(scale);
        scale
    }

    /// Marks the start of a pinch gesture.
    pub fn begin_pinch(&mut self) {
        self.is_scaling = true;
    }

    /// Marks the end of a pinch gesture.
    pub fn end_pinch(&mut self) {
        self.is_scaling = false;
    }

    /// Returns `true` while a pinch gesture is in progress.
    #[must_use]
    pub fn is_scaling(&self) -> bool {
        self.is_scaling
    }

    /// Returns `true` if the scaled content is wider than the container and
    /// no pinch is in progress.
    #[must_use]
    pub fn can_drag_horizontally(&self, scale: f64, content_width: f64, container_width: f64) -> bool {
        scale * content_width > container_width && !self.is_scaling
    }

    /// Returns `true` if the scaled content is taller than the container and
    /// no pinch is in progress.
    #[must_use]
    pub fn can_drag_vertically(&self, scale: f64, content_height: f64, container_height: f64) -> bool {
        scale * content_height > container_height && !self.is_scaling
    }

    /// Decides whether a horizontal move keeps the content attached to the
    /// container edges.
    ///
    /// Allowed when the visible part spans the whole usable width, when the
    /// content is flush left and moving left (closing a gap on the left), or
    /// when content is clipped on the left and moving right (closing a gap on
    /// the right).
    #[must_use]
    pub fn should_allow_horizontal_drag(
        &self,
        frame: &VisibleFrame,
        container_width: f64,
        padding_right: f64,
        moving_left: bool,
    ) -> bool {
        spans(frame.width(), container_width - padding_right)
            || (frame.flush_left && moving_left)
            || (!frame.flush_left && frame.rect.x0 > 0.0 && !moving_left)
    }

    /// Vertical counterpart of [`BoundedZoomPan::should_allow_horizontal_drag`].
    #[must_use]
    pub fn should_allow_vertical_drag(
        &self,
        frame: &VisibleFrame,
        container_height: f64,
        padding_bottom: f64,
        moving_up: bool,
    ) -> bool {
        spans(frame.height(), container_height - padding_bottom)
            || (frame.flush_top && moving_up)
            || (!frame.flush_top && frame.rect.y0 > 0.0 && !moving_up)
    }

    /// Returns `proposed_left` if dragging horizontally is permitted in the
    /// current state, otherwise `current_left`.
    #[must_use]
    pub fn clamp_horizontal_position(
        &self,
        proposed_left: f64,
        current_left: f64,
        state: &ViewportState,
        moving_left: bool,
    ) -> f64 {
        let allowed = self.horizontal_drag_enabled(state)
            && self.should_allow_horizontal_drag(
                &state.visible_frame(),
                state.container().width,
                state.padding().x1,
                moving_left,
            );
        log::trace!("horizontal drag to {proposed_left} allowed: {allowed}");
        if allowed { proposed_left } else { current_left }
    }

    /// Returns `proposed_top` if dragging vertically is permitted in the
    /// current state, otherwise `current_top`.
    #[must_use]
    pub fn clamp_vertical_position(
        &self,
        proposed_top: f64,
        current_top: f64,
        state: &ViewportState,
        moving_up: bool,
    ) -> f64 {
        let allowed = self.vertical_drag_enabled(state)
            && self.should_allow_vertical_drag(
                &state.visible_frame(),
                state.container().height,
                state.padding().y1,
                moving_up,
            );
        log::trace!("vertical drag to {proposed_top} allowed: {allowed}");
        if allowed { proposed_top } else { current_top }
    }

    /// Clamps a drag on both axes and returns the resulting content position.
    ///
    /// Each axis is decided independently against the same state, so a drag
    /// may move along one axis and be refused along the other.
    #[must_use]
    pub fn clamp_drag(&self, state: &ViewportState, intent: DragIntent) -> Point {
        let current = state.position();
        let proposed = current + intent.delta;
        Point::new(
            self.clamp_horizontal_position(proposed.x, current.x, state, intent.moving_left()),
            self.clamp_vertical_position(proposed.y, current.y, state, intent.moving_up()),
        )
    }

    /// Computes where the content should come to rest after a drag ends.
    ///
    /// On each draggable axis the content is pulled back so that the edge that
    /// came loose is flush with the container again. Content that is flush on
    /// the leading edge moves toward negative coordinates by the gap it shows;
    /// otherwise it moves toward positive coordinates by the gap left on the
    /// trailing edge. Axes that cannot be dragged keep their position.
    #[must_use]
    pub fn settle_target(&self, state: &ViewportState) -> Point {
        let frame = state.visible_frame();
        let current = state.position();

        let x = if self.horizontal_drag_enabled(state) {
            let usable = state.usable_width();
            if frame.flush_left {
                current.x - (usable - frame.rect.x1)
            } else {
                current.x + (usable - frame.width())
            }
        } else {
            current.x
        };

        let y = if self.vertical_drag_enabled(state) {
            let usable = state.usable_height();
            if frame.flush_top {
                current.y - (usable - frame.rect.y1)
            } else {
                current.y + (usable - frame.height())
            }
        } else {
            current.y
        };

        Point::new(x, y)
    }

    /// Moves the content back to its natural layout position.
    pub fn center_content(&self, state: &mut ViewportState, natural: Point) {
        state.set_position(natural);
    }

    fn horizontal_drag_enabled(&self, state: &ViewportState) -> bool {
        self.can_drag_horizontally(
            state.scale(),
            state.content_size().width,
            state.container().width,
        )
    }

    fn vertical_drag_enabled(&self, state: &ViewportState) -> bool {
        self.can_drag_vertically(
            state.scale(),
            state.content_size().height,
            state.container().height,
        )
    }
}

fn spans(visible: f64, usable: f64) -> bool {
    (visible - usable).abs() <= EDGE_EPSILON
}

#[cfg(test)]
mod tests {
    use kurbo::{Insets, Point, Rect, Size, Vec2};

    use super::BoundedZoomPan;
    use crate::{DragIntent, ViewportState, VisibleFrame, ZoomIntent};

    fn square_state(policy: &BoundedZoomPan, scale: f64) -> ViewportState {
        let mut state = ViewportState::new(
            Size::new(1000.0, 1000.0),
            Insets::ZERO,
            Rect::new(0.0, 0.0, 1000.0, 1000.0),
        );
        policy.set_scale(&mut state, scale);
        state
    }

    fn frame(rect: Rect, flush_left: bool, flush_top: bool) -> VisibleFrame {
        VisibleFrame {
            rect,
            flush_left,
            flush_top,
        }
    }

    #[test]
    fn zoom_is_clamped_to_defaults() {
        let policy = BoundedZoomPan::new();
        assert_eq!(policy.apply_zoom(1.0, 10.0), 4.0);
        assert_eq!(policy.apply_zoom(1.0, 0.1), 0.5);
        assert_eq!(policy.apply_zoom(1.0, 1.5), 1.5);
    }

    #[test]
    fn degenerate_multipliers_leave_scale_alone() {
        let policy = BoundedZoomPan::new();
        assert_eq!(policy.apply_zoom(2.0, 0.0), 2.0);
        assert_eq!(policy.apply_zoom(2.0, -3.0), 2.0);
        assert_eq!(policy.apply_zoom(2.0, f64::NAN), 2.0);
        assert_eq!(policy.apply_zoom(2.0, f64::INFINITY), 2.0);
    }

    #[test]
    fn zoom_by_updates_the_state() {
        let policy = BoundedZoomPan::new();
        let mut state = square_state(&policy, 1.0);
        assert_eq!(policy.zoom_by(&mut state, ZoomIntent::new(3.0)), 3.0);
        assert_eq!(policy.zoom_by(&mut state, ZoomIntent::new(3.0)), 4.0);
        assert_eq!(state.scale(), 4.0);
    }

    #[test]
    fn overflowing_content_can_drag_both_axes() {
        let policy = BoundedZoomPan::new();
        assert!(policy.can_drag_horizontally(2.0, 1000.0, 1000.0));
        assert!(policy.can_drag_vertically(2.0, 1000.0, 1000.0));
        assert!(!policy.can_drag_horizontally(1.0, 1000.0, 1000.0));
    }

    #[test]
    fn pinching_blocks_dragging() {
        let mut policy = BoundedZoomPan::new();
        policy.begin_pinch();
        assert!(policy.is_scaling());
        assert!(!policy.can_drag_horizontally(4.0, 1000.0, 10.0));
        assert!(!policy.can_drag_vertically(4.0, 1000.0, 10.0));

        policy.end_pinch();
        assert!(policy.can_drag_horizontally(4.0, 1000.0, 10.0));
    }

    #[test]
    fn flush_left_only_permits_moving_left() {
        let policy = BoundedZoomPan::new();
        let gap = frame(Rect::new(0.0, 0.0, 800.0, 1000.0), true, true);
        assert!(policy.should_allow_horizontal_drag(&gap, 1000.0, 0.0, true));
        assert!(!policy.should_allow_horizontal_drag(&gap, 1000.0, 0.0, false));
    }

    #[test]
    fn clipped_left_only_permits_moving_right() {
        let policy = BoundedZoomPan::new();
        let gap = frame(Rect::new(300.0, 0.0, 1000.0, 1000.0), false, true);
        assert!(policy.should_allow_horizontal_drag(&gap, 1000.0, 0.0, false));
        assert!(!policy.should_allow_horizontal_drag(&gap, 1000.0, 0.0, true));
    }

    #[test]
    fn flush_top_only_permits_moving_up() {
        let policy = BoundedZoomPan::new();
        let gap = frame(Rect::new(0.0, 0.0, 1000.0, 800.0), true, true);
        assert!(policy.should_allow_vertical_drag(&gap, 1000.0, 0.0, true));
        assert!(!policy.should_allow_vertical_drag(&gap, 1000.0, 0.0, false));
    }

    #[test]
    fn clipped_top_only_permits_moving_down() {
        let policy = BoundedZoomPan::new();
        let gap = frame(Rect::new(0.0, 300.0, 1000.0, 1000.0), true, false);
        assert!(policy.should_allow_vertical_drag(&gap, 1000.0, 0.0, false));
        assert!(!policy.should_allow_vertical_drag(&gap, 1000.0, 0.0, true));
    }

    #[test]
    fn spanning_frame_permits_both_directions() {
        let policy = BoundedZoomPan::new();
        let spanning = frame(Rect::new(250.0, 250.0, 1150.0, 1150.0), false, false);
        assert!(policy.should_allow_horizontal_drag(&spanning, 1000.0, 100.0, true));
        assert!(policy.should_allow_horizontal_drag(&spanning, 1000.0, 100.0, false));
        assert!(policy.should_allow_vertical_drag(&spanning, 1000.0, 100.0, true));
        assert!(policy.should_allow_vertical_drag(&spanning, 1000.0, 100.0, false));
    }

    #[test]
    fn clamp_returns_proposed_or_current() {
        let policy = BoundedZoomPan::new();
        let mut state = square_state(&policy, 2.0);
        state.set_position(Point::new(10.0, 0.0));
        assert_eq!(policy.clamp_horizontal_position(50.0, 10.0, &state, false), 50.0);

        let unzoomed = square_state(&policy, 1.0);
        assert_eq!(policy.clamp_horizontal_position(50.0, 10.0, &unzoomed, false), 10.0);
    }

    #[test]
    fn clamp_drag_refuses_axes_independently() {
        let policy = BoundedZoomPan::new();
        let mut state = ViewportState::new(
            Size::new(1000.0, 1000.0),
            Insets::ZERO,
            Rect::new(0.0, 250.0, 1000.0, 750.0),
        );
        policy.set_scale(&mut state, 1.5);

        // 1500 wide overflows, 750 tall does not.
        let moved = policy.clamp_drag(&state, DragIntent::new(Vec2::new(-20.0, 30.0)));
        assert_eq!(moved, Point::new(-20.0, 250.0));
    }

    #[test]
    fn settle_closes_a_left_gap() {
        let policy = BoundedZoomPan::new();
        let mut state = square_state(&policy, 2.0);
        // Scaled bounds span 100..2100, leaving a 100px gap on the left.
        state.set_position(Point::new(600.0, 500.0));

        let target = policy.settle_target(&state);
        assert_eq!(target.x, 500.0);
    }

    #[test]
    fn settle_closes_a_right_gap() {
        let policy = BoundedZoomPan::new();
        let mut state = square_state(&policy, 2.0);
        // Scaled bounds span -1200..800, leaving a 200px gap on the right.
        state.set_position(Point::new(-700.0, 0.0));

        let target = policy.settle_target(&state);
        assert_eq!(target.x, -500.0);
    }

    #[test]
    fn settle_keeps_position_on_locked_axes() {
        let policy = BoundedZoomPan::new();
        let mut state = square_state(&policy, 1.0);
        state.set_position(Point::new(40.0, -30.0));
        assert_eq!(policy.settle_target(&state), Point::new(40.0, -30.0));
    }

    #[test]
    fn center_content_restores_natural_position() {
        let policy = BoundedZoomPan::new();
        let mut state = square_state(&policy, 2.0);
        state.set_position(Point::new(-300.0, 120.0));
        policy.center_content(&mut state, Point::ORIGIN);
        assert_eq!(state.position(), Point::ORIGIN);
    }
}
