// Copyright 2025 the Zoompan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Insets, Point, Rect, Size, Vec2};

/// Tolerance used when comparing content edges against container edges.
pub(crate) const EDGE_EPSILON: f64 = 1e-6;

/// Geometry of one piece of content hosted inside a container.
///
/// The content is described by its unscaled layout size and the position of
/// its unscaled top-left corner in container coordinates. Scaling pivots
/// around the center of that layout box, so changing the scale never moves
/// the center of the content.
///
/// Only the right and bottom paddings of the container are consulted: the
/// usable region of the container is `[0, width - right] × [0, height - bottom]`.
///
/// The scale is only changed through [`BoundedZoomPan`](crate::BoundedZoomPan),
/// which keeps it inside the configured zoom range.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewportState {
    container: Size,
    padding: Insets,
    content: Size,
    position: Point,
    scale: f64,
}

impl ViewportState {
    /// Creates a state for content laid out at `content_layout` inside a
    /// container of size `container`.
    ///
    /// The initial scale is `1.0`.
    #[must_use]
    pub fn new(container: Size, padding: Insets, content_layout: Rect) -> Self {
        Self {
            container,
            padding,
            content: content_layout.size(),
            position: content_layout.origin(),
            scale: 1.0,
        }
    }

    /// Returns the container size.
    #[must_use]
    pub fn container(&self) -> Size {
        self.container
    }

    /// Returns the container padding.
    #[must_use]
    pub fn padding(&self) -> Insets {
        self.padding
    }

    /// Updates the container geometry after a relayout.
    ///
    /// Scale and position are kept.
    pub fn set_container(&mut self, container: Size, padding: Insets) {
        self.container = container;
        self.padding = padding;
    }

    /// Returns the unscaled content size.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.content
    }

    /// Updates the unscaled content size.
    pub fn set_content_size(&mut self, size: Size) {
        self.content = size;
    }

    /// Returns the position of the unscaled content's top-left corner.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Moves the content so its unscaled top-left corner sits at `position`.
    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    /// Returns the current scale factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub(crate) fn set_scale_unchecked(&mut self, scale: f64) {
        self.scale = scale;
    }

    /// Width of the container minus its right padding.
    #[must_use]
    pub fn usable_width(&self) -> f64 {
        self.container.width - self.padding.x1
    }

    /// Height of the container minus its bottom padding.
    #[must_use]
    pub fn usable_height(&self) -> f64 {
        self.container.height - self.padding.y1
    }

    /// Returns the scaled content bounds in container coordinates.
    #[must_use]
    pub fn scaled_bounds(&self) -> Rect {
        let half = Vec2::new(self.content.width, self.content.height) * 0.5;
        let center = self.position + half;
        let scaled_half = half * self.scale;
        Rect::from_points(center - scaled_half, center + scaled_half)
    }

    /// Returns the part of the content that is currently visible.
    #[must_use]
    pub fn visible_frame(&self) -> VisibleFrame {
        let bounds = self.scaled_bounds();
        let usable = Rect::new(0.0, 0.0, self.usable_width(), self.usable_height());
        let visible = bounds.intersect(usable);
        let origin = bounds.origin().to_vec2();
        VisibleFrame {
            rect: Rect::from_points(
                visible.origin() - origin,
                Point::new(visible.x1, visible.y1) - origin,
            ),
            flush_left: bounds.x0 >= usable.x0 - EDGE_EPSILON,
            flush_top: bounds.y0 >= usable.y0 - EDGE_EPSILON,
        }
    }
}

/// Visible part of the scaled content.
///
/// `rect` is expressed relative to the scaled content's top-left corner, so
/// `rect.x0 > 0` means that much content is clipped off the left edge of the
/// container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibleFrame {
    /// Visible region, relative to the scaled content's top-left corner.
    pub rect: Rect,
    /// No content is clipped on the left: the content's left edge sits on or
    /// inside the container's left edge.
    pub flush_left: bool,
    /// No content is clipped on the top: the content's top edge sits on or
    /// inside the container's top edge.
    pub flush_top: bool,
}

impl VisibleFrame {
    /// Width of the visible region.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.rect.width()
    }

    /// Height of the visible region.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.rect.height()
    }
}
