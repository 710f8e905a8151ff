// Copyright 2025 the Zoompan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use zoompan_policy::{DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM, ZoomBounds};

/// Tuning knobs for a [`ZoomPanController`](crate::ZoomPanController).
///
/// Distances are given in density-independent units and converted to pixels
/// with [`GestureConfig::density`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    /// Requested lower zoom limit.
    pub min_zoom: f64,
    /// Requested upper zoom limit.
    pub max_zoom: f64,
    /// Drag range used to time settle animations. Zero disables capture.
    pub drag_range_dp: f64,
    /// Distance a pointer must travel before it captures the content.
    pub touch_slop_dp: f64,
    /// Pixels per density-independent unit.
    pub density: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            drag_range_dp: 100.0,
            touch_slop_dp: 8.0,
            density: 1.0,
        }
    }
}

impl GestureConfig {
    /// Sets the requested zoom range.
    #[must_use]
    pub fn with_zoom_range(mut self, min_zoom: f64, max_zoom: f64) -> Self {
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self
    }

    /// Sets the drag range.
    #[must_use]
    pub fn with_drag_range_dp(mut self, drag_range_dp: f64) -> Self {
        self.drag_range_dp = drag_range_dp;
        self
    }

    /// Sets the touch slop.
    #[must_use]
    pub fn with_touch_slop_dp(mut self, touch_slop_dp: f64) -> Self {
        self.touch_slop_dp = touch_slop_dp;
        self
    }

    /// Sets the display density.
    #[must_use]
    pub fn with_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    /// Drag range in pixels.
    #[must_use]
    pub fn drag_range_px(&self) -> f64 {
        self.drag_range_dp.max(0.0) * self.effective_density()
    }

    /// Touch slop in pixels.
    #[must_use]
    pub fn touch_slop_px(&self) -> f64 {
        self.touch_slop_dp.max(0.0) * self.effective_density()
    }

    /// Resolves the requested zoom range.
    ///
    /// The upper limit is applied first so that a raised minimum can be
    /// validated against it. Limits that fail validation fall back to the
    /// defaults.
    #[must_use]
    pub fn zoom_bounds(&self) -> ZoomBounds {
        let mut bounds = ZoomBounds::default();
        if self.max_zoom != DEFAULT_MAX_ZOOM {
            bounds.set_max(self.max_zoom);
        }
        if self.min_zoom != DEFAULT_MIN_ZOOM {
            bounds.set_min(self.min_zoom);
        }
        bounds
    }

    fn effective_density(&self) -> f64 {
        if self.density.is_finite() && self.density > 0.0 {
            self.density
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GestureConfig;

    #[test]
    fn distances_scale_with_density() {
        let config = GestureConfig::default().with_density(2.5);
        assert_eq!(config.drag_range_px(), 250.0);
        assert_eq!(config.touch_slop_px(), 20.0);
    }

    #[test]
    fn bad_density_falls_back_to_one() {
        for density in [0.0, -2.0, f64::NAN, f64::INFINITY] {
            let config = GestureConfig::default().with_density(density);
            assert_eq!(config.drag_range_px(), 100.0, "density {density}");
        }
    }

    #[test]
    fn zoom_range_resolves_through_validation() {
        let bounds = GestureConfig::default().zoom_bounds();
        assert_eq!((bounds.min(), bounds.max()), (0.5, 4.0));

        let bounds = GestureConfig::default().with_zoom_range(0.5, 8.0).zoom_bounds();
        assert_eq!((bounds.min(), bounds.max()), (0.5, 8.0));

        let bounds = GestureConfig::default().with_zoom_range(5.0, 10.0).zoom_bounds();
        assert_eq!((bounds.min(), bounds.max()), (5.0, 10.0));

        // A minimum at or below 0.5 is refused; the maximum still applies.
        let bounds = GestureConfig::default().with_zoom_range(0.25, 3.0).zoom_bounds();
        assert_eq!((bounds.min(), bounds.max()), (0.5, 3.0));
    }
}
