// Copyright 2025 the Zoompan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Post-release settle motion.
//!
//! When a drag ends, the content glides from where it was released to the
//! settle target computed by the policy. The duration depends on the
//! distance, the release velocity, and the configured drag range; frames are
//! eased with a quintic ease-out.

use core::f64::consts::PI;
use core::time::Duration;

use kurbo::{Point, Size, Vec2};

const BASE_SETTLE_DURATION_MS: f64 = 256.0;
const MAX_SETTLE_DURATION_MS: f64 = 600.0;

/// An eased motion from a release position to a settle target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SettleAnimation {
    from: Point,
    to: Point,
    duration: Duration,
    elapsed: Duration,
}

impl SettleAnimation {
    /// Plans a settle from `from` to `to`.
    ///
    /// `velocity` is the release velocity in pixels per second, `container`
    /// the size of the hosting container, and `drag_range` the configured
    /// drag range in pixels.
    #[must_use]
    pub fn new(from: Point, to: Point, velocity: Vec2, container: Size, drag_range: f64) -> Self {
        Self {
            from,
            to,
            duration: settle_duration(to - from, velocity, container, drag_range),
            elapsed: Duration::ZERO,
        }
    }

    /// Where the motion ends.
    #[must_use]
    pub fn target(&self) -> Point {
        self.to
    }

    /// Total length of the motion.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Returns `true` once the motion has reached its target.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Current position along the motion.
    #[must_use]
    pub fn position(&self) -> Point {
        if self.is_finished() {
            return self.to;
        }
        let t = self.elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.from.lerp(self.to, ease_out_quint(t))
    }

    /// Advances the motion by `dt` and returns the new position.
    pub fn advance(&mut self, dt: Duration) -> Point {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
        self.position()
    }
}

fn ease_out_quint(t: f64) -> f64 {
    let t = t - 1.0;
    t * t * t * t * t + 1.0
}

/// Blends per-axis durations. An axis released with velocity is weighted by
/// its share of the release speed; an axis without velocity by its share of
/// the distance.
fn settle_duration(delta: Vec2, velocity: Vec2, container: Size, drag_range: f64) -> Duration {
    let distance = delta.x.abs() + delta.y.abs();
    if distance == 0.0 {
        return Duration::ZERO;
    }
    let speed = velocity.x.abs() + velocity.y.abs();
    let weight = |axis_delta: f64, axis_velocity: f64| {
        if axis_velocity == 0.0 {
            axis_delta.abs() / distance
        } else {
            axis_velocity.abs() / speed
        }
    };
    let x_weight = weight(delta.x, velocity.x);
    let y_weight = weight(delta.y, velocity.y);

    let x_ms = axis_duration_ms(delta.x, velocity.x, container.width, drag_range);
    let y_ms = axis_duration_ms(delta.y, velocity.y, container.height, drag_range);
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "durations are non-negative and capped at a few hundred milliseconds"
    )]
    let millis = (x_ms * x_weight + y_ms * y_weight) as u64;
    Duration::from_millis(millis)
}

fn axis_duration_ms(delta: f64, velocity: f64, extent: f64, drag_range: f64) -> f64 {
    if delta == 0.0 {
        return 0.0;
    }
    let velocity = velocity.abs();
    let duration = if velocity > 0.0 {
        let half = extent.max(0.0) / 2.0;
        let ratio = if extent > 0.0 {
            (delta.abs() / extent).min(1.0)
        } else {
            1.0
        };
        let distance = half + half * distance_influence(ratio);
        4.0 * (1000.0 * (distance / velocity).abs()).round()
    } else if drag_range > 0.0 {
        (delta.abs() / drag_range + 1.0) * BASE_SETTLE_DURATION_MS
    } else {
        MAX_SETTLE_DURATION_MS
    };
    duration.min(MAX_SETTLE_DURATION_MS)
}

/// Shrinks the effect of short distances on the settle time.
fn distance_influence(ratio: f64) -> f64 {
    ((ratio - 0.5) * 0.3 * PI / 2.0).sin()
}
