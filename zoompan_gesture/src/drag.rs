// Copyright 2025 the Zoompan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag tracking: follow one pointer, report movement deltas, and decide when
//! it has moved far enough to capture the content.
//!
//! ## Usage
//!
//! 1) Call [`DragTracker::start`] when a pointer goes down.
//! 2) On each move, check [`DragTracker::exceeds_slop`] until the pointer has
//!    travelled past the touch slop, then [`DragTracker::capture`] at that
//!    position.
//! 3) Once captured, [`DragTracker::update`] returns the movement since the
//!    previous update. Motion inside the slop is never reported.
//! 4) Call [`DragTracker::end`] when the pointer goes up or is cancelled.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use zoompan_gesture::{DragTracker, PointerId};
//!
//! let mut drag = DragTracker::default();
//! drag.start(PointerId(1), Point::new(10.0, 20.0));
//!
//! // Still inside an 8px slop: nothing to capture yet.
//! assert!(!drag.exceeds_slop(Point::new(13.0, 24.0), 8.0));
//!
//! assert!(drag.exceeds_slop(Point::new(22.0, 20.0), 8.0));
//! drag.capture(Point::new(22.0, 20.0));
//! let delta = drag.update(Point::new(30.0, 20.0)).unwrap();
//! assert_eq!(delta.x, 8.0);
//! ```

use kurbo::{Point, Vec2};

/// Identifier the host assigns to a pointer for the duration of a press.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointerId(pub u64);

/// Tracks the pointer that may drag the content.
#[derive(Debug, Clone, Default, Copy)]
pub struct DragTracker {
    /// Pointer being followed.
    pub pointer: Option<PointerId>,
    /// Position where the pointer went down.
    pub start_pos: Option<Point>,
    /// Position consumed by the last [`DragTracker::update`].
    pub last_pos: Option<Point>,
    /// Whether the pointer has captured the content.
    pub captured: bool,
}

impl DragTracker {
    /// Start following `pointer` from `pos`. Any previous drag is dropped.
    pub fn start(&mut self, pointer: PointerId, pos: Point) {
        self.pointer = Some(pointer);
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
        self.captured = false;
    }

    /// Returns `true` if `pointer` is the one being followed.
    pub fn tracks(&self, pointer: PointerId) -> bool {
        self.pointer == Some(pointer)
    }

    /// Returns `true` if the pointer has moved more than `slop` from where it
    /// went down.
    pub fn exceeds_slop(&self, pos: Point, slop: f64) -> bool {
        self.total_offset(pos)
            .is_some_and(|offset| offset.hypot2() > slop * slop)
    }

    /// Marks the content as captured by the tracked pointer at `pos`.
    ///
    /// The next [`DragTracker::update`] reports movement from `pos`.
    pub fn capture(&mut self, pos: Point) {
        if self.pointer.is_some() {
            self.captured = true;
            self.last_pos = Some(pos);
        }
    }

    /// Returns `true` once the tracked pointer has captured the content.
    pub fn is_captured(&self) -> bool {
        self.captured
    }

    /// Records `pos` and returns the movement since the previous update.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        if self.start_pos.is_none() {
            return None;
        }
        let last = self.last_pos.replace(pos)?;
        Some(pos - last)
    }

    /// Get total offset from the position where the pointer went down.
    pub fn total_offset(&self, current_pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start_pos| current_pos - start_pos)
    }

    /// Stop following the pointer and reset state.
    pub fn end(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` while a pointer is being followed.
    pub fn is_dragging(&self) -> bool {
        self.pointer.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tracker_is_idle() {
        let drag = DragTracker::default();
        assert!(!drag.is_dragging());
        assert!(!drag.is_captured());
        assert!(drag.start_pos.is_none());
    }

    #[test]
    fn start_records_pointer_and_position() {
        let mut drag = DragTracker::default();
        let start = Point::new(10.0, 20.0);

        drag.start(PointerId(3), start);

        assert!(drag.tracks(PointerId(3)));
        assert!(!drag.tracks(PointerId(4)));
        assert_eq!(drag.start_pos, Some(start));
        assert_eq!(drag.start_pos, drag.last_pos);
    }

    #[test]
    fn update_returns_incremental_deltas() {
        let mut drag = DragTracker::default();
        drag.start(PointerId(0), Point::new(0.0, 0.0));

        assert_eq!(drag.update(Point::new(5.0, 3.0)), Some(Vec2::new(5.0, 3.0)));
        assert_eq!(drag.update(Point::new(8.0, 7.0)), Some(Vec2::new(3.0, 4.0)));
        assert_eq!(drag.update(Point::new(6.0, 7.0)), Some(Vec2::new(-2.0, 0.0)));
    }

    #[test]
    fn update_returns_none_when_idle() {
        let mut drag = DragTracker::default();
        assert_eq!(drag.update(Point::new(15.0, 25.0)), None);
        assert!(drag.last_pos.is_none());
    }

    #[test]
    fn slop_is_measured_from_the_start() {
        let mut drag = DragTracker::default();
        drag.start(PointerId(0), Point::new(100.0, 100.0));

        assert!(!drag.exceeds_slop(Point::new(106.0, 100.0), 8.0));
        // Exactly on the slop circle does not count.
        assert!(!drag.exceeds_slop(Point::new(100.0, 108.0), 8.0));
        assert!(drag.exceeds_slop(Point::new(106.0, 106.0), 8.0));
    }

    #[test]
    fn slop_never_triggers_when_idle() {
        let drag = DragTracker::default();
        assert!(!drag.exceeds_slop(Point::new(1000.0, 1000.0), 8.0));
    }

    #[test]
    fn capture_requires_a_tracked_pointer() {
        let mut drag = DragTracker::default();
        drag.capture(Point::ORIGIN);
        assert!(!drag.is_captured());
        assert!(drag.last_pos.is_none());

        drag.start(PointerId(1), Point::ORIGIN);
        drag.capture(Point::ORIGIN);
        assert!(drag.is_captured());
    }

    #[test]
    fn motion_inside_the_slop_is_not_reported() {
        let mut drag = DragTracker::default();
        drag.start(PointerId(1), Point::new(100.0, 100.0));

        drag.capture(Point::new(112.0, 100.0));
        assert_eq!(drag.update(Point::new(112.0, 100.0)), Some(Vec2::ZERO));
        assert_eq!(drag.update(Point::new(115.0, 96.0)), Some(Vec2::new(3.0, -4.0)));
        assert_eq!(drag.total_offset(Point::new(115.0, 96.0)), Some(Vec2::new(15.0, -4.0)));
    }

    #[test]
    fn end_resets_everything() {
        let mut drag = DragTracker::default();
        drag.start(PointerId(1), Point::new(10.0, 20.0));
        drag.capture(Point::new(10.0, 20.0));
        drag.update(Point::new(15.0, 25.0));

        drag.end();

        assert!(!drag.is_dragging());
        assert!(!drag.is_captured());
        assert!(drag.last_pos.is_none());
    }

    #[test]
    fn start_overwrites_previous_drag() {
        let mut drag = DragTracker::default();
        drag.start(PointerId(1), Point::new(0.0, 0.0));
        drag.capture(Point::new(0.0, 0.0));

        let new_start = Point::new(50.0, 60.0);
        drag.start(PointerId(2), new_start);

        assert!(!drag.is_captured());
        assert_eq!(drag.total_offset(Point::new(55.0, 65.0)), Some(Vec2::new(5.0, 5.0)));
    }
}
