// Copyright 2025 the Zoompan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=zoompan_policy --heading-base-level=0

//! Zoompan Policy: bounded pinch-zoom and drag-pan for hosted content.
//!
//! This crate is a small, headless model of content (typically an image)
//! that can be zoomed and dragged inside a container. It focuses on:
//! - Keeping the scale factor inside a validated zoom range.
//! - Deciding, per axis, whether a drag is allowed right now.
//! - Clamping proposed drag positions.
//! - Computing where released content should settle so it stays attached to
//!   the container edges.
//!
//! It does **not** receive input or render anything. Callers are expected to:
//! - Turn pointer and pinch input into [`DragIntent`] and [`ZoomIntent`]
//!   values (see the `zoompan_gesture` crate for a ready-made controller).
//! - Apply the returned scale and position to their rendered content, and
//!   animate toward them if they want.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Insets, Rect, Size, Vec2};
//! use zoompan_policy::{BoundedZoomPan, DragIntent, ViewportState, ZoomIntent};
//!
//! let policy = BoundedZoomPan::new();
//! let mut state = ViewportState::new(
//!     Size::new(1000.0, 1000.0),
//!     Insets::ZERO,
//!     Rect::new(0.0, 0.0, 1000.0, 1000.0),
//! );
//!
//! // Unzoomed content fits the container, so it cannot be dragged.
//! let moved = policy.clamp_drag(&state, DragIntent::new(Vec2::new(-40.0, 0.0)));
//! assert_eq!(moved, state.position());
//!
//! // After zooming in, it overflows and can be dragged.
//! policy.zoom_by(&mut state, ZoomIntent::new(2.0));
//! let moved = policy.clamp_drag(&state, DragIntent::new(Vec2::new(-40.0, 0.0)));
//! assert_eq!(moved.x, -40.0);
//! state.set_position(moved);
//!
//! // The settle target pulls loose edges back flush with the container.
//! let rest = policy.settle_target(&state);
//! state.set_position(rest);
//! assert_eq!(policy.settle_target(&state), rest);
//! ```
//!
//! ## Edge model
//!
//! The visible part of the content is reported as a [`VisibleFrame`],
//! relative to the scaled content's top-left corner, together with explicit
//! `flush_left` / `flush_top` flags. "Flush" means nothing is clipped on that
//! side: the content edge sits on or inside the container edge.
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate std;

mod bounds;
mod intent;
mod policy;
mod viewport;

pub use bounds::{DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM, ZoomBounds, ZoomBoundsError};
pub use intent::{DragIntent, ZoomIntent};
pub use policy::BoundedZoomPan;
pub use viewport::{ViewportState, VisibleFrame};
