// Copyright 2025 the Zoompan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=zoompan_gesture --heading-base-level=0

//! Zoompan Gesture: an event-driven pinch-zoom and drag-pan controller.
//!
//! This crate wires host input into the `zoompan_policy` rules. The host
//! stays in charge of touch dispatch, layout, and rendering; it hands this
//! crate plain values and gets plain values back:
//!
//! - [`ZoomPanController::on_layout`] with the container and content geometry.
//! - [`ZoomPanController::handle`] with each [`InputEvent`], which answers
//!   whether the host should let the controller intercept the pointer stream.
//! - [`ZoomPanController::tick`] once per frame while a release is settling.
//! - [`ZoomPanController::transform`] for the scale and position to draw with.
//!
//! The pieces are also usable on their own:
//!
//! - [`drag`]: follow one pointer and decide when it captures the content.
//! - [`settle`]: the eased motion that brings released content to rest.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//!
//! use kurbo::{Insets, Point, Rect, Size, Vec2};
//! use zoompan_gesture::{InputEvent, PointerId, ZoomPanController};
//!
//! let mut controller = ZoomPanController::default();
//! controller.on_layout(
//!     Size::new(1000.0, 1000.0),
//!     Insets::ZERO,
//!     Rect::new(0.0, 0.0, 1000.0, 1000.0),
//! );
//!
//! // Pinch to 2x.
//! controller.handle(InputEvent::PinchBegin);
//! controller.handle(InputEvent::PinchUpdate { factor: 2.0 });
//! controller.handle(InputEvent::PinchEnd);
//! assert_eq!(controller.transform().unwrap().scale, 2.0);
//!
//! // Drag the zoomed content to the left. The move that passes the touch
//! // slop captures the content; later moves drag it.
//! let id = PointerId(0);
//! controller.handle(InputEvent::PointerDown { id, position: Point::new(500.0, 500.0) });
//! let response = controller.handle(InputEvent::PointerMove { id, position: Point::new(490.0, 500.0) });
//! assert!(response.intercept);
//! controller.handle(InputEvent::PointerMove { id, position: Point::new(390.0, 500.0) });
//! assert_eq!(controller.transform().unwrap().position, Point::new(-100.0, 0.0));
//!
//! // Release and let it settle; it still covers the container, so it stays put.
//! controller.handle(InputEvent::PointerUp { id, velocity: Vec2::ZERO });
//! while controller.tick(Duration::from_millis(16)) {}
//! assert_eq!(controller.transform().unwrap().position, Point::new(-100.0, 0.0));
//! ```

pub mod drag;
pub mod settle;

mod config;
mod controller;
mod event;

pub use config::GestureConfig;
pub use controller::{ContentTransform, GesturePhase, ZoomPanController};
pub use drag::{DragTracker, PointerId};
pub use event::{EventResponse, InputEvent};
pub use settle::SettleAnimation;
