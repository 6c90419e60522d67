// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_canvas --heading-base-level=0

//! Understory Canvas: small geometry and drawing helpers for annotating media.
//!
//! This crate collects the pieces needed to draw overlays (detection boxes,
//! landmarks, crop marks) on top of an image or video frame:
//!
//! - Point and rectangle geometry in screen space (y grows downward):
//!   [`rotated_rect_corners`], [`center_of`], [`angle_between`] and [`distance`].
//! - A minimal [`DrawSurface`] trait modelled after a 2D canvas context, and
//!   drawing primitives built on it: [`draw_point`], [`draw_center_point`],
//!   [`draw_rectangle`], [`draw_rectangle_corners`], [`clear_canvas`] and
//!   [`flip_horizontal`].
//! - [`PixelBuffer`], a packed RGBA row-major buffer, with an in-place
//!   horizontal mirror that works without any surface.
//!
//! The drawing surface is a host capability: implement [`DrawSurface`] for
//! your canvas, renderer, or a recording mock in tests.
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use understory_canvas::{angle_between, center_of, distance, rotated_rect_corners};
//!
//! let corners = rotated_rect_corners(Rect::new(0.0, 0.0, 40.0, 20.0), 90.0);
//! let center = center_of(&corners).unwrap();
//! assert!((center - Point::new(20.0, 10.0)).hypot() < 1e-9);
//!
//! assert_eq!(angle_between(Point::ORIGIN, Point::new(0.0, 1.0)), 90.0);
//! assert_eq!(distance(Point::ORIGIN, Point::new(3.0, 4.0)), 5.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod draw;
mod error;
mod geometry;
mod pixels;
mod surface;

pub use draw::{
    ACCESSIBLE_BLUE, CornerStyle, PointStyle, RectangleStyle, Shadow, clear_canvas,
    draw_center_point, draw_point, draw_rectangle, draw_rectangle_corners, flip_horizontal,
};
pub use error::CanvasError;
pub use geometry::{angle_between, center_of, distance, rotated_rect_corners};
pub use pixels::{PixelBuffer, flip_rows_horizontal};
pub use surface::DrawSurface;
