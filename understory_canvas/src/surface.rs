// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};

use crate::{CanvasError, PixelBuffer};

/// A 2D drawing surface with canvas-like path and pixel primitives.
///
/// Methods map one-to-one onto the operations of an HTML canvas 2D context,
/// so a browser host can forward each call directly. Colors are CSS color
/// strings. Path methods build a single current path that [`fill`] and
/// [`stroke`] paint with the current styles.
///
/// [`fill`]: DrawSurface::fill
/// [`stroke`]: DrawSurface::stroke
pub trait DrawSurface {
    /// Size of the surface in pixels.
    fn size(&self) -> Size;

    /// Start a new path, discarding the current one.
    fn begin_path(&mut self);
    /// Close the current subpath back to its start.
    fn close_path(&mut self);
    /// Begin a new subpath at `p`.
    fn move_to(&mut self, p: Point);
    /// Add a straight segment to `p`.
    fn line_to(&mut self, p: Point);
    /// Add a circular arc around `center`, with angles in radians.
    fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64);

    /// Set the color used by [`DrawSurface::fill`].
    fn set_fill_style(&mut self, color: &str);
    /// Set the color used by [`DrawSurface::stroke`].
    fn set_stroke_style(&mut self, color: &str);
    /// Set the stroke width.
    fn set_line_width(&mut self, width: f64);
    /// Set the shadow applied to subsequent painting.
    fn set_shadow(&mut self, offset: Vec2, blur: f64, color: &str);

    /// Fill the current path.
    fn fill(&mut self);
    /// Stroke the current path.
    fn stroke(&mut self);
    /// Reset `rect` to transparent.
    fn clear_rect(&mut self, rect: Rect);

    /// Read back the whole surface.
    fn image_data(&self) -> Result<PixelBuffer, CanvasError>;
    /// Write `pixels` with their top-left corner at `origin`.
    fn put_image_data(&mut self, pixels: &PixelBuffer, origin: Point);
}
