// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawing primitives over a [`DrawSurface`].

use core::f64::consts::TAU;

use kurbo::{Point, Rect, Vec2};

use crate::{CanvasError, DrawSurface, center_of, rotated_rect_corners};

/// Default annotation color.
pub const ACCESSIBLE_BLUE: &str = "#0b5cff";

/// A drop shadow, applied with zero offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow<'a> {
    /// Blur radius. A zero blur disables the shadow.
    pub blur: f64,
    /// Shadow color.
    pub color: &'a str,
}

/// Options for [`draw_point`] and [`draw_center_point`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointStyle<'a> {
    /// Radius of the dot.
    pub radius: f64,
    /// Fill color.
    pub color: &'a str,
}

impl Default for PointStyle<'_> {
    fn default() -> Self {
        Self {
            radius: 3.0,
            color: ACCESSIBLE_BLUE,
        }
    }
}

/// Options for [`draw_rectangle`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectangleStyle<'a> {
    /// Clockwise rotation about the rectangle's center, in degrees.
    pub degree: f64,
    /// Outline width. A zero width strokes with a transparent color.
    pub line_width: f64,
    /// Outline color.
    pub line_color: &'a str,
    /// Optional shadow.
    pub shadow: Option<Shadow<'a>>,
    /// Optional fill color, painted after the outline.
    pub fill: Option<&'a str>,
}

impl Default for RectangleStyle<'_> {
    fn default() -> Self {
        Self {
            degree: 0.0,
            line_width: 2.0,
            line_color: ACCESSIBLE_BLUE,
            shadow: None,
            fill: None,
        }
    }
}

/// Options for [`draw_rectangle_corners`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CornerStyle<'a> {
    /// Width of the corner marks. A zero width keeps the surface's current stroke style.
    pub line_width: f64,
    /// Color of the corner marks.
    pub line_color: &'a str,
    /// Optional shadow.
    pub shadow: Option<Shadow<'a>>,
}

impl Default for CornerStyle<'_> {
    fn default() -> Self {
        Self {
            line_width: 2.0,
            line_color: ACCESSIBLE_BLUE,
            shadow: None,
        }
    }
}

fn apply_shadow<S: DrawSurface + ?Sized>(surface: &mut S, shadow: Option<Shadow<'_>>) {
    if let Some(shadow) = shadow.filter(|s| s.blur != 0.0) {
        surface.set_shadow(Vec2::ZERO, shadow.blur, shadow.color);
    }
}

/// Fill a dot of `style.radius` at `at`.
pub fn draw_point<S: DrawSurface + ?Sized>(surface: &mut S, at: Point, style: &PointStyle<'_>) {
    surface.begin_path();
    surface.arc(at, style.radius, 0.0, TAU);
    surface.set_fill_style(style.color);
    surface.fill();
}

/// Fill a dot at the center of `points`.
///
/// Returns the center that was drawn, or `None` (drawing nothing) if `points` is empty.
pub fn draw_center_point<S: DrawSurface + ?Sized>(
    surface: &mut S,
    points: &[Point],
    style: &PointStyle<'_>,
) -> Option<Point> {
    let center = center_of(points)?;
    draw_point(surface, center, style);
    Some(center)
}

/// Outline `rect`, optionally rotated and filled.
pub fn draw_rectangle<S: DrawSurface + ?Sized>(
    surface: &mut S,
    rect: Rect,
    style: &RectangleStyle<'_>,
) {
    let [c0, c1, c2, c3] = rotated_rect_corners(rect, style.degree);
    surface.set_line_width(style.line_width);
    surface.set_stroke_style(if style.line_width != 0.0 {
        style.line_color
    } else {
        "transparent"
    });
    apply_shadow(surface, style.shadow);
    surface.begin_path();
    surface.move_to(c0);
    surface.line_to(c1);
    surface.line_to(c2);
    surface.line_to(c3);
    surface.close_path();
    surface.stroke();
    if let Some(fill) = style.fill {
        surface.set_fill_style(fill);
        surface.fill();
    }
}

/// Stroke L-shaped marks at the four corners of `rect`.
///
/// Each arm is a quarter of the rectangle's shorter side.
pub fn draw_rectangle_corners<S: DrawSurface + ?Sized>(
    surface: &mut S,
    rect: Rect,
    style: &CornerStyle<'_>,
) {
    if style.line_width != 0.0 {
        surface.set_stroke_style(style.line_color);
        surface.set_line_width(style.line_width);
    }
    apply_shadow(surface, style.shadow);

    let Rect { x0, y0, x1, y1 } = rect;
    let arm = (x1 - x0).min(y1 - y0) / 4.0;
    surface.begin_path();
    for [from, corner, to] in [
        [(x0, y0 + arm), (x0, y0), (x0 + arm, y0)],
        [(x1 - arm, y0), (x1, y0), (x1, y0 + arm)],
        [(x0, y1 - arm), (x0, y1), (x0 + arm, y1)],
        [(x1 - arm, y1), (x1, y1), (x1, y1 - arm)],
    ] {
        surface.move_to(from.into());
        surface.line_to(corner.into());
        surface.line_to(to.into());
    }
    surface.stroke();
}

/// Clear the whole surface.
pub fn clear_canvas<S: DrawSurface + ?Sized>(surface: &mut S) {
    let size = surface.size();
    surface.clear_rect(Rect::from_origin_size(Point::ORIGIN, size));
}

/// Mirror the surface's pixels left to right.
pub fn flip_horizontal<S: DrawSurface + ?Sized>(surface: &mut S) -> Result<(), CanvasError> {
    let mut pixels = surface.image_data()?;
    pixels.flip_horizontal();
    surface.put_image_data(&pixels, Point::ORIGIN);
    Ok(())
}
