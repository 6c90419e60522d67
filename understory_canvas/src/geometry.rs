// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Screen-space point and rectangle geometry.

use kurbo::{Affine, Point, Rect};

/// Corners of `rect` rotated by `degrees` about its own center.
///
/// Corners are returned as `[top_left, top_right, bottom_right, bottom_left]`
/// of the unrotated rectangle. Positive angles rotate clockwise on screen,
/// since y grows downward. A zero angle returns the corners exactly.
pub fn rotated_rect_corners(rect: Rect, degrees: f64) -> [Point; 4] {
    let corners = [
        Point::new(rect.x0, rect.y0),
        Point::new(rect.x1, rect.y0),
        Point::new(rect.x1, rect.y1),
        Point::new(rect.x0, rect.y1),
    ];
    if degrees == 0.0 {
        return corners;
    }
    let center = Point::new(
        rect.x0 + (rect.x1 - rect.x0) / 2.0,
        rect.y0 + (rect.y1 - rect.y0) / 2.0,
    );
    let rotation = Affine::rotate_about(degrees.to_radians(), center);
    corners.map(|corner| rotation * corner)
}

/// Arithmetic mean of `points`, or `None` if there are none.
pub fn center_of(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let (sum_x, sum_y) = points
        .iter()
        .fold((0.0, 0.0), |(x, y), p| (x + p.x, y + p.y));
    let n = points.len() as f64;
    Some(Point::new(sum_x / n, sum_y / n))
}

/// Angle in degrees of the direction from `from` to `to`, in `(-180, 180]`.
///
/// `0` points right and `90` points down.
pub fn angle_between(from: Point, to: Point) -> f64 {
    (to - from).atan2().to_degrees()
}

/// Euclidean distance between two points.
pub fn distance(from: Point, to: Point) -> f64 {
    from.distance(to)
}
