// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlay annotations on an `object-fit` image.
//!
//! This example shows how to combine:
//! - `understory_media` to wait for an image and resolve its placement,
//! - `understory_object_fit` for the style values that drive that placement,
//! - `understory_canvas` to draw a rotated detection box, its center, and
//!   corner marks on an overlay surface sized to the visible image.
//!
//! Run:
//! - `RUST_LOG=info cargo run -p understory_demos --example media_overlay`

use kurbo::{Insets, Rect, Size};
use understory_canvas::{
    CornerStyle, PointStyle, RectangleStyle, Shadow, angle_between, clear_canvas,
    draw_center_point, draw_rectangle, draw_rectangle_corners, flip_horizontal,
    rotated_rect_corners,
};
use understory_demos::{Element, FakeImage, LoggingSurface, StyleTable, pixel_extent};
use understory_media::{Media, await_loaded, overlay_rect, rendered_rect};
use understory_object_fit::ComputedStyle;

fn main() {
    env_logger::init();

    // A 1600×900 photo shown with `object-fit: contain` in a padded 640×640 box.
    let mut styles = StyleTable::default();
    styles.set(
        Element::Container,
        ComputedStyle {
            size: Size::new(640.0, 640.0),
            padding: Insets::uniform(16.0),
            border: Insets::uniform(1.0),
            ..ComputedStyle::default()
        },
    );
    styles.set(
        Element::Image,
        ComputedStyle {
            client_size: Size::new(606.0, 606.0),
            object_fit: "contain".into(),
            object_position: "50% 50%".into(),
            ..ComputedStyle::default()
        },
    );

    let image = FakeImage::new(Size::new(1600.0, 900.0));
    let media = Media::Image(&image);
    println!("loaded before wait: {:?}", media.is_loaded());

    // Listeners are in place as soon as the wait is created.
    let wait = await_loaded(&image);
    image.finish_loading();
    let loaded = futures::executor::block_on(wait);
    println!("load result: {loaded:?}, loaded now: {:?}", media.is_loaded());

    let overlay = overlay_rect(&styles, &Element::Container, &Element::Image, media);
    println!("overlay box: {overlay:?}");

    match rendered_rect(&styles, &Element::Image, media) {
        Ok(rendered) => println!(
            "source crop {:?}, painted at {:?}",
            rendered.source,
            rendered.destination_in(Rect::new(0.0, 0.0, 606.0, 606.0))
        ),
        Err(err) => println!("cannot render: {err}"),
    }

    // Draw on a surface the size of the visible image.
    let mut surface =
        LoggingSurface::new(pixel_extent(overlay.width()), pixel_extent(overlay.height()));
    clear_canvas(&mut surface);

    let detection = Rect::new(120.0, 60.0, 360.0, 200.0);
    let style = RectangleStyle {
        degree: 12.0,
        shadow: Some(Shadow {
            blur: 6.0,
            color: "rgba(0, 0, 0, 0.5)",
        }),
        fill: Some("rgba(11, 92, 255, 0.15)"),
        ..RectangleStyle::default()
    };
    draw_rectangle(&mut surface, detection, &style);

    let corners = rotated_rect_corners(detection, style.degree);
    println!(
        "top edge heading: {:.1}°",
        angle_between(corners[0], corners[1])
    );
    draw_center_point(&mut surface, &corners, &PointStyle::default());
    draw_rectangle_corners(&mut surface, detection, &CornerStyle::default());

    // Mirror the overlay, as for a selfie camera preview.
    if let Err(err) = flip_horizontal(&mut surface) {
        println!("cannot flip: {err}");
    }
    println!("overlay surface: {:?}", surface.pixels().size());
}
