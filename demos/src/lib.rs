// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory host used by the demos: a fake `<img>` element, a style table,
//! and a drawing surface that logs every call.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use kurbo::{Point, Rect, Size, Vec2};
use understory_canvas::{CanvasError, DrawSurface, PixelBuffer};
use understory_media::{ImageSource, Listener, ListenerId, MediaEvent, MediaEvents};
use understory_object_fit::{ComputedStyle, StyleResolver};

/// Elements of the demo page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Element {
    /// The box wrapping the image.
    Container,
    /// The image itself.
    Image,
}

/// Resolves styles from a fixed table.
#[derive(Debug, Default)]
pub struct StyleTable {
    styles: HashMap<Element, ComputedStyle>,
}

impl StyleTable {
    /// Set the style of `element`.
    pub fn set(&mut self, element: Element, style: ComputedStyle) {
        self.styles.insert(element, style);
    }
}

impl StyleResolver<Element> for StyleTable {
    fn computed_style(&self, element: &Element) -> ComputedStyle {
        self.styles.get(element).cloned().unwrap_or_default()
    }
}

/// A fake image element that "loads" when told to.
pub struct FakeImage {
    size: Size,
    complete: Cell<bool>,
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(MediaEvent, ListenerId, Listener)>>,
}

impl core::fmt::Debug for FakeImage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FakeImage")
            .field("size", &self.size)
            .field("complete", &self.complete.get())
            .field("listeners", &self.listeners.borrow().len())
            .finish_non_exhaustive()
    }
}

impl FakeImage {
    /// An image of the given natural size that has not loaded yet.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            complete: Cell::new(false),
            next_id: Cell::new(0),
            listeners: RefCell::new(Vec::new()),
        }
    }

    /// Finish loading and notify `load` listeners.
    pub fn finish_loading(&self) {
        self.complete.set(true);
        let fired: Vec<_> = {
            let mut listeners = self.listeners.borrow_mut();
            let (fired, kept): (Vec<_>, Vec<_>) = listeners
                .drain(..)
                .partition(|(event, _, _)| *event == MediaEvent::Load);
            *listeners = kept;
            fired
        };
        for (_, _, listener) in fired {
            listener();
        }
    }
}

impl ImageSource for FakeImage {
    fn natural_size(&self) -> Size {
        self.size
    }

    fn is_complete(&self) -> bool {
        self.complete.get()
    }
}

impl MediaEvents for FakeImage {
    fn add_listener(&self, event: MediaEvent, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((event, id, listener));
        id
    }

    fn remove_listener(&self, event: MediaEvent, id: ListenerId) {
        self.listeners
            .borrow_mut()
            .retain(|(e, i, _)| !(*e == event && *i == id));
    }
}

/// Whole pixels needed to cover `extent`, clamped to the `u32` range.
#[allow(
    clippy::cast_possible_truncation,
    reason = "Clamped to the u32 range before the cast."
)]
pub fn pixel_extent(extent: f64) -> u32 {
    extent.ceil().clamp(0.0, f64::from(u32::MAX)) as u32
}

/// A surface that keeps pixels in memory and logs every drawing call.
#[derive(Debug)]
pub struct LoggingSurface {
    pixels: PixelBuffer,
}

impl LoggingSurface {
    /// A transparent surface of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: PixelBuffer::transparent(width, height),
        }
    }

    /// Current pixel contents.
    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }
}

impl DrawSurface for LoggingSurface {
    fn size(&self) -> Size {
        self.pixels.size()
    }
    fn begin_path(&mut self) {
        log::info!("begin_path");
    }
    fn close_path(&mut self) {
        log::info!("close_path");
    }
    fn move_to(&mut self, p: Point) {
        log::info!("move_to({:.1}, {:.1})", p.x, p.y);
    }
    fn line_to(&mut self, p: Point) {
        log::info!("line_to({:.1}, {:.1})", p.x, p.y);
    }
    fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64) {
        log::info!(
            "arc({:.1}, {:.1}, r={radius}, {start_angle:.2}..{end_angle:.2})",
            center.x,
            center.y
        );
    }
    fn set_fill_style(&mut self, color: &str) {
        log::info!("fill_style = {color}");
    }
    fn set_stroke_style(&mut self, color: &str) {
        log::info!("stroke_style = {color}");
    }
    fn set_line_width(&mut self, width: f64) {
        log::info!("line_width = {width}");
    }
    fn set_shadow(&mut self, offset: Vec2, blur: f64, color: &str) {
        log::info!("shadow = {offset:?} blur {blur} {color}");
    }
    fn fill(&mut self) {
        log::info!("fill");
    }
    fn stroke(&mut self) {
        log::info!("stroke");
    }
    fn clear_rect(&mut self, rect: Rect) {
        log::info!("clear_rect({rect:?})");
        let size = self.pixels.size();
        if rect.x0 <= 0.0 && rect.y0 <= 0.0 && rect.x1 >= size.width && rect.y1 >= size.height {
            self.pixels = PixelBuffer::transparent(self.pixels.width(), self.pixels.height());
        }
    }
    fn image_data(&self) -> Result<PixelBuffer, CanvasError> {
        Ok(self.pixels.clone())
    }
    fn put_image_data(&mut self, pixels: &PixelBuffer, origin: Point) {
        log::info!("put_image_data at {origin:?}");
        self.pixels = pixels.clone();
    }
}
