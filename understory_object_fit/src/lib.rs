// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_object_fit --heading-base-level=0

//! Understory Object Fit: CSS `object-fit` / `object-position` layout math.
//!
//! This crate answers two questions about a media element (an image, a video
//! frame, or a raw pixel buffer) laid out in a box:
//!
//! - Where does the media's content actually appear inside its container?
//!   See [`overlay_rect`], which is what you want for positioning an overlay
//!   (for example a canvas used to annotate detected regions) on top of it.
//! - Which part of the intrinsic image is visible, and where on the rendered
//!   box is it painted? See [`rendered_rect`] and [`RenderedRect`], which is
//!   what you want for reproducing the element's rendering on a drawing
//!   surface with a source crop plus a destination placement.
//!
//! Both are pure functions over [`kurbo`] types. Style values come from the
//! host through [`ComputedStyle`], usually produced by a [`StyleResolver`].
//!
//! ## Not a layout engine
//!
//! This crate does not resolve CSS. The host is expected to hand over already
//! resolved, numeric box-model values (padding, border, margin, sizes) and the
//! raw `object-fit` / `object-position` property strings. Parsing of those two
//! strings lives here ([`ObjectFit`], [`ObjectPosition`]) so that unsupported
//! values are reported uniformly as [`FitError`].
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use understory_object_fit::{ObjectFit, ObjectPosition, overlay_rect, rendered_rect};
//!
//! // A 400×200 image shown with `object-fit: contain` in a 200×200 box.
//! let overlay = overlay_rect(
//!     Rect::new(0.0, 0.0, 200.0, 200.0),
//!     Size::new(400.0, 200.0),
//!     ObjectFit::Contain,
//! );
//! assert_eq!(overlay, Rect::new(0.0, 50.0, 200.0, 150.0));
//!
//! // The same image with `object-fit: cover` in a 100×100 box shows its middle square.
//! let rendered = rendered_rect(
//!     Size::new(400.0, 200.0),
//!     Size::new(100.0, 100.0),
//!     ObjectFit::Cover,
//!     ObjectPosition::CENTER,
//! )
//! .unwrap();
//! assert_eq!(rendered.source, Rect::new(100.0, 0.0, 300.0, 200.0));
//! ```
//!
//! ## Degenerate inputs
//!
//! - [`overlay_rect`] tolerates a zero intrinsic dimension by not scaling at all:
//!   the visible box is returned unchanged.
//! - [`rendered_rect`] fails with [`FitError::EmptySize`] when either the intrinsic
//!   or the rendered size has a zero (or negative) dimension.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod fit;
mod layout;
mod position;
mod style;

pub use error::FitError;
pub use fit::ObjectFit;
pub use layout::{RenderedRect, overlay_rect, rendered_rect};
pub use position::ObjectPosition;
pub use style::{ComputedStyle, StyleResolver};
