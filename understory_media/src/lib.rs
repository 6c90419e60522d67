// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_media --heading-base-level=0

//! Understory Media: media sources for overlay and crop geometry.
//!
//! A media element is one of a closed set of variants, modelled by [`Media`]:
//!
//! - [`Media::Image`]: anything implementing [`ImageSource`] (natural size plus a
//!   "complete" flag), such as an `<img>` element.
//! - [`Media::Video`]: anything implementing [`VideoSource`] (frame size plus a
//!   [`ReadyState`]), such as a `<video>` element.
//! - [`Media::Pixels`]: a decoded [`PixelBuffer`](understory_canvas::PixelBuffer).
//!
//! On top of that, this crate provides:
//!
//! - [`Media::intrinsic_size`] and [`Media::is_loaded`].
//! - [`await_loaded`], a one-shot wait for the first `load` or `error` event
//!   of a host element exposing [`MediaEvents`].
//! - [`inner_size`], [`overlay_rect`] and [`rendered_rect`], which resolve the
//!   element's style through a [`StyleResolver`](understory_object_fit::StyleResolver)
//!   and run the `understory_object_fit` math against the media's intrinsic size.
//!
//! # Example
//!
//! ```rust
//! use kurbo::Size;
//! use understory_media::{ImageSource, Media};
//!
//! struct Decoded;
//!
//! impl ImageSource for Decoded {
//!     fn natural_size(&self) -> Size {
//!         Size::new(1920.0, 1080.0)
//!     }
//!     fn is_complete(&self) -> bool {
//!         true
//!     }
//! }
//!
//! let media = Media::Image(&Decoded);
//! assert_eq!(media.intrinsic_size(), Size::new(1920.0, 1080.0));
//! assert_eq!(media.is_loaded(), Ok(true));
//! ```

mod error;
mod layout;
mod load;
mod source;

pub use error::MediaError;
pub use layout::{inner_size, overlay_rect, rendered_rect};
pub use load::{Listener, ListenerId, LoadWait, MediaEvent, MediaEvents, await_loaded};
pub use source::{ImageSource, Media, ReadyState, VideoSource};
