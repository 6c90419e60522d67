// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Errors from pixel buffers and drawing surfaces.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CanvasError {
    /// The byte length does not match `width * height * 4`.
    #[error("{len} bytes cannot hold {width}x{height} RGBA pixels")]
    BufferSize {
        /// Width in pixels.
        width: u32,
        /// Height in pixels.
        height: u32,
        /// Byte length that was supplied.
        len: usize,
    },
    /// The surface refused to hand out its pixels (for example a tainted canvas).
    #[error("surface pixels are not readable")]
    PixelsUnavailable,
}
