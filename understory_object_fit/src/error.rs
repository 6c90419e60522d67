// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use kurbo::Size;

/// Errors produced while parsing fit styles or computing a placement.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum FitError {
    /// The `object-fit` value is not one of `none`, `contain`, `cover`, `scale-down` or `fill`.
    #[error("unsupported object-fit value `{0}`")]
    UnsupportedFitMode(String),
    /// The `object-position` value could not be read as a pair of percentages.
    #[error("invalid object-position value `{0}`")]
    InvalidPosition(String),
    /// The media or its rendered box has no area.
    #[error("cannot place media of size {intrinsic:?} in a box of size {rendered:?}")]
    EmptySize {
        /// Intrinsic size of the media.
        intrinsic: Size,
        /// Size of the rendered box.
        rendered: Size,
    },
}
