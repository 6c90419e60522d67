// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use understory_object_fit::FitError;

/// Errors from media queries and load waits.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum MediaError {
    /// The operation does not apply to this kind of media.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// The element reported a load error.
    #[error("media failed to load")]
    LoadFailed,
    /// The element dropped its listeners without reporting either outcome.
    #[error("media load listeners were dropped before firing")]
    LoadAbandoned,
    /// The element's fit style could not be applied.
    #[error(transparent)]
    Fit(#[from] FitError),
}
