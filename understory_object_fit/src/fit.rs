// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The `object-fit` keyword.

use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;

use kurbo::Size;

use crate::FitError;

/// How the intrinsic content of a media element is mapped into its box.
///
/// These follow <https://developer.mozilla.org/en-US/docs/Web/CSS/object-fit>.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ObjectFit {
    /// Do not scale; the content keeps its intrinsic size and is cropped or padded.
    None,
    /// As large as possible without changing aspect ratio, all of the content shown.
    Contain,
    /// As large as possible with no dead space, some of the content may be clipped.
    Cover,
    /// Treated like [`ObjectFit::Contain`].
    ScaleDown,
    /// Stretch to the box, ignoring the content's aspect ratio.
    ///
    /// This is the CSS initial value.
    #[default]
    Fill,
}

impl ObjectFit {
    /// The CSS keyword for this mode.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Contain => "contain",
            Self::Cover => "cover",
            Self::ScaleDown => "scale-down",
            Self::Fill => "fill",
        }
    }

    /// Uniform scale factor applied to `content` to place it in `available`.
    ///
    /// Returns `None` for the modes that do not scale uniformly ([`ObjectFit::Fill`]
    /// and [`ObjectFit::None`]), and when `content` has a zero dimension.
    pub fn uniform_scale(self, available: Size, content: Size) -> Option<f64> {
        if content.width == 0.0 || content.height == 0.0 {
            return None;
        }
        let h_ratio = available.width / content.width;
        let v_ratio = available.height / content.height;
        match self {
            Self::Contain | Self::ScaleDown => Some(h_ratio.min(v_ratio)),
            Self::Cover => Some(h_ratio.max(v_ratio)),
            Self::Fill | Self::None => None,
        }
    }
}

impl fmt::Display for ObjectFit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObjectFit {
    type Err = FitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "none" => Ok(Self::None),
            "contain" => Ok(Self::Contain),
            "cover" => Ok(Self::Cover),
            "scale-down" => Ok(Self::ScaleDown),
            "fill" => Ok(Self::Fill),
            other => Err(FitError::UnsupportedFitMode(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_keyword() {
        for fit in [
            ObjectFit::None,
            ObjectFit::Contain,
            ObjectFit::Cover,
            ObjectFit::ScaleDown,
            ObjectFit::Fill,
        ] {
            assert_eq!(fit.as_str().parse::<ObjectFit>(), Ok(fit));
        }
        assert_eq!(" cover ".parse::<ObjectFit>(), Ok(ObjectFit::Cover));
    }

    #[test]
    fn rejects_unknown_keyword() {
        assert_eq!(
            "stretch".parse::<ObjectFit>(),
            Err(FitError::UnsupportedFitMode("stretch".into()))
        );
    }

    #[test]
    fn contain_takes_smaller_ratio_and_cover_larger() {
        let available = Size::new(200.0, 200.0);
        let content = Size::new(400.0, 200.0);
        assert_eq!(
            ObjectFit::Contain.uniform_scale(available, content),
            Some(0.5)
        );
        assert_eq!(
            ObjectFit::ScaleDown.uniform_scale(available, content),
            Some(0.5)
        );
        assert_eq!(ObjectFit::Cover.uniform_scale(available, content), Some(1.0));
        assert_eq!(ObjectFit::Fill.uniform_scale(available, content), None);
        assert_eq!(ObjectFit::None.uniform_scale(available, content), None);
    }

    #[test]
    fn zero_content_is_not_scaled() {
        assert_eq!(
            ObjectFit::Contain.uniform_scale(Size::new(10.0, 10.0), Size::new(0.0, 5.0)),
            None
        );
    }
}
