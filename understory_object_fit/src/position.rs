// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The `object-position` anchor.

use alloc::string::ToString;
use core::str::FromStr;

use kurbo::Vec2;

use crate::FitError;

/// Anchor of the content inside its box, as a pair of percentages.
///
/// `0` aligns the content's left (top) edge with the box's left (top) edge,
/// `100` aligns the right (bottom) edges. Values outside `0..=100` are allowed
/// and push the content past the box edges, as in CSS.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObjectPosition {
    /// Horizontal percentage.
    pub x: f64,
    /// Vertical percentage.
    pub y: f64,
}

impl ObjectPosition {
    /// `50% 50%`, the CSS initial value.
    pub const CENTER: Self = Self::new(50.0, 50.0);

    /// Create a position from horizontal and vertical percentages.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The position as fractions of the slack on each axis (`0.0..=1.0` for in-range values).
    pub fn fractions(self) -> Vec2 {
        Vec2::new(self.x / 100.0, self.y / 100.0)
    }
}

impl Default for ObjectPosition {
    fn default() -> Self {
        Self::CENTER
    }
}

/// A single `object-position` token and the axis it binds to.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Component {
    Horizontal(f64),
    Vertical(f64),
    Center,
    Either(f64),
}

impl Component {
    fn parse(token: &str) -> Option<Self> {
        match token {
            "left" => Some(Self::Horizontal(0.0)),
            "right" => Some(Self::Horizontal(100.0)),
            "top" => Some(Self::Vertical(0.0)),
            "bottom" => Some(Self::Vertical(100.0)),
            "center" => Some(Self::Center),
            _ => {
                let number = token.strip_suffix('%').unwrap_or(token);
                let value = number.parse::<f64>().ok()?;
                value.is_finite().then_some(Self::Either(value))
            }
        }
    }

    fn value(self) -> f64 {
        match self {
            Self::Horizontal(v) | Self::Vertical(v) | Self::Either(v) => v,
            Self::Center => 50.0,
        }
    }
}

impl FromStr for ObjectPosition {
    type Err = FitError;

    /// Parse the computed form of `object-position`.
    ///
    /// Accepts one or two whitespace-separated tokens, each either a percentage
    /// (`25%`), a bare number, or one of the `left`/`center`/`right`/`top`/`bottom`
    /// keywords. A missing axis is centered; an empty string is [`ObjectPosition::CENTER`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FitError::InvalidPosition(s.to_string());
        let mut tokens = s.split_whitespace();
        let first = tokens.next().map(Component::parse);
        let second = tokens.next().map(Component::parse);
        if tokens.next().is_some() {
            return Err(invalid());
        }

        match (first, second) {
            (None, _) => Ok(Self::CENTER),
            (Some(Some(only)), None) => Ok(match only {
                Component::Vertical(y) => Self::new(50.0, y),
                other => Self::new(other.value(), 50.0),
            }),
            (Some(Some(a)), Some(Some(b))) => {
                use Component::{Center, Either, Horizontal, Vertical};
                match (a, b) {
                    (Horizontal(_), Horizontal(_)) | (Vertical(_), Vertical(_)) => Err(invalid()),
                    // A number is only allowed after a horizontal or before a vertical keyword.
                    (Vertical(_), Either(_)) | (Either(_), Horizontal(_)) => Err(invalid()),
                    (Vertical(_), Horizontal(_) | Center) | (Center, Horizontal(_)) => {
                        Ok(Self::new(b.value(), a.value()))
                    }
                    _ => Ok(Self::new(a.value(), b.value())),
                }
            }
            _ => Err(invalid()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Result<ObjectPosition, FitError> {
        s.parse()
    }

    #[test]
    fn computed_percentages() {
        assert_eq!(parse("50% 50%"), Ok(ObjectPosition::CENTER));
        assert_eq!(parse("0% 100%"), Ok(ObjectPosition::new(0.0, 100.0)));
        assert_eq!(parse("  25%   75% "), Ok(ObjectPosition::new(25.0, 75.0)));
        assert_eq!(parse("10 20"), Ok(ObjectPosition::new(10.0, 20.0)));
    }

    #[test]
    fn missing_axis_is_centered() {
        assert_eq!(parse(""), Ok(ObjectPosition::CENTER));
        assert_eq!(parse("20%"), Ok(ObjectPosition::new(20.0, 50.0)));
        assert_eq!(parse("bottom"), Ok(ObjectPosition::new(50.0, 100.0)));
    }

    #[test]
    fn keywords_bind_to_their_axis() {
        assert_eq!(parse("left top"), Ok(ObjectPosition::new(0.0, 0.0)));
        assert_eq!(parse("top left"), Ok(ObjectPosition::new(0.0, 0.0)));
        assert_eq!(parse("bottom right"), Ok(ObjectPosition::new(100.0, 100.0)));
        assert_eq!(parse("center 30%"), Ok(ObjectPosition::new(50.0, 30.0)));
        assert_eq!(parse("right 30%"), Ok(ObjectPosition::new(100.0, 30.0)));
        assert_eq!(parse("30% bottom"), Ok(ObjectPosition::new(30.0, 100.0)));
        assert_eq!(parse("top center"), Ok(ObjectPosition::new(50.0, 0.0)));
        assert_eq!(parse("center left"), Ok(ObjectPosition::new(0.0, 50.0)));
        assert_eq!(parse("center"), Ok(ObjectPosition::CENTER));
    }

    #[test]
    fn numbers_do_not_swap_axes_with_keywords() {
        assert!(parse("30% right").is_err(), "horizontal keyword after a number");
        assert!(parse("top 30%").is_err(), "vertical keyword before a number");
        assert!(parse("bottom 0").is_err(), "vertical keyword before a number");
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse("10px 20px").is_err(), "lengths are not percentages");
        assert!(parse("left right").is_err(), "both tokens are horizontal");
        assert!(parse("1% 2% 3%").is_err(), "too many tokens");
        assert!(parse("middle").is_err(), "unknown keyword");
    }

    #[test]
    fn fractions_scale_percentages() {
        let f = ObjectPosition::new(25.0, 100.0).fractions();
        assert_eq!(f, Vec2::new(0.25, 1.0));
    }
}
