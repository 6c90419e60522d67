// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolved style snapshot handed over by the host.

use alloc::string::String;

use kurbo::{Insets, Point, Rect, Size};

use crate::{FitError, ObjectFit, ObjectPosition};

/// Resolved style values of an element, as numbers in surface units.
///
/// Insets use kurbo's convention: `x0` is left, `y0` top, `x1` right, `y1` bottom.
#[derive(Clone, Debug, PartialEq)]
pub struct ComputedStyle {
    /// Used `width` and `height` of the element's box.
    pub size: Size,
    /// The rendered box: content plus padding, without borders or scrollbars.
    pub client_size: Size,
    /// Resolved padding on each side.
    pub padding: Insets,
    /// Resolved border widths on each side.
    pub border: Insets,
    /// Resolved margins on each side. Only the left and top margins affect positions here.
    pub margin: Insets,
    /// Raw `object-fit` property value.
    pub object_fit: String,
    /// Raw `object-position` property value.
    pub object_position: String,
}

impl Default for ComputedStyle {
    fn default() -> Self {
        Self {
            size: Size::ZERO,
            client_size: Size::ZERO,
            padding: Insets::ZERO,
            border: Insets::ZERO,
            margin: Insets::ZERO,
            object_fit: ObjectFit::Fill.as_str().into(),
            object_position: String::from("50% 50%"),
        }
    }
}

impl ComputedStyle {
    /// A style with the given box size as both `size` and `client_size` and no insets.
    pub fn with_size(size: Size) -> Self {
        Self {
            size,
            client_size: size,
            ..Self::default()
        }
    }

    /// Parsed `object-fit`.
    pub fn fit(&self) -> Result<ObjectFit, FitError> {
        self.object_fit.parse()
    }

    /// Parsed `object-position`.
    pub fn position(&self) -> Result<ObjectPosition, FitError> {
        self.object_position.parse()
    }

    /// The rendered box size without padding.
    pub fn inner_size(&self) -> Size {
        Size::new(
            self.client_size.width - self.padding.x_value(),
            self.client_size.height - self.padding.y_value(),
        )
    }

    /// The content box of the element, net of padding and border, offset by the
    /// leading (left and top) padding, border and margin.
    pub fn visible_rect(&self) -> Rect {
        let origin = Point::new(
            self.padding.x0 + self.border.x0 + self.margin.x0,
            self.padding.y0 + self.border.y0 + self.margin.y0,
        );
        let width = self.size.width - self.padding.x_value() - self.border.x_value();
        let height = self.size.height - self.padding.y_value() - self.border.y_value();
        Rect::new(origin.x, origin.y, origin.x + width, origin.y + height)
    }
}

/// Host capability that resolves the style of an element.
///
/// Implemented for any `Fn(&E) -> ComputedStyle`, which is convenient in tests.
pub trait StyleResolver<E: ?Sized> {
    /// Resolve the current style of `element`.
    fn computed_style(&self, element: &E) -> ComputedStyle;
}

impl<E: ?Sized, F: Fn(&E) -> ComputedStyle> StyleResolver<E> for F {
    fn computed_style(&self, element: &E) -> ComputedStyle {
        self(element)
    }
}
