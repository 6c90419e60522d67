// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Object-fit placement of media elements, with styles resolved by the host.

use kurbo::{Rect, Size};
use understory_object_fit::{RenderedRect, StyleResolver};

use crate::{Media, MediaError};

/// Rendered size of `element` without its padding.
pub fn inner_size<E, R>(resolver: &R, element: &E) -> Size
where
    E: ?Sized,
    R: StyleResolver<E> + ?Sized,
{
    resolver.computed_style(element).inner_size()
}

/// Where `media`, shown by `element`, appears inside `container`.
///
/// The container's content box (net of padding and border, offset by its
/// leading margin) is the space the media is fitted into with the element's
/// `object-fit`. An unrecognized `object-fit` is logged and treated like
/// `fill`: the whole content box is returned.
pub fn overlay_rect<E, R>(resolver: &R, container: &E, element: &E, media: Media<'_>) -> Rect
where
    E: ?Sized,
    R: StyleResolver<E> + ?Sized,
{
    let visible = resolver.computed_style(container).visible_rect();
    match resolver.computed_style(element).fit() {
        Ok(fit) => understory_object_fit::overlay_rect(visible, media.intrinsic_size(), fit),
        Err(err) => {
            log::warn!("{err}; overlay covers the container's content box");
            visible
        }
    }
}

/// Source crop and destination placement of `media` as rendered by `element`.
///
/// Uses the element's rendered box (`client_size`), `object-fit` and
/// `object-position`. Fails if either style value is unsupported, or if the
/// media or the rendered box has no area.
pub fn rendered_rect<E, R>(
    resolver: &R,
    element: &E,
    media: Media<'_>,
) -> Result<RenderedRect, MediaError>
where
    E: ?Sized,
    R: StyleResolver<E> + ?Sized,
{
    let style = resolver.computed_style(element);
    let fit = style.fit().inspect_err(|err| log::warn!("{err}"))?;
    let position = style.position()?;
    let rect = understory_object_fit::rendered_rect(
        media.intrinsic_size(),
        style.client_size,
        fit,
        position,
    )?;
    Ok(rect)
}
