// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlay and crop placement.

use kurbo::{Rect, Size};

use crate::{FitError, ObjectFit, ObjectPosition};

/// How a media element's intrinsic image maps onto its rendered box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderedRect {
    /// Crop region of the intrinsic image, in intrinsic pixels.
    ///
    /// The origin may be negative when the image is smaller than the box and
    /// [`ObjectFit::None`] is in effect.
    pub source: Rect,
    /// Where the crop is painted, as fractions (`0.0..=1.0`) of the rendered box.
    pub destination: Rect,
}

impl RenderedRect {
    /// The destination covering the whole rendered box.
    pub const FULL_DESTINATION: Rect = Rect::new(0.0, 0.0, 1.0, 1.0);

    /// Map [`RenderedRect::destination`] onto a concrete rendered box.
    pub fn destination_in(&self, rendered: Rect) -> Rect {
        let (w, h) = (rendered.width(), rendered.height());
        Rect::new(
            rendered.x0 + self.destination.x0 * w,
            rendered.y0 + self.destination.y0 * h,
            rendered.x0 + self.destination.x1 * w,
            rendered.y0 + self.destination.y1 * h,
        )
    }
}

/// Where media of size `intrinsic` appears inside the `visible` content box.
///
/// For [`ObjectFit::Contain`], [`ObjectFit::ScaleDown`] and [`ObjectFit::Cover`]
/// the intrinsic size is scaled uniformly (see [`ObjectFit::uniform_scale`]) and
/// centered in `visible`. Other modes return `visible` unchanged, as does an
/// intrinsic size with a zero dimension.
pub fn overlay_rect(visible: Rect, intrinsic: Size, fit: ObjectFit) -> Rect {
    let Some(scale) = fit.uniform_scale(visible.size(), intrinsic) else {
        if matches!(fit, ObjectFit::Contain | ObjectFit::Cover | ObjectFit::ScaleDown) {
            log::debug!("media has no intrinsic area ({intrinsic:?}), overlay left unscaled");
        }
        return visible;
    };
    let width = intrinsic.width * scale;
    let height = intrinsic.height * scale;
    let x = visible.x0 + (visible.width() - width) / 2.0;
    let y = visible.y0 + (visible.height() - height) / 2.0;
    Rect::new(x, y, x + width, y + height)
}

/// Source crop and destination placement of media of size `intrinsic`
/// rendered in a box of size `rendered`.
///
/// - [`ObjectFit::None`]: the crop is box-sized, offset by `(intrinsic - rendered) * position`.
/// - [`ObjectFit::Contain`] / [`ObjectFit::ScaleDown`]: the whole image is the crop, and the
///   destination shrinks along the axis with slack, anchored by `position`.
/// - [`ObjectFit::Cover`]: the crop is the largest sub-rectangle with the box's aspect
///   ratio, anchored by `position`.
/// - [`ObjectFit::Fill`]: the whole image is stretched over the whole box.
///
/// Fails with [`FitError::EmptySize`] if either size has a zero dimension.
pub fn rendered_rect(
    intrinsic: Size,
    rendered: Size,
    fit: ObjectFit,
    position: ObjectPosition,
) -> Result<RenderedRect, FitError> {
    if has_no_area(intrinsic) || has_no_area(rendered) {
        return Err(FitError::EmptySize {
            intrinsic,
            rendered,
        });
    }

    let intrinsic_ratio = intrinsic.width / intrinsic.height;
    let rendered_ratio = rendered.width / rendered.height;
    let anchor = position.fractions();
    let whole = Rect::from_origin_size((0.0, 0.0), intrinsic);
    let mut destination = RenderedRect::FULL_DESTINATION;

    let source = match fit {
        ObjectFit::None => {
            let x = (intrinsic.width - rendered.width) * anchor.x;
            let y = (intrinsic.height - rendered.height) * anchor.y;
            Rect::new(x, y, x + rendered.width, y + rendered.height)
        }
        ObjectFit::Contain | ObjectFit::ScaleDown => {
            let h_scale = intrinsic.width / rendered.width;
            let v_scale = intrinsic.height / rendered.height;
            if intrinsic_ratio > rendered_ratio {
                let height = v_scale / h_scale;
                let y = (1.0 - height) * anchor.y;
                destination = Rect::new(0.0, y, 1.0, y + height);
            } else {
                let width = h_scale / v_scale;
                let x = (1.0 - width) * anchor.x;
                destination = Rect::new(x, 0.0, x + width, 1.0);
            }
            whole
        }
        ObjectFit::Cover => {
            if intrinsic_ratio > rendered_ratio {
                let width = intrinsic.height * rendered_ratio;
                let x = (intrinsic.width - width) * anchor.x;
                Rect::new(x, 0.0, x + width, intrinsic.height)
            } else {
                let height = intrinsic.width / rendered_ratio;
                let y = (intrinsic.height - height) * anchor.y;
                Rect::new(0.0, y, intrinsic.width, y + height)
            }
        }
        ObjectFit::Fill => whole,
    };

    Ok(RenderedRect {
        source,
        destination,
    })
}

fn has_no_area(size: Size) -> bool {
    size.width <= 0.0 || size.height <= 0.0
}
