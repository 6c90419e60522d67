// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Media source variants.

use core::fmt;

use kurbo::Size;
use understory_canvas::PixelBuffer;

use crate::MediaError;

/// An image-like element.
pub trait ImageSource {
    /// Natural (intrinsic) size of the decoded image.
    fn natural_size(&self) -> Size;
    /// Whether the image has finished loading.
    fn is_complete(&self) -> bool;
}

/// A video-like element.
pub trait VideoSource {
    /// Intrinsic size of the video frames.
    fn video_size(&self) -> Size;
    /// How much media data is buffered.
    fn ready_state(&self) -> ReadyState;
}

/// Readiness of a video element, ordered from least to most data available.
///
/// Mirrors `HTMLMediaElement.readyState`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReadyState {
    /// No information is available.
    #[default]
    HaveNothing = 0,
    /// Duration and dimensions are known.
    HaveMetadata = 1,
    /// Data for the current position is available, but not beyond it.
    HaveCurrentData = 2,
    /// Data for the current position and at least a little ahead is available.
    HaveFutureData = 3,
    /// Enough data is available to play through.
    HaveEnoughData = 4,
}

impl ReadyState {
    /// Convert a raw `readyState` value. Values above 4 saturate to [`ReadyState::HaveEnoughData`].
    pub const fn from_raw(raw: u16) -> Self {
        match raw {
            0 => Self::HaveNothing,
            1 => Self::HaveMetadata,
            2 => Self::HaveCurrentData,
            3 => Self::HaveFutureData,
            _ => Self::HaveEnoughData,
        }
    }
}

/// A media source whose intrinsic size can be queried.
#[derive(Clone, Copy)]
pub enum Media<'a> {
    /// An image element.
    Image(&'a dyn ImageSource),
    /// A video element.
    Video(&'a dyn VideoSource),
    /// Raw decoded pixels.
    Pixels(&'a PixelBuffer),
}

impl Media<'_> {
    /// Intrinsic pixel size of the media.
    pub fn intrinsic_size(&self) -> Size {
        match self {
            Self::Image(image) => image.natural_size(),
            Self::Video(video) => video.video_size(),
            Self::Pixels(pixels) => pixels.size(),
        }
    }

    /// Whether the media is ready to be drawn.
    ///
    /// Images are loaded once complete; videos once at least
    /// [`ReadyState::HaveFutureData`] is buffered. Pixel buffers have no load
    /// state and yield [`MediaError::InvalidArgument`].
    pub fn is_loaded(&self) -> Result<bool, MediaError> {
        match self {
            Self::Image(image) => Ok(image.is_complete()),
            Self::Video(video) => Ok(video.ready_state() >= ReadyState::HaveFutureData),
            Self::Pixels(_) => Err(MediaError::InvalidArgument(
                "pixel buffers have no load state",
            )),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Image(_) => "Image",
            Self::Video(_) => "Video",
            Self::Pixels(_) => "Pixels",
        }
    }
}

impl fmt::Debug for Media<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Media")
            .field("kind", &self.kind())
            .field("intrinsic_size", &self.intrinsic_size())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Image {
        size: Size,
        complete: bool,
    }

    impl ImageSource for Image {
        fn natural_size(&self) -> Size {
            self.size
        }
        fn is_complete(&self) -> bool {
            self.complete
        }
    }

    struct Video(ReadyState);

    impl VideoSource for Video {
        fn video_size(&self) -> Size {
            Size::new(1280.0, 720.0)
        }
        fn ready_state(&self) -> ReadyState {
            self.0
        }
    }

    #[test]
    fn each_variant_reports_its_own_size() {
        let image = Image {
            size: Size::new(400.0, 200.0),
            complete: false,
        };
        let video = Video(ReadyState::HaveNothing);
        let pixels = PixelBuffer::transparent(3, 2);
        assert_eq!(Media::Image(&image).intrinsic_size(), Size::new(400.0, 200.0));
        assert_eq!(Media::Video(&video).intrinsic_size(), Size::new(1280.0, 720.0));
        assert_eq!(Media::Pixels(&pixels).intrinsic_size(), Size::new(3.0, 2.0));
    }

    #[test]
    fn image_load_follows_complete_flag() {
        let mut image = Image {
            size: Size::ZERO,
            complete: false,
        };
        assert_eq!(Media::Image(&image).is_loaded(), Ok(false));
        image.complete = true;
        assert_eq!(Media::Image(&image).is_loaded(), Ok(true));
    }

    #[test]
    fn video_needs_future_data() {
        let loaded = |raw| Media::Video(&Video(ReadyState::from_raw(raw))).is_loaded();
        assert_eq!(loaded(0), Ok(false));
        assert_eq!(loaded(2), Ok(false));
        assert_eq!(loaded(3), Ok(true));
        assert_eq!(loaded(4), Ok(true));
        assert_eq!(loaded(9), Ok(true));
    }

    #[test]
    fn pixels_have_no_load_state() {
        let pixels = PixelBuffer::transparent(1, 1);
        assert!(matches!(
            Media::Pixels(&pixels).is_loaded(),
            Err(MediaError::InvalidArgument(_))
        ));
    }

    #[test]
    fn debug_names_the_variant() {
        let pixels = PixelBuffer::transparent(1, 1);
        let text = format!("{:?}", Media::Pixels(&pixels));
        assert!(text.contains("Pixels"), "unexpected debug output: {text}");
    }
}
