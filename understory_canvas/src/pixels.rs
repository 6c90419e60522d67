// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Packed RGBA pixel buffers.

use alloc::vec;
use alloc::vec::Vec;

use kurbo::Size;

use crate::CanvasError;

const CHANNELS: usize = 4;

/// A packed, row-major RGBA buffer with 4 bytes per pixel.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap `data` as a `width`×`height` buffer.
    ///
    /// Fails if `data` is not exactly `width * height * 4` bytes long.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, CanvasError> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(CHANNELS));
        if expected != Some(data.len()) {
            return Err(CanvasError::BufferSize {
                width,
                height,
                len: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// A fully transparent buffer.
    pub fn transparent(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * CHANNELS],
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Dimensions as a [`Size`].
    pub fn size(&self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }

    /// Raw RGBA bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Raw RGBA bytes, mutably.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the buffer and return its bytes.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// The RGBA value at `(x, y)`, if in bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = (y as usize * self.width as usize + x as usize) * CHANNELS;
        let px = self.data.get(start..start + CHANNELS)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Mirror every row in place.
    pub fn flip_horizontal(&mut self) {
        flip_rows_horizontal(&mut self.data, self.width as usize);
    }
}

/// Mirror each row of a packed RGBA buffer `width` pixels wide, in place.
///
/// Pixels are swapped pairwise from both ends of a row toward its middle; the
/// middle pixel of an odd-width row stays put. Applying it twice is a no-op.
/// Trailing bytes that do not form a whole row are left untouched.
pub fn flip_rows_horizontal(data: &mut [u8], width: usize) {
    if width < 2 {
        return;
    }
    for row in data.chunks_exact_mut(width * CHANNELS) {
        for left in 0..width / 2 {
            let a = left * CHANNELS;
            let b = (width - 1 - left) * CHANNELS;
            for channel in 0..CHANNELS {
                row.swap(a + channel, b + channel);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(width: u32, height: u32) -> PixelBuffer {
        let len = (width * height) as usize * CHANNELS;
        let data = (0..len).map(|i| (i % 251) as u8).collect();
        PixelBuffer::new(width, height, data).unwrap()
    }

    #[test]
    fn new_checks_length() {
        assert!(PixelBuffer::new(2, 2, vec![0; 16]).is_ok());
        assert_eq!(
            PixelBuffer::new(2, 2, vec![0; 15]),
            Err(CanvasError::BufferSize {
                width: 2,
                height: 2,
                len: 15
            })
        );
    }

    #[test]
    fn flip_mirrors_rows() {
        let mut px = numbered(3, 2);
        let before = px.clone();
        px.flip_horizontal();
        for y in 0..2 {
            assert_eq!(px.pixel(0, y), before.pixel(2, y));
            assert_eq!(px.pixel(1, y), before.pixel(1, y));
            assert_eq!(px.pixel(2, y), before.pixel(0, y));
        }
        assert_eq!(px.size(), before.size());
    }

    #[test]
    fn flip_twice_is_identity() {
        for (w, h) in [(1, 1), (2, 3), (5, 4), (8, 1)] {
            let mut px = numbered(w, h);
            let before = px.clone();
            px.flip_horizontal();
            px.flip_horizontal();
            assert_eq!(px, before);
        }
    }

    #[test]
    fn pixel_out_of_bounds_is_none() {
        let px = PixelBuffer::transparent(2, 2);
        assert_eq!(px.pixel(1, 1), Some([0, 0, 0, 0]));
        assert_eq!(px.pixel(2, 0), None);
    }
}
