//! 8-bit images: a borrowed single-channel view and an owned gray/RGB buffer.
use super::traits::{ImageView, ImageViewMut};
use crate::error::RasterError;
use crate::types::Color8u;

/// Borrowed single-channel 8-bit view with an explicit row stride.
#[derive(Clone, Debug)]
pub struct ImageU8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // bytes between rows
    pub data: &'a [u8],
}

impl<'a> ImageU8<'a> {
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.stride + x]
    }
}

impl<'a> ImageView for ImageU8<'a> {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[u8]> {
        (self.stride == self.w).then_some(&self.data[..self.w * self.h])
    }
}

/// Samples per pixel of an [`Image8u`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channels {
    Gray,
    Rgb,
}

impl Channels {
    pub fn from_count(n: usize) -> Result<Self, RasterError> {
        match n {
            1 => Ok(Channels::Gray),
            3 => Ok(Channels::Rgb),
            found => Err(RasterError::UnsupportedChannels { found }),
        }
    }

    #[inline]
    pub fn count(self) -> usize {
        match self {
            Channels::Gray => 1,
            Channels::Rgb => 3,
        }
    }
}

/// Owned row-major 8-bit image with 1 or 3 interleaved channels
/// (stride == width * channels).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image8u {
    width: usize,
    height: usize,
    channels: Channels,
    data: Vec<u8>,
}

impl Image8u {
    /// Zero-initialized buffer of size `width × height`.
    ///
    /// Panics when the sample count overflows `usize`; use
    /// [`try_new`](Self::try_new) for sizes from untrusted input.
    pub fn new(width: usize, height: usize, channels: Channels) -> Self {
        let len = sample_count(width, height, channels)
            .unwrap_or_else(|| panic!("image {width}x{height} is too large"));
        Self {
            width,
            height,
            channels,
            data: vec![0; len],
        }
    }

    /// Zero-initialized buffer; both sides must fit `i32` coordinates and the
    /// sample count must fit `usize`.
    pub fn try_new(width: usize, height: usize, channels: Channels) -> Result<Self, RasterError> {
        let too_large = RasterError::ImageTooLarge { width, height };
        if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
            return Err(too_large);
        }
        let len = sample_count(width, height, channels).ok_or(too_large)?;
        Ok(Self {
            width,
            height,
            channels,
            data: vec![0; len],
        })
    }

    /// Wrap raw interleaved samples; `data.len()` must equal
    /// `width * height * channels`.
    pub fn from_raw(
        width: usize,
        height: usize,
        channels: Channels,
        data: Vec<u8>,
    ) -> Result<Self, RasterError> {
        let expected = sample_count(width, height, channels)
            .ok_or(RasterError::ImageTooLarge { width, height })?;
        if data.len() != expected {
            return Err(RasterError::DataLength {
                expected,
                found: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// Filled RGB buffer.
    pub fn filled_rgb(width: usize, height: usize, color: Color8u) -> Self {
        let mut img = Self::new(width, height, Channels::Rgb);
        img.fill(color);
        img
    }

    #[inline]
    pub fn channel_layout(&self) -> Channels {
        self.channels
    }

    #[inline]
    pub fn channel_count(&self) -> usize {
        self.channels.count()
    }

    /// Interleaved samples in row-major order.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    #[inline]
    fn idx(&self, x: usize, y: usize, c: usize) -> usize {
        (y * self.width + x) * self.channels.count() + c
    }

    #[inline]
    fn in_bounds(&self, x: usize, y: usize, c: usize) -> bool {
        x < self.width && y < self.height && c < self.channels.count()
    }

    /// Sample at column `x`, row `y`, channel `c`.
    #[inline]
    pub fn get(&self, x: usize, y: usize, c: usize) -> Option<u8> {
        self.in_bounds(x, y, c).then(|| self.data[self.idx(x, y, c)])
    }

    pub fn set(&mut self, x: usize, y: usize, c: usize, v: u8) -> Result<(), RasterError> {
        if !self.in_bounds(x, y, c) {
            return Err(RasterError::SampleOutOfBounds { x, y, channel: c });
        }
        let i = self.idx(x, y, c);
        self.data[i] = v;
        Ok(())
    }

    /// All samples of pixel `(x, y)`.
    pub fn pixel(&self, x: usize, y: usize) -> Option<&[u8]> {
        if !self.in_bounds(x, y, 0) {
            return None;
        }
        let start = self.idx(x, y, 0);
        Some(&self.data[start..start + self.channels.count()])
    }

    /// Write an RGB color; the buffer must have three channels.
    pub fn set_rgb(&mut self, x: usize, y: usize, color: Color8u) -> Result<(), RasterError> {
        self.require_rgb()?;
        if !self.in_bounds(x, y, 0) {
            return Err(RasterError::SampleOutOfBounds { x, y, channel: 0 });
        }
        let start = self.idx(x, y, 0);
        self.data[start..start + 3].copy_from_slice(&color.as_array());
        Ok(())
    }

    /// Fill every pixel; gray buffers take the color's luma.
    pub fn fill(&mut self, color: Color8u) {
        match self.channels {
            Channels::Gray => {
                let v = color.luma().round().clamp(0.0, 255.0) as u8;
                self.data.fill(v);
            }
            Channels::Rgb => {
                for px in self.data.chunks_exact_mut(3) {
                    px.copy_from_slice(&color.as_array());
                }
            }
        }
    }

    pub(crate) fn require_rgb(&self) -> Result<(), RasterError> {
        if self.channels != Channels::Rgb {
            return Err(RasterError::ChannelMismatch {
                expected: 3,
                found: self.channels.count(),
            });
        }
        Ok(())
    }

    /// Borrow a single-channel buffer as an [`ImageU8`] view.
    pub fn as_gray_view(&self) -> Option<ImageU8<'_>> {
        (self.channels == Channels::Gray).then(|| ImageU8 {
            w: self.width,
            h: self.height,
            stride: self.width,
            data: &self.data,
        })
    }
}

fn sample_count(width: usize, height: usize, channels: Channels) -> Option<usize> {
    width.checked_mul(height)?.checked_mul(channels.count())
}

impl ImageView for Image8u {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.width
    }
    #[inline]
    fn height(&self) -> usize {
        self.height
    }
    #[inline]
    fn stride(&self) -> usize {
        self.width * self.channels.count()
    }
    #[inline]
    fn channels(&self) -> usize {
        self.channels.count()
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride();
        &self.data[start..start + self.stride()]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[u8]> {
        Some(&self.data)
    }
}

impl ImageViewMut for Image8u {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let stride = self.stride();
        let start = y * stride;
        &mut self.data[start..start + stride]
    }
}
