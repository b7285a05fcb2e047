//! Owned ARGB image in row-major layout (stride == width).
//!
//! Pixels are packed `0xAARRGGBB` integers. Construction through
//! [`ImageArgb::try_new`] goes through fallible allocation so that callers
//! can treat memory exhaustion as "operation unavailable" instead of an
//! abort.

use crate::error::Error;

/// Extract the alpha channel of a packed ARGB pixel.
#[inline]
pub fn alpha(px: u32) -> u32 {
    (px >> 24) & 0xff
}

/// Extract the red channel of a packed ARGB pixel.
#[inline]
pub fn red(px: u32) -> u32 {
    (px >> 16) & 0xff
}

/// Extract the green channel of a packed ARGB pixel.
#[inline]
pub fn green(px: u32) -> u32 {
    (px >> 8) & 0xff
}

/// Extract the blue channel of a packed ARGB pixel.
#[inline]
pub fn blue(px: u32) -> u32 {
    px & 0xff
}

/// Pack four 0-255 channel values into one ARGB pixel.
#[inline]
pub fn argb(a: u32, r: u32, g: u32, b: u32) -> u32 {
    (a << 24) | (r << 16) | (g << 8) | b
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageArgb {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Number of u32 elements between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<u32>,
}

impl ImageArgb {
    /// Construct a zero-initialized (fully transparent) buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![0; w * h],
        }
    }

    /// Fallible counterpart of [`ImageArgb::new`].
    pub fn try_new(w: usize, h: usize) -> Result<Self, Error> {
        let data = try_buffer(w * h)?;
        Ok(Self {
            w,
            h,
            stride: w,
            data,
        })
    }

    /// Wrap an existing pixel buffer.
    ///
    /// The buffer length must equal `w × h`; violating this is a programmer
    /// error and fails fast.
    pub fn from_raw(w: usize, h: usize, data: Vec<u32>) -> Self {
        assert_eq!(
            data.len(),
            w * h,
            "pixel buffer length must equal width * height"
        );
        Self {
            w,
            h,
            stride: w,
            data,
        }
    }

    /// Uniform single-colour image.
    pub fn filled(w: usize, h: usize, color: u32) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![color; w * h],
        }
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }

    #[inline]
    /// Get the pixel value at (x, y).
    pub fn get(&self, x: usize, y: usize) -> u32 {
        self.data[self.idx(x, y)]
    }

    #[inline]
    /// Set the pixel value at (x, y).
    pub fn set(&mut self, x: usize, y: usize, v: u32) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }
}

impl crate::image::traits::ImageView for ImageArgb {
    type Pixel = u32;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[u32] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}

impl crate::image::traits::ImageViewMut for ImageArgb {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [u32] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }
}

/// Allocate a zeroed pixel buffer, surfacing exhaustion as [`Error::Allocation`].
pub(crate) fn try_buffer(pixels: usize) -> Result<Vec<u32>, Error> {
    let mut data = Vec::new();
    data.try_reserve_exact(pixels)
        .map_err(|_| Error::Allocation { pixels })?;
    data.resize(pixels, 0);
    Ok(data)
}

/// Clone a pixel buffer through fallible allocation.
pub(crate) fn try_clone_buffer(src: &[u32]) -> Result<Vec<u32>, Error> {
    let mut data = Vec::new();
    data.try_reserve_exact(src.len()).map_err(|_| Error::Allocation {
        pixels: src.len(),
    })?;
    data.extend_from_slice(src);
    Ok(data)
}
