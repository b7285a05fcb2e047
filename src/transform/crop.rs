//! Rectangular cropping.

use crate::error::Error;
use crate::image::{ImageArgb, ImageView, ImageViewMut};
use serde::{Deserialize, Serialize};

/// Axis-aligned pixel rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: usize,
    pub y: usize,
    pub w: usize,
    pub h: usize,
}

impl Rect {
    pub fn new(x: usize, y: usize, w: usize, h: usize) -> Self {
        Self { x, y, w, h }
    }
}

/// Copy out a sub-rectangle of the image.
pub fn crop(src: &ImageArgb, rect: Rect) -> Result<ImageArgb, Error> {
    assert!(rect.w > 0 && rect.h > 0, "crop rectangle must be non-empty");
    if rect.x + rect.w > src.w || rect.y + rect.h > src.h {
        return Err(Error::CropOutOfBounds {
            x: rect.x,
            y: rect.y,
            w: rect.w,
            h: rect.h,
            width: src.w,
            height: src.h,
        });
    }

    let mut out = ImageArgb::try_new(rect.w, rect.h)?;
    for y in 0..rect.h {
        let src_row = &src.row(rect.y + y)[rect.x..rect.x + rect.w];
        out.row_mut(y).copy_from_slice(src_row);
    }
    Ok(out)
}

/// Crop a centred `cw × ch` region, shrinking the request to the image
/// bounds when necessary.
pub fn center_crop(src: &ImageArgb, cw: usize, ch: usize) -> Result<ImageArgb, Error> {
    let cw = cw.min(src.w);
    let ch = ch.min(src.h);
    let x = (src.w - cw) / 2;
    let y = (src.h - ch) / 2;
    crop(src, Rect::new(x, y, cw, ch))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crop_copies_expected_region() {
        let mut src = ImageArgb::new(4, 4);
        for (i, px) in src.data.iter_mut().enumerate() {
            *px = i as u32;
        }
        let out = crop(&src, Rect::new(1, 2, 2, 2)).unwrap();
        assert_eq!(out.data, vec![9, 10, 13, 14]);
    }

    #[test]
    fn out_of_bounds_rect_is_rejected() {
        let src = ImageArgb::new(4, 4);
        let err = crop(&src, Rect::new(3, 0, 2, 2)).unwrap_err();
        assert!(matches!(err, Error::CropOutOfBounds { .. }));
    }

    #[test]
    fn center_crop_clamps_to_image() {
        let src = ImageArgb::new(4, 4);
        let out = center_crop(&src, 10, 2).unwrap();
        assert_eq!((out.w, out.h), (4, 2));
    }
}
