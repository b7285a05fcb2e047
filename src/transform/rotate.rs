//! Quarter-turn rotation and EXIF orientation mapping.

use crate::error::Error;
use crate::image::ImageArgb;
use serde::{Deserialize, Serialize};

/// Clockwise quarter-turn rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rotation {
    Cw90,
    Cw180,
    Cw270,
}

impl Rotation {
    /// Map an angle in degrees to a quarter turn. Returns `None` for zero
    /// or non-quarter angles.
    pub fn from_degrees(angle: i32) -> Option<Rotation> {
        match angle.rem_euclid(360) {
            90 => Some(Rotation::Cw90),
            180 => Some(Rotation::Cw180),
            270 => Some(Rotation::Cw270),
            _ => None,
        }
    }

    /// Map an EXIF orientation tag to the rotation that uprights the image.
    pub fn from_exif_orientation(orientation: u16) -> Option<Rotation> {
        match orientation {
            3 => Some(Rotation::Cw180),
            6 => Some(Rotation::Cw90),
            8 => Some(Rotation::Cw270),
            _ => None,
        }
    }

    pub fn degrees(self) -> i32 {
        match self {
            Rotation::Cw90 => 90,
            Rotation::Cw180 => 180,
            Rotation::Cw270 => 270,
        }
    }
}

/// Rotate an image clockwise by a quarter turn.
pub fn rotate(src: &ImageArgb, rotation: Rotation) -> Result<ImageArgb, Error> {
    let (w, h) = (src.w, src.h);
    let mut out = match rotation {
        Rotation::Cw90 | Rotation::Cw270 => ImageArgb::try_new(h, w)?,
        Rotation::Cw180 => ImageArgb::try_new(w, h)?,
    };

    for y in 0..h {
        for x in 0..w {
            let px = src.get(x, y);
            match rotation {
                Rotation::Cw90 => out.set(h - 1 - y, x, px),
                Rotation::Cw180 => out.set(w - 1 - x, h - 1 - y, px),
                Rotation::Cw270 => out.set(y, w - 1 - x, px),
            }
        }
    }
    Ok(out)
}
