//! Separable box-blur over packed ARGB pixel buffers.
//!
//! # Overview
//!
//! Each [`blur_pass`] runs a moving-window average of width `2r + 1` along
//! the rows of its input and writes the result transposed, so running the
//! pass twice (swapping the width/height arguments) blurs both axes and
//! restores the original orientation. [`box_blur`] repeats that pair for a
//! configurable number of iterations and finishes with one
//! [`blur_fractional`] pass per axis, which blends each pixel with its two
//! immediate neighbours weighted by the fractional remainder of the radius.
//!
//! Channel sums accumulate as integers and divide through a precomputed
//! `256 × (2r + 1)` lookup table (truncating). Window sampling clamps
//! out-of-range indices to the row bounds.

use super::options::BlurOptions;
use crate::error::Error;
use crate::image::argb::{alpha, argb, blue, green, red, try_buffer, try_clone_buffer};
use crate::image::ImageArgb;
use log::debug;
use serde::Serialize;
use std::time::Instant;

/// Single moving-window pass along rows, output written transposed.
///
/// `input` and `output` must both hold exactly `width * height` pixels;
/// `output` is indexed as a `height × width` image afterwards. Fails with
/// [`Error::Allocation`] when the division table for the requested radius
/// cannot be allocated.
pub fn blur_pass(
    input: &[u32],
    output: &mut [u32],
    width: usize,
    height: usize,
    radius: f32,
) -> Result<(), Error> {
    assert_eq!(input.len(), width * height, "input buffer length mismatch");
    assert_eq!(output.len(), width * height, "output buffer length mismatch");
    assert!(radius >= 0.0, "blur radius must be non-negative");
    if width == 0 || height == 0 {
        return Ok(());
    }

    let r = radius as usize;
    let divide = divide_table(r)?;

    let width_minus_1 = width - 1;
    let mut in_index = 0usize;
    for y in 0..height {
        let mut out_index = y;
        let (mut ta, mut tr, mut tg, mut tb) = (0i32, 0i32, 0i32, 0i32);

        for i in -(r as isize)..=(r as isize) {
            let px = input[in_index + clamp(i, 0, width_minus_1 as isize)];
            ta += alpha(px) as i32;
            tr += red(px) as i32;
            tg += green(px) as i32;
            tb += blue(px) as i32;
        }

        for x in 0..width {
            output[out_index] = argb(
                divide[ta as usize],
                divide[tr as usize],
                divide[tg as usize],
                divide[tb as usize],
            );

            let i1 = (x + r + 1).min(width_minus_1);
            let i2 = x.saturating_sub(r);
            let px1 = input[in_index + i1];
            let px2 = input[in_index + i2];
            ta += alpha(px1) as i32 - alpha(px2) as i32;
            tr += red(px1) as i32 - red(px2) as i32;
            tg += green(px1) as i32 - green(px2) as i32;
            tb += blue(px1) as i32 - blue(px2) as i32;

            out_index += height;
        }
        in_index += width;
    }
    Ok(())
}

/// Build the truncating division table for a `2r + 1` moving window.
///
/// The table holds `256 × (2r + 1)` entries and goes through the same
/// fallible-allocation path as the pixel buffers, so an oversized radius
/// surfaces as [`Error::Allocation`] instead of aborting.
fn divide_table(r: usize) -> Result<Vec<u32>, Error> {
    let entries = r
        .checked_mul(2)
        .and_then(|w| w.checked_add(1))
        .and_then(|w| w.checked_mul(256))
        .ok_or(Error::Allocation { pixels: usize::MAX })?;
    let window = 2 * r + 1;
    let mut divide = Vec::new();
    divide
        .try_reserve_exact(entries)
        .map_err(|_| Error::Allocation { pixels: entries })?;
    divide.extend((0..entries).map(|i| (i / window) as u32));
    Ok(divide)
}

/// Fractional-radius correction pass, output written transposed.
///
/// Blends each interior pixel with its two row neighbours weighted by the
/// fractional remainder of `radius`, normalized by `1 / (1 + 2f)`. The
/// first and last pixel of every row are copied verbatim.
pub fn blur_fractional(
    input: &[u32],
    output: &mut [u32],
    width: usize,
    height: usize,
    radius: f32,
) {
    assert_eq!(input.len(), width * height, "input buffer length mismatch");
    assert_eq!(output.len(), width * height, "output buffer length mismatch");
    if width == 0 || height == 0 {
        return;
    }

    let frac = radius - radius.trunc();
    let norm = 1.0 / (1.0 + 2.0 * frac);

    let mut in_index = 0usize;
    for y in 0..height {
        let mut out_index = y;
        output[out_index] = input[in_index];
        if width == 1 {
            in_index += width;
            continue;
        }
        out_index += height;

        for x in 1..width - 1 {
            let i = in_index + x;
            let px1 = input[i - 1];
            let px2 = input[i];
            let px3 = input[i + 1];

            output[out_index] = argb(
                mix(alpha(px1), alpha(px2), alpha(px3), frac, norm),
                mix(red(px1), red(px2), red(px3), frac, norm),
                mix(green(px1), green(px2), green(px3), frac, norm),
                mix(blue(px1), blue(px2), blue(px3), frac, norm),
            );
            out_index += height;
        }

        output[out_index] = input[in_index + width - 1];
        in_index += width;
    }
}

/// Integer blend of one channel with truncating arithmetic.
#[inline]
fn mix(c1: u32, c2: u32, c3: u32, frac: f32, norm: f32) -> u32 {
    let blended = c2 as i32 + ((c1 + c3) as f32 * frac) as i32;
    (blended as f32 * norm) as u32
}

#[inline]
fn clamp(x: isize, lo: isize, hi: isize) -> usize {
    x.clamp(lo, hi) as usize
}

/// Blur an ARGB image with the separable box filter.
///
/// Runs `iterations` horizontal+vertical box passes followed by one
/// fractional-radius correction pass per axis. Working buffers are local
/// to the call; allocation failure surfaces as [`Error::Allocation`] and
/// the caller treats the blur as unavailable.
pub fn box_blur(src: &ImageArgb, opts: &BlurOptions) -> Result<ImageArgb, Error> {
    assert_eq!(
        src.data.len(),
        src.w * src.h,
        "pixel buffer length must equal width * height"
    );
    let (w, h) = (src.w, src.h);
    debug!(
        "box blur: {}x{} radius=({}, {}) iterations={}",
        w, h, opts.h_radius, opts.v_radius, opts.iterations
    );

    let mut front = try_clone_buffer(&src.data)?;
    let mut back = try_buffer(w * h)?;

    for _ in 0..opts.iterations {
        blur_pass(&front, &mut back, w, h, opts.h_radius)?;
        blur_pass(&back, &mut front, h, w, opts.v_radius)?;
    }
    blur_fractional(&front, &mut back, w, h, opts.h_radius);
    blur_fractional(&back, &mut front, h, w, opts.v_radius);

    Ok(ImageArgb {
        w,
        h,
        stride: w,
        data: front,
    })
}

/// Blur result with wall-clock timing, for demo tooling and reports.
#[derive(Clone, Debug, Serialize)]
pub struct BlurReport {
    #[serde(skip)]
    pub image: ImageArgb,
    pub width: usize,
    pub height: usize,
    pub elapsed_ms: f64,
}

/// Run [`box_blur`] and record how long it took.
pub fn box_blur_timed(src: &ImageArgb, opts: &BlurOptions) -> Result<BlurReport, Error> {
    let start = Instant::now();
    let image = box_blur(src, opts)?;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    Ok(BlurReport {
        width: image.w,
        height: image.h,
        elapsed_ms,
        image,
    })
}
