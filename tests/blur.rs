mod common;

use common::synthetic_image::{checkerboard_argb, gradient_argb, symmetric_argb};
use pixelbox::blur::{blur_fractional, blur_pass, box_blur, BlurOptions};
use pixelbox::image::argb::{alpha, argb};
use pixelbox::ImageArgb;

#[test]
fn uniform_field_is_invariant() {
    let color = argb(255, 75, 150, 200);
    let img = ImageArgb::filled(16, 9, color);

    let out = box_blur(&img, &BlurOptions::default()).unwrap();
    assert!(out.data.iter().all(|&px| px == color));

    let out = box_blur(&img, &BlurOptions::new(2.0).with_iterations(3)).unwrap();
    assert!(out.data.iter().all(|&px| px == color));
}

#[test]
fn zero_radius_zero_iterations_is_identity() {
    let data = gradient_argb(11, 7);
    let img = ImageArgb::from_raw(11, 7, data.clone());
    let out = box_blur(&img, &BlurOptions::new(0.0).with_iterations(0)).unwrap();
    assert_eq!(out.data, data);
}

#[test]
fn zero_radius_single_iteration_is_identity() {
    // Window width 1: the division table divides by one.
    let data = gradient_argb(9, 5);
    let img = ImageArgb::from_raw(9, 5, data.clone());
    let out = box_blur(&img, &BlurOptions::new(0.0)).unwrap();
    assert_eq!(out.data, data);
}

#[test]
fn three_by_three_seed_case_matches_hand_computation() {
    // Gray values; radius 1 gives a 3-wide window with truncating division
    // and clamped edges. The expected buffer is the box average computed by
    // hand, e.g. top-left = ((10+10+20)/3 twice vertically with clamping).
    let gray = |v: u32| argb(255, v, v, v);
    let input: Vec<u32> = [10, 20, 30, 40, 50, 60, 70, 80, 90]
        .iter()
        .map(|&v| gray(v))
        .collect();
    let expected: Vec<u32> = [23, 30, 36, 43, 50, 56, 63, 70, 76]
        .iter()
        .map(|&v| gray(v))
        .collect();

    let img = ImageArgb::from_raw(3, 3, input);
    let out = box_blur(&img, &BlurOptions::new(1.0)).unwrap();
    assert_eq!(out.data, expected);
}

#[test]
fn fractional_pass_anchors_row_boundaries() {
    let (w, h) = (7usize, 5usize);
    let input = gradient_argb(w, h);
    let mut output = vec![0u32; w * h];
    blur_fractional(&input, &mut output, w, h, 2.5);

    // Output is transposed: row y of the input lands in column y.
    for y in 0..h {
        assert_eq!(output[y], input[y * w], "first pixel of row {y} moved");
        assert_eq!(
            output[y + (w - 1) * h],
            input[y * w + w - 1],
            "last pixel of row {y} moved"
        );
    }
}

#[test]
fn iterations_compose_via_buffer_swap() {
    let (w, h) = (12usize, 10usize);
    let data = checkerboard_argb(w, h, 3);
    let opts = BlurOptions::new(2.5).with_iterations(2);

    // Manually composed pass sequence: two box pass pairs sharing the same
    // front/back buffers, then one fractional pass per axis.
    let mut front = data.clone();
    let mut back = vec![0u32; w * h];
    for _ in 0..2 {
        blur_pass(&front, &mut back, w, h, opts.h_radius).unwrap();
        blur_pass(&back, &mut front, h, w, opts.v_radius).unwrap();
    }
    blur_fractional(&front, &mut back, w, h, opts.h_radius);
    blur_fractional(&back, &mut front, h, w, opts.v_radius);

    let img = ImageArgb::from_raw(w, h, data.clone());
    let once = box_blur(&img, &opts).unwrap();
    assert_eq!(once.data, front);

    // Two independent full calls run the fractional correction twice, which
    // is not the same operation.
    let single = BlurOptions::new(2.5);
    let twice = box_blur(&box_blur(&img, &single).unwrap(), &single).unwrap();
    assert_ne!(twice.data, once.data);
}

#[test]
fn symmetric_input_stays_symmetric() {
    // Axis order must not matter for transpose-symmetric inputs with equal
    // radii; the generator keeps every window sum divisible by the window
    // width so the check is exact.
    let side = 9usize;
    let img = ImageArgb::from_raw(side, side, symmetric_argb(side));
    let out = box_blur(&img, &BlurOptions::new(1.0)).unwrap();
    for y in 0..side {
        for x in 0..side {
            assert_eq!(out.get(x, y), out.get(y, x), "asymmetry at ({x}, {y})");
        }
    }
}

#[test]
fn opaque_alpha_survives_blurring() {
    let img = ImageArgb::from_raw(10, 6, gradient_argb(10, 6));
    let out = box_blur(&img, &BlurOptions::new(3.0).with_iterations(2)).unwrap();
    assert!(out.data.iter().all(|&px| alpha(px) == 255));
}
