use pixelbox::image::argb::argb;

/// Generates a two-colour checkerboard ARGB buffer.
pub fn checkerboard_argb(width: usize, height: usize, cell: usize) -> Vec<u32> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    let dark = argb(255, 32, 32, 32);
    let light = argb(255, 220, 220, 220);
    let mut img = vec![0u32; width * height];
    for y in 0..height {
        for x in 0..width {
            let sum = x / cell + y / cell;
            img[y * width + x] = if sum & 1 == 0 { dark } else { light };
        }
    }
    img
}

/// Opaque diagonal gradient with distinct channel ramps.
pub fn gradient_argb(width: usize, height: usize) -> Vec<u32> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");

    let mut img = vec![0u32; width * height];
    for y in 0..height {
        for x in 0..width {
            let r = (255 * x / width) as u32;
            let g = (255 * y / height) as u32;
            let b = (255 * (x + y) / (width + height)) as u32;
            img[y * width + x] = argb(255, r, g, b);
        }
    }
    img
}

/// Transpose-symmetric gray image whose radius-1 window sums stay divisible
/// by three, so the box pass divides without truncation.
pub fn symmetric_argb(side: usize) -> Vec<u32> {
    assert!(side > 0 && side < 43, "side must keep 3*(x+y) within 0-255");

    let mut img = vec![0u32; side * side];
    for y in 0..side {
        for x in 0..side {
            let v = 3 * (x + y) as u32;
            img[y * side + x] = argb(255, v, v, v);
        }
    }
    img
}
