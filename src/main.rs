use pixelbox::image::argb::argb;
use pixelbox::{box_blur_timed, BlurOptions, ImageArgb};

fn main() {
    env_logger::init();

    // Demo stub: blurs a synthetic gradient and prints the timing.
    let w = 640usize;
    let h = 480usize;
    let mut img = ImageArgb::new(w, h);
    for y in 0..h {
        for x in 0..w {
            let r = (255 * x / w.max(1)) as u32;
            let g = (255 * y / h.max(1)) as u32;
            img.set(x, y, argb(255, r, g, 128));
        }
    }

    match box_blur_timed(&img, &BlurOptions::default().with_iterations(3)) {
        Ok(report) => println!(
            "blurred {}x{} in {:.3} ms",
            report.width, report.height, report.elapsed_ms
        ),
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}
