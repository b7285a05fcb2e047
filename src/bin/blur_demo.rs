use pixelbox::blur::box_blur_timed;
use pixelbox::config::blur_demo as config;
use pixelbox::image::io::{load_argb, save_jpeg, save_png, write_json_file};
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args()
        .nth(1)
        .ok_or_else(|| "Usage: blur_demo <config.json>".to_string())?;
    let config = config::load_config(Path::new(&config_path))?;

    let src = load_argb(&config.input).map_err(|e| e.to_string())?;
    let opts = config.blur.resolve();
    let report = box_blur_timed(&src, &opts).map_err(|e| e.to_string())?;
    println!(
        "blurred {}x{} in {:.3} ms",
        report.width, report.height, report.elapsed_ms
    );

    let image_path = config.output.image_path();
    match config.output.jpeg_quality {
        Some(quality) => save_jpeg(&report.image, &image_path, quality),
        None => save_png(&report.image, &image_path),
    }
    .map_err(|e| e.to_string())?;

    if let Some(report_path) = config.output.report_path() {
        write_json_file(&report_path, &report).map_err(|e| e.to_string())?;
    }
    Ok(())
}
