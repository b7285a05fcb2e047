use pixelbox::config::backdrop_demo as config;
use pixelbox::effects::detail_backdrop;
use pixelbox::image::io::{load_argb, save_png};
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
        .ok_or_else(|| "Usage: backdrop_demo <config.json>".to_string())?;
    let config = config::load_config(Path::new(&config_path))?;

    let src = load_argb(&config.input).map_err(|e| e.to_string())?;
    let backdrop =
        detail_backdrop(&src, config.width, config.height).map_err(|e| e.to_string())?;
    save_png(&backdrop, &config.output.image_path()).map_err(|e| e.to_string())?;
    println!(
        "backdrop {}x{} written to {}",
        backdrop.w,
        backdrop.h,
        config.output.image_path().display()
    );
    Ok(())
}
