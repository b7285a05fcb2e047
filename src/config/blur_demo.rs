use crate::blur::BlurOptions;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// JSON configuration for the `blur_demo` binary.
#[derive(Debug, Deserialize)]
pub struct BlurDemoConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub blur: BlurConfig,
    pub output: DemoOutputConfig,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct BlurConfig {
    pub h_radius: Option<f32>,
    pub v_radius: Option<f32>,
    pub iterations: Option<usize>,
}

impl BlurConfig {
    pub fn resolve(&self) -> BlurOptions {
        let mut opts = BlurOptions::default();
        if let Some(v) = self.h_radius {
            opts.h_radius = v;
        }
        if let Some(v) = self.v_radius {
            opts.v_radius = v;
        }
        if let Some(v) = self.iterations {
            opts.iterations = v;
        }
        opts
    }
}

#[derive(Debug, Deserialize)]
pub struct DemoOutputConfig {
    #[serde(rename = "dir")]
    pub dir: PathBuf,
    #[serde(rename = "image")]
    pub image: PathBuf,
    #[serde(default)]
    pub report_json: Option<PathBuf>,
    /// When set, the output is written as JPEG at this quality instead of PNG.
    #[serde(default)]
    pub jpeg_quality: Option<u8>,
}

impl DemoOutputConfig {
    pub fn image_path(&self) -> PathBuf {
        resolve_path(&self.dir, &self.image)
    }

    pub fn report_path(&self) -> Option<PathBuf> {
        self.report_json.as_ref().map(|p| resolve_path(&self.dir, p))
    }
}

pub fn load_config(path: &Path) -> Result<BlurDemoConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

pub(crate) fn resolve_path(base_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}
