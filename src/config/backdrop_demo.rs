use super::blur_demo::resolve_path;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// JSON configuration for the `backdrop_demo` binary.
#[derive(Debug, Deserialize)]
pub struct BackdropDemoConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    pub width: usize,
    pub height: usize,
    pub output: BackdropOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct BackdropOutputConfig {
    #[serde(rename = "dir")]
    pub dir: PathBuf,
    #[serde(rename = "image")]
    pub image: PathBuf,
}

impl BackdropOutputConfig {
    pub fn image_path(&self) -> PathBuf {
        resolve_path(&self.dir, &self.image)
    }
}

pub fn load_config(path: &Path) -> Result<BackdropDemoConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
