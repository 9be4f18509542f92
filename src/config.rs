use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub renderer: RendererConfig,
    pub video: VideoConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RendererConfig {
    pub output_dir: PathBuf,
    pub frame_format: String, // "png" or "ppm"
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct VideoConfig {
    pub default_resolution: String,
    pub default_fps: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            renderer: RendererConfig {
                output_dir: PathBuf::from("output"),
                frame_format: "png".to_string(),
            },
            video: VideoConfig {
                default_resolution: "1920x1080".to_string(),
                default_fps: 30,
            },
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .set_default("renderer.output_dir", "output")?
            .set_default("renderer.frame_format", "png")?
            .set_default("video.default_resolution", "1920x1080")?
            .set_default("video.default_fps", 30)?
            // Load from file if exists
            .add_source(config::File::with_name("lucent").required(false))
            // Allow env var overrides (e.g. LUCENT_VIDEO__DEFAULT_FPS=60)
            .add_source(config::Environment::with_prefix("LUCENT").separator("__"));

        builder.build()?.try_deserialize()
    }

    /// Write the default configuration as a TOML file
    pub fn write_default(path: &Path) -> Result<()> {
        let rendered = toml::to_string_pretty(&AppConfig::default())
            .context("Failed to serialize default config")?;
        std::fs::write(path, rendered)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }
}

/// Output resolution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resolution(pub String); // e.g., "1920x1080", "1280x720"

impl Resolution {
    pub fn dimensions(&self) -> (u32, u32) {
        let parts: Vec<&str> = self.0.split('x').collect();
        if parts.len() == 2 {
            let width = parts[0].parse().unwrap_or(1920);
            let height = parts[1].parse().unwrap_or(1080);
            (width, height)
        } else {
            (1920, 1080) // Default to 1080p
        }
    }
}
