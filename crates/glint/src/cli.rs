use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use glint_renderer::{ImageConfig, DEFAULT_SEED};
use log::LevelFilter;

/// Log levels accepted on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "glint")]
#[command(about = "Path trace a Cornell box to a PPM or PNG image")]
pub struct Args {
    /// Output image; `.ppm` writes plain-text PPM, `-` writes PPM to stdout
    #[arg(default_value = "render.ppm")]
    pub output: PathBuf,

    /// Image width in pixels, height follows from the 16:9 aspect ratio
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Number of samples per pixel
    #[arg(long, short = 's', default_value_t = 50)]
    pub samples: u32,

    /// Seed for the random number generator
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// OBJ mesh to add to the scene
    #[arg(long)]
    pub mesh: Option<PathBuf>,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

impl Args {
    /// Whether the image goes to stdout instead of a file.
    pub fn writes_to_stdout(&self) -> bool {
        self.output.as_os_str() == "-"
    }

    /// Image settings for `aspect_ratio`, rejecting zero samples and empty images.
    pub fn image_config(&self, aspect_ratio: f32) -> anyhow::Result<ImageConfig> {
        anyhow::ensure!(self.samples > 0, "--samples must be at least 1");

        let image = ImageConfig::new(aspect_ratio, self.width, self.samples);
        anyhow::ensure!(
            image.width > 0 && image.height > 0,
            "Image size {}x{} is empty",
            image.width,
            image.height
        );
        Ok(image)
    }
}
