//! Writing rendered images to disk or any byte sink.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::ImageBuffer;

/// Errors that can occur while writing an image.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Pixel buffer does not hold a {width}x{height} image")]
    BufferSize { width: u32, height: u32 },
}

pub type OutputResult<T> = Result<T, OutputError>;

/// Write `image` as a plain-text (P3) PPM, one pixel per line, top row first.
pub fn write_ppm<W: Write>(image: &ImageBuffer, mut writer: W) -> io::Result<()> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    for colour in &image.pixels {
        let [r, g, b] = colour.to_rgb8();
        writeln!(writer, "{} {} {}", r, g, b)?;
    }

    writer.flush()
}

/// Save `image` to `path`.
///
/// Paths ending in `.ppm` (or with no extension) get a P3 PPM; anything else
/// is encoded by the `image` crate based on its extension.
pub fn save_image<P: AsRef<Path>>(image: &ImageBuffer, path: P) -> OutputResult<()> {
    let path = path.as_ref();
    let is_ppm = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map_or(true, |ext| ext.eq_ignore_ascii_case("ppm"));

    if is_ppm {
        let file = File::create(path)?;
        write_ppm(image, BufWriter::new(file))?;
    } else {
        let rgb = image::RgbImage::from_raw(image.width, image.height, image.to_rgb8()).ok_or(
            OutputError::BufferSize {
                width: image.width,
                height: image.height,
            },
        )?;
        rgb.save(path)?;
    }

    log::info!("Saved {}x{} image to {}", image.width, image.height, path.display());
    Ok(())
}
