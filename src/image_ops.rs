//! Image rendering for live previews.

use std::io::Cursor;
use std::path::Path;

use base64::Engine;
use clap::ValueEnum;
use image::{ImageFormat, RgbImage, imageops::FilterType};

use crate::color::Rgb;
use crate::error::{Result, WledError};

/// How to enlarge a rendered strip.
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum ScaleFilter {
    /// Hard pixel edges, one block per LED.
    #[default]
    Nearest,
    /// Smooth blending between neighbouring LEDs.
    Smooth,
}

impl ScaleFilter {
    const fn filter_type(self) -> FilterType {
        match self {
            Self::Nearest => FilterType::Nearest,
            Self::Smooth => FilterType::Triangle,
        }
    }
}

/// One pixel per color, newest row at the top.
///
/// Rows narrower than `width` are padded with black.
#[must_use]
pub fn render_rows<'a, I>(rows: I, width: usize) -> RgbImage
where
    I: IntoIterator<Item = &'a [Rgb]>,
{
    let rows: Vec<&[Rgb]> = rows.into_iter().collect();
    let mut img = RgbImage::new(to_u32(width), to_u32(rows.len()));
    for (y, row) in rows.iter().enumerate() {
        for (x, color) in row.iter().take(width).enumerate() {
            img.put_pixel(to_u32(x), to_u32(y), (*color).into());
        }
    }
    img
}

/// Enlarge every pixel to a `factor` x `factor` block.
///
/// # Errors
///
/// Returns an error if the enlarged size does not fit in `u32`.
pub fn scale(img: &RgbImage, factor: u32, filter: ScaleFilter) -> Result<RgbImage> {
    if factor <= 1 {
        return Ok(img.clone());
    }
    let (width, height) = img
        .width()
        .checked_mul(factor)
        .zip(img.height().checked_mul(factor))
        .ok_or_else(|| {
            WledError::InvalidArgument(format!(
                "scale {factor} is too large for a {}x{} image",
                img.width(),
                img.height()
            ))
        })?;
    Ok(image::imageops::resize(img, width, height, filter.filter_type()))
}

/// Encode as PNG.
///
/// # Errors
///
/// Returns an error for empty images or if encoding fails.
pub fn encode_png(img: &RgbImage) -> Result<Vec<u8>> {
    if img.width() == 0 || img.height() == 0 {
        return Err(WledError::InvalidArgument(
            "cannot encode an empty image".to_string(),
        ));
    }
    let mut bytes = Cursor::new(Vec::new());
    img.write_to(&mut bytes, ImageFormat::Png)?;
    Ok(bytes.into_inner())
}

/// `data:image/png;base64,...` for embedding in HTML.
///
/// # Errors
///
/// Same as [`encode_png`].
pub fn png_data_url(img: &RgbImage) -> Result<String> {
    let png = encode_png(img)?;
    Ok(format!(
        "data:image/png;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(png)
    ))
}

/// Write a PNG file.
///
/// # Errors
///
/// Returns an error if the image is empty or the file cannot be written.
pub fn save_png(img: &RgbImage, path: &Path) -> Result<()> {
    let png = encode_png(img)?;
    std::fs::write(path, png)?;
    Ok(())
}

fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
