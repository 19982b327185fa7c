use crate::config::ImageLimits;
use anyhow::Context as _;
use egui::ColorImage;
use image::{GenericImageView, ImageReader, Limits, RgbaImage};
use std::io::{BufRead, Read, Seek};
use std::path::Path;

fn decode_reader_to_rgba<R>(
    limits: &ImageLimits,
    mut reader: ImageReader<R>,
) -> anyhow::Result<RgbaImage>
where
    R: Read + Seek + BufRead,
{
    let il = limits.sanitized();
    let mut decode_limits = Limits::default();
    decode_limits.max_image_width = Some(il.image_dim);
    decode_limits.max_image_height = Some(il.image_dim);
    decode_limits.max_alloc = Some(il.alloc_bytes);
    reader.limits(decode_limits);
    let img = reader.decode().context("Failed to decode image data")?;

    let (w, h) = img.dimensions();
    let total_pixels = u64::from(w) * u64::from(h);
    if total_pixels > il.total_pixels {
        anyhow::bail!(
            "Image too large: {}x{} (~{} MP) exceeds limit (~{} MP)",
            w,
            h,
            total_pixels / 1_000_000,
            il.total_pixels / 1_000_000
        );
    }

    Ok(img.to_rgba8())
}

/// Build the premultiplied texture copy egui draws. Lossy for translucent
/// pixels, so it is only ever used for display.
pub fn rgba_to_color_image(image: &RgbaImage) -> ColorImage {
    let (w, h) = image.dimensions();
    ColorImage::from_rgba_unmultiplied([w as usize, h as usize], image.as_raw())
}

/// Load and decode an image from a filesystem path within the given limits.
///
/// The format is detected from the file contents, so a misnamed extension is fine.
pub fn decode_image_from_path(limits: &ImageLimits, path: &Path) -> anyhow::Result<RgbaImage> {
    let reader = ImageReader::open(path)
        .with_context(|| format!("Failed to read {}", path.display()))?
        .with_guessed_format()
        .context("Failed to detect image format")?;
    decode_reader_to_rgba(limits, reader)
}
