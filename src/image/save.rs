use anyhow::Context as _;
use image::{DynamicImage, ImageFormat, RgbaImage};
use std::path::Path;

/// Pick the output format from the target extension, falling back to PNG.
pub fn output_format_for(path: &Path) -> ImageFormat {
    ImageFormat::from_path(path)
        .ok()
        .filter(|format| format.writing_enabled())
        .unwrap_or(ImageFormat::Png)
}

/// Encode the pixels to `path`, choosing the format from its extension.
pub fn encode_image_to_path(image: &RgbaImage, path: &Path) -> anyhow::Result<()> {
    let format = output_format_for(path);
    // JPEG and PNM have no alpha channel in the encoders we ship.
    let written = match format {
        ImageFormat::Jpeg | ImageFormat::Pnm => DynamicImage::ImageRgba8(image.clone())
            .to_rgb8()
            .save_with_format(path, format),
        _ => image.save_with_format(path, format),
    };
    written.with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_follows_extension() {
        assert_eq!(output_format_for(Path::new("a.bmp")), ImageFormat::Bmp);
        assert_eq!(output_format_for(Path::new("a.JPG")), ImageFormat::Jpeg);
        assert_eq!(output_format_for(Path::new("a.tiff")), ImageFormat::Tiff);
    }

    #[test]
    fn missing_or_unknown_extension_defaults_to_png() {
        assert_eq!(output_format_for(Path::new("picture")), ImageFormat::Png);
        assert_eq!(output_format_for(Path::new("picture.txt")), ImageFormat::Png);
    }
}
