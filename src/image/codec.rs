use super::{decode_image_from_path, encode_image_to_path};
use crate::config::ImageLimits;
use image::RgbaImage;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The file could not be turned into pixels: missing, unreadable, not an image, or too large.
#[derive(Debug, Clone, Error)]
#[error("{}: {reason}", path.display())]
pub struct DecodeError {
    pub path: PathBuf,
    pub reason: String,
}

/// The pixels could not be written to the chosen target.
#[derive(Debug, Clone, Error)]
#[error("{}: {reason}", path.display())]
pub struct EncodeError {
    pub path: PathBuf,
    pub reason: String,
}

/// Load/save boundary between files on disk and in-memory pixels.
pub trait ImageCodec {
    fn load(&self, path: &Path) -> Result<RgbaImage, DecodeError>;
    fn save(&self, image: &RgbaImage, path: &Path) -> Result<(), EncodeError>;
}

/// Codec backed by the `image` crate and the configured decode limits.
#[derive(Debug, Clone, Default)]
pub struct FileCodec {
    limits: ImageLimits,
}

impl FileCodec {
    pub const fn new(limits: ImageLimits) -> Self {
        Self { limits }
    }
}

impl ImageCodec for FileCodec {
    fn load(&self, path: &Path) -> Result<RgbaImage, DecodeError> {
        decode_image_from_path(&self.limits, path).map_err(|err| DecodeError {
            path: path.to_path_buf(),
            reason: format!("{err:#}"),
        })
    }

    fn save(&self, image: &RgbaImage, path: &Path) -> Result<(), EncodeError> {
        encode_image_to_path(image, path).map_err(|err| EncodeError {
            path: path.to_path_buf(),
            reason: format!("{err:#}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use std::fs;

    fn gradient(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            let r = u8::try_from(x * 10).unwrap_or(u8::MAX);
            let g = u8::try_from(y * 20).unwrap_or(u8::MAX);
            Rgba([r, g, r ^ g, 255])
        })
    }

    /// Fully transparent and nearly transparent pixels with arbitrary colour.
    fn translucent() -> RgbaImage {
        let mut image = gradient(3, 2);
        image.put_pixel(0, 0, Rgba([200, 100, 50, 0]));
        image.put_pixel(1, 0, Rgba([201, 99, 37, 3]));
        image.put_pixel(2, 0, Rgba([250, 17, 130, 77]));
        image
    }

    #[test]
    fn lossless_formats_roundtrip_exactly() {
        let dir = tempfile::tempdir().expect("temp dir");
        let codec = FileCodec::default();
        let original = gradient(5, 4);
        for name in ["out.png", "out.bmp", "out.tiff", "no_extension"] {
            let path = dir.path().join(name);
            codec.save(&original, &path).expect("save");
            let loaded = codec.load(&path).expect("load");
            assert_eq!(loaded, original, "{name}");
        }
    }

    #[test]
    fn translucent_pixels_keep_their_colour() {
        let dir = tempfile::tempdir().expect("temp dir");
        let codec = FileCodec::default();
        let original = translucent();
        for name in ["alpha.png", "alpha.tiff"] {
            let path = dir.path().join(name);
            codec.save(&original, &path).expect("save");
            let loaded = codec.load(&path).expect("load");
            assert_eq!(loaded.get_pixel(0, 0), &Rgba([200, 100, 50, 0]), "{name}");
            assert_eq!(loaded.get_pixel(1, 0), &Rgba([201, 99, 37, 3]), "{name}");
            assert_eq!(loaded, original, "{name}");
        }
    }

    #[test]
    fn jpeg_roundtrip_keeps_dimensions() {
        let dir = tempfile::tempdir().expect("temp dir");
        let codec = FileCodec::default();
        let original = gradient(8, 8);
        let path = dir.path().join("out.jpg");
        codec.save(&original, &path).expect("save");
        let loaded = codec.load(&path).expect("load");
        assert_eq!(loaded.dimensions(), original.dimensions());
    }

    #[test]
    fn missing_file_is_a_decode_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("absent.png");
        let err = FileCodec::default().load(&path).expect_err("should fail");
        assert_eq!(err.path, path);
        assert!(!err.reason.is_empty());
    }

    #[test]
    fn non_image_file_is_a_decode_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("notes.txt");
        fs::write(&path, b"definitely not pixels").expect("write");
        assert!(FileCodec::default().load(&path).is_err());
    }

    #[test]
    fn unwritable_target_is_an_encode_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("missing_dir").join("out.png");
        let err = FileCodec::default()
            .save(&gradient(2, 2), &path)
            .expect_err("should fail");
        assert_eq!(err.path, path);
    }
}
