use image::{Rgba, RgbaImage};
use rayon::prelude::*;

/// Minimum pixel count before parallelizing per-pixel transforms.
const PARALLEL_PIXEL_THRESHOLD: usize = 262_144; // 512x512

pub(super) fn map_pixels(
    total_pixels: usize,
    f: impl Fn(usize) -> Rgba<u8> + Sync + Send,
) -> Vec<Rgba<u8>> {
    if total_pixels >= PARALLEL_PIXEL_THRESHOLD {
        (0..total_pixels).into_par_iter().map(f).collect()
    } else {
        let mut out = Vec::with_capacity(total_pixels);
        for idx in 0..total_pixels {
            out.push(f(idx));
        }
        out
    }
}

/// Pixel at row-major index `idx` of a raw RGBA buffer.
pub(super) fn pixel_at(raw: &[u8], idx: usize) -> Rgba<u8> {
    let o = idx * 4;
    Rgba([raw[o], raw[o + 1], raw[o + 2], raw[o + 3]])
}

/// Overwrite `image` with row-major `pixels` of the same size.
pub(super) fn write_pixels(image: &mut RgbaImage, pixels: Vec<Rgba<u8>>) {
    for (dst, src) in image.pixels_mut().zip(pixels) {
        *dst = src;
    }
}

pub fn usize_dimensions(image: &RgbaImage) -> [usize; 2] {
    let (width, height) = image.dimensions();
    [width as usize, height as usize]
}

/// Mirror the image horizontally (left-right).
pub fn flip_horizontal(image: &mut RgbaImage) {
    let [width, height] = usize_dimensions(image);
    if width == 0 || height == 0 {
        return;
    }
    let raw = image.as_raw();
    let flipped = map_pixels(width * height, |idx| {
        let x = idx % width;
        let y = idx / width;
        pixel_at(raw, y * width + (width - 1 - x))
    });
    write_pixels(image, flipped);
}

/// Mirror the image vertically (top-bottom).
pub fn flip_vertical(image: &mut RgbaImage) {
    let [width, height] = usize_dimensions(image);
    if width == 0 || height == 0 {
        return;
    }
    let raw = image.as_raw();
    let flipped = map_pixels(width * height, |idx| {
        let x = idx % width;
        let y = idx / width;
        pixel_at(raw, (height - 1 - y) * width + x)
    });
    write_pixels(image, flipped);
}
