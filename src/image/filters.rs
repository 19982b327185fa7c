use super::transform::{
    flip_horizontal, flip_vertical, map_pixels, pixel_at, usize_dimensions, write_pixels,
};
use image::{Rgba, RgbaImage};

/// 3x3 weighted neighbourhood kernel; the weighted sum is divided by `divisor`.
struct Kernel {
    weights: [[i32; 3]; 3],
    divisor: i32,
}

const EDGE_DETECT: Kernel = Kernel {
    weights: [[-1, -1, -1], [-1, 8, -1], [-1, -1, -1]],
    divisor: 1,
};

const EDGE_HIGHLIGHT: Kernel = Kernel {
    weights: [[-1, -1, -1], [-1, 9, -1], [-1, -1, -1]],
    divisor: 1,
};

const SHARPEN: Kernel = Kernel {
    weights: [[-1, -2, -1], [-2, 28, -2], [-1, -2, -1]],
    divisor: 16,
};

const SOFTEN: Kernel = Kernel {
    weights: [[1, 1, 1], [1, 1, 1], [1, 1, 1]],
    divisor: 9,
};

/// Pixel transformations offered by the editor, one button each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Filter {
    EdgeDetect,
    EdgeHighlight,
    FlipHorizontal,
    FlipVertical,
    Grayscale,
    Sharpen,
    Soften,
}

impl Filter {
    /// Every filter in button order.
    pub const CATALOG: [Self; 7] = [
        Self::EdgeDetect,
        Self::EdgeHighlight,
        Self::FlipHorizontal,
        Self::FlipVertical,
        Self::Grayscale,
        Self::Sharpen,
        Self::Soften,
    ];

    /// Label shown on the filter's button.
    pub const fn description(self) -> &'static str {
        match self {
            Self::EdgeDetect => "Edge Detect",
            Self::EdgeHighlight => "Edge Highlight",
            Self::FlipHorizontal => "Flip Horizontal",
            Self::FlipVertical => "Flip Vertical",
            Self::Grayscale => "Grayscale",
            Self::Sharpen => "Sharpen",
            Self::Soften => "Soften",
        }
    }

    /// Transform `image` in place. Deterministic for a given input.
    pub fn apply(self, image: &mut RgbaImage) {
        match self {
            Self::EdgeDetect => convolve(image, &EDGE_DETECT),
            Self::EdgeHighlight => convolve(image, &EDGE_HIGHLIGHT),
            Self::FlipHorizontal => flip_horizontal(image),
            Self::FlipVertical => flip_vertical(image),
            Self::Grayscale => grayscale(image),
            Self::Sharpen => convolve(image, &SHARPEN),
            Self::Soften => convolve(image, &SOFTEN),
        }
    }
}

fn channel_u8(value: i32) -> u8 {
    u8::try_from(value.clamp(0, i32::from(u8::MAX))).unwrap_or(u8::MAX)
}

fn grayscale(image: &mut RgbaImage) {
    let [width, height] = usize_dimensions(image);
    let raw = image.as_raw();
    let gray = map_pixels(width * height, |idx| {
        let Rgba([r, g, b, a]) = pixel_at(raw, idx);
        let mean = (u16::from(r) + u16::from(g) + u16::from(b)) / 3;
        let v = u8::try_from(mean).unwrap_or(u8::MAX);
        Rgba([v, v, v, a])
    });
    write_pixels(image, gray);
}

/// Apply a 3x3 kernel to RGB; alpha and the one-pixel border stay untouched.
fn convolve(image: &mut RgbaImage, kernel: &Kernel) {
    let [width, height] = usize_dimensions(image);
    if width < 3 || height < 3 {
        return;
    }
    let raw = image.as_raw();
    let out = map_pixels(width * height, |idx| {
        let x = idx % width;
        let y = idx / width;
        let center = pixel_at(raw, idx);
        if x == 0 || y == 0 || x == width - 1 || y == height - 1 {
            return center;
        }
        let mut sum = [0i32; 3];
        for (dy, row) in kernel.weights.iter().enumerate() {
            for (dx, &weight) in row.iter().enumerate() {
                let src = pixel_at(raw, (y + dy - 1) * width + (x + dx - 1));
                for (acc, &channel) in sum.iter_mut().zip(&src.0) {
                    *acc += weight * i32::from(channel);
                }
            }
        }
        Rgba([
            channel_u8(sum[0] / kernel.divisor),
            channel_u8(sum[1] / kernel.divisor),
            channel_u8(sum[2] / kernel.divisor),
            center[3],
        ])
    });
    write_pixels(image, out);
}
