//! Half/quadrant mirroring on RGBA buffers.

use image::imageops::{self, FilterType};
use image::RgbaImage;

use crate::domain::entities::SymmetryMode;

/// Filter used when a mirrored slice is one pixel short of its target region.
const RESAMPLE_FILTER: FilterType = FilterType::Lanczos3;

/// Pure mirror transforms, one per [`SymmetryMode`].
pub struct SymmetryTransformer;

impl SymmetryTransformer {
    /// Applies `mode` to `image`, returning a new image of the same size.
    #[must_use]
    pub fn apply(image: &RgbaImage, mode: SymmetryMode) -> RgbaImage {
        match mode {
            SymmetryMode::LeftRight => Self::left_right(image),
            SymmetryMode::TopBottom => Self::top_bottom(image),
            SymmetryMode::Center => Self::center(image),
        }
    }

    /// Mirrors the left half onto the right half.
    #[must_use]
    pub fn left_right(image: &RgbaImage) -> RgbaImage {
        let (width, height) = image.dimensions();
        let half = width / 2;
        if half == 0 || height == 0 {
            return image.clone();
        }

        let left = imageops::crop_imm(image, 0, 0, half, height).to_image();
        let mirrored = fit(imageops::flip_horizontal(&left), width - half, height);

        let mut out = image.clone();
        paste_with_alpha(&mut out, &mirrored, half, 0);
        out
    }

    /// Mirrors the top half onto the bottom half.
    #[must_use]
    pub fn top_bottom(image: &RgbaImage) -> RgbaImage {
        let (width, height) = image.dimensions();
        let half = height / 2;
        if half == 0 || width == 0 {
            return image.clone();
        }

        let top = imageops::crop_imm(image, 0, 0, width, half).to_image();
        let mirrored = fit(imageops::flip_vertical(&top), width, height - half);

        let mut out = image.clone();
        paste_with_alpha(&mut out, &mirrored, 0, half);
        out
    }

    /// Rotates the top-left quadrant by 180° onto the bottom-right quadrant.
    #[must_use]
    pub fn center(image: &RgbaImage) -> RgbaImage {
        let (width, height) = image.dimensions();
        let (half_w, half_h) = (width / 2, height / 2);
        if half_w == 0 || half_h == 0 {
            return image.clone();
        }

        let quadrant = imageops::crop_imm(image, 0, 0, half_w, half_h).to_image();
        let rotated = fit(imageops::rotate180(&quadrant), width - half_w, height - half_h);

        let mut out = image.clone();
        paste_with_alpha(&mut out, &rotated, half_w, half_h);
        out
    }
}

/// Resamples `image` to exactly `width` x `height` when it differs.
fn fit(image: RgbaImage, width: u32, height: u32) -> RgbaImage {
    if image.dimensions() == (width, height) {
        image
    } else {
        imageops::resize(&image, width, height, RESAMPLE_FILTER)
    }
}

/// Pastes `src` at (`x`, `y`) using its own alpha channel as the mask.
///
/// Every channel, alpha included, is blended as `src * a + dst * (255 - a)`.
#[allow(clippy::cast_possible_truncation)]
fn paste_with_alpha(dst: &mut RgbaImage, src: &RgbaImage, x: u32, y: u32) {
    for (sx, sy, pixel) in src.enumerate_pixels() {
        let target = dst.get_pixel_mut(x + sx, y + sy);
        let alpha = u32::from(pixel[3]);
        for channel in 0..4 {
            let s = u32::from(pixel[channel]);
            let d = u32::from(target[channel]);
            target[channel] = ((s * alpha + d * (255 - alpha) + 127) / 255) as u8;
        }
    }
}
