//! Dominant-color extraction.
//!
//! The image is shrunk to a 100×100 thumbnail, every tenth pixel is
//! sampled, and the most frequent exact colors win. Ties keep the order in
//! which colors were first sampled, so the result is deterministic.

use std::collections::HashMap;

use image::{DynamicImage, GenericImageView, imageops::FilterType};
use log::{debug, warn};
use pf_term::Color;

use crate::error::SourceError;

/// Thumbnail edge in pixels.
pub const SAMPLE_SIZE: u32 = 100;

/// Sample every n-th thumbnail pixel.
pub const SAMPLE_STRIDE: usize = 10;

/// Palette size when the caller does not ask for one.
pub const DEFAULT_MAX_COLORS: usize = 8;

/// Returned when an image cannot be decoded.
pub const FALLBACK_PALETTE: [Color; 5] = [
    Color::rgb(0xff, 0x6b, 0x6b),
    Color::rgb(0x4e, 0xcd, 0xc4),
    Color::rgb(0x45, 0xb7, 0xd1),
    Color::rgb(0x96, 0xce, 0xb4),
    Color::rgb(0xff, 0xea, 0xa7),
];

/// Up to `max` dominant colors of an encoded PNG or JPEG.
///
/// Never fails: undecodable input logs a warning and yields
/// [`FALLBACK_PALETTE`].
#[must_use]
pub fn extract_palette(bytes: &[u8], max: usize) -> Vec<Color> {
    match try_extract_palette(bytes, max) {
        Ok(colors) if !colors.is_empty() => colors,
        Ok(_) => FALLBACK_PALETTE.to_vec(),
        Err(err) => {
            warn!("palette extraction failed, using fallback palette: {err}");
            FALLBACK_PALETTE.to_vec()
        }
    }
}

/// Like [`extract_palette`] but reports decode failures.
///
/// # Errors
///
/// [`SourceError::Image`] if `bytes` is not a supported image.
pub fn try_extract_palette(bytes: &[u8], max: usize) -> Result<Vec<Color>, SourceError> {
    let image = image::load_from_memory(bytes)?;
    Ok(dominant_colors(&image, max))
}

/// Up to `max` most frequent sampled colors of a decoded image.
#[must_use]
pub fn dominant_colors(image: &DynamicImage, max: usize) -> Vec<Color> {
    let (width, height) = image.dimensions();
    let thumb = if (width, height) == (SAMPLE_SIZE, SAMPLE_SIZE) {
        image.to_rgb8()
    } else {
        image
            .resize_exact(SAMPLE_SIZE, SAMPLE_SIZE, FilterType::Nearest)
            .to_rgb8()
    };

    // color -> (count, first sample index)
    let mut counts: HashMap<Color, (usize, usize)> = HashMap::new();
    for (idx, pixel) in thumb.pixels().step_by(SAMPLE_STRIDE).enumerate() {
        let [r, g, b] = pixel.0;
        counts.entry(Color::rgb(r, g, b)).or_insert((0, idx)).0 += 1;
    }
    debug!("sampled {} distinct colors from {width}x{height} image", counts.len());

    let mut ranked: Vec<(Color, usize, usize)> = counts
        .into_iter()
        .map(|(color, (count, first))| (color, count, first))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    ranked.into_iter().take(max).map(|(color, ..)| color).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, RgbImage};
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    const RED: Color = Color::rgb(255, 0, 0);
    const BLUE: Color = Color::rgb(0, 0, 255);
    const GREEN: Color = Color::rgb(0, 255, 0);

    fn png(image: RgbImage) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(image)
            .write_to(&mut buf, ImageFormat::Png)
            .unwrap();
        buf.into_inner()
    }

    /// 100×100 image: rows `[0, split)` red, the rest blue.
    fn banded(split: u32) -> RgbImage {
        RgbImage::from_fn(SAMPLE_SIZE, SAMPLE_SIZE, |_, y| {
            if y < split { Rgb([255, 0, 0]) } else { Rgb([0, 0, 255]) }
        })
    }

    #[test]
    fn most_frequent_first() {
        assert_eq!(extract_palette(&png(banded(70)), 8), vec![RED, BLUE]);
        assert_eq!(extract_palette(&png(banded(30)), 8), vec![BLUE, RED]);
    }

    #[test]
    fn ties_keep_first_seen_order() {
        assert_eq!(extract_palette(&png(banded(50)), 8), vec![RED, BLUE]);
    }

    #[test]
    fn max_truncates() {
        assert_eq!(extract_palette(&png(banded(70)), 1), vec![RED]);
    }

    #[test]
    fn uniform_image_has_one_color() {
        let image = RgbImage::from_pixel(SAMPLE_SIZE, SAMPLE_SIZE, Rgb([0, 255, 0]));
        assert_eq!(extract_palette(&png(image), 8), vec![GREEN]);
    }

    #[test]
    fn other_sizes_are_resized() {
        let image = RgbImage::from_pixel(512, 512, Rgb([0, 0, 255]));
        assert_eq!(extract_palette(&png(image), 8), vec![BLUE]);
    }

    #[test]
    fn garbage_yields_fallback() {
        assert_eq!(extract_palette(b"not an image", 8), FALLBACK_PALETTE.to_vec());
        assert!(matches!(
            try_extract_palette(b"not an image", 8),
            Err(SourceError::Image(_))
        ));
    }

    #[test]
    fn zero_max_yields_fallback() {
        assert_eq!(extract_palette(&png(banded(70)), 0), FALLBACK_PALETTE.to_vec());
    }
}
