// Edge detection module
// Grayscale conversion and Canny, producing a binary edge image

use edgetrace_core::{EdgeConfig, EdgePreset};
use image::{DynamicImage, GrayImage, Luma};
use imageproc::edges::canny;
use log::debug;

/// Pixel value marking an edge in binary images
pub const EDGE: u8 = 255;

/// Run Canny on any input image
/// Colour and alpha images are reduced to luma first; `canny` applies its
/// own sigma 1.4 Gaussian blur, so the luma is passed in unblurred
pub fn detect_edges(image: &DynamicImage, config: &EdgeConfig) -> GrayImage {
    let gray = image.to_luma8();
    let (low, high) = config.thresholds();
    debug!(
        "Canny on {}x{} image: thresholds {}/{}",
        gray.width(),
        gray.height(),
        low,
        high
    );

    canny(&gray, low, high)
}

/// Edge images for every preset, for choosing thresholds by eye
pub fn detect_preset_edges(image: &DynamicImage) -> Vec<(EdgePreset, GrayImage)> {
    let gray = image.to_luma8();
    EdgePreset::ALL
        .iter()
        .map(|&preset| {
            let (low, high) = preset.thresholds();
            (preset, canny(&gray, low, high))
        })
        .collect()
}

/// Treat an image as an already-computed mask: any luma above `threshold` is an edge
pub fn binarize(image: &DynamicImage, threshold: u8) -> GrayImage {
    let mut gray = image.to_luma8();
    for pixel in gray.pixels_mut() {
        *pixel = Luma([if pixel[0] > threshold { EDGE } else { 0 }]);
    }
    gray
}

/// Number of edge pixels in a binary image
pub fn edge_pixel_count(edges: &GrayImage) -> usize {
    edges.pixels().filter(|p| p[0] != 0).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn flat_image_has_no_edges() {
        let flat = DynamicImage::ImageRgb8(RgbImage::from_pixel(32, 32, Rgb([120, 120, 120])));
        let edges = detect_edges(&flat, &EdgeConfig::default());
        assert_eq!(edges.dimensions(), (32, 32));
        assert_eq!(edge_pixel_count(&edges), 0);
    }

    #[test]
    fn step_edge_is_found() {
        let step = RgbImage::from_fn(40, 40, |x, _| {
            if x < 20 {
                Rgb([0, 0, 0])
            } else {
                Rgb([255, 255, 255])
            }
        });
        let edges = detect_edges(&DynamicImage::ImageRgb8(step), &EdgeConfig::default());
        assert!(edge_pixel_count(&edges) > 0);
        // Edge pixels hug the step
        for (x, _, p) in edges.enumerate_pixels() {
            if p[0] != 0 {
                assert!((17..=22).contains(&x), "unexpected edge at column {}", x);
            }
        }
    }

    fn checkerboard(size: u32, cell: u32) -> DynamicImage {
        DynamicImage::ImageLuma8(GrayImage::from_fn(size, size, |x, y| {
            Luma([if (x / cell + y / cell) % 2 == 0 { 0 } else { 255 }])
        }))
    }

    #[test]
    fn fine_detail_survives_single_blur() {
        let checker = checkerboard(48, 3);
        let edges = detect_edges(&checker, &EdgeConfig::default());
        let reference = canny(&checker.to_luma8(), 50.0, 150.0);

        assert_eq!(edges, reference);
        assert!(edge_pixel_count(&edges) > 100);
    }

    #[test]
    fn looser_presets_find_more_edges() {
        let checker = checkerboard(48, 4);
        let by_preset = detect_preset_edges(&checker);
        let presets: Vec<EdgePreset> = by_preset.iter().map(|(p, _)| *p).collect();
        assert_eq!(presets, EdgePreset::ALL.to_vec());

        let counts: Vec<usize> = by_preset.iter().map(|(_, e)| edge_pixel_count(e)).collect();
        assert!(counts[0] >= counts[1], "sensitive {} < medium {}", counts[0], counts[1]);
        assert!(counts[1] >= counts[2], "medium {} < strict {}", counts[1], counts[2]);
    }

    #[test]
    fn binarize_thresholds_luma() {
        let img = GrayImage::from_fn(4, 1, |x, _| Luma([(x * 80) as u8]));
        let mask = binarize(&DynamicImage::ImageLuma8(img), 100);
        let values: Vec<u8> = mask.pixels().map(|p| p[0]).collect();
        assert_eq!(values, vec![0, 0, EDGE, EDGE]);
    }
}
