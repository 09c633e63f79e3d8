//! Code to convert a raster image into a compact set of vector rectangles, via ordered dithering
//! and run-length compression of each row.

use image::RgbImage;
use log::{debug, warn};
use rgb::RGB8;

use crate::image::{Elem, Image, Style};

use super::{fetch::ImageSource, runs, threshold};

/// Settings for [`vectorize`]
#[derive(Debug, Clone, PartialEq)]
pub struct DitherConfig {
    /// Side length of one dithered cell, in logical units
    pub grid_size: u32,
    /// Multiplier applied to each channel's distance from mid-grey
    pub contrast: f64,
    /// Offset added to every channel, as a fraction of full scale
    pub brightness: f64,
    /// Colour of the active cells
    pub primary: RGB8,
    /// Background colour, which shows through wherever cells are inactive
    pub secondary: RGB8,
}

impl Default for DitherConfig {
    fn default() -> Self {
        Self {
            grid_size: 1,
            contrast: 1.2,
            brightness: 0.05,
            primary: RGB8::new(0xf5, 0xf5, 0xf5),
            secondary: RGB8::new(0x11, 0x01, 0x1d),
        }
    }
}

impl DitherConfig {
    /// Applies the linear contrast/brightness adjustment to one 8-bit channel
    fn adjust(&self, channel: u8) -> f64 {
        ((channel as f64 - 128.0) * self.contrast + 128.0 + self.brightness * 255.0)
            .clamp(0.0, 255.0)
    }

    /// Luminance of an adjusted pixel, in `[0, 1]`
    fn luminance(&self, [r, g, b]: [u8; 3]) -> f64 {
        (0.299 * self.adjust(r) + 0.587 * self.adjust(g) + 0.114 * self.adjust(b)) / 255.0
    }
}

/// Dithers `sample` onto a logical canvas of `width` by `height` units.  The output is one
/// background rectangle followed by one rectangle per run of active cells.
pub fn vectorize(sample: &RgbImage, width: u32, height: u32, config: &DitherConfig) -> Image {
    let mut image = background(width, height, config);
    let (src_width, src_height) = sample.dimensions();
    if src_width == 0 || src_height == 0 || width == 0 || height == 0 {
        warn!("can't dither an empty image, leaving the background only");
        return image;
    }

    let grid = config.grid_size.max(1);
    // Nearest-neighbour sampling: map a target coordinate proportionally into the source
    let source_coord = |t: u32, target_len: u32, src_len: u32| -> u32 {
        let s = (t as f64 / target_len as f64 * src_len as f64).floor() as u32;
        s.min(src_len - 1)
    };

    for (row, y) in (0..height).step_by(grid as usize).enumerate() {
        let src_y = source_coord(y, height, src_height);
        let cells = (0..width)
            .step_by(grid as usize)
            .enumerate()
            .map(|(col, x)| {
                let src_x = source_coord(x, width, src_width);
                let lum = config.luminance(sample.get_pixel(src_x, src_y).0);
                lum >= threshold(row, col)
            });
        let row_height = grid.min(height - y) as f32;
        for run in runs(cells) {
            let x = run.start as u32 * grid;
            // The last cell of a row may be cut short by the canvas edge
            let run_width = (run.len as u32 * grid).min(width - x);
            image.add(Elem::rect(
                x as f32,
                y as f32,
                run_width as f32,
                row_height,
                Style::fill(config.primary),
            ));
        }
    }

    debug!(
        "dithered {}x{} source into {} rectangles",
        src_width,
        src_height,
        image.elements().len()
    );
    image
}

/// Fetches the image at `location` and dithers it.  If the image can't be fetched or decoded, the
/// result is just the background.
pub fn vectorize_source<S: ImageSource + ?Sized>(
    source: &S,
    location: &str,
    width: u32,
    height: u32,
    config: &DitherConfig,
) -> Image {
    match source.fetch(location) {
        Ok(img) => vectorize(&img.to_rgb8(), width, height, config),
        Err(e) => {
            warn!("couldn't load source image {:?}: {}", location, e);
            background(width, height, config)
        }
    }
}

/// An image containing only the background rectangle
fn background(width: u32, height: u32, config: &DitherConfig) -> Image {
    let mut image = Image::new(width as f32, height as f32);
    image.add_background(config.secondary);
    image
}

#[cfg(test)]
mod tests {
    use image::{DynamicImage, Rgb};

    use super::*;
    use crate::{dither::FetchError, image::Elem};

    fn plain() -> DitherConfig {
        DitherConfig {
            contrast: 1.0,
            brightness: 0.0,
            ..DitherConfig::default()
        }
    }

    /// (x, y, width, height) of every rectangle after the background
    fn rects(image: &Image) -> Vec<(f32, f32, f32, f32)> {
        image.elements()[1..]
            .iter()
            .map(|e| match e {
                Elem::Rect { min, size, .. } => (min.x, min.y, size.x, size.y),
                other => panic!("expected a rect, got {:?}", other),
            })
            .collect()
    }

    #[test]
    fn white_rows_are_single_runs() {
        let white = RgbImage::from_pixel(4, 4, Rgb([255, 255, 255]));
        let image = vectorize(&white, 8, 8, &plain());
        let rects = rects(&image);
        assert_eq!(rects.len(), 8);
        for (i, r) in rects.iter().enumerate() {
            assert_eq!(*r, (0.0, i as f32, 8.0, 1.0));
        }
    }

    #[test]
    fn black_only_passes_zero_thresholds() {
        let black = RgbImage::from_pixel(2, 2, Rgb([0, 0, 0]));
        let image = vectorize(&black, 8, 8, &plain());
        // Luminance 0 only reaches the threshold of 0, which sits at every (4n, 4m) cell
        assert_eq!(
            rects(&image),
            vec![
                (0.0, 0.0, 1.0, 1.0),
                (4.0, 0.0, 1.0, 1.0),
                (0.0, 4.0, 1.0, 1.0),
                (4.0, 4.0, 1.0, 1.0),
            ]
        );
    }

    #[test]
    fn mid_grey_activates_lower_thresholds() {
        let grey = RgbImage::from_pixel(1, 1, Rgb([128, 128, 128]));
        let image = vectorize(&grey, 4, 4, &plain());
        let area: f32 = rects(&image).iter().map(|r| r.2 * r.3).sum();
        // 128/255 is just above 8/16, so the 9 thresholds 0..=8 are reached
        assert_eq!(area, 9.0);
    }

    #[test]
    fn grid_size_scales_cells() {
        let white = RgbImage::from_pixel(1, 1, Rgb([255, 255, 255]));
        let config = DitherConfig {
            grid_size: 2,
            ..plain()
        };
        let image = vectorize(&white, 8, 4, &config);
        assert_eq!(
            rects(&image),
            vec![(0.0, 0.0, 8.0, 2.0), (0.0, 2.0, 8.0, 2.0)]
        );
    }

    #[test]
    fn partial_cells_are_clipped_to_canvas() {
        let white = RgbImage::from_pixel(1, 1, Rgb([255, 255, 255]));
        let config = DitherConfig {
            grid_size: 2,
            ..plain()
        };
        let image = vectorize(&white, 5, 3, &config);
        assert_eq!(
            rects(&image),
            vec![(0.0, 0.0, 5.0, 2.0), (0.0, 2.0, 5.0, 1.0)]
        );
        for (x, y, w, h) in rects(&image) {
            assert!(x + w <= 5.0 && y + h <= 3.0);
        }
    }

    #[test]
    fn brightness_saturates() {
        let black = RgbImage::from_pixel(3, 3, Rgb([0, 0, 0]));
        let config = DitherConfig {
            brightness: 1.0,
            ..plain()
        };
        let image = vectorize(&black, 6, 6, &config);
        assert_eq!(rects(&image).len(), 6);
    }

    #[test]
    fn background_comes_first() {
        let white = RgbImage::from_pixel(1, 1, Rgb([255, 255, 255]));
        let image = vectorize(&white, 10, 10, &DitherConfig::default());
        match &image.elements()[0] {
            Elem::Rect { size, style, .. } => {
                assert_eq!((size.x, size.y), (10.0, 10.0));
                assert_eq!(style.fill, Some(RGB8::new(0x11, 0x01, 0x1d).into()));
            }
            other => panic!("expected background rect, got {:?}", other),
        }
    }

    #[test]
    fn empty_source_is_background_only() {
        let empty = RgbImage::new(0, 0);
        let image = vectorize(&empty, 10, 10, &plain());
        assert_eq!(image.elements().len(), 1);
    }

    struct Unreachable;

    impl ImageSource for Unreachable {
        fn fetch(&self, _location: &str) -> Result<DynamicImage, FetchError> {
            Err(FetchError::Status(404))
        }
    }

    #[test]
    fn failed_fetch_degrades_to_background() {
        let image = vectorize_source(&Unreachable, "http://nowhere", 50, 50, &plain());
        assert_eq!(image.elements().len(), 1);
        assert!(matches!(image.elements()[0], Elem::Rect { .. }));
    }
}
