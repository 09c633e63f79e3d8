//! Generators which fill a regular grid of cells.

use rgb::RGB8;

use super::Params;
use crate::{
    color::rgb_hex,
    dither,
    image::{Elem, Image, Style, Transform},
};

/// Background shared by the grid variants
const NIGHT: RGB8 = rgb_hex(0x11011d);

/* IDENTICON */

const IDENTICON_CELLS: usize = 5;
const IDENTICON_CELL_SIZE: f32 = 50.0;

/// A 5x5 grid which is mirrored left-to-right.  The three left-hand columns are decided by the
/// parity of successive seed bytes.
pub fn identicon(params: &Params) -> Image {
    let mut cells = Vec::new();
    for col in 0..3 {
        for row in 0..IDENTICON_CELLS {
            if !params.seed.is_even(col * IDENTICON_CELLS + row) {
                continue;
            }
            let y = row as f32 * IDENTICON_CELL_SIZE;
            cells.push(identicon_cell(col, y, params));
            // The centre column has no mirror image
            if col < 2 {
                cells.push(identicon_cell(IDENTICON_CELLS - 1 - col, y, params));
            }
        }
    }

    let mut image = Image::square(IDENTICON_CELLS as f32 * IDENTICON_CELL_SIZE);
    image.add_background(NIGHT);
    image.add(Elem::Group(Transform::new(20.0, 10.0, 0.8), cells));
    image
}

fn identicon_cell(col: usize, y: f32, params: &Params) -> Elem {
    Elem::rect(
        col as f32 * IDENTICON_CELL_SIZE,
        y,
        IDENTICON_CELL_SIZE,
        IDENTICON_CELL_SIZE,
        Style::fill(params.color),
    )
}

/* PLASMA */

const PLASMA_CELLS: usize = 32;
const PLASMA_CELL_SIZE: f32 = 10.0;

/// Interference of three sine waves, with frequency and phase taken from the seed.  Returns a
/// value in `[0, 1]`.
fn plasma_value(col: usize, row: usize, params: &Params) -> f64 {
    let seed = &params.seed;
    let u = col as f64 / PLASMA_CELLS as f64;
    let v = row as f64 / PLASMA_CELLS as f64;
    let phase_x = seed.byte(0) as f64 / 10.0;
    let phase_y = seed.byte(1) as f64 / 10.0;
    let freq = 3.0 + seed.modulo(2, 5) as f64;

    let value = (u * freq + phase_x).sin() + (v * freq + phase_y).cos() + ((u + v) * freq).sin();
    (value + 3.0) / 6.0
}

/// A sine plasma, binarized against the ordered-dither matrix.  Cells which stay dark are not
/// drawn at all.
pub fn plasma(params: &Params) -> Image {
    let mut cells = Vec::new();
    for row in 0..PLASMA_CELLS {
        for col in 0..PLASMA_CELLS {
            if plasma_value(col, row, params) > dither::threshold(row, col) {
                cells.push(Elem::rect(
                    col as f32 * PLASMA_CELL_SIZE,
                    row as f32 * PLASMA_CELL_SIZE,
                    PLASMA_CELL_SIZE,
                    PLASMA_CELL_SIZE,
                    Style::fill(params.color),
                ));
            }
        }
    }

    let mut image = Image::square(PLASMA_CELLS as f32 * PLASMA_CELL_SIZE);
    image.add_background(NIGHT);
    image.add(Elem::Group(Transform::new(16.0, 16.0, 0.9), cells));
    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{catalog::Catalog, image::Paint};

    fn cell_positions(image: &Image) -> Vec<(f32, f32)> {
        image.primitives()[1..]
            .iter()
            .map(|e| match e {
                Elem::Rect { min, .. } => (min.x, min.y),
                other => panic!("expected rect, got {:?}", other),
            })
            .collect()
    }

    #[test]
    fn identicon_is_mirrored() {
        let catalog = Catalog::default();
        for name in ["Alex Morgan", "User", ""] {
            let image = identicon(&Params::new(name, None, &catalog));
            let cells = cell_positions(&image);
            for &(x, y) in &cells {
                let mirror_x = 200.0 - x;
                assert!(
                    cells.contains(&(mirror_x, y)),
                    "{:?}: cell at ({}, {}) has no mirror",
                    name,
                    x,
                    y
                );
            }
        }
    }

    #[test]
    fn identicon_follows_byte_parity() {
        let catalog = Catalog::default();
        let params = Params::new("Alex Morgan", None, &catalog);
        let cells = cell_positions(&identicon(&params));
        for col in 0..3 {
            for row in 0..5 {
                let pos = (col as f32 * 50.0, row as f32 * 50.0);
                assert_eq!(
                    cells.contains(&pos),
                    params.seed.is_even(col * 5 + row),
                    "cell {:?}",
                    pos
                );
            }
        }
    }

    #[test]
    fn plasma_stays_in_grid() {
        let catalog = Catalog::default();
        let params = Params::new("Alex Morgan", None, &catalog);
        let image = plasma(&params);
        let cells = cell_positions(&image);
        assert!(!cells.is_empty());
        assert!(cells.len() < PLASMA_CELLS * PLASMA_CELLS);
        for (x, y) in cells {
            assert!((0.0..320.0).contains(&x) && (0.0..320.0).contains(&y));
        }
        for e in &image.primitives()[1..] {
            assert_eq!(e.style().unwrap().fill, Some(Paint::Solid(params.color)));
        }
    }

    #[test]
    fn plasma_values_are_normalized() {
        let catalog = Catalog::default();
        let params = Params::new("User", None, &catalog);
        for row in 0..PLASMA_CELLS {
            for col in 0..PLASMA_CELLS {
                let v = plasma_value(col, row, &params);
                assert!((0.0..=1.0).contains(&v));
            }
        }
    }
}
