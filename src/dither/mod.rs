//! Ordered dithering.  Both the plasma generator and the raster vectorizer binarize a continuous
//! luminance field against the same 4x4 Bayer matrix, normalized against the same base.

mod fetch;
mod vectorize;

pub use fetch::{
    FetchError, FileSource, HttpOrFileSource, HttpSource, ImageSource, DEFAULT_TIMEOUT,
};
pub use vectorize::{vectorize, vectorize_source, DitherConfig};

/// The classic 4x4 Bayer threshold matrix
pub const BAYER_4X4: [[u8; 4]; 4] = [
    [0, 8, 2, 10],
    [12, 4, 14, 6],
    [3, 11, 1, 9],
    [15, 7, 13, 5],
];

/// Every threshold is divided by this, mapping the matrix into `[0, 1)`
pub const THRESHOLD_LEVELS: f64 = 16.0;

/// The dithering threshold of the cell in a given row and column
pub fn threshold(row: usize, col: usize) -> f64 {
    BAYER_4X4[row % 4][col % 4] as f64 / THRESHOLD_LEVELS
}

/// A horizontal span of consecutive active cells within one row, in cell units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub start: usize,
    pub len: usize,
}

/// Collapses a row of cells into the runs of consecutive active cells, from left to right.  An
/// all-inactive row produces no runs.
pub fn runs(row: impl IntoIterator<Item = bool>) -> Vec<Run> {
    let mut runs = Vec::new();
    // Start of the run currently being tracked, if any
    let mut run_start: Option<usize> = None;
    let mut len = 0;
    for (col, is_active) in row.into_iter().enumerate() {
        len = col + 1;
        match (is_active, run_start) {
            (true, None) => run_start = Some(col),
            (false, Some(start)) => {
                runs.push(Run {
                    start,
                    len: col - start,
                });
                run_start = None;
            }
            _ => {}
        }
    }
    // Close any run which reaches the end of the row
    if let Some(start) = run_start {
        runs.push(Run {
            start,
            len: len - start,
        });
    }
    runs
}
