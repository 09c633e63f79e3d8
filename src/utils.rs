//! Miscellaneous utility functions, usually related to vectors.

use crate::V2;

/// Formats a coordinate for output, rounded to two decimal places.  Integers print without a
/// fractional part (`50`, not `50.0`).
pub fn fmt_num(v: f32) -> String {
    let rounded = (v * 100.0).round() / 100.0;
    // Avoid printing `-0`
    if rounded == 0.0 {
        "0".to_owned()
    } else {
        rounded.to_string()
    }
}

/// Returns the bounding box of a set of points as a (min, max) pair of vectors.  Returns `None` if
/// the iterator didn't yield any points.
pub fn bbox(points: impl IntoIterator<Item = V2>) -> Option<(V2, V2)> {
    let mut is_iter_empty = true;
    let mut min_x = f32::MAX;
    let mut min_y = f32::MAX;
    let mut max_x = f32::MIN;
    let mut max_y = f32::MIN;
    for v in points {
        is_iter_empty = false;
        min_x = min_x.min(v.x);
        min_y = min_y.min(v.y);
        max_x = max_x.max(v.x);
        max_y = max_y.max(v.y);
    }
    if is_iter_empty {
        // If the iterator yielded no elements, then the bbox is not defined
        None
    } else {
        Some((V2::new(min_x, min_y), V2::new(max_x, max_y)))
    }
}

/// Maps a set of polylines (in any coordinate system where `y` points **up**) into a square canvas
/// of side `canvas` (where `y` points **down**).  The lines are scaled isotropically so that their
/// bounding box fits in `fill * canvas`, then centred.
///
/// A zero-extent axis (e.g. all points share one `x`) is treated as one unit wide, so this never
/// divides by zero.
pub fn normalize_polylines(lines: &[Vec<V2>], canvas: f32, fill: f32) -> Vec<Vec<V2>> {
    let (min, max) = match bbox(lines.iter().flatten().copied()) {
        Some(b) => b,
        None => return lines.to_vec(), // No points, so every line is empty
    };
    let non_degenerate = |extent: f32| if extent > 0.0 { extent } else { 1.0 };
    let width = non_degenerate(max.x - min.x);
    let height = non_degenerate(max.y - min.y);

    let target = canvas * fill;
    let scale = (target / width).min(target / height);
    let offset = V2::new(
        (canvas - (max.x - min.x) * scale) / 2.0,
        (canvas - (max.y - min.y) * scale) / 2.0,
    );

    lines
        .iter()
        .map(|line| {
            line.iter()
                .map(|p| {
                    let scaled = (*p - min) * scale + offset;
                    // Flip vertically so that 'up' in the source is 'up' on screen
                    V2::new(scaled.x, canvas - scaled.y)
                })
                .collect()
        })
        .collect()
}
