//! Series → polyline normalization for sparkline rendering.
//!
//! Pure geometry, no drawing. Callers hand the points to whatever canvas
//! they have; `y` uses screen orientation (0 at the top, `height` at the
//! bottom), so a canvas whose y axis grows upward flips at the render
//! site.

/// One vertex of a normalized sparkline polyline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathPoint {
    pub x: f64,
    pub y: f64,
}

/// Scale a price series into a `width` × `height` box.
///
/// Sample `i` of `n` lands at `x = i * width / (n - 1)`, so the polyline
/// always spans the full width. Values map linearly from `[min, max]` onto
/// `[0, height]` with the y axis inverted: the maximum sits at `y = 0`,
/// the minimum at `y = height`.
///
/// An empty series produces no points. A single sample sits at the origin
/// column on the bottom edge. A constant series divides by a range of one
/// instead of zero, which pins every point to the bottom edge.
pub fn path_points(samples: &[f64], width: f64, height: f64) -> Vec<PathPoint> {
    if samples.is_empty() {
        return Vec::new();
    }

    let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
    let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = if max > min { max - min } else { 1.0 };

    let last_index = samples.len() - 1;
    let x_step = if last_index == 0 {
        0.0
    } else {
        width / last_index as f64
    };

    samples
        .iter()
        .enumerate()
        .map(|(i, &value)| PathPoint {
            x: i as f64 * x_step,
            y: height - (value - min) / range * height,
        })
        .collect()
}
