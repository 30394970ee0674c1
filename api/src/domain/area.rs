//! Boundary area
//!
//! Planar polygon area via the shoelace formula. Coordinates are used as-is
//! (lat as x, lng as y) with no projection, so the result is in squared
//! coordinate units.

use super::entities::Point;

/// Half the shoelace sum, before taking the absolute value.
///
/// Positive for counter-clockwise vertex order, negative for clockwise.
/// The closing edge from the last vertex to the first is implied.
pub fn signed_area(boundary: &[Point]) -> f64 {
    let n = boundary.len();
    let sum: f64 = (0..n)
        .map(|i| {
            let p = boundary[i];
            let q = boundary[(i + 1) % n];
            p.lat * q.lng - q.lat * p.lng
        })
        .sum();
    sum / 2.0
}

/// Enclosed area of a boundary, rounded to the nearest whole unit.
///
/// Callers must pass at least 3 points; shorter inputs come out as 0.
/// Non-finite coordinates yield a non-finite result.
pub fn compute_area(boundary: &[Point]) -> f64 {
    signed_area(boundary).abs().round()
}
