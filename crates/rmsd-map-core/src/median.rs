//! Representative-point selection via the geometric median.
//!
//! Picks a "central" member of a cluster: compute the geometric median of
//! the embedding points (Weiszfeld iteration), then return the index of
//! the cloud point nearest to it. The median itself usually falls between
//! points; the nearest actual member is what downstream alignment wants
//! as its reference conformer.

use crate::errors::{PathError, Result};
use crate::polyline::Point2;

/// Maximum Weiszfeld iterations before accepting the current estimate.
const MAX_ITERATIONS: usize = 128;

/// Convergence tolerance on the movement of the median estimate, and the
/// guard distance below which an iterate is considered to sit on an input
/// point (where the Weiszfeld weight 1/d blows up).
const TOLERANCE: f64 = 1e-9;

/// Geometric median of a 2D point set by Weiszfeld iteration.
///
/// Returns `None` for an empty set. For a single point the point itself
/// is the median. If an iterate lands on an input point the iteration
/// stops and returns that point (the standard Weiszfeld vertex guard;
/// the 1/d weights are undefined there).
///
/// # Errors
///
/// `InvalidPoint` if any coordinate is non-finite.
pub fn geometric_median(points: &[Point2]) -> Result<Option<Point2>> {
    for (idx, p) in points.iter().enumerate() {
        if !(p[0].is_finite() && p[1].is_finite()) {
            return Err(PathError::point(format!(
                "point {} has non-finite coordinate ({}, {})",
                idx, p[0], p[1]
            )));
        }
    }

    if points.is_empty() {
        return Ok(None);
    }
    if points.len() == 1 {
        return Ok(Some(points[0]));
    }

    // Start from the centroid.
    let n = points.len() as f64;
    let mut estimate = points
        .iter()
        .fold([0.0, 0.0], |acc, p| [acc[0] + p[0], acc[1] + p[1]]);
    estimate = [estimate[0] / n, estimate[1] / n];

    for _ in 0..MAX_ITERATIONS {
        let mut weight_sum = 0.0;
        let mut weighted = [0.0, 0.0];
        let mut on_input_point = None;

        for p in points {
            let dx = p[0] - estimate[0];
            let dy = p[1] - estimate[1];
            let dist = (dx * dx + dy * dy).sqrt();
            if dist < TOLERANCE {
                on_input_point = Some(*p);
                break;
            }
            let w = 1.0 / dist;
            weight_sum += w;
            weighted[0] += p[0] * w;
            weighted[1] += p[1] * w;
        }

        if let Some(p) = on_input_point {
            return Ok(Some(p));
        }

        let next = [weighted[0] / weight_sum, weighted[1] / weight_sum];
        let shift = ((next[0] - estimate[0]).powi(2) + (next[1] - estimate[1]).powi(2)).sqrt();
        estimate = next;
        if shift < TOLERANCE {
            break;
        }
    }

    Ok(Some(estimate))
}

/// Index of the cloud point nearest to the geometric median of the cloud.
///
/// `None` for an empty cloud. Ties go to the lower index.
///
/// # Errors
///
/// `InvalidPoint` if any coordinate is non-finite.
pub fn representative_point_idx(points: &[Point2]) -> Result<Option<usize>> {
    let median = match geometric_median(points)? {
        Some(median) => median,
        None => return Ok(None),
    };

    let mut best_idx = 0;
    let mut best_dist = f64::INFINITY;
    for (idx, p) in points.iter().enumerate() {
        let dist = ((p[0] - median[0]).powi(2) + (p[1] - median[1]).powi(2)).sqrt();
        if dist < best_dist {
            best_dist = dist;
            best_idx = idx;
        }
    }

    Ok(Some(best_idx))
}
