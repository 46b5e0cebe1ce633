//! Ordering a 2D point cloud along a drawn path.
//!
//! This is the core analysis step: the permutation it returns turns an
//! unordered cluster of conformers into a pseudo-trajectory that follows
//! the user's hand-drawn curve over the embedding.

use std::cmp::Ordering;

use log::debug;

use crate::errors::{PathError, Result};
use crate::polyline::{PathProjection, Point2, Polyline};

/// Project every cloud point onto `path` and return the cloud indices
/// sorted by arc-length position ascending.
///
/// Indices refer to positions in `cloud`, so callers can map the ordering
/// back onto any parallel collection (molecular fragments, table rows).
/// Ties in arc length break by original index ascending (stable sort).
///
/// If `distance_threshold` is given, indices whose perpendicular distance
/// from the path is not strictly less than the threshold are dropped
/// AFTER sorting, so the result is an ordered subsequence rather than a
/// re-sorted filtered set. The comparison is strict `<`; a boundary-equal
/// distance is excluded. Callers are expected to pass a finite threshold
/// >= 0 (a NaN threshold excludes every point).
///
/// The operation is pure: no state is held across calls, and identical
/// inputs always produce identical output. An empty cloud yields an empty
/// ordering.
///
/// # Errors
///
/// `InvalidPoint` if any cloud coordinate is non-finite. Polyline
/// validation happens at [`Polyline::new`], so the path cannot be
/// structurally invalid here.
pub fn order_points_along_path(
    path: &Polyline,
    cloud: &[Point2],
    distance_threshold: Option<f64>,
) -> Result<Vec<usize>> {
    let projections = project_cloud(path, cloud)?;

    let mut order: Vec<usize> = (0..projections.len()).collect();
    // Stable sort: equal arc lengths keep original index order.
    order.sort_by(|&a, &b| {
        projections[a]
            .arc_length
            .partial_cmp(&projections[b].arc_length)
            .unwrap_or(Ordering::Equal)
    });

    if let Some(threshold) = distance_threshold {
        let before = order.len();
        order.retain(|&idx| projections[idx].distance < threshold);
        debug!(
            "path ordering kept {}/{} points within distance {}",
            order.len(),
            before,
            threshold
        );
    }

    Ok(order)
}

/// Project every cloud point onto `path`, preserving cloud order.
///
/// Validation is eager: the whole cloud is checked for finite coordinates
/// before any geometry is computed.
pub fn project_cloud(path: &Polyline, cloud: &[Point2]) -> Result<Vec<PathProjection>> {
    for (idx, p) in cloud.iter().enumerate() {
        if !(p[0].is_finite() && p[1].is_finite()) {
            return Err(PathError::point(format!(
                "cloud point {} has non-finite coordinate ({}, {})",
                idx, p[0], p[1]
            )));
        }
    }

    cloud.iter().map(|&p| path.project(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn horizontal() -> Polyline {
        Polyline::new(vec![[0.0, 0.0], [10.0, 0.0]]).unwrap()
    }

    #[test]
    fn test_orders_by_arc_length_regardless_of_input_order() {
        let cloud = vec![[3.0, 0.0], [7.0, 0.0], [1.0, 0.0]];
        let order = order_points_along_path(&horizontal(), &cloud, None).unwrap();
        assert_eq!(order, vec![2, 0, 1]);
    }

    #[test]
    fn test_threshold_filters_after_sorting() {
        // (5, 1) is distance 1 from the line, (5, 0.4) is distance 0.4.
        let cloud = vec![[5.0, 1.0], [2.0, 0.4], [5.0, 0.4]];
        let order = order_points_along_path(&horizontal(), &cloud, Some(0.5)).unwrap();
        assert_eq!(order, vec![1, 2]);
    }

    #[test]
    fn test_threshold_is_strictly_less_than() {
        let cloud = vec![[5.0, 1.0]];
        let order = order_points_along_path(&horizontal(), &cloud, Some(1.0)).unwrap();
        assert!(order.is_empty());
    }

    #[test]
    fn test_ties_break_by_original_index() {
        // Three points coincident on the line share an arc length.
        let cloud = vec![[4.0, 0.0], [4.0, 0.0], [2.0, 0.0], [4.0, 0.0]];
        let order = order_points_along_path(&horizontal(), &cloud, None).unwrap();
        assert_eq!(order, vec![2, 0, 1, 3]);
    }

    #[test]
    fn test_empty_cloud_is_not_an_error() {
        let order = order_points_along_path(&horizontal(), &[], None).unwrap();
        assert!(order.is_empty());
    }

    #[test]
    fn test_non_finite_cloud_point_is_rejected() {
        let cloud = vec![[1.0, 0.0], [f64::NAN, 2.0]];
        let err = order_points_along_path(&horizontal(), &cloud, None).unwrap_err();
        match err {
            PathError::InvalidPoint(msg) => assert!(msg.contains("cloud point 1"), "{msg}"),
            other => panic!("expected InvalidPoint, got {other:?}"),
        }
    }

    #[test]
    fn test_idempotent() {
        let cloud = vec![[9.0, 0.2], [0.5, -0.1], [4.4, 0.0], [12.0, 3.0]];
        let path = Polyline::new(vec![[0.0, 0.0], [5.0, 0.5], [10.0, 0.0]]).unwrap();
        let first = order_points_along_path(&path, &cloud, Some(2.0)).unwrap();
        let second = order_points_along_path(&path, &cloud, Some(2.0)).unwrap();
        assert_eq!(first, second);
    }
}
