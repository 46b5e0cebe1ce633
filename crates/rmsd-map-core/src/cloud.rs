//! Embedded conformer cloud.
//!
//! An [`EmbeddedCloud`] holds the 2D embedding coordinates of a set of
//! conformers, optionally tagged with cluster labels produced upstream
//! (density-based clustering runs outside this crate; labels arrive as
//! data, with `-1` conventionally meaning noise).
//!
//! Points are identified by their 0-based position in the cloud. Every
//! operation that narrows the cloud also reports the original indices so
//! callers can map results back onto parallel collections such as the
//! conformer fragments the embedding was computed from.

use serde::{Deserialize, Serialize};

use crate::errors::{PathError, Result};
use crate::polyline::{Point2, Polyline};
use crate::projector::order_points_along_path;

/// A labeled 2D point cloud over an embedding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmbeddedCloud {
    points: Vec<Point2>,
    labels: Option<Vec<i32>>,
}

impl EmbeddedCloud {
    /// Build an unlabeled cloud.
    ///
    /// # Errors
    ///
    /// `InvalidPoint` if any coordinate is non-finite.
    pub fn new(points: Vec<Point2>) -> Result<Self> {
        validate_points(&points)?;
        Ok(Self {
            points,
            labels: None,
        })
    }

    /// Build a labeled cloud from `(point, cluster label)` rows.
    ///
    /// # Errors
    ///
    /// `InvalidPoint` if any coordinate is non-finite.
    pub fn from_labeled(rows: Vec<(Point2, i32)>) -> Result<Self> {
        let (points, labels): (Vec<Point2>, Vec<i32>) = rows.into_iter().unzip();
        validate_points(&points)?;
        Ok(Self {
            points,
            labels: Some(labels),
        })
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Is empty?
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All points, in index order.
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Point at `idx`. Panics if out of range.
    pub fn point(&self, idx: usize) -> Point2 {
        self.points[idx]
    }

    /// Cluster label of point `idx`, if the cloud is labeled.
    pub fn label(&self, idx: usize) -> Option<i32> {
        self.labels.as_ref().map(|labels| labels[idx])
    }

    /// Whether cluster labels are attached.
    pub fn is_labeled(&self) -> bool {
        self.labels.is_some()
    }

    /// Sorted unique cluster labels present in the cloud.
    pub fn cluster_labels(&self) -> Vec<i32> {
        let mut labels: Vec<i32> = self
            .labels
            .as_deref()
            .unwrap_or_default()
            .to_vec();
        labels.sort_unstable();
        labels.dedup();
        labels
    }

    /// Indices of all points carrying `label`, ascending.
    ///
    /// Empty for unlabeled clouds.
    pub fn label_indices(&self, label: i32) -> Vec<usize> {
        match &self.labels {
            Some(labels) => labels
                .iter()
                .enumerate()
                .filter(|(_, &l)| l == label)
                .map(|(i, _)| i)
                .collect(),
            None => Vec::new(),
        }
    }

    /// Extract the sub-cloud of one cluster together with the mapping from
    /// sub-cloud positions back to indices in this cloud.
    pub fn cluster(&self, label: i32) -> (EmbeddedCloud, Vec<usize>) {
        let indices = self.label_indices(label);
        (self.select(&indices), indices)
    }

    /// Sub-cloud at the given indices, in the given order, keeping labels.
    /// Panics if an index is out of range.
    pub fn select(&self, indices: &[usize]) -> EmbeddedCloud {
        EmbeddedCloud {
            points: indices.iter().map(|&i| self.points[i]).collect(),
            labels: self
                .labels
                .as_ref()
                .map(|labels| indices.iter().map(|&i| labels[i]).collect()),
        }
    }

    /// Order this cloud's indices along a drawn path.
    ///
    /// Thin wrapper over [`order_points_along_path`]; see there for the
    /// threshold and tie-break semantics.
    pub fn order_along(
        &self,
        path: &Polyline,
        distance_threshold: Option<f64>,
    ) -> Result<Vec<usize>> {
        order_points_along_path(path, &self.points, distance_threshold)
    }
}

fn validate_points(points: &[Point2]) -> Result<()> {
    for (idx, p) in points.iter().enumerate() {
        if !(p[0].is_finite() && p[1].is_finite()) {
            return Err(PathError::point(format!(
                "cloud point {} has non-finite coordinate ({}, {})",
                idx, p[0], p[1]
            )));
        }
    }
    Ok(())
}
