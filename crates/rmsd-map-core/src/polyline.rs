//! 2D polyline with arc-length bookkeeping and point projection.
//!
//! A [`Polyline`] is the validated form of a user-drawn path: an ordered
//! sequence of at least two distinct anchor points. Insertion order is
//! meaningful - it defines the traversal direction and therefore the
//! arc-length coordinate that [`Polyline::project`] reports.

use serde::{Deserialize, Serialize};

use crate::errors::{PathError, Result};

/// A 2D point in data-space coordinates.
pub type Point2 = [f64; 2];

/// Result of projecting a point onto a polyline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathProjection {
    /// Distance along the polyline from its start to the foot of the
    /// projection, clamped to the polyline (never extrapolated past the
    /// first or last anchor).
    pub arc_length: f64,
    /// Minimum Euclidean distance from the point to the polyline.
    pub distance: f64,
    /// Index of the segment the foot lies on.
    pub segment: usize,
    /// The nearest point on the polyline.
    pub foot: Point2,
}

/// An ordered sequence of straight segments between anchor points.
///
/// Construction validates eagerly: at least two anchors, every coordinate
/// finite, and no zero-length segment. A valid `Polyline` therefore always
/// has positive total length, and projection onto it cannot fail for
/// structural reasons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    anchors: Vec<Point2>,
    /// Cumulative arc length up to each anchor; `cum_lengths[0] == 0.0`.
    cum_lengths: Vec<f64>,
}

#[inline]
fn is_finite_point(p: Point2) -> bool {
    p[0].is_finite() && p[1].is_finite()
}

#[inline]
fn distance(a: Point2, b: Point2) -> f64 {
    let dx = b[0] - a[0];
    let dy = b[1] - a[1];
    (dx * dx + dy * dy).sqrt()
}

/// Project `p` onto the segment `a -> b`, returning the parameter along
/// the segment (clamped to `[0, |ab|]`), the distance to the foot, and the
/// foot itself. The segment is guaranteed non-degenerate by construction.
fn project_onto_segment(p: Point2, a: Point2, b: Point2) -> (f64, f64, Point2) {
    let vx = b[0] - a[0];
    let vy = b[1] - a[1];
    let seg_len = (vx * vx + vy * vy).sqrt();

    let t = (((p[0] - a[0]) * vx + (p[1] - a[1]) * vy) / seg_len).clamp(0.0, seg_len);

    let foot = [a[0] + t * vx / seg_len, a[1] + t * vy / seg_len];
    let dist = distance(p, foot);
    (t, dist, foot)
}

impl Polyline {
    /// Build a polyline from anchor points in drawing order.
    ///
    /// # Errors
    ///
    /// `InvalidPolyline` for fewer than two anchors or any zero-length
    /// segment (identical consecutive anchors); `InvalidPoint` for any
    /// non-finite coordinate.
    pub fn new(anchors: Vec<Point2>) -> Result<Self> {
        if anchors.len() < 2 {
            return Err(PathError::polyline(format!(
                "need at least 2 anchor points, got {}",
                anchors.len()
            )));
        }

        for (i, p) in anchors.iter().enumerate() {
            if !is_finite_point(*p) {
                return Err(PathError::point(format!(
                    "anchor {} has non-finite coordinate ({}, {})",
                    i, p[0], p[1]
                )));
            }
        }

        let mut cum_lengths = Vec::with_capacity(anchors.len());
        cum_lengths.push(0.0);
        let mut total = 0.0;
        for i in 1..anchors.len() {
            let seg = distance(anchors[i - 1], anchors[i]);
            if seg == 0.0 {
                return Err(PathError::polyline(format!(
                    "zero-length segment between anchors {} and {}",
                    i - 1,
                    i
                )));
            }
            total += seg;
            cum_lengths.push(total);
        }

        Ok(Self {
            anchors,
            cum_lengths,
        })
    }

    /// Anchor points in traversal order.
    #[inline]
    pub fn anchors(&self) -> &[Point2] {
        &self.anchors
    }

    /// Number of anchor points (always >= 2).
    #[inline]
    pub fn anchor_count(&self) -> usize {
        self.anchors.len()
    }

    /// Number of segments (always >= 1).
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.anchors.len() - 1
    }

    /// Total arc length of the polyline (always > 0).
    #[inline]
    pub fn total_length(&self) -> f64 {
        *self
            .cum_lengths
            .last()
            .unwrap_or(&0.0)
    }

    /// Euclidean lengths of the individual segments.
    pub fn segment_lengths(&self) -> Vec<f64> {
        self.cum_lengths
            .windows(2)
            .map(|w| w[1] - w[0])
            .collect()
    }

    /// Orthogonally project a point onto the polyline, choosing the
    /// closest of all constituent segments.
    ///
    /// The reported arc length is measured along the polyline, not along a
    /// straight chord, and is clamped to `[0, total_length]`.
    ///
    /// # Errors
    ///
    /// `InvalidPoint` if the point has a non-finite coordinate.
    pub fn project(&self, point: Point2) -> Result<PathProjection> {
        if !is_finite_point(point) {
            return Err(PathError::point(format!(
                "cannot project non-finite point ({}, {})",
                point[0], point[1]
            )));
        }

        let mut best = PathProjection {
            arc_length: 0.0,
            distance: f64::INFINITY,
            segment: 0,
            foot: self.anchors[0],
        };

        for i in 0..self.segment_count() {
            let (t, dist, foot) = project_onto_segment(point, self.anchors[i], self.anchors[i + 1]);
            if dist < best.distance {
                best = PathProjection {
                    arc_length: self.cum_lengths[i] + t,
                    distance: dist,
                    segment: i,
                    foot,
                };
            }
        }

        Ok(best)
    }
}
