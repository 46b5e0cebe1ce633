//! Observable path trace.
//!
//! The ordered list of points a drawing surface accumulates as the user
//! clicks out a path: points append in click order, a double-click clears,
//! and one downstream consumer is notified synchronously on every change.
//! This is the widget's essential contract with the analysis side; the
//! rendering surface itself lives elsewhere.

use std::fmt;

use crate::errors::Result;
use crate::polyline::{Point2, Polyline};

/// Callback invoked with the full point list after each mutation.
pub type TraceListener = Box<dyn FnMut(&[Point2])>;

/// An ordered, observable list of path anchor points.
///
/// Unlike [`Polyline`], a trace is unvalidated working state: it may be
/// empty, hold a single point, or contain repeated clicks. Turning it
/// into geometry via [`PathTrace::to_polyline`] is where validation
/// happens.
#[derive(Default)]
pub struct PathTrace {
    points: Vec<Point2>,
    listener: Option<TraceListener>,
}

impl fmt::Debug for PathTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathTrace")
            .field("points", &self.points)
            .field("subscribed", &self.listener.is_some())
            .finish()
    }
}

impl PathTrace {
    /// Empty trace with no subscriber.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current points in insertion order.
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Is empty?
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Append a point (a click on the surface) and notify.
    pub fn push(&mut self, point: Point2) {
        self.points.push(point);
        self.notify();
    }

    /// Remove all points (a clear gesture) and notify.
    pub fn clear(&mut self) {
        self.points.clear();
        self.notify();
    }

    /// Replace the whole list (the analysis side seeding a stored path)
    /// and notify.
    pub fn replace(&mut self, points: Vec<Point2>) {
        self.points = points;
        self.notify();
    }

    /// Register the single downstream consumer, replacing any previous
    /// one. The listener runs synchronously on each subsequent change.
    pub fn subscribe(&mut self, listener: impl FnMut(&[Point2]) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Drop the subscriber.
    pub fn unsubscribe(&mut self) {
        self.listener = None;
    }

    /// Validate the current points into a [`Polyline`].
    ///
    /// # Errors
    ///
    /// Whatever [`Polyline::new`] reports: too few points, repeated
    /// consecutive clicks, non-finite coordinates.
    pub fn to_polyline(&self) -> Result<Polyline> {
        Polyline::new(self.points.clone())
    }

    fn notify(&mut self) {
        if let Some(listener) = self.listener.as_mut() {
            listener(&self.points);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn test_push_and_clear_notify_in_order() {
        let seen: Rc<RefCell<Vec<usize>>> = Rc::new(RefCell::new(Vec::new()));
        let seen_in_listener = Rc::clone(&seen);

        let mut trace = PathTrace::new();
        trace.subscribe(move |points| seen_in_listener.borrow_mut().push(points.len()));

        trace.push([0.0, 0.0]);
        trace.push([1.0, 1.0]);
        trace.clear();
        trace.replace(vec![[2.0, 2.0], [3.0, 3.0], [4.0, 4.0]]);

        assert_eq!(*seen.borrow(), vec![1, 2, 0, 3]);
    }

    #[test]
    fn test_subscribe_replaces_previous_listener() {
        let first = Rc::new(RefCell::new(0usize));
        let second = Rc::new(RefCell::new(0usize));

        let mut trace = PathTrace::new();
        let counter = Rc::clone(&first);
        trace.subscribe(move |_| *counter.borrow_mut() += 1);
        trace.push([0.0, 0.0]);

        let counter = Rc::clone(&second);
        trace.subscribe(move |_| *counter.borrow_mut() += 1);
        trace.push([1.0, 1.0]);

        assert_eq!(*first.borrow(), 1);
        assert_eq!(*second.borrow(), 1);
    }

    #[test]
    fn test_to_polyline_validates() {
        let mut trace = PathTrace::new();
        trace.push([0.0, 0.0]);
        assert!(trace.to_polyline().is_err());

        trace.push([5.0, 0.0]);
        let polyline = trace.to_polyline().unwrap();
        assert_eq!(polyline.anchor_count(), 2);
        assert!((polyline.total_length() - 5.0).abs() < 1e-12);
    }
}
