use serde::Serialize;

use super::Point2;

/// A closed 1D parameter range `[a, b]`.
///
/// The empty interval is `[+inf, -inf]`. It is what a curveless edge reports
/// as its parameter range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Interval {
    /// Lower bound.
    pub a: f64,
    /// Upper bound.
    pub b: f64,
}

impl Interval {
    /// Creates an interval, swapping the bounds if needed.
    #[must_use]
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Self { a, b }
        } else {
            Self { a: b, b: a }
        }
    }

    /// Returns the empty interval.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            a: f64::INFINITY,
            b: f64::NEG_INFINITY,
        }
    }

    /// Whether the interval contains no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.a > self.b
    }

    /// Length of the interval, 0 when empty.
    #[must_use]
    pub fn length(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.b - self.a
        }
    }

    /// Midpoint of the interval.
    #[must_use]
    pub fn middle(&self) -> f64 {
        0.5 * (self.a + self.b)
    }
}

impl Default for Interval {
    fn default() -> Self {
        Self::empty()
    }
}

/// Parametric `(u, v)` bounds of a face.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UvBounds {
    /// Range of the `u` parameter.
    pub u: Interval,
    /// Range of the `v` parameter.
    pub v: Interval,
}

impl UvBounds {
    /// Creates bounds from the two parameter ranges.
    #[must_use]
    pub fn new(u: Interval, v: Interval) -> Self {
        Self { u, v }
    }

    /// Center of the parameter box.
    #[must_use]
    pub fn center(&self) -> Point2 {
        Point2::new(self.u.middle(), self.v.middle())
    }
}
