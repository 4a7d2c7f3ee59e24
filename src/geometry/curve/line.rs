use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

use super::{Curve, CurveType};

/// Straight edge carrier, `P(t) = origin + t * direction` with a unit
/// direction so that `t` is arc length.
#[derive(Debug, Clone)]
pub struct Line {
    origin: Point3,
    direction: Vector3,
}

impl Line {
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] for a vanishing direction.
    pub fn new(origin: Point3, direction: Vector3) -> Result<Self> {
        match direction.try_normalize(TOLERANCE) {
            Some(direction) => Ok(Self { origin, direction }),
            None => Err(GeometryError::ZeroVector.into()),
        }
    }

    /// Creates the line through `start` and `end`, returning it with the
    /// parameter of `end` (the parameter of `start` is 0).
    ///
    /// # Errors
    ///
    /// Returns an error if the points coincide.
    pub fn through(start: Point3, end: Point3) -> Result<(Self, f64)> {
        let line = Self::new(start, end - start)?;
        Ok((line, (end - start).norm()))
    }

    #[must_use]
    pub fn origin(&self) -> &Point3 {
        &self.origin
    }

    #[must_use]
    pub fn direction(&self) -> &Vector3 {
        &self.direction
    }
}

impl Curve for Line {
    fn evaluate(&self, t: f64) -> Result<Point3> {
        Ok(self.origin + self.direction * t)
    }

    fn derivative(&self, _t: f64) -> Result<Vector3> {
        Ok(self.direction)
    }

    fn length(&self, t0: f64, t1: f64) -> f64 {
        (t1 - t0).abs()
    }

    fn is_periodic(&self) -> bool {
        false
    }

    fn curve_type(&self) -> CurveType {
        CurveType::Line
    }
}
