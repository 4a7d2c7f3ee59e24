use crate::error::{GeometryError, Result};
use crate::math::{Frame, Point3, Vector3, TOLERANCE};

use super::{Curve, CurveType};

/// A full circle, parametrized by angle from the frame's `x` direction.
///
/// `P(t) = origin + r * (cos(t) * x + sin(t) * y)`, periodic in `2*pi`.
#[derive(Debug, Clone)]
pub struct Circle {
    frame: Frame,
    radius: f64,
}

impl Circle {
    /// Creates a circle around `normal` starting at `ref_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not positive or the directions do
    /// not form a valid frame.
    pub fn new(center: Point3, radius: f64, normal: Vector3, ref_dir: Vector3) -> Result<Self> {
        if radius < TOLERANCE {
            return Err(GeometryError::Degenerate("circle radius must be positive".into()).into());
        }
        Ok(Self {
            frame: Frame::new(center, normal, ref_dir)?,
            radius,
        })
    }

    #[must_use]
    pub fn center(&self) -> &Point3 {
        &self.frame.origin
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[must_use]
    pub fn normal(&self) -> &Vector3 {
        &self.frame.z
    }

    /// Direction of the point at `t = 0`.
    #[must_use]
    pub fn ref_dir(&self) -> &Vector3 {
        &self.frame.x
    }
}

impl Curve for Circle {
    fn evaluate(&self, t: f64) -> Result<Point3> {
        let (s, c) = t.sin_cos();
        Ok(self.frame.point(self.radius * c, self.radius * s, 0.0))
    }

    fn derivative(&self, t: f64) -> Result<Vector3> {
        let (s, c) = t.sin_cos();
        Ok(self.frame.direction(-self.radius * s, self.radius * c, 0.0))
    }

    fn length(&self, t0: f64, t1: f64) -> f64 {
        self.radius * (t1 - t0).abs()
    }

    fn is_periodic(&self) -> bool {
        true
    }

    fn curve_type(&self) -> CurveType {
        CurveType::Circle
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{PI, TAU};

    #[test]
    fn quarter_turns() {
        let c = Circle::new(Point3::new(0.0, 0.0, 1.0), 2.0, Vector3::z(), Vector3::x()).unwrap();
        assert_relative_eq!(c.evaluate(0.0).unwrap(), Point3::new(2.0, 0.0, 1.0), epsilon = 1e-12);
        assert_relative_eq!(c.evaluate(PI / 2.0).unwrap(), Point3::new(0.0, 2.0, 1.0), epsilon = 1e-12);
        assert_relative_eq!(c.derivative(0.0).unwrap(), Vector3::new(0.0, 2.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn flipped_normal_runs_backwards() {
        let c = Circle::new(Point3::origin(), 1.0, -Vector3::z(), Vector3::x()).unwrap();
        assert_relative_eq!(c.evaluate(PI / 2.0).unwrap(), Point3::new(0.0, -1.0, 0.0), epsilon = 1e-12);
        assert_relative_eq!(*c.normal(), -Vector3::z());
    }

    #[test]
    fn length_and_period() {
        let c = Circle::new(Point3::origin(), 1.5, Vector3::y(), Vector3::z()).unwrap();
        assert_relative_eq!(c.length(TAU, 0.0), 1.5 * TAU);
        assert!(c.is_periodic());
        assert_eq!(c.curve_type(), CurveType::Circle);
    }

    #[test]
    fn invalid_inputs() {
        assert!(Circle::new(Point3::origin(), 0.0, Vector3::z(), Vector3::x()).is_err());
        assert!(Circle::new(Point3::origin(), 1.0, Vector3::z(), Vector3::new(1.0, 0.0, 1.0)).is_err());
    }
}
