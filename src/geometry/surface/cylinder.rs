use crate::error::{GeometryError, Result};
use crate::math::{Frame, Point3, Vector3, TOLERANCE};

use super::Surface;

/// An infinite circular cylinder.
///
/// `u` is the angle around the axis from `ref_dir`, `v` the height along the
/// axis from `center`.
#[derive(Debug, Clone)]
pub struct Cylinder {
    frame: Frame,
    radius: f64,
}

impl Cylinder {
    /// # Errors
    ///
    /// Returns an error if the radius is not positive or `ref_dir` is not a
    /// non-zero direction perpendicular to `axis`.
    pub fn new(center: Point3, radius: f64, axis: Vector3, ref_dir: Vector3) -> Result<Self> {
        if radius < TOLERANCE {
            return Err(
                GeometryError::Degenerate("cylinder radius must be positive".into()).into(),
            );
        }
        Ok(Self {
            frame: Frame::new(center, axis, ref_dir)?,
            radius,
        })
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Surface for Cylinder {
    fn evaluate(&self, u: f64, v: f64) -> Result<Point3> {
        let (s, c) = u.sin_cos();
        Ok(self.frame.point(self.radius * c, self.radius * s, v))
    }

    fn normal(&self, u: f64, _v: f64) -> Result<Vector3> {
        let (s, c) = u.sin_cos();
        Ok(self.frame.direction(c, s, 0.0))
    }

    fn inverse(&self, point: &Point3) -> (f64, f64) {
        let local = self.frame.local(point);
        (local.y.atan2(local.x), local.z)
    }
}
