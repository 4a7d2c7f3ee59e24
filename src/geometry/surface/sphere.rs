use crate::error::{GeometryError, Result};
use crate::math::{Frame, Point3, Vector3, TOLERANCE};

use super::Surface;

/// A sphere parametrized by longitude `u` around `axis` and latitude `v`
/// in `[-pi/2, pi/2]`, with `v = pi/2` at the north pole.
#[derive(Debug, Clone)]
pub struct Sphere {
    frame: Frame,
    radius: f64,
}

impl Sphere {
    /// # Errors
    ///
    /// Returns an error if the radius is not positive or `ref_dir` is not a
    /// non-zero direction perpendicular to `axis`.
    pub fn new(center: Point3, radius: f64, axis: Vector3, ref_dir: Vector3) -> Result<Self> {
        if radius < TOLERANCE {
            return Err(GeometryError::Degenerate("sphere radius must be positive".into()).into());
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

    fn radial(&self, u: f64, v: f64) -> Vector3 {
        let (su, cu) = u.sin_cos();
        let (sv, cv) = v.sin_cos();
        self.frame.direction(cv * cu, cv * su, sv)
    }
}

impl Surface for Sphere {
    fn evaluate(&self, u: f64, v: f64) -> Result<Point3> {
        Ok(self.frame.origin + self.radial(u, v) * self.radius)
    }

    fn normal(&self, u: f64, v: f64) -> Result<Vector3> {
        // Longitude is undefined at the poles.
        if v.cos().abs() < TOLERANCE {
            return Err(GeometryError::Degenerate("sphere normal at a pole".into()).into());
        }
        Ok(self.radial(u, v))
    }

    fn inverse(&self, point: &Point3) -> (f64, f64) {
        let local = self.frame.local(point) / self.radius;
        (local.y.atan2(local.x), local.z.clamp(-1.0, 1.0).asin())
    }
}
