use crate::error::{GeometryError, Result};
use crate::math::{Frame, Point3, Vector3, TOLERANCE};

use super::Surface;

/// An unbounded plane through `origin` spanned by two orthogonal directions.
///
/// `P(u, v) = origin + u * u_dir + v * v_dir`, with unit directions and
/// normal `u_dir x v_dir`.
#[derive(Debug, Clone)]
pub struct Plane {
    frame: Frame,
}

impl Plane {
    /// # Errors
    ///
    /// Returns an error if either direction is zero or they are not
    /// orthogonal.
    pub fn new(origin: Point3, u_dir: Vector3, v_dir: Vector3) -> Result<Self> {
        let frame = Frame::new(origin, u_dir.cross(&v_dir), u_dir)?;
        // A non-zero cross product means v_dir is non-zero too.
        if frame.x.dot(&v_dir.normalize()).abs() > TOLERANCE {
            return Err(
                GeometryError::Degenerate("plane directions must be orthogonal".into()).into(),
            );
        }
        Ok(Self { frame })
    }

    #[must_use]
    pub fn origin(&self) -> &Point3 {
        &self.frame.origin
    }

    #[must_use]
    pub fn plane_normal(&self) -> &Vector3 {
        &self.frame.z
    }
}

impl Surface for Plane {
    fn evaluate(&self, u: f64, v: f64) -> Result<Point3> {
        Ok(self.frame.point(u, v, 0.0))
    }

    fn normal(&self, _u: f64, _v: f64) -> Result<Vector3> {
        Ok(self.frame.z)
    }

    fn inverse(&self, point: &Point3) -> (f64, f64) {
        let local = self.frame.local(point);
        (local.x, local.y)
    }
}
