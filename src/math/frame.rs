use crate::error::{GeometryError, Result};

use super::{Point3, Vector3, TOLERANCE};

/// A right-handed orthonormal coordinate system.
///
/// `z` is the main axis, `x` the reference direction, `y = z x x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub origin: Point3,
    pub x: Vector3,
    pub y: Vector3,
    pub z: Vector3,
}

impl Frame {
    /// Builds a frame from a main axis and a reference direction.
    ///
    /// Both directions are normalized.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if either direction vanishes and
    /// [`GeometryError::Degenerate`] if they are not perpendicular.
    pub fn new(origin: Point3, axis: Vector3, ref_dir: Vector3) -> Result<Self> {
        let z = unit(axis)?;
        let x = unit(ref_dir)?;
        if z.dot(&x).abs() > TOLERANCE {
            return Err(GeometryError::Degenerate(
                "reference direction must be perpendicular to the axis".into(),
            )
            .into());
        }
        Ok(Self {
            origin,
            x,
            y: z.cross(&x),
            z,
        })
    }

    /// World direction of local components `(a, b, c)`.
    #[must_use]
    pub fn direction(&self, a: f64, b: f64, c: f64) -> Vector3 {
        self.x * a + self.y * b + self.z * c
    }

    /// World point at local coordinates `(a, b, c)`.
    #[must_use]
    pub fn point(&self, a: f64, b: f64, c: f64) -> Point3 {
        self.origin + self.direction(a, b, c)
    }

    /// Local coordinates of a world point.
    #[must_use]
    pub fn local(&self, p: &Point3) -> Vector3 {
        let d = p - self.origin;
        Vector3::new(d.dot(&self.x), d.dot(&self.y), d.dot(&self.z))
    }
}

fn unit(v: Vector3) -> Result<Vector3> {
    let len = v.norm();
    if len < TOLERANCE {
        return Err(GeometryError::ZeroVector.into());
    }
    Ok(v / len)
}
