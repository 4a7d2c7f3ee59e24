mod cylinder;
mod plane;
mod sphere;

pub use cylinder::Cylinder;
pub use plane::Plane;
pub use sphere::Sphere;

use crate::error::Result;
use crate::math::{Point3, Vector3};

/// Trait for parametric surfaces in 3D space.
pub trait Surface {
    /// Evaluates the surface at parameters `(u, v)`, returning the 3D point.
    ///
    /// # Errors
    ///
    /// Returns an error if evaluation fails.
    fn evaluate(&self, u: f64, v: f64) -> Result<Point3>;

    /// Computes the unit surface normal at parameters `(u, v)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the normal is degenerate (e.g. at a pole).
    fn normal(&self, u: f64, v: f64) -> Result<Vector3>;

    /// Computes the `(u, v)` parameters of a point lying on the surface.
    fn inverse(&self, point: &Point3) -> (f64, f64);
}
