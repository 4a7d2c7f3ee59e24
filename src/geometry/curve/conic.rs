//! Conic curve descriptors reported by kernels through
//! [`SpecificCurve`](super::SpecificCurve).
//!
//! All conics share a placement: a center (or apex), a plane normal and an
//! in-plane reference direction for the major axis.

use crate::math::{Point3, Vector3};

/// An ellipse.
#[derive(Debug, Clone, PartialEq)]
pub struct Ellipse {
    pub center: Point3,
    pub normal: Vector3,
    pub major_dir: Vector3,
    pub major_radius: f64,
    pub minor_radius: f64,
}

/// One branch of a hyperbola.
#[derive(Debug, Clone, PartialEq)]
pub struct Hyperbola {
    pub center: Point3,
    pub normal: Vector3,
    pub major_dir: Vector3,
    pub major_radius: f64,
    pub minor_radius: f64,
}

/// A parabola with its apex at `apex`, opening along `axis_dir`.
#[derive(Debug, Clone, PartialEq)]
pub struct Parabola {
    pub apex: Point3,
    pub normal: Vector3,
    pub axis_dir: Vector3,
    /// Distance between the apex and the focus.
    pub focal: f64,
}

impl Ellipse {
    /// Eccentricity, `sqrt(1 - (b/a)^2)`.
    #[must_use]
    pub fn eccentricity(&self) -> f64 {
        let ratio = self.minor_radius / self.major_radius;
        (1.0 - ratio * ratio).max(0.0).sqrt()
    }
}

impl Hyperbola {
    /// Eccentricity, `sqrt(1 + (b/a)^2)`.
    #[must_use]
    pub fn eccentricity(&self) -> f64 {
        let ratio = self.minor_radius / self.major_radius;
        (1.0 + ratio * ratio).sqrt()
    }
}
