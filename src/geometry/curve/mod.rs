mod circle;
mod conic;
mod freeform;
mod line;

pub use circle::Circle;
pub use conic::{Ellipse, Hyperbola, Parabola};
pub use freeform::{BSplineCurve, BezierCurve, OffsetCurve};
pub use line::Line;

use std::fmt;

use serde::Serialize;

use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3};

/// Trait for parametric curves in 3D space.
pub trait Curve {
    /// Evaluates the curve at parameter `t`, returning the 3D point.
    ///
    /// # Errors
    ///
    /// Returns an error if evaluation fails.
    fn evaluate(&self, t: f64) -> Result<Point3>;

    /// Computes the (unnormalized) first derivative at parameter `t`.
    ///
    /// # Errors
    ///
    /// Returns an error if evaluation fails.
    fn derivative(&self, t: f64) -> Result<Vector3>;

    /// Length of the curve between parameters `t0` and `t1`.
    fn length(&self, t0: f64, t1: f64) -> f64;

    /// Whether the curve is periodic in its parameter.
    fn is_periodic(&self) -> bool;

    /// Classification of this curve.
    fn curve_type(&self) -> CurveType;
}

/// Classification tag of an edge curve.
///
/// Kernels report the classification as a numeric code; the codes follow the
/// ordering shared by the common B-rep kernels (`0` = line ... `8` = other).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveType {
    Line,
    Circle,
    Ellipse,
    Hyperbola,
    Parabola,
    Bezier,
    #[serde(rename = "bspline")]
    BSpline,
    Offset,
    Other,
}

impl CurveType {
    /// All curve types, in code order.
    pub const ALL: [CurveType; 9] = [
        CurveType::Line,
        CurveType::Circle,
        CurveType::Ellipse,
        CurveType::Hyperbola,
        CurveType::Parabola,
        CurveType::Bezier,
        CurveType::BSpline,
        CurveType::Offset,
        CurveType::Other,
    ];

    /// Numeric kernel code of this curve type.
    #[must_use]
    pub fn code(self) -> u32 {
        match self {
            CurveType::Line => 0,
            CurveType::Circle => 1,
            CurveType::Ellipse => 2,
            CurveType::Hyperbola => 3,
            CurveType::Parabola => 4,
            CurveType::Bezier => 5,
            CurveType::BSpline => 6,
            CurveType::Offset => 7,
            CurveType::Other => 8,
        }
    }

    /// Lowercase name, e.g. `"bspline"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CurveType::Line => "line",
            CurveType::Circle => "circle",
            CurveType::Ellipse => "ellipse",
            CurveType::Hyperbola => "hyperbola",
            CurveType::Parabola => "parabola",
            CurveType::Bezier => "bezier",
            CurveType::BSpline => "bspline",
            CurveType::Offset => "offset",
            CurveType::Other => "other",
        }
    }
}

impl TryFrom<u32> for CurveType {
    type Error = GeometryError;

    fn try_from(code: u32) -> std::result::Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.code() == code)
            .ok_or(GeometryError::UnsupportedCurveType { code })
    }
}

impl fmt::Display for CurveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An edge curve together with its kind-specific data.
#[derive(Debug, Clone)]
pub enum SpecificCurve {
    Line(Line),
    Circle(Circle),
    Ellipse(Ellipse),
    Hyperbola(Hyperbola),
    Parabola(Parabola),
    Bezier(BezierCurve),
    BSpline(BSplineCurve),
    Offset(OffsetCurve),
    /// A curve the kernel classifies but does not describe further.
    Other,
}

impl SpecificCurve {
    /// The classification tag of this curve.
    #[must_use]
    pub fn curve_type(&self) -> CurveType {
        match self {
            SpecificCurve::Line(_) => CurveType::Line,
            SpecificCurve::Circle(_) => CurveType::Circle,
            SpecificCurve::Ellipse(_) => CurveType::Ellipse,
            SpecificCurve::Hyperbola(_) => CurveType::Hyperbola,
            SpecificCurve::Parabola(_) => CurveType::Parabola,
            SpecificCurve::Bezier(_) => CurveType::Bezier,
            SpecificCurve::BSpline(_) => CurveType::BSpline,
            SpecificCurve::Offset(_) => CurveType::Offset,
            SpecificCurve::Other => CurveType::Other,
        }
    }
}

/// Order of geometric continuity between two faces across an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Continuity {
    /// Positional only.
    C0,
    /// Tangent plane continuous.
    G1,
    C1,
    /// Curvature continuous.
    G2,
    C2,
    C3,
    /// Infinitely smooth.
    CN,
}

impl fmt::Display for Continuity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Continuity::C0 => "C0",
            Continuity::G1 => "G1",
            Continuity::C1 => "C1",
            Continuity::G2 => "G2",
            Continuity::C2 => "C2",
            Continuity::C3 => "C3",
            Continuity::CN => "CN",
        };
        f.write_str(name)
    }
}
