//! Free-form and derived curve descriptors.

use crate::math::{Point3, Vector3};

use super::CurveType;

/// A Bezier curve given by its control points.
#[derive(Debug, Clone, PartialEq)]
pub struct BezierCurve {
    pub poles: Vec<Point3>,
    /// Per-pole weights; `None` for a polynomial (non-rational) curve.
    pub weights: Option<Vec<f64>>,
}

/// A B-spline curve in poles / knots / multiplicities form.
#[derive(Debug, Clone, PartialEq)]
pub struct BSplineCurve {
    pub degree: usize,
    pub poles: Vec<Point3>,
    pub weights: Option<Vec<f64>>,
    pub knots: Vec<f64>,
    pub multiplicities: Vec<usize>,
    pub periodic: bool,
}

/// A curve offset from a planar basis curve.
#[derive(Debug, Clone, PartialEq)]
pub struct OffsetCurve {
    /// Classification of the curve being offset.
    pub basis: CurveType,
    pub distance: f64,
    /// Reference direction the offset is taken against.
    pub direction: Vector3,
}

impl BezierCurve {
    #[must_use]
    pub fn degree(&self) -> usize {
        self.poles.len().saturating_sub(1)
    }

    #[must_use]
    pub fn is_rational(&self) -> bool {
        is_rational(self.weights.as_deref())
    }
}

impl BSplineCurve {
    #[must_use]
    pub fn is_rational(&self) -> bool {
        is_rational(self.weights.as_deref())
    }
}

/// Weights make a curve rational only when they are not all equal.
fn is_rational(weights: Option<&[f64]>) -> bool {
    match weights {
        Some([first, rest @ ..]) => rest.iter().any(|w| (w - first).abs() > f64::EPSILON),
        _ => false,
    }
}
