pub mod curve;
pub mod surface;

pub use curve::{Continuity, Curve, CurveType, SpecificCurve};
pub use surface::Surface;
