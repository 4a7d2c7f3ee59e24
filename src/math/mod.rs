mod frame;
mod interval;

pub use frame::Frame;
pub use interval::{Interval, UvBounds};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Returns a unit vector perpendicular to `v`.
///
/// `v` is expected to be non-zero.
#[must_use]
pub fn perpendicular_dir(v: &Vector3) -> Vector3 {
    let reference = if v.x.abs() < 0.9 {
        Vector3::x()
    } else {
        Vector3::y()
    };
    v.cross(&reference).normalize()
}
