//! Linear-algebra kernel for the camera and picking systems.
//!
//! Small, allocation-free value types: [`Vec3`]/[`Vec4`] vectors, a
//! column-major [`Mat4`], and the [`Ray`]/[`Aabb`] pair used by pointer
//! picking. Every operation is a pure function of its inputs; degenerate
//! geometry (zero-length vectors, singular matrices) produces a finite
//! fallback value instead of `NaN`.

/// Ray and axis-aligned bounding box intersection.
pub mod bounds;
/// Column-major 4x4 matrix.
pub mod mat4;
/// Three- and four-component vectors.
pub mod vec;

pub use bounds::{Aabb, Ray};
pub use mat4::Mat4;
pub use vec::{Vec3, Vec4};

/// Threshold below which lengths, determinants, and homogeneous `w`
/// components are treated as zero.
pub const EPSILON: f32 = 1e-6;
