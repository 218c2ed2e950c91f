use std::ops::Mul;

use super::vec::{Vec3, Vec4};
use super::EPSILON;

/// Column-major 4x4 matrix.
///
/// Element `(col, row)` lives at flat index `col * 4 + row`, the layout
/// OpenGL-style shader uniform uploads expect. All constructors return a
/// new matrix; nothing mutates in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    elements: [f32; 16],
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat4 {
    /// The identity matrix.
    pub const IDENTITY: Mat4 = Mat4::from_diagonal(1.0);

    /// Matrix with `diagonal` on the main diagonal and zero elsewhere.
    #[must_use]
    pub const fn from_diagonal(diagonal: f32) -> Self {
        let mut elements = [0.0; 16];
        elements[0] = diagonal;
        elements[5] = diagonal;
        elements[10] = diagonal;
        elements[15] = diagonal;
        Self { elements }
    }

    /// Read-only flat view of the 16 elements in column-major order.
    ///
    /// This is the bit-exact contract with the external graphics layer:
    /// the slice can be handed to a shader-uniform upload unchanged.
    #[inline]
    #[must_use]
    pub const fn as_slice(&self) -> &[f32; 16] {
        &self.elements
    }

    /// Translation by `t`.
    #[must_use]
    pub const fn translate(t: Vec3) -> Self {
        let mut result = Self::IDENTITY;
        result.elements[12] = t.x;
        result.elements[13] = t.y;
        result.elements[14] = t.z;
        result
    }

    /// Non-uniform scale about the origin.
    #[must_use]
    pub const fn scale(s: Vec3) -> Self {
        let mut result = Self::IDENTITY;
        result.elements[0] = s.x;
        result.elements[5] = s.y;
        result.elements[10] = s.z;
        result
    }

    /// Rotation about the X axis, angle in radians.
    #[must_use]
    pub fn rotate_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        let mut result = Self::IDENTITY;
        result.elements[5] = c;
        result.elements[9] = -s;
        result.elements[6] = s;
        result.elements[10] = c;
        result
    }

    /// Rotation about the Y axis, angle in radians.
    #[must_use]
    pub fn rotate_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        let mut result = Self::IDENTITY;
        result.elements[0] = c;
        result.elements[8] = s;
        result.elements[2] = -s;
        result.elements[10] = c;
        result
    }

    /// Rotation about the Z axis, angle in radians.
    #[must_use]
    pub fn rotate_z(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        let mut result = Self::IDENTITY;
        result.elements[0] = c;
        result.elements[4] = -s;
        result.elements[1] = s;
        result.elements[5] = c;
        result
    }

    /// Rotation from Euler angles in degrees (`x` = pitch, `y` = yaw,
    /// `z` = roll).
    ///
    /// Composes `rotY(yaw) * rotX(pitch) * rotZ(roll)`: yaw applied
    /// outermost, roll innermost. This order determines how multi-axis
    /// rotations combine and must not be reordered.
    #[must_use]
    pub fn from_euler_degrees(angles: Vec3) -> Self {
        let rot_z = Self::rotate_z(angles.z.to_radians());
        let rot_x = Self::rotate_x(angles.x.to_radians());
        let rot_y = Self::rotate_y(angles.y.to_radians());
        rot_y * rot_x * rot_z
    }

    /// Right-handed perspective projection with OpenGL clip-space depth
    /// in `[-1, 1]`.
    ///
    /// `aspect` must be positive; callers substitute `1.0` for degenerate
    /// viewports before calling.
    #[must_use]
    pub fn perspective(fov_y_radians: f32, aspect: f32, near: f32, far: f32) -> Self {
        let tan_half_fov_y = (fov_y_radians / 2.0).tan();
        let mut result = Self::from_diagonal(0.0);
        result.elements[0] = 1.0 / (aspect * tan_half_fov_y);
        result.elements[5] = 1.0 / tan_half_fov_y;
        result.elements[10] = -(far + near) / (far - near);
        result.elements[11] = -1.0;
        result.elements[14] = -(2.0 * far * near) / (far - near);
        result
    }

    /// View matrix looking from `eye` toward `center`.
    ///
    /// Builds an orthonormal basis: forward `f = normalize(center - eye)`,
    /// right `s = normalize(f x world_up)`, true up `u = s x f`
    /// (re-orthogonalized rather than reusing `world_up` raw), then encodes
    /// the inverse of that basis plus translation.
    #[must_use]
    pub fn look_at(eye: Vec3, center: Vec3, world_up: Vec3) -> Self {
        let f = (center - eye).normalize();
        let s = f.cross(world_up).normalize();
        let u = s.cross(f).normalize();

        let mut result = Self::IDENTITY;
        result.elements[0] = s.x;
        result.elements[4] = s.y;
        result.elements[8] = s.z;
        result.elements[1] = u.x;
        result.elements[5] = u.y;
        result.elements[9] = u.z;
        result.elements[2] = -f.x;
        result.elements[6] = -f.y;
        result.elements[10] = -f.z;
        result.elements[12] = -s.dot(eye);
        result.elements[13] = -u.dot(eye);
        result.elements[14] = f.dot(eye);
        result
    }

    /// General inverse via the adjugate/cofactor method.
    ///
    /// Returns [`Mat4::IDENTITY`] when `|det|` falls below [`EPSILON`]
    /// (singular or near-singular input) so downstream math stays finite.
    /// Callers that depend on a true inverse must treat an identity result
    /// as "inversion degenerated".
    #[must_use]
    pub fn inverse(&self) -> Self {
        let m = &self.elements;
        let mut inv = [0.0f32; 16];

        inv[0] = m[5] * m[10] * m[15] - m[5] * m[11] * m[14]
            - m[9] * m[6] * m[15] + m[9] * m[7] * m[14]
            + m[13] * m[6] * m[11] - m[13] * m[7] * m[10];
        inv[4] = -m[4] * m[10] * m[15] + m[4] * m[11] * m[14]
            + m[8] * m[6] * m[15] - m[8] * m[7] * m[14]
            - m[12] * m[6] * m[11] + m[12] * m[7] * m[10];
        inv[8] = m[4] * m[9] * m[15] - m[4] * m[11] * m[13]
            - m[8] * m[5] * m[15] + m[8] * m[7] * m[13]
            + m[12] * m[5] * m[11] - m[12] * m[7] * m[9];
        inv[12] = -m[4] * m[9] * m[14] + m[4] * m[10] * m[13]
            + m[8] * m[5] * m[14] - m[8] * m[6] * m[13]
            - m[12] * m[5] * m[10] + m[12] * m[6] * m[9];
        inv[1] = -m[1] * m[10] * m[15] + m[1] * m[11] * m[14]
            + m[9] * m[2] * m[15] - m[9] * m[3] * m[14]
            - m[13] * m[2] * m[11] + m[13] * m[3] * m[10];
        inv[5] = m[0] * m[10] * m[15] - m[0] * m[11] * m[14]
            - m[8] * m[2] * m[15] + m[8] * m[3] * m[14]
            + m[12] * m[2] * m[11] - m[12] * m[3] * m[10];
        inv[9] = -m[0] * m[9] * m[15] + m[0] * m[11] * m[13]
            + m[8] * m[1] * m[15] - m[8] * m[3] * m[13]
            - m[12] * m[1] * m[11] + m[12] * m[3] * m[9];
        inv[13] = m[0] * m[9] * m[14] - m[0] * m[10] * m[13]
            - m[8] * m[1] * m[14] + m[8] * m[2] * m[13]
            + m[12] * m[1] * m[10] - m[12] * m[2] * m[9];
        inv[2] = m[1] * m[6] * m[15] - m[1] * m[7] * m[14]
            - m[5] * m[2] * m[15] + m[5] * m[3] * m[14]
            + m[13] * m[2] * m[7] - m[13] * m[3] * m[6];
        inv[6] = -m[0] * m[6] * m[15] + m[0] * m[7] * m[14]
            + m[4] * m[2] * m[15] - m[4] * m[3] * m[14]
            - m[12] * m[2] * m[7] + m[12] * m[3] * m[6];
        inv[10] = m[0] * m[5] * m[15] - m[0] * m[7] * m[13]
            - m[4] * m[1] * m[15] + m[4] * m[3] * m[13]
            + m[12] * m[1] * m[7] - m[12] * m[3] * m[5];
        inv[14] = -m[0] * m[5] * m[14] + m[0] * m[6] * m[13]
            + m[4] * m[1] * m[14] - m[4] * m[2] * m[13]
            - m[12] * m[1] * m[6] + m[12] * m[2] * m[5];
        inv[3] = -m[1] * m[6] * m[11] + m[1] * m[7] * m[10]
            + m[5] * m[2] * m[11] - m[5] * m[3] * m[10]
            - m[9] * m[2] * m[7] + m[9] * m[3] * m[6];
        inv[7] = m[0] * m[6] * m[11] - m[0] * m[7] * m[10]
            - m[4] * m[2] * m[11] + m[4] * m[3] * m[10]
            + m[8] * m[2] * m[7] - m[8] * m[3] * m[6];
        inv[11] = -m[0] * m[5] * m[11] + m[0] * m[7] * m[9]
            + m[4] * m[1] * m[11] - m[4] * m[3] * m[9]
            - m[8] * m[1] * m[7] + m[8] * m[3] * m[5];
        inv[15] = m[0] * m[5] * m[10] - m[0] * m[6] * m[9]
            - m[4] * m[1] * m[10] + m[4] * m[2] * m[9]
            + m[8] * m[1] * m[6] - m[8] * m[2] * m[5];

        let det = m[0] * inv[0] + m[1] * inv[4] + m[2] * inv[8] + m[3] * inv[12];
        if det.abs() < EPSILON {
            log::warn!("inverse of singular matrix requested, returning identity");
            return Self::IDENTITY;
        }

        let inv_det = 1.0 / det;
        for e in &mut inv {
            *e *= inv_det;
        }
        Self { elements: inv }
    }

    /// Transform `point` as a homogeneous point (`w = 1`).
    ///
    /// The perspective divide runs only when the resulting `w` is both
    /// away from zero and not already `1`, so affine matrices pass through
    /// untouched and projective degeneracies never divide by zero.
    #[must_use]
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        let h = *self * Vec4::from_vec3(point, 1.0);
        if h.w.abs() > EPSILON && h.w != 1.0 {
            Vec3::new(h.x / h.w, h.y / h.w, h.z / h.w)
        } else {
            h.truncate()
        }
    }

    /// Transform `dir` as a direction (`w = 0`); translation has no effect.
    #[inline]
    #[must_use]
    pub fn transform_direction(&self, dir: Vec3) -> Vec3 {
        (*self * Vec4::from_vec3(dir, 0.0)).truncate()
    }
}

impl Mul for Mat4 {
    type Output = Mat4;

    /// Column-major composition: applying `A * B` to a point transforms by
    /// `B` first, then by `A`.
    fn mul(self, other: Mat4) -> Mat4 {
        let mut product = Mat4::from_diagonal(0.0);
        for c in 0..4 {
            for r in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self.elements[k * 4 + r] * other.elements[c * 4 + k];
                }
                product.elements[c * 4 + r] = sum;
            }
        }
        product
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    fn mul(self, v: Vec4) -> Vec4 {
        let m = &self.elements;
        Vec4::new(
            m[0] * v.x + m[4] * v.y + m[8] * v.z + m[12] * v.w,
            m[1] * v.x + m[5] * v.y + m[9] * v.z + m[13] * v.w,
            m[2] * v.x + m[6] * v.y + m[10] * v.z + m[14] * v.w,
            m[3] * v.x + m[7] * v.y + m[11] * v.z + m[15] * v.w,
        )
    }
}
