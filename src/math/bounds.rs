//! Ray and axis-aligned bounding box types for pointer picking.
//!
//! Intersection uses the slab method: per axis, the interval of ray
//! parameter `t` inside the box's slab, intersected across all three axes.

use super::vec::Vec3;

/// A ray with a normalized direction.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Ray start point in world space.
    pub origin: Vec3,
    /// Unit direction; normalized at construction.
    pub direction: Vec3,
}

impl Ray {
    /// Create a ray from an origin and a (not necessarily unit) direction.
    #[must_use]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Distance along the ray to the first intersection with `aabb`, or
    /// `None` when the ray misses the box entirely.
    ///
    /// When the origin lies inside the box (`tmin < 0`), the hit is the
    /// exit point `tmax`; the box is rejected only when it sits entirely
    /// behind the origin. Per-axis `min`/`max` ignore `NaN` operands, so a
    /// ray running parallel to a slab exactly on its boundary plane
    /// resolves to a clean miss instead of propagating `NaN`.
    #[must_use]
    pub fn intersect_aabb(&self, aabb: &Aabb) -> Option<f32> {
        let inv_x = 1.0 / self.direction.x;
        let inv_y = 1.0 / self.direction.y;
        let inv_z = 1.0 / self.direction.z;

        let tx1 = (aabb.min.x - self.origin.x) * inv_x;
        let tx2 = (aabb.max.x - self.origin.x) * inv_x;
        let ty1 = (aabb.min.y - self.origin.y) * inv_y;
        let ty2 = (aabb.max.y - self.origin.y) * inv_y;
        let tz1 = (aabb.min.z - self.origin.z) * inv_z;
        let tz2 = (aabb.max.z - self.origin.z) * inv_z;

        let tmin = tx1.min(tx2).max(ty1.min(ty2)).max(tz1.min(tz2));
        let tmax = tx1.max(tx2).min(ty1.max(ty2)).min(tz1.max(tz2));

        if tmax < 0.0 || tmin > tmax {
            return None;
        }
        if tmin < 0.0 {
            // Origin inside the box: first boundary in front is the exit
            return Some(tmax);
        }
        Some(tmin)
    }
}

/// Axis-aligned bounding box given by its corner points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Corner with the smallest coordinates.
    pub min: Vec3,
    /// Corner with the largest coordinates.
    pub max: Vec3,
}

impl Aabb {
    /// Box spanning `min` to `max`.
    #[must_use]
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Box centered at `center` extending `half_extents` along each axis.
    #[must_use]
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box_at_origin() -> Aabb {
        Aabb::from_center_half_extents(Vec3::ZERO, Vec3::new(0.5, 0.5, 0.5))
    }

    #[test]
    fn ray_direction_is_normalized() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -10.0));
        assert_eq!(ray.direction, Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn head_on_hit_reports_entry_distance() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
        let t = ray.intersect_aabb(&unit_box_at_origin());
        assert_eq!(t, Some(4.5));
    }

    #[test]
    fn miss_returns_none() {
        let ray = Ray::new(Vec3::new(0.0, 2.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(ray.intersect_aabb(&unit_box_at_origin()), None);
    }

    #[test]
    fn box_behind_origin_returns_none() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(ray.intersect_aabb(&unit_box_at_origin()), None);
    }

    #[test]
    fn origin_inside_hits_at_exit() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let t = ray.intersect_aabb(&unit_box_at_origin());
        assert_eq!(t, Some(0.5));
    }

    #[test]
    fn diagonal_hit() {
        let ray = Ray::new(Vec3::new(2.0, 2.0, 2.0), Vec3::new(-1.0, -1.0, -1.0));
        let t = ray.intersect_aabb(&unit_box_at_origin());
        // Entry at the (0.5, 0.5, 0.5) corner, 1.5 * sqrt(3) away
        let expected = 1.5 * 3.0_f32.sqrt();
        assert!((t.unwrap_or(0.0) - expected).abs() < 1e-5);
    }

    #[test]
    fn axis_parallel_ray_inside_slab_hits() {
        let ray = Ray::new(Vec3::new(-2.0, 0.25, 0.0), Vec3::new(1.0, 0.0, 0.0));
        let t = ray.intersect_aabb(&unit_box_at_origin());
        assert_eq!(t, Some(1.5));
    }

    #[test]
    fn axis_parallel_ray_on_slab_boundary_misses_cleanly() {
        // Zero Y direction with the origin exactly on the min Y plane
        // produces 0 * inf = NaN in the slab math; the NaN-ignoring
        // min/max turn that into a miss rather than a poisoned result
        let ray = Ray::new(Vec3::new(-2.0, -0.5, 0.0), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(ray.intersect_aabb(&unit_box_at_origin()), None);
    }

    #[test]
    fn grazing_ray_outside_parallel_slab_misses() {
        let ray = Ray::new(Vec3::new(-2.0, 0.7, 0.0), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(ray.intersect_aabb(&unit_box_at_origin()), None);
    }
}
