//! Pointer picking: cursor position to world-space ray to nearest object.
//!
//! The cursor is unprojected through the inverse projection and view
//! matrices into a world-space ray, then tested against the axis-aligned
//! bounding box of every scene object. The nearest non-negative hit wins;
//! ties resolve to the earliest object in the input sequence, so results
//! are deterministic for a given scene order.

use crate::math::{Mat4, Ray, Vec3};
use crate::scene::SceneObject;

/// Build the world-space ray under a cursor position.
///
/// `cursor_x`/`cursor_y` are pixels measured from the viewport's top-left
/// corner. Returns `None` when either viewport dimension is not positive.
///
/// The cursor maps to normalized device coordinates with the Y axis
/// flipped (pixel origin top-left, NDC origin bottom-left); the near and
/// far clip-space points are pulled back through `projection.inverse()`
/// and `view.inverse()`, and the ray runs from the near point toward the
/// far point.
#[must_use]
pub fn screen_ray(
    cursor_x: f32,
    cursor_y: f32,
    viewport_width: f32,
    viewport_height: f32,
    view: &Mat4,
    projection: &Mat4,
) -> Option<Ray> {
    if viewport_width <= 0.0 || viewport_height <= 0.0 {
        return None;
    }

    let ndc_x = 2.0 * cursor_x / viewport_width - 1.0;
    let ndc_y = 1.0 - 2.0 * cursor_y / viewport_height;

    let inv_projection = projection.inverse();
    let inv_view = view.inverse();

    // Near and far plane points in NDC, unprojected to world space. The
    // w guard inside transform_point covers degenerate projections.
    let near_eye = inv_projection.transform_point(Vec3::new(ndc_x, ndc_y, -1.0));
    let far_eye = inv_projection.transform_point(Vec3::new(ndc_x, ndc_y, 1.0));
    let near_world = inv_view.transform_point(near_eye);
    let far_world = inv_view.transform_point(far_eye);

    Some(Ray::new(near_world, far_world - near_world))
}

/// Resolve the nearest object under a cursor position.
///
/// Each object's bounding box is derived from its position and scale (see
/// [`SceneObject::aabb`]). Returns the index of the object with the
/// smallest non-negative hit distance, or `None` when the cursor ray
/// misses everything, `objects` is empty, or the viewport is degenerate.
///
/// Equal hit distances resolve to the earliest index. Re-centering the
/// camera on the result is left to the caller.
#[must_use]
pub fn pick(
    cursor_x: f32,
    cursor_y: f32,
    viewport_width: f32,
    viewport_height: f32,
    view: &Mat4,
    projection: &Mat4,
    objects: &[SceneObject],
) -> Option<usize> {
    if objects.is_empty() {
        return None;
    }
    let ray = screen_ray(
        cursor_x,
        cursor_y,
        viewport_width,
        viewport_height,
        view,
        projection,
    )?;

    let mut nearest: Option<(usize, f32)> = None;
    for (index, object) in objects.iter().enumerate() {
        if let Some(t) = ray.intersect_aabb(&object.aabb()) {
            let closer = nearest.is_none_or(|(_, best)| t < best);
            if closer {
                nearest = Some((index, t));
            }
        }
    }

    match nearest {
        Some((index, t)) => {
            log::debug!("pick hit object {index} at t = {t:.3}");
            Some(index)
        }
        None => {
            log::trace!("pick missed at ({cursor_x}, {cursor_y})");
            None
        }
    }
}
