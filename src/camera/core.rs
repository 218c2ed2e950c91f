use super::input::MoveDirection;
use crate::math::{Mat4, Vec3};
use crate::options::CameraOptions;

/// Smallest distance the zoom operation lets the eye approach the focal
/// point. Prevents the eye crossing through the target, which would flip
/// the front vector.
const MIN_ZOOM_DISTANCE: f32 = 0.1;

/// Pitch is clamped inside the open interval at the poles, where the
/// right vector loses its definition.
const PITCH_LIMIT_DEGREES: f32 = 89.9;

/// Below this eye-to-target distance, `set_focal_point` nudges the eye
/// backward to restore a usable orbit offset.
const RETARGET_MIN_DISTANCE: f32 = 0.01;

/// Offsets shorter than this are treated as coincident points.
const COINCIDENT_DISTANCE: f32 = 0.001;

/// Floor for the distance-scaled pan speed so the camera never freezes
/// at very small orbit distances.
const MIN_PAN_SPEED: f32 = 0.001;

/// Orbit camera with an optional free-fly movement mode.
///
/// Source-of-truth state is the spherical orbit: `focal_point`,
/// `distance`, `yaw`, `pitch`, and the fixed `world_up`. The eye
/// `position` and the `front`/`right`/`up` basis are re-derived after
/// every mutation and are only readable from outside, so the two can
/// never drift apart. Free-fly movement translates the focal point (and
/// with it the derived eye) without touching the orbit angles.
///
/// # Angle convention
///
/// Yaw is the azimuth of the eye offset in the focal point's XZ plane,
/// measured in degrees from +Z toward +X (`atan2(x, z)`). Pitch is the
/// elevation above that plane in degrees (`asin(y / distance)`), positive
/// when the eye is above the focal point. The orbit offset is
/// `(d·cos(pitch)·sin(yaw), d·sin(pitch), d·cos(pitch)·cos(yaw))`.
///
/// Every operation is total: degenerate inputs are clamped or defaulted,
/// and pitch, distance, and the derived basis end each call inside their
/// valid ranges.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    front: Vec3,
    right: Vec3,
    up: Vec3,
    world_up: Vec3,
    focal_point: Vec3,
    distance: f32,
    yaw: f32,
    pitch: f32,

    /// Free-fly movement speed in world units per second.
    pub movement_speed: f32,
    /// Orbit sensitivity in degrees per pixel of pointer delta.
    pub orbit_sensitivity: f32,
    /// Pan sensitivity in world units per pixel, before distance scaling.
    pub pan_sensitivity: f32,
    /// Change in orbit distance per scroll unit.
    pub zoom_sensitivity: f32,
    /// Vertical field of view in degrees.
    pub fov: f32,

    znear: f32,
    zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 2.0, 7.0), Vec3::new(0.0, 0.5, 0.0), Vec3::Y)
    }
}

impl Camera {
    /// Create a camera at `position` orbiting `focal_point`.
    ///
    /// Distance, yaw, and pitch are derived from the two points by inverse
    /// spherical projection. A `position` coincident with the focal point
    /// is replaced by an offset one unit along +Z; a degenerate `world_up`
    /// falls back to +Y.
    #[must_use]
    pub fn new(position: Vec3, focal_point: Vec3, world_up: Vec3) -> Self {
        let mut world_up = world_up.normalize();
        if world_up == Vec3::ZERO {
            world_up = Vec3::Y;
        }

        let mut camera = Self {
            position,
            front: -Vec3::Z,
            right: Vec3::X,
            up: Vec3::Y,
            world_up,
            focal_point,
            distance: 1.0,
            yaw: 0.0,
            pitch: 0.0,
            movement_speed: 3.5,
            orbit_sensitivity: 0.25,
            pan_sensitivity: 0.0025,
            zoom_sensitivity: 0.8,
            fov: 45.0,
            znear: 0.1,
            zfar: 1000.0,
        };

        let mut offset = position - focal_point;
        if offset.length() < COINCIDENT_DISTANCE {
            offset = Vec3::Z;
        }
        camera.derive_orbit_from_offset(offset);
        camera.sync_derived_state();
        camera
    }

    /// Create a camera and apply projection/sensitivity settings from
    /// `options`.
    #[must_use]
    pub fn from_options(
        position: Vec3,
        focal_point: Vec3,
        world_up: Vec3,
        options: &CameraOptions,
    ) -> Self {
        let mut camera = Self::new(position, focal_point, world_up);
        camera.apply_options(options);
        camera
    }

    /// Overwrite the tunable settings from `options`. Orbit state is
    /// untouched.
    pub fn apply_options(&mut self, options: &CameraOptions) {
        self.movement_speed = options.movement_speed;
        self.orbit_sensitivity = options.orbit_sensitivity;
        self.pan_sensitivity = options.pan_sensitivity;
        self.zoom_sensitivity = options.zoom_sensitivity;
        self.fov = options.fov;
        self.znear = options.znear;
        self.zfar = options.zfar;
    }

    /// World-space eye position (derived).
    #[inline]
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Unit vector from the eye toward the focal point (derived).
    #[inline]
    #[must_use]
    pub fn front(&self) -> Vec3 {
        self.front
    }

    /// Unit right vector (derived).
    #[inline]
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Unit local up vector (derived).
    #[inline]
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Fixed world up reference, normalized at construction.
    #[inline]
    #[must_use]
    pub fn world_up(&self) -> Vec3 {
        self.world_up
    }

    /// Current orbit target.
    #[inline]
    #[must_use]
    pub fn focal_point(&self) -> Vec3 {
        self.focal_point
    }

    /// Distance from the eye to the focal point.
    #[inline]
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Orbit azimuth in degrees (see the angle convention on [`Camera`]).
    #[inline]
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Orbit elevation in degrees, always inside ±89.9.
    #[inline]
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// View matrix looking from the eye toward the focal point.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at(self.position, self.focal_point, self.world_up)
    }

    /// Perspective projection for the given viewport aspect ratio.
    ///
    /// Non-positive aspect ratios (zero-height viewports) are substituted
    /// with `1.0` rather than propagated.
    #[must_use]
    pub fn projection_matrix(&self, aspect_ratio: f32) -> Mat4 {
        let aspect = if aspect_ratio <= 0.0 { 1.0 } else { aspect_ratio };
        Mat4::perspective(self.fov.to_radians(), aspect, self.znear, self.zfar)
    }

    /// Free-fly movement: translate the eye and focal point together along
    /// the directions active this frame.
    ///
    /// The net movement vector is normalized and scaled by
    /// `movement_speed * delta_time`; orbit angles and distance are
    /// unchanged. Opposing directions cancel to a no-op.
    pub fn process_keyboard(&mut self, pressed: &[MoveDirection], delta_time: f32) {
        let mut net = Vec3::ZERO;
        for direction in pressed {
            net += match direction {
                MoveDirection::Forward => self.front,
                MoveDirection::Backward => -self.front,
                MoveDirection::Left => -self.right,
                MoveDirection::Right => self.right,
                MoveDirection::Up => self.world_up,
                MoveDirection::Down => -self.world_up,
            };
        }

        if net.length() > COINCIDENT_DISTANCE {
            let displacement = net.normalize() * (self.movement_speed * delta_time);
            // Moving the focal point carries the derived eye along with it
            self.focal_point += displacement;
            self.sync_derived_state();
        }
    }

    /// Orbit around the focal point by a pointer delta in pixels.
    ///
    /// Pitch is clamped to ±89.9° to keep the right vector defined at the
    /// poles.
    pub fn process_mouse_orbit(&mut self, dx: f32, dy: f32) {
        self.yaw -= dx * self.orbit_sensitivity;
        self.pitch += dy * self.orbit_sensitivity;
        self.pitch = self.pitch.clamp(-PITCH_LIMIT_DEGREES, PITCH_LIMIT_DEGREES);
        self.sync_derived_state();
    }

    /// Pan the eye and focal point together along the camera's right and
    /// up axes.
    ///
    /// Pan speed scales with the orbit distance so distant targets move at
    /// a comparable screen rate, with a small floor so the camera never
    /// freezes at near-zero distance.
    pub fn process_mouse_pan(&mut self, dx: f32, dy: f32) {
        let speed = (self.pan_sensitivity * self.distance * 0.2).max(MIN_PAN_SPEED);
        let translation = self.right * (-dx * speed) + self.up * (dy * speed);
        self.focal_point += translation;
        self.sync_derived_state();
    }

    /// Zoom by a scroll delta, moving the eye along the view direction.
    ///
    /// The distance is clamped to a strictly positive minimum so the eye
    /// never crosses the focal point.
    pub fn process_mouse_zoom(&mut self, scroll_delta: f32) {
        self.distance = (self.distance - scroll_delta * self.zoom_sensitivity)
            .max(MIN_ZOOM_DISTANCE);
        self.sync_derived_state();
    }

    /// Re-target the orbit on `new_focal_point` without jumping the eye.
    ///
    /// Distance, yaw, and pitch are re-derived from the current eye
    /// position and the new target. If the target is within 0.01 of the
    /// eye, the eye is nudged one unit backward along the previous view
    /// direction first so the orbit offset stays non-degenerate.
    pub fn set_focal_point(&mut self, new_focal_point: Vec3) {
        let eye = self.position;
        self.focal_point = new_focal_point;

        let mut offset = eye - new_focal_point;
        if offset.length() < RETARGET_MIN_DISTANCE {
            let mut toward_target = (new_focal_point - eye).normalize();
            if toward_target == Vec3::ZERO {
                toward_target = -Vec3::Z;
            }
            offset = -toward_target;
        }

        self.derive_orbit_from_offset(offset);
        self.sync_derived_state();
    }

    /// Derive `distance`, `pitch`, and (away from the poles) `yaw` from an
    /// eye offset relative to the focal point.
    fn derive_orbit_from_offset(&mut self, offset: Vec3) {
        self.distance = offset.length();
        let n = offset.normalize();
        self.pitch = n
            .y
            .clamp(-1.0, 1.0)
            .asin()
            .to_degrees()
            .clamp(-PITCH_LIMIT_DEGREES, PITCH_LIMIT_DEGREES);

        let xz_len = (n.x * n.x + n.z * n.z).sqrt();
        if xz_len > COINCIDENT_DISTANCE {
            self.yaw = n.x.atan2(n.z).to_degrees();
        }
        // At the poles yaw is undefined; keep the previous value
    }

    /// Recompute the eye position from the spherical orbit state and
    /// re-derive the orthonormal basis.
    fn sync_derived_state(&mut self) {
        let rad_pitch = self.pitch.to_radians();
        let rad_yaw = self.yaw.to_radians();

        let offset = Vec3::new(
            self.distance * rad_pitch.cos() * rad_yaw.sin(),
            self.distance * rad_pitch.sin(),
            self.distance * rad_pitch.cos() * rad_yaw.cos(),
        );
        self.position = self.focal_point + offset;

        self.front = (self.focal_point - self.position).normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1e-4;

    fn assert_orthonormal(camera: &Camera) {
        assert!((camera.front().length() - 1.0).abs() < TOLERANCE);
        assert!((camera.right().length() - 1.0).abs() < TOLERANCE);
        assert!((camera.up().length() - 1.0).abs() < TOLERANCE);
        assert!(camera.front().dot(camera.right()).abs() < TOLERANCE);
        assert!(camera.front().dot(camera.up()).abs() < TOLERANCE);
        assert!(camera.right().dot(camera.up()).abs() < TOLERANCE);
    }

    fn assert_orbit_consistent(camera: &Camera) {
        let offset = camera.position() - camera.focal_point();
        assert!(
            (offset.length() - camera.distance()).abs() < TOLERANCE * camera.distance().max(1.0)
        );
    }

    #[test]
    fn construction_round_trips_position() {
        let position = Vec3::new(3.0, 2.0, 4.0);
        let focal = Vec3::new(0.5, 0.0, -1.0);
        let camera = Camera::new(position, focal, Vec3::Y);

        // Rebuild the eye from the derived spherical state
        let rp = camera.pitch().to_radians();
        let ry = camera.yaw().to_radians();
        let rebuilt = focal
            + Vec3::new(
                camera.distance() * rp.cos() * ry.sin(),
                camera.distance() * rp.sin(),
                camera.distance() * rp.cos() * ry.cos(),
            );
        assert!((rebuilt - position).length() < TOLERANCE);
        assert!((camera.position() - position).length() < TOLERANCE);
        assert_orthonormal(&camera);
    }

    #[test]
    fn construction_at_focal_point_backs_off() {
        let focal = Vec3::new(1.0, 1.0, 1.0);
        let camera = Camera::new(focal, focal, Vec3::Y);
        assert!((camera.distance() - 1.0).abs() < TOLERANCE);
        assert!((camera.position() - focal).length() > 0.5);
        assert_orthonormal(&camera);
    }

    #[test]
    fn degenerate_world_up_falls_back_to_y() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::ZERO);
        assert_eq!(camera.world_up(), Vec3::Y);
    }

    #[test]
    fn orbit_preserves_distance_and_basis() {
        let mut camera = Camera::new(Vec3::new(0.0, 2.0, 7.0), Vec3::ZERO, Vec3::Y);
        let initial_distance = camera.distance();
        for i in 0..100 {
            camera.process_mouse_orbit(7.3, (i as f32).mul_add(0.13, -3.0));
            assert_orbit_consistent(&camera);
            assert_orthonormal(&camera);
        }
        assert!((camera.distance() - initial_distance).abs() < TOLERANCE);
    }

    #[test]
    fn pitch_stays_clamped_under_extreme_input() {
        let mut camera = Camera::default();
        camera.process_mouse_orbit(0.0, 1.0e6);
        assert!(camera.pitch() <= 89.9);
        camera.process_mouse_orbit(0.0, -1.0e9);
        assert!(camera.pitch() >= -89.9);
        assert_orthonormal(&camera);
    }

    #[test]
    fn zoom_clamps_at_minimum_distance() {
        let mut camera = Camera::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
        for _ in 0..50 {
            camera.process_mouse_zoom(10.0);
        }
        assert!(camera.distance() >= MIN_ZOOM_DISTANCE);
        assert_orbit_consistent(&camera);

        camera.process_mouse_zoom(-3.0);
        assert!(camera.distance() > MIN_ZOOM_DISTANCE);
    }

    #[test]
    fn pan_moves_eye_and_target_together() {
        let mut camera = Camera::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
        let eye_before = camera.position();
        let focal_before = camera.focal_point();
        let distance_before = camera.distance();

        camera.process_mouse_pan(120.0, -45.0);

        let eye_shift = camera.position() - eye_before;
        let focal_shift = camera.focal_point() - focal_before;
        assert!((eye_shift - focal_shift).length() < TOLERANCE);
        assert!(eye_shift.length() > 0.0);
        assert!((camera.distance() - distance_before).abs() < TOLERANCE);
        assert_orthonormal(&camera);
    }

    #[test]
    fn free_fly_carries_focal_point() {
        let mut camera = Camera::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
        let focal_before = camera.focal_point();
        let yaw_before = camera.yaw();
        let pitch_before = camera.pitch();

        camera.process_keyboard(&[MoveDirection::Forward], 0.5);

        let expected = camera.front() * (camera.movement_speed * 0.5);
        let focal_shift = camera.focal_point() - focal_before;
        assert!((focal_shift - expected).length() < TOLERANCE);
        assert_eq!(camera.yaw(), yaw_before);
        assert_eq!(camera.pitch(), pitch_before);
        assert_orbit_consistent(&camera);
    }

    #[test]
    fn opposing_keys_cancel_to_noop() {
        let mut camera = Camera::default();
        let position_before = camera.position();
        camera.process_keyboard(&[MoveDirection::Forward, MoveDirection::Backward], 1.0);
        assert_eq!(camera.position(), position_before);
        camera.process_keyboard(&[], 1.0);
        assert_eq!(camera.position(), position_before);
    }

    #[test]
    fn diagonal_movement_is_normalized() {
        let mut camera = Camera::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
        let focal_before = camera.focal_point();
        camera.process_keyboard(&[MoveDirection::Forward, MoveDirection::Right], 1.0);
        let moved = (camera.focal_point() - focal_before).length();
        assert!((moved - camera.movement_speed).abs() < TOLERANCE);
    }

    #[test]
    fn set_focal_point_keeps_the_eye_in_place() {
        let mut camera = Camera::new(Vec3::new(0.0, 3.0, 8.0), Vec3::ZERO, Vec3::Y);
        let eye_before = camera.position();

        camera.set_focal_point(Vec3::new(2.0, 0.0, -1.0));

        assert!((camera.position() - eye_before).length() < 1e-3);
        assert!(
            (camera.distance() - (eye_before - Vec3::new(2.0, 0.0, -1.0)).length()).abs() < 1e-3
        );
        assert_orbit_consistent(&camera);
        assert_orthonormal(&camera);
    }

    #[test]
    fn set_focal_point_on_the_eye_nudges_backward() {
        let mut camera = Camera::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
        let eye = camera.position();
        camera.set_focal_point(eye);
        assert!(camera.distance() >= RETARGET_MIN_DISTANCE);
        assert!((camera.position() - camera.focal_point()).length() >= RETARGET_MIN_DISTANCE);
        assert_orthonormal(&camera);
    }

    #[test]
    fn view_matrix_centers_the_focal_point() {
        let camera = Camera::new(Vec3::new(4.0, 2.0, 6.0), Vec3::new(1.0, 0.5, 0.0), Vec3::Y);
        let view = camera.view_matrix();
        let proj = camera.projection_matrix(16.0 / 9.0);
        let ndc = (proj * view).transform_point(camera.focal_point());
        assert!(ndc.x.abs() < 1e-3);
        assert!(ndc.y.abs() < 1e-3);
    }

    #[test]
    fn degenerate_aspect_ratio_is_substituted() {
        let camera = Camera::default();
        assert_eq!(camera.projection_matrix(0.0), camera.projection_matrix(1.0));
        assert_eq!(camera.projection_matrix(-2.5), camera.projection_matrix(1.0));
        assert!(camera.projection_matrix(2.0) != camera.projection_matrix(1.0));
    }

    #[test]
    fn options_are_applied() {
        let options = CameraOptions {
            fov: 60.0,
            movement_speed: 10.0,
            ..CameraOptions::default()
        };
        let camera =
            Camera::from_options(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y, &options);
        assert_eq!(camera.fov, 60.0);
        assert_eq!(camera.movement_speed, 10.0);
    }
}
