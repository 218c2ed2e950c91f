use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and control parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 1.0, max = 120.0), extend("step" = 1.0))]
    pub fov: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Free-fly movement speed in world units per second.
    #[schemars(title = "Movement Speed", range(min = 0.5, max = 20.0), extend("step" = 0.5))]
    pub movement_speed: f32,
    /// Orbit sensitivity in degrees per pixel.
    #[schemars(title = "Orbit Sensitivity", range(min = 0.05, max = 1.0), extend("step" = 0.05))]
    pub orbit_sensitivity: f32,
    /// Pan sensitivity in world units per pixel, before distance scaling.
    #[schemars(title = "Pan Sensitivity", range(min = 0.0005, max = 0.02), extend("step" = 0.0005))]
    pub pan_sensitivity: f32,
    /// Change in orbit distance per scroll unit.
    #[schemars(title = "Zoom Sensitivity", range(min = 0.1, max = 3.0), extend("step" = 0.1))]
    pub zoom_sensitivity: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fov: 45.0,
            znear: 0.1,
            zfar: 1000.0,
            movement_speed: 3.5,
            orbit_sensitivity: 0.25,
            pan_sensitivity: 0.0025,
            zoom_sensitivity: 0.8,
        }
    }
}
