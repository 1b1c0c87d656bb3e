//! Scene constants: path, camera, lights, materials, fog and firework.
//!
//! [`SceneConfig::default`] is the stock scene; hosts
//! override individual fields from the command line.

use glam::{Vec3, Vec4};

use crate::motion::{MotionError, WaypointPath};
use crate::render::fog::FogParams;
use crate::render::transform::Viewport;
use crate::render::{Attenuation, Light, LightDirection, LightKind, Material};

/// Waypoints of the rolling loop.
pub const WAYPOINT_A: Vec3 = Vec3::new(-4.0, 1.0, 4.0);
pub const WAYPOINT_B: Vec3 = Vec3::new(3.0, 1.0, -4.0);
pub const WAYPOINT_C: Vec3 = Vec3::new(-3.0, 1.0, -3.0);

/// Ticks spent on each leg of the loop.
pub const DEFAULT_TICKS_PER_SEGMENT: u32 = 10_000;

/// Point light position shared by the shadow projection and the spot light.
pub const SHADOW_LIGHT: Vec3 = Vec3::new(-14.0, 12.0, -3.0);

/// Camera placement and projection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraConfig {
    pub initial_eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fovy_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Distance the eye moves per key press.
    pub eye_step: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            initial_eye: Vec3::new(7.0, 3.0, -10.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fovy_degrees: 45.0,
            near: 0.5,
            far: 50.0,
            eye_step: 1.0,
        }
    }
}

/// Firework burst parameters. Times are in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FireworkConfig {
    pub origin: Vec3,
    /// Scale from velocity units to world units per millisecond.
    pub velocity_scale: f32,
    /// Vertical acceleration in world units per ms^2.
    pub gravity: f32,
    /// A burst never lasts longer than this.
    pub max_lifetime_ms: f32,
    /// Particles below this height count as landed.
    pub ground_threshold: f32,
    /// The burst restarts once fewer than this many particles are airborne.
    pub airborne_min: usize,
}

impl Default for FireworkConfig {
    fn default() -> Self {
        Self {
            origin: Vec3::new(0.0, 0.1, 0.0),
            velocity_scale: 0.001,
            gravity: -0.000_000_49,
            max_lifetime_ms: 10_000.0,
            ground_threshold: 0.1,
            airborne_min: 10,
        }
    }
}

/// Complete scene configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub path: WaypointPath,
    pub ticks_per_segment: u32,
    /// Uniform sphere scale.
    pub sphere_scale: f32,
    pub camera: CameraConfig,
    /// Initial window size in pixels.
    pub window: (u32, u32),
    pub shadow_light: Vec3,
    pub global_ambient: Vec4,
    /// Key light (distant, eye-anchored) and the spot/point light.
    pub lights: [Light; 2],
    pub floor_material: Material,
    pub sphere_material: Material,
    pub fog: FogParams,
    pub firework: FireworkConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            path: WaypointPath::new(WAYPOINT_A, WAYPOINT_B, WAYPOINT_C),
            ticks_per_segment: DEFAULT_TICKS_PER_SEGMENT,
            sphere_scale: 1.0,
            camera: CameraConfig::default(),
            window: (512, 512),
            shadow_light: SHADOW_LIGHT,
            global_ambient: Vec4::ONE,
            lights: default_lights(),
            floor_material: floor_material(),
            sphere_material: sphere_material(),
            fog: FogParams::default(),
            firework: FireworkConfig::default(),
        }
    }
}

impl SceneConfig {
    /// Reject configurations the motion controller cannot run with.
    pub fn validate(&self) -> Result<(), MotionError> {
        if self.ticks_per_segment == 0 {
            return Err(MotionError::ZeroTicksPerSegment);
        }
        Ok(())
    }

    /// Initial output window.
    pub fn viewport(&self) -> Viewport {
        let (width, height) = self.window;
        Viewport::new(width, height)
    }
}

/// Key light + spot light.
pub fn default_lights() -> [Light; 2] {
    [
        // Key light: distant, direction fixed relative to the camera.
        Light {
            kind: LightKind::Distant,
            position: Vec3::ZERO,
            direction: LightDirection::Eye(Vec3::new(0.1, 0.0, -1.0)),
            ambient: Vec4::new(0.0, 0.0, 0.0, 1.0),
            diffuse: Vec4::new(0.8, 0.8, 0.8, 1.0),
            specular: Vec4::new(0.2, 0.2, 0.2, 1.0),
            attenuation: Attenuation::default(),
            spot_exponent: 0.0,
            spot_cutoff_degrees: 0.0,
        },
        // Spot light above the floor, aimed at a point beside the path.
        Light {
            kind: LightKind::Spot,
            position: SHADOW_LIGHT,
            direction: LightDirection::WorldTarget(Vec3::new(-6.0, 0.0, -4.5)),
            ambient: Vec4::new(0.0, 0.0, 0.0, 1.0),
            diffuse: Vec4::ONE,
            specular: Vec4::ONE,
            attenuation: Attenuation {
                constant: 2.0,
                linear: 0.01,
                quadratic: 0.001,
            },
            spot_exponent: 15.0,
            spot_cutoff_degrees: 20.0,
        },
    ]
}

/// Green floor with a golden highlight.
pub fn floor_material() -> Material {
    Material {
        ambient: Vec4::new(0.2, 0.2, 0.2, 1.0),
        diffuse: Vec4::new(0.0, 1.0, 0.0, 1.0),
        specular: Vec4::new(1.0, 0.82, 0.0, 1.0),
        shininess: 125.0,
    }
}

/// Golden sphere.
pub fn sphere_material() -> Material {
    Material {
        ambient: Vec4::new(0.2, 0.2, 0.2, 1.0),
        diffuse: Vec4::new(1.0, 0.84, 0.0, 1.0),
        specular: Vec4::new(1.0, 0.84, 0.0, 1.0),
        shininess: 125.0,
    }
}
