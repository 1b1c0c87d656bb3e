//! Per-frame render data and the light/material descriptors it is built from.
//!
//! Nothing in here talks to a graphics API. The scene produces a
//! [`FrameOutput`] every frame and hands it to a host [`Renderer`].

pub mod fog;
pub mod lighting;
pub mod mesh;
pub mod shadow;
pub mod transform;

use glam::{Mat3, Mat4, Vec3, Vec4};

use crate::scene::particles::Particle;
use fog::{FogMode, FogParams};
use lighting::LightUniforms;
use transform::Viewport;

/// Maximum number of lights the lighting products are built for.
pub const MAX_LIGHTS: usize = 2;

/// Light source type.
///
/// Discriminants match the light type ids the shaders were written against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightKind {
    /// Contributes only its ambient term.
    Ambient = 0,
    /// Parallel rays, no attenuation.
    Distant = 1,
    /// Omnidirectional point source with distance attenuation.
    Point = 2,
    /// Point source restricted to a cone.
    Spot = 3,
}

/// Where a light's direction is anchored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LightDirection {
    /// Direction of travel fixed in the eye frame; it follows the camera.
    Eye(Vec3),
    /// World-frame point the light aims at (spot focus).
    WorldTarget(Vec3),
}

/// Distance attenuation `1 / (constant + linear * d + quadratic * d^2)`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Attenuation {
    pub constant: f32,
    pub linear: f32,
    pub quadratic: f32,
}

impl Attenuation {
    /// No falloff.
    pub const NONE: Self = Self {
        constant: 1.0,
        linear: 0.0,
        quadratic: 0.0,
    };

    /// Attenuation factor at distance `d`. An all-zero set of coefficients
    /// means "unattenuated".
    pub fn factor(&self, d: f32) -> f32 {
        let denom = self.constant + self.linear * d + self.quadratic * d * d;
        if denom > 0.0 {
            1.0 / denom
        } else {
            1.0
        }
    }
}

/// A light source as configured in world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Light {
    pub kind: LightKind,
    /// World-frame position (point and spot lights).
    pub position: Vec3,
    pub direction: LightDirection,
    pub ambient: Vec4,
    pub diffuse: Vec4,
    pub specular: Vec4,
    pub attenuation: Attenuation,
    /// Spot falloff exponent.
    pub spot_exponent: f32,
    /// Spot cone half-angle in degrees.
    pub spot_cutoff_degrees: f32,
}

/// Surface reflectance coefficients.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub ambient: Vec4,
    pub diffuse: Vec4,
    pub specular: Vec4,
    pub shininess: f32,
}

/// Model-view and normal matrix for one draw.
#[derive(Clone, Copy, Debug)]
pub struct DrawTransform {
    pub model_view: Mat4,
    pub normal_matrix: Mat3,
}

impl DrawTransform {
    /// Build from a model-view, deriving the normal matrix with rescaling.
    pub fn new(model_view: Mat4) -> Self {
        Self {
            model_view,
            normal_matrix: crate::math::normal_matrix(&model_view, true),
        }
    }
}

/// How the sphere surface is shaded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Shading {
    /// One normal per triangle.
    Flat,
    /// Per-vertex normals.
    #[default]
    Smooth,
}

/// Texture applied to the sphere.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SphereTexture {
    #[default]
    None,
    /// 1D stripe texture, drawn as contour lines.
    ContourLines,
    /// 2D checkerboard.
    Checkerboard,
}

/// Orientation of generated sphere texture coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextureDirection {
    #[default]
    Vertical,
    Slanted,
}

/// Frame in which sphere texture coordinates are generated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextureSpace {
    #[default]
    Object,
    Eye,
}

/// Rendering switches that do not change any transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawFlags {
    pub shading: Shading,
    /// Sphere and shadow drawn as lines instead of filled triangles.
    pub wireframe: bool,
    /// Blend the shadow with the floor instead of painting it opaque.
    pub shadow_blending: bool,
    /// Checkerboard on the floor.
    pub ground_texture: bool,
    pub sphere_texture: SphereTexture,
    pub texture_direction: TextureDirection,
    pub texture_space: TextureSpace,
    pub lattice: bool,
    pub lattice_upright: bool,
    pub fog: FogMode,
}

/// Firework state needed to draw the particles for this frame.
#[derive(Clone, Copy, Debug)]
pub struct ParticleFrame<'a> {
    pub particles: &'a [Particle],
    /// Milliseconds since the current burst started.
    pub elapsed_ms: f32,
    pub origin: Vec3,
    /// Model-view for the particles (the camera view; they live in world space).
    pub model_view: Mat4,
}

/// Everything a renderer needs for one frame.
#[derive(Clone, Debug)]
pub struct FrameOutput<'a> {
    pub viewport: Viewport,
    pub projection: Mat4,
    pub view: Mat4,
    pub eye: Vec3,
    pub floor: DrawTransform,
    /// Sphere model transform: translate * scale * accumulated rotation.
    pub sphere_model: Mat4,
    pub sphere: DrawTransform,
    /// Present when shadows are on and the eye is above the floor.
    pub shadow_model_view: Option<Mat4>,
    /// Floor lighting; `None` while lighting is switched off.
    pub floor_lighting: Option<LightUniforms>,
    /// Sphere lighting; also `None` in wireframe mode.
    pub sphere_lighting: Option<LightUniforms>,
    pub flags: DrawFlags,
    /// Fog curve constants; `flags.fog` selects the curve.
    pub fog: FogParams,
    pub particles: Option<ParticleFrame<'a>>,
}

/// Host-side consumer of frames (GPU backend, software preview, logger).
pub trait Renderer {
    type Error: core::fmt::Debug;

    fn draw_frame(&mut self, frame: &FrameOutput<'_>) -> Result<(), Self::Error>;
}
