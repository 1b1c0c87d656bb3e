//! Phong lighting parameters: light x material products and eye-frame lights.
//!
//! Products only depend on the configured coefficients, so they are built once
//! per material. Light positions and spot targets live in world space and
//! must be re-expressed in the camera frame every frame, after the view matrix
//! is final and before anything lit is drawn.

use glam::{Mat4, Vec3, Vec4, Vec4Swizzles};
use heapless::Vec;

use crate::render::{Attenuation, Light, LightDirection, LightKind, Material, MAX_LIGHTS};

/// Componentwise light x material coefficients for one light.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightProducts {
    pub ambient: Vec4,
    pub diffuse: Vec4,
    pub specular: Vec4,
}

impl LightProducts {
    pub fn new(light: &Light, material: &Material) -> Self {
        Self {
            ambient: light.ambient * material.ambient,
            diffuse: light.diffuse * material.diffuse,
            specular: light.specular * material.specular,
        }
    }
}

/// All products for one material.
#[derive(Clone, Debug, PartialEq)]
pub struct LightingProducts {
    /// `global_ambient * material.ambient`.
    pub global_ambient: Vec4,
    pub per_light: Vec<LightProducts, MAX_LIGHTS>,
}

impl LightingProducts {
    /// Build products for up to [`MAX_LIGHTS`] lights; extra lights are ignored.
    pub fn new(global_ambient: Vec4, lights: &[Light], material: &Material) -> Self {
        if lights.len() > MAX_LIGHTS {
            log::warn!(
                "{} lights configured, only the first {} are lit",
                lights.len(),
                MAX_LIGHTS
            );
        }
        Self {
            global_ambient: global_ambient * material.ambient,
            per_light: lights
                .iter()
                .take(MAX_LIGHTS)
                .map(|light| LightProducts::new(light, material))
                .collect(),
        }
    }
}

/// A light re-expressed in the camera frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EyeLight {
    pub kind: LightKind,
    /// `view * (position, 1)`.
    pub position: Vec4,
    /// Unit direction of travel in the eye frame (zero if undefined).
    pub direction: Vec3,
    pub attenuation: Attenuation,
    pub spot_exponent: f32,
    pub spot_cutoff_degrees: f32,
}

impl EyeLight {
    pub fn from_world(light: &Light, view: &Mat4) -> Self {
        let position = *view * light.position.extend(1.0);
        let direction = match light.direction {
            LightDirection::Eye(d) => d.normalize_or_zero(),
            LightDirection::WorldTarget(target) => {
                let target = *view * target.extend(1.0);
                (target.xyz() - position.xyz()).normalize_or_zero()
            }
        };
        Self {
            kind: light.kind,
            position,
            direction,
            attenuation: light.attenuation,
            spot_exponent: light.spot_exponent,
            spot_cutoff_degrees: light.spot_cutoff_degrees,
        }
    }

    /// Spot cone falloff for a unit vector `to_light` from the surface to the
    /// light. Non-spot lights return 1.
    pub fn spot_factor(&self, to_light: Vec3) -> f32 {
        if self.kind != LightKind::Spot {
            return 1.0;
        }
        let cos_angle = (-to_light).dot(self.direction);
        let cos_cutoff = libm::cosf(self.spot_cutoff_degrees.to_radians());
        if cos_angle < cos_cutoff {
            0.0
        } else {
            libm::powf(cos_angle.max(0.0), self.spot_exponent)
        }
    }
}

/// Transform every light into the frame of `view`.
pub fn eye_frame_lights(view: &Mat4, lights: &[Light]) -> Vec<EyeLight, MAX_LIGHTS> {
    lights
        .iter()
        .take(MAX_LIGHTS)
        .map(|light| EyeLight::from_world(light, view))
        .collect()
}

/// Lighting inputs for one material under one camera.
#[derive(Clone, Debug, PartialEq)]
pub struct LightUniforms {
    pub products: LightingProducts,
    pub lights: Vec<EyeLight, MAX_LIGHTS>,
    pub shininess: f32,
}

impl LightUniforms {
    pub fn new(view: &Mat4, lights: &[Light], products: &LightingProducts, shininess: f32) -> Self {
        Self {
            products: products.clone(),
            lights: eye_frame_lights(view, lights),
            shininess,
        }
    }
}

/// Evaluate the Phong model at one surface point.
///
/// `position` and `normal` are in the eye frame (the viewer sits at the
/// origin). Returns the lit RGBA color with RGB clamped to `[0, 1]` and
/// alpha forced to 1.
pub fn shade(position: Vec3, normal: Vec3, uniforms: &LightUniforms) -> Vec4 {
    let n = normal.normalize_or_zero();
    let to_eye = (-position).normalize_or_zero();
    let mut color = uniforms.products.global_ambient;

    for (light, products) in uniforms.lights.iter().zip(uniforms.products.per_light.iter()) {
        let (to_light, attenuation) = match light.kind {
            LightKind::Ambient => {
                color += products.ambient;
                continue;
            }
            LightKind::Distant => ((-light.direction).normalize_or_zero(), 1.0),
            LightKind::Point | LightKind::Spot => {
                let offset = light.position.xyz() - position;
                let d = offset.length();
                let to_light = offset.normalize_or_zero();
                let attenuation = light.attenuation.factor(d) * light.spot_factor(to_light);
                (to_light, attenuation)
            }
        };

        let half = (to_light + to_eye).normalize_or_zero();
        let n_dot_l = n.dot(to_light);
        let kd = n_dot_l.max(0.0);
        let ks = if n_dot_l < 0.0 {
            0.0
        } else {
            libm::powf(n.dot(half).max(0.0), uniforms.shininess)
        };

        color += attenuation * (products.ambient + kd * products.diffuse + ks * products.specular);
    }

    color.clamp(Vec4::ZERO, Vec4::ONE).truncate().extend(1.0)
}
