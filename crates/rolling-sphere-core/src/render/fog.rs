//! Depth fog blend factors.

use glam::Vec4;

/// Fog falloff curve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FogMode {
    #[default]
    Off,
    Linear,
    Exponential,
    ExponentialSquare,
}

/// Fog curve parameters, in eye-frame distance units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FogParams {
    pub start: f32,
    pub end: f32,
    pub density: f32,
    pub color: Vec4,
}

impl Default for FogParams {
    fn default() -> Self {
        Self {
            start: 0.0,
            end: 18.0,
            density: 0.09,
            color: Vec4::new(0.7, 0.7, 0.7, 0.5),
        }
    }
}

/// Fraction of the surface color that survives at `distance` from the eye.
///
/// 1 means no fog, 0 means fully fogged.
pub fn fog_factor(mode: FogMode, distance: f32, params: &FogParams) -> f32 {
    let f = match mode {
        FogMode::Off => 1.0,
        FogMode::Linear => {
            let span = params.end - params.start;
            if span <= 0.0 {
                return 1.0;
            }
            (params.end - distance) / span
        }
        FogMode::Exponential => libm::expf(-params.density * distance),
        FogMode::ExponentialSquare => {
            let x = params.density * distance;
            libm::expf(-(x * x))
        }
    };
    f.clamp(0.0, 1.0)
}

/// Blend a lit color toward the fog color.
pub fn apply_fog(color: Vec4, mode: FogMode, distance: f32, params: &FogParams) -> Vec4 {
    let f = fog_factor(mode, distance, params);
    params.color.lerp(color, f)
}
