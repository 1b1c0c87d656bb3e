//! Scene commands and their mapping from raw input events.

use glam::Vec3;
use rolling_sphere_hal::{InputEvent, MenuKind, MouseButton};

use crate::render::fog::FogMode;
use crate::render::{LightKind, Shading, SphereTexture, TextureDirection, TextureSpace};

/// A state change requested by the user.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SceneCommand {
    /// Move the eye by a whole-unit offset (scaled by the configured step).
    MoveEye(Vec3),
    /// Return the eye to its initial position.
    ResetEye,
    Quit,
    /// Leave `Idle`; ignored once the animation has begun.
    StartAnimation,
    /// `Running` <-> `Paused`; ignored while `Idle`.
    TogglePause,
    /// Wireframe sphere and shadow. Also switches sphere lighting.
    ToggleWireframe,
    SetShadow(bool),
    SetShadowBlending(bool),
    SetGroundTexture(bool),
    SetSphereTexture(SphereTexture),
    SetFirework(bool),
    SetLighting(bool),
    SetShading(Shading),
    /// Kind of the second light (spot or point).
    SetSecondLight(LightKind),
    SetFog(FogMode),
    SetTextureDirection(TextureDirection),
    SetTextureSpace(TextureSpace),
    ToggleLattice,
    SetLatticeUpright(bool),
    Resize { width: u32, height: u32 },
}

impl SceneCommand {
    /// Translate an input event. Unbound keys, buttons and menu entries
    /// yield `None`.
    pub fn from_input(event: InputEvent) -> Option<Self> {
        match event {
            InputEvent::Key(key) => Self::from_key(key),
            InputEvent::MouseDown(MouseButton::Right) => Some(SceneCommand::TogglePause),
            InputEvent::MouseDown(_) => None,
            InputEvent::Menu { menu, entry } => Self::from_menu(menu, entry),
            InputEvent::Resize { width, height } => Some(SceneCommand::Resize { width, height }),
        }
    }

    fn from_key(key: char) -> Option<Self> {
        let cmd = match key {
            'X' => SceneCommand::MoveEye(Vec3::X),
            'x' => SceneCommand::MoveEye(-Vec3::X),
            'Y' => SceneCommand::MoveEye(Vec3::Y),
            'y' => SceneCommand::MoveEye(-Vec3::Y),
            'Z' => SceneCommand::MoveEye(Vec3::Z),
            'z' => SceneCommand::MoveEye(-Vec3::Z),
            'v' | 'V' => SceneCommand::SetTextureDirection(TextureDirection::Vertical),
            's' | 'S' => SceneCommand::SetTextureDirection(TextureDirection::Slanted),
            'o' | 'O' => SceneCommand::SetTextureSpace(TextureSpace::Object),
            'e' | 'E' => SceneCommand::SetTextureSpace(TextureSpace::Eye),
            'l' | 'L' => SceneCommand::ToggleLattice,
            'u' | 'U' => SceneCommand::SetLatticeUpright(true),
            't' | 'T' => SceneCommand::SetLatticeUpright(false),
            'b' | 'B' => SceneCommand::StartAnimation,
            _ => return None,
        };
        Some(cmd)
    }

    fn from_menu(menu: MenuKind, entry: u8) -> Option<Self> {
        let cmd = match (menu, entry) {
            (MenuKind::Main, 1) => SceneCommand::ResetEye,
            (MenuKind::Main, 2) => SceneCommand::Quit,
            (MenuKind::Main, 3) => SceneCommand::ToggleWireframe,

            (MenuKind::Shadow, 1) => SceneCommand::SetShadow(true),
            (MenuKind::Shadow, 2) => SceneCommand::SetShadow(false),

            (MenuKind::ShadowBlending, 1) => SceneCommand::SetShadowBlending(false),
            (MenuKind::ShadowBlending, 2) => SceneCommand::SetShadowBlending(true),

            (MenuKind::GroundTexture, 1) => SceneCommand::SetGroundTexture(false),
            (MenuKind::GroundTexture, 2) => SceneCommand::SetGroundTexture(true),

            (MenuKind::SphereTexture, 0) => SceneCommand::SetSphereTexture(SphereTexture::None),
            (MenuKind::SphereTexture, 1) => {
                SceneCommand::SetSphereTexture(SphereTexture::ContourLines)
            }
            (MenuKind::SphereTexture, 2) => {
                SceneCommand::SetSphereTexture(SphereTexture::Checkerboard)
            }

            (MenuKind::Firework, 0) => SceneCommand::SetFirework(false),
            (MenuKind::Firework, 1) => SceneCommand::SetFirework(true),

            (MenuKind::Lighting, 1) => SceneCommand::SetLighting(true),
            (MenuKind::Lighting, 2) => SceneCommand::SetLighting(false),

            (MenuKind::Shading, 1) => SceneCommand::SetShading(Shading::Flat),
            (MenuKind::Shading, 2) => SceneCommand::SetShading(Shading::Smooth),

            (MenuKind::LightSource, 1) => SceneCommand::SetSecondLight(LightKind::Spot),
            (MenuKind::LightSource, 2) => SceneCommand::SetSecondLight(LightKind::Point),

            (MenuKind::Fog, 1) => SceneCommand::SetFog(FogMode::Off),
            (MenuKind::Fog, 2) => SceneCommand::SetFog(FogMode::Linear),
            (MenuKind::Fog, 3) => SceneCommand::SetFog(FogMode::Exponential),
            (MenuKind::Fog, 4) => SceneCommand::SetFog(FogMode::ExponentialSquare),

            _ => return None,
        };
        Some(cmd)
    }
}
