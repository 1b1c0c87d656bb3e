//! Scene state and the animation state machine.
//!
//! A [`Session`] owns everything that changes while the demo runs: the
//! sphere's motion, the camera, the display toggles and the firework. Hosts
//! feed it commands and clock ticks, then ask it for a [`FrameOutput`].

pub mod command;
pub mod config;
pub mod particles;

use glam::{Mat4, Vec3};
use rolling_sphere_hal::{EntropySource, InputEvent};

use crate::motion::{MotionError, PathMotion, RollStep};
use crate::render::fog::FogMode;
use crate::render::lighting::{LightUniforms, LightingProducts};
use crate::render::shadow::{shadow_model_view, shadow_projection, visible_from};
use crate::render::transform::{look_at, perspective, sphere_model, Viewport};
use crate::render::{
    DrawFlags, DrawTransform, FrameOutput, Light, LightKind, ParticleFrame, Shading,
    SphereTexture, TextureDirection, TextureSpace,
};
use command::SceneCommand;
use config::SceneConfig;
use particles::Firework;

/// Animation lifecycle. Starts `Idle`; once begun it only alternates between
/// `Running` and `Paused`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnimationState {
    /// Waiting for the start command.
    #[default]
    Idle,
    Paused,
    Running,
}

/// Display toggles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneOptions {
    pub shadow: bool,
    pub shadow_blending: bool,
    pub lighting: bool,
    /// Sphere lighting; cleared while the sphere is drawn as wireframe.
    pub sphere_lighting: bool,
    pub shading: Shading,
    pub wireframe: bool,
    pub ground_texture: bool,
    pub sphere_texture: SphereTexture,
    pub texture_direction: TextureDirection,
    pub texture_space: TextureSpace,
    pub lattice: bool,
    pub lattice_upright: bool,
    pub fog: FogMode,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            shadow: true,
            shadow_blending: false,
            lighting: true,
            sphere_lighting: true,
            shading: Shading::Smooth,
            wireframe: false,
            ground_texture: true,
            sphere_texture: SphereTexture::None,
            texture_direction: TextureDirection::Vertical,
            texture_space: TextureSpace::Object,
            lattice: false,
            lattice_upright: true,
            fog: FogMode::Off,
        }
    }
}

impl SceneOptions {
    fn draw_flags(&self) -> DrawFlags {
        DrawFlags {
            shading: self.shading,
            wireframe: self.wireframe,
            shadow_blending: self.shadow_blending,
            ground_texture: self.ground_texture,
            sphere_texture: self.sphere_texture,
            texture_direction: self.texture_direction,
            texture_space: self.texture_space,
            lattice: self.lattice,
            lattice_upright: self.lattice_upright,
            fog: self.fog,
        }
    }
}

/// Running scene.
pub struct Session<E: EntropySource> {
    config: SceneConfig,
    motion: PathMotion,
    animation: AnimationState,
    eye: Vec3,
    viewport: Viewport,
    options: SceneOptions,
    lights: [Light; 2],
    floor_products: LightingProducts,
    sphere_products: LightingProducts,
    shadow: Mat4,
    firework: Firework,
    entropy: E,
    clock_ms: u64,
    quit: bool,
}

impl<E: EntropySource> Session<E> {
    /// Build a session in the `Idle` state with the sphere at waypoint A.
    pub fn new(config: SceneConfig, entropy: E) -> Result<Self, MotionError> {
        config.validate()?;
        let motion = PathMotion::new(config.path, config.ticks_per_segment)?;
        let lights = config.lights;
        let floor_products =
            LightingProducts::new(config.global_ambient, &lights, &config.floor_material);
        let sphere_products =
            LightingProducts::new(config.global_ambient, &lights, &config.sphere_material);

        log::info!(
            "session ready: {} ticks per segment, loop length {:.3}",
            config.ticks_per_segment,
            config.path.perimeter()
        );

        Ok(Self {
            motion,
            animation: AnimationState::Idle,
            eye: config.camera.initial_eye,
            viewport: config.viewport(),
            options: SceneOptions::default(),
            lights,
            floor_products,
            sphere_products,
            shadow: shadow_projection(config.shadow_light),
            firework: Firework::new(config.firework),
            entropy,
            clock_ms: 0,
            quit: false,
            config,
        })
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn motion(&self) -> &PathMotion {
        &self.motion
    }

    pub fn animation(&self) -> AnimationState {
        self.animation
    }

    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn aspect(&self) -> f32 {
        self.viewport.aspect()
    }

    pub fn options(&self) -> &SceneOptions {
        &self.options
    }

    pub fn lights(&self) -> &[Light; 2] {
        &self.lights
    }

    pub fn firework(&self) -> &Firework {
        &self.firework
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Translate and apply a raw input event. Returns `true` if the scene
    /// changed.
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        match SceneCommand::from_input(event) {
            Some(cmd) => self.apply(cmd),
            None => {
                log::trace!("unbound input {:?}", event);
                false
            }
        }
    }

    /// Apply a command. Returns `true` if the scene changed.
    pub fn apply(&mut self, cmd: SceneCommand) -> bool {
        log::debug!("command {:?}", cmd);
        let opts = &mut self.options;
        match cmd {
            SceneCommand::MoveEye(delta) => {
                self.eye += delta * self.config.camera.eye_step;
                true
            }
            SceneCommand::ResetEye => {
                self.eye = self.config.camera.initial_eye;
                true
            }
            SceneCommand::Quit => {
                log::info!("quit requested");
                self.quit = true;
                true
            }
            SceneCommand::StartAnimation => self.start_animation(),
            SceneCommand::TogglePause => self.toggle_pause(),
            SceneCommand::ToggleWireframe => {
                opts.wireframe = !opts.wireframe;
                opts.sphere_lighting = !opts.wireframe;
                true
            }
            SceneCommand::SetShadow(on) => replace(&mut opts.shadow, on),
            SceneCommand::SetShadowBlending(on) => replace(&mut opts.shadow_blending, on),
            SceneCommand::SetGroundTexture(on) => replace(&mut opts.ground_texture, on),
            SceneCommand::SetSphereTexture(tex) => replace(&mut opts.sphere_texture, tex),
            SceneCommand::SetFirework(on) => {
                let was = self.firework.is_active();
                self.firework.set_active(on, self.clock_ms, &mut self.entropy);
                was != on
            }
            SceneCommand::SetLighting(on) => {
                opts.lighting = on;
                opts.sphere_lighting = on && !opts.wireframe;
                true
            }
            SceneCommand::SetShading(shading) => replace(&mut opts.shading, shading),
            SceneCommand::SetSecondLight(kind) => self.set_second_light(kind),
            SceneCommand::SetFog(mode) => replace(&mut opts.fog, mode),
            SceneCommand::SetTextureDirection(dir) => replace(&mut opts.texture_direction, dir),
            SceneCommand::SetTextureSpace(space) => replace(&mut opts.texture_space, space),
            SceneCommand::ToggleLattice => {
                opts.lattice = !opts.lattice;
                true
            }
            SceneCommand::SetLatticeUpright(up) => replace(&mut opts.lattice_upright, up),
            SceneCommand::Resize { width, height } => {
                replace(&mut self.viewport, Viewport::new(width, height))
            }
        }
    }

    fn start_animation(&mut self) -> bool {
        if self.animation != AnimationState::Idle {
            return false;
        }
        self.animation = AnimationState::Running;
        log::info!("animation started");
        true
    }

    fn toggle_pause(&mut self) -> bool {
        let next = match self.animation {
            AnimationState::Idle => return false,
            AnimationState::Running => AnimationState::Paused,
            AnimationState::Paused => AnimationState::Running,
        };
        log::info!("animation {:?} -> {:?}", self.animation, next);
        self.animation = next;
        true
    }

    fn set_second_light(&mut self, kind: LightKind) -> bool {
        if !matches!(kind, LightKind::Spot | LightKind::Point) {
            log::warn!("second light cannot be {:?}", kind);
            return false;
        }
        replace(&mut self.lights[1].kind, kind)
    }

    /// Record the host clock and, while running, advance the sphere by one
    /// tick and update the firework.
    pub fn tick(&mut self, now_ms: u64) -> Option<RollStep> {
        self.clock_ms = now_ms;
        if self.animation != AnimationState::Running {
            return None;
        }
        let step = self.motion.advance();
        self.firework.update(now_ms, &mut self.entropy);
        Some(step)
    }

    /// Everything needed to draw the current state.
    ///
    /// The view matrix is built first; the eye-frame lights are derived from
    /// it so they always match the camera of this frame.
    pub fn frame(&self) -> FrameOutput<'_> {
        let camera = &self.config.camera;
        let projection = perspective(camera.fovy_degrees, self.aspect(), camera.near, camera.far);
        let view = look_at(self.eye, camera.target, camera.up);

        let model = sphere_model(
            self.motion.position(),
            self.config.sphere_scale,
            &self.motion.orientation(),
        );

        let shadow = (self.options.shadow && visible_from(self.eye))
            .then(|| shadow_model_view(&view, &self.shadow, &model));

        let floor_lighting = self.options.lighting.then(|| {
            LightUniforms::new(
                &view,
                &self.lights,
                &self.floor_products,
                self.config.floor_material.shininess,
            )
        });
        let sphere_lighting = (self.options.lighting && self.options.sphere_lighting).then(|| {
            LightUniforms::new(
                &view,
                &self.lights,
                &self.sphere_products,
                self.config.sphere_material.shininess,
            )
        });

        let particles = self.firework.is_active().then(|| ParticleFrame {
            particles: self.firework.particles(),
            elapsed_ms: self.firework.elapsed_ms(),
            origin: self.firework.config().origin,
            model_view: view,
        });

        FrameOutput {
            viewport: self.viewport,
            projection,
            view,
            eye: self.eye,
            floor: DrawTransform::new(view),
            sphere_model: model,
            sphere: DrawTransform::new(view * model),
            shadow_model_view: shadow,
            floor_lighting,
            sphere_lighting,
            flags: self.options.draw_flags(),
            fog: self.config.fog,
            particles,
        }
    }
}

/// Store `value` and report whether it differed from the old one.
fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        false
    } else {
        *slot = value;
        true
    }
}
