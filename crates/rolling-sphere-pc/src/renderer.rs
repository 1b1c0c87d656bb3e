//! Headless renderer: lights the sphere on the CPU and logs a per-frame
//! summary instead of drawing.

use std::convert::Infallible;

use glam::{Vec2, Vec3, Vec4};
use rolling_sphere_core::assets::textures::TextureId;
use rolling_sphere_core::render::fog::apply_fog;
use rolling_sphere_core::render::mesh::shade_mesh;
use rolling_sphere_core::render::{FrameOutput, Renderer, SphereTexture};
use rolling_sphere_core::scene::config::FireworkConfig;
use rolling_sphere_core::scene::particles::position_at;
use sphere_mesh::SphereMesh;

/// What one frame looked like, reduced to a few numbers.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameSummary {
    pub sphere_center: Vec3,
    /// Window-pixel box `(min, max)` around the sphere's visible vertices.
    pub sphere_bounds: Option<(Vec2, Vec2)>,
    /// Average lit sphere color after fog; `None` when the sphere is unlit.
    pub mean_color: Option<Vec4>,
    /// Sphere vertices whose shadow landed on the floor.
    pub shadow_vertices: usize,
    pub airborne_particles: usize,
}

pub struct LogRenderer {
    mesh: SphereMesh,
    firework: FireworkConfig,
    log_every: u64,
    frames: u64,
    bound: (Option<TextureId>, Option<TextureId>),
    last: FrameSummary,
}

impl LogRenderer {
    /// `log_every` of 0 logs nothing at info level.
    pub fn new(mesh: SphereMesh, firework: FireworkConfig, log_every: u64) -> Self {
        Self {
            mesh,
            firework,
            log_every,
            frames: 0,
            bound: (None, None),
            last: FrameSummary::default(),
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn last_summary(&self) -> &FrameSummary {
        &self.last
    }

    fn summarize(&self, frame: &FrameOutput<'_>) -> FrameSummary {
        let sphere_center = frame.sphere_model.w_axis.truncate();

        let mvp = frame.projection * frame.sphere.model_view;
        let sphere_bounds = self
            .mesh
            .positions
            .iter()
            .filter_map(|p| frame.viewport.to_window(mvp * p.extend(1.0)))
            .map(|w| Vec2::new(w.x, w.y))
            .fold(None, |bounds: Option<(Vec2, Vec2)>, p| match bounds {
                Some((lo, hi)) => Some((lo.min(p), hi.max(p))),
                None => Some((p, p)),
            });

        let mean_color = frame.sphere_lighting.as_ref().map(|uniforms| {
            let mesh = self.mesh.as_mesh_ref();
            let mut sum = Vec4::ZERO;
            let mut count = 0u32;
            shade_mesh(
                &mesh,
                &frame.sphere,
                frame.flags.shading,
                uniforms,
                |_, eye_pos, color| {
                    sum += apply_fog(color, frame.flags.fog, eye_pos.length(), &frame.fog);
                    count += 1;
                },
            );
            if count == 0 {
                Vec4::ZERO
            } else {
                sum / count as f32
            }
        });

        // w is the vertex's height below the light; only those cast onto the floor.
        let shadow_vertices = frame.shadow_model_view.map_or(0, |mv| {
            self.mesh
                .positions
                .iter()
                .filter(|&&p| (mv * p.extend(1.0)).w > 0.0)
                .count()
        });

        let ground = self.firework.ground_threshold;
        let airborne_particles = frame.particles.as_ref().map_or(0, |pf| {
            pf.particles
                .iter()
                .filter(|p| position_at(&self.firework, p, pf.elapsed_ms).y >= ground)
                .count()
        });

        FrameSummary {
            sphere_center,
            sphere_bounds,
            mean_color,
            shadow_vertices,
            airborne_particles,
        }
    }

    /// Track which textures a GPU backend would have bound for this frame.
    fn bind_textures(&mut self, frame: &FrameOutput<'_>) {
        let ground = frame.flags.ground_texture.then_some(TextureId::Checkerboard);
        let sphere = match frame.flags.sphere_texture {
            SphereTexture::None => None,
            SphereTexture::ContourLines => Some(TextureId::Stripe),
            SphereTexture::Checkerboard => Some(TextureId::Checkerboard),
        };
        if (ground, sphere) != self.bound {
            for id in [ground, sphere].into_iter().flatten() {
                let tex = id.texture();
                log::debug!("bind {:?} ({}x{})", id, tex.width, tex.height);
            }
            self.bound = (ground, sphere);
        }
    }
}

fn describe_bounds(bounds: Option<(Vec2, Vec2)>) -> String {
    match bounds {
        Some((lo, hi)) => format!("px ({:.0}, {:.0})..({:.0}, {:.0})", lo.x, lo.y, hi.x, hi.y),
        None => "off screen".to_string(),
    }
}

impl Renderer for LogRenderer {
    type Error = Infallible;

    fn draw_frame(&mut self, frame: &FrameOutput<'_>) -> Result<(), Self::Error> {
        self.bind_textures(frame);
        let summary = self.summarize(frame);

        if self.log_every > 0 && self.frames % self.log_every == 0 {
            log::info!(
                "frame {:>6}: sphere ({:6.2}, {:4.2}, {:6.2}) {} eye ({:.0}, {:.0}, {:.0}) color {} shadow {} particles {}",
                self.frames,
                summary.sphere_center.x,
                summary.sphere_center.y,
                summary.sphere_center.z,
                describe_bounds(summary.sphere_bounds),
                frame.eye.x,
                frame.eye.y,
                frame.eye.z,
                summary
                    .mean_color
                    .map(|c| format!("({:.2}, {:.2}, {:.2})", c.x, c.y, c.z))
                    .unwrap_or_else(|| "unlit".to_string()),
                summary.shadow_vertices,
                summary.airborne_particles,
            );
        } else {
            log::trace!("frame {}: {:?}", self.frames, summary);
        }

        self.last = summary;
        self.frames += 1;
        Ok(())
    }
}
