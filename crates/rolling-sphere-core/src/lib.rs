//! Platform-agnostic core of the rolling sphere demo.
//!
//! Vector math, the waypoint motion controller, Phong lighting parameters,
//! planar shadows and the scene session. Nothing here draws; hosts implement
//! [`render::Renderer`] and consume one [`render::FrameOutput`] per frame.

#![no_std]

pub mod assets;
pub mod math;
pub mod motion;
pub mod render;
pub mod scene;

pub use motion::{MotionError, PathMotion, RollStep, WaypointPath};
pub use render::{FrameOutput, Renderer};
pub use scene::command::SceneCommand;
pub use scene::config::SceneConfig;
pub use scene::{AnimationState, Session};
