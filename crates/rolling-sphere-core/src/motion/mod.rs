//! Sphere path motion: a closed three-waypoint loop with a rolling rotation.
//!
//! The controller advances a tick counter, picks the active segment of the
//! A -> B -> C -> A loop, interpolates the sphere position along it and folds
//! an incremental rotation into the accumulated orientation so the sphere
//! appears to roll in the direction of travel.

use core::f32::consts::PI;
use core::fmt;

use glam::{Mat4, Vec3};

use crate::math::{distance, lerp, rotate};

/// Floor plane normal; the rolling axis is `FLOOR_NORMAL x displacement`.
pub const FLOOR_NORMAL: Vec3 = Vec3::Y;

/// One leg of the waypoint loop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Segment {
    #[default]
    AB,
    BC,
    CA,
}

impl Segment {
    /// Map a phase counter onto the loop (phase 3 is AB again).
    pub fn from_phase(phase: u64) -> Self {
        match phase % 3 {
            0 => Segment::AB,
            1 => Segment::BC,
            _ => Segment::CA,
        }
    }
}

/// Closed path through three fixed points, traversed A -> B -> C -> A.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaypointPath {
    pub a: Vec3,
    pub b: Vec3,
    pub c: Vec3,
}

impl WaypointPath {
    pub const fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self { a, b, c }
    }

    /// `(begin, end)` points of a segment.
    pub fn endpoints(&self, segment: Segment) -> (Vec3, Vec3) {
        match segment {
            Segment::AB => (self.a, self.b),
            Segment::BC => (self.b, self.c),
            Segment::CA => (self.c, self.a),
        }
    }

    /// Total length of the loop.
    pub fn perimeter(&self) -> f32 {
        distance(self.a, self.b) + distance(self.b, self.c) + distance(self.c, self.a)
    }
}

/// Errors raised when building a motion controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionError {
    /// `ticks_per_segment` must be positive; it divides the tick counter.
    ZeroTicksPerSegment,
}

impl fmt::Display for MotionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotionError::ZeroTicksPerSegment => {
                write!(f, "ticks per segment must be greater than zero")
            }
        }
    }
}

/// Snapshot of the sphere's motion.
#[derive(Clone, Copy, Debug)]
pub struct MotionState {
    /// Ticks advanced since the animation started.
    pub tick: u64,
    pub segment: Segment,
    /// Fraction of the current segment covered, in `[0, 1)`.
    pub progress: f32,
    pub position: Vec3,
    /// Accumulated rolling rotation.
    pub orientation: Mat4,
}

/// What a single tick did to the sphere.
#[derive(Clone, Copy, Debug)]
pub struct RollStep {
    pub displacement: Vec3,
    /// Roll angle in degrees: `|displacement| * 180 / PI`.
    pub angle_degrees: f32,
    /// Unnormalized rotation axis, zero when the sphere did not move
    /// sideways.
    pub axis: Vec3,
    /// The incremental rotation that was left-multiplied onto the
    /// orientation.
    pub rotation: Mat4,
}

/// Drives the sphere around a [`WaypointPath`].
#[derive(Clone, Debug)]
pub struct PathMotion {
    path: WaypointPath,
    ticks_per_segment: u32,
    state: MotionState,
}

impl PathMotion {
    /// Start at waypoint A with an identity orientation.
    pub fn new(path: WaypointPath, ticks_per_segment: u32) -> Result<Self, MotionError> {
        if ticks_per_segment == 0 {
            return Err(MotionError::ZeroTicksPerSegment);
        }
        Ok(Self {
            path,
            ticks_per_segment,
            state: MotionState {
                tick: 0,
                segment: Segment::AB,
                progress: 0.0,
                position: path.a,
                orientation: Mat4::IDENTITY,
            },
        })
    }

    pub fn path(&self) -> &WaypointPath {
        &self.path
    }

    pub fn ticks_per_segment(&self) -> u32 {
        self.ticks_per_segment
    }

    pub fn state(&self) -> &MotionState {
        &self.state
    }

    pub fn position(&self) -> Vec3 {
        self.state.position
    }

    pub fn orientation(&self) -> Mat4 {
        self.state.orientation
    }

    /// Advance the animation by one tick.
    pub fn advance(&mut self) -> RollStep {
        let ticks = u64::from(self.ticks_per_segment);
        let tick = self.state.tick + 1;

        let segment = Segment::from_phase(tick / ticks);
        let progress = (tick % ticks) as f32 / ticks as f32;
        let (begin, end) = self.path.endpoints(segment);

        let old_position = self.state.position;
        let position = lerp(begin, end, progress);
        let displacement = position - old_position;

        // Not a physical rolling constraint (that would be distance / radius);
        // kept because the demo's visible spin rate depends on it.
        let angle_degrees = distance(old_position, position) * 180.0 / PI;
        let axis = FLOOR_NORMAL.cross(displacement);
        let rotation = rotate(angle_degrees, axis.x, axis.y, axis.z);

        self.state = MotionState {
            tick,
            segment,
            progress,
            position,
            orientation: rotation * self.state.orientation,
        };

        RollStep {
            displacement,
            angle_degrees,
            axis,
            rotation,
        }
    }
}
