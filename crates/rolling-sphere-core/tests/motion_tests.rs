//! Tests for the waypoint motion controller.

use core::f32::consts::PI;

use glam::{Mat4, Vec3};
use rolling_sphere_core::math::rotate;
use rolling_sphere_core::motion::{MotionError, PathMotion, Segment, WaypointPath};
use rolling_sphere_core::scene::config::{WAYPOINT_A, WAYPOINT_B, WAYPOINT_C};

const EPS: f32 = 1e-4;

fn demo_path() -> WaypointPath {
    WaypointPath::new(WAYPOINT_A, WAYPOINT_B, WAYPOINT_C)
}

mod construction {
    use super::*;

    #[test]
    fn starts_at_a_with_identity_orientation() {
        let motion = PathMotion::new(demo_path(), 10).unwrap();
        assert_eq!(motion.position(), WAYPOINT_A);
        assert_eq!(motion.orientation(), Mat4::IDENTITY);
        assert_eq!(motion.state().tick, 0);
        assert_eq!(motion.state().segment, Segment::AB);
    }

    #[test]
    fn zero_ticks_rejected() {
        let err = PathMotion::new(demo_path(), 0).unwrap_err();
        assert_eq!(err, MotionError::ZeroTicksPerSegment);
    }
}

mod segments {
    use super::*;

    #[test]
    fn phase_wraps_every_three() {
        assert_eq!(Segment::from_phase(0), Segment::AB);
        assert_eq!(Segment::from_phase(1), Segment::BC);
        assert_eq!(Segment::from_phase(2), Segment::CA);
        assert_eq!(Segment::from_phase(3), Segment::AB);
    }

    #[test]
    fn endpoints_follow_loop_order() {
        let path = demo_path();
        assert_eq!(path.endpoints(Segment::AB), (WAYPOINT_A, WAYPOINT_B));
        assert_eq!(path.endpoints(Segment::BC), (WAYPOINT_B, WAYPOINT_C));
        assert_eq!(path.endpoints(Segment::CA), (WAYPOINT_C, WAYPOINT_A));
    }
}

mod advancing {
    use super::*;

    #[test]
    fn second_tick_of_four_is_midpoint_of_ab() {
        let mut motion = PathMotion::new(demo_path(), 4).unwrap();
        motion.advance();
        motion.advance();
        assert!(
            motion.position().abs_diff_eq(Vec3::new(-0.5, 1.0, 0.0), EPS),
            "{}",
            motion.position()
        );
        assert_eq!(motion.state().segment, Segment::AB);
        assert!((motion.state().progress - 0.5).abs() < EPS);
    }

    #[test]
    fn segment_boundary_lands_on_next_waypoint() {
        let mut motion = PathMotion::new(demo_path(), 4).unwrap();
        for _ in 0..4 {
            motion.advance();
        }
        assert!(motion.position().abs_diff_eq(WAYPOINT_B, EPS));
        assert_eq!(motion.state().segment, Segment::BC);
    }

    #[test]
    fn full_loop_returns_to_a() {
        let ticks = 7;
        let mut motion = PathMotion::new(demo_path(), ticks).unwrap();
        for _ in 0..3 * ticks {
            motion.advance();
        }
        assert!(motion.position().abs_diff_eq(WAYPOINT_A, EPS));
        assert_eq!(motion.state().segment, Segment::AB);
        assert_eq!(motion.state().tick, 21);
    }

    #[test]
    fn sphere_stays_on_the_floor_plane() {
        let mut motion = PathMotion::new(demo_path(), 5).unwrap();
        for _ in 0..30 {
            motion.advance();
            assert!((motion.position().y - 1.0).abs() < EPS);
        }
    }
}

mod rolling {
    use super::*;

    #[test]
    fn angle_is_distance_in_degrees() {
        let mut motion = PathMotion::new(demo_path(), 4).unwrap();
        let step = motion.advance();
        let expected = (WAYPOINT_B - WAYPOINT_A).length() / 4.0 * 180.0 / PI;
        assert!((step.angle_degrees - expected).abs() < 1e-3);
    }

    #[test]
    fn axis_is_floor_normal_cross_displacement() {
        let mut motion = PathMotion::new(demo_path(), 4).unwrap();
        let step = motion.advance();
        let expected = Vec3::Y.cross(step.displacement);
        assert!(step.axis.abs_diff_eq(expected, EPS));
        assert!(step.axis.dot(Vec3::Y).abs() < EPS);
    }

    #[test]
    fn rotations_compose_by_left_multiplication() {
        // Two ticks per leg: tick 2 ends the AB leg, tick 3 is halfway along BC.
        let mut motion = PathMotion::new(demo_path(), 2).unwrap();
        let r0 = motion.advance().rotation;
        let first = motion.advance();
        let second = motion.advance();
        assert_eq!(motion.state().segment, Segment::BC);
        assert!(first.axis.cross(second.axis).length() > 1.0);

        let (r1, r2) = (first.rotation, second.rotation);
        let orientation = motion.orientation();
        assert!(orientation.abs_diff_eq(r2 * r1 * r0, EPS), "{orientation}");
        assert!(!orientation.abs_diff_eq(r1 * r2 * r0, 1e-2));
    }

    #[test]
    fn vertical_displacement_leaves_orientation_unchanged() {
        let path = WaypointPath::new(
            Vec3::ZERO,
            Vec3::new(0.0, 4.0, 0.0),
            Vec3::new(0.0, 8.0, 0.0),
        );
        let mut motion = PathMotion::new(path, 4).unwrap();
        for _ in 0..6 {
            let step = motion.advance();
            assert!(step.angle_degrees > 0.0);
            assert_eq!(step.axis, Vec3::ZERO);
            assert!(step.rotation.abs_diff_eq(Mat4::IDENTITY, EPS));
        }
        assert!(motion.position().abs_diff_eq(Vec3::new(0.0, 6.0, 0.0), EPS));
        assert!(motion.orientation().abs_diff_eq(Mat4::IDENTITY, EPS));
    }

    #[test]
    fn step_rotation_matches_rotate() {
        let mut motion = PathMotion::new(demo_path(), 4).unwrap();
        let step = motion.advance();
        let expected = rotate(step.angle_degrees, step.axis.x, step.axis.y, step.axis.z);
        assert!(step.rotation.abs_diff_eq(expected, EPS));
    }

    #[test]
    fn single_tick_segments_roll_each_leg() {
        let mut motion = PathMotion::new(demo_path(), 1).unwrap();
        let step = motion.advance();
        // With one tick per leg every advance jumps a full waypoint.
        assert!(step.displacement.abs_diff_eq(WAYPOINT_B - WAYPOINT_A, EPS));
        assert!(motion.position().abs_diff_eq(WAYPOINT_B, EPS));
    }
}
