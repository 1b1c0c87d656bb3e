//! Tests for interpolation, distance, general-axis rotation and normal
//! matrices.

use glam::{Mat3, Mat4, Vec3, Vec4};
use rolling_sphere_core::math::{distance, lerp, lerp_mat4, normal_matrix, rotate};

const EPS: f32 = 1e-5;

mod interpolation {
    use super::*;

    #[test]
    fn lerp_hits_endpoints() {
        let a = Vec3::new(-4.0, 1.0, 4.0);
        let b = Vec3::new(3.0, 1.0, -4.0);
        assert!(lerp(a, b, 0.0).abs_diff_eq(a, EPS));
        assert!(lerp(a, b, 1.0).abs_diff_eq(b, EPS));
    }

    #[test]
    fn lerp_midpoint() {
        let a = Vec3::new(-4.0, 1.0, 4.0);
        let b = Vec3::new(3.0, 1.0, -4.0);
        let mid = lerp(a, b, 0.5);
        assert!(mid.abs_diff_eq(Vec3::new(-0.5, 1.0, 0.0), EPS), "{mid}");
    }

    #[test]
    fn lerp_is_not_clamped() {
        let p = lerp(Vec3::ZERO, Vec3::X, 2.0);
        assert!(p.abs_diff_eq(Vec3::new(2.0, 0.0, 0.0), EPS));
    }

    #[test]
    fn lerp_mat4_blends_elementwise() {
        let m = lerp_mat4(&Mat4::ZERO, &Mat4::IDENTITY, 0.25);
        assert!(m.abs_diff_eq(Mat4::from_diagonal(Vec4::splat(0.25)), EPS));
    }
}

mod distances {
    use super::*;

    #[test]
    fn pythagorean_triple() {
        let d = distance(Vec3::ZERO, Vec3::new(3.0, 4.0, 0.0));
        assert!((d - 5.0).abs() < EPS);
    }

    #[test]
    fn symmetric_and_zero_on_self() {
        let a = Vec3::new(1.0, -2.0, 3.0);
        let b = Vec3::new(-5.0, 0.5, 2.0);
        assert!((distance(a, b) - distance(b, a)).abs() < EPS);
        assert_eq!(distance(a, a), 0.0);
    }
}

mod rotation {
    use super::*;

    #[test]
    fn zero_angle_is_identity() {
        let m = rotate(0.0, 0.3, -1.0, 2.0);
        assert!(m.abs_diff_eq(Mat4::IDENTITY, EPS));
    }

    #[test]
    fn zero_axis_is_identity() {
        let m = rotate(57.0, 0.0, 0.0, 0.0);
        assert_eq!(m, Mat4::IDENTITY);
    }

    #[test]
    fn vector_along_axis_is_unchanged() {
        let axis = Vec3::new(1.0, 2.0, -2.0);
        let m = rotate(73.0, axis.x, axis.y, axis.z);
        let v = axis * 2.5;
        assert!(m.transform_vector3(v).abs_diff_eq(v, 1e-4));
    }

    #[test]
    fn axis_length_does_not_matter() {
        let short = rotate(30.0, 0.0, 0.0, 1.0);
        let long = rotate(30.0, 0.0, 0.0, 40.0);
        assert!(short.abs_diff_eq(long, EPS));
    }

    #[test]
    fn quarter_turn_about_y_is_right_handed() {
        let m = rotate(90.0, 0.0, 1.0, 0.0);
        let v = m.transform_vector3(Vec3::X);
        assert!(v.abs_diff_eq(-Vec3::Z, EPS), "{v}");
    }

    #[test]
    fn rotation_preserves_length() {
        let m = rotate(123.0, 1.0, 1.0, 0.0);
        let v = Vec3::new(0.2, -3.0, 1.5);
        assert!((m.transform_vector3(v).length() - v.length()).abs() < 1e-4);
    }
}

mod normal_matrices {
    use super::*;

    #[test]
    fn rotation_is_its_own_normal_matrix() {
        let m = rotate(40.0, 0.0, 1.0, 1.0);
        let n = normal_matrix(&m, true);
        assert!(n.abs_diff_eq(Mat3::from_mat4(m), 1e-4));
    }

    #[test]
    fn without_rescale_returns_upper_3x3() {
        let m = Mat4::from_scale(Vec3::new(2.0, 1.0, 1.0));
        assert_eq!(normal_matrix(&m, false), Mat3::from_mat4(m));
    }

    #[test]
    fn non_uniform_scale_keeps_normals_perpendicular() {
        let m = Mat4::from_scale(Vec3::new(4.0, 1.0, 1.0));
        let n = normal_matrix(&m, true);

        // Surface x + y = 0 has normal (1, 1, 0) and tangent (1, -1, 0).
        let tangent = m.transform_vector3(Vec3::new(1.0, -1.0, 0.0));
        let normal = n * Vec3::new(1.0, 1.0, 0.0);
        assert!(normal.dot(tangent).abs() < 1e-5);
    }

    #[test]
    fn singular_matrix_falls_back_to_upper() {
        let m = Mat4::from_scale(Vec3::new(1.0, 0.0, 1.0));
        assert_eq!(normal_matrix(&m, true), Mat3::from_mat4(m));
    }
}
