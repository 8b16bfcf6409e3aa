//! Builders for elementary affine transforms.
//!
//! All matrices act on column vectors, so in `a * b` the transform `b` is
//! applied first.

use crate::{angle::Radians, matrix::Matrix4, vector::Vector4};

/// Creates a matrix translating points by the given offsets. Directions
/// (w = 0) are unaffected.
#[inline]
pub const fn translation(dx: f32, dy: f32, dz: f32) -> Matrix4 {
    Matrix4::from_columns(
        Vector4::unit_x(),
        Vector4::unit_y(),
        Vector4::unit_z(),
        Vector4::point(dx, dy, dz),
    )
}

/// Creates a matrix scaling along each principal axis by the given factors.
#[inline]
pub const fn scaling(sx: f32, sy: f32, sz: f32) -> Matrix4 {
    Matrix4::from_diagonal(&Vector4::point(sx, sy, sz))
}

/// Creates a right-handed rotation about the x-axis.
#[inline]
pub fn rotation_x(angle: Radians) -> Matrix4 {
    let (s, c) = angle.sin_cos();
    Matrix4::from_columns(
        Vector4::unit_x(),
        Vector4::direction(0.0, c, s),
        Vector4::direction(0.0, -s, c),
        Vector4::unit_w(),
    )
}

/// Creates a right-handed rotation about the y-axis.
#[inline]
pub fn rotation_y(angle: Radians) -> Matrix4 {
    let (s, c) = angle.sin_cos();
    Matrix4::from_columns(
        Vector4::direction(c, 0.0, -s),
        Vector4::unit_y(),
        Vector4::direction(s, 0.0, c),
        Vector4::unit_w(),
    )
}

/// Creates a right-handed rotation about the z-axis.
#[inline]
pub fn rotation_z(angle: Radians) -> Matrix4 {
    let (s, c) = angle.sin_cos();
    Matrix4::from_columns(
        Vector4::direction(c, s, 0.0),
        Vector4::direction(-s, c, 0.0),
        Vector4::unit_z(),
        Vector4::unit_w(),
    )
}

/// Creates a right-handed rotation about the given axis through the origin.
///
/// The axis is normalized (w included), rotated about x into the y = 0 plane,
/// then about y onto the z-axis. The rotation about z is applied there and
/// the two alignment rotations are undone in reverse order. Products are
/// accumulated from the left one factor at a time. When the axis lies along
/// the x-axis the first alignment is skipped.
///
/// A zero axis is not trapped and gives a non-finite matrix, as with
/// [`Vector4::normalized`].
pub fn rotation_about_axis(axis: &Vector4, angle: Radians) -> Matrix4 {
    let axis = axis.normalized();
    let d = (axis.y() * axis.y() + axis.z() * axis.z()).sqrt();

    let mut align_x = Matrix4::identity();
    if d != 0.0 {
        align_x.set_column_2(Vector4::direction(0.0, axis.z() / d, axis.y() / d));
        align_x.set_column_3(Vector4::direction(0.0, -axis.y() / d, axis.z() / d));
    }

    let mut align_y = Matrix4::identity();
    align_y.set_column_1(Vector4::direction(d, 0.0, axis.x()));
    align_y.set_column_3(Vector4::direction(-axis.x(), 0.0, d));

    let m = align_y * align_x;
    let m = rotation_z(angle) * m;
    let m = align_y.transposed() * m;
    align_x.transposed() * m
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    const EPSILON: f32 = 1e-5;

    #[test]
    fn translating_point_works() {
        let p = Vector4::point(1.0, 2.0, 3.0);
        assert_eq!(translation(1.0, -2.0, 0.5) * p, Vector4::point(2.0, 0.0, 3.5));
    }

    #[test]
    fn translating_direction_has_no_effect() {
        let d = Vector4::direction(1.0, 2.0, 3.0);
        assert_eq!(translation(1.0, -2.0, 0.5) * d, d);
    }

    #[test]
    fn translation_stores_offset_in_last_column() {
        let m = translation(4.0, 5.0, 6.0);
        assert_eq!(*m.column_4(), Vector4::new(4.0, 5.0, 6.0, 1.0));
        assert_eq!(m.diagonal(), Vector4::same(1.0));
    }

    #[test]
    fn scaling_point_works() {
        let m = scaling(2.0, 3.0, -1.0);
        assert_eq!(m.diagonal(), Vector4::new(2.0, 3.0, -1.0, 1.0));
        assert_eq!(m * Vector4::point(1.0, 1.0, 1.0), Vector4::point(2.0, 3.0, -1.0));
    }

    #[test]
    fn rotating_about_x_follows_right_hand_rule() {
        let rotated = rotation_x(Radians(FRAC_PI_2)) * Vector4::unit_y();
        assert_abs_diff_eq!(rotated, Vector4::unit_z(), epsilon = EPSILON);
    }

    #[test]
    fn rotating_about_y_follows_right_hand_rule() {
        let rotated = rotation_y(Radians(FRAC_PI_2)) * Vector4::unit_z();
        assert_abs_diff_eq!(rotated, Vector4::unit_x(), epsilon = EPSILON);
    }

    #[test]
    fn rotating_about_z_follows_right_hand_rule() {
        let rotated = rotation_z(Radians(FRAC_PI_2)) * Vector4::unit_x();
        assert_abs_diff_eq!(rotated, Vector4::unit_y(), epsilon = EPSILON);
    }

    #[test]
    fn rotation_sign_placement_is_fixed() {
        let (s, c) = Radians(0.3).sin_cos();
        let m = rotation_x(Radians(0.3));
        assert_eq!(m.element(1, 1), c);
        assert_eq!(m.element(2, 1), s);
        assert_eq!(m.element(1, 2), -s);
        assert_eq!(m.element(2, 2), c);
        let m = rotation_y(Radians(0.3));
        assert_eq!(m.element(2, 0), -s);
        assert_eq!(m.element(0, 2), s);
        let m = rotation_z(Radians(0.3));
        assert_eq!(m.element(1, 0), s);
        assert_eq!(m.element(0, 1), -s);
    }

    #[test]
    fn rotating_leaves_rotation_axis_and_w_unchanged() {
        let angle = Radians(1.1);
        assert_eq!(rotation_x(angle) * Vector4::unit_x(), Vector4::unit_x());
        assert_eq!(rotation_y(angle) * Vector4::unit_y(), Vector4::unit_y());
        assert_eq!(rotation_z(angle) * Vector4::unit_z(), Vector4::unit_z());
        assert_eq!((rotation_z(angle) * Vector4::point(1.0, 0.0, 0.0)).w(), 1.0);
    }

    #[test]
    fn composition_order_matters() {
        let rotate_then_translate = translation(1.0, 0.0, 0.0) * rotation_z(Radians(FRAC_PI_2));
        let translate_then_rotate = rotation_z(Radians(FRAC_PI_2)) * translation(1.0, 0.0, 0.0);
        let origin = Vector4::point(0.0, 0.0, 0.0);
        assert_abs_diff_eq!(
            rotate_then_translate * origin,
            Vector4::point(1.0, 0.0, 0.0),
            epsilon = EPSILON
        );
        assert_abs_diff_eq!(
            translate_then_rotate * origin,
            Vector4::point(0.0, 1.0, 0.0),
            epsilon = EPSILON
        );
    }

    #[test]
    fn rotating_about_principal_axes_matches_axis_rotations() {
        let angle = Radians(0.7);
        assert_abs_diff_eq!(
            rotation_about_axis(&Vector4::unit_x(), angle),
            rotation_x(angle),
            epsilon = EPSILON
        );
        assert_abs_diff_eq!(
            rotation_about_axis(&Vector4::unit_y(), angle),
            rotation_y(angle),
            epsilon = EPSILON
        );
        assert_abs_diff_eq!(
            rotation_about_axis(&Vector4::direction(0.0, 0.0, 3.0), angle),
            rotation_z(angle),
            epsilon = EPSILON
        );
    }

    #[test]
    fn rotating_about_diagonal_axis_permutes_basis() {
        let axis = Vector4::direction(1.0, 1.0, 1.0);
        let m = rotation_about_axis(&axis, Radians(2.0 * PI / 3.0));
        assert_abs_diff_eq!(m * Vector4::unit_x(), Vector4::unit_y(), epsilon = EPSILON);
        assert_abs_diff_eq!(m * Vector4::unit_y(), Vector4::unit_z(), epsilon = EPSILON);
        assert_abs_diff_eq!(m * axis, axis, epsilon = EPSILON);
    }

    #[test]
    fn rotation_about_axis_accumulates_products_from_the_left() {
        let bits = |m: &Matrix4| bytemuck::cast::<Matrix4, [u32; 16]>(*m);

        for (axis, angle) in [
            (Vector4::direction(1.0, 2.0, 3.0), 0.7),
            (Vector4::direction(-0.3, 0.9, 0.1), -2.1),
            (Vector4::direction(1.0, 0.0, 1.0), 1.3),
            (Vector4::direction(0.2, -0.5, -0.8), 2.9),
        ] {
            let unit = axis.normalized();
            let d = (unit.y() * unit.y() + unit.z() * unit.z()).sqrt();
            let align_x = Matrix4::from_columns(
                Vector4::unit_x(),
                Vector4::direction(0.0, unit.z() / d, unit.y() / d),
                Vector4::direction(0.0, -unit.y() / d, unit.z() / d),
                Vector4::unit_w(),
            );
            let align_y = Matrix4::from_columns(
                Vector4::direction(d, 0.0, unit.x()),
                Vector4::unit_y(),
                Vector4::direction(-unit.x(), 0.0, d),
                Vector4::unit_w(),
            );

            let mut expected = align_y * align_x;
            expected = rotation_z(Radians(angle)) * expected;
            expected = align_y.transposed() * expected;
            expected = align_x.transposed() * expected;

            assert_eq!(
                bits(&rotation_about_axis(&axis, Radians(angle))),
                bits(&expected)
            );
        }
    }

    #[test]
    fn rotating_about_axis_in_y_zero_plane_still_aligns_about_x() {
        let axis = Vector4::direction(1.0, 0.0, 1.0);
        let m = rotation_about_axis(&axis, Radians(0.9));
        assert_abs_diff_eq!(m * axis, axis, epsilon = EPSILON);
        assert_abs_diff_eq!(
            m,
            rotation_about_axis(&(axis * 3.0), Radians(0.9)),
            epsilon = EPSILON
        );
    }

    #[test]
    fn rotating_about_zero_axis_gives_non_finite_matrix() {
        assert!(!rotation_about_axis(&Vector4::zeros(), Radians(1.0)).is_finite());
    }

    proptest! {
        #[test]
        fn composing_y_rotations_adds_angles(a in -PI..PI, b in -PI..PI) {
            let composed = rotation_y(Radians(a)) * rotation_y(Radians(b));
            prop_assert!(approx::abs_diff_eq!(
                composed,
                rotation_y(Radians(a) + Radians(b)),
                epsilon = EPSILON
            ));
        }

        #[test]
        fn axis_rotations_are_inverted_by_negated_angle(a in -PI..PI) {
            let rotations: [fn(Radians) -> Matrix4; 3] = [rotation_x, rotation_y, rotation_z];
            for rotation in rotations {
                let round_trip = rotation(Radians(a)) * rotation(-Radians(a));
                prop_assert!(approx::abs_diff_eq!(
                    round_trip,
                    Matrix4::identity(),
                    epsilon = EPSILON
                ));
            }
        }

        #[test]
        fn axis_rotation_preserves_axis(
            x in -1.0_f32..1.0,
            y in -1.0_f32..1.0,
            z in -1.0_f32..1.0,
            a in -PI..PI,
        ) {
            let axis = Vector4::direction(x, y, z);
            prop_assume!(axis.norm() > 1e-2);
            let rotated = rotation_about_axis(&axis, Radians(a)) * axis;
            prop_assert!(approx::abs_diff_eq!(rotated, axis, epsilon = 1e-4));
        }
    }
}
