//! View and projection matrix builders.
//!
//! The camera looks down its local negative z-axis. Near and far clipping
//! planes are given as z-coordinates in camera space, so both are negative
//! for a frustum in front of the camera.

use crate::{angle::Radians, matrix::Matrix4, transform::translation, vector::Vector4};

/// Creates a view matrix for a camera at `eye` looking towards `at`, with
/// `up` giving the approximate upward direction.
///
/// The camera basis is `n = normalize(eye - at)`, `u = normalize(up × n)` and
/// `v = normalize(n × u)`. The basis vectors, with their w-components
/// zeroed, become the rows of a rotation, which is applied after translating
/// `eye` to the origin.
///
/// Normalization of `n` takes the w-component of `eye - at` into account, so
/// the basis is only orthonormal when `eye` and `at` have equal w (both
/// points). If `up` is parallel to the viewing direction, or `eye` equals
/// `at`, the result is non-finite.
pub fn look_at(eye: &Vector4, at: &Vector4, up: &Vector4) -> Matrix4 {
    let n = (eye - at).normalized();
    let u = up.cross(&n).normalized();
    let v = n.cross(&u).normalized();

    let rotation = Matrix4::from_rows(
        u.with_w(0.0),
        v.with_w(0.0),
        n.with_w(0.0),
        Vector4::unit_w(),
    );
    rotation * translation(-eye.x(), -eye.y(), -eye.z())
}

/// Creates a perspective projection for the frustum with the given side
/// planes at the near plane.
///
/// `near` and `far` are the z-coordinates of the clipping planes in camera
/// space (negative in front of the camera). After the perspective divide the
/// frustum maps to the cube from -1 to 1 along each axis, with the near plane
/// at z = 1 and the far plane at z = -1. The last row is `(0, 0, -1, 0)`, so
/// the clip-space w equals the distance in front of the camera.
///
/// Degenerate bounds (`left == right`, `bottom == top` or `near == far`)
/// give a non-finite matrix.
pub fn perspective(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Matrix4 {
    let width = right - left;
    let height = top - bottom;
    let depth = far - near;

    Matrix4::from_columns(
        Vector4::new(-2.0 * near / width, 0.0, 0.0, 0.0),
        Vector4::new(0.0, -2.0 * near / height, 0.0, 0.0),
        Vector4::new(
            (left + right) / width,
            (bottom + top) / height,
            (near + far) / depth,
            -1.0,
        ),
        Vector4::new(0.0, 0.0, -2.0 * near * far / depth, 0.0),
    )
}

/// Creates a perspective projection for a frustum centered on the viewing
/// direction.
///
/// # Note
/// `aspect_ratio` is the ratio of width to height of the view plane. `near`
/// and `far` follow the same convention as in [`perspective`].
pub fn symmetric_perspective(
    vertical_field_of_view: Radians,
    aspect_ratio: f32,
    near: f32,
    far: f32,
) -> Matrix4 {
    let top = -near * (0.5 * vertical_field_of_view.radians()).tan();
    let right = top * aspect_ratio;
    perspective(-right, right, -top, top, near, far)
}
