//! Orientation helpers on top of `nalgebra` quaternions.
//!
//! Quaternions are exchanged as `[x, y, z, w]` (scalar last), the layout used
//! by trajectory rows.

use nalgebra::{Quaternion, UnitQuaternion, Vector3};

/// Smallest quaternion norm accepted before normalization.
const MIN_QUATERNION_NORM: f64 = 1.0e-12;

/// Normalizes a scalar-last quaternion, `None` if it is (close to) zero.
pub fn from_xyzw(xyzw: [f64; 4]) -> Option<UnitQuaternion<f64>> {
    let [x, y, z, w] = xyzw;

    if !xyzw.iter().all(|value| value.is_finite()) {
        return None;
    }

    UnitQuaternion::try_new(Quaternion::new(w, x, y, z), MIN_QUATERNION_NORM)
}

pub fn to_xyzw(orientation: &UnitQuaternion<f64>) -> [f64; 4] {
    let coords = &orientation.quaternion().coords;
    [coords.x, coords.y, coords.z, coords.w]
}

/// Spherical linear interpolation along the shortest arc.
#[inline]
pub fn slerp(
    from: &UnitQuaternion<f64>,
    to: &UnitQuaternion<f64>,
    alpha: f64,
) -> UnitQuaternion<f64> {
    // Only fails for numerically identical endpoints.
    from.try_slerp(to, alpha, f64::EPSILON).unwrap_or(*from)
}

/// Rotation from extrinsic z, y, x angles in degrees (applied in that order).
pub fn from_euler_zyx_degrees(angle_z: f64, angle_y: f64, angle_x: f64) -> UnitQuaternion<f64> {
    let rz = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), angle_z.to_radians());
    let ry = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), angle_y.to_radians());
    let rx = UnitQuaternion::from_axis_angle(&Vector3::x_axis(), angle_x.to_radians());

    rx * ry * rz
}
