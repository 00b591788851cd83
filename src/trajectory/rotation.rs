use crate::trajectory::S;
use nalgebra::{Unit, Vector3};

/// Rotates `v` by `angle` radians about `axis` (Rodrigues' formula).
///
/// `axis` need not be normalized. A zero-length axis leaves `v` unchanged.
pub fn rotate(v: &Vector3<S>, angle: S, axis: &Vector3<S>) -> Vector3<S> {
  let k = match Unit::try_new(*axis, S::EPSILON) {
    Some(k) => k.into_inner(),
    None => return *v,
  };

  let (sin, cos) = angle.sin_cos();

  v * cos + k.cross(v) * sin + k * (k.dot(v) * (1.0 - cos))
}

pub fn world_z() -> Vector3<S> {
  Vector3::new(0.0, 0.0, 1.0)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::assert_vec_eq;
  use nalgebra::Rotation3;
  use proptest::prelude::*;
  use std::f64::consts::PI;

  #[test]
  fn quarter_turn_about_z() {
    let rotated = rotate(&Vector3::new(1.0, 0.0, 0.0), PI / 2.0, &world_z());
    assert_vec_eq!(rotated, Vector3::new(0.0, 1.0, 0.0));
  }

  #[test]
  fn axis_is_normalized() {
    let v = Vector3::new(1.0, 2.0, 3.0);
    let short = rotate(&v, 0.7, &Vector3::new(0.0, 0.0, 1.0));
    let long = rotate(&v, 0.7, &Vector3::new(0.0, 0.0, 25.0));
    assert_vec_eq!(short, long);
  }

  #[test]
  fn zero_axis_is_identity() {
    let v = Vector3::new(1.0, -2.0, 0.5);
    assert_eq!(rotate(&v, 1.3, &Vector3::zeros()), v);
  }

  proptest! {
  #[test]
  fn matches_axis_angle_rotation(
    v in prop::array::uniform3(-10.0f64..10.0),
    axis in prop::array::uniform3(-1.0f64..1.0),
    angle in -10.0f64..10.0,
  ) {
    let v = Vector3::from(v);
    let axis = Vector3::from(axis);
    prop_assume!(axis.norm() > 1e-3);

    let expected =
      Rotation3::from_axis_angle(&Unit::new_normalize(axis), angle) * v;

    assert_vec_eq!(rotate(&v, angle, &axis), expected, 1e-9);
  }

  #[test]
  fn preserves_length(
    v in prop::array::uniform3(-10.0f64..10.0),
    axis in prop::array::uniform3(-1.0f64..1.0),
    angle in -10.0f64..10.0,
  ) {
    let v = Vector3::from(v);
    let rotated = rotate(&v, angle, &Vector3::from(axis));
    crate::assert_float_eq!(rotated.norm(), v.norm(), 1e-9);
  }
  }
}
