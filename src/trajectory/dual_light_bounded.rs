use crate::error::AnimationError;
use crate::scene::LightId;
use crate::trajectory::rotation::world_z;
use crate::trajectory::{
  rotate, LightUpdate, Pose, Trajectory, TrajectoryParams, S,
};
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// The eye rocks back and forth instead of orbiting, while an outer light
/// circles and breathes in and out and the two lights trade power.
#[derive(clap::Args, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DualLightBounded {
  #[arg(long, value_enum, default_value_t = LightId::Secondary)]
  #[serde(default = "default_outer")]
  pub outer: LightId,

  #[arg(long, value_enum, default_value_t = LightId::Primary)]
  #[serde(default = "default_inner")]
  pub inner: LightId,
}

fn default_outer() -> LightId {
  LightId::Secondary
}

fn default_inner() -> LightId {
  LightId::Primary
}

impl Default for DualLightBounded {
  fn default() -> Self {
    Self {
      outer: default_outer(),
      inner: default_inner(),
    }
  }
}

/// Eye rotation angle, within `[-π/4, π/4]`.
pub fn swing_angle(t: S) -> S {
  (2.0 * PI * t).sin() * PI / 4.0
}

pub fn tilt_axis() -> Vector3<S> {
  Vector3::new(-1.0, 0.0, 1.0).normalize()
}

pub fn radial_damping(t: S) -> S {
  2.0 / 3.0 + (2.0 * PI * t).cos() / 3.0
}

pub fn outer_power_factor(t: S) -> S {
  1.0 - (PI * t).sin() / 2.0
}

pub fn inner_power_factor(t: S) -> S {
  1.0 + (PI * t).sin()
}

impl Trajectory for DualLightBounded {
  fn pose(&self, params: &TrajectoryParams, t: S) -> Pose {
    let camera = &params.camera;
    let angle = swing_angle(t);
    let dir = rotate(&(camera.eye - camera.at), angle, &camera.up);
    let dir = rotate(&dir, angle, &tilt_axis());

    let mut lights = Vec::with_capacity(2);

    if let Some(outer) = params.light(self.outer) {
      let rotated = rotate(&outer.position.coords, 2.0 * PI * t, &world_z());
      let damp = radial_damping(t);

      lights.push(LightUpdate {
        light: self.outer,
        position: Some(Point3::new(
          rotated.x / damp,
          rotated.y / damp,
          damp * rotated.z,
        )),
        power: Some(outer.power * outer_power_factor(t)),
      });
    }

    if let Some(inner) = params.light(self.inner) {
      lights.push(LightUpdate {
        light: self.inner,
        position: None,
        power: Some(inner.power * inner_power_factor(t)),
      });
    }

    Pose {
      eye: Some(camera.at + dir),
      lights,
    }
  }

  fn required_lights(&self) -> Vec<LightId> {
    vec![self.outer, self.inner]
  }

  fn validate(&self) -> Result<(), AnimationError> {
    if self.outer == self.inner {
      return Err(AnimationError::invalid(format!(
        "outer and inner light must differ, both are {}",
        self.outer
      )));
    }

    Ok(())
  }
}
