use crate::scene::LightId;
use crate::trajectory::rotation::world_z;
use crate::trajectory::{
  rotate, LightUpdate, Pose, Trajectory, TrajectoryParams, S,
};
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Orbit with a gentler horizontal swing and an independent vertical
/// damping, plus one light circling the world z axis in step with the
/// camera.
#[derive(clap::Args, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrbitDamped {
  #[arg(long, value_enum, default_value_t = LightId::Primary)]
  #[serde(default = "default_light")]
  pub light: LightId,
}

fn default_light() -> LightId {
  LightId::Primary
}

impl Default for OrbitDamped {
  fn default() -> Self {
    Self {
      light: default_light(),
    }
  }
}

pub fn swing(t: S) -> S {
  9.0 / 10.0 + (4.0 * PI * t).cos() / 10.0
}

pub fn vertical_damping(t: S) -> S {
  2.0 / 3.0 + (2.0 * PI * t).cos() / 3.0
}

impl Trajectory for OrbitDamped {
  fn pose(&self, params: &TrajectoryParams, t: S) -> Pose {
    let angle = 2.0 * PI * t;
    let camera = &params.camera;
    let dir = rotate(&(camera.eye - camera.at), angle, &camera.up);

    let s = swing(t);
    let d = vertical_damping(t);
    let eye = camera.at + Vector3::new(s * dir.x, s * dir.y, d * s * dir.z);

    let lights = params
      .light(self.light)
      .map(|light| LightUpdate {
        light: self.light,
        position: Some(Point3::from(rotate(
          &light.position.coords,
          angle,
          &world_z(),
        ))),
        power: None,
      })
      .into_iter()
      .collect();

    Pose {
      eye: Some(eye),
      lights,
    }
  }

  fn required_lights(&self) -> Vec<LightId> {
    vec![self.light]
  }
}
