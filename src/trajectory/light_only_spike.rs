use crate::scene::LightId;
use crate::trajectory::rotation::world_z;
use crate::trajectory::{
  rotate, LightUpdate, Pose, Trajectory, TrajectoryParams, S,
};
use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// One light circling the world z axis; the camera stays where it is.
#[derive(clap::Args, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LightOnlySpike {
  #[arg(long, value_enum, default_value_t = LightId::Secondary)]
  #[serde(default = "default_light")]
  pub light: LightId,
}

fn default_light() -> LightId {
  LightId::Secondary
}

impl Default for LightOnlySpike {
  fn default() -> Self {
    Self {
      light: default_light(),
    }
  }
}

impl Trajectory for LightOnlySpike {
  fn pose(&self, params: &TrajectoryParams, t: S) -> Pose {
    let lights = params
      .light(self.light)
      .map(|light| LightUpdate {
        light: self.light,
        position: Some(Point3::from(rotate(
          &light.position.coords,
          2.0 * PI * t,
          &world_z(),
        ))),
        power: None,
      })
      .into_iter()
      .collect();

    Pose { eye: None, lights }
  }

  fn required_lights(&self) -> Vec<LightId> {
    vec![self.light]
  }
}
