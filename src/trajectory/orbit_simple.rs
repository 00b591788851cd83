use crate::scene::LightId;
use crate::trajectory::{rotate, Pose, Trajectory, TrajectoryParams, S};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Full revolution of the eye around the target, about the camera up
/// vector, with the radius pulsing twice per revolution.
#[derive(clap::Args, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OrbitSimple {}

pub fn swing(t: S) -> S {
  3.0 / 4.0 + (4.0 * PI * t).cos() / 4.0
}

impl Trajectory for OrbitSimple {
  fn pose(&self, params: &TrajectoryParams, t: S) -> Pose {
    let camera = &params.camera;
    let dir = rotate(&(camera.eye - camera.at), 2.0 * PI * t, &camera.up);

    Pose {
      eye: Some(camera.at + dir * swing(t)),
      lights: Vec::new(),
    }
  }

  fn required_lights(&self) -> Vec<LightId> {
    Vec::new()
  }
}
