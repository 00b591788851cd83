use crate::error::AnimationError;
use crate::scene::LightId;
use crate::trajectory::{Pose, TrajectoryParams, S};

pub trait Trajectory {
  /// Pose at normalized time `t`. Defined for every real `t`, though a
  /// sequence only samples `[0, 1]`.
  fn pose(&self, params: &TrajectoryParams, t: S) -> Pose;

  /// Lights whose initial state must be in `params`.
  fn required_lights(&self) -> Vec<LightId>;

  fn validate(&self) -> Result<(), AnimationError> {
    Ok(())
  }
}
