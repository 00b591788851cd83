use crate::error::AnimationError;
use crate::scene::{
  CameraInfo, LightId, LightState, SceneController, SceneOperation,
};
use crate::trajectory::S;
use nalgebra::Point3;

/// Scene state captured once before the first frame.
///
/// Every pose is computed from these values, never from the previous
/// frame.
#[derive(Clone, Debug, PartialEq)]
pub struct TrajectoryParams {
  pub camera: CameraInfo,
  lights: [Option<LightState>; 2],
}

impl TrajectoryParams {
  pub fn new(camera: CameraInfo) -> Self {
    Self {
      camera,
      lights: [None, None],
    }
  }

  pub fn with_light(mut self, id: LightId, light: LightState) -> Self {
    self.lights[id.index()] = Some(light);
    self
  }

  pub fn light(&self, id: LightId) -> Option<&LightState> {
    self.lights[id.index()].as_ref()
  }

  /// Reads the camera and the given lights from the scene.
  pub fn capture<C: SceneController>(
    scene: &C,
    lights: &[LightId],
  ) -> Result<Self, AnimationError> {
    let camera = scene
      .camera()
      .map_err(AnimationError::external(SceneOperation::GetCamera))?;

    let mut params = Self::new(camera);
    for &id in lights {
      let light = scene
        .light(id)
        .map_err(AnimationError::external(SceneOperation::GetLight(id)))?;
      params = params.with_light(id, light);
    }

    Ok(params)
  }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LightUpdate {
  pub light: LightId,
  pub position: Option<Point3<S>>,
  pub power: Option<S>,
}

impl LightUpdate {
  pub fn apply_to(&self, light: &LightState) -> LightState {
    LightState {
      position: self.position.unwrap_or(light.position),
      power: self.power.unwrap_or(light.power),
    }
  }
}

/// The state one frame writes into the scene. Fields left empty keep
/// their initial value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Pose {
  pub eye: Option<Point3<S>>,
  pub lights: Vec<LightUpdate>,
}

impl Pose {
  pub fn light(&self, id: LightId) -> Option<&LightUpdate> {
    self.lights.iter().find(|update| update.light == id)
  }
}
