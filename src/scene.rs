use crate::trajectory::S;
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraInfo {
  pub eye: Point3<S>,
  pub at: Point3<S>,
  pub up: Vector3<S>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LightState {
  pub position: Point3<S>,
  pub power: S,
}

#[derive(
  Clone,
  Copy,
  Debug,
  PartialEq,
  Eq,
  Hash,
  PartialOrd,
  Ord,
  Serialize,
  Deserialize,
  clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum LightId {
  Primary,
  Secondary,
}

impl LightId {
  pub const ALL: [LightId; 2] = [LightId::Primary, LightId::Secondary];

  pub fn index(self) -> usize {
    match self {
      LightId::Primary => 0,
      LightId::Secondary => 1,
    }
  }
}

impl fmt::Display for LightId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      LightId::Primary => write!(f, "primary"),
      LightId::Secondary => write!(f, "secondary"),
    }
  }
}

/// Names the scene call that failed, for error reporting.
#[derive(Clone, Debug, PartialEq)]
pub enum SceneOperation {
  GetCamera,
  SetCamera,
  GetLight(LightId),
  SetLight(LightId),
  Render,
  Flush,
  Capture(PathBuf),
}

impl fmt::Display for SceneOperation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      SceneOperation::GetCamera => write!(f, "get camera"),
      SceneOperation::SetCamera => write!(f, "set camera"),
      SceneOperation::GetLight(id) => write!(f, "get {} light", id),
      SceneOperation::SetLight(id) => write!(f, "set {} light", id),
      SceneOperation::Render => write!(f, "render"),
      SceneOperation::Flush => write!(f, "flush"),
      SceneOperation::Capture(path) => {
        write!(f, "capture to {}", path.display())
      }
    }
  }
}

/// Host-owned scene state and rendering actions the animation loop drives.
///
/// The loop is the only writer while it runs. `render` only requests a
/// render; `flush` blocks until the requested work (and any redraw) is
/// done, after which `capture` must see the new frame.
pub trait SceneController {
  type Error: std::error::Error + Send + Sync + 'static;

  fn camera(&self) -> Result<CameraInfo, Self::Error>;

  fn set_camera(&mut self, camera: &CameraInfo) -> Result<(), Self::Error>;

  fn light(&self, id: LightId) -> Result<LightState, Self::Error>;

  fn set_light(
    &mut self,
    id: LightId,
    light: &LightState,
  ) -> Result<(), Self::Error>;

  fn render(&mut self) -> Result<(), Self::Error>;

  fn flush(&mut self) -> Result<(), Self::Error>;

  fn capture(&mut self, path: &Path) -> Result<(), Self::Error>;
}
