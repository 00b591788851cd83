use crate::error::AnimationError;
use crate::frame_path::FramePathPattern;
use crate::scene::{CameraInfo, LightId, LightState};
use crate::trajectory::{
  DualLightBounded, LightOnlySpike, OrbitDamped, OrbitSimple, Trajectory,
  TrajectoryType,
};
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Initial camera and lights for hosts that start without scene state of
/// their own, such as the preview window.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneSetup {
  pub camera: CameraInfo,
  pub lights: [LightState; 2],
}

impl SceneSetup {
  pub fn light(&self, id: LightId) -> &LightState {
    &self.lights[id.index()]
  }
}

impl Default for SceneSetup {
  fn default() -> Self {
    Self {
      camera: CameraInfo {
        eye: Point3::new(10.0, 10.0, 8.0),
        at: Point3::origin(),
        up: Vector3::new(0.0, 0.0, 1.0),
      },
      lights: [
        LightState {
          position: Point3::new(4.0, -4.0, 8.0),
          power: 1.0,
        },
        LightState {
          position: Point3::new(-6.0, 2.0, 6.0),
          power: 1.0,
        },
      ],
    }
  }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
  pub num_frames: usize,
  pub output_path_pattern: String,
  pub trajectory: TrajectoryType,
  #[serde(default)]
  pub scene: SceneSetup,
}

impl AnimationConfig {
  pub fn load_from_file(path: &Path) -> Result<Self, AnimationError> {
    let contents = std::fs::read_to_string(path)?;

    match path.extension().and_then(|ext| ext.to_str()) {
      Some("toml") => Self::from_toml(&contents),
      _ => Err(AnimationError::UnsupportedConfigFormat(
        path.display().to_string(),
      )),
    }
  }

  pub fn from_toml(contents: &str) -> Result<Self, AnimationError> {
    toml::from_str(contents)
      .map_err(|e| AnimationError::ConfigParse(e.to_string()))
  }

  /// Checks everything the render loop relies on and returns the parsed
  /// output pattern.
  pub fn validate(&self) -> Result<FramePathPattern, AnimationError> {
    if self.num_frames < 2 {
      return Err(AnimationError::invalid(format!(
        "num_frames must be at least 2, got {}",
        self.num_frames
      )));
    }

    self.trajectory.validate()?;

    FramePathPattern::new(&self.output_path_pattern)
  }
}

/// Ready-made animations with their own frame counts, paths and cameras.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Preset {
  PrettySpheres,
  SphereSubtraction,
  SpikedSphereSubtraction,
  SeeThroughSphereSubtraction,
}

impl Preset {
  pub fn config(self) -> AnimationConfig {
    let z_up = Vector3::new(0.0, 0.0, 1.0);

    match self {
      Preset::PrettySpheres => AnimationConfig {
        num_frames: 1801,
        output_path_pattern: "renders/PrettySpheres/Rotation.%05d.png"
          .to_string(),
        trajectory: TrajectoryType::OrbitSimple(OrbitSimple {}),
        scene: SceneSetup {
          camera: CameraInfo {
            eye: Point3::new(-0.26221034, 9.364587, 1.9756403),
            at: Point3::origin(),
            up: z_up,
          },
          ..SceneSetup::default()
        },
      },
      Preset::SphereSubtraction => AnimationConfig {
        num_frames: 601,
        output_path_pattern: "renders/SphereSubtraction/Rotation.%05d.png"
          .to_string(),
        trajectory: TrajectoryType::OrbitDamped(OrbitDamped {
          light: LightId::Primary,
        }),
        scene: SceneSetup {
          camera: CameraInfo {
            eye: Point3::new(6.7809315, 4.820442, 12.551248),
            at: Point3::new(-0.5992905, -0.063792214, 0.9333389),
            up: z_up,
          },
          ..SceneSetup::default()
        },
      },
      Preset::SpikedSphereSubtraction => AnimationConfig {
        num_frames: 301,
        output_path_pattern:
          "renders/SpikedSphereSubtraction/LightRotation.%04d.png"
            .to_string(),
        trajectory: TrajectoryType::LightOnlySpike(LightOnlySpike {
          light: LightId::Secondary,
        }),
        scene: SceneSetup::default(),
      },
      Preset::SeeThroughSphereSubtraction => AnimationConfig {
        num_frames: 1201,
        output_path_pattern:
          "renders/SeeThroughSphereSubtraction/Animation.%04d.png"
            .to_string(),
        trajectory: TrajectoryType::DualLightBounded(DualLightBounded {
          outer: LightId::Secondary,
          inner: LightId::Primary,
        }),
        scene: SceneSetup {
          camera: CameraInfo {
            eye: Point3::new(12.191141, 13.39508, 11.727107),
            at: Point3::new(0.0, 0.0, 3.616187),
            up: z_up,
          },
          ..SceneSetup::default()
        },
      },
    }
  }
}
