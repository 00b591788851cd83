use crate::error::AnimationError;
use crate::scene::LightId;
use crate::trajectory::{
  DualLightBounded, LightOnlySpike, OrbitDamped, OrbitSimple, Pose,
  Trajectory, TrajectoryParams, S,
};
use serde::{Deserialize, Serialize};

#[derive(clap::Subcommand, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[command(about = "trajectory type and args")]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TrajectoryType {
  OrbitSimple(OrbitSimple),
  OrbitDamped(OrbitDamped),
  LightOnlySpike(LightOnlySpike),
  DualLightBounded(DualLightBounded),
}

impl TrajectoryType {
  pub fn name(&self) -> &'static str {
    match self {
      Self::OrbitSimple(_) => "orbit_simple",
      Self::OrbitDamped(_) => "orbit_damped",
      Self::LightOnlySpike(_) => "light_only_spike",
      Self::DualLightBounded(_) => "dual_light_bounded",
    }
  }
}

impl Trajectory for TrajectoryType {
  fn pose(&self, params: &TrajectoryParams, t: S) -> Pose {
    match self {
      Self::OrbitSimple(method) => method.pose(params, t),
      Self::OrbitDamped(method) => method.pose(params, t),
      Self::LightOnlySpike(method) => method.pose(params, t),
      Self::DualLightBounded(method) => method.pose(params, t),
    }
  }

  fn required_lights(&self) -> Vec<LightId> {
    match self {
      Self::OrbitSimple(method) => method.required_lights(),
      Self::OrbitDamped(method) => method.required_lights(),
      Self::LightOnlySpike(method) => method.required_lights(),
      Self::DualLightBounded(method) => method.required_lights(),
    }
  }

  fn validate(&self) -> Result<(), AnimationError> {
    match self {
      Self::OrbitSimple(method) => method.validate(),
      Self::OrbitDamped(method) => method.validate(),
      Self::LightOnlySpike(method) => method.validate(),
      Self::DualLightBounded(method) => method.validate(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::scene::{CameraInfo, LightState};
  use nalgebra::{Point3, Vector3};
  use proptest::prelude::*;
  use proptest_derive::Arbitrary;

  #[derive(Debug, Clone, Copy, Arbitrary)]
  enum Variant {
    OrbitSimple,
    OrbitDamped,
    LightOnlySpike,
    DualLightBounded,
  }

  impl Variant {
    fn trajectory(self) -> TrajectoryType {
      match self {
        Variant::OrbitSimple => TrajectoryType::OrbitSimple(OrbitSimple {}),
        Variant::OrbitDamped => {
          TrajectoryType::OrbitDamped(OrbitDamped::default())
        }
        Variant::LightOnlySpike => {
          TrajectoryType::LightOnlySpike(LightOnlySpike::default())
        }
        Variant::DualLightBounded => {
          TrajectoryType::DualLightBounded(DualLightBounded::default())
        }
      }
    }
  }

  fn params(
    eye: [f64; 3],
    at: [f64; 3],
    primary: [f64; 3],
    secondary: [f64; 3],
  ) -> TrajectoryParams {
    TrajectoryParams::new(CameraInfo {
      eye: Point3::from(Vector3::from(eye)),
      at: Point3::from(Vector3::from(at)),
      up: Vector3::new(0.0, 0.0, 1.0),
    })
    .with_light(
      LightId::Primary,
      LightState {
        position: Point3::from(Vector3::from(primary)),
        power: 1.0,
      },
    )
    .with_light(
      LightId::Secondary,
      LightState {
        position: Point3::from(Vector3::from(secondary)),
        power: 2.0,
      },
    )
  }

  #[test]
  fn serde_tag_round_trips_through_toml() {
    let text = "kind = \"dual_light_bounded\"\nouter = \"primary\"\n\
                inner = \"secondary\"\n";
    let parsed: TrajectoryType = toml::from_str(text).unwrap();
    assert_eq!(
      parsed,
      TrajectoryType::DualLightBounded(DualLightBounded {
        outer: LightId::Primary,
        inner: LightId::Secondary,
      })
    );
  }

  #[test]
  fn serde_fills_default_lights() {
    let parsed: TrajectoryType =
      toml::from_str("kind = \"light_only_spike\"").unwrap();
    assert_eq!(
      parsed,
      TrajectoryType::LightOnlySpike(LightOnlySpike {
        light: LightId::Secondary
      })
    );
  }

  #[test]
  fn required_lights_per_variant() {
    assert!(Variant::OrbitSimple.trajectory().required_lights().is_empty());
    assert_eq!(
      Variant::OrbitDamped.trajectory().required_lights(),
      vec![LightId::Primary]
    );
    assert_eq!(
      Variant::LightOnlySpike.trajectory().required_lights(),
      vec![LightId::Secondary]
    );
    assert_eq!(
      Variant::DualLightBounded.trajectory().required_lights(),
      vec![LightId::Secondary, LightId::Primary]
    );
  }

  proptest! {
  #[test]
  fn pose_is_pure(
    variant: Variant,
    eye in prop::array::uniform3(-20.0f64..20.0),
    at in prop::array::uniform3(-5.0f64..5.0),
    primary in prop::array::uniform3(-10.0f64..10.0),
    secondary in prop::array::uniform3(-10.0f64..10.0),
    t in -1.0f64..2.0,
  ) {
    let params = params(eye, at, primary, secondary);
    let trajectory = variant.trajectory();
    prop_assert_eq!(trajectory.pose(&params, t), trajectory.pose(&params, t));
  }

  #[test]
  fn orbits_close_the_loop(
    damped in any::<bool>(),
    eye in prop::array::uniform3(-20.0f64..20.0),
    at in prop::array::uniform3(-5.0f64..5.0),
    primary in prop::array::uniform3(-10.0f64..10.0),
  ) {
    let params = params(eye, at, primary, [1.0, 0.0, 0.0]);
    let trajectory = if damped {
      Variant::OrbitDamped.trajectory()
    } else {
      Variant::OrbitSimple.trajectory()
    };

    let start = trajectory.pose(&params, 0.0);
    let end = trajectory.pose(&params, 1.0);

    prop_assert!((start.eye.unwrap() - end.eye.unwrap()).norm() < 1e-9);
    for (start, end) in start.lights.iter().zip(end.lights.iter()) {
      let diff = start.position.unwrap() - end.position.unwrap();
      prop_assert!(diff.norm() < 1e-9);
    }
  }
  }
}
