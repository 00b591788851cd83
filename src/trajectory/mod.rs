pub mod dual_light_bounded;
pub mod light_only_spike;
pub mod orbit_damped;
pub mod orbit_simple;
pub mod params;
pub mod rotation;
pub mod strategy;
pub mod trajectory_type;

pub type S = f64;

pub use dual_light_bounded::DualLightBounded;
pub use light_only_spike::LightOnlySpike;
pub use orbit_damped::OrbitDamped;
pub use orbit_simple::OrbitSimple;
pub use params::{LightUpdate, Pose, TrajectoryParams};
pub use rotation::rotate;
pub use strategy::Trajectory;
pub use trajectory_type::TrajectoryType;
