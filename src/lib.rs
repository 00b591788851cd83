pub mod config;
pub mod display;
pub mod driver;
pub mod error;
pub mod frame_path;
pub mod scene;
pub mod trajectory;
pub mod utils;

pub use config::{AnimationConfig, Preset, SceneSetup};
pub use display::WindowScene;
pub use driver::{prepare_output_dir, render_animation, RenderSummary};
pub use error::AnimationError;
pub use frame_path::FramePathPattern;
pub use scene::{CameraInfo, LightId, LightState, SceneController};
pub use trajectory::{Pose, Trajectory, TrajectoryParams, TrajectoryType};
