use crate::config::AnimationConfig;
use crate::error::AnimationError;
use crate::frame_path::FramePathPattern;
use crate::scene::{CameraInfo, SceneController, SceneOperation};
use crate::trajectory::{Pose, Trajectory, TrajectoryParams, S};
use indicatif::ProgressBar;
use std::fs::create_dir_all;
use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq)]
pub struct RenderSummary {
  pub frames: usize,
  pub last_frame: Option<PathBuf>,
}

/// Normalized time of `frame` in a sequence of `num_frames`, from 0 at the
/// first frame to 1 at the last. `num_frames` must be at least 2.
pub fn frame_time(frame: usize, num_frames: usize) -> S {
  debug_assert!(num_frames >= 2, "num_frames must be at least 2");
  frame as S / (num_frames - 1) as S
}

/// Makes sure the directory frames are written into exists.
pub fn prepare_output_dir(
  pattern: &FramePathPattern,
) -> Result<(), AnimationError> {
  if let Some(dir) = pattern.directory() {
    if dir.exists() {
      if !dir.is_dir() {
        return Err(AnimationError::invalid(format!(
          "output directory {} exists and isn't a directory",
          dir.display()
        )));
      }
    } else {
      create_dir_all(&dir)?;
    }
  }

  Ok(())
}

/// Writes `pose` into the scene on top of the initial state in `params`.
pub fn apply_pose<C: SceneController>(
  scene: &mut C,
  params: &TrajectoryParams,
  pose: &Pose,
) -> Result<(), AnimationError> {
  if let Some(eye) = pose.eye {
    scene
      .set_camera(&CameraInfo {
        eye,
        ..params.camera.clone()
      })
      .map_err(AnimationError::external(SceneOperation::SetCamera))?;
  }

  for update in &pose.lights {
    if let Some(initial) = params.light(update.light) {
      scene
        .set_light(update.light, &update.apply_to(initial))
        .map_err(AnimationError::external(SceneOperation::SetLight(
          update.light,
        )))?;
    }
  }

  Ok(())
}

/// Renders and captures every frame of the configured animation.
///
/// Frames are strictly sequential: a frame is only posed once the previous
/// capture has returned. The first failing scene call ends the run.
pub fn render_animation<C: SceneController>(
  scene: &mut C,
  config: &AnimationConfig,
  show_progress: bool,
) -> Result<RenderSummary, AnimationError> {
  let pattern = config.validate()?;
  let trajectory = &config.trajectory;
  let num_frames = config.num_frames;

  let params =
    TrajectoryParams::capture(&*scene, &trajectory.required_lights())?;

  log::info!(
    "rendering {} frames of {} to {}",
    num_frames,
    trajectory.name(),
    config.output_path_pattern
  );

  let p_bar = if show_progress {
    ProgressBar::new(num_frames as u64)
  } else {
    ProgressBar::hidden()
  };

  let mut last_frame = None;

  for frame in 0..num_frames {
    let t = frame_time(frame, num_frames);
    let pose = trajectory.pose(&params, t);

    apply_pose(scene, &params, &pose)?;

    scene
      .render()
      .map_err(AnimationError::external(SceneOperation::Render))?;
    scene
      .flush()
      .map_err(AnimationError::external(SceneOperation::Flush))?;

    let path = pattern.format(frame);
    scene
      .capture(&path)
      .map_err(AnimationError::external(SceneOperation::Capture(
        path.clone(),
      )))?;

    log::debug!(
      "frame {} (t = {:.4}) eye {:?} -> {}",
      frame,
      t,
      pose.eye,
      path.display()
    );

    last_frame = Some(path);
    p_bar.inc(1);
  }

  p_bar.finish();

  log::info!("rendered {} frames", num_frames);

  Ok(RenderSummary {
    frames: num_frames,
    last_frame,
  })
}
