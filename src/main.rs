use clap::Parser;
use orbit_animator::scene::SceneOperation;
use orbit_animator::{
  prepare_output_dir, render_animation, AnimationConfig, AnimationError,
  Preset, TrajectoryType, WindowScene,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(version = "1.0", author = "Ryan G.")]
struct Opts {
  /// TOML animation config; takes precedence over --preset
  #[arg(short, long)]
  config: Option<PathBuf>,

  #[arg(short, long, value_enum, default_value_t = Preset::PrettySpheres)]
  preset: Preset,

  #[arg(short = 'n', long = "frames")]
  num_frames: Option<usize>,

  /// printf-style frame path, e.g. shots/Rotation.%05d.png
  #[arg(short, long)]
  output: Option<String>,

  #[arg(long)]
  hide: bool,

  #[arg(long)]
  no_progress: bool,

  #[command(subcommand)]
  trajectory: Option<TrajectoryType>,
}

impl Opts {
  fn animation_config(&self) -> Result<AnimationConfig, AnimationError> {
    let mut config = match &self.config {
      Some(path) => AnimationConfig::load_from_file(path)?,
      None => self.preset.config(),
    };

    if let Some(num_frames) = self.num_frames {
      config.num_frames = num_frames;
    }
    if let Some(output) = &self.output {
      config.output_path_pattern = output.clone();
    }
    if let Some(trajectory) = &self.trajectory {
      config.trajectory = trajectory.clone();
    }

    Ok(config)
  }
}

fn main() -> Result<(), AnimationError> {
  env_logger::Builder::from_env(
    env_logger::Env::default().default_filter_or("info"),
  )
  .init();

  let opts: Opts = Opts::parse();
  let config = opts.animation_config()?;

  prepare_output_dir(&config.validate()?)?;

  let mut scene = WindowScene::new("orbit animator", opts.hide, &config.scene)
    .map_err(AnimationError::external(SceneOperation::SetCamera))?;

  let summary = render_animation(&mut scene, &config, !opts.no_progress)?;

  if let Some(last_frame) = summary.last_frame {
    log::info!("last frame written to {}", last_frame.display());
  }

  Ok(())
}
