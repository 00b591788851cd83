use crate::config::SceneSetup;
use crate::scene::{CameraInfo, LightId, LightState, SceneController};
use crate::trajectory::S;
use kiss3d::camera::FirstPerson;
use kiss3d::light::Light;
use kiss3d::scene::SceneNode;
use kiss3d::window::Window;
use nalgebra::{Point3, Translation3, Vector3};
use std::path::Path;

#[derive(thiserror::Error, Debug)]
pub enum DisplayError {
  #[error("preview window was closed")]
  WindowClosed,

  #[error("failed to save frame: {0}")]
  Image(#[from] image::ImageError),

  #[error("preview window only supports +y or +z up vectors, got {0:?}")]
  UnsupportedUpAxis(Vector3<S>),
}

/// Preview host: a kiss3d window showing the look-at target and a marker
/// per light, snapshotting its framebuffer on capture.
///
/// kiss3d has a single point light, so the most powerful light drives it.
/// Light power only affects marker brightness.
pub struct WindowScene {
  window: Window,
  cam: FirstPerson,
  camera_info: CameraInfo,
  lights: [LightState; 2],
  subject: SceneNode,
  light_markers: Vec<SceneNode>,
  render_pending: bool,
}

fn to_f32_point(p: &Point3<S>) -> Point3<f32> {
  Point3::new(p.x as f32, p.y as f32, p.z as f32)
}

/// kiss3d's `FirstPerson` only switches between a y-up and a z-up frame,
/// so `up` must point along one of those once normalized.
fn preview_up_axis(up: &Vector3<S>) -> Result<Vector3<f32>, DisplayError> {
  let unit = up
    .try_normalize(S::EPSILON)
    .ok_or(DisplayError::UnsupportedUpAxis(*up))?;

  if (unit - Vector3::z()).norm() < 1e-6 {
    Ok(Vector3::z())
  } else if (unit - Vector3::y()).norm() < 1e-6 {
    Ok(Vector3::y())
  } else {
    Err(DisplayError::UnsupportedUpAxis(*up))
  }
}

fn translation(p: &Point3<S>) -> Translation3<f32> {
  Translation3::from(to_f32_point(p).coords)
}

fn brightness(power: S) -> f32 {
  let power = power.max(0.0);
  (power / (1.0 + power)) as f32
}

impl WindowScene {
  pub fn new(
    window_name: &str,
    hide: bool,
    setup: &SceneSetup,
  ) -> Result<Self, DisplayError> {
    let camera = &setup.camera;
    let up_axis = preview_up_axis(&camera.up)?;

    let mut window = Window::new_hidden(window_name);

    if !hide {
      window.show();
    }

    let mut subject = window.add_sphere(1.0);
    subject.set_color(0.8, 0.8, 0.8);

    let light_markers = LightId::ALL
      .iter()
      .map(|_| window.add_sphere(0.15))
      .collect();

    let mut cam =
      FirstPerson::new(to_f32_point(&camera.eye), to_f32_point(&camera.at));
    cam.set_up_axis(up_axis);

    let mut scene = Self {
      window,
      cam,
      camera_info: camera.clone(),
      lights: setup.lights.clone(),
      subject,
      light_markers,
      render_pending: false,
    };

    scene.sync_subject();
    for id in LightId::ALL.iter().copied() {
      scene.sync_light(id);
    }

    Ok(scene)
  }

  fn sync_subject(&mut self) {
    self
      .subject
      .set_local_translation(translation(&self.camera_info.at));
  }

  fn sync_light(&mut self, id: LightId) {
    let light = &self.lights[id.index()];
    let marker = &mut self.light_markers[id.index()];
    let level = brightness(light.power);

    marker.set_local_translation(translation(&light.position));
    marker.set_color(level, level, 0.5 * level);

    let strongest = self
      .lights
      .iter()
      .max_by(|a, b| {
        a.power
          .partial_cmp(&b.power)
          .unwrap_or(std::cmp::Ordering::Equal)
      })
      .map(|light| to_f32_point(&light.position));

    if let Some(position) = strongest {
      self.window.set_light(Light::Absolute(position));
    }
  }
}

impl SceneController for WindowScene {
  type Error = DisplayError;

  fn camera(&self) -> Result<CameraInfo, DisplayError> {
    Ok(self.camera_info.clone())
  }

  fn set_camera(&mut self, camera: &CameraInfo) -> Result<(), DisplayError> {
    let up_axis = preview_up_axis(&camera.up)?;

    self
      .cam
      .look_at(to_f32_point(&camera.eye), to_f32_point(&camera.at));
    self.cam.set_up_axis(up_axis);
    self.camera_info = camera.clone();
    self.sync_subject();
    Ok(())
  }

  fn light(&self, id: LightId) -> Result<LightState, DisplayError> {
    Ok(self.lights[id.index()].clone())
  }

  fn set_light(
    &mut self,
    id: LightId,
    light: &LightState,
  ) -> Result<(), DisplayError> {
    self.lights[id.index()] = light.clone();
    self.sync_light(id);
    Ok(())
  }

  fn render(&mut self) -> Result<(), DisplayError> {
    self.render_pending = true;
    Ok(())
  }

  fn flush(&mut self) -> Result<(), DisplayError> {
    if self.render_pending {
      if !self.window.render_with_camera(&mut self.cam) {
        return Err(DisplayError::WindowClosed);
      }
      self.render_pending = false;
    }

    Ok(())
  }

  fn capture(&mut self, path: &Path) -> Result<(), DisplayError> {
    let frame = self.window.snap_image();
    let (width, height) = frame.dimensions();

    image::save_buffer(
      path,
      &frame.into_raw(),
      width,
      height,
      image::ColorType::Rgb8,
    )?;

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn brightness_saturates() {
    assert_eq!(brightness(0.0), 0.0);
    assert_eq!(brightness(-3.0), 0.0);
    assert!((brightness(1.0) - 0.5).abs() < 1e-6);
    assert!(brightness(1000.0) < 1.0);
    assert!(brightness(2.0) > brightness(1.0));
  }

  #[test]
  fn converts_to_render_precision() {
    let p = Point3::new(1.5, -2.25, 3.0);
    assert_eq!(to_f32_point(&p), Point3::new(1.5f32, -2.25, 3.0));
    assert_eq!(translation(&p).vector, Vector3::new(1.5f32, -2.25, 3.0));
  }

  #[test]
  fn up_axis_is_normalized_onto_kiss3d_frames() {
    let axis = preview_up_axis(&Vector3::new(0.0, 0.0, 2.0)).unwrap();
    assert_eq!(axis, Vector3::z());
    let axis = preview_up_axis(&Vector3::new(0.0, 0.5, 0.0)).unwrap();
    assert_eq!(axis, Vector3::y());
  }

  #[test]
  fn unsupported_up_axis_is_an_error() {
    for up in &[
      Vector3::new(0.0, 0.0, -1.0),
      Vector3::new(0.1, 0.0, 1.0),
      Vector3::new(1.0, 0.0, 0.0),
      Vector3::zeros(),
    ] {
      assert!(matches!(
        preview_up_axis(up),
        Err(DisplayError::UnsupportedUpAxis(_))
      ));
    }
  }
}
