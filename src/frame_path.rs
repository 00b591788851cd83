use crate::error::AnimationError;
use regex::Regex;
use std::path::{is_separator, Path, PathBuf};

const MAX_WIDTH: usize = 32;

/// A printf-style output path with exactly one integer conversion, e.g.
/// `renders/Rotation.%05d.png`.
#[derive(Clone, Debug, PartialEq)]
pub struct FramePathPattern {
  prefix: String,
  suffix: String,
  width: usize,
  zero_pad: bool,
}

impl FramePathPattern {
  pub fn new(pattern: &str) -> Result<Self, AnimationError> {
    let conversion_re = Regex::new(r"%(0?)(\d*)d").unwrap();

    let mut matches = conversion_re.captures_iter(pattern);
    let captures = matches.next().ok_or_else(|| {
      AnimationError::invalid(format!(
        "output path pattern `{}` has no frame index conversion like %05d",
        pattern
      ))
    })?;

    if matches.next().is_some() {
      return Err(AnimationError::invalid(format!(
        "output path pattern `{}` has more than one frame index conversion",
        pattern
      )));
    }

    let whole = captures.get(0).unwrap();
    let suffix = &pattern[whole.end()..];
    if suffix.chars().any(is_separator) {
      return Err(AnimationError::invalid(format!(
        "output path pattern `{}` puts the frame index in a directory name",
        pattern
      )));
    }

    let width = match captures.get(2).map(|m| m.as_str()) {
      Some("") | None => 0,
      Some(digits) => digits
        .parse::<usize>()
        .ok()
        .filter(|&width| width <= MAX_WIDTH)
        .ok_or_else(|| {
          AnimationError::invalid(format!(
            "frame index width `{}` exceeds {}",
            digits, MAX_WIDTH
          ))
        })?,
    };

    Ok(Self {
      prefix: pattern[..whole.start()].to_string(),
      suffix: suffix.to_string(),
      width,
      zero_pad: captures.get(1).map_or(false, |m| !m.as_str().is_empty()),
    })
  }

  pub fn format(&self, frame: usize) -> PathBuf {
    let index = if self.zero_pad {
      format!("{:0width$}", frame, width = self.width)
    } else {
      format!("{:>width$}", frame, width = self.width)
    };

    PathBuf::from(format!("{}{}{}", self.prefix, index, self.suffix))
  }

  /// Directory frames are written into, if the pattern names one.
  pub fn directory(&self) -> Option<PathBuf> {
    Path::new(&self.prefix)
      .parent()
      .filter(|dir| !dir.as_os_str().is_empty())
      .map(Path::to_path_buf)
  }
}
