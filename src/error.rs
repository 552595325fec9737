use std::fmt;
use std::num::ParseFloatError;
use std::str::FromStr;

use thiserror::Error;

/// The seven geometric primitives, used to name the shape a failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
  Point,
  Circle,
  Line,
  Box,
  Path,
  Polygon,
  Lseg,
}

impl Shape {
  pub const ALL: [Shape; 7] = [
    Shape::Point,
    Shape::Circle,
    Shape::Line,
    Shape::Box,
    Shape::Path,
    Shape::Polygon,
    Shape::Lseg,
  ];

  pub fn name(self) -> &'static str {
    match self {
      Shape::Point => "point",
      Shape::Circle => "circle",
      Shape::Line => "line",
      Shape::Box => "box",
      Shape::Path => "path",
      Shape::Polygon => "polygon",
      Shape::Lseg => "lseg",
    }
  }
}

impl fmt::Display for Shape {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for Shape {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    Shape::ALL
      .iter()
      .copied()
      .find(|shape| shape.name().eq_ignore_ascii_case(s))
      .ok_or_else(|| Error::UnknownShape(s.to_string()))
  }
}

#[derive(Error, Debug)]
pub enum Error {
  /// The text did not match the grammar of the shape, or held the wrong
  /// number of points.
  #[error("wrong {0}")]
  Wrong(Shape),

  #[error(transparent)]
  ParseFloat(#[from] ParseFloatError),

  /// The raw column value was neither text nor bytes.
  #[error("incompatible type {0}")]
  IncompatibleType(&'static str),

  #[error(transparent)]
  Json(#[from] serde_json::Error),

  #[error("unknown shape: {0}")]
  UnknownShape(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl From<Error> for sqlite::Error {
  fn from(err: Error) -> sqlite::Error {
    sqlite::Error {
      code: None,
      message: Some(err.to_string()),
    }
  }
}
