//! Canonical text form of every primitive.
//!
//! Each primitive implements [`Geometric`], which is all the driver adapter
//! and the CLI need to know about a shape.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result, Shape};
use crate::geom::{Circle, Line, Lseg, Path, Point, Polygon, Rect};
use crate::grammar::{self, Enclosure, ParseMode};

pub trait Geometric: Sized + Default {
  const SHAPE: Shape;

  /// The canonical text form.
  fn to_text(&self) -> String;

  fn parse_with(text: &str, mode: ParseMode) -> Result<Self>;

  fn from_text(text: &str) -> Result<Self> {
    Self::parse_with(text, ParseMode::Lenient)
  }

  /// Decode an optional column text. Absence is the zero value, not an
  /// error.
  fn from_optional_text(text: Option<&str>) -> Result<Self> {
    match text {
      Some(text) => Self::from_text(text),
      None => Ok(Self::default()),
    }
  }
}

impl Geometric for Point {
  const SHAPE: Shape = Shape::Point;

  fn to_text(&self) -> String {
    grammar::format_point(self)
  }

  fn parse_with(text: &str, _mode: ParseMode) -> Result<Self> {
    grammar::parse_point(text)
  }
}

impl Geometric for Circle {
  const SHAPE: Shape = Shape::Circle;

  fn to_text(&self) -> String {
    grammar::format_circle(self)
  }

  fn parse_with(text: &str, mode: ParseMode) -> Result<Self> {
    grammar::parse_circle(text, mode)
  }
}

impl Geometric for Line {
  const SHAPE: Shape = Shape::Line;

  fn to_text(&self) -> String {
    grammar::format_line(self)
  }

  fn parse_with(text: &str, _mode: ParseMode) -> Result<Self> {
    grammar::parse_line(text)
  }
}

impl Geometric for Rect {
  const SHAPE: Shape = Shape::Box;

  fn to_text(&self) -> String {
    Enclosure::Bare.wrap(&grammar::format_points(&self.0))
  }

  fn parse_with(text: &str, mode: ParseMode) -> Result<Self> {
    Rect::try_from(grammar::parse_shape_points(text, Self::SHAPE, mode)?)
  }
}

impl Geometric for Lseg {
  const SHAPE: Shape = Shape::Lseg;

  fn to_text(&self) -> String {
    Enclosure::Brackets.wrap(&grammar::format_points(&self.0))
  }

  fn parse_with(text: &str, mode: ParseMode) -> Result<Self> {
    Lseg::try_from(grammar::parse_shape_points(text, Self::SHAPE, mode)?)
  }
}

impl Geometric for Path {
  const SHAPE: Shape = Shape::Path;

  fn to_text(&self) -> String {
    let enclosure = if self.closed() {
      Enclosure::Parens
    } else {
      Enclosure::Brackets
    };
    enclosure.wrap(&grammar::format_points(self.points()))
  }

  fn parse_with(text: &str, mode: ParseMode) -> Result<Self> {
    Path::try_from(grammar::parse_shape_points(text, Self::SHAPE, mode)?)
  }
}

impl Geometric for Polygon {
  const SHAPE: Shape = Shape::Polygon;

  fn to_text(&self) -> String {
    Enclosure::Parens.wrap(&grammar::format_points(self.points()))
  }

  fn parse_with(text: &str, mode: ParseMode) -> Result<Self> {
    Polygon::try_from(grammar::parse_shape_points(text, Self::SHAPE, mode)?)
  }
}

macro_rules! impl_text_traits {
  ($($ty:ty),*) => {
    $(
      impl fmt::Display for $ty {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
          f.write_str(&self.to_text())
        }
      }

      impl FromStr for $ty {
        type Err = Error;

        fn from_str(s: &str) -> Result<Self> {
          <$ty as Geometric>::from_text(s)
        }
      }
    )*
  };
}

impl_text_traits!(Point, Circle, Line, Rect, Lseg, Path, Polygon);
