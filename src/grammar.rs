use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{Error, Result, Shape};
use crate::geom::{Circle, Line, Point};
use crate::log::debug;

// no exponent form on input, even though a store may print one
macro_rules! number {
  () => {
    r"-?[0-9]+(?:\.[0-9]+)?"
  };
}

macro_rules! point {
  () => {
    concat!(r"\(", number!(), ",", number!(), r"\)")
  };
}

lazy_static! {
  static ref POINT: Regex = Regex::new(concat!(
    r"^\((",
    number!(),
    "),(",
    number!(),
    r")\)$"
  ))
  .unwrap();
  static ref POINT_SEARCH: Regex = Regex::new(point!()).unwrap();
  static ref POINT_LIST: Regex =
    Regex::new(concat!("^", point!(), "(?:,", point!(), ")*$")).unwrap();
  static ref LINE: Regex = Regex::new(concat!(
    r"^\{(",
    number!(),
    "),(",
    number!(),
    "),(",
    number!(),
    r")\}$"
  ))
  .unwrap();
  static ref CIRCLE: Regex =
    Regex::new(concat!(r"^<(", point!(), r"),([^<>()]+)>$")).unwrap();
}

/// How much of the text around the points of a composite shape must be
/// well formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
  /// Only the point-shaped substrings matter; any enclosing punctuation is
  /// skipped over.
  #[default]
  Lenient,
  /// The whole text must be a point list inside one of the enclosures the
  /// shape accepts.
  Strict,
}

/// Punctuation wrapped around a point list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Enclosure {
  Bare,
  Parens,
  Brackets,
}

impl Enclosure {
  fn strip(self, text: &str) -> Option<&str> {
    match self {
      Enclosure::Bare => Some(text),
      Enclosure::Parens => text.strip_prefix('(')?.strip_suffix(')'),
      Enclosure::Brackets => text.strip_prefix('[')?.strip_suffix(']'),
    }
  }

  pub fn wrap(self, inner: &str) -> String {
    match self {
      Enclosure::Bare => inner.to_string(),
      Enclosure::Parens => format!("({})", inner),
      Enclosure::Brackets => format!("[{}]", inner),
    }
  }

  /// Enclosures a shape is written with in strict mode, canonical first.
  pub fn accepted(shape: Shape) -> &'static [Enclosure] {
    match shape {
      Shape::Box => &[Enclosure::Bare, Enclosure::Parens],
      Shape::Lseg => &[Enclosure::Brackets, Enclosure::Bare],
      Shape::Path => &[Enclosure::Brackets, Enclosure::Parens],
      Shape::Polygon => &[Enclosure::Parens],
      Shape::Point | Shape::Circle | Shape::Line => &[Enclosure::Bare],
    }
  }
}

pub fn parse_nums(nums: &[&str]) -> Result<Vec<f64>> {
  nums
    .iter()
    .map(|num| num.parse::<f64>().map_err(Error::from))
    .collect()
}

pub fn format_point(point: &Point) -> String {
  format!("({},{})", point.lng, point.lat)
}

pub fn format_points(points: &[Point]) -> String {
  points.iter().map(format_point).collect::<Vec<_>>().join(",")
}

pub fn format_circle(circle: &Circle) -> String {
  format!("<{},{}>", format_point(&circle.center), circle.radius)
}

pub fn format_line(line: &Line) -> String {
  format!("{{{},{},{}}}", line.a, line.b, line.c)
}

pub fn parse_point(text: &str) -> Result<Point> {
  let caps = match POINT.captures(text) {
    Some(caps) => caps,
    None => {
      debug!("rejected point text: {:?}", text);
      return Err(Error::Wrong(Shape::Point));
    }
  };
  let nums = parse_nums(&[&caps[1], &caps[2]])?;
  Ok(Point::new(nums[0], nums[1]))
}

/// Every point-shaped substring of `text`, in order. Anything between them
/// is ignored.
pub fn parse_points(text: &str) -> Result<Vec<Point>> {
  POINT_SEARCH
    .find_iter(text)
    .map(|m| parse_point(m.as_str()))
    .collect()
}

/// Points of a composite shape, honoring the enclosure rules of `mode`.
pub fn parse_shape_points(text: &str, shape: Shape, mode: ParseMode) -> Result<Vec<Point>> {
  match mode {
    ParseMode::Lenient => parse_points(text),
    ParseMode::Strict => {
      let inner = Enclosure::accepted(shape)
        .iter()
        .filter_map(|enclosure| enclosure.strip(text))
        .find(|inner| POINT_LIST.is_match(inner));
      match inner {
        Some(inner) => parse_points(inner),
        None => {
          debug!("rejected {} text: {:?}", shape, text);
          Err(Error::Wrong(shape))
        }
      }
    }
  }
}

pub fn parse_line(text: &str) -> Result<Line> {
  let caps = match LINE.captures(text) {
    Some(caps) => caps,
    None => {
      debug!("rejected line text: {:?}", text);
      return Err(Error::Wrong(Shape::Line));
    }
  };
  let nums = parse_nums(&[&caps[1], &caps[2], &caps[3]])?;
  Ok(Line::new(nums[0], nums[1], nums[2]))
}

pub fn parse_circle(text: &str, mode: ParseMode) -> Result<Circle> {
  if mode == ParseMode::Strict {
    let caps = match CIRCLE.captures(text) {
      Some(caps) => caps,
      None => {
        debug!("rejected circle text: {:?}", text);
        return Err(Error::Wrong(Shape::Circle));
      }
    };
    let center = parse_point(&caps[1])?;
    let radius = caps[2].parse::<f64>()?;
    return Ok(Circle::new(center, radius));
  }

  let points = parse_points(text)?;
  let parts: Vec<&str> = text.split("),").collect();
  if points.len() != 1 || parts.len() != 2 {
    debug!(
      "rejected circle text: {:?} ({} points, {} parts)",
      text,
      points.len(),
      parts.len()
    );
    return Err(Error::Wrong(Shape::Circle));
  }

  let radius = parts[1].trim_matches('>').parse::<f64>()?;
  Ok(Circle::new(points[0], radius))
}
