//! JSON transport. Composite shapes arrive as plain arrays of points, so the
//! cardinality checks that the text punctuation would imply are applied here.

use serde::Serialize;

use crate::error::Result;
use crate::geom::{Circle, Line, Lseg, Path, Point, Polygon, Rect};

pub fn marshal<T: Serialize>(value: &T) -> Result<Vec<u8>> {
  Ok(serde_json::to_vec(value)?)
}

/// Missing fields and `null` decode to zero.
pub fn unmarshal_point(json: &[u8]) -> Result<Point> {
  let point: Option<Point> = serde_json::from_slice(json)?;
  Ok(point.unwrap_or_default())
}

/// Empty input and `null` both give an empty list.
pub fn unmarshal_points(json: &[u8]) -> Result<Vec<Point>> {
  if json.iter().all(u8::is_ascii_whitespace) {
    return Ok(Vec::new());
  }
  let points: Option<Vec<Point>> = serde_json::from_slice(json)?;
  Ok(points.unwrap_or_default())
}

pub fn unmarshal_circle(json: &[u8]) -> Result<Circle> {
  let circle: Option<Circle> = serde_json::from_slice(json)?;
  Ok(circle.unwrap_or_default())
}

pub fn unmarshal_line(json: &[u8]) -> Result<Line> {
  let line: Option<Line> = serde_json::from_slice(json)?;
  Ok(line.unwrap_or_default())
}

pub fn unmarshal_box(json: &[u8]) -> Result<Rect> {
  Rect::try_from(unmarshal_points(json)?)
}

pub fn unmarshal_path(json: &[u8]) -> Result<Path> {
  Path::try_from(unmarshal_points(json)?)
}

pub fn unmarshal_polygon(json: &[u8]) -> Result<Polygon> {
  Polygon::try_from(unmarshal_points(json)?)
}

pub fn unmarshal_lseg(json: &[u8]) -> Result<Lseg> {
  Lseg::try_from(unmarshal_points(json)?)
}
