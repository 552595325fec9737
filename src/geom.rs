use serde::{Deserialize, Serialize};

use crate::error::{Error, Shape};

/// The two-dimensional building block of every other primitive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Point {
  pub lat: f64,
  pub lng: f64,
}

impl Point {
  pub fn new(lng: f64, lat: f64) -> Point {
    Point { lat, lng }
  }
}

/// A center point and a radius. The radius is not checked for sign.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Circle {
  #[serde(flatten)]
  pub center: Point,
  #[serde(default)]
  pub radius: f64,
}

impl Circle {
  pub fn new(center: Point, radius: f64) -> Circle {
    Circle { center, radius }
  }
}

/// An infinite line `Ax + By + C = 0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Line {
  pub a: f64,
  pub b: f64,
  pub c: f64,
}

impl Line {
  pub fn new(a: f64, b: f64, c: f64) -> Line {
    Line { a, b, c }
  }
}

/// A box given by two opposite corners.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Point>")]
pub struct Rect(pub [Point; 2]);

impl Rect {
  pub fn new(a: Point, b: Point) -> Rect {
    Rect([a, b])
  }
}

/// A line segment between two points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Point>")]
pub struct Lseg(pub [Point; 2]);

impl Lseg {
  pub fn new(a: Point, b: Point) -> Lseg {
    Lseg([a, b])
  }
}

/// An ordered list of points. `closed` is derived from the endpoints and
/// never set independently.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PathRepr")]
pub struct Path {
  points: Vec<Point>,
  closed: bool,
}

impl Path {
  /// Builds a path from any list of points, including the empty zero value.
  /// Use `Path::try_from` when the list must hold at least two points.
  pub fn new(points: Vec<Point>) -> Path {
    let closed = match (points.first(), points.last()) {
      (Some(first), Some(last)) => first == last,
      _ => false,
    };
    Path { points, closed }
  }

  pub fn points(&self) -> &[Point] {
    &self.points
  }

  pub fn closed(&self) -> bool {
    self.closed
  }

  pub fn into_points(self) -> Vec<Point> {
    self.points
  }
}

/// An implicitly closed ring of points.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Point>")]
pub struct Polygon(pub Vec<Point>);

impl Polygon {
  /// Builds a polygon without checking the point count, so a value made
  /// here may not decode back. `Polygon::try_from` applies the three point
  /// minimum.
  pub fn new(points: Vec<Point>) -> Polygon {
    Polygon(points)
  }

  pub fn points(&self) -> &[Point] {
    &self.0
  }
}

// The cardinality rules shared by the text and JSON decoders.

impl TryFrom<Vec<Point>> for Rect {
  type Error = Error;

  fn try_from(points: Vec<Point>) -> Result<Self, Self::Error> {
    match points[..] {
      [a, b] => Ok(Rect::new(a, b)),
      _ => Err(Error::Wrong(Shape::Box)),
    }
  }
}

impl TryFrom<Vec<Point>> for Lseg {
  type Error = Error;

  fn try_from(points: Vec<Point>) -> Result<Self, Self::Error> {
    match points[..] {
      [a, b] => Ok(Lseg::new(a, b)),
      _ => Err(Error::Wrong(Shape::Lseg)),
    }
  }
}

impl TryFrom<Vec<Point>> for Path {
  type Error = Error;

  fn try_from(points: Vec<Point>) -> Result<Self, Self::Error> {
    if points.len() < 2 {
      return Err(Error::Wrong(Shape::Path));
    }
    Ok(Path::new(points))
  }
}

impl TryFrom<Vec<Point>> for Polygon {
  type Error = Error;

  fn try_from(points: Vec<Point>) -> Result<Self, Self::Error> {
    if points.len() < 3 {
      return Err(Error::Wrong(Shape::Polygon));
    }
    Ok(Polygon(points))
  }
}

// a path arrives either as a bare list of points or in its own encoded form;
// `closed` is recomputed in both cases
#[derive(Deserialize)]
#[serde(untagged)]
enum PathRepr {
  Points(Vec<Point>),
  Object { points: Vec<Point> },
}

impl TryFrom<PathRepr> for Path {
  type Error = Error;

  fn try_from(repr: PathRepr) -> Result<Self, Self::Error> {
    match repr {
      PathRepr::Points(points) | PathRepr::Object { points } => Path::try_from(points),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_path_closed_is_derived() {
    let closed = Path::new(vec![
      Point::new(0.0, 0.0),
      Point::new(1.0, 1.0),
      Point::new(0.0, 0.0),
    ]);
    assert!(closed.closed());

    let open = Path::new(vec![
      Point::new(0.0, 0.0),
      Point::new(1.0, 1.0),
      Point::new(2.0, 2.0),
    ]);
    assert!(!open.closed());

    assert!(!Path::new(vec![]).closed());
  }

  #[test]
  fn test_point_new_argument_order() {
    let p = Point::new(1.5, -2.0);
    assert_eq!(p.lng, 1.5);
    assert_eq!(p.lat, -2.0);
  }

  #[test]
  fn test_cardinality() {
    let one = vec![Point::default()];
    let two = vec![Point::default(), Point::new(1.0, 1.0)];
    let three = vec![Point::default(), Point::new(1.0, 1.0), Point::new(2.0, 0.0)];

    assert!(matches!(
      Rect::try_from(one.clone()),
      Err(Error::Wrong(Shape::Box))
    ));
    assert!(Rect::try_from(two.clone()).is_ok());
    assert!(matches!(
      Lseg::try_from(three.clone()),
      Err(Error::Wrong(Shape::Lseg))
    ));
    assert!(matches!(
      Path::try_from(one),
      Err(Error::Wrong(Shape::Path))
    ));
    assert!(matches!(
      Polygon::try_from(two),
      Err(Error::Wrong(Shape::Polygon))
    ));
    assert_eq!(Polygon::try_from(three).unwrap().points().len(), 3);
  }

  #[test]
  fn test_degenerate_geometry_is_accepted() {
    let circle = Circle::new(Point::default(), -1.0);
    assert_eq!(circle.radius, -1.0);
    let rect = Rect::new(Point::new(1.0, 1.0), Point::new(1.0, 1.0));
    assert_eq!(rect.0[0], rect.0[1]);
  }

  #[test]
  fn test_unchecked_constructors() {
    use crate::text::Geometric;

    let lonely = vec![Point::new(1.0, 2.0)];
    assert!(matches!(
      Polygon::try_from(lonely.clone()),
      Err(Error::Wrong(Shape::Polygon))
    ));

    let polygon = Polygon::new(lonely.clone());
    assert_eq!(polygon.to_text(), "((1,2))");
    assert!(matches!(
      Polygon::from_text(&polygon.to_text()),
      Err(Error::Wrong(Shape::Polygon))
    ));

    let path = Path::new(lonely);
    assert!(matches!(
      Path::from_text(&path.to_text()),
      Err(Error::Wrong(Shape::Path))
    ));
    assert!(Path::new(vec![]).points().is_empty());
  }
}
