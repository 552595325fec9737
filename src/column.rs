//! Adapter between the primitives and a store's column values.

use sqlite::{Bindable, Readable, Statement, Value};

use crate::error::{Error, Result};
use crate::geom::{Circle, Line, Lseg, Path, Point, Polygon, Rect};
use crate::text::Geometric;

fn kind(value: &Value) -> &'static str {
  match value {
    Value::Binary(_) => "binary",
    Value::Float(_) => "float",
    Value::Integer(_) => "integer",
    Value::String(_) => "string",
    Value::Null => "null",
  }
}

/// Decode a raw column value. `Null` is the zero value; anything that is
/// neither text nor bytes is rejected.
pub fn scan<T: Geometric>(src: &Value) -> Result<T> {
  match src {
    Value::Null => T::from_optional_text(None),
    Value::String(text) => T::from_text(text),
    Value::Binary(bytes) => T::from_text(&String::from_utf8_lossy(bytes)),
    other => Err(Error::IncompatibleType(kind(other))),
  }
}

/// The column value a primitive is stored as.
pub fn value<T: Geometric>(geometry: &T) -> Value {
  Value::String(geometry.to_text())
}

macro_rules! impl_column_traits {
  ($($ty:ty),*) => {
    $(
      impl Bindable for &$ty {
        fn bind(self, statement: &mut Statement, i: usize) -> sqlite::Result<()> {
          statement.bind(i, &*self.to_text())
        }
      }

      impl Bindable for $ty {
        fn bind(self, statement: &mut Statement, i: usize) -> sqlite::Result<()> {
          (&self).bind(statement, i)
        }
      }

      impl Readable for $ty {
        fn read(statement: &Statement, i: usize) -> sqlite::Result<Self> {
          let src = statement.read::<Value>(i)?;
          Ok(scan::<$ty>(&src)?)
        }
      }
    )*
  };
}

impl_column_traits!(Point, Circle, Line, Rect, Lseg, Path, Polygon);

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::Shape;

  fn pt(lng: f64, lat: f64) -> Point {
    Point::new(lng, lat)
  }

  #[test]
  fn test_scan_null_is_zero_value() {
    assert_eq!(scan::<Point>(&Value::Null).unwrap(), Point::default());
    assert_eq!(scan::<Circle>(&Value::Null).unwrap(), Circle::default());
    assert_eq!(scan::<Line>(&Value::Null).unwrap(), Line::default());
    assert_eq!(scan::<Rect>(&Value::Null).unwrap(), Rect::default());
    assert_eq!(scan::<Lseg>(&Value::Null).unwrap(), Lseg::default());
    assert_eq!(scan::<Path>(&Value::Null).unwrap(), Path::default());
    assert_eq!(scan::<Polygon>(&Value::Null).unwrap(), Polygon::default());
  }

  #[test]
  fn test_scan_text_and_bytes() {
    let from_text = scan::<Point>(&Value::String("(1.5,-2)".to_string())).unwrap();
    let from_bytes = scan::<Point>(&Value::Binary(b"(1.5,-2)".to_vec())).unwrap();
    assert_eq!(from_text, pt(1.5, -2.0));
    assert_eq!(from_bytes, from_text);

    assert!(matches!(
      scan::<Point>(&Value::String("(1,2,3)".to_string())),
      Err(Error::Wrong(Shape::Point))
    ));
  }

  #[test]
  fn test_scan_invalid_utf8_bytes() {
    assert!(matches!(
      scan::<Point>(&Value::Binary(b"(1,\xff2)".to_vec())),
      Err(Error::Wrong(Shape::Point))
    ));
    // replacement characters outside the points are skipped like any noise
    let rect = scan::<Rect>(&Value::Binary(b"\xfe(0,0),(1,1)\xff".to_vec())).unwrap();
    assert_eq!(rect, Rect::new(pt(0.0, 0.0), pt(1.0, 1.0)));
  }

  #[test]
  fn test_scan_rejects_other_kinds() {
    let err = scan::<Point>(&Value::Integer(1)).unwrap_err();
    assert_eq!(err.to_string(), "incompatible type integer");
    assert!(matches!(
      scan::<Polygon>(&Value::Float(1.0)),
      Err(Error::IncompatibleType("float"))
    ));
  }

  #[test]
  fn test_value() {
    assert_eq!(
      value(&Circle::new(pt(0.0, 0.0), 5.0)),
      Value::String("<(0,0),5>".to_string())
    );
  }

  #[test]
  fn test_sqlite_round_trip() {
    let connection = sqlite::open(":memory:").unwrap();
    connection
      .execute(
        "
        CREATE TABLE shapes (
          location text,
          area text,
          route text,
          bounds text,
          empty text
        );
      ",
      )
      .unwrap();

    let location = pt(139.7671, 35.6812);
    let area = Circle::new(location, 0.5);
    let route = Path::new(vec![pt(0.0, 0.0), pt(1.0, 1.0), pt(0.0, 0.0)]);
    let bounds = Rect::new(pt(1.0, 1.0), pt(-1.0, -1.0));

    let mut insert_stmt = connection
      .prepare(
        "
        INSERT INTO shapes (location, area, route, bounds, empty)
        VALUES (?, ?, ?, ?, NULL)
      ",
      )
      .unwrap();
    insert_stmt.bind(1, &location).unwrap();
    insert_stmt.bind(2, area).unwrap();
    insert_stmt.bind(3, &route).unwrap();
    insert_stmt.bind(4, &bounds).unwrap();
    insert_stmt.next().unwrap();

    let mut select_stmt = connection
      .prepare("SELECT location, area, route, bounds, empty FROM shapes;")
      .unwrap();
    assert_eq!(select_stmt.next().unwrap(), sqlite::State::Row);
    assert_eq!(select_stmt.read::<Point>(0).unwrap(), location);
    assert_eq!(select_stmt.read::<Circle>(1).unwrap(), area);
    let read_route = select_stmt.read::<Path>(2).unwrap();
    assert_eq!(read_route, route);
    assert!(read_route.closed());
    assert_eq!(select_stmt.read::<Rect>(3).unwrap(), bounds);
    assert_eq!(select_stmt.read::<Polygon>(4).unwrap(), Polygon::default());
    assert_eq!(select_stmt.read::<String>(1).unwrap(), "<(139.7671,35.6812),0.5>");
  }

  #[test]
  fn test_sqlite_read_reports_wrong_shape() {
    let connection = sqlite::open(":memory:").unwrap();
    let mut stmt = connection.prepare("SELECT '(1,2)', 42;").unwrap();
    assert_eq!(stmt.next().unwrap(), sqlite::State::Row);

    let err = stmt.read::<Rect>(0).unwrap_err();
    assert_eq!(err.message.as_deref(), Some("wrong box"));
    let err = stmt.read::<Point>(1).unwrap_err();
    assert_eq!(err.message.as_deref(), Some("incompatible type integer"));
  }
}
