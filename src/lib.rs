//! Marshalling for the geometric column types of a relational store:
//! point, circle, line, box, path, polygon and line segment.
//!
//! Every primitive converts to and from its canonical text form through
//! [`Geometric`], to and from JSON through the [`transport`] functions, and
//! binds to or reads from a `sqlite` statement through [`column`].

pub mod column;
pub mod error;
pub mod geom;
pub mod grammar;
pub mod log;
pub mod random;
pub mod text;
pub mod transport;

pub use error::{Error, Result, Shape};
pub use geom::{Circle, Line, Lseg, Path, Point, Polygon, Rect};
pub use grammar::ParseMode;
pub use random::Randomizer;
pub use text::Geometric;
pub use transport::{
  marshal, unmarshal_box, unmarshal_circle, unmarshal_line, unmarshal_lseg, unmarshal_path,
  unmarshal_point, unmarshal_points, unmarshal_polygon,
};
