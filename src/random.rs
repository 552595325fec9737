//! Random primitives for test data.
//!
//! A `Randomizer` owns its generator, so a fixed seed always produces the
//! same sequence of values.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom::{Circle, Line, Lseg, Path, Point, Polygon, Rect};

const MAX_LNG: u32 = 179;
const MAX_LAT: u32 = 89;
const MAX_NUMBER: u32 = 90;
const MAX_EXTRA_POINTS: usize = 4;

pub struct Randomizer<R: Rng> {
  rng: R,
}

impl Randomizer<StdRng> {
  pub fn seeded(seed: u64) -> Self {
    Randomizer::new(StdRng::seed_from_u64(seed))
  }

  pub fn from_entropy() -> Self {
    Randomizer::new(StdRng::from_entropy())
  }
}

impl<R: Rng> Randomizer<R> {
  pub fn new(rng: R) -> Self {
    Randomizer { rng }
  }

  // whole part below `max`, random fraction, random sign
  fn coordinate(&mut self, max: u32) -> f64 {
    let magnitude = self.rng.gen_range(0..max) as f64 + self.rng.gen::<f64>();
    if self.rng.gen_bool(0.5) {
      -magnitude
    } else {
      magnitude
    }
  }

  pub fn lng(&mut self) -> f64 {
    self.coordinate(MAX_LNG)
  }

  pub fn lat(&mut self) -> f64 {
    self.coordinate(MAX_LAT)
  }

  /// A non-negative number, used for radii and line coefficients.
  pub fn number(&mut self) -> f64 {
    self.rng.gen_range(0..MAX_NUMBER) as f64 + self.rng.gen::<f64>()
  }

  pub fn point(&mut self) -> Point {
    let lng = self.lng();
    let lat = self.lat();
    Point::new(lng, lat)
  }

  fn points(&mut self, min: usize) -> Vec<Point> {
    let count = min + self.rng.gen_range(0..=MAX_EXTRA_POINTS);
    (0..count).map(|_| self.point()).collect()
  }

  pub fn circle(&mut self) -> Circle {
    let center = self.point();
    Circle::new(center, self.number())
  }

  pub fn line(&mut self) -> Line {
    Line::new(self.number(), self.number(), self.number())
  }

  pub fn rect(&mut self) -> Rect {
    Rect::new(self.point(), self.point())
  }

  pub fn lseg(&mut self) -> Lseg {
    Lseg::new(self.point(), self.point())
  }

  /// A path of at least two points; a closed path repeats its first point
  /// at the end.
  pub fn path(&mut self, closed: bool) -> Path {
    let mut points = self.points(2);
    if closed {
      points.push(points[0]);
    }
    Path::new(points)
  }

  pub fn polygon(&mut self) -> Polygon {
    Polygon::new(self.points(3))
  }
}
