use geo::Coord;
use serde::{Deserialize, Serialize};

use crate::{Geometry, KernelError};

/// Axis-aligned bounding box in `[min_x, min_y, max_x, max_y]` order.
///
/// A box with `min_x > max_x` or `min_y > max_y` is empty and contains
/// nothing; [`BoundingBox::EMPTY`] is the identity of [`BoundingBox::expand`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    pub const EMPTY: BoundingBox = BoundingBox {
        min_x: f64::INFINITY,
        min_y: f64::INFINITY,
        max_x: f64::NEG_INFINITY,
        max_y: f64::NEG_INFINITY,
    };

    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        BoundingBox {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Tightest box around every coordinate of `geom`; empty if it has none.
    pub fn of(geom: &Geometry) -> Self {
        geom.coords().fold(Self::EMPTY, Self::expand)
    }

    /// Grow the box to include `c`.
    pub fn expand(self, c: Coord<f64>) -> Self {
        BoundingBox {
            min_x: self.min_x.min(c.x),
            min_y: self.min_y.min(c.y),
            max_x: self.max_x.max(c.x),
            max_y: self.max_y.max(c.y),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }

    /// Closed containment test (the boundary is inside).
    pub fn contains_coord(&self, c: Coord<f64>) -> bool {
        c.x >= self.min_x && c.x <= self.max_x && c.y >= self.min_y && c.y <= self.max_y
    }

    /// Whether `other` lies entirely inside `self`.
    pub fn contains(&self, other: &BoundingBox) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && other.min_x >= self.min_x
            && other.max_x <= self.max_x
            && other.min_y >= self.min_y
            && other.max_y <= self.max_y
    }

    /// Whether the two boxes share at least one point.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.min_x <= other.max_x
            && other.min_x <= self.max_x
            && self.min_y <= other.max_y
            && other.min_y <= self.max_y
    }
}

impl From<[f64; 4]> for BoundingBox {
    fn from([min_x, min_y, max_x, max_y]: [f64; 4]) -> Self {
        BoundingBox::new(min_x, min_y, max_x, max_y)
    }
}

impl TryFrom<&[f64]> for BoundingBox {
    type Error = KernelError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        match *values {
            [min_x, min_y, max_x, max_y] => Ok(BoundingBox::new(min_x, min_y, max_x, max_y)),
            _ => Err(KernelError::InvalidBoundingBox { len: values.len() }),
        }
    }
}

impl From<BoundingBox> for [f64; 4] {
    fn from(b: BoundingBox) -> Self {
        [b.min_x, b.min_y, b.max_x, b.max_y]
    }
}
