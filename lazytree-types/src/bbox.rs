use geo::Rect;
use serde::{Deserialize, Serialize};

/// A 2D axis-aligned bounding box.
///
/// Serialized with the `minX`/`minY`/`maxX`/`maxY` field names used by the
/// chunk metadata file. The `min <= max` invariant is not checked; an
/// inverted box simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox2D {
    #[serde(rename = "minX")]
    pub min_x: f64,
    #[serde(rename = "minY")]
    pub min_y: f64,
    #[serde(rename = "maxX")]
    pub max_x: f64,
    #[serde(rename = "maxY")]
    pub max_y: f64,
}

impl BoundingBox2D {
    /// Create a new bounding box from minimum and maximum coordinates.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazytree_types::bbox::BoundingBox2D;
    ///
    /// let query = BoundingBox2D::new(-7.0, -5.0, -6.9, -4.9);
    /// assert!((query.width() - 0.1).abs() < 1e-9);
    /// ```
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// The degenerate box covering a single coordinate.
    pub fn from_point(x: f64, y: f64) -> Self {
        Self::new(x, y, x, y)
    }

    /// The identity element for [`BoundingBox2D::union`]: `{+inf, +inf, -inf, -inf}`.
    pub fn empty() -> Self {
        Self::new(
            f64::INFINITY,
            f64::INFINITY,
            f64::NEG_INFINITY,
            f64::NEG_INFINITY,
        )
    }

    /// True when no coordinate has been folded into the box.
    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }

    /// Componentwise min/max of two boxes.
    pub fn union(&self, other: &BoundingBox2D) -> Self {
        Self::new(
            self.min_x.min(other.min_x),
            self.min_y.min(other.min_y),
            self.max_x.max(other.max_x),
            self.max_y.max(other.max_y),
        )
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Closed-interval overlap test on both axes.
    pub fn intersects(&self, other: &BoundingBox2D) -> bool {
        self.min_x <= other.max_x
            && self.max_x >= other.min_x
            && self.min_y <= other.max_y
            && self.max_y >= other.min_y
    }

    /// True when `other` lies entirely inside this box (boundaries included).
    pub fn contains_box(&self, other: &BoundingBox2D) -> bool {
        other.min_x >= self.min_x
            && other.max_x <= self.max_x
            && other.min_y >= self.min_y
            && other.max_y <= self.max_y
    }

    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        self.contains_box(&Self::from_point(x, y))
    }

    /// Convert into a `geo::Rect`. Note that `Rect` normalizes inverted corners.
    pub fn to_rect(&self) -> Rect {
        Rect::new(
            geo::coord! { x: self.min_x, y: self.min_y },
            geo::coord! { x: self.max_x, y: self.max_y },
        )
    }
}

impl From<Rect> for BoundingBox2D {
    fn from(rect: Rect) -> Self {
        Self::new(rect.min().x, rect.min().y, rect.max().x, rect.max().y)
    }
}
