use crate::bbox::BoundingBox2D;
use crate::props::{PropValue, Props};
use geo::Point as GeoPoint;
use serde::{Deserialize, Serialize};

/// A 2D sample: a degenerate bounding box with an attached attribute bag.
///
/// Its bounding box has `min == max` on both axes, so the `min <= max`
/// invariant holds by construction. Attributes can be edited while the point
/// is being assembled; once it is moved into a chunk or an index no mutable
/// access is handed out again.
///
/// # Examples
///
/// ```
/// use lazytree_types::point::Point;
///
/// let mut p = Point::new(7.4464, -4.3954);
/// p.set_property("Stage", "E113");
/// assert_eq!(p.bbox().min_x, p.bbox().max_x);
/// assert_eq!(p.get_property("Stage").and_then(|v| v.as_str()), Some("E113"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    coord: GeoPoint<f64>,
    props: Props,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self::with_props(x, y, Props::new())
    }

    pub fn with_props(x: f64, y: f64, props: Props) -> Self {
        Self {
            coord: GeoPoint::new(x, y),
            props,
        }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.coord.x()
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.coord.y()
    }

    /// The point's own (degenerate) bounding box.
    #[inline]
    pub fn bbox(&self) -> BoundingBox2D {
        BoundingBox2D::from_point(self.x(), self.y())
    }

    pub fn get_property(&self, key: &str) -> Option<&PropValue> {
        self.props.get(key)
    }

    /// Set a named attribute, returning the previous value if any.
    pub fn set_property(
        &mut self,
        key: impl Into<String>,
        value: impl Into<PropValue>,
    ) -> Option<PropValue> {
        self.props.insert(key.into(), value.into())
    }

    pub fn props(&self) -> &Props {
        &self.props
    }

    pub fn into_props(self) -> Props {
        self.props
    }

    pub fn as_geo(&self) -> &GeoPoint<f64> {
        &self.coord
    }
}

/// A sample with a third coordinate.
///
/// The chunked index only handles 2D data; a `Point3D` has to be projected
/// with [`Point3D::to_2d`] before it can be written to a chunk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point3D {
    coord: GeoPoint<f64>,
    z: f64,
    props: Props,
}

impl Point3D {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self::with_props(x, y, z, Props::new())
    }

    pub fn with_props(x: f64, y: f64, z: f64, props: Props) -> Self {
        Self {
            coord: GeoPoint::new(x, y),
            z,
            props,
        }
    }

    pub fn x(&self) -> f64 {
        self.coord.x()
    }

    pub fn y(&self) -> f64 {
        self.coord.y()
    }

    pub fn z(&self) -> f64 {
        self.z
    }

    pub fn get_property(&self, key: &str) -> Option<&PropValue> {
        self.props.get(key)
    }

    pub fn set_property(
        &mut self,
        key: impl Into<String>,
        value: impl Into<PropValue>,
    ) -> Option<PropValue> {
        self.props.insert(key.into(), value.into())
    }

    pub fn props(&self) -> &Props {
        &self.props
    }

    /// Drop the z coordinate, keeping x, y and the attribute bag.
    pub fn to_2d(self) -> Point {
        Point {
            coord: self.coord,
            props: self.props,
        }
    }
}

/// A sample as it leaves the ingest boundary.
///
/// The dimensionality is decided once, where raw columns are turned into
/// points, instead of being carried as an optional coordinate.
#[derive(Debug, Clone, PartialEq)]
pub enum RawPoint {
    Planar(Point),
    Volumetric(Point3D),
}

impl RawPoint {
    pub fn is_3d(&self) -> bool {
        matches!(self, Self::Volumetric(_))
    }

    /// The 2D view of this sample.
    pub fn into_planar(self) -> Point {
        match self {
            Self::Planar(p) => p,
            Self::Volumetric(p) => p.to_2d(),
        }
    }
}

impl From<Point> for RawPoint {
    fn from(point: Point) -> Self {
        Self::Planar(point)
    }
}

impl From<Point3D> for RawPoint {
    fn from(point: Point3D) -> Self {
        Self::Volumetric(point)
    }
}
