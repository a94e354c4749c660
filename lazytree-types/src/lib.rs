//! # lazytree-types
//!
//! Value types shared by the lazytree chunk writer and query engine.
//!
//! - **Point types**: `Point` (2D sample), `Point3D`, and the `RawPoint`
//!   variant produced at the ingest boundary
//! - **Attributes**: `PropValue` scalars collected in a `Props` bag
//! - **Bounding boxes**: `BoundingBox2D`
//!
//! All types are serializable with Serde and interoperate with the `geo`
//! crate's primitives.
//!
//! ## Examples
//!
//! ```rust
//! use lazytree_types::bbox::BoundingBox2D;
//! use lazytree_types::point::Point;
//!
//! let mut cell = Point::new(3.2891, -4.613);
//! cell.set_property("Cell_ID", "E80Stroma_CCAATGATCTGGGCAC-1");
//!
//! let view = BoundingBox2D::new(0.0, -5.0, 5.0, 0.0);
//! assert!(view.contains_box(&cell.bbox()));
//! ```

pub mod bbox;
pub mod point;
pub mod props;
