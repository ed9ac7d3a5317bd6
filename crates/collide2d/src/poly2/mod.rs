//! Convex polygons in 2D: validated shapes, posed entities, collision queries.
//!
//! Purpose
//! - Provide one validated local-space shape type ([`Shape`]), one mutable
//!   posed entity with cached world vertices ([`Polygon`]), and stateless
//!   queries over anything exposing an ordered vertex loop ([`Vertices`]).
//!
//! Why this split
//! - The entity owns the memoization (pose equality check, in-place buffer
//!   rewrite); the queries stay pure and never care which concrete type the
//!   vertices come from.
//! - Validation happens once at shape construction, so the per-frame paths
//!   carry no checks.
//!
//! Code cross-refs: `shape::Shape`, `polygon::Polygon`, `collide::Vertices`

pub mod rand;

mod collide;
mod polygon;
mod shape;
mod types;

pub use collide::{circle_in_polygon, is_colliding, point_in_polygon, PointList, Vertices};
pub use polygon::Polygon;
pub use shape::{points_from_pairs, Shape};
pub use types::{BorderBox, GeomCfg, Pose, ShapeError};
