//! 2D convex-polygon transforms and collision queries.
//!
//! Purpose
//! - Cheap per-frame collision checks: a posed [`poly2::Polygon`] caches its
//!   world-space vertices in fixed buffers and recomputes them only when the
//!   pose actually changes.
//! - The queries (SAT overlap, even-odd point containment, 8-sample circle
//!   probe) are stateless and generic over any ordered world-space vertex
//!   loop, so plain point lists participate next to full entities.

pub mod poly2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;
pub use poly2::{
    circle_in_polygon, is_colliding, point_in_polygon, points_from_pairs, BorderBox, GeomCfg,
    PointList, Polygon, Pose, Shape, ShapeError, Vertices,
};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::poly2::rand::{draw_shape_radial, RadialCfg, ReplayToken, VertexCount};
    pub use crate::poly2::{
        circle_in_polygon, is_colliding, point_in_polygon, points_from_pairs, BorderBox, GeomCfg,
        PointList, Polygon, Pose, Shape, ShapeError, Vertices,
    };
    pub use nalgebra::Vector2 as Vec2;
}
