//! Posed polygon entity with cached world-space vertices.
//!
//! Purpose
//! - Own the world-vertex memoization: two parallel `f64` buffers are
//!   recomputed in place when the pose changes and left untouched when an
//!   identical pose is applied again. No allocation after construction.
//!
//! Assumptions and conventions
//! - Pose comparison is bit-exact float equality. Upstream drift (a rotation
//!   recomputed through a different expression, say) defeats the skip and
//!   costs one extra recomputation; results are unaffected.
//! - The buffers are exclusively owned and only `update` writes them, so a
//!   single-writer/many-reader frame structure needs no synchronization.

use nalgebra::Vector2;

use super::collide::Vertices;
use super::shape::Shape;
use super::types::{BorderBox, Pose};

/// A shape placed in the world: local points plus pose, with the transformed
/// vertices cached in parallel `world_x`/`world_y` buffers.
#[derive(Clone, Debug)]
pub struct Polygon {
    shape: Shape,
    pose: Pose,
    world_x: Vec<f64>,
    world_y: Vec<f64>,
}

impl Polygon {
    /// Place `shape` at the initial pose and compute the first world buffer
    /// unconditionally.
    pub fn new(shape: Shape, pose: Pose) -> Self {
        let n = shape.len();
        let mut poly = Self {
            shape,
            pose,
            world_x: vec![0.0; n],
            world_y: vec![0.0; n],
        };
        poly.recompute();
        poly
    }

    /// Apply a pose. Recomputes the world vertices only when `pose` differs
    /// from the current one (exact equality on all four fields); returns
    /// whether a recomputation ran.
    pub fn update(&mut self, pose: Pose) -> bool {
        if pose == self.pose {
            return false;
        }
        self.pose = pose;
        self.recompute();
        true
    }

    /// Rotate in local space, then scale by radius, then translate.
    fn recompute(&mut self) {
        let Pose {
            x,
            y,
            radius,
            rotation,
        } = self.pose;
        let (sin_r, cos_r) = rotation.sin_cos();
        for (i, p) in self.shape.points().iter().enumerate() {
            self.world_x[i] = x + (p.x * cos_r - p.y * sin_r) * radius;
            self.world_y[i] = y + (p.y * cos_r + p.x * sin_r) * radius;
        }
    }

    #[inline]
    pub fn pose(&self) -> Pose {
        self.pose
    }

    #[inline]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.world_x.len()
    }

    /// Freshly materialized snapshot of the current world vertices, detached
    /// from the cache: mutating the result never touches the entity.
    pub fn points(&self) -> Vec<Vector2<f64>> {
        (0..self.world_x.len())
            .map(|i| Vector2::new(self.world_x[i], self.world_y[i]))
            .collect()
    }

    /// Maximum absolute deviation from the center per axis, divided by the
    /// radius. A zero radius yields non-finite extents (accepted, documented;
    /// not a panic).
    pub fn border_box(&self) -> BorderBox {
        let mut w: f64 = 0.0;
        let mut h: f64 = 0.0;
        for i in 0..self.world_x.len() {
            w = w.max((self.world_x[i] - self.pose.x).abs());
            h = h.max((self.world_y[i] - self.pose.y).abs());
        }
        BorderBox {
            width: w / self.pose.radius,
            height: h / self.pose.radius,
        }
    }
}

impl Vertices for Polygon {
    #[inline]
    fn len(&self) -> usize {
        self.world_x.len()
    }

    #[inline]
    fn vertex(&self, i: usize) -> Vector2<f64> {
        Vector2::new(self.world_x[i], self.world_y[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poly2::types::GeomCfg;
    use nalgebra::vector;

    fn unit_square() -> Shape {
        Shape::new(
            vec![
                vector![1.0, 1.0],
                vector![-1.0, 1.0],
                vector![-1.0, -1.0],
                vector![1.0, -1.0],
            ],
            GeomCfg::default(),
        )
        .unwrap()
    }

    #[test]
    fn construction_applies_initial_pose() {
        let p = Polygon::new(unit_square(), Pose::upright(3.0, -2.0, 2.0));
        let pts = p.points();
        assert_eq!(pts.len(), 4);
        assert!((pts[0] - vector![5.0, 0.0]).norm() < 1e-12);
        assert!((pts[2] - vector![1.0, -4.0]).norm() < 1e-12);
    }

    #[test]
    fn identical_pose_is_a_noop() {
        let pose = Pose::new(1.0, 2.0, 1.5, 0.25);
        let mut p = Polygon::new(unit_square(), pose);
        assert!(!p.update(pose));
        assert!(p.update(Pose::new(1.0, 2.0, 1.5, 0.26)));
        assert!(!p.update(Pose::new(1.0, 2.0, 1.5, 0.26)));
    }

    #[test]
    fn rotation_quarter_turn_maps_axes() {
        let mut p = Polygon::new(unit_square(), Pose::upright(0.0, 0.0, 1.0));
        p.update(Pose::new(0.0, 0.0, 1.0, std::f64::consts::FRAC_PI_2));
        // (1,1) rotated 90° CCW is (-1,1).
        let pts = p.points();
        assert!((pts[0] - vector![-1.0, 1.0]).norm() < 1e-12);
    }

    #[test]
    fn points_snapshot_is_detached() {
        let p = Polygon::new(unit_square(), Pose::upright(0.0, 0.0, 1.0));
        let mut snap = p.points();
        snap[0] = vector![99.0, 99.0];
        assert!((p.points()[0] - vector![1.0, 1.0]).norm() < 1e-12);
    }

    #[test]
    fn border_box_ignores_radius_and_rotation_for_squares() {
        for radius in [0.5, 1.0, 4.0] {
            let p = Polygon::new(unit_square(), Pose::upright(7.0, -3.0, radius));
            let bb = p.border_box();
            assert!((bb.width - 1.0).abs() < 1e-12);
            assert!((bb.height - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn border_box_zero_radius_is_non_finite() {
        let p = Polygon::new(unit_square(), Pose::upright(0.0, 0.0, 0.0));
        let bb = p.border_box();
        assert!(!bb.width.is_finite());
        assert!(!bb.height.is_finite());
    }
}
