//! Validated local-space shapes.
//!
//! Purpose
//! - Reject inputs that would degrade into NaNs downstream (too few points,
//!   zero-length edges) once, at construction, so the per-frame paths stay
//!   check-free.
//! - Provide the hull and normalization helpers used to author shapes.
//!
//! Conventions
//! - Local points are an ordered closed loop (last connects to first),
//!   centered on the origin, with unit distance marking the authored extent.
//!   `Polygon` applies pose (translate, rotate, scale) on top of these.
//! - The loop is shared read-only after construction; nothing mutates it.

use nalgebra::Vector2;

use super::types::{GeomCfg, ShapeError};

/// Immutable, validated local-space point loop.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    points: Vec<Vector2<f64>>,
}

impl Shape {
    /// Validate and wrap an ordered point loop.
    ///
    /// Fails on fewer than 3 points, or on any consecutive pair closer than
    /// `cfg.eps_edge` (the closing pair last→first included).
    pub fn new(points: Vec<Vector2<f64>>, cfg: GeomCfg) -> Result<Self, ShapeError> {
        if points.len() < 3 {
            return Err(ShapeError::TooFewPoints { got: points.len() });
        }
        for i in 0..points.len() {
            let j = (i + 1) % points.len();
            if (points[j] - points[i]).norm() <= cfg.eps_edge {
                return Err(ShapeError::DegenerateEdge { index: i });
            }
        }
        Ok(Self { points })
    }

    /// Build a shape from an unordered or over-specified point set by taking
    /// its convex hull (CCW order).
    pub fn from_points_hull(points: &[Vector2<f64>], cfg: GeomCfg) -> Result<Self, ShapeError> {
        let hull = convex_hull(points).ok_or(ShapeError::TooFewPoints { got: points.len() })?;
        Self::new(hull, cfg)
    }

    #[inline]
    pub fn points(&self) -> &[Vector2<f64>] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false for a constructed shape; present for slice-like symmetry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Signed shoelace area (positive for CCW loops).
    pub fn area(&self) -> f64 {
        let mut a = 0.0;
        for i in 0..self.points.len() {
            let p = self.points[i];
            let q = self.points[(i + 1) % self.points.len()];
            a += p.x * q.y - q.x * p.y;
        }
        a * 0.5
    }

    /// Area centroid, or `None` when the loop is (near-)degenerate.
    pub fn centroid(&self) -> Option<Vector2<f64>> {
        let mut a = 0.0;
        let mut cx = 0.0;
        let mut cy = 0.0;
        for i in 0..self.points.len() {
            let p = self.points[i];
            let q = self.points[(i + 1) % self.points.len()];
            let cross = p.x * q.y - q.x * p.y;
            a += cross;
            cx += (p.x + q.x) * cross;
            cy += (p.y + q.y) * cross;
        }
        a *= 0.5;
        if a.abs() < 1e-18 {
            return None;
        }
        Some(Vector2::new(cx / (6.0 * a), cy / (6.0 * a)))
    }

    /// Recenter to the area centroid and rescale each axis so the maximum
    /// half-extent is 1 (the "origin is the center, (1,1) is the authored
    /// extent" convention `Polygon` expects).
    ///
    /// Returns `None` when the loop is (near-)degenerate: zero area or a
    /// collapsed axis leave no meaningful extent to normalize by.
    pub fn normalized(&self) -> Option<Shape> {
        let c = self.centroid()?;
        let mut ex: f64 = 0.0;
        let mut ey: f64 = 0.0;
        for p in &self.points {
            ex = ex.max((p.x - c.x).abs());
            ey = ey.max((p.y - c.y).abs());
        }
        if ex < 1e-12 || ey < 1e-12 {
            return None;
        }
        let points = self
            .points
            .iter()
            .map(|p| Vector2::new((p.x - c.x) / ex, (p.y - c.y) / ey))
            .collect();
        // Per-axis scaling by positive factors cannot collapse an edge, so
        // the validated loop topology carries over.
        Some(Shape { points })
    }
}

/// Adapt a list of `[x, y]` pairs into the point format `Shape` consumes.
/// Pure and order-preserving.
pub fn points_from_pairs(pairs: &[[f64; 2]]) -> Vec<Vector2<f64>> {
    pairs.iter().map(|p| Vector2::new(p[0], p[1])).collect()
}

/// Andrew's monotone chain convex hull (returns hull in CCW order, deduped).
///
/// Complexity: O(N log N) for sort + linear passes.
fn convex_hull(points: &[Vector2<f64>]) -> Option<Vec<Vector2<f64>>> {
    if points.len() < 2 {
        return None;
    }
    let mut pts: Vec<_> = points.to_vec();
    pts.sort_by(|a, b| {
        match a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal) {
            std::cmp::Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal),
            o => o,
        }
    });
    pts.dedup_by(|a, b| (*a - *b).norm() < 1e-12);
    if pts.len() < 2 {
        return None;
    }
    let mut lower: Vec<Vector2<f64>> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], *p) <= 0.0 {
            lower.pop();
        }
        lower.push(*p);
    }
    let mut upper: Vec<Vector2<f64>> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], *p) <= 0.0 {
            upper.pop();
        }
        upper.push(*p);
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    Some(hull)
}

#[inline]
fn cross(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}
