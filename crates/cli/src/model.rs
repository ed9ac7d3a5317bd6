//! JSON document types moved by the CLI.

use anyhow::{Context, Result};
use collide2d::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A posed polygon as stored on disk.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PosedPolygon {
    /// Local-space points as `[x, y]` pairs.
    pub shape: Vec<[f64; 2]>,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    #[serde(default)]
    pub rotation: f64,
}

impl PosedPolygon {
    pub fn into_polygon(self) -> Result<Polygon> {
        let points = points_from_pairs(&self.shape);
        let shape = Shape::new(points, GeomCfg::default()).context("invalid shape")?;
        Ok(Polygon::new(
            shape,
            Pose::new(self.x, self.y, self.radius, self.rotation),
        ))
    }

    pub fn from_shape(shape: &Shape) -> Self {
        Self {
            shape: shape.points().iter().map(|p| [p.x, p.y]).collect(),
            x: 0.0,
            y: 0.0,
            radius: 1.0,
            rotation: 0.0,
        }
    }
}

pub fn load_polygon(path: &Path) -> Result<Polygon> {
    let raw =
        std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let doc: PosedPolygon = serde_json::from_slice(&raw)
        .with_context(|| format!("parsing {}", path.display()))?;
    doc.into_polygon()
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
