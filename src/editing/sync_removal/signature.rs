//! Structural signatures
//!
//! Two layers with equal signatures have the same number of paths, and each
//! path has the same node types in the same order and is open or closed in
//! both, so any (path, node) index pair means the same thing in both of them
//! and every removal takes the same nodes from each.

use crate::core::state::{LayerData, PointTypeData};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LayerSignature {
    paths: Vec<PathSignature>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct PathSignature {
    closed: bool,
    types: Vec<PointTypeData>,
}

impl LayerSignature {
    pub fn of(layer: &LayerData) -> Self {
        let paths = layer
            .contours
            .iter()
            .map(|contour| PathSignature {
                closed: contour.closed,
                types: contour.points.iter().map(|p| p.point_type).collect(),
            })
            .collect();
        Self { paths }
    }

    pub fn path_count(&self) -> usize {
        self.paths.len()
    }

    pub fn node_count(&self) -> usize {
        self.paths.iter().map(|path| path.types.len()).sum()
    }

    /// Short hex digest for logs and reports
    pub fn digest(&self) -> String {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        format!("{:016x}", hasher.finish())
    }
}
