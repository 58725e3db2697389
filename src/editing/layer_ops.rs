//! Structural mutation primitives for a single layer
//!
//! Every primitive validates its index against the layer as it is right now,
//! never against a cached bound, and reports a [`LayerFault`] instead of
//! panicking when the index is stale.

use crate::core::errors::LayerFault;
use crate::core::state::{
    AnchorData, ComponentData, ContourData, HintData, LayerData, NodeRef, PointTypeData,
};
use crate::geometry::merged_handles;

impl LayerData {
    fn contour_mut(&mut self, path: usize) -> Result<&mut ContourData, LayerFault> {
        let count = self.contours.len();
        self.contours
            .get_mut(path)
            .ok_or(LayerFault::PathOutOfRange { path, count })
    }

    /// Check that a node reference addresses a node in this layer
    pub fn check_node(&self, node: NodeRef) -> Result<(), LayerFault> {
        let contour = self
            .contours
            .get(node.path)
            .ok_or(LayerFault::PathOutOfRange {
                path: node.path,
                count: self.contours.len(),
            })?;
        if node.node >= contour.points.len() {
            return Err(LayerFault::NodeOutOfRange {
                path: node.path,
                node: node.node,
                count: contour.points.len(),
            });
        }
        Ok(())
    }

    /// Remove exactly one node. The path is left in place even when empty.
    pub fn remove_node(&mut self, node: NodeRef) -> Result<(), LayerFault> {
        self.check_node(node)?;
        self.contour_mut(node.path)?.points.remove(node.node);
        Ok(())
    }

    /// Remove a node while keeping the outline's shape where that is possible.
    ///
    /// An on-curve point joining two cubic segments takes its two neighbouring
    /// handles with it, and the outer handles are stretched so the merged
    /// segment follows the old outline. Anything else is a plain removal.
    /// Returns how many nodes were removed.
    pub fn remove_node_keep_shape(&mut self, node: NodeRef) -> Result<usize, LayerFault> {
        self.check_node(node)?;
        let contour = self.contour_mut(node.path)?;

        let Some(idx) = cubic_join(contour, node.node) else {
            contour.points.remove(node.node);
            return Ok(1);
        };

        let n = contour.points.len();
        let at = |offset: isize| (idx as isize + offset).rem_euclid(n as isize) as usize;
        let point = |offset: isize| contour.points[at(offset)].to_point();

        let (h1, h2) = merged_handles(
            point(-3),
            point(-2),
            point(-1),
            point(0),
            point(1),
            point(2),
            point(3),
        );
        let (i_h1, i_h2) = (at(-2), at(2));
        contour.points[i_h1].x = h1.x;
        contour.points[i_h1].y = h1.y;
        contour.points[i_h2].x = h2.x;
        contour.points[i_h2].y = h2.y;

        let mut doomed = [at(-1), at(0), at(1)];
        doomed.sort_unstable_by(|a, b| b.cmp(a));
        for i in doomed {
            contour.points.remove(i);
        }
        Ok(doomed.len())
    }

    /// Remove the anchor with this name, if the layer has one
    pub fn remove_anchor(&mut self, name: &str) -> Option<AnchorData> {
        let index = self.anchors.iter().position(|a| a.name == name)?;
        Some(self.anchors.remove(index))
    }

    pub fn remove_component(&mut self, index: usize) -> Result<ComponentData, LayerFault> {
        if index >= self.components.len() {
            return Err(LayerFault::ComponentOutOfRange {
                index,
                count: self.components.len(),
            });
        }
        Ok(self.components.remove(index))
    }

    pub fn remove_hint(&mut self, index: usize) -> Result<HintData, LayerFault> {
        if index >= self.hints.len() {
            return Err(LayerFault::HintOutOfRange {
                index,
                count: self.hints.len(),
            });
        }
        Ok(self.hints.remove(index))
    }

    pub fn remove_path(&mut self, index: usize) -> Result<ContourData, LayerFault> {
        if index >= self.contours.len() {
            return Err(LayerFault::PathOutOfRange {
                path: index,
                count: self.contours.len(),
            });
        }
        Ok(self.contours.remove(index))
    }
}

/// Index of `node` when it is an on-curve point with a full cubic segment on
/// both sides.
fn cubic_join(contour: &ContourData, node: usize) -> Option<usize> {
    let points = &contour.points;
    let n = points.len();
    if n < 6 {
        return None;
    }
    if !contour.closed && (node < 3 || node + 3 >= n) {
        return None;
    }

    let ty = |offset: isize| {
        points[(node as isize + offset).rem_euclid(n as isize) as usize].point_type
    };
    let incoming = ty(0) == PointTypeData::Curve
        && ty(-1) == PointTypeData::OffCurve
        && ty(-2) == PointTypeData::OffCurve
        && ty(-3).is_on_curve();
    let outgoing = ty(1) == PointTypeData::OffCurve
        && ty(2) == PointTypeData::OffCurve
        && ty(3) == PointTypeData::Curve;

    (incoming && outgoing).then_some(node)
}
