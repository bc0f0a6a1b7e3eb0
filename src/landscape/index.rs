//! Exact nearest-neighbour index over the landscape grid
//!
//! A static 2-d tree built once over the flattened grid coordinates.
//! Queries return the linear index of the closest point by Euclidean
//! distance; equidistant points resolve to the lowest linear index.

use crate::common::Point;

#[derive(Clone, Debug)]
struct KdNode {
    /// Linear index of the point stored at this node
    point: usize,
    /// Split axis: 0 = x, 1 = y
    axis: usize,
    left: Option<usize>,
    right: Option<usize>,
}

/// Static k-d tree over 2D points
#[derive(Clone, Debug)]
pub struct SpatialIndex {
    points: Vec<Point>,
    nodes: Vec<KdNode>,
    root: Option<usize>,
}

impl SpatialIndex {
    /// Build the tree. Node order follows a median split on alternating axes.
    pub fn build(points: Vec<Point>) -> Self {
        let mut order: Vec<usize> = (0..points.len()).collect();
        let mut nodes = Vec::with_capacity(points.len());
        let root = Self::build_subtree(&points, &mut nodes, &mut order, 0);
        Self { points, nodes, root }
    }

    fn build_subtree(
        points: &[Point],
        nodes: &mut Vec<KdNode>,
        order: &mut [usize],
        depth: usize,
    ) -> Option<usize> {
        if order.is_empty() {
            return None;
        }

        let axis = depth % 2;
        order.sort_unstable_by(|&a, &b| {
            coord(&points[a], axis)
                .total_cmp(&coord(&points[b], axis))
                .then(a.cmp(&b))
        });

        let mid = order.len() / 2;
        let slot = nodes.len();
        nodes.push(KdNode { point: order[mid], axis, left: None, right: None });

        let (lower, rest) = order.split_at_mut(mid);
        let left = Self::build_subtree(points, nodes, lower, depth + 1);
        let right = Self::build_subtree(points, nodes, &mut rest[1..], depth + 1);
        nodes[slot].left = left;
        nodes[slot].right = right;

        Some(slot)
    }

    /// Linear index of the point nearest to `query`, or `None` for an empty index.
    pub fn nearest(&self, query: &Point) -> Option<usize> {
        let root = self.root?;
        let mut best = (usize::MAX, f64::INFINITY);
        self.search(root, query, &mut best);
        Some(best.0)
    }

    fn search(&self, slot: usize, query: &Point, best: &mut (usize, f64)) {
        let node = &self.nodes[slot];
        let candidate = &self.points[node.point];
        let dist = candidate.distance_squared(query);

        if dist < best.1 || (dist == best.1 && node.point < best.0) {
            *best = (node.point, dist);
        }

        let diff = coord(query, node.axis) - coord(candidate, node.axis);
        let (near, far) = if diff < 0.0 {
            (node.left, node.right)
        } else {
            (node.right, node.left)
        };

        if let Some(near) = near {
            self.search(near, query, best);
        }
        // `<=` keeps equidistant points on the far side reachable for the tie-break
        if let Some(far) = far {
            if diff * diff <= best.1 {
                self.search(far, query, best);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn point(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }
}

fn coord(p: &Point, axis: usize) -> f64 {
    if axis == 0 { p.x } else { p.y }
}
