use std::collections::{HashSet, VecDeque};

use tracing::warn;

use subsurf_core::error::{Result, SubsurfError};

use crate::mesh::Mesh;
use crate::types::VertexKey;

/// Outcome of a fan-order repair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FanOrder {
    /// Every consecutive pair of incident faces shares an edge through the
    /// vertex (open fan or closed cycle).
    Consistent,
    /// The retry budget ran out; the incidence list was left in its
    /// best-effort order. Non-fatal on non-manifold input.
    Degraded,
}

impl Mesh {
    /// Reorder `v`'s incident faces into a face-to-face adjacency walk.
    ///
    /// Greedy chaining: take the next unplaced face; if it neighbours the
    /// tail of the chain, append it, otherwise requeue it. Because the test
    /// only looks at the tail, an open fan seeded mid-fan can starve: after
    /// `n` failed placements the partial chain is reversed once so it can
    /// grow from the other end. After `2*n^2` failed placements in total the
    /// repair gives up and keeps whatever order it reached.
    ///
    /// A duplicate face reference in the incidence list is a hard error.
    pub fn repair_face_order(&mut self, v: VertexKey) -> Result<FanOrder> {
        let incident = self.vertices[v].faces.clone();
        if incident.is_empty() {
            return Ok(FanOrder::Consistent);
        }

        let mut seen = HashSet::new();
        for &face in &incident {
            if !seen.insert(face) {
                return Err(SubsurfError::InconsistentTopology(format!(
                    "vertex {} lists face {face:?} more than once; \
                     the mesh probably has redundant faces",
                    self.vertices[v].id
                )));
            }
        }

        let n = incident.len();
        let mut queue: VecDeque<_> = incident.into_iter().collect();
        let mut chain = Vec::with_capacity(n);
        if let Some(first) = queue.pop_front() {
            chain.push(first);
        }

        let mut failures = 0usize;
        let mut reversed = false;
        while let Some(face) = queue.pop_front() {
            let tail = chain[chain.len() - 1];
            if self.face_neighbours(tail).contains(&face) {
                chain.push(face);
                continue;
            }

            queue.push_back(face);
            failures += 1;
            if failures == n && !reversed {
                // Open fans can be chained from either end.
                chain.reverse();
                reversed = true;
            }
            if failures >= 2 * n * n {
                warn!(
                    vertex = self.vertices[v].id,
                    placed = chain.len(),
                    total = n,
                    "fan repair gave up; faces around vertex are not consistent"
                );
                chain.extend(queue.drain(..));
                self.vertices[v].faces = chain;
                return Ok(FanOrder::Degraded);
            }
        }

        self.vertices[v].faces = chain;
        Ok(FanOrder::Consistent)
    }
}
