use std::collections::VecDeque;

use crate::domain::graph::airport_graph::{AirportGraph, AirportIndex};
use crate::domain::utils::id::AirportId;
use crate::error::{Error, Result};

impl AirportGraph {
    /// Depth-first visit order from `start`.
    ///
    /// Neighbours are explored in adjacency insertion order. An explicit stack of
    /// `(node, next neighbour)` frames reproduces the recursive visit order.
    pub fn traverse_depth_first(&self, start: &str) -> Result<Vec<AirportId>> {
        let start_index = self.require_airport(start)?;

        let mut visited = vec![false; self.airport_count()];
        let mut order = Vec::new();
        let mut stack: Vec<(AirportIndex, usize)> = vec![(start_index, 0)];

        visited[start_index] = true;
        order.push(self.name_of(start_index));

        while let Some(frame) = stack.last_mut() {
            let (u, cursor) = *frame;

            match self.adjacency[u].get(cursor) {
                Some(&(v, _)) => {
                    frame.1 += 1;
                    if !visited[v] {
                        visited[v] = true;
                        order.push(self.name_of(v));
                        stack.push((v, 0));
                    }
                }
                None => {
                    stack.pop();
                }
            }
        }

        log::debug!("DFS from {} visited {} airports", start, order.len());
        Ok(order)
    }

    /// Breadth-first visit order from `start`, neighbours in insertion order per level.
    pub fn traverse_breadth_first(&self, start: &str) -> Result<Vec<AirportId>> {
        let start_index = self.require_airport(start)?;

        let mut visited = vec![false; self.airport_count()];
        let mut order = Vec::new();
        let mut queue: VecDeque<AirportIndex> = VecDeque::new();

        visited[start_index] = true;
        queue.push_back(start_index);

        while let Some(u) = queue.pop_front() {
            order.push(self.name_of(u));

            for &(v, _) in &self.adjacency[u] {
                if !visited[v] {
                    visited[v] = true;
                    queue.push_back(v);
                }
            }
        }

        log::debug!("BFS from {} visited {} airports", start, order.len());
        Ok(order)
    }

    pub(crate) fn require_airport(&self, name: &str) -> Result<AirportIndex> {
        self.index_of(name).ok_or_else(|| Error::NotFound(format!("airport {}", name)))
    }
}
