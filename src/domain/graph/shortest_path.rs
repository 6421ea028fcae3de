use serde::Serialize;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::domain::graph::airport_graph::{AirportGraph, AirportIndex};
use crate::domain::utils::id::AirportId;
use crate::error::{Error, Result};

/// Result of a shortest path query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPath {
    pub distance: u64,

    /// Airports from source to destination, both included.
    pub path: Vec<AirportId>,
}

impl AirportGraph {
    /// Dijkstra from `source` to `destination`.
    ///
    /// Fails with `NoPath` when either endpoint is unknown or `destination` is unreachable.
    /// Ties between equal tentative distances are resolved by the heap (lower index first).
    pub fn shortest_path(&self, source: &str, destination: &str) -> Result<ShortestPath> {
        let no_path = || Error::NoPath { from: AirportId::new(source), to: AirportId::new(destination) };

        let (Some(s), Some(t)) = (self.index_of(source), self.index_of(destination)) else {
            log::debug!("Dijkstra: unknown endpoint in {} -> {}", source, destination);
            return Err(no_path());
        };

        let n = self.airport_count();
        let mut dist: Vec<Option<u64>> = vec![None; n];
        let mut parent: Vec<Option<AirportIndex>> = vec![None; n];
        let mut frontier: BinaryHeap<Reverse<(u64, AirportIndex)>> = BinaryHeap::new();

        dist[s] = Some(0);
        frontier.push(Reverse((0, s)));

        while let Some(Reverse((d, u))) = frontier.pop() {
            // Stale entry, a shorter distance was already settled.
            if dist[u] != Some(d) {
                continue;
            }

            for &(v, w) in &self.adjacency[u] {
                let candidate = d + u64::from(w);
                if dist[v].is_none_or(|current| candidate < current) {
                    dist[v] = Some(candidate);
                    parent[v] = Some(u);
                    frontier.push(Reverse((candidate, v)));
                }
            }
        }

        let Some(distance) = dist[t] else {
            log::debug!("Dijkstra: {} unreachable from {}", destination, source);
            return Err(no_path());
        };

        let mut indices = vec![t];
        let mut cursor = t;
        while let Some(p) = parent[cursor] {
            indices.push(p);
            cursor = p;
        }
        indices.reverse();

        let path = indices.into_iter().map(|index| self.name_of(index)).collect();

        Ok(ShortestPath { distance, path })
    }
}
