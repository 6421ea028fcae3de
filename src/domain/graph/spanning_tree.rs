use serde::Serialize;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use union_find::{QuickUnionUf, UnionByRank, UnionFind};

use crate::domain::graph::airport_graph::{AirportGraph, AirportIndex, Weight};
use crate::domain::utils::id::AirportId;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpanningEdge {
    pub from: AirportId,
    pub to: AirportId,
    pub weight: Weight,
}

/// Edges selected by a minimum spanning tree run, in selection/report order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MinimumSpanningTree {
    pub edges: Vec<SpanningEdge>,
    pub total_weight: u64,
}

impl MinimumSpanningTree {
    fn push(&mut self, from: AirportId, to: AirportId, weight: Weight) {
        self.total_weight += u64::from(weight);
        self.edges.push(SpanningEdge { from, to, weight });
    }
}

#[derive(Debug, Clone, Copy)]
struct Edge {
    u: AirportIndex,
    v: AirportIndex,
    w: Weight,
}

impl AirportGraph {
    /// Prim's algorithm grown from `start`.
    ///
    /// Only the component containing `start` is spanned. Edges are reported as
    /// `(parent, child, weight)` in ascending index of the child.
    pub fn minimum_spanning_tree_prim(&self, start: &str) -> Result<MinimumSpanningTree> {
        let s = self.require_airport(start)?;

        let n = self.airport_count();
        let mut key: Vec<Option<Weight>> = vec![None; n];
        let mut parent: Vec<Option<AirportIndex>> = vec![None; n];
        let mut in_tree = vec![false; n];
        let mut frontier: BinaryHeap<Reverse<(Weight, AirportIndex)>> = BinaryHeap::new();

        key[s] = Some(0);
        frontier.push(Reverse((0, s)));

        while let Some(Reverse((_, u))) = frontier.pop() {
            if in_tree[u] {
                continue;
            }
            in_tree[u] = true;

            for &(v, w) in &self.adjacency[u] {
                if !in_tree[v] && key[v].is_none_or(|current| w < current) {
                    key[v] = Some(w);
                    parent[v] = Some(u);
                    frontier.push(Reverse((w, v)));
                }
            }
        }

        let mut tree = MinimumSpanningTree::default();
        for v in 0..n {
            if let (Some(p), Some(w)) = (parent[v], key[v]) {
                tree.push(self.name_of(p), self.name_of(v), w);
            }
        }

        log::debug!("Prim from {}: {} edges, total weight {}", start, tree.edges.len(), tree.total_weight);
        Ok(tree)
    }

    /// Kruskal's algorithm over every edge of the graph.
    ///
    /// Each undirected edge is taken once (`u < v` in index order), edges are
    /// sorted ascending by weight and merged through a union-find with union by
    /// rank and path compression. Airports without edges are not part of the result.
    pub fn minimum_spanning_tree_kruskal(&self) -> MinimumSpanningTree {
        let n = self.airport_count();

        let mut edges: Vec<Edge> = Vec::new();
        for (u, neighbours) in self.adjacency.iter().enumerate() {
            for &(v, w) in neighbours {
                if u < v {
                    edges.push(Edge { u, v, w });
                }
            }
        }
        edges.sort_by_key(|edge| edge.w);

        let mut dsu = QuickUnionUf::<UnionByRank>::new(n);
        let mut tree = MinimumSpanningTree::default();

        for edge in edges {
            if dsu.find(edge.u) == dsu.find(edge.v) {
                log::debug!("Kruskal: skipping {} - {} ({}), closes a cycle", edge.u, edge.v, edge.w);
                continue;
            }
            dsu.union(edge.u, edge.v);
            tree.push(self.name_of(edge.u), self.name_of(edge.v), edge.w);
        }

        log::debug!("Kruskal: {} edges, total weight {}", tree.edges.len(), tree.total_weight);
        tree
    }
}
