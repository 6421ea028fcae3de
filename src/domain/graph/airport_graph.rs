use bimap::BiMap;

use crate::domain::utils::id::AirportId;

/// Dense index of an airport, minted on first reference.
pub type AirportIndex = usize;

/// Distance in the same unit as the flight distances (kilometres in the sample data).
pub type Weight = u32;

/// Weighted undirected multigraph over airports.
///
/// Airports are mapped to dense indices the first time they are referenced.
/// Every added edge is stored once per direction and parallel edges are kept,
/// so each flight contributes its own edge.
///
/// All algorithms assume non-negative weights, which `Weight` being unsigned guarantees.
#[derive(Debug, Default, Clone)]
pub struct AirportGraph {
    /// Bijection airport name <-> dense index.
    airports: BiMap<AirportId, AirportIndex>,

    /// `adjacency[u]` holds `(neighbour, weight)` in insertion order.
    pub(crate) adjacency: Vec<Vec<(AirportIndex, Weight)>>,
}

impl AirportGraph {
    pub fn new() -> Self {
        Self { airports: BiMap::new(), adjacency: Vec::new() }
    }

    /// Returns the index of `name`, registering the airport if it was never seen.
    pub fn resolve_or_create(&mut self, name: &str) -> AirportIndex {
        if let Some(&index) = self.airports.get_by_left(name) {
            return index;
        }

        let index = self.adjacency.len();
        self.airports.insert(AirportId::new(name), index);
        self.adjacency.push(Vec::new());

        log::debug!("AirportGraph: registered airport {} as index {}", name, index);
        index
    }

    /// Inserts an undirected edge as two directed adjacency entries.
    pub fn add_edge(&mut self, source: &str, destination: &str, weight: Weight) {
        let u = self.resolve_or_create(source);
        let v = self.resolve_or_create(destination);

        self.adjacency[u].push((v, weight));
        self.adjacency[v].push((u, weight));
    }

    pub fn index_of(&self, name: &str) -> Option<AirportIndex> {
        self.airports.get_by_left(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.airports.contains_left(name)
    }

    /// Name of an index handed out by `resolve_or_create`.
    pub(crate) fn name_of(&self, index: AirportIndex) -> AirportId {
        self.airports.get_by_right(&index).cloned().expect("every airport index is minted together with its name")
    }

    pub fn neighbours(&self, name: &str) -> Vec<(AirportId, Weight)> {
        match self.index_of(name) {
            Some(u) => self.adjacency[u].iter().map(|&(v, w)| (self.name_of(v), w)).collect(),
            None => Vec::new(),
        }
    }

    pub fn airport_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges, parallel edges counted individually.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Airports in index order.
    pub fn airports(&self) -> Vec<AirportId> {
        (0..self.airport_count()).map(|index| self.name_of(index)).collect()
    }
}
