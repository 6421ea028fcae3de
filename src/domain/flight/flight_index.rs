use std::cmp::Ordering;

use crate::domain::flight::flight_record::{FlightRecord, FlightSlot};
use crate::domain::utils::id::FlightId;

type NodeHandle = usize;

#[derive(Debug, Clone)]
struct IndexNode {
    /// Copy of the record's identifier. Identifiers never change, so the copy cannot go stale.
    key: FlightId,
    slot: FlightSlot,
    left: Option<NodeHandle>,
    right: Option<NodeHandle>,
}

/// Unbalanced binary search tree from flight identifier to flight slot.
///
/// Nodes live in an arena and point at each other by handle. Records are not
/// owned here: a node only remembers the slot of its record in the flight array.
/// No rebalancing is done, so sorted insertion orders degrade lookups to O(n).
#[derive(Debug, Default, Clone)]
pub struct FlightIndex {
    nodes: Vec<IndexNode>,
    root: Option<NodeHandle>,
}

impl FlightIndex {
    pub fn new() -> Self {
        Self { nodes: Vec::new(), root: None }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Inserts `key -> slot`.
    ///
    /// # Returns
    /// Returns `false` if the key is already present. The first insertion wins and the tree is left untouched.
    pub fn insert(&mut self, key: FlightId, slot: FlightSlot) -> bool {
        let mut link = self.root;
        let mut parent: Option<(NodeHandle, Ordering)> = None;

        while let Some(handle) = link {
            let node = &self.nodes[handle];
            match key.cmp(&node.key) {
                Ordering::Less => {
                    parent = Some((handle, Ordering::Less));
                    link = node.left;
                }
                Ordering::Greater => {
                    parent = Some((handle, Ordering::Greater));
                    link = node.right;
                }
                Ordering::Equal => {
                    log::debug!("FlightIndex: key {} already indexed, insert ignored", key);
                    return false;
                }
            }
        }

        let handle = self.nodes.len();
        self.nodes.push(IndexNode { key, slot, left: None, right: None });

        match parent {
            None => self.root = Some(handle),
            Some((p, Ordering::Less)) => self.nodes[p].left = Some(handle),
            Some((p, _)) => self.nodes[p].right = Some(handle),
        }

        true
    }

    /// Exact lookup. Cost is O(height).
    pub fn search(&self, key: &str) -> Option<FlightSlot> {
        let mut link = self.root;

        while let Some(handle) = link {
            let node = &self.nodes[handle];
            match key.cmp(node.key.as_str()) {
                Ordering::Less => link = node.left,
                Ordering::Greater => link = node.right,
                Ordering::Equal => return Some(node.slot),
            }
        }

        None
    }

    pub fn contains(&self, key: &str) -> bool {
        self.search(key).is_some()
    }

    /// Slots of all indexed flights in ascending identifier order.
    pub fn slots_in_order(&self) -> InOrder<'_> {
        InOrder::new(self)
    }

    /// Lazy in-order walk over the active records of `records`.
    ///
    /// Cancelled flights are skipped. Every call starts a fresh walk.
    pub fn active_in_order<'a>(&'a self, records: &'a [FlightRecord]) -> impl Iterator<Item = &'a FlightRecord> + 'a {
        self.slots_in_order().filter_map(move |slot| records.get(slot)).filter(|record| record.is_active())
    }

    /// Height of the tree, 0 when empty.
    pub fn height(&self) -> usize {
        let mut max_depth = 0;
        let mut stack: Vec<(NodeHandle, usize)> = self.root.map(|root| (root, 1)).into_iter().collect();

        while let Some((handle, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            let node = &self.nodes[handle];
            if let Some(left) = node.left {
                stack.push((left, depth + 1));
            }
            if let Some(right) = node.right {
                stack.push((right, depth + 1));
            }
        }

        max_depth
    }
}

/// In-order iterator driven by an explicit stack, so degenerate trees cannot overflow the call stack.
pub struct InOrder<'a> {
    index: &'a FlightIndex,
    stack: Vec<NodeHandle>,
    cursor: Option<NodeHandle>,
}

impl<'a> InOrder<'a> {
    fn new(index: &'a FlightIndex) -> Self {
        Self { index, stack: Vec::new(), cursor: index.root }
    }
}

impl Iterator for InOrder<'_> {
    type Item = FlightSlot;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(handle) = self.cursor {
            self.stack.push(handle);
            self.cursor = self.index.nodes[handle].left;
        }

        let handle = self.stack.pop()?;
        let node = &self.index.nodes[handle];
        self.cursor = node.right;
        Some(node.slot)
    }
}
