//! Compressed Sparse Row (CSR) graph representation
//!
//! A frozen copy of a [`RankedGraph`](super::ranked::RankedGraph)'s adjacency.
//! Each row is sorted by neighbor index, so one ranking pass always visits
//! edges in the same order regardless of hash-map layout.

use rustc_hash::FxHashMap;

/// A graph in Compressed Sparse Row format
#[derive(Debug, Clone)]
pub struct CsrGraph {
    /// Number of nodes
    pub num_nodes: usize,
    /// Row pointers: node i's edges are at indices row_ptr[i]..row_ptr[i+1]
    pub row_ptr: Vec<usize>,
    /// Column indices (neighbor nodes) for each edge
    pub col_idx: Vec<u32>,
    /// Edge weights
    pub weights: Vec<f64>,
    /// Total incident weight for each node
    pub total_weight: Vec<f64>,
}

impl CsrGraph {
    /// Build from per-node adjacency maps, given in node index order
    pub fn from_adjacency<'a>(rows: impl Iterator<Item = &'a FxHashMap<u32, f64>>) -> Self {
        let mut row_ptr = vec![0];
        let mut col_idx = Vec::new();
        let mut weights = Vec::new();
        let mut total_weight = Vec::new();

        for edges in rows {
            let mut edges: Vec<_> = edges.iter().map(|(&k, &v)| (k, v)).collect();
            edges.sort_by_key(|(k, _)| *k);

            total_weight.push(edges.iter().map(|(_, w)| w).sum());

            for (target, weight) in edges {
                col_idx.push(target);
                weights.push(weight);
            }

            row_ptr.push(col_idx.len());
        }

        Self {
            num_nodes: total_weight.len(),
            row_ptr,
            col_idx,
            weights,
            total_weight,
        }
    }

    /// Iterate over neighbors of a node
    pub fn neighbors(&self, node: u32) -> impl Iterator<Item = (u32, f64)> + '_ {
        let start = self.row_ptr[node as usize];
        let end = self.row_ptr[node as usize + 1];
        (start..end).map(move |i| (self.col_idx[i], self.weights[i]))
    }

    /// Get the total incident weight of a node
    pub fn node_total_weight(&self, node: u32) -> f64 {
        self.total_weight[node as usize]
    }
}
