//! Graph construction from an interaction table.
//!
//! # Overview
//!
//! Every [`InteractionRecord`] becomes an undirected edge between
//! `protein1` and `protein2`; both endpoints are added as nodes the first
//! time they are seen. Node indices follow first appearance in the table.
//!
//! ## Simple-graph semantics
//!
//! A second record for the same unordered pair (in either orientation) does
//! not add a parallel edge. A record with `protein1 == protein2` becomes a
//! self-loop; the builder never filters those out.

#![allow(clippy::module_name_repetitions)]

use std::collections::HashMap;

use petgraph::dot::{Config, Dot};
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use tracing::{debug, instrument};

use crate::normalize::{InteractionRecord, InteractionTable};

// ---------------------------------------------------------------------------
// PpiGraph
// ---------------------------------------------------------------------------

/// An undirected protein interaction graph.
///
/// Nodes are protein symbols. An edge `A - B` means at least one record
/// reported an interaction between A and B.
#[derive(Debug, Clone)]
pub struct PpiGraph {
    /// Undirected graph: nodes = protein symbols, edges = interactions.
    pub graph: UnGraph<String, ()>,
    /// Mapping from protein symbol to petgraph `NodeIndex`.
    pub node_map: HashMap<String, NodeIndex>,
    /// BLAKE3 content hash of the interaction list the graph was built from.
    pub content_hash: String,
}

impl Default for PpiGraph {
    fn default() -> Self {
        Self::from_table(&InteractionTable::new())
    }
}

impl PpiGraph {
    /// Build a [`PpiGraph`] from `table`, in table order.
    #[must_use]
    #[instrument(skip(table), fields(records = table.len()))]
    pub fn from_table(table: &InteractionTable) -> Self {
        Self::from_records(table.iter())
    }

    /// Build a [`PpiGraph`] from any sequence of records.
    #[must_use]
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a InteractionRecord>) -> Self {
        let mut graph = UnGraph::<String, ()>::default();
        let mut node_map: HashMap<String, NodeIndex> = HashMap::new();
        let mut hasher = blake3::Hasher::new();
        let mut collapsed = 0usize;

        for record in records {
            hasher.update(record.protein1.as_bytes());
            hasher.update(b"\x00");
            hasher.update(record.protein2.as_bytes());
            hasher.update(b"\x00");

            let a = intern(&mut graph, &mut node_map, &record.protein1);
            let b = intern(&mut graph, &mut node_map, &record.protein2);

            // Parallel edges collapse; petgraph would otherwise keep them.
            if graph.contains_edge(a, b) {
                collapsed += 1;
            } else {
                graph.add_edge(a, b, ());
            }
        }

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            collapsed,
            "built interaction graph"
        );

        Self {
            graph,
            node_map,
            content_hash: format!("blake3:{}", hasher.finalize()),
        }
    }

    /// Convenience constructor from `(protein1, protein2)` pairs.
    #[must_use]
    pub fn from_pairs<A, B>(pairs: impl IntoIterator<Item = (A, B)>) -> Self
    where
        A: Into<String>,
        B: Into<String>,
    {
        let table: InteractionTable = pairs
            .into_iter()
            .map(|(a, b)| InteractionRecord::new(a, b))
            .collect();
        Self::from_table(&table)
    }

    /// Return the number of nodes (proteins) in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Return the number of distinct interactions (edges) in the graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Look up the `NodeIndex` for a protein symbol.
    #[must_use]
    pub fn node_index(&self, protein: &str) -> Option<NodeIndex> {
        self.node_map.get(protein).copied()
    }

    /// Return the protein symbol for a node.
    #[must_use]
    pub fn protein(&self, idx: NodeIndex) -> Option<&str> {
        self.graph.node_weight(idx).map(String::as_str)
    }

    /// Protein symbols in first-appearance order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> + '_ {
        self.graph.node_weights().map(String::as_str)
    }

    /// Edges as symbol pairs, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.graph.edge_references().map(|e| {
            (
                self.graph[e.source()].as_str(),
                self.graph[e.target()].as_str(),
            )
        })
    }

    /// `true` if an interaction between `a` and `b` is present (either order).
    #[must_use]
    pub fn contains_edge(&self, a: &str, b: &str) -> bool {
        match (self.node_index(a), self.node_index(b)) {
            (Some(ia), Some(ib)) => self.graph.contains_edge(ia, ib),
            _ => false,
        }
    }

    /// Number of self-loops.
    #[must_use]
    pub fn self_loop_count(&self) -> usize {
        self.graph
            .edge_references()
            .filter(|e| e.source() == e.target())
            .count()
    }

    /// Neighbor lists indexed by `NodeIndex::index()`.
    ///
    /// Each neighbor appears once; a node with a self-loop lists itself once.
    #[must_use]
    pub fn adjacency(&self) -> Vec<Vec<usize>> {
        let mut adj = vec![Vec::new(); self.node_count()];
        for e in self.graph.edge_references() {
            let (s, t) = (e.source().index(), e.target().index());
            adj[s].push(t);
            if s != t {
                adj[t].push(s);
            }
        }
        adj
    }

    /// Per-node degree indexed by `NodeIndex::index()`, self-loops counting twice.
    #[must_use]
    pub fn degrees(&self) -> Vec<usize> {
        self.adjacency()
            .iter()
            .enumerate()
            .map(|(i, nbrs)| nbrs.len() + usize::from(nbrs.contains(&i)))
            .collect()
    }

    /// Degree of a protein, with a self-loop counting twice.
    #[must_use]
    pub fn degree(&self, protein: &str) -> Option<usize> {
        let idx = self.node_index(protein)?;
        Some(
            self.graph
                .edge_references()
                .map(|e| usize::from(e.source() == idx) + usize::from(e.target() == idx))
                .sum(),
        )
    }

    /// Render the graph in Graphviz DOT format, labelled by protein symbol.
    #[must_use]
    pub fn to_dot(&self) -> String {
        let labelled = self.graph.map(|_, protein| protein.as_str(), |_, _| "");
        format!("{}", Dot::with_config(&labelled, &[Config::EdgeNoLabel]))
    }
}

/// Build the undirected interaction graph for `table`.
#[must_use]
pub fn build_graph(table: &InteractionTable) -> PpiGraph {
    PpiGraph::from_table(table)
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn intern(
    graph: &mut UnGraph<String, ()>,
    node_map: &mut HashMap<String, NodeIndex>,
    protein: &str,
) -> NodeIndex {
    if let Some(&idx) = node_map.get(protein) {
        return idx;
    }
    let idx = graph.add_node(protein.to_string());
    node_map.insert(protein.to_string(), idx);
    idx
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_table_produces_empty_graph() {
        let graph = PpiGraph::from_table(&InteractionTable::new());
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.is_empty());
        // Hash of empty interaction list is stable.
        assert!(graph.content_hash.starts_with("blake3:"));
        assert_eq!(graph.content_hash, PpiGraph::default().content_hash);
    }

    #[test]
    fn path_of_two_edges() {
        let graph = PpiGraph::from_pairs([("A", "B"), ("B", "C")]);
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.contains_edge("A", "B"));
        assert!(graph.contains_edge("C", "B"), "edges are undirected");
        assert!(!graph.contains_edge("A", "C"));
    }

    #[test]
    fn nodes_follow_first_appearance() {
        let graph = PpiGraph::from_pairs([("TP53", "MDM2"), ("ATM", "TP53"), ("MDM2", "EP300")]);
        let nodes: Vec<&str> = graph.nodes().collect();
        assert_eq!(nodes, vec!["TP53", "MDM2", "ATM", "EP300"]);
    }

    #[test]
    fn parallel_edges_collapse_in_either_orientation() {
        let graph = PpiGraph::from_pairs([("A", "B"), ("A", "B"), ("B", "A")]);
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn self_loops_are_kept() {
        let graph = PpiGraph::from_pairs([("A", "A"), ("A", "B"), ("A", "A")]);
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.self_loop_count(), 1);
        assert!(graph.contains_edge("A", "A"));
        assert_eq!(graph.degree("A"), Some(3));
        assert_eq!(graph.degree("B"), Some(1));
    }

    #[test]
    fn adjacency_lists_self_once() {
        let graph = PpiGraph::from_pairs([("A", "A"), ("A", "B")]);
        let adj = graph.adjacency();
        let a = graph.node_index("A").expect("A node").index();
        let b = graph.node_index("B").expect("B node").index();
        assert_eq!(adj[a].len(), 2);
        assert!(adj[a].contains(&a));
        assert_eq!(adj[b], vec![a]);
    }

    #[test]
    fn content_hash_tracks_table_contents() {
        let one = PpiGraph::from_pairs([("A", "B")]);
        let same = PpiGraph::from_pairs([("A", "B")]);
        let other = PpiGraph::from_pairs([("A", "C")]);
        assert_eq!(one.content_hash, same.content_hash);
        assert_ne!(one.content_hash, other.content_hash);
    }

    #[test]
    fn dot_output_names_proteins() {
        let graph = PpiGraph::from_pairs([("BRCA1", "BARD1")]);
        let dot = graph.to_dot();
        assert!(dot.starts_with("graph {"));
        assert!(dot.contains("BRCA1"));
        assert!(dot.contains("BARD1"));
        assert!(dot.contains("--"));
    }

    #[test]
    fn unknown_protein_lookups() {
        let graph = PpiGraph::from_pairs([("A", "B")]);
        assert!(graph.node_index("Z").is_none());
        assert_eq!(graph.degree("Z"), None);
        assert!(!graph.contains_edge("A", "Z"));
    }
}
