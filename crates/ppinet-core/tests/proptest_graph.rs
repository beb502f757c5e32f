use proptest::prelude::*;

use ppinet_core::{
    InteractionRecord, InteractionTable, Metric, PpiGraph, build_graph, compute_centralities,
};

const SYMBOLS: [&str; 12] = [
    "TP53", "MDM2", "EP300", "ATM", "CHEK2", "BRCA1", "BRCA2", "RAD51", "CDK2", "CCNA2", "RB1",
    "E2F1",
];

fn arb_record() -> impl Strategy<Value = InteractionRecord> {
    (0..SYMBOLS.len(), 0..SYMBOLS.len())
        .prop_map(|(a, b)| InteractionRecord::new(SYMBOLS[a], SYMBOLS[b]))
}

fn arb_table() -> impl Strategy<Value = InteractionTable> {
    prop::collection::vec(arb_record(), 0..40).prop_map(InteractionTable::from_iter)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn nodes_are_exactly_the_table_proteins(table in arb_table()) {
        let graph = build_graph(&table);
        let mut nodes: Vec<&str> = graph.nodes().collect();
        nodes.sort_unstable();
        let proteins: Vec<&str> = table.proteins().into_iter().collect();
        prop_assert_eq!(nodes, proteins);
    }

    #[test]
    fn every_record_is_an_edge(table in arb_table()) {
        let graph = build_graph(&table);
        for record in &table {
            prop_assert!(graph.contains_edge(&record.protein1, &record.protein2));
            prop_assert!(graph.contains_edge(&record.protein2, &record.protein1));
        }
        prop_assert!(graph.edge_count() <= table.len());
    }

    #[test]
    fn record_order_does_not_change_structure(table in arb_table()) {
        let forward = build_graph(&table);
        let reversed: InteractionTable = table.iter().rev().cloned().collect();
        let backward = build_graph(&reversed);
        prop_assert_eq!(forward.node_count(), backward.node_count());
        prop_assert_eq!(forward.edge_count(), backward.edge_count());
        for protein in forward.nodes() {
            prop_assert_eq!(forward.degree(protein), backward.degree(protein));
        }
    }

    #[test]
    fn content_hash_is_deterministic(table in arb_table()) {
        prop_assert_eq!(build_graph(&table).content_hash, build_graph(&table).content_hash);
    }

    #[test]
    fn every_metric_covers_every_node(table in arb_table()) {
        let graph = build_graph(&table);
        for (metric, mapping) in compute_centralities(&graph) {
            let scores = match mapping {
                Ok(scores) => scores,
                // Disjoint components with near-equal spectra can stall power iteration.
                Err(_) if metric == Metric::Eigenvector => continue,
                Err(e) => return Err(TestCaseError::fail(format!("{metric}: {e}"))),
            };
            prop_assert_eq!(scores.len(), graph.node_count());
            for protein in graph.nodes() {
                let value = scores[protein];
                prop_assert!(value.is_finite());
                prop_assert!(value >= 0.0, "{} {} = {}", metric, protein, value);
            }
        }
    }

    #[test]
    fn bounded_metrics_stay_in_unit_interval(pairs in prop::collection::vec((0..8usize, 0..8usize), 1..30)) {
        let graph = PpiGraph::from_pairs(
            pairs
                .into_iter()
                .filter(|(a, b)| a != b)
                .map(|(a, b)| (SYMBOLS[a], SYMBOLS[b])),
        );
        for (metric, mapping) in compute_centralities(&graph) {
            if metric == Metric::Eigenvector {
                continue;
            }
            let scores = mapping.map_err(|e| TestCaseError::fail(e.to_string()))?;
            for value in scores.values() {
                prop_assert!(*value <= 1.0 + 1e-9, "{} = {}", metric, value);
            }
        }
    }

    #[test]
    fn pagerank_sums_to_one(table in arb_table()) {
        prop_assume!(!table.is_empty());
        let graph = build_graph(&table);
        let scores = compute_centralities(&graph)
            .into_iter()
            .find(|(m, _)| *m == Metric::PageRank)
            .map(|(_, mapping)| mapping)
            .ok_or_else(|| TestCaseError::fail("pagerank missing"))?
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        let total: f64 = scores.values().sum();
        prop_assert!((total - 1.0).abs() < 1e-6, "sum = {}", total);
    }
}
