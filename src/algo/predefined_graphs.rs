use crate::interface::DynamicGraph;
use rand::seq::IteratorRandom;
use rand::Rng;

/// Adds a complete directed graph with the given amount of nodes to the given graph.
/// Every ordered pair of distinct nodes receives an edge whose data is computed by `edge_data`.
/// Assumes that the graph is empty.
pub fn create_complete_graph<Graph: DynamicGraph, EdgeDataFn>(
    graph: &mut Graph,
    node_amount: usize,
    mut edge_data: EdgeDataFn,
) where
    Graph::NodeData: Default,
    EdgeDataFn: FnMut(Graph::NodeIndex, Graph::NodeIndex) -> Graph::EdgeData,
{
    for _ in 0..node_amount {
        graph.add_node(Default::default());
    }
    for n1 in graph.node_indices() {
        for n2 in graph.node_indices() {
            if n1 != n2 {
                let data = edge_data(n1, n2);
                graph.add_edge(n1, n2, data);
            }
        }
    }
}

/// Creates a random Hamiltonian graph with the given amount of nodes.
/// Assumes that the graph is empty.
///
/// The graph is guaranteed to contain a Hamiltonian tour, ensured by first
/// inserting a directed ring over all nodes. Afterwards up to `extra_edge_amount`
/// additional random non-parallel edges are inserted. Edge data is drawn from
/// `edge_data` for every inserted edge.
pub fn create_random_hamiltonian_graph<Graph: DynamicGraph, Random: Rng, EdgeDataFn>(
    graph: &mut Graph,
    node_amount: usize,
    extra_edge_amount: usize,
    edge_data: &mut EdgeDataFn,
    random: &mut Random,
) where
    Graph::NodeData: Default,
    EdgeDataFn: FnMut(&mut Random) -> Graph::EdgeData,
{
    if node_amount == 0 {
        return;
    }

    for _ in 0..node_amount {
        graph.add_node(Default::default());
    }
    for (n1, n2) in graph
        .node_indices()
        .take(graph.node_count() - 1)
        .zip(graph.node_indices().skip(1))
    {
        let data = edge_data(random);
        graph.add_edge(n1, n2, data);
    }
    let first = graph.node_indices().next().unwrap();
    let last = graph.node_indices().last().unwrap();
    let data = edge_data(random);
    graph.add_edge(last, first, data);

    let target_edge_amount =
        (node_amount + extra_edge_amount).min(node_amount * node_amount.saturating_sub(1));
    while graph.edge_count() < target_edge_amount {
        let n1 = graph.node_indices().choose(random).unwrap();
        let n2 = graph.node_indices().choose(random).unwrap();

        if n1 != n2 && !graph.contains_edge_between(n1, n2) {
            let data = edge_data(random);
            graph.add_edge(n1, n2, data);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{create_complete_graph, create_random_hamiltonian_graph};
    use crate::algo::cycles::contains_directed_cycle;
    use crate::implementation::petgraph_impl;
    use crate::index::GraphIndex;
    use crate::interface::ImmutableGraphContainer;
    use rand::SeedableRng;

    #[test]
    fn test_create_complete_graph() {
        let mut graph = petgraph_impl::new::<(), usize>();
        create_complete_graph(&mut graph, 4, |n1, n2| n1.as_usize() * 10 + n2.as_usize());
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 12);
    }

    #[test]
    fn test_create_random_hamiltonian_graph() {
        let mut graph = petgraph_impl::new::<(), usize>();
        let mut random = rand_chacha::ChaCha8Rng::seed_from_u64(17);
        create_random_hamiltonian_graph(
            &mut graph,
            10,
            15,
            &mut |random: &mut rand_chacha::ChaCha8Rng| rand::Rng::gen_range(random, 1..100),
            &mut random,
        );
        assert_eq!(graph.node_count(), 10);
        assert_eq!(graph.edge_count(), 25);
        // The ring makes the graph cyclic by construction.
        assert!(contains_directed_cycle(&graph));
    }
}
