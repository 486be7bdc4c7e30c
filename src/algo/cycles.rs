use crate::index::GraphIndex;
use crate::interface::StaticGraph;
use std::collections::VecDeque;

/// Returns true if the graph contains a directed cycle.
///
/// This is a pure query on the current edge set of the graph. It peels nodes of
/// in-degree zero in topological order and reports a cycle iff some nodes remain
/// unpeeled. Parallel edges and self loops are handled correctly.
pub fn contains_directed_cycle<Graph: StaticGraph>(graph: &Graph) -> bool {
    let mut in_degrees = vec![0usize; graph.node_count()];
    for node in graph.node_indices() {
        for neighbor in graph.out_neighbors(node) {
            in_degrees[neighbor.node_id.as_usize()] += 1;
        }
    }

    let mut queue: VecDeque<_> = graph
        .node_indices()
        .filter(|node| in_degrees[node.as_usize()] == 0)
        .collect();
    let mut peeled = 0;

    while let Some(node) = queue.pop_front() {
        peeled += 1;
        for neighbor in graph.out_neighbors(node) {
            let in_degree = &mut in_degrees[neighbor.node_id.as_usize()];
            *in_degree -= 1;
            if *in_degree == 0 {
                queue.push_back(neighbor.node_id);
            }
        }
    }

    peeled < graph.node_count()
}

/// Returns true if the graph is a single directed cycle visiting every node exactly once.
pub fn is_hamiltonian_cycle<Graph: StaticGraph>(graph: &Graph) -> bool {
    let node_count = graph.node_count();
    if node_count == 0 || graph.edge_count() != node_count {
        return false;
    }
    for node in graph.node_indices() {
        if graph.out_degree(node) != 1 || graph.in_degree(node) != 1 {
            return false;
        }
    }

    // All degrees are one, so the graph decomposes into disjoint simple cycles.
    // It is Hamiltonian iff the cycle through the first node has full length.
    let start = match graph.node_indices().next() {
        Some(start) => start,
        None => return false,
    };
    let mut current = start;
    let mut length = 0;
    loop {
        current = match graph.out_neighbors(current).next() {
            Some(neighbor) => neighbor.node_id,
            None => return false,
        };
        length += 1;
        if current == start {
            break;
        }
        if length > node_count {
            return false;
        }
    }
    length == node_count
}
