use crate::algo::weight::GraphWeight;
use crate::index::GraphIndex;
use crate::interface::StaticGraph;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Computes the length of a shortest path from `source` to `target`, or `None`
/// if `target` is unreachable from `source`.
///
/// This is the standard lazy-deletion variant of Dijkstra's algorithm: stale
/// queue entries are skipped when popped instead of being updated in place.
/// Edge weights are taken directly from the edge data.
pub fn shortest_path_len<WeightType: GraphWeight, Graph: StaticGraph<EdgeData = WeightType>>(
    graph: &Graph,
    source: Graph::NodeIndex,
    target: Graph::NodeIndex,
) -> Option<WeightType> {
    let mut node_weights = vec![WeightType::infinity(); graph.node_count()];
    let mut queue = BinaryHeap::new();
    node_weights[source.as_usize()] = WeightType::zero();
    queue.push(Reverse((WeightType::zero(), source)));

    while let Some(Reverse((weight, node))) = queue.pop() {
        // Skip entries that were superseded by a cheaper path.
        if weight > node_weights[node.as_usize()] {
            continue;
        }
        if node == target {
            return Some(weight);
        }

        for neighbor in graph.out_neighbors(node) {
            let neighbor_weight = weight.saturating_add(*graph.edge_data(neighbor.edge_id));
            let known_weight = &mut node_weights[neighbor.node_id.as_usize()];
            if neighbor_weight < *known_weight {
                *known_weight = neighbor_weight;
                queue.push(Reverse((neighbor_weight, neighbor.node_id)));
            }
        }
    }

    None
}
