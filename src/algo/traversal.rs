use crate::index::{GraphIndex, OptionalGraphIndex};
use crate::interface::{GraphBase, StaticGraph};
use std::collections::VecDeque;

/// A preorder breadth first search along the forward edges of a directed graph.
///
/// The traversal additionally records the preorder rank of each visited node.
pub struct PreOrderForwardBfs<'a, Graph: GraphBase> {
    graph: &'a Graph,
    queue: VecDeque<Graph::NodeIndex>,
    rank: Vec<Graph::OptionalNodeIndex>,
    current_rank: Graph::NodeIndex,
}

impl<'a, Graph: StaticGraph> PreOrderForwardBfs<'a, Graph> {
    /// Creates a new traversal that operates on the given graph starting from the given node.
    pub fn new(graph: &'a Graph, start: Graph::NodeIndex) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back(start);
        let mut rank = vec![Graph::OptionalNodeIndex::new_none(); graph.node_count()];
        rank[start.as_usize()] = Some(0).into();
        Self {
            graph,
            queue,
            rank,
            current_rank: 1.into(),
        }
    }

    /// Returns the preorder rank of the given node, or `None` if it has not been visited yet.
    pub fn rank_of(&self, node: Graph::NodeIndex) -> Option<Graph::NodeIndex> {
        self.rank[node.as_usize()].into()
    }
}

impl<'a, Graph: StaticGraph> Iterator for PreOrderForwardBfs<'a, Graph> {
    type Item = Graph::NodeIndex;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        for neighbor in self.graph.out_neighbors(node) {
            let rank_entry = &mut self.rank[neighbor.node_id.as_usize()];
            if rank_entry.is_none() {
                *rank_entry = self.current_rank.into();
                self.current_rank = self.current_rank + 1;
                self.queue.push_back(neighbor.node_id);
            }
        }
        Some(node)
    }
}

/// A preorder depth first search along the forward edges of a directed graph.
pub struct PreOrderForwardDfs<'a, Graph: GraphBase> {
    graph: &'a Graph,
    stack: Vec<Graph::NodeIndex>,
    visited: Vec<bool>,
}

impl<'a, Graph: StaticGraph> PreOrderForwardDfs<'a, Graph> {
    /// Creates a new traversal that operates on the given graph starting from the given node.
    pub fn new(graph: &'a Graph, start: Graph::NodeIndex) -> Self {
        let mut visited = vec![false; graph.node_count()];
        visited[start.as_usize()] = true;
        Self {
            graph,
            stack: vec![start],
            visited,
        }
    }
}

impl<'a, Graph: StaticGraph> Iterator for PreOrderForwardDfs<'a, Graph> {
    type Item = Graph::NodeIndex;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        for neighbor in self.graph.out_neighbors(node) {
            let visited = &mut self.visited[neighbor.node_id.as_usize()];
            if !*visited {
                *visited = true;
                self.stack.push(neighbor.node_id);
            }
        }
        Some(node)
    }
}
