use crate::algo::tsp::priority::SubproblemPriority;
use crate::algo::tsp::subproblem::Subproblem;
use crate::algo::weight::GraphWeight;
use crate::interface::DynamicGraph;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// The set of unexpanded subproblems of a TSP search, ordered by priority.
///
/// Subproblems with an infinite lower bound are discarded on insertion, so the
/// frontier only ever holds live branches of the search. Among subproblems of
/// equal priority, the one inserted first is popped first, which makes the
/// search deterministic.
pub struct Frontier<Graph, WeightType> {
    heap: BinaryHeap<Reverse<FrontierEntry<Graph, WeightType>>>,
    next_sequence_number: u64,
}

struct FrontierEntry<Graph, WeightType> {
    priority: SubproblemPriority<WeightType>,
    sequence_number: u64,
    subproblem: Subproblem<Graph, WeightType>,
}

impl<Graph, WeightType: Ord> PartialEq for FrontierEntry<Graph, WeightType> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.sequence_number == other.sequence_number
    }
}

impl<Graph, WeightType: Ord> Eq for FrontierEntry<Graph, WeightType> {}

impl<Graph, WeightType: Ord> PartialOrd for FrontierEntry<Graph, WeightType> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<Graph, WeightType: Ord> Ord for FrontierEntry<Graph, WeightType> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.sequence_number.cmp(&other.sequence_number))
    }
}

impl<Graph, WeightType> Frontier<Graph, WeightType>
where
    Graph: DynamicGraph<EdgeData = WeightType> + Clone,
    WeightType: GraphWeight,
{
    /// Creates an empty frontier.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_sequence_number: 0,
        }
    }

    /// Inserts a subproblem, unless its lower bound is infinite in which case
    /// it is discarded without error.
    pub fn push(&mut self, subproblem: Subproblem<Graph, WeightType>) {
        if subproblem.lower_bound().is_infinity() {
            trace!("Discarding an infeasible subproblem");
            return;
        }
        let entry = FrontierEntry {
            priority: subproblem.priority(),
            sequence_number: self.next_sequence_number,
            subproblem,
        };
        self.next_sequence_number += 1;
        self.heap.push(Reverse(entry));
    }

    /// Removes and returns the best subproblem, or `None` if the frontier is empty.
    pub fn pop(&mut self) -> Option<Subproblem<Graph, WeightType>> {
        self.heap.pop().map(|Reverse(entry)| entry.subproblem)
    }

    /// The amount of subproblems in the frontier.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if the frontier holds no subproblem.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<Graph, WeightType> Default for Frontier<Graph, WeightType>
where
    Graph: DynamicGraph<EdgeData = WeightType> + Clone,
    WeightType: GraphWeight,
{
    fn default() -> Self {
        Self::new()
    }
}
