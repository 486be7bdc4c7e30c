use crate::algo::cycles::{contains_directed_cycle, is_hamiltonian_cycle};
use crate::algo::tsp::priority::SubproblemPriority;
use crate::algo::weight::GraphWeight;
use crate::interface::Edge;

/// A subproblem of the TSP search.
///
/// A subproblem owns an exclusive cost-reduced copy of the remaining graph,
/// whose edge data are the reduced edge weights, together with a partial tour of
/// irrevocably selected edges over the same node set. No graph state is ever
/// shared between a subproblem and its parent or siblings.
///
/// The lower bound is a valid bound on the cost of any tour completing the
/// partial tour. It only ever grows by nonnegative reduction amounts, and an
/// infinite bound marks the subproblem as infeasible. Infeasibility is not an
/// error: infeasible subproblems are silently discarded by the frontier.
pub struct Subproblem<Graph, WeightType> {
    remaining: Graph,
    tour: Graph,
    lower_bound: WeightType,
    solved: bool,
}

impl<Graph, WeightType> Subproblem<Graph, WeightType>
where
    Graph: crate::interface::DynamicGraph<EdgeData = WeightType> + Clone,
    WeightType: GraphWeight,
{
    /// Creates a new subproblem from a remaining-graph snapshot, a partial tour
    /// and the lower bound carried over from the parent.
    ///
    /// The constructor immediately brings the subproblem into reduced form: it
    /// detects a completing final edge, deletes edges that can never be legally
    /// selected from this state, and reduces the cost matrix, accumulating all
    /// subtracted minima into the lower bound.
    pub(crate) fn new(remaining: Graph, tour: Graph, carried_cost: WeightType) -> Self {
        let mut subproblem = Self {
            remaining,
            tour,
            lower_bound: carried_cost,
            solved: false,
        };
        subproblem.check_completion();
        if !subproblem.solved {
            subproblem.remove_premature_cycle_edges();
            subproblem.reduce();
        }
        subproblem
    }

    /// If only one edge is left in the remaining graph and selecting it closes a
    /// complete Hamiltonian tour, selects it permanently and marks the
    /// subproblem as solved. Otherwise leaves the subproblem untouched.
    fn check_completion(&mut self) {
        if self.remaining.edge_count() != 1 {
            return;
        }
        let edge_id = match self.remaining.edge_indices().next() {
            Some(edge_id) => edge_id,
            None => return,
        };
        let edge = self.remaining.edge_endpoints(edge_id);
        let weight = *self.remaining.edge_data(edge_id);

        let tentative = self.tour.add_edge(edge.from_node, edge.to_node, weight);
        if is_hamiltonian_cycle(&self.tour) {
            self.lower_bound = self.lower_bound.saturating_add(weight);
            self.solved = true;
        } else {
            let _ = self.tour.remove_edge(tentative);
        }
    }

    /// Deletes every remaining edge that would close a cycle before the tour
    /// includes all nodes. Such an edge can never be legally selected from this
    /// state: a partial tour may only close into a cycle once it spans every node.
    fn remove_premature_cycle_edges(&mut self) {
        let node_count = self.remaining.node_count();
        let mut doomed = Vec::new();
        for edge_id in self.remaining.edge_indices() {
            let edge = self.remaining.edge_endpoints(edge_id);
            let tentative = self
                .tour
                .add_edge(edge.from_node, edge.to_node, WeightType::zero());
            let premature =
                self.tour.edge_count() < node_count && contains_directed_cycle(&self.tour);
            let _ = self.tour.remove_edge(tentative);
            if premature {
                doomed.push(edge);
            }
        }
        for edge in doomed {
            self.remaining.remove_edges_where(|candidate| candidate == edge);
        }
    }

    /// Classic assignment-matrix reduction: subtracts the cheapest outgoing edge
    /// weight of every node from all its outgoing edges, then likewise for the
    /// incoming direction, accumulating every subtracted minimum into the lower
    /// bound. If no edge is left at all, the subproblem is infeasible.
    fn reduce(&mut self) {
        if self.remaining.edge_count() == 0 {
            self.lower_bound = WeightType::infinity();
            return;
        }

        for node in self.remaining.node_indices() {
            let mut minimum = WeightType::infinity();
            for neighbor in self.remaining.out_neighbors(node) {
                minimum = minimum.min(*self.remaining.edge_data(neighbor.edge_id));
            }
            if !minimum.is_infinity() && minimum != WeightType::zero() {
                let edge_ids: Vec<_> = self
                    .remaining
                    .out_neighbors(node)
                    .map(|neighbor| neighbor.edge_id)
                    .collect();
                for edge_id in edge_ids {
                    let weight = self.remaining.edge_data_mut(edge_id);
                    *weight = *weight - minimum;
                }
                self.lower_bound = self.lower_bound.saturating_add(minimum);
            }
        }

        for node in self.remaining.node_indices() {
            let mut minimum = WeightType::infinity();
            for neighbor in self.remaining.in_neighbors(node) {
                minimum = minimum.min(*self.remaining.edge_data(neighbor.edge_id));
            }
            if !minimum.is_infinity() && minimum != WeightType::zero() {
                let edge_ids: Vec<_> = self
                    .remaining
                    .in_neighbors(node)
                    .map(|neighbor| neighbor.edge_id)
                    .collect();
                for edge_id in edge_ids {
                    let weight = self.remaining.edge_data_mut(edge_id);
                    *weight = *weight - minimum;
                }
                self.lower_bound = self.lower_bound.saturating_add(minimum);
            }
        }
    }

    /// Returns true if the partial tour is complete, i.e. contains one edge per node.
    pub fn is_result_ready(&self) -> bool {
        self.tour.edge_count() == self.tour.node_count()
    }

    /// The lower bound on the cost of any tour completing this subproblem's partial tour.
    pub fn lower_bound(&self) -> WeightType {
        self.lower_bound
    }

    /// The priority of this subproblem in the frontier.
    pub fn priority(&self) -> SubproblemPriority<WeightType> {
        SubproblemPriority::new(self.lower_bound, self.tour.edge_count())
    }

    /// The partial tour of this subproblem.
    pub fn tour(&self) -> &Graph {
        &self.tour
    }

    pub(crate) fn into_tour(self) -> Graph {
        self.tour
    }

    /// Chooses the edge to branch on: among the edges of reduced weight zero,
    /// the one whose exclusion would tighten the bound the most.
    ///
    /// The regret of a candidate `(u, v)` is the cheapest alternative way out of
    /// `u` plus the cheapest alternative way into `v`; a missing alternative
    /// counts as infinity. The candidate with the maximum regret wins, ties are
    /// broken towards the candidate first encountered in ascending edge index
    /// order of the remaining snapshot.
    fn choose_split_edge(&self) -> Option<Edge<Graph::NodeIndex>> {
        let mut best: Option<(WeightType, Edge<Graph::NodeIndex>)> = None;
        for edge_id in self.remaining.edge_indices() {
            if *self.remaining.edge_data(edge_id) != WeightType::zero() {
                continue;
            }
            let edge = self.remaining.edge_endpoints(edge_id);
            let regret = self.regret_of(&edge);
            match &best {
                Some((best_regret, _)) if regret <= *best_regret => {}
                _ => best = Some((regret, edge)),
            }
        }
        best.map(|(_, edge)| edge)
    }

    fn regret_of(&self, edge: &Edge<Graph::NodeIndex>) -> WeightType {
        let mut cheapest_alternative_out = WeightType::infinity();
        for neighbor in self.remaining.out_neighbors(edge.from_node) {
            if neighbor.node_id != edge.to_node {
                cheapest_alternative_out =
                    cheapest_alternative_out.min(*self.remaining.edge_data(neighbor.edge_id));
            }
        }
        let mut cheapest_alternative_in = WeightType::infinity();
        for neighbor in self.remaining.in_neighbors(edge.to_node) {
            if neighbor.node_id != edge.from_node {
                cheapest_alternative_in =
                    cheapest_alternative_in.min(*self.remaining.edge_data(neighbor.edge_id));
            }
        }
        cheapest_alternative_out.saturating_add(cheapest_alternative_in)
    }

    /// Splits this subproblem into the two children that partition its search
    /// space: one that selects the branch edge into the tour and one that
    /// excludes it from the remaining graph.
    ///
    /// Consumes the subproblem; a split subproblem is never reused. Returns
    /// `None` without producing children if the subproblem is infeasible or no
    /// branch candidate exists.
    pub fn split(self) -> Option<(Self, Self)> {
        if self.lower_bound.is_infinity() {
            return None;
        }
        let branch_edge = self.choose_split_edge()?;
        let taken = self.child_with_edge_taken(&branch_edge);
        let dropped = self.child_with_edge_dropped(&branch_edge);
        Some((taken, dropped))
    }

    fn child_with_edge_taken(&self, edge: &Edge<Graph::NodeIndex>) -> Self {
        let mut remaining = self.remaining.clone();
        // The tail contributes no further outgoing and the head no further
        // incoming tour edge; this also removes the selected edge itself. Edges
        // that would close a subtour with the grown tour, such as the reverse of
        // the selected edge, are deleted by the child's own constructor.
        remaining.clear_out_edges(edge.from_node);
        remaining.clear_in_edges(edge.to_node);

        let mut tour = self.tour.clone();
        // Branch candidates have reduced weight zero, so selecting the edge adds
        // nothing to the carried bound.
        tour.add_edge(edge.from_node, edge.to_node, WeightType::zero());
        Self::new(remaining, tour, self.lower_bound)
    }

    fn child_with_edge_dropped(&self, edge: &Edge<Graph::NodeIndex>) -> Self {
        let mut remaining = self.remaining.clone();
        remaining.remove_edges_where(|candidate| candidate == *edge);
        Self::new(remaining, self.tour.clone(), self.lower_bound)
    }
}
