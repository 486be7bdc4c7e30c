use crate::algo::tsp::frontier::Frontier;
use crate::algo::tsp::subproblem::Subproblem;
use crate::algo::weight::GraphWeight;
use crate::index::GraphIndex;
use crate::interface::{DynamicGraph, StaticGraph};

/// The outcome of a TSP search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TspStatus {
    /// The search found a minimum-cost Hamiltonian tour.
    Optimal,
    /// The search space is exhausted and the graph has no Hamiltonian tour.
    Infeasible,
    /// The search was cancelled before reaching a verdict.
    Cancelled,
}

/// An exact branch-and-bound solver for the traveling salesman problem.
///
/// The solver copies the input graph into its own working representation, so
/// the input is not modified and does not need to outlive the solver. Edge
/// costs are sampled exactly once per input edge through the cost function
/// passed to [`TspSolver::new`]; parallel edges collapse to their cheapest
/// representative.
pub struct TspSolver<Graph, WeightType> {
    frontier: Frontier<Graph, WeightType>,
    best_cost: WeightType,
    result: Option<Graph>,
    node_count: usize,
}

/// A TSP solver over the default working graph representation.
pub type DefaultTspSolver<WeightType> =
    TspSolver<petgraph::graph::DiGraph<(), WeightType, usize>, WeightType>;

impl<Graph, WeightType> TspSolver<Graph, WeightType>
where
    Graph: DynamicGraph<EdgeData = WeightType> + Default + Clone,
    Graph::NodeData: Default,
    WeightType: GraphWeight,
{
    /// Creates a solver for the given graph, reading the cost of each edge
    /// through `cost`.
    ///
    /// Returns an error if the graph contains no nodes. A graph without a
    /// Hamiltonian tour is not an error, the search reports it as
    /// [`TspStatus::Infeasible`].
    pub fn new<InputGraph, CostFn>(
        graph: &InputGraph,
        mut cost: CostFn,
    ) -> crate::error::Result<Self>
    where
        InputGraph: StaticGraph,
        CostFn: FnMut(InputGraph::EdgeIndex) -> WeightType,
    {
        if graph.node_count() == 0 {
            bail!(crate::error::ErrorKind::EmptyGraph);
        }

        let mut remaining = Graph::default();
        let mut tour = Graph::default();
        for _ in 0..graph.node_count() {
            remaining.add_node(Default::default());
            tour.add_node(Default::default());
        }
        for edge_id in graph.edge_indices() {
            let endpoints = graph.edge_endpoints(edge_id);
            let weight = cost(edge_id);
            let from = Graph::NodeIndex::from(endpoints.from_node.as_usize());
            let to = Graph::NodeIndex::from(endpoints.to_node.as_usize());
            // Parallel edges collapse to their cheapest representative.
            if let Some(existing) = remaining.try_edge_between(from, to) {
                let known_weight = remaining.edge_data_mut(existing);
                if weight < *known_weight {
                    *known_weight = weight;
                }
            } else {
                remaining.add_edge(from, to, weight);
            }
        }

        let node_count = graph.node_count();
        let mut frontier = Frontier::new();
        frontier.push(Subproblem::new(remaining, tour, WeightType::zero()));
        Ok(Self {
            frontier,
            best_cost: WeightType::infinity(),
            result: None,
            node_count,
        })
    }

    /// Runs the search to completion.
    pub fn run(&mut self) -> TspStatus {
        self.run_cancellable(|| false)
    }

    /// Runs the search, polling `cancelled` once per iteration. A search that
    /// already found an optimal tour reports [`TspStatus::Optimal`] again
    /// without further work.
    pub fn run_cancellable(&mut self, mut cancelled: impl FnMut() -> bool) -> TspStatus {
        if self.result.is_some() {
            return TspStatus::Optimal;
        }

        info!(
            "Searching for an optimal tour over {} nodes",
            self.node_count
        );
        let mut expanded = 0u64;
        loop {
            if cancelled() {
                info!("Search cancelled after expanding {} subproblems", expanded);
                return TspStatus::Cancelled;
            }

            let subproblem = match self.frontier.pop() {
                Some(subproblem) => subproblem,
                None => {
                    info!(
                        "Search exhausted after expanding {} subproblems, the graph has no Hamiltonian tour",
                        expanded
                    );
                    return TspStatus::Infeasible;
                }
            };

            // The frontier is ordered by lower bound, so the first complete
            // tour popped is optimal.
            if subproblem.is_result_ready() {
                self.best_cost = subproblem.lower_bound();
                info!(
                    "Found an optimal tour of cost {:?} after expanding {} subproblems",
                    self.best_cost, expanded
                );
                self.result = Some(subproblem.into_tour());
                return TspStatus::Optimal;
            }

            if let Some((taken, dropped)) = subproblem.split() {
                self.frontier.push(taken);
                self.frontier.push(dropped);
            }

            expanded += 1;
            if expanded % 10_000 == 0 {
                debug!(
                    "Expanded {} subproblems, {} live in the frontier",
                    expanded,
                    self.frontier.len()
                );
            }
        }
    }

    /// The cost of the optimal tour, or infinity if no tour has been found.
    pub fn best_cost(&self) -> WeightType {
        self.best_cost
    }

    /// The optimal tour as a graph over the same node indices as the input,
    /// or `None` if no tour has been found. The edge data of the tour carry no
    /// meaning, the tour cost is reported by [`TspSolver::best_cost`].
    pub fn result_tour(&self) -> Option<&Graph> {
        self.result.as_ref()
    }

    /// The optimal tour as the sequence of nodes visited from the first node,
    /// or `None` if no tour has been found.
    pub fn tour_nodes(&self) -> Option<Vec<Graph::NodeIndex>> {
        let tour = self.result.as_ref()?;
        let start = tour.node_indices().next()?;
        let mut nodes = vec![start];
        let mut current = start;
        loop {
            let next = tour.out_neighbors(current).next()?.node_id;
            if next == start {
                break;
            }
            nodes.push(next);
            current = next;
        }
        Some(nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::{DefaultTspSolver, TspStatus};
    use crate::algo::predefined_graphs::{create_complete_graph, create_random_hamiltonian_graph};
    use crate::algo::weight::GraphWeight;
    use crate::implementation::petgraph_impl;
    use crate::index::GraphIndex;
    use crate::interface::{
        DynamicGraph, ImmutableGraphContainer, MutableGraphContainer, StaticGraph,
    };
    use rand::SeedableRng;

    fn add_symmetric_edge<Graph: DynamicGraph<EdgeData = usize>>(
        graph: &mut Graph,
        from: Graph::NodeIndex,
        to: Graph::NodeIndex,
        weight: usize,
    ) {
        graph.add_edge(from, to, weight);
        graph.add_edge(to, from, weight);
    }

    /// The minimum weight over all parallel edges `(from, to)`, or `None` if
    /// there is no such edge.
    fn min_weight_between<Graph: StaticGraph<EdgeData = usize>>(
        graph: &Graph,
        from: Graph::NodeIndex,
        to: Graph::NodeIndex,
    ) -> Option<usize> {
        graph
            .edges_between(from, to)
            .map(|edge_id| *graph.edge_data(edge_id))
            .min()
    }

    fn weight_matrix<Graph: StaticGraph<EdgeData = usize>>(
        graph: &Graph,
    ) -> Vec<Vec<Option<usize>>> {
        let nodes: Vec<_> = graph.node_indices().collect();
        nodes
            .iter()
            .map(|&from| {
                nodes
                    .iter()
                    .map(|&to| {
                        if from == to {
                            None
                        } else {
                            min_weight_between(graph, from, to)
                        }
                    })
                    .collect()
            })
            .collect()
    }

    fn brute_force_cheapest_tour(weights: &[Vec<Option<usize>>]) -> Option<usize> {
        fn recurse(
            weights: &[Vec<Option<usize>>],
            visited: &mut [bool],
            current: usize,
            visited_amount: usize,
            cost: usize,
            best: &mut Option<usize>,
        ) {
            if visited_amount == weights.len() {
                if let Some(closing) = weights[current][0] {
                    let total = cost + closing;
                    if best.map_or(true, |best| total < best) {
                        *best = Some(total);
                    }
                }
                return;
            }
            for next in 1..weights.len() {
                if !visited[next] {
                    if let Some(weight) = weights[current][next] {
                        visited[next] = true;
                        recurse(weights, visited, next, visited_amount + 1, cost + weight, best);
                        visited[next] = false;
                    }
                }
            }
        }

        if weights.is_empty() {
            return None;
        }
        let mut visited = vec![false; weights.len()];
        visited[0] = true;
        let mut best = None;
        recurse(weights, &mut visited, 0, 1, 0, &mut best);
        best
    }

    /// Asserts that the solver's tour is a permutation of all nodes whose edge
    /// costs in the input graph sum up to the reported best cost.
    fn assert_tour_is_valid<Graph: StaticGraph<EdgeData = usize>>(
        graph: &Graph,
        solver: &DefaultTspSolver<usize>,
    ) {
        let tour_nodes = solver.tour_nodes().unwrap();
        assert_eq!(tour_nodes.len(), graph.node_count());
        let mut visited = vec![false; graph.node_count()];
        for node in &tour_nodes {
            assert!(!visited[node.as_usize()]);
            visited[node.as_usize()] = true;
        }

        let input_nodes: Vec<_> = graph.node_indices().collect();
        let mut cost = 0;
        for (index, node) in tour_nodes.iter().enumerate() {
            let next = &tour_nodes[(index + 1) % tour_nodes.len()];
            cost += min_weight_between(
                graph,
                input_nodes[node.as_usize()],
                input_nodes[next.as_usize()],
            )
            .unwrap();
        }
        assert_eq!(cost, solver.best_cost());
    }

    fn five_city_symmetric_graph() -> impl DynamicGraph<NodeData = (), EdgeData = usize> + Clone {
        let mut graph = petgraph_impl::new::<(), usize>();
        let nodes: Vec<_> = (0..5).map(|_| graph.add_node(())).collect();
        for &(from, to, weight) in &[
            (0, 1, 16),
            (0, 2, 9),
            (0, 3, 15),
            (0, 4, 3),
            (1, 2, 14),
            (1, 3, 4),
            (1, 4, 5),
            (2, 3, 4),
            (2, 4, 2),
            (3, 4, 1),
        ] {
            add_symmetric_edge(&mut graph, nodes[from], nodes[to], weight);
        }
        graph
    }

    /// A ring 0 -> 1 -> 2 -> 3 -> 4 -> 5 with forward chords but no edge back
    /// into node zero.
    fn open_ring_graph() -> impl DynamicGraph<NodeData = (), EdgeData = usize> + Clone {
        let mut graph = petgraph_impl::new::<(), usize>();
        let nodes: Vec<_> = (0..6).map(|_| graph.add_node(())).collect();
        for &(from, to, weight) in &[
            (0, 1, 10),
            (1, 2, 9),
            (2, 3, 8),
            (3, 4, 7),
            (4, 5, 10),
            (0, 2, 20),
            (1, 3, 20),
            (2, 4, 20),
            (3, 5, 20),
        ] {
            graph.add_edge(nodes[from], nodes[to], weight);
        }
        graph
    }

    #[test]
    fn test_five_city_instance_is_solved_optimally() {
        let graph = five_city_symmetric_graph();
        let mut solver =
            DefaultTspSolver::<usize>::new(&graph, |edge_id| *graph.edge_data(edge_id)).unwrap();
        assert_eq!(solver.run(), TspStatus::Optimal);
        assert_eq!(solver.best_cost(), 25);
        assert_tour_is_valid(&graph, &solver);
    }

    #[test]
    fn test_graph_without_tour_is_infeasible() {
        let graph = open_ring_graph();
        let mut solver =
            DefaultTspSolver::<usize>::new(&graph, |edge_id| *graph.edge_data(edge_id)).unwrap();
        assert_eq!(solver.run(), TspStatus::Infeasible);
        assert!(solver.best_cost().is_infinity());
        assert!(solver.result_tour().is_none());
        assert!(solver.tour_nodes().is_none());
    }

    #[test]
    fn test_single_closing_edge_forces_the_ring_tour() {
        let mut graph = open_ring_graph();
        let first = graph.node_indices().next().unwrap();
        let last = graph.node_indices().last().unwrap();
        graph.add_edge(last, first, 1);

        let mut solver =
            DefaultTspSolver::<usize>::new(&graph, |edge_id| *graph.edge_data(edge_id)).unwrap();
        assert_eq!(solver.run(), TspStatus::Optimal);
        assert_eq!(solver.best_cost(), 45);

        let tour_nodes: Vec<_> = solver
            .tour_nodes()
            .unwrap()
            .iter()
            .map(|node| node.as_usize())
            .collect();
        assert_eq!(tour_nodes, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_matches_brute_force_on_complete_graph() {
        let mut graph = petgraph_impl::new::<(), usize>();
        create_complete_graph(&mut graph, 6, |from, to| {
            (from.as_usize() * 7 + to.as_usize() * 13) % 19 + 1
        });

        let mut solver =
            DefaultTspSolver::<usize>::new(&graph, |edge_id| *graph.edge_data(edge_id)).unwrap();
        assert_eq!(solver.run(), TspStatus::Optimal);
        assert_eq!(
            Some(solver.best_cost()),
            brute_force_cheapest_tour(&weight_matrix(&graph))
        );
        assert_tour_is_valid(&graph, &solver);
    }

    #[test]
    fn test_matches_brute_force_on_random_hamiltonian_graph() {
        let mut random = rand_chacha::ChaCha8Rng::seed_from_u64(99);
        let mut graph = petgraph_impl::new::<(), usize>();
        create_random_hamiltonian_graph(
            &mut graph,
            7,
            12,
            &mut |random: &mut rand_chacha::ChaCha8Rng| rand::Rng::gen_range(random, 1..30),
            &mut random,
        );

        let mut solver =
            DefaultTspSolver::<usize>::new(&graph, |edge_id| *graph.edge_data(edge_id)).unwrap();
        assert_eq!(solver.run(), TspStatus::Optimal);
        assert_eq!(
            Some(solver.best_cost()),
            brute_force_cheapest_tour(&weight_matrix(&graph))
        );
        assert_tour_is_valid(&graph, &solver);
    }

    #[test]
    fn test_repeated_runs_are_deterministic() {
        let mut random = rand_chacha::ChaCha8Rng::seed_from_u64(4);
        let mut graph = petgraph_impl::new::<(), usize>();
        create_random_hamiltonian_graph(
            &mut graph,
            9,
            20,
            &mut |random: &mut rand_chacha::ChaCha8Rng| rand::Rng::gen_range(random, 1..50),
            &mut random,
        );

        let mut first =
            DefaultTspSolver::<usize>::new(&graph, |edge_id| *graph.edge_data(edge_id)).unwrap();
        let mut second =
            DefaultTspSolver::<usize>::new(&graph, |edge_id| *graph.edge_data(edge_id)).unwrap();
        assert_eq!(first.run(), second.run());
        assert_eq!(first.best_cost(), second.best_cost());
        assert_eq!(first.tour_nodes(), second.tour_nodes());
    }

    #[test]
    fn test_cancellation_before_the_first_iteration() {
        let graph = five_city_symmetric_graph();
        let mut solver =
            DefaultTspSolver::<usize>::new(&graph, |edge_id| *graph.edge_data(edge_id)).unwrap();
        assert_eq!(solver.run_cancellable(|| true), TspStatus::Cancelled);
        assert!(solver.best_cost().is_infinity());
        assert!(solver.result_tour().is_none());
    }

    #[test]
    fn test_empty_graph_is_rejected() {
        let graph = petgraph_impl::new::<(), usize>();
        let error = match DefaultTspSolver::<usize>::new(&graph, |_| 0) {
            Ok(_) => panic!("an empty graph must be rejected"),
            Err(error) => error,
        };
        assert!(matches!(error.0, crate::error::ErrorKind::EmptyGraph));
    }

    #[test]
    fn test_single_node_with_self_loop() {
        let mut graph = petgraph_impl::new::<(), usize>();
        let node = graph.add_node(());
        graph.add_edge(node, node, 5);

        let mut solver =
            DefaultTspSolver::<usize>::new(&graph, |edge_id| *graph.edge_data(edge_id)).unwrap();
        assert_eq!(solver.run(), TspStatus::Optimal);
        assert_eq!(solver.best_cost(), 5);
        assert_eq!(solver.tour_nodes().unwrap().len(), 1);
    }

    #[test]
    fn test_matches_brute_force_over_many_seeds() {
        for seed in 0..10 {
            let mut random = rand_chacha::ChaCha8Rng::seed_from_u64(seed);
            let mut graph = petgraph_impl::new::<(), usize>();
            create_random_hamiltonian_graph(
                &mut graph,
                6,
                7,
                &mut |random: &mut rand_chacha::ChaCha8Rng| rand::Rng::gen_range(random, 1..25),
                &mut random,
            );

            let mut solver =
                DefaultTspSolver::<usize>::new(&graph, |edge_id| *graph.edge_data(edge_id))
                    .unwrap();
            assert_eq!(solver.run(), TspStatus::Optimal);
            assert_eq!(
                Some(solver.best_cost()),
                brute_force_cheapest_tour(&weight_matrix(&graph))
            );
            assert_tour_is_valid(&graph, &solver);
        }
    }

    #[test]
    fn test_two_node_round_trip() {
        let mut graph = petgraph_impl::new::<(), usize>();
        let a = graph.add_node(());
        let b = graph.add_node(());
        graph.add_edge(a, b, 7);
        graph.add_edge(b, a, 9);

        // The tour uses both antiparallel edges.
        let mut solver =
            DefaultTspSolver::<usize>::new(&graph, |edge_id| *graph.edge_data(edge_id)).unwrap();
        assert_eq!(solver.run(), TspStatus::Optimal);
        assert_eq!(solver.best_cost(), 16);
        assert_eq!(solver.tour_nodes().unwrap().len(), 2);
    }

    #[test]
    fn test_zero_weight_edges_and_regret_ties() {
        let mut graph = petgraph_impl::new::<(), usize>();
        let nodes: Vec<_> = (0..4).map(|_| graph.add_node(())).collect();
        for &(from, to, weight) in &[
            (0, 1, 0),
            (0, 2, 1),
            (0, 3, 2),
            (1, 2, 0),
            (1, 3, 3),
            (2, 3, 0),
        ] {
            add_symmetric_edge(&mut graph, nodes[from], nodes[to], weight);
        }

        let mut solver =
            DefaultTspSolver::<usize>::new(&graph, |edge_id| *graph.edge_data(edge_id)).unwrap();
        assert_eq!(solver.run(), TspStatus::Optimal);
        assert_eq!(solver.best_cost(), 2);
        assert_tour_is_valid(&graph, &solver);
    }

    #[test]
    fn test_parallel_edges_collapse_to_the_cheapest() {
        let mut graph = petgraph_impl::new::<(), usize>();
        let nodes: Vec<_> = (0..3).map(|_| graph.add_node(())).collect();
        for &(from, to, weight) in &[(0, 1, 9), (0, 1, 2), (1, 2, 3), (2, 0, 4), (1, 2, 7)] {
            graph.add_edge(nodes[from], nodes[to], weight);
        }

        let mut solver =
            DefaultTspSolver::<usize>::new(&graph, |edge_id| *graph.edge_data(edge_id)).unwrap();
        assert_eq!(solver.run(), TspStatus::Optimal);
        assert_eq!(solver.best_cost(), 9);
    }
}
