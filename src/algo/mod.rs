/// Algorithms related to directed cycles, i.e. checking whether a graph is acyclic
/// or forms a single Hamiltonian cycle.
pub mod cycles;
/// Dijkstra's shortest path algorithm.
pub mod dijkstra;
/// Algorithms to create certain parameterisable graph classes, like complete graphs
/// or random Hamiltonian graphs.
pub mod predefined_graphs;
/// Algorithms for graph traversals, i.e. preorder breadth and depth first search.
pub mod traversal;
/// An exact branch-and-bound solver for the traveling salesman problem.
pub mod tsp;
/// A weight type usable as graph edge data in cost-based algorithms.
pub mod weight;
