//! A graph data-structure and graph-algorithms crate built around an exact
//! branch-and-bound solver for the traveling salesman problem.
//!
//! Graphs are accessed through a set of traits that separate immutable queries,
//! mutation and navigation, with a `petgraph`-backed implementation provided out
//! of the box. On top of that sit a handful of classic algorithms (traversal,
//! cycle detection, shortest paths) and the `algo::tsp` module, which searches
//! for a minimum-cost Hamiltonian tour via cost-matrix reduction and best-first
//! branch and bound.

#![warn(missing_docs)]
#![recursion_limit = "1024"]
#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;

/// The graph algorithms, including the branch-and-bound TSP solver.
pub mod algo;
/// Contains the error types used by this crate.
pub mod error;
/// The graph implementations.
pub mod implementation;
/// The strongly typed node and edge indices used by the graph traits.
pub mod index;
/// The graph traits.
pub mod interface;

pub use crate::algo::tsp::{DefaultTspSolver, TspSolver, TspStatus};
