//! An exact solver for the traveling salesman problem on directed graphs.
//!
//! The solver searches for a minimum-cost Hamiltonian tour using branch and
//! bound over cost-matrix reductions. The search space is partitioned into
//! [`Subproblem`]s, each owning an exclusive cost-reduced copy of the remaining
//! graph together with a partial tour of irrevocably selected edges. Subproblems
//! are explored in best-first order through a [`Frontier`] keyed by
//! [`SubproblemPriority`], so the first complete tour popped from the frontier
//! is guaranteed to be optimal.
//!
//! Infeasibility is not an error: a subproblem that cannot be completed into a
//! tour carries an infinite lower bound and is silently discarded by the
//! frontier, which is the pruning mechanism of branch and bound.

/// The priority queue of live subproblems.
pub mod frontier;
/// The priority ordering of subproblems.
pub mod priority;
/// The search loop.
pub mod solver;
/// The subproblem representation and its reduction and branching steps.
pub mod subproblem;

pub use frontier::Frontier;
pub use priority::SubproblemPriority;
pub use solver::{DefaultTspSolver, TspSolver, TspStatus};
pub use subproblem::Subproblem;
