use std::cmp::Ordering;

/// The priority of a subproblem in the frontier.
///
/// Subproblems are ordered by ascending lower bound. On equal bounds, the
/// subproblem with the longer partial tour sorts first: exploring the cheapest
/// bound first makes the first complete tour optimal, and among equal bounds,
/// preferring more complete tours reaches a feasible solution faster, which in
/// turn lets later subproblems be pruned sooner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubproblemPriority<WeightType> {
    lower_bound: WeightType,
    tour_edge_count: usize,
}

impl<WeightType> SubproblemPriority<WeightType> {
    /// Creates a new priority from a lower bound and the length of the partial tour.
    pub fn new(lower_bound: WeightType, tour_edge_count: usize) -> Self {
        Self {
            lower_bound,
            tour_edge_count,
        }
    }

    /// The lower bound of the subproblem.
    pub fn lower_bound(&self) -> &WeightType {
        &self.lower_bound
    }

    /// The amount of edges in the partial tour of the subproblem.
    pub fn tour_edge_count(&self) -> usize {
        self.tour_edge_count
    }
}

impl<WeightType: Ord> Ord for SubproblemPriority<WeightType> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.lower_bound
            .cmp(&other.lower_bound)
            .then_with(|| other.tour_edge_count.cmp(&self.tour_edge_count))
    }
}

impl<WeightType: Ord> PartialOrd for SubproblemPriority<WeightType> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::SubproblemPriority;

    #[test]
    fn test_ascending_lower_bound() {
        let cheap = SubproblemPriority::new(3usize, 0);
        let expensive = SubproblemPriority::new(5usize, 4);
        assert!(cheap < expensive);
    }

    #[test]
    fn test_equal_bounds_prefer_longer_tours() {
        let short = SubproblemPriority::new(3usize, 1);
        let long = SubproblemPriority::new(3usize, 4);
        assert!(long < short);
    }

    #[test]
    fn test_equality_requires_both_fields() {
        let a = SubproblemPriority::new(3usize, 1);
        let b = SubproblemPriority::new(3usize, 1);
        let c = SubproblemPriority::new(3usize, 2);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
