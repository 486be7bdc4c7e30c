error_chain! {
    errors {
        /// The input graph contains no nodes, so there is nothing to solve.
        EmptyGraph {
            description("the input graph contains no nodes")
            display("the input graph contains no nodes")
        }
    }
}
