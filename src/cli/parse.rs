use railgraph_core::graph::TraversalOrder;

/// Parse traversal order from string
pub fn parse_traversal_order(s: &str) -> std::result::Result<TraversalOrder, String> {
    s.parse::<TraversalOrder>()
}
