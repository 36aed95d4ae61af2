use super::*;

/// High-speed rail network, every connection in both directions
fn tgv_graph() -> Graph<&'static str> {
    let mut graph = Graph::new();
    for (a, b, w) in [
        ("Paris", "Lille", 204.0),
        ("Paris", "Rennes", 355.0),
        ("Paris", "Bordeaux", 499.0),
        ("Paris", "Metz", 330.0),
        ("Paris", "Lyon", 391.0),
        ("Lyon", "Marseille", 278.0),
        ("Lyon", "Strasbourg", 382.0),
        ("Metz", "Strasbourg", 129.0),
        ("Bordeaux", "Marseille", 505.0),
    ] {
        graph.insert_undirected_edge(a, b, w).unwrap();
    }
    graph.sort_adjacency();
    graph
}

fn numeric_graph(edges: &[(u32, u32, f64)]) -> Graph<u32> {
    let mut graph = Graph::new();
    for &(from, to, weight) in edges {
        graph.insert_edge(from, to, weight).unwrap();
    }
    graph.sort_adjacency();
    graph
}

/// Minimum cost over every simple path from `source`
fn brute_force<N: NodeId>(graph: &Graph<N>, source: &N) -> BTreeMap<N, f64> {
    fn walk<N: NodeId>(
        graph: &Graph<N>,
        node: &N,
        cost: f64,
        on_path: &mut BTreeSet<N>,
        best: &mut BTreeMap<N, f64>,
    ) {
        let entry = best.entry(node.clone()).or_insert(f64::INFINITY);
        if cost < *entry {
            *entry = cost;
        }
        on_path.insert(node.clone());
        for edge in graph.neighbors(node) {
            if !on_path.contains(&edge.to) {
                walk(graph, &edge.to, cost + edge.weight.value(), on_path, best);
            }
        }
        on_path.remove(node);
    }

    let mut best = BTreeMap::new();
    walk(graph, source, 0.0, &mut BTreeSet::new(), &mut best);
    best
}

/// Every consecutive pair must be an edge, and the weights must add up
fn assert_valid_path<N: NodeId>(graph: &Graph<N>, path: &[N], expected: Weight) {
    let mut total = Weight::ZERO;
    for pair in path.windows(2) {
        let edge = graph
            .neighbors(&pair[0])
            .iter()
            .filter(|e| e.to == pair[1])
            .min_by_key(|e| e.weight)
            .unwrap_or_else(|| panic!("missing edge {} -> {}", pair[0], pair[1]));
        total = total + edge.weight;
    }
    assert_eq!(total, expected);
}

#[test]
fn test_metz_to_lyon_via_strasbourg() {
    let graph = tgv_graph();
    let (distance, path) = shortest_path_to(&graph, &"Metz", &"Lyon").unwrap();
    assert_eq!(distance.value(), 511.0);
    assert_eq!(path, vec!["Metz", "Strasbourg", "Lyon"]);
}

#[test]
fn test_full_distances_from_metz() {
    let graph = tgv_graph();
    let result = shortest_paths(&graph, &"Metz").unwrap();

    let expected = [
        ("Bordeaux", 829.0),
        ("Lille", 534.0),
        ("Lyon", 511.0),
        ("Marseille", 789.0),
        ("Metz", 0.0),
        ("Paris", 330.0),
        ("Rennes", 685.0),
        ("Strasbourg", 129.0),
    ];
    for (node, distance) in expected {
        assert_eq!(result.distance_to(&node).unwrap().value(), distance, "{node}");
    }
    assert_eq!(result.distances.len(), 8);
    assert_eq!(
        result.path_to(&"Bordeaux").unwrap(),
        vec!["Metz", "Paris", "Bordeaux"]
    );
    assert_eq!(
        result.path_to(&"Marseille").unwrap(),
        vec!["Metz", "Strasbourg", "Lyon", "Marseille"]
    );
}

#[test]
fn test_initialize() {
    let graph = tgv_graph();
    let state = initialize(&graph, &"Metz").unwrap();

    assert_eq!(state.distances.len(), 8);
    for (node, distance) in &state.distances {
        if *node == "Metz" {
            assert_eq!(*distance, Weight::ZERO);
        } else {
            assert_eq!(*distance, Weight::INFINITY);
        }
    }
    assert_eq!(
        state.predecessors,
        BTreeMap::from([("Metz", "Metz")])
    );
    assert!(state.visited.is_empty());
}

#[test]
fn test_frontier_minimum_skips_visited() {
    let graph = tgv_graph();
    let mut state = initialize(&graph, &"Metz").unwrap();
    state.visited = ["Metz", "Strasbourg", "Paris", "Lyon", "Lille", "Rennes", "Marseille"]
        .into_iter()
        .collect();
    for (node, distance) in [
        ("Paris", 330.0),
        ("Lille", 534.0),
        ("Rennes", 685.0),
        ("Bordeaux", 829.0),
        ("Lyon", 511.0),
        ("Marseille", 789.0),
        ("Strasbourg", 129.0),
    ] {
        state
            .distances
            .insert(node, Weight::new(distance).unwrap());
    }

    let (distance, node) = state.frontier_minimum().unwrap();
    assert_eq!(distance.value(), 829.0);
    assert_eq!(node, "Bordeaux");

    state.visited.insert("Bordeaux");
    assert_eq!(state.frontier_minimum(), None);
}

#[test]
fn test_frontier_minimum_ignores_infinite() {
    let mut graph = Graph::new();
    graph.insert_unit_edge("A", "B");
    let mut state = initialize(&graph, &"A").unwrap();
    state.visited.insert("A");
    // B is still at infinity: nothing left to finalize
    assert_eq!(state.frontier_minimum(), None);
}

#[test]
fn test_unreachable_target_is_no_path() {
    let mut graph = Graph::new();
    graph.insert_edge("A", "B", 2.0).unwrap();
    graph.insert_edge("C", "D", 2.0).unwrap();

    let err = shortest_path_to(&graph, &"A", &"D").unwrap_err();
    assert!(matches!(err, RailError::NoPath { .. }));

    let result = shortest_paths(&graph, &"A").unwrap();
    assert_eq!(result.distance_to(&"D"), Some(Weight::INFINITY));
    assert!(!result.is_reachable(&"D"));
    assert!(!result.predecessors.contains_key("D"));
    assert!(matches!(
        result.path_to(&"D"),
        Err(RailError::NoPath { .. })
    ));
}

#[test]
fn test_source_without_outgoing_edges_terminates() {
    let mut graph = Graph::new();
    graph.insert_edge("A", "B", 1.0).unwrap();

    let result = shortest_paths(&graph, &"B").unwrap();
    assert_eq!(result.distance_to(&"B"), Some(Weight::ZERO));
    assert_eq!(result.distance_to(&"A"), Some(Weight::INFINITY));
    assert!(matches!(
        shortest_path_to(&graph, &"B", &"A"),
        Err(RailError::NoPath { .. })
    ));
}

#[test]
fn test_leaf_target_is_reachable() {
    let mut graph = Graph::new();
    graph.insert_edge("A", "B", 3.0).unwrap();
    let (distance, path) = shortest_path_to(&graph, &"A", &"B").unwrap();
    assert_eq!(distance.value(), 3.0);
    assert_eq!(path, vec!["A", "B"]);
}

#[test]
fn test_source_equals_target() {
    let graph = tgv_graph();
    let (distance, path) = shortest_path_to(&graph, &"Lille", &"Lille").unwrap();
    assert_eq!(distance, Weight::ZERO);
    assert_eq!(path, vec!["Lille"]);
}

#[test]
fn test_unknown_nodes() {
    let graph = tgv_graph();
    assert!(matches!(
        shortest_paths(&graph, &"Nantes"),
        Err(RailError::UnknownNode { ref id }) if id == "Nantes"
    ));
    assert!(matches!(
        shortest_path_to(&graph, &"Paris", &"Nantes"),
        Err(RailError::UnknownNode { ref id }) if id == "Nantes"
    ));
    assert!(matches!(
        shortest_path_to(&graph, &"Nantes", &"Paris"),
        Err(RailError::UnknownNode { ref id }) if id == "Nantes"
    ));
}

#[test]
fn test_repeated_runs_do_not_interfere() {
    let graph = tgv_graph();
    let first = shortest_paths(&graph, &"Lille").unwrap();
    let _ = shortest_paths(&graph, &"Marseille").unwrap();
    let again = shortest_paths(&graph, &"Lille").unwrap();
    assert_eq!(first.distances, again.distances);
    assert_eq!(first.predecessors, again.predecessors);
}

#[test]
fn test_matches_brute_force() {
    let graphs = [
        numeric_graph(&[
            (0, 1, 4.0),
            (0, 2, 1.0),
            (2, 1, 2.0),
            (1, 3, 1.0),
            (2, 3, 5.0),
            (3, 4, 3.0),
            (4, 0, 1.0),
            (2, 4, 9.0),
        ]),
        // zero-weight edges
        numeric_graph(&[
            (0, 1, 0.0),
            (1, 2, 0.0),
            (0, 2, 1.0),
            (2, 3, 2.0),
            (3, 1, 0.0),
            (1, 4, 7.0),
            (3, 4, 2.0),
        ]),
        // parallel edges and a back edge
        numeric_graph(&[(0, 1, 5.0), (0, 1, 2.0), (1, 2, 2.0), (0, 2, 10.0), (2, 0, 1.0)]),
        // two components
        numeric_graph(&[(0, 1, 1.0), (1, 0, 1.0), (2, 3, 1.0)]),
    ];

    for graph in &graphs {
        for source in graph.nodes() {
            let expected = brute_force(graph, source);
            let result = shortest_paths(graph, source).unwrap();
            for node in graph.nodes() {
                let distance = result.distance_to(node).unwrap();
                match expected.get(node) {
                    Some(&cost) => {
                        assert_eq!(distance.value(), cost, "{source} -> {node}");
                        let path = result.path_to(node).unwrap();
                        assert_eq!(path.first(), Some(source));
                        assert_eq!(path.last(), Some(node));
                        assert_valid_path(graph, &path, distance);
                    }
                    None => assert_eq!(distance, Weight::INFINITY, "{source} -> {node}"),
                }
            }
        }
    }
}

#[test]
fn test_tgv_matches_brute_force() {
    let graph = tgv_graph();
    for source in graph.nodes() {
        let expected = brute_force(&graph, source);
        let result = shortest_paths(&graph, source).unwrap();
        for (node, cost) in expected {
            assert_eq!(result.distance_to(&node).unwrap().value(), cost);
        }
    }
}

#[test]
fn test_steps_report_each_finalized_node() {
    let graph = tgv_graph();
    let mut steps = Vec::new();
    let result =
        shortest_path_steps(&graph, &"Metz", Some(&"Lyon"), &mut |step| steps.push(step.clone()))
            .unwrap();

    let order: Vec<&str> = steps.iter().map(|s| s.current).collect();
    assert_eq!(order, vec!["Metz", "Strasbourg", "Paris", "Lyon"]);
    assert_eq!(
        steps.iter().map(|s| s.index).collect::<Vec<_>>(),
        vec![1, 2, 3, 4]
    );
    for step in &steps {
        assert_eq!(step.distances.get("Metz"), Some(&Weight::ZERO));
    }
    assert_eq!(steps[3].distance.value(), 511.0);
    assert_eq!(result.path_to(&"Lyon").unwrap(), vec!["Metz", "Strasbourg", "Lyon"]);
}

#[test]
fn test_steps_without_target_cover_reachable_nodes() {
    let graph = tgv_graph();
    let mut count = 0;
    let result = shortest_path_steps(&graph, &"Paris", None, &mut |_| count += 1).unwrap();
    assert_eq!(count, 8);
    assert!(result.distances.values().all(|d| d.is_finite()));
}

#[test]
fn test_steps_unknown_target() {
    let graph = tgv_graph();
    let err = shortest_path_steps(&graph, &"Paris", Some(&"Nantes"), &mut |_| {}).unwrap_err();
    assert!(matches!(err, RailError::UnknownNode { .. }));
}
