mod common;

use cityroute_lib::{
    reconstruct, reconstruct_backward, reconstruct_forward, shortest_paths, CostMode, Error,
    SearchConstraints,
};

#[test]
fn line_graph_distances_accumulate() {
    let graph = common::line_graph();
    let tree = shortest_paths(&graph, 1, CostMode::Driving, &SearchConstraints::new())
        .expect("origin known");

    assert_eq!(tree.distance_to(&graph, 1), Some(0.0));
    assert_eq!(tree.distance_to(&graph, 2), Some(5.0));
    assert_eq!(tree.distance_to(&graph, 3), Some(10.0));

    let route = reconstruct_backward(&graph, &tree, 1, 3).expect("reachable");
    assert_eq!(route.steps, vec![1, 2, 3]);
    assert_eq!(route.cost, 10.0);
}

#[test]
fn route_cost_matches_tree_distance() {
    let graph = common::city();
    let tree = shortest_paths(&graph, 1, CostMode::Driving, &SearchConstraints::new())
        .expect("origin known");

    for location in graph.locations() {
        let Some(route) = reconstruct_backward(&graph, &tree, 1, location.id) else {
            assert_eq!(tree.distance_to(&graph, location.id), Some(f64::INFINITY));
            continue;
        };
        assert_eq!(Some(route.cost), tree.distance_to(&graph, location.id));
        assert_eq!(route.origin(), Some(1));
        assert_eq!(route.destination(), Some(location.id));
    }
}

#[test]
fn driving_skips_walking_only_segments() {
    let graph = common::city();
    let tree = shortest_paths(&graph, 2, CostMode::Driving, &SearchConstraints::new())
        .expect("origin known");

    let route = reconstruct_backward(&graph, &tree, 2, 3).expect("reachable by car");
    assert_eq!(route.steps, vec![2, 5, 3]);
    assert_eq!(route.cost, 6.0);
}

#[test]
fn walking_uses_walking_costs() {
    let graph = common::city();
    let tree = shortest_paths(&graph, 1, CostMode::Walking, &SearchConstraints::new())
        .expect("origin known");

    let route = reconstruct(&graph, &tree, 1, 3).expect("reachable on foot");
    assert_eq!(route.steps, vec![1, 4, 3]);
    assert_eq!(route.cost, 52.0);
}

#[test]
fn reverse_tree_rebuilds_forward_routes() {
    let graph = common::city();
    let tree = shortest_paths(&graph, 3, CostMode::WalkingReverse, &SearchConstraints::new())
        .expect("origin known");

    let from_station = reconstruct_forward(&graph, &tree, 1, 3).expect("reachable");
    assert_eq!(from_station.steps, vec![1, 4, 3]);
    assert_eq!(Some(from_station.cost), tree.distance_to(&graph, 1));

    let from_market = reconstruct(&graph, &tree, 2, 3).expect("reachable");
    assert_eq!(from_market.steps, vec![2, 3]);
    assert_eq!(from_market.cost, 8.0);

    assert!(reconstruct_backward(&graph, &tree, 3, 1).is_none());
}

#[test]
fn avoided_segment_in_reverse_mode_blocks_travelled_direction() {
    let graph = common::city();

    let blocked = SearchConstraints::new().with_avoided_edges(graph.edges_between(2, 3));
    let tree = shortest_paths(&graph, 3, CostMode::WalkingReverse, &blocked).expect("origin known");
    let route = reconstruct_forward(&graph, &tree, 2, 3).expect("detour exists");
    assert_eq!(route.steps, vec![2, 5, 3]);
    assert_eq!(route.cost, 20.0);

    let opposite = SearchConstraints::new().with_avoided_edges(graph.edges_between(3, 2));
    let tree = shortest_paths(&graph, 3, CostMode::WalkingReverse, &opposite).expect("origin known");
    let route = reconstruct_forward(&graph, &tree, 2, 3).expect("direct walk");
    assert_eq!(route.steps, vec![2, 3]);
}

#[test]
fn avoided_vertices_are_never_entered() {
    let graph = common::city();
    let constraints = SearchConstraints::new().with_avoided_vertices([2]);
    let tree = shortest_paths(&graph, 1, CostMode::Driving, &constraints).expect("origin known");

    assert_eq!(tree.distance_to(&graph, 2), Some(f64::INFINITY));
    let route = reconstruct_backward(&graph, &tree, 1, 3).expect("reachable");
    assert_eq!(route.steps, vec![1, 4, 3]);
    assert!(!route.steps.contains(&2));
}

#[test]
fn unreachable_location_has_infinite_distance() {
    let graph = common::city();
    let tree = shortest_paths(&graph, 1, CostMode::Driving, &SearchConstraints::new())
        .expect("origin known");

    assert_eq!(tree.distance_to(&graph, 6), Some(f64::INFINITY));
    assert!(reconstruct_backward(&graph, &tree, 1, 6).is_none());
    assert_eq!(tree.distance_to(&graph, 99), None);
}

#[test]
fn unknown_origin_is_an_error() {
    let graph = common::city();
    let err = shortest_paths(&graph, 99, CostMode::Driving, &SearchConstraints::new())
        .expect_err("unknown origin");
    assert!(matches!(err, Error::UnknownLocation { id: 99 }));
}

#[test]
fn repeated_searches_agree() {
    let graph = common::city();
    let constraints = SearchConstraints::new();
    let first = shortest_paths(&graph, 1, CostMode::Driving, &constraints).expect("origin known");
    let second = shortest_paths(&graph, 1, CostMode::Driving, &constraints).expect("origin known");

    for vertex in 0..graph.vertex_count() {
        assert_eq!(first.distance(vertex).to_bits(), second.distance(vertex).to_bits());
        assert_eq!(first.predecessor(vertex), second.predecessor(vertex));
    }
}
