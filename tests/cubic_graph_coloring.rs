use tait_graph::graph::factory;
use tait_graph::Graph;

#[test]
fn empty_graph() {
    let g = factory::create_empty_graph();
    assert!(g.is_empty());
    assert!(g.is_regular(0));
}

#[test]
fn tetrahedron_colors_with_histogram_two_two_two() {
    let mut g = factory::create_tetrahedron_graph();
    g.edges_coloring_for_cubic_graph_with_bicolor_cycles_algorithm()
        .expect("K4 is bridgeless and admits a Tait coloring");
    assert!(g.is_edges_coloring_correct());
    assert_eq!(g.fill_edges_colors_histogram(), vec![2, 2, 2]);
}

#[test]
fn cube_colors_with_histogram_four_four_four() {
    let mut g = factory::create_cube_graph();
    g.edges_coloring_for_cubic_graph_with_bicolor_cycles_algorithm()
        .expect("the cube is bridgeless and admits a Tait coloring");
    assert!(g.is_edges_coloring_correct());
    assert_eq!(g.fill_edges_colors_histogram(), vec![4, 4, 4]);
}

#[test]
fn tetrahedron_unique_reduction_reaches_minimal_cubic_with_parallel_edges() {
    let mut g = factory::create_tetrahedron_graph();
    let e_id = g
        .get_cubic_graph_unique_reduceable_edge()
        .expect("K4 has a unique-reduceable edge");
    g.reduce_by_unique_edge(e_id, None).unwrap();
    assert_eq!(g.order(), 2);
    assert_eq!(g.size(), 3);
    assert!(g.is_minimal_cubic());
    assert!(g.has_parallel_edges());
}

#[test]
fn full_reduce_then_restore_round_trips_five_prism() {
    let g1 = factory::create_prism_graph(5).unwrap();
    let mut g1_canonical = g1.clone();
    g1_canonical.arrange_objects_increasing_ids();

    let mut g2 = g1;
    let mut history = tait_graph::ReduceHistory::new();
    g2.full_reduce(Some(&mut history)).unwrap();
    assert!(g2.is_minimal_cubic());

    g2.restore_all(&mut history).unwrap();
    assert!(Graph::is_strong_isomorphic(&g1_canonical, &g2));
}

#[test]
fn six_prism_greedy_coloring_uses_three_colors() {
    let mut g = factory::create_prism_graph(6).unwrap();
    let colors_used = g.edges_coloring_greedy().unwrap();
    assert_eq!(colors_used, 3);
    assert!(g.is_edges_coloring_correct());
}
