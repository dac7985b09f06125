//! Construction of common graph shapes used to drive and test the reduction and coloring
//! algorithms.

use super::Graph;
use crate::error::GraphResult;

pub fn create_empty_graph() -> Graph {
    Graph::new()
}

pub fn create_edgeless_graph(n: usize) -> Graph {
    let mut g = Graph::new();
    for _ in 0..n {
        g.new_vertex();
    }
    g
}

pub fn create_trivial_graph() -> Graph {
    create_edgeless_graph(1)
}

pub fn create_complete_graph(n: usize) -> GraphResult<Graph> {
    let mut g = create_edgeless_graph(n);
    for i in 0..n as i32 {
        for j in (i + 1)..n as i32 {
            g.add_edge(i, j)?;
        }
    }
    Ok(g)
}

pub fn create_tetrahedron_graph() -> Graph {
    create_complete_graph(4).expect("K4 construction cannot fail")
}

pub fn create_cyclic_graph(n: usize) -> GraphResult<Graph> {
    let mut g = create_edgeless_graph(n);
    g.add_cycle(0, n as i32 - 1)?;
    Ok(g)
}

/// The prism graph on `2 * half_size` vertices: two `half_size`-cycles joined by rung edges.
pub fn create_prism_graph(half_size: usize) -> GraphResult<Graph> {
    let mut g = create_edgeless_graph(2 * half_size);
    let half = half_size as i32;
    g.add_cycle(0, half - 1)?;
    g.add_cycle(half, 2 * half - 1)?;
    for i in 0..half {
        g.add_edge(i, i + half)?;
    }
    g.arrange_objects_increasing_ids();
    Ok(g)
}

pub fn create_cube_graph() -> Graph {
    create_prism_graph(4).expect("cube construction cannot fail")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_graph_has_no_vertices() {
        assert!(create_empty_graph().is_empty());
    }

    #[test]
    fn tetrahedron_is_k4() {
        let g = create_tetrahedron_graph();
        assert_eq!(g.order(), 4);
        assert_eq!(g.size(), 6);
        assert!(g.is_complete());
        assert!(g.is_cubic());
    }

    #[test]
    fn cube_is_the_three_prism() {
        let g = create_cube_graph();
        assert_eq!(g.order(), 8);
        assert_eq!(g.size(), 12);
        assert!(g.is_cubic());
    }

    #[test]
    fn cyclic_graph_is_two_regular() {
        let g = create_cyclic_graph(6).unwrap();
        assert!(g.is_regular(2));
    }
}
