//! Kempe chains: cycles of edges alternating between two fixed colors.

use super::{Graph, Id};
use crate::error::{GraphError, GraphResult};

/// A closed walk of edges whose colors alternate between two fixed values, built outward
/// from a seed edge. Used to recolor a cubic graph one chain at a time while restoring a
/// reduction step (the Tait/Kempe-chain argument).
#[derive(Debug, Clone)]
pub struct BicolorCycle {
    edges: Vec<Id>,
}

impl BicolorCycle {
    /// Walks from `seed_edge`'s first endpoint to its second, alternating between
    /// `seed_edge`'s current color and `other_color`, until the walk returns to the start.
    /// Precondition: `seed_edge`'s color differs from `other_color`.
    pub fn build(graph: &Graph, seed_edge_id: Id, other_color: i32) -> GraphResult<BicolorCycle> {
        let seed = graph.get_edge(seed_edge_id)?;
        let seed_color = seed.color();
        debug_assert!(
            seed_color != other_color,
            "bicolor cycle needs two distinct colors"
        );
        let sum = seed_color + other_color;
        let start = seed.a();
        let mut current = seed.b();
        let mut edges = vec![seed_edge_id];
        let mut next_color = other_color;

        while current != start {
            let v = graph.get_vertex(current)?;
            let last = *edges.last().unwrap();
            let next_edge = v
                .edge_ids()
                .iter()
                .copied()
                .find(|&e_id| e_id != last && graph.get_edge(e_id).map(|e| e.color()) == Ok(next_color))
                .ok_or_else(|| {
                    GraphError::Structural(format!(
                        "no edge colored {} at vertex v{} while building bicolor cycle",
                        next_color, current
                    ))
                })?;
            edges.push(next_edge);
            current = graph.neighbour(current, next_edge)?;
            next_color = sum - next_color;
        }

        debug_assert!(edges.len() % 2 == 0, "bicolor cycle must have even length");
        Ok(BicolorCycle { edges })
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn has(&self, edge_id: Id) -> bool {
        self.edges.contains(&edge_id)
    }

    pub fn edges(&self) -> &[Id] {
        &self.edges
    }

    /// Sum of this cycle's two colors; the one color in `{0, 1, 2}` not on the cycle is
    /// `3 - sum_colors()`.
    pub fn sum_colors(&self, graph: &Graph) -> GraphResult<i32> {
        let c0 = graph.get_edge(self.edges[0])?.color();
        let c1 = graph.get_edge(*self.edges.get(1).unwrap_or(&self.edges[0]))?.color();
        Ok(c0 + c1)
    }

    /// Flips every edge on the cycle to the other of the two colors.
    pub fn switch_colors(&self, graph: &mut Graph) -> GraphResult<()> {
        let sum = self.sum_colors(graph)?;
        for &e_id in &self.edges {
            let e = graph.get_edge_mut(e_id)?;
            let c = e.color();
            e.set_color(sum - c);
        }
        Ok(())
    }

    /// Flips colors only on the arc of the cycle strictly between the first and second
    /// occurrence (in cycle order) of `e1` and `e2`; `e1` and `e2` themselves keep their
    /// current color.
    pub fn switch_colors_between(&self, graph: &mut Graph, e1: Id, e2: Id) -> GraphResult<()> {
        let sum = self.sum_colors(graph)?;
        let mut switching = false;
        for &e_id in &self.edges {
            if e_id == e1 || e_id == e2 {
                if switching {
                    break;
                }
                switching = true;
                continue;
            }
            if switching {
                let e = graph.get_edge_mut(e_id)?;
                let c = e.color();
                e.set_color(sum - c);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::graph::factory;

    #[test]
    fn cycle_over_tetrahedron_is_even_and_alternates() {
        let mut g = factory::create_tetrahedron_graph();
        g.edges_coloring_greedy().unwrap();
        let seed_id = g.edge_at(0).unwrap().id();
        let other = (g.edge_at(0).unwrap().color() + 1) % 3;
        let bc = BicolorCycle::build(&g, seed_id, other).unwrap();
        assert_eq!(bc.len() % 2, 0);
        assert!(bc.has(seed_id));
    }

    #[test]
    fn switch_colors_is_involution() {
        let mut g = factory::create_tetrahedron_graph();
        g.edges_coloring_greedy().unwrap();
        let seed_id = g.edge_at(0).unwrap().id();
        let other = (g.edge_at(0).unwrap().color() + 1) % 3;
        let bc = BicolorCycle::build(&g, seed_id, other).unwrap();
        let before: Vec<i32> = bc.edges().iter().map(|&id| g.get_edge(id).unwrap().color()).collect();
        bc.switch_colors(&mut g).unwrap();
        bc.switch_colors(&mut g).unwrap();
        let after: Vec<i32> = bc.edges().iter().map(|&id| g.get_edge(id).unwrap().color()).collect();
        assert_eq!(before, after);
    }
}
