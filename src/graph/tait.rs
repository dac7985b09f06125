//! The Tait edge-coloring algorithm: full reduction to the minimal cubic graph, trivial
//! coloring there, then restoring each reduction step while recoloring along bicolor cycles
//! so the 3-coloring stays proper at every intermediate graph.

use super::{BicolorCycle, Graph, Id, ReduceHistory, ReduceHistoryStep};
use crate::error::{GraphError, GraphResult};

impl Graph {
    /// Produces a proper Tait edge 3-coloring of this cubic multigraph in place.
    /// Precondition: the graph is cubic. Fails with [`GraphError::Infeasible`] if a
    /// restoration step cannot find a usable Kempe chain (see module-level notes on bridged
    /// cubic multigraphs).
    pub fn edges_coloring_for_cubic_graph_with_bicolor_cycles_algorithm(&mut self) -> GraphResult<()> {
        debug_assert!(self.is_cubic(), "graph must be cubic");

        let mut history = ReduceHistory::new();
        self.full_reduce(Some(&mut history))?;
        debug_assert!(self.is_minimal_cubic(), "full reduce must reach the minimal cubic graph");

        let minimal_edges: Vec<Id> = self.edges().iter().map(|e| e.id()).collect();
        for (color, &e_id) in minimal_edges.iter().enumerate() {
            self.get_edge_mut(e_id)?.set_color(color as i32);
        }

        while !history.is_empty() {
            let step = *history.last().unwrap();
            if step.is_reduce_by_parallel_edge() {
                self.restore_and_repaint_parallel(&step)?;
            } else {
                self.restore_and_repaint_unique(&step)?;
            }
            history.pop();
        }

        self.arrange_objects_increasing_ids();
        debug_assert!(self.is_edges_coloring_correct(), "final coloring is not proper");
        Ok(())
    }

    fn restore_and_repaint_parallel(&mut self, step: &ReduceHistoryStep) -> GraphResult<()> {
        let result_color = self.get_edge(step.result_e1_id)?.color();
        self.restore_step_parallel(step)?;

        self.get_edge_mut(step.v1_e1_id)?.set_color(result_color);
        self.get_edge_mut(step.v2_e1_id)?.set_color(result_color);
        self.greedy_paint_edge(step.v1_e2_id)?;
        self.greedy_paint_edge(step.e_id)?;
        Ok(())
    }

    fn restore_and_repaint_unique(&mut self, step: &ReduceHistoryStep) -> GraphResult<()> {
        let c1 = self.get_edge(step.result_e1_id)?.color();
        let c2 = self.get_edge(step.result_e2_id)?.color();

        if c1 != c2 {
            let bc = BicolorCycle::build(self, step.result_e1_id, c2)?;
            if bc.has(step.result_e2_id) {
                return self.repaint_unique(step, &bc);
            }
            bc.switch_colors(self)?;
        }

        self.restore_and_repaint_unique_matched_colors(step)
    }

    /// Handles the case where `result_e1` and `result_e2` currently share the same color: one
    /// of the two colors not equal to that shared color must close a bicolor cycle back to
    /// `result_e2` (the Kempe-chain argument for cubic graphs); if neither does, the input
    /// was not a graph admitting a Tait coloring via this reduction order.
    fn restore_and_repaint_unique_matched_colors(&mut self, step: &ReduceHistoryStep) -> GraphResult<()> {
        let shared_color = self.get_edge(step.result_e1_id)?.color();
        for other in 0..3 {
            if other == shared_color {
                continue;
            }
            let bc = BicolorCycle::build(self, step.result_e1_id, other)?;
            if bc.has(step.result_e2_id) {
                return self.repaint_unique(step, &bc);
            }
        }
        Err(GraphError::Infeasible(
            "no bicolor cycle connects the two result edges; impossible to restore with Tait coloring".into(),
        ))
    }

    /// Common tail shared by both cases of unique-edge restoration: narrows the recoloring
    /// swap to the arc between the two result edges, restores the step's vertices and edges,
    /// colors the new central edge with the one color absent from the cycle, then greedily
    /// paints the four side edges.
    ///
    /// Greedy painting stays within `{0, 1, 2}` here because each side edge's far endpoint
    /// already carries two of the three colors (the two edges that survive unchanged from
    /// the pre-restoration vertex) and its near endpoint, freshly created, carries only the
    /// one color just assigned to the central edge plus whichever color the cycle swap left
    /// on the corresponding result edge.
    fn repaint_unique(&mut self, step: &ReduceHistoryStep, bc: &BicolorCycle) -> GraphResult<()> {
        let e_color = 3 - bc.sum_colors(self)?;
        bc.switch_colors_between(self, step.result_e1_id, step.result_e2_id)?;

        self.restore_step_unique(step)?;
        self.get_edge_mut(step.e_id)?.set_color(e_color);

        for &side in &[step.v1_e1_id, step.v1_e2_id, step.v2_e1_id, step.v2_e2_id] {
            self.greedy_paint_edge(side)?;
        }
        debug_assert!(
            [step.v1_e1_id, step.v1_e2_id, step.v2_e1_id, step.v2_e2_id]
                .iter()
                .all(|&id| (0..3).contains(&self.get_edge(id).unwrap().color())),
            "side edge repaint produced a color outside 0..3"
        );
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::graph::factory;

    #[test]
    fn tetrahedron_histogram_is_two_two_two() {
        let mut g = factory::create_tetrahedron_graph();
        g.edges_coloring_for_cubic_graph_with_bicolor_cycles_algorithm()
            .unwrap();
        assert!(g.is_edges_coloring_correct());
        assert_eq!(g.fill_edges_colors_histogram(), vec![2, 2, 2]);
    }

    #[test]
    fn cube_histogram_is_four_four_four() {
        let mut g = factory::create_cube_graph();
        g.edges_coloring_for_cubic_graph_with_bicolor_cycles_algorithm()
            .unwrap();
        assert!(g.is_edges_coloring_correct());
        assert_eq!(g.fill_edges_colors_histogram(), vec![4, 4, 4]);
    }

    #[test]
    fn six_prism_greedy_uses_three_colors() {
        let mut g = factory::create_prism_graph(6).unwrap();
        let colors_used = g.edges_coloring_greedy().unwrap();
        assert_eq!(colors_used, 3);
        assert!(g.is_edges_coloring_correct());
    }
}
