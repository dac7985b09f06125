//! Topological reduction and restoration of cubic multigraphs.
//!
//! [`Graph::full_reduce`] drives any connected cubic multigraph down to the minimal cubic
//! graph (two vertices joined by three parallel edges) by repeatedly applying unique-edge
//! and parallel-edge reduction, recording enough bookkeeping in a [`ReduceHistory`] to
//! reconstruct the original graph, identifier for identifier, via [`Graph::restore_all`].

use super::{Graph, Id, ReduceHistory, ReduceHistoryStep};
use crate::error::{GraphError, GraphResult};

impl Graph {
    /// Removes `e_id` and glues each endpoint's two remaining edges into a single edge.
    /// Precondition: `e_id` is unique-reducible (§[`Graph::edge_is_cubic_unique_reduceable`]).
    pub fn reduce_by_unique_edge(
        &mut self,
        e_id: Id,
        history: Option<&mut ReduceHistory>,
    ) -> GraphResult<()> {
        debug_assert!(
            self.edge_is_cubic_unique_reduceable(e_id),
            "edge is not unique-reduceable"
        );
        let e = *self.get_edge(e_id)?;
        let (v1_id, v2_id) = (e.a(), e.b());

        self.remove_edge(e_id)?;
        debug_assert!(self.get_vertex(v1_id)?.degree() == 2);
        debug_assert!(self.get_vertex(v2_id)?.degree() == 2);

        let (new_e1, v1_e1_id, v1_e2_id) = self.glue_two_incident_edges(v1_id)?;
        let (new_e2, v2_e1_id, v2_e2_id) = self.glue_two_incident_edges(v2_id)?;

        if let Some(h) = history {
            h.remember(
                v1_id, v2_id, e_id, v1_e1_id, v1_e2_id, v2_e1_id, v2_e2_id, new_e1, new_e2,
            );
        }
        Ok(())
    }

    /// Removes both of the two parallel edges between `e_id`'s endpoints and glues the
    /// remaining hanging edges into one. Precondition: `e_id` is parallel-reducible
    /// (§[`Graph::edge_is_cubic_parallel_reduceable`]).
    pub fn reduce_by_parallel_edge(
        &mut self,
        e_id: Id,
        history: Option<&mut ReduceHistory>,
    ) -> GraphResult<()> {
        debug_assert!(
            self.edge_is_cubic_parallel_reduceable(e_id),
            "edge is not parallel-reduceable"
        );
        let e = *self.get_edge(e_id)?;
        let (v1_id, v2_id) = (e.a(), e.b());

        self.remove_edge(e_id)?;

        let e2_id = self.find_edge_between(v1_id, v2_id).ok_or_else(|| {
            GraphError::Structural(format!(
                "expected duplicate edge between v{} and v{} not found",
                v1_id, v2_id
            ))
        })?;
        self.remove_edge(e2_id)?;

        let v1_e1_id = self.get_vertex(v1_id)?.edge_id_at(0);
        let v2_e1_id = self.get_vertex(v2_id)?.edge_id_at(0);

        let (new_e, is_reversed) = self.glue_two_hanging_edges(v1_id, v2_id)?;

        if let Some(h) = history {
            if !is_reversed {
                h.remember(
                    v1_id, v2_id, e_id, v1_e1_id, e2_id, v2_e1_id, e2_id, new_e, new_e,
                );
            } else {
                h.remember(
                    v2_id, v1_id, e_id, v2_e1_id, e2_id, v1_e1_id, e2_id, new_e, new_e,
                );
            }
        }
        Ok(())
    }

    /// Repeatedly reduces by a unique edge if one exists, else by a parallel edge, until
    /// neither exists. Returns the number of steps taken.
    pub fn full_reduce(&mut self, mut history: Option<&mut ReduceHistory>) -> GraphResult<usize> {
        let mut steps = 0;
        loop {
            if let Some(e_id) = self.get_cubic_graph_unique_reduceable_edge() {
                self.reduce_by_unique_edge(e_id, history.as_deref_mut())?;
            } else if let Some(e_id) = self.get_cubic_graph_parallel_reduceable_edge() {
                self.reduce_by_parallel_edge(e_id, history.as_deref_mut())?;
            } else {
                break;
            }
            steps += 1;
        }
        Ok(steps)
    }

    /// Inverse of [`Graph::reduce_by_unique_edge`]: recreates `v1`/`v2` and the five edges
    /// removed/glued by that step, using the identifiers recorded in `step`.
    pub fn restore_step_unique(&mut self, step: &ReduceHistoryStep) -> GraphResult<()> {
        debug_assert!(step.is_reduce_by_unique_edge());
        self.new_vertex_with_id(step.v1_id);
        self.new_vertex_with_id(step.v2_id);

        let result_e1 = *self.get_edge(step.result_e1_id)?;
        let result_e2 = *self.get_edge(step.result_e2_id)?;

        self.add_edge_with_id(step.v1_id, step.v2_id, step.e_id)?;
        self.add_edge_with_id(step.v1_id, result_e1.a(), step.v1_e1_id)?;
        self.add_edge_with_id(step.v1_id, result_e1.b(), step.v1_e2_id)?;
        self.add_edge_with_id(step.v2_id, result_e2.a(), step.v2_e1_id)?;
        self.add_edge_with_id(step.v2_id, result_e2.b(), step.v2_e2_id)?;

        self.remove_edge(step.result_e1_id)?;
        self.remove_edge(step.result_e2_id)?;
        Ok(())
    }

    /// Inverse of [`Graph::reduce_by_parallel_edge`].
    pub fn restore_step_parallel(&mut self, step: &ReduceHistoryStep) -> GraphResult<()> {
        debug_assert!(step.is_reduce_by_parallel_edge());
        debug_assert_eq!(step.v1_e2_id, step.v2_e2_id);
        let e2_id = step.v1_e2_id;

        self.new_vertex_with_id(step.v1_id);
        self.new_vertex_with_id(step.v2_id);

        let result_e = *self.get_edge(step.result_e1_id)?;

        self.add_edge_with_id(step.v1_id, step.v2_id, step.e_id)?;
        self.add_edge_with_id(step.v1_id, step.v2_id, e2_id)?;
        self.add_edge_with_id(step.v1_id, result_e.a(), step.v1_e1_id)?;
        self.add_edge_with_id(step.v2_id, result_e.b(), step.v2_e1_id)?;

        self.remove_edge(step.result_e1_id)?;
        Ok(())
    }

    /// Dispatches to [`Graph::restore_step_unique`] or [`Graph::restore_step_parallel`] based
    /// on the last step in `history`, then pops it.
    pub fn restore_step(&mut self, history: &mut ReduceHistory) -> GraphResult<()> {
        let step = *history
            .last()
            .ok_or_else(|| GraphError::Structural("no history step to restore".into()))?;
        if step.is_reduce_by_parallel_edge() {
            self.restore_step_parallel(&step)?;
        } else {
            self.restore_step_unique(&step)?;
        }
        history.pop();
        Ok(())
    }

    /// Restores every step in `history`, then canonicalizes identifiers.
    pub fn restore_all(&mut self, history: &mut ReduceHistory) -> GraphResult<()> {
        while !history.is_empty() {
            self.restore_step(history)?;
        }
        self.arrange_objects_increasing_ids();
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::graph::factory;

    #[test]
    fn full_reduce_of_tetrahedron_reaches_minimal_cubic() {
        let mut g = factory::create_tetrahedron_graph();
        let mut h = ReduceHistory::new();
        g.full_reduce(Some(&mut h)).unwrap();
        assert!(g.is_minimal_cubic());
        assert!(g.has_parallel_edges());
    }

    #[test]
    fn restore_round_trip_is_strong_isomorphic() {
        let g1 = factory::create_prism_graph(5).unwrap();
        let mut g2 = g1.clone();
        let mut h = ReduceHistory::new();
        g2.full_reduce(Some(&mut h)).unwrap();
        g2.restore_all(&mut h).unwrap();
        let mut g1c = g1.clone();
        g1c.arrange_objects_increasing_ids();
        assert!(Graph::is_strong_isomorphic(&g1c, &g2));
    }
}
