//! In-place cubic multigraph model: identifiers, incidence structure, canonical ordering,
//! and the structural queries and mutations the reduction and coloring algorithms build on.

pub mod bicolor_cycle;
pub mod colorable;
pub mod edge;
pub mod factory;
pub mod reduce;
pub mod reduce_history;
pub mod tait;
pub mod vertex;

pub use bicolor_cycle::BicolorCycle;
pub use colorable::Colorable;
pub use edge::Edge;
pub use reduce_history::{ReduceHistory, ReduceHistoryStep};
pub use vertex::Vertex;

use crate::error::{GraphError, GraphResult};
use itertools::Itertools;
use rand::Rng;
use std::fmt;

/// Stable integer identifier for a vertex or an edge. Monotonically assigned, never reused.
pub type Id = i32;

/// An undirected multigraph: a set of owned vertices and edges, referencing each other only
/// by identifier. Loops are disallowed (invariant G1); parallel edges are permitted (G2).
#[derive(Debug, Clone)]
pub struct Graph {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    max_vertex_id: Id,
    max_edge_id: Id,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    pub fn new() -> Self {
        Graph {
            vertices: Vec::new(),
            edges: Vec::new(),
            max_vertex_id: -1,
            max_edge_id: -1,
        }
    }

    // -- Sizes and basic predicates -----------------------------------------------------

    pub fn order(&self) -> usize {
        self.vertices.len()
    }

    pub fn size(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order() == 0
    }

    pub fn is_edgeless(&self) -> bool {
        self.size() == 0
    }

    pub fn is_trivial(&self) -> bool {
        self.order() == 1
    }

    pub fn is_complete(&self) -> bool {
        if self.order() == 0 {
            return false;
        }
        for i in 0..self.vertices.len() {
            for j in (i + 1)..self.vertices.len() {
                let (a, b) = (self.vertices[i].id(), self.vertices[j].id());
                if self.find_edge_between(a, b).is_none() {
                    return false;
                }
            }
        }
        true
    }

    pub fn is_regular(&self, degree: usize) -> bool {
        !self.vertices.is_empty() && self.vertices.iter().all(|v| v.degree() == degree)
    }

    pub fn is_cubic(&self) -> bool {
        self.is_regular(3)
    }

    pub fn is_minimal_cubic(&self) -> bool {
        self.order() == 2 && self.size() == 3
    }

    pub fn has_parallel_edges(&self) -> bool {
        self.vertices
            .iter()
            .any(|v| self.vertex_has_parallel_edges(v.id()))
    }

    // -- Lookup --------------------------------------------------------------------------

    fn find_vertex_index(&self, id: Id) -> Option<usize> {
        self.vertices.iter().position(|v| v.id() == id)
    }

    fn find_edge_index(&self, id: Id) -> Option<usize> {
        self.edges.iter().position(|e| e.id() == id)
    }

    pub fn find_vertex_by_id(&self, id: Id) -> Option<&Vertex> {
        self.find_vertex_index(id).map(|i| &self.vertices[i])
    }

    pub fn find_edge_by_id(&self, id: Id) -> Option<&Edge> {
        self.find_edge_index(id).map(|i| &self.edges[i])
    }

    pub fn get_vertex(&self, id: Id) -> GraphResult<&Vertex> {
        self.find_vertex_by_id(id)
            .ok_or_else(|| GraphError::Structural(format!("vertex v{} not found", id)))
    }

    pub fn get_edge(&self, id: Id) -> GraphResult<&Edge> {
        self.find_edge_by_id(id)
            .ok_or_else(|| GraphError::Structural(format!("edge e{} not found", id)))
    }

    pub(crate) fn get_vertex_mut(&mut self, id: Id) -> GraphResult<&mut Vertex> {
        self.find_vertex_index(id)
            .map(move |i| &mut self.vertices[i])
            .ok_or_else(|| GraphError::Structural(format!("vertex v{} not found", id)))
    }

    pub(crate) fn get_edge_mut(&mut self, id: Id) -> GraphResult<&mut Edge> {
        self.find_edge_index(id)
            .map(move |i| &mut self.edges[i])
            .ok_or_else(|| GraphError::Structural(format!("edge e{} not found", id)))
    }

    /// Vertex at positional index `i` in current storage order (not identifier order unless
    /// the graph has just been canonicalized).
    pub fn vertex_at(&self, i: usize) -> GraphResult<&Vertex> {
        self.vertices
            .get(i)
            .ok_or_else(|| GraphError::Precondition(format!("wrong vertex index ({})", i)))
    }

    pub fn edge_at(&self, i: usize) -> GraphResult<&Edge> {
        self.edges
            .get(i)
            .ok_or_else(|| GraphError::Precondition(format!("wrong edge index ({})", i)))
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn get_random_vertex(&self) -> GraphResult<&Vertex> {
        if self.vertices.is_empty() {
            return Err(GraphError::Precondition("graph has no vertices".into()));
        }
        let i = rand::thread_rng().gen_range(0..self.vertices.len());
        Ok(&self.vertices[i])
    }

    pub fn get_random_edge(&self) -> GraphResult<&Edge> {
        if self.edges.is_empty() {
            return Err(GraphError::Precondition("graph has no edges".into()));
        }
        let i = rand::thread_rng().gen_range(0..self.edges.len());
        Ok(&self.edges[i])
    }

    // -- Cross-referencing queries (need both Vertex and Edge data) ----------------------

    /// Opposite endpoint of `e_id` seen from `v_id`.
    pub fn neighbour(&self, v_id: Id, e_id: Id) -> GraphResult<Id> {
        let e = self.get_edge(e_id)?;
        if !e.is_incident(v_id) {
            return Err(GraphError::Structural(format!(
                "edge e{} and vertex v{} are not incident",
                e_id, v_id
            )));
        }
        Ok(e.other_endpoint(v_id))
    }

    /// First edge (in incidence order) connecting `v_id` to `u_id`, if any.
    pub fn find_edge_between(&self, v_id: Id, u_id: Id) -> Option<Id> {
        let v = self.find_vertex_by_id(v_id)?;
        v.edge_ids()
            .iter()
            .copied()
            .find(|&e_id| self.neighbour(v_id, e_id).ok() == Some(u_id))
    }

    pub fn has_edge(&self, v_id: Id, u_id: Id) -> bool {
        self.find_edge_between(v_id, u_id).is_some()
    }

    pub fn vertex_has_parallel_edges(&self, v_id: Id) -> bool {
        let v = match self.find_vertex_by_id(v_id) {
            Some(v) => v,
            None => return false,
        };
        let edges = v.edge_ids();
        for i in 0..edges.len() {
            let ni = self.neighbour(v_id, edges[i]).expect("incident by construction");
            for e in &edges[(i + 1)..] {
                let nj = self.neighbour(v_id, *e).expect("incident by construction");
                if ni == nj {
                    return true;
                }
            }
        }
        false
    }

    pub fn vertex_is_edges_coloring_correct(&self, v_id: Id) -> bool {
        let v = match self.find_vertex_by_id(v_id) {
            Some(v) => v,
            None => return true,
        };
        let edges = v.edge_ids();
        for i in 0..edges.len() {
            let ci = self.get_edge(edges[i]).unwrap().color();
            for e in &edges[(i + 1)..] {
                if ci >= 0 && self.get_edge(*e).unwrap().color() == ci {
                    return false;
                }
            }
        }
        true
    }

    pub fn is_edges_coloring_correct(&self) -> bool {
        self.vertices
            .iter()
            .all(|v| self.vertex_is_edges_coloring_correct(v.id()))
    }

    /// True iff both endpoints of `e_id` have degree 3 and neither endpoint is incident to a
    /// parallel edge.
    pub fn edge_is_cubic_unique_reduceable(&self, e_id: Id) -> bool {
        let e = match self.find_edge_by_id(e_id) {
            Some(e) => e,
            None => return false,
        };
        let (a, b) = (e.a(), e.b());
        let va = self.get_vertex(a).unwrap();
        let vb = self.get_vertex(b).unwrap();
        va.degree() == 3
            && vb.degree() == 3
            && !self.vertex_has_parallel_edges(a)
            && !self.vertex_has_parallel_edges(b)
    }

    /// True iff both endpoints of `e_id` have degree 3, are joined by exactly two edges, and
    /// their other two neighbors are distinct.
    pub fn edge_is_cubic_parallel_reduceable(&self, e_id: Id) -> bool {
        let e = match self.find_edge_by_id(e_id) {
            Some(e) => e,
            None => return false,
        };
        let (a, b) = (e.a(), e.b());
        let va = self.get_vertex(a).unwrap();
        let vb = self.get_vertex(b).unwrap();
        if va.degree() != 3 || vb.degree() != 3 {
            return false;
        }
        let shared = va
            .edge_ids()
            .iter()
            .filter(|&&e_id| self.neighbour(a, e_id).unwrap() == b)
            .count();
        if shared != 2 {
            return false;
        }
        let outside_a = va
            .edge_ids()
            .iter()
            .map(|&e_id| self.neighbour(a, e_id).unwrap())
            .find(|&n| n != b);
        let outside_b = vb
            .edge_ids()
            .iter()
            .map(|&e_id| self.neighbour(b, e_id).unwrap())
            .find(|&n| n != a);
        match (outside_a, outside_b) {
            (Some(c), Some(d)) => c != d,
            _ => false,
        }
    }

    pub fn get_cubic_graph_unique_reduceable_edge(&self) -> Option<Id> {
        self.edges
            .iter()
            .map(|e| e.id())
            .find(|&id| self.edge_is_cubic_unique_reduceable(id))
    }

    pub fn get_cubic_graph_parallel_reduceable_edge(&self) -> Option<Id> {
        self.edges
            .iter()
            .map(|e| e.id())
            .find(|&id| self.edge_is_cubic_parallel_reduceable(id))
    }

    pub fn greedy_paint_edge(&mut self, e_id: Id) -> GraphResult<()> {
        let e = self.get_edge(e_id)?;
        let (a, b) = (e.a(), e.b());
        let mut used = Colorable::new();
        for &v_id in &[a, b] {
            let v = self.get_vertex(v_id)?;
            for &inc in v.edge_ids() {
                let c = self.get_edge(inc)?.color();
                if c >= 0 {
                    used.paint(c);
                }
            }
        }
        let color = used.first_free_color();
        self.get_edge_mut(e_id)?.set_color(color);
        Ok(())
    }

    // -- Construction ----------------------------------------------------------------

    pub fn new_vertex_with_id(&mut self, id: Id) -> Id {
        self.vertices.push(Vertex::new(id));
        if id > self.max_vertex_id {
            self.max_vertex_id = id;
        }
        id
    }

    pub fn new_vertex(&mut self) -> Id {
        let id = self.max_vertex_id + 1;
        self.new_vertex_with_id(id)
    }

    pub fn add_edge_with_id(&mut self, a: Id, b: Id, id: Id) -> GraphResult<Id> {
        debug_assert!(a != b, "loops are not allowed");
        self.get_vertex(a)?;
        self.get_vertex(b)?;
        self.edges.push(Edge::new(id, a, b));
        if id > self.max_edge_id {
            self.max_edge_id = id;
        }
        self.get_vertex_mut(a)?.push_edge(id);
        self.get_vertex_mut(b)?.push_edge(id);
        Ok(id)
    }

    pub fn add_edge(&mut self, a: Id, b: Id) -> GraphResult<Id> {
        let id = self.max_edge_id + 1;
        self.add_edge_with_id(a, b, id)
    }

    /// Adds `(a, b)` only if they are not already adjacent.
    pub fn add_unique_edge(&mut self, a: Id, b: Id) -> GraphResult<Option<Id>> {
        if self.has_edge(a, b) {
            Ok(None)
        } else {
            self.add_edge(a, b).map(Some)
        }
    }

    /// Adds the path edges `(from_i, from_i + 1), ..., (to_i - 1, to_i)` and closes the cycle
    /// with `(from_i, to_i)`. Vertex identifiers are used directly as `from_i..=to_i`.
    pub fn add_cycle(&mut self, from_i: Id, to_i: Id) -> GraphResult<()> {
        let mut i = from_i;
        while i < to_i {
            self.add_edge(i, i + 1)?;
            i += 1;
        }
        self.add_edge(from_i, to_i)?;
        Ok(())
    }

    // -- Removal -----------------------------------------------------------------------

    pub fn remove_edge(&mut self, e_id: Id) -> GraphResult<()> {
        let e = *self.get_edge(e_id)?;
        self.get_vertex_mut(e.a())?.remove_edge(e_id);
        self.get_vertex_mut(e.b())?.remove_edge(e_id);
        let idx = self
            .find_edge_index(e_id)
            .ok_or_else(|| GraphError::Structural("edge not found and can not be removed".into()))?;
        self.edges.remove(idx);
        Ok(())
    }

    pub fn remove_vertex(&mut self, v_id: Id) -> GraphResult<()> {
        while self.get_vertex(v_id)?.degree() > 0 {
            let e_id = self.get_vertex(v_id)?.edge_id_at(0);
            self.remove_edge(e_id)?;
        }
        let idx = self
            .find_vertex_index(v_id)
            .ok_or_else(|| GraphError::Structural("vertex not found and can not be removed".into()))?;
        self.vertices.remove(idx);
        Ok(())
    }

    /// Replaces a degree-2 vertex with a direct edge between its two neighbors, ordered so
    /// the smaller-identifier neighbor comes first. Returns `(new_edge_id, old_edge1_id,
    /// old_edge2_id)` where `old_edge1_id` led to the smaller-identifier neighbor.
    pub fn glue_two_incident_edges(&mut self, v_id: Id) -> GraphResult<(Id, Id, Id)> {
        let v = self.get_vertex(v_id)?;
        debug_assert!(v.degree() == 2, "vertex must have degree 2 to glue");
        let ea = v.edge_id_at(0);
        let eb = v.edge_id_at(1);
        let a = self.neighbour(v_id, ea)?;
        let b = self.neighbour(v_id, eb)?;
        let (e1_id, e2_id) = if a < b { (ea, eb) } else { (eb, ea) };
        self.remove_edge(ea)?;
        self.remove_edge(eb)?;
        self.remove_vertex(v_id)?;
        let new_e = self.add_edge(a, b)?;
        Ok((new_e, e1_id, e2_id))
    }

    /// Replaces two leaves with a direct edge between their neighbors. Returns
    /// `(new_edge_id, is_reversed)` where `is_reversed` is true when `v1`'s neighbor had the
    /// larger identifier (i.e. the new edge's canonical endpoint order swapped `v1`/`v2`'s
    /// roles).
    pub fn glue_two_hanging_edges(&mut self, v1_id: Id, v2_id: Id) -> GraphResult<(Id, bool)> {
        let v1 = self.get_vertex(v1_id)?;
        let v2 = self.get_vertex(v2_id)?;
        debug_assert!(v1.is_leaf() && v2.is_leaf(), "vertices must be leaves to glue");
        let v1_e1 = v1.edge_id_at(0);
        let v2_e1 = v2.edge_id_at(0);
        let a = self.neighbour(v1_id, v1_e1)?;
        let b = self.neighbour(v2_id, v2_e1)?;
        let is_reversed = a > b;
        self.remove_edge(v1_e1)?;
        self.remove_edge(v2_e1)?;
        let new_e = self.add_edge(a, b)?;
        self.remove_vertex(v1_id)?;
        self.remove_vertex(v2_id)?;
        Ok((new_e, is_reversed))
    }

    /// Replaces a degree-3 vertex with a triangle of fresh vertices, each inheriting one of
    /// the old vertex's three connections. Preserves cubicity.
    pub fn bubble_cubic_graph_vertex(&mut self, v_id: Id) -> GraphResult<()> {
        let v = self.get_vertex(v_id)?;
        debug_assert!(v.degree() == 3, "vertex must have degree 3 to bubble");
        let neighbours: Vec<Id> = (0..3)
            .map(|i| self.neighbour(v_id, v.edge_id_at(i)))
            .collect::<GraphResult<_>>()?;
        self.remove_vertex(v_id)?;
        let na = self.new_vertex();
        let nb = self.new_vertex();
        let nc = self.new_vertex();
        self.add_edge(neighbours[0], na)?;
        self.add_edge(neighbours[1], nb)?;
        self.add_edge(neighbours[2], nc)?;
        self.add_edge(na, nb)?;
        self.add_edge(nb, nc)?;
        self.add_edge(na, nc)?;
        Ok(())
    }

    pub fn bubble_random_cubic_graph_vertex(&mut self) -> GraphResult<()> {
        let v_id = self.get_random_vertex()?.id();
        self.bubble_cubic_graph_vertex(v_id)
    }

    // -- Canonicalization ----------------------------------------------------------------

    pub fn arrange_objects_increasing_ids(&mut self) {
        for v in &mut self.vertices {
            v.arrange_edges_increasing_ids();
        }
        for e in &mut self.edges {
            e.arrange_vertices_increasing_ids();
        }
        self.vertices.sort_unstable_by_key(|v| v.id());
        self.edges.sort_unstable_by_key(|e| e.id());
        self.max_vertex_id = self.vertices.last().map(|v| v.id()).unwrap_or(-1);
        self.max_edge_id = self.edges.last().map(|e| e.id()).unwrap_or(-1);
    }

    /// Renumbers every vertex and edge to its positional index in current storage order.
    /// Unlike [`Graph::arrange_objects_increasing_ids`], this discards existing identifiers
    /// rather than reordering by them.
    pub fn reset_identifiers(&mut self) {
        let vertex_remap: std::collections::HashMap<Id, Id> = self
            .vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (v.id(), i as Id))
            .collect();
        let edge_remap: std::collections::HashMap<Id, Id> = self
            .edges
            .iter()
            .enumerate()
            .map(|(i, e)| (e.id(), i as Id))
            .collect();

        for v in &mut self.vertices {
            let new_id = vertex_remap[&v.id()];
            *v = Vertex::new(new_id);
        }
        for e in &mut self.edges {
            let (a, b) = (e.a(), e.b());
            *e = Edge::new(edge_remap[&e.id()], vertex_remap[&a], vertex_remap[&b]);
        }
        for e in self.edges.clone() {
            self.get_vertex_mut(e.a()).unwrap().push_edge(e.id());
            self.get_vertex_mut(e.b()).unwrap().push_edge(e.id());
        }
        self.max_vertex_id = self.vertices.len() as Id - 1;
        self.max_edge_id = self.edges.len() as Id - 1;
    }

    // -- Coloring utilities ----------------------------------------------------------------

    pub fn fill_edges_colors_histogram(&self) -> Vec<usize> {
        let mut histogram = Vec::new();
        for e in &self.edges {
            let c = e.color();
            if c >= 0 {
                let c = c as usize;
                if c >= histogram.len() {
                    histogram.resize(c + 1, 0);
                }
                histogram[c] += 1;
            }
        }
        histogram
    }

    /// Paints every edge greedily, in current list order, resetting all colors first.
    /// Returns the number of distinct colors used.
    pub fn edges_coloring_greedy(&mut self) -> GraphResult<usize> {
        for e in &mut self.edges {
            e.set_color(edge::UNCOLORED);
        }
        let ids: Vec<Id> = self.edges.iter().map(|e| e.id()).collect();
        let mut max_color = -1;
        for id in ids {
            self.greedy_paint_edge(id)?;
            max_color = max_color.max(self.get_edge(id)?.color());
        }
        debug_assert!(self.is_edges_coloring_correct(), "greedy coloring is not proper");
        Ok((max_color + 1) as usize)
    }

    /// Compares two graphs for identifier-identical equality after both have been
    /// canonicalized. This is a restore-round-trip check, not a general graph isomorphism
    /// test: two graphs with different identifier assignments but the same shape will not
    /// compare equal here.
    pub fn is_strong_isomorphic(g1: &Graph, g2: &Graph) -> bool {
        if g1.order() != g2.order() || g1.size() != g2.size() {
            return false;
        }
        for (v1, v2) in g1.vertices.iter().zip(g2.vertices.iter()) {
            if v1.id() != v2.id() || v1.edge_ids() != v2.edge_ids() {
                return false;
            }
        }
        for (e1, e2) in g1.edges.iter().zip(g2.edges.iter()) {
            if e1.id() != e2.id() || e1.a() != e2.a() || e1.b() != e2.b() {
                return false;
            }
        }
        true
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "graph: order = {}, size = {}", self.order(), self.size())?;
        for v in self.vertices.iter().sorted_by_key(|v| v.id()) {
            writeln!(
                f,
                "  v{} : edges({})",
                v.id(),
                v.edge_ids().iter().map(|id| format!("e{}", id)).join(",")
            )?;
        }
        for e in self.edges.iter().sorted_by_key(|e| e.id()) {
            writeln!(f, "  e{} : v{} - v{} [{}]", e.id(), e.a(), e.b(), e.color())?;
        }
        Ok(())
    }
}

impl Graph {
    pub fn print_info<W: std::fmt::Write>(&self, w: &mut W) -> std::fmt::Result {
        write!(w, "{}", self)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_graph_predicates() {
        let g = Graph::new();
        assert!(g.is_empty());
        assert!(g.is_edgeless());
        assert!(!g.is_regular(0));
    }

    #[test]
    fn add_edge_orders_endpoints_by_id() {
        let mut g = Graph::new();
        let v0 = g.new_vertex();
        let v1 = g.new_vertex();
        let e = g.add_edge(v1, v0).unwrap();
        let edge = g.get_edge(e).unwrap();
        assert_eq!((edge.a(), edge.b()), (v0, v1));
    }

    #[test]
    fn glue_two_incident_edges_removes_middle_vertex() {
        let mut g = Graph::new();
        let a = g.new_vertex();
        let v = g.new_vertex();
        let b = g.new_vertex();
        g.add_edge(a, v).unwrap();
        g.add_edge(v, b).unwrap();
        let (new_e, _, _) = g.glue_two_incident_edges(v).unwrap();
        assert_eq!(g.order(), 2);
        let e = g.get_edge(new_e).unwrap();
        assert!(e.is_incident(a) && e.is_incident(b));
    }

    #[test]
    fn parallel_edge_detection() {
        let mut g = Graph::new();
        let a = g.new_vertex();
        let b = g.new_vertex();
        g.add_edge(a, b).unwrap();
        g.add_edge(a, b).unwrap();
        assert!(g.has_parallel_edges());
    }

    #[test]
    fn reset_identifiers_renumbers_positionally() {
        let mut g = Graph::new();
        g.new_vertex_with_id(5);
        g.new_vertex_with_id(9);
        g.add_edge_with_id(5, 9, 40).unwrap();
        g.reset_identifiers();
        assert_eq!(g.vertex_at(0).unwrap().id(), 0);
        assert_eq!(g.vertex_at(1).unwrap().id(), 1);
        assert_eq!(g.edge_at(0).unwrap().id(), 0);
    }
}
