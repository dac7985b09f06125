//! In-place edge 3-coloring of cubic multigraphs via iterative topological reduction and
//! recoloring along bicolor cycles (the Tait/Kempe-chain argument).
//!
//! The entry point most callers want is
//! [`graph::Graph::edges_coloring_for_cubic_graph_with_bicolor_cycles_algorithm`], applied to
//! a graph built from one of the [`graph::factory`] constructors.

pub mod error;
pub mod graph;

pub use error::{GraphError, GraphResult};
pub use graph::{BicolorCycle, Colorable, Edge, Graph, ReduceHistory, ReduceHistoryStep, Vertex};
