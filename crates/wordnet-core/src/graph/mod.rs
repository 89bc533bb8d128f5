/// Directed graph container for the SAP engine, plus the traversal
/// primitives it is built on.
///
/// Vertices are dense `usize` ids in `[0, V)`, fixed when the graph is
/// created. Edges are added through a [`DigraphBuilder`]; calling
/// [`DigraphBuilder::build`] freezes the graph into an immutable
/// [`Digraph`]. Nothing downstream of `build` can add or remove edges, so
/// a graph that passed structural validation stays valid.
///
/// # Traversal
///
/// See the [`bfs`] submodule for multi-source breadth-first search.
///
/// # Cycle Detection
///
/// See the [`cycles`] submodule for Kahn's algorithm cycle detection, used by
/// the taxonomy loader to enforce the rooted-DAG invariant.
pub mod bfs;
pub mod cycles;

pub use bfs::BreadthFirstPaths;
pub use cycles::{detect_cycles, has_cycle};

use petgraph::graph::{DefaultIx, DiGraph, NodeIndex};

/// Largest vertex count a [`Digraph`] can hold; petgraph's `u32` index type
/// reserves `u32::MAX` itself as the end marker.
pub const MAX_VERTEX_COUNT: usize = DefaultIx::MAX as usize;

/// Errors raised when a vertex id does not belong to a graph.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A vertex id is outside `[0, vertex_count)`.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange {
        /// The offending vertex id.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
}

fn check_vertex(vertex_count: usize, vertex: usize) -> Result<(), GraphError> {
    if vertex < vertex_count {
        Ok(())
    } else {
        Err(GraphError::VertexOutOfRange {
            vertex,
            vertex_count,
        })
    }
}

/// Mutable graph under construction.
///
/// The vertex set is fixed by [`DigraphBuilder::new`]; only edges can be
/// added. Consume with [`DigraphBuilder::build`].
#[derive(Debug, Clone)]
pub struct DigraphBuilder {
    graph: DiGraph<(), ()>,
}

impl DigraphBuilder {
    /// Creates a builder with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self::with_capacity(vertex_count, 0)
    }

    /// Like [`DigraphBuilder::new`], reserving room for `edge_capacity` edges.
    pub fn with_capacity(vertex_count: usize, edge_capacity: usize) -> Self {
        let mut graph = DiGraph::with_capacity(vertex_count, edge_capacity);
        for _ in 0..vertex_count {
            graph.add_node(());
        }
        Self { graph }
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns `Ok(())` if `v` is a vertex of the graph being built.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexOutOfRange`] otherwise.
    pub fn check_vertex(&self, v: usize) -> Result<(), GraphError> {
        check_vertex(self.vertex_count(), v)
    }

    /// Adds the directed edge `v -> w`.
    ///
    /// Parallel edges are kept; they do not change BFS distances.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexOutOfRange`] if either endpoint is not a
    /// vertex of this graph. The builder is left unchanged in that case.
    pub fn add_edge(&mut self, v: usize, w: usize) -> Result<&mut Self, GraphError> {
        let n = self.vertex_count();
        check_vertex(n, v)?;
        check_vertex(n, w)?;
        self.graph.add_edge(NodeIndex::new(v), NodeIndex::new(w), ());
        Ok(self)
    }

    /// Freezes the builder into an immutable [`Digraph`].
    pub fn build(self) -> Digraph {
        Digraph { graph: self.graph }
    }
}

/// An immutable directed graph over dense vertex ids `[0, V)`.
///
/// Wraps a `petgraph` [`DiGraph`] whose node indices coincide with vertex
/// ids. Construct with [`DigraphBuilder`].
#[derive(Debug, Clone)]
pub struct Digraph {
    graph: DiGraph<(), ()>,
}

impl Digraph {
    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns `Ok(())` if `v` is a vertex of this graph.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexOutOfRange`] otherwise.
    pub fn check_vertex(&self, v: usize) -> Result<(), GraphError> {
        check_vertex(self.vertex_count(), v)
    }

    /// Iterates over the direct successors of `v` (targets of its outgoing
    /// edges). Yields nothing for ids outside the graph.
    pub fn successors(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        let node = (v < self.vertex_count()).then(|| NodeIndex::new(v));
        node.into_iter()
            .flat_map(|n| self.graph.neighbors(n))
            .map(|n| n.index())
    }

    /// Returns the number of outgoing edges of `v`.
    pub fn out_degree(&self, v: usize) -> usize {
        self.successors(v).count()
    }

    /// Returns every vertex with no outgoing edges, in increasing id order.
    pub fn sinks(&self) -> Vec<usize> {
        (0..self.vertex_count())
            .filter(|&v| self.successors(v).next().is_none())
            .collect()
    }
}
