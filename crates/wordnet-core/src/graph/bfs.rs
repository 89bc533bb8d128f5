/// Multi-source breadth-first search over a [`Digraph`].
///
/// All sources start at distance zero and are expanded together, so the
/// distance recorded for a vertex is the hop count from the nearest source.
/// Edges are followed in their stored direction only.
use std::collections::VecDeque;

use crate::graph::{Digraph, GraphError};

/// Result of a multi-source BFS: per-vertex reachability and distance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreadthFirstPaths {
    dist: Vec<Option<usize>>,
}

impl BreadthFirstPaths {
    /// Runs BFS from a single source vertex.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexOutOfRange`] if `source` is not a vertex of
    /// `graph`.
    pub fn new(graph: &Digraph, source: usize) -> Result<Self, GraphError> {
        Self::from_sources(graph, [source])
    }

    /// Runs BFS from every vertex in `sources` simultaneously.
    ///
    /// Duplicate sources are harmless. An empty source list yields a result
    /// in which no vertex is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexOutOfRange`] for the first source that is
    /// not a vertex of `graph`; no traversal is performed in that case.
    pub fn from_sources<I>(graph: &Digraph, sources: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut dist: Vec<Option<usize>> = vec![None; graph.vertex_count()];
        let mut queue: VecDeque<usize> = VecDeque::new();

        for s in sources {
            graph.check_vertex(s)?;
            if dist[s].is_none() {
                dist[s] = Some(0);
                queue.push_back(s);
            }
        }

        while let Some(current) = queue.pop_front() {
            let next = dist[current].map_or(0, |d| d + 1);
            for neighbour in graph.successors(current) {
                if dist[neighbour].is_none() {
                    dist[neighbour] = Some(next);
                    queue.push_back(neighbour);
                }
            }
        }

        Ok(Self { dist })
    }

    /// Returns `true` if `v` is reachable from at least one source.
    pub fn has_path_to(&self, v: usize) -> bool {
        self.dist_to(v).is_some()
    }

    /// Returns the hop distance from the nearest source to `v`, or `None` if
    /// `v` is unreachable or not a vertex.
    pub fn dist_to(&self, v: usize) -> Option<usize> {
        self.dist.get(v).copied().flatten()
    }

    /// Iterates over `(vertex, distance)` for every reached vertex, in
    /// increasing vertex order.
    pub fn reached(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.dist
            .iter()
            .enumerate()
            .filter_map(|(v, d)| d.map(|d| (v, d)))
    }
}
