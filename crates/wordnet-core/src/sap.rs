//! Shortest ancestral path (SAP) queries over a [`Digraph`].
//!
//! An *ancestral path* between `v` and `w` is a pair of directed paths from
//! `v` and from `w` to a common vertex, the *ancestor*. The shortest one
//! minimises the combined edge count. Set queries generalise this to the
//! minimum over every `(v, w)` pair drawn from two vertex sets.
//!
//! # Algorithm
//!
//! One multi-source BFS from each side, then a scan of all vertices in
//! increasing id order. A vertex reached by both sides replaces the current
//! best only when its distance sum is strictly smaller, so among equally
//! short paths the lowest-id ancestor wins. Cost is O(V + E) per query.
//!
//! # Caching
//!
//! [`Sap`] remembers the most recent query and its answer. A repeated query,
//! in either argument order, is answered from that slot. A scalar query and
//! a singleton-set query over the same vertex are different keys.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::sync::Arc;

use crate::graph::{BreadthFirstPaths, Digraph, GraphError};

/// Errors returned by SAP queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SapError {
    /// A vertex argument is not a vertex of the graph.
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// A vertex-set argument is empty.
    #[error("vertex set must contain at least one vertex")]
    EmptySet,
}

/// One side of a SAP query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Query {
    /// A single vertex.
    Single(usize),
    /// A set of vertices; duplicates collapse.
    Set(BTreeSet<usize>),
}

impl Query {
    /// Builds a [`Query::Set`] from any collection of vertex ids.
    pub fn set<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        Query::Set(ids.into_iter().collect())
    }

    /// Iterates over the source vertices of this side.
    pub fn vertices(&self) -> Box<dyn Iterator<Item = usize> + '_> {
        match self {
            Query::Single(v) => Box::new(std::iter::once(*v)),
            Query::Set(vs) => Box::new(vs.iter().copied()),
        }
    }

    fn validate(&self, graph: &Digraph) -> Result<(), SapError> {
        if matches!(self, Query::Set(vs) if vs.is_empty()) {
            return Err(SapError::EmptySet);
        }
        for v in self.vertices() {
            graph.check_vertex(v)?;
        }
        Ok(())
    }
}

impl From<usize> for Query {
    fn from(v: usize) -> Self {
        Query::Single(v)
    }
}

/// Answer to a SAP query that has a common ancestor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ancestry {
    /// Total edge count of the shortest ancestral path.
    pub length: usize,
    /// The common ancestor on that path.
    pub ancestor: usize,
}

#[derive(Debug, Clone)]
struct CachedQuery {
    a: Query,
    b: Query,
    result: Option<Ancestry>,
}

impl CachedQuery {
    fn matches(&self, a: &Query, b: &Query) -> bool {
        (self.a == *a && self.b == *b) || (self.a == *b && self.b == *a)
    }
}

/// Shortest-ancestral-path engine over a shared, immutable [`Digraph`].
///
/// The graph need not be acyclic. Query methods take `&self`; the single
/// cache slot is interior state and is never exposed.
#[derive(Debug)]
pub struct Sap {
    graph: Arc<Digraph>,
    last: RefCell<Option<CachedQuery>>,
}

impl Sap {
    /// Creates an engine over `graph` with an empty cache.
    pub fn new(graph: impl Into<Arc<Digraph>>) -> Self {
        Self {
            graph: graph.into(),
            last: RefCell::new(None),
        }
    }

    /// Returns the graph this engine queries.
    pub fn graph(&self) -> &Digraph {
        &self.graph
    }

    /// Length of the shortest ancestral path between `v` and `w`, or `None`
    /// if they have no common ancestor.
    ///
    /// # Errors
    ///
    /// [`SapError::Graph`] if either id is out of range.
    pub fn length(&self, v: usize, w: usize) -> Result<Option<usize>, SapError> {
        Ok(self
            .ancestry(&Query::Single(v), &Query::Single(w))?
            .map(|a| a.length))
    }

    /// A common ancestor of `v` and `w` on a shortest ancestral path, or
    /// `None` if there is none.
    ///
    /// # Errors
    ///
    /// [`SapError::Graph`] if either id is out of range.
    pub fn ancestor(&self, v: usize, w: usize) -> Result<Option<usize>, SapError> {
        Ok(self
            .ancestry(&Query::Single(v), &Query::Single(w))?
            .map(|a| a.ancestor))
    }

    /// Length of the shortest ancestral path between any vertex of `vs` and
    /// any vertex of `ws`.
    ///
    /// # Errors
    ///
    /// [`SapError::EmptySet`] if either set is empty, [`SapError::Graph`] if
    /// any id is out of range.
    pub fn length_sets<I, J>(&self, vs: I, ws: J) -> Result<Option<usize>, SapError>
    where
        I: IntoIterator<Item = usize>,
        J: IntoIterator<Item = usize>,
    {
        Ok(self
            .ancestry(&Query::set(vs), &Query::set(ws))?
            .map(|a| a.length))
    }

    /// Common ancestor on a shortest ancestral path between the two sets.
    ///
    /// # Errors
    ///
    /// Same as [`Sap::length_sets`].
    pub fn ancestor_sets<I, J>(&self, vs: I, ws: J) -> Result<Option<usize>, SapError>
    where
        I: IntoIterator<Item = usize>,
        J: IntoIterator<Item = usize>,
    {
        Ok(self
            .ancestry(&Query::set(vs), &Query::set(ws))?
            .map(|a| a.ancestor))
    }

    /// Answers a query for two arbitrary sides.
    ///
    /// Arguments are validated before the cache is consulted, so a failing
    /// call leaves the cache as it was.
    ///
    /// # Errors
    ///
    /// [`SapError::EmptySet`] for an empty set side, [`SapError::Graph`] for
    /// an out-of-range vertex.
    pub fn ancestry(&self, a: &Query, b: &Query) -> Result<Option<Ancestry>, SapError> {
        a.validate(&self.graph)?;
        b.validate(&self.graph)?;

        if let Some(hit) = self
            .last
            .borrow()
            .as_ref()
            .filter(|c| c.matches(a, b))
            .map(|c| c.result)
        {
            tracing::trace!(?a, ?b, "sap cache hit");
            return Ok(hit);
        }

        let result = self.compute(a, b)?;
        tracing::trace!(?a, ?b, ?result, "sap computed");
        *self.last.borrow_mut() = Some(CachedQuery {
            a: a.clone(),
            b: b.clone(),
            result,
        });
        Ok(result)
    }

    fn compute(&self, a: &Query, b: &Query) -> Result<Option<Ancestry>, SapError> {
        let from_a = BreadthFirstPaths::from_sources(&self.graph, a.vertices())?;
        let from_b = BreadthFirstPaths::from_sources(&self.graph, b.vertices())?;

        let mut best: Option<Ancestry> = None;
        for (vertex, da) in from_a.reached() {
            let Some(db) = from_b.dist_to(vertex) else {
                continue;
            };
            let length = da + db;
            if best.is_none_or(|cur| length < cur.length) {
                best = Some(Ancestry {
                    length,
                    ancestor: vertex,
                });
            }
        }
        Ok(best)
    }
}
