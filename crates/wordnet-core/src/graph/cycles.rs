/// Cycle detection for [`Digraph`].
///
/// Uses Kahn's algorithm (BFS-based topological sort). The taxonomy loader
/// calls [`detect_cycles`] on the freshly built hypernym graph and rejects it
/// when any cycle is found.
///
/// # Algorithm Overview
///
/// Kahn's algorithm computes an in-degree table for every vertex, seeds a BFS
/// queue with all zero-in-degree vertices, then repeatedly removes a vertex
/// from the queue and decrements the in-degrees of its successors. Any vertex
/// whose in-degree falls to zero is added to the queue.
///
/// If the queue empties before every vertex has been visited, the remaining
/// vertices lie on or downstream of a cycle. A DFS restricted to those
/// vertices extracts the individual cycles.
use std::collections::VecDeque;

use crate::graph::Digraph;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Returns `true` if `graph` contains at least one directed cycle.
///
/// Self-loops count as cycles.
pub fn has_cycle(graph: &Digraph) -> bool {
    !residual_vertices(graph).is_empty()
}

/// Detects the directed cycles of `graph`.
///
/// # Returns
///
/// - An empty `Vec` if the graph is acyclic.
/// - One or more vertex sequences, each describing a cycle in traversal
///   order with the first vertex repeated at the end (closed cycle
///   representation). A self-loop on `v` is reported as `[v, v]`.
///
/// Output is deterministic: DFS roots are tried in increasing id order.
pub fn detect_cycles(graph: &Digraph) -> Vec<Vec<usize>> {
    let residual = residual_vertices(graph);
    if residual.is_empty() {
        return Vec::new();
    }

    let mut in_residual = vec![false; graph.vertex_count()];
    for &v in &residual {
        in_residual[v] = true;
    }
    extract_cycles(graph, &residual, &in_residual)
}

// ---------------------------------------------------------------------------
// Internal: Kahn's algorithm
// ---------------------------------------------------------------------------

/// Returns the vertices Kahn's algorithm could not consume, in increasing id
/// order. Empty iff the graph is acyclic.
fn residual_vertices(graph: &Digraph) -> Vec<usize> {
    let n = graph.vertex_count();
    let mut in_degree: Vec<usize> = vec![0; n];
    for v in 0..n {
        for w in graph.successors(v) {
            in_degree[w] += 1;
        }
    }

    let mut queue: VecDeque<usize> = (0..n).filter(|&v| in_degree[v] == 0).collect();

    while let Some(v) = queue.pop_front() {
        for w in graph.successors(v) {
            if in_degree[w] > 0 {
                in_degree[w] -= 1;
                if in_degree[w] == 0 {
                    queue.push_back(w);
                }
            }
        }
    }

    (0..n).filter(|&v| in_degree[v] > 0).collect()
}

// ---------------------------------------------------------------------------
// Internal: individual cycle extraction
// ---------------------------------------------------------------------------

/// Extracts individual cycles from the vertices Kahn's algorithm left over.
///
/// Iterative DFS with an explicit stack, restricted to residual vertices.
/// A successor already on the current path closes a cycle.
fn extract_cycles(graph: &Digraph, residual: &[usize], in_residual: &[bool]) -> Vec<Vec<usize>> {
    let n = graph.vertex_count();
    let mut all_cycles: Vec<Vec<usize>> = Vec::new();
    let mut globally_visited = vec![false; n];
    let mut on_path = vec![false; n];

    for &start in residual {
        if globally_visited[start] {
            continue;
        }

        let mut path: Vec<usize> = vec![start];
        // (vertex, filtered successors, next child index)
        let mut stack: Vec<(usize, Vec<usize>, usize)> =
            vec![(start, residual_successors(graph, start, in_residual), 0)];
        on_path[start] = true;

        while let Some(frame) = stack.last_mut() {
            let (node, children, child_idx) = frame;
            let node = *node;

            let Some(&child) = children.get(*child_idx) else {
                stack.pop();
                path.pop();
                on_path[node] = false;
                globally_visited[node] = true;
                continue;
            };
            *child_idx += 1;

            if on_path[child] {
                if let Some(pos) = path.iter().position(|&v| v == child) {
                    let mut cycle = path[pos..].to_vec();
                    cycle.push(child);
                    all_cycles.push(cycle);
                }
                continue;
            }

            if globally_visited[child] {
                continue;
            }

            path.push(child);
            on_path[child] = true;
            stack.push((child, residual_successors(graph, child, in_residual), 0));
        }
    }

    all_cycles
}

fn residual_successors(graph: &Digraph, v: usize, in_residual: &[bool]) -> Vec<usize> {
    let mut out: Vec<usize> = graph.successors(v).filter(|&w| in_residual[w]).collect();
    out.sort_unstable();
    out.dedup();
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
