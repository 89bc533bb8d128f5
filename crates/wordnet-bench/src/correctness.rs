//! Post-query invariant checkers for correctness validation.

use wordnet_core::{Ancestry, BreadthFirstPaths, Digraph, Query, Sap, Taxonomy};

use crate::GeneratedTaxonomy;

/// Verifies that a built taxonomy matches the records it was generated from.
pub fn check_taxonomy_invariants(
    generated: &GeneratedTaxonomy,
    taxonomy: &Taxonomy,
) -> Result<(), String> {
    if taxonomy.synset_count() != generated.synset_count() {
        return Err(format!(
            "synset count mismatch: taxonomy={}, generated={}",
            taxonomy.synset_count(),
            generated.synset_count()
        ));
    }
    if taxonomy.graph().edge_count() != generated.edge_count() {
        return Err(format!(
            "edge count mismatch: taxonomy={}, generated={}",
            taxonomy.graph().edge_count(),
            generated.edge_count()
        ));
    }
    if taxonomy.root() != 0 {
        return Err(format!("expected root 0, got {}", taxonomy.root()));
    }
    if !taxonomy.nouns().eq(generated.nouns.iter().map(String::as_str)) {
        return Err("noun index differs from generated nouns".to_owned());
    }
    Ok(())
}

/// Verifies that every synset reaches the root.
pub fn check_rooted(taxonomy: &Taxonomy) -> Result<(), String> {
    let graph = taxonomy.graph();
    for v in 0..graph.vertex_count() {
        let bfs = BreadthFirstPaths::new(graph, v).map_err(|e| e.to_string())?;
        if !bfs.has_path_to(taxonomy.root()) {
            return Err(format!("synset {v} does not reach root {}", taxonomy.root()));
        }
    }
    Ok(())
}

/// Verifies that `(v, w)` and `(w, v)` get the same answer.
///
/// The reversed query runs on a fresh engine, since `sap` would answer it
/// from its cache.
pub fn check_symmetric(sap: &Sap, a: &Query, b: &Query) -> Result<(), String> {
    let forward = sap.ancestry(a, b).map_err(|e| e.to_string())?;
    let backward = Sap::new(sap.graph().clone())
        .ancestry(b, a)
        .map_err(|e| e.to_string())?;
    if forward != backward {
        return Err(format!(
            "asymmetric answer for {a:?} / {b:?}: {forward:?} vs {backward:?}"
        ));
    }
    Ok(())
}

/// Verifies that a vertex is its own ancestor at distance zero.
pub fn check_self_ancestry(sap: &Sap, v: usize) -> Result<(), String> {
    let found = sap.ancestry(&Query::Single(v), &Query::Single(v));
    match found {
        Ok(Some(Ancestry {
            length: 0,
            ancestor,
        })) if ancestor == v => Ok(()),
        other => Err(format!("vertex {v} with itself answered {other:?}")),
    }
}

/// Verifies a reported answer:
/// - the ancestor is reachable from both sides
/// - the two distances to it add up to the reported length
/// - no vertex offers a shorter ancestral path
pub fn check_ancestry(
    graph: &Digraph,
    a: &Query,
    b: &Query,
    answer: Option<Ancestry>,
) -> Result<(), String> {
    let from_a = BreadthFirstPaths::from_sources(graph, a.vertices()).map_err(|e| e.to_string())?;
    let from_b = BreadthFirstPaths::from_sources(graph, b.vertices()).map_err(|e| e.to_string())?;

    let best = from_a
        .reached()
        .filter_map(|(v, da)| from_b.dist_to(v).map(|db| da + db))
        .min();

    match (answer, best) {
        (None, None) => Ok(()),
        (Some(found), Some(best)) => {
            let (Some(da), Some(db)) = (
                from_a.dist_to(found.ancestor),
                from_b.dist_to(found.ancestor),
            ) else {
                return Err(format!(
                    "ancestor {} is not reachable from both sides",
                    found.ancestor
                ));
            };
            if da + db != found.length {
                return Err(format!(
                    "length {} does not match path through {} ({da} + {db})",
                    found.length, found.ancestor
                ));
            }
            if found.length != best {
                return Err(format!(
                    "length {} is not minimal, {best} exists",
                    found.length
                ));
            }
            Ok(())
        }
        (None, Some(best)) => Err(format!("no answer, but a path of length {best} exists")),
        (Some(found), None) => Err(format!("answered {found:?}, but no common ancestor exists")),
    }
}
