//! Hypernym topology: a rooted DAG in which every synset's hypernyms have
//! smaller ids, plus optional cycle injection.

use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::index;

use super::GeneratorConfig;

/// Builds the hypernym list of every synset. Synset 0 is the root.
///
/// Each synset `i > 0` takes one hypernym from the `locality` synsets before
/// it, or with probability `multi_parent_rate` several distinct ones, up to
/// `max_hypernyms`.
pub fn build_hypernyms(config: &GeneratorConfig, rng: &mut StdRng) -> Vec<Vec<usize>> {
    let mut parents: Vec<Vec<usize>> = Vec::with_capacity(config.num_synsets);
    if config.num_synsets == 0 {
        return parents;
    }
    parents.push(Vec::new());

    for child in 1..config.num_synsets {
        let low = child.saturating_sub(config.locality.max(1));
        let window = child - low;
        let wanted = if config.max_hypernyms > 1 && rng.gen_bool(config.multi_parent_rate) {
            rng.gen_range(2..=config.max_hypernyms)
        } else {
            1
        };
        let mut chosen: Vec<usize> = index::sample(rng, window, wanted.min(window))
            .into_iter()
            .map(|offset| low + offset)
            .collect();
        chosen.sort_unstable();
        parents.push(chosen);
    }

    if config.inject_cycle && config.num_synsets >= 3 {
        inject_cycle(&mut parents);
    }
    parents
}

/// Makes synsets 1 and 2 each other's hypernym.
fn inject_cycle(parents: &mut [Vec<usize>]) {
    if !parents[2].contains(&1) {
        parents[2].push(1);
    }
    if !parents[1].contains(&2) {
        parents[1].push(2);
    }
}
