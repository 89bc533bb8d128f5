//! Record text for generated taxonomies.

use std::collections::BTreeSet;
use std::fmt::Write as _;

use rand::Rng;
use rand::rngs::StdRng;

use super::GeneratorConfig;

/// Builds the synset records and returns them with the sorted distinct
/// nouns they mention.
///
/// Every synset gets between one and `max_synonyms` synonyms. A synonym is
/// a fresh `noun_<id>_<k>` word, or with probability `polysemy_rate` a word
/// already used by an earlier synset.
pub fn build_synsets(config: &GeneratorConfig, rng: &mut StdRng) -> (String, Vec<String>) {
    let mut text = String::new();
    let mut pool: Vec<String> = Vec::new();

    for id in 0..config.num_synsets {
        let count = rng.gen_range(1..=config.max_synonyms.max(1));
        let mut words: Vec<String> = Vec::with_capacity(count);
        for k in 0..count {
            let reused = (!pool.is_empty() && rng.gen_bool(config.polysemy_rate))
                .then(|| pool[rng.gen_range(0..pool.len())].clone())
                .filter(|w| !words.contains(w));
            let word = reused.unwrap_or_else(|| format!("noun_{id}_{k}"));
            words.push(word);
        }
        pool.extend(words.iter().cloned());
        writeln!(text, "{id},{},generated concept {id}, for testing", words.join(" ")).ok();
    }

    let nouns: BTreeSet<String> = pool.into_iter().collect();
    (text, nouns.into_iter().collect())
}

/// Formats hypernym records, skipping synsets with no hypernym.
pub fn format_hypernyms(parents: &[Vec<usize>]) -> String {
    let mut text = String::new();
    for (id, ps) in parents.iter().enumerate().filter(|(_, ps)| !ps.is_empty()) {
        text.push_str(&id.to_string());
        for p in ps {
            write!(text, ",{p}").ok();
        }
        text.push('\n');
    }
    text
}

/// Formats the hypernym graph as `V`, `E`, then one `v w` line per edge.
pub fn format_digraph(parents: &[Vec<usize>]) -> String {
    let edges: usize = parents.iter().map(Vec::len).sum();
    let mut text = format!("{}\n{edges}\n", parents.len());
    for (v, ps) in parents.iter().enumerate() {
        for w in ps {
            writeln!(text, "{v} {w}").ok();
        }
    }
    text
}
