#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use super::*;

/// A small fragment of the noun hierarchy.
///
/// ```text
/// 0 entity
/// ├── 1 physical_entity
/// │   └── 3 object
/// │       ├── 4 living_thing
/// │       │   └── 5 organism
/// │       │       ├── 6 animal ── 7 dog, 8 cat, 9 bird
/// │       │       └── 14 plant
/// │       └── 13 land ── 10 bank (river)
/// └── 2 abstraction
///     └── 12 institution ── 11 bank (financial)
/// ```
const SYNSETS: &str = "\
0,entity,that which is perceived or known or inferred to have its own distinct existence
1,physical_entity,an entity that has physical existence
2,abstraction abstract_entity,a general concept formed by extracting common features
3,object physical_object,a tangible and visible entity; an entity that can cast a shadow
4,living_thing animate_thing,a living (or once living) entity
5,organism being,a living thing that has (or can develop) the ability to act or function independently
6,animal animate_being beast,a living organism characterized by voluntary movement
7,dog domestic_dog Canis_familiaris,a member of the genus Canis
8,cat true_cat,feline mammal usually having thick soft fur, and no ability to roar
9,bird,warm-blooded egg-laying vertebrates
10,bank,sloping land (especially the slope beside a body of water)
11,bank depository_financial_institution,a financial institution that accepts deposits, and lends
12,institution,an organization founded and united for a specific purpose
13,land dry_land,the solid part of the earth's surface
14,plant flora,a living organism lacking the power of locomotion
";

const HYPERNYMS: &str = "\
1,0
2,0
3,1
4,3
5,4
6,5
7,6
8,6
9,6
10,13
11,12
12,2
13,3
14,5
";

fn taxonomy() -> Taxonomy {
    Taxonomy::from_records(SYNSETS, HYPERNYMS).expect("valid taxonomy")
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn test_counts_and_root() {
    let t = taxonomy();
    assert_eq!(t.synset_count(), 15);
    assert_eq!(t.graph().edge_count(), 14);
    assert_eq!(t.root(), 0);
}

#[test]
fn test_dog_animal_cat_scenario() {
    let t = Taxonomy::from_records("0,dog,d\n1,animal,a\n2,cat,c\n", "0,1\n2,1\n")
        .expect("valid taxonomy");
    assert_eq!(t.distance("dog", "cat").expect("known nouns"), Some(2));
    assert_eq!(t.sap("dog", "cat").expect("known nouns"), Some("animal"));
}

#[test]
fn test_cycle_is_rejected() {
    let err = Taxonomy::from_records("0,a,g\n1,b,g\n2,c,g\n", "0,1\n1,2\n2,1\n")
        .expect_err("cycle 1 -> 2 -> 1");
    match err {
        TaxonomyError::Structure(StructureError::Cycle { cycle }) => {
            assert_eq!(cycle.first(), cycle.last());
            assert!(cycle.contains(&1) && cycle.contains(&2), "cycle: {cycle:?}");
        }
        other => panic!("expected a cycle error, got {other:?}"),
    }
}

/// A cycle is reported even when the root count is also wrong.
#[test]
fn test_cycle_is_checked_before_roots() {
    let err = Taxonomy::from_records("0,a,g\n1,b,g\n", "0,1\n1,0\n").expect_err("cycle");
    assert!(matches!(
        err,
        TaxonomyError::Structure(StructureError::Cycle { .. })
    ));
}

#[test]
fn test_two_roots_are_rejected() {
    let err = Taxonomy::from_records("0,a,g\n1,b,g\n2,c,g\n", "2,0\n").expect_err("0 and 1 are roots");
    assert_eq!(
        err,
        TaxonomyError::Structure(StructureError::RootCount { roots: vec![0, 1] })
    );
}

#[test]
fn test_empty_taxonomy_has_no_root() {
    let err = Taxonomy::from_records("", "").expect_err("no synsets");
    assert_eq!(
        err,
        TaxonomyError::Structure(StructureError::RootCount { roots: vec![] })
    );
}

#[test]
fn test_single_synset_is_its_own_root() {
    let t = Taxonomy::from_records("0,thing,anything\n", "").expect("valid");
    assert_eq!(t.root(), 0);
    assert_eq!(t.distance("thing", "thing").expect("known"), Some(0));
}

#[test]
fn test_malformed_synsets_are_a_format_error() {
    let err = Taxonomy::from_records("zero,a,g\n", "").expect_err("bad id");
    assert!(matches!(
        err,
        TaxonomyError::Synsets(ParseError::InvalidInteger { line: 1, .. })
    ));
}

#[test]
fn test_duplicate_synset_id_is_a_format_error() {
    let err = Taxonomy::from_records("0,a,g\n0,b,g\n", "").expect_err("duplicate");
    assert!(matches!(
        err,
        TaxonomyError::Synsets(ParseError::DuplicateId { id: 0, .. })
    ));
}

#[test]
fn test_out_of_range_hypernym_is_a_format_error() {
    let err = Taxonomy::from_records("0,a,g\n1,b,g\n", "1,2\n").expect_err("2 is unknown");
    assert!(matches!(
        err,
        TaxonomyError::Hypernyms(ParseError::VertexOutOfRange { line: 1, .. })
    ));
}

#[test]
fn test_new_rejects_unindexed_synsets() {
    let synsets = parse::parse_synsets("0,a,g\n1,b,g\n").expect("valid");
    let swapped: Vec<Synset> = synsets.into_iter().rev().collect();
    let err = Taxonomy::new(swapped, &[]).expect_err("not indexed by id");
    assert!(matches!(
        err,
        TaxonomyError::Synsets(ParseError::IdOutOfRange { .. })
    ));
}

#[test]
fn test_structure_error_display() {
    let err = StructureError::Cycle {
        cycle: vec![4, 5, 4],
    };
    assert!(err.to_string().contains("4 -> 5 -> 4"), "{err}");

    let err = StructureError::RootCount {
        roots: vec![1, 2, 3],
    };
    assert!(err.to_string().contains('3'), "{err}");
}

/// The record error is rendered once, in the wrapper's own message, so
/// walking the error chain does not repeat it.
#[test]
fn test_record_error_is_reported_once() {
    let err = Taxonomy::from_records("0,a,g\n", "x\n").expect_err("bad hypernym id");
    let msg = err.to_string();
    assert!(msg.starts_with("hypernyms: line 1:"), "{msg}");
    assert!(std::error::Error::source(&err).is_none());

    let err = Taxonomy::from_records("zero,a,g\n", "").expect_err("bad synset id");
    assert!(err.to_string().starts_with("synsets: line 1:"), "{err}");
    assert!(std::error::Error::source(&err).is_none());
}

// ---------------------------------------------------------------------------
// Noun index
// ---------------------------------------------------------------------------

#[test]
fn test_nouns_are_distinct_and_sorted() {
    let t = taxonomy();
    let nouns: Vec<&str> = t.nouns().collect();
    assert_eq!(nouns.len(), t.noun_count());
    assert!(nouns.windows(2).all(|w| w[0] < w[1]), "{nouns:?}");
    assert_eq!(nouns.iter().filter(|n| **n == "bank").count(), 1);
}

#[test]
fn test_nouns_are_stable_across_calls() {
    let t = taxonomy();
    let first: Vec<&str> = t.nouns().collect();
    let second: Vec<&str> = t.nouns().collect();
    assert_eq!(first, second);
}

#[test]
fn test_is_noun() {
    let t = taxonomy();
    assert!(t.is_noun("dog"));
    assert!(t.is_noun("Canis_familiaris"));
    assert!(t.is_noun("depository_financial_institution"));
    assert!(!t.is_noun("unicorn"));
    assert!(!t.is_noun("dog domestic_dog"));
}

#[test]
fn test_polysemous_noun_maps_to_every_synset() {
    let t = taxonomy();
    let ids: Vec<usize> = t.synsets_of("bank").expect("indexed").iter().copied().collect();
    assert_eq!(ids, vec![10, 11]);
}

#[test]
fn test_repeated_synonym_within_one_synset_collapses() {
    let t = Taxonomy::from_records("0,thing thing,g\n", "").expect("valid");
    assert_eq!(t.synsets_of("thing").map(BTreeSet::len), Some(1));
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

#[test]
fn test_distance_and_sap() {
    let t = taxonomy();
    assert_eq!(t.distance("dog", "cat").expect("known"), Some(2));
    assert_eq!(
        t.sap("dog", "cat").expect("known"),
        Some("animal animate_being beast")
    );
    assert_eq!(t.distance("dog", "plant").expect("known"), Some(3));
    assert_eq!(t.sap("dog", "flora").expect("known"), Some("organism being"));
}

/// The closest sense of a polysemous noun decides the answer.
#[test]
fn test_polysemous_noun_uses_closest_sense() {
    let t = taxonomy();
    assert_eq!(t.distance("bank", "dog").expect("known"), Some(6));
    assert_eq!(
        t.sap("bank", "dog").expect("known"),
        Some("object physical_object")
    );
}

#[test]
fn test_polysemous_noun_against_itself() {
    let t = taxonomy();
    assert_eq!(t.distance("bank", "bank").expect("known"), Some(0));
    // Lowest id among the matching senses.
    assert_eq!(t.sap("bank", "bank").expect("known"), Some("bank"));
    assert_eq!(
        t.relation("bank", "bank").expect("known").map(|(_, s)| s.id),
        Some(10)
    );
}

#[test]
fn test_distance_is_symmetric() {
    // Separate taxonomies, so the reversed query is computed rather than
    // answered from the forward query's cache slot.
    let forward = taxonomy();
    let backward = taxonomy();
    let nouns: Vec<&str> = forward.nouns().collect();
    for a in &nouns {
        for b in &nouns {
            assert_eq!(
                forward.distance(a, b).expect("known"),
                backward.distance(b, a).expect("known"),
                "({a}, {b})"
            );
            assert_eq!(
                forward.sap(a, b).expect("known"),
                backward.sap(b, a).expect("known"),
                "({a}, {b})"
            );
        }
    }
}

/// Every pair in a rooted DAG shares at least the root.
#[test]
fn test_every_pair_has_an_ancestor() {
    let t = taxonomy();
    let nouns: Vec<&str> = t.nouns().collect();
    for a in &nouns {
        for b in &nouns {
            assert!(t.distance(a, b).expect("known").is_some(), "({a}, {b})");
        }
    }
}

#[test]
fn test_relation_matches_distance_and_sap() {
    let t = taxonomy();
    let (length, synset) = t
        .relation("bird", "cat")
        .expect("known")
        .expect("common ancestor");
    assert_eq!(Some(length), t.distance("bird", "cat").expect("known"));
    assert_eq!(Some(synset.name()), t.sap("bird", "cat").expect("known"));
    assert_eq!(synset.id, 6);
}

#[test]
fn test_unknown_noun_is_rejected() {
    let t = taxonomy();
    assert_eq!(
        t.distance("dog", "unicorn"),
        Err(TaxonomyError::UnknownNoun("unicorn".to_owned()))
    );
    assert_eq!(
        t.sap("griffin", "dog"),
        Err(TaxonomyError::UnknownNoun("griffin".to_owned()))
    );
}
