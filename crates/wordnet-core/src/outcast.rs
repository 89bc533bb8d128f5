//! Outcast detection: which noun in a list is least related to the rest.
//!
//! For nouns `x_1 .. x_n`, each noun's score is the sum of its taxonomy
//! distances to every noun in the list, itself included. The noun with the
//! largest score is the outcast; ties go to the earliest position.

use crate::taxonomy::{Taxonomy, TaxonomyError};

/// Errors returned by [`outcast`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OutcastError {
    /// Fewer than two nouns were given.
    #[error("outcast needs at least two nouns, got {count}")]
    TooFewNouns {
        /// Number of nouns supplied.
        count: usize,
    },

    /// Two nouns share no common ancestor.
    #[error("nouns {a:?} and {b:?} have no common ancestor")]
    Disconnected {
        /// First noun of the pair.
        a: String,
        /// Second noun of the pair.
        b: String,
    },

    /// A taxonomy query failed, typically an unknown noun.
    #[error(transparent)]
    Taxonomy(#[from] TaxonomyError),
}

/// Returns the noun in `nouns` with the greatest summed distance to the
/// others.
///
/// # Errors
///
/// - [`OutcastError::TooFewNouns`] for fewer than two nouns.
/// - [`OutcastError::Taxonomy`] if a noun is not in the taxonomy.
/// - [`OutcastError::Disconnected`] if some pair has no common ancestor.
pub fn outcast<'n, S: AsRef<str>>(
    taxonomy: &Taxonomy,
    nouns: &'n [S],
) -> Result<&'n str, OutcastError> {
    if nouns.len() < 2 {
        return Err(OutcastError::TooFewNouns { count: nouns.len() });
    }

    // Distances are symmetric, so fill the upper triangle and mirror it.
    let mut totals = vec![0usize; nouns.len()];
    for (i, a) in nouns.iter().enumerate() {
        let a = a.as_ref();
        for (j, b) in nouns.iter().enumerate().skip(i + 1) {
            let b = b.as_ref();
            let d = taxonomy
                .distance(a, b)?
                .ok_or_else(|| OutcastError::Disconnected {
                    a: a.to_owned(),
                    b: b.to_owned(),
                })?;
            totals[i] += d;
            totals[j] += d;
        }
    }

    let mut best = 0;
    for (i, total) in totals.iter().enumerate().skip(1) {
        if *total > totals[best] {
            best = i;
        }
    }
    tracing::debug!(?totals, outcast = nouns[best].as_ref(), "outcast scored");
    Ok(nouns[best].as_ref())
}
