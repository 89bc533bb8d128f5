//! Line-oriented record parsing for synsets, hypernyms, and raw digraphs.
//!
//! All parsers take the full text content (the CLI does the reading) and
//! report failures with 1-based line numbers. Blank lines are skipped and
//! fields are trimmed.
//!
//! # Synset records
//!
//! `id,synonym1 synonym2 ...,gloss text`. The line is split on its first two
//! commas only, so the gloss may itself contain commas.
//!
//! # Hypernym records
//!
//! `id,parent_1,parent_2,...`. Empty fields (e.g. a trailing comma) are
//! ignored.
//!
//! # Digraph text
//!
//! Whitespace-separated integers: vertex count `V`, edge count `E`, then `E`
//! pairs `v w`, each producing the edge `v -> w`.

use crate::graph::{Digraph, DigraphBuilder, GraphError, MAX_VERTEX_COUNT};

/// A malformed input record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A required comma-separated field is absent.
    #[error("line {line}: missing {field} field")]
    MissingField {
        /// 1-based line number.
        line: usize,
        /// Name of the missing field.
        field: &'static str,
    },

    /// A field that must be a non-negative integer is not one.
    #[error("line {line}: expected a non-negative integer, got {value:?}")]
    InvalidInteger {
        /// 1-based line number.
        line: usize,
        /// The rejected text.
        value: String,
    },

    /// A synset record lists no synonyms.
    #[error("line {line}: synset has no synonyms")]
    EmptySynonyms {
        /// 1-based line number.
        line: usize,
    },

    /// Two synset records share an id.
    #[error("line {line}: duplicate synset id {id}")]
    DuplicateId {
        /// 1-based line number of the second occurrence.
        line: usize,
        /// The repeated id.
        id: usize,
    },

    /// Synset ids do not form the dense range `[0, synset_count)`.
    #[error("line {line}: synset id {id} is outside 0..{synset_count}")]
    IdOutOfRange {
        /// 1-based line number.
        line: usize,
        /// The offending id.
        id: usize,
        /// Total number of synset records.
        synset_count: usize,
    },

    /// A record references a vertex the graph does not have.
    #[error("line {line}: {source}")]
    VertexOutOfRange {
        /// 1-based line number.
        line: usize,
        /// The underlying range failure.
        source: GraphError,
    },

    /// Digraph text ended before the declared number of values was read.
    #[error("unexpected end of input: expected {expected}")]
    UnexpectedEof {
        /// What the parser was looking for.
        expected: &'static str,
    },

    /// Digraph text declares more vertices than a graph can hold.
    #[error("vertex count {vertex_count} exceeds the limit of {limit}")]
    TooManyVertices {
        /// The declared vertex count.
        vertex_count: usize,
        /// [`MAX_VERTEX_COUNT`].
        limit: usize,
    },

    /// Digraph text has values after the last declared edge.
    #[error("line {line}: unexpected trailing input {value:?}")]
    TrailingInput {
        /// 1-based line number.
        line: usize,
        /// The first unexpected token.
        value: String,
    },
}

/// One concept of the taxonomy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Synset {
    /// Dense vertex id.
    pub id: usize,
    /// Raw synonym field, e.g. `"dog domestic_dog Canis_familiaris"`.
    pub name: String,
    /// The individual words of `name`.
    pub synonyms: Vec<String>,
    /// Free-text definition.
    pub gloss: String,
}

impl Synset {
    /// Display string for the synset: its raw synonym field.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// One hypernym record: `id` is-a each of `parents`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HypernymRecord {
    /// 1-based line number the record came from.
    pub line: usize,
    /// The specific concept.
    pub id: usize,
    /// The more general concepts.
    pub parents: Vec<usize>,
}

/// Iterates over `(line_number, trimmed_line)` for every non-blank line.
fn records(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty())
}

fn parse_usize(line: usize, value: &str) -> Result<usize, ParseError> {
    value
        .trim()
        .parse::<usize>()
        .map_err(|_| ParseError::InvalidInteger {
            line,
            value: value.trim().to_owned(),
        })
}

/// Parses synset records and returns them indexed by id.
///
/// The returned vector has `synsets[i].id == i` for every `i`.
///
/// # Errors
///
/// - [`ParseError::MissingField`]: fewer than three fields.
/// - [`ParseError::InvalidInteger`]: the id is not a non-negative integer.
/// - [`ParseError::EmptySynonyms`]: the synonym field is blank.
/// - [`ParseError::DuplicateId`]: an id appears twice.
/// - [`ParseError::IdOutOfRange`]: ids are not exactly `0..N`.
pub fn parse_synsets(text: &str) -> Result<Vec<Synset>, ParseError> {
    let mut parsed: Vec<(usize, Synset)> = Vec::new();

    for (line, record) in records(text) {
        let mut fields = record.splitn(3, ',');
        let id_field = fields.next().unwrap_or_default();
        let name = fields.next().ok_or(ParseError::MissingField {
            line,
            field: "synonyms",
        })?;
        let gloss = fields.next().ok_or(ParseError::MissingField {
            line,
            field: "gloss",
        })?;

        let id = parse_usize(line, id_field)?;
        let synonyms: Vec<String> = name.split_whitespace().map(str::to_owned).collect();
        if synonyms.is_empty() {
            return Err(ParseError::EmptySynonyms { line });
        }

        parsed.push((
            line,
            Synset {
                id,
                name: name.trim().to_owned(),
                synonyms,
                gloss: gloss.trim().to_owned(),
            },
        ));
    }

    let synset_count = parsed.len();
    let mut slots: Vec<Option<Synset>> = vec![None; synset_count];
    for (line, synset) in parsed {
        let id = synset.id;
        let slot = slots.get_mut(id).ok_or(ParseError::IdOutOfRange {
            line,
            id,
            synset_count,
        })?;
        if slot.is_some() {
            return Err(ParseError::DuplicateId { line, id });
        }
        *slot = Some(synset);
    }

    // N unique ids all below N fill every slot.
    Ok(slots.into_iter().flatten().collect())
}

/// Parses hypernym records.
///
/// Range checking against the synset count happens when the edges are added
/// to a graph; see [`add_hypernym_edges`].
///
/// # Errors
///
/// Returns [`ParseError::InvalidInteger`] for any non-integer field.
pub fn parse_hypernyms(text: &str) -> Result<Vec<HypernymRecord>, ParseError> {
    records(text)
        .map(|(line, record)| {
            let mut fields = record.split(',');
            let id = parse_usize(line, fields.next().unwrap_or_default())?;
            let parents = fields
                .filter(|f| !f.trim().is_empty())
                .map(|f| parse_usize(line, f))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(HypernymRecord { line, id, parents })
        })
        .collect()
}

/// Adds one edge per `(record.id, parent)` pair to `builder`.
///
/// # Errors
///
/// Returns [`ParseError::VertexOutOfRange`] for the first record whose id or
/// parent is not a vertex of `builder`.
pub fn add_hypernym_edges(
    builder: &mut DigraphBuilder,
    hypernyms: &[HypernymRecord],
) -> Result<(), ParseError> {
    for record in hypernyms {
        builder
            .check_vertex(record.id)
            .map_err(|source| ParseError::VertexOutOfRange {
                line: record.line,
                source,
            })?;
        for &parent in &record.parents {
            builder
                .add_edge(record.id, parent)
                .map_err(|source| ParseError::VertexOutOfRange {
                    line: record.line,
                    source,
                })?;
        }
    }
    Ok(())
}

/// Parses digraph text into a [`Digraph`].
///
/// # Errors
///
/// - [`ParseError::UnexpectedEof`]: fewer values than declared.
/// - [`ParseError::InvalidInteger`]: a token is not a non-negative integer.
/// - [`ParseError::TooManyVertices`]: `V` exceeds [`MAX_VERTEX_COUNT`].
/// - [`ParseError::VertexOutOfRange`]: an edge endpoint is `>= V`.
/// - [`ParseError::TrailingInput`]: values after the last edge.
pub fn parse_digraph(text: &str) -> Result<Digraph, ParseError> {
    let mut tokens = text
        .lines()
        .enumerate()
        .flat_map(|(i, l)| l.split_whitespace().map(move |t| (i + 1, t)));

    let mut next_usize = |expected: &'static str| -> Result<(usize, usize), ParseError> {
        let (line, token) = tokens.next().ok_or(ParseError::UnexpectedEof { expected })?;
        Ok((line, parse_usize(line, token)?))
    };

    let (_, vertex_count) = next_usize("vertex count")?;
    if vertex_count > MAX_VERTEX_COUNT {
        return Err(ParseError::TooManyVertices {
            vertex_count,
            limit: MAX_VERTEX_COUNT,
        });
    }
    let (_, edge_count) = next_usize("edge count")?;

    // Every edge takes at least two bytes of text, so the declared count
    // cannot force a reservation larger than the input.
    let edge_hint = edge_count.min(text.len() / 2);
    let mut builder = DigraphBuilder::with_capacity(vertex_count, edge_hint);
    for _ in 0..edge_count {
        let (line, v) = next_usize("edge source")?;
        let (_, w) = next_usize("edge target")?;
        builder
            .add_edge(v, w)
            .map_err(|source| ParseError::VertexOutOfRange { line, source })?;
    }

    if let Some((line, token)) = tokens.next() {
        return Err(ParseError::TrailingInput {
            line,
            value: token.to_owned(),
        });
    }

    Ok(builder.build())
}
