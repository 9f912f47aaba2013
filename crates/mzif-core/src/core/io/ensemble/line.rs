use crate::core::models::ids::StructureId;
use thiserror::Error;

/// Literal that opens every model header line.
pub const MODEL_TAG: &str = "MODEL";
/// `MODEL <n> <label> <energy> <rmsd>`
pub const MODEL_HEADER_TOKENS: usize = 5;

const ENERGY_TOKEN: usize = 3;
const RMSD_TOKEN: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelHeader {
    pub energy: f64,
    pub rmsd: f64,
}

/// Why a `MODEL` line could not start a model. Always recoverable: the
/// model is skipped and counted.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MalformedModelHeader {
    #[error("expected {expected} tokens, found {0}", expected = MODEL_HEADER_TOKENS)]
    TokenCount(usize),
    #[error("'{0}' is not a valid score")]
    InvalidScore(String),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("'{0}' is not a number")]
pub struct InvalidToken(pub String);

/// A classified, whitespace-trimmed input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Line<'a> {
    Identifier(StructureId),
    ModelHeader(ModelHeader),
    MalformedHeader(MalformedModelHeader),
    Row(&'a str),
}

/// Classifies one raw line. Returns `None` for blank lines.
///
/// Rules apply in priority order: a 4-character line is an identifier, a line
/// starting with `MODEL` is a header, anything else is a numeric row.
pub fn classify(raw: &str) -> Option<Line<'_>> {
    let line = raw.trim();
    if line.is_empty() {
        return None;
    }
    if let Ok(id) = line.parse::<StructureId>() {
        return Some(Line::Identifier(id));
    }
    if line.starts_with(MODEL_TAG) {
        return Some(match parse_model_header(line) {
            Ok(header) => Line::ModelHeader(header),
            Err(defect) => Line::MalformedHeader(defect),
        });
    }
    Some(Line::Row(line))
}

fn parse_model_header(line: &str) -> Result<ModelHeader, MalformedModelHeader> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != MODEL_HEADER_TOKENS {
        return Err(MalformedModelHeader::TokenCount(tokens.len()));
    }
    let score = |idx: usize| {
        tokens[idx]
            .parse::<f64>()
            .map_err(|_| MalformedModelHeader::InvalidScore(tokens[idx].to_string()))
    };
    Ok(ModelHeader {
        energy: score(ENERGY_TOKEN)?,
        rmsd: score(RMSD_TOKEN)?,
    })
}

/// Parses every whitespace-separated token of a row as `f64`.
pub fn parse_row(line: &str) -> Result<Vec<f64>, InvalidToken> {
    line.split_whitespace()
        .map(|token| {
            token
                .parse::<f64>()
                .map_err(|_| InvalidToken(token.to_string()))
        })
        .collect()
}
