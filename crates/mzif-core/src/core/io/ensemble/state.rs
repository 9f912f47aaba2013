use super::line::{InvalidToken, Line, MalformedModelHeader, ModelHeader, parse_row};
use crate::core::models::builder::{BlockBuildError, BlockBuilder};
use crate::core::models::ids::StructureId;
use crate::core::models::model::Model;
use thiserror::Error;

/// A model whose header has been read and whose rows are being collected.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingModel {
    pub header: ModelHeader,
    pub blocks: BlockBuilder,
}

impl PendingModel {
    pub fn new(header: ModelHeader) -> Self {
        Self {
            header,
            blocks: BlockBuilder::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ParserState {
    /// No model is open: the next row would have nowhere to go.
    #[default]
    AwaitingModel,
    Accumulating(PendingModel),
    /// The last header was malformed; rows are dropped until the next header.
    Skipping,
}

/// Something a transition produced for the caller to act on.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Identifier(StructureId),
    Model(Model),
    SkippedHeader(MalformedModelHeader),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StepError {
    #[error("Malformed numeric row: {0}")]
    MalformedNumericRow(#[from] InvalidToken),
    #[error("Numeric row does not belong to any model")]
    RowOutsideModel,
    #[error(transparent)]
    Block(#[from] BlockBuildError),
}

impl ParserState {
    /// Consumes one classified line and returns the next state together with
    /// whatever it emitted.
    ///
    /// An identifier line only switches the active structure: skipping stays in
    /// force and a model mid-accumulation keeps collecting rows, so it ends up
    /// under the new identifier. A new header drops a model still short of
    /// rows; callers that want to report the loss can check
    /// [`ParserState::is_accumulating`] before stepping.
    pub fn step(self, line: Line<'_>) -> Result<(Self, Option<Event>), StepError> {
        match (self, line) {
            (state, Line::Identifier(id)) => Ok((state, Some(Event::Identifier(id)))),
            (_, Line::ModelHeader(header)) => {
                Ok((ParserState::Accumulating(PendingModel::new(header)), None))
            }
            (_, Line::MalformedHeader(defect)) => {
                Ok((ParserState::Skipping, Some(Event::SkippedHeader(defect))))
            }
            (ParserState::Skipping, Line::Row(_)) => Ok((ParserState::Skipping, None)),
            (ParserState::AwaitingModel, Line::Row(_)) => Err(StepError::RowOutsideModel),
            (ParserState::Accumulating(mut pending), Line::Row(text)) => {
                let row = parse_row(text)?;
                match pending.blocks.push_row(&row)? {
                    Some(blocks) => {
                        let model = Model::new(pending.header.energy, pending.header.rmsd, blocks);
                        Ok((ParserState::AwaitingModel, Some(Event::Model(model))))
                    }
                    None => Ok((ParserState::Accumulating(pending), None)),
                }
            }
        }
    }

    pub fn is_accumulating(&self) -> bool {
        matches!(self, ParserState::Accumulating(_))
    }
}
