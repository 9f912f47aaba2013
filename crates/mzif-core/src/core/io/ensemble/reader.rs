use super::line::{Line, classify};
use super::state::{Event, ParserState, StepError};
use crate::core::models::dataset::{Dataset, RawEntry};
use crate::engine::progress::{Progress, ProgressReporter, percent_of};
use std::io::{self, BufRead};
use thiserror::Error;
use tracing::{debug, trace};

/// Rows between two byte-position updates sent to the reporter.
const ADVANCE_EVERY_LINES: usize = 1024;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Line {line}: {source} (line was '{content}')")]
    Line {
        line: usize,
        content: String,
        #[source]
        source: StepError,
    },
    #[error("Line {line}: model header appears before any structure identifier")]
    MissingIdentifier { line: usize },
}

/// One identifier block of the input and the number of model headers that
/// were skipped inside it.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedEntry {
    pub entry: RawEntry,
    pub skipped: usize,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParseOutcome {
    pub entries: Vec<ParsedEntry>,
}

impl ParseOutcome {
    pub fn model_count(&self) -> usize {
        self.entries.iter().map(|e| e.entry.models.len()).sum()
    }

    pub fn skipped_count(&self) -> usize {
        self.entries.iter().map(|e| e.skipped).sum()
    }

    pub fn into_dataset(self) -> Dataset {
        Dataset::Raw(self.entries.into_iter().map(|e| e.entry).collect())
    }
}

/// Line-at-a-time driver around [`ParserState`].
///
/// Owns the entry being filled and the byte counter used for progress. Feed
/// lines in file order with [`EnsembleParser::feed_line`] and call
/// [`EnsembleParser::finish`] at end of input.
pub struct EnsembleParser<'r, 'a> {
    state: ParserState,
    current: Option<ParsedEntry>,
    entries: Vec<ParsedEntry>,
    bytes_read: u64,
    total_bytes: Option<u64>,
    lines_since_advance: usize,
    reporter: &'r ProgressReporter<'a>,
}

impl<'r, 'a> EnsembleParser<'r, 'a> {
    pub fn new(total_bytes: Option<u64>, reporter: &'r ProgressReporter<'a>) -> Self {
        if let Some(total_steps) = total_bytes {
            reporter.report(Progress::TaskStart { total_steps });
        }
        Self {
            state: ParserState::default(),
            current: None,
            entries: Vec::new(),
            bytes_read: 0,
            total_bytes,
            lines_since_advance: 0,
            reporter,
        }
    }

    /// Processes one raw line (newline included or not). `line_no` is 1-based
    /// and only used in diagnostics; `bytes` is what the line occupied in the
    /// input.
    pub fn feed_line(&mut self, line_no: usize, raw: &str, bytes: u64) -> Result<(), ParseError> {
        self.bytes_read += bytes;
        self.advance();

        let Some(line) = classify(raw) else {
            return Ok(());
        };

        let is_header = matches!(line, Line::ModelHeader(_) | Line::MalformedHeader(_));
        if is_header && self.current.is_none() {
            return Err(ParseError::MissingIdentifier { line: line_no });
        }
        if is_header && self.state.is_accumulating() {
            debug!(
                "Line {}: discarding a model that never received all of its rows",
                line_no
            );
        }

        let state = std::mem::take(&mut self.state);
        let (next, event) = state.step(line).map_err(|source| ParseError::Line {
            line: line_no,
            content: raw.trim().to_string(),
            source,
        })?;
        self.state = next;

        match event {
            None => {}
            Some(Event::Identifier(id)) => {
                self.close_entry();
                trace!("Line {}: entering structure {}", line_no, id);
                self.current = Some(ParsedEntry {
                    entry: RawEntry::new(id),
                    skipped: 0,
                });
            }
            Some(Event::Model(model)) => match self.current.as_mut() {
                Some(current) => current.entry.models.push(model),
                None => return Err(ParseError::MissingIdentifier { line: line_no }),
            },
            Some(Event::SkippedHeader(defect)) => {
                if let Some(current) = self.current.as_mut() {
                    current.skipped += 1;
                    debug!(
                        "Line {}: skipping model of {}: {}",
                        line_no, current.entry.id, defect
                    );
                }
            }
        }
        Ok(())
    }

    /// Ends the input. A model still short of rows is dropped silently.
    pub fn finish(mut self) -> ParseOutcome {
        if self.state.is_accumulating() {
            debug!("Input ended inside a model; the partial model is dropped.");
        }
        self.close_entry();
        if self.total_bytes.is_some() {
            self.reporter.report(Progress::TaskAdvance {
                position: self.bytes_read,
            });
            self.reporter.report(Progress::TaskFinish);
        }
        ParseOutcome {
            entries: self.entries,
        }
    }

    fn close_entry(&mut self) {
        let Some(done) = self.current.take() else {
            return;
        };
        self.reporter.report(Progress::EntryParsed {
            id: done.entry.id.to_string(),
            percent: self.total_bytes.and_then(|t| percent_of(self.bytes_read, t)),
            models: done.entry.models.len(),
            skipped: done.skipped,
        });
        self.entries.push(done);
    }

    fn advance(&mut self) {
        if self.total_bytes.is_none() {
            return;
        }
        self.lines_since_advance += 1;
        if self.lines_since_advance >= ADVANCE_EVERY_LINES {
            self.lines_since_advance = 0;
            self.reporter.report(Progress::TaskAdvance {
                position: self.bytes_read,
            });
        }
    }
}

/// Parses a whole ensemble text stream into raw entries.
///
/// `total_bytes` is the input size if known; it only drives progress events.
pub fn parse_ensemble<R: BufRead>(
    mut reader: R,
    total_bytes: Option<u64>,
    reporter: &ProgressReporter<'_>,
) -> Result<ParseOutcome, ParseError> {
    let mut parser = EnsembleParser::new(total_bytes, reporter);
    let mut buf = String::new();
    let mut line_no = 0;

    loop {
        buf.clear();
        let bytes = reader.read_line(&mut buf)?;
        if bytes == 0 {
            break;
        }
        line_no += 1;
        parser.feed_line(line_no, &buf, bytes as u64)?;
    }

    Ok(parser.finish())
}
