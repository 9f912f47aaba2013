use crate::core::io::ensemble::{ParseOutcome, parse_ensemble};
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{info, instrument};

/// Parses an ensemble text file into raw entries.
///
/// The file size drives byte-progress events on `reporter`.
#[instrument(skip_all, name = "convert_workflow")]
pub fn run(input: &Path, reporter: &ProgressReporter) -> Result<ParseOutcome, EngineError> {
    let open_err = |source| EngineError::Open {
        path: input.to_path_buf(),
        source,
    };
    let file = File::open(input).map_err(open_err)?;
    let total_bytes = file.metadata().map_err(open_err)?.len();

    reporter.report(Progress::PhaseStart {
        name: "Parsing ensemble",
    });
    info!("Parsing {:?} ({} bytes).", input, total_bytes);

    let outcome = parse_ensemble(BufReader::new(file), Some(total_bytes), reporter)?;

    reporter.report(Progress::PhaseFinish);
    info!(
        "Parsed {} structures with {} models ({} skipped).",
        outcome.entries.len(),
        outcome.model_count(),
        outcome.skipped_count()
    );
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::io::ensemble::ParseError;
    use crate::core::models::dataset::Dataset;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn converts_a_file_into_a_raw_dataset() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ensemble.dat");
        fs::write(
            &path,
            "1ABC\nMODEL 1 x 1.5 2.3\n1 0\n0 1\n1 0\n0 1\n1 0\n0 1\n",
        )
        .unwrap();

        let outcome = run(&path, &ProgressReporter::new()).unwrap();
        let Dataset::Raw(entries) = outcome.into_dataset() else {
            panic!("expected raw dataset");
        };

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id.as_str(), "1ABC");
        assert_eq!(entries[0].models.len(), 1);
        assert_eq!(entries[0].models[0].energy, 1.5);
        assert_eq!(entries[0].models[0].rmsd, 2.3);
        assert!(entries[0].models[0].blocks.iter().all(|b| b.side() == 2));
    }

    #[test]
    fn missing_input_reports_the_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.dat");

        let err = run(&path, &ProgressReporter::new()).unwrap_err();
        match err {
            EngineError::Open { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn malformed_row_aborts_the_conversion() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.dat");
        fs::write(&path, "1ABC\nMODEL 1 x 1.5 2.3\n1 zero\n").unwrap();

        let err = run(&path, &ProgressReporter::new()).unwrap_err();
        assert!(matches!(err, EngineError::Parse(ParseError::Line { line: 3, .. })));
    }
}
