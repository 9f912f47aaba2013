use crate::core::models::dataset::{Dataset, DatasetForm};
use crate::engine::error::EngineError;
use crate::engine::partition::partition;
use crate::engine::progress::{Progress, ProgressReporter};
use tracing::{info, instrument};

/// Partitions a raw dataset into native/decoy buckets at `threshold`.
#[instrument(skip_all, name = "split_workflow", fields(threshold = threshold))]
pub fn run(
    dataset: Dataset,
    threshold: f64,
    reporter: &ProgressReporter,
) -> Result<Dataset, EngineError> {
    let entries = match dataset {
        Dataset::Raw(entries) => entries,
        Dataset::Split(_) => {
            return Err(EngineError::UnexpectedForm {
                expected: DatasetForm::Raw,
                found: DatasetForm::Split,
            });
        }
    };

    reporter.report(Progress::PhaseStart {
        name: "Splitting models",
    });
    info!(
        "Splitting {} structures at RMSD threshold {}.",
        entries.len(),
        threshold
    );
    let split = partition(entries, threshold, reporter)?;
    reporter.report(Progress::PhaseFinish);

    Ok(Dataset::Split(split))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::block::SparseBlock;
    use crate::core::models::dataset::RawEntry;
    use crate::core::models::model::Model;

    fn model(rmsd: f64) -> Model {
        let block = SparseBlock::from_row_major(1, &[1.0]).unwrap();
        Model::new(0.0, rmsd, [block.clone(), block.clone(), block])
    }

    #[test]
    fn raw_dataset_becomes_split() {
        let raw = Dataset::Raw(vec![RawEntry {
            id: "1ABC".parse().unwrap(),
            models: vec![model(0.5), model(4.0)],
        }]);

        let split = run(raw, 2.0, &ProgressReporter::new()).unwrap();
        let entry = split.split_entry("1ABC").unwrap();
        assert_eq!(entry.native, vec![model(0.5)]);
        assert_eq!(entry.decoy, vec![model(4.0)]);
    }

    #[test]
    fn split_dataset_cannot_be_split_again() {
        let already = Dataset::Split(vec![]);
        let err = run(already, 2.0, &ProgressReporter::new()).unwrap_err();
        assert!(matches!(
            err,
            EngineError::UnexpectedForm {
                expected: DatasetForm::Raw,
                found: DatasetForm::Split
            }
        ));
    }
}
