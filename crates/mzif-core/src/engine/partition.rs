use super::progress::{Progress, ProgressReporter};
use crate::core::models::dataset::{RawEntry, SplitEntry};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, PartialEq)]
pub enum PartitionError {
    #[error("Split threshold must be a number, got {0}")]
    InvalidThreshold(f64),
    #[error("Model {index} of {id} has no usable RMSD score: {record}")]
    UnusableScore {
        id: String,
        /// 1-based position of the model in its entry.
        index: usize,
        record: String,
    },
}

/// Routes every model to `native` when `rmsd < threshold` and to `decoy`
/// otherwise, keeping the original relative order inside each bucket.
///
/// Each finished entry is reported as [`Progress::EntrySplit`].
pub fn partition(
    entries: Vec<RawEntry>,
    threshold: f64,
    reporter: &ProgressReporter,
) -> Result<Vec<SplitEntry>, PartitionError> {
    if threshold.is_nan() {
        return Err(PartitionError::InvalidThreshold(threshold));
    }

    let mut split = Vec::with_capacity(entries.len());
    for entry in entries {
        let total = entry.models.len();
        let mut bucketed = SplitEntry::new(entry.id);

        for (i, model) in entry.models.into_iter().enumerate() {
            if model.rmsd.is_nan() {
                return Err(PartitionError::UnusableScore {
                    id: bucketed.id.to_string(),
                    index: i + 1,
                    record: model.to_string(),
                });
            }
            if model.rmsd < threshold {
                bucketed.native.push(model);
            } else {
                bucketed.decoy.push(model);
            }
        }

        debug!(
            "{}: {} models split {}/{}",
            bucketed.id,
            total,
            bucketed.native.len(),
            bucketed.decoy.len()
        );
        reporter.report(Progress::EntrySplit {
            id: bucketed.id.to_string(),
            total,
            native: bucketed.native.len(),
            decoy: bucketed.decoy.len(),
        });
        split.push(bucketed);
    }
    Ok(split)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::block::SparseBlock;
    use crate::core::models::model::Model;
    use std::sync::{Arc, Mutex};

    fn model(energy: f64, rmsd: f64) -> Model {
        let block = SparseBlock::from_row_major(1, &[energy]).unwrap();
        Model::new(energy, rmsd, [block.clone(), block.clone(), block])
    }

    fn entry(id: &str, rmsds: &[f64]) -> RawEntry {
        RawEntry {
            id: id.parse().unwrap(),
            models: rmsds
                .iter()
                .enumerate()
                .map(|(i, &r)| model(i as f64, r))
                .collect(),
        }
    }

    fn energies(models: &[Model]) -> Vec<f64> {
        models.iter().map(|m| m.energy).collect()
    }

    #[test]
    fn models_below_threshold_are_native() {
        let split = partition(vec![entry("1ABC", &[0.5, 4.0])], 2.0, &ProgressReporter::new())
            .unwrap();

        assert_eq!(split.len(), 1);
        assert_eq!(split[0].native.len(), 1);
        assert_eq!(split[0].native[0].rmsd, 0.5);
        assert_eq!(split[0].decoy.len(), 1);
        assert_eq!(split[0].decoy[0].rmsd, 4.0);
    }

    #[test]
    fn threshold_itself_goes_to_decoy() {
        let split = partition(vec![entry("1ABC", &[2.0])], 2.0, &ProgressReporter::new()).unwrap();
        assert!(split[0].native.is_empty());
        assert_eq!(split[0].decoy.len(), 1);
    }

    #[test]
    fn buckets_cover_all_models_and_keep_order() {
        let rmsds = [3.0, 0.1, 5.5, 1.9, 0.0, 2.0, 7.2, 1.0];
        let split = partition(vec![entry("1ABC", &rmsds)], 2.0, &ProgressReporter::new()).unwrap();

        assert_eq!(split[0].len(), rmsds.len());
        assert_eq!(energies(&split[0].native), vec![1.0, 3.0, 4.0, 7.0]);
        assert_eq!(energies(&split[0].decoy), vec![0.0, 2.0, 5.0, 6.0]);
        assert!(split[0].native.iter().all(|m| m.rmsd < 2.0));
        assert!(split[0].decoy.iter().all(|m| m.rmsd >= 2.0));
    }

    #[test]
    fn entry_order_and_empty_entries_are_preserved() {
        let split = partition(
            vec![entry("2XYZ", &[]), entry("1ABC", &[9.0])],
            2.0,
            &ProgressReporter::new(),
        )
        .unwrap();

        let ids: Vec<_> = split.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["2XYZ", "1ABC"]);
        assert!(split[0].is_empty());
    }

    #[test]
    fn nan_score_is_a_hard_error() {
        let err = partition(
            vec![entry("1ABC", &[0.5, f64::NAN])],
            2.0,
            &ProgressReporter::new(),
        )
        .unwrap_err();

        match err {
            PartitionError::UnusableScore { id, index, record } => {
                assert_eq!(id, "1ABC");
                assert_eq!(index, 2);
                assert!(record.contains("rmsd: NaN"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn nan_threshold_is_rejected() {
        let err = partition(vec![], f64::NAN, &ProgressReporter::new()).unwrap_err();
        assert!(matches!(err, PartitionError::InvalidThreshold(_)));
    }

    #[test]
    fn each_entry_reports_its_split_counts() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        let reporter = ProgressReporter::with_callback(Box::new(move |p| {
            sink.lock().unwrap().push(p);
        }));

        partition(
            vec![entry("1ABC", &[0.5, 4.0, 1.0]), entry("2XYZ", &[3.0])],
            2.0,
            &reporter,
        )
        .unwrap();

        assert_eq!(
            *events.lock().unwrap(),
            vec![
                Progress::EntrySplit {
                    id: "1ABC".to_string(),
                    total: 3,
                    native: 2,
                    decoy: 1
                },
                Progress::EntrySplit {
                    id: "2XYZ".to_string(),
                    total: 1,
                    native: 0,
                    decoy: 1
                },
            ]
        );
    }
}
