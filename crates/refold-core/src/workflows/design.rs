use tracing::{info, instrument};

use crate::core::models::sequence::NucleotideSequence;
use crate::engine::backend::FoldingBackend;
use crate::engine::config::DesignConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::provider::{StartProvider, StartRequest};
use crate::engine::search::InverseFolder;

#[derive(Debug, Clone)]
pub struct DesignRecord {
    /// 1-based position of the design within the run.
    pub index: usize,
    pub sequence: NucleotideSequence,
    /// Positions changed relative to the original start.
    pub hamming_distance: usize,
    pub gc_fraction: f64,
}

#[derive(Debug, Clone)]
pub struct DesignReport {
    /// The canonical start the whole run derived its designs from.
    pub start: NucleotideSequence,
    pub records: Vec<DesignRecord>,
}

/// Runs a complete design batch: one start, `count` distinct designs.
#[instrument(skip_all, name = "design_workflow")]
pub fn run(
    config: &DesignConfig,
    backend: Box<dyn FoldingBackend>,
    provider: &mut dyn StartProvider,
    request: StartRequest,
    count: usize,
    reporter: &ProgressReporter,
) -> Result<DesignReport, EngineError> {
    let mut engine = InverseFolder::new(config.clone(), backend);
    engine.query_start(provider, request)?;
    let start = engine
        .original_start()
        .ok_or(EngineError::StartNotSet)?
        .clone();

    info!(start = %start, count, "starting design run");
    reporter.report(Progress::SearchStart {
        total: count as u64,
    });

    let mut records = Vec::with_capacity(count);
    for index in 1..=count {
        let sequence = engine.fold_inverse()?;
        let hamming_distance = start.hamming_distance(&sequence)?;
        let gc_fraction = sequence.gc_fraction();
        info!(design = %sequence, hamming_distance, "design accepted");
        reporter.report(Progress::DesignAccepted {
            index: index as u64,
            total: count as u64,
        });
        records.push(DesignRecord {
            index,
            sequence,
            hamming_distance,
            gc_fraction,
        });
    }

    reporter.report(Progress::SearchFinish);
    info!(designs = records.len(), "design run complete");
    Ok(DesignReport { start, records })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::structure::TargetStructure;
    use crate::engine::backend::{BackendError, FoldOutcome};
    use crate::engine::config::DesignConfigBuilder;
    use crate::engine::provider::TemplateStartProvider;
    use std::sync::Mutex;

    struct ScriptedBackend {
        outcomes: Vec<FoldOutcome>,
        calls: usize,
    }

    impl FoldingBackend for ScriptedBackend {
        fn execute(&mut self, _start: &NucleotideSequence) -> Result<FoldOutcome, BackendError> {
            let outcome = self.outcomes[self.calls.min(self.outcomes.len() - 1)].clone();
            self.calls += 1;
            Ok(outcome)
        }
    }

    fn outcome(candidate: &str) -> FoldOutcome {
        FoldOutcome {
            candidate: NucleotideSequence::parse(candidate).unwrap(),
            hamming_distance: 0,
            structure_distance: 0.0,
        }
    }

    fn config() -> DesignConfig {
        DesignConfigBuilder::new()
            .target(TargetStructure::parse("(...)").unwrap())
            .max_structure_distance(0.0)
            .max_sequence_distance(2)
            .combination_attempts(4)
            .build()
            .unwrap()
    }

    #[test]
    fn run_collects_the_requested_number_of_distinct_designs() {
        let backend = ScriptedBackend {
            outcomes: vec![outcome("aaagc"), outcome("acagc"), outcome("agagc")],
            calls: 0,
        };
        let template = NucleotideSequence::parse("ggagc").unwrap();
        let mut provider = TemplateStartProvider::new(template, None);

        let report = run(
            &config(),
            Box::new(backend),
            &mut provider,
            StartRequest::Complete,
            3,
            &ProgressReporter::new(),
        )
        .unwrap();

        assert_eq!(report.start.as_str(), "ggagc");
        assert_eq!(report.records.len(), 3);
        assert_eq!(
            report
                .records
                .iter()
                .map(|r| r.index)
                .collect::<Vec<usize>>(),
            vec![1, 2, 3]
        );
        let sequences: Vec<&str> = report
            .records
            .iter()
            .map(|r| r.sequence.as_str())
            .collect();
        assert_eq!(sequences, vec!["aaagc", "acagc", "agagc"]);
        // Hamming distances are measured against the original start.
        assert_eq!(report.records[0].hamming_distance, 2);
    }

    #[test]
    fn run_reports_progress_per_design() {
        let backend = ScriptedBackend {
            outcomes: vec![outcome("aaagc"), outcome("acagc")],
            calls: 0,
        };
        let template = NucleotideSequence::parse("ggagc").unwrap();
        let mut provider = TemplateStartProvider::new(template, None);

        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            events.lock().unwrap().push(event);
        }));

        run(
            &config(),
            Box::new(backend),
            &mut provider,
            StartRequest::Complete,
            2,
            &reporter,
        )
        .unwrap();
        drop(reporter);

        let events = events.into_inner().unwrap();
        assert!(matches!(events[0], Progress::SearchStart { total: 2 }));
        assert!(matches!(
            events[1],
            Progress::DesignAccepted { index: 1, total: 2 }
        ));
        assert!(matches!(
            events[2],
            Progress::DesignAccepted { index: 2, total: 2 }
        ));
        assert!(matches!(events.last(), Some(Progress::SearchFinish)));
    }

    #[test]
    fn run_rejects_starts_that_do_not_match_the_target_length() {
        let backend = ScriptedBackend {
            outcomes: vec![outcome("aaagc")],
            calls: 0,
        };
        // Template is 6 nt, the target is 5.
        let template = NucleotideSequence::parse("ggaagc").unwrap();
        let mut provider = TemplateStartProvider::new(template, None);

        let err = run(
            &config(),
            Box::new(backend),
            &mut provider,
            StartRequest::Complete,
            1,
            &ProgressReporter::new(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            EngineError::LengthMismatch {
                actual: 6,
                required: 5
            }
        ));
    }
}
