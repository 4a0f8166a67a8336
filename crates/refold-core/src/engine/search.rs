use std::collections::HashSet;
use tracing::{debug, instrument, trace, warn};

use crate::core::combinatorics::combinations::CombinationEnumerator;
use crate::core::models::sequence::NucleotideSequence;
use super::backend::FoldingBackend;
use super::config::DesignConfig;
use super::error::EngineError;
use super::provider::{StartProvider, StartRequest};

/// The start-sequence search driver.
///
/// Owns the evolving start string, the cyclic enumerator of free-position
/// combinations, and the set of sequences already returned. Every successful
/// [`fold_inverse`](Self::fold_inverse) call yields a sequence this instance has
/// never returned before; once a combination's retry budget is exhausted, the
/// driver frees a different subset of positions and keeps searching.
///
/// The instance is the sole owner of its state and must be driven sequentially;
/// it is not thread-safe. A backend that can never meet the structure-distance
/// bound, or never produces an unseen sequence, makes `fold_inverse` loop
/// forever — bounding that is the caller's or the backend's concern.
pub struct InverseFolder {
    config: DesignConfig,
    backend: Box<dyn FoldingBackend>,
    state: Option<SearchState>,
}

struct SearchState {
    original: NucleotideSequence,
    current: NucleotideSequence,
    combinations: CombinationEnumerator<usize>,
    active: Vec<usize>,
    found: HashSet<String>,
    returned: usize,
}

impl InverseFolder {
    pub fn new(config: DesignConfig, backend: Box<dyn FoldingBackend>) -> Self {
        Self {
            config,
            backend,
            state: None,
        }
    }

    pub fn config(&self) -> &DesignConfig {
        &self.config
    }

    /// The immutable original start, once one has been set.
    pub fn original_start(&self) -> Option<&NucleotideSequence> {
        self.state.as_ref().map(|s| &s.original)
    }

    /// The start currently handed to the backend: the original with the wildcard
    /// symbol at every free position of the active combination.
    pub fn current_start(&self) -> Option<&NucleotideSequence> {
        self.state.as_ref().map(|s| &s.current)
    }

    /// How many designs this instance has returned since the last `set_start`.
    pub fn designs_returned(&self) -> usize {
        self.state.as_ref().map_or(0, |s| s.returned)
    }

    /// Seeds the search with a start sequence, resetting all search state.
    ///
    /// The input is canonicalized to lowercase, so the backend is never handed a
    /// position it could "correct" by case alone. The canonical start itself is
    /// recorded as already seen: the literal input is never a valid new design.
    pub fn set_start(&mut self, sequence: &str) -> Result<(), EngineError> {
        let canonical = NucleotideSequence::parse(sequence)?;
        let free_positions = self.config.max_sequence_distance;
        if canonical.len() < free_positions {
            return Err(EngineError::LengthMismatch {
                actual: canonical.len(),
                required: free_positions,
            });
        }

        let mut combinations = CombinationEnumerator::from_range(canonical.len(), free_positions)?;
        let (active, _) = combinations.next();
        let current = canonical.masked(&active);

        let mut found = HashSet::new();
        found.insert(canonical.as_str().to_string());

        debug!(
            length = canonical.len(),
            free_positions,
            "start sequence set; search state reset"
        );
        self.state = Some(SearchState {
            original: canonical,
            current,
            combinations,
            active,
            found,
            returned: 0,
        });
        Ok(())
    }

    /// Obtains the start from a provider, then validates it against the target.
    ///
    /// The provider must call [`set_start`](Self::set_start) synchronously exactly
    /// once; a supplied sequence whose length differs from the target structure's
    /// length fails with `LengthMismatch`.
    pub fn query_start(
        &mut self,
        provider: &mut dyn StartProvider,
        request: StartRequest,
    ) -> Result<(), EngineError> {
        self.state = None;
        match request {
            StartRequest::Partial => provider.get_partial_start(self)?,
            StartRequest::Complete => provider.get_complete_start(self)?,
        }
        let supplied = self.state.as_ref().ok_or(EngineError::StartNotSet)?;
        let expected = self.config.target.len();
        if supplied.original.len() != expected {
            let actual = supplied.original.len();
            self.state = None;
            return Err(EngineError::LengthMismatch {
                actual,
                required: expected,
            });
        }
        Ok(())
    }

    /// Produces one sequence this instance has never returned before.
    ///
    /// Each backend proposal is retried until its structure distance meets the
    /// configured bound. A structurally acceptable proposal that was already
    /// returned burns one attempt; when the per-combination budget runs out, the
    /// enumerator advances and the search continues with a different set of free
    /// positions. The attempt counter is decremented before the duplicate check,
    /// so a duplicate on the budget's last attempt advances the combination even
    /// though later attempts with the same mask might have produced a fresh design.
    #[instrument(level = "debug", skip_all)]
    pub fn fold_inverse(&mut self) -> Result<NucleotideSequence, EngineError> {
        let Self {
            config,
            backend,
            state,
        } = self;
        let state = state.as_mut().ok_or(EngineError::StartNotSet)?;

        let mut attempts_left = config.combination_attempts;
        let accepted = loop {
            attempts_left -= 1;

            let outcome = loop {
                let outcome = backend.execute(&state.current)?;
                debug_assert_eq!(outcome.candidate.len(), state.current.len());
                if outcome.structure_distance <= config.max_structure_distance {
                    break outcome;
                }
                trace!(
                    structure_distance = outcome.structure_distance,
                    bound = config.max_structure_distance,
                    "proposal rejected: structure too far from target"
                );
            };

            debug!(
                candidate = %outcome.candidate,
                hamming = outcome.hamming_distance,
                structure_distance = outcome.structure_distance,
                attempts_left,
                "structurally acceptable proposal"
            );

            if state.found.contains(outcome.candidate.as_str()) {
                if attempts_left == 0 {
                    let (active, more) = state.combinations.next();
                    if !more {
                        warn!(
                            free_positions = state.combinations.k(),
                            "all position combinations tried once; cycling from the first"
                        );
                    }
                    state.current = state.original.masked(&active);
                    state.active = active;
                    attempts_left = config.combination_attempts;
                    debug!(free = ?state.active, "combination advanced");
                }
            } else {
                break outcome;
            }
        };

        state.found.insert(accepted.candidate.as_str().to_string());
        state.returned += 1;
        Ok(accepted.candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::sequence::WILDCARD;
    use crate::core::models::structure::TargetStructure;
    use crate::engine::backend::{BackendError, FoldOutcome, FoldingBackend};
    use crate::engine::config::DesignConfigBuilder;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn seq(s: &str) -> NucleotideSequence {
        NucleotideSequence::parse(s).unwrap()
    }

    fn config(target: &str, max_seq_dist: usize, attempts: usize) -> DesignConfig {
        DesignConfigBuilder::new()
            .target(TargetStructure::parse(target).unwrap())
            .max_structure_distance(4.0)
            .max_sequence_distance(max_seq_dist)
            .combination_attempts(attempts)
            .build()
            .unwrap()
    }

    /// Emits the scripted outcomes in order, then keeps repeating the last one.
    struct ScriptedBackend {
        outcomes: Vec<FoldOutcome>,
        calls: Rc<RefCell<usize>>,
    }

    impl ScriptedBackend {
        fn new(outcomes: Vec<FoldOutcome>) -> (Self, Rc<RefCell<usize>>) {
            let calls = Rc::new(RefCell::new(0));
            (
                Self {
                    outcomes,
                    calls: Rc::clone(&calls),
                },
                calls,
            )
        }
    }

    impl FoldingBackend for ScriptedBackend {
        fn execute(&mut self, _start: &NucleotideSequence) -> Result<FoldOutcome, BackendError> {
            let mut calls = self.calls.borrow_mut();
            let outcome = self.outcomes[(*calls).min(self.outcomes.len() - 1)].clone();
            *calls += 1;
            Ok(outcome)
        }
    }

    fn outcome(candidate: &str, structure_distance: f64) -> FoldOutcome {
        FoldOutcome {
            candidate: seq(candidate),
            hamming_distance: 0,
            structure_distance,
        }
    }

    #[test]
    fn set_start_rejects_sequences_shorter_than_the_free_position_count() {
        let (backend, _) = ScriptedBackend::new(vec![outcome("acgu", 0.0)]);
        let mut engine = InverseFolder::new(config("(...)", 5, 10), Box::new(backend));
        let err = engine.set_start("acgu").unwrap_err();
        assert!(matches!(
            err,
            EngineError::LengthMismatch {
                actual: 4,
                required: 5
            }
        ));
    }

    #[test]
    fn set_start_masks_the_first_combination() {
        let (backend, _) = ScriptedBackend::new(vec![outcome("gcacgcgua", 0.0)]);
        let mut engine = InverseFolder::new(config("(((...)))", 3, 10), Box::new(backend));
        engine.set_start("GCACGCGUA").unwrap();

        assert_eq!(engine.original_start().unwrap().as_str(), "gcacgcgua");
        let current = engine.current_start().unwrap();
        assert_eq!(current.wildcard_positions(), vec![0, 1, 2]);
        // Positions outside the active combination keep the original symbol.
        for (i, symbol) in current.symbols().enumerate() {
            if i > 2 {
                assert_ne!(symbol, WILDCARD);
                assert_eq!(symbol, engine.original_start().unwrap().as_str().as_bytes()[i] as char);
            }
        }
    }

    #[test]
    fn fold_inverse_without_a_start_fails() {
        let (backend, _) = ScriptedBackend::new(vec![outcome("acgu", 0.0)]);
        let mut engine = InverseFolder::new(config("(...)", 2, 10), Box::new(backend));
        assert!(matches!(
            engine.fold_inverse(),
            Err(EngineError::StartNotSet)
        ));
    }

    #[test]
    fn proposals_above_the_structure_bound_are_retried() {
        let (backend, calls) = ScriptedBackend::new(vec![
            outcome("aaagc", 9.0),
            outcome("aaagc", 7.0),
            outcome("uuagc", 0.0),
        ]);
        let mut engine = InverseFolder::new(config("(...)", 2, 10), Box::new(backend));
        engine.set_start("gcagc").unwrap();

        let design = engine.fold_inverse().unwrap();
        assert_eq!(design.as_str(), "uuagc");
        assert_eq!(*calls.borrow(), 3);
    }

    #[test]
    fn returned_designs_are_pairwise_distinct() {
        let (backend, _) = ScriptedBackend::new(vec![
            outcome("aagcu", 0.0),
            outcome("augcu", 0.0),
            outcome("cagcu", 0.0),
            outcome("gagcu", 0.0),
            outcome("uuacu", 0.0),
        ]);
        let mut engine = InverseFolder::new(config("(...)", 2, 10), Box::new(backend));
        engine.set_start("ggagc").unwrap();

        let mut designs = Vec::new();
        for _ in 0..5 {
            designs.push(engine.fold_inverse().unwrap());
        }
        for (a, left) in designs.iter().enumerate() {
            for right in designs.iter().skip(a + 1) {
                assert_ne!(left, right);
            }
        }
    }

    #[test]
    fn the_start_itself_is_never_returned() {
        // First proposal echoes the start; it must be skipped as already seen.
        let (backend, _) = ScriptedBackend::new(vec![
            outcome("ggagc", 0.0),
            outcome("acagc", 0.0),
        ]);
        let mut engine = InverseFolder::new(config("(...)", 2, 10), Box::new(backend));
        engine.set_start("GGAGC").unwrap();

        let design = engine.fold_inverse().unwrap();
        assert_eq!(design.as_str(), "acagc");
    }

    #[test]
    fn backend_errors_abort_the_call_unchanged() {
        struct FailingBackend;
        impl FoldingBackend for FailingBackend {
            fn execute(
                &mut self,
                _start: &NucleotideSequence,
            ) -> Result<FoldOutcome, BackendError> {
                Err("fold program exited with status 3".into())
            }
        }

        let mut engine = InverseFolder::new(config("(...)", 2, 10), Box::new(FailingBackend));
        engine.set_start("ggagc").unwrap();
        let err = engine.fold_inverse().unwrap_err();
        assert!(matches!(err, EngineError::Backend(_)));
        assert!(err.to_string().contains("status 3"));
    }

    #[test]
    fn set_start_clears_the_found_set() {
        let (backend, _) = ScriptedBackend::new(vec![outcome("aaagc", 0.0)]);
        let mut engine = InverseFolder::new(config("(...)", 2, 10), Box::new(backend));
        engine.set_start("ggagc").unwrap();
        assert_eq!(engine.fold_inverse().unwrap().as_str(), "aaagc");
        assert_eq!(engine.designs_returned(), 1);

        // Re-seeding forgets previous designs: the same candidate is new again.
        engine.set_start("ggagc").unwrap();
        assert_eq!(engine.designs_returned(), 0);
        assert_eq!(engine.fold_inverse().unwrap().as_str(), "aaagc");
    }

    /// A backend that repeats an already-known design until the driver frees a
    /// different position subset, and only then yields a fresh one. The attempt
    /// budget must be spent exactly once per combination before that happens.
    struct CombinationSensitiveBackend {
        initial_mask: NucleotideSequence,
        repeated: FoldOutcome,
        fresh: FoldOutcome,
        calls: Rc<RefCell<usize>>,
    }

    impl FoldingBackend for CombinationSensitiveBackend {
        fn execute(&mut self, start: &NucleotideSequence) -> Result<FoldOutcome, BackendError> {
            *self.calls.borrow_mut() += 1;
            if start == &self.initial_mask {
                Ok(self.repeated.clone())
            } else {
                Ok(self.fresh.clone())
            }
        }
    }

    #[test]
    fn exhausting_the_attempt_budget_advances_the_combination() {
        let target = "(((((.....)))))"; // length 15
        let config = config(target, 5, 10);
        let start = "GCACGCGTATGCCGC";

        let first_design = seq("aaacgcgtatgccgc");
        let second_design = seq("cgacgcgtatgccgc");

        // The mask for the first combination frees positions 0..5.
        let initial_mask = seq("nnnnncgtatgccgc");
        let calls = Rc::new(RefCell::new(0));
        let backend = CombinationSensitiveBackend {
            initial_mask: initial_mask.clone(),
            repeated: FoldOutcome {
                candidate: first_design.clone(),
                hamming_distance: 3,
                structure_distance: 0.0,
            },
            fresh: FoldOutcome {
                candidate: second_design.clone(),
                hamming_distance: 4,
                structure_distance: 0.0,
            },
            calls: Rc::clone(&calls),
        };

        let mut engine = InverseFolder::new(config, Box::new(backend));
        engine.set_start(start).unwrap();
        assert_eq!(engine.current_start().unwrap(), &initial_mask);

        // Call 1: the repeated design is unseen, accepted immediately.
        assert_eq!(engine.fold_inverse().unwrap(), first_design);
        assert_eq!(*calls.borrow(), 1);

        // Call 2: the same design comes back for all 10 attempts of the first
        // combination; the driver then frees positions {0,1,2,3,5} and the
        // backend's fresh design is accepted on the very next attempt.
        assert_eq!(engine.fold_inverse().unwrap(), second_design);
        assert_eq!(*calls.borrow(), 1 + 10 + 1);
        assert_eq!(
            engine.current_start().unwrap().wildcard_positions(),
            vec![0, 1, 2, 3, 5]
        );
    }

    #[test]
    fn zero_free_positions_keep_the_start_unmasked() {
        let (backend, _) = ScriptedBackend::new(vec![outcome("acagc", 0.0)]);
        let mut engine = InverseFolder::new(config("(...)", 0, 10), Box::new(backend));
        engine.set_start("ggagc").unwrap();
        assert_eq!(engine.current_start().unwrap().as_str(), "ggagc");
        assert_eq!(engine.fold_inverse().unwrap().as_str(), "acagc");
    }
}
