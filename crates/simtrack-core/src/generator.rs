//! Synthetic session generation.
//!
//! Every random draw goes through a [`MetricSource`], so tests can script
//! exact values with [`ScriptedSource`](crate::mock::ScriptedSource) instead of
//! only asserting range membership.

use std::io::{self, Write};
use std::ops::RangeInclusive;

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

use crate::model::{EmotionalState, SessionRecord};
use crate::profile::Profile;

/// Accuracy percentage drawn for every session.
pub const ACCURACY_RANGE: RangeInclusive<u32> = 70..=100;
/// Duration in seconds drawn for every session.
pub const DURATION_RANGE: RangeInclusive<u32> = 300..=600;
/// Error count drawn for every session.
pub const ERRORS_RANGE: RangeInclusive<u32> = 0..=5;

/// Source of the random draws behind a generated session.
pub trait MetricSource {
    /// Uniform integer in `range`, bounds inclusive.
    fn draw(&mut self, range: RangeInclusive<u32>) -> u32;

    /// Uniform index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

/// [`MetricSource`] backed by a `rand` generator.
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<ThreadRng> {
    /// Non-deterministic source seeded by the OS.
    pub fn from_entropy() -> Self {
        Self::new(rand::rng())
    }
}

impl RngSource<StdRng> {
    /// Reproducible source for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MetricSource for RngSource<R> {
    fn draw(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.rng.random_range(range)
    }

    fn pick(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Produces one random session per module attempt.
pub struct SessionGenerator<S> {
    source: S,
}

impl<S: MetricSource> SessionGenerator<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Give back the underlying source.
    pub fn into_source(self) -> S {
        self.source
    }

    /// Simulate one attempt at `module`, record it on `profile`, then write
    /// the profile's full feedback report.
    ///
    /// `complexity` is stored as given; anything >= 4 counts as complex.
    pub fn run_module(
        &mut self,
        profile: &mut Profile,
        module: &str,
        complexity: i32,
        out: &mut dyn Write,
    ) -> io::Result<SessionRecord> {
        let accuracy = self.source.draw(ACCURACY_RANGE);
        let duration_secs = self.source.draw(DURATION_RANGE);
        let errors = self.source.draw(ERRORS_RANGE);
        let emotional_state = self.emotional_state(complexity);

        tracing::debug!(
            profile = profile.name(),
            module,
            complexity,
            accuracy,
            duration_secs,
            errors,
            emotional_state = emotional_state.as_str(),
            "generated session"
        );

        let record = profile
            .record_session(
                module,
                accuracy,
                duration_secs,
                errors,
                complexity,
                emotional_state,
                out,
            )?
            .clone();
        profile.report_feedback(out)?;

        Ok(record)
    }

    fn emotional_state(&mut self, complexity: i32) -> EmotionalState {
        let candidates = EmotionalState::candidates(complexity);
        let idx = self.source.pick(candidates.len());
        // Scripted sources may hand back anything; clamp to the last candidate.
        candidates[idx.min(candidates.len() - 1)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::ScriptedSource;
    use crate::model::COMPLEX_THRESHOLD;

    #[test]
    fn seeded_draws_stay_in_range() {
        let mut generator = SessionGenerator::new(RngSource::seeded(7));
        let mut profile = Profile::new("A", "", 0);

        for i in 0..500 {
            let complexity = (i % 5) + 1;
            let record = generator
                .run_module(&mut profile, "M", complexity, &mut io::sink())
                .unwrap();
            assert!(ACCURACY_RANGE.contains(&record.accuracy()));
            assert!(DURATION_RANGE.contains(&record.duration_secs()));
            assert!(ERRORS_RANGE.contains(&record.errors()));
        }
        assert_eq!(profile.records().len(), 500);
    }

    #[test]
    fn emotional_state_matches_complexity_bucket() {
        let mut generator = SessionGenerator::new(RngSource::seeded(99));
        let mut profile = Profile::new("A", "", 0);

        for complexity in [-3, 0, 1, 2, 3, 4, 5, 9] {
            for _ in 0..50 {
                let record = generator
                    .run_module(&mut profile, "M", complexity, &mut io::sink())
                    .unwrap();
                let allowed = if complexity >= COMPLEX_THRESHOLD {
                    &EmotionalState::COMPLEX
                } else {
                    &EmotionalState::ROUTINE
                };
                assert!(
                    allowed.contains(&record.emotional_state()),
                    "complexity {complexity} produced {:?}",
                    record.emotional_state()
                );
            }
        }
    }

    #[test]
    fn same_seed_same_sessions() {
        let run = |seed| {
            let mut generator = SessionGenerator::new(RngSource::seeded(seed));
            let mut profile = Profile::new("A", "", 0);
            for m in ["M1", "M2", "M3"] {
                generator
                    .run_module(&mut profile, m, 4, &mut io::sink())
                    .unwrap();
            }
            profile.records().to_vec()
        };
        assert_eq!(run(42), run(42));
    }

    #[test]
    fn scripted_values_flow_into_record_and_feedback() {
        let source = ScriptedSource::new(vec![90, 455, 2], vec![1]);
        let mut generator = SessionGenerator::new(source);
        let mut profile = Profile::new("Camila Padalino", "Medicine", 2024);
        let mut out = Vec::new();

        let record = generator
            .run_module(&mut profile, "Tumor Resection", 5, &mut out)
            .unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(record.accuracy(), 90);
        assert_eq!(record.duration_secs(), 455);
        assert_eq!(record.errors(), 2);
        assert_eq!(record.emotional_state(), EmotionalState::Anxious);
        assert_eq!(profile.records(), &[record]);

        let confirm = text
            .find("[Module 'Tumor Resection'] Result successfully added for Camila Padalino.")
            .unwrap();
        let feedback = text.find("Feedback for Camila Padalino").unwrap();
        assert!(confirm < feedback);
        assert!(text.contains("Excellent performance!"));
    }

    #[test]
    fn draws_are_requested_in_field_order() {
        let mut generator = SessionGenerator::new(ScriptedSource::new(vec![70, 300, 0], vec![0]));
        let mut profile = Profile::new("A", "", 0);
        generator
            .run_module(&mut profile, "M", 1, &mut io::sink())
            .unwrap();

        let source = generator.into_source();
        assert_eq!(
            source.requested_ranges(),
            &[ACCURACY_RANGE, DURATION_RANGE, ERRORS_RANGE]
        );
        assert_eq!(source.requested_picks(), &[3]);
    }

    #[test]
    fn returned_record_is_the_stored_one() {
        let mut generator = SessionGenerator::new(RngSource::seeded(5));
        let mut profile = Profile::new("A", "", 0);

        for (module, complexity) in [("M1", 2), ("M2", 4)] {
            let record = generator
                .run_module(&mut profile, module, complexity, &mut io::sink())
                .unwrap();
            assert_eq!(profile.records().last(), Some(&record));
        }
    }

    #[test]
    fn unchecked_complexity_is_stored_verbatim() {
        let mut generator = SessionGenerator::new(ScriptedSource::new(vec![80, 400, 1], vec![2]));
        let mut profile = Profile::new("A", "", 0);
        let mut out = Vec::new();
        let record = generator
            .run_module(&mut profile, "M", 7, &mut out)
            .unwrap();

        assert_eq!(record.complexity(), 7);
        assert_eq!(record.emotional_state(), EmotionalState::Calm);
        assert!(String::from_utf8(out).unwrap().contains("Complexity: 7/5"));
    }

    #[test]
    fn end_to_end_three_modules() {
        let mut generator = SessionGenerator::new(RngSource::seeded(2024));
        let mut profile = Profile::new("A", "", 0);
        let plan = [("M1", 1), ("M2", 3), ("M3", 5)];

        for (module, complexity) in plan {
            generator
                .run_module(&mut profile, module, complexity, &mut io::sink())
                .unwrap();
        }

        let records = profile.records();
        assert_eq!(records.len(), 3);
        for (record, (module, complexity)) in records.iter().zip(plan) {
            assert_eq!(record.module(), module);
            assert_eq!(record.complexity(), complexity);
            assert!(EmotionalState::candidates(complexity).contains(&record.emotional_state()));
        }

        let mut out = Vec::new();
        profile.report_feedback(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let positions: Vec<usize> = ["Module: M1\n", "Module: M2\n", "Module: M3\n"]
            .iter()
            .map(|m| text.find(m).unwrap())
            .collect();
        assert_eq!(text.matches("\nModule: ").count(), 3);
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
