//! Scripted metric source for testing.

use std::collections::VecDeque;
use std::ops::RangeInclusive;

use crate::generator::MetricSource;

/// A [`MetricSource`] that replays queued values instead of drawing them.
///
/// Values are returned exactly as queued, even outside the requested range.
/// Once a queue runs dry, draws fall back to the range's lower bound and
/// picks fall back to index 0.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    draws: VecDeque<u32>,
    picks: VecDeque<usize>,
    requested_ranges: Vec<RangeInclusive<u32>>,
    requested_picks: Vec<usize>,
}

impl ScriptedSource {
    /// Create a source that replays `draws` for range draws and `picks` for
    /// index picks.
    pub fn new(draws: Vec<u32>, picks: Vec<usize>) -> Self {
        Self {
            draws: draws.into(),
            picks: picks.into(),
            ..Default::default()
        }
    }

    /// Queue values for one more session: accuracy, duration, errors, then
    /// the index of the emotional state.
    pub fn push_session(&mut self, accuracy: u32, duration_secs: u32, errors: u32, state: usize) {
        self.draws.extend([accuracy, duration_secs, errors]);
        self.picks.push_back(state);
    }

    /// Ranges passed to `draw`, in call order.
    pub fn requested_ranges(&self) -> &[RangeInclusive<u32>] {
        &self.requested_ranges
    }

    /// Lengths passed to `pick`, in call order.
    pub fn requested_picks(&self) -> &[usize] {
        &self.requested_picks
    }
}

impl MetricSource for ScriptedSource {
    fn draw(&mut self, range: RangeInclusive<u32>) -> u32 {
        let value = self.draws.pop_front().unwrap_or(*range.start());
        self.requested_ranges.push(range);
        value
    }

    fn pick(&mut self, len: usize) -> usize {
        self.requested_picks.push(len);
        self.picks.pop_front().unwrap_or(0)
    }
}
