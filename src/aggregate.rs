use crate::segments::ExpectedSegments;
use indexmap::IndexMap;
use std::collections::BTreeSet;

/// An isolate that is missing at least one expected segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletenessResult {
    pub isolate_id: String,
    /// Segments seen, in expected-set order.
    pub present: Vec<&'static str>,
    /// Expected segments not seen, in expected-set order. Never empty.
    pub missing: Vec<&'static str>,
}

/// Accumulates the segments seen per isolate during a scan.
///
/// `record` is only usable while the aggregator is owned; `finalize` consumes it,
/// so no further records can be added once results are produced.
#[derive(Debug)]
pub struct CompletenessAggregator {
    expected: ExpectedSegments,
    // segment sets hold indices into `expected`; insertion order of isolates is kept
    isolates: IndexMap<String, BTreeSet<usize>>,
}

impl CompletenessAggregator {
    pub fn new(expected: ExpectedSegments) -> Self {
        Self { expected, isolates: IndexMap::new() }
    }

    /// Note that `segment` was seen for `isolate_id`. Labels outside the expected
    /// set are ignored; re-recording a pair has no effect.
    pub fn record(&mut self, isolate_id: &str, segment: &str) {
        let Some(idx) = self.expected.index_of(segment) else {
            return;
        };
        match self.isolates.get_mut(isolate_id) {
            Some(set) => {
                set.insert(idx);
            }
            None => {
                self.isolates.insert(isolate_id.to_string(), BTreeSet::from([idx]));
            }
        }
    }

    /// Number of distinct isolates recorded so far.
    pub fn isolate_count(&self) -> usize {
        self.isolates.len()
    }

    /// Results for every incomplete isolate, in first-seen order.
    pub fn finalize(self) -> Vec<CompletenessResult> {
        let total = self.expected.len();
        let mut out = Vec::new();
        for (isolate_id, seen) in self.isolates {
            if seen.len() == total {
                continue;
            }
            let present = seen.iter().map(|&i| self.expected.label(i)).collect();
            let missing = self
                .expected
                .iter()
                .enumerate()
                .filter(|(i, _)| !seen.contains(i))
                .map(|(_, label)| label)
                .collect();
            out.push(CompletenessResult { isolate_id, present, missing });
        }
        out
    }
}
