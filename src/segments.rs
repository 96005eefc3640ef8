/// The eight influenza genome segments, in canonical segment-number order.
pub const INFLUENZA_SEGMENTS: [&str; 8] = ["PB2", "PB1", "PA", "HA", "NP", "NA", "MP", "NS"];

/// The set of segment labels an isolate must carry to be complete.
///
/// Order matters only for reporting: present and missing segments are listed
/// in the order the labels were given here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedSegments {
    labels: Vec<&'static str>,
}

impl ExpectedSegments {
    pub fn new(labels: &[&'static str]) -> Self {
        let mut uniq: Vec<&'static str> = Vec::with_capacity(labels.len());
        for &l in labels {
            if !uniq.contains(&l) {
                uniq.push(l);
            }
        }
        Self { labels: uniq }
    }

    pub fn influenza() -> Self {
        Self::new(&INFLUENZA_SEGMENTS)
    }

    /// Position of `label` in the set, or `None` if it is not expected.
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|&l| l == label)
    }

    pub fn label(&self, idx: usize) -> &'static str {
        self.labels[idx]
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.labels.iter().copied()
    }
}
