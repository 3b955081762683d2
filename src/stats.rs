use std::collections::BTreeMap;
use std::fmt;

use comment_sentiment::Sentiment;

use crate::report::ClassifiedComment;

/// Per-label comment counts for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryStats {
    counts: BTreeMap<Sentiment, usize>,
    /// Comments dropped by cleaning before classification
    removed: usize,
}

impl SummaryStats {
    pub fn from_comments(comments: &[ClassifiedComment]) -> Self {
        let mut stats = SummaryStats::default();
        for comment in comments {
            stats.record(comment.sentiment);
        }
        stats
    }

    pub fn with_removed(mut self, removed: usize) -> Self {
        self.removed = removed;
        self
    }

    pub fn record(&mut self, sentiment: Sentiment) {
        *self.counts.entry(sentiment).or_default() += 1;
    }

    pub fn count(&self, sentiment: Sentiment) -> usize {
        self.counts.get(&sentiment).copied().unwrap_or(0)
    }

    /// Number of classified comments.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn removed(&self) -> usize {
        self.removed
    }

    /// Observed labels with their counts, in reporting order.
    pub fn iter(&self) -> impl Iterator<Item = (Sentiment, usize)> + '_ {
        Sentiment::ALL
            .into_iter()
            .map(|s| (s, self.count(s)))
            .filter(|(_, n)| *n > 0)
    }
}

impl fmt::Display for SummaryStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (sentiment, count) in self.iter() {
            writeln!(f, "{sentiment}: {count}")?;
        }
        writeln!(f, "total: {}", self.total())?;
        if self.removed > 0 {
            writeln!(f, "removed: {}", self.removed)?;
        }
        Ok(())
    }
}
