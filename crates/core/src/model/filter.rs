use std::collections::BTreeSet;
use std::fmt;

use crate::model::question::QuestionRecord;

/// Question count options offered on the filter screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CountLimit {
    #[default]
    All,
    Ten,
    Twenty,
    Fifty,
}

impl CountLimit {
    pub const OPTIONS: [CountLimit; 4] = [Self::All, Self::Ten, Self::Twenty, Self::Fifty];

    /// Numeric limit where `0` means unlimited.
    #[must_use]
    pub const fn value(self) -> usize {
        match self {
            Self::All => 0,
            Self::Ten => 10,
            Self::Twenty => 20,
            Self::Fifty => 50,
        }
    }

    #[must_use]
    pub fn from_value(value: usize) -> Option<Self> {
        Self::OPTIONS.into_iter().find(|option| option.value() == value)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All Matching Questions",
            Self::Ten => "10 Questions",
            Self::Twenty => "20 Questions",
            Self::Fifty => "50 Questions",
        }
    }
}

impl fmt::Display for CountLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// User-chosen constraints narrowing which questions form a session.
///
/// Empty category or topic sets mean "no restriction"; a `limit` of zero means
/// every matching question is used.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    pub categories: BTreeSet<String>,
    pub topics: BTreeSet<String>,
    pub limit: usize,
}

impl FilterSpec {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_topics<I, S>(mut self, topics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.topics = topics.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    #[must_use]
    pub fn with_count(self, count: CountLimit) -> Self {
        self.with_limit(count.value())
    }

    /// Returns true when the record passes both the category and topic filters.
    #[must_use]
    pub fn matches(&self, record: &QuestionRecord) -> bool {
        let category_ok =
            self.categories.is_empty() || self.categories.contains(record.category());
        let topic_ok = self.topics.is_empty() || self.topics.contains(record.topic());
        category_ok && topic_ok
    }

    /// The effective cap on session length, if any.
    #[must_use]
    pub fn cap(&self) -> Option<usize> {
        (self.limit > 0).then_some(self.limit)
    }
}
