use std::collections::{BTreeSet, HashMap};

use crate::model::ids::QuestionId;
use crate::model::question::{QuestionField, QuestionRecord};

/// Returns the sorted, de-duplicated values of `field` across `records`.
#[must_use]
pub fn unique_values<'a>(
    records: impl IntoIterator<Item = &'a QuestionRecord>,
    field: QuestionField,
) -> Vec<String> {
    records
        .into_iter()
        .map(|record| record.field(field))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}

/// The loaded, immutable question set with an id index.
///
/// Ids are assumed unique; when the file repeats an id, lookups resolve to the
/// first row carrying it.
#[derive(Debug, Clone, Default)]
pub struct QuestionCatalog {
    records: Vec<QuestionRecord>,
    index: HashMap<QuestionId, usize>,
}

impl QuestionCatalog {
    #[must_use]
    pub fn new(records: Vec<QuestionRecord>) -> Self {
        let mut index = HashMap::with_capacity(records.len());
        for (pos, record) in records.iter().enumerate() {
            index.entry(record.id().clone()).or_insert(pos);
        }
        Self { records, index }
    }

    #[must_use]
    pub fn records(&self) -> &[QuestionRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &QuestionId) -> Option<&QuestionRecord> {
        self.index.get(id).map(|pos| &self.records[*pos])
    }

    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        unique_values(&self.records, QuestionField::Category)
    }

    /// Topics offered for the given category selection.
    ///
    /// With no categories selected every topic is offered; otherwise only topics
    /// of rows in the selected categories.
    #[must_use]
    pub fn topics_for(&self, categories: &BTreeSet<String>) -> Vec<String> {
        if categories.is_empty() {
            return unique_values(&self.records, QuestionField::Topic);
        }
        unique_values(
            self.records
                .iter()
                .filter(|record| categories.contains(record.category())),
            QuestionField::Topic,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, category: &str, topic: &str) -> QuestionRecord {
        QuestionRecord::new(
            QuestionId::new(id),
            category,
            topic,
            format!("Question {id}"),
            "A",
            ["A", "B", "C", "D"].map(str::to_string),
        )
        .unwrap()
    }

    fn catalog() -> QuestionCatalog {
        QuestionCatalog::new(vec![
            record("1", "Security", "TLS"),
            record("2", "Networking", "DNS"),
            record("3", "Security", "Auth"),
            record("4", "Networking", "TLS"),
            record("5", "Security", "TLS"),
        ])
    }

    #[test]
    fn unique_values_are_sorted_and_distinct() {
        let catalog = catalog();
        assert_eq!(catalog.categories(), vec!["Networking", "Security"]);
        assert_eq!(
            unique_values(catalog.records(), QuestionField::Topic),
            vec!["Auth", "DNS", "TLS"]
        );
    }

    #[test]
    fn unique_values_of_nothing_is_empty() {
        assert!(unique_values(&Vec::<QuestionRecord>::new(), QuestionField::Category).is_empty());
    }

    #[test]
    fn topics_follow_selected_categories() {
        let catalog = catalog();
        let all = catalog.topics_for(&BTreeSet::new());
        assert_eq!(all, vec!["Auth", "DNS", "TLS"]);

        let networking: BTreeSet<String> = ["Networking".to_string()].into();
        assert_eq!(catalog.topics_for(&networking), vec!["DNS", "TLS"]);
    }

    #[test]
    fn lookup_uses_first_row_for_duplicate_ids() {
        let catalog = QuestionCatalog::new(vec![
            record("1", "First", "x"),
            record("1", "Second", "x"),
        ]);
        let found = catalog.get(&QuestionId::new("1")).unwrap();
        assert_eq!(found.category(), "First");
        assert!(catalog.get(&QuestionId::new("missing")).is_none());
    }
}
