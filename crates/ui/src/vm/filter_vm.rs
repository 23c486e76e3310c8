use std::collections::BTreeSet;

use quiz_core::model::{CountLimit, FilterSpec, QuestionCatalog};

/// Filter screen form state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterFormVm {
    pub categories: BTreeSet<String>,
    pub topics: BTreeSet<String>,
    pub count: CountLimit,
}

/// One checkbox on the filter screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterOptionVm {
    pub value: String,
    pub checked: bool,
}

impl FilterFormVm {
    #[must_use]
    pub fn category_options(&self, catalog: &QuestionCatalog) -> Vec<FilterOptionVm> {
        options(catalog.categories(), &self.categories)
    }

    /// Topic checkboxes for the current category selection.
    #[must_use]
    pub fn topic_options(&self, catalog: &QuestionCatalog) -> Vec<FilterOptionVm> {
        options(catalog.topics_for(&self.categories), &self.topics)
    }

    #[must_use]
    pub fn topic_hint(&self) -> &'static str {
        if self.categories.is_empty() {
            "Showing all topics."
        } else {
            "Showing topics for selected categories."
        }
    }

    /// Toggle a category, dropping selected topics it no longer offers.
    pub fn toggle_category(&mut self, category: &str, catalog: &QuestionCatalog) {
        toggle(&mut self.categories, category);
        let offered: BTreeSet<String> = catalog.topics_for(&self.categories).into_iter().collect();
        self.topics.retain(|topic| offered.contains(topic));
    }

    pub fn toggle_topic(&mut self, topic: &str) {
        toggle(&mut self.topics, topic);
    }

    pub fn set_count_value(&mut self, raw: &str) {
        if let Some(count) = raw.parse().ok().and_then(CountLimit::from_value) {
            self.count = count;
        }
    }

    #[must_use]
    pub fn to_filter(&self) -> FilterSpec {
        FilterSpec::new()
            .with_categories(self.categories.iter().cloned())
            .with_topics(self.topics.iter().cloned())
            .with_count(self.count)
    }
}

fn toggle(set: &mut BTreeSet<String>, value: &str) {
    if !set.remove(value) {
        set.insert(value.to_owned());
    }
}

fn options(values: Vec<String>, selected: &BTreeSet<String>) -> Vec<FilterOptionVm> {
    values
        .into_iter()
        .map(|value| FilterOptionVm {
            checked: selected.contains(&value),
            value,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::{QuestionId, QuestionRecord};

    fn record(id: &str, category: &str, topic: &str) -> QuestionRecord {
        QuestionRecord::new(
            QuestionId::new(id),
            category,
            topic,
            "Q",
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
        ])
    }

    #[test]
    fn topics_follow_category_selection() {
        let catalog = catalog();
        let mut form = FilterFormVm::default();
        assert_eq!(form.topic_options(&catalog).len(), 3);
        assert_eq!(form.topic_hint(), "Showing all topics.");

        form.toggle_category("Networking", &catalog);
        let topics: Vec<_> = form
            .topic_options(&catalog)
            .into_iter()
            .map(|o| o.value)
            .collect();
        assert_eq!(topics, vec!["DNS"]);
        assert_eq!(form.topic_hint(), "Showing topics for selected categories.");
    }

    #[test]
    fn deselecting_category_prunes_hidden_topics() {
        let catalog = catalog();
        let mut form = FilterFormVm::default();
        form.toggle_category("Security", &catalog);
        form.toggle_topic("TLS");
        form.toggle_category("Security", &catalog);
        form.toggle_category("Networking", &catalog);

        assert!(form.topics.is_empty());
        assert_eq!(form.categories, BTreeSet::from(["Networking".to_string()]));
    }

    #[test]
    fn checked_flags_reflect_selection() {
        let catalog = catalog();
        let mut form = FilterFormVm::default();
        form.toggle_category("Security", &catalog);

        let checked: Vec<_> = form
            .category_options(&catalog)
            .into_iter()
            .map(|o| (o.value, o.checked))
            .collect();
        assert_eq!(
            checked,
            vec![
                ("Networking".to_string(), false),
                ("Security".to_string(), true)
            ]
        );
    }

    #[test]
    fn count_value_parses_known_options_only() {
        let mut form = FilterFormVm::default();
        form.set_count_value("20");
        assert_eq!(form.count, CountLimit::Twenty);
        form.set_count_value("13");
        assert_eq!(form.count, CountLimit::Twenty);
        form.set_count_value("0");
        assert_eq!(form.to_filter().limit, 0);
    }
}
