//! Searchable selection control state

use crate::state::SelectOption;

/// A list of options with a filter query, a highlighted row and a chosen value.
///
/// The selected value may name an option that has not been loaded yet; it is
/// kept as-is so a preselected record survives a late option fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Combobox {
    options: Vec<SelectOption>,
    query: String,
    highlighted: usize,
    selected: Option<String>,
}

impl Combobox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_options(&mut self, options: Vec<SelectOption>) {
        self.options = options;
        self.highlighted = 0;
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    /// Options whose label contains the query, ignoring case
    pub fn filtered(&self) -> Vec<&SelectOption> {
        let needle = self.query.to_lowercase();
        self.options
            .iter()
            .filter(|o| needle.is_empty() || o.label.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn push_query(&mut self, c: char) {
        self.query.push(c);
        self.highlighted = 0;
    }

    pub fn pop_query(&mut self) {
        self.query.pop();
        self.highlighted = 0;
    }

    pub fn highlight_next(&mut self) {
        let count = self.filtered().len();
        if count > 0 && self.highlighted < count - 1 {
            self.highlighted += 1;
        }
    }

    pub fn highlight_prev(&mut self) {
        self.highlighted = self.highlighted.saturating_sub(1);
    }

    /// Choose the highlighted option. Returns false when nothing matches the query.
    pub fn select_highlighted(&mut self) -> bool {
        let value = self
            .filtered()
            .get(self.highlighted)
            .map(|o| o.value.clone());
        match value {
            Some(value) => {
                self.selected = Some(value);
                self.query.clear();
                self.highlighted = 0;
                true
            }
            None => false,
        }
    }

    pub fn select_value(&mut self, value: impl Into<String>) {
        self.selected = Some(value.into());
    }

    pub fn selected_value(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Label of the chosen option, if its option has been loaded
    pub fn selected_label(&self) -> Option<&str> {
        let selected = self.selected.as_deref()?;
        self.options
            .iter()
            .find(|o| o.value == selected)
            .map(|o| o.label.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn combobox() -> Combobox {
        let mut combo = Combobox::new();
        combo.set_options(vec![
            SelectOption::new("1", "RG"),
            SelectOption::new("2", "CPF"),
            SelectOption::new("3", "Comprovante de residência"),
        ]);
        combo
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let mut combo = combobox();
        combo.push_query('c');
        let labels: Vec<_> = combo.filtered().iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["CPF", "Comprovante de residência"]);
    }

    #[test]
    fn test_select_highlighted_within_filter() {
        let mut combo = combobox();
        combo.push_query('c');
        combo.highlight_next();
        assert!(combo.select_highlighted());
        assert_eq!(combo.selected_value(), Some("3"));
        assert_eq!(combo.query(), "");
    }

    #[test]
    fn test_select_with_no_match_keeps_selection() {
        let mut combo = combobox();
        combo.select_value("1");
        combo.push_query('z');
        assert!(!combo.select_highlighted());
        assert_eq!(combo.selected_value(), Some("1"));
    }

    #[test]
    fn test_highlight_is_clamped() {
        let mut combo = combobox();
        combo.highlight_prev();
        assert_eq!(combo.highlighted(), 0);
        for _ in 0..10 {
            combo.highlight_next();
        }
        assert_eq!(combo.highlighted(), 2);
    }

    #[test]
    fn test_preselected_value_survives_option_load() {
        let mut combo = Combobox::new();
        combo.select_value("2");
        assert_eq!(combo.selected_label(), None);

        combo.set_options(vec![SelectOption::new("2", "CPF")]);
        assert_eq!(combo.selected_value(), Some("2"));
        assert_eq!(combo.selected_label(), Some("CPF"));
    }

    #[test]
    fn test_pop_query_resets_highlight() {
        let mut combo = combobox();
        combo.highlight_next();
        combo.push_query('r');
        combo.pop_query();
        assert_eq!(combo.query(), "");
        assert_eq!(combo.highlighted(), 0);
    }
}
