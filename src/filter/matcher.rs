//! Record matching predicates.
//!
//! Pure functions deciding whether a record passes the free-text query and
//! the selected filter groups of its category.

use crate::catalog::{Category, FieldValue, FilterGroup, GroupKind, Record};
use std::collections::{BTreeMap, BTreeSet};

/// Query and filter selections applied to the active category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Applied (debounced) free-text query
    pub query: String,
    /// Selected values keyed by filter group name; empty sets are not stored
    pub selections: BTreeMap<String, BTreeSet<String>>,
}

impl FilterState {
    /// Check a record against the query and every non-empty selection.
    ///
    /// # Arguments
    /// * `category` - Category the record belongs to (supplies the schema)
    /// * `record` - Record to test
    ///
    /// # Returns
    /// * `bool` - True if the record belongs to the visible set
    pub fn matches(&self, category: &Category, record: &Record) -> bool {
        if let Some(needle) = normalize_query(&self.query)
            && !matches_query(record, &needle, category.search_tags.as_deref())
        {
            return false;
        }

        self.selections.iter().all(|(name, selected)| {
            if selected.is_empty() {
                return true;
            }
            match category.group(name) {
                Some(group) => matches_group(record, group, selected),
                None => false,
            }
        })
    }

    /// Total number of selected values across all groups.
    pub fn selected_count(&self) -> usize {
        self.selections.values().map(BTreeSet::len).sum()
    }
}

/// Trim and lowercase a query.
///
/// # Returns
/// * `Option<String>` - Normalized needle, or None when the query is blank
pub fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Case-insensitive substring match over title, description and search tags.
///
/// `needle` must already be lowercase.
pub fn matches_query(record: &Record, needle: &str, search_tags: Option<&str>) -> bool {
    if record.title.to_lowercase().contains(needle)
        || record.description.to_lowercase().contains(needle)
    {
        return true;
    }

    search_tags
        .and_then(|attribute| record.field(attribute))
        .is_some_and(|tags| tags.values().any(|tag| tag.to_lowercase().contains(needle)))
}

/// Check one filter group with a non-empty selection.
///
/// # Details
/// Categorical groups require the attribute value to be selected. Tag
/// groups require some selected value to occur (case-insensitively) inside
/// some tag. Records without the attribute never match.
pub fn matches_group(record: &Record, group: &FilterGroup, selected: &BTreeSet<String>) -> bool {
    let Some(value) = record.field(&group.name) else {
        return false;
    };

    match group.kind {
        GroupKind::Categorical => value.values().any(|v| selected.contains(v)),
        GroupKind::Tags => {
            let tags = lowercase_values(value);
            selected.iter().any(|wanted| {
                let wanted = wanted.to_lowercase();
                tags.iter().any(|tag| tag.contains(&wanted))
            })
        }
    }
}

fn lowercase_values(value: &FieldValue) -> Vec<String> {
    value.values().map(str::to_lowercase).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> Record {
        Record::new("svc-1", "Process Automation Suite", "Low-code workflow builder")
            .with_field("complexity", "medium")
            .with_tags("capabilities", &["Automation", "workflow"])
    }

    fn category() -> Category {
        Category::new("services", "Marketplace")
            .with_search_tags("capabilities")
            .with_group(FilterGroup::categorical(
                "complexity",
                "Complexity",
                &["low", "medium", "high"],
            ))
            .with_group(FilterGroup::tags(
                "capabilities",
                "Capabilities",
                &["automation", "identity"],
            ))
    }

    fn selection(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query("   "), None);
        assert_eq!(normalize_query(""), None);
        assert_eq!(normalize_query("  ACME "), Some("acme".to_string()));
    }

    #[test]
    fn test_matches_query_fields() {
        let record = service();
        assert!(matches_query(&record, "automation suite", None));
        assert!(matches_query(&record, "low-code", None));
        assert!(!matches_query(&record, "workflow builder x", None));
        // Tags only count when designated as searchable
        let tagged = Record::new("x", "Title", "Desc").with_tags("capabilities", &["Identity"]);
        assert!(matches_query(&tagged, "ident", Some("capabilities")));
        assert!(!matches_query(&tagged, "ident", None));
    }

    #[test]
    fn test_matches_categorical_group() {
        let record = service();
        let group = FilterGroup::categorical("complexity", "Complexity", &["low", "medium"]);
        assert!(matches_group(&record, &group, &selection(&["low", "medium"])));
        assert!(!matches_group(&record, &group, &selection(&["high"])));
        assert!(!matches_group(&record, &group, &selection(&["Medium"])));
        assert!(!matches_group(&record, &group, &selection(&["not-a-value"])));
    }

    #[test]
    fn test_matches_tag_group_substring() {
        let record = service();
        let group = FilterGroup::tags("capabilities", "Capabilities", &["automation"]);
        assert!(matches_group(&record, &group, &selection(&["automat"])));
        assert!(matches_group(&record, &group, &selection(&["identity", "WORK"])));
        assert!(!matches_group(&record, &group, &selection(&["identity"])));
    }

    #[test]
    fn test_missing_attribute_never_matches() {
        let record = Record::new("bare", "Bare", "No attributes");
        let group = FilterGroup::categorical("complexity", "Complexity", &["low"]);
        assert!(!matches_group(&record, &group, &selection(&["low"])));
    }

    #[test]
    fn test_state_and_across_groups() {
        let category = category();
        let record = service();
        let mut state = FilterState::default();
        assert!(state.matches(&category, &record));

        state
            .selections
            .insert("complexity".to_string(), selection(&["medium"]));
        state
            .selections
            .insert("capabilities".to_string(), selection(&["identity"]));
        assert!(!state.matches(&category, &record));
        assert_eq!(state.selected_count(), 2);

        state
            .selections
            .insert("capabilities".to_string(), selection(&["identity", "automation"]));
        assert!(state.matches(&category, &record));

        state.query = "nothing like it".to_string();
        assert!(!state.matches(&category, &record));
    }

    #[test]
    fn test_state_empty_selection_is_skipped() {
        let category = category();
        let mut state = FilterState::default();
        state.selections.insert("complexity".to_string(), BTreeSet::new());
        assert!(state.matches(&category, &service()));
    }
}
