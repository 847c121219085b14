//! Catalogue data model.
//!
//! Contains records, filter-group manifests and the categories that bundle them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Value of a record attribute.
///
/// Categorical attributes hold a single enumerated value, tag-like
/// attributes hold a list of free-form strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum FieldValue {
    /// Single categorical value (e.g. `status = "open"`)
    One(String),
    /// Tag list (e.g. `topics = ["data", "governance"]`)
    Many(Vec<String>),
}

impl FieldValue {
    /// Iterate over the contained strings regardless of variant.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        let slice: &[String] = match self {
            FieldValue::One(value) => std::slice::from_ref(value),
            FieldValue::Many(values) => values,
        };
        slice.iter().map(String::as_str)
    }

    /// The single value of a categorical attribute.
    pub fn as_one(&self) -> Option<&str> {
        match self {
            FieldValue::One(value) => Some(value),
            FieldValue::Many(_) => None,
        }
    }

    /// Format the value for display.
    ///
    /// # Returns
    /// * `String` - Single value as-is, lists joined with `", "`
    pub fn display(&self) -> String {
        self.values().collect::<Vec<_>>().join(", ")
    }
}

/// A single browsable entry in a category (course, application, ticket, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    /// Identifier, unique within its category
    pub id: String,
    /// Display title
    pub title: String,
    /// Display description
    pub description: String,
    /// Categorical and tag attributes keyed by attribute name
    #[serde(default)]
    pub fields: BTreeMap<String, FieldValue>,
    /// Optional 0-100 score (health, maturity)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u8>,
    /// Optional last-updated date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<NaiveDate>,
}

impl Record {
    /// Create a record with no attributes.
    pub fn new(id: &str, title: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            fields: BTreeMap::new(),
            score: None,
            updated: None,
        }
    }

    /// Set a categorical attribute.
    pub fn with_field(mut self, name: &str, value: &str) -> Self {
        self.fields
            .insert(name.to_string(), FieldValue::One(value.to_string()));
        self
    }

    /// Set a tag-list attribute.
    pub fn with_tags(mut self, name: &str, tags: &[&str]) -> Self {
        let tags = tags.iter().map(|t| t.to_string()).collect();
        self.fields.insert(name.to_string(), FieldValue::Many(tags));
        self
    }

    /// Set the score, clamped to 100.
    pub fn with_score(mut self, score: u8) -> Self {
        self.score = Some(score.min(100));
        self
    }

    /// Set the last-updated date. Invalid calendar dates leave it unset.
    pub fn with_updated(mut self, year: i32, month: u32, day: u32) -> Self {
        self.updated = NaiveDate::from_ymd_opt(year, month, day);
        self
    }

    /// Look up an attribute by name.
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Format the last-updated date (e.g. "Tue. 12.03.2024").
    pub fn format_updated(&self) -> Option<String> {
        self.updated
            .map(|date| date.format("%a. %d.%m.%Y").to_string())
    }
}

/// How a filter group is matched against a record attribute.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GroupKind {
    /// Attribute value must be one of the selected values
    Categorical,
    /// Some selected value must be a substring of some tag
    Tags,
}

/// Declared filter group of a category: attribute name plus allowed values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterGroup {
    /// Attribute name the group filters on
    pub name: String,
    /// Display label
    pub label: String,
    /// Matching strategy
    pub kind: GroupKind,
    /// Enumerated values, in display order
    pub values: Vec<String>,
}

impl FilterGroup {
    /// Create a categorical group.
    pub fn categorical(name: &str, label: &str, values: &[&str]) -> Self {
        Self::new(name, label, GroupKind::Categorical, values)
    }

    /// Create a tag group.
    pub fn tags(name: &str, label: &str, values: &[&str]) -> Self {
        Self::new(name, label, GroupKind::Tags, values)
    }

    fn new(name: &str, label: &str, kind: GroupKind, values: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }
}

/// One browsable collection together with its filter schema.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// Key used to select the category
    pub name: String,
    /// Tab title
    pub label: String,
    /// Tag attribute that free-text search also looks into
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_tags: Option<String>,
    /// Filter groups offered for this category
    #[serde(default)]
    pub groups: Vec<FilterGroup>,
    /// Records, in display order
    #[serde(default)]
    pub records: Vec<Record>,
}

impl Category {
    /// Create an empty category.
    pub fn new(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            search_tags: None,
            groups: Vec::new(),
            records: Vec::new(),
        }
    }

    /// Set the tag attribute searched by free text.
    pub fn with_search_tags(mut self, attribute: &str) -> Self {
        self.search_tags = Some(attribute.to_string());
        self
    }

    /// Append a filter group.
    pub fn with_group(mut self, group: FilterGroup) -> Self {
        self.groups.push(group);
        self
    }

    /// Replace the records.
    pub fn with_records(mut self, records: Vec<Record>) -> Self {
        self.records = records;
        self
    }

    /// Look up a filter group by attribute name.
    pub fn group(&self, name: &str) -> Option<&FilterGroup> {
        self.groups.iter().find(|g| g.name == name)
    }
}

/// Health band derived from an application's health score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthBand {
    /// Score 71 and above
    Healthy,
    /// Score 41 to 70
    AtRisk,
    /// Score 40 and below
    Critical,
}

impl HealthBand {
    /// Classify a health score.
    pub fn from_score(score: u8) -> Self {
        match score {
            71.. => HealthBand::Healthy,
            41..=70 => HealthBand::AtRisk,
            _ => HealthBand::Critical,
        }
    }

    /// Attribute value used in catalogue data.
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthBand::Healthy => "healthy",
            HealthBand::AtRisk => "at-risk",
            HealthBand::Critical => "critical",
        }
    }
}
