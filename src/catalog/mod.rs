//! Platform catalogue: record collections and their filter schemas.
//!
//! Provides the built-in demo data set and loading of an external JSON catalogue.

pub mod builtin;
pub mod error;
pub mod models;

pub use error::CatalogError;
pub use models::{Category, FieldValue, FilterGroup, GroupKind, HealthBand, Record};

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Group whose value follows from a record's score.
pub const HEALTH_GROUP: &str = "health";

/// Every category available for browsing, in tab order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Catalog {
    pub categories: Vec<Category>,
}

impl Catalog {
    /// Catalogue compiled into the binary.
    pub fn builtin() -> Self {
        Self {
            categories: builtin::categories(),
        }
    }

    /// Load and validate a catalogue from a JSON file.
    ///
    /// # Arguments
    /// * `path` - Path to the catalogue file
    ///
    /// # Returns
    /// * `Result<Catalog, CatalogError>` - Validated catalogue or error
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut catalog: Catalog =
            serde_json::from_str(&content).map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        catalog.validate()?;
        catalog.derive_health();
        tracing::info!(
            path = %path.display(),
            categories = catalog.categories.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// Check structural invariants of the catalogue.
    ///
    /// # Details
    /// Rejects an empty catalogue, repeated category names, repeated record
    /// ids or group names within a category, scores above 100, groups
    /// without values, and search tags pointing at a categorical group.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.categories.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut names = HashSet::new();
        for category in &self.categories {
            if !names.insert(category.name.as_str()) {
                return Err(CatalogError::DuplicateCategory(category.name.clone()));
            }

            let mut ids = HashSet::new();
            for record in &category.records {
                if !ids.insert(record.id.as_str()) {
                    return Err(CatalogError::DuplicateRecord {
                        category: category.name.clone(),
                        id: record.id.clone(),
                    });
                }
                if let Some(score) = record.score
                    && score > 100
                {
                    return Err(CatalogError::ScoreOutOfRange {
                        category: category.name.clone(),
                        id: record.id.clone(),
                        score,
                    });
                }
            }

            let mut groups = HashSet::new();
            for group in &category.groups {
                if !groups.insert(group.name.as_str()) {
                    return Err(CatalogError::DuplicateGroup {
                        category: category.name.clone(),
                        group: group.name.clone(),
                    });
                }
                if group.values.is_empty() {
                    return Err(CatalogError::EmptyGroup {
                        category: category.name.clone(),
                        group: group.name.clone(),
                    });
                }
            }

            if let Some(attribute) = &category.search_tags
                && let Some(group) = category.group(attribute)
                && group.kind == GroupKind::Categorical
            {
                return Err(CatalogError::CategoricalSearchTags {
                    category: category.name.clone(),
                    group: group.name.clone(),
                });
            }
        }

        Ok(())
    }

    /// Overwrite the `health` attribute of scored records with their band.
    ///
    /// Only categories declaring a `health` filter group are touched.
    pub fn derive_health(&mut self) {
        for category in &mut self.categories {
            if category.group(HEALTH_GROUP).is_none() {
                continue;
            }
            for record in &mut category.records {
                if let Some(score) = record.score {
                    let band = HealthBand::from_score(score).as_str();
                    if record.field(HEALTH_GROUP).and_then(FieldValue::as_one) != Some(band) {
                        tracing::debug!(id = %record.id, score, band, "deriving health band");
                    }
                    record.fields.insert(
                        HEALTH_GROUP.to_string(),
                        FieldValue::One(band.to_string()),
                    );
                }
            }
        }
    }

    /// Tab position of a category.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.name == name)
    }

    /// Category names, in tab order.
    pub fn names(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn small_catalog() -> Catalog {
        Catalog {
            categories: vec![
                Category::new("tickets", "Support")
                    .with_group(FilterGroup::categorical("status", "Status", &["open", "closed"]))
                    .with_records(vec![
                        Record::new("t-1", "Login fails", "SSO loop").with_field("status", "open"),
                        Record::new("t-2", "Slow report", "Timeout").with_field("status", "closed"),
                    ]),
            ],
        }
    }

    #[test]
    fn test_builtin_is_valid() {
        let catalog = Catalog::builtin();
        catalog.validate().unwrap();
        assert_eq!(
            catalog.names(),
            vec!["courses", "applications", "services", "lifecycle", "tickets"]
        );
    }

    #[test]
    fn test_builtin_application_scores() {
        let catalog = Catalog::builtin();
        let apps = &catalog.categories[catalog.position("applications").unwrap()];
        let scores: Vec<u8> = apps.records.iter().filter_map(|r| r.score).collect();
        assert_eq!(scores, vec![95, 65, 30, 80, 45]);
    }

    #[test]
    fn test_builtin_course_order() {
        let catalog = Catalog::builtin();
        let courses = &catalog.categories[catalog.position("courses").unwrap()];
        assert_eq!(courses.records[0].title, "Digital Transformation Fundamentals");
        assert_eq!(courses.records[1].title, "DBP Capability Framework Deep Dive");
    }

    #[test]
    fn test_validate_empty() {
        let catalog = Catalog { categories: vec![] };
        assert!(matches!(catalog.validate(), Err(CatalogError::Empty)));
    }

    #[test]
    fn test_validate_duplicate_category() {
        let mut catalog = small_catalog();
        catalog.categories.push(Category::new("tickets", "Again"));
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::DuplicateCategory(name)) if name == "tickets"
        ));
    }

    #[test]
    fn test_validate_duplicate_record() {
        let mut catalog = small_catalog();
        catalog.categories[0]
            .records
            .push(Record::new("t-1", "Duplicate", "Same id"));
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::DuplicateRecord { id, .. }) if id == "t-1"
        ));
    }

    #[test]
    fn test_validate_group_rules() {
        let mut catalog = small_catalog();
        catalog.categories[0]
            .groups
            .push(FilterGroup::categorical("priority", "Priority", &[]));
        assert!(matches!(catalog.validate(), Err(CatalogError::EmptyGroup { .. })));

        let mut catalog = small_catalog();
        catalog.categories[0]
            .groups
            .push(FilterGroup::categorical("status", "Status", &["open"]));
        assert!(matches!(catalog.validate(), Err(CatalogError::DuplicateGroup { .. })));

        let mut catalog = small_catalog();
        catalog.categories[0].search_tags = Some("status".to_string());
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::CategoricalSearchTags { .. })
        ));
    }

    #[test]
    fn test_load_round_trip_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("catalog.json");
        let catalog = small_catalog();
        fs::write(&path, serde_json::to_string_pretty(&catalog).unwrap()).unwrap();

        let loaded = Catalog::load(&path).unwrap();
        assert_eq!(loaded, catalog);
    }

    #[test]
    fn test_load_minimal_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("catalog.json");
        let json = r#"{
            "categories": [{
                "name": "courses",
                "label": "Courses",
                "search_tags": "topics",
                "groups": [
                    { "name": "level", "label": "Level", "kind": "categorical", "values": ["beginner"] }
                ],
                "records": [
                    { "id": "c-1", "title": "Intro", "description": "Basics",
                      "fields": { "level": "beginner", "topics": ["data", "cloud"] },
                      "updated": "2024-01-15" }
                ]
            }]
        }"#;
        fs::write(&path, json).unwrap();

        let loaded = Catalog::load(&path).unwrap();
        let record = &loaded.categories[0].records[0];
        assert_eq!(record.field("level"), Some(&FieldValue::One("beginner".to_string())));
        assert_eq!(record.field("topics").map(FieldValue::display).as_deref(), Some("data, cloud"));
        assert!(record.updated.is_some());
    }

    #[test]
    fn test_load_derives_health_from_score() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("catalog.json");
        let json = r#"{
            "categories": [{
                "name": "applications",
                "label": "Portfolio Health",
                "groups": [
                    { "name": "health", "label": "Health", "kind": "categorical",
                      "values": ["healthy", "at-risk", "critical"] }
                ],
                "records": [
                    { "id": "a-1", "title": "CRM", "description": "Sales", "score": 95,
                      "fields": { "health": "critical" } },
                    { "id": "a-2", "title": "HR", "description": "People", "score": 80 },
                    { "id": "a-3", "title": "Billing", "description": "Legacy", "score": 41 },
                    { "id": "a-4", "title": "Wiki", "description": "Unscored",
                      "fields": { "health": "critical" } }
                ]
            }]
        }"#;
        fs::write(&path, json).unwrap();

        let loaded = Catalog::load(&path).unwrap();
        let health: Vec<Option<&str>> = loaded.categories[0]
            .records
            .iter()
            .map(|r| r.field("health").and_then(FieldValue::as_one))
            .collect();
        assert_eq!(
            health,
            vec![Some("healthy"), Some("healthy"), Some("at-risk"), Some("critical")]
        );

        let mut engine =
            crate::filter::FilterEngine::new(loaded, crate::filter::engine::DEFAULT_DEBOUNCE)
                .unwrap();
        assert!(engine.toggle_filter_value("health", "healthy"));
        let ids: Vec<&str> = engine.visible().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a-1", "a-2"]);
    }

    #[test]
    fn test_derive_health_skips_categories_without_health_group() {
        let mut catalog = small_catalog();
        catalog.categories[0].records[0].score = Some(90);
        catalog.derive_health();
        assert!(catalog.categories[0].records[0].field("health").is_none());
    }

    #[test]
    fn test_validate_score_above_100() {
        let mut catalog = small_catalog();
        catalog.categories[0].records[1].score = Some(101);
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::ScoreOutOfRange { id, score: 101, .. }) if id == "t-2"
        ));
    }

    #[test]
    fn test_load_errors() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.json");
        assert!(matches!(Catalog::load(&missing), Err(CatalogError::Io { .. })));

        let broken = temp_dir.path().join("broken.json");
        fs::write(&broken, "{ not json").unwrap();
        assert!(matches!(Catalog::load(&broken), Err(CatalogError::Parse { .. })));
    }
}
