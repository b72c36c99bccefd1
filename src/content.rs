//! Immutable content store backing the read endpoints
//!
//! The four seed files under the content directory are read and
//! verified once at startup. The resulting store is shared behind an
//! `Arc` and has no write path; every accessor is a pure read.

use std::path::Path;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::errors::ContentError;
use crate::models::{Category, Profile, Project, Service, Testimonial};

#[derive(Debug)]
pub struct ContentStore {
    profile: Profile,
    services: Vec<Service>,
    projects: Vec<Project>,
    testimonials: Vec<Testimonial>,
}

impl ContentStore {
    /// Load and verify the content set from a directory.
    pub fn load(dir: &Path) -> Result<Arc<Self>, ContentError> {
        let store = Self {
            profile: read_json(&dir.join("profile.json"))?,
            services: read_json(&dir.join("services.json"))?,
            projects: read_json(&dir.join("projects.json"))?,
            testimonials: read_json(&dir.join("testimonials.json"))?,
        };
        store.verify()?;
        Ok(Arc::new(store))
    }

    /// Load from the `content/` directory beside the crate manifest.
    pub fn load_default() -> Result<Arc<Self>, ContentError> {
        Self::load(Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/content")))
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn testimonials(&self) -> &[Testimonial] {
        &self.testimonials
    }

    /// Projects matching the filter, in seed insertion order.
    /// `None` returns the full set.
    pub fn projects(&self, filter: Option<Category>) -> Vec<Project> {
        self.projects
            .iter()
            .filter(|p| filter.map_or(true, |c| p.category == c))
            .cloned()
            .collect()
    }

    fn verify(&self) -> Result<(), ContentError> {
        for t in &self.testimonials {
            if !(1..=5).contains(&t.rating) {
                return Err(ContentError::Invalid {
                    reason: format!("testimonial {} has rating {} outside 1-5", t.id, t.rating),
                });
            }
        }
        check_unique_ids("service", self.services.iter().map(|s| s.id))?;
        check_unique_ids("project", self.projects.iter().map(|p| p.id))?;
        check_unique_ids("testimonial", self.testimonials.iter().map(|t| t.id))?;
        Ok(())
    }
}

fn check_unique_ids(kind: &str, ids: impl Iterator<Item = u32>) -> Result<(), ContentError> {
    let mut seen = std::collections::HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ContentError::Invalid { reason: format!("duplicate {kind} id {id}") });
        }
    }
    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ContentError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ContentError::Unreadable {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ContentError::Malformed {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_content_loads_and_verifies() {
        let store = ContentStore::load_default().unwrap();
        assert!(!store.services().is_empty());
        assert!(!store.projects(None).is_empty());
        assert!(!store.testimonials().is_empty());
    }

    #[test]
    fn category_filter_is_exact_match_in_seed_order() {
        let store = ContentStore::load_default().unwrap();
        let automation = store.projects(Some(Category::Automation));
        assert!(!automation.is_empty());
        assert!(automation.iter().all(|p| p.category == Category::Automation));

        // seed order is preserved under filtering
        let all = store.projects(None);
        let expected: Vec<u32> = all
            .iter()
            .filter(|p| p.category == Category::Automation)
            .map(|p| p.id)
            .collect();
        let got: Vec<u32> = automation.iter().map(|p| p.id).collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn every_enumerated_category_only_returns_its_own() {
        let store = ContentStore::load_default().unwrap();
        for cat in [
            Category::Automation,
            Category::Web,
            Category::Integration,
            Category::Infrastructure,
        ] {
            assert!(store.projects(Some(cat)).iter().all(|p| p.category == cat));
        }
    }

    #[test]
    fn profile_serializes_identically_across_calls() {
        let store = ContentStore::load_default().unwrap();
        let first = serde_json::to_vec(store.profile()).unwrap();
        let second = serde_json::to_vec(store.profile()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn unknown_category_param_parses_to_none() {
        assert_eq!(Category::from_param("blockchain"), None);
        assert_eq!(Category::from_param(""), None);
        assert_eq!(Category::from_param("Automation"), Some(Category::Automation));
        assert_eq!(Category::from_param("  web "), Some(Category::Web));
    }

    #[test]
    fn out_of_range_rating_fails_verification() {
        let store = ContentStore {
            profile: ContentStore::load_default().unwrap().profile().clone(),
            services: vec![],
            projects: vec![],
            testimonials: vec![crate::models::Testimonial {
                id: 1,
                content: "x".into(),
                client_name: "x".into(),
                client_title: "x".into(),
                rating: 6,
                image: "x".into(),
            }],
        };
        let err = store.verify().unwrap_err();
        assert!(matches!(err, ContentError::Invalid { .. }));
    }

    #[test]
    fn duplicate_ids_fail_verification() {
        let base = ContentStore::load_default().unwrap();
        let mut services = base.services().to_vec();
        services.push(services[0].clone());
        let store = ContentStore {
            profile: base.profile().clone(),
            services,
            projects: vec![],
            testimonials: vec![],
        };
        assert!(matches!(store.verify(), Err(ContentError::Invalid { .. })));
    }

    #[test]
    fn missing_directory_is_unreadable() {
        let err = ContentStore::load(Path::new("/nonexistent/content")).unwrap_err();
        assert!(matches!(err, ContentError::Unreadable { .. }));
    }
}
