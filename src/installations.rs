use serde::Deserialize;
use std::collections::HashSet;

use crate::error::FestivalError;

const EMBEDDED_CATALOG: &str = include_str!("../assets/installations.json");

#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Installation {
    pub id: u32,
    pub name: String,
    pub artwork_title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub image: String,
    #[serde(default)]
    pub link: Option<String>,
    pub studio: String,
    pub coordinates: Coordinates,
}

/// The fixed, ordered list of festival installations.
#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    installations: Vec<Installation>,
}

impl Catalog {
    pub fn embedded() -> Result<Self, FestivalError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    pub fn from_json(raw: &str) -> Result<Self, FestivalError> {
        let installations: Vec<Installation> = serde_json::from_str(raw)?;

        let mut seen = HashSet::new();
        for installation in &installations {
            if !seen.insert(installation.id) {
                return Err(FestivalError::DuplicateInstallation {
                    id: installation.id,
                });
            }
        }

        Ok(Self { installations })
    }

    pub fn len(&self) -> usize {
        self.installations.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Installation> {
        self.installations.iter()
    }

    /// Grid entries whose name contains `term`, case-insensitively.
    ///
    /// A blank term matches every installation. The iterator borrows the
    /// catalog and can be cloned to walk the entries again.
    pub fn matching<'a>(
        &'a self,
        term: &str,
    ) -> impl Iterator<Item = &'a Installation> + Clone + 'a {
        let needle = term.trim().to_lowercase();
        self.iter().filter(move |installation| {
            needle.is_empty() || installation.name.to_lowercase().contains(&needle)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names<'a>(entries: impl Iterator<Item = &'a Installation>) -> Vec<&'a str> {
        entries.map(|installation| installation.name.as_str()).collect()
    }

    #[test]
    fn embedded_catalog_loads_with_unique_ids() {
        let catalog = Catalog::embedded().expect("embedded catalog should parse");
        assert!(catalog.len() > 0);

        let ids: HashSet<u32> = catalog.iter().map(|installation| installation.id).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn optional_fields_default_to_none() {
        let catalog = Catalog::from_json(
            r#"[{
                "id": 9,
                "name": "Bare",
                "artworkTitle": "Untitled",
                "image": "/bare.webp",
                "studio": "Nobody",
                "coordinates": { "lat": 1.0, "lng": 2.0 }
            }]"#,
        )
        .expect("minimal record should parse");

        let installation = catalog.iter().next().expect("one record");
        assert_eq!(installation.description, None);
        assert_eq!(installation.link, None);
        assert_eq!(installation.artwork_title, "Untitled");
    }

    #[test]
    fn malformed_catalog_is_rejected() {
        let result = Catalog::from_json(r#"[{ "id": "one" }]"#);
        assert!(matches!(result, Err(FestivalError::Catalog(_))));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let record = r#"{
            "id": 3,
            "name": "Twin",
            "artworkTitle": "Mirror",
            "image": "/twin.webp",
            "studio": "Echo",
            "coordinates": { "lat": 0, "lng": 0 }
        }"#;
        let result = Catalog::from_json(&format!("[{record},{record}]"));
        assert!(matches!(
            result,
            Err(FestivalError::DuplicateInstallation { id: 3 })
        ));
    }

    #[test]
    fn blank_search_returns_everything_in_order() {
        let catalog = Catalog::embedded().expect("embedded catalog should parse");

        let all = names(catalog.iter());
        assert_eq!(names(catalog.matching("")), all);
        assert_eq!(names(catalog.matching("   ")), all);
    }

    #[test]
    fn search_is_case_insensitive_substring_match() {
        let catalog = Catalog::embedded().expect("embedded catalog should parse");

        assert_eq!(names(catalog.matching("STAGE")), vec!["Main Stage"]);
        assert_eq!(names(catalog.matching("lounge")), vec!["Subathon Lounge"]);
        assert_eq!(names(catalog.matching("no such venue")).len(), 0);
    }

    #[test]
    fn matching_iterator_can_be_restarted() {
        let catalog = Catalog::embedded().expect("embedded catalog should parse");

        let entries = catalog.matching("a");
        let first_pass = entries.clone().count();
        assert_eq!(entries.count(), first_pass);
    }
}
