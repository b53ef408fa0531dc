use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::domain::inventory::models::CatalogEntry;
use crate::inventory::ports::Catalog;

/// Master product catalog held in memory for the process lifetime.
///
/// Entries come from a JSON file read once at startup. If the file is
/// missing or unreadable the catalog starts empty; the service keeps
/// running and every lookup simply misses.
pub struct InMemoryCatalog {
    entries: HashMap<String, CatalogEntry>,
}

#[derive(Debug, Deserialize)]
struct CatalogFileEntry {
    code: String,
    description: String,
    stock: i64,
}

impl InMemoryCatalog {
    /// Load the catalog from a JSON array of `{code, description, stock}`.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Catalog file unavailable, starting with an empty catalog"
                );
                return Self::empty();
            }
        };

        let file_entries: Vec<CatalogFileEntry> = match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Catalog file unparseable, starting with an empty catalog"
                );
                return Self::empty();
            }
        };

        let entries: HashMap<String, CatalogEntry> = file_entries
            .into_iter()
            .map(|entry| {
                (
                    normalize_code(&entry.code),
                    CatalogEntry {
                        code: entry.code,
                        description: entry.description,
                        stock: entry.stock,
                    },
                )
            })
            .collect();

        tracing::info!(
            path = %path.display(),
            entries = entries.len(),
            "Catalog loaded"
        );

        Self { entries }
    }

    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Catalog for InMemoryCatalog {
    fn lookup(&self, code: &str) -> Option<CatalogEntry> {
        self.entries.get(&normalize_code(code)).cloned()
    }
}

fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn catalog_from(json: &str) -> InMemoryCatalog {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        InMemoryCatalog::load(file.path())
    }

    #[test]
    fn test_lookup_is_case_insensitive_and_trims() {
        let catalog = catalog_from(
            r#"[{"code": "a100", "description": "Widget", "stock": 12}]"#,
        );

        for code in ["a100", "A100", "  A100  "] {
            let entry = catalog.lookup(code).expect("entry should be found");
            assert_eq!(entry.description, "Widget");
            assert_eq!(entry.stock, 12);
        }

        assert!(catalog.lookup("B200").is_none());
    }

    #[test]
    fn test_missing_file_yields_empty_catalog() {
        let catalog = InMemoryCatalog::load("/does/not/exist.json");
        assert!(catalog.is_empty());
        assert!(catalog.lookup("A100").is_none());
    }

    #[test]
    fn test_unparseable_file_yields_empty_catalog() {
        let catalog = catalog_from("not json at all");
        assert!(catalog.is_empty());
    }
}
