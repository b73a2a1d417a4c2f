//! Read-only animal data, seeded from a JSON document at startup.
//! There is deliberately no write path; the form submission endpoints
//! stay stubs.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};

use crate::content::Animal;

pub struct AnimalStore {
    animals: Vec<Animal>,
}

impl AnimalStore {
    pub fn load(path: impl AsRef<Path>) -> Result<AnimalStore> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| anyhow!("reading seed data from {:?}", path))?;
        Self::from_json(&text).with_context(|| anyhow!("parsing seed data from {:?}", path))
    }

    pub fn from_json(text: &str) -> Result<AnimalStore> {
        Ok(AnimalStore {
            animals: serde_json::from_str(text)?,
        })
    }

    pub fn all(&self) -> &[Animal] {
        &self.animals
    }

    pub fn by_id(&self, id: &str) -> Option<&Animal> {
        self.animals.iter().find(|animal| animal.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: &str = r#"[
        {"id": "7", "name": "Leon", "sciName": "Panthera leo", "image": "leon.jpg"},
        {"id": "8", "name": "Tigre", "sciName": "Panthera tigris"}
    ]"#;

    #[test]
    fn t_from_json() {
        let store = AnimalStore::from_json(SEED).unwrap();
        assert_eq!(store.all().len(), 2);
        assert_eq!(store.by_id("7").unwrap().name, "Leon");
        assert_eq!(store.by_id("8").unwrap().sci_name, "Panthera tigris");
        // fields the document leaves out are empty, not missing
        assert_eq!(store.by_id("8").unwrap().image, "");
        assert!(store.by_id("9").is_none());
    }

    #[test]
    fn t_malformed_document_is_an_error() {
        assert!(AnimalStore::from_json("{\"not\": \"a list\"}").is_err());
    }
}
