//! The content payload a route handler hands to a page variant.

use kstring::KString;
use serde::{Deserialize, Serialize};

/// One displayed or edited item. All fields are plain strings; the
/// empty string means "not populated", which is what the upsert form
/// keys its conditional attributes on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Animal {
    pub id: String,
    pub name: String,
    #[serde(rename = "sciName")]
    pub sci_name: String,
    #[serde(rename = "englishName")]
    pub english_name: String,
    pub group: String,
    pub image: String,
    pub diet: String,
    pub lifestyle: String,
    pub location: String,
    pub slogan: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MainContent {
    Empty,
    Text(KString),
    One(Animal),
    Many(Vec<Animal>),
}

/// Built per request, consumed once by a page variant, then dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContent {
    pub main_title: KString,
    pub main: MainContent,
    /// Path of an extra client script the page wants loaded deferred.
    pub script: Option<KString>,
}

impl PageContent {
    pub fn new(main_title: impl AsRef<str>, main: MainContent) -> Self {
        PageContent {
            main_title: KString::from_ref(main_title.as_ref()),
            main,
            script: None,
        }
    }

    pub fn with_animal(animal: Animal) -> Self {
        PageContent::new("", MainContent::One(animal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_animal_field_names_on_the_wire() {
        let animal = Animal {
            id: "7".into(),
            name: "Leon".into(),
            sci_name: "Panthera leo".into(),
            ..Animal::default()
        };
        let json = serde_json::to_string(&animal).unwrap();
        assert!(json.contains("\"sciName\":\"Panthera leo\""));
        assert!(json.contains("\"englishName\":\"\""));
        let back: Animal = serde_json::from_str(&json).unwrap();
        assert_eq!(back, animal);
    }

    #[test]
    fn t_missing_fields_default_to_empty() {
        let animal: Animal = serde_json::from_str(r#"{"name": "Leon"}"#).unwrap();
        assert_eq!(animal.name, "Leon");
        assert_eq!(animal.sci_name, "");
        assert_eq!(animal.id, "");
    }
}
