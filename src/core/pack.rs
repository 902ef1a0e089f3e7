//! Pack records exchanged with the front-end
//!
//! The JSON shape here is the contract with the reading app: `extract`
//! emits it, `group` rewrites it, and `sync` reads it back out of the
//! app source. Field names follow the app's camelCase.

use serde::{Deserialize, Serialize};

/// A size-bounded, independently displayable slice of a category's words
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pack {
    /// Sequential identifier, assigned at serialization time
    pub id: u32,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(
        rename = "subPack",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub sub_pack: Option<String>,
    #[serde(
        rename = "subPackDescription",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub sub_pack_description: Option<String>,
    pub words: Vec<String>,
}

impl Pack {
    #[inline]
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Pack {
        Pack {
            id: 3,
            title: "P3: 1A. SHORT A".to_string(),
            description: "cat pattern".to_string(),
            category: Some("1A. SHORT A".to_string()),
            sub_pack: None,
            sub_pack_description: None,
            words: vec!["cat".to_string(), "bat".to_string()],
        }
    }

    #[test]
    fn serializes_without_absent_optionals() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("\"category\""));
        assert!(!json.contains("subPack"));
    }

    #[test]
    fn sub_pack_fields_use_app_names() {
        let mut pack = sample();
        pack.sub_pack = Some("Short Vowels".to_string());
        pack.sub_pack_description = Some("Basic phonics".to_string());

        let json = serde_json::to_string(&pack).unwrap();
        assert!(json.contains("\"subPack\":\"Short Vowels\""));
        assert!(json.contains("\"subPackDescription\":\"Basic phonics\""));
    }

    #[test]
    fn deserializes_app_records_without_category() {
        let json = r#"{"id":1,"title":"P1: X","description":"d","words":["a","b"]}"#;
        let pack: Pack = serde_json::from_str(json).unwrap();

        assert_eq!(pack.id, 1);
        assert_eq!(pack.category, None);
        assert_eq!(pack.word_count(), 2);
    }
}
