use carousel::{Entity, EntityId};
use derive_more::{AsRef, Deref, Into};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;
use std::path::Path;
use std::str::FromStr;
use strum::{Display as StrumDisplay, EnumString};
use thiserror::Error;

/// Field bag shown on one face of a card.
pub type Payload = serde_json::Map<String, serde_json::Value>;

pub type Company = Entity<Payload>;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("Invalid JSON content: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid TOML content: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Unsupported content format '{0}' (expected json or toml)")]
    UnsupportedFormat(String),
    #[error("Entity #{0} has an empty id")]
    EmptyId(usize),
    #[error("Entity '{0}' has an empty name")]
    EmptyName(EntityId),
    #[error("Duplicate entity id '{0}'")]
    DuplicateId(EntityId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, StrumDisplay)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum ContentFormat {
    Json,
    Toml,
}

impl ContentFormat {
    pub fn from_path(path: &Path) -> Result<Self, ContentError> {
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or_default();
        Self::from_str(ext).map_err(|_| ContentError::UnsupportedFormat(ext.to_string()))
    }
}

/// Ordered, validated list of entities. Read-only once loaded.
#[derive(Debug, Clone, Default, Deref, Into, AsRef)]
pub struct EntityList(Vec<Company>);

#[derive(Deserialize)]
struct TomlContent {
    #[serde(default)]
    entities: Vec<Company>,
}

/// Accepts `{ "entities": [...] }` or a bare array.
fn parse_json(raw: &str) -> Result<Vec<Company>, ContentError> {
    let entities = match serde_json::from_str::<Value>(raw)? {
        Value::Object(mut file) => file
            .remove("entities")
            .unwrap_or_else(|| Value::Array(Vec::new())),
        other => other,
    };
    Ok(serde_json::from_value(entities)?)
}

impl EntityList {
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let format = ContentFormat::from_path(path)?;
        let raw = fs_err::read_to_string(path)?;
        let list = Self::parse(&raw, format)?;
        log::info!(
            "Loaded {} entities from {} ({})",
            list.len(),
            path.display(),
            format
        );
        Ok(list)
    }

    pub fn parse(raw: &str, format: ContentFormat) -> Result<Self, ContentError> {
        let entities = match format {
            ContentFormat::Json => parse_json(raw)?,
            ContentFormat::Toml => toml::from_str::<TomlContent>(raw)?.entities,
        };
        Self::validated(entities)
    }

    pub fn validated(entities: Vec<Company>) -> Result<Self, ContentError> {
        let mut seen = HashSet::new();
        for (i, entity) in entities.iter().enumerate() {
            if entity.id.trim().is_empty() {
                return Err(ContentError::EmptyId(i));
            }
            if entity.name.trim().is_empty() {
                return Err(ContentError::EmptyName(entity.id.clone()));
            }
            if !seen.insert(&entity.id) {
                return Err(ContentError::DuplicateId(entity.id.clone()));
            }
        }
        Ok(Self(entities))
    }

    pub fn as_slice(&self) -> &[Company] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carousel::Face;

    const COMPANIES_JSON: &str = r#"{
        "entities": [
            {
                "id": "quartz",
                "name": "Quartz Sand Co.",
                "front": { "tag": "High purity", "desc": "Sand washing and grading." },
                "back": { "product": "Quartz sand", "capacity": "800k t/yr", "partner": "Glassworks" }
            },
            {
                "id": "glass",
                "name": "Float Glass Ltd.",
                "front": { "tag": "Glass", "desc": "Float glass lines." },
                "back": { "product": "Float glass", "capacity": "1.2M m2", "partner": "Solar" }
            }
        ]
    }"#;

    #[test]
    fn test_parse_wrapped_json() {
        let list = EntityList::parse(COMPANIES_JSON, ContentFormat::Json).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].id.as_str(), "glass");
        assert_eq!(list[0].face(Face::Back)["capacity"], "800k t/yr");
    }

    #[test]
    fn test_parse_bare_json_array() {
        let raw = r#"[{ "id": "a", "name": "A", "front": {}, "back": {} }]"#;
        let list = EntityList::parse(raw, ContentFormat::Json).unwrap();
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_parse_toml() {
        let raw = r#"
            [[entities]]
            id = "quartz"
            name = "Quartz Sand Co."
            front = { tag = "High purity", rank = 1 }
            back = { product = "Quartz sand" }
        "#;
        let list = EntityList::parse(raw, ContentFormat::Toml).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].front["rank"], 1);
        assert_eq!(list[0].back["product"], "Quartz sand");
    }

    #[test]
    fn test_json_error_names_missing_field() {
        let raw = r#"{ "entities": [ { "id": "a", "front": {}, "back": {} } ] }"#;
        let err = EntityList::parse(raw, ContentFormat::Json).unwrap_err();
        assert!(matches!(err, ContentError::Json(_)));
        assert!(err.to_string().contains("missing field `name`"), "{err}");

        let raw = r#"[{ "id": "a", "name": "A", "front": {} }]"#;
        let err = EntityList::parse(raw, ContentFormat::Json).unwrap_err();
        assert!(err.to_string().contains("missing field `back`"), "{err}");
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let raw = r#"[
            { "id": "a", "name": "A", "front": {}, "back": {} },
            { "id": "a", "name": "Again", "front": {}, "back": {} }
        ]"#;
        let err = EntityList::parse(raw, ContentFormat::Json).unwrap_err();
        assert!(matches!(err, ContentError::DuplicateId(id) if id.as_str() == "a"));
    }

    #[test]
    fn test_blank_fields_are_rejected() {
        let raw = r#"[{ "id": " ", "name": "A", "front": {}, "back": {} }]"#;
        assert!(matches!(
            EntityList::parse(raw, ContentFormat::Json),
            Err(ContentError::EmptyId(0))
        ));

        let raw = r#"[{ "id": "a", "name": "", "front": {}, "back": {} }]"#;
        assert!(matches!(
            EntityList::parse(raw, ContentFormat::Json),
            Err(ContentError::EmptyName(_))
        ));
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            ContentFormat::from_path(Path::new("a/companies.JSON")).unwrap(),
            ContentFormat::Json
        );
        assert_eq!(
            ContentFormat::from_path(Path::new("companies.toml")).unwrap(),
            ContentFormat::Toml
        );
        assert!(matches!(
            ContentFormat::from_path(Path::new("companies.yaml")),
            Err(ContentError::UnsupportedFormat(ext)) if ext == "yaml"
        ));
    }

    #[test]
    fn test_load_demo_content() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos/companies.json");
        let list = EntityList::load(&path).unwrap();
        assert_eq!(list.len(), 5);
        assert_eq!(list[0].id.as_str(), "quartz-sand");
        assert!(list.iter().all(|c| c.back.contains_key("capacity")));
    }

    #[test]
    fn test_load_missing_file() {
        let err = EntityList::load(Path::new("/nonexistent/companies.json")).unwrap_err();
        assert!(matches!(err, ContentError::Io(_)));
    }
}
