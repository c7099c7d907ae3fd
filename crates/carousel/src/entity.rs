use derive_more::{AsRef, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use serde_with::DeserializeFromStr;
use strum::{Display as StrumDisplay, EnumString};

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct EntityId(String);

crate::impl_string_newtype!(EntityId);

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct EntityName(String);

crate::impl_string_newtype!(EntityName);

/// Which content block of the active entity is on display.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    DeserializeFromStr,
    EnumString,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Face {
    #[default]
    #[strum(to_string = "front", serialize = "f", serialize = "0")]
    Front,
    #[strum(to_string = "back", serialize = "b", serialize = "1")]
    Back,
}

impl Face {
    pub fn from_flipped(is_flipped: bool) -> Self {
        if is_flipped { Self::Back } else { Self::Front }
    }

    pub fn is_back(&self) -> bool {
        matches!(self, Self::Back)
    }

    pub fn flipped(&self) -> Self {
        match self {
            Self::Front => Self::Back,
            Self::Back => Self::Front,
        }
    }

    /// Card rotation around the vertical axis the renderer animates towards.
    pub fn rotation_degrees(&self) -> f64 {
        match self {
            Self::Front => 0.0,
            Self::Back => 180.0,
        }
    }
}

/// One browsable item. `front` and `back` are opaque to this crate; only the
/// rendering layer looks inside them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity<P> {
    pub id: EntityId,
    pub name: EntityName,
    pub front: P,
    pub back: P,
}

impl<P> Entity<P> {
    pub fn new(id: impl Into<String>, name: impl Into<String>, front: P, back: P) -> Self {
        Self {
            id: EntityId::new(id),
            name: EntityName::new(name),
            front,
            back,
        }
    }

    pub fn face(&self, face: Face) -> &P {
        match face {
            Face::Front => &self.front,
            Face::Back => &self.back,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_face_deserialization() {
        let cases = vec![
            ("\"front\"", Face::Front),
            ("\"Front\"", Face::Front),
            ("\"FRONT\"", Face::Front),
            ("\"f\"", Face::Front),
            ("\"0\"", Face::Front),
            ("\"back\"", Face::Back),
            ("\"B\"", Face::Back),
            ("\"1\"", Face::Back),
        ];

        for (json, expected) in cases {
            let deserialized: Face = serde_json::from_str(json).unwrap();
            assert_eq!(deserialized, expected);
        }
    }

    #[test]
    fn test_face_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Face::Back).unwrap(), "\"back\"");
        assert_eq!(Face::Front.to_string(), "front");
    }

    #[test]
    fn test_face_flip_and_rotation() {
        assert_eq!(Face::from_flipped(false), Face::Front);
        assert_eq!(Face::from_flipped(true), Face::Back);
        assert_eq!(Face::Front.flipped(), Face::Back);
        assert_eq!(Face::Back.flipped().flipped(), Face::Back);
        assert_eq!(Face::Back.rotation_degrees(), 180.0);
    }

    #[test]
    fn test_entity_payload_is_opaque() {
        let raw = r#"{
            "id": "silica-01",
            "name": "Silica Works",
            "front": { "tag": "Quartz sand", "rank": 1 },
            "back": { "capacity": "800k t" }
        }"#;

        let entity: Entity<BTreeMap<String, serde_json::Value>> =
            serde_json::from_str(raw).unwrap();

        assert_eq!(entity.id.as_str(), "silica-01");
        assert_eq!(entity.name.to_string(), "Silica Works");
        assert_eq!(entity.face(Face::Front)["rank"], 1);
        assert_eq!(entity.face(Face::Back)["capacity"], "800k t");
    }
}
