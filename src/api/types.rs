use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-assigned character identifier.
///
/// The API has served both numeric and string ids, so either is accepted
/// and kept in its textual form for routing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawId")]
pub struct CharacterId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u64),
    Text(String),
}

impl From<RawId> for CharacterId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Number(n) => CharacterId(n.to_string()),
            RawId::Text(s) => CharacterId(s),
        }
    }
}

impl From<u64> for CharacterId {
    fn from(n: u64) -> Self {
        CharacterId(n.to_string())
    }
}

impl From<&str> for CharacterId {
    fn from(s: &str) -> Self {
        CharacterId(s.to_string())
    }
}

impl CharacterId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One entry of the character list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSummary {
    pub id: CharacterId,
    pub name: String,
}

/// A detail field as the server sent it. Shown verbatim, never coerced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DisplayValue {
    Text(String),
    Number(serde_json::Number),
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayValue::Text(s) => f.write_str(s),
            DisplayValue::Number(n) => write!(f, "{}", n),
        }
    }
}

/// Full record returned by `GET /characters/:id`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CharacterDetail {
    pub name: Option<DisplayValue>,
    pub birth_year: Option<DisplayValue>,
    pub eye_color: Option<DisplayValue>,
    pub gender: Option<DisplayValue>,
    pub hair_color: Option<DisplayValue>,
    pub height: Option<DisplayValue>,
    pub mass: Option<DisplayValue>,
    pub skin_color: Option<DisplayValue>,
}

impl CharacterDetail {
    /// Labelled attribute rows in display order (the name is the title).
    pub fn attributes(&self) -> [(&'static str, Option<&DisplayValue>); 7] {
        [
            ("Birth Year", self.birth_year.as_ref()),
            ("Eye Color", self.eye_color.as_ref()),
            ("Gender", self.gender.as_ref()),
            ("Hair Color", self.hair_color.as_ref()),
            ("Height", self.height.as_ref()),
            ("Mass", self.mass.as_ref()),
            ("Skin Color", self.skin_color.as_ref()),
        ]
    }
}
