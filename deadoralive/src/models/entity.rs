use serde::de::{Deserializer, IgnoredAny};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// "instance of"
pub const PROPERTY_INSTANCE_OF: &str = "P31";
/// "date of birth"
pub const PROPERTY_DATE_OF_BIRTH: &str = "P569";
/// "date of death"
pub const PROPERTY_DATE_OF_DEATH: &str = "P570";
/// The "human" category item.
pub const ITEM_HUMAN: &str = "Q5";
pub const SITE_ENWIKI: &str = "enwiki";
pub const LANGUAGE_EN: &str = "en";

/// A knowledge-base record as returned by `wbgetentities`.
///
/// Only the parts the lookup pipeline reads are modelled; everything else in
/// the payload is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Entity {
    #[serde(default)]
    pub id: String,
    #[serde(default, deserialize_with = "map_or_empty_list")]
    pub labels: HashMap<String, Label>,
    #[serde(default, deserialize_with = "map_or_empty_list")]
    pub claims: HashMap<String, Vec<Claim>>,
    #[serde(default, deserialize_with = "map_or_empty_list")]
    pub sitelinks: HashMap<String, Sitelink>,
    /// Present (usually as an empty string) when the id does not exist.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missing: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Label {
    #[serde(default)]
    pub language: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sitelink {
    #[serde(default)]
    pub site: String,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claim {
    pub mainsnak: Snak,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snak {
    #[serde(default)]
    pub snaktype: String,
    #[serde(default)]
    pub property: String,
    /// Absent for `somevalue` / `novalue` snaks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datavalue: Option<DataValue>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataValue {
    #[serde(rename = "type", default)]
    pub kind: String,
    pub value: Value,
}

impl Snak {
    /// Target item id of a `wikibase-entityid` value.
    pub fn entity_id(&self) -> Option<&str> {
        self.datavalue.as_ref()?.value.get("id")?.as_str()
    }

    /// Raw timestamp of a `time` value, e.g. `+1955-02-24T00:00:00Z`.
    pub fn time(&self) -> Option<&str> {
        self.datavalue.as_ref()?.value.get("time")?.as_str()
    }
}

impl Entity {
    pub fn is_missing(&self) -> bool {
        self.missing.is_some()
    }

    pub fn claims_for(&self, property: &str) -> &[Claim] {
        self.claims
            .get(property)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// True when any "instance of" statement points at the human category.
    pub fn is_human(&self) -> bool {
        self.claims_for(PROPERTY_INSTANCE_OF)
            .iter()
            .any(|claim| claim.mainsnak.entity_id() == Some(ITEM_HUMAN))
    }

    pub fn english_label(&self) -> Option<&str> {
        self.labels
            .get(LANGUAGE_EN)
            .map(|label| label.value.as_str())
            .filter(|value| !value.is_empty())
    }

    pub fn enwiki_title(&self) -> Option<&str> {
        self.sitelinks
            .get(SITE_ENWIKI)
            .map(|link| link.title.as_str())
            .filter(|title| !title.is_empty())
    }

    pub fn has_enwiki_article(&self) -> bool {
        self.enwiki_title().is_some()
    }

    /// First timestamp carried by a statement of `property`, skipping
    /// statements whose value is unknown.
    pub fn first_time_value(&self, property: &str) -> Option<&str> {
        self.claims_for(property)
            .iter()
            .find_map(|claim| claim.mainsnak.time())
    }
}

/// The action API serializes empty objects as `[]`; accept both shapes.
fn map_or_empty_list<'de, D, T>(deserializer: D) -> Result<HashMap<String, T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum MapOrList<T> {
        Map(HashMap<String, T>),
        List(Vec<IgnoredAny>),
    }

    match MapOrList::<T>::deserialize(deserializer)? {
        MapOrList::Map(map) => Ok(map),
        MapOrList::List(_) => Ok(HashMap::new()),
    }
}
