use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single in-game item as handed over by the host.
///
/// `item_type` and `name` are optional because host documents are not
/// guaranteed to carry them; an absent value never compares equal to
/// anything during duplicate detection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemRecord {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Game data of the item (the host's `system` payload)
    #[serde(default = "empty_object")]
    pub system: Value,
}

fn empty_object() -> Value {
    Value::Object(Map::new())
}

impl ItemRecord {
    pub fn new(id: impl Into<String>, item_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            item_type: Some(item_type.into()),
            name: Some(name.into()),
            system: empty_object(),
        }
    }

    pub fn with_system(mut self, system: Value) -> Self {
        self.system = system;
        self
    }

    pub fn type_str(&self) -> Option<&str> {
        self.item_type.as_deref()
    }

    pub fn name_str(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
