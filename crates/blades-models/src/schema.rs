use serde::{Deserialize, Serialize};

/// Character attribute model supplied by the host system.
///
/// Order matters: label lookups walk attributes in declaration order, and
/// each attribute's skills right after it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AttributeSchema {
    #[serde(default)]
    pub attributes: Vec<AttributeDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AttributeDef {
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub skills: Vec<SkillDef>,
}

/// An action rating belonging to an attribute
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillDef {
    pub key: String,
    pub label: String,
}

impl SkillDef {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self { key: key.into(), label: label.into() }
    }
}

impl AttributeDef {
    pub fn new(key: impl Into<String>, label: impl Into<String>, skills: Vec<SkillDef>) -> Self {
        Self { key: key.into(), label: label.into(), skills }
    }
}

impl AttributeSchema {
    pub fn new(attributes: Vec<AttributeDef>) -> Self {
        Self { attributes }
    }

    /// The stock character sheet: Insight, Prowess and Resolve with four actions each.
    pub fn standard() -> Self {
        let attribute = |key: &str, label: &str, skills: &[(&str, &str)]| {
            AttributeDef::new(
                key,
                label,
                skills.iter().map(|(k, l)| SkillDef::new(*k, *l)).collect(),
            )
        };

        Self::new(vec![
            attribute(
                "insight",
                "BITD.Insight",
                &[("hunt", "BITD.Hunt"), ("study", "BITD.Study"), ("survey", "BITD.Survey"), ("tinker", "BITD.Tinker")],
            ),
            attribute(
                "prowess",
                "BITD.Prowess",
                &[("finesse", "BITD.Finesse"), ("prowl", "BITD.Prowl"), ("skirmish", "BITD.Skirmish"), ("wreck", "BITD.Wreck")],
            ),
            attribute(
                "resolve",
                "BITD.Resolve",
                &[("attune", "BITD.Attune"), ("command", "BITD.Command"), ("consort", "BITD.Consort"), ("sway", "BITD.Sway")],
            ),
        ])
    }
}
