// Label lookups against the host's attribute schema

use blades_models::AttributeSchema;

/// Label of the attribute or action named `name`.
///
/// Attributes are visited in order, each followed by its actions; when a key
/// appears more than once the last visited entry wins.
pub fn attribute_label<'a>(schema: &'a AttributeSchema, name: &str) -> Option<&'a str> {
    let mut label = None;
    for attribute in &schema.attributes {
        if attribute.key == name {
            label = Some(attribute.label.as_str());
        }
        for skill in &attribute.skills {
            if skill.key == name {
                label = Some(skill.label.as_str());
            }
        }
    }
    label
}

/// Label to show for a roll on `name`: the first matching attribute or
/// action, or `name` itself when the schema doesn't know it.
pub fn roll_label<'a>(schema: &'a AttributeSchema, name: &'a str) -> &'a str {
    for attribute in &schema.attributes {
        if attribute.key == name {
            return &attribute.label;
        }
        if let Some(skill) = attribute.skills.iter().find(|s| s.key == name) {
            return &skill.label;
        }
    }
    name
}

/// Whether `name` is an action (a skill under some attribute)
pub fn is_action(schema: &AttributeSchema, name: &str) -> bool {
    schema
        .attributes
        .iter()
        .any(|a| a.skills.iter().any(|s| s.key == name))
}

pub fn is_attribute(schema: &AttributeSchema, name: &str) -> bool {
    schema.attributes.iter().any(|a| a.key == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use blades_models::{AttributeDef, SkillDef};

    #[test]
    fn test_standard_labels() {
        let schema = AttributeSchema::standard();
        assert_eq!(attribute_label(&schema, "insight"), Some("BITD.Insight"));
        assert_eq!(attribute_label(&schema, "skirmish"), Some("BITD.Skirmish"));
        assert_eq!(attribute_label(&schema, "unknown"), None);
    }

    #[test]
    fn test_roll_label_falls_back_to_name() {
        let schema = AttributeSchema::standard();
        assert_eq!(roll_label(&schema, "sway"), "BITD.Sway");
        assert_eq!(roll_label(&schema, "resolve"), "BITD.Resolve");
        assert_eq!(roll_label(&schema, "fortune"), "fortune");
    }

    #[test]
    fn test_duplicate_keys_first_vs_last() {
        let schema = AttributeSchema::new(vec![
            AttributeDef::new("grit", "Grit Attribute", vec![SkillDef::new("grit", "Grit Action")]),
            AttributeDef::new("nerve", "Nerve", vec![SkillDef::new("grit", "Late Grit")]),
        ]);
        // attribute_label keeps the last entry, roll_label the first
        assert_eq!(attribute_label(&schema, "grit"), Some("Late Grit"));
        assert_eq!(roll_label(&schema, "grit"), "Grit Attribute");
    }

    #[test]
    fn test_action_and_attribute_predicates() {
        let schema = AttributeSchema::standard();
        assert!(is_action(&schema, "hunt"));
        assert!(!is_action(&schema, "insight"));
        assert!(is_attribute(&schema, "prowess"));
        assert!(!is_attribute(&schema, "prowl"));
        assert!(!is_action(&schema, "vice"));
        assert!(!is_attribute(&AttributeSchema::default(), "insight"));
    }
}
