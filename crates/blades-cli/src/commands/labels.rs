use super::AppContext;
use crate::output::Output;
use blades_core::{attribute_label, is_action, is_attribute, roll_label};
use color_eyre::Result;
use serde_json::json;
use std::path::PathBuf;

pub fn run_labels(ctx: &AppContext, name: &str, schema: Option<PathBuf>, output: &Output) -> Result<()> {
    let schema = ctx.schema(schema)?;

    let label = attribute_label(&schema, name);
    let roll = roll_label(&schema, name);
    let action = is_action(&schema, name);
    let attribute = is_attribute(&schema, name);

    if label.is_none() {
        output.warn(format!("'{}' is neither an attribute nor an action", name));
    }

    let rows = vec![
        vec!["Label".to_string(), label.unwrap_or("-").to_string()],
        vec!["Roll label".to_string(), roll.to_string()],
        vec!["Action".to_string(), action.to_string()],
        vec!["Attribute".to_string(), attribute.to_string()],
    ];
    output.table(
        &["Key", name],
        rows,
        json!({
            "name": name,
            "label": label,
            "roll_label": roll,
            "is_action": action,
            "is_attribute": attribute,
        }),
    );

    Ok(())
}
