use clap::ValueEnum;
use comfy_table::{Cell, Table};
use owo_colors::OwoColorize;
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    #[value(name = "json-pretty")]
    JsonPretty,
}

/// Where status messages (info, warnings) end up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageSink {
    Stdout,
    /// JSON formats keep stdout to the command's single result document
    Log,
    Silent,
}

pub struct Output {
    format: OutputFormat,
    quiet: bool,
}

impl Output {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }

    pub fn is_human(&self) -> bool {
        self.format == OutputFormat::Human
    }

    pub fn success(&self, msg: impl AsRef<str>) {
        if self.quiet {
            return;
        }
        match self.format {
            OutputFormat::Human => println!("{} {}", "✓".green(), msg.as_ref()),
            _ => self.message("success", msg.as_ref()),
        }
    }

    pub fn message_sink(&self) -> MessageSink {
        match (self.quiet, self.format) {
            (true, _) => MessageSink::Silent,
            (false, OutputFormat::Human) => MessageSink::Stdout,
            (false, _) => MessageSink::Log,
        }
    }

    pub fn info(&self, msg: impl AsRef<str>) {
        match self.message_sink() {
            MessageSink::Stdout => println!("{}", msg.as_ref()),
            MessageSink::Log => tracing::info!("{}", msg.as_ref()),
            MessageSink::Silent => {}
        }
    }

    pub fn warn(&self, msg: impl AsRef<str>) {
        match self.message_sink() {
            MessageSink::Stdout => println!("{} {}", "⚠".yellow(), msg.as_ref()),
            MessageSink::Log => tracing::warn!("{}", msg.as_ref()),
            MessageSink::Silent => {}
        }
    }

    /// Command result: raw text for humans, `data` for JSON consumers.
    ///
    /// Results are printed in quiet mode too; quiet only drops chatter.
    pub fn result(&self, text: impl AsRef<str>, data: serde_json::Value) {
        match self.format {
            OutputFormat::Human => println!("{}", text.as_ref()),
            _ => self.print_json(&data),
        }
    }

    /// Rows as a table for humans, `data` for JSON consumers
    pub fn table(&self, header: &[&str], rows: Vec<Vec<String>>, data: serde_json::Value) {
        if self.format != OutputFormat::Human {
            self.print_json(&data);
            return;
        }

        let mut table = Table::new();
        table.set_header(
            header
                .iter()
                .map(|h| Cell::new(h).add_attribute(comfy_table::Attribute::Bold))
                .collect::<Vec<_>>(),
        );
        for row in rows {
            table.add_row(row);
        }
        table.load_preset(comfy_table::presets::UTF8_FULL);
        table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
        println!("{}", table);
    }

    fn message(&self, kind: &str, msg: &str) {
        self.print_json(&json!({
            "type": kind,
            "message": msg
        }));
    }

    fn print_json(&self, data: &serde_json::Value) {
        match self.format {
            OutputFormat::JsonPretty => println!("{}", serde_json::to_string_pretty(data).unwrap_or_default()),
            _ => println!("{}", serde_json::to_string(data).unwrap_or_default()),
        }
    }
}
