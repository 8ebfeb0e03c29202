use std::fmt;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;

/// Labelled results produced by one unit of the tour.
#[derive(Debug, Serialize)]
pub struct Section {
    pub unit: &'static str,
    pub entries: Vec<Entry>,
}

#[derive(Debug, Serialize)]
pub struct Entry {
    pub label: String,
    pub value: Value,
}

impl Section {
    pub fn new(unit: &'static str) -> Self {
        Self {
            unit,
            entries: Vec::new(),
        }
    }

    /// Appends `value` under `label`.
    pub fn record<T: Serialize + ?Sized>(&mut self, label: &str, value: &T) -> Result<&mut Self> {
        let value = serde_json::to_value(value).with_context(|| format!("encoding `{label}`"))?;
        self.entries.push(Entry {
            label: label.to_owned(),
            value,
        });
        Ok(self)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {} ==", self.unit)?;
        for entry in &self.entries {
            match &entry.value {
                // Multi-line text such as adjacency lists or boards.
                Value::String(text) if text.contains('\n') => {
                    writeln!(f, "{}:", entry.label)?;
                    for line in text.lines() {
                        writeln!(f, "  {line}")?;
                    }
                }
                Value::String(text) => writeln!(f, "{}: {text}", entry.label)?,
                other => writeln!(f, "{}: {other}", entry.label)?,
            }
        }
        Ok(())
    }
}

pub fn emit(section: &Section, json: bool) -> Result<()> {
    if json {
        let text = serde_json::to_string_pretty(section).context("encoding report")?;
        println!("{text}");
    } else {
        print!("{section}");
    }
    Ok(())
}
