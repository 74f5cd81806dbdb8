//! CSV and plain-text renderings of an idea list.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Text,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Text => "txt",
        }
    }

    pub fn default_file_name(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "content_ideas.csv",
            ExportFormat::Text => "content_ideas.txt",
        }
    }

    /// `Csv` for a `.csv` path, `Text` for anything else.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => ExportFormat::Csv,
            _ => ExportFormat::Text,
        }
    }

    pub fn render(&self, ideas: &[String]) -> String {
        match self {
            ExportFormat::Csv => to_csv(ideas),
            ExportFormat::Text => to_text(ideas),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "txt" | "text" => Ok(ExportFormat::Text),
            other => Err(format!("unknown export format '{other}' (expected csv or txt)")),
        }
    }
}

/// `index,idea` header, then one `N,"idea"` row per idea with `"` doubled.
pub fn to_csv(ideas: &[String]) -> String {
    let mut out = String::from("index,idea\n");
    for (i, idea) in ideas.iter().enumerate() {
        out.push_str(&format!("{},\"{}\"\n", i + 1, idea.replace('"', "\"\"")));
    }
    out
}

/// `N. idea` lines joined by newlines; also the "copy all" block.
pub fn to_text(ideas: &[String]) -> String {
    ideas
        .iter()
        .enumerate()
        .map(|(i, idea)| format!("{}. {}", i + 1, idea))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write the rendered list to `path`, replacing any existing file.
pub fn write_export(path: &Path, format: ExportFormat, ideas: &[String]) -> io::Result<()> {
    fs::write(path, format.render(ideas).as_bytes())
}
