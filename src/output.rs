//! Output formatting for processed scripts.
//!
//! Provides text and JSON renderings of classified statements.

use crate::error::{Result, SplitError};
use crate::script::{split_raw, LexState, ScriptSummary, StatementInfo};
use serde::{Deserialize, Serialize};

/// Output format for processed scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One annotated block per statement.
    #[default]
    Text,
    /// JSON array of `{statement, returns_results}` objects.
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid output format: {s}. Expected: text or json")),
        }
    }
}

/// Formats classified statements.
#[derive(Debug, Clone, Copy)]
pub struct ScriptOutput {
    format: OutputFormat,
    pretty: bool,
}

impl ScriptOutput {
    /// Creates a new output formatter.
    pub fn new(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }

    /// Formats the statements according to the configured format.
    pub fn format_statements(&self, statements: &[StatementInfo]) -> Result<String> {
        match self.format {
            OutputFormat::Text => Ok(self.format_text(statements)),
            OutputFormat::Json => self.to_json(statements),
        }
    }

    /// Formats only the statement counts.
    pub fn format_summary(&self, summary: &ScriptSummary) -> Result<String> {
        match self.format {
            OutputFormat::Text => Ok(format!(
                "Statements: {} ({} result sets, {} update counts)\n",
                summary.total, summary.result_sets, summary.update_counts
            )),
            OutputFormat::Json => self.to_json(summary),
        }
    }

    /// Renders one block per statement, each closed with `;`.
    ///
    /// A statement ending in a line comment gets its `;` on the next line so
    /// the rendering splits back into the same statements. A statement that
    /// ends inside an unterminated quote or block comment still swallows the
    /// `;`; no rendering can close it without changing the text.
    fn format_text(&self, statements: &[StatementInfo]) -> String {
        statements
            .iter()
            .enumerate()
            .map(|(i, info)| {
                let shape = if info.returns_results() { "rows" } else { "count" };
                let ends_in_comment = split_raw(info.statement())
                    .last()
                    .is_some_and(|f| f.end_state == LexState::LineComment);
                let delimiter = if ends_in_comment { "\n;" } else { ";" };
                format!("-- [{}] {}\n{}{}\n", i + 1, shape, info.statement(), delimiter)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn to_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        json.map(|s| s + "\n")
            .map_err(|e| SplitError::output(format!("Failed to serialize JSON: {e}")))
    }
}
