//! Script processing pipeline.
//!
//! Splits a multi-statement SQL script into individual statements and tags
//! each one with whether executing it is expected to produce a result set.

mod classifier;
mod splitter;

pub use classifier::{classify, Classifier, Matcher, Rule, DEFAULT_RULES};
pub use splitter::{split, split_raw, Fragment, LexState};

use serde::Serialize;
use std::fmt;
use tracing::{debug, trace};

/// A single statement and its expected result shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct StatementInfo {
    statement: String,
    returns_results: bool,
}

impl StatementInfo {
    /// Creates a statement record.
    pub fn new(statement: impl Into<String>, returns_results: bool) -> Self {
        Self {
            statement: statement.into(),
            returns_results,
        }
    }

    /// The trimmed statement text, without the trailing `;`.
    pub fn statement(&self) -> &str {
        &self.statement
    }

    /// True if executing the statement should yield rows rather than an
    /// update count.
    pub fn returns_results(&self) -> bool {
        self.returns_results
    }
}

impl fmt::Display for StatementInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shape = if self.returns_results { "rows" } else { "count" };
        write!(f, "[{}] {}", shape, self.statement)
    }
}

/// Counts of statements by result shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScriptSummary {
    pub total: usize,
    pub result_sets: usize,
    pub update_counts: usize,
}

impl ScriptSummary {
    /// Tallies a processed script.
    pub fn from_statements(statements: &[StatementInfo]) -> Self {
        let result_sets = statements.iter().filter(|s| s.returns_results()).count();
        Self {
            total: statements.len(),
            result_sets,
            update_counts: statements.len() - result_sets,
        }
    }
}

/// Splits and classifies scripts with a fixed classifier.
#[derive(Debug, Clone, Default)]
pub struct ScriptProcessor {
    classifier: Classifier,
}

impl ScriptProcessor {
    /// Creates a processor using the given classifier.
    pub fn new(classifier: Classifier) -> Self {
        Self { classifier }
    }

    /// Returns the classifier in use.
    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Splits `script` and classifies every non-empty statement, in order.
    pub fn process(&self, script: &str) -> Vec<StatementInfo> {
        let fragments = split_raw(script);

        if let Some(state) = fragments.last().and_then(|f| f.unterminated_state()) {
            if state != LexState::LineComment {
                debug!("Script ends inside an unterminated {}", state);
            }
        }

        let statements: Vec<StatementInfo> = fragments
            .iter()
            .filter(|fragment| !fragment.is_blank())
            .map(|fragment| {
                let statement = fragment.trimmed();
                let returns_results = self.classifier.returns_results(statement);
                let info = StatementInfo::new(statement, returns_results);
                trace!("Classified statement: {}", info);
                info
            })
            .collect();

        debug!(
            "Split script into {} statements ({} fragments)",
            statements.len(),
            fragments.len()
        );

        statements
    }
}

/// Splits and classifies a script with the built-in rules.
pub fn process(script: &str) -> Vec<StatementInfo> {
    ScriptProcessor::default().process(script)
}
