//! Result-shape classification.
//!
//! Decides from keywords alone whether a statement is expected to return rows
//! or only an update count. This is a lexical heuristic, not a parser: a
//! keyword inside a string literal or comment counts the same as one in code.

use std::borrow::Cow;

use super::splitter::trim_sql;

/// How a rule inspects the upper-cased, trimmed statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matcher {
    /// The statement starts with the keyword.
    StartsWith(Cow<'static, str>),
    /// Every keyword appears somewhere in the statement.
    ContainsAll(&'static [&'static str]),
}

impl Matcher {
    fn matches(&self, upper: &str) -> bool {
        match self {
            Self::StartsWith(keyword) => upper.starts_with(keyword.as_ref()),
            Self::ContainsAll(keywords) => keywords.iter().all(|kw| upper.contains(kw)),
        }
    }
}

/// A single classification rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub matcher: Matcher,
    pub returns_results: bool,
}

impl Rule {
    const fn starts_with(keyword: &'static str) -> Self {
        Self {
            matcher: Matcher::StartsWith(Cow::Borrowed(keyword)),
            returns_results: true,
        }
    }

    const fn contains_all(keywords: &'static [&'static str]) -> Self {
        Self {
            matcher: Matcher::ContainsAll(keywords),
            returns_results: true,
        }
    }
}

/// Built-in rules. A statement matching none of them is treated as
/// producing an update count.
pub static DEFAULT_RULES: [Rule; 7] = [
    Rule::starts_with("SELECT"),
    Rule::starts_with("SHOW"),
    Rule::starts_with("DESCRIBE"),
    Rule::starts_with("EXPLAIN"),
    Rule::contains_all(&["INSERT", "RETURNING"]),
    Rule::contains_all(&["UPDATE", "RETURNING"]),
    Rule::contains_all(&["DELETE", "RETURNING"]),
];

/// Ordered rule table; the first matching rule decides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classifier {
    rules: Vec<Rule>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self {
            rules: DEFAULT_RULES.to_vec(),
        }
    }
}

impl Classifier {
    /// Creates a classifier from an explicit rule list.
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Default rules plus extra leading keywords that mark a result set
    /// (e.g. `WITH` or `VALUES` for dialects that need them).
    pub fn with_extra_prefixes<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut classifier = Self::default();
        for prefix in prefixes {
            let keyword = prefix.as_ref().trim().to_uppercase();
            if keyword.is_empty() {
                continue;
            }
            classifier.rules.push(Rule {
                matcher: Matcher::StartsWith(Cow::Owned(keyword)),
                returns_results: true,
            });
        }
        classifier
    }

    /// The rules in evaluation order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Returns true if the statement is expected to yield a result set.
    pub fn returns_results(&self, statement: &str) -> bool {
        evaluate(&self.rules, statement)
    }
}

/// Classifies a statement with the built-in rules.
pub fn classify(statement: &str) -> bool {
    evaluate(&DEFAULT_RULES, statement)
}

fn evaluate(rules: &[Rule], statement: &str) -> bool {
    let upper = trim_sql(statement).to_uppercase();
    rules
        .iter()
        .find(|rule| rule.matcher.matches(&upper))
        .is_some_and(|rule| rule.returns_results)
}
