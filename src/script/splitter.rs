//! Lexical statement splitter.
//!
//! Scans a script once, left to right, tracking a single lexical mode so that
//! `;` only ends a statement when it appears in plain code. Quoted strings,
//! back-quoted identifiers, and comments are carried through untouched.

use std::fmt;

/// The scanner's interpretation context at a given position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LexState {
    /// Plain SQL text; the only mode where `;` ends a statement.
    #[default]
    Code,
    /// Inside `'...'`.
    SingleQuote,
    /// Inside `"..."`.
    DoubleQuote,
    /// Inside `` `...` ``.
    BackQuote,
    /// After `--`, until the next `\n`.
    LineComment,
    /// Between `/*` and `*/`.
    BlockComment,
}

impl LexState {
    /// Returns true if the scanner is inside a quote or comment.
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Code)
    }
}

impl fmt::Display for LexState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Code => write!(f, "code"),
            Self::SingleQuote => write!(f, "single-quoted string"),
            Self::DoubleQuote => write!(f, "double-quoted string"),
            Self::BackQuote => write!(f, "back-quoted identifier"),
            Self::LineComment => write!(f, "line comment"),
            Self::BlockComment => write!(f, "block comment"),
        }
    }
}

/// A raw slice of the script between two top-level delimiters.
///
/// The text is exactly what appeared in the input: no trimming, and the
/// consumed `;` is not included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment<'a> {
    /// Untrimmed fragment text.
    pub text: &'a str,
    /// True if the fragment was closed by a `;`.
    pub terminated: bool,
    /// Lexical mode at the end of the fragment.
    pub end_state: LexState,
}

/// Strips leading and trailing whitespace and ASCII control characters
/// (every code point up to U+0020). Wider Unicode spaces are kept.
pub(super) fn trim_sql(text: &str) -> &str {
    text.trim_matches(|c: char| c <= ' ')
}

impl<'a> Fragment<'a> {
    /// The statement text with surrounding whitespace removed.
    pub fn trimmed(&self) -> &'a str {
        trim_sql(self.text)
    }

    /// Returns true if the fragment holds only whitespace.
    pub fn is_blank(&self) -> bool {
        self.trimmed().is_empty()
    }

    /// The quote or comment left open when input ran out, if any.
    pub fn unterminated_state(&self) -> Option<LexState> {
        self.end_state.is_open().then_some(self.end_state)
    }
}

/// Splits a script into raw fragments, keeping blank ones.
///
/// Writing each fragment's `text` followed by `;` for every terminated
/// fragment rebuilds `script` exactly.
pub fn split_raw(script: &str) -> Vec<Fragment<'_>> {
    let mut fragments = Vec::new();
    let mut state = LexState::Code;
    let mut start = 0;
    let mut chars = script.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        let next = chars.peek().map(|&(_, n)| n);

        state = match (state, c, next) {
            (LexState::Code, '-', Some('-')) => {
                chars.next();
                LexState::LineComment
            }
            (LexState::Code, '/', Some('*')) => {
                chars.next();
                LexState::BlockComment
            }
            (LexState::Code, '\'', _) => LexState::SingleQuote,
            (LexState::Code, '"', _) => LexState::DoubleQuote,
            (LexState::Code, '`', _) => LexState::BackQuote,
            (LexState::Code, ';', _) => {
                fragments.push(Fragment {
                    text: &script[start..i],
                    terminated: true,
                    end_state: LexState::Code,
                });
                start = i + ';'.len_utf8();
                LexState::Code
            }
            (LexState::LineComment, '\n', _) => LexState::Code,
            (LexState::BlockComment, '*', Some('/')) => {
                chars.next();
                LexState::Code
            }
            // Backslash escapes only the quote that opened the string.
            (LexState::SingleQuote, '\\', Some('\''))
            | (LexState::DoubleQuote, '\\', Some('"')) => {
                chars.next();
                state
            }
            (LexState::SingleQuote, '\'', _)
            | (LexState::DoubleQuote, '"', _)
            | (LexState::BackQuote, '`', _) => LexState::Code,
            (current, _, _) => current,
        };
    }

    if start < script.len() {
        fragments.push(Fragment {
            text: &script[start..],
            terminated: false,
            end_state: state,
        });
    }

    fragments
}

/// Splits a script into trimmed, non-empty statements in input order.
///
/// Never fails: unterminated quotes or comments simply extend the last
/// statement to the end of input.
pub fn split(script: &str) -> Vec<String> {
    split_raw(script)
        .into_iter()
        .filter(|fragment| !fragment.is_blank())
        .map(|fragment| fragment.trimmed().to_string())
        .collect()
}
