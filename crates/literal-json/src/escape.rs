//! String escaping applied to converted string values.
//!
//! Two modes exist:
//!
//! - [`EscapeMode::Compat`] (default) reproduces the long-standing behavior
//!   tools depend on, quirks included:
//!   1. If the string contains `"`, every `"` becomes `\"` and nothing else
//!      is touched. A string holding both a quote and a newline keeps its raw
//!      newline.
//!   2. Otherwise the control-character table is applied, and each table entry
//!      rewrites only the *first* remaining occurrence of its character. Tab
//!      is listed twice, so at most two tabs and one of each other control
//!      character are escaped.
//! - [`EscapeMode::Full`] escapes cumulatively: backslashes, every quote and
//!   every tabled control character.
//!
//! Object keys are never escaped; only string values pass through here.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Control characters and their two-character escapes, in application order.
const CONTROL_ESCAPES: [(char, &str); 6] = [
    ('\t', "\\t"),
    ('\u{000C}', "\\f"),
    ('\r', "\\r"),
    ('\n', "\\n"),
    ('\t', "\\t"),
    ('\u{0008}', "\\b"),
];

/// How string values are escaped during conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EscapeMode {
    #[default]
    Compat,
    Full,
}

impl EscapeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            EscapeMode::Compat => "compat",
            EscapeMode::Full => "full",
        }
    }
}

impl fmt::Display for EscapeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EscapeMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "compat" => Ok(EscapeMode::Compat),
            "full" => Ok(EscapeMode::Full),
            other => Err(format!(
                "Unknown escape mode: '{}'. Available modes: compat, full",
                other
            )),
        }
    }
}

/// Escape a string value according to `mode`.
///
/// Borrows when nothing needs rewriting.
pub fn escape_string(value: &str, mode: EscapeMode) -> Cow<'_, str> {
    match mode {
        EscapeMode::Compat => escape_compat(value),
        EscapeMode::Full => escape_full(value),
    }
}

fn escape_compat(value: &str) -> Cow<'_, str> {
    if value.contains('"') {
        return Cow::Owned(value.replace('"', "\\\""));
    }
    if !value.chars().any(is_tabled_control) {
        return Cow::Borrowed(value);
    }

    // Replacements never introduce control characters, so applying each table
    // entry to its first remaining occurrence equals escaping the first N
    // occurrences of each character, N being how often the table lists it.
    let mut budget: Vec<(char, &str, usize)> = Vec::new();
    for (ch, escaped) in CONTROL_ESCAPES {
        match budget.iter_mut().find(|(c, _, _)| *c == ch) {
            Some(entry) => entry.2 += 1,
            None => budget.push((ch, escaped, 1)),
        }
    }

    let mut out = String::with_capacity(value.len() + 8);
    for ch in value.chars() {
        match budget.iter_mut().find(|(c, _, left)| *c == ch && *left > 0) {
            Some(entry) => {
                entry.2 -= 1;
                out.push_str(entry.1);
            }
            None => out.push(ch),
        }
    }
    Cow::Owned(out)
}

fn escape_full(value: &str) -> Cow<'_, str> {
    if !value
        .chars()
        .any(|c| c == '"' || c == '\\' || is_tabled_control(c))
    {
        return Cow::Borrowed(value);
    }

    let mut out = String::with_capacity(value.len() + 8);
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            c => match CONTROL_ESCAPES.iter().find(|(k, _)| *k == c) {
                Some((_, escaped)) => out.push_str(escaped),
                None => out.push(c),
            },
        }
    }
    Cow::Owned(out)
}

fn is_tabled_control(c: char) -> bool {
    CONTROL_ESCAPES.iter().any(|(k, _)| *k == c)
}
