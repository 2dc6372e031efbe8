/*!
 * Shell-style wildcard matching for exclude patterns
 *
 * Patterns are tested against the whole relative path string, so `*` also
 * matches `/`. Each pattern is translated once into an anchored regex.
 */

use regex::Regex;

use crate::error::{PackagerError, Result};

/// A compiled set of exclude patterns
#[derive(Debug, Clone, Default)]
pub struct ExcludeSet {
    patterns: Vec<Regex>,
}

impl ExcludeSet {
    /// Compile every pattern, failing on the first one that is invalid
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| {
                let p = p.as_ref();
                Regex::new(&translate(p))
                    .map_err(|e| PackagerError::Pattern(format!("{}: {}", p, e)))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// Check whether a relative path matches any pattern
    pub fn is_match(&self, path: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(path))
    }

}

/// Translate a shell wildcard pattern into an anchored regular expression
pub fn translate(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::from("^(?s:");
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        i += 1;
        match c {
            '*' => {
                // Collapse runs of stars
                while i < chars.len() && chars[i] == '*' {
                    i += 1;
                }
                out.push_str(".*");
            }
            '?' => out.push('.'),
            '[' => match class_end(&chars, i) {
                Some(end) => {
                    out.push_str(&translate_class(&chars[i..end]));
                    i = end + 1;
                }
                None => out.push_str("\\["),
            },
            _ => out.push_str(&regex::escape(c.encode_utf8(&mut [0; 4]))),
        }
    }

    out.push_str(")$");
    out
}

/// Find the index of the `]` closing a class that starts at `start`
fn class_end(chars: &[char], start: usize) -> Option<usize> {
    let mut j = start;
    if j < chars.len() && chars[j] == '!' {
        j += 1;
    }
    // A leading `]` is a member, not the terminator
    if j < chars.len() && chars[j] == ']' {
        j += 1;
    }
    while j < chars.len() && chars[j] != ']' {
        j += 1;
    }
    (j < chars.len()).then_some(j)
}

/// One member of a bracket expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClassItem {
    Char(char),
    Range(char, char),
}

/// Split a class body into single characters and `a-z` ranges. A `-` is a
/// range operator only between two members; anywhere else it is literal.
fn class_items(body: &[char]) -> Vec<ClassItem> {
    let mut items = Vec::new();
    let mut p = 0;

    while p < body.len() {
        let c = body[p];
        if p + 2 < body.len() && body[p + 1] == '-' {
            // Reversed ranges match nothing and are dropped
            if c <= body[p + 2] {
                items.push(ClassItem::Range(c, body[p + 2]));
            }
            p += 3;
        } else {
            items.push(ClassItem::Char(c));
            p += 1;
        }
    }

    items
}

fn push_class_char(out: &mut String, c: char) {
    if matches!(c, '\\' | '[' | ']' | '^' | '-' | '&' | '~') {
        out.push('\\');
    }
    out.push(c);
}

fn translate_class(body: &[char]) -> String {
    let (negated, rest) = match body.split_first() {
        Some(('!', tail)) => (true, tail),
        _ => (false, body),
    };
    let items = class_items(rest);

    if items.is_empty() {
        // Only empty ranges were given
        return if negated { ".".into() } else { "\\b\\B".into() };
    }

    let mut out = String::from(if negated { "[^" } else { "[" });
    for item in items {
        match item {
            ClassItem::Char(c) => push_class_char(&mut out, c),
            ClassItem::Range(lo, hi) => {
                push_class_char(&mut out, lo);
                out.push('-');
                push_class_char(&mut out, hi);
            }
        }
    }
    out.push(']');
    out
}
