// pattern.rs - Anchored name pattern and replacement templates

use regex::{Regex, RegexBuilder};

/// Name pattern anchored at both ends of the file name
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    source: String,
    regex: Regex,
}

impl CompiledPattern {
    /// Anchor and compile a user-supplied pattern.
    ///
    /// `.` matches newlines (single-line semantics); matching ignores case
    /// unless `case_sensitive` is set.
    pub fn new(pattern: &str, case_sensitive: bool) -> Result<Self, String> {
        let source = anchor_pattern(pattern);
        let regex = RegexBuilder::new(&source)
            .case_insensitive(!case_sensitive)
            .dot_matches_new_line(true)
            .build()
            .map_err(|e| format!("\"{}\" is not a valid regular expression ({})", pattern, e))?;

        Ok(Self { source, regex })
    }

    /// The anchored pattern actually compiled
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_match(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }

    /// Expand `template` against the captures of `name`.
    ///
    /// Returns `None` when `name` does not match.
    pub fn substitute(&self, name: &str, template: &str) -> Option<String> {
        let captures = self.regex.captures(name)?;
        let mut expanded = String::with_capacity(template.len() + name.len());
        captures.expand(&normalize_template(template), &mut expanded);
        Some(expanded)
    }

    /// Number of capture groups, not counting the implicit whole-match group
    pub fn group_count(&self) -> usize {
        self.regex.captures_len() - 1
    }
}

/// Wrap a pattern in `^(?:...)$`.
///
/// Anchors the user already wrote stay inside the group, so `^a|b$` still has
/// to match the whole name.
pub fn anchor_pattern(pattern: &str) -> String {
    format!("^(?:{})$", pattern)
}

/// Rewrite numeric group references `$N` as `${N}`.
///
/// A bare `$1_old` would otherwise be read as a reference to a group named
/// `1_old`. Braced references, named references and `$$` pass through.
pub fn normalize_template(template: &str) -> String {
    let mut out = String::with_capacity(template.len() + 4);
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '$' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some('$') => {
                chars.next();
                out.push_str("$$");
            }
            Some(d) if d.is_ascii_digit() => {
                out.push_str("${");
                while let Some(&d) = chars.peek() {
                    if !d.is_ascii_digit() {
                        break;
                    }
                    out.push(d);
                    chars.next();
                }
                out.push('}');
            }
            _ => out.push('$'),
        }
    }

    out
}
