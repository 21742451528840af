use std::collections::HashMap;
use std::fmt;

/// A validated `name = value` line from an existing configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideEntry {
    pub name: String,
    pub value: String,
    /// 1-based line number in the source file
    pub line: usize,
}

/// Why a configuration line was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueReason {
    /// No `=`, or more than one
    FieldCount,
    /// Whitespace inside the name
    NameWhitespace,
    /// Whitespace inside the value
    ValueWhitespace,
}

impl fmt::Display for IssueReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueReason::FieldCount => write!(f, "expected exactly one '='"),
            IssueReason::NameWhitespace => write!(f, "name contains whitespace"),
            IssueReason::ValueWhitespace => write!(f, "value contains whitespace"),
        }
    }
}

/// A malformed line. Never fatal: the line is skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub line: usize,
    /// The offending line, trimmed
    pub text: String,
    pub reason: IssueReason,
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}: \"{}\" is not a valid line, skipping",
            self.line, self.text
        )
    }
}

/// Result of [`parse_config`]: accepted entries and rejected lines, both in
/// file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedConfig {
    pub entries: Vec<OverrideEntry>,
    pub issues: Vec<ConfigIssue>,
}

/// Parse the text of a `name = value` configuration file.
///
/// Blank lines and lines starting with `#` (after leading whitespace) are
/// ignored. Every other line must contain exactly one `=` with no whitespace
/// inside either trimmed side; anything else becomes a [`ConfigIssue`].
pub fn parse_config(text: &str) -> ParsedConfig {
    let mut parsed = ParsedConfig::default();
    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match parse_line(line) {
            Ok((name, value)) => parsed.entries.push(OverrideEntry {
                name: name.to_string(),
                value: value.to_string(),
                line: idx + 1,
            }),
            Err(reason) => parsed.issues.push(ConfigIssue {
                line: idx + 1,
                text: line.to_string(),
                reason,
            }),
        }
    }
    parsed
}

fn parse_line(line: &str) -> Result<(&str, &str), IssueReason> {
    let mut parts = line.split('=');
    let (Some(name), Some(value), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(IssueReason::FieldCount);
    };
    let name = name.trim();
    let value = value.trim();
    if name.contains(char::is_whitespace) {
        return Err(IssueReason::NameWhitespace);
    }
    if value.contains(char::is_whitespace) {
        return Err(IssueReason::ValueWhitespace);
    }
    Ok((name, value))
}

/// Prior choices keyed by name.
///
/// When a name is recorded more than once the last occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    values: HashMap<String, String>,
}

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a OverrideEntry>,
    {
        entries
            .into_iter()
            .map(|e| (e.name.clone(), e.value.clone()))
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(String, String)> for Overrides {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl From<&ParsedConfig> for Overrides {
    fn from(parsed: &ParsedConfig) -> Self {
        Overrides::from_entries(&parsed.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_lines() {
        let parsed = parse_config("a = true\n  b=off  \n");
        assert!(parsed.issues.is_empty());
        assert_eq!(
            parsed.entries,
            vec![
                OverrideEntry {
                    name: "a".into(),
                    value: "true".into(),
                    line: 1
                },
                OverrideEntry {
                    name: "b".into(),
                    value: "off".into(),
                    line: 2
                },
            ]
        );
    }

    #[test]
    fn test_blank_and_comment_lines_are_silent() {
        let parsed = parse_config("\n   \n# a comment\n    # indented = comment\n");
        assert!(parsed.entries.is_empty());
        assert!(parsed.issues.is_empty());
    }

    #[test]
    fn test_name_with_internal_space_is_rejected() {
        let parsed = parse_config("a b = c\n");
        assert!(parsed.entries.is_empty());
        assert_eq!(parsed.issues.len(), 1);
        assert_eq!(parsed.issues[0].reason, IssueReason::NameWhitespace);
        assert_eq!(
            parsed.issues[0].to_string(),
            "line 1: \"a b = c\" is not a valid line, skipping"
        );
    }

    #[test]
    fn test_value_with_internal_space_is_rejected() {
        let parsed = parse_config("a = b c\n");
        assert!(parsed.entries.is_empty());
        assert_eq!(parsed.issues[0].reason, IssueReason::ValueWhitespace);
    }

    #[test]
    fn test_field_count() {
        let parsed = parse_config("a = b = c\nno_equals_here\n");
        assert!(parsed.entries.is_empty());
        assert_eq!(parsed.issues.len(), 2);
        assert!(parsed
            .issues
            .iter()
            .all(|i| i.reason == IssueReason::FieldCount));
        assert_eq!(parsed.issues[1].line, 2);
    }

    #[test]
    fn test_bad_lines_do_not_block_good_ones() {
        let parsed = parse_config("good = on\nbad line\nalso_good = off\n");
        assert_eq!(parsed.entries.len(), 2);
        assert_eq!(parsed.issues.len(), 1);
        assert_eq!(parsed.entries[1].line, 3);
    }

    #[test]
    fn test_overrides_last_occurrence_wins() {
        let parsed = parse_config("x = true\ny = on\nx = false\n");
        let overrides = Overrides::from(&parsed);
        assert_eq!(overrides.len(), 2);
        assert_eq!(overrides.get("x"), Some("false"));
        assert_eq!(overrides.get("y"), Some("on"));
        assert_eq!(overrides.get("z"), None);
    }
}
