//! Route pattern matching.
//!
//! A pattern is anchored at both ends of the target and carries at most one
//! capture group. Patterns are compiled once when the route table is built.

use regex::Regex;

#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("invalid route pattern: {0}")]
    Regex(#[from] regex::Error),
    #[error("route pattern {pattern:?} has {groups} capture groups, at most one is allowed")]
    TooManyGroups { pattern: String, groups: usize },
}

/// A compiled, fully anchored route pattern.
#[derive(Debug, Clone)]
pub struct PathPattern {
    regex: Regex,
}

impl PathPattern {
    /// Compiles `pattern` anchored to the whole target.
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        let regex = Regex::new(&format!("^(?:{pattern})$"))?;

        // captures_len counts the implicit whole-match group
        let groups = regex.captures_len() - 1;
        if groups > 1 {
            return Err(PatternError::TooManyGroups {
                pattern: pattern.to_string(),
                groups,
            });
        }

        Ok(Self { regex })
    }

    /// Matches `literal` exactly, nothing captured.
    pub fn exact(literal: &str) -> Result<Self, PatternError> {
        Self::new(&regex::escape(literal))
    }

    /// Matches `prefix` followed by anything, capturing the remainder.
    ///
    /// The capture may be empty and may contain `/`.
    pub fn prefixed(prefix: &str) -> Result<Self, PatternError> {
        Self::new(&format!("{}(.*)", regex::escape(prefix)))
    }

    /// Returns the captured substrings when `target` matches.
    ///
    /// The vector is empty for patterns without a group.
    pub fn matches<'t>(&self, target: &'t str) -> Option<Vec<&'t str>> {
        let caps = self.regex.captures(target)?;
        Some(
            caps.iter()
                .skip(1)
                .map(|m| m.map_or("", |m| m.as_str()))
                .collect(),
        )
    }
}
