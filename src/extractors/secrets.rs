//! Hardcoded-secret detection slot.
//!
//! Ships with no keywords, so the step always yields nothing. Callers that have
//! decided to accept keyword-based false positives can opt in with
//! [`SecretRules::with_keywords`]; the CLI never does.

use crate::util::OrderedSet;
use regex::{Regex, RegexBuilder};

#[derive(Debug, Clone, Default)]
pub struct SecretRules {
    keywords: Vec<String>,
    matcher: Option<Regex>,
}

impl SecretRules {
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Matches whole-word keywords, case-insensitively, anywhere in a line.
    pub fn with_keywords<I, S>(keywords: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keywords: Vec<String> = keywords
            .into_iter()
            .map(Into::into)
            .filter(|k: &String| !k.trim().is_empty())
            .collect();

        if keywords.is_empty() {
            return Ok(Self::disabled());
        }

        let alternation = keywords
            .iter()
            .map(|k| regex::escape(k.trim()))
            .collect::<Vec<_>>()
            .join("|");
        let matcher = RegexBuilder::new(&format!(r"\b(?:{})\b", alternation))
            .case_insensitive(true)
            .build()?;

        Ok(Self {
            keywords,
            matcher: Some(matcher),
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.matcher.is_some()
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Trimmed lines containing a keyword, unique, in order of appearance.
    pub fn scan(&self, content: &str) -> OrderedSet<String> {
        let Some(matcher) = &self.matcher else {
            return OrderedSet::new();
        };

        content
            .lines()
            .filter(|line| matcher.is_match(line))
            .map(|line| line.trim().to_string())
            .collect()
    }
}
