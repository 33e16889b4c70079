use crate::domain::model::ExtractionResult;
use crate::utils::error::Result;
use regex::Regex;
use std::collections::BTreeSet;

/// Practical address pattern, not an RFC 5322 grammar.
///
/// - local part: letters, digits, `_`, `.`, `+`, `-`
/// - domain: labels of letters, digits and `-`, joined by dots
/// - TLD: 2 to 7 letters, with no boundary check after it
pub const EMAIL_PATTERN: &str =
    r"[a-zA-Z0-9_.+\-]+@[a-zA-Z0-9\-]+(?:\.[a-zA-Z0-9\-]+)*\.[a-zA-Z]{2,7}";

/// Compiled once per process and shared by reference.
#[derive(Debug, Clone)]
pub struct EmailExtractor {
    pattern: Regex,
    anchored: Regex,
}

impl EmailExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(EMAIL_PATTERN)?,
            anchored: Regex::new(&format!("^(?:{})$", EMAIL_PATTERN))?,
        })
    }

    /// Raw candidates in input order, left-to-right and non-overlapping.
    pub fn find_matches<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.pattern.find_iter(text).map(|m| m.as_str()).collect()
    }

    /// Lower-cased, deduplicated, ascending.
    pub fn extract(&self, text: &str) -> Vec<String> {
        self.extract_detailed(text).emails
    }

    pub fn extract_detailed(&self, text: &str) -> ExtractionResult {
        let mut matches_found = 0;
        let unique: BTreeSet<String> = self
            .pattern
            .find_iter(text)
            .inspect(|_| matches_found += 1)
            .map(|m| m.as_str().to_lowercase())
            .collect();

        ExtractionResult {
            emails: unique.into_iter().collect(),
            matches_found,
            characters_scanned: text.chars().count(),
        }
    }

    /// True when the whole string is one address.
    pub fn is_match(&self, candidate: &str) -> bool {
        self.anchored.is_match(candidate)
    }
}
