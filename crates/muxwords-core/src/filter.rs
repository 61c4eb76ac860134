//! Post-merge token filter: optional literal prefix, optional minimum length.

/// Filter applied to the merged token set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    /// Anchored-at-start match. Matched literally with `starts_with`, never
    /// through a pattern engine, so `.` or `*` in a prefix match only
    /// themselves.
    pub prefix: Option<String>,
    pub min_len: Option<usize>,
}

impl FilterSpec {
    pub fn new(prefix: Option<String>, min_len: Option<usize>) -> Self {
        Self { prefix, min_len }
    }

    pub fn is_unfiltered(&self) -> bool {
        self.prefix.is_none() && self.min_len.is_none()
    }

    pub fn matches(&self, token: &str) -> bool {
        if let Some(ref prefix) = self.prefix {
            if !token.starts_with(prefix.as_str()) {
                return false;
            }
        }
        if let Some(min) = self.min_len {
            // character count, not byte length: "café" is 4 long, not 5
            if token.chars().count() < min {
                return false;
            }
        }
        true
    }
}
