//! Text matching strategies shared by the assertion builders

/// How an expected text relates to an actual text
#[derive(Debug, Clone)]
pub enum TextMatch {
    /// The texts are equal
    Exact(String),
    /// The actual text starts with the expected prefix
    StartsWith(String),
    /// The actual text contains the expected substring
    Contains(String),
}

impl TextMatch {
    /// Non-panicking check, for filtering rather than asserting.
    pub fn matches(&self, actual: &str) -> bool {
        match self {
            TextMatch::Exact(expected) => actual == expected,
            TextMatch::StartsWith(prefix) => actual.starts_with(prefix),
            TextMatch::Contains(substring) => actual.contains(substring),
        }
    }

    /// Assert the match, panicking with `context` as the failure path.
    pub fn assert(&self, actual: &str, context: &str) {
        match self {
            TextMatch::Exact(expected) => {
                assert_eq!(
                    actual, expected,
                    "{}: Expected text to be '{}', but got '{}'",
                    context, expected, actual
                );
            }
            TextMatch::StartsWith(prefix) => {
                assert!(
                    self.matches(actual),
                    "{}: Expected text to start with '{}', but got '{}'",
                    context,
                    prefix,
                    actual
                );
            }
            TextMatch::Contains(substring) => {
                assert!(
                    self.matches(actual),
                    "{}: Expected text to contain '{}', but got '{}'",
                    context,
                    substring,
                    actual
                );
            }
        }
    }
}
