use crate::error::{config_error, ReportResult};
use std::fs;
use std::path::Path;

/// Title fragments that exclude an event from the report.
///
/// Loaded from a plain-text file, one fragment per line. Matching is a
/// case-sensitive substring check against the event subject.
#[derive(Debug, Clone, Default)]
pub struct IgnoreList {
    fragments: Vec<String>,
}

impl IgnoreList {
    /// Load the ignore list from a file. A missing or unreadable file is a
    /// fatal configuration error, there is no default fallback.
    pub fn load(path: impl AsRef<Path>) -> ReportResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            config_error(&format!(
                "Failed to read ignore list {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(Self::from_content(&content))
    }

    /// Build the list from file content, trimming lines and dropping empties
    pub fn from_content(content: &str) -> Self {
        let fragments = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();
        Self { fragments }
    }

    /// Build the list directly from fragments
    pub fn from_fragments(fragments: Vec<String>) -> Self {
        Self { fragments }
    }

    /// True if the title contains any ignore fragment
    pub fn should_ignore(&self, title: &str) -> bool {
        self.fragments.iter().any(|fragment| title.contains(fragment))
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}
