use regex::Regex;
use thiserror::Error;

/// Extensions recognized as checkable source or install-script files.
const SOURCE_EXTENSION_PATTERN: &str = r"\.(php|module|inc|install)$";

/// Errors from compiling the configured directory patterns.
#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Invalid directory pattern '{pattern}'")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Classification of a changed path that still exists on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathClass {
    /// Matches a configured directory and a recognized extension.
    Included,
    /// Matches no configured directory; reported for diagnostic visibility.
    Skipped,
    /// Matches a configured directory but not a recognized extension.
    /// Deliberately absent from every reported set.
    ExtensionMismatch,
}

/// Path filter built from the configured directory patterns.
///
/// Each pattern is compiled individually and anchored at the start of the
/// path, so a list like `["src/", "web/modules/"]` includes exactly the paths
/// beneath those prefixes. Keeping the patterns as a tagged list (rather than
/// one OR-joined mega-regex) lets a bad pattern be reported by name.
#[derive(Debug)]
pub struct PathFilter {
    directory_patterns: Vec<(String, Regex)>,
    extension_pattern: Regex,
}

impl PathFilter {
    /// Compile the configured directory patterns.
    pub fn new(patterns: &[String]) -> Result<Self, FilterError> {
        let mut directory_patterns = Vec::with_capacity(patterns.len());

        for pattern in patterns {
            let anchored = format!("^(?:{pattern})");
            let regex = Regex::new(&anchored).map_err(|source| FilterError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?;
            directory_patterns.push((pattern.clone(), regex));
        }

        Ok(Self {
            directory_patterns,
            extension_pattern: Regex::new(SOURCE_EXTENSION_PATTERN)
                .expect("Invalid extension regex"),
        })
    }

    /// The first configured pattern matching the start of `path`, if any.
    pub fn matching_directory(&self, path: &str) -> Option<&str> {
        self.directory_patterns
            .iter()
            .find(|(_, regex)| regex.is_match(path))
            .map(|(pattern, _)| pattern.as_str())
    }

    /// Whether `path` ends in one of the recognized source extensions.
    pub fn has_source_extension(&self, path: &str) -> bool {
        self.extension_pattern.is_match(path)
    }

    /// Classify a changed path. Pure function of the path string.
    pub fn classify(&self, path: &str) -> PathClass {
        match self.matching_directory(path) {
            None => PathClass::Skipped,
            Some(pattern) => {
                if self.has_source_extension(path) {
                    tracing::debug!("'{}' included via pattern '{}'", path, pattern);
                    PathClass::Included
                } else {
                    PathClass::ExtensionMismatch
                }
            }
        }
    }
}
