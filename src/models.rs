use serde::Deserialize;
use std::path::PathBuf;

/// Suffix marking a catalog entry as a usable template.
pub const TEMPLATE_SUFFIX: &str = ".gitignore";

/// Name of the file written by `init`.
pub const OUTPUT_FILE_NAME: &str = ".gitignore";

/// One file in the upstream template directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The entry's name without the template suffix, if it is a template at all.
    pub fn stem(&self) -> Option<&str> {
        self.name.strip_suffix(TEMPLATE_SUFFIX)
    }
}

/// Helper struct for deserializing GitHub's per-file content response.
#[derive(Debug, Deserialize)]
pub struct ContentEnvelope {
    /// Base64 file bytes. Missing on error bodies like `{"message": "Not Found"}`.
    #[serde(default)]
    pub content: String,
}

/// An upstream template stem, with upstream's casing, that matched the user's input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLanguage {
    stem: String,
}

impl ResolvedLanguage {
    /// Only the resolver builds these, and only from a real catalog entry.
    pub(crate) fn from_entry_stem(stem: &str) -> Self {
        Self {
            stem: stem.to_string(),
        }
    }

    pub fn stem(&self) -> &str {
        &self.stem
    }

    /// Exact upstream file name, e.g. `Python.gitignore`.
    pub fn file_name(&self) -> String {
        format!("{}{}", self.stem, TEMPLATE_SUFFIX)
    }
}

/// Final template bytes, ready to write or print.
pub type RawPayload = Vec<u8>;

/// What the user asked for on this invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandRequest {
    Generate {
        language: String,
        no_credits: bool,
        output_dir: PathBuf,
    },
    ListLanguages,
}
