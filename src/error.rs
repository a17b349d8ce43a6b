use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong between reading the command line and writing `.gitignore`.
#[derive(Debug, Error)]
pub enum Error {
    /// A required input was missing or blank.
    #[error("{field} is required")]
    Validation { field: &'static str },

    /// The upstream API could not be reached.
    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The upstream API answered with a non-success status.
    #[error("GitHub API error: {status} ({url})")]
    UpstreamStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The upstream payload was empty or had an unexpected shape.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The catalog was fine but nothing in it matched.
    #[error("language not found: {language}{}", suggestion_hint(.suggestions))]
    NotFound {
        language: String,
        suggestions: Vec<String>,
    },

    /// Writing the output file failed.
    #[error("error creating .gitignore file at {}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("empty response")]
    EmptyResponse,

    #[error("malformed JSON: {0}")]
    MalformedJson(String),

    /// GitHub signals a missing file with an empty (or absent) `content` field.
    #[error("language not found")]
    LanguageNotFound,

    #[error("invalid base64: {0}")]
    InvalidBase64(String),
}

impl Error {
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport { .. } | Error::UpstreamStatus { .. })
    }
}

fn suggestion_hint(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (did you mean: {}?)", suggestions.join(", "))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
