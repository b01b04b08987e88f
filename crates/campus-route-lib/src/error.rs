use thiserror::Error;

/// Convenient result alias for the campus route library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for the default campus map")]
    MapPathUnavailable,

    /// Raised when the map description is missing tokens, references invalid
    /// vertices, or otherwise cannot be turned into a consistent graph.
    #[error("malformed campus map (line {line}): {message}")]
    MalformedMap { line: usize, message: String },

    /// Raised when a location name could not be found in the directory.
    #[error("unknown location name: {name}{}", format_suggestion(.suggestion))]
    UnknownLocation {
        name: String,
        suggestion: Option<String>,
    },

    /// Raised when no route could be found between two locations.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Raised when a suggestion is requested before any location was loaded.
    #[error("suggestion tree is empty; no locations have been loaded")]
    EmptySuggestTree,

    /// Raised when a computed route plan lacks any locations.
    #[error("route plan was empty")]
    EmptyRoutePlan,

    /// Raised when consecutive route steps are not joined by a walkway.
    #[error("no walkway between vertex {from} and vertex {to}")]
    MissingWalkway { from: usize, to: usize },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn malformed(line: usize, message: impl Into<String>) -> Self {
        Error::MalformedMap {
            line,
            message: message.into(),
        }
    }
}

fn format_suggestion(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(name) => format!(". Did you mean '{}'?", name),
        None => String::new(),
    }
}
