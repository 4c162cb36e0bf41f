use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChecklistError {
    #[error("could not decode blueprint text with any supported encoding (tried {tried})")]
    Decode { tried: String },

    #[error("blueprint not found: {0}")]
    NotFound(String),

    #[error("item '{item}' not found in blueprint '{title}'")]
    ItemNotFound { title: String, item: String },

    #[error("invalid blueprint title '{title}': {reason}")]
    InvalidTitle { title: String, reason: String },

    #[error("invalid status filter '{0}': expected finished, unfinished, or all")]
    InvalidFilter(String),

    #[error("invalid check status '{0}': expected done or undone")]
    InvalidStatus(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, ChecklistError>;
