use thiserror::Error;

pub const VALIDATION_MESSAGE: &str = "Please enter a software requirement.";
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to generate UML diagram.";

/// Everything that can go wrong between pressing "Generate" and having a result.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("requirement is empty")]
    Validation,
    #[error("server responded with status {status}{}", format_detail(.detail))]
    Server { status: u16, detail: Option<String> },
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl GenerationError {
    /// Text shown to the user. Only validation failures get a specific message,
    /// all the others collapse to the generic one.
    pub fn user_message(&self) -> &'static str {
        match self {
            GenerationError::Validation => VALIDATION_MESSAGE,
            _ => GENERIC_FAILURE_MESSAGE,
        }
    }
}

fn format_detail(detail: &Option<String>) -> String {
    match detail {
        Some(d) => format!(" ({})", d),
        None => String::new(),
    }
}
