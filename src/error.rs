use miette::Diagnostic;
use thiserror::Error;

/// Main error type for geostyle operations
#[derive(Error, Diagnostic, Debug)]
pub enum StyleError {
    #[error("IO error: {0}")]
    #[diagnostic(code(geostyle::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(geostyle::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Invalid colour: {input}")]
    #[diagnostic(code(geostyle::colour))]
    InvalidColorFormat {
        input: String,
        #[help]
        help: Option<String>,
    },

    #[error("Decode error: {message}")]
    #[diagnostic(code(geostyle::decode))]
    Decode { message: String },

    #[error("Validation failed: {errors} error(s)")]
    #[diagnostic(
        code(geostyle::validate),
        help("Fix the errors listed above and run geostyle validate again")
    )]
    ValidationFailed { errors: usize },

    #[error("Parse error: {message}")]
    #[diagnostic(code(geostyle::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl StyleError {
    pub(crate) fn invalid_colour(input: impl Into<String>) -> Self {
        StyleError::InvalidColorFormat {
            input: input.into(),
            help: Some(
                "Use #RGB, #RGBA, #RRGGBB, #RRGGBBAA, a named colour, or an [r, g, b] triple"
                    .to_string(),
            ),
        }
    }
}

pub type Result<T> = std::result::Result<T, StyleError>;
