use miette::Diagnostic;
use thiserror::Error;

/// Main error type for faces operations
#[derive(Error, Diagnostic, Debug)]
pub enum FacesError {
    #[error("IO error: {0}")]
    #[diagnostic(code(faces::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(faces::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(faces::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Proportion out of range: {value} is not within [0.0, 1.0]")]
    #[diagnostic(code(faces::proportion))]
    OutOfRange { value: f64 },

    #[error("Image spectrum '{source_name}' has no frames")]
    #[diagnostic(
        code(faces::spectrum),
        help("Frame files must be named after their position, e.g. 0.0.png, 0.5.png, 1.0.png")
    )]
    EmptySpectrum { source_name: String },

    #[error("Asset error with {path}: {message}")]
    #[diagnostic(code(faces::asset))]
    Asset {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Validation error: {message}")]
    #[diagnostic(code(faces::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, FacesError>;
