use miette::Diagnostic;
use thiserror::Error;

/// Main error type for imgrid operations
#[derive(Error, Diagnostic, Debug)]
pub enum GridError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(imgrid::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(imgrid::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Invalid dimensions: {message}")]
    #[diagnostic(code(imgrid::dimensions))]
    InvalidDimensions {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Grid of {rows}x{cols} is finer than the {width}x{height} image")]
    #[diagnostic(
        code(imgrid::empty_block),
        help("Lower rows/cols, or set `empty_block: clamp` to sample 1px blocks")
    )]
    EmptySampleBlock {
        rows: u32,
        cols: u32,
        width: u32,
        height: u32,
    },

    #[error("Encode error: {message}")]
    #[diagnostic(code(imgrid::encode))]
    Encode {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, GridError>;
