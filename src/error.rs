//! Error handling for the skel application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for skel operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents template syntax or evaluation failures, in entry paths
    /// as well as in entry contents
    #[error("Render error: {0}.")]
    RenderError(#[from] minijinja::Error),

    /// Represents a parameter document that exists but cannot be decoded
    #[error("Parameter document error: {0}.")]
    DecodeError(String),

    /// Represents errors raised while walking the template tree
    #[error("Template error: {0}.")]
    TemplateError(String),

    /// The requested template set has no templates directory
    #[error("Template set does not exist: {template_dir}.")]
    TemplateDoesNotExistsError { template_dir: String },

    /// Represents failures of the external editor invocation
    #[error("Editor error: {0}.")]
    EditorError(String),
}

/// Convenience type alias for Results with Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// The only place in the application that terminates the process;
/// components below `main` always propagate errors as `Result`.
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{}", err);
    std::process::exit(1);
}
