//! Error handling for the stamp application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for stamp operations.
///
/// This enum represents all possible errors that can occur while scaffolding
/// a project. It implements the standard Error trait through thiserror's
/// derive macro.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The target path exists but is not a directory
    #[error("specified path '{path}' is not a directory")]
    NotADirectory { path: String },

    /// The target path exists but is not both readable and writable
    #[error("specified path '{path}' is not accessible")]
    InaccessiblePath { path: String },

    /// The target directory exists and already contains entries
    #[error("specified path '{path}' is not empty")]
    NonEmptyDirectory { path: String },

    /// The working tree has uncommitted changes; carries the raw
    /// `git status --porcelain` output
    #[error(
        "please commit your changes before running this tool!\n\
         exiting because `git status` is not empty:\n\n{status}\n"
    )]
    DirtyWorkingTree { status: String },

    /// A directory could not be traversed while listing template files
    #[error("listing '{path}' failed: {source}")]
    List {
        path: String,
        #[source]
        source: walkdir::Error,
    },

    /// A discovered file resolved outside the template root
    #[error("file '{path}' is outside the template root")]
    OutsideRoot { path: String },

    /// Represents errors that occur during template rendering
    #[error("template error: {0}")]
    Render(#[from] minijinja::Error),

    /// The render parameters could not be converted into a template context
    #[error("render context error: {0}")]
    Context(#[from] serde_json::Error),

    /// A rename rule could not be applied
    #[error("cannot rename '{from}' to '{to}': {reason}")]
    Rename {
        from: String,
        to: String,
        reason: String,
    },

    /// An invalid skip-render / skip-copy extension pattern
    #[error("invalid extension pattern: {0}")]
    Pattern(#[from] globset::Error),

    /// An invalid rename rule pattern
    #[error("invalid rename pattern: {0}")]
    RenamePattern(#[from] regex::Error),

    /// A git or package manager invocation exited unsuccessfully
    #[error("`{command}` failed: {detail}")]
    ExternalProcess { command: String, detail: String },

    /// The template directory could not be found
    #[error("template directory '{0}' does not exist")]
    TemplateNotFound(String),
}

/// Convenience type alias for Results with stamp's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{}", err);
    std::process::exit(1);
}
