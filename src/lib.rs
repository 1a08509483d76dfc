//! Stamp is a project scaffolding engine: it materializes a new project from
//! a template directory by copying the template tree, rendering text files
//! with caller-supplied variables, and restoring filenames that were
//! obfuscated in the template source.

/// Command-line interface module for the stamp application
pub mod cli;

/// Common constants used throughout the application
pub mod constants;

/// Error types and handling for the stamp application
pub mod error;

/// External process invocations (git and the package manager)
pub mod external;

/// Logger configuration
pub mod logger;

/// The copy-or-render file pipeline
/// Decides per file between verbatim copy and templated render
pub mod materialize;

/// Precondition checks on the target directory and the working tree
pub mod precheck;

/// Filename normalization rules applied after materialization
pub mod rename;

/// Template rendering functionality
pub mod renderer;

/// Per-stage progress reporting
pub mod reporter;

/// Core scaffolding orchestration
/// Combines all components into an ordered sequence of stages
pub mod scaffold;

/// Recursive template tree listing
pub mod walker;
