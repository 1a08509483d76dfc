//! Command-line interface implementation for stamp.
//! Provides argument parsing and help text formatting using clap.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for stamp.
#[derive(Parser, Debug)]
#[command(author, version, about = "stamp: stamp out new projects from templates", long_about = None)]
pub struct Args {
    /// Project directory
    #[arg(value_name = "DIR")]
    pub dir: Option<String>,

    /// Project directory (alternative to the positional argument)
    #[arg(short = 'd', long = "dir", value_name = "STRING")]
    pub dir_opt: Option<String>,

    /// Organization scope for the generated package name
    #[arg(short, long, value_name = "STRING")]
    pub org: Option<String>,

    /// Path to the template directory, overriding the bundled template
    #[arg(short, long, value_name = "PATH")]
    pub template: Option<PathBuf>,

    /// Skip checking git status in the current working directory
    #[arg(long)]
    pub skip_status_check: bool,

    /// Skip checking that the project directory is empty
    #[arg(long)]
    pub skip_dir_check: bool,

    /// Skip installing dependencies
    #[arg(long)]
    pub skip_npm: bool,

    /// Skip initializing a repository and making the first commit
    #[arg(long)]
    pub skip_git: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Returns the project directory, preferring the positional argument
    /// over the `--dir` option.
    pub fn project_dir(&self) -> Option<&str> {
        self.dir.as_deref().or(self.dir_opt.as_deref())
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling for invalid arguments
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => e.exit(),
    }
}
