//! Stamp's main application entry point.
//! Parses command-line arguments, assembles a scaffolding configuration,
//! and drives one run of the engine.

use std::path::{Path, PathBuf};

use clap::CommandFactory;
use stamp::{
    cli::{get_args, Args},
    constants::DEFAULT_TEMPLATE,
    error::{default_error_handler, Error, Result},
    logger::init_logger,
    renderer::{MiniJinjaRenderer, RenderParams},
    reporter::SpinnerReporter,
    scaffold::{ScaffoldConfig, Scaffolder},
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Resolves the template directory: an explicit `--template` path wins,
/// otherwise the bundled template is looked up next to the executable.
fn resolve_template_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    let dir = match explicit {
        Some(dir) => dir,
        None => {
            let exe = std::env::current_exe()?;
            let install_root = exe
                .parent()
                .and_then(Path::parent)
                .ok_or_else(|| Error::TemplateNotFound(exe.display().to_string()))?;
            install_root.join("templates").join(DEFAULT_TEMPLATE)
        }
    };
    if !dir.is_dir() {
        return Err(Error::TemplateNotFound(dir.display().to_string()));
    }
    Ok(dir)
}

fn run(args: Args) -> Result<()> {
    println!();
    println!("-------------------------------------------------------");
    println!("Welcome to the stamp project generator");
    println!("-------------------------------------------------------");
    println!();

    let Some(dir) = args.project_dir().map(str::to_string) else {
        Args::command().print_help().map_err(Error::Io)?;
        std::process::exit(1);
    };

    let version = env!("CARGO_PKG_VERSION");
    let name = env!("CARGO_PKG_NAME").trim_start_matches("create-");
    let exe = format!("npm init {}@{}", name, version);
    let params = RenderParams::new(&dir, args.org.as_deref(), &exe, version);

    let template_dir = resolve_template_dir(args.template)?;
    let mut config = ScaffoldConfig::new(template_dir, PathBuf::from(&dir), params);
    config.skip_dir_check = args.skip_dir_check;
    config.skip_status_check = args.skip_status_check;
    config.skip_install = args.skip_npm;
    config.skip_git = args.skip_git;

    let renderer = MiniJinjaRenderer::new();
    let mut reporter = SpinnerReporter::new();
    Scaffolder::new(&config, &renderer, &mut reporter).run()?;

    println!("done.");
    Ok(())
}
