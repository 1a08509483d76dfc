use std::fs;
use std::path::PathBuf;

use stamp::error::Error;
use stamp::renderer::{MiniJinjaRenderer, RenderParams};
use stamp::reporter::StageReporter;
use stamp::scaffold::{ScaffoldConfig, Scaffolder};
use tempfile::TempDir;

/// Records every stage signal in order.
#[derive(Default)]
struct RecordingReporter {
    events: Vec<(String, String)>,
}

impl StageReporter for RecordingReporter {
    fn stage_started(&mut self, stage: &str) {
        self.events.push(("started".to_string(), stage.to_string()));
    }

    fn stage_succeeded(&mut self, stage: &str) {
        self.events.push(("succeeded".to_string(), stage.to_string()));
    }

    fn stage_failed(&mut self, stage: &str) {
        self.events.push(("failed".to_string(), stage.to_string()));
    }
}

fn demo_params() -> RenderParams {
    RenderParams::new("demo", None, "npm init lib@0.2.1", "0.2.1")
}

fn offline_config(template_dir: PathBuf, target_dir: PathBuf) -> ScaffoldConfig {
    let mut config = ScaffoldConfig::new(template_dir, target_dir, demo_params());
    config.skip_status_check = true;
    config.skip_install = true;
    config.skip_git = true;
    config
}

#[test]
fn test_end_to_end_skip_npm_skip_git() {
    let template = TempDir::new().unwrap();
    fs::write(
        template.path().join("package.json"),
        "{\n  \"name\": \"{{ name }}\"\n}\n",
    )
    .unwrap();
    fs::write(template.path().join("_gitignore"), "node_modules\n").unwrap();

    let workspace = TempDir::new().unwrap();
    let target = workspace.path().join("demo");

    let config = offline_config(template.path().to_path_buf(), target.clone());
    let renderer = MiniJinjaRenderer::new();
    let mut reporter = RecordingReporter::default();
    Scaffolder::new(&config, &renderer, &mut reporter).run().unwrap();

    let rendered = fs::read_to_string(target.join("package.json")).unwrap();
    assert_eq!(rendered, "{\n  \"name\": \"demo\"\n}\n");
    assert!(target.join("gitignore").exists());
    assert!(!target.join(".git").exists());

    // Five mandatory stages, each started then succeeded, in order; the
    // skipped install and git stages are never reported at all.
    let stages: Vec<&str> = reporter
        .events
        .iter()
        .filter(|(signal, _)| signal == "started")
        .map(|(_, stage)| stage.as_str())
        .collect();
    assert_eq!(
        stages,
        vec![
            "Performing system precheck on directory",
            "Performing system precheck on git status",
            "Creating project directory",
            "Setting up project files",
            "Restoring template file names",
        ]
    );
    assert_eq!(reporter.events.len(), 10);
    assert!(reporter.events.iter().all(|(signal, _)| signal != "failed"));
}

#[test]
fn test_nested_obfuscated_names_restored() {
    let template = TempDir::new().unwrap();
    fs::create_dir(template.path().join("config")).unwrap();
    fs::write(template.path().join("config/__eslintrc"), "{}").unwrap();
    fs::write(template.path().join("config/_gitignore"), "dist\n").unwrap();

    let workspace = TempDir::new().unwrap();
    let target = workspace.path().join("demo");

    let config = offline_config(template.path().to_path_buf(), target.clone());
    let renderer = MiniJinjaRenderer::new();
    let mut reporter = RecordingReporter::default();
    Scaffolder::new(&config, &renderer, &mut reporter).run().unwrap();

    assert!(target.join("config/.eslintrc").exists());
    assert!(target.join("config/gitignore").exists());
    assert!(!target.join("config/__eslintrc").exists());
    assert!(!target.join("config/_gitignore").exists());
}

#[test]
fn test_non_empty_target_fails_before_any_write() {
    let template = TempDir::new().unwrap();
    fs::write(template.path().join("package.json"), "{{ name }}").unwrap();

    let target = TempDir::new().unwrap();
    fs::write(target.path().join("existing.txt"), "keep").unwrap();

    let config =
        offline_config(template.path().to_path_buf(), target.path().to_path_buf());
    let renderer = MiniJinjaRenderer::new();
    let mut reporter = RecordingReporter::default();
    let result = Scaffolder::new(&config, &renderer, &mut reporter).run();

    match result {
        Err(Error::NonEmptyDirectory { .. }) => (),
        other => panic!("Expected NonEmptyDirectory, got {:?}", other),
    }

    // Only the first stage ran, and the target was left untouched.
    assert_eq!(
        reporter.events,
        vec![
            ("started".to_string(), "Performing system precheck on directory".to_string()),
            ("failed".to_string(), "Performing system precheck on directory".to_string()),
        ]
    );
    let entries: Vec<_> = fs::read_dir(target.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn test_failed_materialize_aborts_sequence() {
    let template = TempDir::new().unwrap();
    fs::write(template.path().join("broken.txt"), "{{ unclosed").unwrap();

    let workspace = TempDir::new().unwrap();
    let target = workspace.path().join("demo");

    let config = offline_config(template.path().to_path_buf(), target);
    let renderer = MiniJinjaRenderer::new();
    let mut reporter = RecordingReporter::default();
    let result = Scaffolder::new(&config, &renderer, &mut reporter).run();

    assert!(result.is_err());
    let last = reporter.events.last().unwrap();
    assert_eq!(last, &("failed".to_string(), "Setting up project files".to_string()));
    // The rename stage was never entered.
    assert!(!reporter
        .events
        .iter()
        .any(|(_, stage)| stage == "Restoring template file names"));
}

#[test]
fn test_existing_empty_target_is_reused() {
    let template = TempDir::new().unwrap();
    fs::write(template.path().join("readme.md"), "# {{ name }}").unwrap();

    let target = TempDir::new().unwrap();

    let config =
        offline_config(template.path().to_path_buf(), target.path().to_path_buf());
    let renderer = MiniJinjaRenderer::new();
    let mut reporter = RecordingReporter::default();
    Scaffolder::new(&config, &renderer, &mut reporter).run().unwrap();

    let rendered = fs::read_to_string(target.path().join("readme.md")).unwrap();
    assert_eq!(rendered, "# demo");
}
