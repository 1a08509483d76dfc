//! Core scaffolding orchestration.
//! Runs the precheck, materialization, rename, and external-process
//! components as a strict linear sequence of named stages. The first failed
//! stage terminates the run; later stages are never entered.

use std::fs;
use std::io;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::external;
use crate::materialize::RenderPipeline;
use crate::precheck;
use crate::rename;
use crate::renderer::{RenderParams, TemplateRenderer};
use crate::reporter::StageReporter;

/// One parameterized engine configuration: a CLI entry point is a thin
/// instantiation of this struct, not a code fork.
pub struct ScaffoldConfig {
    /// Template directory to read from; never written to
    pub template_dir: PathBuf,
    /// Project directory to create and materialize into
    pub target_dir: PathBuf,
    /// Variables substituted into every rendered file
    pub params: RenderParams,
    /// Skip the empty-directory precheck
    pub skip_dir_check: bool,
    /// Skip the git-status precheck
    pub skip_status_check: bool,
    /// Skip the dependency install stage
    pub skip_install: bool,
    /// Skip the git init and first-commit stages
    pub skip_git: bool,
    /// Extensions copied verbatim, never rendered
    pub skip_render: Vec<String>,
    /// Extensions excluded from the target entirely
    pub skip_copy: Vec<String>,
}

impl ScaffoldConfig {
    /// Creates a configuration with the reference defaults: all stages
    /// enabled, TypeScript sources copied verbatim, nothing excluded.
    pub fn new(template_dir: PathBuf, target_dir: PathBuf, params: RenderParams) -> Self {
        Self {
            template_dir,
            target_dir,
            params,
            skip_dir_check: false,
            skip_status_check: false,
            skip_install: false,
            skip_git: false,
            skip_render: crate::constants::SKIP_RENDER_EXTENSIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            skip_copy: crate::constants::SKIP_COPY_EXTENSIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Drives one scaffolding run over a configuration, an injected template
/// renderer, and a stage reporter.
pub struct Scaffolder<'a> {
    config: &'a ScaffoldConfig,
    renderer: &'a dyn TemplateRenderer,
    reporter: &'a mut dyn StageReporter,
}

impl<'a> Scaffolder<'a> {
    pub fn new(
        config: &'a ScaffoldConfig,
        renderer: &'a dyn TemplateRenderer,
        reporter: &'a mut dyn StageReporter,
    ) -> Self {
        Self { config, renderer, reporter }
    }

    /// Runs the full stage sequence. Optional stages disabled by the
    /// configuration are skipped entirely and never reported.
    pub fn run(&mut self) -> Result<()> {
        let cwd = std::env::current_dir()?;
        let context = self.config.params.to_context()?;
        let renderer = self.renderer;

        self.stage("Performing system precheck on directory", |cfg| {
            precheck::target_dir(&cfg.target_dir, cfg.skip_dir_check)
        })?;

        self.stage("Performing system precheck on git status", |cfg| {
            precheck::git_status(&cwd, cfg.skip_status_check)
        })?;

        self.stage("Creating project directory", |cfg| {
            match fs::create_dir(&cfg.target_dir) {
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(()),
                result => result.map_err(Error::Io),
            }
        })?;

        self.stage("Setting up project files", |cfg| {
            let skip_render: Vec<&str> =
                cfg.skip_render.iter().map(String::as_str).collect();
            let skip_copy: Vec<&str> =
                cfg.skip_copy.iter().map(String::as_str).collect();
            let pipeline = RenderPipeline::new(renderer, &skip_render, &skip_copy)?;
            pipeline.materialize(&cfg.template_dir, &cfg.target_dir, &context)
        })?;

        self.stage("Restoring template file names", |cfg| {
            let rules = rename::default_rules(&cfg.target_dir)?;
            rename::apply_renames(&rules)
        })?;

        if !self.config.skip_install {
            self.stage("Installing dependencies", |cfg| {
                external::npm_install(&cfg.target_dir).map(|_| ())
            })?;
        }

        if !self.config.skip_git {
            self.stage("Initializing git repository", |cfg| {
                external::git_init(&cfg.target_dir).map(|_| ())
            })?;

            self.stage("Making first commit", |cfg| {
                external::git_add_all(&cfg.target_dir)?;
                let message = format!("Project {} initialized", cfg.params.name);
                external::git_commit(&cfg.target_dir, &message).map(|_| ())
            })?;
        }

        Ok(())
    }

    /// Runs one named stage, reporting started, then succeeded or failed.
    fn stage<T>(
        &mut self,
        name: &str,
        op: impl FnOnce(&ScaffoldConfig) -> Result<T>,
    ) -> Result<T> {
        self.reporter.stage_started(name);
        match op(self.config) {
            Ok(value) => {
                self.reporter.stage_succeeded(name);
                Ok(value)
            }
            Err(e) => {
                self.reporter.stage_failed(name);
                Err(e)
            }
        }
    }
}
