//! The copy-or-render file pipeline.
//! Mirrors every regular file from the template root into the target root,
//! rendering text files through the template engine and copying binary or
//! skip-listed files byte-for-byte.

use globset::{Glob, GlobSet, GlobSetBuilder};
use log::{debug, warn};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::renderer::TemplateRenderer;
use crate::walker::list_files;

/// Content is sniffed for null bytes within this prefix only.
const BINARY_SNIFF_LEN: usize = 8192;

/// Checks if content is binary by looking for null bytes in the first 8 KiB.
pub fn is_binary_content(content: &[u8]) -> bool {
    let check_len = content.len().min(BINARY_SNIFF_LEN);
    content[..check_len].contains(&0)
}

/// Compiles a list of filename extensions (given with their leading dot,
/// e.g. `".ts"`) into a glob set matching any path ending in one of them.
pub fn extension_globset(extensions: &[&str]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for ext in extensions {
        builder.add(Glob::new(&format!("**/*{}", ext)).map_err(Error::Pattern)?);
    }
    builder.build().map_err(Error::Pattern)
}

/// Decides copy-verbatim vs. templated render per file and streams the
/// result into the mirrored path under the target root.
pub struct RenderPipeline<'a> {
    renderer: &'a dyn TemplateRenderer,
    skip_render: GlobSet,
    skip_copy: GlobSet,
}

impl<'a> RenderPipeline<'a> {
    /// Builds a pipeline around an injected renderer and the two extension
    /// sets: files matching `skip_render` are copied untouched, files
    /// matching `skip_copy` are excluded from the target entirely.
    pub fn new(
        renderer: &'a dyn TemplateRenderer,
        skip_render: &[&str],
        skip_copy: &[&str],
    ) -> Result<Self> {
        Ok(Self {
            renderer,
            skip_render: extension_globset(skip_render)?,
            skip_copy: extension_globset(skip_copy)?,
        })
    }

    /// Materializes every file under `source_root` into `target_root`,
    /// preserving relative paths. The first file failure fails the whole
    /// operation and leaves the target in an unspecified, partially
    /// written state.
    pub fn materialize(
        &self,
        source_root: &Path,
        target_root: &Path,
        context: &serde_json::Value,
    ) -> Result<()> {
        for source_file in list_files(source_root)? {
            self.process_file(&source_file, source_root, target_root, context)?;
        }
        Ok(())
    }

    fn process_file(
        &self,
        source_file: &Path,
        source_root: &Path,
        target_root: &Path,
        context: &serde_json::Value,
    ) -> Result<()> {
        let relative = source_file.strip_prefix(source_root).map_err(|_| {
            Error::OutsideRoot { path: source_file.display().to_string() }
        })?;

        if self.skip_copy.is_match(relative) {
            warn!("skipping excluded file: {}", relative.display());
            return Ok(());
        }

        let target_file = target_root.join(relative);
        if let Some(parent) = target_file.parent() {
            // Tolerates a parent already created for a sibling entry.
            fs::create_dir_all(parent)?;
        }

        let content = fs::read(source_file)?;
        if self.skip_render.is_match(relative) || is_binary_content(&content) {
            debug!("copying file: {}", relative.display());
            fs::write(&target_file, &content)?;
        } else {
            debug!("rendering file: {}", relative.display());
            let template = String::from_utf8_lossy(&content);
            let rendered = self.renderer.render(&template, context)?;
            fs::write(&target_file, rendered)?;
        }
        Ok(())
    }
}
