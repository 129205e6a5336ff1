use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::{
    config::Config,
    shader::{self, compile::Compiler, discover::discover, freshness, ShaderStage},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Build,
    Clean,
}

/// Shaders touched by a build pass, as walked from the configured root.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub compiled: Vec<PathBuf>,
    pub up_to_date: Vec<PathBuf>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CleanReport {
    pub removed: Vec<PathBuf>,
}

/// Keeps the compiled artifacts under a shader directory in sync with their sources.
///
/// Files are handled one at a time in discovery order and the first failure ends the run.
pub struct Driver<C> {
    config: Config,
    compiler: C,
}

impl<C: Compiler> Driver<C> {
    pub fn new(config: Config, compiler: C) -> Self {
        Driver { config, compiler }
    }

    pub fn compiler(&self) -> &C {
        &self.compiler
    }

    pub fn run(&mut self, mode: Mode) -> anyhow::Result<()> {
        match mode {
            Mode::Build => {
                let report = self.build()?;
                info!(
                    compiled = report.compiled.len(),
                    up_to_date = report.up_to_date.len(),
                    "shaders built"
                );
            }
            Mode::Clean => {
                let report = self.clean()?;
                info!(removed = report.removed.len(), "shaders cleaned");
            }
        }
        Ok(())
    }

    /// Compiles every vertex and fragment source whose artifact is not strictly newer.
    pub fn build(&mut self) -> anyhow::Result<BuildReport> {
        let mut report = BuildReport::default();

        for path in discover(&self.config.root)? {
            if ShaderStage::from_path(&path).is_none() {
                continue;
            }

            if !path.exists() {
                warn!(path = %path.display(), "skipping dangling link");
                continue;
            }

            let source = absolute(&path)?;
            let artifact = shader::artifact_path(&source, &self.config.artifact_extension);

            let source_time = freshness::modified(&source)?;
            let artifact_time = freshness::modified(&artifact)?;
            if !freshness::is_stale(source_time, artifact_time) {
                debug!(path = %path.display(), "up to date");
                report.up_to_date.push(path);
                continue;
            }

            info!("Process {}", path.display());
            self.compiler.compile(&source, &artifact)?;
            report.compiled.push(path);
        }

        Ok(report)
    }

    /// Deletes every artifact below the root, dangling links included. Sources and unrelated
    /// files are left alone.
    pub fn clean(&mut self) -> anyhow::Result<CleanReport> {
        let mut report = CleanReport::default();

        for path in discover(&self.config.root)? {
            if !shader::is_artifact(&path, &self.config.artifact_extension) {
                continue;
            }

            info!("Remove {}", path.display());
            std::fs::remove_file(&path).with_context(|| format!("could not remove {path:?}"))?;
            report.removed.push(path);
        }

        Ok(report)
    }
}

fn absolute(path: &Path) -> anyhow::Result<PathBuf> {
    std::path::absolute(path).with_context(|| format!("could not resolve {path:?}"))
}
