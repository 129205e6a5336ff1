use std::{
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::Context as _;

use crate::config::DEFAULT_COMPILER;

/// Turns one shader source into its artifact.
pub trait Compiler {
    fn compile(&mut self, input: &Path, output: &Path) -> anyhow::Result<()>;
}

/// Runs an external `glslc`-compatible executable as `<program> -o <output> <input>`.
///
/// The compiler's own diagnostics go straight to the inherited stdout/stderr; only the exit
/// status is inspected.
#[derive(Debug, Clone)]
pub struct Glslc {
    program: PathBuf,
}

impl Default for Glslc {
    fn default() -> Self {
        Glslc::new(DEFAULT_COMPILER)
    }
}

impl Glslc {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Glslc {
            program: program.into(),
        }
    }

    fn command(&self, input: &Path, output: &Path) -> Command {
        let mut command = Command::new(&self.program);
        command.arg("-o").arg(output).arg(input);
        command
    }
}

impl Compiler for Glslc {
    fn compile(&mut self, input: &Path, output: &Path) -> anyhow::Result<()> {
        let mut command = self.command(input, output);
        debug!(?command, "running shader compiler");

        let status = command
            .status()
            .with_context(|| format!("could not run shader compiler {:?}", self.program))?;

        if !status.success() {
            anyhow::bail!("could not compile shader {input:?}: {:?} {status}", self.program);
        }

        Ok(())
    }
}
