pub mod compile;
pub mod discover;
pub mod freshness;

use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

/// Pipeline stage of a shader source, derived from its file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub const ALL: [ShaderStage; 2] = [ShaderStage::Vertex, ShaderStage::Fragment];

    pub fn extension(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vert",
            ShaderStage::Fragment => "frag",
        }
    }

    /// Only the last extension counts: `a.vert` is a source, `a.vert.spv` is not.
    pub fn from_path(path: &Path) -> Option<ShaderStage> {
        let extension = path.extension()?;
        Self::ALL
            .into_iter()
            .find(|stage| extension == stage.extension())
    }
}

/// Path of the compiled artifact for `source`: `extension` is appended to the full file name,
/// so `lighting.frag` becomes `lighting.frag.spv` next to it.
pub fn artifact_path(source: &Path, extension: &str) -> PathBuf {
    let mut path = OsString::from(source.as_os_str());
    path.push(".");
    path.push(extension);
    PathBuf::from(path)
}

pub fn is_artifact(path: &Path, extension: &str) -> bool {
    path.extension() == Some(extension.as_ref())
}
