use std::path::PathBuf;

/// Directory that is searched for shader sources, relative to the working directory.
pub const DEFAULT_ROOT: &str = "resources/shaders";

pub const DEFAULT_COMPILER: &str = "glslc";

/// Appended to the full source file name to get the artifact name.
pub const ARTIFACT_EXTENSION: &str = "spv";

#[derive(Debug, Clone)]
pub struct Config {
    pub root: PathBuf,
    pub compiler: PathBuf,
    pub artifact_extension: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            root: PathBuf::from(DEFAULT_ROOT),
            compiler: PathBuf::from(DEFAULT_COMPILER),
            artifact_extension: ARTIFACT_EXTENSION.to_owned(),
        }
    }
}

impl Config {
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Config {
            root: root.into(),
            ..Default::default()
        }
    }
}
