use std::{
    io,
    path::{Path, PathBuf},
};

use anyhow::Context as _;

/// Lists every regular file below `root`, depth first and sorted by file name within each
/// directory. Symbolic links are followed; a dangling link is listed like a file so that callers
/// decide what to do with it. A missing `root` has no files.
pub fn discover(root: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    let walk = walkdir::WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name();

    for entry in walk {
        let entry = match entry {
            Ok(entry) => entry,
            Err(error) if error.depth() == 0 && is_not_found(&error) => {
                debug!(root = %root.display(), "shader directory does not exist");
                return Ok(Vec::new());
            }
            Err(error) if is_not_found(&error) && is_dangling_link(error.path()) => {
                if let Some(path) = error.path() {
                    debug!(path = %path.display(), "dangling link");
                    files.push(path.to_path_buf());
                }
                continue;
            }
            Err(error) => {
                let path = error.path().unwrap_or(root).to_path_buf();
                return Err(error).with_context(|| format!("could not read {path:?}"));
            }
        };

        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

fn is_not_found(error: &walkdir::Error) -> bool {
    error.io_error().map(io::Error::kind) == Some(io::ErrorKind::NotFound)
}

fn is_dangling_link(path: Option<&Path>) -> bool {
    let Some(path) = path else { return false };
    std::fs::symlink_metadata(path).map_or(false, |metadata| metadata.file_type().is_symlink())
}
