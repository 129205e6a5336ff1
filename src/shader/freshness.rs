use std::{io, path::Path, time::SystemTime};

use anyhow::Context as _;

/// Modification time of `path`. A file that does not exist counts as modified at the epoch, so
/// a missing artifact is stale next to any source modified at or after 1970. A source dated
/// before the epoch looks older than its missing artifact and is not compiled.
pub fn modified(path: &Path) -> anyhow::Result<SystemTime> {
    match std::fs::metadata(path) {
        Ok(metadata) => metadata
            .modified()
            .with_context(|| format!("could not read modification time of {path:?}")),
        Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(SystemTime::UNIX_EPOCH),
        Err(error) => Err(error).with_context(|| format!("could not stat {path:?}")),
    }
}

/// An artifact is fresh only if it is strictly newer than its source. Equal timestamps are
/// stale.
pub fn is_stale(source: SystemTime, artifact: SystemTime) -> bool {
    artifact <= source
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scratch::{at, Scratch};

    #[test]
    fn staleness_is_strict() {
        assert!(!is_stale(at(100), at(101)));
        assert!(is_stale(at(100), at(100)));
        assert!(is_stale(at(101), at(100)));
    }

    #[test]
    fn missing_file_is_epoch() {
        let scratch = Scratch::new();
        let time = modified(&scratch.join("nothing.vert.spv")).unwrap();
        assert_eq!(time, SystemTime::UNIX_EPOCH);

        // a missing artifact is always stale, however old the source
        assert!(is_stale(at(1), time));
    }

    #[test]
    fn other_errors_are_fatal() {
        let scratch = Scratch::new();
        scratch.file("a.vert", 1);

        // a regular file used as a directory is not "not found"
        let error = modified(&scratch.join("a.vert/b.spv")).unwrap_err();
        assert!(format!("{error:#}").contains("b.spv"));
    }

    #[test]
    fn reads_pinned_time() {
        let scratch = Scratch::new();
        let path = scratch.file("a.vert", 1_000);
        assert_eq!(modified(&path).unwrap(), at(1_000));
    }
}
