use std::path::{Path, PathBuf};

use walkdir::WalkDir;

pub const RESOURCE_EXTENSION: &str = ".json";

/// Lazy depth-first walk over every `.json` file below a directory.
///
/// Entries come out in the order the file system lists them. Call
/// [`scan_resources`] again to restart the walk from the top. The directory
/// itself is never yielded. A `.json` symlink whose target is gone is still
/// yielded so the read failure reaches the caller.
pub struct ResourceScanner {
    inner: walkdir::IntoIter,
}

pub fn scan_resources(dir: &Path) -> ResourceScanner {
    ResourceScanner {
        inner: WalkDir::new(dir).min_depth(1).follow_links(true).into_iter(),
    }
}

impl Iterator for ResourceScanner {
    type Item = Result<PathBuf, walkdir::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(err) => {
                    if let Some(path) = dangling_leaf(&err) {
                        if is_resource_name(&path) {
                            return Some(Ok(path));
                        }
                        log::debug!("Skipping dangling link: {:?}", path);
                        continue;
                    }
                    return Some(Err(err));
                }
            };

            if entry.file_type().is_dir() {
                continue;
            }

            if is_resource_name(entry.path()) {
                return Some(Ok(entry.into_path()));
            }
        }
    }
}

fn is_resource_name(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().ends_with(RESOURCE_EXTENSION))
}

// a symlink whose target is gone is a leaf problem, not a listing problem
fn dangling_leaf(err: &walkdir::Error) -> Option<PathBuf> {
    if err.depth() == 0 || err.loop_ancestor().is_some() {
        return None;
    }
    let path = err.path()?;
    let meta = path.symlink_metadata().ok()?;
    if meta.file_type().is_symlink() && path.metadata().is_err() {
        Some(path.to_path_buf())
    } else {
        None
    }
}
