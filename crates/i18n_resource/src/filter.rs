use std::path::{Path, PathBuf};

use wax::{Glob, Pattern};

use crate::error::ConfigError;

/// Decides whether a scanned resource file takes part in compilation.
pub trait PathFilter {
    fn matches(&self, path: &Path) -> bool;
}

impl<F> PathFilter for F
where
    F: Fn(&Path) -> bool,
{
    fn matches(&self, path: &Path) -> bool {
        self(path)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct AcceptAll;

impl PathFilter for AcceptAll {
    fn matches(&self, _path: &Path) -> bool {
        true
    }
}

/// Include/exclude glob filter.
///
/// Patterns are matched against the path relative to `base` using `/`
/// separators. An empty include list accepts everything; an exclude match
/// always wins.
pub struct GlobFilter {
    base: PathBuf,
    include: Vec<Glob<'static>>,
    exclude: Vec<Glob<'static>>,
}

impl GlobFilter {
    pub fn new(base: &Path, include: &[String], exclude: &[String]) -> Result<Self, ConfigError> {
        Ok(Self {
            base: base.to_path_buf(),
            include: build_globs(include)?,
            exclude: build_globs(exclude)?,
        })
    }

    fn candidate(&self, path: &Path) -> String {
        let relative = path.strip_prefix(&self.base).unwrap_or(path);
        relative.to_string_lossy().replace('\\', "/")
    }
}

impl PathFilter for GlobFilter {
    fn matches(&self, path: &Path) -> bool {
        let candidate = self.candidate(path);
        let candidate = candidate.as_str();
        if self.exclude.iter().any(|glob| glob.is_match(candidate)) {
            return false;
        }
        self.include.is_empty() || self.include.iter().any(|glob| glob.is_match(candidate))
    }
}

fn build_globs(patterns: &[String]) -> Result<Vec<Glob<'static>>, ConfigError> {
    let mut globs = Vec::with_capacity(patterns.len());
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|err| ConfigError::InvalidGlob {
            pattern: pattern.clone(),
            message: err.to_string(),
        })?;
        globs.push(glob.into_owned());
    }
    Ok(globs)
}
