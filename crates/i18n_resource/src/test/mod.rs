mod plugin_test;

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::{AcceptAll, ParentDirLocale, ResourceCompiler, RootSpec};

/// A throwaway directory tree of resource files.
pub struct ResourceWorkspace {
    dir: TempDir,
}

impl ResourceWorkspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn mkdir(&self, relative: &str) {
        std::fs::create_dir_all(self.dir.path().join(relative)).unwrap();
    }

    pub fn compiler(&self, roots: &[(&str, &[&str])]) -> ResourceCompiler {
        let roots = roots
            .iter()
            .map(|(name, subs)| RootSpec::new(*name, subs.iter().map(|s| s.to_string()).collect()))
            .collect();
        ResourceCompiler::new(
            self.dir.path().to_path_buf(),
            roots,
            Box::new(AcceptAll),
            Box::new(ParentDirLocale),
        )
    }
}
