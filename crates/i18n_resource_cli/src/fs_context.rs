use std::path::{Path, PathBuf};

use i18n_resource::{BuildContext, EmittedAsset, ResourceDiagnostic};

/// Writes emitted assets below `out_dir` and remembers the warnings.
pub struct FsBuildContext {
    out_dir: PathBuf,
    pub written: Vec<PathBuf>,
    pub warnings: Vec<ResourceDiagnostic>,
    pub write_errors: Vec<(PathBuf, std::io::Error)>,
}

impl FsBuildContext {
    pub fn new(out_dir: &Path) -> Self {
        Self {
            out_dir: out_dir.to_path_buf(),
            written: Vec::new(),
            warnings: Vec::new(),
            write_errors: Vec::new(),
        }
    }

    fn write_asset(&self, path: &Path, source: &str) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, source)
    }
}

impl BuildContext for FsBuildContext {
    fn emit_file(&mut self, asset: EmittedAsset) {
        let path = self.out_dir.join(&asset.file_name);
        match self.write_asset(&path, &asset.source) {
            Ok(()) => {
                log::info!("Written to {:?}", path);
                self.written.push(path);
            }
            Err(err) => {
                log::error!("Failed to write {:?}: {}", path, err);
                self.write_errors.push((path, err));
            }
        }
    }

    fn warn(&mut self, diagnostic: ResourceDiagnostic) {
        self.warnings.push(diagnostic);
    }
}
