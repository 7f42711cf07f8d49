mod js_emitter;

use std::path::{Path, PathBuf};

use serde_json::Value;

pub use js_emitter::{JsEmitter, string_literal, value_literal};

use crate::error::{CompileError, ResourceError};
use crate::factory::{CompilationResult, DEFINABLE_PARAM, ModuleFactory};
use crate::filter::PathFilter;
use crate::locale::{LocaleResolver, target_name};
use crate::scanner::scan_resources;

/// A resource root and the submodules declared for it, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootSpec {
    pub name: String,
    pub submodules: Vec<String>,
}

impl RootSpec {
    pub fn new(name: impl Into<String>, submodules: Vec<String>) -> Self {
        Self {
            name: name.into(),
            submodules,
        }
    }
}

/// One successfully loaded resource file.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceFile {
    pub path: PathBuf,
    pub target_name: String,
    pub locale: String,
    pub value: Value,
}

/// Walks every root and turns its resource files into registration calls.
pub struct ResourceCompiler {
    working_dir: PathBuf,
    roots: Vec<RootSpec>,
    filter: Box<dyn PathFilter>,
    locale: Box<dyn LocaleResolver>,
}

impl ResourceCompiler {
    pub fn new(
        working_dir: PathBuf,
        roots: Vec<RootSpec>,
        filter: Box<dyn PathFilter>,
        locale: Box<dyn LocaleResolver>,
    ) -> Self {
        Self {
            working_dir,
            roots,
            filter,
            locale,
        }
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    pub fn roots(&self) -> &[RootSpec] {
        &self.roots
    }

    /// Compile all roots into a freshly named registration function.
    ///
    /// A root that is not a directory or cannot be listed aborts the pass. A file that cannot be
    /// read, parsed or assigned a locale is handed to `on_error` and left
    /// out.
    pub fn compile(
        &self,
        on_error: &mut dyn FnMut(&Path, &ResourceError),
    ) -> Result<CompilationResult, CompileError> {
        let mut blocks = Vec::with_capacity(self.roots.len());
        let mut resource_count = 0;
        let mut error_count = 0;

        for root in &self.roots {
            let mut emitter = JsEmitter::new();
            emitter.write_comment_literal("root", &root.name);
            emitter.open_block("");
            let names: Vec<String> = root.submodules.iter().map(|s| string_literal(s)).collect();
            emitter.write_call(&format!("{}.define", DEFINABLE_PARAM), &names);

            let root_dir = self.working_dir.join(&root.name);
            // a missing root is reported by the scan itself
            if root_dir.metadata().is_ok_and(|meta| !meta.is_dir()) {
                return Err(CompileError::NotADirectory { root: root_dir });
            }
            for entry in scan_resources(&root_dir) {
                let path = entry.map_err(|source| CompileError::Scan {
                    root: root_dir.clone(),
                    source,
                })?;
                if !self.filter.matches(&path) {
                    continue;
                }

                match self.load_resource(&path) {
                    Ok(resource) => {
                        log::debug!(
                            "Registering {:?} as {}/{}",
                            resource.path,
                            resource.locale,
                            resource.target_name
                        );
                        emitter.write_call(
                            &format!("{}.defines", DEFINABLE_PARAM),
                            &[
                                string_literal(&resource.target_name),
                                string_literal(&resource.locale),
                                value_literal(&resource.value),
                            ],
                        );
                        resource_count += 1;
                    }
                    Err(err) => {
                        error_count += 1;
                        on_error(&path, &err);
                    }
                }
            }

            emitter.close_block();
            blocks.push(emitter.finish());
        }

        let name = ModuleFactory::new_name();
        let code = ModuleFactory::wrap(&name, &blocks);
        log::info!(
            "Compiled {} resource(s) from {} root(s) into {}, {} error(s)",
            resource_count,
            self.roots.len(),
            name,
            error_count
        );

        Ok(CompilationResult {
            name,
            code,
            resource_count,
            error_count,
        })
    }

    pub fn load_resource(&self, path: &Path) -> Result<ResourceFile, ResourceError> {
        let locale = self.locale.resolve(path)?;
        let target_name = target_name(path);
        let content = std::fs::read_to_string(path)?;
        let value: Value = serde_json::from_str(&content)?;
        Ok(ResourceFile {
            path: path.to_path_buf(),
            target_name,
            locale,
            value,
        })
    }
}
