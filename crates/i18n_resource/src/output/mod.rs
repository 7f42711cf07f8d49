mod formats;

use std::path::Path;

pub use formats::{render_cjs, render_dts, render_esm};

use crate::compiler::ResourceCompiler;
use crate::config::OutputConfig;
use crate::error::{CompileError, ConfigError, ResourceError};

/// Ids carrying this prefix are owned by the plugin and never name a real file.
pub const VIRTUAL_ID_PREFIX: &str = "\0i18n-resources:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Virtual {
        module_name: String,
    },
    File {
        file_name: String,
        cjs_file_name: Option<String>,
        dts_filename: Option<String>,
    },
}

impl OutputTarget {
    pub fn from_config(config: &OutputConfig) -> Result<Self, ConfigError> {
        match config.kind.as_str() {
            "virtual" => Ok(OutputTarget::Virtual {
                module_name: config
                    .module_name
                    .clone()
                    .ok_or(ConfigError::MissingOutputField("virtual", "moduleName"))?,
            }),
            "file" => Ok(OutputTarget::File {
                file_name: config
                    .file_name
                    .clone()
                    .ok_or(ConfigError::MissingOutputField("file", "fileName"))?,
                cjs_file_name: config.cjs_file_name.clone(),
                dts_filename: config.dts_filename.clone(),
            }),
            other => Err(ConfigError::UnknownOutputType(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedAsset {
    pub file_name: String,
    pub source: String,
}

/// Delivers compiled resources either as a virtual module or as build assets.
///
/// In file mode the first emission flips `emitted`; later emission requests
/// produce nothing.
#[derive(Debug)]
pub struct OutputDispatcher {
    target: OutputTarget,
    definable_import: String,
    emitted: bool,
}

impl OutputDispatcher {
    pub fn new(target: OutputTarget, definable_import: String) -> Self {
        Self {
            target,
            definable_import,
            emitted: false,
        }
    }

    pub fn target(&self) -> &OutputTarget {
        &self.target
    }

    pub fn has_emitted(&self) -> bool {
        self.emitted
    }

    pub fn resolve_id(&self, id: &str) -> Option<String> {
        match &self.target {
            OutputTarget::Virtual { module_name } if module_name == id => {
                Some(format!("{}{}", VIRTUAL_ID_PREFIX, module_name))
            }
            _ => None,
        }
    }

    /// Source for the virtual module. Recompiles on every call.
    pub fn load(
        &self,
        id: &str,
        compiler: &ResourceCompiler,
        on_error: &mut dyn FnMut(&Path, &ResourceError),
    ) -> Result<Option<String>, CompileError> {
        let OutputTarget::Virtual { module_name } = &self.target else {
            return Ok(None);
        };
        match id.strip_prefix(VIRTUAL_ID_PREFIX) {
            Some(name) if name == module_name => {
                let result = compiler.compile(on_error)?;
                Ok(Some(render_esm(&result)))
            }
            _ => Ok(None),
        }
    }

    /// Build assets for file mode, produced at most once per dispatcher.
    pub fn emit(
        &mut self,
        compiler: &ResourceCompiler,
        on_error: &mut dyn FnMut(&Path, &ResourceError),
    ) -> Result<Vec<EmittedAsset>, CompileError> {
        let OutputTarget::File {
            file_name,
            cjs_file_name,
            dts_filename,
        } = &self.target
        else {
            return Ok(Vec::new());
        };
        if self.emitted {
            log::debug!("Assets already emitted, skipping");
            return Ok(Vec::new());
        }

        let result = compiler.compile(on_error)?;
        self.emitted = true;

        let mut assets = vec![EmittedAsset {
            file_name: file_name.clone(),
            source: render_esm(&result),
        }];
        if let Some(cjs_file_name) = cjs_file_name {
            assets.push(EmittedAsset {
                file_name: cjs_file_name.clone(),
                source: render_cjs(&result),
            });
        }
        if let Some(dts_filename) = dts_filename {
            assets.push(EmittedAsset {
                file_name: dts_filename.clone(),
                source: render_dts(&result, &self.definable_import),
            });
        }
        Ok(assets)
    }
}
