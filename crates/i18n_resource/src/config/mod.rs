mod config_loader;

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub use config_loader::{load_configs, load_configs_raw};

use crate::compiler::RootSpec;
use crate::locale::LocaleStrategy;

pub const DEFAULT_DEFINABLE_IMPORT: &str = "i18n-runtime";

/// Contents of an `.i18nrc.json` file.
#[derive(Serialize, Deserialize, Debug, JsonSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct I18nConfig {
    #[serde(rename = "$schema")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    /// Directory the roots are relative to. Relative paths are resolved
    /// against the directory of the config file.
    #[serde(default)]
    pub working_dir: Option<String>,
    /// Resource root directory -> submodule names declared before any data.
    #[serde(default)]
    pub roots: IndexMap<String, Vec<String>>,
    /// Globs a resource path must match. Empty means everything.
    #[serde(default)]
    pub include: Vec<String>,
    /// Globs that drop a resource path.
    #[serde(default)]
    pub exclude: Vec<String>,
    #[serde(default)]
    pub determine_locale: LocaleStrategy,
    /// Where the compiled module goes. Required.
    pub output: OutputConfig,
    /// Module the generated type declarations import `ModuleDefinable` from.
    #[serde(default = "default_definable_import")]
    pub definable_import: String,
}

impl I18nConfig {
    pub fn root_specs(&self) -> Vec<RootSpec> {
        self.roots
            .iter()
            .map(|(name, submodules)| RootSpec::new(name.clone(), submodules.clone()))
            .collect()
    }

    pub fn resolve_working_dir(&self, config_root: &Path) -> PathBuf {
        let dir = match &self.working_dir {
            Some(dir) if Path::new(dir).is_absolute() => PathBuf::from(dir),
            Some(dir) => config_root.join(dir),
            None => config_root.to_path_buf(),
        };
        std::path::absolute(&dir).unwrap_or(dir)
    }
}

fn default_definable_import() -> String {
    DEFAULT_DEFINABLE_IMPORT.to_string()
}

/// Raw `output` section. `type` is checked when the plugin is built so an
/// unknown value surfaces as a configuration error of its own.
#[derive(Serialize, Deserialize, Debug, JsonSchema, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OutputConfig {
    /// `virtual` or `file`.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cjs_file_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dts_filename: Option<String>,
}

impl OutputConfig {
    pub fn virtual_module(module_name: &str) -> Self {
        Self {
            kind: "virtual".to_string(),
            module_name: Some(module_name.to_string()),
            file_name: None,
            cjs_file_name: None,
            dts_filename: None,
        }
    }

    pub fn file(file_name: &str) -> Self {
        Self {
            kind: "file".to_string(),
            module_name: None,
            file_name: Some(file_name.to_string()),
            cjs_file_name: None,
            dts_filename: None,
        }
    }
}
