//! Compiles trees of per-locale JSON translation files into one generated
//! registration function.
//!
//! Every configured root is walked depth-first; each `.json` file below it
//! becomes a `modDef.defines(target, locale, value)` call inside the
//! generated function, preceded by the root's `modDef.define(...)` call. The
//! result is delivered as a virtual module or written out as build assets.

mod compiler;
mod config;
mod error;
mod factory;
mod filter;
mod locale;
mod output;
mod plugin;
mod scanner;
#[cfg(test)]
mod test;

pub use compiler::{ResourceCompiler, ResourceFile, RootSpec, string_literal, value_literal};
pub use config::{DEFAULT_DEFINABLE_IMPORT, I18nConfig, OutputConfig, load_configs, load_configs_raw};
pub use error::{CompileError, ConfigError, PluginError, ResourceError};
pub use factory::{CompilationResult, FACTORY_PREFIX, ModuleFactory};
pub use filter::{AcceptAll, GlobFilter, PathFilter};
pub use locale::{FileSuffixLocale, LocaleResolver, LocaleStrategy, ParentDirLocale, target_name};
pub use output::{
    EmittedAsset, OutputDispatcher, OutputTarget, VIRTUAL_ID_PREFIX, render_cjs, render_dts,
    render_esm,
};
pub use plugin::{
    BuildContext, CollectingContext, I18nResourcePlugin, PluginOptions, ResourceDiagnostic,
};
pub use scanner::{RESOURCE_EXTENSION, ResourceScanner, scan_resources};
