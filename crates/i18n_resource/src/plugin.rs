use std::path::{Path, PathBuf};

use crate::compiler::{ResourceCompiler, RootSpec};
use crate::config::{DEFAULT_DEFINABLE_IMPORT, I18nConfig, OutputConfig};
use crate::error::{ConfigError, PluginError, ResourceError};
use crate::filter::GlobFilter;
use crate::locale::{LocaleResolver, ParentDirLocale};
use crate::output::{EmittedAsset, OutputDispatcher, OutputTarget};

/// A per-file problem reported to the host as a non-fatal warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceDiagnostic {
    pub path: PathBuf,
    pub message: String,
}

/// What the host build pipeline offers to the plugin hooks.
pub trait BuildContext {
    fn emit_file(&mut self, asset: EmittedAsset);

    fn warn(&mut self, diagnostic: ResourceDiagnostic);
}

/// Keeps everything in memory.
#[derive(Debug, Default)]
pub struct CollectingContext {
    pub assets: Vec<EmittedAsset>,
    pub warnings: Vec<ResourceDiagnostic>,
}

impl BuildContext for CollectingContext {
    fn emit_file(&mut self, asset: EmittedAsset) {
        self.assets.push(asset);
    }

    fn warn(&mut self, diagnostic: ResourceDiagnostic) {
        self.warnings.push(diagnostic);
    }
}

pub struct PluginOptions {
    pub working_dir: PathBuf,
    pub output: OutputConfig,
    pub roots: Vec<RootSpec>,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    pub determine_locale: Option<Box<dyn LocaleResolver>>,
    pub definable_import: String,
}

impl PluginOptions {
    pub fn new(working_dir: PathBuf, output: OutputConfig) -> Self {
        Self {
            working_dir,
            output,
            roots: Vec::new(),
            include: Vec::new(),
            exclude: Vec::new(),
            determine_locale: None,
            definable_import: DEFAULT_DEFINABLE_IMPORT.to_string(),
        }
    }

    pub fn root(mut self, name: &str, submodules: &[&str]) -> Self {
        self.roots.push(RootSpec::new(
            name,
            submodules.iter().map(|s| s.to_string()).collect(),
        ));
        self
    }
}

/// The hook surface handed to the host build pipeline.
pub struct I18nResourcePlugin {
    compiler: ResourceCompiler,
    dispatcher: OutputDispatcher,
}

impl I18nResourcePlugin {
    pub fn new(options: PluginOptions) -> Result<Self, ConfigError> {
        let target = OutputTarget::from_config(&options.output)?;
        let filter = GlobFilter::new(&options.working_dir, &options.include, &options.exclude)?;
        let locale = options
            .determine_locale
            .unwrap_or_else(|| Box::new(ParentDirLocale));

        log::info!(
            "i18n resources: {} root(s) under {:?}, output {:?}",
            options.roots.len(),
            options.working_dir,
            target
        );

        Ok(Self {
            compiler: ResourceCompiler::new(
                options.working_dir,
                options.roots,
                Box::new(filter),
                locale,
            ),
            dispatcher: OutputDispatcher::new(target, options.definable_import),
        })
    }

    pub fn from_config(config: &I18nConfig, config_root: &Path) -> Result<Self, ConfigError> {
        Self::new(PluginOptions {
            working_dir: config.resolve_working_dir(config_root),
            output: config.output.clone(),
            roots: config.root_specs(),
            include: config.include.clone(),
            exclude: config.exclude.clone(),
            determine_locale: Some(config.determine_locale.into_resolver()),
            definable_import: config.definable_import.clone(),
        })
    }

    pub fn compiler(&self) -> &ResourceCompiler {
        &self.compiler
    }

    pub fn dispatcher(&self) -> &OutputDispatcher {
        &self.dispatcher
    }

    /// Returns the internal id for the configured virtual module name.
    pub fn resolve_id(&self, id: &str) -> Option<String> {
        self.dispatcher.resolve_id(id)
    }

    pub fn load(
        &self,
        id: &str,
        ctx: &mut dyn BuildContext,
    ) -> Result<Option<String>, PluginError> {
        let mut report = warn_into(ctx);
        Ok(self.dispatcher.load(id, &self.compiler, &mut report)?)
    }

    /// Emits the file-mode assets on the first call only.
    pub fn generate_bundle(&mut self, ctx: &mut dyn BuildContext) -> Result<(), PluginError> {
        let assets = {
            let mut report = warn_into(ctx);
            self.dispatcher.emit(&self.compiler, &mut report)?
        };
        for asset in assets {
            log::info!("Emitting {}", asset.file_name);
            ctx.emit_file(asset);
        }
        Ok(())
    }
}

fn warn_into(ctx: &mut dyn BuildContext) -> impl FnMut(&Path, &ResourceError) + '_ {
    move |path: &Path, err: &ResourceError| {
        log::warn!("Skipping {:?}: {}", path, err);
        ctx.warn(ResourceDiagnostic {
            path: path.to_path_buf(),
            message: err.to_string(),
        });
    }
}
