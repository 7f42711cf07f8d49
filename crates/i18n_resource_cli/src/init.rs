use std::path::{Path, PathBuf};

use fern::Dispatch;
use i18n_resource::{ConfigError, I18nConfig, load_configs};
use log::LevelFilter;
use serde_json::Value;

pub const CONFIG_FILE_NAME: &str = ".i18nrc.json";

/// Log to stderr. `verbose` lowers the level to `Debug` for the compiler
/// crate and `Info` for everything else.
pub fn setup_logger(verbose: bool) {
    let (level, own_level) = if verbose {
        (LevelFilter::Info, LevelFilter::Debug)
    } else {
        (LevelFilter::Warn, LevelFilter::Warn)
    };
    let logger = Dispatch::new()
        .format(move |out, message, record| {
            let label = level_label(record.level());
            if verbose {
                out.finish(format_args!("{} [{}] {}", label, record.target(), message))
            } else {
                out.finish(format_args!("{}: {}", label, message))
            }
        })
        .level(level)
        .level_for("i18n_resource", own_level)
        .chain(std::io::stderr());

    if let Err(e) = logger.apply() {
        eprintln!("Failed to apply logger: {:?}", e);
    }
}

fn level_label(level: log::Level) -> &'static str {
    match level {
        log::Level::Error => "\x1b[31merror\x1b[0m",
        log::Level::Warn => "\x1b[33mwarning\x1b[0m",
        log::Level::Info => "info",
        log::Level::Debug | log::Level::Trace => "debug",
    }
}

/// Directory relative config paths resolve against: the parent of the only
/// config file, or `fallback` when there are zero or several.
pub fn root_from_configs(config_paths: &[PathBuf], fallback: &Path) -> PathBuf {
    if config_paths.len() != 1 {
        return fallback.to_path_buf();
    }
    let config_path = &config_paths[0];
    match config_path.canonicalize() {
        Ok(path) => path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| fallback.to_path_buf()),
        Err(err) => {
            log::error!(
                "Failed to canonicalize config path: \"{:?}\": {}",
                config_path,
                err
            );
            fallback.to_path_buf()
        }
    }
}

/// Parse `--set` values. Each one must be a JSON object.
pub fn parse_overrides(raw: &[String]) -> Result<Vec<Value>, ConfigError> {
    raw.iter()
        .map(|text| {
            let value: Value =
                serde_json::from_str(text).map_err(|err| ConfigError::Override {
                    value: text.clone(),
                    message: err.to_string(),
                })?;
            if !value.is_object() {
                return Err(ConfigError::Override {
                    value: text.clone(),
                    message: "expected a JSON object".to_string(),
                });
            }
            Ok(value)
        })
        .collect()
}

pub fn load_workspace_config(
    workspace: &Path,
    config_paths: Option<Vec<PathBuf>>,
    overrides: Vec<Value>,
) -> Result<(I18nConfig, PathBuf), ConfigError> {
    let (config_files, config_root) = match config_paths {
        Some(config_paths) => {
            let root = root_from_configs(&config_paths, workspace);
            (config_paths, root)
        }
        None => (
            vec![workspace.join(CONFIG_FILE_NAME)]
                .into_iter()
                .filter(|path| path.exists())
                .collect(),
            workspace.to_path_buf(),
        ),
    };

    if config_files.is_empty() {
        log::warn!("No {} found in {:?}", CONFIG_FILE_NAME, workspace);
    }
    let partial_configs = if overrides.is_empty() {
        None
    } else {
        Some(overrides)
    };
    let config = load_configs(&config_files, partial_configs)?;
    Ok((config, config_root))
}
