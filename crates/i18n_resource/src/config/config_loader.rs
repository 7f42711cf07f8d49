use std::path::PathBuf;

use serde_json::Value;

use crate::error::ConfigError;

use super::I18nConfig;

/// Read and merge config files in order. `partial_configs` are merged last,
/// so command line overrides win over every file.
pub fn load_configs_raw(
    config_files: &[PathBuf],
    partial_configs: Option<Vec<Value>>,
) -> Result<Value, ConfigError> {
    let mut merged = Value::Object(Default::default());

    for config_file in config_files {
        log::info!("Loading config file: {:?}", config_file);
        let content = std::fs::read_to_string(config_file).map_err(|source| ConfigError::Read {
            path: config_file.clone(),
            source,
        })?;
        let value: Value = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: config_file.clone(),
            source,
        })?;
        merge_values(&mut merged, value);
    }

    if let Some(partial_configs) = partial_configs {
        for partial in partial_configs {
            merge_values(&mut merged, partial);
        }
    }

    Ok(merged)
}

pub fn load_configs(
    config_files: &[PathBuf],
    partial_configs: Option<Vec<Value>>,
) -> Result<I18nConfig, ConfigError> {
    let value = load_configs_raw(config_files, partial_configs)?;
    if value.as_object().is_some_and(|obj| obj.is_empty()) {
        log::warn!("No config values found");
    }
    serde_json::from_value(value).map_err(ConfigError::Invalid)
}

// objects merge key by key; anything else from the overlay replaces the base
fn merge_values(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(base_value) => {
                        merge_values(base_value, overlay_value);
                    }
                    None => {
                        base_map.insert(key, overlay_value);
                    }
                }
            }
        }
        (base_slot, overlay_value) => {
            *base_slot = overlay_value;
        }
    }
}
