use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ResourceError;

/// Maps a resource file path to the locale tag it is registered under.
pub trait LocaleResolver {
    fn resolve(&self, path: &Path) -> Result<String, ResourceError>;
}

impl<F> LocaleResolver for F
where
    F: Fn(&Path) -> Result<String, ResourceError>,
{
    fn resolve(&self, path: &Path) -> Result<String, ResourceError> {
        self(path)
    }
}

/// `locales/fr/messages.json` -> `fr`
#[derive(Debug, Default, Clone, Copy)]
pub struct ParentDirLocale;

impl LocaleResolver for ParentDirLocale {
    fn resolve(&self, path: &Path) -> Result<String, ResourceError> {
        path.parent()
            .and_then(|parent| parent.file_name())
            .map(|name| name.to_string_lossy().to_string())
            .ok_or_else(|| {
                ResourceError::Locale(format!("{:?} has no parent directory", path))
            })
    }
}

/// `messages.fr.json` -> `fr`
#[derive(Debug, Default, Clone, Copy)]
pub struct FileSuffixLocale;

impl LocaleResolver for FileSuffixLocale {
    fn resolve(&self, path: &Path) -> Result<String, ResourceError> {
        let stem = path
            .file_stem()
            .map(|stem| stem.to_string_lossy())
            .unwrap_or_default();
        match stem.rsplit_once('.') {
            Some((_, locale)) if !locale.is_empty() => Ok(locale.to_string()),
            _ => Err(ResourceError::Locale(format!(
                "{:?} has no locale suffix",
                path
            ))),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, JsonSchema, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum LocaleStrategy {
    /// The file's parent directory names the locale.
    #[default]
    ParentDir,
    /// The last dot-separated part of the file stem names the locale.
    FileSuffix,
}

impl LocaleStrategy {
    pub fn into_resolver(self) -> Box<dyn LocaleResolver> {
        match self {
            LocaleStrategy::ParentDir => Box::new(ParentDirLocale),
            LocaleStrategy::FileSuffix => Box::new(FileSuffixLocale),
        }
    }
}

/// Basename without the extension.
pub fn target_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_default()
}
