use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::picker::PickerError;

/// File type filter shown in the dialog's type drop-down.
///
/// Extensions are stored lowercase without a leading dot. `*` matches any
/// extension.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawFileFilter")]
pub struct FileFilter {
    pub name: String,
    pub extensions: Vec<String>,
}

// Filters read from config files go through `FileFilter::new` like every other source.
#[derive(Deserialize)]
struct RawFileFilter {
    name: String,
    #[serde(default)]
    extensions: Vec<String>,
}

impl From<RawFileFilter> for FileFilter {
    fn from(raw: RawFileFilter) -> Self {
        FileFilter::new(raw.name, raw.extensions)
    }
}

impl FileFilter {
    pub fn new(name: impl Into<String>, extensions: impl Into<Vec<String>>) -> Self {
        Self {
            name: name.into(),
            extensions: extensions
                .into()
                .iter()
                .filter_map(|e| normalize_extension(e))
                .collect(),
        }
    }
}

impl From<(&str, &[&str])> for FileFilter {
    fn from(value: (&str, &[&str])) -> Self {
        Self::new(
            value.0,
            value.1.iter().map(|s| s.to_string()).collect::<Vec<_>>(),
        )
    }
}

/// Parses `NAME=ext1,ext2`, as given on the command line.
impl FromStr for FileFilter {
    type Err = PickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PickerError::InvalidFilter(s.to_string());
        let (name, exts) = s.split_once('=').ok_or_else(invalid)?;
        let name = name.trim();
        let filter = FileFilter::new(
            name,
            exts.split(',').map(str::to_string).collect::<Vec<_>>(),
        );
        if name.is_empty() || filter.extensions.is_empty() {
            return Err(invalid());
        }
        Ok(filter)
    }
}

fn normalize_extension(token: &str) -> Option<String> {
    let t = token.trim();
    let t = t.strip_prefix("*.").unwrap_or(t).trim_start_matches('.');
    if t.is_empty() {
        return None;
    }
    Some(t.to_lowercase())
}

/// Filters used by the file modes when the caller supplies none.
pub fn default_filters() -> Vec<FileFilter> {
    vec![
        FileFilter::from(("All files", &["*"][..])),
        FileFilter::from(("CSV files", &["csv"][..])),
        FileFilter::from(("Text files", &["txt"][..])),
    ]
}

/// Per-call dialog configuration.
///
/// Nothing here is remembered between calls; a caller that wants to reopen
/// in the last-used directory passes it as `start_dir`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerOptions {
    pub title: Option<String>,
    pub start_dir: Option<PathBuf>,
    pub filters: Vec<FileFilter>,
    pub use_default_filters: bool,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            title: None,
            start_dir: None,
            filters: Vec::new(),
            use_default_filters: true,
        }
    }
}

impl PickerOptions {
    /// Loads options from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, PickerError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

/// Expands a leading `~` to the user's home directory.
pub fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => {
            warn!(path = %path.display(), "no home directory, using start dir as given");
            path.to_path_buf()
        }
    }
}
