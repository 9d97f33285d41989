use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::PickerError;

/// What kind of filesystem entity the dialog lets the user pick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectMode {
    /// A single existing file.
    File,
    /// A single directory.
    Folder,
    /// Any number of existing files.
    MultiFiles,
}

impl SelectMode {
    pub const ALL: [SelectMode; 3] = [SelectMode::File, SelectMode::Folder, SelectMode::MultiFiles];

    pub fn as_str(self) -> &'static str {
        match self {
            SelectMode::File => "file",
            SelectMode::Folder => "folder",
            SelectMode::MultiFiles => "multi-files",
        }
    }

    /// Title shown when the caller does not supply one.
    pub fn default_title(self) -> &'static str {
        match self {
            SelectMode::File => "Select file",
            SelectMode::Folder => "Select folder",
            SelectMode::MultiFiles => "Select files (multiple allowed)",
        }
    }

    pub fn picks_files(self) -> bool {
        !matches!(self, SelectMode::Folder)
    }
}

impl fmt::Display for SelectMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SelectMode {
    type Err = PickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SelectMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| PickerError::InvalidMode(s.to_string()))
    }
}
