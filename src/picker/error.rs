use thiserror::Error;

/// Errors returned by the picker.
///
/// A cancelled dialog is not an error; see [`crate::Selection::Cancelled`].
#[derive(Error, Debug)]
pub enum PickerError {
    /// The mode string is not one of `file`, `folder`, `multi-files`.
    #[error("invalid select mode {0:?}: must be 'file', 'folder' or 'multi-files'")]
    InvalidMode(String),
    /// No native dialog facility on this host.
    #[error("native file dialogs are unavailable on {os}")]
    PlatformUnavailable { os: &'static str },
    /// A `NAME=ext,ext` filter argument could not be parsed.
    #[error("invalid filter {0:?}: expected NAME=ext1,ext2")]
    InvalidFilter(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
