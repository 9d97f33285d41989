use std::path::PathBuf;

use super::{DialogRequest, PickerError};

/// Something that can show the three kinds of open dialog.
///
/// Every method blocks until the dialog is dismissed and returns `None` when
/// the user cancels.
pub trait DialogBackend {
    fn pick_file(&mut self, request: &DialogRequest) -> Option<PathBuf>;
    fn pick_folder(&mut self, request: &DialogRequest) -> Option<PathBuf>;
    /// Paths come back in whatever order the dialog reports them.
    fn pick_files(&mut self, request: &DialogRequest) -> Option<Vec<PathBuf>>;
}

/// The OS-native dialogs (Windows common item dialogs via `rfd`).
#[cfg(windows)]
#[derive(Debug)]
pub struct NativeBackend {
    _private: (),
}

/// Uninhabited off Windows: there is no native dialog to wrap.
#[cfg(not(windows))]
#[derive(Debug)]
pub enum NativeBackend {}

/// Returns the native backend.
#[cfg(windows)]
pub fn native_backend() -> Result<NativeBackend, PickerError> {
    Ok(NativeBackend { _private: () })
}

/// Always [`PickerError::PlatformUnavailable`]: this host has no Windows dialogs.
#[cfg(not(windows))]
pub fn native_backend() -> Result<NativeBackend, PickerError> {
    Err(PickerError::PlatformUnavailable {
        os: std::env::consts::OS,
    })
}

#[cfg(windows)]
impl NativeBackend {
    fn to_rfd(request: &DialogRequest) -> rfd::FileDialog {
        let mut d = rfd::FileDialog::new().set_title(request.title.as_str());
        if let Some(dir) = &request.start_dir {
            d = d.set_directory(dir);
        }
        for f in &request.filters {
            if !f.extensions.is_empty() {
                d = d.add_filter(f.name.as_str(), f.extensions.as_slice());
            }
        }
        d
    }
}

#[cfg(windows)]
impl DialogBackend for NativeBackend {
    fn pick_file(&mut self, request: &DialogRequest) -> Option<PathBuf> {
        Self::to_rfd(request).pick_file()
    }

    fn pick_folder(&mut self, request: &DialogRequest) -> Option<PathBuf> {
        Self::to_rfd(request).pick_folder()
    }

    fn pick_files(&mut self, request: &DialogRequest) -> Option<Vec<PathBuf>> {
        Self::to_rfd(request).pick_files()
    }
}

#[cfg(not(windows))]
impl DialogBackend for NativeBackend {
    fn pick_file(&mut self, _: &DialogRequest) -> Option<PathBuf> {
        match *self {}
    }

    fn pick_folder(&mut self, _: &DialogRequest) -> Option<PathBuf> {
        match *self {}
    }

    fn pick_files(&mut self, _: &DialogRequest) -> Option<Vec<PathBuf>> {
        match *self {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(windows))]
    #[test]
    fn native_backend_is_unavailable_off_windows() {
        match native_backend() {
            Err(PickerError::PlatformUnavailable { os }) => assert_eq!(os, std::env::consts::OS),
            other => panic!("expected PlatformUnavailable, got {other:?}"),
        }
    }

    #[cfg(windows)]
    #[test]
    fn native_backend_is_available_on_windows() {
        assert!(native_backend().is_ok());
    }
}
