use tracing::{debug, info};

use crate::config::PickerOptions;

mod error;
mod file_operations;
mod mode;
mod request;
mod selection;

pub use error::PickerError;
pub use file_operations::{native_backend, DialogBackend, NativeBackend};
pub use mode::SelectMode;
pub use request::DialogRequest;
pub use selection::Selection;

/// Opens the native dialog for `select_mode` with default options.
///
/// The mode string is validated before anything touches the platform, so an
/// unknown mode is reported as [`PickerError::InvalidMode`] even on hosts
/// without a dialog facility.
pub fn select_items(select_mode: &str) -> Result<Selection, PickerError> {
    let mode: SelectMode = select_mode.parse()?;
    select(mode, &PickerOptions::default())
}

/// Opens the native dialog for `mode`, configured by `options`.
pub fn select(mode: SelectMode, options: &PickerOptions) -> Result<Selection, PickerError> {
    let backend = native_backend()?;
    Ok(Picker::new(backend).select(mode, options))
}

/// Launches dialogs on a [`DialogBackend`] and normalizes what comes back.
pub struct Picker<B> {
    backend: B,
}

impl<B: DialogBackend> Picker<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Parses `select_mode` and opens the matching dialog.
    ///
    /// Nothing is shown when the mode is not recognized.
    pub fn select_str(
        &mut self,
        select_mode: &str,
        options: &PickerOptions,
    ) -> Result<Selection, PickerError> {
        let mode: SelectMode = select_mode.parse()?;
        Ok(self.select(mode, options))
    }

    /// Blocks until the user dismisses the dialog.
    pub fn select(&mut self, mode: SelectMode, options: &PickerOptions) -> Selection {
        let request = DialogRequest::new(mode, options);
        debug!(
            %mode,
            title = %request.title,
            start_dir = ?request.start_dir,
            filters = request.filters.len(),
            "opening dialog"
        );

        let selection = match mode {
            SelectMode::File => Selection::from_single(self.backend.pick_file(&request)),
            SelectMode::Folder => Selection::from_single(self.backend.pick_folder(&request)),
            SelectMode::MultiFiles => Selection::from_many(self.backend.pick_files(&request)),
        };

        if selection.is_cancelled() {
            info!(%mode, "dialog cancelled");
        } else {
            debug!(%mode, count = selection.paths().len(), "selection made");
        }
        selection
    }
}
