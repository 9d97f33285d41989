//! Native Windows file and folder pickers.
//!
//! [`select_items`] opens a modal OS dialog for one of three modes (`file`,
//! `folder`, `multi-files`), blocks until the user confirms or cancels, and
//! returns a [`Selection`]. Cancelling is not an error: it comes back as
//! [`Selection::Cancelled`].

pub mod config;
pub mod picker;

pub use config::{FileFilter, PickerOptions};
pub use picker::{
    native_backend, select, select_items, DialogBackend, DialogRequest, NativeBackend, Picker,
    PickerError, SelectMode, Selection,
};
