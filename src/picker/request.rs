use std::path::PathBuf;

use crate::config::{default_filters, expand_home, FileFilter, PickerOptions};

use super::SelectMode;

/// Fully resolved parameters for one dialog, as handed to a backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DialogRequest {
    pub mode: SelectMode,
    pub title: String,
    pub start_dir: Option<PathBuf>,
    /// Always empty for [`SelectMode::Folder`].
    pub filters: Vec<FileFilter>,
}

impl DialogRequest {
    pub fn new(mode: SelectMode, options: &PickerOptions) -> Self {
        let title = options
            .title
            .clone()
            .unwrap_or_else(|| mode.default_title().to_string());

        let filters = if !mode.picks_files() {
            Vec::new()
        } else if !options.filters.is_empty() {
            options.filters.clone()
        } else if options.use_default_filters {
            default_filters()
        } else {
            Vec::new()
        };

        Self {
            mode,
            title,
            start_dir: options.start_dir.as_deref().map(expand_home),
            filters,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn defaults_follow_the_mode() {
        let opts = PickerOptions::default();

        let file = DialogRequest::new(SelectMode::File, &opts);
        assert_eq!(file.title, "Select file");
        assert_eq!(file.filters, default_filters());
        assert_eq!(file.start_dir, None);

        let folder = DialogRequest::new(SelectMode::Folder, &opts);
        assert_eq!(folder.title, "Select folder");
        assert!(folder.filters.is_empty());

        let multi = DialogRequest::new(SelectMode::MultiFiles, &opts);
        assert_eq!(multi.title, "Select files (multiple allowed)");
        assert_eq!(multi.filters.len(), 3);
    }

    #[test]
    fn explicit_options_win_over_defaults() {
        let opts = PickerOptions {
            title: Some("Pick a log".into()),
            start_dir: Some(PathBuf::from(r"C:\logs")),
            filters: vec![FileFilter::from(("Logs", &["log"][..]))],
            use_default_filters: true,
        };
        let req = DialogRequest::new(SelectMode::File, &opts);
        assert_eq!(req.title, "Pick a log");
        assert_eq!(req.start_dir.as_deref(), Some(Path::new(r"C:\logs")));
        assert_eq!(req.filters, vec![FileFilter::new("Logs", vec!["log".to_string()])]);
    }

    #[test]
    fn default_filters_can_be_switched_off() {
        let opts = PickerOptions {
            use_default_filters: false,
            ..PickerOptions::default()
        };
        assert!(DialogRequest::new(SelectMode::MultiFiles, &opts).filters.is_empty());
    }

    #[test]
    fn folder_mode_ignores_custom_filters() {
        let opts = PickerOptions {
            filters: vec![FileFilter::from(("CSV", &["csv"][..]))],
            ..PickerOptions::default()
        };
        assert!(DialogRequest::new(SelectMode::Folder, &opts).filters.is_empty());
    }
}
