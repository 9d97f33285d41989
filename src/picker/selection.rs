use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};

/// Outcome of one dialog invocation.
///
/// `file` and `folder` modes yield [`Selection::Single`]; `multi-files` yields
/// [`Selection::Multiple`] in the order the OS dialog reported the paths.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "paths", rename_all = "kebab-case")]
pub enum Selection {
    Single(#[serde(serialize_with = "lossy_path")] PathBuf),
    Multiple(#[serde(serialize_with = "lossy_paths")] Vec<PathBuf>),
    Cancelled,
}

// Paths that are not valid Unicode are written with U+FFFD instead of failing the output.
fn lossy_path<S: Serializer>(path: &Path, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.to_string_lossy())
}

fn lossy_paths<S: Serializer>(paths: &[PathBuf], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(paths.iter().map(|p| p.to_string_lossy()))
}

impl Selection {
    pub(crate) fn from_single(path: Option<PathBuf>) -> Self {
        match path {
            Some(p) => Selection::Single(p),
            None => Selection::Cancelled,
        }
    }

    // Some backends report a confirmed but empty multi-selection; treat it as a cancel.
    pub(crate) fn from_many(paths: Option<Vec<PathBuf>>) -> Self {
        match paths {
            Some(v) if !v.is_empty() => Selection::Multiple(v),
            _ => Selection::Cancelled,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Selection::Cancelled)
    }

    /// Selected paths; empty when cancelled.
    pub fn paths(&self) -> &[PathBuf] {
        match self {
            Selection::Single(p) => std::slice::from_ref(p),
            Selection::Multiple(v) => v,
            Selection::Cancelled => &[],
        }
    }

    pub fn into_paths(self) -> Vec<PathBuf> {
        match self {
            Selection::Single(p) => vec![p],
            Selection::Multiple(v) => v,
            Selection::Cancelled => Vec::new(),
        }
    }

    /// The path of a single-item selection.
    pub fn single(&self) -> Option<&Path> {
        match self {
            Selection::Single(p) => Some(p.as_path()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_multi_selection_is_a_cancel() {
        assert_eq!(Selection::from_many(Some(Vec::new())), Selection::Cancelled);
        assert_eq!(Selection::from_many(None), Selection::Cancelled);
        assert_eq!(Selection::from_single(None), Selection::Cancelled);
    }

    #[test]
    fn one_file_in_multi_mode_stays_a_list() {
        let sel = Selection::from_many(Some(vec![PathBuf::from(r"C:\a.txt")]));
        assert_eq!(sel, Selection::Multiple(vec![PathBuf::from(r"C:\a.txt")]));
        assert!(sel.single().is_none());
        assert_eq!(sel.paths().len(), 1);
    }

    #[test]
    fn cancelled_has_no_paths() {
        let sel = Selection::Cancelled;
        assert!(sel.is_cancelled());
        assert!(sel.paths().is_empty());
        assert!(sel.into_paths().is_empty());
    }

    #[test]
    fn json_shape_is_tagged() {
        let single = serde_json::to_value(Selection::Single(PathBuf::from("/data/report.csv"))).unwrap();
        assert_eq!(
            single,
            serde_json::json!({ "status": "single", "paths": "/data/report.csv" })
        );

        let multi = serde_json::to_value(Selection::Multiple(vec![
            PathBuf::from("/a.txt"),
            PathBuf::from("/b.txt"),
        ]))
        .unwrap();
        assert_eq!(
            multi,
            serde_json::json!({ "status": "multiple", "paths": ["/a.txt", "/b.txt"] })
        );

        let cancelled = serde_json::to_value(Selection::Cancelled).unwrap();
        assert_eq!(cancelled, serde_json::json!({ "status": "cancelled" }));
    }

    #[cfg(unix)]
    #[test]
    fn non_unicode_paths_still_serialize() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let odd = PathBuf::from(OsStr::from_bytes(b"/data/r\xE9port.csv"));
        let single = serde_json::to_value(Selection::Single(odd.clone())).unwrap();
        assert_eq!(single["paths"], "/data/r\u{FFFD}port.csv");

        let multi = serde_json::to_value(Selection::Multiple(vec![PathBuf::from("/a.txt"), odd]))
            .unwrap();
        assert_eq!(
            multi["paths"],
            serde_json::json!(["/a.txt", "/data/r\u{FFFD}port.csv"])
        );
    }
}
