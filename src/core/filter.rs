//! core::filter
//!
//! Extension allow-lists and the filter that applies them.
//!
//! # Matching
//!
//! A path matches when the text after the last `.` of its file name,
//! prefixed with `.`, is in the allow-list. Matching is case-sensitive, and a
//! file name consisting only of a dot-prefixed stem (such as `.c`) has no
//! extension.
//!
//! # Example
//!
//! ```
//! use clang_sweep::core::filter::{retain_extensions, TIDY_EXTENSIONS};
//! use std::path::PathBuf;
//!
//! let paths = vec![
//!     PathBuf::from("src/main.cpp"),
//!     PathBuf::from("src/main.h"),
//!     PathBuf::from("README.md"),
//! ];
//! let kept = retain_extensions(paths, TIDY_EXTENSIONS);
//! assert_eq!(kept, vec![PathBuf::from("src/main.cpp")]);
//! ```

use std::path::{Path, PathBuf};

/// Suffixes checked by the formatter: C/C++ sources and headers.
pub const FORMAT_EXTENSIONS: &[&str] = &[
    ".c", ".h", ".cpp", ".cc", ".cxx", ".hpp", ".hh", ".hxx", ".c++", ".h++",
];

/// Suffixes checked by the static analyzer: translation units only.
pub const TIDY_EXTENSIONS: &[&str] = &[".c", ".cpp", ".cc", ".cxx", ".c++"];

/// Check whether a path's extension is in the allow-list.
pub fn has_allowed_extension(path: &Path, allowed: &[&str]) -> bool {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };

    allowed
        .iter()
        .any(|suffix| suffix.strip_prefix('.') == Some(ext))
}

/// Keep only paths whose extension is allowed, preserving order.
pub fn retain_extensions(paths: Vec<PathBuf>, allowed: &[&str]) -> Vec<PathBuf> {
    paths
        .into_iter()
        .filter(|p| has_allowed_extension(p, allowed))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(items: &[&str]) -> Vec<PathBuf> {
        items.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn format_list_has_ten_entries() {
        assert_eq!(FORMAT_EXTENSIONS.len(), 10);
    }

    #[test]
    fn tidy_list_excludes_headers() {
        assert_eq!(TIDY_EXTENSIONS.len(), 5);
        for header in [".h", ".hpp", ".hh", ".hxx", ".h++"] {
            assert!(!TIDY_EXTENSIONS.contains(&header));
        }
    }

    #[test]
    fn keeps_matching_in_order() {
        let input = paths(&["z.cc", "doc.md", "a.c++", "b.h", "m.cxx"]);
        let kept = retain_extensions(input, TIDY_EXTENSIONS);
        assert_eq!(kept, paths(&["z.cc", "a.c++", "m.cxx"]));
    }

    #[test]
    fn headers_kept_for_format() {
        let input = paths(&["a.cpp", "b.h", "c.h++", "d.txt"]);
        let kept = retain_extensions(input, FORMAT_EXTENSIONS);
        assert_eq!(kept, paths(&["a.cpp", "b.h", "c.h++"]));
    }

    #[test]
    fn extension_match_is_case_sensitive() {
        assert!(!has_allowed_extension(Path::new("MAIN.CPP"), FORMAT_EXTENSIONS));
        assert!(!has_allowed_extension(Path::new("x.C"), FORMAT_EXTENSIONS));
    }

    #[test]
    fn only_last_extension_counts() {
        assert!(has_allowed_extension(Path::new("gen.pb.cc"), TIDY_EXTENSIONS));
        assert!(!has_allowed_extension(Path::new("main.cpp.orig"), TIDY_EXTENSIONS));
    }

    #[test]
    fn dotfile_has_no_extension() {
        assert!(!has_allowed_extension(Path::new("dir/.c"), FORMAT_EXTENSIONS));
        assert!(!has_allowed_extension(Path::new("Makefile"), FORMAT_EXTENSIONS));
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(retain_extensions(Vec::new(), FORMAT_EXTENSIONS).is_empty());
    }
}
