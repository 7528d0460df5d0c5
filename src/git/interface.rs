//! git::interface
//!
//! Git interface implementation using git2.
//!
//! # Error Handling
//!
//! Git errors are categorized into typed variants:
//! - [`GitError::NotARepo`]: Not inside a Git repository
//! - [`GitError::BareRepo`]: Repository has no working directory
//! - [`GitError::RevisionNotFound`]: The revision to list does not resolve
//! - [`GitError::OutsideWorktree`]: Source root is not inside the working tree
//!
//! # Example
//!
//! ```ignore
//! use clang_sweep::git::Git;
//! use std::path::Path;
//!
//! let git = Git::open(Path::new("./src"))?;
//! for path in git.list_tracked_files(Path::new("./src"), "HEAD")? {
//!     println!("{}", path.display());
//! }
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors from Git operations.
#[derive(Debug, Error)]
pub enum GitError {
    /// Not inside a Git repository.
    #[error("not a git repository: {path}")]
    NotARepo {
        /// The path that was searched
        path: PathBuf,
    },

    /// Repository is bare (no working directory).
    #[error("bare repository not supported")]
    BareRepo,

    /// The revision does not resolve to a tree.
    #[error("revision not found: {revision}")]
    RevisionNotFound {
        /// The revision that was looked up
        revision: String,
    },

    /// The source root lies outside the repository's working tree.
    #[error("{path} is outside the working tree at {work_dir}")]
    OutsideWorktree {
        /// The source root
        path: PathBuf,
        /// The repository's working directory
        work_dir: PathBuf,
    },

    /// A tracked path cannot be represented on this platform.
    #[error("tracked path is not valid UTF-8: {path}")]
    UndecodablePath {
        /// The path, with invalid bytes replaced
        path: String,
    },

    /// Permission or filesystem error.
    #[error("repository access error: {message}")]
    AccessError {
        /// Description of the error
        message: String,
    },

    /// Internal git2 error.
    #[error("git error: {message}")]
    Internal {
        /// The error message
        message: String,
    },
}

impl GitError {
    /// Create a GitError from a git2::Error with context.
    fn from_git2(err: git2::Error, context: &str) -> Self {
        match err.code() {
            git2::ErrorCode::NotFound | git2::ErrorCode::UnbornBranch => {
                GitError::RevisionNotFound {
                    revision: context.to_string(),
                }
            }
            git2::ErrorCode::Locked => GitError::AccessError {
                message: format!("repository is locked: {}", err.message()),
            },
            _ => GitError::Internal {
                message: format!("{}: {}", context, err.message()),
            },
        }
    }
}

/// Git repository handle.
pub struct Git {
    repo: git2::Repository,
}

impl std::fmt::Debug for Git {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Git")
            .field("path", &self.repo.path())
            .finish()
    }
}

impl Git {
    /// Open a repository at or containing the given path.
    ///
    /// Uses `git2::Repository::discover`, so `path` can be any directory
    /// within the repository.
    ///
    /// # Errors
    ///
    /// - [`GitError::NotARepo`] if no repository is found
    /// - [`GitError::BareRepo`] if the repository has no working directory
    pub fn open(path: &Path) -> Result<Self, GitError> {
        let repo = git2::Repository::discover(path).map_err(|_| GitError::NotARepo {
            path: path.to_path_buf(),
        })?;

        if repo.is_bare() {
            return Err(GitError::BareRepo);
        }

        Ok(Self { repo })
    }

    /// List files tracked at `revision` under `root`.
    ///
    /// Reads the committed tree rather than the working tree: a file deleted
    /// from disk but still committed is listed, an untracked file is not.
    /// Each returned path is `root` (as given) joined with the file's path
    /// relative to `root`, in tree order. Submodules are skipped.
    ///
    /// # Errors
    ///
    /// - [`GitError::RevisionNotFound`] if `revision` does not resolve
    /// - [`GitError::OutsideWorktree`] if `root` is not inside the working tree
    /// - [`GitError::AccessError`] if `root` cannot be canonicalized
    pub fn list_tracked_files(
        &self,
        root: &Path,
        revision: &str,
    ) -> Result<Vec<PathBuf>, GitError> {
        let prefix = self.worktree_prefix(root)?;

        let tree = self
            .repo
            .revparse_single(revision)
            .and_then(|obj| obj.peel_to_tree())
            .map_err(|e| GitError::from_git2(e, revision))?;

        let mut files = Vec::new();
        let mut undecodable = None;
        let walked = tree.walk(git2::TreeWalkMode::PreOrder, |dir, entry| {
            if entry.kind() != Some(git2::ObjectType::Blob) {
                return git2::TreeWalkResult::Ok;
            }
            let Some(name) = entry_name(entry) else {
                undecodable = Some(format!(
                    "{}{}",
                    dir,
                    String::from_utf8_lossy(entry.name_bytes())
                ));
                return git2::TreeWalkResult::Abort;
            };

            let path = Path::new(dir).join(name);
            if let Ok(relative) = path.strip_prefix(&prefix) {
                files.push(root.join(relative));
            }
            git2::TreeWalkResult::Ok
        });
        if let Some(path) = undecodable {
            return Err(GitError::UndecodablePath { path });
        }
        walked.map_err(|e| GitError::from_git2(e, revision))?;

        tracing::debug!(
            root = %root.display(),
            revision,
            count = files.len(),
            "listed tracked files"
        );

        Ok(files)
    }

    /// Path of `root` relative to the working directory.
    fn worktree_prefix(&self, root: &Path) -> Result<PathBuf, GitError> {
        let work_dir = self.repo.workdir().ok_or(GitError::BareRepo)?;

        let canonical = |p: &Path| {
            p.canonicalize().map_err(|e| GitError::AccessError {
                message: format!("{}: {}", p.display(), e),
            })
        };
        let work_dir = canonical(work_dir)?;
        let root_abs = canonical(root)?;

        root_abs
            .strip_prefix(&work_dir)
            .map(Path::to_path_buf)
            .map_err(|_| GitError::OutsideWorktree {
                path: root.to_path_buf(),
                work_dir,
            })
    }
}

/// File name of a tree entry as a path component.
///
/// Git stores names as raw bytes; on Unix they map onto `OsStr` as-is.
#[cfg(unix)]
fn entry_name(entry: &git2::TreeEntry<'_>) -> Option<PathBuf> {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    Some(PathBuf::from(OsStr::from_bytes(entry.name_bytes())))
}

#[cfg(not(unix))]
fn entry_name(entry: &git2::TreeEntry<'_>) -> Option<PathBuf> {
    entry.name().map(PathBuf::from)
}
