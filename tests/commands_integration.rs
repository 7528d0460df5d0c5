//! Integration tests for the format and tidy commands.
//!
//! These tests drive the command handlers against real git repositories.
//! Small shell scripts stand in for clang-format and clang-tidy so the
//! tests do not depend on an LLVM installation.

#![cfg(unix)]

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

use clang_sweep::cli::args::{FormatArgs, TidyArgs};
use clang_sweep::cli::commands;
use clang_sweep::engine::Context;

/// Formatter stand-in: the canonical style has no trailing whitespace.
const FAKE_CLANG_FORMAT: &str = r#"
inplace=0
file=""
for arg in "$@"; do
  case "$arg" in
    -i) inplace=1 ;;
    -style=*) ;;
    *) file="$arg" ;;
  esac
done
if [ "$inplace" = 1 ]; then
  sed 's/[[:space:]]*$//' "$file" > "$file.fmt" && mv "$file.fmt" "$file"
else
  sed 's/[[:space:]]*$//' "$file"
fi
"#;

/// Formatter stand-in that always complains on stderr.
const NOISY_CLANG_FORMAT: &str = r#"
for arg in "$@"; do file="$arg"; done
cat "$file"
echo "warning: configuration not found" >&2
"#;

/// Analyzer stand-in: prints its arguments, fails files named *bad*.
const FAKE_CLANG_TIDY: &str = r#"
for arg in "$@"; do file="$arg"; done
echo "analyzed $file"
case "$file" in
  *bad*) exit 1 ;;
esac
exit 0
"#;

/// Test fixture that creates a real git repository with C/C++ sources.
struct TestRepo {
    dir: TempDir,
    tools: TempDir,
}

impl TestRepo {
    /// Create a repository with the given files committed.
    fn with_files(files: &[(&str, &str)]) -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let tools = TempDir::new().expect("failed to create temp dir");

        run_git(dir.path(), &["init"]);
        run_git(dir.path(), &["config", "user.email", "test@example.com"]);
        run_git(dir.path(), &["config", "user.name", "Test User"]);

        let repo = Self { dir, tools };
        for (path, content) in files {
            repo.write(path, content);
            run_git(repo.path(), &["add", path]);
        }
        run_git(repo.path(), &["commit", "-m", "Initial commit"]);
        repo
    }

    /// Get the path to the repository.
    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn write(&self, path: &str, content: &str) {
        let full = self.path().join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full, content).unwrap();
    }

    fn read(&self, path: &str) -> String {
        std::fs::read_to_string(self.path().join(path)).unwrap()
    }

    /// Install a tool script outside the repository and return the command
    /// that runs it.
    fn tool(&self, name: &str, script: &str) -> String {
        let path = self.tools.path().join(name);
        std::fs::write(&path, script).unwrap();
        format!("sh {}", path.display())
    }

    /// Context with text output silenced.
    fn context(&self) -> Context {
        Context {
            cwd: None,
            debug: false,
            quiet: true,
            json: false,
        }
    }

    fn format_args(&self, tool: String, apply: bool) -> FormatArgs {
        FormatArgs {
            clang_format_path: tool,
            project_src_path: self.path().to_path_buf(),
            verbose: false,
            apply,
            style: None,
            revision: None,
        }
    }

    fn tidy_args(&self, tool: String, apply: bool) -> TidyArgs {
        TidyArgs {
            clang_tidy_path: tool,
            project_src_path: self.path().to_path_buf(),
            project_build_path: PathBuf::from("build"),
            verbose: false,
            apply,
            header_filter: None,
            revision: None,
        }
    }
}

/// Run a git command in the given directory.
fn run_git(dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("git command failed");

    if !output.status.success() {
        panic!(
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
    }
}

// =============================================================================
// format
// =============================================================================

#[test]
fn format_check_passes_for_clean_files() {
    let repo = TestRepo::with_files(&[("a.cpp", "int main() {}\n"), ("b.h", "int x;\n")]);
    let tool = repo.tool("clang-format", FAKE_CLANG_FORMAT);

    let passed = commands::format(&repo.context(), &repo.format_args(tool, false)).unwrap();
    assert!(passed);
}

#[test]
fn format_check_fails_and_leaves_file_untouched() {
    let repo = TestRepo::with_files(&[("a.cpp", "int main() {}\n"), ("b.h", "int x;   \n")]);
    let tool = repo.tool("clang-format", FAKE_CLANG_FORMAT);

    let passed = commands::format(&repo.context(), &repo.format_args(tool, false)).unwrap();
    assert!(!passed);
    assert_eq!(repo.read("b.h"), "int x;   \n");
}

#[test]
fn format_apply_then_verify_converges() {
    let repo = TestRepo::with_files(&[("a.cpp", "int main() {} \n"), ("b.h", "int x;   \n")]);
    let tool = repo.tool("clang-format", FAKE_CLANG_FORMAT);

    let passed =
        commands::format(&repo.context(), &repo.format_args(tool.clone(), true)).unwrap();
    assert!(passed);
    assert_eq!(repo.read("a.cpp"), "int main() {}\n");
    assert_eq!(repo.read("b.h"), "int x;\n");

    // A later check agrees with the verifying pass.
    let passed = commands::format(&repo.context(), &repo.format_args(tool, false)).unwrap();
    assert!(passed);
}

#[test]
fn format_apply_fails_when_tool_stays_noisy() {
    let repo = TestRepo::with_files(&[("a.cpp", "int main() {}\n")]);
    let tool = repo.tool("clang-format", NOISY_CLANG_FORMAT);

    let passed = commands::format(&repo.context(), &repo.format_args(tool, true)).unwrap();
    assert!(!passed);
}

#[test]
fn format_ignores_other_extensions() {
    // Only the markdown file is misformatted; it is never handed to the tool.
    let repo = TestRepo::with_files(&[("a.cpp", "int main() {}\n"), ("notes.md", "text   \n")]);
    let tool = repo.tool("clang-format", FAKE_CLANG_FORMAT);

    let passed = commands::format(&repo.context(), &repo.format_args(tool, true)).unwrap();
    assert!(passed);
    assert_eq!(repo.read("notes.md"), "text   \n");
}

#[test]
fn format_ignores_untracked_files() {
    let repo = TestRepo::with_files(&[("a.cpp", "int main() {}\n")]);
    repo.write("scratch.cpp", "int y;   \n");
    let tool = repo.tool("clang-format", FAKE_CLANG_FORMAT);

    let passed = commands::format(&repo.context(), &repo.format_args(tool, false)).unwrap();
    assert!(passed);
}

#[test]
fn format_outside_repository_is_fatal() {
    let dir = TempDir::new().unwrap();
    let args = FormatArgs {
        clang_format_path: "clang-format".to_string(),
        project_src_path: dir.path().to_path_buf(),
        verbose: false,
        apply: false,
        style: None,
        revision: None,
    };
    let ctx = Context {
        quiet: true,
        ..Default::default()
    };

    assert!(commands::format(&ctx, &args).is_err());
}

#[test]
fn format_rejects_malformed_project_config() {
    let repo = TestRepo::with_files(&[("a.cpp", "int main() {}\n")]);
    repo.write(".clang-sweep.toml", "[format]\nunknown = 1\n");
    let tool = repo.tool("clang-format", FAKE_CLANG_FORMAT);

    let err = commands::format(&repo.context(), &repo.format_args(tool, false)).unwrap_err();
    assert!(format!("{:#}", err).contains("configuration"));
}

// =============================================================================
// tidy
// =============================================================================

#[test]
fn tidy_passes_when_every_file_exits_cleanly() {
    let repo = TestRepo::with_files(&[("good.cpp", "int g;\n"), ("also_good.c", "int a;\n")]);
    let tool = repo.tool("clang-tidy", FAKE_CLANG_TIDY);

    let passed = commands::tidy(&repo.context(), &repo.tidy_args(tool, false)).unwrap();
    assert!(passed);
}

#[test]
fn tidy_fails_when_one_file_fails() {
    let repo = TestRepo::with_files(&[("bad.cc", "int b;\n"), ("good.cpp", "int g;\n")]);
    let tool = repo.tool("clang-tidy", FAKE_CLANG_TIDY);

    let passed = commands::tidy(&repo.context(), &repo.tidy_args(tool, false)).unwrap();
    assert!(!passed);
}

#[test]
fn tidy_skips_headers() {
    // A header named *bad* would fail if it were analyzed.
    let repo = TestRepo::with_files(&[("bad.h", "int b;\n"), ("good.cpp", "int g;\n")]);
    let tool = repo.tool("clang-tidy", FAKE_CLANG_TIDY);

    let passed = commands::tidy(&repo.context(), &repo.tidy_args(tool, true)).unwrap();
    assert!(passed);
}

#[test]
fn tidy_with_no_matching_files_passes() {
    let repo = TestRepo::with_files(&[("README.md", "# readme\n")]);
    let tool = repo.tool("clang-tidy", FAKE_CLANG_TIDY);

    let passed = commands::tidy(&repo.context(), &repo.tidy_args(tool, false)).unwrap();
    assert!(passed);
}
