//! Repository acquisition
//!
//! Shallow-clones a repository into a scratch directory, diffs its last
//! commit against the previous one and reads every changed `.json` file.
//! The scratch directory is a `TempDir` owned by the call, so it is removed
//! on every exit path.

use changedoc_core::errors::{ChangeDocError, Result};
use changedoc_core::{log_op_end, log_op_error, log_op_start};
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;

const MIN_COMMITS: u64 = 2;

/// Diff payload handed to the advisory in place of a `git_url`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AcquiredDiff {
    pub git_diff: String,
    pub json_files: Vec<JsonFile>,
}

/// A changed JSON file; `content` is the parsed document, or the text
/// `"Error reading file: <reason>"` when it could not be read or parsed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonFile {
    pub file_name: String,
    pub content: Value,
}

#[derive(Debug, Clone)]
pub struct RepositoryAcquirer {
    git_bin: PathBuf,
}

impl Default for RepositoryAcquirer {
    fn default() -> Self {
        Self::new("git")
    }
}

impl RepositoryAcquirer {
    pub fn new(git_bin: impl Into<PathBuf>) -> Self {
        Self {
            git_bin: git_bin.into(),
        }
    }

    /// Blocking acquisition.
    ///
    /// # Errors
    ///
    /// `Git` when a git command exits non-zero, `RepositoryTooShallow` when
    /// the clone has fewer than two commits, `Acquisition` for anything else
    /// (git missing, scratch directory unavailable).
    pub fn acquire(&self, git_url: &str) -> Result<AcquiredDiff> {
        let start = Instant::now();
        log_op_start!("acquire_repository");

        match self.acquire_inner(git_url) {
            Ok(diff) => {
                log_op_end!(
                    "acquire_repository",
                    duration_ms = start.elapsed().as_millis() as u64,
                    file_count = diff.json_files.len()
                );
                Ok(diff)
            }
            Err(e) => {
                log_op_error!(
                    "acquire_repository",
                    e.clone(),
                    duration_ms = start.elapsed().as_millis() as u64
                );
                Err(e)
            }
        }
    }

    /// [`acquire`](Self::acquire) on the blocking thread pool
    ///
    /// # Errors
    ///
    /// As for `acquire`, plus `Internal` if the blocking task panics.
    pub async fn acquire_async(&self, git_url: String) -> Result<AcquiredDiff> {
        let acquirer = self.clone();
        tokio::task::spawn_blocking(move || acquirer.acquire(&git_url))
            .await
            .map_err(|e| ChangeDocError::Internal {
                message: format!("acquisition task: {e}"),
            })?
    }

    fn acquire_inner(&self, git_url: &str) -> Result<AcquiredDiff> {
        let scratch = tempfile::Builder::new()
            .prefix("repo-")
            .tempdir()
            .map_err(|e| ChangeDocError::Acquisition {
                reason: format!("scratch directory: {e}"),
            })?;
        let repo = scratch.path().join("repo");
        let repo_arg = repo.to_string_lossy().into_owned();

        self.git(None, &["clone", "--depth", "2", git_url, &repo_arg])?;

        let count = self.git(Some(&repo), &["rev-list", "--count", "HEAD"])?;
        let commits = parse_count(&count)?;
        if commits < MIN_COMMITS {
            return Err(ChangeDocError::RepositoryTooShallow { commits });
        }

        let git_diff = self.git(Some(&repo), &["diff", "HEAD~1", "HEAD"])?;
        let names = self.git(Some(&repo), &["diff", "--name-only", "HEAD~1", "HEAD"])?;

        let json_files = names
            .lines()
            .filter(|name| !name.is_empty())
            .filter(|name| name.to_ascii_lowercase().ends_with(".json"))
            .map(|name| JsonFile {
                file_name: name.to_string(),
                content: read_json(&repo.join(name)),
            })
            .collect();

        Ok(AcquiredDiff {
            git_diff,
            json_files,
        })
    }

    /// Run git and return stdout.
    fn git(&self, repo: Option<&Path>, args: &[&str]) -> Result<String> {
        let mut command = Command::new(&self.git_bin);
        if let Some(repo) = repo {
            command.arg("-C").arg(repo);
        }
        let output = command
            .args(args)
            .output()
            .map_err(|e| ChangeDocError::Acquisition {
                reason: format!("failed to run {}: {e}", self.git_bin.display()),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        if output.status.success() {
            return Ok(stdout);
        }

        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        Err(ChangeDocError::Git {
            detail: if stderr.is_empty() { stdout } else { stderr },
        })
    }
}

fn parse_count(stdout: &str) -> Result<u64> {
    let trimmed = stdout.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed.parse().map_err(|_| ChangeDocError::Acquisition {
        reason: format!("unexpected commit count: {trimmed}"),
    })
}

fn read_json(path: &Path) -> Value {
    let parsed = std::fs::read_to_string(path)
        .map_err(|e| e.to_string())
        .and_then(|text| serde_json::from_str::<Value>(&text).map_err(|e| e.to_string()));
    match parsed {
        Ok(content) => content,
        Err(reason) => Value::String(format!("Error reading file: {reason}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("2\n"), Ok(2));
        assert_eq!(parse_count(""), Ok(0));
        assert!(parse_count("many").is_err());
    }

    #[test]
    fn test_read_json_reports_failures_inline() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.json");
        let bad = dir.path().join("bad.json");
        std::fs::write(&good, r#"{"k": [1]}"#).unwrap();
        std::fs::write(&bad, "{").unwrap();

        assert_eq!(read_json(&good), serde_json::json!({"k": [1]}));
        let bad_content = read_json(&bad);
        assert!(bad_content
            .as_str()
            .is_some_and(|s| s.starts_with("Error reading file: ")));
        let missing = read_json(&dir.path().join("missing.json"));
        assert!(missing
            .as_str()
            .is_some_and(|s| s.starts_with("Error reading file: ")));
    }

    #[test]
    fn test_missing_git_binary() {
        let acquirer = RepositoryAcquirer::new("/nonexistent/bin/git-for-tests");
        let err = acquirer.acquire("https://example.invalid/repo.git").unwrap_err();
        assert!(matches!(err, ChangeDocError::Acquisition { .. }));
    }
}
