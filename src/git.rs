use std::path::PathBuf;
use std::process::Command;
use tracing::{debug, instrument};

use crate::error::{Error, Result};
use crate::types::StatusEntry;

/// Trait defining the Git operations the commit workflow needs
pub trait Git {
    /// Check that the directory is inside a Git repository
    ///
    /// # Errors
    ///
    /// Returns `Error::NotARepository` if it is not
    fn assert_repository(&self) -> Result<()>;

    /// List changed file paths, newline separated
    ///
    /// # Errors
    ///
    /// Returns an error if the git command cannot be executed
    fn changed_files(&self) -> Result<String>;

    /// Porcelain status output, one line per path
    ///
    /// # Errors
    ///
    /// Returns an error if the git command cannot be executed
    fn status_lines(&self) -> Result<String>;

    /// Full unified diff of tracked changes
    ///
    /// # Errors
    ///
    /// Returns an error if the git command cannot be executed
    fn file_diffs(&self) -> Result<String>;

    /// Diff of a single path against an empty file
    ///
    /// # Errors
    ///
    /// Returns an error if the git command cannot be executed
    fn untracked_diff(&self, path: &str) -> Result<String>;

    /// Name of the currently checked out branch
    ///
    /// # Errors
    ///
    /// Returns an error if the git command cannot be executed
    fn current_branch(&self) -> Result<String>;

    /// Name of the first listed remote, or an empty string when none is
    /// configured
    ///
    /// # Errors
    ///
    /// Returns an error if the git command cannot be executed
    fn first_remote(&self) -> Result<String>;

    /// Stage every change in the working tree
    ///
    /// # Errors
    ///
    /// Returns an error if the git command cannot be executed
    fn stage_all(&self) -> Result<()>;

    /// Commit staged changes with the given message
    ///
    /// # Errors
    ///
    /// Returns an error if the git command fails, including when the
    /// message is empty and git rejects it
    fn commit(&self, message: &str) -> Result<()>;

    /// Push the branch to the given remote
    ///
    /// # Errors
    ///
    /// Returns an error if the git command cannot be executed
    fn push(&self, remote: &str, branch: &str) -> Result<()>;
}

/// Implementation of Git operations using the local Git CLI
pub struct GitCli {
    repo_path: PathBuf,
}

impl GitCli {
    /// Creates a new `GitCli` instance for the given repository path
    #[must_use]
    pub const fn new(repo_path: PathBuf) -> Self {
        Self { repo_path }
    }

    fn run_git(&self, args: &[&str]) -> Result<String> {
        self.run_git_allowing(args, &[0])
    }

    /// Runs git and accepts any of `ok_codes` as success. Output is
    /// returned exactly as produced, trailing newlines included.
    fn run_git_allowing(&self, args: &[&str], ok_codes: &[i32]) -> Result<String> {
        let command = format!("git {}", args.join(" "));
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.repo_path)
            .output()
            .map_err(|e| Error::CommandFailed {
                command: command.clone(),
                stderr: e.to_string(),
            })?;

        let code = output.status.code().unwrap_or(-1);
        if !ok_codes.contains(&code) {
            let stderr = String::from_utf8_lossy(&output.stderr).trim_end().to_string();
            debug!(command = %command, code, error = %stderr, "git command failed");
            return Err(Error::CommandFailed { command, stderr });
        }

        let result = String::from_utf8_lossy(&output.stdout).into_owned();
        debug!(command = %command, output_length = result.len(), "git command completed");
        Ok(result)
    }
}

impl Git for GitCli {
    #[instrument(skip(self), fields(repo_path = %self.repo_path.display()))]
    fn assert_repository(&self) -> Result<()> {
        self.run_git(&["rev-parse", "--show-toplevel"])
            .map_err(|_| Error::NotARepository(self.repo_path.display().to_string()))?;
        debug!("repository root resolved");
        Ok(())
    }

    fn changed_files(&self) -> Result<String> {
        self.run_git(&["diff", "--name-only"])
    }

    fn status_lines(&self) -> Result<String> {
        self.run_git(&["status", "--porcelain"])
    }

    fn file_diffs(&self) -> Result<String> {
        self.run_git(&["diff"])
    }

    #[instrument(skip(self), fields(path = %path))]
    fn untracked_diff(&self, path: &str) -> Result<String> {
        // `diff --no-index` exits 1 when the files differ, which is the
        // expected case here.
        self.run_git_allowing(&["diff", "--no-index", "/dev/null", path], &[0, 1])
    }

    fn current_branch(&self) -> Result<String> {
        Ok(self
            .run_git(&["branch", "--show-current"])?
            .trim()
            .to_string())
    }

    fn first_remote(&self) -> Result<String> {
        let output = self.run_git(&["remote", "-v"])?;
        Ok(output
            .lines()
            .next()
            .and_then(|line| line.split_whitespace().next())
            .unwrap_or_default()
            .to_string())
    }

    fn stage_all(&self) -> Result<()> {
        self.run_git(&["add", "."]).map(|_| ())
    }

    #[instrument(skip(self, message), fields(message_length = message.len()))]
    fn commit(&self, message: &str) -> Result<()> {
        self.run_git(&["commit", "-m", message]).map(|_| ())
    }

    #[instrument(skip(self))]
    fn push(&self, remote: &str, branch: &str) -> Result<()> {
        self.run_git(&["push", remote, branch]).map(|_| ())
    }
}

/// Fabricates diffs for paths that have no tracked diff yet.
///
/// Walks the porcelain status output and, for every untracked, modified, or
/// added entry, appends the path's diff against an empty file plus a
/// trailing newline. The result may be empty.
///
/// # Errors
///
/// Returns an error if any of the underlying diff commands fails.
#[instrument(skip(git, status_output))]
pub fn synthesize_untracked_diffs(git: &impl Git, status_output: &str) -> Result<String> {
    let mut diffs = String::new();
    for line in status_output.lines() {
        let Some(entry) = StatusEntry::parse(line) else {
            continue;
        };
        if entry.wants_synthesized_diff() {
            debug!(path = %entry.path, code = %entry.code, "synthesizing diff");
            let diff = git.untracked_diff(&entry.path)?;
            diffs.push_str(&diff);
            diffs.push('\n');
        }
    }
    Ok(diffs)
}
