pub use error::{Error, Result};
pub use git::{synthesize_untracked_diffs, Git, GitCli};
pub use ollama::{MessageGenerator, OllamaClient, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use prompt::{build_instruction, CATEGORY_EMOJI};
pub use types::{DiffBundle, MenuChoice, Outcome, StatusEntry, COMMIT_TYPES};
pub use ui::{Prompter, TerminalPrompter};
pub use workflow::CommitWorkflow;

use std::path::Path;

mod error;
mod git;
mod ollama;
mod prompt;
mod types;
mod ui;
pub mod workflow;

/// Runs one interactive commit against the repository at `repo_path`,
/// generating messages with the Ollama service at `base_url` using `model`
/// and prompting on the terminal.
///
/// # Errors
///
/// Returns an error if the path does not exist, the directory is not a Git
/// repository, the model service is unavailable, generation fails, or a git
/// command fails while committing.
pub fn commit_interactively(repo_path: &Path, base_url: &str, model: &str) -> Result<Outcome> {
    if !repo_path.exists() {
        return Err(Error::NoWorkspace(repo_path.display().to_string()));
    }

    let git = GitCli::new(repo_path.to_path_buf());
    let generator = OllamaClient::new(base_url, model);
    let prompter = TerminalPrompter::new();
    CommitWorkflow::new(&git, &generator, &prompter).run()
}
