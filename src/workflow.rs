use tracing::{debug, instrument};

use crate::error::{Error, Result};
use crate::git::{synthesize_untracked_diffs, Git};
use crate::ollama::MessageGenerator;
use crate::types::{DiffBundle, MenuChoice, Outcome, COMMIT_TYPES};
use crate::ui::Prompter;

/// Drives one interactive commit run: validate preconditions, generate a
/// message, loop over the menu until the user accepts or leaves, then
/// stage, commit, and push.
pub struct CommitWorkflow<'a, G, M, P> {
    git: &'a G,
    generator: &'a M,
    prompter: &'a P,
}

impl<'a, G, M, P> CommitWorkflow<'a, G, M, P>
where
    G: Git,
    M: MessageGenerator,
    P: Prompter,
{
    #[must_use]
    pub const fn new(git: &'a G, generator: &'a M, prompter: &'a P) -> Self {
        Self {
            git,
            generator,
            prompter,
        }
    }

    /// Runs the workflow to completion
    ///
    /// # Errors
    ///
    /// Returns an error when a precondition fails, generation fails, manual
    /// entry is abandoned part way, or a git command fails while committing
    #[instrument(skip(self))]
    pub fn run(&self) -> Result<Outcome> {
        self.git.assert_repository()?;
        self.generator.ensure_available()?;
        self.prompter.success("model service is running and reachable");

        let mut message = self.generate_message()?;
        if message.trim().is_empty() {
            return Err(Error::NoCommitMessage);
        }

        loop {
            let placeholder = format!("Commit message: {message}");
            let Some(index) = self.prompter.select(&placeholder, &MenuChoice::LABELS) else {
                debug!("menu dismissed");
                return Ok(Outcome::Aborted);
            };
            match MenuChoice::from_index(index) {
                Some(MenuChoice::UseCommit) => break,
                Some(MenuChoice::Regenerate) => message = self.generate_message()?,
                Some(MenuChoice::AddToPrompt) => {
                    if let Some(context) =
                        self.prompter.input("Enter additional input for the AI", None)
                    {
                        if !context.is_empty() {
                            message = self.generate_with_context(&context)?;
                        }
                    }
                }
                Some(MenuChoice::Manual) => message = self.manual_entry()?,
                Some(MenuChoice::Edit) => {
                    // The replacement is taken verbatim, an empty string
                    // included; git rejects an empty message at commit time.
                    if let Some(edited) =
                        self.prompter.input("Edit commit message", Some(&message))
                    {
                        message = edited;
                    }
                }
                Some(MenuChoice::Exit) | None => return Ok(Outcome::Aborted),
            }
        }

        self.commit_and_push(&message)?;
        Ok(Outcome::Committed(message))
    }

    /// Generates a message from the tracked diff, falling back to diffs
    /// synthesized from porcelain status when nothing tracked has changed.
    fn generate_message(&self) -> Result<String> {
        let files_changed = self.git.changed_files()?;
        let tracked = self.git.file_diffs()?;
        let bundle = if tracked.trim().is_empty() {
            let status = self.git.status_lines()?;
            let untracked = synthesize_untracked_diffs(self.git, &status)?;
            DiffBundle {
                files_changed,
                tracked,
                untracked,
            }
        } else {
            DiffBundle {
                files_changed,
                tracked,
                untracked: String::new(),
            }
        };
        self.generator.generate(&bundle, "")
    }

    /// Regenerates from the current tracked and synthesized diffs plus the
    /// user's extra context.
    fn generate_with_context(&self, user_context: &str) -> Result<String> {
        let bundle = DiffBundle {
            files_changed: self.git.changed_files()?,
            tracked: self.git.file_diffs()?,
            untracked: synthesize_untracked_diffs(self.git, &self.git.status_lines()?)?,
        };
        self.generator.generate(&bundle, user_context)
    }

    /// Walks the manual prompts: commit type, optional scope, summary
    /// (pre-seeded with `type(scope): `), and description. A dismissed or
    /// blank mandatory field aborts the run.
    fn manual_entry(&self) -> Result<String> {
        let type_index = self
            .prompter
            .select("Select commit type", &COMMIT_TYPES)
            .ok_or(Error::IncompleteManualEntry {
                field: "commit type",
            })?;
        let commit_type = COMMIT_TYPES[type_index];

        let scope = match self.prompter.input("scope", None) {
            Some(s) if !s.is_empty() => Some(s),
            _ => self
                .prompter
                .select("Select scope or enter a new one", &COMMIT_TYPES)
                .map(|index| COMMIT_TYPES[index].to_string()),
        };
        let scope_part = scope.map(|s| format!("({s})")).unwrap_or_default();

        let summary = self
            .prompter
            .input(
                "Summary of this change",
                Some(&format!("{commit_type}{scope_part}: ")),
            )
            .filter(|s| !s.is_empty())
            .ok_or(Error::IncompleteManualEntry { field: "summary" })?;

        let description = self
            .prompter
            .input("Details of this change", None)
            .filter(|s| !s.is_empty())
            .ok_or(Error::IncompleteManualEntry {
                field: "description",
            })?;

        Ok(format!("{summary}\n\n{description}"))
    }

    #[instrument(skip(self, message))]
    fn commit_and_push(&self, message: &str) -> Result<()> {
        let branch = self.git.current_branch()?;
        let remote = self.git.first_remote()?;
        debug!(branch = %branch, remote = %remote, "committing and pushing");

        self.git.stage_all()?;
        self.git.commit(message)?;
        self.git.push(&remote, &branch)?;

        self.prompter
            .success("Changes have been committed and pushed successfully.");
        Ok(())
    }
}
