/// A single parsed line of porcelain status output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEntry {
    /// The two-character status code with surrounding whitespace removed.
    pub code: String,
    pub path: String,
}

impl StatusEntry {
    /// Parses one porcelain status line: two status characters, a space,
    /// then the path.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let code = line.get(0..2)?.trim().to_string();
        let path = line.get(3..)?.trim().to_string();
        if path.is_empty() {
            return None;
        }
        Some(Self { code, path })
    }

    /// Whether this path has no tracked diff and needs one fabricated
    /// against an empty file. The code is matched in its trimmed form, so
    /// a single-column `M` or `A` qualifies alongside untracked `??`.
    #[must_use]
    pub fn wants_synthesized_diff(&self) -> bool {
        matches!(self.code.as_str(), "??" | "M" | "A")
    }
}

/// Diff text gathered for one generation attempt.
#[derive(Debug, Clone, Default)]
pub struct DiffBundle {
    /// Newline-separated list of changed file paths.
    pub files_changed: String,
    /// Unified diff of tracked changes.
    pub tracked: String,
    /// Synthesized diffs for paths git does not track yet.
    pub untracked: String,
}

impl DiffBundle {
    /// Tracked and untracked diff text joined by a newline.
    #[must_use]
    pub fn combined(&self) -> String {
        format!("{}\n{}", self.tracked, self.untracked)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.combined().trim().is_empty()
    }
}

/// The six actions offered on every iteration of the commit menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    UseCommit,
    Regenerate,
    AddToPrompt,
    Manual,
    Edit,
    Exit,
}

impl MenuChoice {
    pub const LABELS: [&'static str; 6] = [
        "Use Commit",
        "Regenerate",
        "Add to prompt",
        "Manual",
        "Edit",
        "Exit",
    ];

    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::UseCommit),
            1 => Some(Self::Regenerate),
            2 => Some(Self::AddToPrompt),
            3 => Some(Self::Manual),
            4 => Some(Self::Edit),
            5 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Commit types offered in manual entry mode.
pub const COMMIT_TYPES: [&str; 8] = [
    "fix", "feat", "docs", "style", "refactor", "test", "chore", "revert",
];

/// How an interactive run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The user accepted a message and it was committed and pushed.
    Committed(String),
    /// The user exited or dismissed the menu; nothing was committed.
    Aborted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_untracked_entry() {
        let entry = StatusEntry::parse("?? new_file.rs").unwrap();
        assert_eq!(entry.code, "??");
        assert_eq!(entry.path, "new_file.rs");
        assert!(entry.wants_synthesized_diff());
    }

    #[test]
    fn trims_single_column_codes() {
        let worktree_modified = StatusEntry::parse(" M src/lib.rs").unwrap();
        assert_eq!(worktree_modified.code, "M");
        assert!(worktree_modified.wants_synthesized_diff());

        let staged_added = StatusEntry::parse("A  src/new.rs").unwrap();
        assert_eq!(staged_added.code, "A");
        assert!(staged_added.wants_synthesized_diff());
    }

    #[test]
    fn skips_codes_with_both_columns_set() {
        let entry = StatusEntry::parse("MM src/lib.rs").unwrap();
        assert!(!entry.wants_synthesized_diff());

        let deleted = StatusEntry::parse(" D src/old.rs").unwrap();
        assert!(!deleted.wants_synthesized_diff());
    }

    #[test]
    fn rejects_short_lines() {
        assert!(StatusEntry::parse("").is_none());
        assert!(StatusEntry::parse("??").is_none());
        assert!(StatusEntry::parse("?? ").is_none());
    }

    #[test]
    fn bundle_with_only_whitespace_is_empty() {
        let bundle = DiffBundle {
            files_changed: "a.rs\n".to_string(),
            tracked: "  \n".to_string(),
            untracked: "\n".to_string(),
        };
        assert!(bundle.is_empty());
    }

    #[test]
    fn bundle_with_untracked_text_is_not_empty() {
        let bundle = DiffBundle {
            untracked: "diff --git a/x b/x".to_string(),
            ..DiffBundle::default()
        };
        assert!(!bundle.is_empty());
    }

    #[test]
    fn menu_labels_and_indices_agree() {
        assert_eq!(MenuChoice::from_index(0), Some(MenuChoice::UseCommit));
        assert_eq!(MenuChoice::from_index(5), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::from_index(6), None);
        assert_eq!(MenuChoice::LABELS.len(), 6);
    }
}
