/// Conventional commit categories and the emoji each message is prefixed
/// with.
pub const CATEGORY_EMOJI: [(&str, &str); 7] = [
    ("docs", "📝"),
    ("feat", "✨"),
    ("fix", "🐛"),
    ("style", "🎨"),
    ("refactor", "🔨"),
    ("chore", "🚀"),
    ("config", "⚙️"),
];

/// Builds the instruction sent to the model: role statement, the category
/// table, a worked example, the one-liner output directive, the optional
/// user context, and the combined diff.
#[must_use]
pub fn build_instruction(user_context: &str, combined_diff: &str) -> String {
    let categories = CATEGORY_EMOJI
        .iter()
        .map(|(category, emoji)| format!("'{category}': '{emoji}'"))
        .collect::<Vec<_>>()
        .join(",\n");

    let context = if user_context.is_empty() {
        String::new()
    } else {
        format!("Additional context from user: {user_context}")
    };

    format!(
        "Act as a professional developer following conventional commit guidelines.\n\
         ###Instruction###\n\
         Generate a conventional commit message with emojis based on the changes given below. \
         Use the following categories and emojis:\n\
         {categories}.\n\
         For example: 📝 docs(README.md): add installation method with docker.\n\
         Respond with a one-liner commit message directly, Only include the commit msg starting with the emoji.\n\
         ###Context###\n\
         {context}\n\
         Changes:\n\
         {combined_diff}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_all_seven_category_mappings() {
        let instruction = build_instruction("", "diff --git a/x b/x");
        for (category, emoji) in CATEGORY_EMOJI {
            assert!(
                instruction.contains(&format!("'{category}': '{emoji}'")),
                "missing mapping for {category}"
            );
        }
    }

    #[test]
    fn embeds_context_only_when_non_empty() {
        let without = build_instruction("", "some diff");
        assert!(!without.contains("Additional context from user:"));

        let with = build_instruction("touches the auth flow", "some diff");
        assert!(with.contains("Additional context from user: touches the auth flow"));
    }

    #[test]
    fn embeds_diff_after_changes_marker() {
        let instruction = build_instruction("", "diff --git a/x b/x\n+line");
        let marker = instruction.find("Changes:").unwrap();
        let diff = instruction.find("diff --git a/x b/x").unwrap();
        assert!(marker < diff);
    }

    #[test]
    fn directive_and_example_are_present() {
        let instruction = build_instruction("", "d");
        assert!(instruction.contains("📝 docs(README.md): add installation method with docker"));
        assert!(instruction.contains("one-liner commit message"));
    }
}
