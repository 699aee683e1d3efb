use std::io::{self, BufRead, Write};

use colored::Colorize;

/// The interactive surface the workflow talks to: a single-select menu,
/// line prompts, and two visually distinct status styles. Returning `None`
/// from `select` or `input` means the user dismissed the prompt.
pub trait Prompter {
    fn select(&self, placeholder: &str, items: &[&str]) -> Option<usize>;

    /// Request a line of text. `initial` seeds the prompt the way an
    /// editable input box would be pre-filled.
    fn input(&self, placeholder: &str, initial: Option<&str>) -> Option<String>;

    fn success(&self, message: &str);

    fn error(&self, message: &str);
}

/// Prompter reading from stdin and writing to stdout.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn read_line() -> Option<String> {
        let mut line = String::new();
        let bytes = io::stdin().lock().read_line(&mut line).ok()?;
        if bytes == 0 {
            // EOF counts as dismissing the prompt
            return None;
        }
        Some(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl Prompter for TerminalPrompter {
    fn select(&self, placeholder: &str, items: &[&str]) -> Option<usize> {
        println!();
        println!("{placeholder}");
        for (index, item) in items.iter().enumerate() {
            println!("  {}) {item}", index + 1);
        }
        loop {
            print!("> ");
            io::stdout().flush().ok()?;
            let line = Self::read_line()?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            match trimmed.parse::<usize>() {
                Ok(n) if (1..=items.len()).contains(&n) => return Some(n - 1),
                _ => println!("enter a number between 1 and {}", items.len()),
            }
        }
    }

    fn input(&self, placeholder: &str, initial: Option<&str>) -> Option<String> {
        match initial {
            Some(seed) if !seed.is_empty() => {
                println!("{placeholder} (enter keeps: {seed})");
            }
            _ => println!("{placeholder}"),
        }
        print!("> ");
        io::stdout().flush().ok()?;
        let value = Self::read_line()?;
        if value.is_empty() {
            // A blank line submits the seed untouched, like an input box
            // whose pre-filled text was accepted as-is.
            if let Some(seed) = initial {
                return Some(seed.to_string());
            }
        }
        Some(value)
    }

    fn success(&self, message: &str) {
        println!("✅ {}", message.green());
    }

    fn error(&self, message: &str) {
        eprintln!("🚫 {}", message.red());
    }
}
