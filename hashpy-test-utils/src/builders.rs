//! Builders for scripted interactive sessions

use hashpy_core::HashAlgorithm;
use std::path::Path;

/// Answer to the "Save to file?" prompt
#[derive(Debug, Clone)]
pub enum SaveChoice {
    /// Answer `n`
    No,
    /// Answer `y` and accept the default file name
    Default,
    /// Answer `y` and type a file name
    To(String),
}

impl SaveChoice {
    pub fn to_path(path: &Path) -> Self {
        Self::To(path.display().to_string())
    }
}

/// Line-by-line stdin for a shell session
///
/// Each method appends the answers the shell will ask for, in the order it
/// asks for them.
#[derive(Debug, Clone, Default)]
pub struct SessionScript {
    lines: Vec<String>,
}

impl SessionScript {
    /// Start a session answering the startup theme prompt with `choice`
    pub fn new(theme_choice: &str) -> Self {
        Self {
            lines: vec![theme_choice.to_string()],
        }
    }

    /// Start a session where the theme is already fixed by flag
    pub fn without_theme_prompt() -> Self {
        Self::default()
    }

    /// Menu option 1 with a valid algorithm
    pub fn single_hash(self, text: &str, algorithm: HashAlgorithm, save: SaveChoice) -> Self {
        self.push("1")
            .push(text)
            .push(algorithm.id())
            .save(save)
            .push("")
    }

    /// Menu option 1 with an algorithm the shell should reject
    pub fn single_hash_invalid(self, text: &str, algorithm: &str) -> Self {
        self.push("1").push(text).push(algorithm)
    }

    /// Menu option 2
    pub fn all_hashes(self, text: &str, save: SaveChoice) -> Self {
        self.push("2").push(text).save(save).push("")
    }

    /// Menu option 3 with a valid algorithm
    pub fn verify(self, text: &str, algorithm: HashAlgorithm, digest: &str) -> Self {
        self.push("3")
            .push(text)
            .push(algorithm.id())
            .push(digest)
            .push("")
    }

    /// Menu option 3 with an algorithm the shell should reject
    pub fn verify_invalid(self, text: &str, algorithm: &str) -> Self {
        self.push("3").push(text).push(algorithm)
    }

    /// Menu option 4
    pub fn change_theme(self, choice: &str) -> Self {
        self.push("4").push(choice)
    }

    /// Menu option 5
    pub fn about(self) -> Self {
        self.push("5").push("")
    }

    /// Any raw menu input
    pub fn menu(self, choice: &str) -> Self {
        self.push(choice)
    }

    /// Menu option 6
    pub fn exit(self) -> Self {
        self.push("6")
    }

    /// Render as newline-terminated stdin content
    pub fn build(&self) -> String {
        self.lines.iter().map(|line| format!("{line}\n")).collect()
    }

    fn save(self, save: SaveChoice) -> Self {
        match save {
            SaveChoice::No => self.push("n"),
            SaveChoice::Default => self.push("y").push(""),
            SaveChoice::To(name) => self.push("y").push(&name),
        }
    }

    fn push(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }
}
