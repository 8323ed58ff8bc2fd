//! Interactive menu loop
//!
//! The shell reads one answer per line from any [`BufRead`] and writes to any
//! [`Write`], so a whole session can be driven from a byte buffer. Menu and
//! algorithm answers are parsed before any digest is computed.

use crate::banner;
use crate::config::AppConfig;
use crate::effects::Effects;
use crate::terminal;
use crate::theme::{Role, ThemeName, ThemeProfile};
use hashpy_core::{
    DigestResult, HashAlgorithm, LogEntries, Verification, append_record, compute_all_digests,
    verify,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Pause after an invalid algorithm so the warning can be read
const INVALID_CHOICE_PAUSE: Duration = Duration::from_millis(1500);

const ALGORITHM_PROMPT: &str = "(sha256 / sha512 / sha1 / md5): ";

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user picked "Exit"
    Exited,
    /// Input reached end of file before the user exited
    InputClosed,
}

/// Failure that stopped a session before it ended normally
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Failed to read input")]
    Input(#[source] io::Error),

    #[error("Failed to write to the terminal")]
    Output(#[source] io::Error),
}

#[derive(Error, Debug)]
enum ShellError {
    #[error("input closed")]
    InputClosed,

    #[error("read failed: {0}")]
    Input(io::Error),

    #[error(transparent)]
    Output(#[from] io::Error),
}

type ShellResult<T> = Result<T, ShellError>;

/// Menu entries in the order they are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    SingleHash,
    AllHashes,
    Verify,
    ChangeTheme,
    About,
    Exit,
}

impl MenuChoice {
    /// Parse the number typed at the menu prompt
    pub fn from_input(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::SingleHash),
            "2" => Some(MenuChoice::AllHashes),
            "3" => Some(MenuChoice::Verify),
            "4" => Some(MenuChoice::ChangeTheme),
            "5" => Some(MenuChoice::About),
            "6" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Everything the shell needs besides its input and output
#[derive(Debug, Clone)]
pub struct ShellSettings {
    /// Theme used until the user picks another
    pub theme: ThemeName,
    /// Ask for a theme before showing the menu
    pub prompt_for_theme: bool,
    pub effects: Effects,
    /// Log file used when the save prompt is left empty
    pub default_log_file: PathBuf,
    pub clear_screen: bool,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            theme: ThemeName::Dark,
            prompt_for_theme: true,
            effects: Effects::disabled(),
            default_log_file: PathBuf::from(hashpy_core::DEFAULT_LOG_FILE),
            clear_screen: false,
        }
    }
}

impl ShellSettings {
    /// Build settings from loaded configuration
    ///
    /// Animations and screen clearing only happen on an interactive terminal.
    pub fn from_config(config: &AppConfig, prompt_for_theme: bool, interactive: bool) -> Self {
        let effects = Effects::new(
            config.shell.animations_enabled && interactive,
            Duration::from_millis(config.shell.typing_delay_ms),
            Duration::from_millis(config.shell.progress_duration_ms),
        );

        Self {
            theme: config.shell.theme,
            prompt_for_theme,
            effects,
            default_log_file: config.output.log_file.clone(),
            clear_screen: interactive,
        }
    }
}

/// Interactive hashing session
pub struct Shell<R, W> {
    input: R,
    output: W,
    theme: ThemeProfile,
    settings: ShellSettings,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, settings: ShellSettings) -> Self {
        Self {
            input,
            output,
            theme: ThemeProfile::for_name(settings.theme),
            settings,
        }
    }

    /// Theme currently in effect
    pub fn theme(&self) -> &ThemeProfile {
        &self.theme
    }

    /// Consume the shell and return its output sink
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the menu loop until the user exits or input ends
    pub fn run(&mut self) -> Result<SessionEnd, SessionError> {
        log::debug!("Interactive session started");
        let outcome = match self.run_session() {
            Ok(()) => Ok(SessionEnd::Exited),
            Err(ShellError::InputClosed) => Ok(SessionEnd::InputClosed),
            Err(ShellError::Input(e)) => Err(SessionError::Input(e)),
            Err(ShellError::Output(e)) => Err(SessionError::Output(e)),
        };
        self.output.flush().map_err(SessionError::Output)?;
        log::debug!("Interactive session ended: {outcome:?}");
        outcome
    }

    fn run_session(&mut self) -> ShellResult<()> {
        if self.settings.prompt_for_theme {
            self.select_theme()?;
        }

        loop {
            self.show_banner()?;

            let Some(choice) = self.main_menu()? else {
                continue;
            };
            log::debug!("Menu choice: {choice:?}");

            match choice {
                MenuChoice::SingleHash => self.single_hash()?,
                MenuChoice::AllHashes => self.all_hashes()?,
                MenuChoice::Verify => self.verify()?,
                MenuChoice::ChangeTheme => self.select_theme()?,
                MenuChoice::About => self.about()?,
                MenuChoice::Exit => {
                    self.farewell()?;
                    return Ok(());
                }
            }
        }
    }

    fn select_theme(&mut self) -> ShellResult<()> {
        writeln!(
            self.output,
            "{}",
            self.theme.paint(Role::Info, "Select theme ↓")
        )?;
        writeln!(self.output, "[1] Dark Mode")?;
        writeln!(self.output, "[2] Light Mode")?;
        let choice = self.read_line("> ")?;

        let name = ThemeName::from_choice(&choice);
        self.theme = ThemeProfile::for_name(name);
        log::debug!("Theme set to {name}");
        Ok(())
    }

    fn show_banner(&mut self) -> ShellResult<()> {
        if self.settings.clear_screen {
            self.output.flush()?;
            terminal::clear_screen();
        }
        let banner = banner::render(&self.theme, banner::random_quote());
        writeln!(self.output, "{banner}")?;
        Ok(())
    }

    fn main_menu(&mut self) -> ShellResult<Option<MenuChoice>> {
        let theme = &self.theme;
        writeln!(
            self.output,
            "{}",
            theme.paint(
                Role::Success,
                "Welcome to Hash_Py, your secure & stylish hashing companion."
            )
        )?;
        writeln!(self.output, "Choose your mission:\n")?;

        let entries = [
            "Create a single hash",
            "Generate all hash types",
            "Verify a hash",
            "Change Theme",
            "About",
            "Exit",
        ];
        for (number, entry) in entries.iter().enumerate() {
            let label = format!("[{}]", number + 1);
            writeln!(self.output, "{} {entry}", theme.paint(Role::Accent, &label))?;
        }
        writeln!(self.output)?;

        let prompt = self.theme.paint(Role::Info, "Your choice → ").to_string();
        let input = self.read_line(&prompt)?;
        let choice = MenuChoice::from_input(&input);
        if choice.is_none() {
            self.invalid_choice()?;
        }
        Ok(choice)
    }

    fn single_hash(&mut self) -> ShellResult<()> {
        let text = self.prompt(Role::Info, "\nEnter text to hash: ")?;
        let Some(algorithm) = self.prompt_algorithm("Algorithm ")? else {
            self.settings.effects.pause(INVALID_CHOICE_PAUSE);
            return Ok(());
        };

        self.progress(self.settings.effects.progress_duration())?;
        let start = Instant::now();
        let result = DigestResult::compute(&text, algorithm);
        let elapsed = start.elapsed();

        writeln!(
            self.output,
            "\n{}",
            self.theme.paint(Role::Success, "✔ Hash Generated Successfully!")
        )?;
        self.field("Algorithm:", algorithm.display_name())?;
        self.field("Hash:", result.digest())?;
        self.field("Time:", &format!("{:.5}s", elapsed.as_secs_f64()))?;

        self.offer_save(&text, result)?;
        self.wait_for_enter("\nPress Enter to continue...")
    }

    fn all_hashes(&mut self) -> ShellResult<()> {
        let text = self.prompt(Role::Info, "\nEnter text to hash: ")?;

        self.progress(self.settings.effects.progress_duration())?;
        let start = Instant::now();
        let digests = compute_all_digests(&text);
        let elapsed = start.elapsed();

        writeln!(
            self.output,
            "\n{}",
            self.theme.paint(Role::Success, "All Hashes Generated ↓")
        )?;
        for result in &digests {
            let name = format!("{:<8}", result.algorithm().display_name());
            writeln!(
                self.output,
                "{}: {}",
                self.theme.paint(Role::Info, &name),
                result.digest()
            )?;
        }
        writeln!(self.output, "\n⏱ Time taken: {:.5}s", elapsed.as_secs_f64())?;

        self.offer_save(&text, digests)?;
        self.wait_for_enter("\nPress Enter to continue...")
    }

    fn verify(&mut self) -> ShellResult<()> {
        let text = self.prompt(Role::Info, "\nEnter original text: ")?;
        let Some(algorithm) = self.prompt_algorithm("Algorithm used ")? else {
            return Ok(());
        };
        let claimed = self.prompt(Role::Info, "Enter hash to verify: ")?;

        self.progress(self.settings.effects.verify_duration())?;
        let message = match verify(&text, &claimed, algorithm) {
            Verification::Match => self
                .theme
                .paint(Role::Success, "✅ Verified! The hash matches perfectly."),
            Verification::Mismatch => self
                .theme
                .paint(Role::Error, "❌ Verification failed. Hashes don’t match."),
            Verification::ComputeError(err) => self.theme.paint(
                Role::Error,
                &format!("⚠ Could not compute a digest to compare: {err}"),
            ),
        };
        writeln!(self.output, "{message}")?;

        self.wait_for_enter("\nPress Enter to continue...")
    }

    fn about(&mut self) -> ShellResult<()> {
        self.show_banner()?;
        let effects = self.settings.effects;
        let lines = [
            self.theme
                .paint(Role::Info, "Hash_Py is your comfortable yet powerful hashing lab.")
                .to_string(),
            "Built for coders who love clean design and secure logic.".to_string(),
            "Where simplicity meets power ⚡".to_string(),
        ];
        for line in lines {
            effects.slow_print(&mut self.output, &line)?;
        }
        self.wait_for_enter("\nPress Enter to return...")
    }

    fn farewell(&mut self) -> ShellResult<()> {
        if self.settings.clear_screen {
            self.output.flush()?;
            terminal::clear_screen();
        }
        let effects = self.settings.effects;
        let shutdown = self.theme.paint(Role::Accent, "Shutting down Hash_Py...");
        let goodbye = self
            .theme
            .paint(Role::Success, "Goodbye, Guardian of Hashes 👋");
        effects.slow_print(&mut self.output, &shutdown.to_string())?;
        effects.slow_print(&mut self.output, &goodbye.to_string())?;
        Ok(())
    }

    /// Ask whether to save, then append to the chosen log file
    ///
    /// A failed save is reported and the session carries on.
    fn offer_save(&mut self, text: &str, results: impl Into<LogEntries>) -> ShellResult<()> {
        let answer = self.prompt_choice(Role::Accent, "\nSave to file? (y/n): ", &["y", "n"])?;
        if answer.as_deref() != Some("y") {
            return Ok(());
        }

        let name = self.prompt(Role::Info, "Enter filename (leave empty for default): ")?;
        let name = name.trim();
        let destination = if name.is_empty() {
            self.settings.default_log_file.clone()
        } else {
            PathBuf::from(name)
        };

        match append_record(text, results, Some(&destination)) {
            Ok(path) => writeln!(
                self.output,
                "{}",
                self.theme.paint(
                    Role::Success,
                    &format!("✔ Output saved to {}", path.display())
                )
            )?,
            Err(err) => {
                log::warn!("Save failed: {err}");
                writeln!(
                    self.output,
                    "{}",
                    self.theme
                        .paint(Role::Error, &format!("✖ Could not save output: {err}"))
                )?
            }
        }
        Ok(())
    }

    /// Read an algorithm name; `None` after telling the user it was invalid
    fn prompt_algorithm(&mut self, label: &str) -> ShellResult<Option<HashAlgorithm>> {
        let prompt = format!("{label}{ALGORITHM_PROMPT}");
        let input = self.prompt(Role::Accent, &prompt)?;

        match input.parse::<HashAlgorithm>() {
            Ok(algorithm) => Ok(Some(algorithm)),
            Err(err) => {
                log::debug!("Rejected algorithm input: {err}");
                self.invalid_choice()?;
                Ok(None)
            }
        }
    }

    /// Read a trimmed, lowercased answer that must be one of `valid`
    fn prompt_choice(
        &mut self,
        role: Role,
        prompt: &str,
        valid: &[&str],
    ) -> ShellResult<Option<String>> {
        let answer = self.prompt(role, prompt)?.trim().to_lowercase();
        if valid.contains(&answer.as_str()) {
            Ok(Some(answer))
        } else {
            self.invalid_choice()?;
            Ok(None)
        }
    }

    fn prompt(&mut self, role: Role, prompt: &str) -> ShellResult<String> {
        let painted = self.theme.paint(role, prompt).to_string();
        self.read_line(&painted)
    }

    fn wait_for_enter(&mut self, prompt: &str) -> ShellResult<()> {
        self.prompt(Role::Accent, prompt)?;
        Ok(())
    }

    fn invalid_choice(&mut self) -> ShellResult<()> {
        writeln!(
            self.output,
            "{}",
            self.theme.paint(Role::Error, "⚠ Invalid choice!")
        )?;
        Ok(())
    }

    fn field(&mut self, label: &str, value: &str) -> ShellResult<()> {
        writeln!(self.output, "{} {value}", self.theme.paint(Role::Info, label))?;
        Ok(())
    }

    fn progress(&mut self, duration: Duration) -> ShellResult<()> {
        let effects = self.settings.effects;
        effects.progress(&mut self.output, &self.theme, duration)?;
        Ok(())
    }

    /// Show `prompt` and read one line without its terminator
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD.
    fn read_line(&mut self, prompt: &str) -> ShellResult<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut raw = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut raw)
            .map_err(ShellError::Input)?;
        if read == 0 {
            return Err(ShellError::InputClosed);
        }
        if raw.ends_with(b"\n") {
            raw.pop();
            if raw.ends_with(b"\r") {
                raw.pop();
            }
        }

        let line = String::from_utf8_lossy(&raw).into_owned();
        if line.contains(char::REPLACEMENT_CHARACTER) {
            log::debug!("Input line contained invalid UTF-8");
        }
        Ok(line)
    }
}
