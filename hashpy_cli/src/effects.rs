//! Cosmetic terminal effects
//!
//! Progress animation, slow-typed text and short pauses. None of these
//! influence what is computed; when disabled they print plain text or
//! nothing at all and return immediately.

use crate::theme::{Role, ThemeProfile};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

/// Number of blocks drawn by the progress animation
const PROGRESS_STEPS: u64 = 15;

/// Timing for the cosmetic effects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Effects {
    enabled: bool,
    typing_delay: Duration,
    progress_duration: Duration,
}

impl Default for Effects {
    fn default() -> Self {
        Self {
            enabled: true,
            typing_delay: Duration::from_millis(30),
            progress_duration: Duration::from_millis(800),
        }
    }
}

impl Effects {
    pub fn new(enabled: bool, typing_delay: Duration, progress_duration: Duration) -> Self {
        Self {
            enabled,
            typing_delay,
            progress_duration,
        }
    }

    /// Effects that never sleep or animate
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Duration of the hashing progress animation
    pub fn progress_duration(&self) -> Duration {
        self.progress_duration
    }

    /// Duration of the verification progress animation
    pub fn verify_duration(&self) -> Duration {
        self.progress_duration * 3 / 4
    }

    /// Draw the "Hashing in progress" bar over `duration`
    ///
    /// The bar is drawn straight to the terminal, so `out` is flushed first
    /// to keep earlier output in order.
    pub fn progress(
        &self,
        out: &mut impl Write,
        theme: &ThemeProfile,
        duration: Duration,
    ) -> io::Result<()> {
        if !self.enabled {
            return Ok(());
        }
        out.flush()?;

        let style = ProgressStyle::with_template("{msg} {bar:15} {prefix}")
            .map_err(io::Error::other)?
            .progress_chars("█ ");
        let bar = ProgressBar::with_draw_target(Some(PROGRESS_STEPS), ProgressDrawTarget::stdout())
            .with_style(style)
            .with_message(theme.paint(Role::Accent, "Hashing in progress").to_string());

        let step = duration / PROGRESS_STEPS as u32;
        for _ in 0..PROGRESS_STEPS {
            thread::sleep(step);
            bar.inc(1);
        }
        bar.set_prefix(theme.paint(Role::Success, "Done!").to_string());
        bar.finish();

        writeln!(out)
    }

    /// Print `text` one character at a time, then a newline
    pub fn slow_print(&self, out: &mut impl Write, text: &str) -> io::Result<()> {
        if !self.enabled {
            return writeln!(out, "{text}");
        }

        for (unit, visible) in typing_units(text) {
            out.write_all(unit.as_bytes())?;
            if visible {
                out.flush()?;
                thread::sleep(self.typing_delay);
            }
        }
        writeln!(out)
    }

    /// Sleep for `duration` when effects are on
    pub fn pause(&self, duration: Duration) {
        if self.enabled {
            thread::sleep(duration);
        }
    }
}

/// Split `text` into visible characters and whole ANSI escape sequences
///
/// Escape sequences are flagged `false` so they are written without delay.
fn typing_units(text: &str) -> Vec<(&str, bool)> {
    let mut units = Vec::new();
    let mut rest = text;
    while let Some(ch) = rest.chars().next() {
        let len = if ch == '\x1b' {
            escape_len(rest)
        } else {
            ch.len_utf8()
        };
        let (unit, tail) = rest.split_at(len);
        units.push((unit, ch != '\x1b'));
        rest = tail;
    }
    units
}

/// Length of the CSI sequence at the start of `text`
fn escape_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    if bytes.get(1) != Some(&b'[') {
        return 1;
    }
    bytes[2..]
        .iter()
        .position(|b| (0x40..=0x7e).contains(b))
        .map_or(text.len(), |end| end + 3)
}
