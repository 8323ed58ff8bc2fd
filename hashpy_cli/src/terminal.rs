//! Terminal detection and capability utilities

use dialoguer::console::Term;
use is_terminal::IsTerminal;
use std::env;
use std::io::{stdin, stdout};

/// Check if both ends of the session are attached to an interactive terminal
pub fn is_interactive() -> bool {
    if !stdout().is_terminal() || !stdin().is_terminal() {
        return false;
    }

    // CI runners sometimes allocate a TTY but nobody is typing
    if is_ci_environment() {
        return false;
    }

    if env::var("DEBIAN_FRONTEND").unwrap_or_default() == "noninteractive" {
        return false;
    }

    true
}

/// Check if the terminal supports ANSI escape codes for colours and progress bars
pub fn supports_ansi() -> bool {
    if !stdout().is_terminal() {
        return false;
    }

    if env::var_os("NO_COLOR").is_some() {
        return false;
    }

    term_supports_ansi(&env::var("TERM").unwrap_or_default())
}

fn term_supports_ansi(term: &str) -> bool {
    #[cfg(windows)]
    {
        // Modern Windows consoles handle ANSI even without TERM
        term != "dumb"
    }

    #[cfg(not(windows))]
    {
        !(term == "dumb" || term.is_empty())
    }
}

/// Clear the visible screen, logging rather than failing when it cannot
pub fn clear_screen() {
    if let Err(e) = Term::stdout().clear_screen() {
        log::debug!("Could not clear screen: {e}");
    }
}

const CI_VARS: [&str; 11] = [
    "CI",
    "CONTINUOUS_INTEGRATION",
    "JENKINS_URL",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "TRAVIS",
    "CIRCLECI",
    "BUILDKITE",
    "DRONE",
    "TEAMCITY_VERSION",
    "TF_BUILD", // Azure DevOps
];

/// Detect if running in a CI environment
fn is_ci_environment() -> bool {
    ci_detected(|var| env::var_os(var).is_some())
}

fn ci_detected(is_set: impl Fn(&str) -> bool) -> bool {
    CI_VARS.iter().any(|var| is_set(var))
}
