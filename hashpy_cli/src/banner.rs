//! Startup banner and quotes

use crate::theme::{Role, ThemeProfile};
use rand::seq::IndexedRandom;

pub const QUOTES: [&str; 4] = [
    "“Security is not a product, but a process.” – Bruce Schneier",
    "“The quieter you become, the more you can hear.” – Ram Dass",
    "“Hash it before they hack it.” – Unknown",
    "“Encryption is freedom in code.” – Anonymous",
];

/// Pick one of [`QUOTES`] at random
pub fn random_quote() -> &'static str {
    QUOTES
        .choose(&mut rand::rng())
        .copied()
        .unwrap_or(QUOTES[0])
}

/// Render the boxed banner followed by `quote`
pub fn render(theme: &ThemeProfile, quote: &str) -> String {
    let version = format!("Ultimate Edition v{}", env!("CARGO_PKG_VERSION"));
    let lines = [
        "╔══════════════════════════════════════════════════════════╗".to_string(),
        format!("║{:^58}║", "⚡ HASH_PY ⚡"),
        format!("║{version:^58}║"),
        "╠══════════════════════════════════════════════════════════╣".to_string(),
        format!("║  {:<56}║", "Modes    : Dark / Light"),
        format!("║  {:<56}║", "Hashes   : SHA256 | SHA512 | SHA1 | MD5"),
        "╚══════════════════════════════════════════════════════════╝".to_string(),
    ];

    let mut banner = String::from("\n");
    for line in lines {
        banner.push_str(&theme.paint(Role::Title, &line).to_string());
        banner.push('\n');
    }
    banner.push_str(&theme.paint(Role::Info, quote).to_string());
    banner.push('\n');
    banner
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_quote_is_from_list() {
        for _ in 0..20 {
            assert!(QUOTES.contains(&random_quote()));
        }
    }

    #[test]
    fn test_render_contains_title_and_quote() {
        colored::control::set_override(false);
        let banner = render(&ThemeProfile::dark(), QUOTES[2]);

        assert!(banner.contains("HASH_PY"));
        assert!(banner.contains(env!("CARGO_PKG_VERSION")));
        assert!(banner.contains("SHA256 | SHA512 | SHA1 | MD5"));
        assert!(banner.ends_with("“Hash it before they hack it.” – Unknown\n"));
    }

    #[test]
    fn test_box_lines_have_equal_width() {
        colored::control::set_override(false);
        let banner = render(&ThemeProfile::light(), QUOTES[0]);
        let widths: Vec<usize> = banner
            .lines()
            .filter(|l| l.starts_with('║') || l.starts_with('╔') || l.starts_with('╚'))
            .map(|l| l.chars().count())
            .collect();

        assert_eq!(widths.len(), 6);
        assert!(widths.iter().all(|w| *w == 60));
    }
}
