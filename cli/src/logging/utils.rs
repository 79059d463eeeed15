//! Path resolution, ANSI stripping, terminal width and timestamps.
use std::fs;
use std::path::PathBuf;

/// Strip ANSI CSI escape sequences from a string.
pub(super) fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\x1b' {
            out.push(c);
            continue;
        }
        if chars.next() == Some('[') {
            for inner in chars.by_ref() {
                if ('@'..='~').contains(&inner) {
                    break;
                }
            }
        }
    }
    out
}

/// Width of the attached terminal, else `COLUMNS`, else 80.
pub(super) fn terminal_columns() -> usize {
    if let Some((terminal_size::Width(w), _)) = terminal_size::terminal_size()
        && w > 0
    {
        return usize::from(w);
    }
    std::env::var("COLUMNS")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .filter(|&n| n > 0)
        .unwrap_or(80)
}

/// Shorten `text` to at most `max` characters, marking the cut with `…`.
pub(super) fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{kept}…")
}

/// `$XDG_CACHE_HOME/workstation/`, created on demand.
fn cache_dir() -> Option<PathBuf> {
    let base = std::env::var_os("XDG_CACHE_HOME")
        .filter(|v| !v.is_empty())
        .map_or_else(
            || {
                std::env::var_os("HOME")
                    .map_or_else(|| PathBuf::from("."), PathBuf::from)
                    .join(".cache")
            },
            PathBuf::from,
        );
    let dir = base.join("workstation");
    fs::create_dir_all(&dir).ok()?;
    Some(dir)
}

/// Log file for a subcommand, e.g. `~/.cache/workstation/install.log`.
pub(super) fn log_file_path(command: &str) -> Option<PathBuf> {
    Some(cache_dir()?.join(format!("{command}.log")))
}

/// Current UTC time as `YYYY-MM-DD HH:MM:SS`.
pub(super) fn format_utc_datetime() -> String {
    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Current UTC time as `HH:MM:SS`.
pub(super) fn format_utc_time() -> String {
    chrono::Utc::now().format("%H:%M:%S").to_string()
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn strip_ansi_removes_colors() {
        assert_eq!(strip_ansi("\x1b[31mERROR\x1b[0m boom"), "ERROR boom");
        assert_eq!(strip_ansi("\x1b[1;34m==>\x1b[0m \x1b[1mInstall\x1b[0m"), "==> Install");
        assert_eq!(strip_ansi("plain"), "plain");
        assert_eq!(strip_ansi(""), "");
    }

    #[test]
    fn strip_ansi_handles_cursor_sequences() {
        assert_eq!(strip_ansi("\r\x1b[Kdone"), "\rdone");
        assert_eq!(strip_ansi("\x1b[2;5Htext"), "text");
    }

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate("brew install jq", 40), "brew install jq");
    }

    #[test]
    fn truncate_marks_cut() {
        assert_eq!(truncate("abcdefghij", 5), "abcd…");
        assert_eq!(truncate("abcdefghij", 5).chars().count(), 5);
    }

    #[test]
    fn terminal_columns_is_positive() {
        assert!(terminal_columns() > 0);
    }

    #[test]
    fn timestamps_have_expected_shape() {
        let t = format_utc_time();
        assert_eq!(t.len(), 8);
        assert_eq!(&t[2..3], ":");
        let dt = format_utc_datetime();
        assert_eq!(dt.len(), 19);
        assert_eq!(&dt[10..11], " ");
    }
}
